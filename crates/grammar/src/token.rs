// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Lexical rules of the case language.
//!
//! Every token parser skips leading trivia (whitespace and `//` line comments)
//! itself, so statement parsers are plain sequences of tokens.

use nom::IResult;
use nom::multi::many1;

use crate::error::Failure;

pub(crate) type PResult<'a, O> = IResult<&'a str, O, Failure<'a>>;

/// Skip whitespace and `//` comments
pub(crate) fn trivia(mut input: &str) -> &str {
    loop {
        input = input.trim_start();
        match input.strip_prefix("//") {
            Some(comment) => input = comment.find('\n').map_or("", |i| &comment[i + 1..]),
            None => return input,
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A case-insensitive keyword that is not the prefix of a longer word
pub(crate) fn keyword<'a>(word: &'static str) -> impl FnMut(&'a str) -> PResult<'a, &'a str> {
    move |input: &'a str| {
        let input = trivia(input);
        let len = word.len();
        match input.get(..len) {
            Some(head) if head.eq_ignore_ascii_case(word) && !input[len..].starts_with(is_word_char) => {
                Ok((&input[len..], head))
            }
            _ => Err(nom::Err::Error(Failure::expected(input, word))),
        }
    }
}

/// Text between matching `'` or `"` quotes, taken verbatim
pub(crate) fn quoted_text(input: &str) -> PResult<'_, String> {
    let input = trivia(input);
    let quote = match input.chars().next() {
        Some(c @ ('\'' | '"')) => c,
        _ => return Err(nom::Err::Error(Failure::expected(input, "quoted text"))),
    };

    let body = &input[1..];
    match body.find(quote) {
        Some(end) => Ok((&body[end + 1..], body[..end].to_string())),
        None => Err(nom::Err::Error(Failure::expected(
            &input[input.len()..],
            "closing quote",
        ))),
    }
}

/// Text between `{` and its matching `}`, trimmed; may span lines and nest braces
pub(crate) fn brace_text(input: &str) -> PResult<'_, String> {
    let input = trivia(input);
    if !input.starts_with('{') {
        return Err(nom::Err::Error(Failure::expected(input, "{")));
    }

    let mut depth = 0usize;
    for (i, c) in input.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok((&input[i + 1..], input[1..i].trim().to_string()));
                }
            }
            _ => {}
        }
    }

    Err(nom::Err::Error(Failure::expected(&input[input.len()..], "}")))
}

/// One or more quoted texts, read until no further quoted text follows
pub(crate) fn quoted_record_sequence(input: &str) -> PResult<'_, Vec<String>> {
    many1(quoted_text)(input)
}

/// A statement ends at `;`, at the next `case` keyword, or at the end of input
pub(crate) fn end_of_statement(input: &str) -> PResult<'_, ()> {
    let rest = trivia(input);
    if rest.is_empty() {
        return Ok((rest, ()));
    }
    if let Some(after) = rest.strip_prefix(';') {
        return Ok((after, ()));
    }
    if keyword("case")(rest).is_ok() {
        return Ok((rest, ()));
    }
    Err(nom::Err::Error(Failure::expected_any(
        rest,
        &[";", "case", "end of input"],
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivia_skips_comments() {
        assert_eq!(trivia("  // note\n  case"), "case");
        assert_eq!(trivia("// only a comment"), "");
        assert_eq!(trivia("\n\t case // trailing"), "case // trailing");
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        let (rest, word) = keyword("load")("  LoAd file").unwrap();
        assert_eq!(word, "LoAd");
        assert_eq!(rest, " file");
    }

    #[test]
    fn test_keyword_requires_word_boundary() {
        let err = keyword("left")(" leftover").unwrap_err();
        match err {
            nom::Err::Error(f) => {
                assert_eq!(f.input, "leftover");
                assert!(f.expected.contains("left"));
            }
            _ => panic!("Expected recoverable error"),
        }
        assert!(keyword("left")("left;").is_ok());
    }

    #[test]
    fn test_quoted_text() {
        assert_eq!(
            quoted_text(" 'Adventure Works' on").unwrap(),
            (" on", "Adventure Works".to_string())
        );
        assert_eq!(
            quoted_text("\"it's\"").unwrap(),
            ("", "it's".to_string())
        );
        assert_eq!(quoted_text("''").unwrap(), ("", String::new()));
    }

    #[test]
    fn test_quoted_text_unterminated() {
        match quoted_text("'abc").unwrap_err() {
            nom::Err::Error(f) => {
                assert_eq!(f.input, "");
                assert!(f.expected.contains("closing quote"));
            }
            _ => panic!("Expected recoverable error"),
        }
    }

    #[test]
    fn test_brace_text_multiline_and_nested() {
        let input = "{\n  select {[Measures].[Sales]} on 0\n  from [Cube]\n} on";
        let (rest, text) = brace_text(input).unwrap();
        assert_eq!(rest, " on");
        assert_eq!(text, "select {[Measures].[Sales]} on 0\n  from [Cube]");
    }

    #[test]
    fn test_brace_text_unbalanced() {
        assert!(brace_text("{ select {").is_err());
        assert!(brace_text("select").is_err());
    }

    #[test]
    fn test_quoted_record_sequence() {
        let (rest, values) = quoted_record_sequence(" 'x' \"y\"  'z'; next").unwrap();
        assert_eq!(values, vec!["x", "y", "z"]);
        assert_eq!(rest, "; next");
        assert!(quoted_record_sequence(" ;").is_err());
    }

    #[test]
    fn test_end_of_statement() {
        assert_eq!(end_of_statement("  ; case").unwrap().0, " case");
        assert_eq!(end_of_statement(" CASE scope").unwrap().0, "CASE scope");
        assert_eq!(end_of_statement("  ").unwrap().0, "");
        assert!(end_of_statement(" on 'k'").is_err());
    }
}
