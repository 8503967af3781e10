// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # genbiL grammar
//!
//! Parser for the genbiL case language. Source text becomes a
//! [`Program`](genbil_ir::Program) of [`Action`](genbil_ir::Action)s, or a
//! [`SyntaxError`] pointing at the first statement that matches no form.
//!
//! ## Language
//!
//! - Every statement starts with the keyword `case`.
//! - Statements end at `;`, at the next `case`, or at the end of input.
//! - Keywords are case-insensitive. Quoted text uses `'` or `"` and is taken
//!   verbatim. Inline queries go between `{` and `}` and may span lines.
//! - `//` starts a comment that runs to the end of the line.
//!
//! ## Usage
//!
//! ```rust
//! use genbil_grammar::parse_program;
//! use genbil_ir::Action;
//!
//! let program = parse_program(
//!     "case load file 'cases.csv';
//!      case filter on column 'year' values equal '2024';",
//! )
//! .unwrap();
//!
//! assert_eq!(program.len(), 2);
//! assert!(matches!(program.get(1), Some(Action::Filter { .. })));
//! ```
//!
//! Parsing is all or nothing: a program with one bad statement yields no actions.

mod case;
mod error;
mod token;

use genbil_ir::{Action, Program};

pub use error::SyntaxError;

use error::Failure;
use token::trivia;

/// Parse a whole script into a program
///
/// # Errors
///
/// Returns the `SyntaxError` of the first statement that matches no form.
pub fn parse_program(source: &str) -> Result<Program, SyntaxError> {
    let mut program = Program::new();
    let mut rest = trivia(source);

    loop {
        while let Some(after) = rest.strip_prefix(';') {
            rest = trivia(after);
        }
        if rest.is_empty() {
            break;
        }

        let (after, action) = case::statement(rest)
            .map_err(|e| to_syntax_error(source, program.len(), e))?;
        tracing::trace!(index = program.len(), action = action.keyword(), "parsed statement");
        program.push(action);
        rest = trivia(after);
    }

    tracing::debug!(statements = program.len(), "parsed program");
    Ok(program)
}

/// Parse exactly one statement
///
/// A trailing `;` is allowed; anything after it is an error.
pub fn parse_statement(source: &str) -> Result<Action, SyntaxError> {
    let (after, action) = case::statement(trivia(source))
        .map_err(|e| to_syntax_error(source, 0, e))?;

    let rest = trivia(after);
    if !rest.is_empty() {
        return Err(SyntaxError::from_failure(
            source,
            0,
            Failure::expected(rest, "end of input"),
        ));
    }
    Ok(action)
}

fn to_syntax_error(source: &str, statement: usize, error: nom::Err<Failure<'_>>) -> SyntaxError {
    let failure = match error {
        nom::Err::Error(f) | nom::Err::Failure(f) => f,
        // token parsers only work on complete input
        nom::Err::Incomplete(_) => Failure::expected(&source[source.len()..], "case"),
    };
    SyntaxError::from_failure(source, statement, failure)
}
