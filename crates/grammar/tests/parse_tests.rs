// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Integration tests for the genbiL grammar

use genbil_grammar::{parse_program, parse_statement};
use genbil_ir::{Action, Direction, LoadSource, Operator};

fn s(text: &str) -> String {
    text.to_string()
}

#[test]
fn test_every_statement_form() {
    let cases = vec![
        (
            r#"Case Load File "cases.csv""#,
            Action::Load {
                source: LoadSource::File { path: s("cases.csv") },
            },
        ),
        (
            r#"Case Load Query "query.sql" On "Data Source=.;Initial Catalog=AW""#,
            Action::Load {
                source: LoadSource::QueryFile {
                    path: s("query.sql"),
                    connection_string: s("Data Source=.;Initial Catalog=AW"),
                },
            },
        ),
        (
            r#"Case Load Query { select * from [Product] } On "conn""#,
            Action::Load {
                source: LoadSource::QueryText {
                    text: s("select * from [Product]"),
                    connection_string: s("conn"),
                },
            },
        ),
        (
            r#"Case Remove Column "X""#,
            Action::Remove { column: s("X") },
        ),
        (
            r#"Case Rename Column "old" Into "new""#,
            Action::Rename {
                old: s("old"),
                new: s("new"),
            },
        ),
        (
            r#"Case Move Column "B" To Left"#,
            Action::Move {
                column: s("B"),
                direction: Direction::Left,
            },
        ),
        (
            r#"Case Move Column "B" To Right"#,
            Action::Move {
                column: s("B"),
                direction: Direction::Right,
            },
        ),
        (
            r#"Case Filter On Column "v" Values Equal "x" "y""#,
            Action::Filter {
                column: s("v"),
                operator: Operator::Equal,
                values: vec![s("x"), s("y")],
                negate: false,
            },
        ),
        (
            r#"Case Filter On Column "v" Values Not Like "x%""#,
            Action::Filter {
                column: s("v"),
                operator: Operator::Like,
                values: vec![s("x%")],
                negate: true,
            },
        ),
        (r#"Case Filter On Distinct"#, Action::FilterDistinct),
        (r#"Case Scope "axis""#, Action::Scope { name: s("axis") }),
        (
            r#"Case Cross "a" With "b""#,
            Action::Cross {
                first: s("a"),
                second: s("b"),
                join_column: None,
            },
        ),
        (
            r#"Case Cross "a" With "b" On "k""#,
            Action::Cross {
                first: s("a"),
                second: s("b"),
                join_column: Some(s("k")),
            },
        ),
        (
            r#"Case Save As "out.csv""#,
            Action::Save { path: s("out.csv") },
        ),
        (
            r#"Case Copy "from" To "to""#,
            Action::Copy {
                from: s("from"),
                to: s("to"),
            },
        ),
        (
            r#"Case Add Column "c""#,
            Action::Add {
                column: s("c"),
                default: None,
            },
        ),
        (
            r#"Case Add Column "c" Values "d""#,
            Action::Add {
                column: s("c"),
                default: Some(s("d")),
            },
        ),
        (
            r#"Case Merge With "other""#,
            Action::Merge { scope: s("other") },
        ),
    ];

    for (source, expected) in cases {
        let action = parse_statement(source)
            .unwrap_or_else(|e| panic!("Failed to parse {source:?}: {e}"));
        assert_eq!(action, expected, "for {source:?}");
    }
}

#[test]
fn test_display_reparses_to_same_action() {
    let actions = vec![
        Action::Load {
            source: LoadSource::QueryText {
                text: s("select {[Measures].[Sales]} on 0 from [Cube]"),
                connection_string: s("Provider=MSOLAP"),
            },
        },
        Action::Rename {
            old: s("it's"),
            new: s("plain"),
        },
        Action::Filter {
            column: s("v"),
            operator: Operator::Like,
            values: vec![s("a_"), s("%b")],
            negate: true,
        },
        Action::FilterDistinct,
        Action::Cross {
            first: s("a"),
            second: s("b"),
            join_column: Some(s("k")),
        },
        Action::Add {
            column: s("c"),
            default: Some(s("")),
        },
    ];

    for action in actions {
        let text = action.to_string();
        assert_eq!(parse_statement(&text).unwrap(), action, "for {text:?}");
    }
}

#[test]
fn test_keywords_are_case_insensitive() {
    let upper = parse_statement("CASE MOVE COLUMN 'b' TO LEFT").unwrap();
    let lower = parse_statement("case move column 'b' to left").unwrap();
    assert_eq!(upper, lower);
}

#[test]
fn test_filter_distinct_without_on() {
    assert_eq!(
        parse_statement("case filter distinct").unwrap(),
        Action::FilterDistinct
    );
}

#[test]
fn test_quoted_text_is_verbatim() {
    let action = parse_statement("case scope '  Mixed Case; case '").unwrap();
    assert_eq!(
        action,
        Action::Scope {
            name: s("  Mixed Case; case ")
        }
    );
}

#[test]
fn test_multiline_inline_query() {
    let source = "case load query\n{\n    select\n        [Name]\n    from [Product]\n}\non 'conn';";
    match parse_statement(source).unwrap() {
        Action::Load {
            source: LoadSource::QueryText { text, .. },
        } => assert_eq!(text, "select\n        [Name]\n    from [Product]"),
        other => panic!("Expected inline query, got {other:?}"),
    }
}

#[test]
fn test_program_with_separators_and_comments() {
    let source = r#"
        // build the product axis
        case load file 'products.csv';
        case scope 'products';;

        case load file 'years.csv'
        case scope 'years' // no separator needed before the next case
        case cross 'products' with 'years';
        case save as 'out.csv'
    "#;

    let program = parse_program(source).unwrap();
    let keywords: Vec<_> = program.iter().map(Action::keyword).collect();
    assert_eq!(
        keywords,
        vec!["load", "scope", "load", "scope", "cross", "save"]
    );
}

#[test]
fn test_empty_program() {
    assert!(parse_program("").unwrap().is_empty());
    assert!(parse_program("  // nothing here\n ; ").unwrap().is_empty());
}

#[test]
fn test_longer_form_reports_expected_tokens() {
    let err = parse_statement("case add column 'x' value 'y'").unwrap_err();

    assert_eq!(err.statement, 0);
    assert_eq!(err.offset, 20);
    assert_eq!(err.line, 1);
    assert_eq!(err.column, 21);
    assert_eq!(err.found, "value");
    assert_eq!(err.expected, vec![";", "case", "end of input", "values"]);
}

#[test]
fn test_unknown_statement_lists_every_form() {
    let err = parse_program("case scope 'a';\ncase frob 'x'").unwrap_err();

    assert_eq!(err.statement, 1);
    assert_eq!(err.line, 2);
    assert_eq!(err.column, 6);
    assert_eq!(err.found, "frob");
    assert_eq!(
        err.expected,
        vec![
            "add", "copy", "cross", "filter", "load", "merge", "move", "remove", "rename",
            "save", "scope"
        ]
    );
}

#[test]
fn test_missing_case_keyword() {
    let err = parse_program("scope 'a'").unwrap_err();
    assert_eq!(err.offset, 0);
    assert_eq!(err.expected, vec!["case"]);
}

#[test]
fn test_truncated_statement() {
    let err = parse_program("case cross 'a' with").unwrap_err();
    assert!(err.at_end_of_input());
    assert_eq!(err.expected, vec!["quoted text"]);
    assert!(err.to_string().contains("found end of input"));
}

#[test]
fn test_direction_needs_word_boundary() {
    let err = parse_statement("case move column 'B' to Leftover").unwrap_err();
    assert_eq!(err.expected, vec!["left", "right"]);
    assert_eq!(err.found, "Leftover");
}

#[test]
fn test_filter_needs_a_value() {
    let err = parse_statement("case filter on column 'v' values equal").unwrap_err();
    assert!(err.at_end_of_input());
    assert_eq!(err.expected, vec!["quoted text"]);
}

#[test]
fn test_parse_is_atomic() {
    // one bad statement rejects the whole program
    assert!(parse_program("case scope 'a'; case remove column; case scope 'b'").is_err());
}

#[test]
fn test_parse_statement_rejects_trailing_statement() {
    assert!(parse_statement("case scope 'a';").is_ok());

    let err = parse_statement("case scope 'a'; case scope 'b'").unwrap_err();
    assert_eq!(err.expected, vec!["end of input"]);
    assert_eq!(err.found, "case");
}
