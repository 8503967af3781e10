// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Error types for parsing
//!
//! Parsers report failures through [`Failure`], a nom error that remembers where it
//! stopped and which tokens would have been accepted there. When ordered
//! alternatives all fail, the failure that got furthest into the input wins, and
//! failures at the same position pool their expected tokens. The public
//! [`SyntaxError`] is built from the final failure.

use std::collections::BTreeSet;

use nom::error::{ErrorKind, ParseError};
use thiserror::Error;

/// Internal nom error: remaining input at the failure point plus expected tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure<'a> {
    pub(crate) input: &'a str,
    pub(crate) expected: BTreeSet<&'static str>,
}

impl<'a> Failure<'a> {
    pub(crate) fn expected(input: &'a str, token: &'static str) -> Self {
        Self {
            input,
            expected: BTreeSet::from([token]),
        }
    }

    pub(crate) fn expected_any(input: &'a str, tokens: &[&'static str]) -> Self {
        Self {
            input,
            expected: tokens.iter().copied().collect(),
        }
    }
}

impl<'a> ParseError<&'a str> for Failure<'a> {
    fn from_error_kind(input: &'a str, _kind: ErrorKind) -> Self {
        Self {
            input,
            expected: BTreeSet::new(),
        }
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }

    fn or(self, other: Self) -> Self {
        // Less remaining input means the parser got further
        match self.input.len().cmp(&other.input.len()) {
            std::cmp::Ordering::Less => self,
            std::cmp::Ordering::Greater => other,
            std::cmp::Ordering::Equal => {
                let mut merged = self;
                merged.expected.extend(other.expected);
                merged
            }
        }
    }
}

/// A statement that does not match any form of the case language
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Syntax error in statement {} at line {line}, column {column}: expected {}, found {}",
    .statement + 1,
    join_expected(.expected),
    describe_found(.found)
)]
pub struct SyntaxError {
    /// Zero-based index of the statement being parsed
    pub statement: usize,
    /// Byte offset of the failure in the source
    pub offset: usize,
    /// One-based line of the failure
    pub line: usize,
    /// One-based column (in characters) of the failure
    pub column: usize,
    /// Tokens accepted at the failure point, sorted
    pub expected: Vec<String>,
    /// Source text at the failure point, empty at end of input
    pub found: String,
}

impl SyntaxError {
    pub(crate) fn from_failure(source: &str, statement: usize, failure: Failure<'_>) -> Self {
        let offset = source.len() - failure.input.len();
        let (line, column) = line_column(source, offset);
        let found = failure
            .input
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .chars()
            .take(24)
            .collect();

        Self {
            statement,
            offset,
            line,
            column,
            expected: failure.expected.iter().map(|s| s.to_string()).collect(),
            found,
        }
    }

    /// Whether the failure is at the end of the input
    pub fn at_end_of_input(&self) -> bool {
        self.found.is_empty()
    }
}

fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

fn join_expected(expected: &[String]) -> String {
    match expected {
        [] => "a case statement".to_string(),
        [single] => format!("'{}'", single),
        many => format!(
            "one of {}",
            many.iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

fn describe_found(found: &str) -> String {
    if found.is_empty() {
        "end of input".to_string()
    } else {
        format!("'{}'", found)
    }
}
