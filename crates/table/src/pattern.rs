// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details
//
//! Value matchers used by `filter on column`.
//!
//! `like` patterns are globs over the whole cell value: `%` and `*` match any run
//! of characters (including none), `_` and `?` match exactly one character.
//! Everything else matches literally and case-sensitively.

use genbil_ir::Operator;
use regex::Regex;

use crate::error::{SemanticError, SemanticResult};

/// A compiled matcher for one filter value
#[derive(Debug, Clone)]
pub enum ValueMatcher {
    Equal(String),
    Like(Regex),
}

impl ValueMatcher {
    pub fn new(operator: Operator, value: &str) -> SemanticResult<Self> {
        match operator {
            Operator::Equal => Ok(ValueMatcher::Equal(value.to_string())),
            Operator::Like => like_regex(value).map(ValueMatcher::Like),
        }
    }

    pub fn is_match(&self, cell: &str) -> bool {
        match self {
            ValueMatcher::Equal(value) => cell == value,
            ValueMatcher::Like(regex) => regex.is_match(cell),
        }
    }
}

fn like_regex(pattern: &str) -> SemanticResult<Regex> {
    let mut source = String::with_capacity(pattern.len() + 8);
    source.push_str("(?s)^");
    for c in pattern.chars() {
        match c {
            '%' | '*' => source.push_str(".*"),
            '_' | '?' => source.push('.'),
            other => source.push_str(&regex::escape(other.encode_utf8(&mut [0; 4]))),
        }
    }
    source.push('$');

    Regex::new(&source).map_err(|e| SemanticError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}
