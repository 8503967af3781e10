// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Case Actions
//!
//! This module represents a single `case ...` statement of the genbiL case language.
//!
//! ## Design
//!
//! Every statement form maps to exactly one [`Action`] variant. The set is closed:
//! the interpreter matches on it exhaustively, so adding a statement form is a
//! compile-time change everywhere an action is consumed.
//!
//! | Statement | Variant |
//! |---|---|
//! | `case load file 'x.csv'` | [`Action::Load`] with [`LoadSource::File`] |
//! | `case load query 'q.sql' on 'conn'` | [`Action::Load`] with [`LoadSource::QueryFile`] |
//! | `case load query { select 1 } on 'conn'` | [`Action::Load`] with [`LoadSource::QueryText`] |
//! | `case remove column 'a'` | [`Action::Remove`] |
//! | `case rename column 'a' into 'b'` | [`Action::Rename`] |
//! | `case move column 'a' to left` | [`Action::Move`] |
//! | `case filter on column 'a' values not like 'x%'` | [`Action::Filter`] |
//! | `case filter on distinct` | [`Action::FilterDistinct`] |
//! | `case scope 's'` | [`Action::Scope`] |
//! | `case cross 's1' with 's2' [on 'k']` | [`Action::Cross`] |
//! | `case save as 'out.csv'` | [`Action::Save`] |
//! | `case copy 's1' to 's2'` | [`Action::Copy`] |
//! | `case add column 'a' [values 'v']` | [`Action::Add`] |
//! | `case merge with 's'` | [`Action::Merge`] |
//!
//! ## Canonical Text
//!
//! [`Action`] implements `Display` and renders the canonical statement text. Parsing
//! the rendered text yields an equal action, as long as no literal contains both
//! quote characters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a `load` statement takes its table from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadSource {
    /// Tabular file read by the file reader collaborator
    File { path: String },

    /// Query text stored in a file, executed on a connection
    QueryFile {
        path: String,
        connection_string: String,
    },

    /// Inline query text, executed on a connection
    QueryText {
        text: String,
        connection_string: String,
    },
}

/// Direction of a single-step column move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Positional offset of the move: `-1` for left, `+1` for right
    pub fn delta(self) -> isize {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Comparison used by `filter on column`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Exact, case-sensitive string equality
    Equal,
    /// Glob-style pattern match (`%`/`*` and `_`/`?`)
    Like,
}

/// A single case-manipulation statement
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Replace the active table with one loaded from a source
    Load { source: LoadSource },

    /// Drop a column
    Remove { column: String },

    /// Rename a column in place
    Rename { old: String, new: String },

    /// Swap a column with its left or right neighbour
    Move { column: String, direction: Direction },

    /// Keep (or drop, when negated) rows whose column matches any of the values
    Filter {
        column: String,
        operator: Operator,
        values: Vec<String>,
        negate: bool,
    },

    /// Drop rows that duplicate an earlier row
    FilterDistinct,

    /// Snapshot the active table under a name
    Scope { name: String },

    /// Replace the active table with the product (or join) of two scopes
    Cross {
        first: String,
        second: String,
        join_column: Option<String>,
    },

    /// Write the active table to a file
    Save { path: String },

    /// Duplicate a stored scope under another name
    Copy { from: String, to: String },

    /// Append a column, optionally filled with a default value
    Add {
        column: String,
        default: Option<String>,
    },

    /// Append the rows of a stored scope to the active table
    Merge { scope: String },
}

impl Action {
    /// Statement form name, used to report where a program failed
    pub fn keyword(&self) -> &'static str {
        match self {
            Action::Load { .. } => "load",
            Action::Remove { .. } => "remove",
            Action::Rename { .. } => "rename",
            Action::Move { .. } => "move",
            Action::Filter { .. } => "filter",
            Action::FilterDistinct => "filter distinct",
            Action::Scope { .. } => "scope",
            Action::Cross { .. } => "cross",
            Action::Save { .. } => "save",
            Action::Copy { .. } => "copy",
            Action::Add { .. } => "add",
            Action::Merge { .. } => "merge",
        }
    }

    /// Whether executing this action touches a collaborator outside the process
    pub fn performs_io(&self) -> bool {
        matches!(self, Action::Load { .. } | Action::Save { .. })
    }

    /// Scope names this action reads from the scope store
    pub fn scope_reads(&self) -> Vec<&str> {
        match self {
            Action::Cross { first, second, .. } => vec![first.as_str(), second.as_str()],
            Action::Copy { from, .. } => vec![from.as_str()],
            Action::Merge { scope } => vec![scope.as_str()],
            _ => Vec::new(),
        }
    }

    /// Scope name this action writes to the scope store
    pub fn scope_write(&self) -> Option<&str> {
        match self {
            Action::Scope { name } => Some(name),
            Action::Copy { to, .. } => Some(to),
            _ => None,
        }
    }
}

/// Quote a literal with whichever quote character it does not contain
fn quoted(text: &str) -> String {
    if text.contains('\'') {
        format!("\"{}\"", text)
    } else {
        format!("'{}'", text)
    }
}

impl fmt::Display for LoadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadSource::File { path } => write!(f, "file {}", quoted(path)),
            LoadSource::QueryFile {
                path,
                connection_string,
            } => write!(f, "query {} on {}", quoted(path), quoted(connection_string)),
            LoadSource::QueryText {
                text,
                connection_string,
            } => write!(f, "query {{ {} }} on {}", text, quoted(connection_string)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Equal => write!(f, "equal"),
            Operator::Like => write!(f, "like"),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "case ")?;
        match self {
            Action::Load { source } => write!(f, "load {}", source),
            Action::Remove { column } => write!(f, "remove column {}", quoted(column)),
            Action::Rename { old, new } => {
                write!(f, "rename column {} into {}", quoted(old), quoted(new))
            }
            Action::Move { column, direction } => {
                write!(f, "move column {} to {}", quoted(column), direction)
            }
            Action::Filter {
                column,
                operator,
                values,
                negate,
            } => {
                write!(f, "filter on column {} values ", quoted(column))?;
                if *negate {
                    write!(f, "not ")?;
                }
                write!(f, "{}", operator)?;
                for value in values {
                    write!(f, " {}", quoted(value))?;
                }
                Ok(())
            }
            Action::FilterDistinct => write!(f, "filter on distinct"),
            Action::Scope { name } => write!(f, "scope {}", quoted(name)),
            Action::Cross {
                first,
                second,
                join_column,
            } => {
                write!(f, "cross {} with {}", quoted(first), quoted(second))?;
                if let Some(column) = join_column {
                    write!(f, " on {}", quoted(column))?;
                }
                Ok(())
            }
            Action::Save { path } => write!(f, "save as {}", quoted(path)),
            Action::Copy { from, to } => write!(f, "copy {} to {}", quoted(from), quoted(to)),
            Action::Add { column, default } => {
                write!(f, "add column {}", quoted(column))?;
                if let Some(value) = default {
                    write!(f, " values {}", quoted(value))?;
                }
                Ok(())
            }
            Action::Merge { scope } => write!(f, "merge with {}", quoted(scope)),
        }
    }
}
