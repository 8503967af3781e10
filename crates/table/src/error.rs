// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details
//
//! # Error types for table transformations
//!
//! This module defines the semantic errors raised when an action refers to a
//! column or scope that does not fit the current tables.

use thiserror::Error;

/// Result type alias for table operations
pub type SemanticResult<T> = Result<T, SemanticError>;

/// Errors that can occur while transforming tables or reading the scope store
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SemanticError {
    /// Column not present in the table
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Column name already used in the table
    #[error("Column already exists: {0}")]
    ColumnAlreadyExists(String),

    /// No table stored under this scope name
    #[error("Scope not found: {0}")]
    ScopeNotFound(String),

    /// Merged tables do not share the same column set
    #[error("Column set mismatch: expected {expected:?}, found {found:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// Both sides of a cross carry a column with this name
    #[error("Column '{0}' exists on both sides of the cross")]
    ColumnCollision(String),

    /// A row does not have one cell per column
    #[error("Row {row} has {found} cells but the table has {expected} columns")]
    RowWidthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A like pattern could not be compiled
    #[error("Invalid like pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}
