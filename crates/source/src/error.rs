// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Error types for data sources
//!
//! This module defines the errors reported by table readers, writers, query
//! runners and template engines.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for data source operations
pub type DataSourceResult<T> = Result<T, DataSourceError>;

/// Errors that can occur while loading or saving a case set
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
pub enum DataSourceError {
    /// A table file could not be read or decoded
    #[error("Failed to read table from '{path}': {reason}")]
    ReadFailed { path: String, reason: String },

    /// A table file could not be written
    #[error("Failed to write table to '{path}': {reason}")]
    WriteFailed { path: String, reason: String },

    /// Failed to connect to the data source
    #[error("Failed to connect to data source: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query execution failed: {0}")]
    QueryFailed(String),

    /// Query execution timed out
    #[error("Query timed out after {0}s")]
    QueryTimeout(u64),

    /// A template placeholder names a variable with no value
    #[error("Template variable '{0}' is not defined")]
    UndefinedVariable(String),

    /// The source returned data that is not a valid case set
    #[error("Invalid table: {0}")]
    InvalidTable(String),

    /// The requested operation is not supported by this collaborator
    #[error("Feature not supported: {0}")]
    NotSupported(String),
}

impl DataSourceError {
    pub(crate) fn read_failed(path: impl ToString, reason: impl ToString) -> Self {
        Self::ReadFailed {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn write_failed(path: impl ToString, reason: impl ToString) -> Self {
        Self::WriteFailed {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }
}
