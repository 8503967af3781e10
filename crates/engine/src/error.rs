// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Error types for program execution
//!
//! Every failure aborts the program. The error names the action that failed by
//! its zero-based index and its canonical text, and wraps the underlying cause.

use genbil_grammar::SyntaxError;
use genbil_ir::Action;
use genbil_source::DataSourceError;
use genbil_table::SemanticError;
use thiserror::Error;

/// Result type alias for program execution
pub type ExecutionResult<T> = Result<T, ExecutionError>;

/// Failure of one action of a running program
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExecutionError {
    /// The action does not fit the current tables or scopes
    #[error("Action {} `{action}` failed: {source}", .index + 1)]
    Semantic {
        index: usize,
        action: String,
        source: SemanticError,
    },

    /// A collaborator failed to load or save a table
    #[error("Action {} `{action}` failed: {source}", .index + 1)]
    DataSource {
        index: usize,
        action: String,
        source: DataSourceError,
    },
}

impl ExecutionError {
    /// Zero-based index of the failed action
    pub fn index(&self) -> usize {
        match self {
            ExecutionError::Semantic { index, .. } | ExecutionError::DataSource { index, .. } => {
                *index
            }
        }
    }

    /// Canonical text of the failed action
    pub fn action(&self) -> &str {
        match self {
            ExecutionError::Semantic { action, .. } | ExecutionError::DataSource { action, .. } => {
                action
            }
        }
    }

    pub fn semantic(&self) -> Option<&SemanticError> {
        match self {
            ExecutionError::Semantic { source, .. } => Some(source),
            ExecutionError::DataSource { .. } => None,
        }
    }

    pub fn data_source(&self) -> Option<&DataSourceError> {
        match self {
            ExecutionError::DataSource { source, .. } => Some(source),
            ExecutionError::Semantic { .. } => None,
        }
    }
}

/// Cause of a failed step, before it is tied to a position in the program
#[derive(Debug)]
pub(crate) enum StepError {
    Semantic(SemanticError),
    DataSource(DataSourceError),
}

impl StepError {
    pub(crate) fn at(self, index: usize, action: &Action) -> ExecutionError {
        let action = action.to_string();
        match self {
            StepError::Semantic(source) => ExecutionError::Semantic {
                index,
                action,
                source,
            },
            StepError::DataSource(source) => ExecutionError::DataSource {
                index,
                action,
                source,
            },
        }
    }
}

impl From<SemanticError> for StepError {
    fn from(error: SemanticError) -> Self {
        StepError::Semantic(error)
    }
}

impl From<DataSourceError> for StepError {
    fn from(error: DataSourceError) -> Self {
        StepError::DataSource(error)
    }
}

/// Any failure of a script: it does not parse, or one of its actions fails
#[derive(Debug, Error)]
pub enum GenbilError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),
}
