// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Collaborator traits
//!
//! The interpreter never touches files, databases or templates itself. It goes
//! through the four traits defined here, so any of them can be replaced by a test
//! double or by a real driver living outside this workspace.

use std::collections::BTreeMap;
use std::path::Path;

use genbil_table::Table;

use crate::error::DataSourceResult;

/// Reads a case set from a tabular file whose first record holds the headers
pub trait FileTableReader: Send + Sync {
    /// Read the table stored at `path`
    ///
    /// # Errors
    ///
    /// Returns `DataSourceError::ReadFailed` if the file cannot be read or decoded.
    /// Returns `DataSourceError::InvalidTable` if the content breaks a table invariant.
    fn read_table(&self, path: &Path) -> DataSourceResult<Table>;
}

/// Writes a case set in a format its matching [`FileTableReader`] reads back
pub trait FileTableWriter: Send + Sync {
    /// Write `table` to `path`, replacing any existing file
    ///
    /// # Errors
    ///
    /// Returns `DataSourceError::WriteFailed` if the file cannot be written.
    fn write_table(&self, path: &Path, table: &Table) -> DataSourceResult<()>;
}

/// Executes query text against an external data source
///
/// This is the only collaborator that may block on the network. Timeouts and
/// retries belong to the implementation; errors are passed through unchanged.
///
/// # Examples
///
/// ```rust,ignore
/// use genbil_source::{DataSourceResult, QueryRunner};
///
/// async fn count_rows(runner: &dyn QueryRunner) -> DataSourceResult<usize> {
///     let table = runner.execute("Data Source=.", "select * from cases").await?;
///     Ok(table.row_count())
/// }
/// ```
#[async_trait::async_trait]
pub trait QueryRunner: Send + Sync {
    /// Run `query` on the data source described by `connection_string`
    ///
    /// The result set's columns become the table's columns.
    ///
    /// # Errors
    ///
    /// Returns `DataSourceError::ConnectionFailed` if the data source is unreachable.
    /// Returns `DataSourceError::QueryFailed` or `DataSourceError::QueryTimeout`
    /// if the query does not complete.
    async fn execute(&self, connection_string: &str, query: &str) -> DataSourceResult<Table>;
}

/// Substitutes named placeholders in query text
pub trait TemplateEngine: Send + Sync {
    /// Render `template` with the given variable values
    ///
    /// # Errors
    ///
    /// Returns `DataSourceError::UndefinedVariable` for a placeholder with no value.
    fn render(
        &self,
        template: &str,
        variables: &BTreeMap<String, String>,
    ) -> DataSourceResult<String>;
}
