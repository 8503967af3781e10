// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Static query runners
//!
//! Query runners that never leave the process.
//!
//! - [`StaticQueryRunner`] answers from canned result sets, for playgrounds and
//!   tests without a real data source.
//! - [`UnavailableQueryRunner`] refuses every query. The interpreter uses it when
//!   no runner is configured, so a script that loads from a query fails with a
//!   clear error instead of silently producing nothing.

use async_trait::async_trait;
use std::collections::HashMap;

use genbil_table::Table;

use crate::r#trait::QueryRunner;
use crate::{DataSourceError, DataSourceResult};

/// Query runner with predefined result sets, keyed by trimmed query text
#[derive(Debug, Clone, Default)]
pub struct StaticQueryRunner {
    results: HashMap<String, Table>,
}

impl StaticQueryRunner {
    /// Create a runner with no registered queries
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the result of `query`
    pub fn with_result(mut self, query: &str, table: Table) -> Self {
        self.insert(query, table);
        self
    }

    pub fn insert(&mut self, query: &str, table: Table) {
        self.results.insert(query.trim().to_string(), table);
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[async_trait]
impl QueryRunner for StaticQueryRunner {
    async fn execute(&self, connection_string: &str, query: &str) -> DataSourceResult<Table> {
        if connection_string.trim().is_empty() {
            return Err(DataSourceError::ConnectionFailed(
                "connection string is empty".to_string(),
            ));
        }

        self.results.get(query.trim()).cloned().ok_or_else(|| {
            DataSourceError::QueryFailed(format!(
                "no result registered for query '{}'",
                query.trim()
            ))
        })
    }
}

/// Query runner used when none is configured; every query fails
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableQueryRunner;

#[async_trait]
impl QueryRunner for UnavailableQueryRunner {
    async fn execute(&self, _connection_string: &str, _query: &str) -> DataSourceResult<Table> {
        Err(DataSourceError::NotSupported(
            "no query runner is configured".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn years() -> Table {
        Table::new(
            ["year"],
            vec![vec!["2024".to_string()], vec!["2025".to_string()]],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_static_runner_returns_registered_result() {
        let runner = StaticQueryRunner::new().with_result("select year from calendar", years());
        let table = runner
            .execute("Data Source=.", "\n  select year from calendar  \n")
            .await
            .unwrap();
        assert_eq!(table, years());
    }

    #[tokio::test]
    async fn test_static_runner_unknown_query() {
        let runner = StaticQueryRunner::new();
        let result = runner.execute("Data Source=.", "select 1").await;
        assert!(matches!(result, Err(DataSourceError::QueryFailed(_))));
    }

    #[tokio::test]
    async fn test_static_runner_empty_connection() {
        let runner = StaticQueryRunner::new().with_result("select 1", years());
        let result = runner.execute("  ", "select 1").await;
        assert!(matches!(result, Err(DataSourceError::ConnectionFailed(_))));
    }

    #[tokio::test]
    async fn test_unavailable_runner() {
        let result = UnavailableQueryRunner.execute("Data Source=.", "select 1").await;
        assert!(matches!(result, Err(DataSourceError::NotSupported(_))));
    }
}
