// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Mock query runner for testing
//!
//! Answers queries from canned results and records every call, so tests can
//! check which query text (after template rendering) reached the data source.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use genbil_source::{DataSourceError, DataSourceResult, QueryRunner};
use genbil_table::Table;

/// One call made to a [`MockQueryRunner`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCall {
    pub connection_string: String,
    pub query: String,
}

/// In-memory query runner that records its calls
///
/// Clones share the call log, so a clone can be handed to the interpreter while
/// the test keeps the original for inspection.
#[derive(Debug, Clone, Default)]
pub struct MockQueryRunner {
    results: HashMap<String, Table>,
    failure: Option<DataSourceError>,
    calls: Arc<Mutex<Vec<QueryCall>>>,
}

impl MockQueryRunner {
    /// Create a runner that fails every query with `QueryFailed`
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `query` (compared after trimming) with `table`
    pub fn with_result(mut self, query: &str, table: Table) -> Self {
        self.results.insert(query.trim().to_string(), table);
        self
    }

    /// Fail every query with `error`
    pub fn failing(mut self, error: DataSourceError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Calls made so far, oldest first
    pub fn calls(&self) -> Vec<QueryCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[async_trait::async_trait]
impl QueryRunner for MockQueryRunner {
    async fn execute(&self, connection_string: &str, query: &str) -> DataSourceResult<Table> {
        tracing::trace!(connection_string, query, "mock query");
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(QueryCall {
                connection_string: connection_string.to_string(),
                query: query.to_string(),
            });

        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.results
            .get(query.trim())
            .cloned()
            .ok_or_else(|| DataSourceError::QueryFailed(format!("unexpected query '{}'", query)))
    }
}
