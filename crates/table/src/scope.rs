// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details
//
//! # Scope store
//!
//! This module defines the registry of named table snapshots consulted by
//! `scope`, `copy`, `cross` and `merge` statements.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{SemanticError, SemanticResult};
use crate::table::Table;

/// Named snapshots of case sets
///
/// Every stored table is owned by the store. Later changes to the active table
/// never reach a snapshot, and overwriting a name replaces its snapshot whole.
/// Names are compared exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeStore {
    scopes: HashMap<String, Table>,
}

impl ScopeStore {
    /// Create an empty scope store
    ///
    /// # Examples
    ///
    /// ```
    /// use genbil_table::ScopeStore;
    ///
    /// let store = ScopeStore::new();
    /// assert!(store.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a snapshot under `name`, returning the snapshot it replaced
    pub fn insert(&mut self, name: impl Into<String>, table: Table) -> Option<Table> {
        let name = name.into();
        tracing::trace!(scope = %name, rows = table.row_count(), "store scope");
        self.scopes.insert(name, table)
    }

    /// Get the snapshot stored under `name`
    ///
    /// # Errors
    ///
    /// Returns `SemanticError::ScopeNotFound` if nothing is stored under `name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use genbil_table::{ScopeStore, SemanticError, Table};
    ///
    /// let mut store = ScopeStore::new();
    /// store.insert("axis", Table::with_columns(["x"]).unwrap());
    ///
    /// assert_eq!(store.get("axis").unwrap().column_names(), vec!["x"]);
    /// assert!(matches!(store.get("other"), Err(SemanticError::ScopeNotFound(_))));
    /// ```
    pub fn get(&self, name: &str) -> SemanticResult<&Table> {
        self.scopes
            .get(name)
            .ok_or_else(|| SemanticError::ScopeNotFound(name.to_string()))
    }

    /// Duplicate the snapshot at `from` under `to`
    pub fn copy(&mut self, from: &str, to: impl Into<String>) -> SemanticResult<()> {
        let table = self.get(from)?.clone();
        self.insert(to, table);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.scopes.contains_key(name)
    }

    /// Stored scope names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.scopes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}
