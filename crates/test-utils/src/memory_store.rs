// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! In-memory table files
//!
//! [`MemoryTableStore`] implements both file collaborators over a shared map, so
//! interpreter tests can load and save without touching the disk.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use genbil_source::{DataSourceError, DataSourceResult, FileTableReader, FileTableWriter};
use genbil_table::Table;

/// Table files kept in memory, keyed by path
///
/// Clones share the same files.
#[derive(Debug, Clone, Default)]
pub struct MemoryTableStore {
    files: Arc<Mutex<HashMap<PathBuf, Table>>>,
}

impl MemoryTableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file that scripts can load
    pub fn with_file(self, path: impl Into<PathBuf>, table: Table) -> Self {
        self.lock().insert(path.into(), table);
        self
    }

    /// Current content of a file
    pub fn file(&self, path: impl AsRef<Path>) -> Option<Table> {
        self.lock().get(path.as_ref()).cloned()
    }

    /// Stored paths, sorted
    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<_> = self.lock().keys().cloned().collect();
        paths.sort();
        paths
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, Table>> {
        self.files.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FileTableReader for MemoryTableStore {
    fn read_table(&self, path: &Path) -> DataSourceResult<Table> {
        self.lock()
            .get(path)
            .cloned()
            .ok_or_else(|| DataSourceError::ReadFailed {
                path: path.display().to_string(),
                reason: "no such file".to_string(),
            })
    }
}

impl FileTableWriter for MemoryTableStore {
    fn write_table(&self, path: &Path, table: &Table) -> DataSourceResult<()> {
        self.lock().insert(path.to_path_buf(), table.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let store = MemoryTableStore::new();
        let table = Table::with_columns(["a"]).unwrap();

        store.write_table(Path::new("out.csv"), &table).unwrap();
        assert_eq!(store.read_table(Path::new("out.csv")).unwrap(), table);
        assert_eq!(store.paths(), vec![PathBuf::from("out.csv")]);
    }

    #[test]
    fn test_read_missing() {
        let store = MemoryTableStore::new();
        assert!(matches!(
            store.read_table(Path::new("missing.csv")),
            Err(DataSourceError::ReadFailed { .. })
        ));
    }
}
