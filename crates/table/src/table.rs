// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details
//
//! # Case-set tables
//!
//! A [`Table`] is an ordered list of named columns plus an ordered list of rows of
//! string cells. Two invariants hold for every table that can be observed:
//!
//! - every row has exactly one cell per column
//! - no two columns share a name (compared case-insensitively)
//!
//! Tables are plain values. Transformations in [`crate::transform`] and
//! [`crate::relational`] return a new table and leave the receiver untouched.

use serde::{Deserialize, Serialize};

use crate::error::{SemanticError, SemanticResult};

/// A named column of a case set
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Column {
    name: String,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Case-insensitive name comparison
    pub fn matches(&self, name: &str) -> bool {
        names_equal(&self.name, name)
    }
}

pub(crate) fn names_equal(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// Plain serialized shape of a table, validated on the way in
#[derive(Debug, Clone, Deserialize)]
struct TableData {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// An in-memory case set: columns plus rows of string cells
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TableData")]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl TryFrom<TableData> for Table {
    type Error = SemanticError;

    fn try_from(data: TableData) -> Result<Self, Self::Error> {
        Table::new(data.columns, data.rows)
    }
}

impl Table {
    /// Build a table, checking both table invariants
    ///
    /// # Errors
    ///
    /// Returns `SemanticError::ColumnAlreadyExists` for a duplicate column name.
    /// Returns `SemanticError::RowWidthMismatch` for a row with the wrong cell count.
    pub fn new<I, S>(columns: I, rows: Vec<Vec<String>>) -> SemanticResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::with_columns(columns)?;
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Build a table with the given header and no rows
    pub fn with_columns<I, S>(columns: I) -> SemanticResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::default();
        for name in columns {
            let name = name.into();
            if table.position(&name).is_some() {
                return Err(SemanticError::ColumnAlreadyExists(name));
            }
            table.columns.push(Column::new(name));
        }
        Ok(table)
    }

    /// Build a table from trusted parts whose invariants the caller already holds
    pub(crate) fn from_parts(columns: Vec<Column>, rows: Vec<Vec<String>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == columns.len()));
        Self { columns, rows }
    }

    /// Append a row at the bottom of the table
    pub fn push_row<I, S>(&mut self, row: I) -> SemanticResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = row.into_iter().map(Into::into).collect();
        if row.len() != self.columns.len() {
            return Err(SemanticError::RowWidthMismatch {
                row: self.rows.len(),
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Ordinal of a column, compared case-insensitively
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.matches(name))
    }

    /// Ordinal of a column that must exist
    pub fn require(&self, name: &str) -> SemanticResult<usize> {
        self.position(name)
            .ok_or_else(|| SemanticError::ColumnNotFound(name.to_string()))
    }

    /// All cells of one column, top to bottom
    pub fn column_values(&self, name: &str) -> SemanticResult<Vec<&str>> {
        let index = self.require(name)?;
        Ok(self.rows.iter().map(|row| row[index].as_str()).collect())
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.position(column)?;
        self.rows.get(row).map(|r| r[index].as_str())
    }

    pub(crate) fn into_parts(self) -> (Vec<Column>, Vec<Vec<String>>) {
        (self.columns, self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_new_table() {
        let table = Table::new(["A", "B"], vec![row(&["1", "2"]), row(&["3", "4"])]).unwrap();
        assert_eq!(table.column_names(), vec!["A", "B"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(1, "b"), Some("4"));
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let result = Table::with_columns(["Name", "name"]);
        assert_eq!(
            result,
            Err(SemanticError::ColumnAlreadyExists("name".to_string()))
        );
    }

    #[test]
    fn test_ragged_row_rejected() {
        let result = Table::new(["A", "B"], vec![row(&["1", "2"]), row(&["3"])]);
        assert_eq!(
            result,
            Err(SemanticError::RowWidthMismatch {
                row: 1,
                expected: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn test_position_is_case_insensitive() {
        let table = Table::with_columns(["Country"]).unwrap();
        assert_eq!(table.position("COUNTRY"), Some(0));
        assert_eq!(table.position("city"), None);
        assert!(matches!(
            table.require("city"),
            Err(SemanticError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn test_column_values() {
        let table = Table::new(["k", "v"], vec![row(&["1", "x"]), row(&["2", "y"])]).unwrap();
        assert_eq!(table.column_values("v").unwrap(), vec!["x", "y"]);
    }

    #[test]
    fn test_serde_validates_invariants() {
        let table = Table::new(["a"], vec![row(&["1"])]).unwrap();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"columns":["a"],"rows":[["1"]]}"#);
        let back: Table = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);

        let ragged = r#"{"columns":["a","b"],"rows":[["1"]]}"#;
        assert!(serde_json::from_str::<Table>(ragged).is_err());
    }
}
