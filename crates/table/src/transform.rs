// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details
//
//! # Single-table transformations
//!
//! Each operation reads the receiver and returns a new [`Table`]. Column names are
//! resolved case-insensitively; a missing column is reported as
//! [`SemanticError::ColumnNotFound`].

use std::collections::HashSet;

use genbil_ir::{Direction, Operator};

use crate::error::{SemanticError, SemanticResult};
use crate::pattern::ValueMatcher;
use crate::table::{Column, Table};

impl Table {
    /// Drop a column and its cell from every row
    pub fn remove_column(&self, name: &str) -> SemanticResult<Table> {
        let index = self.require(name)?;

        let mut columns = self.columns().to_vec();
        columns.remove(index);

        let rows = self
            .rows()
            .iter()
            .map(|row| {
                let mut row = row.clone();
                row.remove(index);
                row
            })
            .collect();

        Ok(Table::from_parts(columns, rows))
    }

    /// Rename a column, keeping its position
    ///
    /// Renaming a column to a case variant of its own name is allowed.
    pub fn rename_column(&self, old: &str, new: &str) -> SemanticResult<Table> {
        let index = self.require(old)?;
        if let Some(existing) = self.position(new)
            && existing != index
        {
            return Err(SemanticError::ColumnAlreadyExists(new.to_string()));
        }

        let mut columns = self.columns().to_vec();
        columns[index] = Column::new(new);
        Ok(Table::from_parts(columns, self.rows().to_vec()))
    }

    /// Swap a column with its immediate neighbour
    ///
    /// Moving the first column left or the last column right leaves the table
    /// unchanged.
    pub fn move_column(&self, name: &str, direction: Direction) -> SemanticResult<Table> {
        let index = self.require(name)?;
        let target = index as isize + direction.delta();
        if target < 0 || target as usize >= self.column_count() {
            return Ok(self.clone());
        }
        let target = target as usize;

        let mut columns = self.columns().to_vec();
        columns.swap(index, target);

        let rows = self
            .rows()
            .iter()
            .map(|row| {
                let mut row = row.clone();
                row.swap(index, target);
                row
            })
            .collect();

        Ok(Table::from_parts(columns, rows))
    }

    /// Keep the rows whose cell matches at least one value, or drop them when negated
    pub fn filter(
        &self,
        column: &str,
        operator: Operator,
        values: &[String],
        negate: bool,
    ) -> SemanticResult<Table> {
        let index = self.require(column)?;
        let matchers = values
            .iter()
            .map(|value| ValueMatcher::new(operator, value))
            .collect::<SemanticResult<Vec<_>>>()?;

        let rows = self
            .rows()
            .iter()
            .filter(|row| {
                let matched = matchers.iter().any(|m| m.is_match(&row[index]));
                matched != negate
            })
            .cloned()
            .collect();

        Ok(Table::from_parts(self.columns().to_vec(), rows))
    }

    /// Drop rows that repeat an earlier row, keeping first occurrences in order
    pub fn distinct(&self) -> Table {
        let mut seen: HashSet<&[String]> = HashSet::new();
        let rows = self
            .rows()
            .iter()
            .filter(|row| seen.insert(row.as_slice()))
            .cloned()
            .collect();

        Table::from_parts(self.columns().to_vec(), rows)
    }

    /// Append a column, filled with `default` or with empty strings
    pub fn add_column(&self, name: &str, default: Option<&str>) -> SemanticResult<Table> {
        if self.position(name).is_some() {
            return Err(SemanticError::ColumnAlreadyExists(name.to_string()));
        }

        let mut columns = self.columns().to_vec();
        columns.push(Column::new(name));

        let value = default.unwrap_or_default();
        let rows = self
            .rows()
            .iter()
            .map(|row| {
                let mut row = row.clone();
                row.push(value.to_string());
                row
            })
            .collect();

        Ok(Table::from_parts(columns, rows))
    }
}
