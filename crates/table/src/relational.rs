// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details
//
//! # Two-table operations
//!
//! Cartesian product, inner join and union over case sets.
//!
//! ## Column policy
//!
//! - [`Table::cross`] and [`Table::join`] output the left columns followed by the
//!   right columns. A name present on both sides is a
//!   [`SemanticError::ColumnCollision`], except the join column itself, which the
//!   join keeps once (from the left side).
//! - [`Table::union`] requires both tables to carry the same column names in any
//!   order. Cells of the appended rows are re-aligned by name. A blank table
//!   (no columns and no rows) is the identity: the union is a copy of `other`.

use std::collections::HashMap;

use crate::error::{SemanticError, SemanticResult};
use crate::table::{Column, Table};

impl Table {
    /// Full Cartesian product: every left row followed by every right row
    pub fn cross(&self, right: &Table) -> SemanticResult<Table> {
        check_collisions(self, right, None)?;

        let columns = concat_columns(self, right, None);
        let mut rows = Vec::with_capacity(self.row_count() * right.row_count());
        for left_row in self.rows() {
            for right_row in right.rows() {
                let mut row = Vec::with_capacity(columns.len());
                row.extend(left_row.iter().cloned());
                row.extend(right_row.iter().cloned());
                rows.push(row);
            }
        }

        tracing::trace!(
            left = self.row_count(),
            right = right.row_count(),
            result = rows.len(),
            "cross product"
        );
        Ok(Table::from_parts(columns, rows))
    }

    /// Inner join on one column, matching values case-insensitively
    ///
    /// Rows come out in left-row-major, right-row-minor order.
    pub fn join(&self, right: &Table, column: &str) -> SemanticResult<Table> {
        let left_key = self.require(column)?;
        let right_key = right.require(column)?;
        check_collisions(self, right, Some(right_key))?;

        let mut index: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, row) in right.rows().iter().enumerate() {
            index.entry(row[right_key].to_lowercase()).or_default().push(i);
        }

        let columns = concat_columns(self, right, Some(right_key));
        let mut rows = Vec::new();
        for left_row in self.rows() {
            let Some(matches) = index.get(&left_row[left_key].to_lowercase()) else {
                continue;
            };
            for &i in matches {
                let mut row = Vec::with_capacity(columns.len());
                row.extend(left_row.iter().cloned());
                row.extend(
                    right.rows()[i]
                        .iter()
                        .enumerate()
                        .filter(|(j, _)| *j != right_key)
                        .map(|(_, cell)| cell.clone()),
                );
                rows.push(row);
            }
        }

        tracing::trace!(
            left = self.row_count(),
            right = right.row_count(),
            result = rows.len(),
            column,
            "inner join"
        );
        Ok(Table::from_parts(columns, rows))
    }

    /// Append the rows of `other`, re-aligning its cells to this table's column order
    ///
    /// A blank table (no columns, no rows) takes `other` whole.
    pub fn union(&self, other: &Table) -> SemanticResult<Table> {
        if self.column_count() == 0 && self.row_count() == 0 {
            return Ok(other.clone());
        }

        let mismatch = || SemanticError::SchemaMismatch {
            expected: self.column_names().iter().map(|s| s.to_string()).collect(),
            found: other.column_names().iter().map(|s| s.to_string()).collect(),
        };

        if self.column_count() != other.column_count() {
            return Err(mismatch());
        }
        let mapping = self
            .columns()
            .iter()
            .map(|c| other.position(c.name()))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(mismatch)?;

        let (columns, mut rows) = self.clone().into_parts();
        rows.reserve(other.row_count());
        for row in other.rows() {
            rows.push(mapping.iter().map(|&i| row[i].clone()).collect());
        }
        Ok(Table::from_parts(columns, rows))
    }
}

fn check_collisions(left: &Table, right: &Table, skip: Option<usize>) -> SemanticResult<()> {
    for (i, column) in right.columns().iter().enumerate() {
        if Some(i) == skip {
            continue;
        }
        if left.position(column.name()).is_some() {
            return Err(SemanticError::ColumnCollision(column.name().to_string()));
        }
    }
    Ok(())
}

fn concat_columns(left: &Table, right: &Table, skip: Option<usize>) -> Vec<Column> {
    left.columns()
        .iter()
        .cloned()
        .chain(
            right
                .columns()
                .iter()
                .enumerate()
                .filter(|(i, _)| Some(*i) != skip)
                .map(|(_, c)| c.clone()),
        )
        .collect()
}
