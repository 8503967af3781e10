// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Table-specific test helpers and custom assertions

use genbil_table::Table;

/// Custom assertion helpers for case tables
pub struct TableAssertions;

impl TableAssertions {
    /// Assert the column names, in order
    pub fn assert_columns(table: &Table, expected: &[&str]) {
        assert_eq!(
            table.column_names(),
            expected,
            "Column mismatch: expected {:?}, found {:?}",
            expected,
            table.column_names()
        );
    }

    /// Assert every row, in order
    pub fn assert_rows(table: &Table, expected: &[&[&str]]) {
        let actual = row_strs(table);
        assert_eq!(
            actual, expected,
            "Row mismatch: expected {:?}, found {:?}",
            expected, actual
        );
    }

    /// Assert the column names and every row
    pub fn assert_table(table: &Table, columns: &[&str], rows: &[&[&str]]) {
        Self::assert_columns(table, columns);
        Self::assert_rows(table, rows);
    }

    /// Assert the values of one column, top to bottom
    pub fn assert_column_values(table: &Table, column: &str, expected: &[&str]) {
        let values = table
            .column_values(column)
            .unwrap_or_else(|e| panic!("Column '{}' not readable: {}", column, e));
        assert_eq!(values, expected, "Values of column '{}' mismatch", column);
    }

    pub fn assert_row_count(table: &Table, expected: usize) {
        assert_eq!(
            table.row_count(),
            expected,
            "Expected {} rows, found {}",
            expected,
            table.row_count()
        );
    }
}

/// Rows of a table as string slices, for comparisons against literals
pub fn row_strs(table: &Table) -> Vec<Vec<&str>> {
    table
        .rows()
        .iter()
        .map(|row| row.iter().map(String::as_str).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::CaseFixtures;

    #[test]
    fn test_assert_table() {
        let table = CaseFixtures::distinct_input();
        TableAssertions::assert_table(
            &table,
            &["id", "name"],
            &[&["1", "a"], &["1", "a"], &["2", "b"]],
        );
    }

    #[test]
    fn test_assert_column_values() {
        TableAssertions::assert_column_values(&CaseFixtures::filter_input(), "v", &["x", "y", "z"]);
    }

    #[test]
    #[should_panic(expected = "Column mismatch")]
    fn test_assert_columns_fails() {
        TableAssertions::assert_columns(&CaseFixtures::abc(), &["A", "C", "B"]);
    }

    #[test]
    #[should_panic(expected = "not readable")]
    fn test_assert_column_values_missing_column() {
        TableAssertions::assert_column_values(&CaseFixtures::abc(), "Z", &[]);
    }
}
