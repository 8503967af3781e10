// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Test fixtures: sample case sets and scripts

use genbil_table::Table;

/// Build a table from literals; panics on an invalid table
pub fn table(columns: &[&str], rows: &[&[&str]]) -> Table {
    Table::new(
        columns.iter().copied(),
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect(),
    )
    .unwrap_or_else(|e| panic!("Invalid fixture table: {}", e))
}

/// Sample case sets and scripts
pub struct CaseFixtures;

impl CaseFixtures {
    // ===== Tables =====

    /// Columns `A`, `B`, `C` with one row
    pub fn abc() -> Table {
        table(&["A", "B", "C"], &[&["a", "b", "c"]])
    }

    /// Column `v` holding `x`, `y`, `z`
    pub fn filter_input() -> Table {
        table(&["v"], &[&["x"], &["y"], &["z"]])
    }

    /// Rows `(1,a)`, `(1,a)`, `(2,b)`
    pub fn distinct_input() -> Table {
        table(&["id", "name"], &[&["1", "a"], &["1", "a"], &["2", "b"]])
    }

    /// Axis `x` with values 1 and 2
    pub fn left_axis() -> Table {
        table(&["x"], &[&["1"], &["2"]])
    }

    /// Axis `y` with values a and b
    pub fn right_axis() -> Table {
        table(&["y"], &[&["a"], &["b"]])
    }

    /// Keys 1 and 2 in column `k`
    pub fn left_keyed() -> Table {
        table(&["k", "left"], &[&["1", "l1"], &["2", "l2"]])
    }

    /// Keys 2 and 3 in column `k`
    pub fn right_keyed() -> Table {
        table(&["k", "right"], &[&["2", "r2"], &["3", "r3"]])
    }

    /// Products with category and price band
    pub fn products() -> Table {
        table(
            &["product", "category", "band"],
            &[
                &["Road Bike", "Bikes", "high"],
                &["Mountain Bike", "Bikes", "high"],
                &["Helmet", "Accessories", "low"],
                &["Bottle", "Accessories", "low"],
                &["Jersey", "Clothing", "mid"],
            ],
        )
    }

    /// Calendar years
    pub fn years() -> Table {
        table(&["year"], &[&["2023"], &["2024"]])
    }

    // ===== Scripts =====

    /// Product x year matrix over bikes and accessories, saved to `matrix.csv`
    pub const fn matrix_script() -> &'static str {
        r#"
        // products under test
        case load file 'products.csv';
        case filter on column 'category' values equal 'Bikes' 'Accessories';
        case remove column 'band';
        case scope 'products';

        // years under test
        case load file 'years.csv';
        case scope 'years';

        case cross 'products' with 'years';
        case move column 'year' to left;
        case save as 'matrix.csv';
        "#
    }
}
