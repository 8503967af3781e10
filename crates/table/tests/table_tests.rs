// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Integration tests chaining table operations the way case scripts do

use genbil_ir::{Direction, Operator};
use genbil_table::{ScopeStore, SemanticError, Table};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn perspectives() -> Table {
    Table::new(
        ["perspective", "measure-group"],
        vec![
            strings(&["Adventure Works", "Internet Sales"]),
            strings(&["Adventure Works", "Reseller Sales"]),
            strings(&["Finance", "Financial Reporting"]),
            strings(&["Adventure Works", "Internet Sales"]),
        ],
    )
    .unwrap()
}

#[test]
fn test_filter_after_remove_fails() {
    let table = perspectives().remove_column("perspective").unwrap();
    let result = table.filter("perspective", Operator::Equal, &strings(&["Finance"]), false);
    assert_eq!(
        result,
        Err(SemanticError::ColumnNotFound("perspective".to_string()))
    );
}

#[test]
fn test_filter_distinct_then_cross() {
    let measures = perspectives()
        .filter("perspective", Operator::Like, &strings(&["Adv%"]), false)
        .unwrap()
        .distinct();
    assert_eq!(measures.row_count(), 2);

    let years = Table::new(["year"], vec![strings(&["2023"]), strings(&["2024"])]).unwrap();
    let matrix = measures.cross(&years).unwrap();

    assert_eq!(
        matrix.column_names(),
        vec!["perspective", "measure-group", "year"]
    );
    assert_eq!(matrix.row_count(), 4);
    assert_eq!(
        matrix.column_values("year").unwrap(),
        vec!["2023", "2024", "2023", "2024"]
    );
}

#[test]
fn test_snapshot_immune_to_later_changes() {
    let mut store = ScopeStore::new();
    let active = perspectives();
    store.insert("S", active.clone());

    let active = active
        .remove_column("measure-group")
        .unwrap()
        .move_column("perspective", Direction::Right)
        .unwrap()
        .add_column("extra", Some("1"))
        .unwrap();
    assert_eq!(active.column_names(), vec!["perspective", "extra"]);

    store.copy("S", "T").unwrap();
    assert_eq!(store.get("T").unwrap(), &perspectives());
}

#[test]
fn test_merge_after_rename() {
    let renamed = perspectives()
        .rename_column("measure-group", "group")
        .unwrap();
    let result = perspectives().union(&renamed);
    assert!(matches!(result, Err(SemanticError::SchemaMismatch { .. })));

    let merged = renamed.union(&renamed).unwrap();
    assert_eq!(merged.row_count(), 8);
}
