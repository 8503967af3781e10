// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! File round trips through the CSV adapter

use genbil_source::{
    CsvDialect, CsvTableFile, DataSourceError, FileTableReader, FileTableWriter,
};
use genbil_table::Table;
use tempfile::TempDir;

fn cases() -> Table {
    Table::new(
        ["product", "year", "note"],
        vec![
            vec!["bike".into(), "2024".into(), "".into()],
            vec!["car; van".into(), "2025".into(), "say \"hi\"".into()],
            vec!["multi\nline".into(), "2026".into(), "x".into()],
        ],
    )
    .unwrap()
}

#[test]
fn test_written_file_reads_back_equal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cases.csv");
    let csv = CsvTableFile::new();

    csv.write_table(&path, &cases()).unwrap();
    let table = csv.read_table(&path).unwrap();

    assert_eq!(table, cases());
}

#[test]
fn test_round_trip_with_custom_dialect() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cases.txt");
    let csv = CsvTableFile::with_dialect(CsvDialect {
        delimiter: b'\t',
        quote: b'\'',
    });

    csv.write_table(&path, &cases()).unwrap();
    assert_eq!(csv.read_table(&path).unwrap(), cases());
}

#[test]
fn test_empty_table_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.csv");
    let csv = CsvTableFile::new();

    csv.write_table(&path, &Table::default()).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    assert_eq!(csv.read_table(&path).unwrap(), Table::default());

    let header_only = Table::with_columns(["a", "b"]).unwrap();
    csv.write_table(&path, &header_only).unwrap();
    assert_eq!(csv.read_table(&path).unwrap(), header_only);
}

#[test]
fn test_write_into_missing_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("cases.csv");

    let err = CsvTableFile::new().write_table(&path, &cases()).unwrap_err();
    assert!(matches!(err, DataSourceError::WriteFailed { .. }));
}
