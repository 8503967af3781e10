// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # CSV table files
//!
//! [`CsvTableFile`] reads and writes case sets as delimited text. The first
//! record holds the column names and every following record is one case.
//!
//! The default dialect uses `;` between fields and `"` around fields that need
//! quoting. An empty file reads as a table with no columns and no rows.

use std::io;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use genbil_table::Table;

use crate::error::{DataSourceError, DataSourceResult};
use crate::r#trait::{FileTableReader, FileTableWriter};

/// Field delimiter and quote character of a CSV file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvDialect {
    pub delimiter: u8,
    pub quote: u8,
}

impl Default for CsvDialect {
    fn default() -> Self {
        Self {
            delimiter: b';',
            quote: b'"',
        }
    }
}

/// Reads and writes case sets as CSV files
#[derive(Debug, Clone, Default)]
pub struct CsvTableFile {
    dialect: CsvDialect,
}

impl CsvTableFile {
    /// Create a CSV adapter with the default dialect
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dialect(dialect: CsvDialect) -> Self {
        Self { dialect }
    }

    pub fn dialect(&self) -> CsvDialect {
        self.dialect
    }

    /// Decode a table from any reader; `origin` names the source in errors
    pub fn read_from<R: io::Read>(&self, source: R, origin: &str) -> DataSourceResult<Table> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.dialect.delimiter)
            .quote(self.dialect.quote)
            .has_headers(true)
            .from_reader(source);

        let headers = reader
            .headers()
            .map_err(|e| DataSourceError::read_failed(origin, e))?
            .clone();
        let mut table = Table::with_columns(headers.iter())
            .map_err(|e| DataSourceError::InvalidTable(e.to_string()))?;

        for record in reader.records() {
            let record = record.map_err(|e| DataSourceError::read_failed(origin, e))?;
            table
                .push_row(record.iter())
                .map_err(|e| DataSourceError::InvalidTable(e.to_string()))?;
        }

        Ok(table)
    }

    /// Encode a table to any writer; `origin` names the target in errors
    pub fn write_to<W: io::Write>(
        &self,
        target: W,
        table: &Table,
        origin: &str,
    ) -> DataSourceResult<()> {
        // A header-less table stays an empty file so it reads back the same
        if table.column_count() == 0 {
            return Ok(());
        }

        let mut writer = WriterBuilder::new()
            .delimiter(self.dialect.delimiter)
            .quote(self.dialect.quote)
            .from_writer(target);

        writer
            .write_record(table.column_names())
            .map_err(|e| DataSourceError::write_failed(origin, e))?;
        for row in table.rows() {
            writer
                .write_record(row)
                .map_err(|e| DataSourceError::write_failed(origin, e))?;
        }
        writer
            .flush()
            .map_err(|e| DataSourceError::write_failed(origin, e))
    }
}

impl FileTableReader for CsvTableFile {
    fn read_table(&self, path: &Path) -> DataSourceResult<Table> {
        let origin = path.display().to_string();
        let file =
            std::fs::File::open(path).map_err(|e| DataSourceError::read_failed(&origin, e))?;
        let table = self.read_from(io::BufReader::new(file), &origin)?;

        tracing::debug!(
            path = %origin,
            columns = table.column_count(),
            rows = table.row_count(),
            "read csv table"
        );
        Ok(table)
    }
}

impl FileTableWriter for CsvTableFile {
    fn write_table(&self, path: &Path, table: &Table) -> DataSourceResult<()> {
        let origin = path.display().to_string();
        let file =
            std::fs::File::create(path).map_err(|e| DataSourceError::write_failed(&origin, e))?;
        self.write_to(io::BufWriter::new(file), table, &origin)?;

        tracing::debug!(
            path = %origin,
            columns = table.column_count(),
            rows = table.row_count(),
            "wrote csv table"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> DataSourceResult<Table> {
        CsvTableFile::new().read_from(text.as_bytes(), "inline")
    }

    #[test]
    fn test_read_semicolon_separated() {
        let table = read("product;year\nbike;2024\n\"car;van\";2025\n").unwrap();

        assert_eq!(table.column_names(), vec!["product", "year"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(1, "product"), Some("car;van"));
    }

    #[test]
    fn test_read_empty_input() {
        let table = read("").unwrap();
        assert_eq!(table.column_count(), 0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_read_ragged_row_fails() {
        let err = read("a;b\n1;2\n3\n").unwrap_err();
        assert!(matches!(err, DataSourceError::ReadFailed { .. }));
    }

    #[test]
    fn test_read_duplicate_header() {
        let err = read("a;A\n1;2\n").unwrap_err();
        assert!(matches!(err, DataSourceError::InvalidTable(_)));
    }

    #[test]
    fn test_custom_dialect() {
        let csv = CsvTableFile::with_dialect(CsvDialect {
            delimiter: b',',
            quote: b'\'',
        });
        let table = csv.read_from("a,b\n'1,5',2\n".as_bytes(), "inline").unwrap();
        assert_eq!(table.cell(0, "a"), Some("1,5"));
    }

    #[test]
    fn test_write_quotes_when_needed() {
        let table = Table::new(
            ["name", "note"],
            vec![vec!["a;b".to_string(), String::new()]],
        )
        .unwrap();

        let mut buffer = Vec::new();
        CsvTableFile::new()
            .write_to(&mut buffer, &table, "buffer")
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert_eq!(text, "name;note\n\"a;b\";\n");
        assert_eq!(read(&text).unwrap(), table);
    }

    #[test]
    fn test_missing_file() {
        let err = CsvTableFile::new()
            .read_table(Path::new("/definitely/not/here.csv"))
            .unwrap_err();
        match err {
            DataSourceError::ReadFailed { path, .. } => {
                assert_eq!(path, "/definitely/not/here.csv")
            }
            other => panic!("Expected ReadFailed, got {other:?}"),
        }
    }
}
