// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # genbiL - Data Sources
//!
//! This crate defines how case sets enter and leave the interpreter.
//!
//! ## Collaborators
//!
//! - [`FileTableReader`] / [`FileTableWriter`]: tabular files, first record = headers
//! - [`QueryRunner`]: async query execution against an external data source
//! - [`TemplateEngine`]: placeholder substitution in query text
//!
//! ## Implementations
//!
//! - [`CsvTableFile`]: reader and writer over CSV (`;`-separated by default)
//! - [`StringTemplateEngine`]: `$name$` placeholders
//! - [`StaticQueryRunner`]: canned result sets for playgrounds and tests
//! - [`UnavailableQueryRunner`]: refuses every query
//!
//! ## Usage
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use genbil_source::{StringTemplateEngine, TemplateEngine};
//!
//! let mut variables = BTreeMap::new();
//! variables.insert("year".to_string(), "2024".to_string());
//!
//! let query = StringTemplateEngine::new()
//!     .render("select * from sales where year = $year$", &variables)
//!     .unwrap();
//! assert_eq!(query, "select * from sales where year = 2024");
//! ```

pub mod csv_file;
pub mod error;
pub mod r#static;
pub mod template;
pub mod r#trait;

// Re-exports
pub use csv_file::{CsvDialect, CsvTableFile};
pub use error::{DataSourceError, DataSourceResult};
pub use r#static::{StaticQueryRunner, UnavailableQueryRunner};
pub use template::StringTemplateEngine;
pub use r#trait::{FileTableReader, FileTableWriter, QueryRunner, TemplateEngine};
