// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details
//
//! # genbiL - Case Tables
//!
//! This crate provides the relational value layer the case interpreter works on.
//!
//! ## Overview
//!
//! - [`Table`]: an ordered set of named columns plus rows of string cells
//! - Single-table transformations: remove, rename, move, filter, distinct, add
//! - Two-table operations: cross product, inner join, union
//! - [`ScopeStore`]: named snapshots of tables
//!
//! Every operation returns a new table, so a snapshot taken with `scope` can never
//! be changed by later actions.
//!
//! ```rust
//! use genbil_table::Table;
//! use genbil_ir::Direction;
//!
//! let table = Table::new(
//!     ["A", "B", "C"],
//!     vec![vec!["1".into(), "2".into(), "3".into()]],
//! )
//! .unwrap();
//!
//! let moved = table.move_column("B", Direction::Left).unwrap();
//! assert_eq!(moved.column_names(), vec!["B", "A", "C"]);
//! assert_eq!(table.column_names(), vec!["A", "B", "C"]);
//! ```

pub mod error;
pub mod pattern;
pub mod relational;
pub mod scope;
pub mod table;
pub mod transform;

// Re-export commonly used types
pub use error::{SemanticError, SemanticResult};
pub use pattern::ValueMatcher;
pub use scope::ScopeStore;
pub use table::{Column, Table};
