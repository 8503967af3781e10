// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # genbiL - Case Engine
//!
//! This crate ties the genbiL case language together: it parses scripts, runs
//! the resulting programs against an active table and a scope store, and calls
//! out to file and query collaborators for `load` and `save`.
//!
//! ## Architecture
//!
//! ```text
//! script ──parse──► Program ──Interpreter──► CaseState { active, scopes }
//!                                 │
//!                                 ├── FileTableReader / FileTableWriter
//!                                 ├── TemplateEngine
//!                                 └── QueryRunner
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use genbil_engine::{Interpreter, run_script};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let interpreter = Interpreter::default();
//! let state = run_script(
//!     &interpreter,
//!     "case add column 'product';
//!      case scope 'empty';
//!      case merge with 'empty';",
//! )
//! .await
//! .unwrap();
//!
//! assert_eq!(state.active.column_names(), vec!["product"]);
//! assert!(state.scopes.contains("empty"));
//! # });
//! ```

pub mod config;
pub mod error;
pub mod interpreter;
pub mod logging;

pub use config::{ConfigError, CsvConfig, EngineConfig};
pub use error::{ExecutionError, ExecutionResult, GenbilError};
pub use interpreter::{CaseState, Interpreter};
pub use logging::init_logging;

/// Parse a script and run it from an empty state
///
/// # Errors
///
/// Returns `GenbilError::Syntax` if the script does not parse; no action runs then.
/// Returns `GenbilError::Execution` for the first action that fails.
pub async fn run_script(interpreter: &Interpreter, source: &str) -> Result<CaseState, GenbilError> {
    let program = genbil_grammar::parse_program(source)?;
    Ok(interpreter.run(&program).await?)
}
