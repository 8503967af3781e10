// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Testing utilities for genbiL
//!
//! This crate provides common testing components including:
//! - A recording mock query runner
//! - In-memory table files implementing both file collaborators
//! - Table assertions
//! - Sample case sets and scripts

pub mod assertions;
pub mod fixtures;
pub mod memory_store;
pub mod mock_query_runner;

// Re-exports for convenience
pub use assertions::{TableAssertions, row_strs};
pub use fixtures::{CaseFixtures, table};
pub use memory_store::MemoryTableStore;
pub use mock_query_runner::{MockQueryRunner, QueryCall};
