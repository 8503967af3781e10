// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # genbiL - Intermediate Representation
//!
//! This crate provides the representation of parsed genbiL case scripts.
//! The IR is designed to:
//! - Model every `case ...` statement as one variant of a closed [`Action`] enum
//! - Keep statement order explicit in a [`Program`]
//! - Render back to canonical script text for diagnostics

pub mod action;
pub mod program;

// Re-export commonly used types
pub use action::{Action, Direction, LoadSource, Operator};
pub use program::Program;
