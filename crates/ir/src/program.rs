// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Program Representation
//!
//! A [`Program`] is the ordered list of actions parsed from a genbiL script.
//! Actions run strictly in this order; the index of an action in the program is
//! what errors report to locate a failure.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::action::Action;

/// An ordered sequence of case actions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub actions: Vec<Action>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_actions(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }

    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Action> {
        self.actions.get(index)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl FromIterator<Action> for Program {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        Self::with_actions(iter)
    }
}

impl IntoIterator for Program {
    type Item = Action;
    type IntoIter = std::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

/// Renders one statement per line, each terminated by `;`
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for action in &self.actions {
            writeln!(f, "{};", action)?;
        }
        Ok(())
    }
}
