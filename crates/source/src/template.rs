// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Query templates
//!
//! Query text may carry placeholders written `$name$`. [`StringTemplateEngine`]
//! replaces each one with the value of the variable of that name. A `$` that does
//! not open a placeholder (a lone `$`, `$$`, or `$` followed by text that is not a
//! name) is copied unchanged.
//!
//! Any `$` run `$word$` whose inner text is a name (letters, digits, `_`) is a
//! placeholder, even when the query meant two literal dollars such as
//! `'$5$'` or `'$5' || '$6$'`. Rendering such text requires a variable of that
//! name, otherwise it fails with [`DataSourceError::UndefinedVariable`].

use std::collections::BTreeMap;

use crate::error::{DataSourceError, DataSourceResult};
use crate::r#trait::TemplateEngine;

const DELIMITER: char = '$';

/// Template engine for `$name$` placeholders
#[derive(Debug, Clone, Copy, Default)]
pub struct StringTemplateEngine;

impl StringTemplateEngine {
    pub fn new() -> Self {
        Self
    }
}

fn is_name(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_alphanumeric() || c == '_')
}

impl TemplateEngine for StringTemplateEngine {
    fn render(
        &self,
        template: &str,
        variables: &BTreeMap<String, String>,
    ) -> DataSourceResult<String> {
        let mut output = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find(DELIMITER) {
            output.push_str(&rest[..start]);
            let after = &rest[start + 1..];

            match after.find(DELIMITER) {
                Some(end) if is_name(&after[..end]) => {
                    let name = &after[..end];
                    let value = variables
                        .get(name)
                        .ok_or_else(|| DataSourceError::UndefinedVariable(name.to_string()))?;
                    tracing::trace!(variable = name, "substitute template variable");
                    output.push_str(value);
                    rest = &after[end + 1..];
                }
                _ => {
                    output.push(DELIMITER);
                    rest = after;
                }
            }
        }

        output.push_str(rest);
        Ok(output)
    }
}
