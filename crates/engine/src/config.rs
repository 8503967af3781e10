// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Engine Configuration
//!
//! This module provides configuration management for the case interpreter.
//!
//! ## Configuration Structure
//!
//! - Base directory that relative `load file`, `load query` and `save as` paths
//!   are resolved against
//! - Template variables substituted into query text
//! - CSV dialect of table files
//! - Scope pre-validation switch
//! - Default log filter
//!
//! ## Example
//!
//! ```rust
//! use genbil_engine::EngineConfig;
//!
//! let config = EngineConfig::from_yaml_str(
//!     r#"
//! base_directory: /data/cases
//! variables:
//!   year: "2024"
//! csv:
//!   delimiter: ","
//! "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.csv.delimiter, ',');
//! assert_eq!(config.csv.quote, '"');
//! assert!(config.validate_scopes);
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use genbil_source::CsvDialect;
use serde::{Deserialize, Serialize};

/// CSV dialect settings for table files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CsvConfig {
    /// Field delimiter
    pub delimiter: char,

    /// Quote character around fields that need it
    pub quote: char,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ';',
            quote: '"',
        }
    }
}

impl CsvConfig {
    /// Convert to the byte dialect used by the CSV adapter
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidDelimiter` if either character is not ASCII or
    /// both are the same.
    pub fn dialect(&self) -> Result<CsvDialect, ConfigError> {
        let byte = |c: char, role: &str| {
            if c.is_ascii() && c != '\n' && c != '\r' {
                Ok(c as u8)
            } else {
                Err(ConfigError::InvalidDelimiter {
                    reason: format!("{role} {c:?} must be a single ASCII character"),
                })
            }
        };

        let delimiter = byte(self.delimiter, "delimiter")?;
        let quote = byte(self.quote, "quote")?;
        if delimiter == quote {
            return Err(ConfigError::InvalidDelimiter {
                reason: format!("delimiter and quote are both {:?}", self.delimiter),
            });
        }

        Ok(CsvDialect { delimiter, quote })
    }
}

/// Main engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Directory relative paths are resolved against; the working directory if unset
    pub base_directory: Option<PathBuf>,

    /// Template variables for query text
    ///
    /// Query templates are rendered only when at least one variable is set.
    pub variables: BTreeMap<String, String>,

    /// CSV dialect of table files
    pub csv: CsvConfig,

    /// Check scope references before running any action
    pub validate_scopes: bool,

    /// Log filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_directory: None,
            variables: BTreeMap::new(),
            csv: CsvConfig::default(),
            validate_scopes: true,
            log_filter: "info".to_string(),
        }
    }
}

impl EngineConfig {
    /// Create a configuration rooted at `base_directory`
    pub fn new(base_directory: impl Into<PathBuf>) -> Self {
        Self {
            base_directory: Some(base_directory.into()),
            ..Default::default()
        }
    }

    /// Set a template variable
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Parse a configuration from YAML and validate it
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    ///
    /// A relative `base_directory` is taken relative to the file's own directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let mut config = Self::from_yaml_str(&yaml)?;
        if let (Some(base), Some(parent)) = (&config.base_directory, path.parent())
            && base.is_relative()
        {
            let resolved = parent.join(base);
            config.base_directory = Some(resolved);
        }

        tracing::debug!(path = %path.display(), "loaded engine configuration");
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.csv.dialect()?;
        Ok(())
    }

    /// Resolve a script path against the base directory
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        match &self.base_directory {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// CSV delimiter or quote character cannot be used
    #[error("Invalid CSV dialect: {reason}")]
    InvalidDelimiter { reason: String },

    /// Configuration file could not be read
    #[error("Failed to read configuration file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration text is not valid YAML for this schema
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
}
