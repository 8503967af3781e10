// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Interpreter
//!
//! Runs a [`Program`] against a [`CaseState`]: one active table plus the scope
//! store. Actions run strictly in program order and each one sees every effect of
//! the one before it, including file and query I/O. The first failure stops the
//! program; effects already performed (a `save` that ran) are not undone.
//!
//! ## Scope pre-validation
//!
//! With [`EngineConfig::validate_scopes`] set, scope references are checked
//! before the first action runs. A `cross`, `copy` or `merge` naming a scope that
//! is neither in the store nor written by an earlier `scope`/`copy` fails at its
//! own index, before any file or query is touched. Column references are checked
//! as each action runs.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use genbil_ir::{Action, LoadSource, Program};
use genbil_source::{
    CsvTableFile, DataSourceError, FileTableReader, FileTableWriter, QueryRunner,
    StringTemplateEngine, TemplateEngine, UnavailableQueryRunner,
};
use genbil_table::{ScopeStore, SemanticError, Table};

use crate::config::{ConfigError, EngineConfig};
use crate::error::{ExecutionError, ExecutionResult, StepError};

/// Mutable state of one program run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseState {
    /// Table the next action works on
    pub active: Table,
    /// Named snapshots
    pub scopes: ScopeStore,
}

impl CaseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from scopes prepared by an earlier run or by the caller
    pub fn with_scopes(scopes: ScopeStore) -> Self {
        Self {
            active: Table::default(),
            scopes,
        }
    }
}

/// Case language interpreter
///
/// Holds the configuration and the collaborators used for I/O. It keeps no
/// per-run state, so one interpreter can serve many runs, each with its own
/// [`CaseState`].
pub struct Interpreter {
    config: EngineConfig,
    reader: Arc<dyn FileTableReader>,
    writer: Arc<dyn FileTableWriter>,
    runner: Arc<dyn QueryRunner>,
    templates: Arc<dyn TemplateEngine>,
}

impl Interpreter {
    /// Create an interpreter with CSV files, `$name$` templates and no query runner
    ///
    /// # Errors
    ///
    /// Returns the `ConfigError` of an invalid configuration.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let csv = Arc::new(CsvTableFile::with_dialect(config.csv.dialect()?));

        Ok(Self {
            config,
            reader: csv.clone(),
            writer: csv,
            runner: Arc::new(UnavailableQueryRunner),
            templates: Arc::new(StringTemplateEngine::new()),
        })
    }

    pub fn with_reader(mut self, reader: Arc<dyn FileTableReader>) -> Self {
        self.reader = reader;
        self
    }

    pub fn with_writer(mut self, writer: Arc<dyn FileTableWriter>) -> Self {
        self.writer = writer;
        self
    }

    pub fn with_query_runner(mut self, runner: Arc<dyn QueryRunner>) -> Self {
        self.runner = runner;
        self
    }

    pub fn with_template_engine(mut self, templates: Arc<dyn TemplateEngine>) -> Self {
        self.templates = templates;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run a program from an empty state
    pub async fn run(&self, program: &Program) -> ExecutionResult<CaseState> {
        let mut state = CaseState::new();
        self.execute(program, &mut state).await?;
        Ok(state)
    }

    /// Run a program against an existing state
    ///
    /// On error, `state` holds the effects of every action before the failed one.
    pub async fn execute(&self, program: &Program, state: &mut CaseState) -> ExecutionResult<()> {
        tracing::info!(actions = program.len(), "running case program");

        if self.config.validate_scopes {
            check_scope_references(program, &state.scopes).inspect_err(|error| {
                tracing::warn!(%error, "scope validation failed");
            })?;
        }

        for (index, action) in program.iter().enumerate() {
            tracing::debug!(
                index,
                action = action.keyword(),
                io = action.performs_io(),
                "apply action"
            );
            if let Err(error) = self.apply(action, state).await {
                let error = error.at(index, action);
                tracing::warn!(%error, "case program aborted");
                return Err(error);
            }
        }

        tracing::info!(
            columns = state.active.column_count(),
            rows = state.active.row_count(),
            scopes = state.scopes.len(),
            "case program completed"
        );
        Ok(())
    }

    async fn apply(&self, action: &Action, state: &mut CaseState) -> Result<(), StepError> {
        match action {
            Action::Load { source } => {
                state.active = self.load(source).await?;
            }
            Action::Remove { column } => {
                state.active = state.active.remove_column(column)?;
            }
            Action::Rename { old, new } => {
                state.active = state.active.rename_column(old, new)?;
            }
            Action::Move { column, direction } => {
                state.active = state.active.move_column(column, *direction)?;
            }
            Action::Filter {
                column,
                operator,
                values,
                negate,
            } => {
                state.active = state.active.filter(column, *operator, values, *negate)?;
            }
            Action::FilterDistinct => {
                state.active = state.active.distinct();
            }
            Action::Scope { name } => {
                state.scopes.insert(name.clone(), state.active.clone());
            }
            Action::Cross {
                first,
                second,
                join_column,
            } => {
                let left = state.scopes.get(first)?;
                let right = state.scopes.get(second)?;
                let crossed = match join_column {
                    Some(column) => left.join(right, column)?,
                    None => left.cross(right)?,
                };
                state.active = crossed;
            }
            Action::Save { path } => {
                self.writer
                    .write_table(&self.config.resolve_path(path), &state.active)?;
            }
            Action::Copy { from, to } => {
                state.scopes.copy(from, to.clone())?;
            }
            Action::Add { column, default } => {
                state.active = state.active.add_column(column, default.as_deref())?;
            }
            Action::Merge { scope } => {
                let merged = state.active.union(state.scopes.get(scope)?)?;
                state.active = merged;
            }
        }
        Ok(())
    }

    async fn load(&self, source: &LoadSource) -> Result<Table, StepError> {
        let table = match source {
            LoadSource::File { path } => self.reader.read_table(&self.config.resolve_path(path))?,
            LoadSource::QueryFile {
                path,
                connection_string,
            } => {
                let resolved = self.config.resolve_path(path);
                let text = tokio::fs::read_to_string(&resolved).await.map_err(|e| {
                    DataSourceError::ReadFailed {
                        path: resolved.display().to_string(),
                        reason: e.to_string(),
                    }
                })?;
                self.query(connection_string, &text).await?
            }
            LoadSource::QueryText {
                text,
                connection_string,
            } => self.query(connection_string, text).await?,
        };

        tracing::debug!(
            columns = table.column_count(),
            rows = table.row_count(),
            "loaded table"
        );
        Ok(table)
    }

    async fn query(&self, connection_string: &str, text: &str) -> Result<Table, DataSourceError> {
        let query = if self.config.variables.is_empty() {
            text.to_string()
        } else {
            self.templates.render(text, &self.config.variables)?
        };
        self.runner.execute(connection_string, &query).await
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        let csv = Arc::new(CsvTableFile::new());
        Self {
            config: EngineConfig::default(),
            reader: csv.clone(),
            writer: csv,
            runner: Arc::new(UnavailableQueryRunner),
            templates: Arc::new(StringTemplateEngine::new()),
        }
    }
}

impl fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interpreter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Every scope read must follow a write of that scope or hit a stored scope
fn check_scope_references(program: &Program, scopes: &ScopeStore) -> ExecutionResult<()> {
    let mut known: HashSet<&str> = scopes.names().into_iter().collect();

    for (index, action) in program.iter().enumerate() {
        if let Some(missing) = action.scope_reads().into_iter().find(|n| !known.contains(n)) {
            return Err(ExecutionError::Semantic {
                index,
                action: action.to_string(),
                source: SemanticError::ScopeNotFound(missing.to_string()),
            });
        }
        if let Some(name) = action.scope_write() {
            known.insert(name);
        }
    }
    Ok(())
}
