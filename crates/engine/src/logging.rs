// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Logging setup for programs embedding the interpreter

use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::EngineConfig;

/// Install a global fmt subscriber filtered by `config.log_filter`
///
/// `RUST_LOG` wins over the configured filter when it is set and valid.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &EngineConfig) -> Result<(), SetGlobalDefaultError> {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = env_filter(from_env.as_deref(), &config.log_filter);
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    tracing::subscriber::set_global_default(subscriber)?;
    tracing::debug!(log_filter = %config.log_filter, "logging initialized");
    Ok(())
}

fn env_filter(from_env: Option<&str>, configured: &str) -> EnvFilter {
    from_env
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(configured))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_filter_reaches_env_filter() {
        let config = EngineConfig::from_yaml_str("log_filter: genbil=trace").unwrap();
        let filter = env_filter(None, &config.log_filter);
        assert!(filter.to_string().contains("genbil=trace"));
    }

    #[test]
    fn test_env_directives_win() {
        let filter = env_filter(Some("warn"), "genbil=trace");
        let rendered = filter.to_string();
        assert!(rendered.contains("warn"));
        assert!(!rendered.contains("genbil=trace"));
    }

    #[test]
    fn test_second_init_fails() {
        let config = EngineConfig {
            log_filter: "debug".to_string(),
            ..EngineConfig::default()
        };
        // The first call may lose to another test in this process
        let _ = init_logging(&config);
        assert!(init_logging(&config).is_err());
    }
}
