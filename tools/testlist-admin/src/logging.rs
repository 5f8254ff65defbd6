//! Tracing setup.
//!
//! The UI owns stdout, so log output goes to a file. Without a log file no
//! subscriber is installed and events are dropped.

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Cannot open log file: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid log filter: {0}")]
    Filter(String),
    #[error("Subscriber init failed: {0}")]
    Init(String),
}

/// Build the filter: RUST_LOG wins over the configured level.
pub fn env_filter(config: &LogConfig) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| LoggingError::Filter(e.to_string()))
}

/// Install the global subscriber. Returns `false` when logging is disabled.
pub fn init_logging(config: &LogConfig) -> Result<bool, LoggingError> {
    let Some(path) = &config.file else {
        return Ok(false);
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    tracing::info!(
        path = %path.display(),
        version = env!("CARGO_PKG_VERSION"),
        "Logging initialized"
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_without_file() {
        assert!(!init_logging(&LogConfig::default()).unwrap());
    }

    #[test]
    fn test_configured_filter_parses() {
        let config = LogConfig {
            file: None,
            level: "testlist_admin=debug,reqwest=warn".into(),
        };
        assert!(env_filter(&config).is_ok());
    }
}
