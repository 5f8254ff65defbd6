//! # Admin Configuration
//!
//! Command-line arguments and the validated runtime configuration built
//! from them. All values have defaults suitable for a local server.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

/// Testlist-Admin: browse and filter test cases
#[derive(Parser, Debug)]
#[command(name = "testlist-admin")]
#[command(author, version, about = "TUI for browsing test cases of a test-management server")]
pub struct Args {
    /// Base URL of the admin server
    #[arg(short, long, default_value = "http://localhost:8080")]
    pub endpoint: String,

    /// Resource path serving the test case list
    #[arg(long, default_value = "testcase")]
    pub resource: String,

    /// Request timeout in seconds
    #[arg(short, long, default_value = "5")]
    pub timeout: u64,

    /// Write logs to this file (the terminal is owned by the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Run with built-in test cases (no server required)
    #[arg(long)]
    pub demo: bool,
}

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Endpoint must be an http:// or https:// URL, got {0:?}")]
    InvalidEndpoint(String),
    #[error("Resource path must not be empty")]
    EmptyResource,
    #[error("Request timeout must be at least one second")]
    ZeroTimeout,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log file; logging is off without one.
    pub file: Option<PathBuf>,
    /// `EnvFilter` directive used when RUST_LOG is unset.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}

/// Complete admin tool configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Base URL of the admin server.
    pub endpoint: String,
    /// Path of the test case resource below `endpoint`.
    pub resource: String,
    /// Whole-request timeout.
    pub request_timeout: Duration,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    pub log: LogConfig,
    /// Serve built-in data instead of calling the server.
    pub demo: bool,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080".to_string(),
            resource: "testcase".to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            log: LogConfig::default(),
            demo: false,
        }
    }
}

impl AdminConfig {
    /// Build and validate the configuration from parsed arguments.
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        if args.timeout == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        let config = Self {
            endpoint: args.endpoint,
            resource: args.resource,
            request_timeout: Duration::from_secs(args.timeout),
            log: LogConfig {
                file: args.log_file,
                level: args.log_level,
            },
            demo: args.demo,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the endpoint and resource are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ConfigError::InvalidEndpoint(self.endpoint.clone()));
        }
        if self.resource.trim_matches('/').is_empty() {
            return Err(ConfigError::EmptyResource);
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    /// `<endpoint>/<resource>` with exactly one slash between them.
    pub fn resource_url(&self) -> String {
        format!(
            "{}/{}",
            self.endpoint.trim_end_matches('/'),
            self.resource.trim_start_matches('/')
        )
    }
}
