//! Configuration management for fetchlog
//!
//! Settings are loaded from environment variables with sensible defaults. Command line
//! flags (see [`crate::cli`]) override whatever the environment provides.
//!
//! # Environment Variables
//!
//! - `FETCHLOG_LOG_LEVEL`: Logging level (trace|debug|info|warn|error) - default: "info"
//! - `FETCHLOG_LOG_JSON`: JSON console output (true|false) - default: "false"
//! - `FETCHLOG_LOG_CONSOLE`: Log to stdout (true|false) - default: "true"
//! - `FETCHLOG_LOG_FILE`: Append JSON log lines to this file - default: unset
//! - `FETCHLOG_LOG_NAME`: Logger name attached to every event - default: unset
//! - `FETCHLOG_URLS`: Comma-separated URLs to fetch - default: "www.google.com,http://www.google.com"
//!
//! # Example
//!
//! ```no_run
//! use fetchlog::FetchlogConfig;
//!
//! let config = FetchlogConfig::default();
//! config.validate().expect("Invalid configuration");
//!
//! fetchlog::init_logging(config.logging_config()).expect("logging setup failed");
//! ```

use crate::util::logging::{parse_level, LoggingConfig};
use std::env;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_JSON: bool = false;
const DEFAULT_LOG_CONSOLE: bool = true;

/// The first URL has no scheme and fails; the second succeeds
pub const DEFAULT_URLS: &[&str] = &["www.google.com", "http://www.google.com"];

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Valid options: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("No log sink enabled. Enable console output or set FETCHLOG_LOG_FILE")]
    NoSinks,

    #[error("No URLs to fetch")]
    NoUrls,

    #[error("Empty URL at position {0}")]
    EmptyUrl(usize),
}

#[derive(Debug, Clone)]
pub struct FetchlogConfig {
    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    /// JSON console output
    pub log_json: bool,

    /// Write log events to stdout
    pub log_console: bool,

    /// Append log events to this file
    pub log_file: Option<PathBuf>,

    /// Logger name recorded on every event
    pub log_name: Option<String>,

    /// URLs fetched by the driver, in order
    pub urls: Vec<String>,
}

impl Default for FetchlogConfig {
    /// Loads from `FETCHLOG_*` environment variables, falling back to defaults for
    /// anything missing or unparsable
    fn default() -> Self {
        let log_level = env::var("FETCHLOG_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        let log_json = env_bool("FETCHLOG_LOG_JSON").unwrap_or(DEFAULT_LOG_JSON);
        let log_console = env_bool("FETCHLOG_LOG_CONSOLE").unwrap_or(DEFAULT_LOG_CONSOLE);

        let log_file = env::var("FETCHLOG_LOG_FILE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let log_name = env::var("FETCHLOG_LOG_NAME")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let urls = env::var("FETCHLOG_URLS")
            .map(|v| split_urls(&v))
            .unwrap_or_else(|_| DEFAULT_URLS.iter().map(|u| u.to_string()).collect());

        Self {
            log_level,
            log_json,
            log_console,
            log_file,
            log_name,
            urls,
        }
    }
}

fn env_bool(key: &str) -> Option<bool> {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().to_lowercase().parse::<bool>().ok())
}

fn split_urls(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .collect()
}

impl FetchlogConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the log level is unknown, no sink is enabled, or the
    /// URL list is empty or contains a blank entry
    pub fn validate(&self) -> Result<(), ConfigError> {
        if parse_level(&self.log_level).is_none() {
            return Err(ConfigError::InvalidLogLevel(self.log_level.clone()));
        }

        if !self.log_console && self.log_file.is_none() {
            return Err(ConfigError::NoSinks);
        }

        if self.urls.is_empty() {
            return Err(ConfigError::NoUrls);
        }

        if let Some(index) = self.urls.iter().position(|u| u.trim().is_empty()) {
            return Err(ConfigError::EmptyUrl(index));
        }

        Ok(())
    }

    /// Maps the logging settings onto a [`LoggingConfig`]
    pub fn logging_config(&self) -> LoggingConfig {
        let level = parse_level(&self.log_level).unwrap_or(tracing::Level::INFO);

        LoggingConfig {
            level,
            use_json: self.log_json,
            console: self.log_console,
            file: self.log_file.clone(),
            name: self.log_name.clone(),
            ..Default::default()
        }
    }
}

impl fmt::Display for FetchlogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fetchlog Configuration:")?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        writeln!(f, "  Log JSON: {}", self.log_json)?;
        writeln!(f, "  Log Console: {}", self.log_console)?;
        if let Some(ref file) = self.log_file {
            writeln!(f, "  Log File: {}", file.display())?;
        }
        if let Some(ref name) = self.log_name {
            writeln!(f, "  Log Name: {}", name)?;
        }
        writeln!(f, "  URLs: {}", self.urls.join(", "))?;
        Ok(())
    }
}
