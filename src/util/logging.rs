//! Structured logging setup for fetchlog
//!
//! This module provides initialization and configuration for structured logging using
//! the `tracing` ecosystem. A single [`LoggingConfig`] chooses the level, the console
//! format and the sinks (console, log file, or both).
//!
//! # Features
//!
//! - Console output to stdout with pretty formatting (default) or JSON
//! - Optional JSON log file, opened append-only and created if absent
//! - Environment-based filtering via `RUST_LOG`
//! - Optional logger name, attached to every event emitted inside [`LoggingConfig::span`]
//! - Can only be installed once per process
//!
//! # Example
//!
//! ```no_run
//! use fetchlog::util::{init_logging, LoggingConfig};
//!
//! // Console and file at debug level
//! let config = LoggingConfig::tee(true, "fetchlog.log").with_name("demo");
//! init_logging(config.clone()).expect("logging setup failed");
//!
//! let _span = config.span().entered();
//! tracing::info!(url = "http://www.google.com", "Application started");
//! ```

use std::env;
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing::{Level, Span, Subscriber};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

/// Set once a global subscriber has been installed. Held for the whole install so
/// concurrent first calls cannot race each other.
static INITIALIZED: Mutex<bool> = Mutex::new(false);

/// Dependencies whose debug output drowns our own events
const NOISY_TARGETS: &[&str] = &["h2=warn", "hyper=warn", "hyper_util=warn", "reqwest=warn"];

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Errors raised while setting up logging
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to open log file {path}: {source}")]
    OpenLogFile { path: PathBuf, source: io::Error },

    #[error("Invalid log filter directive: {0}")]
    InvalidDirective(String),

    #[error("Failed to install global subscriber: {0}")]
    Install(String),
}

/// Configuration for logging initialization
///
/// Controls the minimum log level, the console output format, which sinks receive
/// events, and what metadata is included in each line.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to display
    pub level: Level,

    /// Use JSON output on the console (the file sink is always JSON)
    pub use_json: bool,

    /// Write events to stdout
    pub console: bool,

    /// Append events to this file
    pub file: Option<PathBuf>,

    /// Include the module target (e.g., fetchlog::fetcher) in logs
    pub include_target: bool,

    /// Include file and line number information
    pub include_location: bool,

    /// Include thread ID and name in logs
    pub include_thread_ids: bool,

    /// Logger name recorded as the `logger` field of every event inside [`Self::span`]
    pub name: Option<String>,
}

impl Default for LoggingConfig {
    /// Defaults:
    /// - Level: INFO
    /// - Console: pretty text on stdout
    /// - File: none
    /// - Target: true
    /// - Location: false
    /// - Thread IDs: false
    /// - Name: none
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            console: true,
            file: None,
            include_target: true,
            include_location: false,
            include_thread_ids: false,
            name: None,
        }
    }
}

impl LoggingConfig {
    /// Creates a logging configuration with the specified level
    ///
    /// ```
    /// use fetchlog::util::LoggingConfig;
    /// use tracing::Level;
    ///
    /// let config = LoggingConfig::with_level(Level::DEBUG);
    /// assert!(config.console);
    /// ```
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// JSON to stdout at INFO with location and thread metadata
    pub fn production() -> Self {
        Self {
            level: Level::INFO,
            use_json: true,
            console: true,
            file: None,
            include_target: true,
            include_location: true,
            include_thread_ids: true,
            name: None,
        }
    }

    /// Pretty console output at DEBUG with minimal metadata
    pub fn development() -> Self {
        Self {
            level: Level::DEBUG,
            ..Default::default()
        }
    }

    /// Named console-only logger that reports the calling location of each event
    pub fn console(name: impl Into<String>, debug: bool) -> Self {
        Self {
            level: debug_level(debug),
            include_location: true,
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// File-only logger at INFO. Combine with [`Self::with_name`] for a named file logger.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            console: false,
            file: Some(path.into()),
            ..Default::default()
        }
    }

    /// Console text plus a JSON log file, both at the same level
    pub fn tee(debug: bool, path: impl Into<PathBuf>) -> Self {
        Self {
            level: debug_level(debug),
            file: Some(path.into()),
            ..Default::default()
        }
    }

    /// Adds (or replaces) the file sink
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn has_sink(&self) -> bool {
        self.console || self.file.is_some()
    }

    /// Root span carrying the logger name, or a disabled span when unnamed
    ///
    /// Create and enter it after the subscriber is in place; events emitted while it is
    /// entered carry `logger = <name>`.
    pub fn span(&self) -> Span {
        match &self.name {
            // ERROR so that no level filter drops the span
            Some(name) => tracing::error_span!("fetchlog", logger = %name),
            None => Span::none(),
        }
    }
}

fn debug_level(debug: bool) -> Level {
    if debug {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Parses a log level from a string, ignoring case and surrounding whitespace
///
/// ```
/// use fetchlog::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("debug"), Some(Level::DEBUG));
/// assert_eq!(parse_level("INFO"), Some(Level::INFO));
/// assert_eq!(parse_level("invalid"), None);
/// ```
pub fn parse_level(level_str: &str) -> Option<Level> {
    match level_str.trim().to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

fn build_filter(level: Level) -> Result<EnvFilter, LoggingError> {
    // RUST_LOG wins when set
    if let Ok(directives) = env::var(EnvFilter::DEFAULT_ENV) {
        if !directives.trim().is_empty() {
            return EnvFilter::try_new(directives)
                .map_err(|e| LoggingError::InvalidDirective(e.to_string()));
        }
    }

    let mut directives = vec![level.as_str().to_lowercase()];
    directives.extend(NOISY_TARGETS.iter().map(|d| d.to_string()));

    EnvFilter::try_new(directives.join(","))
        .map_err(|e| LoggingError::InvalidDirective(e.to_string()))
}

fn console_layer(config: &LoggingConfig) -> BoxedLayer {
    if config.use_json {
        Box::new(
            fmt::layer::<Registry>()
                .json()
                .with_writer(io::stdout)
                .with_target(config.include_target)
                .with_file(config.include_location)
                .with_line_number(config.include_location)
                .with_thread_ids(config.include_thread_ids)
                .with_thread_names(config.include_thread_ids),
        )
    } else {
        Box::new(
            fmt::layer::<Registry>()
                .with_writer(io::stdout)
                .with_target(config.include_target)
                .with_file(config.include_location)
                .with_line_number(config.include_location)
                .with_thread_ids(config.include_thread_ids)
                .with_thread_names(config.include_thread_ids),
        )
    }
}

fn file_layer(config: &LoggingConfig, path: &Path) -> Result<BoxedLayer, LoggingError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::OpenLogFile {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(Box::new(
        fmt::layer::<Registry>()
            .json()
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .with_target(config.include_target)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_thread_ids(config.include_thread_ids)
            .with_thread_names(config.include_thread_ids),
    ))
}

/// Builds the subscriber described by `config` without installing it
///
/// Useful for scoping logging to a closure with `tracing::subscriber::with_default`.
pub fn build_subscriber(
    config: &LoggingConfig,
) -> Result<impl Subscriber + Send + Sync + 'static, LoggingError> {
    let filter = build_filter(config.level)?;

    let mut layers: Vec<BoxedLayer> = Vec::new();
    if config.console {
        layers.push(console_layer(config));
    }
    if let Some(path) = &config.file {
        layers.push(file_layer(config, path)?);
    }

    Ok(tracing_subscriber::registry().with(layers).with(filter))
}

/// Installs the global subscriber described by `config`
///
/// Only the first successful call installs a subscriber; later calls return `Ok(())`
/// without changing anything.
///
/// # Errors
///
/// Fails when the log file cannot be opened, when `RUST_LOG` holds an invalid
/// directive, or when another global subscriber was installed by someone else.
pub fn init_logging(config: LoggingConfig) -> Result<(), LoggingError> {
    let mut initialized = INITIALIZED
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if *initialized {
        return Ok(());
    }

    let subscriber = build_subscriber(&config)?;
    subscriber
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))?;

    *initialized = true;
    Ok(())
}
