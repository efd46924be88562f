//! Utility modules for fetchlog
//!
//! - Structured logging setup and configuration

pub mod logging;

pub use logging::{build_subscriber, init_logging, parse_level, LoggingConfig, LoggingError};
