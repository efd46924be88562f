//! fetchlog - HTTP GET with an injectable transport and configurable logging
//!
//! This library issues an HTTP GET to a caller-supplied URL, reports the resulting
//! status code or a wrapped transport failure, and emits exactly one log event per
//! outcome.
//!
//! # Core Concepts
//!
//! - **Transport**: the component performing the actual network call. The blocking
//!   reqwest transport is used in production; closures and scripted mocks stand in for
//!   it in tests.
//! - **Fetcher**: owns a transport (passed in at construction, never swapped behind
//!   its back) and turns each call into an outcome plus one log line.
//! - **Sink**: a destination for log output (console, file, or both).
//!
//! # Example Usage
//!
//! ```no_run
//! use fetchlog::{init_logging, Fetcher, LoggingConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! init_logging(LoggingConfig::tee(false, "fetchlog.log"))?;
//!
//! let fetcher = Fetcher::with_defaults()?;
//! match fetcher.fetch("http://www.google.com") {
//!     Ok(status) => println!("status {}", status),
//!     Err(err) => println!("{}", err),
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod fetcher;
pub mod transport;
pub mod util;

pub use config::{ConfigError, FetchlogConfig};
pub use fetcher::{FetchError, Fetcher};
pub use transport::{ReqwestTransport, Response, Transport, TransportError};
pub use util::{build_subscriber, init_logging, LoggingConfig, LoggingError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
