//! HTTP GET fetcher
//!
//! The [`Fetcher`] issues a GET request through its [`Transport`], reports the status
//! code or a wrapped transport failure, and emits exactly one log event per call:
//! `INFO` with the URL and human-readable status on success, `ERROR` with the URL and
//! the underlying error message on failure. Both carry the transport's name.
//! Transports themselves never log.
//!
//! # Example
//!
//! ```
//! use fetchlog::transport::{MockReply, MockTransport};
//! use fetchlog::Fetcher;
//!
//! let fetcher = Fetcher::new(MockTransport::repeating(MockReply::status(404)));
//! assert_eq!(fetcher.fetch("http://example.com/missing").unwrap(), 404);
//! ```

mod error;

pub use error::FetchError;

use crate::transport::{ReqwestTransport, Transport, TransportError};
use error::error_chain;
use tracing::{error, info};

/// Fetches URLs through an explicitly injected transport
#[derive(Debug)]
pub struct Fetcher<T = ReqwestTransport> {
    transport: T,
}

impl Fetcher<ReqwestTransport> {
    /// Creates a fetcher backed by a default blocking reqwest client
    pub fn with_defaults() -> Result<Self, TransportError> {
        Ok(Self::new(ReqwestTransport::new()?))
    }
}

impl<T: Transport> Fetcher<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Issues a GET to `url` and returns the response status code.
    ///
    /// Any HTTP status, including 4xx and 5xx, is a successful fetch. Only a failure
    /// of the transport itself produces an error.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::TransportFailure`] wrapping the transport's error when the
    /// request could not be completed.
    pub fn fetch(&self, url: &str) -> Result<u16, FetchError> {
        match self.transport.get(url) {
            Ok(response) => {
                info!(
                    url,
                    transport = self.transport.name(),
                    status = %response,
                    status_code = response.status(),
                    "Fetched URL"
                );
                Ok(response.status())
            }
            Err(source) => {
                error!(
                    url,
                    transport = self.transport.name(),
                    error = %error_chain(&source),
                    "Failed fetching URL"
                );
                Err(FetchError::TransportFailure {
                    url: url.to_string(),
                    source,
                })
            }
        }
    }

    /// Fetches each URL in order, pairing every URL with its outcome
    pub fn fetch_all<I, S>(&self, urls: I) -> Vec<(String, Result<u16, FetchError>)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        urls.into_iter()
            .map(|url| {
                let url = url.as_ref();
                (url.to_string(), self.fetch(url))
            })
            .collect()
    }
}
