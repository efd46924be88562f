use reqwest::StatusCode;
use std::fmt;
use thiserror::Error;

/// Errors raised when a transport cannot complete a request
#[derive(Debug, Error)]
pub enum TransportError {
    /// The reqwest client failed (invalid URL, DNS, connection refused, TLS, timeout)
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// A network failure reported by a substitute transport
    #[error("{message}")]
    Network { message: String },
}

impl TransportError {
    pub fn network(message: impl Into<String>) -> Self {
        TransportError::Network {
            message: message.into(),
        }
    }
}

/// Response-like value returned by a transport.
///
/// Only the status line is kept; the body is never read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
    status: u16,
}

impl Response {
    pub fn new(status: u16) -> Self {
        Self { status }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// Human-readable status, e.g. `200 OK` or `503 Service Unavailable`.
    ///
    /// Codes without a canonical reason phrase render as the bare number.
    pub fn status_text(&self) -> String {
        let reason = StatusCode::from_u16(self.status)
            .ok()
            .and_then(|code| code.canonical_reason());

        match reason {
            Some(reason) => format!("{} {}", self.status, reason),
            None => self.status.to_string(),
        }
    }
}

impl From<&reqwest::blocking::Response> for Response {
    fn from(response: &reqwest::blocking::Response) -> Self {
        Self::new(response.status().as_u16())
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.status_text())
    }
}
