//! Blocking reqwest transport
//!
//! Delegates every request to `reqwest::blocking::Client` with the client's default
//! redirect and timeout policies. The response body is dropped unread.

use super::client::Transport;
use super::types::{Response, TransportError};
use reqwest::blocking::Client;

/// Transport performing real HTTP GET requests
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport around a default blocking client
    ///
    /// Must not be called from inside an async runtime; the blocking client owns its own.
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    /// Wraps an already configured client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn get(&self, url: &str) -> Result<Response, TransportError> {
        let response = self.client.get(url).send()?;
        Ok(Response::from(&response))
    }

    fn name(&self) -> &str {
        "reqwest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_without_scheme_is_rejected() {
        let transport = ReqwestTransport::new().unwrap();

        let err = transport.get("www.google.com").unwrap_err();

        match err {
            TransportError::Request(e) => assert!(e.is_builder()),
            other => panic!("Expected Request error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_url_is_rejected() {
        let transport = ReqwestTransport::new().unwrap();
        assert!(transport.get("").is_err());
    }

    #[test]
    fn test_transport_name() {
        let transport = ReqwestTransport::from_client(Client::new());
        assert_eq!(transport.name(), "reqwest");
    }
}
