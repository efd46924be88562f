use crate::transport::TransportError;
use thiserror::Error;

/// Errors returned by [`Fetcher::fetch`](super::Fetcher::fetch)
#[derive(Debug, Error)]
pub enum FetchError {
    /// The transport could not complete the request. The original failure is kept as
    /// the error source.
    #[error("failed fetching URL {url}: {source}")]
    TransportFailure {
        url: String,
        source: TransportError,
    },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            FetchError::TransportFailure { url, .. } => url,
        }
    }

    pub fn transport_error(&self) -> &TransportError {
        match self {
            FetchError::TransportFailure { source, .. } => source,
        }
    }
}

/// Renders an error and all of its sources as `outer: inner: innermost`.
///
/// `reqwest` keeps the interesting detail (e.g. "relative URL without a base") in the
/// source chain rather than in its own message.
pub(crate) fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut current = err.source();
    while let Some(cause) = current {
        let message = cause.to_string();
        if !rendered.ends_with(&message) {
            rendered.push_str(": ");
            rendered.push_str(&message);
        }
        current = cause.source();
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_transport_failure_display() {
        let err = FetchError::TransportFailure {
            url: "foo".to_string(),
            source: TransportError::network("no such host"),
        };

        assert_eq!(err.to_string(), "failed fetching URL foo: no such host");
        assert_eq!(err.url(), "foo");
    }

    #[test]
    fn test_transport_failure_keeps_source() {
        let err = FetchError::TransportFailure {
            url: "foo".to_string(),
            source: TransportError::network("no such host"),
        };

        let source = err.source().expect("source should be preserved");
        assert_eq!(source.to_string(), "no such host");
        assert!(matches!(
            err.transport_error(),
            TransportError::Network { .. }
        ));
    }

    #[test]
    fn test_error_chain_includes_sources() {
        let err = FetchError::TransportFailure {
            url: "foo".to_string(),
            source: TransportError::network("no such host"),
        };

        // the source text is already part of the outer message and is not repeated
        assert_eq!(error_chain(&err), "failed fetching URL foo: no such host");
    }
}
