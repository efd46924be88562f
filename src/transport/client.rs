use super::types::{Response, TransportError};
use std::sync::Arc;

/// Performs the network call underlying a fetch.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<Response, TransportError>;

    /// Short identifier recorded as the `transport` field of fetch log events
    fn name(&self) -> &str;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(&self, url: &str) -> Result<Response, TransportError> {
        (**self).get(url)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn get(&self, url: &str) -> Result<Response, TransportError> {
        (**self).get(url)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Transport backed by a plain function of shape `(url) -> (response, error)`
pub struct FnTransport<F> {
    func: F,
}

impl<F> Transport for FnTransport<F>
where
    F: Fn(&str) -> Result<Response, TransportError> + Send + Sync,
{
    fn get(&self, url: &str) -> Result<Response, TransportError> {
        (self.func)(url)
    }

    fn name(&self) -> &str {
        "fn"
    }
}

/// Wraps a closure as a [`Transport`].
///
/// ```
/// use fetchlog::transport::{from_fn, Response, Transport};
///
/// let transport = from_fn(|_url| Ok(Response::new(204)));
/// assert_eq!(transport.get("http://example.com").unwrap().status(), 204);
/// ```
pub fn from_fn<F>(func: F) -> FnTransport<F>
where
    F: Fn(&str) -> Result<Response, TransportError> + Send + Sync,
{
    FnTransport { func }
}

impl<F> std::fmt::Debug for FnTransport<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnTransport").finish_non_exhaustive()
    }
}
