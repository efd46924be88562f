//! HTTP transport abstraction layer
//!
//! This module provides a trait-based abstraction over the network call that backs a
//! fetch, allowing different transports (reqwest, closures, mocks) to be used
//! interchangeably. The transport is always handed to the fetcher explicitly; there is
//! no process-wide slot to overwrite.

mod client;
mod http;
mod mock;
mod types;

pub use client::{from_fn, FnTransport, Transport};
pub use http::ReqwestTransport;
pub use mock::{MockReply, MockTransport};
pub use types::{Response, TransportError};
