//! Transport subsystem.
//!
//! # Data Flow
//! ```text
//! TaskSubmission
//!     → endpoint.rs (submit URL with ?t=<millis>, or query URL with fields)
//!     → OpaqueTransport::send   (POST form body, response never read)
//!     → ReadableTransport::fetch (GET, body read as text)
//! ```
//!
//! # Design Decisions
//! - The opaque transport only reports "sent" or an error; it never judges
//!   whether the server accepted the submission
//! - Transports are traits so the handler can be driven by test doubles
//! - Timeouts are optional and applied by the caller through `with_timeout`

pub mod endpoint;
pub mod http;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::submission::TaskSubmission;

pub use self::endpoint::Endpoint;
pub use self::http::HttpTransport;

/// Errors raised by a transport call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The endpoint could not be reached (DNS, refused connection, reset).
    #[error("Failed to fetch: {0}")]
    Unreachable(String),

    #[error("Request timed out after {0} seconds")]
    TimedOut(u64),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Failed to read response body: {0}")]
    Body(String),
}

impl TransportError {
    /// True for failures where the network itself is the problem.
    pub fn is_network(&self) -> bool {
        matches!(self, TransportError::Unreachable(_) | TransportError::TimedOut(_))
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        // Request URLs carry every submitted field; keep them out of messages.
        let e = e.without_url();
        if e.is_body() || e.is_decode() {
            TransportError::Body(e.to_string())
        } else if e.is_connect() || e.is_timeout() || (e.is_request() && e.status().is_none()) {
            // No HTTP response at all: refused, reset or hung up.
            TransportError::Unreachable(e.to_string())
        } else {
            TransportError::Request(e.to_string())
        }
    }
}

/// A response whose status and body can be inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadableResponse {
    pub status: u16,
    pub text: String,
}

/// Fire-and-forget delivery: completes with `Ok(())` once the request was
/// sent, whatever the server made of it.
pub trait OpaqueTransport: Send + Sync {
    fn send(
        &self,
        url: &Url,
        submission: &TaskSubmission,
    ) -> impl Future<Output = Result<(), TransportError>> + Send;
}

/// Delivery whose response body is handed back to the caller.
pub trait ReadableTransport: Send + Sync {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<ReadableResponse, TransportError>> + Send;
}

impl<T: OpaqueTransport> OpaqueTransport for Arc<T> {
    fn send(
        &self,
        url: &Url,
        submission: &TaskSubmission,
    ) -> impl Future<Output = Result<(), TransportError>> + Send {
        (**self).send(url, submission)
    }
}

impl<T: ReadableTransport> ReadableTransport for Arc<T> {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<ReadableResponse, TransportError>> + Send {
        (**self).fetch(url)
    }
}

/// Bound a transport call by an optional deadline.
pub async fn with_timeout<T, F>(limit: Option<Duration>, fut: F) -> Result<T, TransportError>
where
    F: Future<Output = Result<T, TransportError>>,
{
    match limit {
        Some(limit) => tokio::time::timeout(limit, fut)
            .await
            .map_err(|_| TransportError::TimedOut(limit.as_secs()))?,
        None => fut.await,
    }
}
