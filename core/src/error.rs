//! Error types for the request helper.
//!
//! # Design
//! `Status` gets a dedicated variant with the status code and a best-effort
//! message because callers routinely branch on "the server said no"
//! separately from "the server never answered." Transport failures stay
//! deliberately opaque: DNS failure, refused connection and aborted transfer
//! all read the same to a caller of this helper, which performs no recovery
//! and no retry. Decode and encode failures keep their `serde_json` cause as
//! an error source.

use thiserror::Error;

/// The network call itself could not be completed (host unreachable, DNS
/// failure, aborted connection, malformed URL). Carries an opaque description
/// from the underlying client and is not distinguished further.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors raised by [`ApiClient`](crate::client::ApiClient) operations.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The exchange never completed; no response was received.
    #[error("request failed: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a non-2xx status. `message` is the `message`
    /// field of the error body when one was present, otherwise the generic
    /// status text.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// A success response carried a body that is not valid JSON.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request body could not be serialized to JSON. Raised before any
    /// network call is made.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
}

impl RequestError {
    /// The HTTP status carried by this error, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
