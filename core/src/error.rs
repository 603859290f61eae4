//! Error types for the posts client.
//!
//! No status is treated specially: every non-2xx response lands in
//! `HttpError` with the raw status code and body.

use thiserror::Error;

/// Errors returned by `PostClient` and `ResourceClient` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a status outside `200..=299`.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The host transport could not complete the round trip.
    #[error("transport failed: {0}")]
    Transport(String),
}
