//! Error types for the todo RPC client.
//!
//! `NotFound` gets a dedicated variant because callers frequently
//! distinguish "the todo does not exist" from "the server returned an
//! unexpected status." All other non-200 responses land in `Http` with the
//! raw status code and body for debugging.

use thiserror::Error;

/// Errors returned by `TodoServiceClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 — the referenced todo does not exist.
    #[error("todo not found")]
    NotFound,

    /// The server returned a non-200 status other than 404.
    #[error("rpc failed with HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected message.
    #[error("failed to decode response: {0}")]
    Deserialization(String),

    /// The request message could not be serialized to JSON.
    #[error("failed to encode request: {0}")]
    Serialization(String),
}
