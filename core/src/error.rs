//! Error types for the employee API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because a detail view distinguishes
//! "this employee is gone" from "the server returned an unexpected status."
//! Only the get operation produces it; every other non-2xx response lands in
//! `Http` with the raw status code and body for debugging.

use thiserror::Error;

/// Errors returned by `EmployeeClient` and `EmployeeService`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was obtained: DNS, connect, TLS or I/O failure.
    #[error("network error: {0}")]
    Network(String),

    /// The server returned 404 for a single-employee lookup.
    #[error("employee not found")]
    NotFound,

    /// The server returned a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("decode failed: {0}")]
    Decode(String),

    /// The request payload could not be serialized to JSON.
    #[error("encode failed: {0}")]
    Encode(String),
}

impl ApiError {
    /// The HTTP status behind this error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Network(_) | ApiError::Decode(_) | ApiError::Encode(_) => None,
        }
    }
}
