//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`DeckboardError`] via `From` at port boundaries.

/// Top-level error for loading a deck collection.
#[derive(Debug, thiserror::Error)]
pub enum DeckboardError {
    /// No credential is stored; detected before any network call.
    #[error("not authenticated")]
    Unauthenticated,

    /// The backend answered with a non-success status.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// The request never produced a response (connection refused, TLS, timeout…).
    #[error("network error: {0}")]
    Transport(String),

    /// The response body did not match the expected shape.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The credential store could not be read.
    #[error("credential store error: {0}")]
    Credential(String),
}

/// Non-2xx HTTP response from the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("HTTP {status}: {status_text}")]
pub struct RequestError {
    /// Numeric HTTP status code.
    pub status: u16,
    /// Canonical reason phrase (`Unauthorized`, `Not Found`, …).
    pub status_text: String,
}

/// Malformed response body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed deck response: {message}")]
pub struct DecodeError {
    /// Parser diagnostic, including line and column when available.
    pub message: String,
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}
