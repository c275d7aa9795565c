//! HTTP client error types.

use deckboard_domain::error::{DecodeError, DeckboardError, RequestError};

/// Errors specific to the HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The backend answered with a non-success status.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// reqwest failed before a response was read.
    #[error("network error")]
    Transport(#[source] reqwest::Error),

    /// The body was not a JSON array of deck records.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The credential store could not be read.
    #[error("credential store error")]
    Credential(#[source] DeckboardError),
}

impl From<ClientError> for DeckboardError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Request(err) => Self::Request(err),
            ClientError::Transport(err) => Self::Transport(err.to_string()),
            ClientError::Decode(err) => Self::Decode(err),
            ClientError::Credential(err) => err,
        }
    }
}
