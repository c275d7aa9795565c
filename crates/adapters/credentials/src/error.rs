//! Credential store error types.

use std::path::PathBuf;

use deckboard_domain::error::DeckboardError;

/// Errors reading a credential file.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    /// The file exists but could not be read.
    #[error("failed to read credential file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid key-value document.
    #[error("failed to parse credential file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The key is present but does not hold a string.
    #[error("credential key `{key}` does not hold a string")]
    NotAString { key: String },
}

impl From<CredentialError> for DeckboardError {
    fn from(err: CredentialError) -> Self {
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::Credential(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_offending_key() {
        let err = CredentialError::NotAString {
            key: "access_token".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "credential key `access_token` does not hold a string"
        );
    }

    #[test]
    fn should_convert_into_credential_error() {
        let err: DeckboardError = CredentialError::NotAString {
            key: "access_token".to_string(),
        }
        .into();
        assert!(matches!(err, DeckboardError::Credential(_)));
    }

    #[test]
    fn should_keep_underlying_cause_in_message() {
        let err: DeckboardError = CredentialError::Io {
            path: PathBuf::from("/run/deckboard/credentials.toml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
        }
        .into();
        let DeckboardError::Credential(message) = err else {
            panic!("expected credential error");
        };
        assert_eq!(
            message,
            "failed to read credential file /run/deckboard/credentials.toml: permission denied"
        );
    }
}
