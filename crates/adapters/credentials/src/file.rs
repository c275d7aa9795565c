//! File-backed credential store.
//!
//! The file is a flat TOML document of string keys, shared with the
//! authentication flow that writes it:
//!
//! ```toml
//! access_token = "eyJhbGciOi..."
//! ```

use std::future::Future;
use std::path::{Path, PathBuf};

use deckboard_app::ports::{Credential, CredentialStore};
use deckboard_domain::error::DeckboardError;

use crate::error::CredentialError;

/// Key the authentication flow stores the bearer token under.
pub const DEFAULT_KEY: &str = "access_token";

/// Reads one key of a key-value file on every [`load`](CredentialStore::load).
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
    key: String,
}

impl FileCredentialStore {
    /// Store reading [`DEFAULT_KEY`] from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_key(path, DEFAULT_KEY)
    }

    /// Store reading `key` from `path`.
    pub fn with_key(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Option<Credential>, CredentialError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no credential file");
                return Ok(None);
            }
            Err(source) => {
                return Err(CredentialError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        parse_credential(&content, &self.key).map_err(|err| match err {
            ParseFailure::Toml(source) => CredentialError::Parse {
                path: self.path.clone(),
                source,
            },
            ParseFailure::NotAString => CredentialError::NotAString {
                key: self.key.clone(),
            },
        })
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> impl Future<Output = Result<Option<Credential>, DeckboardError>> + Send {
        async move { Ok(self.read().await?) }
    }
}

enum ParseFailure {
    Toml(toml::de::Error),
    NotAString,
}

/// Extract `key` from a TOML document. Missing or blank values mean "not signed in".
fn parse_credential(content: &str, key: &str) -> Result<Option<Credential>, ParseFailure> {
    let table: toml::Table = toml::from_str(content).map_err(ParseFailure::Toml)?;
    let Some(value) = table.get(key) else {
        return Ok(None);
    };
    let token = value.as_str().ok_or(ParseFailure::NotAString)?.trim();
    if token.is_empty() {
        return Ok(None);
    }
    Ok(Some(Credential::bearer(token)))
}
