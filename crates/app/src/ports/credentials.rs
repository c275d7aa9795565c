//! Credential port: read access to the stored bearer token.

use std::fmt;
use std::future::Future;

use deckboard_domain::error::DeckboardError;

/// A bearer token issued by the authentication flow.
///
/// `Debug` never prints the token itself.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw bearer token.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.0
    }

    /// Value of the `Authorization` header carrying this credential.
    #[must_use]
    pub fn authorization_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&"<redacted>").finish()
    }
}

/// Read-only access to the persisted credential.
///
/// Implementations read the store on every call so a token written by the
/// authentication flow is picked up without a restart.
pub trait CredentialStore {
    /// Return the stored credential, or `None` when the user is not signed in.
    fn load(&self) -> impl Future<Output = Result<Option<Credential>, DeckboardError>> + Send;
}

impl<T: CredentialStore + Send + Sync> CredentialStore for std::sync::Arc<T> {
    fn load(&self) -> impl Future<Output = Result<Option<Credential>, DeckboardError>> + Send {
        (**self).load()
    }
}
