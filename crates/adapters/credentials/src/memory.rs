//! In-memory credential store.

use std::future::Future;

use deckboard_app::ports::{Credential, CredentialStore};
use deckboard_domain::error::DeckboardError;

/// Holds a fixed credential, or none.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialStore {
    credential: Option<Credential>,
}

impl StaticCredentialStore {
    /// A store that always returns `token`.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            credential: Some(Credential::bearer(token)),
        }
    }

    /// A store with no credential: every load reports "not signed in".
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

impl CredentialStore for StaticCredentialStore {
    fn load(&self) -> impl Future<Output = Result<Option<Credential>, DeckboardError>> + Send {
        let credential = self.credential.clone();
        async move { Ok(credential) }
    }
}
