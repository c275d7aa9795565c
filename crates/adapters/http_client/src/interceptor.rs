//! Credential-injecting client.
//!
//! Every request built through an [`AuthenticatedClient`] carries the
//! credential found in the store *at send time*. The injection applies to all
//! requests sharing the client, whatever path they target.

use reqwest::RequestBuilder;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use deckboard_app::ports::CredentialStore;
use deckboard_domain::user_deck::UserDeck;

use crate::client::fetch_decks;
use crate::config::{ApiConfig, DeckEndpoint};
use crate::error::ClientError;

/// HTTP client that reads the credential store for each outgoing request.
///
/// When the store is empty the request goes out without an `Authorization`
/// header and the backend decides.
pub struct AuthenticatedClient<C> {
    http: reqwest::Client,
    config: ApiConfig,
    credentials: C,
}

impl<C> AuthenticatedClient<C>
where
    C: CredentialStore + Send + Sync,
{
    /// Wrap an existing connection pool.
    pub fn new(config: ApiConfig, http: reqwest::Client, credentials: C) -> Self {
        Self {
            http,
            config,
            credentials,
        }
    }

    /// Start a `GET` to `path` with JSON content type and the stored credential.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Credential`] when the store cannot be read.
    pub async fn get(&self, path: &str) -> Result<RequestBuilder, ClientError> {
        let request = self
            .http
            .get(self.config.url(path))
            .header(CONTENT_TYPE, "application/json");
        self.authorize(request).await
    }

    /// Fetch a deck listing.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::get_user_decks`](crate::ApiClient::get_user_decks),
    /// plus [`ClientError::Credential`] when the store cannot be read.
    pub async fn get_user_decks(
        &self,
        endpoint: DeckEndpoint,
    ) -> Result<Vec<UserDeck>, ClientError> {
        let request = self.get(endpoint.path()).await?;
        fetch_decks(request).await
    }

    async fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder, ClientError> {
        let credential = self
            .credentials
            .load()
            .await
            .map_err(ClientError::Credential)?;
        Ok(match credential {
            Some(credential) => request.header(AUTHORIZATION, credential.authorization_value()),
            None => request,
        })
    }
}
