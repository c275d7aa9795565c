//! Bearer-token API client.

use std::future::Future;

use reqwest::RequestBuilder;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use deckboard_app::ports::{Credential, DeckSource};
use deckboard_domain::decode::decode_user_decks;
use deckboard_domain::error::{DeckboardError, RequestError};
use deckboard_domain::user_deck::UserDeck;

use crate::config::ApiConfig;
use crate::error::ClientError;

/// Client for the deck listing, taking the credential on each call.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Build a client with its own connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the TLS backend cannot be initialised.
    pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ClientError::Transport)?;
        Ok(Self::with_client(config, http))
    }

    /// Build a client sharing an existing connection pool.
    #[must_use]
    pub fn with_client(config: ApiConfig, http: reqwest::Client) -> Self {
        Self { http, config }
    }

    /// Configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET` the configured deck listing on behalf of `credential`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Request`] on a non-2xx status, with code and reason phrase
    /// - [`ClientError::Transport`] when no response was received
    /// - [`ClientError::Decode`] when the body is not a JSON array of records
    pub async fn get_user_decks(&self, credential: &Credential) -> Result<Vec<UserDeck>, ClientError> {
        let request = self
            .http
            .get(self.config.decks_url())
            .header(AUTHORIZATION, credential.authorization_value())
            .header(CONTENT_TYPE, "application/json");
        fetch_decks(request).await
    }
}

impl DeckSource for ApiClient {
    fn fetch_user_decks(
        &self,
        credential: &Credential,
    ) -> impl Future<Output = Result<Vec<UserDeck>, DeckboardError>> + Send {
        async move { Ok(self.get_user_decks(credential).await?) }
    }
}

/// Send `request` and decode a deck listing from the response.
pub(crate) async fn fetch_decks(request: RequestBuilder) -> Result<Vec<UserDeck>, ClientError> {
    let response = request.send().await.map_err(ClientError::Transport)?;
    let status = response.status();
    if !status.is_success() {
        tracing::debug!(status = status.as_u16(), "deck listing rejected");
        return Err(RequestError {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
        .into());
    }
    let body = response.bytes().await.map_err(ClientError::Transport)?;
    let decks = decode_user_decks(&body)?;
    tracing::debug!(count = decks.len(), first = ?decks.first(), "deck listing received");
    Ok(decks)
}
