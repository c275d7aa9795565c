//! JSON view of the loader state.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use deckboard_app::ports::{CredentialStore, DeckSource};
use deckboard_app::services::deck_loader::LoadState;
use deckboard_domain::user_deck::UserDeck;

use crate::state::AppState;

/// Body of `GET /api/decks`, tagged by `status`.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DecksResponse {
    Loading,
    Ready { decks: Vec<UserDeck> },
    Failed { error: String },
}

impl From<LoadState> for DecksResponse {
    fn from(state: LoadState) -> Self {
        match state {
            LoadState::Loading => Self::Loading,
            LoadState::Ready(decks) => Self::Ready { decks },
            LoadState::Failed(error) => Self::Failed { error },
        }
    }
}

/// `GET /api/decks`
pub async fn decks<S, C>(State(state): State<AppState<S, C>>) -> Json<DecksResponse>
where
    S: DeckSource + Send + Sync + 'static,
    C: CredentialStore + Send + Sync + 'static,
{
    Json(DecksResponse::from(state.loader.state()))
}
