//! Deck source port: where deck collections come from.

use std::future::Future;

use deckboard_domain::error::DeckboardError;
use deckboard_domain::user_deck::UserDeck;

use super::Credential;

/// Fetches a user's deck collection.
pub trait DeckSource {
    /// Fetch every [`UserDeck`] of the user identified by `credential`, in
    /// backend order.
    fn fetch_user_decks(
        &self,
        credential: &Credential,
    ) -> impl Future<Output = Result<Vec<UserDeck>, DeckboardError>> + Send;
}

impl<T: DeckSource + Send + Sync> DeckSource for std::sync::Arc<T> {
    fn fetch_user_decks(
        &self,
        credential: &Credential,
    ) -> impl Future<Output = Result<Vec<UserDeck>, DeckboardError>> + Send {
        (**self).fetch_user_decks(credential)
    }
}
