//! Deck: a named collection of study cards from the static catalog.

use serde::{Deserialize, Serialize};

use crate::id::DeckPk;

/// A catalog entry with lifetime counters across all users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub deck_pk: DeckPk,
    /// Identifier of the deck in the external card source.
    pub id_json: String,
    pub name: String,
    #[serde(default)]
    pub total_correct: u64,
    #[serde(default)]
    pub total_attempts: u64,
}

impl Deck {
    /// Create a deck with zeroed counters.
    #[must_use]
    pub fn new(deck_pk: DeckPk, id_json: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            deck_pk,
            id_json: id_json.into(),
            name: name.into(),
            total_correct: 0,
            total_attempts: 0,
        }
    }
}
