//! Pure view models rendered by the page templates.

pub mod deck_card;

pub use deck_card::{DeckCardView, StudyLinks};
