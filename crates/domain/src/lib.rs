//! # deckboard-domain
//!
//! Pure domain model for the deckboard learning dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Decks** (static catalog entries)
//! - Define **`UserDecks`** (a user's progress record for one deck)
//! - Derive the values a dashboard displays (card totals, rate fallbacks,
//!   colour tiers)
//! - Decode backend payloads into typed records
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod deck;
pub mod decode;
pub mod stats;
pub mod user_deck;
