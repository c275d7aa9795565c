//! # deckboard-adapter-dashboard
//!
//! Dashboard adapter built on [axum](https://docs.rs/axum) and
//! [askama](https://docs.rs/askama).
//!
//! ## Responsibilities
//! - Serve a **server-side-rendered deck dashboard** with three mutually
//!   exclusive branches: loading, error with retry, populated list
//! - Render one deck card per `UserDeck`, keyed by its primary key
//! - Map the retry form (`POST /retry`) to a loader refetch (PRG pattern)
//! - Expose the loader state as JSON under `/api/decks`
//!
//! ## No-JS dashboard approach
//! - Every page is rendered server-side as complete HTML.
//! - The loading page uses `<meta http-equiv="refresh">` to poll until the
//!   fetch settles.
//!
//! ## Dependency rule
//! Depends on `deckboard-app` (for the loader and port traits) and
//! `deckboard-domain` (for records and display rules). Never leaks axum
//! types into the domain.

pub mod api;
pub mod components;
pub mod pages;
pub mod router;
pub mod state;
