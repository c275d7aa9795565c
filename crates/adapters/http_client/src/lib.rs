//! # deckboard-adapter-http-client
//!
//! HTTP client for the learning backend, built on
//! [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - `GET {base_url}/api/users/decks` (or `/api/users/decks/all`) with a
//!   bearer credential and map the response into typed [`UserDeck`] records
//! - Map non-2xx statuses, transport failures and malformed bodies into
//!   distinct error kinds
//! - Offer a credential-injecting client that reads the credential store on
//!   every outgoing request
//!
//! ## Dependency rule
//! Depends on `deckboard-app` (for port traits) and `deckboard-domain` (for
//! records and decoding). Never leaks reqwest types through the port.
//!
//! [`UserDeck`]: deckboard_domain::user_deck::UserDeck

pub mod client;
pub mod config;
pub mod error;
pub mod interceptor;

pub use client::ApiClient;
pub use config::{ApiConfig, DeckEndpoint};
pub use error::ClientError;
pub use interceptor::AuthenticatedClient;
