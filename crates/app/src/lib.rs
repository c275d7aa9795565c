//! # deckboard-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DeckSource`: fetch a user's deck collection from the backend
//!   - `CredentialStore`: read the bearer credential from persistent storage
//! - Define the **deck loader** use-case: the loading / ready / failed state
//!   machine a dashboard page renders from, with manual refetch
//!
//! ## Dependency rule
//! Depends on `deckboard-domain` only (plus `tokio` for tasks and channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
