//! # deckboard-adapter-credentials
//!
//! Implementations of the [`CredentialStore`](deckboard_app::ports::CredentialStore)
//! port.
//!
//! ## Responsibilities
//! - Read the bearer token written by the authentication flow from a
//!   persistent key-value file, on every call
//! - Provide a fixed in-memory token for tests and environment-supplied tokens
//!
//! ## Dependency rule
//! Depends on `deckboard-app` (for the port trait) and `deckboard-domain`
//! (for the error type). Never writes the store.

pub mod error;
pub mod file;
pub mod memory;

pub use error::CredentialError;
pub use file::{DEFAULT_KEY, FileCredentialStore};
pub use memory::StaticCredentialStore;
