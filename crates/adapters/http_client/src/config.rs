//! Backend API configuration.

use std::time::Duration;

use serde::Deserialize;

/// Which deck listing the dashboard shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckEndpoint {
    /// Decks in the user's collection.
    #[default]
    Collection,
    /// Every deck of the catalog, with the user's statistics when they exist.
    All,
}

impl DeckEndpoint {
    /// Resource path of this listing.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Collection => "/api/users/decks",
            Self::All => "/api/users/decks/all",
        }
    }
}

impl std::str::FromStr for DeckEndpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "collection" => Ok(Self::Collection),
            "all" => Ok(Self::All),
            other => Err(format!("unknown deck endpoint `{other}`")),
        }
    }
}

/// Configuration for the backend API client.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme, host and port of the backend, without a trailing path.
    pub base_url: String,
    /// Deck listing to fetch.
    pub endpoint: DeckEndpoint,
    /// Whole-request timeout in seconds. `None` leaves it to the transport.
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            endpoint: DeckEndpoint::Collection,
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    /// Full URL of `path` on the backend.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    /// Full URL of the configured deck listing.
    #[must_use]
    pub fn decks_url(&self) -> String {
        self.url(self.endpoint.path())
    }

    /// Configured timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
