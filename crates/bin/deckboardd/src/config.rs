//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `deckboard.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;

use serde::Deserialize;

use deckboard_adapter_credentials::DEFAULT_KEY;
use deckboard_adapter_http_client::{ApiConfig, DeckEndpoint};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Backend API settings.
    pub api: ApiConfig,
    /// Where the bearer token is read from.
    pub credentials: CredentialsConfig,
    /// Study app the deck cards link into.
    pub study: StudyConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `127.0.0.1`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Credential source configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    /// Key-value file written by the authentication flow.
    pub path: PathBuf,
    /// Key holding the bearer token.
    pub key: String,
    /// Fixed token, only settable through `DECKBOARD_TOKEN`.
    #[serde(skip)]
    pub token: Option<String>,
}

/// Study app configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StudyConfig {
    /// Base URL of the study app; empty links relative to the dashboard.
    pub base_url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `deckboard.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("deckboard.toml")?;
        config.apply_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = var("DECKBOARD_HOST") {
            self.server.host = val;
        }
        if let Some(val) = var("DECKBOARD_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("DECKBOARD_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = var("DECKBOARD_API_URL") {
            self.api.base_url = val;
        }
        if let Some(val) = var("DECKBOARD_ENDPOINT") {
            self.api.endpoint = val.parse::<DeckEndpoint>().map_err(ConfigError::Validation)?;
        }
        if let Some(val) = var("DECKBOARD_CREDENTIALS") {
            self.credentials.path = PathBuf::from(val);
        }
        if let Some(val) = var("DECKBOARD_TOKEN") {
            if !val.trim().is_empty() {
                self.credentials.token = Some(val);
            }
        }
        if let Some(val) = var("DECKBOARD_STUDY_URL") {
            self.study.base_url = val;
        }
        if let Some(val) = var("DECKBOARD_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "api base_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("credentials.toml"),
            key: DEFAULT_KEY.to_string(),
            token: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "deckboardd=info,deckboard=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
