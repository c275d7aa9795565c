//! # deckboardd: deckboard daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize `tracing` from the configured filter
//! - Pick the credential store: a fixed `DECKBOARD_TOKEN` or the key-value file
//! - Build the API client and mount the deck loader on it
//! - Point deck card actions at the configured study app
//! - Build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use axum::Router;
use deckboard_adapter_credentials::{FileCredentialStore, StaticCredentialStore};
use deckboard_adapter_dashboard::components::StudyLinks;
use deckboard_adapter_dashboard::router;
use deckboard_adapter_dashboard::state::AppState;
use deckboard_adapter_http_client::ApiClient;
use deckboard_app::ports::CredentialStore;
use deckboard_app::services::deck_loader::DeckLoader;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    let client = ApiClient::new(config.api.clone())?;
    tracing::info!(
        url = %client.config().decks_url(),
        "fetching decks from backend"
    );

    let links = StudyLinks::new(config.study.base_url.clone());
    let app = match config.credentials.token.clone() {
        Some(token) => {
            tracing::info!("using token from environment");
            dashboard(client, StaticCredentialStore::new(token), links)
        }
        None => {
            let store =
                FileCredentialStore::with_key(&config.credentials.path, &config.credentials.key);
            tracing::info!(path = %store.path().display(), "reading token from credential file");
            dashboard(client, store, links)
        }
    };

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("deckboardd listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Mount the deck loader and build the dashboard router around it.
///
/// The loader lives as long as the router; dropping the router aborts any
/// fetch still in flight.
fn dashboard<C>(client: ApiClient, credentials: C, links: StudyLinks) -> Router
where
    C: CredentialStore + Send + Sync + 'static,
{
    let loader = DeckLoader::mount(client, credentials);
    router::build(AppState::new(loader).with_study_links(links))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received ctrl-c, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
