//! Axum router assembly.

use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use deckboard_app::ports::{CredentialStore, DeckSource};

use crate::pages::dashboard;
use crate::state::AppState;

const STYLESHEET: &str = include_str!("../assets/style.css");

/// Build the top-level axum [`Router`].
///
/// Serves the dashboard at `/`, the retry action, the JSON state under
/// `/api/decks` and the stylesheet. Includes a [`TraceLayer`] that logs each
/// HTTP request/response at the `DEBUG` level.
pub fn build<S, C>(state: AppState<S, C>) -> Router
where
    S: DeckSource + Send + Sync + 'static,
    C: CredentialStore + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/style.css", get(stylesheet))
        .route("/", get(dashboard::index::<S, C>))
        .route("/retry", post(dashboard::retry::<S, C>))
        .route("/api/decks", get(crate::api::decks::<S, C>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn stylesheet() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}
