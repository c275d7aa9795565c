//! Client tests against a throwaway axum backend bound to a loopback port.

use std::future::Future;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::extract::State;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use deckboard_adapter_http_client::{
    ApiClient, ApiConfig, AuthenticatedClient, ClientError, DeckEndpoint,
};
use deckboard_app::ports::{Credential, CredentialStore, DeckSource};
use deckboard_domain::error::{DeckboardError, RequestError};
use deckboard_domain::id::UserDeckPk;
use tokio::net::TcpListener;

const TOKEN: &str = "good-token";

fn record(user_deck_pk: i64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "user_deck_pk": user_deck_pk,
        "user_pk": 1,
        "deck_pk": user_deck_pk * 10,
        "deck": {"deck_pk": user_deck_pk * 10, "id_json": name.to_lowercase(), "name": name},
        "mastered_cards": 4,
        "learning_cards": 2,
        "review_cards": 1,
        "total_attempts": 10,
        "successful_attempts": 7,
        "added_at": "2025-11-20T10:00:00",
        "last_studied": null,
        "success_rate": 70.0,
        "progress": 57.14
    })
}

#[derive(Clone, Default)]
struct Backend {
    hits: Arc<AtomicUsize>,
}

fn authorized(headers: &HeaderMap) -> bool {
    headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) == Some("Bearer good-token")
}

async fn collection(State(backend): State<Backend>, headers: HeaderMap) -> Response {
    backend.hits.fetch_add(1, Ordering::SeqCst);
    if headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) != Some("application/json") {
        return StatusCode::BAD_REQUEST.into_response();
    }
    if !authorized(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            axum::Json(serde_json::json!({"detail": "Not authenticated"})),
        )
            .into_response();
    }
    axum::Json(serde_json::json!([record(2, "HSK 1"), record(1, "Kanji N5")])).into_response()
}

async fn all_decks(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    axum::Json(serde_json::json!([
        record(1, "Kanji N5"),
        record(2, "HSK 1"),
        record(3, "Spanish A1")
    ]))
    .into_response()
}

async fn serve() -> (String, Backend) {
    let backend = Backend::default();
    let app = Router::new()
        .route("/api/users/decks", get(collection))
        .route("/api/users/decks/all", get(all_decks))
        .route(
            "/broken/api/users/decks",
            get(|| async { axum::Json(serde_json::json!({"detail": "oops"})) }),
        )
        .with_state(backend.clone());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), backend)
}

fn client(base_url: &str, endpoint: DeckEndpoint) -> ApiClient {
    ApiClient::new(ApiConfig {
        base_url: base_url.to_string(),
        endpoint,
        timeout_secs: Some(5),
    })
    .unwrap()
}

#[tokio::test]
async fn should_return_decks_in_backend_order() {
    let (base_url, backend) = serve().await;
    let decks = client(&base_url, DeckEndpoint::Collection)
        .get_user_decks(&Credential::bearer(TOKEN))
        .await
        .unwrap();

    assert_eq!(decks.len(), 2);
    assert_eq!(decks[0].user_deck_pk, UserDeckPk::new(2));
    assert_eq!(decks[1].deck.name, "Kanji N5");
    assert_eq!(decks[0].success_rate, Some(70.0));
    assert_eq!(backend.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn should_fetch_all_decks_listing_when_configured() {
    let (base_url, _) = serve().await;
    let decks = client(&base_url, DeckEndpoint::All)
        .get_user_decks(&Credential::bearer(TOKEN))
        .await
        .unwrap();
    assert_eq!(decks.len(), 3);
}

#[tokio::test]
async fn should_surface_status_code_and_text_on_rejection() {
    let (base_url, _) = serve().await;
    let err = client(&base_url, DeckEndpoint::Collection)
        .get_user_decks(&Credential::bearer("expired"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClientError::Request(RequestError { status: 401, ref status_text }) if status_text == "Unauthorized"
    ));
    assert_eq!(err.to_string(), "HTTP 401: Unauthorized");
}

#[tokio::test]
async fn should_report_malformed_body_as_decode_error() {
    let (base_url, _) = serve().await;
    let err = client(&format!("{base_url}/broken"), DeckEndpoint::Collection)
        .get_user_decks(&Credential::bearer(TOKEN))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn should_report_transport_error_when_backend_is_down() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{addr}"), DeckEndpoint::Collection)
        .get_user_decks(&Credential::bearer(TOKEN))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}

#[tokio::test]
async fn should_map_errors_through_deck_source_port() {
    let (base_url, _) = serve().await;
    let source = client(&base_url, DeckEndpoint::Collection);
    let err = source
        .fetch_user_decks(&Credential::bearer("expired"))
        .await
        .unwrap_err();
    assert!(matches!(err, DeckboardError::Request(_)));
    assert!(err.to_string().contains("401"));
}

/// Credential store whose value can change between requests.
#[derive(Default)]
struct SwappableStore(Mutex<Option<Credential>>);

impl SwappableStore {
    fn set(&self, token: Option<&str>) {
        *self.0.lock().unwrap() = token.map(Credential::bearer);
    }
}

impl CredentialStore for SwappableStore {
    fn load(&self) -> impl Future<Output = Result<Option<Credential>, DeckboardError>> + Send {
        let credential = self.0.lock().unwrap().clone();
        async move { Ok(credential) }
    }
}

#[tokio::test]
async fn should_inject_stored_credential_into_each_request() {
    let (base_url, backend) = serve().await;
    let store = Arc::new(SwappableStore::default());
    let config = ApiConfig {
        base_url,
        ..ApiConfig::default()
    };
    let client = AuthenticatedClient::new(config, reqwest::Client::new(), Arc::clone(&store));

    let err = client
        .get_user_decks(DeckEndpoint::Collection)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Request(RequestError { status: 401, .. })));

    store.set(Some(TOKEN));
    let decks = client.get_user_decks(DeckEndpoint::Collection).await.unwrap();
    assert_eq!(decks.len(), 2);

    store.set(Some("rotated-out"));
    assert!(client.get_user_decks(DeckEndpoint::Collection).await.is_err());
    assert_eq!(backend.hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn should_share_injection_across_paths() {
    let (base_url, _) = serve().await;
    let store = SwappableStore::default();
    store.set(Some(TOKEN));
    let config = ApiConfig {
        base_url,
        ..ApiConfig::default()
    };
    let client = AuthenticatedClient::new(config, reqwest::Client::new(), store);

    let response = client
        .get("/api/users/decks/all")
        .await
        .unwrap()
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
}
