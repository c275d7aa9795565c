//! Dashboard page: renders the loader state as one of three branches.

use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};

use deckboard_app::ports::{CredentialStore, DeckSource};
use deckboard_app::services::deck_loader::{LoadState, Refetch};

use crate::components::{DeckCardView, StudyLinks};
use crate::state::AppState;

/// Seconds between reloads while a fetch is in flight.
const LOADING_REFRESH_SECONDS: u32 = 1;

/// Populated branch of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckList {
    pub count_label: String,
    pub cards: Vec<DeckCardView>,
}

impl DeckList {
    fn new(cards: Vec<DeckCardView>) -> Self {
        Self {
            count_label: deck_count_label(cards.len()),
            cards,
        }
    }
}

/// The one branch the page renders.
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Loading,
    Failed(String),
    Populated(DeckList),
}

impl PageView {
    fn new(state: &LoadState, links: &StudyLinks) -> Self {
        match state {
            LoadState::Loading => Self::Loading,
            LoadState::Failed(message) => Self::Failed(message.clone()),
            LoadState::Ready(decks) => Self::Populated(DeckList::new(
                decks
                    .iter()
                    .map(|deck| DeckCardView::new(deck, links))
                    .collect(),
            )),
        }
    }
}

fn deck_count_label(count: usize) -> String {
    if count == 1 {
        "1 deck".to_string()
    } else {
        format!("{count} decks")
    }
}

/// Dashboard template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    refresh_seconds: Option<u32>,
    view: PageView,
}

impl DashboardTemplate {
    /// Build the page for a loader state, linking cards into the study app at `links`.
    #[must_use]
    pub fn for_state(state: &LoadState, links: &StudyLinks) -> Self {
        Self {
            refresh_seconds: state.is_loading().then_some(LOADING_REFRESH_SECONDS),
            view: PageView::new(state, links),
        }
    }
}

impl IntoResponse for DashboardTemplate {
    fn into_response(self) -> Response {
        match self.render() {
            Ok(body) => Html(body).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "failed to render dashboard");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}

/// `GET /`: the deck collection.
pub async fn index<S, C>(State(state): State<AppState<S, C>>) -> DashboardTemplate
where
    S: DeckSource + Send + Sync + 'static,
    C: CredentialStore + Send + Sync + 'static,
{
    DashboardTemplate::for_state(&state.loader.state(), &state.links)
}

/// `POST /retry`: refetch then redirect back to the dashboard.
pub async fn retry<S, C>(State(state): State<AppState<S, C>>) -> Redirect
where
    S: DeckSource + Send + Sync + 'static,
    C: CredentialStore + Send + Sync + 'static,
{
    if state.loader.refetch() == Refetch::Started {
        tracing::info!("deck collection refetch requested");
    }
    Redirect::to("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckboard_domain::deck::Deck;
    use deckboard_domain::id::DeckPk;
    use deckboard_domain::user_deck::UserDeck;

    fn page(state: &LoadState) -> DashboardTemplate {
        DashboardTemplate::for_state(state, &StudyLinks::default())
    }

    fn deck(pk: i64, name: &str) -> UserDeck {
        UserDeck::builder()
            .user_deck_pk(pk)
            .deck(Deck::new(DeckPk::new(pk), name.to_lowercase(), name))
            .build()
    }

    #[test]
    fn should_label_deck_count() {
        assert_eq!(deck_count_label(0), "0 decks");
        assert_eq!(deck_count_label(1), "1 deck");
        assert_eq!(deck_count_label(3), "3 decks");
    }

    #[test]
    fn should_only_refresh_while_loading() {
        assert_eq!(
            page(&LoadState::Loading).refresh_seconds,
            Some(LOADING_REFRESH_SECONDS)
        );
        assert_eq!(
            page(&LoadState::Ready(vec![])).refresh_seconds,
            None
        );
        assert_eq!(
            page(&LoadState::Failed("x".to_string())).refresh_seconds,
            None
        );
    }

    #[test]
    fn should_keep_fetch_order_in_populated_view() {
        let state = LoadState::Ready(vec![deck(7, "Spanish A1"), deck(3, "HSK 1")]);
        let PageView::Populated(list) = PageView::new(&state, &StudyLinks::default()) else {
            panic!("expected populated view");
        };
        assert_eq!(list.count_label, "2 decks");
        let keys: Vec<i64> = list.cards.iter().map(|card| card.key).collect();
        assert_eq!(keys, vec![7, 3]);
    }

    #[test]
    fn should_render_only_error_branch_on_failure() {
        let html = page(&LoadState::Failed("HTTP 401: Unauthorized".to_string()))
        .render()
        .unwrap();
        assert!(html.contains("HTTP 401: Unauthorized"));
        assert!(html.contains(r#"action="/retry""#));
        assert!(!html.contains("Loading decks"));
        assert!(!html.contains("deck-card"));
    }

    #[test]
    fn should_render_only_loading_branch_while_loading() {
        let html = page(&LoadState::Loading)
            .render()
            .unwrap();
        assert!(html.contains("Loading decks"));
        assert!(html.contains(r#"http-equiv="refresh""#));
        assert!(!html.contains("/retry"));
        assert!(!html.contains("data-key"));
    }

    #[test]
    fn should_render_empty_state_without_cards() {
        let html = page(&LoadState::Ready(vec![]))
            .render()
            .unwrap();
        assert!(html.contains("No decks in your collection"));
        assert!(html.contains("0 decks"));
        assert!(!html.contains("data-key"));
    }

    #[test]
    fn should_escape_deck_names() {
        let html = page(&LoadState::Ready(vec![deck(1, "<Kana & Kanji>")]))
            .render()
            .unwrap();
        assert!(!html.contains("<Kana"));
        assert!(html.contains("&lt;Kana &amp; Kanji&gt;"));
    }

    #[test]
    fn should_badge_unstarted_deck_as_new() {
        let started = UserDeck::builder()
            .user_deck_pk(2)
            .attempts(10, 9)
            .success_rate(90.0)
            .build();
        let html = page(&LoadState::Ready(vec![deck(1, "Fresh"), started]))
            .render()
            .unwrap();
        assert_eq!(html.matches("not-started").count(), 1);
        assert_eq!(html.matches(r#"class="badge-new""#).count(), 1);
        assert!(html.contains("90.0%"));
        assert!(html.contains("tier-success"));
    }

    #[test]
    fn should_link_stats_only_for_started_decks() {
        let started = UserDeck::builder()
            .user_deck_pk(2)
            .deck(Deck::new(DeckPk::new(8), "jlpt-n5", "JLPT N5"))
            .attempts(4, 3)
            .build();
        let links = StudyLinks::new("https://study.example.com");
        let html = DashboardTemplate::for_state(
            &LoadState::Ready(vec![deck(1, "Fresh"), started]),
            &links,
        )
        .render()
        .unwrap();
        assert!(html.contains(r#"href="https://study.example.com/quiz/1""#));
        assert!(html.contains(r#"href="https://study.example.com/quiz/8""#));
        assert!(html.contains(r#"href="https://study.example.com/deck/8/stats""#));
        assert!(!html.contains("/deck/1/stats"));
        assert_eq!(html.matches("Statistics").count(), 1);
        assert!(html.contains(">Start<"));
        assert!(html.contains(">Continue<"));
    }
}
