//! Shared application state for axum handlers.

use std::sync::Arc;

use deckboard_app::services::deck_loader::DeckLoader;

use crate::components::StudyLinks;

/// Application state shared across all axum handlers.
///
/// `Clone` is implemented manually so the port types themselves do not need
/// to be `Clone`, only the `Arc` wrapper is cloned.
pub struct AppState<S, C> {
    /// Loader owning the deck collection shown on the dashboard.
    pub loader: Arc<DeckLoader<S, C>>,
    /// Where deck card actions point.
    pub links: Arc<StudyLinks>,
}

impl<S, C> Clone for AppState<S, C> {
    fn clone(&self) -> Self {
        Self {
            loader: Arc::clone(&self.loader),
            links: Arc::clone(&self.links),
        }
    }
}

impl<S, C> AppState<S, C> {
    /// Create a new application state around a mounted loader.
    ///
    /// Card actions link relative to the dashboard host until
    /// [`with_study_links`](Self::with_study_links) is called.
    pub fn new(loader: DeckLoader<S, C>) -> Self {
        Self {
            loader: Arc::new(loader),
            links: Arc::new(StudyLinks::default()),
        }
    }

    /// Point card actions at the study app served from `links`.
    #[must_use]
    pub fn with_study_links(mut self, links: StudyLinks) -> Self {
        self.links = Arc::new(links);
        self
    }
}
