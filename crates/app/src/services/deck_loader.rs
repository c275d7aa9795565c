//! Deck loader: owns the loading / ready / failed state of a user's deck
//! collection and drives the fetch.
//!
//! A loader is bound to the lifetime of the view consuming it: it starts the
//! first fetch when mounted and aborts whatever is in flight when dropped, so
//! no state is written after teardown.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;
use tokio::task::JoinHandle;

use deckboard_domain::error::DeckboardError;
use deckboard_domain::user_deck::UserDeck;

use crate::ports::{CredentialStore, DeckSource};

/// Observable state of a deck collection.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// A fetch is in flight.
    Loading,
    /// The last fetch succeeded. The list may be empty.
    Ready(Vec<UserDeck>),
    /// The last fetch failed; holds a human-readable message.
    Failed(String),
}

impl LoadState {
    /// Whether a fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Outcome of [`DeckLoader::refetch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refetch {
    /// A new fetch was started.
    Started,
    /// A fetch was already in flight; the request was dropped.
    AlreadyInFlight,
}

struct Shared<S, C> {
    source: S,
    credentials: C,
    state: watch::Sender<LoadState>,
    torn_down: AtomicBool,
}

impl<S, C> Shared<S, C>
where
    S: DeckSource + Send + Sync,
    C: CredentialStore + Send + Sync,
{
    async fn load(&self) -> LoadState {
        match self.try_load().await {
            Ok(decks) => {
                tracing::info!(count = decks.len(), "deck collection loaded");
                LoadState::Ready(decks)
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load deck collection");
                LoadState::Failed(err.to_string())
            }
        }
    }

    async fn try_load(&self) -> Result<Vec<UserDeck>, DeckboardError> {
        let credential = self
            .credentials
            .load()
            .await?
            .ok_or(DeckboardError::Unauthenticated)?;
        self.source.fetch_user_decks(&credential).await
    }
}

/// Publishes the outcome of one fetch task.
///
/// A task that unwinds before publishing leaves `Failed` behind instead of a
/// stuck `Loading`, unless the loader is being torn down.
struct FetchGuard<S, C> {
    shared: Arc<Shared<S, C>>,
    published: bool,
}

impl<S, C> FetchGuard<S, C> {
    fn publish(mut self, next: LoadState) {
        self.shared.state.send_replace(next);
        self.published = true;
    }
}

impl<S, C> Drop for FetchGuard<S, C> {
    fn drop(&mut self) {
        if self.published || self.shared.torn_down.load(Ordering::Acquire) {
            return;
        }
        tracing::error!("deck fetch ended without a result");
        self.shared
            .state
            .send_replace(LoadState::Failed("deck fetch ended unexpectedly".to_string()));
    }
}

/// Loads a deck collection through a [`DeckSource`] and publishes every state
/// transition on a [`watch`] channel.
///
/// At most one fetch runs at a time: [`refetch`](Self::refetch) is dropped
/// while another fetch is in flight.
pub struct DeckLoader<S, C> {
    shared: Arc<Shared<S, C>>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl<S, C> DeckLoader<S, C>
where
    S: DeckSource + Send + Sync + 'static,
    C: CredentialStore + Send + Sync + 'static,
{
    /// Create the loader and start the initial fetch.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a Tokio runtime.
    pub fn mount(source: S, credentials: C) -> Self {
        let (state, _) = watch::channel(LoadState::Loading);
        let loader = Self {
            shared: Arc::new(Shared {
                source,
                credentials,
                state,
                torn_down: AtomicBool::new(false),
            }),
            task: Mutex::new(None),
        };
        loader.spawn_fetch();
        loader
    }

    /// Re-enter the loading state and fetch again.
    ///
    /// Returns [`Refetch::AlreadyInFlight`] without issuing a request when a
    /// fetch is already running.
    pub fn refetch(&self) -> Refetch {
        let started = self.shared.state.send_if_modified(|state| {
            if state.is_loading() {
                false
            } else {
                *state = LoadState::Loading;
                true
            }
        });
        if !started {
            tracing::debug!("refetch dropped, a fetch is already in flight");
            return Refetch::AlreadyInFlight;
        }
        self.spawn_fetch();
        Refetch::Started
    }

    fn spawn_fetch(&self) {
        let guard = FetchGuard {
            shared: Arc::clone(&self.shared),
            published: false,
        };
        let handle = tokio::spawn(async move {
            let next = guard.shared.load().await;
            guard.publish(next);
        });
        let mut task = self.task.lock().unwrap_or_else(PoisonError::into_inner);
        *task = Some(handle);
    }
}

impl<S, C> DeckLoader<S, C> {
    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> LoadState {
        self.shared.state.borrow().clone()
    }

    /// Subscribe to state transitions.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.shared.state.subscribe()
    }

    /// Wait until no fetch is in flight and return the resulting state.
    pub async fn settled(&self) -> LoadState {
        let mut rx = self.shared.state.subscribe();
        match rx.wait_for(|state| !state.is_loading()).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        }
    }
}

impl<S, C> Drop for DeckLoader<S, C> {
    fn drop(&mut self) {
        self.shared.torn_down.store(true, Ordering::Release);
        let task = self.task.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = task.take() {
            handle.abort();
        }
    }
}
