//! `UserDeck`: one user's progress record for one [`Deck`].
//!
//! Records are created and updated by the backend when a study session is
//! recorded. This side only reads them: nothing here mutates a counter.

use serde::{Deserialize, Serialize};

use crate::deck::Deck;
use crate::id::{DeckPk, UserDeckPk, UserPk};
use crate::time::{self, Timestamp};

/// The four study modes a user earns points in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudyMode {
    /// Typing the answer.
    Frappe,
    /// Matching pairs.
    Association,
    /// Multiple choice.
    Qcm,
    /// Classic flip-card review.
    Classique,
}

impl StudyMode {
    /// All modes in display order.
    pub const ALL: [Self; 4] = [Self::Frappe, Self::Association, Self::Qcm, Self::Classique];

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Frappe => "Typing",
            Self::Association => "Matching",
            Self::Qcm => "Multiple choice",
            Self::Classique => "Classic",
        }
    }
}

impl std::fmt::Display for StudyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A user's relationship to a [`Deck`], with the statistics the backend keeps for it.
///
/// `mastered_cards`, `learning_cards` and `review_cards` are mutually
/// exclusive buckets. `success_rate` and `progress` are computed upstream and
/// may be missing from older API responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDeck {
    pub user_deck_pk: UserDeckPk,
    pub user_pk: UserPk,
    pub deck_pk: DeckPk,
    pub deck: Deck,

    #[serde(default)]
    pub mastered_cards: u64,
    #[serde(default)]
    pub learning_cards: u64,
    #[serde(default)]
    pub review_cards: u64,

    #[serde(default)]
    pub total_points: u64,
    #[serde(default)]
    pub total_attempts: u64,
    #[serde(default)]
    pub successful_attempts: u64,

    #[serde(default)]
    pub points_frappe: u64,
    #[serde(default)]
    pub points_association: u64,
    #[serde(default)]
    pub points_qcm: u64,
    #[serde(default)]
    pub points_classique: u64,

    #[serde(deserialize_with = "time::lenient::deserialize")]
    pub added_at: Timestamp,
    #[serde(default, deserialize_with = "time::lenient::deserialize_option")]
    pub last_studied: Option<Timestamp>,

    /// Percentage of successful attempts, in `[0, 100]`.
    #[serde(default)]
    pub success_rate: Option<f64>,
    /// Percentage of cards that have left the "new" state, in `[0, 100]`.
    #[serde(default)]
    pub progress: Option<f64>,
}

impl UserDeck {
    /// Create a builder for constructing a [`UserDeck`].
    #[must_use]
    pub fn builder() -> UserDeckBuilder {
        UserDeckBuilder::default()
    }

    /// Number of tracked cards: the sum of the three maturity buckets.
    ///
    /// Saturates at `u64::MAX`, the only case where it differs from the
    /// arithmetic sum.
    #[must_use]
    pub fn total_cards(&self) -> u64 {
        self.mastered_cards
            .saturating_add(self.learning_cards)
            .saturating_add(self.review_cards)
    }

    /// Whether the user has attempted at least one card of this deck.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.total_attempts > 0
    }

    /// Success rate as shown to the user.
    ///
    /// Always `0` for an unstarted deck, whatever the payload says. A missing
    /// value also falls back to `0`.
    #[must_use]
    pub fn displayed_success_rate(&self) -> f64 {
        if !self.is_started() {
            return 0.0;
        }
        clamp_percent(self.success_rate.unwrap_or(0.0))
    }

    /// Progress as shown to the user, falling back to `0` when missing.
    #[must_use]
    pub fn displayed_progress(&self) -> f64 {
        clamp_percent(self.progress.unwrap_or(0.0))
    }

    /// Points earned per study mode, in [`StudyMode::ALL`] order.
    #[must_use]
    pub fn mode_points(&self) -> [(StudyMode, u64); 4] {
        [
            (StudyMode::Frappe, self.points_frappe),
            (StudyMode::Association, self.points_association),
            (StudyMode::Qcm, self.points_qcm),
            (StudyMode::Classique, self.points_classique),
        ]
    }
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// Step-by-step builder for [`UserDeck`].
#[derive(Debug, Default)]
pub struct UserDeckBuilder {
    user_deck_pk: Option<UserDeckPk>,
    user_pk: Option<UserPk>,
    deck: Option<Deck>,
    mastered_cards: u64,
    learning_cards: u64,
    review_cards: u64,
    total_points: u64,
    total_attempts: u64,
    successful_attempts: u64,
    mode_points: [u64; 4],
    added_at: Option<Timestamp>,
    last_studied: Option<Timestamp>,
    success_rate: Option<f64>,
    progress: Option<f64>,
}

impl UserDeckBuilder {
    #[must_use]
    pub fn user_deck_pk(mut self, pk: impl Into<UserDeckPk>) -> Self {
        self.user_deck_pk = Some(pk.into());
        self
    }

    #[must_use]
    pub fn user_pk(mut self, pk: impl Into<UserPk>) -> Self {
        self.user_pk = Some(pk.into());
        self
    }

    #[must_use]
    pub fn deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    #[must_use]
    pub fn cards(mut self, mastered: u64, learning: u64, review: u64) -> Self {
        self.mastered_cards = mastered;
        self.learning_cards = learning;
        self.review_cards = review;
        self
    }

    #[must_use]
    pub fn attempts(mut self, total: u64, successful: u64) -> Self {
        self.total_attempts = total;
        self.successful_attempts = successful;
        self
    }

    #[must_use]
    pub fn total_points(mut self, points: u64) -> Self {
        self.total_points = points;
        self
    }

    #[must_use]
    pub fn mode_points(mut self, mode: StudyMode, points: u64) -> Self {
        let slot = match mode {
            StudyMode::Frappe => 0,
            StudyMode::Association => 1,
            StudyMode::Qcm => 2,
            StudyMode::Classique => 3,
        };
        self.mode_points[slot] = points;
        self
    }

    #[must_use]
    pub fn added_at(mut self, ts: Timestamp) -> Self {
        self.added_at = Some(ts);
        self
    }

    #[must_use]
    pub fn last_studied(mut self, ts: Timestamp) -> Self {
        self.last_studied = Some(ts);
        self
    }

    #[must_use]
    pub fn success_rate(mut self, rate: f64) -> Self {
        self.success_rate = Some(rate);
        self
    }

    #[must_use]
    pub fn progress(mut self, progress: f64) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Consume the builder and return a [`UserDeck`].
    ///
    /// Missing keys default to `0`, a missing deck to an unnamed one, a missing
    /// `added_at` to now.
    #[must_use]
    pub fn build(self) -> UserDeck {
        let deck = self
            .deck
            .unwrap_or_else(|| Deck::new(DeckPk::new(0), "", "Untitled"));
        let [points_frappe, points_association, points_qcm, points_classique] = self.mode_points;
        UserDeck {
            user_deck_pk: self.user_deck_pk.unwrap_or(UserDeckPk::new(0)),
            user_pk: self.user_pk.unwrap_or(UserPk::new(0)),
            deck_pk: deck.deck_pk,
            deck,
            mastered_cards: self.mastered_cards,
            learning_cards: self.learning_cards,
            review_cards: self.review_cards,
            total_points: self.total_points,
            total_attempts: self.total_attempts,
            successful_attempts: self.successful_attempts,
            points_frappe,
            points_association,
            points_qcm,
            points_classique,
            added_at: self.added_at.unwrap_or_else(time::now),
            last_studied: self.last_studied,
            success_rate: self.success_rate,
            progress: self.progress,
        }
    }
}
