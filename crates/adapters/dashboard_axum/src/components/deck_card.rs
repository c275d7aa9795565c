//! Deck card: the display values of one [`UserDeck`].

use deckboard_domain::id::DeckPk;
use deckboard_domain::stats::{ColorTier, format_percent};
use deckboard_domain::time::format_date;
use deckboard_domain::user_deck::UserDeck;

/// Points earned in one study mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModePoints {
    pub label: &'static str,
    pub points: u64,
}

/// Base URL of the study app that card actions link into.
///
/// An empty base keeps the links relative to the dashboard host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudyLinks {
    base_url: String,
}

impl StudyLinks {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    /// Study session for a deck.
    #[must_use]
    pub fn study(&self, deck_pk: DeckPk) -> String {
        self.url(&format!("/quiz/{deck_pk}"))
    }

    /// Statistics page for a deck.
    #[must_use]
    pub fn stats(&self, deck_pk: DeckPk) -> String {
        self.url(&format!("/deck/{deck_pk}/stats"))
    }
}

/// A labelled link rendered as a button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub label: &'static str,
    pub href: String,
}

/// Buttons at the bottom of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckActions {
    /// "Start" for a new deck, "Continue" once attempted.
    pub primary: Action,
    /// Only offered once the deck has been attempted.
    pub stats: Option<Action>,
}

impl DeckActions {
    fn new(deck: &UserDeck, links: &StudyLinks) -> Self {
        let deck_pk = deck.deck.deck_pk;
        let started = deck.is_started();
        Self {
            primary: Action {
                label: if started { "Continue" } else { "Start" },
                href: links.study(deck_pk),
            },
            stats: started.then(|| Action {
                label: "Statistics",
                href: links.stats(deck_pk),
            }),
        }
    }
}

/// Everything a deck card shows, computed from a [`UserDeck`] with no state and no IO.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckCardView {
    /// Stable identity of the card: the `UserDeck` primary key.
    pub key: i64,
    pub name: String,
    pub total_cards: u64,
    pub started: bool,
    pub success_rate: String,
    pub progress: String,
    pub tier: ColorTier,
    pub tier_class: &'static str,
    pub tier_color: &'static str,
    /// Width of the accuracy bar, in percent.
    pub bar_width: String,
    pub total_points: u64,
    pub mastered_cards: u64,
    pub learning_cards: u64,
    pub review_cards: u64,
    pub modes: Vec<ModePoints>,
    pub last_studied: String,
    pub actions: DeckActions,
}

impl DeckCardView {
    /// Card for `deck`, with actions pointing into the study app at `links`.
    #[must_use]
    pub fn new(deck: &UserDeck, links: &StudyLinks) -> Self {
        let rate = deck.displayed_success_rate();
        let tier = ColorTier::for_rate(rate);
        Self {
            key: deck.user_deck_pk.get(),
            name: deck.deck.name.clone(),
            total_cards: deck.total_cards(),
            started: deck.is_started(),
            success_rate: format_percent(rate),
            progress: format_percent(deck.displayed_progress()),
            tier,
            tier_class: tier.css_class(),
            tier_color: tier.color(),
            bar_width: format!("{rate:.1}"),
            total_points: deck.total_points,
            mastered_cards: deck.mastered_cards,
            learning_cards: deck.learning_cards,
            review_cards: deck.review_cards,
            modes: deck
                .mode_points()
                .into_iter()
                .map(|(mode, points)| ModePoints {
                    label: mode.label(),
                    points,
                })
                .collect(),
            last_studied: deck
                .last_studied
                .map_or_else(|| "never".to_string(), format_date),
            actions: DeckActions::new(deck, links),
        }
    }
}

impl From<&UserDeck> for DeckCardView {
    fn from(deck: &UserDeck) -> Self {
        Self::new(deck, &StudyLinks::default())
    }
}
