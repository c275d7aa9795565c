//! Display rules for deck statistics.

use serde::{Deserialize, Serialize};

/// Colour tier of an accuracy percentage.
///
/// Lower bounds are inclusive: 50 is [`Warning`](Self::Warning), 80 is
/// [`Success`](Self::Success).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTier {
    /// No accuracy yet.
    Neutral,
    /// Below 50%.
    Alert,
    /// 50% up to 80%.
    Warning,
    /// 80% and above.
    Success,
}

impl ColorTier {
    pub const WARNING_THRESHOLD: f64 = 50.0;
    pub const SUCCESS_THRESHOLD: f64 = 80.0;

    /// Map a percentage to its tier.
    #[must_use]
    pub fn for_rate(rate: f64) -> Self {
        if rate.is_nan() || rate <= 0.0 {
            Self::Neutral
        } else if rate >= Self::SUCCESS_THRESHOLD {
            Self::Success
        } else if rate >= Self::WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::Alert
        }
    }

    /// CSS class applied to elements coloured by this tier.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Neutral => "tier-neutral",
            Self::Alert => "tier-alert",
            Self::Warning => "tier-warning",
            Self::Success => "tier-success",
        }
    }

    /// Hex colour of this tier.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Neutral => "#999999",
            Self::Alert => "#ef4444",
            Self::Warning => "#f59e0b",
            Self::Success => "#22c55e",
        }
    }
}

/// Format a percentage for display: `0%` for zero, one decimal otherwise.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn format_percent(rate: f64) -> String {
    if rate.is_nan() || rate == 0.0 {
        return "0%".to_string();
    }
    format!("{rate:.1}%")
}
