//! Time and timestamp helpers.

use chrono::{DateTime, NaiveDateTime, Utc};

/// UTC timestamp used for `added_at` and `last_studied`.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Render a timestamp as a short calendar date (`2025-11-20`).
#[must_use]
pub fn format_date(ts: Timestamp) -> String {
    ts.format("%Y-%m-%d").to_string()
}

/// Parse an RFC 3339 timestamp, or a naive ISO 8601 one which is taken as UTC.
///
/// The backend emits naive datetimes for rows stored without a zone.
///
/// # Errors
///
/// Returns the parse error of the naive format when neither form matches.
pub fn parse_timestamp(value: &str) -> Result<Timestamp, chrono::ParseError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")?;
    Ok(naive.and_utc())
}

/// Serde helpers accepting both timestamp forms understood by [`parse_timestamp`].
pub mod lenient {
    use serde::{Deserialize, Deserializer};

    use super::{Timestamp, parse_timestamp};

    /// Deserialize a required timestamp.
    ///
    /// # Errors
    ///
    /// Fails when the value is not a string or cannot be parsed.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }

    /// Deserialize an optional timestamp; `null` and absence both map to `None`.
    ///
    /// # Errors
    ///
    /// Fails when a present value cannot be parsed.
    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| parse_timestamp(&raw).map_err(serde::de::Error::custom))
            .transpose()
    }
}
