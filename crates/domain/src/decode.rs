//! Typed decoding of backend deck payloads.

use crate::error::DecodeError;
use crate::user_deck::UserDeck;

/// Decode a JSON array of [`UserDeck`] records.
///
/// Records are returned in payload order, untouched.
///
/// # Errors
///
/// Returns [`DecodeError`] when the body is not a JSON array or a record is
/// missing a required field (`user_deck_pk`, `user_pk`, `deck_pk`, `deck`,
/// `added_at`).
pub fn decode_user_decks(body: &[u8]) -> Result<Vec<UserDeck>, DecodeError> {
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::UserDeckPk;

    const FULL_RECORD: &str = r#"[{
        "user_deck_pk": 12,
        "user_pk": 1,
        "deck_pk": 40,
        "deck": {"deck_pk": 40, "id_json": "hsk1", "name": "HSK 1", "total_correct": 80, "total_attempts": 100},
        "mastered_cards": 10,
        "learning_cards": 5,
        "review_cards": 3,
        "total_points": 250,
        "total_attempts": 20,
        "successful_attempts": 15,
        "points_frappe": 100,
        "points_association": 50,
        "points_qcm": 60,
        "points_classique": 40,
        "added_at": "2025-11-20T10:00:00",
        "last_studied": "2025-11-21T08:30:00Z",
        "success_rate": 75.0,
        "progress": 55.56
    }]"#;

    #[test]
    fn should_decode_full_record() {
        let decks = decode_user_decks(FULL_RECORD.as_bytes()).unwrap();
        assert_eq!(decks.len(), 1);
        let deck = &decks[0];
        assert_eq!(deck.user_deck_pk, UserDeckPk::new(12));
        assert_eq!(deck.deck.name, "HSK 1");
        assert_eq!(deck.total_cards(), 18);
        assert_eq!(deck.points_qcm, 60);
        assert_eq!(deck.success_rate, Some(75.0));
        assert!(deck.last_studied.is_some());
    }

    #[test]
    fn should_decode_empty_array() {
        let decks = decode_user_decks(b"[]").unwrap();
        assert!(decks.is_empty());
    }

    #[test]
    fn should_tolerate_missing_derived_fields_and_counters() {
        let body = r#"[{
            "user_deck_pk": 3,
            "user_pk": 1,
            "deck_pk": 9,
            "deck": {"deck_pk": 9, "id_json": "n5", "name": "N5"},
            "added_at": "2025-11-20T10:00:00Z",
            "last_studied": null
        }]"#;
        let decks = decode_user_decks(body.as_bytes()).unwrap();
        let deck = &decks[0];
        assert_eq!(deck.success_rate, None);
        assert_eq!(deck.progress, None);
        assert_eq!(deck.total_attempts, 0);
        assert!(deck.last_studied.is_none());
    }

    #[test]
    fn should_reject_non_array_body() {
        let err = decode_user_decks(br#"{"detail": "Not authenticated"}"#).unwrap_err();
        assert!(err.message.contains("expected a sequence"));
    }

    #[test]
    fn should_reject_record_without_embedded_deck() {
        let body = r#"[{"user_deck_pk": 3, "user_pk": 1, "deck_pk": 9, "added_at": "2025-11-20T10:00:00Z"}]"#;
        let err = decode_user_decks(body.as_bytes()).unwrap_err();
        assert!(err.message.contains("deck"));
    }

    #[test]
    fn should_reject_invalid_json() {
        assert!(decode_user_decks(b"<html>").is_err());
    }
}
