use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Spaced-repetition fields carried by a card that has entered the
/// review schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewState {
    /// SM-2 ease factor, kept within [1.3, 2.5].
    pub difficulty_level: f64,
    /// Interval (days) used to schedule the most recent review.
    pub interval_days: i64,
    /// Consecutive correct answers, reset to 0 on any miss.
    pub consecutive_correct: u32,
    pub review_count: u32,
    /// `None` means never scheduled: the card is due immediately.
    pub next_review: Option<DateTime<Utc>>,
    pub last_reviewed: Option<DateTime<Utc>>,
}

impl ReviewState {
    pub fn new() -> Self {
        ReviewState {
            difficulty_level: 2.5, // SM-2 default
            interval_days: 0,
            consecutive_correct: 0,
            review_count: 0,
            next_review: None,
            last_reviewed: None,
        }
    }
}

impl Default for ReviewState {
    fn default() -> Self {
        Self::new()
    }
}

/// A flashcard. Either a "scheduled card" carrying the full set of
/// spaced-repetition fields, or a "plain card" carrying none of them.
/// The flattened encoding keeps plain cards free of scheduling keys on
/// the wire, so older records deserialize as plain cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub front: String,
    pub back: String,
    pub tag: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub scheduling: Option<ReviewState>,
}

impl Card {
    /// Create a plain card with no review schedule yet.
    pub fn new(front: String, back: String, tag: Option<String>) -> Self {
        Card {
            id: Uuid::new_v4().to_string(),
            front,
            back,
            tag,
            created_at: Utc::now(),
            scheduling: None,
        }
    }
}

/// A single study session as recorded by the surrounding app.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudySession {
    pub started_at: DateTime<Utc>,
    /// `None` while the session is ongoing or if it was abandoned.
    pub ended_at: Option<DateTime<Utc>>,
    pub cards_reviewed: u32,
    pub correct_answers: u32,
}

/// Per-day review totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    pub date: NaiveDate,
    pub reviews: u32,
    pub correct: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReviewStats {
    pub total_cards: usize,
    pub cards_due: usize,
    pub cards_new: usize,
    pub cards_learning: usize,
    pub cards_mature: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_is_plain() {
        let card = Card::new("Q".to_string(), "A".to_string(), Some("Math".to_string()));
        assert!(!card.id.is_empty());
        assert_eq!(card.tag, Some("Math".to_string()));
        assert!(card.scheduling.is_none());
    }

    #[test]
    fn test_plain_card_serializes_without_scheduling_keys() {
        let card = Card::new("Q".to_string(), "A".to_string(), None);
        let json = serde_json::to_value(&card).unwrap();
        assert!(json.get("difficulty_level").is_none());
        assert!(json.get("next_review").is_none());
        assert!(json.get("review_count").is_none());
    }

    #[test]
    fn test_scheduled_card_round_trips_flattened() {
        let mut card = Card::new("Q".to_string(), "A".to_string(), None);
        card.scheduling = Some(ReviewState::new());

        let json = serde_json::to_value(&card).unwrap();
        assert!(json.get("difficulty_level").is_some());

        let back: Card = serde_json::from_value(json).unwrap();
        assert_eq!(back.scheduling, Some(ReviewState::new()));
    }

    #[test]
    fn test_record_without_scheduling_keys_deserializes_as_plain() {
        let json = r#"{
            "id": "abc",
            "front": "Q",
            "back": "A",
            "tag": null,
            "created_at": "2024-01-01T00:00:00Z"
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert!(card.scheduling.is_none());
    }

    #[test]
    fn test_review_state_defaults() {
        let state = ReviewState::new();
        assert_eq!(state.difficulty_level, 2.5);
        assert_eq!(state.interval_days, 0);
        assert_eq!(state.review_count, 0);
        assert!(state.next_review.is_none());
    }
}
