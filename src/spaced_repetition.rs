use crate::models::{Card, ReviewState, ReviewStats};
use chrono::{DateTime, Duration, Utc};

/// Performance grades at or above this count as a correct recall.
const PASS_THRESHOLD: f64 = 3.0;

/// Interval (days) at which a card counts as mature.
const MATURE_INTERVAL: i64 = 21;

/// SM-2 spaced repetition algorithm implementation
pub struct SpacedRepetition;

impl SpacedRepetition {
    /// Calculate the next review interval in days.
    ///
    /// Any incorrect answer (`consecutive_correct == 0`) resets to a 1-day
    /// review regardless of history. The first correct answer repeats at
    /// 1 day, the second graduates to a fixed 6 days, and from the third
    /// onward the previous interval grows by an ease factor derived from
    /// the card's difficulty.
    pub fn next_interval(difficulty: f64, previous_interval_days: i64, consecutive_correct: u32) -> i64 {
        match consecutive_correct {
            0 | 1 => 1,
            2 => 6,
            _ => {
                let ease_factor = 1.3 + (difficulty - 1.0) * 0.3;
                ((previous_interval_days as f64) * ease_factor).round() as i64
            }
        }
    }

    /// Update a card's difficulty rating from a 0-5 performance grade.
    ///
    /// Standard SM-2 ease update: good recall raises the rating, poor
    /// recall lowers it with a quadratic penalty. The result is clamped
    /// to [1.3, 2.5]; inputs are taken as given.
    pub fn updated_difficulty(old_difficulty: f64, performance: f64) -> f64 {
        let new_difficulty = old_difficulty + (0.1 - (5.0 - performance) * (0.08 + (5.0 - performance) * 0.02));
        new_difficulty.clamp(1.3, 2.5)
    }

    /// Check whether a card is due at `now`. A card that was never
    /// scheduled is always due.
    pub fn is_due(next_review: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
        match next_review {
            Some(next_review) => now >= next_review,
            None => true,
        }
    }

    /// Count the cards due at `now`. Plain cards carry no schedule and
    /// are due unconditionally.
    pub fn due_count(cards: &[Card], now: DateTime<Utc>) -> usize {
        cards
            .iter()
            .filter(|card| match &card.scheduling {
                Some(state) => Self::is_due(state.next_review, now),
                None => true,
            })
            .count()
    }

    /// Apply one review outcome to a card's scheduling state.
    ///
    /// The difficulty rating is updated first and the updated value feeds
    /// the interval computation. Returns the new state; the caller owns
    /// persisting it.
    pub fn apply_review(state: &ReviewState, performance: f64, now: DateTime<Utc>) -> ReviewState {
        let consecutive_correct = if performance >= PASS_THRESHOLD {
            state.consecutive_correct + 1
        } else {
            0
        };

        let difficulty_level = Self::updated_difficulty(state.difficulty_level, performance);
        let interval_days = Self::next_interval(difficulty_level, state.interval_days, consecutive_correct);

        log::debug!(
            "review graded {:.1}: interval {} -> {} days, difficulty {:.2} -> {:.2}",
            performance,
            state.interval_days,
            interval_days,
            state.difficulty_level,
            difficulty_level
        );

        ReviewState {
            difficulty_level,
            interval_days,
            consecutive_correct,
            review_count: state.review_count + 1,
            next_review: Some(now + Duration::days(interval_days)),
            last_reviewed: Some(now),
        }
    }

    /// Calculate collection-level review statistics.
    pub fn review_stats(cards: &[Card], now: DateTime<Utc>) -> ReviewStats {
        let total_cards = cards.len();
        let cards_due = Self::due_count(cards, now);
        let cards_new = cards
            .iter()
            .filter(|card| card.scheduling.as_ref().map_or(true, |s| s.review_count == 0))
            .count();
        let cards_learning = cards
            .iter()
            .filter(|card| {
                card.scheduling
                    .as_ref()
                    .map_or(false, |s| s.review_count > 0 && s.interval_days < MATURE_INTERVAL)
            })
            .count();
        let cards_mature = cards
            .iter()
            .filter(|card| card.scheduling.as_ref().map_or(false, |s| s.interval_days >= MATURE_INTERVAL))
            .count();

        ReviewStats {
            total_cards,
            cards_due,
            cards_new,
            cards_learning,
            cards_mature,
        }
    }
}
