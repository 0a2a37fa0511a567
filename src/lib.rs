//! Spaced-repetition scheduling and study statistics.
//!
//! Pure computation over snapshots: callers own persistence and pass in
//! the current time where scheduling decisions depend on it.

pub mod models;
pub mod spaced_repetition;
pub mod statistics;

pub use models::{Card, DailyStats, ReviewState, ReviewStats, StudySession};
pub use spaced_repetition::SpacedRepetition;
pub use statistics::StudyStatistics;
