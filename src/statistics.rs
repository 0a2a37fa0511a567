use crate::models::{DailyStats, StudySession};
use chrono::{Days, NaiveDate};
use std::collections::{BTreeMap, HashSet};

/// Aggregations over recorded study sessions
pub struct StudyStatistics;

impl StudyStatistics {
    /// Sum reviews and correct answers per UTC calendar day.
    ///
    /// One entry per distinct date, ascending by date. Sessions group by
    /// the date component of `started_at`.
    pub fn daily_stats(sessions: &[StudySession]) -> Vec<DailyStats> {
        let mut by_date: BTreeMap<NaiveDate, (u32, u32)> = BTreeMap::new();

        for session in sessions {
            let entry = by_date.entry(session.started_at.date_naive()).or_insert((0, 0));
            entry.0 += session.cards_reviewed;
            entry.1 += session.correct_answers;
        }

        by_date
            .into_iter()
            .map(|(date, (reviews, correct))| DailyStats { date, reviews, correct })
            .collect()
    }

    /// Count consecutive study days ending at `today`.
    ///
    /// Walks backward from `today` while each day has at least one session.
    /// A day with no session ends the streak, and that includes `today`
    /// itself: an unbroken run that stopped yesterday counts as 0.
    pub fn streak(sessions: &[StudySession], today: NaiveDate) -> u32 {
        let study_days: HashSet<NaiveDate> = sessions.iter().map(|s| s.started_at.date_naive()).collect();

        let mut streak = 0;
        let mut day = today;
        while study_days.contains(&day) {
            streak += 1;
            match day.checked_sub_days(Days::new(1)) {
                Some(previous) => day = previous,
                None => break,
            }
        }

        streak
    }

    /// Total study time in minutes across finished sessions.
    ///
    /// Sessions still missing an `ended_at` are skipped.
    pub fn total_minutes(sessions: &[StudySession]) -> f64 {
        sessions
            .iter()
            .filter_map(|session| session.ended_at.map(|ended| ended - session.started_at))
            .map(|duration| duration.num_milliseconds() as f64 / 60_000.0)
            .sum()
    }
}
