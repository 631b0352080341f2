use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scheduler::{CardState, Grade, ScheduleResult};

/// Immutable record of one review, appended to the analytics log by the
/// review-submission endpoint alongside the persisted state update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReviewLogEntry {
    pub grade: Grade,
    /// Interval before the review, in days.
    pub last_interval: f64,
    /// Interval scheduled by the review, in days.
    pub interval: f64,
    pub last_ease_factor: f64,
    pub ease_factor: f64,
    pub reviewed_at: DateTime<Utc>,
}

impl ReviewLogEntry {
    pub fn new(
        prev: &CardState,
        result: &ScheduleResult,
        grade: Grade,
        reviewed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            grade,
            last_interval: prev.interval_days,
            interval: result.state.interval_days,
            last_ease_factor: prev.ease_factor,
            ease_factor: result.state.ease_factor,
            reviewed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{SchedulerConfig, schedule};

    #[test]
    fn captures_before_and_after() {
        let prev = CardState {
            ease_factor: 2.5,
            interval_days: 6.0,
            repetitions: 2,
            lapse_count: 0,
        };
        let now = Utc::now();
        let result = schedule(&prev, Grade::Good, &SchedulerConfig::default(), now);
        let entry = ReviewLogEntry::new(&prev, &result, Grade::Good, now);
        assert_eq!(entry.last_interval, 6.0);
        assert_eq!(entry.interval, 15.0);
        assert_eq!(entry.last_ease_factor, 2.5);
        assert_eq!(entry.ease_factor, 2.5);
        assert_eq!(entry.reviewed_at, now);
    }

    #[test]
    fn entry_serializes_for_the_log_store() {
        let prev = CardState::default();
        let now = Utc::now();
        let result = schedule(&prev, Grade::Again, &SchedulerConfig::default(), now);
        let entry = ReviewLogEntry::new(&prev, &result, Grade::Again, now);
        let json = serde_json::to_string(&entry).unwrap();
        let back: ReviewLogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
