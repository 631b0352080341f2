use chrono::{DateTime, Utc};
use itertools::Itertools;

use crate::scheduler::{CardState, Grade, MINUTES_PER_DAY, ScheduleResult, SchedulerConfig, schedule};

/// Scheduling outcome for each of the four answer buttons against the same
/// input state. Built by [`preview`]; nothing is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NextStates {
    pub again: ScheduleResult,
    pub hard: ScheduleResult,
    pub good: ScheduleResult,
    pub easy: ScheduleResult,
}

impl NextStates {
    /// Renders the answer-button row shown by the review queue, e.g.
    /// `"Again: 10m / Hard: 1d / Good: 6d / Easy: 4d"`.
    pub fn button_labels(&self) -> String {
        [
            ("Again", &self.again),
            ("Hard", &self.hard),
            ("Good", &self.good),
            ("Easy", &self.easy),
        ]
        .iter()
        .map(|(name, result)| format!("{name}: {}", format_interval(result.state.interval_days)))
        .join(" / ")
    }
}

/// Runs [`schedule`] for all four grades without touching the input state.
pub fn preview(state: &CardState, config: &SchedulerConfig, now: DateTime<Utc>) -> NextStates {
    NextStates {
        again: schedule(state, Grade::Again, config, now),
        hard: schedule(state, Grade::Hard, config, now),
        good: schedule(state, Grade::Good, config, now),
        easy: schedule(state, Grade::Easy, config, now),
    }
}

/// Formats a nonnegative interval in days as a compact human-readable
/// duration: minutes below an hour, then hours, days, months (30-day), and
/// years to one decimal. Total for any nonnegative input, including 0.
pub fn format_interval(days: f64) -> String {
    if days < 1.0 / 24.0 {
        format!("{}m", (days * MINUTES_PER_DAY).round())
    } else if days < 1.0 {
        format!("{}h", (days * 24.0).round())
    } else if days < 30.0 {
        format!("{}d", days.round())
    } else if days < 365.0 {
        format!("{}mo", (days / 30.0).round())
    } else {
        format!("{:.1}y", days / 365.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_boundaries() {
        assert_eq!(format_interval(0.0), "0m");
        assert_eq!(format_interval(10.0 / MINUTES_PER_DAY), "10m");
        assert_eq!(format_interval(59.0 / MINUTES_PER_DAY), "59m");
        assert_eq!(format_interval(1.0 / 24.0), "1h");
        assert_eq!(format_interval(0.5), "12h");
        assert_eq!(format_interval(0.99), "24h");
        assert_eq!(format_interval(1.0), "1d");
        assert_eq!(format_interval(6.4), "6d");
        assert_eq!(format_interval(29.9), "30d");
        assert_eq!(format_interval(30.0), "1mo");
        assert_eq!(format_interval(75.0), "3mo");
        assert_eq!(format_interval(364.0), "12mo");
        assert_eq!(format_interval(365.0), "1.0y");
        assert_eq!(format_interval(547.5), "1.5y");
    }

    #[test]
    fn new_card_button_labels() {
        let now = Utc::now();
        let states = preview(&CardState::default(), &SchedulerConfig::default(), now);
        assert_eq!(
            states.button_labels(),
            "Again: 10m / Hard: 1d / Good: 1d / Easy: 4d"
        );
    }

    #[test]
    fn young_card_button_labels() {
        let card = CardState {
            ease_factor: 2.5,
            interval_days: 1.0,
            repetitions: 1,
            lapse_count: 0,
        };
        let now = Utc::now();
        let states = preview(&card, &SchedulerConfig::default(), now);
        assert_eq!(
            states.button_labels(),
            "Again: 10m / Hard: 1d / Good: 6d / Easy: 10d"
        );
    }

    #[test]
    fn preview_is_pure() {
        let card = CardState {
            ease_factor: 2.2,
            interval_days: 12.0,
            repetitions: 4,
            lapse_count: 1,
        };
        let before = card;
        let config = SchedulerConfig::default();
        let now = Utc::now();
        let first = preview(&card, &config, now);
        let second = preview(&card, &config, now);
        assert_eq!(card, before);
        assert_eq!(first, second);
    }

    #[test]
    fn preview_matches_individual_schedules() {
        let card = CardState {
            ease_factor: 1.9,
            interval_days: 40.0,
            repetitions: 6,
            lapse_count: 2,
        };
        let config = SchedulerConfig::default();
        let now = Utc::now();
        let states = preview(&card, &config, now);
        assert_eq!(states.hard, schedule(&card, Grade::Hard, &config, now));
        assert_eq!(states.easy, schedule(&card, Grade::Easy, &config, now));
    }
}
