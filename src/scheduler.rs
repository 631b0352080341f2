use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::error::SchedulerError;

/// Lower bound for the ease factor, applied in every branch that shrinks it.
pub const MIN_EASE: f64 = 1.3;
/// Ease factor assigned when a card is first attached to a user.
pub const INITIAL_EASE: f64 = 2.5;
/// Hard cap on any computed interval, applied after the per-grade branch.
pub const MAX_INTERVAL_DAYS: f64 = 365.0;

pub(crate) const MINUTES_PER_DAY: f64 = 1440.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Recall grade reported by the learner for a single review.
///
/// The review-submission endpoint receives the grade as a small integer;
/// convert it at the boundary with [`Grade::try_from`] so the scheduler
/// itself never sees an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
#[repr(u8)]
pub enum Grade {
    Again = 0,
    Hard = 1,
    Good = 2,
    Easy = 3,
}

impl TryFrom<u8> for Grade {
    type Error = SchedulerError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Grade::Again),
            1 => Ok(Grade::Hard),
            2 => Ok(Grade::Good),
            3 => Ok(Grade::Easy),
            _ => Err(SchedulerError::InvalidGrade),
        }
    }
}

/// Per user-card scheduling state, persisted between reviews. The caller
/// reads it before a review, passes it to [`schedule`], and stores the
/// returned state verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardState {
    /// Interval growth multiplier, always >= [`MIN_EASE`].
    pub ease_factor: f64,
    /// Days until the next review. Fractional below one day ("Again" retry
    /// steps are minutes-scale).
    pub interval_days: f64,
    /// Consecutive non-"Again" reviews since the last lapse.
    pub repetitions: u32,
    /// Lifetime count of "Again" grades.
    pub lapse_count: u32,
}

impl Default for CardState {
    fn default() -> Self {
        Self {
            ease_factor: INITIAL_EASE,
            interval_days: 0.0,
            repetitions: 0,
            lapse_count: 0,
        }
    }
}

/// Tunables for the scheduling algorithm, per user or global.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Length of the short retry step for "Again", in minutes.
    pub again_step_minutes: f64,
    /// Interval growth factor for "Hard" past the learning phase.
    pub hard_multiplier: f64,
    /// Extra multiplier on top of the ease factor for "Easy".
    pub easy_bonus: f64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            again_step_minutes: 10.0,
            hard_multiplier: 1.2,
            easy_bonus: 1.3,
        }
    }
}

/// Output of one scheduling decision: the next persisted state plus the
/// absolute due timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    pub state: CardState,
    pub due_at: DateTime<Utc>,
}

trait Round {
    fn to_2_decimal(self) -> f64;
    fn to_3_decimal(self) -> f64;
}

impl Round for f64 {
    fn to_2_decimal(self) -> f64 {
        (self * 100.0).round() / 100.0
    }

    fn to_3_decimal(self) -> f64 {
        (self * 1000.0).round() / 1000.0
    }
}

/// Computes the state after one review, without a clock.
///
/// Pure numeric transition of the SM-2 variant. Ease is floored at
/// [`MIN_EASE`], the interval is capped at [`MAX_INTERVAL_DAYS`], and the
/// stored precision is fixed: ease to 2 decimals, interval to 3.
pub fn next_state(state: &CardState, grade: Grade, config: &SchedulerConfig) -> CardState {
    let mut ease = state.ease_factor;
    let mut interval = state.interval_days;
    let mut repetitions = state.repetitions;
    let mut lapses = state.lapse_count;

    match grade {
        Grade::Again => {
            lapses += 1;
            repetitions = 0;
            ease = (ease - 0.2).max(MIN_EASE);
            // Short retry step instead of a reset to day one. The card keeps
            // its accumulated spacing; only the repetition streak restarts.
            interval = config.again_step_minutes / MINUTES_PER_DAY;
        }
        Grade::Hard => {
            ease = (ease - 0.15).max(MIN_EASE);
            interval = if repetitions == 0 {
                1.0
            } else {
                (interval * config.hard_multiplier).max(1.0)
            };
            repetitions += 1;
        }
        Grade::Good => {
            // Ease deliberately untouched: SM-2's unmodified-ease-on-"Good"
            // rule, written as an explicit no-op in the reference algorithm.
            interval = match repetitions {
                0 => 1.0,
                1 => 6.0,
                _ => (interval * ease).round(),
            };
            repetitions += 1;
        }
        Grade::Easy => {
            interval = match repetitions {
                0 => 4.0,
                1 => 10.0,
                _ => (interval * ease * config.easy_bonus).round(),
            };
            ease += 0.15;
            repetitions += 1;
        }
    }

    CardState {
        ease_factor: ease.to_2_decimal(),
        interval_days: interval.min(MAX_INTERVAL_DAYS).to_3_decimal(),
        repetitions,
        lapse_count: lapses,
    }
}

/// Schedules one review: [`next_state`] plus `due_at = now + interval`.
///
/// Total over its domain, deterministic, no I/O. The caller persists the
/// returned state and timestamp; nothing is mutated here.
pub fn schedule(
    state: &CardState,
    grade: Grade,
    config: &SchedulerConfig,
    now: DateTime<Utc>,
) -> ScheduleResult {
    let next = next_state(state, grade, config);
    let due_at = now + Duration::milliseconds((next.interval_days * MILLIS_PER_DAY).round() as i64);
    ScheduleResult {
        state: next,
        due_at,
    }
}
