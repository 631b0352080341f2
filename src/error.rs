use snafu::Snafu;

#[derive(Snafu, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerError {
    InvalidGrade,
    InvalidDeckSize,
    InvalidRatingProbability,
}

pub type Result<T, E = SchedulerError> = std::result::Result<T, E>;
