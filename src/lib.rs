mod error;
mod preview;
mod revlog;
mod scheduler;
mod simulation;

pub use error::{Result, SchedulerError};
pub use preview::{NextStates, format_interval, preview};
pub use revlog::ReviewLogEntry;
pub use scheduler::{
    CardState, Grade, INITIAL_EASE, MAX_INTERVAL_DAYS, MIN_EASE, ScheduleResult, SchedulerConfig,
    next_state, schedule,
};
pub use simulation::{SimulationResult, SimulatorConfig, simulate};
