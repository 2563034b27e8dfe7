//! Engine error type.

use thiserror::Error;

use crate::models::{JobId, Ticks};

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, SimError>;

/// Failures surfaced by the simulation engine.
///
/// Input errors are raised when a [`Job`](crate::models::Job) is built from
/// its intake record, before any scheduling happens. An empty job set is not
/// an error; it yields an empty result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// Burst time was zero or negative.
    #[error("job {id}: burst time must be positive, got {burst_time}")]
    NonPositiveBurst { id: JobId, burst_time: Ticks },

    /// Arrival time was negative.
    #[error("job {id}: arrival time must not be negative, got {arrival_time}")]
    NegativeArrival { id: JobId, arrival_time: Ticks },

    /// The simulated clock would exceed `Ticks::MAX` while running a job.
    #[error("job {id}: simulated clock overflow at time {time} running {run_for} ticks")]
    ClockOverflow { id: JobId, time: Ticks, run_for: Ticks },

    /// The round-robin ready queue had no free slot.
    #[error("ready queue overflow: all {capacity} slots in use while enqueuing job {id}")]
    QueueOverflow { capacity: usize, id: JobId },

    /// Scheduler selector string not recognised.
    #[error("unknown scheduler kind: {0}")]
    UnknownScheduler(String),
}

impl SimError {
    /// Whether this error stems from invalid caller input.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::NonPositiveBurst { .. }
                | Self::NegativeArrival { .. }
                | Self::ClockOverflow { .. }
                | Self::UnknownScheduler(_)
        )
    }
}
