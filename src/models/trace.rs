//! Execution trace events.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Job, JobId, Ticks};

/// One scheduling event, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    /// A job was given the CPU.
    Dispatched {
        /// Clock value at dispatch.
        time: Ticks,
        job_id: JobId,
        name: String,
        /// Ticks executed in this slice.
        run_for: Ticks,
        /// Ticks still owed after the slice.
        remaining_after: Ticks,
        priority: i32,
    },
    /// A job's remaining time reached zero.
    Completed {
        time: Ticks,
        job_id: JobId,
        name: String,
    },
}

impl TraceEvent {
    pub fn job_id(&self) -> JobId {
        match self {
            Self::Dispatched { job_id, .. } | Self::Completed { job_id, .. } => *job_id,
        }
    }

    pub fn time(&self) -> Ticks {
        match self {
            Self::Dispatched { time, .. } | Self::Completed { time, .. } => *time,
        }
    }

    pub fn is_dispatch(&self) -> bool {
        matches!(self, Self::Dispatched { .. })
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dispatched {
                time,
                name,
                run_for,
                ..
            } => write!(f, "Executing {name} at time {time} for {run_for} units"),
            Self::Completed { time, name, .. } => write!(f, "{name} completed at time {time}"),
        }
    }
}

/// Append-only trace recorder used by the schedulers.
#[derive(Debug, Default)]
pub(crate) struct Trace {
    events: Vec<TraceEvent>,
}

impl Trace {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records a slice of `run_for` ticks that began at `time`.
    pub(crate) fn dispatched(&mut self, job: &Job, time: Ticks, run_for: Ticks) {
        self.push(TraceEvent::Dispatched {
            time,
            job_id: job.id(),
            name: job.name().to_string(),
            run_for,
            remaining_after: job.remaining_time(),
            priority: job.priority(),
        });
    }

    pub(crate) fn completed(&mut self, job: &Job, time: Ticks) {
        self.push(TraceEvent::Completed {
            time,
            job_id: job.id(),
            name: job.name().to_string(),
        });
    }

    fn push(&mut self, event: TraceEvent) {
        tracing::trace!(%event, "trace");
        self.events.push(event);
    }

    pub(crate) fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }
}
