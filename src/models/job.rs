//! Job model.
//!
//! A job is one unit of CPU work. The caller describes it with an immutable
//! [`JobSpec`]; each simulation run copies the specs into fresh [`Job`]
//! records that accumulate timing results.
//!
//! # Time Representation
//! All times are integer ticks of a single logical clock starting at t=0.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Job identifier. Uniqueness is the caller's responsibility.
pub type JobId = u64;

/// Simulated clock unit.
pub type Ticks = i64;

/// Priority assigned when the intake record omits one.
pub const DEFAULT_PRIORITY: i32 = 10;

fn default_priority() -> i32 {
    DEFAULT_PRIORITY
}

/// Caller-supplied intake record for a job.
///
/// Lower `priority` values are more urgent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSpec {
    /// Job identifier.
    pub id: JobId,
    /// Display label.
    pub name: String,
    /// Total execution time required (ticks, > 0).
    pub burst_time: Ticks,
    /// Clock value at which the job becomes eligible (ticks, >= 0).
    pub arrival_time: Ticks,
    /// Static priority (lower = more urgent).
    #[serde(default = "default_priority")]
    pub priority: i32,
}

impl JobSpec {
    /// Creates an intake record with the default priority.
    pub fn new(id: JobId, name: impl Into<String>, burst_time: Ticks, arrival_time: Ticks) -> Self {
        Self {
            id,
            name: name.into(),
            burst_time,
            arrival_time,
            priority: DEFAULT_PRIORITY,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Checks the burst and arrival bounds.
    pub fn check(&self) -> Result<()> {
        if self.burst_time <= 0 {
            return Err(SimError::NonPositiveBurst {
                id: self.id,
                burst_time: self.burst_time,
            });
        }
        if self.arrival_time < 0 {
            return Err(SimError::NegativeArrival {
                id: self.id,
                arrival_time: self.arrival_time,
            });
        }
        Ok(())
    }
}

/// A job as seen by one simulation run.
///
/// The intake fields are private and read-only; only the scheduler that owns
/// the run advances `remaining_time` and records the timing results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Job {
    spec: JobSpec,
    remaining_time: Ticks,
    start_time: Option<Ticks>,
    completion_time: Option<Ticks>,
    waiting_time: Option<Ticks>,
    turnaround_time: Option<Ticks>,
}

impl Job {
    /// Builds a fresh run record from an intake record.
    ///
    /// Fails fast on a non-positive burst or negative arrival time.
    pub fn from_spec(spec: &JobSpec) -> Result<Self> {
        spec.check()?;
        Ok(Self {
            spec: spec.clone(),
            remaining_time: spec.burst_time,
            start_time: None,
            completion_time: None,
            waiting_time: None,
            turnaround_time: None,
        })
    }

    /// Job identifier.
    pub fn id(&self) -> JobId {
        self.spec.id
    }

    /// Display label.
    pub fn name(&self) -> &str {
        &self.spec.name
    }

    /// Total execution time required.
    pub fn burst_time(&self) -> Ticks {
        self.spec.burst_time
    }

    /// Clock value at which the job becomes eligible.
    pub fn arrival_time(&self) -> Ticks {
        self.spec.arrival_time
    }

    /// Static priority (lower = more urgent).
    pub fn priority(&self) -> i32 {
        self.spec.priority
    }

    /// The intake record this job was built from.
    pub fn spec(&self) -> &JobSpec {
        &self.spec
    }

    /// Execution time still owed.
    pub fn remaining_time(&self) -> Ticks {
        self.remaining_time
    }

    /// Clock value at first dispatch, once dispatched.
    pub fn start_time(&self) -> Option<Ticks> {
        self.start_time
    }

    /// Clock value at which the remaining time reached zero.
    pub fn completion_time(&self) -> Option<Ticks> {
        self.completion_time
    }

    /// Turnaround minus burst, once completed.
    pub fn waiting_time(&self) -> Option<Ticks> {
        self.waiting_time
    }

    /// Completion minus arrival, once completed.
    pub fn turnaround_time(&self) -> Option<Ticks> {
        self.turnaround_time
    }

    /// Whether the job has been dispatched at least once.
    pub fn has_started(&self) -> bool {
        self.start_time.is_some()
    }

    /// Whether the job's remaining time reached zero.
    pub fn is_completed(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Prepares a dispatch at `clock` and returns the effective clock.
    ///
    /// On the first dispatch the clock is clamped to the arrival time and the
    /// start time is recorded; later dispatches leave both untouched.
    pub(crate) fn dispatch_at(&mut self, clock: Ticks) -> Ticks {
        match self.start_time {
            Some(_) => clock,
            None => {
                let start = clock.max(self.spec.arrival_time);
                self.start_time = Some(start);
                start
            }
        }
    }

    /// Runs for up to `max_units` ticks and returns the ticks consumed.
    pub(crate) fn execute(&mut self, max_units: Ticks) -> Ticks {
        let units = max_units.min(self.remaining_time);
        self.remaining_time -= units;
        units
    }

    /// Records completion at `clock` and derives waiting and turnaround time.
    pub(crate) fn finish(&mut self, clock: Ticks) {
        debug_assert_eq!(self.remaining_time, 0, "job {} finished early", self.id());
        let turnaround = clock - self.spec.arrival_time;
        self.completion_time = Some(clock);
        self.turnaround_time = Some(turnaround);
        self.waiting_time = Some(turnaround - self.spec.burst_time);
    }
}
