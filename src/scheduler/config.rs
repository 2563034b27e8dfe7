//! Simulation configuration and entry point.

use serde::{Deserialize, Serialize};

use super::{FifoScheduler, PriorityScheduler, RoundRobinScheduler, Scheduler, SchedulerKind};
use crate::error::Result;
use crate::models::{JobSpec, SimulationResult, Ticks};

/// Round-robin time slice used when none (or an invalid one) is given.
pub const DEFAULT_QUANTUM: Ticks = 4;

/// When jobs enter the ready queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrivalPolicy {
    /// Every job is queued before the run starts, in input order. A job is
    /// still never started before its arrival time.
    #[default]
    AllReady,
    /// Jobs are queued in arrival order once the clock reaches their arrival
    /// time; an empty queue jumps the clock to the next arrival.
    Gated,
}

/// A validated round-robin time slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantum(Ticks);

impl Quantum {
    /// Uses `ticks` if positive, otherwise falls back to [`DEFAULT_QUANTUM`].
    pub fn new(ticks: Ticks) -> Self {
        if ticks > 0 {
            Self(ticks)
        } else {
            tracing::warn!(
                requested = ticks,
                fallback = DEFAULT_QUANTUM,
                "invalid quantum, using default"
            );
            Self(DEFAULT_QUANTUM)
        }
    }

    /// Parses boundary input: plain digits only, anything else gives the default.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            tracing::warn!(input, fallback = DEFAULT_QUANTUM, "unparsable quantum, using default");
            return Self(DEFAULT_QUANTUM);
        }
        match trimmed.parse::<Ticks>() {
            Ok(ticks) => Self::new(ticks),
            Err(_) => {
                tracing::warn!(
                    input,
                    fallback = DEFAULT_QUANTUM,
                    "quantum out of range, using default"
                );
                Self(DEFAULT_QUANTUM)
            }
        }
    }

    #[inline]
    pub fn get(&self) -> Ticks {
        self.0
    }
}

impl Default for Quantum {
    fn default() -> Self {
        Self(DEFAULT_QUANTUM)
    }
}

/// Boundary configuration: which policy to run and how.
///
/// # Example
///
/// ```
/// use sched_sim::models::JobSpec;
/// use sched_sim::scheduler::{simulate, SchedulerKind, SimulationConfig};
///
/// let jobs = vec![JobSpec::new(1, "C", 5, 0)];
/// let config = SimulationConfig::new(SchedulerKind::RoundRobin).with_quantum(2);
///
/// let result = simulate(&jobs, &config).unwrap();
/// assert_eq!(result.dispatches_of(1).len(), 3);
/// assert_eq!(result.metrics_for(1).unwrap().completion_time, 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Policy to run.
    pub scheduler: SchedulerKind,
    /// Raw round-robin quantum; `None` or non-positive means [`DEFAULT_QUANTUM`].
    pub quantum: Option<Ticks>,
    /// Ready-queue admission for the priority and round-robin policies.
    pub arrival_policy: ArrivalPolicy,
}

impl SimulationConfig {
    /// Creates a configuration for the given policy.
    pub fn new(scheduler: SchedulerKind) -> Self {
        Self {
            scheduler,
            ..Default::default()
        }
    }

    /// Sets the round-robin quantum.
    pub fn with_quantum(mut self, quantum: Ticks) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Sets the arrival policy.
    pub fn with_arrival_policy(mut self, policy: ArrivalPolicy) -> Self {
        self.arrival_policy = policy;
        self
    }

    /// Effective quantum after fallback.
    pub fn effective_quantum(&self) -> Quantum {
        self.quantum.map(Quantum::new).unwrap_or_default()
    }

    /// Constructs the configured scheduler.
    pub fn build(&self) -> Box<dyn Scheduler> {
        match self.scheduler {
            SchedulerKind::Fifo => Box::new(FifoScheduler::new()),
            SchedulerKind::Priority => {
                Box::new(PriorityScheduler::new().with_arrival_policy(self.arrival_policy))
            }
            SchedulerKind::RoundRobin => Box::new(
                RoundRobinScheduler::with_quantum(self.effective_quantum())
                    .with_arrival_policy(self.arrival_policy),
            ),
        }
    }
}

/// Runs the configured policy over `jobs`.
pub fn simulate(jobs: &[JobSpec], config: &SimulationConfig) -> Result<SimulationResult> {
    config.build().run(jobs)
}
