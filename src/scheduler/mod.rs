//! CPU schedulers and result metrics.
//!
//! Three policies share the [`Scheduler`] capability: each takes the caller's
//! intake records, builds a private copy of the job set, drives a simulated
//! clock over its ready queue and returns a [`SimulationResult`].
//!
//! | Policy | Preemptive | Ready queue | Order |
//! |--------|-----------|-------------|-------|
//! | `FifoScheduler` | no | sorted copy | arrival time (stable) |
//! | `PriorityScheduler` | no | `SortedList` | priority value (stable) |
//! | `RoundRobinScheduler` | yes | `RingBuffer` | rotation, `quantum` ticks per slice |
//!
//! # KPI
//!
//! `SimulationKpi` aggregates a result: makespan, average waiting and
//! turnaround time, response time, utilization, throughput.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod admission;
mod config;
mod fifo;
mod kpi;
mod priority;
mod round_robin;

pub use config::{simulate, ArrivalPolicy, Quantum, SimulationConfig, DEFAULT_QUANTUM};
pub use fifo::FifoScheduler;
pub use kpi::SimulationKpi;
pub use priority::PriorityScheduler;
pub use round_robin::RoundRobinScheduler;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SimError};
use crate::models::{Job, JobMetrics, JobSpec, SimulationResult, Ticks, Trace};

/// Scheduling policy selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchedulerKind {
    /// First-in-first-out by arrival time.
    #[default]
    #[serde(rename = "FIFO")]
    Fifo,
    /// Non-preemptive static priority.
    Priority,
    /// Preemptive time slicing.
    RoundRobin,
}

impl SchedulerKind {
    /// All policies, in presentation order.
    pub const ALL: [SchedulerKind; 3] = [Self::Fifo, Self::Priority, Self::RoundRobin];

    /// Short label used to prefix transcript lines.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fifo => "FIFO",
            Self::Priority => "Priority",
            Self::RoundRobin => "RR",
        }
    }
}

impl fmt::Display for SchedulerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fifo => "FIFO",
            Self::Priority => "Priority",
            Self::RoundRobin => "Round Robin",
        };
        f.write_str(name)
    }
}

impl FromStr for SchedulerKind {
    type Err = SimError;

    /// Accepts `FIFO`, `Priority`, `RoundRobin`, `Round Robin` and `RR`,
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "fifo" | "fcfs" => Ok(Self::Fifo),
            "priority" => Ok(Self::Priority),
            "roundrobin" | "rr" => Ok(Self::RoundRobin),
            _ => Err(SimError::UnknownScheduler(s.to_string())),
        }
    }
}

/// A scheduling policy.
///
/// `run` never mutates the caller's records: it validates and copies them,
/// then simulates on the copies. An empty input yields an empty result.
pub trait Scheduler: fmt::Debug + Send + Sync {
    /// Which policy this is.
    fn kind(&self) -> SchedulerKind;

    /// Simulates the job set to completion.
    fn run(&self, jobs: &[JobSpec]) -> Result<SimulationResult>;
}

/// Clock value after `job` ran `ran` ticks from `start`.
pub(crate) fn advance_clock(job: &Job, start: Ticks, ran: Ticks) -> Result<Ticks> {
    start.checked_add(ran).ok_or(SimError::ClockOverflow {
        id: job.id(),
        time: start,
        run_for: ran,
    })
}

/// Shared run harness: copy, simulate with `policy`, collect metrics.
pub(crate) fn run_with<F>(kind: SchedulerKind, specs: &[JobSpec], policy: F) -> Result<SimulationResult>
where
    F: FnOnce(&mut [Job], &mut Trace) -> Result<()>,
{
    let mut jobs = specs
        .iter()
        .map(Job::from_spec)
        .collect::<Result<Vec<_>>>()?;

    let span = tracing::debug_span!("simulate", scheduler = %kind, jobs = jobs.len());
    let _guard = span.enter();

    let mut trace = Trace::new();
    policy(&mut jobs, &mut trace)?;

    let metrics: Vec<JobMetrics> = jobs.iter().filter_map(JobMetrics::from_job).collect();
    debug_assert_eq!(metrics.len(), jobs.len(), "every job must complete");

    let result = SimulationResult {
        scheduler: kind,
        trace: trace.into_events(),
        jobs: metrics,
    };
    tracing::debug!(
        makespan = result.makespan(),
        dispatches = result.dispatch_count(),
        "simulation complete"
    );
    Ok(result)
}
