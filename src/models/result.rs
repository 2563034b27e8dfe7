//! Simulation result model.
//!
//! The value handed back to the presentation boundary: the ordered trace
//! plus the final metrics of every job.

use serde::{Deserialize, Serialize};

use super::{Job, JobId, Ticks, TraceEvent};
use crate::scheduler::SchedulerKind;

/// Final timing metrics of one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobMetrics {
    pub id: JobId,
    pub name: String,
    pub burst_time: Ticks,
    pub arrival_time: Ticks,
    pub priority: i32,
    /// First dispatch.
    pub start_time: Ticks,
    pub completion_time: Ticks,
    /// Time spent ready but not running.
    pub waiting_time: Ticks,
    /// Completion minus arrival.
    pub turnaround_time: Ticks,
}

impl JobMetrics {
    /// Snapshots a completed job. Returns `None` if it never completed.
    pub fn from_job(job: &Job) -> Option<Self> {
        Some(Self {
            id: job.id(),
            name: job.name().to_string(),
            burst_time: job.burst_time(),
            arrival_time: job.arrival_time(),
            priority: job.priority(),
            start_time: job.start_time()?,
            completion_time: job.completion_time()?,
            waiting_time: job.waiting_time()?,
            turnaround_time: job.turnaround_time()?,
        })
    }

    /// Start minus arrival.
    #[inline]
    pub fn response_time(&self) -> Ticks {
        self.start_time - self.arrival_time
    }
}

/// Outcome of one scheduler run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Policy that produced this result.
    pub scheduler: SchedulerKind,
    /// Scheduling events in execution order.
    pub trace: Vec<TraceEvent>,
    /// Per-job metrics, in the caller's input order.
    pub jobs: Vec<JobMetrics>,
}

impl SimulationResult {
    /// Creates an empty result for the given policy.
    pub fn empty(scheduler: SchedulerKind) -> Self {
        Self {
            scheduler,
            trace: Vec::new(),
            jobs: Vec::new(),
        }
    }

    /// Whether no job was simulated.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Number of jobs simulated.
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Metrics for a job ID (first match if IDs repeat).
    pub fn metrics_for(&self, id: JobId) -> Option<&JobMetrics> {
        self.jobs.iter().find(|m| m.id == id)
    }

    /// Dispatch events of one job, in order.
    pub fn dispatches_of(&self, id: JobId) -> Vec<&TraceEvent> {
        self.trace
            .iter()
            .filter(|e| e.is_dispatch() && e.job_id() == id)
            .collect()
    }

    /// Total number of dispatches across all jobs.
    pub fn dispatch_count(&self) -> usize {
        self.trace.iter().filter(|e| e.is_dispatch()).count()
    }

    /// Latest completion time, 0 when empty.
    pub fn makespan(&self) -> Ticks {
        self.jobs
            .iter()
            .map(|m| m.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Job IDs in order of first dispatch.
    pub fn start_order(&self) -> Vec<JobId> {
        let mut jobs: Vec<&JobMetrics> = self.jobs.iter().collect();
        jobs.sort_by_key(|m| m.start_time);
        jobs.into_iter().map(|m| m.id).collect()
    }
}
