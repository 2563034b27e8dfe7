//! Synthetic workload generation.
//!
//! Produces reproducible job sets for benchmarks and comparisons between
//! policies. Each tick in `[0, horizon)` independently receives a job with
//! probability `p_arrival`; a job is short with probability `p_short`,
//! otherwise long.

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{JobSpec, Ticks};

/// Parameters of a generated workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Ticks during which jobs may arrive.
    pub horizon: Ticks,
    /// Arrival probability per tick (0.0..=1.0).
    pub p_arrival: f64,
    /// Probability that an arriving job is short (0.0..=1.0).
    pub p_short: f64,
    /// Burst time of short jobs.
    pub short_burst: Ticks,
    /// Burst time of long jobs.
    pub long_burst: Ticks,
    /// Inclusive priority range drawn uniformly.
    pub priority_range: (i32, i32),
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            horizon: 100,
            p_arrival: 0.3,
            p_short: 0.3,
            short_burst: 2,
            long_burst: 6,
            priority_range: (1, 10),
        }
    }
}

impl WorkloadConfig {
    /// Sets the arrival horizon.
    pub fn with_horizon(mut self, horizon: Ticks) -> Self {
        self.horizon = horizon;
        self
    }

    /// Sets the per-tick arrival probability.
    pub fn with_arrival_probability(mut self, p: f64) -> Self {
        self.p_arrival = p;
        self
    }

    /// Sets short/long burst times and the short-job probability.
    pub fn with_bursts(mut self, short_burst: Ticks, long_burst: Ticks, p_short: f64) -> Self {
        self.short_burst = short_burst;
        self.long_burst = long_burst;
        self.p_short = p_short;
        self
    }

    /// Sets the inclusive priority range.
    pub fn with_priority_range(mut self, low: i32, high: i32) -> Self {
        self.priority_range = (low.min(high), low.max(high));
        self
    }
}

/// Generates a job set; the same `seed` always yields the same jobs.
///
/// Jobs are numbered from 1 in arrival order and named `J<id>`.
pub fn generate(config: &WorkloadConfig, seed: u64) -> Vec<JobSpec> {
    let mut rng = StdRng::seed_from_u64(seed);
    let (a, b) = config.priority_range;
    let (low, high) = (a.min(b), a.max(b));
    let mut jobs = Vec::new();

    for t in 0..config.horizon.max(0) {
        if rng.random::<f64>() >= config.p_arrival {
            continue;
        }
        let burst = if rng.random::<f64>() < config.p_short {
            config.short_burst
        } else {
            config.long_burst
        };
        let id = jobs.len() as u64 + 1;
        let priority = rng.random_range(low..=high);
        jobs.push(JobSpec::new(id, format!("J{id}"), burst.max(1), t).with_priority(priority));
    }

    jobs
}
