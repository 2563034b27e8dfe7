//! Simulation quality metrics (KPIs).
//!
//! Aggregates the per-job metrics of a [`SimulationResult`].
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Avg Waiting | Mean of completion - arrival - burst |
//! | Max Waiting | Longest single wait |
//! | Avg Turnaround | Mean of completion - arrival |
//! | Avg Response | Mean of first dispatch - arrival |
//! | Utilization | Total burst / (makespan - first arrival) |
//! | Throughput | Jobs completed per tick over the same horizon |
//! | Context Switches | Dispatches beyond the first per job |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use crate::models::{SimulationResult, Ticks};

/// Aggregate scheduling indicators. Times are in ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationKpi {
    /// Latest completion time.
    pub makespan: Ticks,
    /// Sum of waiting time across all jobs.
    pub total_waiting: Ticks,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Maximum waiting time of any single job.
    pub max_waiting: Ticks,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean response time (first dispatch - arrival).
    pub avg_response: f64,
    /// Fraction of the busy horizon the CPU was executing (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed jobs per tick.
    pub throughput: f64,
    /// Preemptions: total dispatches minus job count.
    pub context_switches: usize,
}

impl SimulationKpi {
    /// Computes KPIs from a finished simulation.
    pub fn calculate(result: &SimulationResult) -> Self {
        let count = result.job_count();
        let makespan = result.makespan();

        // Sums are widened; a single job's times fit in `Ticks`, many may not.
        let mut total_waiting: i128 = 0;
        let mut max_waiting: Ticks = 0;
        let mut total_turnaround: i128 = 0;
        let mut total_response: i128 = 0;
        let mut total_burst: i128 = 0;

        for m in &result.jobs {
            total_waiting += i128::from(m.waiting_time);
            max_waiting = max_waiting.max(m.waiting_time);
            total_turnaround += i128::from(m.turnaround_time);
            total_response += i128::from(m.response_time());
            total_burst += i128::from(m.burst_time);
        }

        let mean = |total: i128| {
            if count == 0 {
                0.0
            } else {
                total as f64 / count as f64
            }
        };

        let first_arrival = result
            .jobs
            .iter()
            .map(|m| m.arrival_time)
            .min()
            .unwrap_or(0);
        let horizon = makespan - first_arrival;
        let (cpu_utilization, throughput) = if horizon <= 0 {
            (0.0, 0.0)
        } else {
            (
                total_burst as f64 / horizon as f64,
                count as f64 / horizon as f64,
            )
        };

        Self {
            makespan,
            total_waiting: Ticks::try_from(total_waiting).unwrap_or(Ticks::MAX),
            avg_waiting: mean(total_waiting),
            max_waiting,
            avg_turnaround: mean(total_turnaround),
            avg_response: mean(total_response),
            cpu_utilization,
            throughput,
            context_switches: result.dispatch_count().saturating_sub(count),
        }
    }

    /// Whether the run meets the given waiting-time and utilization targets.
    pub fn meets_thresholds(&self, max_avg_waiting: f64, min_utilization: f64) -> bool {
        self.avg_waiting <= max_avg_waiting && self.cpu_utilization >= min_utilization
    }
}
