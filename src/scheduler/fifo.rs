//! First-in-first-out scheduler.
//!
//! # Algorithm
//!
//! 1. Stable-sort jobs by arrival time (ties keep input order).
//! 2. For each job, advance the clock to `max(clock, arrival)`.
//! 3. Run the job to completion in one step.
//!
//! Non-preemptive; the order is fixed before the first dispatch.

use super::{advance_clock, run_with, Scheduler, SchedulerKind};
use crate::error::Result;
use crate::models::{JobSpec, SimulationResult, Ticks};

/// Non-preemptive FIFO scheduler.
///
/// # Example
///
/// ```
/// use sched_sim::models::JobSpec;
/// use sched_sim::scheduler::{FifoScheduler, Scheduler};
///
/// let jobs = vec![JobSpec::new(1, "A", 4, 0), JobSpec::new(2, "B", 2, 1)];
/// let result = FifoScheduler::new().run(&jobs).unwrap();
///
/// let b = result.metrics_for(2).unwrap();
/// assert_eq!(b.start_time, 4);
/// assert_eq!(b.waiting_time, 3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FifoScheduler;

impl FifoScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for FifoScheduler {
    fn kind(&self) -> SchedulerKind {
        SchedulerKind::Fifo
    }

    fn run(&self, jobs: &[JobSpec]) -> Result<SimulationResult> {
        run_with(self.kind(), jobs, |jobs, trace| {
            let mut order: Vec<usize> = (0..jobs.len()).collect();
            order.sort_by_key(|&i| jobs[i].arrival_time());

            let mut clock: Ticks = 0;
            for idx in order {
                let job = &mut jobs[idx];
                let start = job.dispatch_at(clock);
                let ran = job.execute(job.burst_time());
                clock = advance_clock(job, start, ran)?;
                trace.dispatched(job, start, ran);
                job.finish(clock);
                trace.completed(job, clock);
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TraceEvent;

    #[test]
    fn test_fifo_waits_for_running_job() {
        let jobs = vec![JobSpec::new(1, "A", 4, 0), JobSpec::new(2, "B", 2, 1)];
        let result = FifoScheduler::new().run(&jobs).unwrap();

        let a = result.metrics_for(1).unwrap();
        assert_eq!((a.start_time, a.completion_time), (0, 4));
        assert_eq!((a.waiting_time, a.turnaround_time), (0, 4));

        let b = result.metrics_for(2).unwrap();
        assert_eq!((b.start_time, b.completion_time), (4, 6));
        assert_eq!((b.waiting_time, b.turnaround_time), (3, 5));

        let lines: Vec<String> = result.trace.iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            vec![
                "Executing A at time 0 for 4 units",
                "A completed at time 4",
                "Executing B at time 4 for 2 units",
                "B completed at time 6",
            ]
        );
    }

    #[test]
    fn test_fifo_sorts_by_arrival() {
        let jobs = vec![
            JobSpec::new(1, "late", 1, 10),
            JobSpec::new(2, "early", 3, 0),
        ];
        let result = FifoScheduler::new().run(&jobs).unwrap();
        assert_eq!(result.start_order(), vec![2, 1]);

        // Metrics stay in input order.
        assert_eq!(result.jobs[0].id, 1);
        // Idle gap: early ends at 3, late arrives at 10.
        assert_eq!(result.metrics_for(1).unwrap().start_time, 10);
        assert_eq!(result.metrics_for(1).unwrap().waiting_time, 0);
    }

    #[test]
    fn test_fifo_ties_keep_input_order() {
        let jobs = vec![
            JobSpec::new(7, "X", 2, 1),
            JobSpec::new(3, "Y", 2, 1),
            JobSpec::new(5, "Z", 2, 1),
        ];
        let result = FifoScheduler::new().run(&jobs).unwrap();
        let dispatched: Vec<u64> = result
            .trace
            .iter()
            .filter(|e| e.is_dispatch())
            .map(TraceEvent::job_id)
            .collect();
        assert_eq!(dispatched, vec![7, 3, 5]);
        assert_eq!(result.metrics_for(5).unwrap().start_time, 5);
    }

    #[test]
    fn test_fifo_ignores_priority() {
        let jobs = vec![
            JobSpec::new(1, "A", 2, 0).with_priority(9),
            JobSpec::new(2, "B", 2, 0).with_priority(1),
        ];
        let result = FifoScheduler::new().run(&jobs).unwrap();
        assert_eq!(result.start_order(), vec![1, 2]);
    }

    #[test]
    fn test_fifo_does_not_touch_input() {
        let jobs = vec![JobSpec::new(1, "A", 4, 0)];
        let before = jobs.clone();
        let _ = FifoScheduler::new().run(&jobs).unwrap();
        assert_eq!(jobs, before);
    }
}
