//! Non-preemptive static-priority scheduler.
//!
//! # Algorithm
//!
//! 1. Admit jobs into a [`SortedList`] keyed by priority value (lower first,
//!    ties in admission order).
//! 2. Remove the head, clamp the clock to its arrival time, run it to
//!    completion.
//! 3. Repeat until the list is empty and no job is left to admit.
//!
//! Under [`ArrivalPolicy::AllReady`] every job is admitted up front, so
//! priority dominates arrival order: a more urgent job that arrives later
//! is still selected first and the CPU idles until it arrives.

use super::admission::Admission;
use super::{advance_clock, run_with, ArrivalPolicy, Scheduler, SchedulerKind};
use crate::error::Result;
use crate::models::{JobSpec, SimulationResult, Ticks};
use crate::queue::SortedList;

/// Non-preemptive priority scheduler.
///
/// # Example
///
/// ```
/// use sched_sim::models::JobSpec;
/// use sched_sim::scheduler::{PriorityScheduler, Scheduler};
///
/// let jobs = vec![
///     JobSpec::new(1, "low", 3, 0).with_priority(5),
///     JobSpec::new(2, "high", 3, 0).with_priority(1),
/// ];
/// let result = PriorityScheduler::new().run(&jobs).unwrap();
/// assert_eq!(result.start_order(), vec![2, 1]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScheduler {
    arrival_policy: ArrivalPolicy,
}

impl PriorityScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets when jobs enter the ready list.
    pub fn with_arrival_policy(mut self, policy: ArrivalPolicy) -> Self {
        self.arrival_policy = policy;
        self
    }

    pub fn arrival_policy(&self) -> ArrivalPolicy {
        self.arrival_policy
    }
}

impl Scheduler for PriorityScheduler {
    fn kind(&self) -> SchedulerKind {
        SchedulerKind::Priority
    }

    fn run(&self, jobs: &[JobSpec]) -> Result<SimulationResult> {
        run_with(self.kind(), jobs, |jobs, trace| {
            let mut ready = SortedList::new();
            let mut admission = Admission::new(self.arrival_policy, jobs);
            let mut clock: Ticks = 0;

            loop {
                admission.admit(jobs, clock, |idx, job| {
                    ready.insert(job.priority(), idx);
                    Ok(())
                })?;

                let Some((_, idx)) = ready.remove_min() else {
                    match admission.next_arrival(jobs) {
                        Some(arrival) => {
                            clock = clock.max(arrival);
                            continue;
                        }
                        None => break,
                    }
                };

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
