//! Preemptive round-robin scheduler.
//!
//! # Algorithm
//!
//! 1. Admit jobs into a [`RingBuffer`] sized to the job count.
//! 2. Dequeue the front job; on its first dispatch clamp the clock to its
//!    arrival time and record the start.
//! 3. Run `min(quantum, remaining)` ticks.
//! 4. Finished jobs record completion; the others go back to the rear.
//!
//! A job is dequeued before it can be re-enqueued, so the buffer never holds
//! more than the job count.

use super::admission::Admission;
use super::{advance_clock, run_with, ArrivalPolicy, Quantum, Scheduler, SchedulerKind};
use crate::error::{Result, SimError};
use crate::models::{Job, JobSpec, SimulationResult, Ticks};
use crate::queue::RingBuffer;

/// Preemptive round-robin scheduler.
///
/// # Example
///
/// ```
/// use sched_sim::models::JobSpec;
/// use sched_sim::scheduler::{RoundRobinScheduler, Scheduler};
///
/// let jobs = vec![JobSpec::new(1, "A", 3, 0), JobSpec::new(2, "B", 3, 0)];
/// let result = RoundRobinScheduler::new(2).run(&jobs).unwrap();
///
/// // A: 0-2, B: 2-4, A: 4-5, B: 5-6
/// assert_eq!(result.metrics_for(1).unwrap().completion_time, 5);
/// assert_eq!(result.metrics_for(2).unwrap().completion_time, 6);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobinScheduler {
    quantum: Quantum,
    arrival_policy: ArrivalPolicy,
}

impl RoundRobinScheduler {
    /// Creates a scheduler; a non-positive quantum falls back to the default.
    pub fn new(quantum: Ticks) -> Self {
        Self::with_quantum(Quantum::new(quantum))
    }

    pub fn with_quantum(quantum: Quantum) -> Self {
        Self {
            quantum,
            arrival_policy: ArrivalPolicy::default(),
        }
    }

    /// Sets when jobs enter the ready queue.
    pub fn with_arrival_policy(mut self, policy: ArrivalPolicy) -> Self {
        self.arrival_policy = policy;
        self
    }

    pub fn quantum(&self) -> Ticks {
        self.quantum.get()
    }

    pub fn arrival_policy(&self) -> ArrivalPolicy {
        self.arrival_policy
    }
}

fn push_ready(ready: &mut RingBuffer<usize>, idx: usize, job: &Job) -> Result<()> {
    ready.enqueue(idx).map_err(|_| SimError::QueueOverflow {
        capacity: ready.capacity(),
        id: job.id(),
    })
}

impl Scheduler for RoundRobinScheduler {
    fn kind(&self) -> SchedulerKind {
        SchedulerKind::RoundRobin
    }

    fn run(&self, jobs: &[JobSpec]) -> Result<SimulationResult> {
        let quantum = self.quantum.get();
        run_with(self.kind(), jobs, |jobs, trace| {
            let mut ready = RingBuffer::with_capacity(jobs.len().max(1));
            let mut admission = Admission::new(self.arrival_policy, jobs);
            let mut clock: Ticks = 0;

            admission.admit(jobs, clock, |idx, job| push_ready(&mut ready, idx, job))?;

            loop {
                let idx = match ready.dequeue() {
                    Some(idx) => idx,
                    None => match admission.next_arrival(jobs) {
                        Some(arrival) => {
                            clock = clock.max(arrival);
                            admission.admit(jobs, clock, |idx, job| {
                                push_ready(&mut ready, idx, job)
                            })?;
                            continue;
                        }
                        None => break,
                    },
                };

                let job = &mut jobs[idx];
                let start = job.dispatch_at(clock);
                let ran = job.execute(quantum);
                clock = advance_clock(job, start, ran)?;
                trace.dispatched(job, start, ran);

                let finished = job.remaining_time() == 0;
                if finished {
                    job.finish(clock);
                    trace.completed(job, clock);
                }

                // Arrivals during the slice queue ahead of the preempted job.
                admission.admit(jobs, clock, |idx, job| push_ready(&mut ready, idx, job))?;
                if !finished {
                    push_ready(&mut ready, idx, &jobs[idx])?;
                }
            }
            Ok(())
        })
    }
}
