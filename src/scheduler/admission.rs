//! Ready-queue admission under an [`ArrivalPolicy`].

use super::ArrivalPolicy;
use crate::error::Result;
use crate::models::{Job, Ticks};

/// Feeds job indices into a ready queue.
///
/// `AllReady` admits every job on the first call, in input order.
/// `Gated` admits jobs in arrival order (stable) once `arrival_time <= clock`.
#[derive(Debug)]
pub(crate) struct Admission {
    order: Vec<usize>,
    next: usize,
    gated: bool,
}

impl Admission {
    pub(crate) fn new(policy: ArrivalPolicy, jobs: &[Job]) -> Self {
        let mut order: Vec<usize> = (0..jobs.len()).collect();
        let gated = policy == ArrivalPolicy::Gated;
        if gated {
            order.sort_by_key(|&i| jobs[i].arrival_time());
        }
        Self {
            order,
            next: 0,
            gated,
        }
    }

    /// Hands every job eligible at `clock` to `enqueue`.
    pub(crate) fn admit<F>(&mut self, jobs: &[Job], clock: Ticks, mut enqueue: F) -> Result<()>
    where
        F: FnMut(usize, &Job) -> Result<()>,
    {
        while let Some(&idx) = self.order.get(self.next) {
            let job = &jobs[idx];
            if self.gated && job.arrival_time() > clock {
                break;
            }
            enqueue(idx, job)?;
            self.next += 1;
        }
        Ok(())
    }

    /// Arrival time of the next job not yet admitted.
    pub(crate) fn next_arrival(&self, jobs: &[Job]) -> Option<Ticks> {
        self.order.get(self.next).map(|&i| jobs[i].arrival_time())
    }
}
