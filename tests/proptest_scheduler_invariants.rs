//! Property-based invariant tests for the schedulers and ready queues.
//!
//! 1. Every job completes and its metrics satisfy the timing identities
//! 2. No job starts before it arrives; CPU slices never overlap
//! 3. FIFO starts jobs in stable arrival order
//! 4. Round-robin slices are exactly one quantum except the last
//! 5. RingBuffer is a strict FIFO and rejects overflow without change
//! 6. SortedList drains in stable key order
//! 7. The caller's records are never mutated

use proptest::prelude::*;
use sched_sim::models::{JobSpec, SimulationResult, Ticks, TraceEvent};
use sched_sim::queue::{RingBuffer, SortedList};
use sched_sim::scheduler::{simulate, ArrivalPolicy, SchedulerKind, SimulationConfig};

// ── Strategies ──────────────────────────────────────────────────────────

fn jobs_strategy() -> impl Strategy<Value = Vec<JobSpec>> {
    prop::collection::vec((1i64..20, 0i64..30, 0i32..5), 0..25).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (burst, arrival, priority))| {
                JobSpec::new(i as u64, format!("J{i}"), burst, arrival).with_priority(priority)
            })
            .collect()
    })
}

fn config_strategy() -> impl Strategy<Value = SimulationConfig> {
    (
        prop_oneof![
            Just(SchedulerKind::Fifo),
            Just(SchedulerKind::Priority),
            Just(SchedulerKind::RoundRobin),
        ],
        1i64..8,
        prop_oneof![Just(ArrivalPolicy::AllReady), Just(ArrivalPolicy::Gated)],
    )
        .prop_map(|(kind, quantum, policy)| {
            SimulationConfig::new(kind)
                .with_quantum(quantum)
                .with_arrival_policy(policy)
        })
}

/// (start, run_for, remaining_after) of every dispatch of `id`.
fn slices(result: &SimulationResult, id: u64) -> Vec<(Ticks, Ticks, Ticks)> {
    result
        .trace
        .iter()
        .filter_map(|e| match e {
            TraceEvent::Dispatched {
                time,
                job_id,
                run_for,
                remaining_after,
                ..
            } if *job_id == id => Some((*time, *run_for, *remaining_after)),
            _ => None,
        })
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════
// 1-2. Completion and timing identities, no overlap
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn every_job_completes_with_consistent_metrics(
        jobs in jobs_strategy(),
        config in config_strategy(),
    ) {
        let result = simulate(&jobs, &config).unwrap();
        prop_assert_eq!(result.job_count(), jobs.len());

        for (spec, m) in jobs.iter().zip(&result.jobs) {
            prop_assert_eq!(spec.id, m.id);
            prop_assert_eq!(m.turnaround_time, m.waiting_time + m.burst_time);
            prop_assert_eq!(m.turnaround_time, m.completion_time - m.arrival_time);
            prop_assert!(m.start_time >= m.arrival_time);
            prop_assert!(m.waiting_time >= 0);
        }
    }

    #[test]
    fn slices_never_overlap(
        jobs in jobs_strategy(),
        config in config_strategy(),
    ) {
        let result = simulate(&jobs, &config).unwrap();
        let mut busy_until = 0;
        for event in &result.trace {
            if let TraceEvent::Dispatched { time, run_for, .. } = event {
                prop_assert!(*time >= busy_until);
                prop_assert!(*run_for > 0);
                busy_until = time + run_for;
            }
        }
        prop_assert_eq!(busy_until, result.makespan());
    }

    #[test]
    fn input_is_not_mutated(
        jobs in jobs_strategy(),
        config in config_strategy(),
    ) {
        let before = jobs.clone();
        let _ = simulate(&jobs, &config).unwrap();
        prop_assert_eq!(jobs, before);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 3. FIFO stable arrival order
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fifo_starts_in_stable_arrival_order(jobs in jobs_strategy()) {
        let result = simulate(&jobs, &SimulationConfig::new(SchedulerKind::Fifo)).unwrap();
        let dispatched: Vec<u64> = result
            .trace
            .iter()
            .filter(|e| e.is_dispatch())
            .map(TraceEvent::job_id)
            .collect();

        let mut expected: Vec<&JobSpec> = jobs.iter().collect();
        expected.sort_by_key(|j| j.arrival_time);
        let expected: Vec<u64> = expected.into_iter().map(|j| j.id).collect();
        prop_assert_eq!(dispatched, expected);
    }

    #[test]
    fn non_preemptive_policies_dispatch_once(
        jobs in jobs_strategy(),
        gated in any::<bool>(),
    ) {
        let policy = if gated { ArrivalPolicy::Gated } else { ArrivalPolicy::AllReady };
        for kind in [SchedulerKind::Fifo, SchedulerKind::Priority] {
            let config = SimulationConfig::new(kind).with_arrival_policy(policy);
            let result = simulate(&jobs, &config).unwrap();
            prop_assert_eq!(result.dispatch_count(), jobs.len());
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4. Round-robin slicing
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn round_robin_slices_are_one_quantum(
        jobs in jobs_strategy(),
        quantum in 1i64..8,
        gated in any::<bool>(),
    ) {
        let policy = if gated { ArrivalPolicy::Gated } else { ArrivalPolicy::AllReady };
        let config = SimulationConfig::new(SchedulerKind::RoundRobin)
            .with_quantum(quantum)
            .with_arrival_policy(policy);
        let result = simulate(&jobs, &config).unwrap();

        for job in &jobs {
            let s = slices(&result, job.id);
            prop_assert!(!s.is_empty());
            if job.burst_time > quantum {
                prop_assert!(s.len() > 1);
            }

            let (last, rest) = s.split_last().unwrap();
            for (_, run_for, _) in rest {
                prop_assert_eq!(*run_for, quantum);
            }
            prop_assert!(last.1 <= quantum);
            prop_assert_eq!(last.2, 0);

            let mut previous = job.burst_time;
            for (_, run_for, remaining) in &s {
                prop_assert!(*remaining < previous);
                prop_assert_eq!(previous - run_for, *remaining);
                previous = *remaining;
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 5-6. Ready queues
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn ring_buffer_is_strict_fifo(
        capacity in 1usize..32,
        items in prop::collection::vec(any::<u32>(), 0..64),
    ) {
        let mut ring = RingBuffer::with_capacity(capacity);
        let mut accepted = Vec::new();
        for item in items {
            let len_before = ring.len();
            match ring.enqueue(item) {
                Ok(()) => accepted.push(item),
                Err(rejected) => {
                    prop_assert_eq!(rejected, item);
                    prop_assert_eq!(ring.len(), len_before);
                    prop_assert!(ring.is_full());
                }
            }
        }
        prop_assert_eq!(accepted.len(), ring.len());
        prop_assert!(accepted.len() <= capacity);

        let drained: Vec<u32> = std::iter::from_fn(|| ring.dequeue()).collect();
        prop_assert_eq!(drained, accepted);
        prop_assert!(ring.is_empty());
    }

    #[test]
    fn ring_buffer_interleaved_ops_match_model(
        capacity in 1usize..8,
        ops in prop::collection::vec(any::<Option<u8>>(), 0..100),
    ) {
        // Some(x) = enqueue x, None = dequeue; checked against a VecDeque model.
        let mut ring = RingBuffer::with_capacity(capacity);
        let mut model = std::collections::VecDeque::new();
        for op in ops {
            match op {
                Some(x) => {
                    let ok = ring.enqueue(x).is_ok();
                    prop_assert_eq!(ok, model.len() < capacity);
                    if ok {
                        model.push_back(x);
                    }
                }
                None => prop_assert_eq!(ring.dequeue(), model.pop_front()),
            }
            prop_assert_eq!(ring.len(), model.len());
        }
    }

    #[test]
    fn sorted_list_drains_stably(keys in prop::collection::vec(0i32..6, 0..50)) {
        let mut list = SortedList::new();
        for (i, &k) in keys.iter().enumerate() {
            list.insert(k, i);
        }
        prop_assert_eq!(list.len(), keys.len());

        let drained: Vec<(i32, usize)> = std::iter::from_fn(|| list.remove_min()).collect();

        let mut expected: Vec<(i32, usize)> = keys.iter().copied().zip(0..).collect();
        expected.sort_by_key(|&(k, _)| k);
        prop_assert_eq!(drained, expected);
    }
}
