//! CPU job scheduling simulator.
//!
//! Simulates one CPU under three classic policies and reports per-job
//! timing metrics plus an ordered execution trace. Time is a single logical
//! clock; exactly one job runs at a time.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `JobSpec`, `Job`, `TraceEvent`, `JobMetrics`,
//!   `SimulationResult`
//! - **`queue`**: Ready queues — `SortedList` (stable priority list) and
//!   `RingBuffer` (fixed-capacity circular FIFO)
//! - **`scheduler`**: `FifoScheduler`, `PriorityScheduler`, `RoundRobinScheduler`,
//!   `SimulationConfig`, `SimulationKpi`
//! - **`validation`**: Intake checks (duplicate IDs, burst/arrival bounds, quantum)
//! - **`report`**: Plain-text transcript of a result
//! - **`workload`**: Seeded synthetic job sets
//!
//! # Example
//!
//! ```
//! use sched_sim::models::JobSpec;
//! use sched_sim::scheduler::{simulate, SchedulerKind, SimulationConfig};
//!
//! let jobs = vec![JobSpec::new(1, "A", 4, 0), JobSpec::new(2, "B", 2, 1)];
//! let result = simulate(&jobs, &SimulationConfig::new(SchedulerKind::Fifo)).unwrap();
//!
//! let b = result.metrics_for(2).unwrap();
//! assert_eq!((b.start_time, b.completion_time), (4, 6));
//! assert_eq!((b.waiting_time, b.turnaround_time), (3, 5));
//! ```
//!
//! # Logging
//!
//! Runs emit `tracing` events (a `simulate` span, one `trace`-level event per
//! scheduling step). The crate never installs a subscriber.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod models;
pub mod queue;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{Result, SimError};
pub use models::{JobSpec, SimulationResult};
pub use report::render_report;
pub use scheduler::{simulate, Scheduler, SchedulerKind, SimulationConfig};
