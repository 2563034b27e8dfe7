//! Plain-text transcript of a simulation.
//!
//! Layout:
//!
//! ```text
//! FIFO: Executing A at time 0 for 4 units
//! FIFO: A completed at time 4
//!
//! FIFO: All tasks completed!
//! A: Waiting Time = 0, Turnaround Time = 4
//! Average Waiting Time = 0.00, Average Turnaround Time = 4.00
//! ```
//!
//! Trace lines carry the short label (`FIFO`, `Priority`, `RR`); the banner
//! uses the display name (`Round Robin`). Priority dispatch lines append the
//! job's priority value.

use std::fmt::Write;

use crate::models::{SimulationResult, TraceEvent};
use crate::scheduler::{SchedulerKind, SimulationKpi};

/// Renders the trace and per-job metrics as display text.
pub fn render_report(result: &SimulationResult) -> String {
    let label = result.scheduler.label();
    let mut out = String::new();

    // Writing into a String cannot fail.
    for event in &result.trace {
        match event {
            TraceEvent::Dispatched { priority, .. }
                if result.scheduler == SchedulerKind::Priority =>
            {
                let _ = writeln!(out, "{label}: {event} (Priority: {priority})");
            }
            _ => {
                let _ = writeln!(out, "{label}: {event}");
            }
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}: All tasks completed!", result.scheduler);
    for m in &result.jobs {
        let _ = writeln!(
            out,
            "{}: Waiting Time = {}, Turnaround Time = {}",
            m.name, m.waiting_time, m.turnaround_time
        );
    }

    if !result.is_empty() {
        let kpi = SimulationKpi::calculate(result);
        let _ = writeln!(
            out,
            "Average Waiting Time = {:.2}, Average Turnaround Time = {:.2}",
            kpi.avg_waiting, kpi.avg_turnaround
        );
    }
    out
}
