//! Simulation domain models.
//!
//! Provides the job intake record, the per-run job record and the result
//! types returned to the caller.
//!
//! | Type | Role |
//! |------|------|
//! | `JobSpec` | Immutable intake record supplied by the caller |
//! | `Job` | Private per-run copy accumulating timing results |
//! | `TraceEvent` | One dispatch or completion, in execution order |
//! | `JobMetrics` | Final start/completion/waiting/turnaround of a job |
//! | `SimulationResult` | Trace plus per-job metrics |

mod job;
mod result;
mod trace;

pub use job::{Job, JobId, JobSpec, Ticks, DEFAULT_PRIORITY};
pub use result::{JobMetrics, SimulationResult};
pub use trace::TraceEvent;
pub(crate) use trace::Trace;
