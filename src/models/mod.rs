//! CPU scheduling domain models.
//!
//! Provides the input record (`Job`), the per-run mutable state
//! (`JobRuntimeState`), and the records a run produces (`TimelineEntry`,
//! `DecisionLogEntry`).
//!
//! # Lifecycle
//!
//! | Type | Owner | Lifetime |
//! |------|-------|----------|
//! | Job | Caller | Whole request |
//! | JobRuntimeState | One simulation run | Discarded after metrics |
//! | TimelineEntry | Run result | Returned to caller |
//! | DecisionLogEntry | WDS run result | Returned to caller |

mod job;
mod state;
mod trace;

pub use job::{Job, Pid};
pub use state::{JobRuntimeState, UNSET};
pub use trace::{CandidateScore, DecisionLogEntry, TimelineEntry};
