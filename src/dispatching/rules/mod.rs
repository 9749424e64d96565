//! Built-in dispatching rules.
//!
//! - **FCFS**: earliest arrival first
//! - **SJF**: shortest burst first
//! - **WDS**: highest weighted dynamic score first
//!
//! # Score Convention
//! All rules return lower scores for higher priority jobs.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

use super::{DispatchingRule, RuleScore, SchedulingContext, ScoreModel, ScoreWeights};
use crate::models::Job;

/// First Come First Served.
///
/// Prioritizes jobs by arrival time.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl DispatchingRule for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, job: &Job, _context: &SchedulingContext) -> RuleScore {
        job.arrival_time as f64
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}

/// Shortest Job First (non-preemptive).
///
/// Prioritizes jobs with the shortest burst. Evaluated over the eligible set
/// at each decision point, so a short job arriving while a long one runs is
/// still picked ahead of longer jobs that were already waiting.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy)]
pub struct Sjf;

impl DispatchingRule for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, job: &Job, _context: &SchedulingContext) -> RuleScore {
        job.burst_time as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Weighted Dynamic Score.
///
/// Combines aging, short-job preference and caller priority through
/// [`ScoreModel`]. Negated because lower score = higher priority in convention.
#[derive(Debug, Clone, Copy, Default)]
pub struct Wds {
    model: ScoreModel,
}

impl Wds {
    /// Creates the rule with the given weights.
    pub fn with_weights(weights: ScoreWeights) -> Self {
        Self {
            model: ScoreModel::new(weights),
        }
    }

    /// The underlying score model.
    pub fn model(&self) -> &ScoreModel {
        &self.model
    }
}

impl DispatchingRule for Wds {
    fn name(&self) -> &'static str {
        "WDS"
    }

    fn evaluate(&self, job: &Job, context: &SchedulingContext) -> RuleScore {
        -self.model.score(job, context.current_time)
    }

    fn description(&self) -> &'static str {
        "Weighted Dynamic Score"
    }
}
