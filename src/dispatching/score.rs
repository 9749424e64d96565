//! Weighted Dynamic Score model.
//!
//! Computes a priority-adjusted urgency score for one job at one clock value:
//!
//! ```text
//! wait_time      = max(0, now - arrival_time)
//! burst_score    = BURST_SCALE / burst_time
//! priority_score = priority * PRIORITY_SCALE
//! score          = w_wait * wait_time + w_burst * burst_score + w_prio * priority_score
//! ```
//!
//! The result is rounded to 2 decimal places so that comparisons and ties are
//! reproducible. Higher score = more urgent.

use serde::{Deserialize, Serialize};

use crate::models::{CandidateScore, Job};

/// Numerator of the burst term.
pub const BURST_SCALE: f64 = 30.0;

/// Multiplier of the priority term.
pub const PRIORITY_SCALE: f64 = 10.0;

/// Weights of the three score terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Aging weight (per tick waited).
    pub wait: f64,
    /// Short-job weight.
    pub burst: f64,
    /// Urgency weight.
    pub priority: f64,
}

impl ScoreWeights {
    pub const DEFAULT_WAIT: f64 = 3.0;
    pub const DEFAULT_BURST: f64 = 1.0;
    pub const DEFAULT_PRIORITY: f64 = 1.0;

    /// Creates a weight set.
    pub fn new(wait: f64, burst: f64, priority: f64) -> Self {
        Self {
            wait,
            burst,
            priority,
        }
    }

    /// Replaces only the weights that are given.
    pub fn with_overrides(
        self,
        wait: Option<f64>,
        burst: Option<f64>,
        priority: Option<f64>,
    ) -> Self {
        Self {
            wait: wait.unwrap_or(self.wait),
            burst: burst.unwrap_or(self.burst),
            priority: priority.unwrap_or(self.priority),
        }
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_WAIT,
            Self::DEFAULT_BURST,
            Self::DEFAULT_PRIORITY,
        )
    }
}

/// Per-term contributions to a job's score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub wait_time: i64,
    pub wait_component: f64,
    pub burst_component: f64,
    pub priority_component: f64,
    /// Sum of the components, rounded to 2 decimal places.
    pub total: f64,
}

/// Stateless WDS scoring function.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreModel {
    weights: ScoreWeights,
}

impl ScoreModel {
    /// Creates a model with the given weights.
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// The weights in use.
    pub fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Score of `job` at `current_time`.
    ///
    /// `job.burst_time` must be positive; validation guarantees this.
    pub fn score(&self, job: &Job, current_time: i64) -> f64 {
        self.breakdown(job, current_time).total
    }

    /// Score of `job` at `current_time`, term by term.
    pub fn breakdown(&self, job: &Job, current_time: i64) -> ScoreBreakdown {
        let wait_time = job.waited_at(current_time);
        let wait_component = self.weights.wait * wait_time as f64;
        let burst_component = self.weights.burst * (BURST_SCALE / job.burst_time as f64);
        let priority_component = self.weights.priority * job.priority * PRIORITY_SCALE;

        ScoreBreakdown {
            wait_time,
            wait_component,
            burst_component,
            priority_component,
            total: round2(wait_component + burst_component + priority_component),
        }
    }

    /// Decision-log record for `job` at `current_time`.
    pub fn candidate(&self, job: &Job, current_time: i64) -> CandidateScore {
        let b = self.breakdown(job, current_time);
        CandidateScore {
            pid: job.pid.clone(),
            final_score: b.total,
            burst_time: job.burst_time,
            wait_time: b.wait_time,
            priority: job.priority,
            wait_component: round2(b.wait_component),
            burst_component: round2(b.burst_component),
            priority_component: round2(b.priority_component),
        }
    }
}

#[inline]
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
