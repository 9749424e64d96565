//! Dispatching rules, the WDS score model, and the rule engine.
//!
//! Each scheduling policy is a [`DispatchingRule`] wrapped in a
//! [`RuleEngine`] that picks one winner among the eligible jobs.
//!
//! # Usage
//!
//! ```
//! use wds_schedule::dispatching::{Policy, SchedulingContext, ScoreWeights};
//! use wds_schedule::models::Job;
//!
//! let long = Job::new(1, 0, 10);
//! let short = Job::new(2, 0, 1);
//! let ctx = SchedulingContext::at_time(0);
//!
//! let fcfs = Policy::Fcfs.rule_engine(ScoreWeights::default());
//! let wds = Policy::Wds.rule_engine(ScoreWeights::default());
//! assert_eq!(fcfs.select_best(&[&long, &short], &ctx), Some(0));
//! assert_eq!(wds.select_best(&[&long, &short], &ctx), Some(1));
//! ```

mod context;
mod engine;
pub mod rules;
mod score;

pub use context::SchedulingContext;
pub use engine::RuleEngine;
pub use score::{ScoreBreakdown, ScoreModel, ScoreWeights, BURST_SCALE, PRIORITY_SCALE};

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

use crate::models::Job;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (selected first).
pub type RuleScore = f64;

/// A dispatching rule that evaluates job priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for jobs that should run first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "FCFS", "SJF").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a job given the current scheduling context.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, job: &Job, context: &SchedulingContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// The scheduling policies compared by a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// First Come First Served.
    Fcfs,
    /// Shortest Job First.
    Sjf,
    /// Weighted Dynamic Score.
    Wds,
}

impl Policy {
    /// All policies, in reporting order.
    pub const ALL: [Policy; 3] = [Policy::Fcfs, Policy::Sjf, Policy::Wds];

    /// Short policy name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Wds => "WDS",
        }
    }

    /// Builds the rule engine that selects winners for this policy.
    ///
    /// `weights` only affects WDS.
    pub fn rule_engine(&self, weights: ScoreWeights) -> RuleEngine {
        match self {
            Self::Fcfs => RuleEngine::new(rules::Fcfs),
            Self::Sjf => RuleEngine::new(rules::Sjf),
            Self::Wds => RuleEngine::new(rules::Wds::with_weights(weights)),
        }
    }

    /// Whether runs of this policy record a decision log.
    pub fn traces_decisions(&self) -> bool {
        matches!(self, Self::Wds)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_names() {
        let names: Vec<&str> = Policy::ALL.iter().map(Policy::name).collect();
        assert_eq!(names, vec!["FCFS", "SJF", "WDS"]);
        assert_eq!(Policy::Wds.to_string(), "WDS");
    }

    #[test]
    fn test_only_wds_traces() {
        assert!(!Policy::Fcfs.traces_decisions());
        assert!(!Policy::Sjf.traces_decisions());
        assert!(Policy::Wds.traces_decisions());
    }

    #[test]
    fn test_rule_engine_matches_policy() {
        let w = ScoreWeights::default();
        for policy in Policy::ALL {
            assert_eq!(policy.rule_engine(w).rule_name(), policy.name());
        }
    }

    #[test]
    fn test_policy_serde() {
        assert_eq!(serde_json::to_string(&Policy::Sjf).unwrap(), "\"sjf\"");
    }
}
