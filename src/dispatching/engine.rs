//! Rule engine for candidate selection.
//!
//! Applies one dispatching rule to the eligible jobs and picks the winner.
//! Scores within `epsilon` of each other are ties; the job listed first wins.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::sync::Arc;

use super::{DispatchingRule, SchedulingContext};
use crate::models::Job;

/// Selects the highest-priority job under a dispatching rule.
///
/// # Example
/// ```
/// use wds_schedule::dispatching::{RuleEngine, SchedulingContext};
/// use wds_schedule::dispatching::rules;
/// use wds_schedule::models::Job;
///
/// let engine = RuleEngine::new(rules::Sjf);
///
/// let a = Job::new("A", 2, 3);
/// let b = Job::new("B", 0, 1);
/// let best = engine.select_best(&[&a, &b], &SchedulingContext::at_time(5));
/// assert_eq!(best, Some(1));
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rule: Arc<dyn DispatchingRule>,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an engine around `rule`.
    pub fn new<R: DispatchingRule + 'static>(rule: R) -> Self {
        Self {
            rule: Arc::new(rule),
            epsilon: 1e-9,
        }
    }

    /// Name of the rule.
    pub fn rule_name(&self) -> &'static str {
        self.rule.name()
    }

    /// Returns the index of the highest-priority job, `None` if `jobs` is empty.
    ///
    /// Among ties the earlier job wins.
    pub fn select_best(&self, jobs: &[&Job], context: &SchedulingContext) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (idx, job) in jobs.iter().enumerate() {
            let score = self.rule.evaluate(job, context);
            match best {
                Some((_, best_score)) if score >= best_score - self.epsilon => {}
                _ => best = Some((idx, score)),
            }
        }
        best.map(|(idx, _)| idx)
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rule", &self.rule.name())
            .field("epsilon", &self.epsilon)
            .finish()
    }
}
