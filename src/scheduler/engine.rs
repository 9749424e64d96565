//! Discrete-time simulation engine.
//!
//! # Algorithm
//!
//! 1. Start with clock = 0 and every job pending.
//! 2. Collect the eligible jobs (`arrival_time <= clock`, not completed).
//! 3. None eligible: the CPU idles until the next arrival. The idle stretch
//!    is skipped in one step and counted tick by tick in `idle_ticks`.
//! 4. Otherwise ask the policy's rule engine for a winner, run it for its
//!    full burst, and record a timeline entry. WDS also records a decision
//!    log entry with every candidate's score and any context switch.
//! 5. Stop when every job has completed.
//!
//! Runs are non-preemptive: the clock jumps over the winner's whole burst.
//!
//! # Complexity
//! O(n²) rule evaluations and at most 2n loop steps, independent of how far
//! apart arrivals are.

use serde::{Deserialize, Serialize};

use crate::dispatching::{Policy, RuleEngine, SchedulingContext, ScoreModel, ScoreWeights};
use crate::error::SimulationError;
use crate::models::{DecisionLogEntry, Job, JobRuntimeState, Pid, TimelineEntry};

/// Output of one policy run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRun {
    /// Policy that produced this run.
    pub policy: Policy,
    /// One entry per job, in execution order.
    pub timeline: Vec<TimelineEntry>,
    /// Final state of every job, in input order.
    pub jobs: Vec<JobRuntimeState>,
    /// Decision trace. Empty unless the policy traces decisions.
    pub decision_log: Vec<DecisionLogEntry>,
    /// Ticks the CPU spent with no eligible job.
    pub idle_ticks: i64,
}

impl SimulationRun {
    /// Clock value when the last job finished.
    pub fn makespan(&self) -> i64 {
        self.timeline.last().map(TimelineEntry::end_tick).unwrap_or(0)
    }
}

/// Single-run simulation engine.
///
/// Holds only configuration; all mutable state is local to [`run`](Self::run),
/// so one engine can be reused and shared across threads.
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    policy: Policy,
    rules: RuleEngine,
    scores: ScoreModel,
    iteration_limit: Option<u64>,
}

impl SimulationEngine {
    /// Creates an engine for `policy` with default weights and no step cap.
    pub fn new(policy: Policy) -> Self {
        Self::with_weights(policy, ScoreWeights::default())
    }

    /// Creates an engine for `policy` with the given WDS weights.
    pub fn with_weights(policy: Policy, weights: ScoreWeights) -> Self {
        Self {
            policy,
            rules: policy.rule_engine(weights),
            scores: ScoreModel::new(weights),
            iteration_limit: None,
        }
    }

    /// Caps the loop steps (decisions and idle stretches) per run.
    ///
    /// `None`, the default, leaves runs uncapped; a run never takes more
    /// than twice as many steps as it has jobs.
    pub fn with_iteration_limit(mut self, limit: Option<u64>) -> Self {
        self.iteration_limit = limit;
        self
    }

    /// The policy this engine simulates.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Simulates `jobs` to completion.
    ///
    /// Works on a private copy of `jobs`. Callers are expected to validate
    /// the input first; see [`validate_jobs`](crate::validation::validate_jobs).
    ///
    /// # Errors
    /// - [`SimulationError::IterationLimitExceeded`] past the configured cap.
    /// - [`SimulationError::ClockOverflow`] if a finish tick does not fit in
    ///   an `i64`. Validated input never triggers it.
    pub fn run(&self, jobs: &[Job]) -> Result<SimulationRun, SimulationError> {
        let mut states: Vec<JobRuntimeState> =
            jobs.iter().cloned().map(JobRuntimeState::new).collect();
        let mut timeline = Vec::with_capacity(states.len());
        let mut decision_log = Vec::new();
        let mut last_pid: Option<Pid> = None;

        let mut clock: i64 = 0;
        let mut idle_ticks: i64 = 0;
        let mut iterations: u64 = 0;
        let mut completed = 0;

        while completed < states.len() {
            iterations += 1;
            if let Some(limit) = self.iteration_limit {
                if iterations > limit {
                    return Err(SimulationError::IterationLimitExceeded { limit, clock });
                }
            }

            let eligible: Vec<usize> = states
                .iter()
                .enumerate()
                .filter(|(_, s)| s.is_eligible(clock))
                .map(|(i, _)| i)
                .collect();
            let candidates: Vec<&Job> = eligible.iter().map(|&i| &states[i].job).collect();

            let ctx = SchedulingContext::at_time(clock);
            let Some(pick) = self.rules.select_best(&candidates, &ctx) else {
                let next = states
                    .iter()
                    .filter(|s| !s.is_completed())
                    .map(|s| s.job.arrival_time)
                    .min()
                    .map_or(clock + 1, |t| t.max(clock + 1));
                log::trace!("{}: idle from t={clock} to t={next}", self.policy);
                idle_ticks += next - clock;
                clock = next;
                continue;
            };

            let winner_idx = eligible[pick];
            let winner_pid = states[winner_idx].job.pid.clone();
            log::debug!(
                "{}: t={clock} picked {winner_pid} among {} candidate(s)",
                self.rules.rule_name(),
                candidates.len()
            );

            if self.policy.traces_decisions() {
                decision_log.push(DecisionLogEntry {
                    time: clock,
                    winner_pid: winner_pid.clone(),
                    candidates: candidates
                        .iter()
                        .map(|job| self.scores.candidate(job, clock))
                        .collect(),
                    context_switch_messages: context_switch(last_pid.as_ref(), &winner_pid),
                });
            }

            let state = &mut states[winner_idx];
            let start = clock;
            clock = state
                .execute(start)
                .ok_or_else(|| SimulationError::ClockOverflow {
                    pid: winner_pid.clone(),
                    start,
                })?;
            timeline.push(TimelineEntry::new(
                winner_pid.clone(),
                start,
                state.job.burst_time,
            ));
            last_pid = Some(winner_pid);
            completed += 1;
        }

        log::info!(
            "{}: {} job(s) completed, makespan {clock}, idle {idle_ticks}",
            self.policy,
            states.len()
        );

        Ok(SimulationRun {
            policy: self.policy,
            timeline,
            jobs: states,
            decision_log,
            idle_ticks,
        })
    }
}

/// Context switch messages when `winner` replaces `last`.
fn context_switch(last: Option<&Pid>, winner: &Pid) -> Vec<String> {
    match last {
        Some(prev) if prev == winner => Vec::new(),
        Some(prev) => vec![
            format!("saving state for {prev}"),
            format!("loading state for {winner}"),
        ],
        None => vec![format!("loading state for {winner}")],
    }
}
