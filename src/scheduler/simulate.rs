//! Cross-policy simulation.
//!
//! Validates a job list once, runs FCFS, SJF and WDS independently on their
//! own copies of it, and assembles the comparison the caller renders.

use serde::{Deserialize, Serialize};

use super::engine::{SimulationEngine, SimulationRun};
use super::kpi::RunMetrics;
use crate::dispatching::{Policy, ScoreWeights};
use crate::error::SimulationError;
use crate::models::{DecisionLogEntry, Job, JobRuntimeState, TimelineEntry};
use crate::validation::{validate_jobs, validate_score_range, validate_weights};

/// One value per policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyTable<T> {
    pub fcfs: T,
    pub sjf: T,
    pub wds: T,
}

impl<T> PolicyTable<T> {
    /// Value for `policy`.
    pub fn get(&self, policy: Policy) -> &T {
        match policy {
            Policy::Fcfs => &self.fcfs,
            Policy::Sjf => &self.sjf,
            Policy::Wds => &self.wds,
        }
    }

    /// Applies `f` to every value.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PolicyTable<U> {
        PolicyTable {
            fcfs: f(&self.fcfs),
            sjf: f(&self.sjf),
            wds: f(&self.wds),
        }
    }
}

/// Per-job detail of the WDS run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunDetails {
    pub wds: Vec<JobRuntimeState>,
}

/// Average turnaround and wait per policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub tat: PolicyTable<f64>,
    pub wt: PolicyTable<f64>,
}

/// Per-policy run output with its metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRun {
    pub run: SimulationRun,
    pub metrics: RunMetrics,
}

/// Result of a cross-policy simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Execution timeline of the WDS run.
    pub timeline_wds: Vec<TimelineEntry>,
    /// One entry per WDS decision.
    pub decision_log: Vec<DecisionLogEntry>,
    pub details: RunDetails,
    pub metrics: Metrics,
    /// Full output of every policy run.
    pub runs: PolicyTable<PolicyRun>,
    /// Weights WDS used.
    pub weights: ScoreWeights,
}

/// Configured cross-policy simulator.
///
/// # Example
///
/// ```
/// use wds_schedule::models::Job;
/// use wds_schedule::scheduler::Simulator;
///
/// let jobs = vec![
///     Job::new(1, 0, 10),
///     Job::new(2, 0, 1),
/// ];
/// let result = Simulator::new().simulate(&jobs).unwrap();
/// assert_eq!(result.timeline_wds[0].pid.as_str(), "2");
/// assert!(result.metrics.tat.wds < result.metrics.tat.fcfs);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    weights: ScoreWeights,
    iteration_limit: Option<u64>,
    parallel: bool,
}

impl Simulator {
    /// Creates a simulator with default weights, uncapped runs, and
    /// sequential execution.
    pub fn new() -> Self {
        Self {
            weights: ScoreWeights::default(),
            iteration_limit: None,
            parallel: false,
        }
    }

    /// Sets the WDS weights.
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Caps the loop steps of each run. See
    /// [`SimulationEngine::with_iteration_limit`].
    pub fn with_iteration_limit(mut self, limit: u64) -> Self {
        self.iteration_limit = Some(limit);
        self
    }

    /// Removes the per-run loop iteration cap.
    pub fn without_iteration_limit(mut self) -> Self {
        self.iteration_limit = None;
        self
    }

    /// Runs the three policies on separate threads when `parallel` is true.
    pub fn with_parallel_runs(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates `jobs` and simulates every policy.
    pub fn simulate(&self, jobs: &[Job]) -> Result<SimulationResult, SimulationError> {
        let mut errors = validate_jobs(jobs).err().unwrap_or_default();
        errors.extend(validate_weights(&self.weights).err().unwrap_or_default());
        if errors.is_empty() {
            errors = validate_score_range(jobs, &self.weights)
                .err()
                .unwrap_or_default();
        }
        if !errors.is_empty() {
            log::warn!("rejected simulation request: {} problem(s)", errors.len());
            return Err(SimulationError::InvalidInput(errors));
        }

        log::debug!(
            "simulating {} job(s) with weights {:?} (parallel: {})",
            jobs.len(),
            self.weights,
            self.parallel
        );

        let runs = if self.parallel {
            self.run_parallel(jobs)?
        } else {
            PolicyTable {
                fcfs: self.run_policy(Policy::Fcfs, jobs)?,
                sjf: self.run_policy(Policy::Sjf, jobs)?,
                wds: self.run_policy(Policy::Wds, jobs)?,
            }
        };

        Ok(SimulationResult {
            timeline_wds: runs.wds.run.timeline.clone(),
            decision_log: runs.wds.run.decision_log.clone(),
            details: RunDetails {
                wds: runs.wds.run.jobs.clone(),
            },
            metrics: Metrics {
                tat: runs.map(|r| r.metrics.avg_turnaround_time),
                wt: runs.map(|r| r.metrics.avg_wait_time),
            },
            runs,
            weights: self.weights,
        })
    }

    fn run_policy(&self, policy: Policy, jobs: &[Job]) -> Result<PolicyRun, SimulationError> {
        let run = SimulationEngine::with_weights(policy, self.weights)
            .with_iteration_limit(self.iteration_limit)
            .run(jobs)?;
        let metrics = RunMetrics::summarize(&run.jobs)?;
        Ok(PolicyRun { run, metrics })
    }

    fn run_parallel(&self, jobs: &[Job]) -> Result<PolicyTable<PolicyRun>, SimulationError> {
        let [fcfs, sjf, wds] = std::thread::scope(|scope| {
            let handles = Policy::ALL.map(|policy| {
                let owned = jobs.to_vec();
                (policy, scope.spawn(move || self.run_policy(policy, &owned)))
            });
            handles.map(|(policy, handle)| {
                handle
                    .join()
                    .unwrap_or(Err(SimulationError::WorkerPanicked { policy }))
            })
        });

        Ok(PolicyTable {
            fcfs: fcfs?,
            sjf: sjf?,
            wds: wds?,
        })
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Simulates every policy over `jobs`.
///
/// `weights` overrides the WDS weights; `None` uses the defaults.
pub fn simulate(
    jobs: &[Job],
    weights: Option<ScoreWeights>,
) -> Result<SimulationResult, SimulationError> {
    Simulator::new()
        .with_weights(weights.unwrap_or_default())
        .simulate(jobs)
}
