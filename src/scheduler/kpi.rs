//! Run quality metrics (KPIs).
//!
//! Reduces the final job states of one run into summary statistics used to
//! compare policies side by side.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Turnaround | Mean of finish - arrival |
//! | Avg Wait | Mean of turnaround - burst |
//! | Avg Response | Mean of start - arrival |
//! | Max Wait | Largest single wait |
//! | Makespan | Latest finish time |
//! | Busy / Idle Time | Ticks with / without a running job, up to makespan |
//! | CPU Utilization | busy / makespan |
//! | Throughput | Jobs completed per tick of makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::models::JobRuntimeState;

/// Summary statistics of one completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    pub job_count: usize,
    pub avg_turnaround_time: f64,
    pub avg_wait_time: f64,
    pub avg_response_time: f64,
    pub max_wait_time: i64,
    pub makespan: i64,
    pub busy_time: i64,
    pub idle_time: i64,
    /// Fraction of the makespan the CPU was busy (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Jobs per tick.
    pub throughput: f64,
}

impl RunMetrics {
    /// Computes metrics from the final job states of a run.
    ///
    /// Totals are accumulated in `i128`, so sums of times near `i64::MAX`
    /// do not overflow.
    ///
    /// # Errors
    /// - [`SimulationError::EmptyRun`] if `jobs` is empty.
    /// - [`SimulationError::IncompleteJob`] if any job has not finished.
    pub fn summarize(jobs: &[JobRuntimeState]) -> Result<Self, SimulationError> {
        if jobs.is_empty() {
            return Err(SimulationError::EmptyRun);
        }
        if let Some(pending) = jobs.iter().find(|s| !s.is_completed()) {
            return Err(SimulationError::IncompleteJob {
                pid: pending.job.pid.clone(),
            });
        }

        let n = jobs.len() as f64;
        let mut total_turnaround: i128 = 0;
        let mut total_wait: i128 = 0;
        let mut total_response: i128 = 0;
        let mut total_busy: i128 = 0;
        let mut max_wait: i64 = 0;
        let mut makespan: i64 = 0;

        for state in jobs {
            total_turnaround += i128::from(state.turnaround_time);
            total_wait += i128::from(state.wait_time);
            total_response += i128::from(state.response_time().unwrap_or(0));
            total_busy += i128::from(state.job.burst_time);
            max_wait = max_wait.max(state.wait_time);
            makespan = makespan.max(state.finish_time);
        }

        // A run's bursts never outlast its makespan; saturate for hand-built states.
        let busy = i64::try_from(total_busy).unwrap_or(i64::MAX);

        let (cpu_utilization, throughput) = if makespan > 0 {
            (busy as f64 / makespan as f64, n / makespan as f64)
        } else {
            (0.0, 0.0)
        };

        Ok(Self {
            job_count: jobs.len(),
            avg_turnaround_time: total_turnaround as f64 / n,
            avg_wait_time: total_wait as f64 / n,
            avg_response_time: total_response as f64 / n,
            max_wait_time: max_wait,
            makespan,
            busy_time: busy,
            idle_time: makespan.saturating_sub(busy),
            cpu_utilization,
            throughput,
        })
    }
}
