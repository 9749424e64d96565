//! Per-run job state.
//!
//! Each simulation run owns its own `JobRuntimeState` values, cloned from the
//! caller's job list, so runs of different policies never observe each
//! other's mutations.

use serde::{Deserialize, Serialize};

use super::Job;

/// Sentinel for a time field that has not been set yet.
pub const UNSET: i64 = -1;

/// Mutable execution state of one job within one run.
///
/// `start_time` and `finish_time` hold [`UNSET`] until the job executes.
/// `turnaround_time` and `wait_time` are derived at completion:
///
/// - `turnaround_time = finish_time - arrival_time`
/// - `wait_time = turnaround_time - burst_time`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRuntimeState {
    /// The job's immutable input fields.
    #[serde(flatten)]
    pub job: Job,
    /// Service time still owed. Drops from `burst_time` to 0 at execution.
    pub remaining_burst: i64,
    /// Tick the job started running, or [`UNSET`].
    pub start_time: i64,
    /// Tick the job finished, or [`UNSET`].
    pub finish_time: i64,
    /// Ticks between arrival and start. Valid only once completed.
    pub wait_time: i64,
    /// Ticks between arrival and finish. Valid only once completed.
    pub turnaround_time: i64,
}

impl JobRuntimeState {
    /// Creates the initial (not yet run) state for a job.
    pub fn new(job: Job) -> Self {
        let remaining_burst = job.burst_time;
        Self {
            job,
            remaining_burst,
            start_time: UNSET,
            finish_time: UNSET,
            wait_time: 0,
            turnaround_time: 0,
        }
    }

    /// Whether the job has run to completion.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.finish_time != UNSET
    }

    /// Whether the job can be picked at `time`.
    #[inline]
    pub fn is_eligible(&self, time: i64) -> bool {
        !self.is_completed() && self.job.has_arrived(time)
    }

    /// Runs the whole burst starting at `start` and returns the finish tick.
    ///
    /// Returns `None`, leaving the state untouched, if any derived time
    /// overflows an `i64`.
    pub fn execute(&mut self, start: i64) -> Option<i64> {
        let finish = start.checked_add(self.job.burst_time)?;
        let turnaround = finish.checked_sub(self.job.arrival_time)?;
        let wait = turnaround.checked_sub(self.job.burst_time)?;

        self.start_time = start;
        self.finish_time = finish;
        self.remaining_burst = 0;
        self.turnaround_time = turnaround;
        self.wait_time = wait;
        Some(finish)
    }

    /// Ticks between arrival and first run. `None` until the job has started.
    pub fn response_time(&self) -> Option<i64> {
        (self.start_time != UNSET).then(|| self.start_time - self.job.arrival_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_unset() {
        let state = JobRuntimeState::new(Job::new("P1", 2, 4));
        assert_eq!(state.start_time, UNSET);
        assert_eq!(state.finish_time, UNSET);
        assert_eq!(state.remaining_burst, 4);
        assert!(!state.is_completed());
        assert!(state.response_time().is_none());
    }

    #[test]
    fn test_execute_derives_times() {
        let mut state = JobRuntimeState::new(Job::new("P1", 2, 4));
        let finish = state.execute(5);

        assert_eq!(finish, Some(9));
        assert_eq!(state.start_time, 5);
        assert_eq!(state.finish_time, 9);
        assert_eq!(state.remaining_burst, 0);
        assert_eq!(state.turnaround_time, 7);
        assert_eq!(state.wait_time, 3);
        assert_eq!(state.response_time(), Some(3));
        assert!(state.is_completed());
    }

    #[test]
    fn test_eligibility() {
        let mut state = JobRuntimeState::new(Job::new("P1", 3, 1));
        assert!(!state.is_eligible(2));
        assert!(state.is_eligible(3));
        assert!(state.execute(3).is_some());
        assert!(!state.is_eligible(10));
    }

    #[test]
    fn test_execute_overflow() {
        let mut state = JobRuntimeState::new(Job::new("P1", 0, 2));
        assert_eq!(state.execute(i64::MAX - 1), None);
        assert!(!state.is_completed());
        assert_eq!(state.remaining_burst, 2);

        assert_eq!(state.execute(i64::MAX - 2), Some(i64::MAX));
        assert_eq!(state.turnaround_time, i64::MAX);
    }
}
