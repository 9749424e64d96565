//! Job (process) model.
//!
//! A job is a unit of CPU work known in full before the simulation starts:
//! when it becomes eligible, how long it runs, and how urgent it is.
//!
//! # Time Representation
//! All times are integer ticks of a simulated clock starting at t=0.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Job identifier.
///
/// Accepts either a number or a string when deserialized, and always
/// serializes as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "PidRepr")]
pub struct Pid(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum PidRepr {
    Int(i64),
    Text(String),
}

impl From<PidRepr> for Pid {
    fn from(repr: PidRepr) -> Self {
        match repr {
            PidRepr::Int(n) => Self(n.to_string()),
            PidRepr::Text(s) => Self(s),
        }
    }
}

impl Pid {
    /// Creates a pid from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Pid {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for Pid {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<i64> for Pid {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A job to be scheduled.
///
/// Core fields are immutable for the lifetime of a simulation; per-run
/// mutable state lives in [`JobRuntimeState`](super::JobRuntimeState).
///
/// Use [`Job::try_new`] for validated construction. [`Job::new`] builds the
/// record as given and leaves checking to
/// [`validate_jobs`](crate::validation::validate_jobs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier.
    pub pid: Pid,
    /// Tick at which the job becomes eligible (>= 0).
    #[serde(alias = "at")]
    pub arrival_time: i64,
    /// Total non-preemptible service time (> 0).
    #[serde(alias = "bt")]
    pub burst_time: i64,
    /// Urgency; higher = more urgent. No fixed range.
    #[serde(alias = "prio", default)]
    pub priority: f64,
}

impl Job {
    /// Creates a job without validating it.
    pub fn new(pid: impl Into<Pid>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            pid: pid.into(),
            arrival_time,
            burst_time,
            priority: 0.0,
        }
    }

    /// Creates a job, rejecting negative arrivals, non-positive bursts and
    /// non-finite priorities.
    pub fn try_new(
        pid: impl Into<Pid>,
        arrival_time: i64,
        burst_time: i64,
        priority: f64,
    ) -> Result<Self, Vec<crate::validation::ValidationError>> {
        let job = Self::new(pid, arrival_time, burst_time).with_priority(priority);
        crate::validation::validate_job(&job)?;
        Ok(job)
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the job is eligible at `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }

    /// Ticks spent waiting at `time`, clamped at zero.
    #[inline]
    pub fn waited_at(&self, time: i64) -> i64 {
        (time - self.arrival_time).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_builder() {
        let job = Job::new(7, 3, 5).with_priority(2.5);
        assert_eq!(job.pid.as_str(), "7");
        assert_eq!(job.arrival_time, 3);
        assert_eq!(job.burst_time, 5);
        assert!((job.priority - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_try_new_rejects_bad_burst() {
        assert!(Job::try_new("P1", 0, 0, 1.0).is_err());
        assert!(Job::try_new("P1", 0, -3, 1.0).is_err());
        assert!(Job::try_new("P1", -1, 3, 1.0).is_err());
        assert!(Job::try_new("P1", 0, 3, f64::NAN).is_err());
        assert!(Job::try_new("P1", 0, 3, 1.0).is_ok());
    }

    #[test]
    fn test_waited_at_clamps() {
        let job = Job::new("P1", 5, 2);
        assert_eq!(job.waited_at(3), 0);
        assert_eq!(job.waited_at(9), 4);
        assert!(!job.has_arrived(4));
        assert!(job.has_arrived(5));
    }

    #[test]
    fn test_deserialize_short_aliases() {
        let job: Job =
            serde_json::from_str(r#"{"pid": 1, "at": 0, "bt": 5, "prio": 3}"#).unwrap();
        assert_eq!(job.pid, Pid::from(1));
        assert_eq!(job.burst_time, 5);
        assert!((job.priority - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_deserialize_long_names_and_string_pid() {
        let job: Job = serde_json::from_str(
            r#"{"pid": "lidar", "arrival_time": 2, "burst_time": 1, "priority": 9.5}"#,
        )
        .unwrap();
        assert_eq!(job.pid.as_str(), "lidar");
        assert_eq!(job.arrival_time, 2);
    }

    #[test]
    fn test_deserialize_missing_burst_fails() {
        let result: Result<Job, _> = serde_json::from_str(r#"{"pid": 1, "at": 0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_pid_serializes_as_string() {
        let json = serde_json::to_string(&Pid::from(42)).unwrap();
        assert_eq!(json, "\"42\"");
    }
}
