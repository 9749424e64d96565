//! Input validation for simulation requests.
//!
//! Checks the job list and score weights before any run starts. Detects:
//! - Empty job lists
//! - Non-positive burst times
//! - Negative arrival times
//! - Duplicate pids
//! - Non-finite priorities and invalid weights
//! - Clock values or scores too large to represent
//!
//! Every problem found is reported, not just the first.

use std::collections::HashSet;
use std::fmt;

use crate::dispatching::{ScoreWeights, BURST_SCALE, PRIORITY_SCALE};
use crate::models::Job;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No jobs were supplied.
    EmptyJobList,
    /// A job's burst time is zero or negative.
    NonPositiveBurst,
    /// A job's arrival time is negative.
    NegativeArrival,
    /// Two jobs share the same pid.
    DuplicatePid,
    /// A job's priority is NaN or infinite.
    NonFinitePriority,
    /// A score weight is negative, NaN or infinite.
    InvalidWeight,
    /// The latest arrival plus all bursts does not fit in the clock.
    TimeOverflow,
    /// A job's WDS score could become infinite.
    ScoreOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a single job's fields.
pub fn validate_job(job: &Job) -> ValidationResult {
    let mut errors = Vec::new();
    check_job(job, &mut errors);
    into_result(errors)
}

/// Validates the job list for a simulation.
///
/// Checks:
/// 1. At least one job
/// 2. Every burst time is > 0
/// 3. Every arrival time is >= 0
/// 4. Every priority is finite
/// 5. No duplicate pids
/// 6. The latest arrival plus the sum of all bursts fits in an `i64`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_jobs(jobs: &[Job]) -> ValidationResult {
    if jobs.is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyJobList,
            "Job list is empty",
        )]);
    }

    let mut errors = Vec::new();
    let mut pids = HashSet::new();

    for job in jobs {
        if !pids.insert(&job.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate pid: {}", job.pid),
            ));
        }
        check_job(job, &mut errors);
    }

    if time_horizon(jobs).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time overflows the clock",
        ));
    }

    into_result(errors)
}

/// Latest tick any run can reach: `max(arrival) + sum(burst)`.
///
/// `None` if the value does not fit in an `i64`.
pub fn time_horizon(jobs: &[Job]) -> Option<i64> {
    let latest_arrival = jobs.iter().map(|j| j.arrival_time.max(0)).max().unwrap_or(0);
    jobs.iter()
        .try_fold(latest_arrival, |acc, j| acc.checked_add(j.burst_time.max(0)))
}

/// Validates that no job's WDS score can become infinite under `weights`.
///
/// Bounds every term by its worst case over the whole run: the wait term at
/// the time horizon, the burst term at a one-tick burst. Expects jobs and
/// weights that already passed [`validate_jobs`] and [`validate_weights`].
pub fn validate_score_range(jobs: &[Job], weights: &ScoreWeights) -> ValidationResult {
    let horizon = time_horizon(jobs).unwrap_or(i64::MAX) as f64;
    let wait_bound = weights.wait * horizon;
    let burst_bound = weights.burst * BURST_SCALE;

    let mut errors = Vec::new();
    for job in jobs {
        let priority_bound = (weights.priority * job.priority * PRIORITY_SCALE).abs();
        // Scores are rounded via `* 100.0`, which must stay finite too.
        let bound = (wait_bound + burst_bound + priority_bound) * 100.0;
        if !bound.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::ScoreOverflow,
                format!("Job '{}' has a score that overflows", job.pid),
            ));
        }
    }
    into_result(errors)
}

/// Validates caller-supplied score weights.
pub fn validate_weights(weights: &ScoreWeights) -> ValidationResult {
    let mut errors = Vec::new();
    for (name, value) in [
        ("wait", weights.wait),
        ("burst", weights.burst),
        ("priority", weights.priority),
    ] {
        if !value.is_finite() || value < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWeight,
                format!("Weight '{name}' must be finite and non-negative, got {value}"),
            ));
        }
    }
    into_result(errors)
}

fn check_job(job: &Job, errors: &mut Vec<ValidationError>) {
    if job.burst_time <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveBurst,
            format!(
                "Job '{}' has non-positive burst time {}",
                job.pid, job.burst_time
            ),
        ));
    }
    if job.arrival_time < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeArrival,
            format!(
                "Job '{}' has negative arrival time {}",
                job.pid, job.arrival_time
            ),
        ));
    }
    if !job.priority.is_finite() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonFinitePriority,
            format!("Job '{}' has non-finite priority", job.pid),
        ));
    }
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_jobs() -> Vec<Job> {
        vec![
            Job::new(1, 0, 5).with_priority(1.0),
            Job::new(2, 1, 2).with_priority(5.0),
            Job::new(3, 4, 1),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_jobs(&sample_jobs()).is_ok());
    }

    #[test]
    fn test_empty_job_list() {
        let errors = validate_jobs(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyJobList);
    }

    #[test]
    fn test_duplicate_pid() {
        let jobs = vec![Job::new(1, 0, 5), Job::new(1, 2, 3)];
        let errors = validate_jobs(&jobs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicatePid && e.message.contains('1')));
    }

    #[test]
    fn test_non_positive_burst() {
        let jobs = vec![Job::new(1, 0, 0), Job::new(2, 0, -4)];
        let errors = validate_jobs(&jobs).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::NonPositiveBurst)
                .count(),
            2
        );
    }

    #[test]
    fn test_negative_arrival() {
        let jobs = vec![Job::new(1, -1, 3)];
        let errors = validate_jobs(&jobs).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeArrival);
    }

    #[test]
    fn test_non_finite_priority() {
        let jobs = vec![Job::new(1, 0, 3).with_priority(f64::INFINITY)];
        let errors = validate_jobs(&jobs).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NonFinitePriority);
    }

    #[test]
    fn test_multiple_errors() {
        // Duplicate pid + zero burst + negative arrival
        let jobs = vec![Job::new(1, 0, 2), Job::new(1, -2, 0)];
        let errors = validate_jobs(&jobs).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_time_overflow() {
        let jobs = vec![Job::new(1, 0, i64::MAX), Job::new(2, 0, 1)];
        let errors = validate_jobs(&jobs).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);

        let late = vec![Job::new(1, i64::MAX - 1, 2)];
        let errors = validate_jobs(&late).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
    }

    #[test]
    fn test_time_horizon() {
        assert_eq!(time_horizon(&sample_jobs()), Some(4 + 5 + 2 + 1));
        assert_eq!(time_horizon(&[Job::new(1, i64::MAX - 3, 3)]), Some(i64::MAX));
        assert_eq!(time_horizon(&[Job::new(1, i64::MAX - 3, 4)]), None);
    }

    #[test]
    fn test_score_overflow() {
        let weights = ScoreWeights::default();
        assert!(validate_score_range(&sample_jobs(), &weights).is_ok());

        let jobs = vec![Job::new(1, 0, 5).with_priority(1e308), Job::new(2, 0, 1)];
        assert!(validate_jobs(&jobs).is_ok());
        let errors = validate_score_range(&jobs, &weights).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::ScoreOverflow);
        assert!(errors[0].message.contains("'1'"));

        let negative = vec![Job::new(1, 0, 5).with_priority(-1e308)];
        assert!(validate_score_range(&negative, &weights).is_err());
    }

    #[test]
    fn test_score_overflow_from_weight() {
        let jobs = vec![Job::new(1, 1_000, 5)];
        let weights = ScoreWeights::new(1e305, 1.0, 1.0);
        assert!(validate_weights(&weights).is_ok());
        let errors = validate_score_range(&jobs, &weights).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::ScoreOverflow);
    }

    #[test]
    fn test_weights() {
        assert!(validate_weights(&ScoreWeights::default()).is_ok());
        let bad = ScoreWeights::new(-1.0, f64::NAN, 1.0);
        let errors = validate_weights(&bad).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::InvalidWeight));
    }
}
