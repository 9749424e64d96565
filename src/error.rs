//! Error type for simulation requests.
//!
//! All failures are detected before a run starts or abort the whole request;
//! callers never receive partial results.

use std::fmt;

use crate::dispatching::Policy;
use crate::models::Pid;
use crate::validation::{ValidationError, ValidationErrorKind};

/// Errors returned by [`simulate`](crate::scheduler::simulate) and the run
/// machinery beneath it.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SimulationError {
    /// Input rejected by validation. Holds every problem found.
    InvalidInput(Vec<ValidationError>),
    /// The run loop exceeded its iteration limit.
    IterationLimitExceeded { limit: u64, clock: i64 },
    /// A job's finish tick does not fit in the clock.
    ClockOverflow { pid: Pid, start: i64 },
    /// Metrics were requested for a run with no jobs.
    EmptyRun,
    /// Metrics were requested for a job that never completed.
    IncompleteJob { pid: Pid },
    /// A parallel policy run panicked.
    WorkerPanicked { policy: Policy },
}

impl SimulationError {
    /// Whether any validation error of `kind` caused this failure.
    pub fn has_kind(&self, kind: ValidationErrorKind) -> bool {
        match self {
            Self::InvalidInput(errors) => errors.iter().any(|e| e.kind == kind),
            _ => false,
        }
    }
}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(errors) => {
                write!(f, "invalid input")?;
                for (i, err) in errors.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { "; " };
                    write!(f, "{sep}{err}")?;
                }
                Ok(())
            }
            Self::IterationLimitExceeded { limit, clock } => {
                write!(f, "iteration limit {limit} exceeded at clock {clock}")
            }
            Self::ClockOverflow { pid, start } => {
                write!(f, "job '{pid}' started at {start} overflows the clock")
            }
            Self::EmptyRun => write!(f, "cannot summarize a run with no jobs"),
            Self::IncompleteJob { pid } => write!(f, "job '{pid}' did not complete"),
            Self::WorkerPanicked { policy } => write!(f, "{policy} simulation panicked"),
        }
    }
}

impl std::error::Error for SimulationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Job;
    use crate::validation::validate_jobs;

    #[test]
    fn test_display_lists_all_errors() {
        let errors = validate_jobs(&[Job::new(1, 0, 0), Job::new(2, -1, 1)]).unwrap_err();
        let err = SimulationError::from(errors);
        let text = err.to_string();
        assert!(text.starts_with("invalid input: "));
        assert!(text.contains("non-positive burst"));
        assert!(text.contains("negative arrival"));
    }

    #[test]
    fn test_has_kind() {
        let errors = validate_jobs(&[Job::new(1, 0, 1), Job::new(1, 0, 1)]).unwrap_err();
        let err = SimulationError::from(errors);
        assert!(err.has_kind(ValidationErrorKind::DuplicatePid));
        assert!(!err.has_kind(ValidationErrorKind::EmptyJobList));
        assert!(!SimulationError::EmptyRun.has_kind(ValidationErrorKind::DuplicatePid));
    }

    #[test]
    fn test_display_limit() {
        let err = SimulationError::IterationLimitExceeded {
            limit: 10,
            clock: 10,
        };
        assert_eq!(err.to_string(), "iteration limit 10 exceeded at clock 10");
    }

    #[test]
    fn test_display_clock_overflow() {
        let err = SimulationError::ClockOverflow {
            pid: Pid::from(3),
            start: 7,
        };
        assert_eq!(err.to_string(), "job '3' started at 7 overflows the clock");
    }
}
