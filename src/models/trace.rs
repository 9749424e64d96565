//! Execution records produced by a simulation run.

use serde::{Deserialize, Serialize};

use super::Pid;

/// One contiguous execution of a job on the CPU.
///
/// A run produces exactly one entry per job, in execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Job that ran.
    pub pid: Pid,
    /// Tick the job started.
    pub start_tick: i64,
    /// Ticks the job ran (its full burst).
    pub duration: i64,
}

impl TimelineEntry {
    /// Creates a timeline entry.
    pub fn new(pid: Pid, start_tick: i64, duration: i64) -> Self {
        Self {
            pid,
            start_tick,
            duration,
        }
    }

    /// Tick at which the entry ends (exclusive).
    #[inline]
    pub fn end_tick(&self) -> i64 {
        self.start_tick + self.duration
    }
}

/// Score detail for one eligible job at one WDS decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateScore {
    pub pid: Pid,
    /// Weighted score, rounded to 2 decimal places.
    pub final_score: f64,
    pub burst_time: i64,
    /// Ticks waited at decision time.
    pub wait_time: i64,
    pub priority: f64,
    /// `w_wait * wait_time`.
    pub wait_component: f64,
    /// `w_burst * BURST_SCALE / burst_time`.
    pub burst_component: f64,
    /// `w_prio * priority * PRIORITY_SCALE`.
    pub priority_component: f64,
}

/// Record of one WDS scheduling decision.
///
/// Produced once per executed job, never for idle ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionLogEntry {
    /// Clock value when the decision was made.
    pub time: i64,
    /// Job chosen to run.
    pub winner_pid: Pid,
    /// Every eligible job, in input order.
    pub candidates: Vec<CandidateScore>,
    /// Context switch messages; empty when the winner is the job that ran last.
    pub context_switch_messages: Vec<String>,
}

impl DecisionLogEntry {
    /// Score entry of the winner.
    pub fn winner(&self) -> Option<&CandidateScore> {
        self.candidates.iter().find(|c| c.pid == self.winner_pid)
    }
}
