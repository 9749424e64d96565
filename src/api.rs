//! Request payload accepted by the web layer.
//!
//! Mirrors the JSON body of the simulate endpoint:
//!
//! ```json
//! { "processes": [{"pid": 1, "at": 0, "bt": 5, "prio": 1}],
//!   "w_wait": 3.0, "w_burst": 1.0, "w_prio": 1.0 }
//! ```
//!
//! Weights left out fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::dispatching::ScoreWeights;
use crate::error::SimulationError;
use crate::models::Job;
use crate::scheduler::{SimulationResult, Simulator};

/// A simulation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulateRequest {
    /// Jobs to simulate, in input order.
    pub processes: Vec<Job>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w_wait: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w_burst: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w_prio: Option<f64>,
}

impl SimulateRequest {
    /// Creates a request with default weights.
    pub fn new(processes: Vec<Job>) -> Self {
        Self {
            processes,
            w_wait: None,
            w_burst: None,
            w_prio: None,
        }
    }

    /// Effective WDS weights.
    pub fn weights(&self) -> ScoreWeights {
        ScoreWeights::default().with_overrides(self.w_wait, self.w_burst, self.w_prio)
    }

    /// Validates and runs the request.
    pub fn execute(&self) -> Result<SimulationResult, SimulationError> {
        Simulator::new()
            .with_weights(self.weights())
            .simulate(&self.processes)
    }
}
