//! Simulation engine, KPI evaluation, and cross-policy comparison.
//!
//! # Algorithm
//!
//! `SimulationEngine` drives a discrete clock over one policy: idle
//! stretches jump to the next arrival, decisions pick a winner through the
//! policy's `RuleEngine` and run it to completion.
//!
//! # KPI
//!
//! `RunMetrics` computes average turnaround, wait and response times,
//! makespan, utilization and throughput for a finished run.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4

mod engine;
mod kpi;
mod simulate;

pub use engine::{SimulationEngine, SimulationRun};
pub use kpi::RunMetrics;
pub use simulate::{
    simulate, Metrics, PolicyRun, PolicyTable, RunDetails, SimulationResult, Simulator,
};
