//! CPU scheduling simulator with an explainable adaptive policy.
//!
//! Simulates a fully-known set of jobs on a single CPU under First Come
//! First Served, Shortest Job First, and Weighted Dynamic Score (WDS), and
//! reports each policy's timeline and averages side by side. WDS also
//! records why each job won at each scheduling point.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Job`, `JobRuntimeState`, `TimelineEntry`,
//!   `DecisionLogEntry`
//! - **`dispatching`**: Policies as dispatching rules, the WDS `ScoreModel`,
//!   and the `RuleEngine` that picks winners
//! - **`scheduler`**: `SimulationEngine`, `RunMetrics`, and the cross-policy
//!   `simulate` entry point
//! - **`validation`**: Input checks (empty lists, bad bursts, duplicate pids)
//! - **`api`**: JSON request payload of the web layer
//! - **`scenarios`**: Static catalog of illustrative scenarios
//! - **`workload`**: Seeded synthetic job lists
//!
//! # Example
//!
//! ```
//! use wds_schedule::models::Job;
//! use wds_schedule::scheduler::simulate;
//!
//! let jobs = vec![
//!     Job::new(1, 0, 5).with_priority(1.0),
//!     Job::new(2, 1, 2).with_priority(5.0),
//! ];
//! let result = simulate(&jobs, None).unwrap();
//! assert_eq!(result.timeline_wds.len(), 2);
//! assert!((result.metrics.tat.fcfs - 5.5).abs() < 1e-9);
//! ```
//!
//! # Logging
//!
//! Uses the `log` facade. Install any logger to see idle ticks (`trace`),
//! decisions (`debug`) and run summaries (`info`).
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod api;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod scenarios;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::SimulationError;
