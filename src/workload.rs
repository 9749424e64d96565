//! Seeded synthetic workloads.
//!
//! Produces valid job lists for demos, benchmarks and property tests. The
//! same seed and bounds always yield the same jobs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::Job;

/// Random job-list generator.
///
/// # Example
/// ```
/// use wds_schedule::workload::WorkloadGenerator;
///
/// let jobs = WorkloadGenerator::new(8).with_max_burst(4).generate(42);
/// assert_eq!(jobs.len(), 8);
/// assert!(jobs.iter().all(|j| (1..=4).contains(&j.burst_time)));
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    count: usize,
    max_arrival: i64,
    max_burst: i64,
    max_priority: i32,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` jobs with default bounds
    /// (arrivals in 0..=20, bursts in 1..=10, priorities in 0..=5).
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 20,
            max_burst: 10,
            max_priority: 5,
        }
    }

    /// Sets the latest possible arrival tick.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the longest possible burst.
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst.max(1);
        self
    }

    /// Sets the highest possible priority.
    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority.max(0);
        self
    }

    /// Generates jobs with pids `1..=count` from `seed`.
    pub fn generate(&self, seed: u64) -> Vec<Job> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate_with(&mut rng)
    }

    /// Generates jobs from a caller-supplied RNG.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Vec<Job> {
        (1..=self.count as i64)
            .map(|pid| {
                let arrival = rng.random_range(0..=self.max_arrival);
                let burst = rng.random_range(1..=self.max_burst);
                let priority = rng.random_range(0..=self.max_priority);
                Job::new(pid, arrival, burst).with_priority(priority as f64)
            })
            .collect()
    }
}
