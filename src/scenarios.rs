//! Read-only catalog of illustrative WDS scenarios.
//!
//! Each scenario describes a real-world workload where short or urgent jobs
//! get stuck behind long ones, and how the WDS terms address it. The table is
//! static data; lookups never allocate.

use serde::Serialize;

/// Literature pointer attached to a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub title: &'static str,
    pub source: &'static str,
    pub url: &'static str,
}

/// Two-bar comparison shown with a scenario (baseline vs WDS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioStats {
    pub labels: [&'static str; 2],
    pub data: [u32; 2],
}

/// A narrative scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scenario {
    /// Short lookup key.
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub problem: &'static str,
    pub solution: &'static str,
    pub stats: ScenarioStats,
    pub refs: &'static [Reference],
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        id: "ai",
        title: "AI Model Training Clusters",
        icon: "🤖",
        problem: "Checkpointing is a short, frequent task while training epochs are \
                  long. Under FCFS a checkpoint waits behind whole epochs, so a crash \
                  can lose hours of progress.",
        solution: "The burst term marks checkpoints as short jobs and slips them in \
                   between epochs, keeping progress safe without stretching total \
                   training time.",
        stats: ScenarioStats {
            labels: ["Checkpoint Lag (FCFS)", "Checkpoint Lag (WDS)"],
            data: [120, 5],
        },
        refs: &[
            Reference {
                title: "Optimizing Checkpointing in Distributed Deep Learning",
                source: "arXiv",
                url: "https://scholar.google.com/scholar?q=Optimizing+Checkpointing+in+Distributed+Deep+Learning",
            },
            Reference {
                title: "Job Scheduling for GPU Clusters",
                source: "USENIX OSDI",
                url: "https://scholar.google.com/scholar?q=Job+Scheduling+for+GPU+Clusters",
            },
        ],
    },
    Scenario {
        id: "5g",
        title: "5G/6G Edge Gateways",
        icon: "📡",
        problem: "Edge towers mix high-bandwidth, low-urgency video with tiny but \
                  critical health alerts. FCFS serves the large video packets first \
                  and delays the alert.",
        solution: "The priority term gives health alerts a large score, so they are \
                   picked at the next decision point ahead of queued video work.",
        stats: ScenarioStats {
            labels: ["Emergency Latency (FCFS)", "Emergency Latency (WDS)"],
            data: [450, 12],
        },
        refs: &[
            Reference {
                title: "Ultra-Reliable Low-Latency Communication (URLLC) in 5G",
                source: "IEEE Xplore",
                url: "https://scholar.google.com/scholar?q=URLLC+5G+Scheduling+Latency",
            },
            Reference {
                title: "Slice Scheduling for IoT Edge Devices",
                source: "ACM Sigcomm",
                url: "https://scholar.google.com/scholar?q=Network+Slicing+Scheduling+IoT",
            },
        ],
    },
    Scenario {
        id: "auto",
        title: "Autonomous Vehicle OS",
        icon: "🚗",
        problem: "A self-driving stack runs long map downloads next to short, \
                  safety-critical lidar processing. Queued behind a download, obstacle \
                  detection can lag by hundreds of milliseconds.",
        solution: "Lidar tasks score high on both the burst and priority terms, so \
                   they win every decision against pending downloads.",
        stats: ScenarioStats {
            labels: ["Braking Reaction (Standard)", "Braking Reaction (WDS)"],
            data: [300, 45],
        },
        refs: &[
            Reference {
                title: "Real-Time Scheduling in Automotive AUTOSAR",
                source: "SAE International",
                url: "https://scholar.google.com/scholar?q=Real-Time+Scheduling+in+Automotive+AUTOSAR",
            },
            Reference {
                title: "Safety-Critical OS Design for Tesla/Waymo",
                source: "IEEE IV Symposium",
                url: "https://scholar.google.com/scholar?q=Safety-Critical+OS+Scheduling+Autonomous+Vehicles",
            },
        ],
    },
    Scenario {
        id: "cloud",
        title: "Serverless Cloud Functions",
        icon: "☁️",
        problem: "While a server compiles a large background job, a simple login \
                  request can hang for seconds waiting for its turn.",
        solution: "The wait term ages the login request every tick it waits until \
                   it outranks the remaining background work.",
        stats: ScenarioStats {
            labels: ["Cold Start Delay (FIFO)", "Cold Start Delay (WDS)"],
            data: [2500, 300],
        },
        refs: &[
            Reference {
                title: "Mitigating Cold Starts in Serverless Computing",
                source: "USENIX",
                url: "https://scholar.google.com/scholar?q=Mitigating+Cold+Starts+in+Serverless+Computing",
            },
            Reference {
                title: "Fairness in Multi-Tenant Cloud Scheduling",
                source: "Google Cloud Research",
                url: "https://scholar.google.com/scholar?q=Fairness+in+Multi-Tenant+Cloud+Scheduling",
            },
        ],
    },
];

/// All scenarios, in display order.
pub fn scenarios() -> &'static [Scenario] {
    SCENARIOS
}

/// Looks up a scenario by id.
pub fn scenario(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.id == id)
}

/// Ids of all scenarios, in display order.
pub fn scenario_ids() -> impl Iterator<Item = &'static str> {
    SCENARIOS.iter().map(|s| s.id)
}
