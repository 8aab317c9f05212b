//! Simulation configuration.

use serde::{Deserialize, Serialize};

/// Scheduling policy, selecting ready-queue order and preemption behavior.
///
/// | Policy | Queue order | Quantum | Preemption trigger |
/// |--------|-------------|---------|--------------------|
/// | [`Srtf`](Policy::Srtf) | remaining ascending | none | strictly shorter ready job, immediately |
/// | [`SrtfQuantum`](Policy::SrtfQuantum) | remaining ascending | yes | quantum expiry only |
/// | [`RoundRobin`](Policy::RoundRobin) | insertion order | yes | quantum expiry only |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Policy {
    /// Shortest Remaining Time First with continuous preemption.
    #[serde(rename = "SRTF")]
    Srtf,
    /// Shortest Remaining Time First, preemptible only at quantum expiry.
    #[serde(rename = "SRTF_QUANTUM")]
    SrtfQuantum,
    /// Round Robin.
    #[serde(rename = "ROUND_ROBIN")]
    RoundRobin,
}

impl Policy {
    /// Whether this policy bounds each run by a time quantum.
    pub fn uses_quantum(&self) -> bool {
        matches!(self, Policy::SrtfQuantum | Policy::RoundRobin)
    }

    /// Whether ready-queue snapshots are recorded under this policy.
    pub fn records_queue(&self) -> bool {
        self.uses_quantum()
    }
}

/// Configuration for one simulation run.
///
/// # Example
///
/// ```
/// use u_cpusim::models::{Policy, SimConfig};
///
/// let config = SimConfig::new(Policy::RoundRobin, 2).with_quantum(1.5);
/// assert_eq!(config.processor_count, 2);
/// assert_eq!(config.quantum, 1.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of identical processors (> 0).
    pub processor_count: usize,
    /// Time quantum in time units (> 0). Ignored by policies without a
    /// quantum.
    #[serde(default = "default_quantum")]
    pub quantum: f64,
    /// Scheduling policy.
    pub policy: Policy,
}

fn default_quantum() -> f64 {
    1.0
}

impl SimConfig {
    /// Creates a configuration with the default quantum of one time unit.
    pub fn new(policy: Policy, processor_count: usize) -> Self {
        Self {
            processor_count,
            quantum: default_quantum(),
            policy,
        }
    }

    /// Sets the time quantum.
    pub fn with_quantum(mut self, quantum: f64) -> Self {
        self.quantum = quantum;
        self
    }
}
