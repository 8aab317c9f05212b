//! Queue disciplines and preemption strategies for scheduling policies.
//!
//! A scheduling policy decomposes into two independent axes: a
//! [`QueueDiscipline`] that orders the ready queue for dispatch, and a
//! [`PreemptionCheck`] that decides when a running job can lose its
//! processor. SRTF and quantum-based SRTF share a discipline and differ in
//! preemption; Round Robin and quantum-based SRTF share preemption and
//! differ in discipline.
//!
//! # Usage
//!
//! ```
//! use u_cpusim::dispatching::{discipline_for, preemption_for, PreemptionCheck};
//! use u_cpusim::models::Policy;
//!
//! let discipline = discipline_for(Policy::RoundRobin);
//! assert_eq!(discipline.name(), "FIFO");
//! assert_eq!(preemption_for(Policy::Srtf), PreemptionCheck::ShorterJobImmediate);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 12

mod entry;
pub mod rules;

pub use entry::QueueEntry;

use crate::models::Policy;
use std::fmt::Debug;

/// Score returned by a queue discipline.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = f64;

/// A queue discipline that orders the ready queue for dispatch.
///
/// # Score Convention
/// **Lower score = higher priority.** Entries with equal scores keep
/// insertion order, so a discipline never needs its own tie-breaking.
pub trait QueueDiscipline: Send + Sync + Debug {
    /// Discipline name (e.g., "SRT", "FIFO").
    fn name(&self) -> &'static str;

    /// Evaluates the dispatch priority of a queued job.
    ///
    /// Returns a score where lower = dispatched first.
    fn evaluate(&self, entry: &QueueEntry) -> RuleScore;

    /// Discipline description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// When a running job may lose its processor before completing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreemptionCheck {
    /// Only a quantum expiry releases a busy processor. Without a quantum,
    /// jobs run to completion once dispatched.
    QuantumExpiryOnly,
    /// A ready job with strictly smaller remaining time seizes the
    /// processor, re-checked at every elapsed whole time unit.
    ShorterJobImmediate,
}

/// Returns the queue discipline a policy dispatches with.
pub fn discipline_for(policy: Policy) -> Box<dyn QueueDiscipline> {
    match policy {
        Policy::Srtf | Policy::SrtfQuantum => Box::new(rules::ShortestRemaining),
        Policy::RoundRobin => Box::new(rules::Fifo),
    }
}

/// Returns the preemption strategy a policy runs under.
pub fn preemption_for(policy: Policy) -> PreemptionCheck {
    match policy {
        Policy::Srtf => PreemptionCheck::ShorterJobImmediate,
        Policy::SrtfQuantum | Policy::RoundRobin => PreemptionCheck::QuantumExpiryOnly,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_discipline_mapping() {
        assert_eq!(discipline_for(Policy::Srtf).name(), "SRT");
        assert_eq!(discipline_for(Policy::SrtfQuantum).name(), "SRT");
        assert_eq!(discipline_for(Policy::RoundRobin).name(), "FIFO");
    }

    #[test]
    fn test_policy_preemption_mapping() {
        assert_eq!(
            preemption_for(Policy::Srtf),
            PreemptionCheck::ShorterJobImmediate
        );
        assert_eq!(
            preemption_for(Policy::SrtfQuantum),
            PreemptionCheck::QuantumExpiryOnly
        );
        assert_eq!(
            preemption_for(Policy::RoundRobin),
            PreemptionCheck::QuantumExpiryOnly
        );
    }
}
