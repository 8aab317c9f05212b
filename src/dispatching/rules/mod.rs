//! Built-in queue disciplines.
//!
//! # Score Convention
//! All disciplines return lower scores for jobs that should dispatch first.
//! Entries with equal scores keep insertion order.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Schrage (1968), "A proof of the optimality of the shortest remaining
//!   processing time discipline"

use super::{QueueDiscipline, QueueEntry, RuleScore};

// ======================== Remaining-time disciplines ========================

/// Shortest Remaining Time.
///
/// Prioritizes the queued job with the least CPU time left. The preemptive
/// counterpart of SPT; minimizes mean flow time on a single processor.
///
/// # Reference
/// Schrage (1968), optimal for mean flow time with preemption.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl QueueDiscipline for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn evaluate(&self, entry: &QueueEntry) -> RuleScore {
        entry.remaining as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}

// ======================== Order-based disciplines ========================

/// First In, First Out.
///
/// Dispatches in strict insertion order, never reordered by remaining time.
/// Paired with a quantum this yields Round Robin.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl QueueDiscipline for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, entry: &QueueEntry) -> RuleScore {
        entry.seq as f64
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}
