//! Event-driven simulation engine and KPI evaluation.
//!
//! # Pipeline
//!
//! [`registry`] normalizes input jobs into a tick-based job table, the
//! [`ReadyQueue`] holds admitted jobs for the active discipline, the
//! [`SimulationEngine`] binds jobs to processors and advances from event
//! to event, the [`QueueRecorder`] captures observational queue snapshots,
//! and [`SimulationKpi`] grades the finished result.
//!
//! The single entry point is [`simulate`].
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 12

mod engine;
mod kpi;
mod queue;
mod recorder;
pub mod registry;

pub use engine::{simulate, SimulationEngine};
pub use kpi::SimulationKpi;
pub use queue::ReadyQueue;
pub use recorder::{QueueRecorder, Snapshot};
