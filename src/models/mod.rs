//! Simulation domain models.
//!
//! Provides the core data types for describing CPU scheduling problems and
//! their outcomes. Boundary types carry `f64` time units and serialize for
//! presentation layers; engine state runs on integer ticks (see [`time`])
//! and never leaves the crate.
//!
//! # Boundary / Engine Split
//!
//! | Boundary (serde, `f64` units) | Engine (ticks) |
//! |-------------------------------|----------------|
//! | [`Job`] | [`JobInstance`] |
//! | [`SimConfig`], [`Policy`] | quantum budget on [`Processor`] |
//! | [`SimulationResult`] | [`Span`] histories |

mod config;
mod job;
mod processor;
mod report;
pub mod time;

pub use config::{Policy, SimConfig};
pub use job::{Admission, Job, JobId, JobInstance};
pub use processor::{Processor, ProcessorId, Span};
pub use report::{
    JobReport, ProcessorReport, QueueSnapshot, QueueSnapshotEntry, Segment, SimulationResult,
};
