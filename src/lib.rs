//! Event-driven CPU scheduling simulator.
//!
//! Simulates a pool of identical processors executing a job set under a
//! preemptive scheduling policy and produces per-job timing plus a full
//! execution trace. Three policies are built in: continuous Shortest
//! Remaining Time First, SRTF bounded by a time quantum, and Round Robin.
//! Identical input always produces identical output.
//!
//! # Modules
//!
//! - **`models`**: Domain types - `Job`, `Processor`, `SimConfig`, `Policy`,
//!   `SimulationResult`
//! - **`dispatching`**: Queue disciplines and preemption strategies
//! - **`scheduler`**: The event-driven engine, ready queue, and KPIs
//! - **`validation`**: Input integrity checks (duplicate IDs, invalid times)
//! - **`workload`**: Deterministic random job-set generation
//!
//! # Example
//!
//! ```
//! use u_cpusim::{simulate, Job, Policy, SimConfig};
//!
//! let config = SimConfig::new(Policy::RoundRobin, 1).with_quantum(2.0);
//! let jobs = vec![Job::new(1, 0.0, 5.0), Job::new(2, 1.0, 3.0)];
//!
//! let result = simulate(&config, &jobs).unwrap();
//! assert_eq!(result.jobs[0].end_time, 8.0);
//! assert_eq!(result.jobs[1].turnaround_time, 6.0);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5: CPU Scheduling
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod dispatching;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use models::{Job, Policy, SimConfig, SimulationResult};
pub use scheduler::simulate;
pub use validation::{ValidationError, ValidationErrorKind, ValidationResult};
