//! Simulation quality metrics (KPIs).
//!
//! Computes standard CPU-scheduling performance indicators from a
//! completed simulation result. Purely derived: nothing here feeds back
//! into the engine.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Latest segment end time |
//! | Avg Turnaround | Mean of (end - arrival) |
//! | Max Turnaround | Largest single turnaround |
//! | Avg Waiting | Mean of (turnaround - burst) |
//! | Utilization | Busy time / makespan, per processor |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use crate::models::SimulationResult;

/// Simulation performance indicators.
///
/// All time values are in boundary time units.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationKpi {
    /// Makespan: latest segment end time.
    pub makespan: f64,
    /// Average turnaround time across jobs.
    pub avg_turnaround_time: f64,
    /// Maximum turnaround time of any single job.
    pub max_turnaround_time: f64,
    /// Average waiting time: mean(turnaround - burst).
    pub avg_waiting_time: f64,
    /// Per-processor busy fraction, indexed by processor id (0.0..1.0).
    pub utilization_by_processor: Vec<f64>,
    /// Average processor utilization (0.0..1.0).
    pub avg_utilization: f64,
}

impl SimulationKpi {
    /// Computes KPIs from a finished simulation.
    pub fn calculate(result: &SimulationResult) -> Self {
        let makespan = result.makespan();

        let mut total_turnaround = 0.0;
        let mut max_turnaround: f64 = 0.0;
        let mut total_waiting = 0.0;

        for job in &result.jobs {
            total_turnaround += job.turnaround_time;
            max_turnaround = max_turnaround.max(job.turnaround_time);
            // Quantization can land turnaround a hair under the raw burst;
            // waiting time never reports negative.
            total_waiting += (job.turnaround_time - job.burst_time).max(0.0);
        }

        let job_count = result.jobs.len();
        let avg_turnaround_time = if job_count == 0 {
            0.0
        } else {
            total_turnaround / job_count as f64
        };
        let avg_waiting_time = if job_count == 0 {
            0.0
        } else {
            total_waiting / job_count as f64
        };

        // Processor ids are the dense indices the engine assigned.
        let mut utilization_by_processor = vec![0.0; result.processors.len()];
        for processor in &result.processors {
            let busy: f64 = processor
                .history
                .iter()
                .map(|segment| segment.duration())
                .sum();
            utilization_by_processor[processor.id] = if makespan > 0.0 {
                busy / makespan
            } else {
                0.0
            };
        }
        let avg_utilization = if utilization_by_processor.is_empty() {
            0.0
        } else {
            utilization_by_processor.iter().sum::<f64>() / utilization_by_processor.len() as f64
        };

        Self {
            makespan,
            avg_turnaround_time,
            max_turnaround_time: max_turnaround,
            avg_waiting_time,
            utilization_by_processor,
            avg_utilization,
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_avg_waiting: f64, min_utilization: f64) -> bool {
        self.avg_waiting_time <= max_avg_waiting && self.avg_utilization >= min_utilization
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Job, Policy, SimConfig};
    use crate::scheduler::simulate;

    #[test]
    fn test_kpi_round_robin_single_processor() {
        let config = SimConfig::new(Policy::RoundRobin, 1).with_quantum(2.0);
        let jobs = vec![Job::new(1, 0.0, 5.0), Job::new(2, 1.0, 3.0)];
        let kpi = SimulationKpi::calculate(&simulate(&config, &jobs).unwrap());

        assert!((kpi.makespan - 8.0).abs() < 1e-10);
        // Turnarounds: job 1 = 8, job 2 = 6.
        assert!((kpi.avg_turnaround_time - 7.0).abs() < 1e-10);
        assert!((kpi.max_turnaround_time - 8.0).abs() < 1e-10);
        // Waiting: job 1 = 8 - 5 = 3, job 2 = 6 - 3 = 3.
        assert!((kpi.avg_waiting_time - 3.0).abs() < 1e-10);
        // One processor, never idle.
        assert_eq!(kpi.utilization_by_processor.len(), 1);
        assert!((kpi.utilization_by_processor[0] - 1.0).abs() < 1e-10);
        assert!((kpi.avg_utilization - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_idle_processor_counts_as_zero() {
        let config = SimConfig::new(Policy::Srtf, 2);
        let kpi = SimulationKpi::calculate(&simulate(&config, &[Job::new(1, 0.0, 4.0)]).unwrap());

        assert!((kpi.makespan - 4.0).abs() < 1e-10);
        assert!((kpi.utilization_by_processor[0] - 1.0).abs() < 1e-10);
        assert!((kpi.utilization_by_processor[1] - 0.0).abs() < 1e-10);
        assert!((kpi.avg_utilization - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_utilization_is_keyed_by_processor_id() {
        let config = SimConfig::new(Policy::Srtf, 2);
        let jobs = vec![Job::new(1, 0.0, 4.0), Job::new(2, 0.0, 2.0)];
        let kpi = SimulationKpi::calculate(&simulate(&config, &jobs).unwrap());

        // Processor 0 dispatches first and takes the shorter job.
        assert_eq!(kpi.utilization_by_processor.len(), 2);
        assert!((kpi.utilization_by_processor[0] - 0.5).abs() < 1e-10);
        assert!((kpi.utilization_by_processor[1] - 1.0).abs() < 1e-10);
        assert!((kpi.avg_utilization - 0.75).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_counts_idle_gaps_against_utilization() {
        let config = SimConfig::new(Policy::Srtf, 1);
        let jobs = vec![Job::new(1, 0.0, 1.0), Job::new(2, 5.0, 1.0)];
        let kpi = SimulationKpi::calculate(&simulate(&config, &jobs).unwrap());

        // Busy 2 of makespan 6.
        assert!((kpi.makespan - 6.0).abs() < 1e-10);
        assert!((kpi.utilization_by_processor[0] - 2.0 / 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty_result() {
        let config = SimConfig::new(Policy::RoundRobin, 1).with_quantum(1.0);
        let kpi = SimulationKpi::calculate(&simulate(&config, &[]).unwrap());

        assert_eq!(kpi.makespan, 0.0);
        assert_eq!(kpi.avg_turnaround_time, 0.0);
        assert_eq!(kpi.max_turnaround_time, 0.0);
        assert_eq!(kpi.avg_waiting_time, 0.0);
        assert_eq!(kpi.utilization_by_processor, vec![0.0]);
        assert_eq!(kpi.avg_utilization, 0.0);
    }

    #[test]
    fn test_meets_thresholds() {
        let config = SimConfig::new(Policy::RoundRobin, 1).with_quantum(2.0);
        let jobs = vec![Job::new(1, 0.0, 5.0), Job::new(2, 1.0, 3.0)];
        let kpi = SimulationKpi::calculate(&simulate(&config, &jobs).unwrap());

        assert!(kpi.meets_thresholds(3.0, 0.9));
        assert!(!kpi.meets_thresholds(2.9, 0.9));
        assert!(!kpi.meets_thresholds(3.0, 1.5));
    }
}
