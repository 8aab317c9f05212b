//! Simulation result shapes.
//!
//! Everything here is a boundary type: times are `f64` time units, fields
//! serialize for presentation layers (timeline charts, result tables), and
//! nothing feeds back into the engine. Per-job reports echo the submitted
//! arrival and burst values verbatim alongside the computed timings.

use serde::{Deserialize, Serialize};

use super::job::JobId;
use super::processor::ProcessorId;

/// Final timing report for one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobReport {
    /// Job identifier.
    pub id: JobId,
    /// Submitted arrival time, echoed unchanged.
    pub arrival_time: f64,
    /// Submitted burst time, echoed unchanged.
    pub burst_time: f64,
    /// First time the job ran on any processor.
    pub start_time: f64,
    /// Time the job completed.
    pub end_time: f64,
    /// `end_time - arrival_time`.
    pub turnaround_time: f64,
}

/// One contiguous run of a job on a processor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Job that ran.
    pub job_id: JobId,
    /// Time the run began.
    pub start_time: f64,
    /// Time the run ended.
    pub end_time: f64,
}

impl Segment {
    /// Length of the run.
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// Execution history of one processor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessorReport {
    /// Processor id.
    pub id: ProcessorId,
    /// Segments in execution order. Non-overlapping, strictly increasing,
    /// never zero-length; gaps are idle time.
    pub history: Vec<Segment>,
}

/// One queued job observed in a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueSnapshotEntry {
    /// Job identifier.
    pub job_id: JobId,
    /// CPU time the job still required when observed.
    pub remaining_time: f64,
}

/// Ready-queue contents over one interval between engine events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueSnapshot {
    /// Interval start.
    pub start_time: f64,
    /// Interval end.
    pub end_time: f64,
    /// Queued jobs in queue order.
    pub entries: Vec<QueueSnapshotEntry>,
}

/// Everything one simulation run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Per-job timing, in input order.
    pub jobs: Vec<JobReport>,
    /// Per-processor histories, ascending processor id.
    pub processors: Vec<ProcessorReport>,
    /// Ready-queue snapshots over time (quantum policies only; empty
    /// intervals are skipped).
    pub ready_queue_history: Vec<QueueSnapshot>,
}

impl SimulationResult {
    /// Report for one job.
    pub fn job(&self, id: JobId) -> Option<&JobReport> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// All segments where `id` ran, across processors, in start order.
    pub fn segments_for_job(&self, id: JobId) -> Vec<&Segment> {
        let mut segments: Vec<&Segment> = self
            .processors
            .iter()
            .flat_map(|processor| &processor.history)
            .filter(|segment| segment.job_id == id)
            .collect();
        segments.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));
        segments
    }

    /// Latest segment end across all processors, or 0.0 with no segments.
    pub fn makespan(&self) -> f64 {
        self.processors
            .iter()
            .flat_map(|processor| &processor.history)
            .map(|segment| segment.end_time)
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_result() -> SimulationResult {
        SimulationResult {
            jobs: vec![
                JobReport {
                    id: 1,
                    arrival_time: 0.0,
                    burst_time: 3.0,
                    start_time: 0.0,
                    end_time: 5.0,
                    turnaround_time: 5.0,
                },
                JobReport {
                    id: 2,
                    arrival_time: 1.0,
                    burst_time: 2.0,
                    start_time: 1.0,
                    end_time: 3.0,
                    turnaround_time: 2.0,
                },
            ],
            processors: vec![
                ProcessorReport {
                    id: 0,
                    history: vec![
                        Segment {
                            job_id: 1,
                            start_time: 0.0,
                            end_time: 1.0,
                        },
                        Segment {
                            job_id: 1,
                            start_time: 3.0,
                            end_time: 5.0,
                        },
                    ],
                },
                ProcessorReport {
                    id: 1,
                    history: vec![Segment {
                        job_id: 2,
                        start_time: 1.0,
                        end_time: 3.0,
                    }],
                },
            ],
            ready_queue_history: Vec::new(),
        }
    }

    #[test]
    fn test_job_lookup() {
        let result = make_result();
        assert_eq!(result.job(2).unwrap().turnaround_time, 2.0);
        assert!(result.job(99).is_none());
    }

    #[test]
    fn test_segments_for_job_cross_processor_in_start_order() {
        let result = make_result();
        let segments = result.segments_for_job(1);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].start_time, 0.0);
        assert_eq!(segments[1].start_time, 3.0);
        assert!(result.segments_for_job(99).is_empty());
    }

    #[test]
    fn test_makespan_is_latest_segment_end() {
        let result = make_result();
        assert_eq!(result.makespan(), 5.0);
    }

    #[test]
    fn test_makespan_of_empty_result_is_zero() {
        let result = SimulationResult {
            jobs: Vec::new(),
            processors: Vec::new(),
            ready_queue_history: Vec::new(),
        };
        assert_eq!(result.makespan(), 0.0);
    }

    #[test]
    fn test_segment_duration() {
        let segment = Segment {
            job_id: 1,
            start_time: 2.0,
            end_time: 3.5,
        };
        assert!((segment.duration() - 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_result_serde_round_trip() {
        let result = make_result();
        let json = serde_json::to_string(&result).unwrap();
        let back: SimulationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
