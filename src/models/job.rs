//! Job model and per-run simulation state.
//!
//! [`Job`] is the boundary shape callers submit (times in `f64` units);
//! [`JobInstance`] is the engine's mutable per-run state (times in ticks).
//! Input jobs are never mutated, so the raw submitted values survive into
//! the final report untouched.

use serde::{Deserialize, Serialize};

use super::time::{duration_to_ticks, units_to_ticks, Ticks};

/// Unique job identifier.
pub type JobId = u64;

/// A job submitted for simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier.
    pub id: JobId,
    /// Time the job becomes available, in time units (>= 0).
    pub arrival_time: f64,
    /// Total CPU time the job requires, in time units (> 0).
    pub burst_time: f64,
}

impl Job {
    /// Creates a new job.
    pub fn new(id: JobId, arrival_time: f64, burst_time: f64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
        }
    }
}

/// Admission state of a simulated job.
///
/// A job moves `Unadmitted → Admitted` exactly once, when the clock first
/// reaches its arrival time. There is no transition back: after dispatch,
/// preemption, and re-enqueueing, the job stays admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Not yet entered into the ready queue.
    Unadmitted,
    /// Entered into the ready queue; never re-admitted.
    Admitted,
}

/// Mutable per-run state of one job.
///
/// All fields are in ticks (see [`super::time`]); the boundary `f64` values
/// are quantized once here, when the instance is built.
#[derive(Debug, Clone)]
pub struct JobInstance {
    /// Stable id copied from the input job.
    pub id: JobId,
    /// Arrival time.
    pub arrival: Ticks,
    /// Total required CPU time.
    pub burst: Ticks,
    /// CPU time still required. Monotonically non-increasing, floored at 0.
    pub remaining: Ticks,
    /// First time the job ran on any processor.
    pub start: Option<Ticks>,
    /// Time the job finished.
    pub end: Option<Ticks>,
    admission: Admission,
}

impl JobInstance {
    /// Builds the per-run state for an input job.
    pub fn new(job: &Job) -> Self {
        let burst = duration_to_ticks(job.burst_time);
        Self {
            id: job.id,
            arrival: units_to_ticks(job.arrival_time),
            burst,
            remaining: burst,
            start: None,
            end: None,
            admission: Admission::Unadmitted,
        }
    }

    /// Whether the job has entered the ready queue.
    pub fn is_admitted(&self) -> bool {
        self.admission == Admission::Admitted
    }

    /// Marks the job admitted. Idempotent; there is no way back.
    pub fn admit(&mut self) {
        self.admission = Admission::Admitted;
    }

    /// Records the first dispatch time. Later calls keep the original value.
    pub fn mark_started(&mut self, now: Ticks) {
        if self.start.is_none() {
            self.start = Some(now);
        }
    }

    /// Consumes `delta` ticks of CPU time, flooring at zero.
    pub fn consume(&mut self, delta: Ticks) {
        self.remaining = (self.remaining - delta).max(0);
    }

    /// Whether no CPU time is left.
    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    /// Stamps the completion time. Later calls keep the original value.
    pub fn finish(&mut self, now: Ticks) {
        if self.end.is_none() {
            self.end = Some(now);
        }
    }

    /// Completion minus arrival, once finished.
    pub fn turnaround(&self) -> Option<Ticks> {
        self.end.map(|end| end - self.arrival)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_instance() -> JobInstance {
        JobInstance::new(&Job::new(7, 2.0, 1.5))
    }

    #[test]
    fn test_instance_quantizes_boundary_times() {
        let instance = make_instance();
        assert_eq!(instance.arrival, 2000);
        assert_eq!(instance.burst, 1500);
        assert_eq!(instance.remaining, 1500);
        assert_eq!(instance.start, None);
        assert_eq!(instance.end, None);
    }

    #[test]
    fn test_admission_is_one_way() {
        let mut instance = make_instance();
        assert!(!instance.is_admitted());
        instance.admit();
        assert!(instance.is_admitted());
        instance.admit();
        assert!(instance.is_admitted());
    }

    #[test]
    fn test_start_is_recorded_once() {
        let mut instance = make_instance();
        instance.mark_started(2000);
        instance.mark_started(5000);
        assert_eq!(instance.start, Some(2000));
    }

    #[test]
    fn test_consume_floors_at_zero() {
        let mut instance = make_instance();
        instance.consume(1000);
        assert_eq!(instance.remaining, 500);
        assert!(!instance.is_finished());
        instance.consume(800);
        assert_eq!(instance.remaining, 0);
        assert!(instance.is_finished());
    }

    #[test]
    fn test_finish_keeps_first_timestamp() {
        let mut instance = make_instance();
        instance.finish(3500);
        instance.finish(9000);
        assert_eq!(instance.end, Some(3500));
    }

    #[test]
    fn test_turnaround_is_end_minus_arrival() {
        let mut instance = make_instance();
        assert_eq!(instance.turnaround(), None);
        instance.finish(3500);
        assert_eq!(instance.turnaround(), Some(1500));
    }

    #[test]
    fn test_job_serde_round_trip() {
        let job = Job::new(1, 0.0, 5.0);
        let json = serde_json::to_string(&job).unwrap();
        let back: Job = serde_json::from_str(&json).unwrap();
        assert_eq!(back, job);
    }
}
