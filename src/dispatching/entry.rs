//! Ready-queue entry evaluated by queue disciplines.

use crate::models::time::Ticks;
use crate::models::JobId;

/// One admitted, unfinished, unassigned job waiting for a processor.
///
/// `remaining` is frozen while the job waits: queued jobs consume no CPU
/// time, so the value recorded at insertion stays current until dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueEntry {
    /// Job id, for reports and logs.
    pub job: JobId,
    /// Slot of the job in the engine's job table.
    pub slot: usize,
    /// CPU time the job still requires, in ticks.
    pub remaining: Ticks,
    /// Monotonic insertion sequence; later insertions get larger values.
    pub seq: u64,
}

impl QueueEntry {
    /// Creates an entry for a job entering the queue.
    pub fn new(job: JobId, slot: usize, remaining: Ticks, seq: u64) -> Self {
        Self {
            job,
            slot,
            remaining,
            seq,
        }
    }
}
