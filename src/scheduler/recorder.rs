//! Ready-queue snapshot recording.

use super::queue::ReadyQueue;
use crate::models::time::Ticks;
use crate::models::JobId;

/// Ready-queue contents over one interval between engine events, in ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Interval start.
    pub start: Ticks,
    /// Interval end.
    pub end: Ticks,
    /// `(job, remaining)` pairs in queue order.
    pub entries: Vec<(JobId, Ticks)>,
}

/// Records ready-queue snapshots for downstream reporting.
///
/// Strictly observational: nothing in the engine reads snapshots back.
/// Intervals where the queue is empty are skipped, and the recorder is
/// disabled entirely under policies without a quantum.
#[derive(Debug)]
pub struct QueueRecorder {
    enabled: bool,
    snapshots: Vec<Snapshot>,
}

impl QueueRecorder {
    /// Creates a recorder. A disabled recorder ignores every `record` call.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            snapshots: Vec::new(),
        }
    }

    /// Whether `record` captures anything.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Captures the queue contents over `[start, end)`.
    pub fn record(&mut self, start: Ticks, end: Ticks, queue: &ReadyQueue) {
        if !self.enabled || queue.is_empty() {
            return;
        }
        self.snapshots.push(Snapshot {
            start,
            end,
            entries: queue.contents(),
        });
    }

    /// Snapshots captured so far, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Consumes the recorder, yielding its snapshots.
    pub fn into_snapshots(self) -> Vec<Snapshot> {
        self.snapshots
    }
}
