//! Processor model and execution history.

use super::job::JobId;
use super::time::Ticks;

/// Processor identifier. Processors are numbered `0..processor_count` and
/// the pool is always iterated in ascending id order, so simultaneous
/// events resolve identically on every run.
pub type ProcessorId = usize;

/// One contiguous run of a job on a processor, in ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Job that ran.
    pub job: JobId,
    /// Tick the run began.
    pub start: Ticks,
    /// Tick the run ended.
    pub end: Ticks,
}

/// The binding a busy processor holds.
#[derive(Debug, Clone, Copy)]
struct RunningJob {
    /// Slot of the job in the engine's job table.
    slot: usize,
    job: JobId,
    /// Tick the current segment opened.
    segment_start: Ticks,
    /// Quantum budget left, tracked only under quantum policies.
    quantum_remaining: Option<Ticks>,
}

/// A single simulated processor.
///
/// Owns at most one running job and an append-only history of execution
/// [`Span`]s. The history is the processor's whole output: spans are only
/// ever appended, with strictly increasing start times, and never revised.
#[derive(Debug, Clone)]
pub struct Processor {
    /// Processor id.
    pub id: ProcessorId,
    current: Option<RunningJob>,
    history: Vec<Span>,
}

impl Processor {
    /// Creates an idle processor.
    pub fn new(id: ProcessorId) -> Self {
        Self {
            id,
            current: None,
            history: Vec::new(),
        }
    }

    /// Whether no job is bound.
    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    /// Slot of the running job in the engine's job table.
    pub fn current_slot(&self) -> Option<usize> {
        self.current.map(|run| run.slot)
    }

    /// Id of the running job.
    pub fn current_job(&self) -> Option<JobId> {
        self.current.map(|run| run.job)
    }

    /// Quantum budget left for the running job, if one is tracked.
    pub fn quantum_remaining(&self) -> Option<Ticks> {
        self.current.and_then(|run| run.quantum_remaining)
    }

    /// Binds a job and opens its segment at `now`.
    ///
    /// `quantum` is `None` under policies that run jobs unbounded.
    pub fn assign(&mut self, slot: usize, job: JobId, now: Ticks, quantum: Option<Ticks>) {
        debug_assert!(self.current.is_none(), "processor {} already busy", self.id);
        self.current = Some(RunningJob {
            slot,
            job,
            segment_start: now,
            quantum_remaining: quantum,
        });
    }

    /// Consumes quantum budget for the running job, if any is tracked.
    pub fn consume_quantum(&mut self, delta: Ticks) {
        if let Some(run) = &mut self.current {
            if let Some(quantum) = &mut run.quantum_remaining {
                *quantum -= delta;
            }
        }
    }

    /// Whether the tracked quantum budget has run out.
    pub fn quantum_expired(&self) -> bool {
        matches!(self.quantum_remaining(), Some(quantum) if quantum <= 0)
    }

    /// Closes the current segment at `end` and idles the processor.
    ///
    /// The finished span joins the history unless it is empty
    /// (`start == end`, a job displaced before it ran). Returns the
    /// released `(slot, job)` binding, or `None` if the processor was idle.
    pub fn close_segment(&mut self, end: Ticks) -> Option<(usize, JobId)> {
        let run = self.current.take()?;
        if run.segment_start < end {
            self.history.push(Span {
                job: run.job,
                start: run.segment_start,
                end,
            });
        }
        Some((run.slot, run.job))
    }

    /// Execution history, oldest span first.
    pub fn history(&self) -> &[Span] {
        &self.history
    }

    /// Consumes the processor, yielding its history.
    pub fn into_history(self) -> Vec<Span> {
        self.history
    }
}
