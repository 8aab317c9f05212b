//! Event-driven scheduling engine.
//!
//! A single engine drives every policy. The policy contributes a queue
//! discipline, a preemption strategy, and an optional time quantum; the
//! loop itself never branches on the policy name.
//!
//! # Algorithm
//!
//! Each iteration:
//!
//! 1. **Admission**: jobs whose arrival time has been reached enter the
//!    ready queue, in arrival order, exactly once.
//! 2. **Preemption** (continuous SRTF only): a queued job with strictly
//!    smaller remaining time seizes a busy processor; the displaced job
//!    re-enters the queue at the tail.
//! 3. **Dispatch**: idle processors take queued jobs per the discipline.
//! 4. **Advance**: the clock jumps to the nearest upcoming event. For each
//!    busy processor that is completion or quantum expiry, whichever comes
//!    first; for pending jobs, the next arrival; under continuous SRTF also
//!    the next whole time unit, which bounds how long a preemption decision
//!    can wait on an otherwise quiet system.
//! 5. **Resolution**: finished jobs are stamped and released; expired
//!    quanta send the running job back to the queue tail. Completion is
//!    checked before expiry, so a job finishing exactly on its quantum
//!    boundary is done, not re-enqueued.
//!
//! Processors are visited in ascending id order at every step, and the
//! queue breaks ties toward earlier insertion, so simultaneous events
//! resolve identically on every run. Every advance is at least one tick,
//! so the loop terminates once all jobs have consumed their burst.

use tracing::debug;

use super::queue::ReadyQueue;
use super::recorder::QueueRecorder;
use super::registry;
use crate::dispatching::{self, PreemptionCheck, QueueDiscipline, QueueEntry};
use crate::models::time::{duration_to_ticks, ticks_to_units, Ticks, TICKS_PER_UNIT};
use crate::models::{
    Job, JobInstance, JobReport, Processor, ProcessorReport, QueueSnapshot, QueueSnapshotEntry,
    Segment, SimConfig, SimulationResult,
};
use crate::validation::{validate_input, ValidationError};

/// Runs one simulation to completion.
///
/// Validates the configuration and jobs, then computes the full execution
/// trace. The run is synchronous and deterministic: identical input
/// produces identical output.
///
/// # Errors
///
/// Returns every detected input violation. The engine never starts on
/// malformed input.
///
/// # Example
///
/// ```
/// use u_cpusim::models::{Job, Policy, SimConfig};
/// use u_cpusim::scheduler::simulate;
///
/// let config = SimConfig::new(Policy::Srtf, 1);
/// let jobs = vec![Job::new(1, 0.0, 3.0)];
///
/// let result = simulate(&config, &jobs).unwrap();
/// assert_eq!(result.jobs[0].end_time, 3.0);
/// assert_eq!(result.jobs[0].turnaround_time, 3.0);
/// ```
pub fn simulate(
    config: &SimConfig,
    jobs: &[Job],
) -> Result<SimulationResult, Vec<ValidationError>> {
    validate_input(config, jobs)?;
    Ok(SimulationEngine::new(config, jobs).run())
}

/// Event-driven state machine for one simulation run.
///
/// Owns every piece of run state; nothing is shared or global, so repeated
/// runs of the same input are independent.
#[derive(Debug)]
pub struct SimulationEngine {
    /// Submitted jobs, kept for echoing raw values into the report.
    input: Vec<Job>,
    /// Job table, arrival-sorted. Queue entries and processor bindings
    /// reference jobs by slot index into this table.
    jobs: Vec<JobInstance>,
    processors: Vec<Processor>,
    queue: ReadyQueue,
    recorder: QueueRecorder,
    discipline: Box<dyn QueueDiscipline>,
    preemption: PreemptionCheck,
    /// Quantum in ticks, `None` under policies that run jobs unbounded.
    quantum: Option<Ticks>,
    now: Ticks,
}

impl SimulationEngine {
    /// Builds an engine for validated input.
    pub fn new(config: &SimConfig, jobs: &[Job]) -> Self {
        let quantum = config
            .policy
            .uses_quantum()
            .then(|| duration_to_ticks(config.quantum));
        Self {
            input: jobs.to_vec(),
            jobs: registry::build_instances(jobs),
            processors: (0..config.processor_count).map(Processor::new).collect(),
            queue: ReadyQueue::new(),
            recorder: QueueRecorder::new(config.policy.records_queue()),
            discipline: dispatching::discipline_for(config.policy),
            preemption: dispatching::preemption_for(config.policy),
            quantum,
            now: 0,
        }
    }

    /// Runs the loop to completion and assembles the result.
    pub fn run(mut self) -> SimulationResult {
        debug!(
            "starting simulation: {} jobs, {} processors, discipline {}",
            self.jobs.len(),
            self.processors.len(),
            self.discipline.name()
        );
        while self.has_pending_work() {
            self.admit_arrivals();
            if self.preemption == PreemptionCheck::ShorterJobImmediate {
                self.preempt_running_jobs();
            }
            self.dispatch_to_idle();

            // With pending work an event always exists; the break mirrors
            // the loop's structural guarantee rather than a reachable state.
            let Some(next) = self.next_event_time() else {
                break;
            };
            let interval_start = self.now;
            self.advance_to(next);
            self.recorder.record(interval_start, self.now, &self.queue);
            self.resolve();
        }
        debug!("simulation finished at t={}", ticks_to_units(self.now));
        self.into_result()
    }

    /// Whether any job still needs CPU time or is waiting or running.
    fn has_pending_work(&self) -> bool {
        self.jobs.iter().any(|job| !job.is_finished())
            || !self.queue.is_empty()
            || self.processors.iter().any(|processor| !processor.is_idle())
    }

    /// Moves every arrived, unadmitted job into the ready queue.
    fn admit_arrivals(&mut self) {
        for slot in 0..self.jobs.len() {
            if self.jobs[slot].is_admitted() || self.jobs[slot].arrival > self.now {
                continue;
            }
            self.jobs[slot].admit();
            let (job, remaining) = (self.jobs[slot].id, self.jobs[slot].remaining);
            self.queue.push(slot, job, remaining);
            debug!("job {} admitted at t={}", job, ticks_to_units(self.now));
        }
    }

    /// Lets a strictly shorter queued job seize each busy processor.
    ///
    /// The displaced job keeps its remaining time and re-enters the queue
    /// at the tail; its interrupted span joins the processor history.
    fn preempt_running_jobs(&mut self) {
        for index in 0..self.processors.len() {
            if self.queue.is_empty() {
                return;
            }
            let Some(slot) = self.processors[index].current_slot() else {
                continue;
            };
            let running_remaining = self.jobs[slot].remaining;
            let best_remaining = self
                .queue
                .peek(self.discipline.as_ref())
                .map(|entry| entry.remaining);
            if !matches!(best_remaining, Some(remaining) if remaining < running_remaining) {
                continue;
            }
            let Some(entry) = self.queue.pop(self.discipline.as_ref()) else {
                continue;
            };
            if let Some((displaced_slot, displaced_job)) = self.processors[index].close_segment(self.now)
            {
                let remaining = self.jobs[displaced_slot].remaining;
                self.queue.push(displaced_slot, displaced_job, remaining);
                debug!(
                    "job {} preempted by job {} on processor {} at t={}",
                    displaced_job,
                    entry.job,
                    index,
                    ticks_to_units(self.now)
                );
            }
            self.dispatch(index, entry);
        }
    }

    /// Fills idle processors from the queue, ascending processor id.
    fn dispatch_to_idle(&mut self) {
        for index in 0..self.processors.len() {
            if !self.processors[index].is_idle() {
                continue;
            }
            let Some(entry) = self.queue.pop(self.discipline.as_ref()) else {
                break;
            };
            self.dispatch(index, entry);
        }
    }

    /// Binds a dequeued job to a processor with a fresh quantum budget.
    fn dispatch(&mut self, index: usize, entry: QueueEntry) {
        self.jobs[entry.slot].mark_started(self.now);
        self.processors[index].assign(entry.slot, entry.job, self.now, self.quantum);
        debug!(
            "job {} dispatched to processor {} at t={}",
            entry.job,
            index,
            ticks_to_units(self.now)
        );
    }

    /// Nearest upcoming event, or `None` when nothing can happen anymore.
    fn next_event_time(&self) -> Option<Ticks> {
        let mut next: Option<Ticks> = None;

        for processor in &self.processors {
            let Some(slot) = processor.current_slot() else {
                continue;
            };
            let mut bound = self.jobs[slot].remaining;
            if let Some(quantum) = processor.quantum_remaining() {
                bound = bound.min(quantum);
            }
            next = min_event(next, self.now + bound);
        }

        // The table is arrival-sorted and admission drained everything due,
        // so the first unadmitted job is the earliest future arrival.
        if let Some(pending) = self.jobs.iter().find(|job| !job.is_admitted()) {
            next = min_event(next, pending.arrival);
        }

        if self.preemption == PreemptionCheck::ShorterJobImmediate
            && self.processors.iter().any(|processor| !processor.is_idle())
        {
            next = min_event(next, self.now + TICKS_PER_UNIT);
        }

        next
    }

    /// Consumes `next - now` ticks on every busy processor and moves the
    /// clock. Queued jobs are untouched.
    fn advance_to(&mut self, next: Ticks) {
        let delta = next - self.now;
        for index in 0..self.processors.len() {
            let Some(slot) = self.processors[index].current_slot() else {
                continue;
            };
            self.jobs[slot].consume(delta);
            self.processors[index].consume_quantum(delta);
        }
        self.now = next;
    }

    /// Closes out completions, then quantum expiries.
    fn resolve(&mut self) {
        for index in 0..self.processors.len() {
            let Some(slot) = self.processors[index].current_slot() else {
                continue;
            };
            if self.jobs[slot].is_finished() {
                self.jobs[slot].finish(self.now);
                self.processors[index].close_segment(self.now);
                debug!(
                    "job {} finished on processor {} at t={}",
                    self.jobs[slot].id,
                    index,
                    ticks_to_units(self.now)
                );
            } else if self.processors[index].quantum_expired() {
                if let Some((displaced_slot, job)) = self.processors[index].close_segment(self.now) {
                    let remaining = self.jobs[displaced_slot].remaining;
                    self.queue.push(displaced_slot, job, remaining);
                    debug!(
                        "quantum expired for job {} on processor {} at t={}",
                        job,
                        index,
                        ticks_to_units(self.now)
                    );
                }
            }
        }
    }

    /// Converts final engine state into the boundary result.
    fn into_result(self) -> SimulationResult {
        let SimulationEngine {
            input,
            jobs,
            processors,
            recorder,
            ..
        } = self;

        let job_reports = input
            .iter()
            .map(|job| {
                let instance = jobs.iter().find(|candidate| candidate.id == job.id);
                job_report(job, instance)
            })
            .collect();

        let processor_reports = processors
            .into_iter()
            .map(|processor| {
                let id = processor.id;
                let history = processor
                    .into_history()
                    .into_iter()
                    .map(|span| Segment {
                        job_id: span.job,
                        start_time: ticks_to_units(span.start),
                        end_time: ticks_to_units(span.end),
                    })
                    .collect();
                ProcessorReport { id, history }
            })
            .collect();

        let ready_queue_history = recorder
            .into_snapshots()
            .into_iter()
            .map(|snapshot| QueueSnapshot {
                start_time: ticks_to_units(snapshot.start),
                end_time: ticks_to_units(snapshot.end),
                entries: snapshot
                    .entries
                    .into_iter()
                    .map(|(job_id, remaining)| QueueSnapshotEntry {
                        job_id,
                        remaining_time: ticks_to_units(remaining),
                    })
                    .collect(),
            })
            .collect();

        SimulationResult {
            jobs: job_reports,
            processors: processor_reports,
            ready_queue_history,
        }
    }
}

fn min_event(current: Option<Ticks>, candidate: Ticks) -> Option<Ticks> {
    Some(current.map_or(candidate, |event| event.min(candidate)))
}

fn job_report(job: &Job, instance: Option<&JobInstance>) -> JobReport {
    JobReport {
        id: job.id,
        arrival_time: job.arrival_time,
        burst_time: job.burst_time,
        start_time: instance
            .and_then(|state| state.start)
            .map_or(0.0, ticks_to_units),
        end_time: instance
            .and_then(|state| state.end)
            .map_or(0.0, ticks_to_units),
        turnaround_time: instance
            .and_then(|state| state.turnaround())
            .map_or(0.0, ticks_to_units),
    }
}
