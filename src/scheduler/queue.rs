//! Ready queue of admitted, unfinished, unassigned jobs.

use crate::dispatching::{QueueDiscipline, QueueEntry};
use crate::models::time::Ticks;
use crate::models::JobId;

/// Ordered collection of jobs waiting for a processor.
///
/// Entries keep insertion order. Dispatch order comes from the active
/// [`QueueDiscipline`]: a stable first-minimum scan picks the entry with
/// the lowest score, so equal scores always resolve toward the
/// earliest-inserted entry.
#[derive(Debug, Default)]
pub struct ReadyQueue {
    entries: Vec<QueueEntry>,
    next_seq: u64,
}

impl ReadyQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no job is waiting.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of waiting jobs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Appends a job at the tail.
    pub fn push(&mut self, slot: usize, job: JobId, remaining: Ticks) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(QueueEntry::new(job, slot, remaining, seq));
    }

    /// The entry the discipline would dispatch next, without removing it.
    pub fn peek(&self, discipline: &dyn QueueDiscipline) -> Option<&QueueEntry> {
        self.select(discipline).map(|index| &self.entries[index])
    }

    /// Removes and returns the entry the discipline dispatches next.
    pub fn pop(&mut self, discipline: &dyn QueueDiscipline) -> Option<QueueEntry> {
        self.select(discipline).map(|index| self.entries.remove(index))
    }

    /// `(job, remaining)` pairs in queue order, for snapshot capture.
    pub fn contents(&self) -> Vec<(JobId, Ticks)> {
        self.entries
            .iter()
            .map(|entry| (entry.job, entry.remaining))
            .collect()
    }

    /// Index of the lowest-scored entry. Strict `<` keeps the scan stable:
    /// the earliest-inserted entry wins every tie.
    fn select(&self, discipline: &dyn QueueDiscipline) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, entry) in self.entries.iter().enumerate() {
            let score = discipline.evaluate(entry);
            match best {
                Some((_, best_score)) if score >= best_score => {}
                _ => best = Some((index, score)),
            }
        }
        best.map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules::{Fifo, ShortestRemaining};

    fn make_queue() -> ReadyQueue {
        let mut queue = ReadyQueue::new();
        queue.push(0, 1, 5000);
        queue.push(1, 2, 1500);
        queue.push(2, 3, 4000);
        queue
    }

    #[test]
    fn test_empty_queue() {
        let mut queue = ReadyQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert!(queue.peek(&Fifo).is_none());
        assert!(queue.pop(&Fifo).is_none());
    }

    #[test]
    fn test_fifo_pops_in_insertion_order() {
        let mut queue = make_queue();
        assert_eq!(queue.pop(&Fifo).unwrap().job, 1);
        assert_eq!(queue.pop(&Fifo).unwrap().job, 2);
        assert_eq!(queue.pop(&Fifo).unwrap().job, 3);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_shortest_remaining_pops_minimum() {
        let mut queue = make_queue();
        assert_eq!(queue.pop(&ShortestRemaining).unwrap().job, 2);
        assert_eq!(queue.pop(&ShortestRemaining).unwrap().job, 3);
        assert_eq!(queue.pop(&ShortestRemaining).unwrap().job, 1);
    }

    #[test]
    fn test_equal_scores_keep_insertion_order() {
        let mut queue = ReadyQueue::new();
        queue.push(0, 1, 2000);
        queue.push(1, 2, 2000);
        queue.push(2, 3, 2000);
        assert_eq!(queue.pop(&ShortestRemaining).unwrap().job, 1);
        assert_eq!(queue.pop(&ShortestRemaining).unwrap().job, 2);
        assert_eq!(queue.pop(&ShortestRemaining).unwrap().job, 3);
    }

    #[test]
    fn test_peek_does_not_remove() {
        let queue = make_queue();
        assert_eq!(queue.peek(&ShortestRemaining).unwrap().job, 2);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_reinserted_job_goes_to_tail() {
        let mut queue = make_queue();
        let entry = queue.pop(&Fifo).unwrap();
        queue.push(entry.slot, entry.job, entry.remaining);
        let order: Vec<u64> = queue.contents().iter().map(|(job, _)| *job).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn test_contents_reports_queue_order() {
        let queue = make_queue();
        assert_eq!(queue.contents(), vec![(1, 5000), (2, 1500), (3, 4000)]);
    }
}
