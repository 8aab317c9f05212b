//! Job registry: normalizes input jobs into per-run simulation state.

use crate::models::{Job, JobInstance};

/// Builds the engine's job table from validated input.
///
/// Boundary times are quantized to ticks here, exactly once. Instances are
/// stable-sorted by arrival time, so simultaneous arrivals enter the ready
/// queue in input order; result reports are keyed by id and keep input
/// order regardless.
pub fn build_instances(jobs: &[Job]) -> Vec<JobInstance> {
    let mut instances: Vec<JobInstance> = jobs.iter().map(JobInstance::new).collect();
    instances.sort_by_key(|instance| instance.arrival);
    instances
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instances_sorted_by_arrival() {
        let jobs = vec![
            Job::new(1, 4.0, 1.0),
            Job::new(2, 0.0, 1.0),
            Job::new(3, 2.0, 1.0),
        ];
        let instances = build_instances(&jobs);
        let order: Vec<u64> = instances.iter().map(|instance| instance.id).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn test_simultaneous_arrivals_keep_input_order() {
        let jobs = vec![
            Job::new(10, 1.0, 2.0),
            Job::new(20, 1.0, 8.0),
            Job::new(30, 1.0, 5.0),
        ];
        let instances = build_instances(&jobs);
        let order: Vec<u64> = instances.iter().map(|instance| instance.id).collect();
        assert_eq!(order, vec![10, 20, 30]);
    }

    #[test]
    fn test_times_quantized_once() {
        let instances = build_instances(&[Job::new(1, 2.5, 1.5)]);
        assert_eq!(instances[0].arrival, 2500);
        assert_eq!(instances[0].burst, 1500);
        assert_eq!(instances[0].remaining, 1500);
    }

    #[test]
    fn test_tiny_burst_still_runs_one_tick() {
        let instances = build_instances(&[Job::new(1, 0.0, 0.0001)]);
        assert_eq!(instances[0].burst, 1);
    }
}
