//! Non-preemptive single-core scheduler.
//!
//! # Algorithm
//!
//! 1. Order processes with the policy's rule (arrival: input order;
//!    priority: ascending priority, ties by index).
//! 2. Walk the order once with a time cursor starting at 0. Each process
//!    starts at the cursor, finishes `burst` later, and waits exactly its
//!    start time (all processes arrive at t=0).
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the timeline pass.

use tracing::{debug, trace};

use crate::dispatching::OrderingPolicy;
use crate::models::{ProcessSet, Schedule, ScheduleEntry};

/// Computes the execution timeline of `processes` under `policy`.
///
/// Total over any valid `ProcessSet`; cannot fail.
///
/// # Example
///
/// ```
/// use awt_schedule::dispatching::OrderingPolicy;
/// use awt_schedule::models::ProcessSet;
/// use awt_schedule::scheduler::compute_schedule;
///
/// let set = ProcessSet::new(&[10, 5, 8], &[2, 1, 3]).unwrap();
/// let schedule = compute_schedule(&set, OrderingPolicy::Priority);
/// assert_eq!(schedule.execution_order(), vec![2, 1, 3]);
/// assert_eq!(schedule.start_times(), vec![0, 5, 15]);
/// ```
pub fn compute_schedule(processes: &ProcessSet, policy: OrderingPolicy) -> Schedule {
    SequentialScheduler::new(policy).schedule(processes)
}

/// Process indices (1-based) in the order `policy` would run them.
pub fn execution_order(processes: &ProcessSet, policy: OrderingPolicy) -> Vec<usize> {
    policy.sort_indices(processes)
}

/// Run-to-completion scheduler bound to one ordering policy.
///
/// Stateless apart from the policy; one instance can schedule any number
/// of process sets, from any number of threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequentialScheduler {
    policy: OrderingPolicy,
}

impl SequentialScheduler {
    /// Creates a scheduler for `policy`.
    pub fn new(policy: OrderingPolicy) -> Self {
        Self { policy }
    }

    /// The policy this scheduler applies.
    pub fn policy(&self) -> OrderingPolicy {
        self.policy
    }

    /// Builds the schedule for `processes`.
    pub fn schedule(&self, processes: &ProcessSet) -> Schedule {
        let order = self.policy.sorted_processes(processes);

        let mut schedule = Schedule::new(self.policy);
        let mut cursor: i64 = 0;

        for process in order {
            let entry = ScheduleEntry::new(
                process.index,
                process.burst_duration,
                process.priority,
                cursor,
            );
            trace!(
                policy = %self.policy,
                process = process.index,
                start = entry.start_time,
                finish = entry.finish_time,
                "slot assigned"
            );
            cursor = entry.finish_time;
            schedule.add_entry(entry);
        }

        debug!(
            policy = %self.policy,
            rule = self.policy.rule().name(),
            processes = schedule.len(),
            makespan = cursor,
            "schedule computed"
        );

        schedule
    }
}

impl Default for SequentialScheduler {
    fn default() -> Self {
        Self::new(OrderingPolicy::Arrival)
    }
}
