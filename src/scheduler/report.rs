//! Side-by-side comparison of arrival and priority scheduling.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::kpi::{average_waiting_time, AverageWaitingTime};
use super::sequential::compute_schedule;
use crate::dispatching::OrderingPolicy;
use crate::models::{ProcessSet, Schedule};

/// Both schedules and both AWTs for one process set.
///
/// Handed as a unit to display collaborators (tables, Gantt charts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparativeReport {
    /// Arrival-order (FCFS) schedule.
    pub schedule_arrival: Schedule,
    /// AWT of the arrival-order schedule.
    pub awt_arrival: AverageWaitingTime,
    /// Priority-order schedule.
    pub schedule_priority: Schedule,
    /// AWT of the priority-order schedule.
    pub awt_priority: AverageWaitingTime,
}

/// Schedules `processes` under both policies and aggregates each.
///
/// # Example
/// ```
/// use awt_schedule::models::ProcessSet;
/// use awt_schedule::scheduler::compare_policies;
///
/// let set = ProcessSet::new(&[10, 5, 8], &[2, 1, 3]).unwrap();
/// let report = compare_policies(&set);
/// assert_eq!(report.awt_arrival.to_string(), "8.33");
/// assert_eq!(report.awt_priority.to_string(), "6.67");
/// ```
pub fn compare_policies(processes: &ProcessSet) -> ComparativeReport {
    let schedule_arrival = compute_schedule(processes, OrderingPolicy::Arrival);
    let schedule_priority = compute_schedule(processes, OrderingPolicy::Priority);
    let awt_arrival = average_waiting_time(&schedule_arrival);
    let awt_priority = average_waiting_time(&schedule_priority);

    debug!(
        processes = processes.len(),
        awt_arrival = %awt_arrival,
        awt_priority = %awt_priority,
        "policy comparison built"
    );

    ComparativeReport {
        schedule_arrival,
        awt_arrival,
        schedule_priority,
        awt_priority,
    }
}

impl ComparativeReport {
    /// Schedule for `policy`.
    pub fn schedule(&self, policy: OrderingPolicy) -> &Schedule {
        match policy {
            OrderingPolicy::Arrival => &self.schedule_arrival,
            OrderingPolicy::Priority => &self.schedule_priority,
        }
    }

    /// AWT for `policy`.
    pub fn awt(&self, policy: OrderingPolicy) -> AverageWaitingTime {
        match policy {
            OrderingPolicy::Arrival => self.awt_arrival,
            OrderingPolicy::Priority => self.awt_priority,
        }
    }

    /// Arrival AWT minus priority AWT. Positive when priority ordering waits less.
    pub fn awt_improvement(&self) -> f64 {
        self.awt_arrival.value() - self.awt_priority.value()
    }

    /// Policy with the strictly lower AWT, or `None` on a tie.
    pub fn better_policy(&self) -> Option<OrderingPolicy> {
        match self.awt_arrival.cmp(&self.awt_priority) {
            std::cmp::Ordering::Less => Some(OrderingPolicy::Arrival),
            std::cmp::Ordering::Greater => Some(OrderingPolicy::Priority),
            std::cmp::Ordering::Equal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_scenario() {
        let set = ProcessSet::new(&[10, 5, 8], &[2, 1, 3]).unwrap();
        let report = compare_policies(&set);

        assert_eq!(report.schedule_arrival.start_times(), vec![0, 10, 15]);
        assert_eq!(report.schedule_priority.start_times(), vec![0, 5, 15]);
        assert_eq!(report.awt_arrival, AverageWaitingTime::new(25, 3));
        assert_eq!(report.awt_priority, AverageWaitingTime::new(20, 3));
        assert!((report.awt_improvement() - 5.0 / 3.0).abs() < 1e-10);
        assert_eq!(report.better_policy(), Some(OrderingPolicy::Priority));
    }

    #[test]
    fn test_report_tie() {
        let set = ProcessSet::new(&[4, 4], &[1, 1]).unwrap();
        let report = compare_policies(&set);
        assert_eq!(report.awt_arrival, report.awt_priority);
        assert_eq!(report.better_policy(), None);
        assert_eq!(report.awt_improvement(), 0.0);
    }

    #[test]
    fn test_report_arrival_better() {
        // Priority pushes the long job first
        let set = ProcessSet::new(&[1, 30], &[2, 1]).unwrap();
        let report = compare_policies(&set);
        assert_eq!(report.better_policy(), Some(OrderingPolicy::Arrival));
        assert!(report.awt_improvement() < 0.0);
    }

    #[test]
    fn test_report_accessors() {
        let set = ProcessSet::new(&[3, 1], &[2, 1]).unwrap();
        let report = compare_policies(&set);
        for policy in OrderingPolicy::ALL {
            assert_eq!(report.schedule(policy).policy, policy);
            assert_eq!(report.awt(policy), average_waiting_time(report.schedule(policy)));
        }
    }

    #[test]
    fn test_report_serializes() {
        let set = ProcessSet::new(&[10, 5, 8], &[2, 1, 3]).unwrap();
        let report = compare_policies(&set);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["schedule_priority"]["policy"], "priority");
        assert_eq!(json["awt_arrival"]["total_waiting"], 25);
        let back: ComparativeReport = serde_json::from_value(json).unwrap();
        assert_eq!(back, report);
    }
}
