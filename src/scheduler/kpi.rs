//! Schedule quality metrics (KPIs).
//!
//! Reduces a completed schedule to scalar performance indicators.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | AWT | sum(waiting) / N, kept as an exact ratio |
//! | Average Turnaround | mean(finish - arrival), arrival = 0 |
//! | Makespan | Latest finish time |
//! | Max Waiting | Largest single wait |

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dispatching::OrderingPolicy;
use crate::models::Schedule;

/// Average waiting time as an exact ratio `total_waiting / process_count`.
///
/// Comparison is by value, so `4/2 == 2/1`. A zero count is treated as 0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AverageWaitingTime {
    /// Sum of waiting times.
    pub total_waiting: i128,
    /// Number of processes.
    pub process_count: usize,
}

impl AverageWaitingTime {
    /// Creates a ratio.
    pub fn new(total_waiting: i128, process_count: usize) -> Self {
        Self {
            total_waiting,
            process_count,
        }
    }

    /// Floating-point value.
    pub fn value(&self) -> f64 {
        if self.process_count == 0 {
            return 0.0;
        }
        self.total_waiting as f64 / self.process_count as f64
    }

    /// Cross products `self.total * other.count` and `other.total * self.count`,
    /// or `None` if either does not fit in `i128`.
    fn cross(&self, other: &Self) -> Option<(i128, i128)> {
        let lhs = if self.process_count == 0 {
            0
        } else {
            let count = i128::try_from(other.process_count.max(1)).ok()?;
            self.total_waiting.checked_mul(count)?
        };
        let rhs = if other.process_count == 0 {
            0
        } else {
            let count = i128::try_from(self.process_count.max(1)).ok()?;
            other.total_waiting.checked_mul(count)?
        };
        Some((lhs, rhs))
    }
}

impl PartialEq for AverageWaitingTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for AverageWaitingTime {}

impl PartialOrd for AverageWaitingTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AverageWaitingTime {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.cross(other) {
            Some((lhs, rhs)) => lhs.cmp(&rhs),
            None => self.value().total_cmp(&other.value()),
        }
    }
}

impl fmt::Display for AverageWaitingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.value())
    }
}

/// Average waiting time of a schedule.
///
/// `N` is the schedule length. Pure; no division by zero is possible
/// (an empty schedule yields 0).
///
/// # Example
/// ```
/// use awt_schedule::dispatching::OrderingPolicy;
/// use awt_schedule::models::ProcessSet;
/// use awt_schedule::scheduler::{average_waiting_time, compute_schedule};
///
/// let set = ProcessSet::new(&[10, 5, 8], &[2, 1, 3]).unwrap();
/// let awt = average_waiting_time(&compute_schedule(&set, OrderingPolicy::Priority));
/// assert_eq!(awt.to_string(), "6.67");
/// ```
pub fn average_waiting_time(schedule: &Schedule) -> AverageWaitingTime {
    AverageWaitingTime::new(schedule.total_waiting_time(), schedule.len())
}

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Policy of the evaluated schedule.
    pub policy: OrderingPolicy,
    /// Average waiting time.
    pub average_waiting_time: AverageWaitingTime,
    /// Sum of waiting times.
    pub total_waiting_time: i128,
    /// Longest single wait.
    pub max_waiting_time: i64,
    /// Mean finish time (turnaround with arrival at 0).
    pub average_turnaround_time: f64,
    /// Latest finish time.
    pub makespan: i64,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let total_turnaround: i128 = schedule
            .entries
            .iter()
            .map(|e| i128::from(e.turnaround_time()))
            .sum();
        let average_turnaround_time = if schedule.is_empty() {
            0.0
        } else {
            total_turnaround as f64 / schedule.len() as f64
        };

        Self {
            policy: schedule.policy,
            average_waiting_time: average_waiting_time(schedule),
            total_waiting_time: schedule.total_waiting_time(),
            max_waiting_time: schedule
                .entries
                .iter()
                .map(|e| e.waiting_time)
                .max()
                .unwrap_or(0),
            average_turnaround_time,
            makespan: schedule.makespan(),
        }
    }
}
