//! Schedule (solution) model.
//!
//! A schedule is the execution timeline produced by one ordering policy:
//! one entry per process, in the order the processes run on the CPU.
//! Because every process arrives at t=0 and runs to completion, an entry's
//! waiting time equals its start time.

use serde::{Deserialize, Serialize};

use crate::dispatching::OrderingPolicy;

/// A complete single-core timeline for one policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Policy that produced the execution order.
    pub policy: OrderingPolicy,
    /// Entries in execution order.
    pub entries: Vec<ScheduleEntry>,
}

/// One process's slot in the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// 1-based input index of the process.
    pub process_index: usize,
    /// Burst duration (copied from the process for renderers).
    pub burst_duration: i64,
    /// Priority (copied from the process for renderers).
    pub priority: i32,
    /// Time the process takes the CPU.
    pub start_time: i64,
    /// Time the process releases the CPU.
    pub finish_time: i64,
    /// Time spent ready but not running.
    pub waiting_time: i64,
}

impl ScheduleEntry {
    /// Creates an entry starting at `start_time`.
    ///
    /// Finish and waiting times follow from the zero-arrival model.
    pub fn new(process_index: usize, burst_duration: i64, priority: i32, start_time: i64) -> Self {
        Self {
            process_index,
            burst_duration,
            priority,
            start_time,
            finish_time: start_time + burst_duration,
            waiting_time: start_time,
        }
    }

    /// Display label, e.g. `P2`.
    pub fn label(&self) -> String {
        format!("P{}", self.process_index)
    }

    /// Turnaround time: finish minus arrival (arrival is always 0).
    #[inline]
    pub fn turnaround_time(&self) -> i64 {
        self.finish_time
    }
}

impl Schedule {
    /// Creates an empty schedule for `policy`.
    pub fn new(policy: OrderingPolicy) -> Self {
        Self {
            policy,
            entries: Vec::new(),
        }
    }

    /// Appends an entry.
    pub fn add_entry(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schedule has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Makespan: latest finish time.
    pub fn makespan(&self) -> i64 {
        self.entries.iter().map(|e| e.finish_time).max().unwrap_or(0)
    }

    /// Process indices in execution order.
    pub fn execution_order(&self) -> Vec<usize> {
        self.entries.iter().map(|e| e.process_index).collect()
    }

    /// Start times in execution order.
    pub fn start_times(&self) -> Vec<i64> {
        self.entries.iter().map(|e| e.start_time).collect()
    }

    /// Waiting times in execution order.
    pub fn waiting_times(&self) -> Vec<i64> {
        self.entries.iter().map(|e| e.waiting_time).collect()
    }

    /// Waiting times keyed back to input order (position `i` is process `i + 1`).
    ///
    /// Positions whose process is absent from the schedule hold 0.
    pub fn waiting_times_by_process(&self) -> Vec<i64> {
        let n = self
            .entries
            .iter()
            .map(|e| e.process_index)
            .max()
            .unwrap_or(0);
        let mut waits = vec![0; n];
        for e in &self.entries {
            if let Some(slot) = e.process_index.checked_sub(1).and_then(|i| waits.get_mut(i)) {
                *slot = e.waiting_time;
            }
        }
        waits
    }

    /// Sum of waiting times, in `i128` so it cannot overflow.
    pub fn total_waiting_time(&self) -> i128 {
        self.entries.iter().map(|e| i128::from(e.waiting_time)).sum()
    }

    /// Finds the entry for a process.
    pub fn entry_for_process(&self, process_index: usize) -> Option<&ScheduleEntry> {
        self.entries
            .iter()
            .find(|e| e.process_index == process_index)
    }

    /// Gantt tick positions: `0` followed by each finish time.
    pub fn time_marks(&self) -> Vec<i64> {
        std::iter::once(0)
            .chain(self.entries.iter().map(|e| e.finish_time))
            .collect()
    }
}
