//! Process model.
//!
//! A process is a unit of CPU work identified by its position in the input
//! sequence. It occupies the single CPU for its whole burst once started.
//!
//! # Time Representation
//! All times are integer time units relative to t=0. Every process is
//! available at t=0; there is no arrival-time variation.

use serde::{Deserialize, Serialize};

/// A process to be scheduled on the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// 1-based position in the input sequence. Also the display label (`P{index}`).
    pub index: usize,
    /// CPU time required once scheduled. Always positive inside a `ProcessSet`.
    pub burst_duration: i64,
    /// Scheduling priority (lower = scheduled earlier).
    pub priority: i32,
}

impl Process {
    /// Creates a new process.
    pub fn new(index: usize, burst_duration: i64, priority: i32) -> Self {
        Self {
            index,
            burst_duration,
            priority,
        }
    }

    /// Display label, e.g. `P3`.
    pub fn label(&self) -> String {
        format!("P{}", self.index)
    }
}
