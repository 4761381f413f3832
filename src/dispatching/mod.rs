//! Ordering policies for single-core dispatching.
//!
//! An ordering policy decides the sequence in which processes take the
//! CPU. Each policy is backed by an [`OrderingRule`], an explicit total
//! comparator over processes.
//!
//! # Usage
//!
//! ```
//! use awt_schedule::dispatching::OrderingPolicy;
//! use awt_schedule::models::ProcessSet;
//!
//! let set = ProcessSet::new(&[10, 5, 8], &[2, 1, 3]).unwrap();
//! assert_eq!(OrderingPolicy::Arrival.sort_indices(&set), vec![1, 2, 3]);
//! assert_eq!(OrderingPolicy::Priority.sort_indices(&set), vec![2, 1, 3]);
//! ```

pub mod rules;

use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParsePolicyError;
use crate::models::{Process, ProcessSet};

/// A rule that orders processes for execution.
///
/// # Ordering Convention
/// `compare(a, b) == Less` means `a` runs before `b`. Implementations must
/// be total orders over processes with distinct indices, so the resulting
/// sequence never depends on sort stability.
pub trait OrderingRule: Send + Sync + Debug {
    /// Rule name (e.g., "FCFS").
    fn name(&self) -> &'static str;

    /// Compares two processes; `Less` = `a` executes first.
    fn compare(&self, a: &Process, b: &Process) -> Ordering;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Scheduling discipline used to build a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderingPolicy {
    /// Input order; priority ignored (FCFS).
    #[serde(alias = "fcfs")]
    Arrival,
    /// Ascending priority, ties by input index.
    Priority,
}

impl OrderingPolicy {
    /// Both policies, in report order.
    pub const ALL: [OrderingPolicy; 2] = [OrderingPolicy::Arrival, OrderingPolicy::Priority];

    /// The comparator backing this policy.
    pub fn rule(&self) -> &'static dyn OrderingRule {
        match self {
            Self::Arrival => &rules::Fcfs,
            Self::Priority => &rules::PriorityFirst,
        }
    }

    /// Canonical lowercase name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Arrival => "arrival",
            Self::Priority => "priority",
        }
    }

    /// Returns the processes in execution order.
    ///
    /// Uses `slice::sort_by`, which is guaranteed stable.
    pub fn sorted_processes<'a>(&self, processes: &'a ProcessSet) -> Vec<&'a Process> {
        let rule = self.rule();
        let mut order: Vec<&Process> = processes.iter().collect();
        order.sort_by(|a, b| rule.compare(a, b));
        order
    }

    /// Returns 1-based process indices in execution order.
    pub fn sort_indices(&self, processes: &ProcessSet) -> Vec<usize> {
        self.sorted_processes(processes)
            .into_iter()
            .map(|p| p.index)
            .collect()
    }
}

impl fmt::Display for OrderingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderingPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "arrival" | "fcfs" | "fifo" => Ok(Self::Arrival),
            "priority" | "prio" => Ok(Self::Priority),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}
