//! Process set model.
//!
//! An ordered, immutable collection of processes in input (arrival) order.
//! Construction is the only validation boundary: once a `ProcessSet`
//! exists, scheduling over it cannot fail.

use serde::{Deserialize, Serialize};

use super::Process;
use crate::error::InvalidInputError;
use crate::validation::validate_input;

/// An ordered collection of `N ≥ 1` processes with positive bursts.
///
/// Deserialization goes through the same checks as [`ProcessSet::new`].
///
/// # Example
/// ```
/// use awt_schedule::models::ProcessSet;
///
/// let set = ProcessSet::new(&[10, 5, 8], &[2, 1, 3]).unwrap();
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.total_burst(), 23);
/// assert!(ProcessSet::new(&[0, 5], &[1, 2]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProcessSetInput", into = "ProcessSetInput")]
pub struct ProcessSet {
    processes: Vec<Process>,
}

/// Wire form of a process set: two parallel sequences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessSetInput {
    /// Burst duration per process, in input order.
    pub burst_durations: Vec<i64>,
    /// Priority per process, in input order.
    pub priorities: Vec<i32>,
}

impl ProcessSet {
    /// Builds a process set from parallel burst/priority sequences.
    ///
    /// Process `i` (0-based) gets index `i + 1`.
    ///
    /// # Errors
    /// `InvalidInputError` if the lengths differ, the input is empty, any
    /// burst duration is not positive, or the total burst overflows `i64`.
    pub fn new(burst_durations: &[i64], priorities: &[i32]) -> Result<Self, InvalidInputError> {
        validate_input(burst_durations, priorities).map_err(InvalidInputError::new)?;

        let processes = burst_durations
            .iter()
            .zip(priorities)
            .enumerate()
            .map(|(i, (&burst, &priority))| Process::new(i + 1, burst, priority))
            .collect();

        Ok(Self { processes })
    }

    /// Number of processes (always ≥ 1).
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the set has no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Processes in input order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Iterates processes in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.processes.iter()
    }

    /// Looks up a process by its 1-based index.
    pub fn get(&self, index: usize) -> Option<&Process> {
        index
            .checked_sub(1)
            .and_then(|i| self.processes.get(i))
    }

    /// Sum of all burst durations.
    pub fn total_burst(&self) -> i64 {
        self.processes.iter().map(|p| p.burst_duration).sum()
    }

    /// Smallest burst duration.
    pub fn min_burst(&self) -> i64 {
        self.processes
            .iter()
            .map(|p| p.burst_duration)
            .min()
            .unwrap_or(0)
    }

    /// Burst durations in input order.
    pub fn burst_durations(&self) -> Vec<i64> {
        self.processes.iter().map(|p| p.burst_duration).collect()
    }

    /// Priorities in input order.
    pub fn priorities(&self) -> Vec<i32> {
        self.processes.iter().map(|p| p.priority).collect()
    }

    /// Whether no two processes share a priority value.
    pub fn has_unique_priorities(&self) -> bool {
        let mut seen = std::collections::HashSet::with_capacity(self.processes.len());
        self.processes.iter().all(|p| seen.insert(p.priority))
    }
}

impl<'a> IntoIterator for &'a ProcessSet {
    type Item = &'a Process;
    type IntoIter = std::slice::Iter<'a, Process>;

    fn into_iter(self) -> Self::IntoIter {
        self.processes.iter()
    }
}

impl TryFrom<ProcessSetInput> for ProcessSet {
    type Error = InvalidInputError;

    fn try_from(input: ProcessSetInput) -> Result<Self, Self::Error> {
        Self::new(&input.burst_durations, &input.priorities)
    }
}

impl From<ProcessSet> for ProcessSetInput {
    fn from(set: ProcessSet) -> Self {
        Self {
            burst_durations: set.burst_durations(),
            priorities: set.priorities(),
        }
    }
}
