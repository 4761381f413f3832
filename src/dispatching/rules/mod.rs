//! Built-in ordering rules.
//!
//! - **FCFS**: input (arrival) order
//! - **PRIORITY**: ascending priority value, ties by input order
//!
//! Every rule falls back to the process index so the comparator is a
//! total order.

use std::cmp::Ordering;

use super::OrderingRule;
use crate::models::Process;

/// First Come First Served.
///
/// All processes arrive at t=0, so arrival order is input order.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl OrderingRule for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn compare(&self, a: &Process, b: &Process) -> Ordering {
        a.index.cmp(&b.index)
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}

/// Non-preemptive priority.
///
/// Lower `priority` runs first. Equal priorities run in input order.
#[derive(Debug, Clone, Copy)]
pub struct PriorityFirst;

impl OrderingRule for PriorityFirst {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn compare(&self, a: &Process, b: &Process) -> Ordering {
        a.priority
            .cmp(&b.priority)
            .then_with(|| a.index.cmp(&b.index))
    }

    fn description(&self) -> &'static str {
        "Lowest priority value first, ties by input order"
    }
}
