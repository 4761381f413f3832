//! Single-core schedulers and metrics.
//!
//! Builds run-to-completion timelines for an ordering policy and reduces
//! them to waiting-time metrics.
//!
//! # Algorithm
//!
//! `compute_schedule` sorts the process set with the policy's comparator
//! and walks it once, placing each process at the current time cursor.
//!
//! # Metrics
//!
//! `average_waiting_time` gives the exact AWT ratio. `ScheduleKpi` adds
//! turnaround, makespan and maximum wait. `compare_policies` runs both
//! policies and bundles the results.

mod kpi;
mod report;
mod sequential;

pub use kpi::{average_waiting_time, AverageWaitingTime, ScheduleKpi};
pub use report::{compare_policies, ComparativeReport};
pub use sequential::{compute_schedule, execution_order, SequentialScheduler};
