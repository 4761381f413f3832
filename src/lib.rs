//! Single-core, non-preemptive CPU scheduling with average waiting time.
//!
//! Computes the timeline and average waiting time (AWT) of a process set
//! under two disciplines: arrival order (FCFS) and priority order (lower
//! priority value first, ties by input order). All processes arrive at t=0.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessSet`, `Schedule`, `ScheduleEntry`
//! - **`validation`**: Input checks and schedule invariant verification
//! - **`dispatching`**: `OrderingPolicy` and its `OrderingRule` comparators
//! - **`scheduler`**: `compute_schedule`, AWT/KPI aggregation, policy comparison
//! - **`generation`**: Random and range synthetic input behind an injected RNG
//! - **`error`**: `InvalidInputError`, `GeneratorError`, `ParsePolicyError`
//!
//! # Example
//!
//! ```
//! use awt_schedule::models::ProcessSet;
//! use awt_schedule::scheduler::compare_policies;
//!
//! let set = ProcessSet::new(&[10, 5, 8], &[2, 1, 3]).unwrap();
//! let report = compare_policies(&set);
//!
//! assert_eq!(report.schedule_arrival.start_times(), vec![0, 10, 15]);
//! assert_eq!(report.schedule_priority.execution_order(), vec![2, 1, 3]);
//! assert_eq!(report.awt_arrival.to_string(), "8.33");
//! assert_eq!(report.awt_priority.to_string(), "6.67");
//! ```
//!
//! # Logging
//!
//! Events are emitted through `tracing` at `debug`/`trace` level. The crate
//! never installs a subscriber.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5 (CPU Scheduling)

pub mod dispatching;
pub mod error;
pub mod generation;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{GeneratorError, InvalidInputError, ParsePolicyError};
