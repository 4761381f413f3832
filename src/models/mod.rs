//! Scheduling domain models.
//!
//! Provides the data types for a single-core, non-preemptive CPU
//! scheduling problem and its solution.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | One unit of CPU work (burst, priority) |
//! | `ProcessSet` | Validated, immutable input in arrival order |
//! | `Schedule` | Execution timeline under one policy |
//! | `ScheduleEntry` | One process's start/finish/wait |

mod process;
mod process_set;
mod schedule;

pub use process::Process;
pub use process_set::{ProcessSet, ProcessSetInput};
pub use schedule::{Schedule, ScheduleEntry};
