//! Input and schedule validation.
//!
//! Checks structural integrity of raw process data before a `ProcessSet`
//! is built, and verifies that a schedule honors the timeline invariants
//! of non-preemptive single-core execution. Detects:
//! - Burst/priority length mismatches
//! - Empty process sets
//! - Non-positive burst durations
//! - Total work that overflows the `i64` timeline
//! - Schedules with gaps, overlaps, missing or repeated processes
//!
//! All checks collect every problem found instead of stopping at the first.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{ProcessSet, Schedule};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Burst durations and priorities have different lengths.
    LengthMismatch,
    /// No processes were supplied.
    EmptyProcessSet,
    /// A burst duration is zero or negative.
    NonPositiveBurst,
    /// Total burst duration does not fit the time representation.
    WorkOverflow,
    /// Schedule does not contain exactly one entry per process.
    ProcessCoverage,
    /// Schedule entry disagrees with the process it refers to.
    EntryMismatch,
    /// Timeline has a gap, an overlap, or a bad start.
    TimelineBreak,
    /// Waiting time differs from start time.
    WaitMismatch,
    /// Final finish time differs from the total burst duration.
    WorkNotConserved,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates raw process data.
///
/// Checks:
/// 1. `burst_durations` and `priorities` have the same length
/// 2. At least one process is present
/// 3. Every burst duration is strictly positive
/// 4. The sum of all burst durations fits in `i64`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(burst_durations: &[i64], priorities: &[i32]) -> ValidationResult {
    let mut errors = Vec::new();

    if burst_durations.len() != priorities.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::LengthMismatch,
            format!(
                "{} burst durations but {} priorities",
                burst_durations.len(),
                priorities.len()
            ),
        ));
    }

    if burst_durations.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "At least one process is required",
        ));
    }

    for (i, &burst) in burst_durations.iter().enumerate() {
        if burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process P{} has non-positive burst duration {burst}", i + 1),
            ));
        }
    }

    let total = burst_durations
        .iter()
        .filter(|&&burst| burst > 0)
        .try_fold(0i64, |acc, &burst| acc.checked_add(burst));
    if total.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::WorkOverflow,
            format!("Total burst duration exceeds {}", i64::MAX),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Verifies that `schedule` is a valid non-preemptive timeline for `processes`.
///
/// Checks:
/// 1. Every process appears exactly once and no unknown index appears
/// 2. Each entry's burst and priority match the process it names
/// 3. The first entry starts at 0 and each later entry starts when the previous one finishes
/// 4. `finish == start + burst` and `waiting == start` for every entry
/// 5. The last finish time equals the total burst duration
pub fn check_schedule(schedule: &Schedule, processes: &ProcessSet) -> ValidationResult {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for entry in &schedule.entries {
        match processes.get(entry.process_index) {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::ProcessCoverage,
                format!("Schedule references unknown process {}", entry.label()),
            )),
            Some(process) => {
                if !seen.insert(entry.process_index) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::ProcessCoverage,
                        format!("Process {} is scheduled more than once", entry.label()),
                    ));
                }
                if process.burst_duration != entry.burst_duration
                    || process.priority != entry.priority
                {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::EntryMismatch,
                        format!(
                            "Entry for {} has burst {} / priority {}, expected {} / {}",
                            entry.label(),
                            entry.burst_duration,
                            entry.priority,
                            process.burst_duration,
                            process.priority
                        ),
                    ));
                }
            }
        }
    }

    for process in processes.iter() {
        if !seen.contains(&process.index) {
            errors.push(ValidationError::new(
                ValidationErrorKind::ProcessCoverage,
                format!("Process {} is missing from the schedule", process.label()),
            ));
        }
    }

    let mut cursor: i64 = 0;
    for entry in &schedule.entries {
        let expected_finish = entry.start_time.checked_add(entry.burst_duration);
        if entry.start_time != cursor {
            errors.push(ValidationError::new(
                ValidationErrorKind::TimelineBreak,
                format!(
                    "{} starts at {} but the CPU frees up at {cursor}",
                    entry.label(),
                    entry.start_time
                ),
            ));
        }
        match expected_finish {
            Some(finish) if finish == entry.finish_time => {}
            Some(finish) => errors.push(ValidationError::new(
                ValidationErrorKind::TimelineBreak,
                format!(
                    "{} finishes at {} instead of {finish}",
                    entry.label(),
                    entry.finish_time
                ),
            )),
            None => errors.push(ValidationError::new(
                ValidationErrorKind::WorkOverflow,
                format!("{} runs past the end of the timeline", entry.label()),
            )),
        }
        if entry.waiting_time != entry.start_time {
            errors.push(ValidationError::new(
                ValidationErrorKind::WaitMismatch,
                format!(
                    "{} waits {} but starts at {}",
                    entry.label(),
                    entry.waiting_time,
                    entry.start_time
                ),
            ));
        }
        cursor = entry.finish_time;
    }

    if schedule.makespan() != processes.total_burst() {
        errors.push(ValidationError::new(
            ValidationErrorKind::WorkNotConserved,
            format!(
                "Schedule ends at {} but total work is {}",
                schedule.makespan(),
                processes.total_burst()
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::OrderingPolicy;
    use crate::models::ScheduleEntry;
    use crate::scheduler::compute_schedule;

    fn kinds(errors: &[ValidationError]) -> Vec<ValidationErrorKind> {
        errors.iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&[10, 5, 8], &[2, 1, 3]).is_ok());
        assert!(validate_input(&[1], &[-7]).is_ok());
    }

    #[test]
    fn test_length_mismatch() {
        let errors = validate_input(&[10, 5, 8], &[2, 1]).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::LengthMismatch]);
        assert!(errors[0].message.contains("3 burst durations"));
    }

    #[test]
    fn test_empty_input() {
        let errors = validate_input(&[], &[]).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::EmptyProcessSet]);
    }

    #[test]
    fn test_non_positive_burst() {
        let errors = validate_input(&[0, 5, -2], &[1, 2, 3]).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::NonPositiveBurst));
        assert!(errors[0].message.contains("P1"));
        assert!(errors[1].message.contains("P3"));
    }

    #[test]
    fn test_multiple_errors() {
        // Mismatch + zero burst
        let errors = validate_input(&[0, 5], &[1]).unwrap_err();
        assert!(errors.len() >= 2);
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::LengthMismatch));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveBurst));
    }

    #[test]
    fn test_total_work_overflow() {
        let errors = validate_input(&[i64::MAX, 1], &[1, 2]).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::WorkOverflow]);

        // A single maximal burst still fits
        assert!(validate_input(&[i64::MAX], &[1]).is_ok());
        // Non-positive bursts are reported on their own, not as overflow
        let errors = validate_input(&[i64::MAX, -1], &[1, 2]).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::NonPositiveBurst]);
    }

    #[test]
    fn test_computed_schedules_pass_check() {
        let set = ProcessSet::new(&[10, 5, 8], &[2, 1, 3]).unwrap();
        for policy in OrderingPolicy::ALL {
            let schedule = compute_schedule(&set, policy);
            assert!(check_schedule(&schedule, &set).is_ok(), "{policy:?}");
        }
    }

    #[test]
    fn test_check_detects_gap() {
        let set = ProcessSet::new(&[4, 4], &[1, 2]).unwrap();
        let mut schedule = compute_schedule(&set, OrderingPolicy::Arrival);
        schedule.entries[1].start_time = 5;
        schedule.entries[1].finish_time = 9;
        schedule.entries[1].waiting_time = 5;

        let errors = check_schedule(&schedule, &set).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::TimelineBreak));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::WorkNotConserved));
    }

    #[test]
    fn test_check_detects_wait_mismatch() {
        let set = ProcessSet::new(&[4, 4], &[1, 2]).unwrap();
        let mut schedule = compute_schedule(&set, OrderingPolicy::Arrival);
        schedule.entries[1].waiting_time = 0;

        let errors = check_schedule(&schedule, &set).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::WaitMismatch]);
    }

    #[test]
    fn test_check_detects_missing_and_duplicate() {
        let set = ProcessSet::new(&[3, 3], &[1, 2]).unwrap();
        let mut schedule = Schedule::new(OrderingPolicy::Arrival);
        schedule.add_entry(ScheduleEntry::new(1, 3, 1, 0));
        schedule.add_entry(ScheduleEntry::new(1, 3, 1, 3));

        let errors = check_schedule(&schedule, &set).unwrap_err();
        let coverage: Vec<_> = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::ProcessCoverage)
            .collect();
        assert_eq!(coverage.len(), 2); // P1 twice, P2 missing
    }

    #[test]
    fn test_check_detects_unknown_process_and_mismatch() {
        let set = ProcessSet::new(&[3], &[1]).unwrap();
        let mut schedule = Schedule::new(OrderingPolicy::Priority);
        schedule.add_entry(ScheduleEntry::new(1, 2, 1, 0));
        schedule.add_entry(ScheduleEntry::new(9, 1, 1, 2));

        let errors = check_schedule(&schedule, &set).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EntryMismatch));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ProcessCoverage && e.message.contains("P9")));
    }
}
