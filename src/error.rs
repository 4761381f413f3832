//! Error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Raised when raw process data cannot form a `ProcessSet`.
///
/// Carries every problem detected, not just the first.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid process input: {}", join_messages(.errors))]
pub struct InvalidInputError {
    /// Every problem detected in the input.
    pub errors: Vec<ValidationError>,
}

impl InvalidInputError {
    pub(crate) fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }
}

/// Errors from synthetic input generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("invalid generator config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
}

/// Unrecognized ordering policy name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown ordering policy '{0}' (expected arrival, fcfs, or priority)")]
pub struct ParsePolicyError(pub String);

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
