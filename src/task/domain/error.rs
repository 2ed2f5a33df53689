//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is outside the permitted length bounds after trimming.
    #[error("task title must be between 3 and 50 characters, got {0}")]
    InvalidTitleLength(usize),
}

/// Error returned while parsing task status display labels.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status label: {0}")]
pub struct ParseTaskStatusError(pub String);
