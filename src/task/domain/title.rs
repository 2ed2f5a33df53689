//! Validated task title newtype.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trimmed task title with validated length bounds.
///
/// Validation happens at construction, before any persistence request is
/// issued; a title that fails the bounds never reaches the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Minimum length in characters, after trimming.
    pub const MIN_CHARS: usize = 3;

    /// Maximum length in characters, after trimming.
    pub const MAX_CHARS: usize = 50;

    /// Creates a validated title from raw input.
    ///
    /// The value is trimmed before its length is checked.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTitleLength`] when the trimmed
    /// value is shorter than [`Self::MIN_CHARS`] or longer than
    /// [`Self::MAX_CHARS`].
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        let length = trimmed.chars().count();
        if length < Self::MIN_CHARS || length > Self::MAX_CHARS {
            return Err(TaskDomainError::InvalidTitleLength(length));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
