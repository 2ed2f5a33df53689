//! Identifier types for the task domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque unique identifier for a persisted task.
///
/// Identifiers are assigned by the persistence backend when a task is first
/// created; the client treats them as opaque strings and never fabricates an
/// identifier for a task it has not yet persisted. Exactly one task per
/// identifier exists in the store's collection at any time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Wraps a backend-assigned identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
