//! Client port for the remote task resource.

use crate::task::domain::{NewTask, Task, TaskId, TaskStatus, TaskTitle};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task client operations.
pub type TaskClientResult<T> = Result<T, TaskClientError>;

/// Remote persistence contract for the task resource.
///
/// The consumed API is a plain CRUD resource over tasks. Every failure is
/// opaque to callers: the store maps any rejection to a fixed per-operation
/// diagnostic and does not distinguish transport failures from server
/// failures.
#[async_trait]
pub trait TaskClient: Send + Sync {
    /// Fetches the entire task collection.
    async fn list(&self) -> TaskClientResult<Vec<Task>>;

    /// Persists a new task, returning the backend's canonical copy with its
    /// assigned identifier.
    async fn create(&self, draft: &NewTask) -> TaskClientResult<Task>;

    /// Persists a partial or full update, returning the backend's canonical
    /// copy.
    async fn patch(&self, id: &TaskId, patch: &TaskPatch) -> TaskClientResult<Task>;

    /// Removes the persisted task. No body is returned.
    async fn delete(&self, id: &TaskId) -> TaskClientResult<()>;
}

/// Partial update payload; unset fields are omitted from the wire body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<TaskTitle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

impl TaskPatch {
    /// Builds a status-change patch carrying the refreshed mutation stamp.
    #[must_use]
    pub const fn status_change(status: TaskStatus, updated_at: DateTime<Utc>) -> Self {
        Self {
            title: None,
            status: Some(status),
            updated_at: Some(updated_at),
        }
    }

    /// Builds a full-field patch from a task, stamped at issue time.
    #[must_use]
    pub fn replace(task: &Task, updated_at: DateTime<Utc>) -> Self {
        Self {
            title: Some(task.title().clone()),
            status: Some(task.status()),
            updated_at: Some(updated_at),
        }
    }

    /// Returns the patched title, if set.
    #[must_use]
    pub const fn title(&self) -> Option<&TaskTitle> {
        self.title.as_ref()
    }

    /// Returns the patched status, if set.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the patched mutation stamp, if set.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

/// Errors returned by task client implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskClientError {
    /// The request could not be delivered or the response could not be
    /// decoded.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The backend answered with a non-success status code.
    #[error("server rejected the request with status {0}")]
    Rejected(u16),
}

impl TaskClientError {
    /// Wraps a transport-level error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
