//! Task aggregate and creation payload.

use super::{TaskId, TaskStatus, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate: one persisted unit of work.
///
/// `created_at` is set once at creation and never mutated afterwards;
/// `updated_at` is refreshed on every successful mutation of the task's
/// fields, so `updated_at >= created_at` holds at all times. Wire field
/// names are camelCase, matching the consumed CRUD resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted workflow status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Builds the backend's canonical task for a create payload.
    ///
    /// Used by backends that assign identifiers on create: the draft's
    /// fields are adopted verbatim and paired with the assigned id.
    #[must_use]
    pub fn from_draft(id: TaskId, draft: &NewTask) -> Self {
        Self {
            id,
            title: draft.title().clone(),
            status: draft.status(),
            created_at: draft.created_at(),
            updated_at: draft.updated_at(),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the title with an already-validated value.
    ///
    /// The mutation stamp is refreshed when the edit is persisted; the store
    /// stamps outgoing updates with its injected clock.
    pub fn rename(&mut self, title: TaskTitle) {
        self.title = title;
    }

    /// Moves the task to a new workflow status.
    ///
    /// Any transition between the three statuses is permitted; gating the
    /// transition to [`TaskStatus::Done`] behind a user confirmation is a
    /// caller policy, not a domain rule.
    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }
}

/// Create payload: a task that has not been assigned an identifier yet.
///
/// Carries the full field set minus the id; the backend returns the
/// canonical copy with its assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    title: TaskTitle,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl NewTask {
    /// Creates a draft stamped with the current clock time.
    #[must_use]
    pub fn new(title: TaskTitle, status: TaskStatus, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            title,
            status,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Creates a draft with an explicit creation timestamp.
    ///
    /// Used when seeding demo data with backdated tasks; the mutation stamp
    /// starts equal to the creation timestamp.
    #[must_use]
    pub const fn from_parts(
        title: TaskTitle,
        status: TaskStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            title,
            status,
            created_at,
            updated_at: created_at,
        }
    }

    /// Returns the draft title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the draft workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the initial mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
