//! Task store: the in-memory authority for the task collection.

use crate::task::domain::{NewTask, Task, TaskDomainError, TaskId, TaskStatus, TaskTitle};
use crate::task::ports::{TaskClient, TaskClientError, TaskPatch};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

/// Result type for task store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by [`TaskStore`] operations.
///
/// Remote rejections carry one fixed human-readable message per operation
/// kind; the store records the same message as its current `error` string.
/// The rejected client error is kept as the source for diagnostics but the
/// store does not distinguish transport failures from server failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Client-side validation failed; no request was issued.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The collection fetch was rejected; the collection keeps its
    /// last-known value.
    #[error("Failed to fetch tasks")]
    FetchFailed(#[source] TaskClientError),

    /// A create request was rejected; no entry was added.
    #[error("Failed to create task")]
    CreateFailed(#[source] TaskClientError),

    /// An update request was rejected; the target entry is unchanged.
    #[error("Failed to update task")]
    UpdateFailed(#[source] TaskClientError),

    /// A delete request was rejected; the target entry remains present.
    #[error("Failed to delete task")]
    DeleteFailed(#[source] TaskClientError),

    /// The store's state lock was poisoned by a panicking thread.
    #[error("task store state is no longer accessible")]
    StatePoisoned,
}

/// Point-in-time view of the store state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSnapshot {
    /// Task collection in insertion order.
    pub items: Vec<Task>,
    /// True only while the initial full fetch is in flight.
    pub loading: bool,
    /// Fixed diagnostic message of the last rejected operation, if any.
    pub error: Option<String>,
}

#[derive(Debug, Default)]
struct StoreState {
    items: Vec<Task>,
    loading: bool,
    error: Option<String>,
}

/// Request payload for creating a task through the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    status: TaskStatus,
    created_at: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Creates a request for a new `To Do` task with the given title.
    ///
    /// The title is validated when the request reaches
    /// [`TaskStore::create`], before any persistence request is issued.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: TaskStatus::ToDo,
            created_at: None,
        }
    }

    /// Sets the initial workflow status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets an explicit creation timestamp.
    ///
    /// Used when seeding backdated demo data; regular creation stamps the
    /// task with the store's clock.
    #[must_use]
    pub const fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Returns the raw, not yet validated title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the initial workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the explicit creation timestamp, if set.
    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

/// Single source of truth for the task collection and its synchronization
/// state against the remote task resource.
///
/// Holds the collection in insertion order together with a `loading` flag
/// (raised only during the initial full fetch) and the fixed diagnostic of
/// the last rejected operation. Updates are pessimistic: no change is
/// applied to the collection until the backend confirms it, so a consumer
/// never renders a task the server might reject.
///
/// Operations are not queued or serialized against each other. The state
/// lock is held only while a completion is applied, never across a request,
/// so two in-flight mutations for the same task race and the completion
/// that resolves last wins. This mirrors the behaviour of the system this
/// core was derived from; serializing per-id operations would change
/// observable behaviour and is left as an enhancement option.
///
/// Gating sensitive transitions (marking a task [`TaskStatus::Done`],
/// deleting) behind an explicit user confirmation is the caller's
/// responsibility; the store performs any requested operation
/// unconditionally.
pub struct TaskStore<C, K>
where
    C: TaskClient,
    K: Clock + Send + Sync,
{
    client: Arc<C>,
    clock: Arc<K>,
    state: Arc<RwLock<StoreState>>,
}

impl<C, K> Clone for TaskStore<C, K>
where
    C: TaskClient,
    K: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            clock: Arc::clone(&self.clock),
            state: Arc::clone(&self.state),
        }
    }
}

impl<C, K> TaskStore<C, K>
where
    C: TaskClient,
    K: Clock + Send + Sync,
{
    /// Creates a store with an empty collection.
    #[must_use]
    pub fn new(client: Arc<C>, clock: Arc<K>) -> Self {
        Self {
            client,
            clock,
            state: Arc::new(RwLock::new(StoreState::default())),
        }
    }

    fn read_state(&self) -> StoreResult<RwLockReadGuard<'_, StoreState>> {
        self.state.read().map_err(|_| StoreError::StatePoisoned)
    }

    fn write_state(&self) -> StoreResult<RwLockWriteGuard<'_, StoreState>> {
        self.state.write().map_err(|_| StoreError::StatePoisoned)
    }

    /// Returns a point-in-time copy of the store state.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::StatePoisoned`] when the state lock is
    /// poisoned.
    pub fn snapshot(&self) -> StoreResult<StoreSnapshot> {
        let state = self.read_state()?;
        Ok(StoreSnapshot {
            items: state.items.clone(),
            loading: state.loading,
            error: state.error.clone(),
        })
    }

    /// Returns the task collection in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::StatePoisoned`] when the state lock is
    /// poisoned.
    pub fn items(&self) -> StoreResult<Vec<Task>> {
        Ok(self.read_state()?.items.clone())
    }

    /// True only while the initial full fetch is in flight.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::StatePoisoned`] when the state lock is
    /// poisoned.
    pub fn is_loading(&self) -> StoreResult<bool> {
        Ok(self.read_state()?.loading)
    }

    /// Returns the fixed diagnostic message of the last rejected operation.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::StatePoisoned`] when the state lock is
    /// poisoned.
    pub fn last_error(&self) -> StoreResult<Option<String>> {
        Ok(self.read_state()?.error.clone())
    }

    /// Records a rejection diagnostic and hands the error back.
    fn record_failure(&self, failure: StoreError) -> StoreError {
        if let Ok(mut state) = self.state.write() {
            state.error = Some(failure.to_string());
        }
        failure
    }

    /// Replaces the collection with the backend's current state.
    ///
    /// While the request is pending, `loading` is raised and any previous
    /// diagnostic is cleared. On fulfilment the collection is replaced
    /// wholesale. On rejection the collection keeps its last-known value
    /// (empty on first load) and the fetch diagnostic is recorded.
    ///
    /// Intended to be called once at application start. Concurrent calls
    /// are not guarded against; the last response to resolve wins.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::FetchFailed`] when the backend rejects the
    /// request.
    pub async fn fetch_all(&self) -> StoreResult<()> {
        {
            let mut state = self.write_state()?;
            state.loading = true;
            state.error = None;
        }
        match self.client.list().await {
            Ok(tasks) => {
                let mut state = self.write_state()?;
                state.items = tasks;
                state.loading = false;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "task fetch rejected");
                let failure = StoreError::FetchFailed(err);
                let mut state = self.write_state()?;
                state.loading = false;
                state.error = Some(failure.to_string());
                Err(failure)
            }
        }
    }

    /// Validates and persists a new task, appending the backend's canonical
    /// copy — including the assigned identifier — to the collection once
    /// confirmed.
    ///
    /// There is no optimistic insert: the task does not appear in the
    /// collection until the backend acknowledges it, so a consumer never
    /// shows a task the server might reject.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Domain`] when the title fails validation — in
    /// that case no request is issued — or [`StoreError::CreateFailed`]
    /// when the backend rejects the request.
    pub async fn create(&self, request: CreateTaskRequest) -> StoreResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let created_at = request
            .created_at
            .unwrap_or_else(|| self.clock.utc());
        let draft = NewTask::from_parts(title, request.status, created_at);
        match self.client.create(&draft).await {
            Ok(task) => {
                tracing::debug!(id = %task.id(), "task created");
                let mut state = self.write_state()?;
                state.items.push(task.clone());
                Ok(task)
            }
            Err(err) => {
                tracing::warn!(error = %err, "task create rejected");
                Err(self.record_failure(StoreError::CreateFailed(err)))
            }
        }
    }

    /// Moves an existing task to a new workflow status.
    ///
    /// Issues a partial update carrying the status change and the refreshed
    /// mutation stamp. On fulfilment the matching entry is overwritten with
    /// the backend's returned representation — a full overwrite, not a
    /// merge; if the id has disappeared in the meantime (deleted
    /// concurrently) the completion is dropped.
    ///
    /// Callers gating the transition to [`TaskStatus::Done`] behind a user
    /// confirmation must obtain it before calling.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UpdateFailed`] when the backend rejects the
    /// request.
    pub async fn update_status(&self, id: &TaskId, status: TaskStatus) -> StoreResult<Task> {
        let patch = TaskPatch::status_change(status, self.clock.utc());
        self.apply_patch(id, &patch).await
    }

    /// Persists a full-field update of an existing task (title edits).
    ///
    /// The outgoing payload is stamped with the store's clock, so the
    /// backend's canonical copy carries a refreshed mutation timestamp.
    /// Reconciliation matches [`TaskStore::update_status`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UpdateFailed`] when the backend rejects the
    /// request.
    pub async fn update(&self, task: &Task) -> StoreResult<Task> {
        let patch = TaskPatch::replace(task, self.clock.utc());
        self.apply_patch(task.id(), &patch).await
    }

    async fn apply_patch(&self, id: &TaskId, patch: &TaskPatch) -> StoreResult<Task> {
        match self.client.patch(id, patch).await {
            Ok(updated) => {
                let mut state = self.write_state()?;
                state.items.iter_mut().find(|task| task.id() == id).map_or_else(
                    || tracing::debug!(%id, "patched task no longer present, dropping completion"),
                    |slot| *slot = updated.clone(),
                );
                Ok(updated)
            }
            Err(err) => {
                tracing::warn!(%id, error = %err, "task update rejected");
                Err(self.record_failure(StoreError::UpdateFailed(err)))
            }
        }
    }

    /// Deletes a task, removing the matching entry from the collection once
    /// the backend confirms; other entries keep their order.
    ///
    /// An id no longer present in the collection is not re-deleted: the
    /// call returns successfully without touching the transport, so
    /// repeated removal is idempotent.
    ///
    /// Callers gating deletion behind a user confirmation must obtain it
    /// before calling.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DeleteFailed`] when the backend rejects the
    /// request.
    pub async fn remove(&self, id: &TaskId) -> StoreResult<()> {
        {
            let state = self.read_state()?;
            if !state.items.iter().any(|task| task.id() == id) {
                return Ok(());
            }
        }
        match self.client.delete(id).await {
            Ok(()) => {
                let mut state = self.write_state()?;
                state.items.retain(|task| task.id() != id);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%id, error = %err, "task delete rejected");
                Err(self.record_failure(StoreError::DeleteFailed(err)))
            }
        }
    }
}
