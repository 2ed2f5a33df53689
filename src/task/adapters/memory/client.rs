//! Thread-safe in-memory task backend for tests and demos.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::task::domain::{NewTask, PersistedTaskData, Task, TaskId};
use crate::task::ports::{TaskClient, TaskClientError, TaskClientResult, TaskPatch};

/// Fake task backend mimicking the remote CRUD resource.
///
/// Assigns identifiers on create, merges patch payloads into stored tasks,
/// rejects unknown ids with a 404-style error, and can be switched into a
/// failing mode in which every request is rejected — used to drive the
/// store's rejection paths in tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskClient {
    tasks: Arc<RwLock<Vec<Task>>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryTaskClient {
    /// Creates an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend pre-populated with the given tasks.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(tasks)),
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Switches the backend into (or out of) a failing mode in which every
    /// request is rejected with a server error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_available(&self) -> TaskClientResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(TaskClientError::Rejected(500));
        }
        Ok(())
    }

    fn read_tasks(&self) -> TaskClientResult<std::sync::RwLockReadGuard<'_, Vec<Task>>> {
        self.tasks
            .read()
            .map_err(|err| TaskClientError::transport(std::io::Error::other(err.to_string())))
    }

    fn write_tasks(&self) -> TaskClientResult<std::sync::RwLockWriteGuard<'_, Vec<Task>>> {
        self.tasks
            .write()
            .map_err(|err| TaskClientError::transport(std::io::Error::other(err.to_string())))
    }
}

/// Applies a patch the way the backing CRUD store does: fields present in
/// the body replace the stored values, everything else is kept.
fn merge_patch(current: &Task, patch: &TaskPatch) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: current.id().clone(),
        title: patch
            .title()
            .cloned()
            .unwrap_or_else(|| current.title().clone()),
        status: patch.status().unwrap_or_else(|| current.status()),
        created_at: current.created_at(),
        updated_at: patch.updated_at().unwrap_or_else(|| current.updated_at()),
    })
}

#[async_trait]
impl TaskClient for InMemoryTaskClient {
    async fn list(&self) -> TaskClientResult<Vec<Task>> {
        self.check_available()?;
        Ok(self.read_tasks()?.clone())
    }

    async fn create(&self, draft: &NewTask) -> TaskClientResult<Task> {
        self.check_available()?;
        let task = Task::from_draft(TaskId::new(Uuid::new_v4().to_string()), draft);
        self.write_tasks()?.push(task.clone());
        Ok(task)
    }

    async fn patch(&self, id: &TaskId, patch: &TaskPatch) -> TaskClientResult<Task> {
        self.check_available()?;
        let mut tasks = self.write_tasks()?;
        let slot = tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or(TaskClientError::Rejected(404))?;
        let updated = merge_patch(slot, patch);
        *slot = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: &TaskId) -> TaskClientResult<()> {
        self.check_available()?;
        let mut tasks = self.write_tasks()?;
        let before = tasks.len();
        tasks.retain(|task| task.id() != id);
        if tasks.len() == before {
            return Err(TaskClientError::Rejected(404));
        }
        Ok(())
    }
}
