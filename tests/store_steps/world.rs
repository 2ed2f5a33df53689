//! Shared world state for task board BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskdeck::task::{
    adapters::memory::InMemoryTaskClient,
    domain::{Task, TaskId},
    services::{StoreError, TaskStore},
};

/// Store type used by the BDD world.
pub type TestTaskStore = TaskStore<InMemoryTaskClient, DefaultClock>;

/// Scenario world for task board behaviour tests.
pub struct StoreWorld {
    pub client: InMemoryTaskClient,
    pub store: TestTaskStore,
    pub tracked_id: Option<TaskId>,
    pub last_create_result: Option<Result<Task, StoreError>>,
    pub last_update_result: Option<Result<Task, StoreError>>,
    pub last_fetch_result: Option<Result<(), StoreError>>,
}

impl StoreWorld {
    /// Creates a world over an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        let client = InMemoryTaskClient::new();
        let store = TaskStore::new(Arc::new(client.clone()), Arc::new(DefaultClock));
        Self {
            client,
            store,
            tracked_id: None,
            last_create_result: None,
            last_update_result: None,
            last_fetch_result: None,
        }
    }
}

impl Default for StoreWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> StoreWorld {
    StoreWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
