//! Behavioural integration tests for [`TaskStore`] over the in-memory
//! backend.
//!
//! These tests exercise the store in realistic higher-level flows, verifying
//! that its collection stays reconciled with the backend across create,
//! update, delete, and refresh sequences.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code uses indexing after length checks"
)]
#![expect(
    clippy::cognitive_complexity,
    reason = "Test functions may have higher complexity for full scenario coverage"
)]
#![expect(
    clippy::shadow_unrelated,
    reason = "Test code reuses variable names for clarity in sequential assertions"
)]

use std::collections::HashSet;
use std::sync::Arc;

use mockable::DefaultClock;
use taskdeck::task::{
    adapters::memory::InMemoryTaskClient,
    domain::{NewTask, TaskId, TaskStatus, TaskTitle},
    ports::TaskClient,
    services::{CreateTaskRequest, TaskStore},
};
use tokio::runtime::Runtime;

/// Creates a tokio runtime for async operations in tests.
fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

fn new_store() -> (
    TaskStore<InMemoryTaskClient, DefaultClock>,
    InMemoryTaskClient,
) {
    let client = InMemoryTaskClient::new();
    let store = TaskStore::new(Arc::new(client.clone()), Arc::new(DefaultClock));
    (store, client)
}

/// Simulates a full task lifecycle: an empty board gains a task, the task
/// progresses to `Done`, and is finally removed.
#[test]
fn complete_task_lifecycle_through_store() {
    let rt = test_runtime();
    let (store, _) = new_store();

    rt.block_on(store.fetch_all()).expect("initial fetch");
    assert!(store.items().expect("items").is_empty());
    assert!(!store.is_loading().expect("loading flag"));

    // Create
    let created = rt
        .block_on(store.create(CreateTaskRequest::new("Write the project brief")))
        .expect("create");
    assert_eq!(created.status(), TaskStatus::ToDo);
    assert_eq!(created.created_at(), created.updated_at());

    let items = store.items().expect("items");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id(), created.id());

    // Progress to In Progress, then Done
    let in_progress = rt
        .block_on(store.update_status(created.id(), TaskStatus::InProgress))
        .expect("move to in progress");
    assert_eq!(in_progress.status(), TaskStatus::InProgress);

    let done = rt
        .block_on(store.update_status(created.id(), TaskStatus::Done))
        .expect("move to done");
    assert_eq!(done.status(), TaskStatus::Done);
    assert!(done.updated_at() > done.created_at());

    let items = store.items().expect("items");
    assert_eq!(items[0].status(), TaskStatus::Done);

    // Remove
    rt.block_on(store.remove(created.id())).expect("remove");
    assert!(store.items().expect("items").is_empty());
    assert_eq!(store.last_error().expect("error"), None);
}

/// After a mixed sequence of mutations, a fresh fetch returns exactly the
/// id set the store already holds.
#[test]
fn collection_matches_backend_after_mutation_sequence() {
    let rt = test_runtime();
    let (store, _) = new_store();

    let first = rt
        .block_on(store.create(CreateTaskRequest::new("First task")))
        .expect("create first");
    let second = rt
        .block_on(store.create(CreateTaskRequest::new("Second task")))
        .expect("create second");
    let third = rt
        .block_on(store.create(CreateTaskRequest::new("Third task")))
        .expect("create third");

    rt.block_on(store.update_status(second.id(), TaskStatus::Done))
        .expect("update second");
    rt.block_on(store.remove(first.id())).expect("remove first");

    let local_ids: HashSet<TaskId> = store
        .items()
        .expect("items")
        .iter()
        .map(|task| task.id().clone())
        .collect();

    rt.block_on(store.fetch_all()).expect("refresh");
    let fetched_ids: HashSet<TaskId> = store
        .items()
        .expect("items")
        .iter()
        .map(|task| task.id().clone())
        .collect();

    assert_eq!(local_ids, fetched_ids);
    assert_eq!(fetched_ids.len(), 2);
    assert!(fetched_ids.contains(second.id()));
    assert!(fetched_ids.contains(third.id()));
}

/// A fetch replaces the collection wholesale, adopting entries written by
/// another actor and dropping entries deleted behind the store's back.
#[test]
fn fetch_adopts_external_writes_wholesale() {
    let rt = test_runtime();
    let (store, client) = new_store();
    let clock = DefaultClock;

    let created = rt
        .block_on(store.create(CreateTaskRequest::new("Locally created task")))
        .expect("create");

    // Another actor deletes the local task and adds its own.
    rt.block_on(client.delete(created.id()))
        .expect("external delete");
    let title = TaskTitle::new("Externally created task").expect("valid title");
    let external = rt
        .block_on(client.create(&NewTask::new(title, TaskStatus::InProgress, &clock)))
        .expect("external create");

    rt.block_on(store.fetch_all()).expect("refresh");

    let items = store.items().expect("items");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id(), external.id());
    assert_eq!(items[0].status(), TaskStatus::InProgress);
}

/// Store clones share one state: a mutation through either clone is visible
/// through both.
#[test]
fn cloned_stores_share_state() {
    let rt = test_runtime();
    let (store, _) = new_store();
    let store_clone = store.clone();

    rt.block_on(store.create(CreateTaskRequest::new("From original")))
        .expect("create via original");
    let created = rt
        .block_on(store_clone.create(CreateTaskRequest::new("From clone")))
        .expect("create via clone");

    assert_eq!(store.items().expect("items").len(), 2);
    assert_eq!(store_clone.items().expect("items").len(), 2);

    rt.block_on(store_clone.remove(created.id()))
        .expect("remove via clone");
    assert_eq!(store.items().expect("items").len(), 1);
}

/// A rejected mutation leaves the collection untouched and records its fixed
/// diagnostic; recovery happens on the next successful fetch.
#[test]
fn rejection_then_recovery_flow() {
    let rt = test_runtime();
    let (store, client) = new_store();

    let created = rt
        .block_on(store.create(CreateTaskRequest::new("Flaky backend task")))
        .expect("create");

    client.set_failing(true);
    let failed_update = rt.block_on(store.update_status(created.id(), TaskStatus::Done));
    assert!(failed_update.is_err());
    assert_eq!(
        store.last_error().expect("error"),
        Some("Failed to update task".to_owned())
    );
    assert_eq!(
        store.items().expect("items")[0].status(),
        TaskStatus::ToDo
    );

    client.set_failing(false);
    rt.block_on(store.fetch_all()).expect("recovering fetch");
    assert_eq!(store.last_error().expect("error"), None);

    let done = rt
        .block_on(store.update_status(created.id(), TaskStatus::Done))
        .expect("retried update");
    assert_eq!(done.status(), TaskStatus::Done);
}
