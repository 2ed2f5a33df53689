//! When steps for task board BDD scenarios.

use super::world::{StoreWorld, run_async};
use rstest_bdd_macros::when;
use taskdeck::task::services::CreateTaskRequest;

#[when(r#"a task titled "{title}" is created"#)]
fn create_task(world: &mut StoreWorld, title: String) {
    let result = run_async(world.store.create(CreateTaskRequest::new(title)));
    if let Ok(task) = &result {
        world.tracked_id = Some(task.id().clone());
    }
    world.last_create_result = Some(result);
}

#[when(r#"the task is marked "{status}""#)]
fn mark_task(world: &mut StoreWorld, status: String) -> Result<(), eyre::Report> {
    let id = world
        .tracked_id
        .clone()
        .ok_or_else(|| eyre::eyre!("missing tracked task id in scenario world"))?;
    let target = status
        .parse()
        .map_err(|err| eyre::eyre!("unrecognized status label in step: {err}"))?;
    world.last_update_result = Some(run_async(world.store.update_status(&id, target)));
    Ok(())
}

#[when("the task is removed")]
fn remove_task(world: &mut StoreWorld) -> Result<(), eyre::Report> {
    let id = world
        .tracked_id
        .clone()
        .ok_or_else(|| eyre::eyre!("missing tracked task id in scenario world"))?;
    run_async(world.store.remove(&id)).map_err(|err| eyre::eyre!("remove failed: {err}"))?;
    Ok(())
}

#[when("the full collection is fetched")]
fn fetch_collection(world: &mut StoreWorld) {
    world.last_fetch_result = Some(run_async(world.store.fetch_all()));
}
