//! Then steps for task board BDD scenarios.

use super::world::StoreWorld;
use rstest_bdd_macros::then;
use taskdeck::task::{domain::TaskDomainError, services::StoreError};

#[then("the board is empty")]
fn board_is_empty(world: &StoreWorld) -> Result<(), eyre::Report> {
    let items = world
        .store
        .items()
        .map_err(|err| eyre::eyre!("reading store state failed: {err}"))?;
    if !items.is_empty() {
        return Err(eyre::eyre!("expected an empty board, found {}", items.len()));
    }
    Ok(())
}

#[then("no diagnostic is recorded")]
fn no_diagnostic(world: &StoreWorld) -> Result<(), eyre::Report> {
    let error = world
        .store
        .last_error()
        .map_err(|err| eyre::eyre!("reading store state failed: {err}"))?;
    if let Some(message) = error {
        return Err(eyre::eyre!("expected no diagnostic, found {message:?}"));
    }
    Ok(())
}

#[then(r#"the fetch diagnostic "{message}" is recorded"#)]
fn fetch_diagnostic_recorded(world: &StoreWorld, message: String) -> Result<(), eyre::Report> {
    let fetch_result = world
        .last_fetch_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing fetch result in scenario world"))?;
    if fetch_result.is_ok() {
        return Err(eyre::eyre!("expected the fetch to be rejected"));
    }
    let error = world
        .store
        .last_error()
        .map_err(|err| eyre::eyre!("reading store state failed: {err}"))?;
    if error.as_deref() != Some(message.as_str()) {
        return Err(eyre::eyre!(
            "expected diagnostic {message:?}, found {error:?}"
        ));
    }
    Ok(())
}

#[then("the board is not loading")]
fn board_not_loading(world: &StoreWorld) -> Result<(), eyre::Report> {
    let loading = world
        .store
        .is_loading()
        .map_err(|err| eyre::eyre!("reading store state failed: {err}"))?;
    if loading {
        return Err(eyre::eyre!("expected the loading flag to be lowered"));
    }
    Ok(())
}

#[then("the creation is rejected for an invalid title length")]
fn creation_rejected_for_title_length(world: &StoreWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result in scenario world"))?;
    if !matches!(
        result,
        Err(StoreError::Domain(TaskDomainError::InvalidTitleLength(_)))
    ) {
        return Err(eyre::eyre!(
            "expected an invalid title length rejection, got {result:?}"
        ));
    }
    Ok(())
}
