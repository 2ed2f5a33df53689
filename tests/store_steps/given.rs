//! Given steps for task board BDD scenarios.

use super::world::StoreWorld;
use rstest_bdd_macros::given;

#[given("an empty task board")]
fn empty_task_board(world: &mut StoreWorld) {
    let _ = world;
}

#[given("a task board whose backend rejects every request")]
fn failing_backend(world: &mut StoreWorld) {
    world.client.set_failing(true);
}
