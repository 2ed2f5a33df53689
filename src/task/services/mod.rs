//! Application services orchestrating the task collection.

mod seed;
mod store;

pub use seed::{SeedOptions, generate_seed_tasks, seed_store};
pub use store::{CreateTaskRequest, StoreError, StoreResult, StoreSnapshot, TaskStore};
