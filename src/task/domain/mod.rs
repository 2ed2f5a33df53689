//! Domain model for the task collection.
//!
//! The task domain models the single persisted entity of the system — a unit
//! of work moving through a three-state workflow — while keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod status;
mod task;
mod title;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use status::TaskStatus;
pub use task::{NewTask, PersistedTaskData, Task};
pub use title::TaskTitle;
