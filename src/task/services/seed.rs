//! Demo-data factory feeding the store's normal create path.

use super::store::{CreateTaskRequest, StoreResult, TaskStore};
use crate::task::domain::{Task, TaskStatus};
use crate::task::ports::TaskClient;
use chrono::Duration;
use mockable::Clock;
use rand::Rng;
use std::collections::HashSet;

/// Title fragments; every `{action} {subject} {context}` combination stays
/// within the domain title bounds.
const ACTIONS: &[&str] = &[
    "Implement",
    "Update",
    "Optimize",
    "Debug",
    "Refactor",
    "Test",
    "Review",
    "Deploy",
    "Monitor",
    "Configure",
    "Migrate",
    "Secure",
    "Document",
    "Validate",
];

const SUBJECTS: &[&str] = &[
    "user interface",
    "database",
    "API",
    "documentation",
    "search feature",
    "email service",
    "mobile app",
    "performance",
    "testing suite",
    "backup system",
    "user settings",
    "notifications",
    "file upload",
    "chat system",
];

const CONTEXTS: &[&str] = &[
    "for the new release",
    "in production",
    "for better performance",
    "to fix reported issues",
    "before the deadline",
    "for scalability",
    "with proper testing",
    "following the roadmap",
    "based on user feedback",
    "with the team",
    "as per requirements",
];

/// Attempt budget for composing a title not used earlier in the same run;
/// after that a duplicate is accepted.
const MAX_UNIQUE_TITLE_ATTEMPTS: usize = 50;

/// Creation timestamps are backdated uniformly within this window.
const BACKDATE_WINDOW_SECS: i64 = 7 * 24 * 60 * 60;

/// Bounds for the number of tasks generated in one seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedOptions {
    min_tasks: usize,
    max_tasks: usize,
}

impl SeedOptions {
    /// Creates inclusive bounds for the number of generated tasks.
    #[must_use]
    pub const fn new(min_tasks: usize, max_tasks: usize) -> Self {
        Self {
            min_tasks,
            max_tasks,
        }
    }

    /// Returns the inclusive lower bound.
    #[must_use]
    pub const fn min_tasks(&self) -> usize {
        self.min_tasks
    }

    /// Returns the inclusive upper bound.
    #[must_use]
    pub const fn max_tasks(&self) -> usize {
        self.max_tasks
    }
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self::new(1, 3)
    }
}

fn pick<'a, R: Rng>(rng: &mut R, values: &'a [&'a str]) -> &'a str {
    let index = rng.gen_range(0..values.len());
    values.get(index).copied().unwrap_or_default()
}

fn compose_title<R: Rng>(rng: &mut R) -> String {
    format!(
        "{} {} {}",
        pick(rng, ACTIONS),
        pick(rng, SUBJECTS),
        pick(rng, CONTEXTS)
    )
}

/// Draws a status with the demo weighting: To Do 50%, In Progress 30%,
/// Done 20%.
fn weighted_status<R: Rng>(rng: &mut R) -> TaskStatus {
    match rng.gen_range(0..10_u8) {
        0..=4 => TaskStatus::ToDo,
        5..=7 => TaskStatus::InProgress,
        _ => TaskStatus::Done,
    }
}

fn unique_title<R: Rng>(rng: &mut R, used: &HashSet<String>) -> String {
    let mut title = compose_title(rng);
    let mut attempts = 1;
    while used.contains(&title) && attempts < MAX_UNIQUE_TITLE_ATTEMPTS {
        title = compose_title(rng);
        attempts += 1;
    }
    title
}

/// Generates between `min_tasks` and `max_tasks` create requests with
/// weighted statuses and creation timestamps backdated up to seven days
/// from the clock's current time.
///
/// Title uniqueness within one invocation is best-effort: after 50 draws a
/// duplicate is accepted.
#[must_use]
pub fn generate_seed_tasks<R: Rng>(
    rng: &mut R,
    clock: &impl Clock,
    options: &SeedOptions,
) -> Vec<CreateTaskRequest> {
    let count = rng.gen_range(options.min_tasks()..=options.max_tasks());
    let now = clock.utc();
    let mut used = HashSet::new();
    let mut requests = Vec::with_capacity(count);
    for _ in 0..count {
        let title = unique_title(rng, &used);
        used.insert(title.clone());
        let backdate = Duration::seconds(rng.gen_range(0..BACKDATE_WINDOW_SECS));
        requests.push(
            CreateTaskRequest::new(title)
                .with_status(weighted_status(rng))
                .with_created_at(now - backdate),
        );
    }
    requests
}

/// Seeds a store by pushing the given requests through the normal create
/// path, returning the backend's canonical copies in creation order.
///
/// # Errors
///
/// Returns the first [`super::StoreError`] produced by a rejected create;
/// requests after the failing one are not issued.
pub async fn seed_store<C, K>(
    store: &TaskStore<C, K>,
    requests: Vec<CreateTaskRequest>,
) -> StoreResult<Vec<Task>>
where
    C: TaskClient,
    K: Clock + Send + Sync,
{
    let mut created = Vec::with_capacity(requests.len());
    for request in requests {
        created.push(store.create(request).await?);
    }
    Ok(created)
}
