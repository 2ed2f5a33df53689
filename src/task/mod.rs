//! Task tracking and remote synchronization.
//!
//! This module implements the task collection lifecycle: validated task
//! creation, status transitions, title edits, and deletion, all reconciled
//! against a remote CRUD resource through a thin asynchronous client.
//! Updates are pessimistic: the store never shows a task the backend might
//! still reject. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
