//! Taskdeck: client-side synchronization core for a task-tracking board.
//!
//! This crate provides the state-synchronization core of a task-tracking
//! application: a strongly-typed task entity, an in-memory store that is the
//! single source of truth for the task collection, and the client boundary
//! through which the store talks to a remote persistence API.
//!
//! # Architecture
//!
//! Taskdeck follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (HTTP, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Task entity, remote client boundary, and the task store

pub mod task;
