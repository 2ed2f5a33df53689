//! Port contracts for the remote task resource.
//!
//! Ports define infrastructure-agnostic interfaces used by the task store.

pub mod client;

pub use client::{TaskClient, TaskClientError, TaskClientResult, TaskPatch};
