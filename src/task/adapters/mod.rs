//! Adapter implementations of the task ports.

pub mod http;
pub mod memory;
