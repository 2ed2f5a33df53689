//! In-memory fake backend for the task client port.

mod client;

pub use client::InMemoryTaskClient;
