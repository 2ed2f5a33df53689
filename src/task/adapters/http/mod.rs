//! HTTP adapter for the remote task resource.

mod client;

pub use client::{HttpClientConfig, HttpTaskClient};
