//! Step definitions and shared world for task board BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
