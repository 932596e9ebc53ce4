//! Shared test utilities used across the unit disk graph crates.

pub mod fixtures;
pub mod tracing;
