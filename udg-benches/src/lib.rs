//! Benchmark support for the unit disk graph engine.
//!
//! Provides seeded graph sources and parameter types shared by the Criterion
//! benchmarks under `benches/`.

pub mod error;
pub mod params;
pub mod source;
