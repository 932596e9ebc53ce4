//! Benchmark parameter types.
//!
//! Criterion labels each input with the [`fmt::Display`] form of these
//! structs.

use std::fmt;

/// Parameters for a single graph benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices scattered in the unit square.
    pub vertex_count: usize,
    /// Connection radius.
    pub radius: f64,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},r={:.4}", self.vertex_count, self.radius)
    }
}

/// Parameters for a pipeline benchmark that compares backends.
#[derive(Clone, Copy, Debug)]
pub struct PipelineBenchParams {
    /// Number of vertices scattered in the unit square.
    pub vertex_count: usize,
    /// Backend label, `sequential` or `parallel`.
    pub strategy: &'static str,
}

impl fmt::Display for PipelineBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},{}", self.vertex_count, self.strategy)
    }
}
