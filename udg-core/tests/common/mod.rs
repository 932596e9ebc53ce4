use udg_core::{AnalyzerBuilder, ExecutionStrategy, Point, UnitDiskAnalyzer, UnitDiskGraph};

/// Builds a graph over `points` with edges at `radius`.
#[must_use]
pub fn graph_from(points: &[(f64, f64)], radius: f64) -> UnitDiskGraph {
    let mut graph = UnitDiskGraph::from_points(points.iter().copied().map(Point::from))
        .expect("fixture must contain vertices");
    graph.set_threshold(radius).expect("fixture radius must be valid");
    graph.build_edges();
    graph
}

/// Builds a seeded sequential analyzer.
#[must_use]
pub fn seeded_analyzer(vertex_count: usize, radius: f64, seed: u64) -> UnitDiskAnalyzer {
    AnalyzerBuilder::new()
        .with_vertex_count(vertex_count)
        .with_radius(radius)
        .with_seed(seed)
        .with_execution_strategy(ExecutionStrategy::Sequential)
        .build()
        .expect("analyzer configuration must be valid")
}
