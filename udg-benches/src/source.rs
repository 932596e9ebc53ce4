//! Seeded graph inputs for benchmarking.
//!
//! Every benchmark draws its vertices from a [`SmallRng`] seeded with a
//! fixed value so that runs compare like with like.

use std::num::NonZeroUsize;

use rand::{SeedableRng, rngs::SmallRng};
use udg_core::{RadiusParams, UnitDiskGraph};

use crate::{error::BenchSetupError, params::GraphBenchParams};

/// Radius `n^(-1/2)`, which keeps the expected degree near `π` as `n` grows.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `vertex_count` is zero.
///
/// # Examples
/// ```
/// use udg_benches::source::critical_radius;
///
/// let radius = critical_radius(100).expect("100 vertices is valid");
/// assert!((radius - 0.1).abs() < 1e-12);
/// ```
pub fn critical_radius(vertex_count: usize) -> Result<f64, BenchSetupError> {
    let count = non_zero(vertex_count)?;
    Ok(RadiusParams::new(1.0, 2.0, 0.0)?.radius_for(count)?)
}

/// Scatters `params.vertex_count` vertices with the given seed and sets the
/// threshold. Edges are not built.
///
/// # Errors
/// Returns [`BenchSetupError`] when the vertex count is zero or the radius is
/// rejected.
pub fn scattered_graph(
    params: &GraphBenchParams,
    seed: u64,
) -> Result<UnitDiskGraph, BenchSetupError> {
    let mut graph = UnitDiskGraph::new(non_zero(params.vertex_count)?);
    graph.set_threshold(params.radius)?;
    graph.generate(&mut SmallRng::seed_from_u64(seed));
    Ok(graph)
}

/// Like [`scattered_graph`], with edges built.
///
/// # Errors
/// Returns [`BenchSetupError`] when the vertex count is zero or the radius is
/// rejected.
pub fn connected_graph(
    params: &GraphBenchParams,
    seed: u64,
) -> Result<UnitDiskGraph, BenchSetupError> {
    let mut graph = scattered_graph(params, seed)?;
    graph.build_edges();
    Ok(graph)
}

fn non_zero(vertex_count: usize) -> Result<NonZeroUsize, BenchSetupError> {
    NonZeroUsize::new(vertex_count).ok_or(BenchSetupError::ZeroValue {
        context: "vertex_count",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(4, 0.5)]
    #[case(16, 0.25)]
    #[case(64, 0.125)]
    fn critical_radius_is_inverse_square_root(#[case] vertex_count: usize, #[case] expected: f64) {
        let radius = critical_radius(vertex_count).expect("non-zero count");
        assert!((radius - expected).abs() < 1e-12);
    }

    #[test]
    fn zero_vertices_are_rejected() {
        let err = critical_radius(0).expect_err("zero vertices must fail");
        assert!(matches!(
            err,
            BenchSetupError::ZeroValue {
                context: "vertex_count"
            }
        ));
    }

    #[test]
    fn same_seed_gives_same_graph() {
        let params = GraphBenchParams {
            vertex_count: 64,
            radius: 0.2,
        };
        let first = connected_graph(&params, 7).expect("valid params");
        let second = connected_graph(&params, 7).expect("valid params");
        assert_eq!(first.vertex_count(), 64);
        assert_eq!(first.edges(), second.edges());
    }

    #[test]
    fn scattered_graph_has_no_edges() {
        let params = GraphBenchParams {
            vertex_count: 16,
            radius: 0.5,
        };
        let graph = scattered_graph(&params, 1).expect("valid params");
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.threshold(), 0.5);
    }

    #[test]
    fn negative_radius_is_rejected() {
        let params = GraphBenchParams {
            vertex_count: 16,
            radius: -1.0,
        };
        let err = scattered_graph(&params, 1).expect_err("negative radius must fail");
        assert!(matches!(err, BenchSetupError::Core(_)));
    }
}
