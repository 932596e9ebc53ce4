//! Property tests for the graph construction and analysis laws.

mod common;

use std::collections::HashSet;

use common::graph_from;
use proptest::prelude::*;
use udg_core::{ComponentPartition, CrossingAnalysis, SuperFreeClassification, VertexId};

fn points_strategy() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((0.0..1.0_f64, 0.0..1.0_f64), 1..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn components_partition_the_vertex_set(
        points in points_strategy(),
        radius in 0.0..0.5_f64,
    ) {
        let graph = graph_from(&points, radius);
        let partition = ComponentPartition::compute(&graph);

        let mut seen = HashSet::new();
        for component in partition.components() {
            prop_assert!(!component.is_empty());
            for vertex in component {
                prop_assert!(seen.insert(*vertex), "vertex {vertex:?} appears twice");
            }
        }
        prop_assert_eq!(seen.len(), graph.vertex_count());
        prop_assert_eq!(partition.sizes().iter().sum::<usize>(), graph.vertex_count());
        prop_assert!(partition.largest_size() >= 1);
    }

    #[test]
    fn adjacency_is_symmetric(points in points_strategy(), radius in 0.0..0.5_f64) {
        let graph = graph_from(&points, radius);
        for edge in graph.edges() {
            prop_assert!(graph.neighbours(edge.first()).contains(&edge.second()));
            prop_assert!(graph.neighbours(edge.second()).contains(&edge.first()));
            prop_assert!(edge.first() < edge.second());
        }
        let degree_sum: usize = graph.vertices().iter().map(|vertex| vertex.degree()).sum();
        prop_assert_eq!(degree_sum, 2 * graph.edge_count());
    }

    #[test]
    fn edge_weights_match_positions(points in points_strategy(), radius in 0.0..0.5_f64) {
        let graph = graph_from(&points, radius);
        for edge in graph.edges() {
            prop_assert_eq!(edge.weight(), graph.measured_length(edge));
            prop_assert!(edge.weight() <= radius);
        }
    }

    #[test]
    fn growing_radius_never_removes_edges(
        points in points_strategy(),
        smaller in 0.0..0.4_f64,
        growth in 0.0..0.4_f64,
    ) {
        let sparse = graph_from(&points, smaller);
        let dense = graph_from(&points, smaller + growth);
        prop_assert!(sparse.edge_count() <= dense.edge_count());
        for edge in sparse.edges() {
            prop_assert!(dense.edges().contains(edge));
        }
    }

    #[test]
    fn crossing_analysis_splits_every_edge_once(
        points in points_strategy(),
        radius in 0.0..0.5_f64,
    ) {
        let graph = graph_from(&points, radius);
        let crossings = CrossingAnalysis::compute(&graph);
        prop_assert_eq!(
            crossings.free().len() + crossings.intersecting().len(),
            graph.edge_count()
        );
        for id in crossings.free() {
            prop_assert!(!crossings.is_intersecting(*id));
        }
    }

    #[test]
    fn super_free_edges_are_free(points in points_strategy(), radius in 0.0..0.5_f64) {
        let graph = graph_from(&points, radius);
        let crossings = CrossingAnalysis::compute(&graph);
        let super_free = SuperFreeClassification::classify(&graph, crossings.free());
        for id in super_free.edges() {
            prop_assert!(crossings.free().contains(id));
        }
    }

    #[test]
    fn component_membership_matches_bfs(points in points_strategy(), radius in 0.0..0.5_f64) {
        let graph = graph_from(&points, radius);
        let partition = ComponentPartition::compute(&graph);
        let start = VertexId::new(0);
        let component = udg_core::connected_component_of(&graph, start)
            .expect("vertex 0 always exists");
        let index = partition.component_of(start).expect("vertex 0 is partitioned");
        let expected = partition.components().get(index).expect("index is valid");
        prop_assert_eq!(&component, expected);
    }
}
