//! Result types for analysis runs.
//!
//! A [`GraphAnalysis`] bundles the outputs of the crossing, super-free, and
//! component stages computed over one graph state, together with the
//! [`GraphStatistics`] derived from them.

use crate::{
    components::ComponentPartition, crossing::CrossingAnalysis, graph::UnitDiskGraph,
    super_free::SuperFreeClassification,
};

/// Counters describing the analysed graph.
///
/// # Examples
/// ```
/// use udg_core::AnalyzerBuilder;
///
/// let mut analyzer = AnalyzerBuilder::new()
///     .with_vertex_count(4)
///     .with_radius(0.0)
///     .with_seed(1)
///     .build()?;
/// let statistics = analyzer.rebuild()?;
/// assert_eq!(statistics.vertex_count, 4);
/// assert_eq!(statistics.edge_count, 0);
/// assert_eq!(statistics.free_edge_count, 0);
/// # Ok::<(), udg_core::UdgError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GraphStatistics {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Number of edges in the graph.
    pub edge_count: usize,
    /// Number of edges crossing no other edge.
    pub free_edge_count: usize,
    /// Number of edges crossing at least one other edge.
    pub intersecting_edge_count: usize,
    /// Number of free edges with an empty exclusion region.
    pub super_free_edge_count: usize,
}

/// Outputs of every analysis stage over one graph state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphAnalysis {
    statistics: GraphStatistics,
    crossings: CrossingAnalysis,
    super_free: SuperFreeClassification,
    components: ComponentPartition,
}

impl GraphAnalysis {
    pub(crate) fn new(
        graph: &UnitDiskGraph,
        crossings: CrossingAnalysis,
        super_free: SuperFreeClassification,
        components: ComponentPartition,
    ) -> Self {
        let statistics = GraphStatistics {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            free_edge_count: crossings.free().len(),
            intersecting_edge_count: crossings.intersecting().len(),
            super_free_edge_count: super_free.len(),
        };
        Self {
            statistics,
            crossings,
            super_free,
            components,
        }
    }

    /// Returns the derived counters.
    #[must_use]
    pub const fn statistics(&self) -> GraphStatistics {
        self.statistics
    }

    /// Returns the crossing analysis.
    #[must_use]
    pub const fn crossings(&self) -> &CrossingAnalysis {
        &self.crossings
    }

    /// Returns the super-free classification.
    #[must_use]
    pub const fn super_free(&self) -> &SuperFreeClassification {
        &self.super_free
    }

    /// Returns the component partition.
    #[must_use]
    pub const fn components(&self) -> &ComponentPartition {
        &self.components
    }
}

/// A graph together with its analysis, as returned by
/// [`crate::recompute_from`].
#[derive(Clone, Debug)]
pub struct AnalysisReport {
    graph: UnitDiskGraph,
    analysis: GraphAnalysis,
}

impl AnalysisReport {
    pub(crate) fn new(graph: UnitDiskGraph, analysis: GraphAnalysis) -> Self {
        Self { graph, analysis }
    }

    /// Returns the analysed graph.
    #[must_use]
    pub const fn graph(&self) -> &UnitDiskGraph {
        &self.graph
    }

    /// Returns the stage outputs.
    #[must_use]
    pub const fn analysis(&self) -> &GraphAnalysis {
        &self.analysis
    }

    /// Returns the derived counters.
    #[must_use]
    pub const fn statistics(&self) -> GraphStatistics {
        self.analysis.statistics
    }
}
