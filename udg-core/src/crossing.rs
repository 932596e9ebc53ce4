//! Pairwise edge-crossing detection.
//!
//! Every unordered pair of edges that share no endpoint is tested once. The
//! intersecting flags live in the analysis result rather than on the edges,
//! so a graph can be analysed repeatedly without resetting anything.

#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::{
    builder::Backend,
    geometry::segments_intersect,
    graph::{EdgeId, UnitDiskGraph},
};

/// Edges split into those crossing at least one other edge and the rest.
///
/// # Examples
/// ```
/// use udg_core::{CrossingAnalysis, EdgeId, Point, UnitDiskGraph};
///
/// let mut graph = UnitDiskGraph::from_points([
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
/// ])?;
/// graph.set_threshold(1.5)?;
/// graph.build_edges();
/// let analysis = CrossingAnalysis::compute(&graph);
/// assert_eq!(analysis.intersecting(), &[EdgeId::new(2), EdgeId::new(3)]);
/// assert_eq!(analysis.free().len(), 4);
/// # Ok::<(), udg_core::UdgError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CrossingAnalysis {
    intersecting: Vec<EdgeId>,
    free: Vec<EdgeId>,
}

impl CrossingAnalysis {
    /// Tests every pair of edges on the calling thread.
    #[must_use]
    pub fn compute(graph: &UnitDiskGraph) -> Self {
        Self::compute_with(graph, Backend::Sequential)
    }

    #[instrument(name = "core.crossings", skip(graph), fields(edges = graph.edge_count()))]
    pub(crate) fn compute_with(graph: &UnitDiskGraph, backend: Backend) -> Self {
        let flags = crossing_flags(graph, backend);

        let (intersecting, free): (Vec<EdgeId>, Vec<EdgeId>) = graph
            .edge_ids()
            .partition(|id| flags.get(id.index()).copied().unwrap_or(false));
        debug!(
            intersecting = intersecting.len(),
            free = free.len(),
            "crossing analysis completed"
        );
        Self { intersecting, free }
    }

    /// Returns the edges that cross at least one other edge, ascending.
    #[must_use]
    pub fn intersecting(&self) -> &[EdgeId] {
        &self.intersecting
    }

    /// Returns the edges that cross no other edge, ascending.
    #[must_use]
    pub fn free(&self) -> &[EdgeId] {
        &self.free
    }

    /// Returns `true` when `edge` crosses at least one other edge.
    #[must_use]
    pub fn is_intersecting(&self, edge: EdgeId) -> bool {
        self.intersecting.binary_search(&edge).is_ok()
    }
}

/// One flag per edge, set once the edge properly crosses any other edge.
fn crossing_flags(graph: &UnitDiskGraph, backend: Backend) -> Vec<bool> {
    let edge_count = graph.edge_count();
    match backend {
        Backend::Sequential => {
            let mut flags = vec![false; edge_count];
            for row in 0..edge_count {
                mark_row(graph, row, |index| {
                    if let Some(flag) = flags.get_mut(index) {
                        *flag = true;
                    }
                });
            }
            flags
        }
        #[cfg(feature = "parallel")]
        Backend::Parallel => {
            let flags: Vec<AtomicBool> = (0..edge_count).map(|_| AtomicBool::new(false)).collect();
            (0..edge_count).into_par_iter().for_each(|row| {
                mark_row(graph, row, |index| {
                    if let Some(flag) = flags.get(index) {
                        flag.store(true, Ordering::Relaxed);
                    }
                });
            });
            flags.into_iter().map(AtomicBool::into_inner).collect()
        }
    }
}

/// Calls `mark` with both indices of every crossing between edge `row` and a
/// later edge.
fn mark_row(graph: &UnitDiskGraph, row: usize, mut mark: impl FnMut(usize)) {
    let edges = graph.edges();
    let Some(edge) = edges.get(row) else {
        return;
    };
    let (a1, a2) = graph.segment(edge);
    for column in candidate_columns(graph, row) {
        let Some(other) = edges.get(column) else {
            continue;
        };
        let (b1, b2) = graph.segment(other);
        if segments_intersect(a1, a2, b1, b2) {
            mark(row);
            mark(column);
        }
    }
}

/// Indices after `row` of the edges sharing no endpoint with edge `row`.
fn candidate_columns(graph: &UnitDiskGraph, row: usize) -> impl Iterator<Item = usize> + '_ {
    let edges = graph.edges();
    let current = edges.get(row).copied();
    edges
        .iter()
        .enumerate()
        .skip(row + 1)
        .filter_map(move |(column, other)| {
            let edge = current?;
            (!edge.shares_endpoint(other)).then_some(column)
        })
}
