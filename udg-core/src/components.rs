//! Connected-component discovery by breadth-first search.
//!
//! Visitation state is owned by each traversal, never by the vertices, so
//! consecutive searches cannot observe each other's marks.

use std::collections::VecDeque;

use tracing::{debug, instrument};

use crate::{
    Result,
    graph::{UnitDiskGraph, VertexId},
};

/// Returns the connected component containing `start`, in BFS discovery
/// order (starting with `start`).
///
/// # Errors
/// Returns [`crate::UdgError::UnknownVertex`] when `start` is not a vertex of
/// `graph`.
///
/// # Examples
/// ```
/// use udg_core::{Point, UnitDiskGraph, VertexId, connected_component_of};
///
/// let mut graph = UnitDiskGraph::from_points([
///     Point::new(0.0, 0.0),
///     Point::new(0.1, 0.0),
///     Point::new(0.9, 0.9),
/// ])?;
/// graph.set_threshold(0.2)?;
/// graph.build_edges();
/// let component = connected_component_of(&graph, VertexId::new(1))?;
/// assert_eq!(component, vec![VertexId::new(1), VertexId::new(0)]);
/// # Ok::<(), udg_core::UdgError>(())
/// ```
pub fn connected_component_of(graph: &UnitDiskGraph, start: VertexId) -> Result<Vec<VertexId>> {
    graph.check_vertex(start)?;
    let mut visited = vec![false; graph.vertex_count()];
    Ok(breadth_first(graph, start, &mut visited))
}

/// BFS from `start`, marking every reached vertex in `visited`.
fn breadth_first(graph: &UnitDiskGraph, start: VertexId, visited: &mut [bool]) -> Vec<VertexId> {
    let mut component = Vec::new();
    let mut queue = VecDeque::new();
    if mark(visited, start) {
        queue.push_back(start);
        component.push(start);
    }

    while let Some(current) = queue.pop_front() {
        for &next in graph.neighbours(current) {
            if mark(visited, next) {
                queue.push_back(next);
                component.push(next);
            }
        }
    }
    component
}

/// Marks `vertex` visited, returning `true` if it was not visited before.
fn mark(visited: &mut [bool], vertex: VertexId) -> bool {
    match visited.get_mut(vertex.index()) {
        Some(seen) if !*seen => {
            *seen = true;
            true
        }
        _ => false,
    }
}

/// Partition of a graph's vertices into connected components.
///
/// Components appear in the order their first vertex was created; vertices
/// inside a component appear in BFS discovery order.
///
/// # Examples
/// ```
/// use udg_core::{ComponentPartition, Point, UnitDiskGraph};
///
/// let mut graph = UnitDiskGraph::from_points([
///     Point::new(0.0, 0.0),
///     Point::new(0.1, 0.0),
///     Point::new(0.9, 0.9),
/// ])?;
/// graph.set_threshold(0.2)?;
/// graph.build_edges();
/// let partition = ComponentPartition::compute(&graph);
/// assert_eq!(partition.sizes(), vec![2, 1]);
/// assert_eq!(partition.largest_size(), 2);
/// assert_eq!(partition.count_at_least(1), 2);
/// assert_eq!(partition.count_exactly(1), 1);
/// # Ok::<(), udg_core::UdgError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComponentPartition {
    components: Vec<Vec<VertexId>>,
    membership: Vec<usize>,
}

impl ComponentPartition {
    /// Computes the partition by running BFS from every vertex not yet
    /// assigned to a component, in creation order.
    #[instrument(name = "core.components", skip(graph), fields(vertices = graph.vertex_count()))]
    #[must_use]
    pub fn compute(graph: &UnitDiskGraph) -> Self {
        let mut assigned = vec![false; graph.vertex_count()];
        let mut membership = vec![0; graph.vertex_count()];
        let mut components = Vec::new();

        for vertex in graph.vertex_ids() {
            if assigned.get(vertex.index()).copied().unwrap_or(true) {
                continue;
            }
            let component = breadth_first(graph, vertex, &mut assigned);
            for member in &component {
                if let Some(slot) = membership.get_mut(member.index()) {
                    *slot = components.len();
                }
            }
            components.push(component);
        }

        debug!(components = components.len(), "component partition computed");
        Self {
            components,
            membership,
        }
    }

    /// Returns the components in discovery order.
    #[must_use]
    pub fn components(&self) -> &[Vec<VertexId>] {
        &self.components
    }

    /// Returns the number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` when the partitioned graph had no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns the size of every component, in discovery order.
    #[must_use]
    pub fn sizes(&self) -> Vec<usize> {
        self.components.iter().map(Vec::len).collect()
    }

    /// Returns the total number of partitioned vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.membership.len()
    }

    /// Returns the index of the component holding `vertex`.
    #[must_use]
    pub fn component_of(&self, vertex: VertexId) -> Option<usize> {
        self.membership.get(vertex.index()).copied()
    }

    /// Returns the number of vertices in the largest component, or zero for
    /// an empty partition.
    #[must_use]
    pub fn largest_size(&self) -> usize {
        self.components.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Counts components with at least `k` vertices.
    #[must_use]
    pub fn count_at_least(&self, k: usize) -> usize {
        self.components.iter().filter(|c| c.len() >= k).count()
    }

    /// Counts components with exactly `k` vertices.
    #[must_use]
    pub fn count_exactly(&self, k: usize) -> usize {
        self.components.iter().filter(|c| c.len() == k).count()
    }

    /// Tabulates how many components have each size in `1..=limit`, plus the
    /// largest size and how many components share it.
    ///
    /// # Examples
    /// ```
    /// use udg_core::{ComponentPartition, Point, UnitDiskGraph};
    ///
    /// let mut graph = UnitDiskGraph::from_points([
    ///     Point::new(0.0, 0.0),
    ///     Point::new(0.1, 0.0),
    ///     Point::new(0.9, 0.9),
    /// ])?;
    /// graph.set_threshold(0.2)?;
    /// graph.build_edges();
    /// let histogram = ComponentPartition::compute(&graph).size_histogram(3);
    /// assert_eq!(histogram.counts(), &[(1, 1), (2, 1), (3, 0)]);
    /// assert_eq!(histogram.largest(), (2, 1));
    /// # Ok::<(), udg_core::UdgError>(())
    /// ```
    #[must_use]
    pub fn size_histogram(&self, limit: usize) -> SizeHistogram {
        let counts = (1..=limit)
            .map(|size| (size, self.count_exactly(size)))
            .collect();
        let largest_size = self.largest_size();
        SizeHistogram {
            counts,
            largest_size,
            largest_count: self.count_exactly(largest_size),
        }
    }
}

/// Component counts per size, as reported alongside the graph statistics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SizeHistogram {
    counts: Vec<(usize, usize)>,
    largest_size: usize,
    largest_count: usize,
}

impl SizeHistogram {
    /// Returns `(size, count)` pairs for sizes `1..=limit`.
    #[must_use]
    pub fn counts(&self) -> &[(usize, usize)] {
        &self.counts
    }

    /// Returns `(largest size, number of components of that size)`.
    #[must_use]
    pub const fn largest(&self) -> (usize, usize) {
        (self.largest_size, self.largest_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    use crate::{Point, UdgError};

    fn graph_from(points: &[(f64, f64)], radius: f64) -> UnitDiskGraph {
        let mut graph = UnitDiskGraph::from_points(points.iter().copied().map(Point::from))
            .expect("fixture has vertices");
        graph.set_threshold(radius).expect("radius is valid");
        graph.build_edges();
        graph
    }

    fn ids(indices: &[usize]) -> Vec<VertexId> {
        indices.iter().copied().map(VertexId::new).collect()
    }

    #[test]
    fn single_vertex_forms_one_component() {
        let graph = graph_from(&[(0.5, 0.5)], 0.1);
        let partition = ComponentPartition::compute(&graph);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(partition.sizes(), vec![1]);
        assert_eq!(partition.largest_size(), 1);
    }

    #[test]
    fn chain_at_exact_spacing_is_connected() {
        let points: Vec<(f64, f64)> = (0..6_u32).map(|i| (f64::from(i) * 0.125, 0.25)).collect();
        let graph = graph_from(&points, 0.125);
        let partition = ComponentPartition::compute(&graph);
        assert_eq!(partition.sizes(), vec![6]);
        assert_eq!(
            connected_component_of(&graph, VertexId::new(3)).expect("vertex exists"),
            ids(&[3, 2, 4, 1, 5, 0])
        );
    }

    #[test]
    fn bfs_visits_in_discovery_order() {
        // 0 - 1 - 3 and 0 - 2, with 4 isolated.
        let graph = graph_from(
            &[
                (0.125, 0.125),
                (0.25, 0.125),
                (0.125, 0.25),
                (0.375, 0.125),
                (0.875, 0.875),
            ],
            0.125,
        );
        let component = connected_component_of(&graph, VertexId::new(0)).expect("vertex exists");
        assert_eq!(component, ids(&[0, 1, 2, 3]));
    }

    #[test]
    fn repeated_searches_do_not_leak_visitation() {
        let graph = graph_from(&[(0.1, 0.1), (0.15, 0.1), (0.8, 0.8)], 0.1);
        let first = connected_component_of(&graph, VertexId::new(0)).expect("vertex exists");
        let second = connected_component_of(&graph, VertexId::new(1)).expect("vertex exists");
        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn unknown_start_vertex_is_rejected() {
        let graph = graph_from(&[(0.1, 0.1)], 0.1);
        assert_eq!(
            connected_component_of(&graph, VertexId::new(5)),
            Err(UdgError::UnknownVertex {
                index: 5,
                vertex_count: 1
            })
        );
    }

    #[test]
    fn partition_follows_creation_order() {
        let graph = graph_from(
            &[(0.9, 0.9), (0.1, 0.1), (0.92, 0.9), (0.5, 0.5), (0.12, 0.1)],
            0.05,
        );
        let partition = ComponentPartition::compute(&graph);
        assert_eq!(partition.components(), &[ids(&[0, 2]), ids(&[1, 4]), ids(&[3])]);
        assert_eq!(partition.component_of(VertexId::new(4)), Some(1));
        assert_eq!(partition.component_of(VertexId::new(3)), Some(2));
        assert_eq!(partition.vertex_count(), 5);
    }

    #[rstest]
    #[case(1, 3)]
    #[case(2, 2)]
    #[case(3, 0)]
    fn count_at_least_thresholds(#[case] k: usize, #[case] expected: usize) {
        let graph = graph_from(
            &[(0.9, 0.9), (0.1, 0.1), (0.92, 0.9), (0.5, 0.5), (0.12, 0.1)],
            0.05,
        );
        assert_eq!(ComponentPartition::compute(&graph).count_at_least(k), expected);
    }

    #[test]
    fn empty_partition_reports_zero_largest() {
        let partition = ComponentPartition::default();
        assert!(partition.is_empty());
        assert_eq!(partition.largest_size(), 0);
        assert_eq!(partition.size_histogram(2).counts(), &[(1, 0), (2, 0)]);
    }
}
