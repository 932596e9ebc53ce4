//! Super-free edge classification.
//!
//! A free edge is super free when the quadrilateral exclusion region implied
//! by the threshold and the edge orientation holds no vertex other than the
//! edge's own endpoints.

use std::f64::consts::{FRAC_PI_2, PI};

use tracing::{debug, instrument};

use crate::{
    geometry::{Point, polygon_contains},
    graph::{Edge, EdgeId, UnitDiskGraph},
};

/// Quadrilateral exclusion region around an edge.
///
/// # Examples
/// ```
/// use udg_core::{ExclusionRegion, Point};
///
/// let region = ExclusionRegion::around(Point::new(0.1, 0.1), Point::new(0.3, 0.1), 0.2, 0.25)
///     .expect("edge has non-zero length");
/// assert!(region.contains(Point::new(0.2, 0.3)));
/// assert!(!region.contains(Point::new(0.2, 0.4)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExclusionRegion {
    corners: [Point; 4],
}

impl ExclusionRegion {
    /// Builds the region for an edge from `first` to `second` with length
    /// `weight`, offset by `radius` perpendicular to the edge.
    ///
    /// The corner order depends on which endpoint is lower and which is
    /// further left. Returns `None` for a zero-length edge, whose orientation
    /// is undefined.
    #[must_use]
    pub fn around(first: Point, second: Point, weight: f64, radius: f64) -> Option<Self> {
        if weight <= 0.0 || !weight.is_finite() {
            return None;
        }
        let (x1, y1) = (first.x(), first.y());
        let (x2, y2) = (second.x(), second.y());

        let angle1 = ((x1 - x2).abs() / weight).min(1.0).acos();
        let angle2 = PI - FRAC_PI_2 - angle1;
        let angle3 = FRAC_PI_2 - angle2;
        let xo = radius * angle3.sin();
        let yo = radius * angle3.cos();

        let corners = match (y1 <= y2, x1 <= x2) {
            (true, true) => [
                Point::new(x1 - xo, y1 + yo),
                Point::new(x2 - xo, y2 + yo),
                Point::new(x2 + xo, y2 - yo),
                Point::new(x1 + xo, y1 - yo),
            ],
            (true, false) => [
                Point::new(x2 + xo, y2 + yo),
                Point::new(x1 + xo, y1 + yo),
                Point::new(x1 - xo, y1 - yo),
                Point::new(x2 - xo, y2 - yo),
            ],
            (false, true) => [
                Point::new(x1 + xo, y1 + yo),
                Point::new(x2 + xo, y2 + yo),
                Point::new(x2 - xo, y2 - yo),
                Point::new(x1 - xo, y1 - yo),
            ],
            (false, false) => [
                Point::new(x2 - xo, y2 + yo),
                Point::new(x1 - xo, y1 + yo),
                Point::new(x1 + xo, y1 - yo),
                Point::new(x2 + xo, y2 - yo),
            ],
        };
        Some(Self { corners })
    }

    /// Builds the region for a graph edge at the graph's current threshold.
    #[must_use]
    pub fn for_edge(graph: &UnitDiskGraph, edge: &Edge) -> Option<Self> {
        let (first, second) = graph.segment(edge);
        Self::around(first, second, edge.weight(), graph.threshold())
    }

    /// Returns the four corners in ring order.
    #[must_use]
    pub const fn corners(&self) -> &[Point; 4] {
        &self.corners
    }

    /// Even-odd containment test against the corner ring.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        polygon_contains(&self.corners, point)
    }
}

/// Free edges whose exclusion region is empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SuperFreeClassification {
    super_free: Vec<EdgeId>,
}

impl SuperFreeClassification {
    /// Classifies each edge in `free`. Handles that do not name an edge of
    /// `graph` are skipped.
    ///
    /// # Examples
    /// ```
    /// use udg_core::{CrossingAnalysis, Point, SuperFreeClassification, UnitDiskGraph};
    ///
    /// let mut graph = UnitDiskGraph::from_points([
    ///     Point::new(0.1, 0.1),
    ///     Point::new(0.3, 0.1),
    ///     Point::new(0.2, 0.5),
    /// ])?;
    /// graph.set_threshold(0.25)?;
    /// graph.build_edges();
    /// let crossings = CrossingAnalysis::compute(&graph);
    /// let classification = SuperFreeClassification::classify(&graph, crossings.free());
    /// assert_eq!(classification.len(), 1);
    /// # Ok::<(), udg_core::UdgError>(())
    /// ```
    #[instrument(name = "core.super_free", skip(graph, free), fields(free = free.len()))]
    #[must_use]
    pub fn classify(graph: &UnitDiskGraph, free: &[EdgeId]) -> Self {
        let super_free: Vec<EdgeId> = free
            .iter()
            .copied()
            .filter(|&id| graph.edge(id).is_some_and(|edge| is_super_free(graph, edge)))
            .collect();
        debug!(super_free = super_free.len(), "super-free classification completed");
        Self { super_free }
    }

    /// Returns the super-free edges, in the order they were supplied.
    #[must_use]
    pub fn edges(&self) -> &[EdgeId] {
        &self.super_free
    }

    /// Returns the number of super-free edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.super_free.len()
    }

    /// Returns `true` when no edge is super free.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.super_free.is_empty()
    }

    /// Returns `true` when `edge` was classified super free.
    #[must_use]
    pub fn contains(&self, edge: EdgeId) -> bool {
        self.super_free.contains(&edge)
    }
}

/// Stops at the first vertex found inside the region.
fn is_super_free(graph: &UnitDiskGraph, edge: &Edge) -> bool {
    let Some(region) = ExclusionRegion::for_edge(graph, edge) else {
        return false;
    };
    !graph
        .vertex_ids()
        .filter(|&id| !edge.touches(id))
        .filter_map(|id| graph.position(id))
        .any(|point| region.contains(point))
}
