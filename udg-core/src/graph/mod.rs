//! Unit disk graph model.
//!
//! Vertices live in an arena owned by [`UnitDiskGraph`] and are addressed by
//! [`VertexId`] handles. Adjacency lists and edges store handles only, so
//! there is no shared ownership between vertices and edges. Insertion order
//! is creation order and stays stable for the lifetime of the vertex set.

mod build;

use std::num::NonZeroUsize;

use rand::Rng;
use tracing::{debug, instrument};

use crate::{
    Result,
    builder::Backend,
    error::{UdgError, validate_radius},
    geometry::{Point, distance},
};

pub use self::build::generate_points;

/// Stable handle of a vertex inside a [`UnitDiskGraph`].
///
/// # Examples
/// ```
/// use udg_core::VertexId;
///
/// let id = VertexId::new(3);
/// assert_eq!(id.index(), 3);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VertexId(usize);

impl VertexId {
    /// Creates a handle from an arena index.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(index: usize) -> Self { Self(index) }

    /// Returns the arena index carried by the handle.
    #[rustfmt::skip]
    #[must_use]
    pub const fn index(self) -> usize { self.0 }
}

/// Stable handle of an edge inside a [`UnitDiskGraph`], in creation order.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EdgeId(usize);

impl EdgeId {
    /// Creates a handle from an edge-list index.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(index: usize) -> Self { Self(index) }

    /// Returns the edge-list index carried by the handle.
    #[rustfmt::skip]
    #[must_use]
    pub const fn index(self) -> usize { self.0 }
}

/// A vertex: a position in the unit square plus its neighbours.
#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
    position: Point,
    neighbours: Vec<VertexId>,
}

impl Vertex {
    fn new(position: Point) -> Self {
        Self {
            position,
            neighbours: Vec::new(),
        }
    }

    /// Returns the vertex position.
    #[must_use]
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Returns the neighbour handles in edge creation order.
    #[must_use]
    pub fn neighbours(&self) -> &[VertexId] {
        &self.neighbours
    }

    /// Returns the number of incident edges.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.neighbours.len()
    }
}

/// An undirected edge between two vertices.
///
/// The weight is the Euclidean length at creation time. Equality ignores
/// endpoint order: `edge(a, b) == edge(b, a)`.
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    first: VertexId,
    second: VertexId,
    weight: f64,
}

impl Edge {
    pub(crate) const fn new(first: VertexId, second: VertexId, weight: f64) -> Self {
        Self {
            first,
            second,
            weight,
        }
    }

    /// Returns the endpoint with the smaller creation index.
    #[rustfmt::skip]
    #[must_use]
    pub const fn first(&self) -> VertexId { self.first }

    /// Returns the other endpoint.
    #[rustfmt::skip]
    #[must_use]
    pub const fn second(&self) -> VertexId { self.second }

    /// Returns the edge length.
    #[rustfmt::skip]
    #[must_use]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Returns `true` when `vertex` is one of the endpoints.
    #[must_use]
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.first == vertex || self.second == vertex
    }

    /// Returns `true` when the two edges have at least one endpoint in common.
    ///
    /// # Examples
    /// ```
    /// use udg_core::{Point, UnitDiskGraph};
    ///
    /// let mut graph = UnitDiskGraph::from_points([
    ///     Point::new(0.0, 0.0),
    ///     Point::new(0.5, 0.0),
    ///     Point::new(0.5, 0.5),
    /// ])?;
    /// graph.set_threshold(1.0)?;
    /// graph.build_edges();
    /// let edges = graph.edges();
    /// assert!(edges[0].shares_endpoint(&edges[1]));
    /// # Ok::<(), udg_core::UdgError>(())
    /// ```
    #[must_use]
    pub fn shares_endpoint(&self, other: &Self) -> bool {
        self.touches(other.first) || self.touches(other.second)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        (self.first == other.first && self.second == other.second)
            || (self.first == other.second && self.second == other.first)
    }
}

impl Eq for Edge {}

/// Random geometric graph over points in the unit square.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
///
/// use rand::{SeedableRng, rngs::SmallRng};
/// use udg_core::UnitDiskGraph;
///
/// let mut graph = UnitDiskGraph::new(NonZeroUsize::new(50).expect("non-zero"));
/// graph.generate(&mut SmallRng::seed_from_u64(7));
/// graph.set_threshold(0.2)?;
/// graph.build_edges();
/// assert_eq!(graph.vertex_count(), 50);
/// assert!(graph.edge_count() > 0);
/// # Ok::<(), udg_core::UdgError>(())
/// ```
#[derive(Clone, Debug)]
pub struct UnitDiskGraph {
    target_vertex_count: NonZeroUsize,
    max_distance: f64,
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl UnitDiskGraph {
    /// Creates an empty graph that will hold `target_vertex_count` vertices
    /// once [`Self::generate`] runs. The threshold starts at zero.
    #[must_use]
    pub fn new(target_vertex_count: NonZeroUsize) -> Self {
        Self {
            target_vertex_count,
            max_distance: 0.0,
            vertices: Vec::with_capacity(target_vertex_count.get()),
            edges: Vec::new(),
        }
    }

    /// Creates a graph from explicit vertex positions, in order.
    ///
    /// # Errors
    /// Returns [`UdgError::InvalidVertexCount`] when `points` is empty.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Result<Self> {
        let vertices: Vec<Vertex> = points.into_iter().map(Vertex::new).collect();
        let target_vertex_count = NonZeroUsize::new(vertices.len())
            .ok_or(UdgError::InvalidVertexCount { got: 0 })?;
        Ok(Self {
            target_vertex_count,
            max_distance: 0.0,
            vertices,
            edges: Vec::new(),
        })
    }

    /// Discards all vertices and edges, then draws `target_vertex_count`
    /// fresh positions uniformly from `[0, 1)²`.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.clear_all();
        self.vertices.extend(
            generate_points(self.target_vertex_count.get(), rng)
                .into_iter()
                .map(Vertex::new),
        );
        debug!(vertices = self.vertices.len(), "generated vertex positions");
    }

    /// Returns the number of vertices [`Self::generate`] produces.
    #[must_use]
    pub const fn target_vertex_count(&self) -> NonZeroUsize {
        self.target_vertex_count
    }

    /// Changes the number of vertices the next [`Self::generate`] produces.
    /// Existing positions are kept until then.
    pub fn set_target_vertex_count(&mut self, count: NonZeroUsize) {
        self.target_vertex_count = count;
    }

    /// Returns the current distance threshold `r`.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.max_distance
    }

    /// Sets the distance threshold used by the next [`Self::build_edges`].
    ///
    /// # Errors
    /// Returns [`UdgError::InvalidRadius`] when `radius` is negative or not
    /// finite; the previous threshold is kept.
    pub fn set_threshold(&mut self, radius: f64) -> Result<()> {
        self.max_distance = validate_radius(radius)?;
        Ok(())
    }

    /// Connects every pair of vertices at distance at most the threshold.
    ///
    /// Prior edges and adjacency are cleared first, so repeated builds never
    /// duplicate neighbour entries. Runs in O(n²).
    pub fn build_edges(&mut self) {
        self.build_edges_with(Backend::Sequential);
    }

    #[instrument(
        name = "core.build_edges",
        skip(self),
        fields(vertices = self.vertices.len(), radius = self.max_distance),
    )]
    pub(crate) fn build_edges_with(&mut self, backend: Backend) {
        self.clear_edges();
        let pairs = build::connected_pairs(&self.vertices, self.max_distance, backend);
        self.edges.reserve(pairs.len());
        for (left, right, weight) in pairs {
            self.connect(left, right, weight);
        }
        debug!(edges = self.edges.len(), "edge construction completed");
    }

    fn connect(&mut self, left: usize, right: usize, weight: f64) {
        let (first, second) = (VertexId(left), VertexId(right));
        if let Some(vertex) = self.vertices.get_mut(left) {
            vertex.neighbours.push(second);
        }
        if let Some(vertex) = self.vertices.get_mut(right) {
            vertex.neighbours.push(first);
        }
        self.edges.push(Edge::new(first, second, weight));
    }

    /// Removes every edge and neighbour entry but keeps vertex positions.
    pub fn clear_edges(&mut self) {
        for vertex in &mut self.vertices {
            vertex.neighbours.clear();
        }
        self.edges.clear();
    }

    /// Removes every vertex and edge.
    pub fn clear_all(&mut self) {
        self.vertices.clear();
        self.edges.clear();
    }

    /// Returns the vertices in creation order.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the edges in creation order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the number of vertices currently in the graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges currently in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Looks up a vertex by handle.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.0)
    }

    /// Looks up an edge by handle.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0)
    }

    /// Returns the position of `id`, if it exists.
    #[must_use]
    pub fn position(&self, id: VertexId) -> Option<Point> {
        self.vertex(id).map(Vertex::position)
    }

    /// Returns the neighbours of `id`, or an empty slice for unknown handles.
    #[must_use]
    pub fn neighbours(&self, id: VertexId) -> &[VertexId] {
        self.vertex(id).map_or(&[], Vertex::neighbours)
    }

    /// Iterates vertex handles in creation order.
    pub fn vertex_ids(&self) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId)
    }

    /// Iterates edge handles in creation order.
    pub fn edge_ids(&self) -> impl ExactSizeIterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(EdgeId)
    }

    /// Returns the two endpoint positions of `edge`.
    ///
    /// Edges are only created by this graph, so both endpoints always exist;
    /// a foreign edge with dangling handles maps them to the origin.
    #[must_use]
    pub fn segment(&self, edge: &Edge) -> (Point, Point) {
        let first = self.position(edge.first).unwrap_or_default();
        let second = self.position(edge.second).unwrap_or_default();
        (first, second)
    }

    /// Checks that `id` refers to a vertex of this graph.
    ///
    /// # Errors
    /// Returns [`UdgError::UnknownVertex`] for handles outside the arena.
    pub fn check_vertex(&self, id: VertexId) -> Result<()> {
        if id.0 < self.vertices.len() {
            Ok(())
        } else {
            Err(UdgError::UnknownVertex {
                index: id.0,
                vertex_count: self.vertices.len(),
            })
        }
    }

    /// Recomputes the length of `edge` from the current positions.
    #[must_use]
    pub fn measured_length(&self, edge: &Edge) -> f64 {
        let (first, second) = self.segment(edge);
        distance(first, second)
    }
}
