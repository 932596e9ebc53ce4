//! Stateful analysis engine.
//!
//! [`UnitDiskAnalyzer`] keeps one graph alive between runs so that changing
//! only the radius reuses the vertex positions, while changing the vertex
//! count draws fresh ones.

use std::num::NonZeroUsize;

use rand::rngs::SmallRng;
use tracing::{instrument, warn};

use crate::{
    Result,
    builder::ExecutionStrategy,
    cancel::{CancellationToken, PipelineStage},
    components::{ComponentPartition, SizeHistogram},
    crossing::CrossingAnalysis,
    error::{UdgError, validate_radius},
    graph::UnitDiskGraph,
    pipeline::{checkpoint, run_stages, seeded_rng},
    result::{GraphAnalysis, GraphStatistics},
    super_free::SuperFreeClassification,
};

/// Analysis engine over a single random unit disk graph.
///
/// # Examples
/// ```
/// use udg_core::AnalyzerBuilder;
///
/// let mut analyzer = AnalyzerBuilder::new()
///     .with_vertex_count(150)
///     .with_radius(0.12)
///     .with_seed(4)
///     .build()?;
/// let statistics = analyzer.rebuild()?;
/// assert_eq!(statistics.vertex_count, 150);
/// assert_eq!(
///     statistics.free_edge_count + statistics.intersecting_edge_count,
///     statistics.edge_count
/// );
/// assert_eq!(analyzer.components()?.vertex_count(), 150);
/// # Ok::<(), udg_core::UdgError>(())
/// ```
#[derive(Debug, Clone)]
pub struct UnitDiskAnalyzer {
    graph: UnitDiskGraph,
    radius: f64,
    seed: Option<u64>,
    rng: SmallRng,
    execution_strategy: ExecutionStrategy,
    analysis: Option<GraphAnalysis>,
}

impl UnitDiskAnalyzer {
    pub(crate) fn new(
        vertex_count: NonZeroUsize,
        radius: f64,
        seed: Option<u64>,
        execution_strategy: ExecutionStrategy,
    ) -> Self {
        Self {
            graph: UnitDiskGraph::new(vertex_count),
            radius,
            seed,
            rng: seeded_rng(seed),
            execution_strategy,
            analysis: None,
        }
    }

    /// Returns the number of vertices the next generation produces.
    #[must_use]
    pub const fn vertex_count(&self) -> NonZeroUsize {
        self.graph.target_vertex_count()
    }

    /// Returns the configured connection radius.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the generation seed, if one was configured.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the execution strategy used by [`Self::rebuild`].
    #[must_use]
    pub const fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Returns the current graph.
    #[must_use]
    pub const fn graph(&self) -> &UnitDiskGraph {
        &self.graph
    }

    /// Replaces the vertex count and radius.
    ///
    /// Changing the vertex count discards the current positions; keeping it
    /// preserves them so only the edges change on the next rebuild. Either
    /// way the previous analysis is invalidated.
    ///
    /// # Errors
    /// Returns [`UdgError::InvalidVertexCount`] or [`UdgError::InvalidRadius`]
    /// and leaves every piece of state untouched.
    ///
    /// # Examples
    /// ```
    /// use udg_core::{AnalyzerBuilder, UdgError};
    ///
    /// let mut analyzer = AnalyzerBuilder::new().with_radius(0.2).build()?;
    /// let err = analyzer.configure(100, -1.0).unwrap_err();
    /// assert_eq!(err, UdgError::InvalidRadius { got: -1.0 });
    /// assert_eq!(analyzer.vertex_count().get(), 1000);
    /// assert_eq!(analyzer.radius(), 0.2);
    /// # Ok::<(), UdgError>(())
    /// ```
    pub fn configure(&mut self, vertex_count: usize, radius: f64) -> Result<()> {
        let (count, radius) = validate_configuration(vertex_count, radius)
            .inspect_err(|error| warn!(%error, "rejected configuration; keeping previous values"))?;

        if count != self.graph.target_vertex_count() {
            self.graph.set_target_vertex_count(count);
            self.graph.clear_all();
        } else {
            self.graph.clear_edges();
        }
        self.radius = radius;
        self.analysis = None;
        Ok(())
    }

    /// Rebuilds edges and reruns every analysis stage.
    ///
    /// # Errors
    /// Returns [`UdgError::BackendUnavailable`] when the configured strategy
    /// is not compiled in.
    pub fn rebuild(&mut self) -> Result<GraphStatistics> {
        self.rebuild_with(&CancellationToken::new())
    }

    /// Like [`Self::rebuild`], stopping between stages once `cancel` fires.
    ///
    /// Vertices are generated when none exist or the configured count
    /// differs from the current one; otherwise the positions are reused.
    ///
    /// # Errors
    /// Returns [`UdgError::BackendUnavailable`] when the configured strategy
    /// is not compiled in and [`UdgError::Cancelled`] when `cancel` fires.
    /// After a cancellation no analysis is available and the graph has no
    /// edges.
    #[instrument(
        name = "core.rebuild",
        err,
        skip(self, cancel),
        fields(
            vertices = self.graph.target_vertex_count().get(),
            radius = self.radius,
            strategy = ?self.execution_strategy,
        ),
    )]
    pub fn rebuild_with(&mut self, cancel: &CancellationToken) -> Result<GraphStatistics> {
        let backend = self.execution_strategy.resolve()?;
        self.analysis = None;

        if self.graph.vertex_count() != self.graph.target_vertex_count().get() {
            checkpoint(cancel, PipelineStage::Generate)?;
            self.graph.generate(&mut self.rng);
        }
        self.graph.set_threshold(self.radius)?;

        let analysis = run_stages(&mut self.graph, backend, cancel)?;
        let statistics = analysis.statistics();
        self.analysis = Some(analysis);
        Ok(statistics)
    }

    /// Discards the current positions, draws fresh ones, and rebuilds.
    ///
    /// # Errors
    /// See [`Self::rebuild`].
    pub fn regenerate(&mut self) -> Result<GraphStatistics> {
        self.regenerate_with(&CancellationToken::new())
    }

    /// Like [`Self::regenerate`], stopping between stages once `cancel` fires.
    ///
    /// # Errors
    /// See [`Self::rebuild_with`].
    pub fn regenerate_with(&mut self, cancel: &CancellationToken) -> Result<GraphStatistics> {
        self.graph.clear_all();
        self.rebuild_with(cancel)
    }

    /// Returns every stage output from the last successful rebuild.
    ///
    /// # Errors
    /// Returns [`UdgError::ComponentsNotComputed`] when no rebuild has
    /// completed since construction or the last [`Self::configure`].
    pub fn analysis(&self) -> Result<&GraphAnalysis> {
        self.analysis.as_ref().ok_or(UdgError::ComponentsNotComputed)
    }

    /// Returns the counters from the last successful rebuild.
    ///
    /// # Errors
    /// See [`Self::analysis`].
    pub fn statistics(&self) -> Result<GraphStatistics> {
        self.analysis().map(GraphAnalysis::statistics)
    }

    /// Returns the component partition.
    ///
    /// # Errors
    /// See [`Self::analysis`].
    ///
    /// # Examples
    /// ```
    /// use udg_core::{AnalyzerBuilder, UdgError};
    ///
    /// let analyzer = AnalyzerBuilder::new().with_vertex_count(5).build()?;
    /// assert_eq!(analyzer.components().unwrap_err(), UdgError::ComponentsNotComputed);
    /// # Ok::<(), UdgError>(())
    /// ```
    pub fn components(&self) -> Result<&ComponentPartition> {
        self.analysis().map(GraphAnalysis::components)
    }

    /// Returns the crossing analysis.
    ///
    /// # Errors
    /// See [`Self::analysis`].
    pub fn crossings(&self) -> Result<&CrossingAnalysis> {
        self.analysis().map(GraphAnalysis::crossings)
    }

    /// Returns the super-free classification.
    ///
    /// # Errors
    /// See [`Self::analysis`].
    pub fn super_free(&self) -> Result<&SuperFreeClassification> {
        self.analysis().map(GraphAnalysis::super_free)
    }

    /// Counts components with at least `k` vertices.
    ///
    /// # Errors
    /// See [`Self::analysis`].
    pub fn count_at_least(&self, k: usize) -> Result<usize> {
        Ok(self.components()?.count_at_least(k))
    }

    /// Counts components with exactly `k` vertices.
    ///
    /// # Errors
    /// See [`Self::analysis`].
    pub fn count_exactly(&self, k: usize) -> Result<usize> {
        Ok(self.components()?.count_exactly(k))
    }

    /// Returns the size of the largest component.
    ///
    /// # Errors
    /// See [`Self::analysis`].
    pub fn largest_size(&self) -> Result<usize> {
        Ok(self.components()?.largest_size())
    }

    /// Tabulates component sizes `1..=limit`.
    ///
    /// # Errors
    /// See [`Self::analysis`].
    pub fn size_histogram(&self, limit: usize) -> Result<SizeHistogram> {
        Ok(self.components()?.size_histogram(limit))
    }
}

fn validate_configuration(vertex_count: usize, radius: f64) -> Result<(NonZeroUsize, f64)> {
    let count =
        NonZeroUsize::new(vertex_count).ok_or(UdgError::InvalidVertexCount { got: vertex_count })?;
    Ok((count, validate_radius(radius)?))
}
