//! Synchronous analysis pipeline.
//!
//! [`recompute_from`] owns every piece of state it touches, so a host can run
//! it on a worker thread and hand the finished [`AnalysisReport`] back. The
//! stages run in the order generate, build edges, crossings, super-free,
//! components; the cancellation token is consulted between stages only.

use std::num::NonZeroUsize;

use rand::{SeedableRng, rngs::SmallRng};
use tracing::{info, instrument, warn};

use crate::{
    Result,
    builder::{Backend, ExecutionStrategy},
    cancel::{CancellationToken, PipelineStage},
    components::ComponentPartition,
    crossing::CrossingAnalysis,
    error::{UdgError, validate_radius},
    graph::UnitDiskGraph,
    result::{AnalysisReport, GraphAnalysis},
    super_free::SuperFreeClassification,
};

/// Validated inputs of one pipeline run.
///
/// # Examples
/// ```
/// use udg_core::{AnalysisParams, ExecutionStrategy};
///
/// let params = AnalysisParams::new(100, 0.1)?
///     .with_seed(3)
///     .with_execution_strategy(ExecutionStrategy::Sequential);
/// assert_eq!(params.vertex_count().get(), 100);
/// assert_eq!(params.seed(), Some(3));
/// # Ok::<(), udg_core::UdgError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnalysisParams {
    vertex_count: NonZeroUsize,
    radius: f64,
    seed: Option<u64>,
    execution_strategy: ExecutionStrategy,
}

impl AnalysisParams {
    /// Validates the vertex count and radius.
    ///
    /// # Errors
    /// Returns [`UdgError::InvalidVertexCount`] when `vertex_count` is zero
    /// and [`UdgError::InvalidRadius`] when `radius` is negative or not
    /// finite.
    pub fn new(vertex_count: usize, radius: f64) -> Result<Self> {
        let count =
            NonZeroUsize::new(vertex_count).ok_or(UdgError::InvalidVertexCount { got: vertex_count })?;
        Ok(Self {
            vertex_count: count,
            radius: validate_radius(radius)?,
            seed: None,
            execution_strategy: ExecutionStrategy::Auto,
        })
    }

    /// Seeds vertex generation.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Selects the execution strategy for the pairwise scans.
    #[must_use]
    pub const fn with_execution_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.execution_strategy = strategy;
        self
    }

    /// Returns the number of vertices to generate.
    #[must_use]
    pub const fn vertex_count(&self) -> NonZeroUsize {
        self.vertex_count
    }

    /// Returns the connection radius.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the generation seed, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the execution strategy.
    #[must_use]
    pub const fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }
}

/// Generates a fresh graph from `params` and runs every analysis stage.
///
/// # Errors
/// Returns [`UdgError::BackendUnavailable`] when the requested strategy is not
/// compiled in and [`UdgError::Cancelled`] when `cancel` fires before a stage
/// starts.
///
/// # Examples
/// ```
/// use udg_core::{AnalysisParams, CancellationToken, recompute_from};
///
/// let params = AnalysisParams::new(64, 0.2)?.with_seed(9);
/// let report = recompute_from(&params, &CancellationToken::new())?;
/// assert_eq!(report.statistics().vertex_count, 64);
/// assert_eq!(report.analysis().components().vertex_count(), 64);
/// # Ok::<(), udg_core::UdgError>(())
/// ```
#[instrument(
    name = "core.recompute",
    err,
    skip(params, cancel),
    fields(
        vertices = params.vertex_count.get(),
        radius = params.radius,
        strategy = ?params.execution_strategy,
    ),
)]
pub fn recompute_from(params: &AnalysisParams, cancel: &CancellationToken) -> Result<AnalysisReport> {
    let backend = params.execution_strategy.resolve()?;
    checkpoint(cancel, PipelineStage::Generate)?;

    let mut graph = UnitDiskGraph::new(params.vertex_count);
    graph.generate(&mut seeded_rng(params.seed));
    graph.set_threshold(params.radius)?;

    let analysis = run_stages(&mut graph, backend, cancel)?;
    Ok(AnalysisReport::new(graph, analysis))
}

/// Returns a [`SmallRng`] seeded from `seed`, or from OS entropy when absent.
pub(crate) fn seeded_rng(seed: Option<u64>) -> SmallRng {
    seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64)
}

/// Builds edges on `graph` and runs the analysis stages over them.
///
/// A cancellation observed after edges were built clears them again so the
/// graph never carries adjacency without a matching analysis.
pub(crate) fn run_stages(
    graph: &mut UnitDiskGraph,
    backend: Backend,
    cancel: &CancellationToken,
) -> Result<GraphAnalysis> {
    checkpoint(cancel, PipelineStage::BuildEdges)?;
    graph.build_edges_with(backend);
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "edges built"
    );

    checkpoint_built(graph, cancel, PipelineStage::Crossings)?;
    let crossings = CrossingAnalysis::compute_with(graph, backend);
    info!(
        free = crossings.free().len(),
        intersecting = crossings.intersecting().len(),
        "crossings analysed"
    );

    checkpoint_built(graph, cancel, PipelineStage::SuperFree)?;
    let super_free = SuperFreeClassification::classify(graph, crossings.free());
    info!(super_free = super_free.len(), "super-free edges classified");

    checkpoint_built(graph, cancel, PipelineStage::Components)?;
    let components = ComponentPartition::compute(graph);
    info!(
        components = components.len(),
        largest = components.largest_size(),
        "components partitioned"
    );

    Ok(GraphAnalysis::new(graph, crossings, super_free, components))
}

pub(crate) fn checkpoint(cancel: &CancellationToken, stage: PipelineStage) -> Result<()> {
    if cancel.is_cancelled() {
        warn!(%stage, "recomputation cancelled");
        return Err(UdgError::Cancelled { stage });
    }
    Ok(())
}

fn checkpoint_built(
    graph: &mut UnitDiskGraph,
    cancel: &CancellationToken,
    stage: PipelineStage,
) -> Result<()> {
    checkpoint(cancel, stage).inspect_err(|_| graph.clear_edges())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::zero_vertices(0, 0.1)]
    #[case::negative_radius(10, -1.0)]
    #[case::nan_radius(10, f64::NAN)]
    fn invalid_params_are_rejected(#[case] vertex_count: usize, #[case] radius: f64) {
        assert!(AnalysisParams::new(vertex_count, radius).is_err());
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let params = AnalysisParams::new(80, 0.15)
            .expect("params are valid")
            .with_seed(21)
            .with_execution_strategy(ExecutionStrategy::Sequential);
        let first = recompute_from(&params, &CancellationToken::new()).expect("run succeeds");
        let second = recompute_from(&params, &CancellationToken::new()).expect("run succeeds");
        assert_eq!(first.statistics(), second.statistics());
        assert_eq!(first.graph().edges(), second.graph().edges());
    }

    #[test]
    fn cancelled_token_stops_before_generation() {
        let params = AnalysisParams::new(10, 0.5).expect("params are valid");
        let cancel = CancellationToken::new();
        cancel.cancel();
        assert_eq!(
            recompute_from(&params, &cancel).map(|report| report.statistics()),
            Err(UdgError::Cancelled {
                stage: PipelineStage::Generate
            })
        );
    }

    #[test]
    fn cancellation_after_build_clears_edges() {
        let mut graph = UnitDiskGraph::from_points([
            crate::Point::new(0.1, 0.1),
            crate::Point::new(0.2, 0.1),
        ])
        .expect("fixture has vertices");
        graph.set_threshold(0.5).expect("radius is valid");
        graph.build_edges();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = checkpoint_built(&mut graph, &cancel, PipelineStage::Crossings)
            .expect_err("cancelled token must stop the stage");
        assert_eq!(
            err,
            UdgError::Cancelled {
                stage: PipelineStage::Crossings
            }
        );
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.vertex_count(), 2);
    }
}
