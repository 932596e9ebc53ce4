//! Cooperative cancellation for pipeline recomputation.
//!
//! A recomputation is one unit of work from the caller's perspective. The
//! token is only consulted between stages so shared adjacency is never left
//! half-mutated by an abort.

use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

/// Stages of the analysis pipeline, in execution order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PipelineStage {
    /// Drawing vertex positions.
    Generate,
    /// Pairwise distance scan and adjacency construction.
    BuildEdges,
    /// Pairwise edge crossing detection.
    Crossings,
    /// Exclusion-region classification of free edges.
    SuperFree,
    /// Breadth-first component partitioning.
    Components,
}

impl PipelineStage {
    /// Returns the stable lowercase name used in logs and errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Generate => "generate",
            Self::BuildEdges => "build_edges",
            Self::Crossings => "crossings",
            Self::SuperFree => "super_free",
            Self::Components => "components",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared flag used to request that an in-flight recomputation stops.
///
/// Clones observe the same flag, so a host can keep one handle and move the
/// other to the worker running the pipeline.
///
/// # Examples
/// ```
/// use udg_core::CancellationToken;
///
/// let token = CancellationToken::new();
/// let worker_handle = token.clone();
/// assert!(!worker_handle.is_cancelled());
/// token.cancel();
/// assert!(worker_handle.is_cancelled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a token that has not been cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. The pipeline stops before its next stage.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Returns `true` once [`Self::cancel`] has been called on any clone.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}
