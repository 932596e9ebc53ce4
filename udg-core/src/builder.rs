//! Builder utilities for configuring the analysis engine.
//!
//! Exposes the execution strategy selection surface and the validation run
//! before constructing [`UnitDiskAnalyzer`] instances.

use std::num::NonZeroUsize;

use crate::{
    Result,
    analyzer::UnitDiskAnalyzer,
    error::{UdgError, validate_radius},
    radius::RadiusParams,
};

/// Indicates how the O(n²) edge scan and the O(E²) crossing scan are
/// executed when [`UnitDiskAnalyzer::rebuild`] is invoked.
///
/// `Auto` resolves deterministically: it selects the rayon backend when the
/// `parallel` feature is compiled in and the sequential loop otherwise. Both
/// backends produce identical results.
///
/// # Examples
/// ```
/// use udg_core::ExecutionStrategy;
///
/// let strategy = ExecutionStrategy::Auto;
/// assert!(matches!(strategy, ExecutionStrategy::Auto));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Allow the library to select an appropriate backend automatically.
    Auto,
    /// Run every stage on the calling thread.
    Sequential,
    /// Spread pairwise scans across the rayon thread pool.
    Parallel,
}

/// Concrete backend an [`ExecutionStrategy`] resolves to in this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Backend {
    Sequential,
    #[cfg(feature = "parallel")]
    Parallel,
}

impl ExecutionStrategy {
    /// Maps the strategy onto a backend compiled into this build.
    pub(crate) fn resolve(self) -> Result<Backend> {
        match self {
            #[cfg(feature = "parallel")]
            Self::Auto | Self::Parallel => Ok(Backend::Parallel),
            #[cfg(not(feature = "parallel"))]
            Self::Auto => Ok(Backend::Sequential),
            #[cfg(not(feature = "parallel"))]
            Self::Parallel => Err(UdgError::BackendUnavailable {
                requested: Self::Parallel,
            }),
            Self::Sequential => Ok(Backend::Sequential),
        }
    }
}

/// How the builder obtains the connection radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RadiusSource {
    /// Use the given radius verbatim.
    Fixed(f64),
    /// Derive the radius as `n^-(a/b + ε)` from the vertex count.
    Derived(RadiusParams),
}

/// Configures and constructs [`UnitDiskAnalyzer`] instances.
///
/// # Examples
/// ```
/// use udg_core::{AnalyzerBuilder, ExecutionStrategy};
///
/// let analyzer = AnalyzerBuilder::new()
///     .with_vertex_count(200)
///     .with_radius(0.1)
///     .with_seed(42)
///     .with_execution_strategy(ExecutionStrategy::Sequential)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(analyzer.vertex_count().get(), 200);
/// assert_eq!(analyzer.radius(), 0.1);
/// assert_eq!(analyzer.execution_strategy(), ExecutionStrategy::Sequential);
/// ```
#[derive(Debug, Clone)]
pub struct AnalyzerBuilder {
    vertex_count: usize,
    radius: RadiusSource,
    seed: Option<u64>,
    execution_strategy: ExecutionStrategy,
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self {
            vertex_count: 1000,
            radius: RadiusSource::Derived(RadiusParams::default()),
            seed: None,
            execution_strategy: ExecutionStrategy::Auto,
        }
    }
}

impl AnalyzerBuilder {
    /// Creates a builder populated with default parameters: 1000 vertices,
    /// radius `1/n`, an entropy seed, and [`ExecutionStrategy::Auto`].
    ///
    /// # Examples
    /// ```
    /// use udg_core::{AnalyzerBuilder, ExecutionStrategy};
    ///
    /// let builder = AnalyzerBuilder::new();
    /// assert_eq!(builder.vertex_count(), 1000);
    /// assert_eq!(builder.seed(), None);
    /// assert_eq!(builder.execution_strategy(), ExecutionStrategy::Auto);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of vertices to generate.
    #[must_use]
    pub fn with_vertex_count(mut self, count: usize) -> Self {
        self.vertex_count = count;
        self
    }

    /// Returns the configured vertex count.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Uses a fixed connection radius.
    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = RadiusSource::Fixed(radius);
        self
    }

    /// Derives the connection radius from `(a, b, ε)` and the vertex count.
    ///
    /// # Examples
    /// ```
    /// use udg_core::{AnalyzerBuilder, RadiusParams};
    ///
    /// let params = RadiusParams::new(1.0, 2.0, 0.0)?;
    /// let analyzer = AnalyzerBuilder::new()
    ///     .with_vertex_count(400)
    ///     .with_radius_params(params)
    ///     .build()?;
    /// assert!((analyzer.radius() - 0.05).abs() < 1e-12);
    /// # Ok::<(), udg_core::UdgError>(())
    /// ```
    #[must_use]
    pub fn with_radius_params(mut self, params: RadiusParams) -> Self {
        self.radius = RadiusSource::Derived(params);
        self
    }

    /// Returns how the radius will be obtained.
    #[must_use]
    pub fn radius_source(&self) -> RadiusSource {
        self.radius
    }

    /// Seeds vertex generation for reproducible runs.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Sets the execution strategy to use when rebuilding.
    #[must_use]
    pub fn with_execution_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.execution_strategy = strategy;
        self
    }

    /// Returns the currently configured execution strategy.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Validates the configuration and constructs a [`UnitDiskAnalyzer`].
    ///
    /// # Errors
    /// Returns [`UdgError::InvalidVertexCount`] for a zero vertex count and
    /// [`UdgError::InvalidRadius`] when the fixed or derived radius is
    /// negative or not finite.
    ///
    /// # Examples
    /// ```
    /// use udg_core::{AnalyzerBuilder, UdgError};
    ///
    /// let err = AnalyzerBuilder::new().with_vertex_count(0).build().unwrap_err();
    /// assert_eq!(err, UdgError::InvalidVertexCount { got: 0 });
    /// ```
    pub fn build(self) -> Result<UnitDiskAnalyzer> {
        let vertex_count = NonZeroUsize::new(self.vertex_count).ok_or(
            UdgError::InvalidVertexCount {
                got: self.vertex_count,
            },
        )?;
        let radius = match self.radius {
            RadiusSource::Fixed(radius) => validate_radius(radius)?,
            RadiusSource::Derived(params) => params.radius_for(vertex_count)?,
        };

        Ok(UnitDiskAnalyzer::new(
            vertex_count,
            radius,
            self.seed,
            self.execution_strategy,
        ))
    }
}
