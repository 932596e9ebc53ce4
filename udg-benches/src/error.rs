//! Benchmark setup error type.

use udg_core::UdgError;

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// The engine rejected the graph parameters.
    #[error("graph setup failed: {0}")]
    Core(#[from] UdgError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// The parameter that was unexpectedly zero.
        context: &'static str,
    },
}
