//! Error types for the unit disk graph core library.
//!
//! Defines the error enum exposed by the public API, its stable machine codes,
//! the coarse category used by callers to decide how to react, and a
//! convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::{builder::ExecutionStrategy, cancel::PipelineStage};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Broad classification of [`UdgError`] variants.
///
/// Every failure in the engine is deterministic for a given input, so there
/// is no retryable category.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorCategory {
    /// The caller supplied a value outside the accepted domain.
    InvalidParameter,
    /// The caller queried state that has not been computed yet.
    PreconditionViolation,
    /// The pipeline observed a cancellation request between stages.
    Interrupted,
}

/// Error type produced when configuring or running the analysis engine.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum UdgError {
    /// The graph must contain at least one vertex.
    #[error("vertex count must be at least 1 (got {got})")]
    InvalidVertexCount {
        /// The invalid vertex count supplied by the caller.
        got: usize,
    },
    /// The distance threshold must be finite and non-negative.
    #[error("radius must be finite and non-negative (got {got})")]
    InvalidRadius {
        /// The rejected radius.
        got: f64,
    },
    /// The radius exponent `a / b` was requested with `b == 0`.
    #[error("radius exponent denominator must not be zero")]
    ZeroDenominator,
    /// A radius tuning scalar was NaN or infinite.
    #[error("radius parameter `{name}` must be finite (got {value})")]
    NonFiniteParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A vertex handle did not refer to a vertex of the graph.
    #[error("vertex {index} does not exist in a graph of {vertex_count} vertices")]
    UnknownVertex {
        /// Index carried by the rejected handle.
        index: usize,
        /// Number of vertices in the graph that was queried.
        vertex_count: usize,
    },
    /// The requested execution strategy is unavailable in the current build.
    #[error("the requested execution strategy {requested:?} is not available in this build")]
    BackendUnavailable {
        /// Strategy that could not be satisfied by the current build.
        requested: ExecutionStrategy,
    },
    /// Component statistics were queried before a partition was computed.
    #[error("connected components have not been computed; call `rebuild` first")]
    ComponentsNotComputed,
    /// The pipeline stopped because cancellation was requested.
    #[error("recomputation cancelled before stage `{stage}`")]
    Cancelled {
        /// Stage that would have run next.
        stage: PipelineStage,
    },
}

define_error_codes! {
    /// Stable codes describing [`UdgError`] variants.
    enum UdgErrorCode for UdgError {
        /// The graph must contain at least one vertex.
        InvalidVertexCount => InvalidVertexCount { .. } => "UDG_INVALID_VERTEX_COUNT",
        /// The distance threshold must be finite and non-negative.
        InvalidRadius => InvalidRadius { .. } => "UDG_INVALID_RADIUS",
        /// The radius exponent was requested with a zero denominator.
        ZeroDenominator => ZeroDenominator => "UDG_ZERO_DENOMINATOR",
        /// A radius tuning scalar was NaN or infinite.
        NonFiniteParameter => NonFiniteParameter { .. } => "UDG_NON_FINITE_PARAMETER",
        /// A vertex handle did not refer to a vertex of the graph.
        UnknownVertex => UnknownVertex { .. } => "UDG_UNKNOWN_VERTEX",
        /// The requested execution strategy is unavailable in the current build.
        BackendUnavailable => BackendUnavailable { .. } => "UDG_BACKEND_UNAVAILABLE",
        /// Component statistics were queried before a partition was computed.
        ComponentsNotComputed => ComponentsNotComputed => "UDG_COMPONENTS_NOT_COMPUTED",
        /// The pipeline stopped because cancellation was requested.
        Cancelled => Cancelled { .. } => "UDG_CANCELLED",
    }
}

impl UdgError {
    /// Returns the [`ErrorCategory`] this error belongs to.
    ///
    /// # Examples
    /// ```
    /// use udg_core::{ErrorCategory, UdgError};
    ///
    /// let error = UdgError::ComponentsNotComputed;
    /// assert_eq!(error.category(), ErrorCategory::PreconditionViolation);
    /// ```
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidVertexCount { .. }
            | Self::InvalidRadius { .. }
            | Self::ZeroDenominator
            | Self::NonFiniteParameter { .. }
            | Self::UnknownVertex { .. }
            | Self::BackendUnavailable { .. } => ErrorCategory::InvalidParameter,
            Self::ComponentsNotComputed => ErrorCategory::PreconditionViolation,
            Self::Cancelled { .. } => ErrorCategory::Interrupted,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, UdgError>;

/// Validates a distance threshold, returning it unchanged when accepted.
pub(crate) fn validate_radius(radius: f64) -> Result<f64> {
    if radius.is_finite() && radius >= 0.0 {
        Ok(radius)
    } else {
        Err(UdgError::InvalidRadius { got: radius })
    }
}
