//! Derived connection radius `r = n^-(a/b + ε)`.
//!
//! The tuning scalars belong to the caller; the engine only validates them and
//! consumes the final radius.

use std::num::NonZeroUsize;

use crate::{
    Result,
    error::{UdgError, validate_radius},
};

/// Tuning scalars for the derived radius.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
///
/// use udg_core::RadiusParams;
///
/// let params = RadiusParams::new(1.0, 2.0, 0.0)?;
/// let n = NonZeroUsize::new(100).expect("non-zero");
/// assert!((params.radius_for(n)? - 0.1).abs() < 1e-12);
/// # Ok::<(), udg_core::UdgError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusParams {
    numerator: f64,
    denominator: f64,
    epsilon: f64,
}

impl Default for RadiusParams {
    fn default() -> Self {
        Self {
            numerator: 1.0,
            denominator: 1.0,
            epsilon: 0.0,
        }
    }
}

impl RadiusParams {
    /// Validates and stores `a`, `b`, and `ε`.
    ///
    /// # Errors
    /// Returns [`UdgError::NonFiniteParameter`] when any scalar is NaN or
    /// infinite, and [`UdgError::ZeroDenominator`] when `b == 0`.
    pub fn new(numerator: f64, denominator: f64, epsilon: f64) -> Result<Self> {
        let numerator = finite("a", numerator)?;
        let denominator = finite("b", denominator)?;
        let epsilon = finite("epsilon", epsilon)?;
        if denominator == 0.0 {
            return Err(UdgError::ZeroDenominator);
        }
        Ok(Self {
            numerator,
            denominator,
            epsilon,
        })
    }

    /// Returns `a`.
    #[rustfmt::skip]
    #[must_use]
    pub const fn numerator(&self) -> f64 { self.numerator }

    /// Returns `b`.
    #[rustfmt::skip]
    #[must_use]
    pub const fn denominator(&self) -> f64 { self.denominator }

    /// Returns `ε`.
    #[rustfmt::skip]
    #[must_use]
    pub const fn epsilon(&self) -> f64 { self.epsilon }

    /// Returns the exponent `a / b + ε`.
    #[must_use]
    pub fn exponent(&self) -> f64 {
        self.numerator / self.denominator + self.epsilon
    }

    /// Computes `vertex_count^-(a/b + ε)`.
    ///
    /// # Errors
    /// Returns [`UdgError::InvalidRadius`] when the result is not a finite,
    /// non-negative number (for example when the exponent overflows).
    pub fn radius_for(&self, vertex_count: NonZeroUsize) -> Result<f64> {
        let n = vertex_count.get() as f64;
        validate_radius(n.powf(-self.exponent()))
    }
}

/// Computes `vertex_count^-(a/b + ε)` from raw caller input.
///
/// # Errors
/// Returns [`UdgError::InvalidVertexCount`] for a zero count and the errors of
/// [`RadiusParams::new`] and [`RadiusParams::radius_for`] otherwise.
///
/// # Examples
/// ```
/// use udg_core::{UdgError, radius_for};
///
/// assert!((radius_for(1000, 1.0, 1.0, 0.0)? - 0.001).abs() < 1e-15);
/// assert_eq!(radius_for(1000, 1.0, 0.0, 0.0), Err(UdgError::ZeroDenominator));
/// # Ok::<(), UdgError>(())
/// ```
pub fn radius_for(vertex_count: usize, numerator: f64, denominator: f64, epsilon: f64) -> Result<f64> {
    let count =
        NonZeroUsize::new(vertex_count).ok_or(UdgError::InvalidVertexCount { got: vertex_count })?;
    RadiusParams::new(numerator, denominator, epsilon)?.radius_for(count)
}

fn finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(UdgError::NonFiniteParameter { name, value })
    }
}
