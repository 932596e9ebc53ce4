//! Coordinate fixtures shared by the unit and integration tests.
//!
//! Coordinates are plain `(x, y)` tuples so the fixtures stay independent of
//! the engine's point type. Spacings are powers of two, which keeps the
//! distances between collinear fixture points exact in `f64`.

/// Corners of the unit square in the order `(0,0)`, `(1,0)`, `(0,1)`, `(1,1)`.
///
/// With a threshold of `1.5` these form six edges whose two diagonals cross.
#[must_use]
pub const fn unit_square() -> [(f64, f64); 4] {
    [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)]
}

/// `count` points on the horizontal line `y = 0.5`, `spacing` apart,
/// starting at `x = 0`.
///
/// # Examples
/// ```
/// use udg_test_support::fixtures::collinear_chain;
///
/// let chain = collinear_chain(3, 0.25);
/// assert_eq!(chain, vec![(0.0, 0.5), (0.25, 0.5), (0.5, 0.5)]);
/// ```
#[must_use]
pub fn collinear_chain(count: u32, spacing: f64) -> Vec<(f64, f64)> {
    (0..count)
        .map(|step| (f64::from(step) * spacing, 0.5))
        .collect()
}

/// A regular `side × side` lattice with the given spacing, row by row.
///
/// # Examples
/// ```
/// use udg_test_support::fixtures::lattice;
///
/// let grid = lattice(2, 0.5);
/// assert_eq!(grid, vec![(0.0, 0.0), (0.5, 0.0), (0.0, 0.5), (0.5, 0.5)]);
/// ```
#[must_use]
pub fn lattice(side: u32, spacing: f64) -> Vec<(f64, f64)> {
    (0..side)
        .flat_map(|row| {
            (0..side).map(move |column| (f64::from(column) * spacing, f64::from(row) * spacing))
        })
        .collect()
}
