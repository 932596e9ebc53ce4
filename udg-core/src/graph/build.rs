//! Vertex generation and the exact pairwise edge scan.

use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{builder::Backend, geometry::Point};

use super::Vertex;

/// Draws `count` points with both coordinates uniform in `[0, 1)`.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use udg_core::generate_points;
///
/// let points = generate_points(16, &mut SmallRng::seed_from_u64(1));
/// assert_eq!(points.len(), 16);
/// assert!(points.iter().all(|p| (0.0..1.0).contains(&p.x()) && (0.0..1.0).contains(&p.y())));
/// ```
pub fn generate_points<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Point> {
    (0..count)
        .map(|_| {
            let x = rng.r#gen::<f64>();
            let y = rng.r#gen::<f64>();
            Point::new(x, y)
        })
        .collect()
}

/// Every pair `(i, j)` with `i < j` and `distance <= radius`, in row-major
/// order, together with its length.
pub(super) fn connected_pairs(
    vertices: &[Vertex],
    radius: f64,
    backend: Backend,
) -> Vec<(usize, usize, f64)> {
    match backend {
        Backend::Sequential => (0..vertices.len())
            .flat_map(|row| row_pairs(vertices, row, radius))
            .collect(),
        #[cfg(feature = "parallel")]
        Backend::Parallel => (0..vertices.len())
            .into_par_iter()
            .flat_map_iter(|row| row_pairs(vertices, row, radius))
            .collect(),
    }
}

fn row_pairs(
    vertices: &[Vertex],
    row: usize,
    radius: f64,
) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
    let origin = vertices.get(row).map(Vertex::position).unwrap_or_default();
    vertices
        .iter()
        .enumerate()
        .skip(row + 1)
        .filter_map(move |(column, other)| {
            let weight = origin.distance_to(other.position);
            (weight <= radius).then_some((row, column, weight))
        })
}
