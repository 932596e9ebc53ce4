//! Point-in-polygon containment.

use super::Point;

/// Tests whether `point` lies inside the closed ring `ring` using the
/// even-odd (crossing number) rule.
///
/// The ring is implicitly closed: the last vertex connects back to the first.
/// Rings with fewer than three vertices contain nothing. Points exactly on
/// the boundary may land on either side.
///
/// # Examples
/// ```
/// use udg_core::{Point, polygon_contains};
///
/// let square = [
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ];
/// assert!(polygon_contains(&square, Point::new(0.5, 0.5)));
/// assert!(!polygon_contains(&square, Point::new(1.5, 0.5)));
/// ```
#[must_use]
pub fn polygon_contains(ring: &[Point], point: Point) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let successors = ring.iter().cycle().skip(1);
    ring.iter()
        .zip(successors)
        .filter(|&(start, end)| ray_crosses(*start, *end, point))
        .count()
        % 2
        == 1
}

/// Whether the horizontal ray cast rightwards from `point` crosses the
/// half-open edge `start -> end`.
fn ray_crosses(start: Point, end: Point, point: Point) -> bool {
    if (start.y() > point.y()) == (end.y() > point.y()) {
        return false;
    }
    let t = (point.y() - start.y()) / (end.y() - start.y());
    let crossing_x = start.x() + t * (end.x() - start.x());
    point.x() < crossing_x
}
