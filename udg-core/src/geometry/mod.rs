//! Planar geometry primitives used by the graph analysers.
//!
//! Everything here works on `f64` coordinates in the plane. The predicates are
//! exact sign tests over cross products; no tolerance is applied, matching
//! the exact pairwise contract of the edge builder.

mod polygon;

pub use self::polygon::polygon_contains;

/// A point in the plane.
///
/// # Examples
/// ```
/// use udg_core::Point;
///
/// let p = Point::new(0.25, 0.75);
/// assert_eq!(p.x(), 0.25);
/// assert_eq!(p.y(), 0.75);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the horizontal coordinate.
    #[must_use]
    #[rustfmt::skip]
    pub const fn x(self) -> f64 { self.x }

    /// Returns the vertical coordinate.
    #[must_use]
    #[rustfmt::skip]
    pub const fn y(self) -> f64 { self.y }

    /// Returns the Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        distance(self, other)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Computes the Euclidean distance `sqrt(dx² + dy²)` between two points.
///
/// # Examples
/// ```
/// use udg_core::{Point, distance};
///
/// let d = distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
/// assert_eq!(d, 5.0);
/// ```
#[must_use]
pub fn distance(p: Point, q: Point) -> f64 {
    let dx = q.x - p.x;
    let dy = q.y - p.y;
    (dx * dx + dy * dy).sqrt()
}

/// Turn direction of an ordered point triple.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Orientation {
    /// `c` lies to the left of the directed line `a -> b`.
    CounterClockwise,
    /// `c` lies to the right of the directed line `a -> b`.
    Clockwise,
    /// The three points are collinear.
    Collinear,
}

/// Classifies the triple `(a, b, c)` by the sign of the cross product
/// `(b - a) × (c - a)`.
#[must_use]
pub fn orientation(a: Point, b: Point, c: Point) -> Orientation {
    let cross = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
    if cross > 0.0 {
        Orientation::CounterClockwise
    } else if cross < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Returns `true` when segments `a1a2` and `b1b2` properly cross.
///
/// A proper crossing requires each segment's endpoints to lie strictly on
/// opposite sides of the other segment's supporting line. Touching contacts
/// and collinear overlaps are not crossings. Callers never pass segments that
/// share an endpoint.
///
/// # Examples
/// ```
/// use udg_core::{Point, segments_intersect};
///
/// let crossing = segments_intersect(
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
///     Point::new(0.0, 1.0),
/// );
/// assert!(crossing);
/// ```
#[must_use]
pub fn segments_intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    straddles(orientation(a1, a2, b1), orientation(a1, a2, b2))
        && straddles(orientation(b1, b2, a1), orientation(b1, b2, a2))
}

fn straddles(first: Orientation, second: Orientation) -> bool {
    matches!(
        (first, second),
        (Orientation::Clockwise, Orientation::CounterClockwise)
            | (Orientation::CounterClockwise, Orientation::Clockwise)
    )
}

#[cfg(test)]
mod tests;
