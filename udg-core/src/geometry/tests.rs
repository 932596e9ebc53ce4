//! Unit tests for the planar primitives.

use rstest::rstest;

use super::{Orientation, Point, distance, orientation, polygon_contains, segments_intersect};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[rstest]
#[case::unit_horizontal(p(0.0, 0.0), p(1.0, 0.0), 1.0)]
#[case::pythagorean(p(1.0, 1.0), p(4.0, 5.0), 5.0)]
#[case::coincident(p(0.3, 0.3), p(0.3, 0.3), 0.0)]
#[case::dyadic_step(p(0.375, 0.5), p(0.5, 0.5), 0.125)]
fn distance_matches_euclidean_norm(#[case] a: Point, #[case] b: Point, #[case] expected: f64) {
    assert_eq!(distance(a, b), expected);
    assert_eq!(distance(b, a), expected);
    assert_eq!(a.distance_to(b), expected);
}

#[test]
fn diagonal_distance_is_sqrt_two() {
    let d = distance(p(0.0, 0.0), p(1.0, 1.0));
    assert!((d - std::f64::consts::SQRT_2).abs() < 1e-12);
}

#[rstest]
#[case(p(0.0, 0.0), p(1.0, 0.0), p(0.5, 1.0), Orientation::CounterClockwise)]
#[case(p(0.0, 0.0), p(1.0, 0.0), p(0.5, -1.0), Orientation::Clockwise)]
#[case(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), Orientation::Collinear)]
fn orientation_follows_cross_product_sign(
    #[case] a: Point,
    #[case] b: Point,
    #[case] c: Point,
    #[case] expected: Orientation,
) {
    assert_eq!(orientation(a, b, c), expected);
}

#[rstest]
#[case::square_diagonals(p(0.0, 0.0), p(1.0, 1.0), p(1.0, 0.0), p(0.0, 1.0), true)]
#[case::plus_sign(p(0.5, 0.0), p(0.5, 1.0), p(0.0, 0.5), p(1.0, 0.5), true)]
#[case::parallel(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), false)]
#[case::disjoint(p(0.0, 0.0), p(0.2, 0.2), p(0.8, 0.0), p(1.0, 0.5), false)]
#[case::collinear_separate(p(0.0, 0.0), p(0.25, 0.0), p(0.5, 0.0), p(0.75, 0.0), false)]
#[case::collinear_overlap(p(0.0, 0.0), p(0.5, 0.0), p(0.25, 0.0), p(0.75, 0.0), false)]
#[case::t_junction(p(0.0, 0.0), p(1.0, 0.0), p(0.5, 0.0), p(0.5, 1.0), false)]
#[case::near_miss(p(0.0, 0.0), p(1.0, 0.0), p(0.5, 0.001), p(0.5, 1.0), false)]
fn segments_intersect_requires_proper_crossing(
    #[case] a1: Point,
    #[case] a2: Point,
    #[case] b1: Point,
    #[case] b2: Point,
    #[case] expected: bool,
) {
    assert_eq!(segments_intersect(a1, a2, b1, b2), expected);
    assert_eq!(segments_intersect(b1, b2, a1, a2), expected);
    assert_eq!(segments_intersect(a2, a1, b2, b1), expected);
}

#[rstest]
#[case::centre(p(0.5, 0.5), true)]
#[case::near_corner(p(0.99, 0.01), true)]
#[case::left_outside(p(-0.1, 0.5), false)]
#[case::above_outside(p(0.5, 1.1), false)]
fn axis_aligned_square_containment(#[case] point: Point, #[case] expected: bool) {
    let square = [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
    assert_eq!(polygon_contains(&square, point), expected);
}

#[test]
fn rotated_quad_containment_ignores_winding() {
    let diamond = [p(0.5, 0.0), p(1.0, 0.5), p(0.5, 1.0), p(0.0, 0.5)];
    let reversed: Vec<Point> = diamond.iter().rev().copied().collect();
    for ring in [&diamond[..], &reversed[..]] {
        assert!(polygon_contains(ring, p(0.5, 0.5)));
        assert!(polygon_contains(ring, p(0.6, 0.3)));
        assert!(!polygon_contains(ring, p(0.1, 0.1)));
        assert!(!polygon_contains(ring, p(0.9, 0.9)));
    }
}

#[test]
fn degenerate_rings_contain_nothing() {
    assert!(!polygon_contains(&[], p(0.0, 0.0)));
    assert!(!polygon_contains(&[p(0.0, 0.0), p(1.0, 1.0)], p(0.5, 0.5)));
}
