//! Orientation and containment predicates in the plane.
//!
//! Conventions
//! - All arithmetic is `f32`.
//! - `signed_area` is the raw determinant (twice the triangle area), positive
//!   for a counter-clockwise triple.
//! - Containment is strict: edges and corners are outside.

use nalgebra::Point2;

/// Determinant of the triple `(p1, p2, p3)`; twice the signed triangle area.
#[inline]
pub fn signed_area(p1: Point2<f32>, p2: Point2<f32>, p3: Point2<f32>) -> f32 {
    p1.x * p2.y + p3.x * p1.y + p2.x * p3.y - p1.x * p3.y - p3.x * p2.y - p2.x * p1.y
}

/// True unless the triple turns strictly counter-clockwise.
///
/// Collinear (and NaN) triples count as clockwise.
#[inline]
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn is_clockwise(p1: Point2<f32>, p2: Point2<f32>, p3: Point2<f32>) -> bool {
    !(signed_area(p1, p2, p3) > 0.0)
}

/// Barycentric weights `(a, b, c)` of `p` w.r.t. `(p1, p2, p3)`.
///
/// `None` when the triangle is degenerate (zero denominator).
#[inline]
pub fn barycentric(
    p1: Point2<f32>,
    p2: Point2<f32>,
    p3: Point2<f32>,
    p: Point2<f32>,
) -> Option<(f32, f32, f32)> {
    let denom = (p2.y - p3.y) * (p1.x - p3.x) + (p3.x - p2.x) * (p1.y - p3.y);
    if denom == 0.0 {
        return None;
    }
    let a = ((p2.y - p3.y) * (p.x - p3.x) + (p3.x - p2.x) * (p.y - p3.y)) / denom;
    let b = ((p3.y - p1.y) * (p.x - p3.x) + (p1.x - p3.x) * (p.y - p3.y)) / denom;
    Some((a, b, 1.0 - a - b))
}

/// Strict interior test: `0 < a, b, c < 1`.
///
/// Points on an edge or on a corner are not inside. The ear test relies on
/// this so a convex corner whose triangle only grazes another vertex still
/// clips.
#[inline]
pub fn point_in_triangle(
    p1: Point2<f32>,
    p2: Point2<f32>,
    p3: Point2<f32>,
    p: Point2<f32>,
) -> bool {
    point_in_triangle_eps(p1, p2, p3, p, 0.0)
}

/// Interior test with a margin on every barycentric weight: `eps < w < 1 - eps`.
///
/// `eps = 0` is [`point_in_triangle`]; a negative `eps` also accepts points
/// slightly outside (and on the boundary), a positive one rejects a band
/// along the edges.
#[inline]
pub fn point_in_triangle_eps(
    p1: Point2<f32>,
    p2: Point2<f32>,
    p3: Point2<f32>,
    p: Point2<f32>,
    eps: f32,
) -> bool {
    let Some((a, b, c)) = barycentric(p1, p2, p3, p) else {
        return false;
    };
    let inside = |w: f32| w > eps && w < 1.0 - eps;
    inside(a) && inside(b) && inside(c)
}

/// Shoelace area of a closed loop; positive for counter-clockwise order.
pub fn polygon_signed_area(points: &[Point2<f32>]) -> f32 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        twice += p.x * q.y - q.x * p.y;
    }
    0.5 * twice
}
