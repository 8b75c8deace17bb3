//! Line segments and segment/segment, ray/segment intersection.
//!
//! Numerics
//! - Parallel and collinear pairs (zero denominator) are "no hit", never an error.
//! - The `[0, 1]` parameter test compares each parameter against its own
//!   clamp with exact float equality, so endpoints count as hits and there is
//!   no tolerance band. Hits that land a rounding error outside an endpoint are
//!   missed.

use nalgebra::{Point2, Vector2};

/// Finite segment between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub a: Point2<f32>,
    pub b: Point2<f32>,
}

impl LineSegment {
    #[inline]
    pub fn new(a: Point2<f32>, b: Point2<f32>) -> Self {
        Self { a, b }
    }
    #[inline]
    pub fn length(&self) -> f32 {
        nalgebra::distance(&self.a, &self.b)
    }
    /// See [`segment_intersect`]; the point is computed on `self`.
    #[inline]
    pub fn intersect(&self, other: &LineSegment) -> Option<Point2<f32>> {
        segment_intersect(self, other)
    }
    /// See [`ray_intersect_distance`].
    #[inline]
    pub fn intersects_with_ray(&self, origin: Point2<f32>, direction: Vector2<f32>) -> Option<f32> {
        ray_intersect_distance(origin, direction, self)
    }
}

/// Intersection point of two finite segments, if both parameters lie in `[0, 1]`.
pub fn segment_intersect(a: &LineSegment, b: &LineSegment) -> Option<Point2<f32>> {
    let (x1, y1) = (a.a.x, a.a.y);
    let (x2, y2) = (a.b.x, a.b.y);
    let (x3, y3) = (b.a.x, b.a.y);
    let (x4, y4) = (b.b.x, b.b.y);

    let denom = (y4 - y3) * (x2 - x1) - (x4 - x3) * (y2 - y1);
    if denom == 0.0 {
        return None;
    }
    let ua = ((x4 - x3) * (y1 - y3) - (y4 - y3) * (x1 - x3)) / denom;
    let ub = ((x2 - x1) * (y1 - y3) - (y2 - y1) * (x1 - x3)) / denom;

    if ua.clamp(0.0, 1.0) != ua || ub.clamp(0.0, 1.0) != ub {
        return None;
    }
    Some(a.a + (a.b - a.a) * ua)
}

/// Distance from `origin` along `direction` to `segment`, if the ray hits it.
///
/// The ray is a finite segment of length `2 * max(|dx|, |dy|)` over both
/// endpoints relative to `origin`, which reaches past every point of the
/// candidate segment. A zero `direction` never hits.
pub fn ray_intersect_distance(
    origin: Point2<f32>,
    direction: Vector2<f32>,
    segment: &LineSegment,
) -> Option<f32> {
    let dir = direction.try_normalize(0.0)?;
    let reach = [segment.a - origin, segment.b - origin]
        .iter()
        .map(|d| d.x.abs().max(d.y.abs()))
        .fold(0.0_f32, f32::max)
        * 2.0;
    if reach <= 0.0 {
        return None;
    }
    let ray = LineSegment::new(origin, origin + dir * reach);
    let hit = segment_intersect(segment, &ray)?;
    Some(nalgebra::distance(&origin, &hit))
}

/// Edges of a closed loop, including the closing edge `last → first`.
pub fn polygon_edges(points: &[Point2<f32>]) -> impl Iterator<Item = LineSegment> + '_ {
    let n = points.len();
    let count = if n < 2 { 0 } else { n };
    (0..count).map(move |i| LineSegment::new(points[i], points[(i + 1) % n]))
}

/// Distance to the nearest boundary hit of a closed loop along a ray.
pub fn ray_polygon_distance(
    origin: Point2<f32>,
    direction: Vector2<f32>,
    polygon: &[Point2<f32>],
) -> Option<f32> {
    polygon_edges(polygon)
        .filter_map(|e| ray_intersect_distance(origin, direction, &e))
        .fold(None, |best, d| match best {
            Some(b) if b <= d => Some(b),
            _ => Some(d),
        })
}
