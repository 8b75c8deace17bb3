//! Planar geometry primitives (f32).
//!
//! Purpose
//! - Orientation and strict point-in-triangle predicates used by the ear test.
//! - Segment/segment and ray/segment intersection for hit-testing against
//!   polygon edges. The triangulator does not call these; they share the
//!   point type and numeric conventions.
//! - A seeded sampler of simple polygons for tests and benchmarks.
//!
//! All functions here are total: "no hit" and "not inside" are ordinary
//! results, including for degenerate (collinear, zero-length) input.

mod predicates;
pub mod rand;
mod segment;

pub use predicates::{
    barycentric, is_clockwise, point_in_triangle, point_in_triangle_eps, polygon_signed_area,
    signed_area,
};
pub use segment::{
    polygon_edges, ray_intersect_distance, ray_polygon_distance, segment_intersect, LineSegment,
};
