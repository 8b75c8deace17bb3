//! Curated surface for in-process callers (editor, rendering, hit-testing).
//!
//! Prefer these re-exports over reaching into submodules; the module layout
//! behind them may move.

// Triangulation
pub use crate::triangulate::{
    triangulate, triangulate_2d, triangulate_indices, triangulate_with, ClipCfg, EarSelection,
    WorkingPlane,
};
// Orientation, containment, intersection
pub use crate::geom2::{
    is_clockwise, point_in_triangle, point_in_triangle_eps, polygon_signed_area,
    ray_intersect_distance, ray_polygon_distance, segment_intersect, signed_area, LineSegment,
};
// Topology
pub use crate::mesh::{FaceId, HalfEdge, HalfEdgeId, HalfEdgeMesh, Triangle, VertexId};
// Errors
pub use crate::error::{MeshError, Result, TriangulateError};

use nalgebra::{Point2, Point3};

/// Triangulate a 2D loop and build its half-edge mesh in one go.
///
/// Errors from the builder cannot occur for a successful triangulation of
/// distinct points; they are surfaced as `NonSimplePolygon` if they do.
pub fn triangulate_to_mesh(points: &[Point2<f32>]) -> Result<HalfEdgeMesh> {
    let lifted: Vec<Point3<f32>> = points.iter().map(|p| Point3::new(p.x, p.y, 0.0)).collect();
    let tris = triangulate(&lifted)?;
    HalfEdgeMesh::from_triangulation(&lifted, &tris).map_err(|e| {
        tracing::warn!(error = %e, "triangulation did not form a manifold mesh");
        TriangulateError::NonSimplePolygon {
            remaining: points.len(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_to_mesh() {
        let sq = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        let mesh = triangulate_to_mesh(&sq).unwrap();
        assert_eq!(mesh.num_faces(), 2);
        assert!(mesh.is_valid());
        assert!(matches!(
            triangulate_to_mesh(&sq[..2]),
            Err(TriangulateError::InvalidPolygon { count: 2 })
        ));
    }
}
