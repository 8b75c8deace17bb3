use super::*;
use crate::error::MeshError;
use crate::triangulate::{triangulate, triangulate_2d};
use approx::assert_relative_eq;
use nalgebra::{Point2, Point3};

fn unit_square() -> Vec<Point3<f32>> {
    vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ]
}

fn plus_shape() -> Vec<Point2<f32>> {
    [
        (1.0, 0.0),
        (2.0, 0.0),
        (2.0, 1.0),
        (3.0, 1.0),
        (3.0, 2.0),
        (2.0, 2.0),
        (2.0, 3.0),
        (1.0, 3.0),
        (1.0, 2.0),
        (0.0, 2.0),
        (0.0, 1.0),
        (1.0, 1.0),
    ]
    .into_iter()
    .map(|(x, y)| Point2::new(x, y))
    .collect()
}

#[test]
fn triangle_records() {
    let mut t = Triangle::from_points(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
        Point3::new(0.0, 2.0, 0.0),
    );
    assert_relative_eq!(t.area(), 2.0);
    assert_eq!(t.normal(), Some(nalgebra::Vector3::z()));
    t.change_orientation();
    assert_eq!(t.indices, [1, 0, 2]);
    assert_eq!(t.normal(), Some(-nalgebra::Vector3::z()));
    assert_relative_eq!(t.area(), 2.0);

    let flat = Triangle::from_points(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(2.0, 2.0, 2.0),
    );
    assert_eq!(flat.normal(), None);
}

#[test]
fn square_mesh_adjacency() {
    let pts = unit_square();
    let tris = triangulate(&pts).unwrap();
    let mesh = HalfEdgeMesh::from_triangulation(&pts, &tris).unwrap();
    assert!(mesh.is_valid());
    assert_eq!(mesh.num_vertices(), 4);
    assert_eq!(mesh.num_faces(), 2);
    assert_eq!(mesh.num_halfedges(), 6);
    assert_eq!(mesh.boundary_halfedges().count(), 4);

    // one shared diagonal
    let f0 = FaceId(0);
    let f1 = FaceId(1);
    assert_eq!(mesh.face_neighbors(f0).collect::<Vec<_>>(), vec![f1]);
    assert_eq!(mesh.face_neighbors(f1).collect::<Vec<_>>(), vec![f0]);

    for f in mesh.face_ids() {
        let t = mesh.face_triangle(f);
        assert_eq!(t.indices, tris[f.0].indices);
    }
}

#[test]
fn halfedge_cycles_and_opposites() {
    let pts: Vec<Point3<f32>> = plus_shape().iter().map(|p| Point3::new(p.x, p.y, 0.0)).collect();
    let tris = triangulate(&pts).unwrap();
    let mesh = HalfEdgeMesh::from_triangulation(&pts, &tris).unwrap();
    assert!(mesh.is_valid());
    assert_eq!(mesh.num_faces(), 10);
    // n boundary edges, n - 3 diagonals shared by two faces
    assert_eq!(mesh.boundary_halfedges().count(), 12);
    assert_eq!(mesh.num_halfedges() - 12, 2 * 9);

    for i in 0..mesh.num_halfedges() {
        let he = HalfEdgeId(i);
        let h = mesh.halfedge(he);
        assert_eq!(mesh.halfedge(mesh.halfedge(h.next).next).next, he);
        if let Some(op) = h.opposite {
            assert_eq!(mesh.halfedge(op).opposite, Some(he));
            assert_eq!(mesh.source(op), mesh.target(he));
            assert_eq!(mesh.target(op), mesh.source(he));
        }
    }
    for (i, v) in mesh.vertices.iter().enumerate() {
        let he = v.halfedge.expect("every polygon vertex is used");
        assert_eq!(mesh.source(he), VertexId(i));
    }
}

#[test]
fn triangulate_2d_feeds_mesh() {
    let poly = plus_shape();
    let tris = triangulate_2d(&poly).unwrap();
    let pts: Vec<Point3<f32>> = poly.iter().map(|p| Point3::new(p.x, p.y, 0.0)).collect();
    let mesh = HalfEdgeMesh::from_triangulation(&pts, &tris).unwrap();
    let total: f32 = mesh.face_ids().map(|f| mesh.face_triangle(f).area()).sum();
    assert_relative_eq!(total, 5.0, epsilon = 1e-5);
}

#[test]
fn isolated_vertex_has_no_halfedge() {
    let mut pts = unit_square();
    pts.push(Point3::new(5.0, 5.0, 0.0));
    let mesh = HalfEdgeMesh::from_triangles(&pts, &[[0, 1, 2], [0, 2, 3]]).unwrap();
    assert!(mesh.is_valid());
    assert_eq!(mesh.vertices[4].halfedge, None);
}

#[test]
fn builder_rejects_bad_input() {
    let pts = unit_square();
    assert_eq!(HalfEdgeMesh::from_triangles(&pts, &[]).unwrap_err(), MeshError::EmptyMesh);
    assert_eq!(
        HalfEdgeMesh::from_triangles(&pts, &[[0, 1, 7]]).unwrap_err(),
        MeshError::InvalidVertexIndex { face: 0, vertex: 7 }
    );
    assert_eq!(
        HalfEdgeMesh::from_triangles(&pts, &[[0, 1, 2], [2, 2, 3]]).unwrap_err(),
        MeshError::DegenerateFace { face: 1 }
    );
    // same directed edge 0→1 twice
    assert_eq!(
        HalfEdgeMesh::from_triangles(&pts, &[[0, 1, 2], [0, 1, 3]]).unwrap_err(),
        MeshError::NonManifoldEdge { v0: 0, v1: 1 }
    );
}
