//! Triangle list → half-edge mesh.

use std::collections::HashMap;

use nalgebra::Point3;

use super::halfedge::HalfEdgeMesh;
use super::types::{Face, FaceId, HalfEdge, HalfEdgeId, MeshVertex, Triangle, VertexId};
use crate::error::MeshError;

impl HalfEdgeMesh {
    /// Build a half-edge mesh from positions and index triples.
    ///
    /// Each triple `[v0, v1, v2]` yields half-edges `v0→v1`, `v1→v2`,
    /// `v2→v0`; the face points at the first. Opposites are paired by
    /// looking up the reversed directed edge.
    pub fn from_triangles(
        positions: &[Point3<f32>],
        faces: &[[usize; 3]],
    ) -> Result<Self, MeshError> {
        if faces.is_empty() {
            return Err(MeshError::EmptyMesh);
        }
        for (fi, face) in faces.iter().enumerate() {
            if let Some(&vertex) = face.iter().find(|&&v| v >= positions.len()) {
                return Err(MeshError::InvalidVertexIndex { face: fi, vertex });
            }
            if face[0] == face[1] || face[1] == face[2] || face[0] == face[2] {
                return Err(MeshError::DegenerateFace { face: fi });
            }
        }

        let mut mesh = HalfEdgeMesh {
            vertices: positions
                .iter()
                .map(|&position| MeshVertex {
                    position,
                    halfedge: None,
                })
                .collect(),
            halfedges: Vec::with_capacity(faces.len() * 3),
            faces: Vec::with_capacity(faces.len()),
        };
        let mut edge_map: HashMap<(usize, usize), HalfEdgeId> =
            HashMap::with_capacity(faces.len() * 3);

        for (fi, face) in faces.iter().enumerate() {
            let base = mesh.halfedges.len();
            let face_id = FaceId(fi);
            for k in 0..3 {
                let from = face[k];
                let to = face[(k + 1) % 3];
                let id = HalfEdgeId(base + k);
                mesh.halfedges.push(HalfEdge {
                    vertex: VertexId(to),
                    face: face_id,
                    next: HalfEdgeId(base + (k + 1) % 3),
                    prev: HalfEdgeId(base + (k + 2) % 3),
                    opposite: None,
                });
                if edge_map.insert((from, to), id).is_some() {
                    return Err(MeshError::NonManifoldEdge { v0: from, v1: to });
                }
                mesh.vertices[from].halfedge.get_or_insert(id);
            }
            mesh.faces.push(Face {
                halfedge: HalfEdgeId(base),
            });
        }

        for (&(from, to), &he) in &edge_map {
            if let Some(&op) = edge_map.get(&(to, from)) {
                mesh.halfedges[he.0].opposite = Some(op);
            }
        }
        Ok(mesh)
    }

    /// Build from the output of [`crate::triangulate::triangulate`] over `points`.
    pub fn from_triangulation(
        points: &[Point3<f32>],
        triangles: &[Triangle],
    ) -> Result<Self, MeshError> {
        let faces: Vec<[usize; 3]> = triangles.iter().map(|t| t.indices).collect();
        Self::from_triangles(points, &faces)
    }
}
