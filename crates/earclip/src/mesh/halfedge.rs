//! Half-edge mesh over a triangle list.
//!
//! Each triangle owns three half-edges linked `next`/`prev` in a 3-cycle.
//! Interior edges pair two half-edges through `opposite`; boundary
//! half-edges have no opposite and no separate boundary record.

use nalgebra::Point3;

use super::types::{Face, FaceId, HalfEdge, HalfEdgeId, MeshVertex, Triangle, VertexId};

/// Triangle mesh with O(1) adjacency queries.
#[derive(Clone, Debug, Default)]
pub struct HalfEdgeMesh {
    pub vertices: Vec<MeshVertex>,
    pub halfedges: Vec<HalfEdge>,
    pub faces: Vec<Face>,
}

impl HalfEdgeMesh {
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }
    #[inline]
    pub fn num_halfedges(&self) -> usize {
        self.halfedges.len()
    }
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn halfedge(&self, he: HalfEdgeId) -> &HalfEdge {
        &self.halfedges[he.0]
    }
    #[inline]
    pub fn position(&self, v: VertexId) -> Point3<f32> {
        self.vertices[v.0].position
    }

    /// Vertex the half-edge points at.
    #[inline]
    pub fn target(&self, he: HalfEdgeId) -> VertexId {
        self.halfedge(he).vertex
    }
    /// Vertex the half-edge leaves from (the target of its `prev`).
    #[inline]
    pub fn source(&self, he: HalfEdgeId) -> VertexId {
        self.target(self.halfedge(he).prev)
    }
    #[inline]
    pub fn is_boundary(&self, he: HalfEdgeId) -> bool {
        self.halfedge(he).opposite.is_none()
    }

    pub fn face_halfedges(&self, f: FaceId) -> [HalfEdgeId; 3] {
        let h0 = self.faces[f.0].halfedge;
        let h1 = self.halfedge(h0).next;
        let h2 = self.halfedge(h1).next;
        [h0, h1, h2]
    }

    /// Corners in winding order, starting at the source of the face half-edge.
    pub fn face_vertices(&self, f: FaceId) -> [VertexId; 3] {
        let [h0, h1, h2] = self.face_halfedges(f);
        [self.target(h2), self.target(h0), self.target(h1)]
    }

    pub fn face_triangle(&self, f: FaceId) -> Triangle {
        let vs = self.face_vertices(f);
        Triangle::new(vs.map(|v| v.0), vs.map(|v| self.position(v)))
    }

    /// Faces sharing an edge with `f`.
    pub fn face_neighbors(&self, f: FaceId) -> impl Iterator<Item = FaceId> + '_ {
        self.face_halfedges(f)
            .into_iter()
            .filter_map(move |he| self.halfedge(he).opposite)
            .map(move |op| self.halfedge(op).face)
    }

    pub fn boundary_halfedges(&self) -> impl Iterator<Item = HalfEdgeId> + '_ {
        (0..self.halfedges.len())
            .map(HalfEdgeId)
            .filter(move |&he| self.is_boundary(he))
    }

    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> {
        (0..self.faces.len()).map(FaceId)
    }

    /// Check the structural invariants: 3-cycles, `next`/`prev` symmetry,
    /// face membership, opposite symmetry and vertex back-references.
    pub fn is_valid(&self) -> bool {
        let n = self.halfedges.len();
        let in_range = |h: HalfEdgeId| h.0 < n;
        let links_in_range = self.halfedges.iter().all(|h| {
            in_range(h.next)
                && in_range(h.prev)
                && h.opposite.map_or(true, in_range)
                && h.face.0 < self.faces.len()
                && h.vertex.0 < self.vertices.len()
        });
        if !links_in_range {
            return false;
        }
        for (i, h) in self.halfedges.iter().enumerate() {
            let id = HalfEdgeId(i);
            let next = self.halfedge(h.next);
            if self.halfedge(next.next).next != id || next.prev != id {
                return false;
            }
            if next.face != h.face {
                return false;
            }
            if let Some(op) = h.opposite {
                if self.halfedge(op).opposite != Some(id) {
                    return false;
                }
                if self.target(op) != self.source(id) {
                    return false;
                }
            }
        }
        for (i, v) in self.vertices.iter().enumerate() {
            if let Some(he) = v.halfedge {
                if !in_range(he) || self.source(he) != VertexId(i) {
                    return false;
                }
            }
        }
        self.faces
            .iter()
            .enumerate()
            .all(|(i, f)| in_range(f.halfedge) && self.halfedge(f.halfedge).face == FaceId(i))
    }
}
