//! Topology records shared by the vertex ring and the half-edge mesh.
//!
//! Kept small and explicit: plain index newtypes and `Copy` records.

use nalgebra::{Point3, Vector3};

/// Identifier types for clarity. A `VertexId` is the index of the input point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HalfEdgeId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub usize);

/// One boundary point while it is part of the clipping ring.
///
/// Invariants once classified:
/// - exactly one of `is_reflex` / `is_convex` is set;
/// - `is_ear` implies `is_convex`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: Point3<f32>,
    pub prev: VertexId,
    pub next: VertexId,
    pub is_reflex: bool,
    pub is_convex: bool,
    pub is_ear: bool,
}

impl Vertex {
    /// Unclassified vertex linked to its ring neighbours.
    #[inline]
    pub fn new(position: Point3<f32>, prev: VertexId, next: VertexId) -> Self {
        Self {
            position,
            prev,
            next,
            is_reflex: false,
            is_convex: false,
            is_ear: false,
        }
    }
}

/// Output face: three corners plus the input indices they came from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub indices: [usize; 3],
    pub vertices: [Point3<f32>; 3],
}

impl Triangle {
    #[inline]
    pub fn new(indices: [usize; 3], vertices: [Point3<f32>; 3]) -> Self {
        Self { indices, vertices }
    }

    /// Triangle built directly from three points (indices `[0, 1, 2]`).
    #[inline]
    pub fn from_points(a: Point3<f32>, b: Point3<f32>, c: Point3<f32>) -> Self {
        Self::new([0, 1, 2], [a, b, c])
    }

    /// Flip the winding by swapping the first two corners.
    pub fn change_orientation(&mut self) {
        self.indices.swap(0, 1);
        self.vertices.swap(0, 1);
    }

    /// Unnormalized normal `(b - a) × (c - a)`; its length is twice the area.
    #[inline]
    pub fn cross(&self) -> Vector3<f32> {
        let [a, b, c] = self.vertices;
        (b - a).cross(&(c - a))
    }

    #[inline]
    pub fn area(&self) -> f32 {
        0.5 * self.cross().norm()
    }

    /// Unit normal by the right-hand rule; `None` for a degenerate triangle.
    #[inline]
    pub fn normal(&self) -> Option<Vector3<f32>> {
        self.cross().try_normalize(0.0)
    }
}

/// Directed edge of a triangle, pointing at `vertex`.
///
/// Invariants inside a [`super::HalfEdgeMesh`]:
/// - `next` and `prev` are the other two edges of `face` (a 3-cycle);
/// - `opposite`, when set, runs the other way along the same edge and
///   its own `opposite` is this edge. `None` on the boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HalfEdge {
    pub vertex: VertexId,
    pub face: FaceId,
    pub next: HalfEdgeId,
    pub prev: HalfEdgeId,
    pub opposite: Option<HalfEdgeId>,
}

/// Triangle face; its half-edge 3-cycle defines the corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub halfedge: HalfEdgeId,
}

/// Mesh vertex with one outgoing half-edge (none for isolated points).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshVertex {
    pub position: Point3<f32>,
    pub halfedge: Option<HalfEdgeId>,
}
