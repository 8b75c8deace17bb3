//! Mesh topology records and the half-edge post-pass.
//!
//! Purpose
//! - `Vertex`, `Triangle`: the records the ear-clipping ring works on and emits.
//! - `HalfEdge`, `Face`, `HalfEdgeMesh`: adjacency for callers that need it,
//!   built from a finished triangle list. Clipping never depends on it.

mod build;
mod halfedge;
mod types;

pub use halfedge::HalfEdgeMesh;
pub use types::{Face, FaceId, HalfEdge, HalfEdgeId, MeshVertex, Triangle, Vertex, VertexId};

#[cfg(test)]
mod tests;
