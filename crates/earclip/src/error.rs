//! Error types for triangulation and half-edge construction.
//!
//! Geometry primitives never fail (they return `Option`/`bool`); only the
//! top-level entry points below can.

use thiserror::Error;

/// Result type alias using [`TriangulateError`].
pub type Result<T> = std::result::Result<T, TriangulateError>;

/// Errors raised by [`crate::triangulate::triangulate`] and friends.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriangulateError {
    /// Fewer than three input points.
    #[error("polygon needs at least 3 points, got {count}")]
    InvalidPolygon {
        /// Number of points supplied.
        count: usize,
    },

    /// An input point has a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate")]
    NonFinitePoint {
        /// Index of the offending point.
        index: usize,
    },

    /// The clipping loop ran out of ears (self-intersecting, duplicate or
    /// zero-area loop).
    #[error("no ear left with {remaining} vertices in the ring; polygon is not simple")]
    NonSimplePolygon {
        /// Vertices still in the ring when clipping stopped.
        remaining: usize,
    },
}

/// Errors raised while building a [`crate::mesh::HalfEdgeMesh`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// No faces were supplied.
    #[error("mesh has no faces")]
    EmptyMesh,

    /// A face references a vertex index outside the position list.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A face repeats a vertex.
    #[error("face {face} is degenerate (has duplicate vertices)")]
    DegenerateFace {
        /// The face index.
        face: usize,
    },

    /// The same directed edge occurs in two faces.
    #[error("directed edge ({v0}, {v1}) is used by more than one face")]
    NonManifoldEdge {
        /// Source vertex of the edge.
        v0: usize,
        /// Target vertex of the edge.
        v1: usize,
    },
}
