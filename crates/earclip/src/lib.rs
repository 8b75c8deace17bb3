//! Ear-clipping triangulation of simple, near-planar polygons.
//!
//! Layers (leaves first)
//! - `geom2`: orientation, strict point-in-triangle, segment and ray
//!   intersection; a seeded sampler of simple polygons.
//! - `mesh`: vertex/triangle/half-edge records and the half-edge mesh
//!   post-pass over a finished triangle list.
//! - `triangulate`: working plane, index-linked vertex ring, clipping driver.
//!
//! API Policy
//! - `api` is the curated surface for callers; `prelude` is the short list.
//! - Everything is pure and synchronous. Logging goes through `tracing`; the
//!   library never installs a subscriber.
//!
//! ```
//! use earclip::prelude::*;
//!
//! let square = [
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let tris = triangulate(&square).unwrap();
//! assert_eq!(tris.len(), 2);
//! let area: f32 = tris.iter().map(|t| t.area()).sum();
//! assert!((area - 1.0).abs() < 1e-6);
//! ```

pub mod api;
pub mod error;
pub mod geom2;
pub mod mesh;
pub mod triangulate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::{Point2, Point3, Vector2, Vector3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{MeshError, Result, TriangulateError};
    pub use crate::geom2::{
        is_clockwise, point_in_triangle, ray_intersect_distance, segment_intersect, signed_area,
        LineSegment,
    };
    pub use crate::mesh::{HalfEdgeMesh, Triangle};
    pub use crate::triangulate::{triangulate, triangulate_2d, triangulate_with, ClipCfg};
    pub use nalgebra::{Point2, Point3, Vector2, Vector3};
}
