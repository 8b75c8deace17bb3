//! Ear-clipping triangulation of a simple, near-planar loop.
//!
//! Purpose
//! - Turn an ordered boundary loop (≥ 3 points) into `n - 2` triangles.
//! - Work on an index-linked vertex ring; classification and ear tests run
//!   in the loop's working plane (`WorkingPlane`), so both windings and
//!   tilted loops are accepted.
//!
//! Degeneracy policy
//! - Containment is strict by default: a reflex vertex exactly on an ear's
//!   edge does not block the ear. Near-collinear ears can therefore be
//!   accepted; `ClipCfg::inside_eps` widens or narrows the test.
//! - Running out of ears is reported as `NonSimplePolygon`, never a panic
//!   or a hang.

mod clip;
mod plane;
mod ring;

pub use clip::{
    triangulate, triangulate_2d, triangulate_indices, triangulate_with, ClipCfg, EarSelection,
};
pub use plane::WorkingPlane;
