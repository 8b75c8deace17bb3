//! Ear-clipping driver.
//!
//! Phases
//! - 3 points: the input triangle is returned as is.
//! - Init: build the ring, classify every vertex, collect ears in ring order.
//! - Clip: take an ear, emit `(prev, ear, next)`, unlink it, then drop both
//!   neighbours from the ear list, reclassify them and re-test them as ears.
//! - Stop at 3 vertices and emit the last triangle.
//!
//! Cost is O(n²): each of the n - 3 clips re-tests two ears against up to n
//! reflex vertices.

use nalgebra::{Point2, Point3};
use tracing::{debug, trace, warn};

use super::plane::{unit_scale, WorkingPlane};
use super::ring::VertexRing;
use crate::error::{Result, TriangulateError};
use crate::mesh::{Triangle, VertexId};

/// Which ear to clip next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EarSelection {
    /// First ear in discovery order. Reproducible; the default.
    #[default]
    Fifo,
    /// Sharpest corner first; ties go to the earlier ear.
    Pointiest,
}

/// Triangulation options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipCfg {
    pub ear_selection: EarSelection,
    /// Margin handed to `point_in_triangle_eps` by the ear test. `0.0` is the
    /// strict test: reflex vertices on the ear's boundary do not block it.
    ///
    /// With the strict test, a reflex vertex lying exactly on a candidate
    /// ear's diagonal lets the ear through, and the output can then contain
    /// overlapping triangles that reach outside the polygon. This happens, for
    /// example, on a comb whose teeth line up with the diagonals. A small
    /// negative margin such as `-1e-6` makes such vertices block the ear.
    pub inside_eps: f32,
    /// Fixed working plane; `None` fits it from the loop (either winding works).
    /// With a fixed plane a loop wound against its normal has no ears.
    pub plane: Option<WorkingPlane>,
}

impl Default for ClipCfg {
    fn default() -> Self {
        Self {
            ear_selection: EarSelection::Fifo,
            inside_eps: 0.0,
            plane: None,
        }
    }
}

/// Triangulate a simple, near-planar loop with the default [`ClipCfg`].
///
/// Returns `points.len() - 2` triangles in clip order, each wound like the
/// input. Every triangle, the last one included, lists its corners as
/// `(prev, v, next)` around the clipped vertex `v`. Callers expecting the
/// final triangle as `(v, prev, next)` can call
/// [`Triangle::change_orientation`] on it.
///
/// Any finite coordinates are accepted. The loop is classified on a copy
/// rescaled by a power of two, so very large or very small polygons behave
/// like unit-sized ones. [`Triangle::area`] of the output can still overflow
/// past about `1e19`.
pub fn triangulate(points: &[Point3<f32>]) -> Result<Vec<Triangle>> {
    triangulate_with(points, ClipCfg::default())
}

/// [`triangulate`] for a loop in the XY plane.
pub fn triangulate_2d(points: &[Point2<f32>]) -> Result<Vec<Triangle>> {
    let lifted: Vec<Point3<f32>> = points.iter().map(|p| Point3::new(p.x, p.y, 0.0)).collect();
    triangulate(&lifted)
}

/// [`triangulate`], keeping only the input indices of each triangle.
pub fn triangulate_indices(points: &[Point3<f32>]) -> Result<Vec<[usize; 3]>> {
    Ok(triangulate(points)?.into_iter().map(|t| t.indices).collect())
}

pub fn triangulate_with(points: &[Point3<f32>], cfg: ClipCfg) -> Result<Vec<Triangle>> {
    let n = points.len();
    if n < 3 {
        return Err(TriangulateError::InvalidPolygon { count: n });
    }
    if let Some(index) = points
        .iter()
        .position(|p| !p.iter().all(|c| c.is_finite()))
    {
        return Err(TriangulateError::NonFinitePoint { index });
    }
    if n == 3 {
        return Ok(vec![Triangle::new([0, 1, 2], [points[0], points[1], points[2]])]);
    }

    // Classify on a power-of-two rescaled copy; output corners come from `points`.
    let scale = unit_scale(points);
    let work: Vec<Point3<f32>> = points
        .iter()
        .map(|p| Point3::from(p.coords * scale))
        .collect();

    let plane = match cfg.plane {
        Some(plane) => plane,
        None => WorkingPlane::fit(&work).ok_or_else(|| {
            warn!(vertices = n, "loop has zero area");
            TriangulateError::NonSimplePolygon { remaining: n }
        })?,
    };

    let mut ring = VertexRing::new(&work, plane);
    for i in 0..n {
        ring.classify(VertexId(i));
    }
    let mut ears: Vec<VertexId> = (0..n)
        .map(VertexId)
        .filter(|&id| ring.check_ear(id, cfg.inside_eps))
        .collect();
    debug!(
        vertices = n,
        reflex = ring.reflex_count(),
        ears = ears.len(),
        "ring initialised"
    );

    let mut triangles = Vec::with_capacity(n - 2);
    while ring.len() > 3 {
        let Some(slot) = pick_ear(&ring, &ears, cfg.ear_selection) else {
            warn!(
                remaining = ring.len(),
                emitted = triangles.len(),
                "no ear left"
            );
            return Err(TriangulateError::NonSimplePolygon {
                remaining: ring.len(),
            });
        };
        let ear = ears.remove(slot);
        let (prev, next) = {
            let v = ring.vertex(ear);
            (v.prev, v.next)
        };
        triangles.push(ring.corner_triangle(ear));
        ring.splice_out(ear);
        trace!(ear = ear.0, prev = prev.0, next = next.0, left = ring.len(), "clipped");

        for id in [prev, next] {
            if let Some(pos) = ears.iter().position(|&e| e == id) {
                ears.remove(pos);
            }
            ring.classify(id);
        }
        for id in [prev, next] {
            if ring.check_ear(id, cfg.inside_eps) {
                ears.push(id);
            }
        }
    }

    let last = ring
        .ids()
        .next()
        .ok_or(TriangulateError::NonSimplePolygon { remaining: 0 })?;
    triangles.push(ring.corner_triangle(last));
    for t in &mut triangles {
        t.vertices = t.indices.map(|i| points[i]);
    }
    Ok(triangles)
}

/// Slot in `ears` of the ear to clip next.
fn pick_ear(ring: &VertexRing, ears: &[VertexId], selection: EarSelection) -> Option<usize> {
    match selection {
        EarSelection::Fifo => (!ears.is_empty()).then_some(0),
        EarSelection::Pointiest => {
            let mut best: Option<(usize, f32)> = None;
            for (slot, &id) in ears.iter().enumerate() {
                let p = ring.pointiness(id);
                if best.map_or(true, |(_, b)| p > b) {
                    best = Some((slot, p));
                }
            }
            best.map(|(slot, _)| slot)
        }
    }
}
