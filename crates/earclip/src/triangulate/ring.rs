//! Doubly-linked vertex ring over an index arena.
//!
//! Vertices are never moved or freed while clipping; removal unlinks the
//! vertex from its neighbours and clears its `alive` slot.

use nalgebra::{Point2, Point3};

use super::plane::WorkingPlane;
use crate::geom2::point_in_triangle_eps;
use crate::mesh::{Triangle, Vertex, VertexId};

pub(crate) struct VertexRing {
    verts: Vec<Vertex>,
    flat: Vec<Point2<f32>>,
    alive: Vec<bool>,
    len: usize,
    plane: WorkingPlane,
}

impl VertexRing {
    /// Link every point to its input-order neighbours, wrapping around.
    pub(crate) fn new(points: &[Point3<f32>], plane: WorkingPlane) -> Self {
        let n = points.len();
        let verts = points
            .iter()
            .enumerate()
            .map(|(i, &p)| Vertex::new(p, VertexId((i + n - 1) % n), VertexId((i + 1) % n)))
            .collect();
        let flat = points.iter().map(|p| plane.project(p)).collect();
        Self {
            verts,
            flat,
            alive: vec![true; n],
            len: n,
            plane,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn vertex(&self, id: VertexId) -> &Vertex {
        &self.verts[id.0]
    }

    /// Vertices still in the ring, in input order.
    pub(crate) fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.alive
            .iter()
            .enumerate()
            .filter(|(_, a)| **a)
            .map(|(i, _)| VertexId(i))
    }

    pub(crate) fn reflex_count(&self) -> usize {
        self.ids().filter(|&id| self.vertex(id).is_reflex).count()
    }

    /// Mark `id` reflex or convex from its current neighbours.
    pub(crate) fn classify(&mut self, id: VertexId) {
        let v = self.verts[id.0];
        let a = self.verts[v.prev.0].position;
        let c = self.verts[v.next.0].position;
        let reflex = self.plane.turn(&a, &v.position, &c) < 0.0;
        let v = &mut self.verts[id.0];
        v.is_reflex = reflex;
        v.is_convex = !reflex;
    }

    /// Recompute and store `is_ear` for `id`.
    ///
    /// Only reflex vertices can sit inside the ear triangle of a simple
    /// polygon, so convex ones are not tested.
    pub(crate) fn check_ear(&mut self, id: VertexId, inside_eps: f32) -> bool {
        let v = self.verts[id.0];
        let ear = !v.is_reflex && {
            let (a, b, c) = (self.flat[v.prev.0], self.flat[id.0], self.flat[v.next.0]);
            !self.ids().any(|o| {
                o != id
                    && o != v.prev
                    && o != v.next
                    && self.verts[o.0].is_reflex
                    && point_in_triangle_eps(a, b, c, self.flat[o.0], inside_eps)
            })
        };
        self.verts[id.0].is_ear = ear;
        ear
    }

    /// Cosine of the corner angle at `id`; larger is sharper.
    pub(crate) fn pointiness(&self, id: VertexId) -> f32 {
        let v = self.vertex(id);
        let p = self.flat[id.0];
        let to_prev = (self.flat[v.prev.0] - p).try_normalize(0.0);
        let to_next = (self.flat[v.next.0] - p).try_normalize(0.0);
        match (to_prev, to_next) {
            (Some(u), Some(w)) => u.dot(&w),
            _ => f32::NEG_INFINITY,
        }
    }

    /// Triangle `(prev, id, next)` in ring winding.
    pub(crate) fn corner_triangle(&self, id: VertexId) -> Triangle {
        let v = self.vertex(id);
        let ids = [v.prev, id, v.next];
        Triangle::new(ids.map(|i| i.0), ids.map(|i| self.verts[i.0].position))
    }

    /// Unlink `id`: `prev.next = next`, `next.prev = prev`.
    pub(crate) fn splice_out(&mut self, id: VertexId) {
        debug_assert!(self.alive[id.0], "vertex {id:?} already removed");
        let Vertex { prev, next, .. } = self.verts[id.0];
        self.verts[prev.0].next = next;
        self.verts[next.0].prev = prev;
        self.verts[id.0].is_ear = false;
        self.alive[id.0] = false;
        self.len -= 1;
    }
}
