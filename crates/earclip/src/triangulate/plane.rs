//! Working plane of a near-planar loop: orientation axis and 2D projection.

use nalgebra::{Point2, Point3, Vector3};

/// Plane the ring is classified and tested in.
///
/// `normal` is the loop's own normal by the right-hand rule: seen from the
/// tip of `normal`, the loop runs counter-clockwise. Containment tests use
/// the projection that drops the dominant axis of `normal`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorkingPlane {
    pub normal: Vector3<f32>,
    axes: (usize, usize),
}

impl WorkingPlane {
    /// XY plane for loops that are counter-clockwise seen from `+z`.
    #[inline]
    pub fn xy() -> Self {
        Self {
            normal: Vector3::z(),
            axes: (0, 1),
        }
    }

    /// Plane with the given (non-zero, finite) normal.
    pub fn from_normal(normal: Vector3<f32>) -> Option<Self> {
        let normal = normal.try_normalize(0.0)?;
        if !normal.iter().all(|c| c.is_finite()) {
            return None;
        }
        let axes = match normal.iamax() {
            0 => (1, 2),
            1 => (2, 0),
            _ => (0, 1),
        };
        Some(Self { normal, axes })
    }

    /// Fit the plane of a closed loop with Newell's method.
    ///
    /// Coordinates are rescaled by a power of two first, so the sums neither
    /// overflow nor underflow for any finite input.
    ///
    /// `None` when the loop encloses no area (all collinear, or lobes that
    /// cancel as in a bow-tie).
    pub fn fit(points: &[Point3<f32>]) -> Option<Self> {
        let s = unit_scale(points);
        let mut n = Vector3::zeros();
        for (i, a) in points.iter().enumerate() {
            let a = a.coords * s;
            let b = points[(i + 1) % points.len()].coords * s;
            n.x += (a.y - b.y) * (a.z + b.z);
            n.y += (a.z - b.z) * (a.x + b.x);
            n.z += (a.x - b.x) * (a.y + b.y);
        }
        Self::from_normal(n)
    }

    #[inline]
    pub fn project(&self, p: &Point3<f32>) -> Point2<f32> {
        Point2::new(p[self.axes.0], p[self.axes.1])
    }

    /// Component of `(b - a) × (c - a)` along the normal; negative is a
    /// clockwise (reflex) turn.
    #[inline]
    pub fn turn(&self, a: &Point3<f32>, b: &Point3<f32>, c: &Point3<f32>) -> f32 {
        (b - a).cross(&(c - a)).dot(&self.normal)
    }
}

/// Power of two that brings the largest coordinate of `points` close to 1.
///
/// Scaling by a power of two is exact unless a coordinate drops into the
/// subnormal range, so orientation and containment results do not change
/// while products of coordinates stay in `f32` range. `1.0` when every
/// coordinate is zero or non-finite.
pub(crate) fn unit_scale(points: &[Point3<f32>]) -> f32 {
    let max = points
        .iter()
        .flat_map(|p| p.iter())
        .map(|c| c.abs())
        .filter(|c| c.is_finite())
        .fold(0.0_f32, f32::max);
    if max == 0.0 {
        return 1.0;
    }
    let exp = (max.log2().ceil() as i32).clamp(-126, 126);
    2.0_f32.powi(-exp)
}
