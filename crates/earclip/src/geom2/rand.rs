//! Random simple polygons in 2D (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of concave but simple loops for
//!   property tests and benchmarks of the triangulator.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular
//!   jitter, and give every angle an independent radius in
//!   `[radius_min, radius_max]`. The loop is star-shaped around the origin,
//!   hence simple, and comes out counter-clockwise.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Point2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Star-polygon sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f32,
    /// Radii are drawn uniformly from `[radius_min, radius_max]`.
    pub radius_min: f32,
    pub radius_max: f32,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}
impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(16),
            angle_jitter_frac: 0.3,
            radius_min: 0.2,
            radius_max: 1.0,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random star-shaped (simple, usually concave) loop in CCW order.
pub fn draw_star_polygon(cfg: StarCfg, tok: ReplayToken) -> Vec<Point2<f32>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let r_lo = cfg.radius_min.max(1e-6);
    let r_hi = cfg.radius_max.max(r_lo);
    let delta = std::f32::consts::TAU / (n as f32);
    let phase = if cfg.random_phase {
        rng.gen::<f32>() * std::f32::consts::TAU
    } else {
        0.0
    };
    let mut angles: Vec<f32> = (0..n)
        .map(|k| {
            let base = phase + (k as f32) * delta;
            let jitter = (rng.gen::<f32>() * 2.0 - 1.0) * aj * delta;
            base + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    angles
        .into_iter()
        .map(|th| {
            let r = if r_hi > r_lo {
                rng.gen_range(r_lo..r_hi)
            } else {
                r_lo
            };
            Point2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::polygon_signed_area;

    #[test]
    fn reproducible_draw() {
        let cfg = StarCfg {
            vertex_count: VertexCount::Fixed(10),
            ..StarCfg::default()
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_star_polygon(cfg, tok);
        let p2 = draw_star_polygon(cfg, tok);
        assert_eq!(p1, p2);
        assert_eq!(p1.len(), 10);
        let other = draw_star_polygon(cfg, ReplayToken { seed: 42, index: 8 });
        assert_ne!(p1, other);
    }

    #[test]
    fn star_is_counter_clockwise_and_bounded() {
        let cfg = StarCfg {
            vertex_count: VertexCount::Uniform { min: 5, max: 40 },
            ..StarCfg::default()
        };
        for index in 0..20 {
            let pts = draw_star_polygon(cfg, ReplayToken { seed: 3, index });
            assert!((5..=40).contains(&pts.len()));
            assert!(polygon_signed_area(&pts) > 0.0);
            for p in &pts {
                let r = p.coords.norm();
                assert!(r >= cfg.radius_min - 1e-5 && r <= cfg.radius_max + 1e-5);
            }
        }
    }
}
