//! Criterion benchmarks for ear clipping.
//! Focus sizes: n in {16, 64, 256, 1024} on random star polygons.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use earclip::geom2::rand::{draw_star_polygon, ReplayToken, StarCfg, VertexCount};
use earclip::mesh::HalfEdgeMesh;
use earclip::triangulate::{triangulate_with, ClipCfg, EarSelection};
use nalgebra::Point3;

fn star(n: usize, seed: u64) -> Vec<Point3<f32>> {
    let cfg = StarCfg {
        vertex_count: VertexCount::Fixed(n),
        ..StarCfg::default()
    };
    draw_star_polygon(cfg, ReplayToken { seed, index: 0 })
        .into_iter()
        .map(|p| Point3::new(p.x, p.y, 0.0))
        .collect()
}

fn bench_triangulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate");
    for &n in &[16usize, 64, 256, 1024] {
        for (label, selection) in [
            ("fifo", EarSelection::Fifo),
            ("pointiest", EarSelection::Pointiest),
        ] {
            let cfg = ClipCfg {
                ear_selection: selection,
                ..ClipCfg::default()
            };
            group.bench_with_input(BenchmarkId::new(label, n), &n, |b, &n| {
                b.iter_batched(
                    || star(n, 41),
                    |pts| {
                        let _tris = triangulate_with(&pts, cfg).unwrap();
                    },
                    BatchSize::SmallInput,
                )
            });
        }

        group.bench_with_input(BenchmarkId::new("halfedge_mesh", n), &n, |b, &n| {
            let pts = star(n, 42);
            let tris = triangulate_with(&pts, ClipCfg::default()).unwrap();
            b.iter(|| {
                let _mesh = HalfEdgeMesh::from_triangulation(&pts, &tris).unwrap();
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_triangulate);
criterion_main!(benches);
