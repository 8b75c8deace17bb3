//! Triangulate a plus-shaped loop and print the triangles and their adjacency.
//!
//! Usage:
//!   cargo run -p earclip --example plus_shape
//!   cargo run -p earclip --example plus_shape -- pointiest

use earclip::mesh::{FaceId, HalfEdgeMesh};
use earclip::triangulate::{triangulate_with, ClipCfg, EarSelection};
use nalgebra::Point3;

fn main() {
    let selection = match std::env::args().nth(1).as_deref() {
        Some("pointiest") => EarSelection::Pointiest,
        _ => EarSelection::Fifo,
    };
    let outline = [
        (1.0, 0.0),
        (2.0, 0.0),
        (2.0, 1.0),
        (3.0, 1.0),
        (3.0, 2.0),
        (2.0, 2.0),
        (2.0, 3.0),
        (1.0, 3.0),
        (1.0, 2.0),
        (0.0, 2.0),
        (0.0, 1.0),
        (1.0, 1.0),
    ];
    let points: Vec<Point3<f32>> = outline.iter().map(|&(x, y)| Point3::new(x, y, 0.0)).collect();
    let cfg = ClipCfg {
        ear_selection: selection,
        ..ClipCfg::default()
    };
    let tris = match triangulate_with(&points, cfg) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("triangulation failed: {e}");
            return;
        }
    };
    let mesh = match HalfEdgeMesh::from_triangulation(&points, &tris) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("mesh build failed: {e}");
            return;
        }
    };
    for (i, t) in tris.iter().enumerate() {
        let neighbours: Vec<usize> = mesh.face_neighbors(FaceId(i)).map(|f| f.0).collect();
        println!(
            "triangle {i}: {:?} area={:.2} neighbours={neighbours:?}",
            t.indices,
            t.area()
        );
    }
    let total: f32 = tris.iter().map(|t| t.area()).sum();
    println!("{} triangles, total area {total:.3}", tris.len());
}
