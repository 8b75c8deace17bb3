use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use earclip::api::{ray_polygon_distance, triangulate_with, ClipCfg, EarSelection, Triangle};
use earclip::{Point2, Point3, Vector2};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Triangulate polygon outlines and probe their boundaries")]
struct Cmd {
    /// Log at debug level (per-ear traces stay off)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Ear-clip a polygon file and write its triangles as JSON
    Triangulate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Clip the sharpest ear first instead of the oldest
        #[arg(long)]
        pointiest: bool,
        /// Containment margin for the ear test
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        inside_eps: f32,
    },
    /// Distance from a point to the polygon boundary along a direction
    Raycast {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_parser = parse_xy, allow_hyphen_values = true)]
        origin: Point2<f32>,
        #[arg(long, value_parser = parse_xy, allow_hyphen_values = true)]
        dir: Point2<f32>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let builder = SubscriberBuilder::default().with_target(false);
    if cmd.verbose {
        builder.with_max_level(Level::DEBUG).init();
    } else {
        builder.init();
    }
    match cmd.action {
        Action::Triangulate {
            input,
            out,
            pointiest,
            inside_eps,
        } => triangulate(&input, &out, pointiest, inside_eps),
        Action::Raycast { input, origin, dir } => raycast(&input, origin, dir.coords),
        Action::Report => report(),
    }
}

#[derive(Deserialize)]
struct PolygonFile {
    points: Vec<Vec<f32>>,
}

#[derive(Serialize)]
struct TriangleOut {
    indices: [usize; 3],
    vertices: [[f32; 3]; 3],
}

#[derive(Serialize)]
struct TriangulationOut {
    triangles: Vec<TriangleOut>,
    area: f32,
}

impl TriangulationOut {
    fn from_triangles(tris: &[Triangle]) -> Self {
        let triangles = tris
            .iter()
            .map(|t| TriangleOut {
                indices: t.indices,
                vertices: t.vertices.map(|p| [p.x, p.y, p.z]),
            })
            .collect();
        Self {
            triangles,
            area: tris.iter().map(Triangle::area).sum(),
        }
    }
}

/// Parse `x,y` into a point.
fn parse_xy(s: &str) -> std::result::Result<Point2<f32>, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let coord = |c: &str| {
        c.trim()
            .parse::<f32>()
            .map_err(|e| format!("bad coordinate `{c}`: {e}"))
    };
    Ok(Point2::new(coord(x)?, coord(y)?))
}

/// Read `{"points": [[x, y] | [x, y, z], ...]}`; 2D points land on z = 0.
fn load_polygon(path: &Path) -> Result<Vec<Point3<f32>>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let file: PolygonFile = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing polygon JSON {}", path.display()))?;
    file.points
        .iter()
        .enumerate()
        .map(|(i, c)| match c.as_slice() {
            [x, y] => Ok(Point3::new(*x, *y, 0.0)),
            [x, y, z] => Ok(Point3::new(*x, *y, *z)),
            _ => bail!("point {i}: expected 2 or 3 coordinates, got {}", c.len()),
        })
        .collect()
}

fn triangulate(input: &Path, out: &Path, pointiest: bool, inside_eps: f32) -> Result<()> {
    tracing::info!(
        input = %input.display(),
        out = %out.display(),
        pointiest,
        inside_eps,
        "triangulate"
    );
    let points = load_polygon(input)?;
    let cfg = ClipCfg {
        ear_selection: if pointiest {
            EarSelection::Pointiest
        } else {
            EarSelection::Fifo
        },
        inside_eps,
        ..ClipCfg::default()
    };
    let tris = triangulate_with(&points, cfg)
        .with_context(|| format!("triangulating {}", input.display()))?;
    let doc = TriangulationOut::from_triangles(&tris);

    provenance::ensure_parent_dir(out)?;
    fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let prov = provenance::write_sidecar(
        out,
        provenance::Payload::new(
            "triangulate",
            json!({
                "input": input.to_string_lossy(),
                "pointiest": pointiest,
                "inside_eps": inside_eps,
                "vertices": points.len(),
                "triangles": tris.len(),
            }),
        ),
    )?;
    tracing::info!(
        triangles = tris.len(),
        area = doc.area,
        provenance = %prov.display(),
        "wrote triangulation"
    );
    Ok(())
}

fn raycast(input: &Path, origin: Point2<f32>, dir: Vector2<f32>) -> Result<()> {
    tracing::info!(input = %input.display(), ?origin, ?dir, "raycast");
    let flat: Vec<Point2<f32>> = load_polygon(input)?.iter().map(|p| p.xy()).collect();
    match ray_polygon_distance(origin, dir, &flat) {
        Some(d) => println!("{d}"),
        None => println!("none"),
    }
    Ok(())
}

fn report() -> Result<()> {
    let doc = provenance::describe("report", json!({}), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn parse_xy_accepts_signed_pairs() {
        assert_eq!(parse_xy("1.5,-2").unwrap(), Point2::new(1.5, -2.0));
        assert_eq!(parse_xy(" -1 , 0 ").unwrap(), Point2::new(-1.0, 0.0));
        assert!(parse_xy("1.5").is_err());
        assert!(parse_xy("a,b").is_err());
    }

    #[test]
    fn load_polygon_mixes_2d_and_3d_points() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("poly.json");
        fs::write(&path, r#"{"points": [[0, 0], [1, 0, 2], [1, 1]]}"#).unwrap();
        let pts = load_polygon(&path).unwrap();
        assert_eq!(
            pts,
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 2.0),
                Point3::new(1.0, 1.0, 0.0),
            ]
        );

        fs::write(&path, r#"{"points": [[0, 0], [1], [1, 1]]}"#).unwrap();
        let err = load_polygon(&path).unwrap_err();
        assert!(err.to_string().contains("point 1"));
    }

    #[test]
    fn triangulate_writes_output_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("square.json");
        fs::write(&input, r#"{"points": [[0, 0], [1, 0], [1, 1], [0, 1]]}"#).unwrap();
        let out = dir.path().join("nested").join("tris.json");

        triangulate(&input, &out, false, 0.0).unwrap();

        let doc: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        let tris = doc["triangles"].as_array().unwrap();
        assert_eq!(tris.len(), 2);
        assert_eq!(tris[0]["indices"], json!([3, 0, 1]));
        assert!((doc["area"].as_f64().unwrap() - 1.0).abs() < 1e-6);

        let prov: Value = serde_json::from_slice(
            &fs::read(dir.path().join("nested").join("tris.provenance.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(prov["command"], "triangulate");
        assert_eq!(prov["params"]["triangles"], 2);
    }

    #[test]
    fn triangulate_reports_bad_polygons() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bow.json");
        fs::write(&input, r#"{"points": [[0, 0], [1, 1], [1, 0], [0, 1]]}"#).unwrap();
        let out = dir.path().join("tris.json");
        let err = triangulate(&input, &out, false, 0.0).unwrap_err();
        assert!(format!("{err:#}").contains("polygon is not simple"));
        assert!(!out.exists());
    }
}
