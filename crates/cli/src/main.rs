use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use geomirror::api::{
    mirror, offsets, ring_from_geojson, ring_to_feature, Point, Ring, DEFAULT_SOURCE_CENTER,
    DEFAULT_TARGET_CENTER,
};
use geomirror::sample::{draw_ring, RadialCfg, ReplayToken, VertexCount};
use geomirror::sphere::centroid;
use polars::prelude::*;
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "geomirror-cli")]
#[command(about = "Mirror drawn shapes onto another place at true ground size")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Rotate and re-anchor a GeoJSON polygon at a target center
    Mirror {
        #[arg(long)]
        input: String,
        /// Rotation in degrees, counter-clockwise positive
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        angle: f64,
        /// Target center as "lon,lat" (defaults to New York)
        #[arg(long, allow_hyphen_values = true)]
        target: Option<Point>,
        #[arg(long)]
        out: String,
    },
    /// Write a reproducible random ring as GeoJSON
    Sample {
        /// Center as "lon,lat" (defaults to San Francisco)
        #[arg(long, allow_hyphen_values = true)]
        center: Option<Point>,
        #[arg(long, default_value_t = 1_000.0)]
        radius_m: f64,
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: String,
    },
    /// Write per-vertex distance/bearing from the centroid (.csv or .parquet)
    Offsets {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Mirror {
            input,
            angle,
            target,
            out,
        } => mirror_file(&input, angle, target.unwrap_or(DEFAULT_TARGET_CENTER), &out),
        Action::Sample {
            center,
            radius_m,
            vertices,
            seed,
            index,
            out,
        } => sample(
            center.unwrap_or(DEFAULT_SOURCE_CENTER),
            radius_m,
            vertices,
            ReplayToken { seed, index },
            &out,
        ),
        Action::Offsets { input, out } => offsets_table(&input, &out),
        Action::Report => report(),
    }
}

fn read_ring(input: &str) -> Result<Ring> {
    let text = std::fs::read_to_string(input).with_context(|| format!("reading {input}"))?;
    ring_from_geojson(&text).with_context(|| format!("decoding {input}"))
}

fn ensure_parent(out: &str) -> Result<()> {
    if let Some(parent) = Path::new(out).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

fn write_feature(out: &str, feature: &serde_json::Value) -> Result<()> {
    ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(feature)?)
        .with_context(|| format!("writing {out}"))
}

fn mirror_file(input: &str, angle: f64, target: Point, out: &str) -> Result<()> {
    tracing::info!(input, angle, %target, out, "mirror");
    let source = read_ring(input)?;
    let Some(mirrored) = mirror(Some(&source), angle, target)
        .with_context(|| format!("mirroring {input}"))?
    else {
        bail!("no shape to mirror in {input}");
    };
    tracing::info!(vertices = mirrored.len(), "mirrored");

    let params = json!({
        "angle_deg": angle,
        "target": [target.lon, target.lat],
    });
    let mut props = params.clone();
    props["role"] = json!("mirrored");
    write_feature(out, &ring_to_feature(&mirrored, props))?;
    write_sidecar(out, Payload::new(params).with_input(input))?;
    Ok(())
}

#[derive(Serialize)]
struct SampleParams {
    center: Point,
    radius_m: f64,
    vertices: usize,
    seed: u64,
    index: u64,
}

fn sample(
    center: Point,
    radius_m: f64,
    vertices: usize,
    tok: ReplayToken,
    out: &str,
) -> Result<()> {
    tracing::info!(%center, radius_m, vertices, seed = tok.seed, index = tok.index, out, "sample");
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(vertices),
        base_radius_m: radius_m,
        ..RadialCfg::default()
    };
    let ring = draw_ring(center, cfg, tok)?;
    let params = serde_json::to_value(SampleParams {
        center,
        radius_m,
        vertices,
        seed: tok.seed,
        index: tok.index,
    })?;
    write_feature(out, &ring_to_feature(&ring, params.clone()))?;
    write_sidecar(out, Payload::new(params))?;
    Ok(())
}

fn offsets_table(input: &str, out: &str) -> Result<()> {
    tracing::info!(input, out, "offsets");
    let ring = read_ring(input)?;
    let pivot = centroid(&ring).with_context(|| format!("centroid of {input}"))?;
    let offs = offsets(&ring, pivot);

    let index: Vec<u32> = (0..ring.len() as u32).collect();
    let lon: Vec<f64> = ring.points().iter().map(|p| p.lon).collect();
    let lat: Vec<f64> = ring.points().iter().map(|p| p.lat).collect();
    let distance_m: Vec<f64> = offs.iter().map(|o| o.distance_m).collect();
    let bearing_deg: Vec<f64> = offs.iter().map(|o| o.bearing_deg).collect();
    let mut df = df!(
        "index" => index,
        "lon" => lon,
        "lat" => lat,
        "distance_m" => distance_m,
        "bearing_deg" => bearing_deg,
    )?;
    tracing::info!(rows = df.height(), cols = df.width(), %pivot, "offsets_table");

    ensure_parent(out)?;
    let mut file = std::fs::File::create(out).with_context(|| format!("creating {out}"))?;
    if out.ends_with(".parquet") {
        ParquetWriter::new(&mut file).finish(&mut df)?;
    } else {
        CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
    }
    write_sidecar(
        out,
        Payload::new(json!({"pivot": [pivot.lon, pivot.lat]})).with_input(input),
    )?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = provenance::document(
        json!({
            "default_source": [DEFAULT_SOURCE_CENTER.lon, DEFAULT_SOURCE_CENTER.lat],
            "default_target": [DEFAULT_TARGET_CENTER.lon, DEFAULT_TARGET_CENTER.lat],
        }),
        &[],
    );
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use geomirror::sphere::distance;
    use tempfile::tempdir;

    fn write_sample(dir: &Path) -> String {
        let path = dir.join("drawn.geojson").to_string_lossy().into_owned();
        sample(
            DEFAULT_SOURCE_CENTER,
            800.0,
            9,
            ReplayToken { seed: 1, index: 2 },
            &path,
        )
        .unwrap();
        path
    }

    #[test]
    fn cli_parses_negative_points() {
        let cmd = Cmd::try_parse_from([
            "geomirror-cli",
            "mirror",
            "--input",
            "a.geojson",
            "--angle",
            "-45",
            "--target",
            "-74.006,40.7128",
            "--out",
            "b.geojson",
        ])
        .unwrap();
        match cmd.action {
            Action::Mirror { angle, target, .. } => {
                assert_eq!(angle, -45.0);
                assert_eq!(target, Some(Point::new(-74.006, 40.7128)));
            }
            _ => panic!("expected mirror"),
        }
        let bad_center = Cmd::try_parse_from([
            "geomirror-cli",
            "sample",
            "--center",
            "x",
            "--out",
            "o",
        ]);
        assert!(bad_center.is_err());
    }

    #[test]
    fn sample_then_mirror_round_trip() {
        let dir = tempdir().unwrap();
        let input = write_sample(dir.path());
        let out = dir.path().join("nested/mirrored.geojson");
        let out = out.to_string_lossy().into_owned();
        let target = Point::new(139.6917, 35.6895);
        mirror_file(&input, 30.0, target, &out).unwrap();

        let mirrored = read_ring(&out).unwrap();
        let source = read_ring(&input).unwrap();
        assert_eq!(mirrored.len(), source.len());
        let c = centroid(&mirrored).unwrap();
        assert!(distance(c, target) < 5.0);
        assert!(dir.path().join("nested/mirrored.provenance.json").exists());
    }

    #[test]
    fn mirror_rejects_degenerate_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("flat.geojson");
        std::fs::write(
            &input,
            r#"{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,0],[0,0]]]}"#,
        )
        .unwrap();
        let out = dir.path().join("out.geojson");
        let err = mirror_file(
            &input.to_string_lossy(),
            0.0,
            DEFAULT_TARGET_CENTER,
            &out.to_string_lossy(),
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("degenerate"));
        assert!(!out.exists());
    }

    #[test]
    fn offsets_writes_csv_table() {
        let dir = tempdir().unwrap();
        let input = write_sample(dir.path());
        let out = dir.path().join("offsets.csv").to_string_lossy().into_owned();
        offsets_table(&input, &out).unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("index,lon,lat,distance_m,bearing_deg"));
        // 9 vertices + closing point
        assert_eq!(lines.count(), 10);
    }
}
