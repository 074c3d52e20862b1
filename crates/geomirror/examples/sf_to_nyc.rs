//! Mirror a block of San Francisco onto New York and print both rings.
//!
//! Usage:
//!   cargo run -p geomirror --example sf_to_nyc -- [angle_deg]

use geomirror::api::{mirror, DEFAULT_SOURCE_CENTER, DEFAULT_TARGET_CENTER};
use geomirror::sample::circle;
use geomirror::sphere::{centroid, distance};

fn main() {
    let angle: f64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.0);
    let source = match circle(DEFAULT_SOURCE_CENTER, 1_200.0, 6) {
        Ok(ring) => ring,
        Err(err) => {
            eprintln!("cannot build source ring: {err}");
            return;
        }
    };
    match mirror(Some(&source), angle, DEFAULT_TARGET_CENTER) {
        Ok(Some(out)) => {
            let c_src = centroid(&source).unwrap_or(DEFAULT_SOURCE_CENTER);
            for (v, m) in source.points().iter().zip(out.points()) {
                println!("{v}  ->  {m}   ({:.1} m from pivot)", distance(c_src, *v));
            }
        }
        Ok(None) => println!("no shape"),
        Err(err) => eprintln!("no shape: {err}"),
    }
}
