//! Great-circle primitives on a sphere of radius `EARTH_RADIUS_M`.
//!
//! All functions are pure. Conventions for degenerate inputs:
//! - `bearing(a, a) == 0` (direction undefined; never fails);
//! - longitudes returned by `destination` are wrapped into `[-180, 180)`.
//!
//! `distance`, `bearing` and `destination` are mutually consistent:
//! `destination(a, distance(a, b), bearing(a, b)) ≈ b` for non-antipodal pairs.

use nalgebra::Vector3;

use super::cfg::EARTH_RADIUS_M;
use super::types::{normalize_bearing, normalize_lon, Point, Ring, VertexOffset};
use crate::error::MirrorError;

/// Arithmetic mean of the ring's vertices (closing duplicate excluded).
///
/// This is a pivot, not a spherical centroid. Longitudes are averaged as
/// offsets from the first vertex, so a ring straddling the antimeridian gets
/// a pivot inside it. Fails when the ring has fewer than 3 distinct vertices.
pub fn centroid(ring: &Ring) -> Result<Point, MirrorError> {
    let distinct = ring.distinct_vertex_count();
    if distinct < 3 {
        return Err(MirrorError::DegenerateInput { distinct });
    }
    Ok(mean_point(ring.vertices()))
}

/// Infallible mean used by best-effort paths. `pts` must be non-empty.
pub(crate) fn mean_point(pts: &[Point]) -> Point {
    debug_assert!(!pts.is_empty());
    let anchor = pts[0].lon;
    let n = pts.len() as f64;
    let (sum_dlon, sum_lat) = pts.iter().fold((0.0, 0.0), |(dlon, lat), p| {
        (dlon + normalize_lon(p.lon - anchor), lat + p.lat)
    });
    Point::new(normalize_lon(anchor + sum_dlon / n), sum_lat / n)
}

/// Haversine distance in meters. Symmetric bit-for-bit.
pub fn distance(a: Point, b: Point) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    // abs() makes both differences independent of argument order
    let d_phi = (b.lat - a.lat).abs().to_radians();
    let d_lambda = (b.lon - a.lon).abs().to_radians();
    let h = (d_phi * 0.5).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda * 0.5).sin().powi(2);
    let h = h.clamp(0.0, 1.0);
    2.0 * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Initial great-circle bearing from `a` to `b` in `[0, 360)`.
///
/// Returns 0 when `a == b`.
pub fn bearing(a: Point, b: Point) -> f64 {
    if a == b {
        return 0.0;
    }
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let d_lambda = (b.lon - a.lon).to_radians();
    let y = d_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lambda.cos();
    normalize_bearing(y.atan2(x).to_degrees())
}

/// Forward geodesic problem: travel `distance_m` from `origin` along the
/// initial bearing `bearing_deg`.
///
/// Works on unit vectors (n-vectors) and recovers latitude with `atan2`,
/// which stays well conditioned near the poles where `asin` does not.
pub fn destination(origin: Point, distance_m: f64, bearing_deg: f64) -> Point {
    let delta = distance_m / EARTH_RADIUS_M;
    let theta = bearing_deg.to_radians();
    let (sin_phi, cos_phi) = origin.lat.to_radians().sin_cos();
    let (sin_lam, cos_lam) = origin.lon.to_radians().sin_cos();

    let p = Vector3::new(cos_phi * cos_lam, cos_phi * sin_lam, sin_phi);
    let north = Vector3::new(-sin_phi * cos_lam, -sin_phi * sin_lam, cos_phi);
    let east = Vector3::new(-sin_lam, cos_lam, 0.0);
    let dir = north * theta.cos() + east * theta.sin();
    let q = p * delta.cos() + dir * delta.sin();

    let lat = q.z.atan2(q.x.hypot(q.y)).to_degrees();
    let lon = q.y.atan2(q.x).to_degrees();
    Point::new(normalize_lon(lon), lat)
}

/// Offsets of every ring point (closing duplicate included) from `pivot`.
pub fn offsets(ring: &Ring, pivot: Point) -> Vec<VertexOffset> {
    ring.points()
        .iter()
        .map(|&p| VertexOffset::between(pivot, p))
        .collect()
}
