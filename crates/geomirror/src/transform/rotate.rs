use nalgebra::{Rotation2, Vector2};

use crate::error::MirrorError;
use crate::sphere::cfg::IDENTITY_ANGLE_EPS_DEG;
use crate::sphere::{centroid, normalize_lon, Point, Ring};

/// Rotate every vertex of `ring` around its centroid by `angle_deg`
/// (counter-clockwise positive in the lon/lat plane).
///
/// Planar approximation: lon/lat are treated as flat Cartesian coordinates
/// around the pivot. Accurate for city/region-sized shapes only. Longitude
/// offsets are taken modulo 360, and only the output is wrapped back into
/// `[-180, 180)`.
///
/// Pre: `ring` has at least 3 distinct vertices unless the angle is ~0.
/// Post: same vertex count, closure kept, input untouched. Angles within
/// `IDENTITY_ANGLE_EPS_DEG` of 0 return an exact copy.
pub fn rotate(ring: &Ring, angle_deg: f64) -> Result<Ring, MirrorError> {
    if angle_deg.abs() < IDENTITY_ANGLE_EPS_DEG {
        return Ok(ring.clone());
    }
    let c = centroid(ring)?;
    let rot = Rotation2::new(angle_deg.to_radians());
    let points = ring
        .points()
        .iter()
        .map(|p| {
            // short way round, so a ring on the antimeridian stays in one piece
            let offset = Vector2::new(normalize_lon(p.lon - c.lon), p.lat - c.lat);
            let v = rot * offset;
            Point::new(c.lon + v.x, c.lat + v.y).normalized()
        })
        .collect();
    Ok(Ring::from_mapped(points))
}
