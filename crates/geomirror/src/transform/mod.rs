//! Rotate-then-project transform of a drawn ring onto a second location.
//!
//! Purpose
//! - `rotate`: planar rotation around the ring's vertex-mean pivot.
//! - `project`: geodesic re-anchoring at an arbitrary target center that
//!   preserves true ground distance and bearing per vertex.
//! - `mirror`: the composition, plus the "no shape" case.
//!
//! Known approximation
//! - The rotation is flat in lon/lat, not great-circle preserving. Its error
//!   grows with shape size; continental shapes come out skewed. This is the
//!   user-visible behavior and is kept as is.
//!
//! References
//! - Code cross-refs: `sphere::{centroid, distance, bearing, destination}`,
//!   `driver::RecomputeDriver`

mod project;
mod rotate;

pub use project::project;
pub use rotate::rotate;

use crate::error::MirrorError;
use crate::sphere::{canonical_angle, centroid, Point, Ring};

/// `project(rotate(source, angle), target)`.
///
/// - `Ok(None)`: nothing drawn yet.
/// - `Err(DegenerateInput)`: fewer than 3 distinct vertices (checked for every
///   angle, including 0); callers show no shape.
/// - Angles outside `[-180, 180]` are wrapped first.
pub fn mirror(
    source: Option<&Ring>,
    angle_deg: f64,
    target: Point,
) -> Result<Option<Ring>, MirrorError> {
    let Some(ring) = source else {
        return Ok(None);
    };
    centroid(ring)?;
    let rotated = rotate(ring, canonical_angle(angle_deg))?;
    Ok(Some(project(&rotated, target)))
}
