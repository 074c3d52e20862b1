//! Spherical geometry kernel.
//!
//! Purpose
//! - Stateless great-circle primitives (distance, bearing, destination) and the
//!   planar vertex-mean pivot of a ring.
//! - Value types shared by the transforms: `Point`, `Ring`, `VertexOffset`.
//!
//! Assumptions and conventions
//! - Spherical Earth with mean radius `cfg::EARTH_RADIUS_M`; no ellipsoid.
//! - Coordinates are (lon, lat) degrees; lon ∈ [-180, 180), lat ∈ [-90, 90].
//! - Bearings are clockwise from north in [0, 360).
//!
//! References
//! - Code cross-refs: `transform::{rotate, project}`, `sample::circle`

pub mod cfg;
mod kernel;
mod types;

pub use kernel::{bearing, centroid, destination, distance, offsets};
pub(crate) use kernel::mean_point;
pub use types::{canonical_angle, normalize_bearing, normalize_lon, Point, Ring, VertexOffset};

#[cfg(test)]
mod tests;
