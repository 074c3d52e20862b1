//! Fixed numeric constants for spherical geometry.
//!
//! Policy
//! - Defaults are fixed constants to avoid “tolerance juggling”. The kernel
//!   works on a sphere, so one radius is used everywhere; mixing radii breaks
//!   the distance/destination round trip.

use super::types::Point;

/// Mean Earth radius (IUGG), meters.
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;
/// Rotations with `|angle| <` this (degrees) are treated as the identity.
pub const IDENTITY_ANGLE_EPS_DEG: f64 = 1e-4;
/// Two vertices closer than this in both coordinates (degrees) count as one.
pub const DISTINCT_EPS_DEG: f64 = 1e-12;

/// San Francisco; default focus of the drawing view.
pub const DEFAULT_SOURCE_CENTER: Point = Point {
    lon: -122.4194,
    lat: 37.7749,
};
/// New York; default focus of the mirrored view.
pub const DEFAULT_TARGET_CENTER: Point = Point {
    lon: -74.006,
    lat: 40.7128,
};
