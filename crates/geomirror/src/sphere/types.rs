//! Geographic value types: `Point`, `Ring`, `VertexOffset`.
//!
//! - `Point`: (longitude, latitude) in decimal degrees.
//! - `Ring`: closed vertex sequence (first == last), at least 4 points.
//! - `VertexOffset`: (distance, bearing) of a vertex relative to a pivot.
//!
//! Code cross-refs: `kernel::{distance, bearing, destination, centroid}`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::cfg::DISTINCT_EPS_DEG;
use crate::error::MirrorError;

/// Wrap a longitude into `[-180, 180)`. In-range values are returned as is.
#[inline]
pub fn normalize_lon(deg: f64) -> f64 {
    if (-180.0..180.0).contains(&deg) {
        return deg;
    }
    let wrapped = (deg + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Wrap a bearing into `[0, 360)`.
#[inline]
pub fn normalize_bearing(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Wrap an arbitrary rotation angle into `[-180, 180]`; values already in
/// range are returned untouched (so `180` stays `180`).
#[inline]
pub fn canonical_angle(deg: f64) -> f64 {
    if (-180.0..=180.0).contains(&deg) {
        deg
    } else {
        normalize_lon(deg)
    }
}

/// Position on the sphere in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lon: f64,
    pub lat: f64,
}

impl Point {
    #[inline]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Longitude wrapped into `[-180, 180)`, latitude clamped into `[-90, 90]`.
    #[inline]
    pub fn normalized(self) -> Self {
        Self {
            lon: normalize_lon(self.lon),
            lat: self.lat.clamp(-90.0, 90.0),
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }

    /// Accept finite coordinates with latitude in `[-90, 90]` and wrap the
    /// longitude into `[-180, 180)`. The error is a human-readable reason.
    pub(crate) fn checked(self) -> Result<Self, String> {
        if !self.is_finite() {
            return Err(format!("({self}) is not finite"));
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(format!("latitude {} outside [-90, 90]", self.lat));
        }
        Ok(Self::new(normalize_lon(self.lon), self.lat))
    }

    #[inline]
    pub(crate) fn approx_eq(&self, other: &Point, eps: f64) -> bool {
        (self.lon - other.lon).abs() <= eps && (self.lat - other.lat).abs() <= eps
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lon, self.lat)
    }
}

/// Parses `"lon,lat"` (whitespace around either number is ignored).
impl FromStr for Point {
    type Err = MirrorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lon, lat) = s.split_once(',').ok_or_else(|| {
            MirrorError::invalid_point(format!("expected \"lon,lat\", got {s:?}"))
        })?;
        let lon: f64 = lon
            .trim()
            .parse()
            .map_err(|e| MirrorError::invalid_point(format!("longitude {lon:?}: {e}")))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|e| MirrorError::invalid_point(format!("latitude {lat:?}: {e}")))?;
        Point::new(lon, lat)
            .checked()
            .map_err(MirrorError::invalid_point)
    }
}

/// Closed polygon boundary.
///
/// Invariants:
/// - at least 4 points, all finite, latitudes in `[-90, 90]`, longitudes
///   in `[-180, 180)`;
/// - `points[0] == points[len-1]` exactly (closure);
/// - order is the traversal order and fixes the interior side.
///
/// Rings are never mutated by the transforms; every transform returns a new one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct Ring {
    points: Vec<Point>,
}

impl Ring {
    /// Validate an already closed vertex list. Longitudes are wrapped into
    /// `[-180, 180)` before the closure check.
    pub fn new(points: Vec<Point>) -> Result<Self, MirrorError> {
        if points.len() < 4 {
            return Err(MirrorError::invalid_ring(format!(
                "need at least 4 points, got {}",
                points.len()
            )));
        }
        let points = points
            .into_iter()
            .enumerate()
            .map(|(i, p)| {
                p.checked()
                    .map_err(|reason| MirrorError::invalid_ring(format!("point {i}: {reason}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if points.first() != points.last() {
            return Err(MirrorError::invalid_ring("first point must equal last point"));
        }
        Ok(Self { points })
    }

    /// Like [`Ring::new`], but appends the first point when the input is open.
    pub fn close(mut points: Vec<Point>) -> Result<Self, MirrorError> {
        if let Some(&first) = points.first() {
            if points.last() != Some(&first) {
                points.push(first);
            }
        }
        Self::new(points)
    }

    /// Internal constructor for transforms that map a valid ring point-wise.
    /// Re-asserts closure so the invariant never depends on float determinism.
    pub(crate) fn from_mapped(mut points: Vec<Point>) -> Self {
        debug_assert!(points.len() >= 4);
        if let Some(first) = points.first().copied() {
            if let Some(last) = points.last_mut() {
                *last = first;
            }
        }
        Self { points }
    }

    /// All points including the closing duplicate.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Vertices without the closing duplicate.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.points[..self.points.len() - 1]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never true for a ring built through `new`/`close`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of distinct vertices (closing duplicate excluded).
    pub fn distinct_vertex_count(&self) -> usize {
        let mut pts = self.vertices().to_vec();
        pts.sort_by(|a, b| {
            a.lon
                .total_cmp(&b.lon)
                .then_with(|| a.lat.total_cmp(&b.lat))
        });
        pts.dedup_by(|a, b| a.approx_eq(b, DISTINCT_EPS_DEG));
        pts.len()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl TryFrom<Vec<Point>> for Ring {
    type Error = MirrorError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        Ring::new(points)
    }
}

impl From<Ring> for Vec<Point> {
    fn from(ring: Ring) -> Self {
        ring.points
    }
}

/// Position of a vertex relative to a pivot, in true ground units.
///
/// `bearing_deg ∈ [0, 360)`, 0 = north, clockwise.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VertexOffset {
    pub distance_m: f64,
    pub bearing_deg: f64,
}

impl VertexOffset {
    #[inline]
    pub fn between(origin: Point, p: Point) -> Self {
        Self {
            distance_m: super::kernel::distance(origin, p),
            bearing_deg: super::kernel::bearing(origin, p),
        }
    }

    /// Point reached from `origin` along this offset.
    #[inline]
    pub fn apply(&self, origin: Point) -> Point {
        super::kernel::destination(origin, self.distance_m, self.bearing_deg)
    }
}
