//! Curated surface for front ends (map views, CLI).
//!
//! A UI needs exactly one call, [`mirror`], or the stateful
//! [`RecomputeDriver`] when inputs arrive as a stream of events.

pub use crate::driver::{DriverCfg, FrameOutcome, RecomputeDriver};
pub use crate::error::MirrorError;
pub use crate::geojson::{ring_from_geojson, ring_to_feature};
pub use crate::sphere::cfg::{DEFAULT_SOURCE_CENTER, DEFAULT_TARGET_CENTER, EARTH_RADIUS_M};
pub use crate::sphere::{offsets, Point, Ring, VertexOffset};
pub use crate::transform::{mirror, project, rotate};
