//! Geodesic mirror of drawn shapes.
//!
//! Takes a closed ring drawn over one location and produces a congruent copy
//! (true ground distances and bearings from the centroid) anchored at a second,
//! independently chosen location, optionally rotated first.
//!
//! Modules
//! - `sphere`: great-circle kernel and value types.
//! - `transform`: `rotate`, `project`, and their composition `mirror`.
//! - `driver`: input-owning recompute loop with per-frame rate limiting.
//! - `sample`: circles and reproducible random rings.
//! - `geojson`: single-polygon GeoJSON codec.

pub mod api;
pub mod driver;
pub mod error;
pub mod geojson;
pub mod sample;
pub mod sphere;
pub mod transform;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::MirrorError;
pub use sphere::{Point, Ring, VertexOffset};
pub use transform::{mirror, project, rotate};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::driver::{DriverCfg, FrameOutcome, RecomputeDriver};
    pub use crate::error::MirrorError;
    pub use crate::sample::{circle, draw_ring, RadialCfg, ReplayToken, VertexCount};
    pub use crate::sphere::{bearing, centroid, destination, distance, Point, Ring, VertexOffset};
    pub use crate::transform::{mirror, project, rotate};
}
