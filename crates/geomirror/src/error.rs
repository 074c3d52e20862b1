//! Error type shared by the kernel, the transforms, and the GeoJSON codec.
//!
//! Degenerate input is signaled, never fatal: callers of [`crate::mirror`]
//! treat `DegenerateInput` as "no shape to show".

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum MirrorError {
    /// Ring has fewer than 3 distinct vertices; no centroid is defined.
    DegenerateInput { distinct: usize },
    InvalidRing { reason: String },
    InvalidPoint { reason: String },
    GeoJson { reason: String },
}

impl MirrorError {
    pub(crate) fn invalid_ring(reason: impl Into<String>) -> Self {
        Self::InvalidRing {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_point(reason: impl Into<String>) -> Self {
        Self::InvalidPoint {
            reason: reason.into(),
        }
    }

    pub(crate) fn geojson(reason: impl Into<String>) -> Self {
        Self::GeoJson {
            reason: reason.into(),
        }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateInput { .. })
    }
}

impl fmt::Display for MirrorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateInput { distinct } => write!(
                f,
                "degenerate input: ring has {distinct} distinct vertices, need at least 3"
            ),
            Self::InvalidRing { reason } => write!(f, "invalid ring: {reason}"),
            Self::InvalidPoint { reason } => write!(f, "invalid point: {reason}"),
            Self::GeoJson { reason } => write!(f, "geojson: {reason}"),
        }
    }
}

impl std::error::Error for MirrorError {}
