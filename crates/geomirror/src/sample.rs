//! Ring construction: geodesic circles and reproducible random rings.
//!
//! Purpose
//! - `circle`: regular ring at a fixed ground radius around a center.
//! - `draw_ring`: star-shaped random ring around a center, used as a stand-in
//!   for hand-drawn shapes in tests, benches, and the CLI.
//!
//! Model
//! - Start from `n` equally spaced bearings on [0, 360), add bounded bearing
//!   and radial jitter, then place each vertex with `destination`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::MirrorError;
use crate::sphere::{destination, Point, Ring};

/// Regular ring of `steps` vertices at `radius_m` from `center`.
///
/// Vertices run counter-clockwise (bearings 0, -360/steps, ...), matching the
/// GeoJSON right-hand rule for exterior rings.
pub fn circle(center: Point, radius_m: f64, steps: usize) -> Result<Ring, MirrorError> {
    if steps < 3 {
        return Err(MirrorError::invalid_ring(format!(
            "circle needs at least 3 steps, got {steps}"
        )));
    }
    if !(radius_m.is_finite() && radius_m > 0.0) {
        return Err(MirrorError::invalid_ring(format!(
            "circle radius must be positive, got {radius_m}"
        )));
    }
    let points = (0..steps)
        .map(|k| destination(center, radius_m, -360.0 * k as f64 / steps as f64))
        .collect();
    Ring::close(points)
}

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Bearing jitter as a fraction of the base spacing 360/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii = `base_radius_m * (1 + u)`, with `u ∈ [-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Ground radius before jitter, meters.
    pub base_radius_m: f64,
    pub random_phase: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius_m: 1_000.0,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random star-shaped ring around `center`.
///
/// Bearings are sorted, so the ring never self-intersects as seen from the
/// center and runs clockwise (increasing bearing).
pub fn draw_ring(center: Point, cfg: RadialCfg, tok: ReplayToken) -> Result<Ring, MirrorError> {
    if !(cfg.base_radius_m.is_finite() && cfg.base_radius_m > 0.0) {
        return Err(MirrorError::invalid_ring(format!(
            "base radius must be positive, got {}",
            cfg.base_radius_m
        )));
    }
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let delta = 360.0 / n as f64;
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * 360.0
    } else {
        0.0
    };
    let mut bearings: Vec<f64> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            phase + k as f64 * delta + jitter
        })
        .collect();
    bearings.sort_by(f64::total_cmp);
    let points = bearings
        .into_iter()
        .map(|b| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            destination(center, cfg.base_radius_m * (1.0 + u), b)
        })
        .collect();
    Ring::close(points)
}
