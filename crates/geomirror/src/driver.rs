//! Recompute driver: owns the three inputs and the derived mirrored ring.
//!
//! Purpose
//! - Hold `(source, angle, target)` and recompute `mirror` when any of them
//!   changed, at most once per rendered frame.
//!
//! Design
//! - Setters only record the new value and mark the driver dirty. `frame()`
//!   reads whatever is current at that moment, so a burst of target updates
//!   between two frames costs one recompute (intermediate values are dropped).
//! - The rotated ring is memoized on (source generation, angle). Panning the
//!   target view only reruns the projection.
//! - The output is replaced wholesale on each recompute, never patched.
//! - A new source (or `begin_drawing`) drops the previous overlay at once.
//!
//! References
//! - Code cross-refs: `transform::{rotate, project, mirror}`

use std::time::{Duration, Instant};

use crate::error::MirrorError;
use crate::sphere::cfg::DEFAULT_TARGET_CENTER;
use crate::sphere::{canonical_angle, centroid, Point, Ring};
use crate::transform::{project, rotate};

/// Backpressure settings.
#[derive(Clone, Copy, Debug)]
pub struct DriverCfg {
    /// Minimum time between two recomputes. `ZERO` = one per frame.
    pub min_interval: Duration,
}

impl Default for DriverCfg {
    fn default() -> Self {
        Self {
            min_interval: Duration::ZERO,
        }
    }
}

/// What a call to [`RecomputeDriver::frame`] did.
#[derive(Clone, Debug, PartialEq)]
pub enum FrameOutcome {
    /// No input changed since the last recompute.
    Idle,
    /// Inputs changed but `min_interval` has not elapsed; still dirty.
    Deferred,
    /// New mirrored ring available for this epoch.
    Updated { epoch: u64 },
    /// No source ring; output is absent.
    Cleared,
    /// Source is degenerate; output is absent until the inputs change.
    Skipped(MirrorError),
}

#[derive(Clone, Debug)]
struct RotatedMemo {
    generation: u64,
    angle_bits: u64,
    ring: Ring,
}

#[derive(Debug)]
pub struct RecomputeDriver {
    cfg: DriverCfg,
    source: Option<Ring>,
    generation: u64,
    angle_deg: f64,
    target: Point,
    dirty: bool,
    last_run: Option<Instant>,
    rotated: Option<RotatedMemo>,
    output: Option<Ring>,
    epoch: u64,
}

impl Default for RecomputeDriver {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_CENTER, DriverCfg::default())
    }
}

impl RecomputeDriver {
    pub fn new(target: Point, cfg: DriverCfg) -> Self {
        Self {
            cfg,
            source: None,
            generation: 0,
            angle_deg: 0.0,
            target,
            dirty: false,
            last_run: None,
            rotated: None,
            output: None,
            epoch: 0,
        }
    }

    /// Drawing of a new shape started: the previous shape and both overlays go away.
    pub fn begin_drawing(&mut self) {
        self.generation += 1;
        self.source = None;
        self.rotated = None;
        self.output = None;
        self.dirty = false;
    }

    /// Replace the source shape. The old overlay is dropped immediately.
    pub fn set_source(&mut self, source: Option<Ring>) {
        self.generation += 1;
        self.source = source;
        self.rotated = None;
        self.output = None;
        self.dirty = true;
    }

    /// Set the rotation, wrapped into `[-180, 180]`.
    pub fn set_angle(&mut self, angle_deg: f64) {
        let angle_deg = canonical_angle(angle_deg);
        if angle_deg.to_bits() != self.angle_deg.to_bits() {
            self.angle_deg = angle_deg;
            self.dirty = true;
        }
    }

    pub fn reset_angle(&mut self) {
        self.set_angle(0.0);
    }

    pub fn set_target(&mut self, target: Point) {
        if target != self.target {
            self.target = target;
            self.dirty = true;
        }
    }

    /// Animation-frame hook: recompute at most once if anything changed.
    pub fn frame(&mut self, now: Instant) -> FrameOutcome {
        if !self.dirty {
            return FrameOutcome::Idle;
        }
        if let Some(last) = self.last_run {
            if now.saturating_duration_since(last) < self.cfg.min_interval {
                return FrameOutcome::Deferred;
            }
        }
        self.last_run = Some(now);
        self.recompute_now()
    }

    /// Recompute from the current inputs, ignoring the rate limit.
    pub fn recompute_now(&mut self) -> FrameOutcome {
        self.dirty = false;
        let Some(source) = self.source.as_ref() else {
            self.rotated = None;
            self.output = None;
            return FrameOutcome::Cleared;
        };
        if let Err(err) = centroid(source) {
            tracing::warn!(%err, generation = self.generation, "recompute skipped");
            self.rotated = None;
            self.output = None;
            return FrameOutcome::Skipped(err);
        }

        let angle_bits = self.angle_deg.to_bits();
        let reuse = self
            .rotated
            .as_ref()
            .is_some_and(|m| m.generation == self.generation && m.angle_bits == angle_bits);
        if !reuse {
            match rotate(source, self.angle_deg) {
                Ok(ring) => {
                    self.rotated = Some(RotatedMemo {
                        generation: self.generation,
                        angle_bits,
                        ring,
                    });
                }
                Err(err) => {
                    tracing::warn!(%err, generation = self.generation, "recompute skipped");
                    self.rotated = None;
                    self.output = None;
                    return FrameOutcome::Skipped(err);
                }
            }
        }

        let Some(memo) = self.rotated.as_ref() else {
            return FrameOutcome::Cleared;
        };
        self.output = Some(project(&memo.ring, self.target));
        self.epoch += 1;
        tracing::debug!(
            epoch = self.epoch,
            angle_deg = self.angle_deg,
            target = %self.target,
            reused_rotation = reuse,
            "recompute"
        );
        FrameOutcome::Updated { epoch: self.epoch }
    }

    #[inline]
    pub fn source(&self) -> Option<&Ring> {
        self.source.as_ref()
    }

    #[inline]
    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    #[inline]
    pub fn target(&self) -> Point {
        self.target
    }

    /// Rotated source shape (overlay for the drawing view).
    #[inline]
    pub fn rotated(&self) -> Option<&Ring> {
        self.rotated.as_ref().map(|m| &m.ring)
    }

    /// Mirrored shape for the current epoch (overlay for the target view).
    #[inline]
    pub fn output(&self) -> Option<&Ring> {
        self.output.as_ref()
    }

    /// Number of completed recomputes.
    #[inline]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}
