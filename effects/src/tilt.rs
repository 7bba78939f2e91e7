//! 3D tilt-toward-pointer card effect.
//!
//! While hovered, a card rotates so that the edge nearest the pointer dips
//! away from the viewer, and pops forward by a fixed depth. On leave it is
//! sent back to the neutral transform; the card's CSS transition animates the
//! return.
//!
//! Updates go through a [`FrameSlot`], so a burst of pointer moves between two
//! frames applies only the last position.

#[cfg(test)]
#[path = "tilt_test.rs"]
mod tilt_test;

use crate::consts::{TILT_DEPTH_PX, TILT_MAX_ROTATION_DEG};
use crate::frame::FrameSlot;
use crate::motion::MotionPreference;
use crate::pointer::{Bounds, PointerFraction};

/// Tunables for one tilt instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltConfig {
    /// Rotation at the box edge, in degrees.
    pub max_rotation_deg: f64,
    /// Forward translation while hovered, in CSS pixels.
    pub depth_px: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self { max_rotation_deg: TILT_MAX_ROTATION_DEG, depth_px: TILT_DEPTH_PX }
    }
}

/// A computed card transform.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TiltTransform {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    pub depth_px: f64,
}

impl TiltTransform {
    pub const NEUTRAL: Self = Self { rotate_x_deg: 0.0, rotate_y_deg: 0.0, depth_px: 0.0 };

    /// Transform for a pointer at `fraction` of the card box.
    #[must_use]
    pub fn at(config: TiltConfig, fraction: PointerFraction) -> Self {
        let r = config.max_rotation_deg;
        // Adding 0.0 folds -0.0 into 0.0 so the centre renders as "0.00".
        Self {
            rotate_x_deg: (fraction.py - 0.5) * -2.0 * r + 0.0,
            rotate_y_deg: (fraction.px - 0.5) * 2.0 * r + 0.0,
            depth_px: config.depth_px,
        }
    }

    #[must_use]
    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }

    /// CSS `transform` value.
    #[must_use]
    pub fn to_css(&self) -> String {
        if self.is_neutral() {
            return "rotateX(0deg) rotateY(0deg) translateZ(0px)".to_owned();
        }
        format!(
            "rotateX({:.2}deg) rotateY({:.2}deg) translateZ({}px)",
            self.rotate_x_deg, self.rotate_y_deg, self.depth_px
        )
    }
}

/// Per-card tilt state.
///
/// Construct with [`TiltEffect::inert`] at render time and replace it with
/// [`TiltEffect::new`] once the motion preference has been read on mount.
#[derive(Debug, Clone)]
pub struct TiltEffect {
    config: TiltConfig,
    enabled: bool,
    pending: FrameSlot<TiltTransform>,
    applied: TiltTransform,
}

impl TiltEffect {
    #[must_use]
    pub fn new(config: TiltConfig, motion: MotionPreference) -> Self {
        Self {
            config,
            enabled: motion.allows_pointer_effects(),
            pending: FrameSlot::new(),
            applied: TiltTransform::NEUTRAL,
        }
    }

    /// An effect that ignores all input.
    #[must_use]
    pub fn inert() -> Self {
        Self::new(TiltConfig::default(), MotionPreference::Reduce)
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record a pointer move. Returns `true` when the caller should request
    /// an animation frame (replacing any frame already requested).
    pub fn pointer_move(&mut self, bounds: Bounds, client_x: f64, client_y: f64) -> bool {
        if !self.enabled {
            return false;
        }
        let Some(fraction) = bounds.fraction(client_x, client_y) else {
            return false;
        };
        self.pending.schedule(TiltTransform::at(self.config, fraction));
        true
    }

    /// Record the pointer leaving the card. Returns `true` when the caller
    /// should request an animation frame.
    pub fn pointer_leave(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        self.pending.schedule(TiltTransform::NEUTRAL);
        true
    }

    /// Frame callback: apply and return the pending transform, if any.
    pub fn flush(&mut self) -> Option<TiltTransform> {
        let next = self.pending.take()?;
        self.applied = next;
        Some(next)
    }

    /// Discard any pending update; used when the card unmounts.
    pub fn teardown(&mut self) {
        self.pending.cancel();
    }

    /// The transform most recently applied by [`TiltEffect::flush`].
    #[must_use]
    pub fn applied(&self) -> TiltTransform {
        self.applied
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_pending()
    }
}

impl Default for TiltEffect {
    fn default() -> Self {
        Self::inert()
    }
}
