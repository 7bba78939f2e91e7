//! Shared numeric constants for the effects crate.

use std::time::Duration;

// ── Tilt ────────────────────────────────────────────────────────

/// Maximum card rotation on either axis, in degrees.
pub const TILT_MAX_ROTATION_DEG: f64 = 10.0;

/// Forward pop-out applied while the pointer hovers a card, in CSS pixels.
pub const TILT_DEPTH_PX: f64 = 24.0;

// ── Parallax ────────────────────────────────────────────────────

/// Translation in CSS pixels for a depth-1.0 layer at the container edge
/// times two (offsets are measured from the centre, so the edge is ±0.5).
pub const PARALLAX_SCALE_PX: f64 = 20.0;

// ── Decorative orbs ─────────────────────────────────────────────

/// Smallest orb diameter in CSS pixels.
pub const ORB_MIN_SIZE_PX: u32 = 140;

/// Random extra diameter added on top of [`ORB_MIN_SIZE_PX`].
pub const ORB_SIZE_SPAN_PX: u32 = 120;

/// Upper bound for the top/left position, in percent of the container.
pub const ORB_MAX_POSITION_PCT: u32 = 80;

/// Animation start delay is drawn from `[0, ORB_MAX_DELAY_S)`.
pub const ORB_MAX_DELAY_S: f64 = 4.0;

/// Orb depth is drawn from `[-ORB_MAX_DEPTH_PX, ORB_MAX_DEPTH_PX]`.
pub const ORB_MAX_DEPTH_PX: i32 = 100;

/// Float period of the first orb; each later orb adds one second.
pub const ORB_BASE_PERIOD_S: u32 = 6;

/// Perspective of the 3D context the orbs live in.
pub const DECOR_PERSPECTIVE_PX: u32 = 1000;

// ── Copy feedback ───────────────────────────────────────────────

/// How long the "copied" confirmation stays visible.
pub const COPY_FEEDBACK_RESET: Duration = Duration::from_millis(1500);
