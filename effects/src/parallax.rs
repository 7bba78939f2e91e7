//! Depth-weighted parallax layers.
//!
//! Each layer moves against the pointer's offset from the container centre,
//! scaled by its own depth weight: deeper layers travel further. There is no
//! easing and no return on leave; layers hold their last offset.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

use crate::consts::PARALLAX_SCALE_PX;
use crate::motion::MotionPreference;
use crate::pointer::Bounds;

/// Tunables for one parallax container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxConfig {
    /// Translation scale `K` in CSS pixels.
    pub scale_px: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self { scale_px: PARALLAX_SCALE_PX }
    }
}

/// A layer's 2D translation in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayerOffset {
    pub tx_px: f64,
    pub ty_px: f64,
}

impl LayerOffset {
    /// Offset for a layer of weight `depth` with the pointer at `(x, y)` from
    /// the container centre.
    #[must_use]
    pub fn at(config: ParallaxConfig, x: f64, y: f64, depth: f64) -> Self {
        Self {
            tx_px: -x * depth * config.scale_px + 0.0,
            ty_px: -y * depth * config.scale_px + 0.0,
        }
    }

    /// CSS `transform` value.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("translate3d({}px, {}px, 0)", self.tx_px, self.ty_px)
    }
}

/// Parse a `data-depth` style attribute value.
///
/// Missing, unparsable or non-finite weights count as `0.0`, which pins the
/// layer in place. Negative weights clamp to `0.0`.
#[must_use]
pub fn parse_depth(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    match raw.trim().parse::<f64>() {
        Ok(depth) if depth.is_finite() => depth.max(0.0),
        _ => 0.0,
    }
}

/// Parallax state for one container and its layers.
#[derive(Debug, Clone)]
pub struct ParallaxEffect {
    config: ParallaxConfig,
    enabled: bool,
    depths: Vec<f64>,
    offsets: Vec<LayerOffset>,
}

impl ParallaxEffect {
    #[must_use]
    pub fn new(
        config: ParallaxConfig,
        motion: MotionPreference,
        depths: impl IntoIterator<Item = f64>,
    ) -> Self {
        let depths: Vec<f64> = depths.into_iter().collect();
        let offsets = vec![LayerOffset::default(); depths.len()];
        Self { config, enabled: motion.allows_pointer_effects(), depths, offsets }
    }

    /// An effect over `layer_count` layers that ignores all input.
    #[must_use]
    pub fn inert(layer_count: usize) -> Self {
        Self::new(ParallaxConfig::default(), MotionPreference::Reduce, vec![0.0; layer_count])
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current offset of every layer, in layer order.
    #[must_use]
    pub fn offsets(&self) -> &[LayerOffset] {
        &self.offsets
    }

    /// Recompute every layer for a pointer move.
    ///
    /// Returns the new offsets, or `None` when the effect is inert or the
    /// container cannot be measured (offsets are left untouched).
    pub fn pointer_move(&mut self, bounds: Bounds, client_x: f64, client_y: f64) -> Option<&[LayerOffset]> {
        if !self.enabled {
            return None;
        }
        let (x, y) = bounds.fraction(client_x, client_y)?.centered();
        for (offset, depth) in self.offsets.iter_mut().zip(&self.depths) {
            *offset = LayerOffset::at(self.config, x, y, *depth);
        }
        Some(&self.offsets)
    }
}
