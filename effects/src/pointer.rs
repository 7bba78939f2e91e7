//! Element bounds and pointer normalization.
//!
//! Both effects start from the same measurement: where the pointer sits inside
//! the element's bounding box, as a fraction of its width and height.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

/// An element's bounding box in client (viewport) coordinates, CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Normalize a client-space pointer position against these bounds.
    ///
    /// Returns `None` for a collapsed or non-finite box, where no meaningful
    /// fraction exists. Positions outside the box are not clamped.
    #[must_use]
    pub fn fraction(&self, client_x: f64, client_y: f64) -> Option<PointerFraction> {
        if !self.is_measurable() || !client_x.is_finite() || !client_y.is_finite() {
            return None;
        }
        Some(PointerFraction {
            px: (client_x - self.left) / self.width,
            py: (client_y - self.top) / self.height,
        })
    }

    fn is_measurable(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// Pointer position as fractions of the element box; `(0, 0)` is top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerFraction {
    pub px: f64,
    pub py: f64,
}

impl PointerFraction {
    #[cfg(test)]
    pub(crate) fn new(px: f64, py: f64) -> Self {
        Self { px, py }
    }

    /// Offset from the element centre; each axis is in `[-0.5, 0.5]` while
    /// the pointer is inside the box.
    #[must_use]
    pub fn centered(self) -> (f64, f64) {
        (self.px - 0.5, self.py - 0.5)
    }
}
