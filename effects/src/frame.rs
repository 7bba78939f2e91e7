//! Single-slot update coalescing.
//!
//! Pointer events can arrive many times per rendered frame. Each effect keeps
//! one [`FrameSlot`]: scheduling a value replaces whatever was still waiting,
//! and the frame callback takes the survivor. The browser side pairs the slot
//! with a cancellable animation-frame request, so at most one update is in
//! flight per effect at any time.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

/// Holds at most one pending update for the next animation frame.
#[derive(Debug, Clone)]
pub struct FrameSlot<T> {
    pending: Option<T>,
}

impl<T> Default for FrameSlot<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> FrameSlot<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `value` for the next frame, discarding any stale pending value.
    ///
    /// Returns `true` when a pending value was discarded.
    pub fn schedule(&mut self, value: T) -> bool {
        self.pending.replace(value).is_some()
    }

    /// Take the pending value. Called once per frame; a second call in the
    /// same frame yields `None`.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Drop the pending value without applying it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
