//! Reduced-motion preference gate.
//!
//! The browser reports the preference through a media query. The value is
//! read once when an effect is set up; later changes to the system setting do
//! not reach effects that are already mounted.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// Media query that matches when the user asked for less motion.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// The user's motion preference as seen at effect setup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MotionPreference {
    /// No preference expressed; pointer effects run.
    #[default]
    NoPreference,
    /// Reduced motion requested; pointer effects stay inert.
    Reduce,
}

impl MotionPreference {
    /// Build from the `matches` flag of [`REDUCED_MOTION_QUERY`].
    #[must_use]
    pub fn from_query_matches(matches: bool) -> Self {
        if matches { Self::Reduce } else { Self::NoPreference }
    }

    #[must_use]
    pub fn allows_pointer_effects(self) -> bool {
        self == Self::NoPreference
    }
}
