//! Reduced-motion preference lookup.
//!
//! Components read this once when their effect is set up. A later change of
//! the system setting only applies after a reload.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

use effects::motion::MotionPreference;
#[cfg(feature = "hydrate")]
use effects::motion::REDUCED_MOTION_QUERY;

/// Current motion preference; `NoPreference` when it cannot be read.
pub fn read_preference() -> MotionPreference {
    #[cfg(feature = "hydrate")]
    {
        let matches = web_sys::window()
            .and_then(|w| match w.match_media(REDUCED_MOTION_QUERY) {
                Ok(list) => list,
                Err(err) => {
                    log::debug!("matchMedia failed: {err:?}");
                    None
                }
            })
            .is_some_and(|list| list.matches());
        MotionPreference::from_query_matches(matches)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        MotionPreference::NoPreference
    }
}
