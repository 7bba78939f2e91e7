#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_defaults_off_browser() {
    assert_eq!(read_preference(), MotionPreference::NoPreference);
}

#[test]
fn default_preference_allows_effects() {
    assert!(read_preference().allows_pointer_effects());
}
