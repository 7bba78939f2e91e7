use super::*;

#[test]
fn default_allows_effects() {
    assert_eq!(MotionPreference::default(), MotionPreference::NoPreference);
    assert!(MotionPreference::default().allows_pointer_effects());
}

#[test]
fn matching_query_means_reduce() {
    assert_eq!(MotionPreference::from_query_matches(true), MotionPreference::Reduce);
    assert!(!MotionPreference::Reduce.allows_pointer_effects());
}

#[test]
fn non_matching_query_means_no_preference() {
    assert_eq!(MotionPreference::from_query_matches(false), MotionPreference::NoPreference);
}

#[test]
fn query_targets_reduce_value() {
    assert_eq!(REDUCED_MOTION_QUERY, "(prefers-reduced-motion: reduce)");
}
