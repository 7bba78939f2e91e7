use std::time::Duration;

use super::*;
use crate::consts::COPY_FEEDBACK_RESET;

#[test]
fn starts_not_copied() {
    assert!(!CopyFeedback::new().is_copied());
}

#[test]
fn confirm_sets_flag_immediately() {
    let mut fb = CopyFeedback::new();
    fb.confirm();
    assert!(fb.is_copied());
}

#[test]
fn revert_with_latest_ticket_clears() {
    let mut fb = CopyFeedback::new();
    let ticket = fb.confirm();
    assert!(fb.revert(ticket));
    assert!(!fb.is_copied());
}

#[test]
fn stale_ticket_does_not_clear_newer_flag() {
    let mut fb = CopyFeedback::new();
    let first = fb.confirm();
    let second = fb.confirm();
    assert!(!fb.revert(first));
    assert!(fb.is_copied());
    assert!(fb.revert(second));
    assert!(!fb.is_copied());
}

#[test]
fn revert_twice_is_a_noop() {
    let mut fb = CopyFeedback::new();
    let ticket = fb.confirm();
    assert!(fb.revert(ticket));
    assert!(!fb.revert(ticket));
    assert!(!fb.is_copied());
}

#[test]
fn tickets_are_distinct() {
    let mut fb = CopyFeedback::new();
    assert_ne!(fb.confirm(), fb.confirm());
}

#[test]
fn reset_delay_is_one_and_a_half_seconds() {
    assert_eq!(COPY_FEEDBACK_RESET, Duration::from_millis(1500));
}
