use super::*;

#[test]
fn new_slot_is_empty() {
    let mut slot = FrameSlot::<u32>::new();
    assert!(!slot.is_pending());
    assert_eq!(slot.take(), None);
}

#[test]
fn schedule_then_take_yields_value_once() {
    let mut slot = FrameSlot::new();
    assert!(!slot.schedule(7));
    assert!(slot.is_pending());
    assert_eq!(slot.take(), Some(7));
    assert_eq!(slot.take(), None);
}

#[test]
fn schedule_replaces_stale_value() {
    let mut slot = FrameSlot::new();
    slot.schedule(1);
    assert!(slot.schedule(2));
    assert_eq!(slot.take(), Some(2));
}

#[test]
fn burst_between_frames_keeps_only_latest() {
    let mut slot = FrameSlot::new();
    let discarded = (0..100).filter(|&i| slot.schedule(i)).count();
    assert_eq!(discarded, 99);
    assert_eq!(slot.take(), Some(99));
    assert_eq!(slot.take(), None);
}

#[test]
fn cancel_drops_pending_value() {
    let mut slot = FrameSlot::new();
    slot.schedule("stale");
    assert_eq!(slot.cancel(), Some("stale"));
    assert!(!slot.is_pending());
    assert_eq!(slot.take(), None);
}
