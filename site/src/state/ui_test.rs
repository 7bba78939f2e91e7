use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn ui_state_default_menu_closed() {
    assert!(!UiState::default().menu_open);
}

#[test]
fn ui_state_default_not_copied() {
    assert!(!UiState::default().email_copied());
}

// =============================================================
// Menu
// =============================================================

#[test]
fn toggle_menu_flips() {
    let mut state = UiState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.toggle_menu();
    assert!(!state.menu_open);
}

#[test]
fn close_menu_always_closes() {
    let mut state = UiState::default();
    state.close_menu();
    assert!(!state.menu_open);
    state.toggle_menu();
    state.close_menu();
    assert!(!state.menu_open);
}

// =============================================================
// Copy feedback
// =============================================================

#[test]
fn copy_flag_is_independent_of_menu() {
    let mut state = UiState::default();
    state.toggle_menu();
    let ticket = state.confirm_copy();
    assert!(state.menu_open);
    assert!(state.email_copied());
    state.close_menu();
    assert!(state.email_copied());
    assert!(state.revert_copy(ticket));
    assert!(!state.menu_open);
    assert!(!state.email_copied());
}

#[test]
fn earlier_revert_does_not_cut_later_copy_short() {
    let mut state = UiState::default();
    let first = state.confirm_copy();
    let second = state.confirm_copy();
    assert!(!state.revert_copy(first));
    assert!(state.email_copied());
    assert!(state.revert_copy(second));
}
