#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use effects::copy::{CopyFeedback, RevertTicket};

/// Page-wide UI flags, provided as `RwSignal<UiState>` context by the root
/// component. The two flags are independent.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub menu_open: bool,
    pub copy: CopyFeedback,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn email_copied(&self) -> bool {
        self.copy.is_copied()
    }

    /// Record a successful copy; see [`CopyFeedback::confirm`].
    pub fn confirm_copy(&mut self) -> RevertTicket {
        self.copy.confirm()
    }

    /// Returns whether the flag changed.
    pub fn revert_copy(&mut self, ticket: RevertTicket) -> bool {
        self.copy.revert(ticket)
    }
}
