//! "Copied" confirmation flag.
//!
//! The contact section shows "Copied!" for [`COPY_FEEDBACK_RESET`] after a
//! successful clipboard write. Each confirmation hands out a ticket; the
//! delayed revert only takes effect if its ticket is still the latest, so a
//! revert scheduled by an earlier click can never cut a later one short.
//!
//! [`COPY_FEEDBACK_RESET`]: crate::consts::COPY_FEEDBACK_RESET

#[cfg(test)]
#[path = "copy_test.rs"]
mod copy_test;

/// Identifies one confirmation; pass it back to [`CopyFeedback::revert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevertTicket(u64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    copied: bool,
    generation: u64,
}

impl CopyFeedback {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// Mark the email as copied and issue a ticket for the pending revert.
    pub fn confirm(&mut self) -> RevertTicket {
        self.copied = true;
        self.generation = self.generation.wrapping_add(1);
        RevertTicket(self.generation)
    }

    /// Clear the flag if `ticket` belongs to the latest confirmation.
    ///
    /// Returns whether the flag changed.
    pub fn revert(&mut self, ticket: RevertTicket) -> bool {
        if !self.copied || ticket.0 != self.generation {
            return false;
        }
        self.copied = false;
        true
    }
}
