//! Pure state transitions for the two prediction flows.
//!
//! Components own a flow value, call a transition per UI event or network
//! completion, and re-render from the getters. Nothing here touches the
//! browser, so every transition is testable natively.

pub mod image;
pub mod video;

use derive_more::Display;

/// Identifies one submission. Only the ticket issued last may change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "request #{}", _0)]
pub struct SubmitTicket(u64);

/// Generation counter plus the loading flag it governs.
///
/// Issuing a ticket or invalidating advances the generation, so responses
/// for anything older are ignored instead of overwriting fresher state.
#[derive(Debug, Default)]
pub(crate) struct RequestFence {
    generation: u64,
    loading: bool,
}

impl RequestFence {
    pub(crate) fn issue(&mut self) -> SubmitTicket {
        self.generation += 1;
        self.loading = true;
        SubmitTicket(self.generation)
    }

    /// Abandons whatever request is in flight; it is never cancelled, its
    /// completion is simply dropped.
    pub(crate) fn invalidate(&mut self) {
        self.generation += 1;
        self.loading = false;
    }

    pub(crate) fn is_current(&self, ticket: SubmitTicket) -> bool {
        let current = ticket.0 == self.generation;
        if !current {
            log::debug!("Discarding stale {} (current generation {})", ticket, self.generation);
        }
        current
    }

    pub(crate) fn finish(&mut self, ticket: SubmitTicket) -> bool {
        if self.is_current(ticket) && self.loading {
            self.loading = false;
            true
        } else {
            false
        }
    }

    pub(crate) fn loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_sets_loading_and_finish_clears_it() {
        let mut fence = RequestFence::default();
        let ticket = fence.issue();
        assert!(fence.loading());
        assert!(fence.finish(ticket));
        assert!(!fence.loading());
        assert!(!fence.finish(ticket));
    }

    #[test]
    fn test_older_ticket_cannot_clear_newer_request() {
        let mut fence = RequestFence::default();
        let first = fence.issue();
        let second = fence.issue();
        assert!(!fence.finish(first));
        assert!(fence.loading());
        assert!(fence.finish(second));
    }

    #[test]
    fn test_invalidate_abandons_in_flight_ticket() {
        let mut fence = RequestFence::default();
        let ticket = fence.issue();
        fence.invalidate();
        assert!(!fence.loading());
        assert!(!fence.is_current(ticket));
    }

    #[test]
    fn test_ticket_display() {
        let mut fence = RequestFence::default();
        assert_eq!(fence.issue().to_string(), "request #1");
    }
}
