use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use strum_macros::Display;

/// Logical state of the view model.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// The list reflects the last applied load, or the initial empty state.
    Idle,
    /// At least one request is outstanding.
    Loading,
}

/// Hands out load tickets and counts outstanding requests.
///
/// Only the holder of the most recently issued ticket may render a load
/// response. Older responses are dropped when they arrive.
#[derive(Debug, Default)]
pub(super) struct RequestTracker {
    issued: AtomicU64,
    in_flight: AtomicUsize,
}

impl RequestTracker {
    pub(super) fn issue_ticket(&self) -> u64 { self.issued.fetch_add(1, Ordering::SeqCst) + 1 }

    pub(super) fn is_latest(&self, ticket: u64) -> bool { self.issued.load(Ordering::SeqCst) == ticket }

    pub(super) fn begin(&self) -> InFlight<'_> {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        InFlight { tracker: self }
    }

    pub(super) fn state(&self) -> ViewState {
        if self.in_flight.load(Ordering::SeqCst) == 0 { ViewState::Idle } else { ViewState::Loading }
    }
}

/// Marks one outstanding request until dropped.
pub(super) struct InFlight<'a> {
    tracker: &'a RequestTracker,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) { self.tracker.in_flight.fetch_sub(1, Ordering::SeqCst); }
}
