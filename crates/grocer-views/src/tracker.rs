//! Per-view request sequencing and loading state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
struct Counters {
    issued: AtomicU64,
    settled: AtomicU64,
}

/// Hands out monotonically increasing tickets for a view's requests.
///
/// A view is loading while its latest ticket has not settled. Older tickets
/// settling never clear the flag, and a ticket settles exactly once, when its
/// [`InFlight`] guard is dropped.
#[derive(Debug, Default, Clone)]
pub struct RequestTracker {
    counters: Arc<Counters>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket. Loading is asserted before this returns.
    pub fn issue(&self) -> InFlight {
        let ticket = self.counters.issued.fetch_add(1, Ordering::SeqCst) + 1;
        InFlight {
            ticket,
            counters: Arc::clone(&self.counters),
        }
    }

    /// The most recently issued ticket (0 before any request).
    pub fn latest(&self) -> u64 {
        self.counters.issued.load(Ordering::SeqCst)
    }

    /// Whether `ticket` is the most recently issued one.
    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest()
    }

    pub fn is_loading(&self) -> bool {
        self.counters.settled.load(Ordering::SeqCst) < self.latest()
    }
}

/// Guard for one outstanding request.
#[derive(Debug)]
pub struct InFlight {
    ticket: u64,
    counters: Arc<Counters>,
}

impl InFlight {
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    /// Whether no newer request has been issued since this one.
    pub fn is_current(&self) -> bool {
        self.ticket == self.counters.issued.load(Ordering::SeqCst)
    }

    /// Whether this guard was issued by `tracker` (or one of its clones).
    pub fn issued_by(&self, tracker: &RequestTracker) -> bool {
        Arc::ptr_eq(&self.counters, &tracker.counters)
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.counters.settled.fetch_max(self.ticket, Ordering::SeqCst);
    }
}
