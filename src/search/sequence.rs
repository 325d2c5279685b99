//! Request sequencing for latest-wins response handling.
//!
//! Every dispatched request takes a [`Ticket`] from a [`RequestSequencer`]. When
//! its response arrives, the response is applied only if no newer ticket has been
//! issued in the meantime. Issuing and the check-then-apply step share one lock,
//! so a newer request cannot slip in between the check and the state update.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Sequence number of one dispatched request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    #[must_use]
    pub const fn number(self) -> u64 {
        self.0
    }
}

/// Monotonic ticket issuer shared between a coordinator and its request tasks.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: Arc<Mutex<u64>>,
}

impl RequestSequencer {
    fn latest_guard(&self) -> MutexGuard<'_, u64> {
        self.latest.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Issues the next ticket, superseding every earlier one.
    pub fn issue(&self) -> Ticket {
        let mut latest = self.latest_guard();
        *latest += 1;
        Ticket(*latest)
    }

    /// Issues the next ticket and runs `start` before any later ticket can be
    /// issued or checked.
    ///
    /// Used to mark a request as started (for example, raising a loading flag)
    /// so that no newer request can finish and clear the mark first.
    pub fn issue_with(&self, start: impl FnOnce()) -> Ticket {
        let mut latest = self.latest_guard();
        *latest += 1;
        start();
        Ticket(*latest)
    }

    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        *self.latest_guard() == ticket.0
    }

    /// Runs `apply` if `ticket` is still the most recent one issued.
    ///
    /// Returns `None` without running `apply` for a stale ticket. No ticket can be
    /// issued while `apply` runs.
    pub fn if_current<R>(&self, ticket: Ticket, apply: impl FnOnce() -> R) -> Option<R> {
        let latest = self.latest_guard();
        if *latest != ticket.0 {
            return None;
        }
        let result = apply();
        drop(latest);
        Some(result)
    }
}
