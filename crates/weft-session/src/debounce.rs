//! Input coalescing for interactive callers.
//!
//! Alignment is `O(m * n)`, so a caller re-comparing on every keystroke
//! must coalesce rapid changes. Two small value types cover the contract
//! from the engine's operational model:
//!
//! - [`Debouncer`]: a submitted value is *settled* only after no newer
//!   submission arrives within a fixed quiescent window. Intermediate
//!   values are discarded, never queued.
//! - [`CompareSequencer`]: last-request-wins supersession for comparisons
//!   run off the interactive path. A finished result is accepted only if
//!   its ticket is still the newest one issued.
//!
//! Neither type owns a timer or a thread; callers drive them with their own
//! clock and scheduling.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Coalesces rapid submissions into one settled value.
#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    /// Create a debouncer with the given quiescent window.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// The quiescent window.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Submit a value at time `at`, replacing any pending one.
    pub fn submit(&mut self, value: T, at: Instant) {
        self.pending = Some((value, at));
    }

    /// Returns `true` if a pending value exists and its window has elapsed.
    pub fn is_settled(&self, now: Instant) -> bool {
        match &self.pending {
            Some((_, at)) => now.duration_since(*at) >= self.window,
            None => false,
        }
    }

    /// Take the pending value if it has settled by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.is_settled(now) {
            self.pending.take().map(|(value, _)| value)
        } else {
            None
        }
    }
}

/// Ticket identifying one comparison request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CompareTicket(u64);

/// Issues tickets and decides which in-flight result still matters.
///
/// Shared by reference between the issuing side and workers; issuing a new
/// ticket supersedes all earlier ones.
#[derive(Debug, Default)]
pub struct CompareSequencer {
    latest: AtomicU64,
}

impl CompareSequencer {
    /// Create a sequencer with no outstanding tickets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a new comparison request, superseding all
    /// previously issued tickets.
    pub fn begin(&self) -> CompareTicket {
        CompareTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Returns `true` if `ticket` is still the newest issued.
    ///
    /// A stale ticket means the result it labels has been superseded and
    /// should be discarded.
    pub fn is_current(&self, ticket: CompareTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}
