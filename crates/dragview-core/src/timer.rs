#![forbid(unsafe_code)]

//! Single-slot cancellable hold timer.
//!
//! [`HoldTimer`] never spawns anything: it records a deadline and the host's
//! event loop polls it with the current time, the same way a long press is
//! checked on tick. Starting a timer always cancels the pending one first, so
//! at most one handle is ever outstanding.
//!
//! # Invariants
//!
//! 1. At most one timer is pending.
//! 2. A handle fires at most once; after firing or cancellation it is stale.
//! 3. `cancel()` on an idle timer is a no-op.
//! 4. A delay too large to represent as an `Instant` never fires.

use web_time::{Duration, Instant};

/// Identifies one scheduled hold notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Raw sequence number; strictly increasing per timer.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    handle: TimerHandle,
    /// `None` when `now + delay` overflows the clock.
    deadline: Option<Instant>,
}

/// Cancellable delayed notification with at most one pending instance.
#[derive(Debug, Clone, Default)]
pub struct HoldTimer {
    next_id: u64,
    pending: Option<Pending>,
}

impl HoldTimer {
    /// Create an idle timer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a notification `delay` after `now`, cancelling any pending one.
    pub fn start(&mut self, now: Instant, delay: Duration) -> TimerHandle {
        self.cancel();
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.pending = Some(Pending {
            handle,
            deadline: now.checked_add(delay),
        });
        handle
    }

    /// Cancel the pending notification, returning its handle if there was one.
    pub fn cancel(&mut self) -> Option<TimerHandle> {
        self.pending.take().map(|p| p.handle)
    }

    /// Fire the pending notification if its deadline has been reached.
    pub fn poll(&mut self, now: Instant) -> Option<TimerHandle> {
        match self.pending {
            Some(Pending {
                handle,
                deadline: Some(deadline),
            }) if now >= deadline => {
                self.pending = None;
                Some(handle)
            }
            _ => None,
        }
    }

    /// Handle of the pending notification, if any.
    #[inline]
    #[must_use]
    pub fn pending(&self) -> Option<TimerHandle> {
        self.pending.map(|p| p.handle)
    }

    /// Deadline of the pending notification; `None` if idle or never due.
    #[inline]
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.and_then(|p| p.deadline)
    }
}
