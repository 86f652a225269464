#![forbid(unsafe_code)]

//! Pointer input consumed by the gesture machine.

use web_time::{Duration, Instant};

use crate::geometry::Vec2;

/// One observed pointer/touch position.
///
/// Coordinates must share one space across a gesture and timestamps must come
/// from a monotonic clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    pub timestamp: Instant,
}

impl PointerSample {
    /// Create a new sample.
    #[inline]
    pub const fn new(x: f64, y: f64, timestamp: Instant) -> Self {
        Self { x, y, timestamp }
    }

    /// Position as a vector.
    #[inline]
    pub const fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Time since `earlier`, or `None` if this sample is not strictly later.
    #[inline]
    pub fn elapsed_since(&self, earlier: &PointerSample) -> Option<Duration> {
        self.timestamp
            .checked_duration_since(earlier.timestamp)
            .filter(|elapsed| !elapsed.is_zero())
    }
}

/// What the host should do with the input event it just delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// The gesture owns this event; stop propagation and prevent defaults.
    Consumed,
    /// Let the event continue to other handlers.
    Ignored,
}

impl Disposition {
    /// Whether the host must suppress the event.
    #[inline]
    #[must_use]
    pub const fn is_consumed(self) -> bool {
        matches!(self, Disposition::Consumed)
    }
}
