#![forbid(unsafe_code)]

//! Most recent committed transition direction.
//!
//! A [`GestureController`](crate::GestureController) reports every commit to
//! a [`TransitionSink`]. Views that share one styling layer share one marker
//! through `Rc<RefCell<TransitionMarker>>`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::direction::TransitionDirection;

/// Receives the direction of each committed transition, before navigation.
pub trait TransitionSink {
    fn mark(&mut self, direction: TransitionDirection);
}

/// Holds the direction a rendering layer should use for transition styling.
///
/// Starts at [`TransitionDirection::Forward`]. Performs no rendering itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransitionMarker {
    direction: TransitionDirection,
}

impl TransitionMarker {
    /// Marker in its initial (`forward`) state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current direction; `None` keeps it unchanged.
    pub fn set_direction(&mut self, direction: Option<TransitionDirection>) {
        if let Some(direction) = direction {
            self.direction = direction;
        }
    }

    /// Current direction.
    #[inline]
    #[must_use]
    pub fn direction(&self) -> TransitionDirection {
        self.direction
    }
}

impl TransitionSink for TransitionMarker {
    fn mark(&mut self, direction: TransitionDirection) {
        self.set_direction(Some(direction));
    }
}

impl<T: TransitionSink + ?Sized> TransitionSink for Rc<RefCell<T>> {
    fn mark(&mut self, direction: TransitionDirection) {
        self.borrow_mut().mark(direction);
    }
}
