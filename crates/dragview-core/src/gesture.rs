#![forbid(unsafe_code)]

//! Drag gesture state machine.
//!
//! [`GestureState`] turns pointer samples into [`Effect`]s. It owns no
//! collaborators: availability of neighbouring views is passed in through
//! [`Destinations`], and the caller performs the returned effects in order.
//!
//! # State Machine
//!
//! ```text
//!            start              drag (first)            drag ...
//!   Idle ────────────▶ Tracking ───────────▶ Locked(axis) ──────┐
//!    ▲                                          │ ▲             │
//!    │               release                    │ └─────────────┘
//!    └──────────────────────────────────────────┘
//! ```
//!
//! # Invariants
//!
//! 1. Once locked, the axis never changes until the next `start`.
//! 2. The offset on the non-locked axis is never changed by `drag`.
//! 3. A hold timer is pending only while a gesture is active and the offset on
//!    the locked axis is non-zero.
//! 4. `release` emits `MarkTransition` before `Navigate`, and at most one of
//!    each.
//!
//! # Failure Modes
//!
//! - Non-increasing timestamps: velocity keeps its previous value for that step.
//! - Zero surface extent: the moved ratio on that axis is 0, so that axis
//!   never commits.
//! - `drag` without a prior `start`: no effects, state untouched.

use web_time::{Duration, Instant};

use crate::config::DragConfig;
use crate::direction::{Axis, Side, TransitionDirection};
use crate::event::PointerSample;
use crate::geometry::{Size, Vec2};
use crate::registry::Destinations;
use crate::timer::{HoldTimer, TimerHandle};

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// Side effect requested by the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Stop the current input event from reaching other handlers.
    Suppress,
    /// Move the surface to `offset`, animated over `duration` (zero = immediately).
    Translate { offset: Vec2, duration: Duration },
    /// Record the transition direction for styling.
    MarkTransition(TransitionDirection),
    /// Navigate to the target registered for this side.
    Navigate(Side),
}

/// Outcome of releasing a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// The surface leaves and navigation towards `side` is triggered.
    Committed {
        side: Side,
        direction: TransitionDirection,
    },
    /// The surface snaps back to rest.
    Cancelled,
}

impl Release {
    /// Whether navigation was triggered.
    #[must_use]
    pub const fn is_committed(&self) -> bool {
        matches!(self, Release::Committed { .. })
    }
}

/// Notification that a push was held past the hold delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldEvent {
    /// The timer that fired.
    pub handle: TimerHandle,
    /// Side revealed by the drag when the timer fired.
    pub side: Option<Side>,
}

impl HoldEvent {
    /// Broadcast name, `drag.hold.<side>` (`drag.hold.none` without a side).
    #[must_use]
    pub fn topic(&self) -> String {
        let side = self.side.map_or("none", Side::as_str);
        format!("drag.hold.{side}")
    }
}

// ---------------------------------------------------------------------------
// GestureState
// ---------------------------------------------------------------------------

/// Per-surface drag state, reused across gestures.
#[derive(Debug, Clone, Default)]
pub struct GestureState {
    offset: Vec2,
    delta: Vec2,
    velocity: Vec2,
    axis: Option<Axis>,
    last_sample: Option<PointerSample>,
    surface: Size,
    hold: HoldTimer,
}

impl GestureState {
    /// Create a state at rest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a gesture at `sample` on a surface measuring `surface`.
    ///
    /// The offset is kept: a surface that committed stays where it left.
    pub fn start(&mut self, sample: PointerSample, surface: Size) {
        self.hold.cancel();
        self.surface = surface;
        self.last_sample = Some(sample);
        self.delta = Vec2::ZERO;
        self.velocity = Vec2::ZERO;
        self.axis = None;
    }

    /// Feed a move sample, returning the effects to perform.
    pub fn drag<D>(
        &mut self,
        sample: PointerSample,
        destinations: &D,
        config: &DragConfig,
    ) -> Vec<Effect>
    where
        D: Destinations + ?Sized,
    {
        let Some(last) = self.last_sample else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(2);

        let step = sample.position() - last.position();
        match sample.elapsed_since(&last) {
            Some(elapsed) => {
                let ms = elapsed.as_secs_f64() * 1000.0;
                self.velocity = Vec2::new(step.x / ms, step.y / ms);
            }
            None => {
                tracing::warn!(?step, "non-increasing pointer timestamp; velocity unchanged");
            }
        }
        self.delta += step;

        let axis = match self.axis {
            Some(axis) => axis,
            None => {
                // Ties go to vertical.
                let axis = if self.delta.x.abs() > self.delta.y.abs() {
                    Axis::Horizontal
                } else {
                    Axis::Vertical
                };
                tracing::debug!(?axis, delta = ?self.delta, "drag axis locked");
                self.axis = Some(axis);
                axis
            }
        };
        out.push(Effect::Suppress);

        let applied = Vec2::new(
            step.x * self.tension(Axis::Horizontal, step, destinations, config),
            step.y * self.tension(Axis::Vertical, step, destinations, config),
        );
        let applied_step = applied.along(axis);
        let offset = self.offset.along_mut(axis);
        *offset += applied_step;
        let offset = *offset;

        if offset != 0.0 && applied_step != 0.0 && offset.signum() == applied_step.signum() {
            let handle = self.hold.start(sample.timestamp, config.hold_delay);
            tracing::trace!(handle = handle.get(), "hold timer armed");
        } else if offset == 0.0 {
            self.hold.cancel();
        }

        tracing::trace!(
            ?axis,
            raw = ?step,
            applied = applied_step,
            offset = ?self.offset,
            "drag step"
        );
        out.push(Effect::Translate {
            offset: self.offset,
            duration: Duration::ZERO,
        });

        self.last_sample = Some(sample);
        out
    }

    /// End the gesture and decide between commit and snap-back.
    pub fn release<D>(&mut self, destinations: &D, config: &DragConfig) -> (Release, Vec<Effect>)
    where
        D: Destinations + ?Sized,
    {
        self.hold.cancel();
        self.last_sample = None;

        let ratio = self.offset.ratio_of(self.surface);
        let min = config.minimum_drag_distance;

        if self.offset.x.abs() > min || self.offset.y.abs() > min {
            // Vertical is always checked first.
            if ratio.y.abs() > config.change_drag_distance
                || self.velocity.y.abs() > config.change_velocity
            {
                if ratio.y < 0.0 && destinations.has_target(Side::Down) {
                    return self.commit(Side::Down, config);
                } else if ratio.y > 0.0 && destinations.has_target(Side::Up) {
                    return self.commit(Side::Up, config);
                }
            }

            if ratio.x.abs() > config.change_drag_distance
                || self.velocity.x.abs() > config.change_velocity
            {
                if ratio.x < 0.0 && destinations.has_target(Side::Right) {
                    return self.commit(Side::Right, config);
                } else if ratio.x > 0.0 && destinations.has_target(Side::Left) {
                    return self.commit(Side::Left, config);
                }
            }
        }

        tracing::debug!(offset = ?self.offset, velocity = ?self.velocity, "drag cancelled");
        self.velocity = Vec2::ZERO;
        self.offset = Vec2::ZERO;
        (
            Release::Cancelled,
            vec![Effect::Translate {
                offset: Vec2::ZERO,
                duration: config.return_animation,
            }],
        )
    }

    /// Fire the hold timer if its deadline has passed.
    pub fn poll_hold(&mut self, now: Instant) -> Option<HoldEvent> {
        let handle = self.hold.poll(now)?;
        let side = self.exposed_side();
        tracing::trace!(handle = handle.get(), ?side, "hold timer fired");
        Some(HoldEvent { handle, side })
    }

    /// Side of the underlying view revealed by the current drag.
    #[must_use]
    pub fn exposed_side(&self) -> Option<Side> {
        self.axis.and_then(|axis| Side::exposed_by(axis, self.delta.along(axis)))
    }

    /// Abandon any gesture and return to rest without emitting effects.
    pub fn reset(&mut self) {
        self.hold.cancel();
        self.offset = Vec2::ZERO;
        self.delta = Vec2::ZERO;
        self.velocity = Vec2::ZERO;
        self.axis = None;
        self.last_sample = None;
    }

    fn tension<D>(&self, axis: Axis, step: Vec2, destinations: &D, config: &DragConfig) -> f64
    where
        D: Destinations + ?Sized,
    {
        let step = step.along(axis);
        let offset = self.offset.along(axis);
        let pushing_further = (step > 0.0 && offset > 0.0) || (step < 0.0 && offset < 0.0);
        match Side::exposed_by(axis, step) {
            Some(side) if pushing_further && !destinations.has_target(side) => config.tension,
            _ => 1.0,
        }
    }

    fn commit(&mut self, side: Side, config: &DragConfig) -> (Release, Vec<Effect>) {
        let direction = side.transition();
        let axis = side.axis();
        let extent = self.surface.along(axis);
        *self.offset.along_mut(axis) = match side {
            Side::Up | Side::Left => extent,
            Side::Down | Side::Right => -extent,
        };
        tracing::debug!(%side, %direction, offset = ?self.offset, "drag committed");
        (
            Release::Committed { side, direction },
            vec![
                Effect::MarkTransition(direction),
                Effect::Navigate(side),
                Effect::Translate {
                    offset: self.offset,
                    duration: config.leave_animation,
                },
            ],
        )
    }

    // -- Accessors ----------------------------------------------------------

    /// Current surface translation from rest.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Cumulative pointer movement since the gesture started.
    #[inline]
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        self.delta
    }

    /// Velocity (px/ms) between the two most recent samples.
    #[inline]
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Locked axis, if any.
    #[inline]
    #[must_use]
    pub fn axis(&self) -> Option<Axis> {
        self.axis
    }

    /// Surface dimensions measured at gesture start.
    #[inline]
    #[must_use]
    pub fn surface(&self) -> Size {
        self.surface
    }

    /// Last observed sample while a gesture is active.
    #[inline]
    #[must_use]
    pub fn last_sample(&self) -> Option<PointerSample> {
        self.last_sample
    }

    /// Whether a gesture is in progress.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.last_sample.is_some()
    }

    /// Pending hold timer, if any.
    #[inline]
    #[must_use]
    pub fn pending_hold(&self) -> Option<TimerHandle> {
        self.hold.pending()
    }

    /// When the pending hold timer is due, for scheduling a wakeup.
    ///
    /// `None` also covers a pending timer whose delay overflows the clock.
    #[inline]
    #[must_use]
    pub fn hold_deadline(&self) -> Option<Instant> {
        self.hold.deadline()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
