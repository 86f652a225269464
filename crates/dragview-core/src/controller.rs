#![forbid(unsafe_code)]

//! Host binding for one draggable surface.
//!
//! [`GestureController`] owns a [`GestureState`] together with its
//! collaborators and performs the [`Effect`]s the state machine emits:
//! moving the [`Surface`], marking the transition direction, and asking the
//! [`DirectionRegistry`] to navigate. Commits are reported to a
//! [`TransitionSink`], by default a [`TransitionMarker`] owned by the
//! controller; [`with_marker`](GestureController::with_marker) swaps in a
//! shared one.
//!
//! # Usage
//!
//! ```
//! use dragview_core::{
//!     DirectionRegistry, DragConfig, GestureController, NavTarget, PointerSample, Side, Size,
//!     Surface, Vec2,
//! };
//! use web_time::{Duration, Instant};
//!
//! struct Panel;
//!
//! impl Surface for Panel {
//!     fn size(&self) -> Size {
//!         Size::new(300.0, 600.0)
//!     }
//!     fn translate(&mut self, _offset: Vec2, _duration: Duration) {}
//! }
//!
//! let mut registry = DirectionRegistry::new(|target: &NavTarget| {
//!     assert_eq!(target.name, "next");
//! });
//! registry.set(Side::Right, Some(NavTarget::new("next")));
//!
//! let mut drag = GestureController::new(Panel, registry, DragConfig::default());
//! let t = Instant::now();
//! drag.start(PointerSample::new(250.0, 10.0, t));
//! for i in 1..=10u32 {
//!     let x = 250.0 - 20.0 * f64::from(i);
//!     let ts = t + Duration::from_millis(u64::from(i) * 16);
//!     drag.move_to(PointerSample::new(x, 10.0, ts));
//! }
//! assert!(drag.end().is_committed());
//! ```
//!
//! Hosts must call [`tick`](GestureController::tick) from their event loop
//! (or at [`hold_deadline`](GestureController::hold_deadline)) for hold
//! notifications to fire.

use web_time::{Duration, Instant};

use crate::config::DragConfig;
use crate::direction::Side;
use crate::event::{Disposition, PointerSample};
use crate::geometry::{Size, Vec2};
use crate::gesture::{Effect, GestureState, HoldEvent, Release};
use crate::marker::{TransitionMarker, TransitionSink};
use crate::registry::{DirectionRegistry, Navigator};

/// The draggable element as seen by the controller.
pub trait Surface {
    /// Current layout size; read once per gesture start.
    fn size(&self) -> Size;

    /// Apply a translation from rest, animated over `duration` (zero = immediately).
    fn translate(&mut self, offset: Vec2, duration: Duration);
}

type HoldListener = Box<dyn FnMut(&HoldEvent)>;

/// Drag gesture controller for one surface.
pub struct GestureController<S, N, M = TransitionMarker> {
    config: DragConfig,
    state: GestureState,
    surface: S,
    registry: DirectionRegistry<N>,
    marker: M,
    hold_listeners: Vec<HoldListener>,
}

impl<S, N, M: std::fmt::Debug> std::fmt::Debug for GestureController<S, N, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureController")
            .field("state", &self.state)
            .field("registry", &self.registry)
            .field("marker", &self.marker)
            .field("hold_listeners", &self.hold_listeners.len())
            .finish_non_exhaustive()
    }
}

impl<S: Surface, N: Navigator> GestureController<S, N> {
    /// Create a controller with its own marker and place the surface at rest.
    pub fn new(mut surface: S, registry: DirectionRegistry<N>, config: DragConfig) -> Self {
        surface.translate(Vec2::ZERO, Duration::ZERO);
        Self {
            config,
            state: GestureState::new(),
            surface,
            registry,
            marker: TransitionMarker::new(),
            hold_listeners: Vec::new(),
        }
    }
}

impl<S: Surface, N: Navigator, M: TransitionSink> GestureController<S, N, M> {
    /// Report commits to `marker` instead (builder pattern).
    #[must_use]
    pub fn with_marker<T: TransitionSink>(self, marker: T) -> GestureController<S, N, T> {
        GestureController {
            config: self.config,
            state: self.state,
            surface: self.surface,
            registry: self.registry,
            marker,
            hold_listeners: self.hold_listeners,
        }
    }

    /// Register a listener for hold notifications.
    pub fn on_hold(&mut self, listener: impl FnMut(&HoldEvent) + 'static) {
        self.hold_listeners.push(Box::new(listener));
    }

    /// Pointer down: measure the surface and begin tracking.
    pub fn start(&mut self, sample: PointerSample) {
        let size = self.surface.size();
        tracing::trace!(?size, x = sample.x, y = sample.y, "drag start");
        self.state.start(sample, size);
    }

    /// Pointer move. A move with no gesture in progress starts one instead.
    pub fn move_to(&mut self, sample: PointerSample) -> Disposition {
        if !self.state.is_active() {
            self.start(sample);
            return Disposition::Ignored;
        }
        let effects = self.state.drag(sample, &self.registry, &self.config);
        self.apply(effects)
    }

    /// Pointer up: commit to a neighbour or snap back.
    pub fn end(&mut self) -> Release {
        let _span = tracing::debug_span!("drag_end").entered();
        let (release, effects) = self.state.release(&self.registry, &self.config);
        self.apply(effects);
        release
    }

    /// Fire the hold notification if it is due, delivering it to every listener.
    pub fn tick(&mut self, now: Instant) -> Option<HoldEvent> {
        let event = self.state.poll_hold(now)?;
        for listener in &mut self.hold_listeners {
            listener(&event);
        }
        Some(event)
    }

    /// Abandon any gesture and put the surface back at rest immediately.
    pub fn reset(&mut self) {
        self.state.reset();
        self.surface.translate(Vec2::ZERO, Duration::ZERO);
    }

    fn apply(&mut self, effects: Vec<Effect>) -> Disposition {
        let mut disposition = Disposition::Ignored;
        for effect in effects {
            match effect {
                Effect::Suppress => disposition = Disposition::Consumed,
                Effect::Translate { offset, duration } => {
                    self.surface.translate(offset, duration);
                }
                Effect::MarkTransition(direction) => {
                    self.marker.mark(direction);
                }
                Effect::Navigate(side) => {
                    self.registry.navigate(side);
                }
            }
        }
        disposition
    }
}

impl<S, N, M> GestureController<S, N, M> {
    /// Side of the underlying view revealed by the current drag.
    #[must_use]
    pub fn exposed_side(&self) -> Option<Side> {
        self.state.exposed_side()
    }

    /// When the pending hold notification is due.
    #[must_use]
    pub fn hold_deadline(&self) -> Option<Instant> {
        self.state.hold_deadline()
    }

    /// Gesture state.
    #[must_use]
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Replace the configuration; takes effect on the next event.
    pub fn set_config(&mut self, config: DragConfig) {
        self.config = config;
    }

    /// Navigation targets.
    #[must_use]
    pub fn registry(&self) -> &DirectionRegistry<N> {
        &self.registry
    }

    /// Navigation targets, for the owning view to configure.
    pub fn registry_mut(&mut self) -> &mut DirectionRegistry<N> {
        &mut self.registry
    }

    /// Receiver of committed transition directions.
    #[must_use]
    pub fn marker(&self) -> &M {
        &self.marker
    }

    /// The controlled surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }
}
