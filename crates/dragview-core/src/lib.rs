#![forbid(unsafe_code)]

//! Drag gesture recognition for paged views.
//!
//! # Role
//! `dragview-core` turns a single-finger drag on a surface into either a
//! navigation to a neighbouring view (up/down/left/right) or a snap back to
//! rest. It is the input layer only: routing, rendering and animation are
//! delegated to host collaborators.
//!
//! # Primary responsibilities
//! - **GestureState**: axis lock, rubber-band tension, velocity, hold timing
//!   and the commit decision, as a pure state machine emitting [`Effect`]s.
//! - **GestureController**: binds the state machine to a [`Surface`], a
//!   [`DirectionRegistry`] and a [`TransitionMarker`], and performs effects.
//! - **DirectionRegistry**: which sides have a target, and how to reach them.
//! - **TransitionMarker**: direction of the last committed transition, for
//!   styling; any [`TransitionSink`] can stand in, including one shared
//!   between surfaces.
//!
//! # How it fits in a host
//! Pointer down/move/up map to [`GestureController::start`],
//! [`GestureController::move_to`] and [`GestureController::end`]. A
//! [`Disposition::Consumed`] return means the host must stop the event from
//! propagating. The host also calls [`GestureController::tick`] so the hold
//! notification can fire while the finger stays down.

pub mod config;
pub mod controller;
pub mod direction;
pub mod event;
pub mod geometry;
pub mod gesture;
pub mod marker;
pub mod registry;
pub mod timer;

pub use config::{ConfigError, DragConfig};
pub use controller::{GestureController, Surface};
pub use direction::{Axis, ParseNameError, Side, TransitionDirection};
pub use event::{Disposition, PointerSample};
pub use geometry::{Size, Vec2};
pub use gesture::{Effect, GestureState, HoldEvent, Release};
pub use marker::{TransitionMarker, TransitionSink};
pub use registry::{Destinations, DirectionRegistry, NavTarget, Navigator};
pub use timer::{HoldTimer, TimerHandle};
