#![forbid(unsafe_code)]

//! Sides, axes and transition directions.
//!
//! A [`Side`] names a neighbour of the current view. Dragging the surface
//! towards positive `x` reveals what lies on its [`Side::Left`]; dragging
//! towards positive `y` reveals [`Side::Up`]. The exposed side is therefore
//! always the opposite of the direction the surface itself travels.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Axis a gesture is locked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// One of the four neighbours of a paged view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Up,
    Down,
    Left,
    Right,
}

impl Side {
    /// All sides in registry order.
    pub const ALL: [Side; 4] = [Side::Up, Side::Down, Side::Left, Side::Right];

    /// Side revealed by a displacement of the given sign along `axis`.
    ///
    /// Returns `None` for a zero (or NaN) displacement.
    #[must_use]
    pub fn exposed_by(axis: Axis, displacement: f64) -> Option<Side> {
        match axis {
            Axis::Horizontal if displacement > 0.0 => Some(Side::Left),
            Axis::Horizontal if displacement < 0.0 => Some(Side::Right),
            Axis::Vertical if displacement > 0.0 => Some(Side::Up),
            Axis::Vertical if displacement < 0.0 => Some(Side::Down),
            _ => None,
        }
    }

    /// Axis along which this side is reached.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Side::Up | Side::Down => Axis::Vertical,
            Side::Left | Side::Right => Axis::Horizontal,
        }
    }

    /// Transition styling used when navigating towards this side.
    #[must_use]
    pub const fn transition(self) -> TransitionDirection {
        match self {
            Side::Up => TransitionDirection::Up,
            Side::Down => TransitionDirection::Down,
            Side::Left => TransitionDirection::Back,
            Side::Right => TransitionDirection::Forward,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Side::Up => 0,
            Side::Down => 1,
            Side::Left => 2,
            Side::Right => 3,
        }
    }

    /// Lowercase name (`"up"`, `"down"`, `"left"`, `"right"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Side::Up => "up",
            Side::Down => "down",
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction hint consumed by transition styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransitionDirection {
    #[default]
    Forward,
    Back,
    Up,
    Down,
}

impl TransitionDirection {
    /// The fixed set of transition directions.
    pub const ALL: [TransitionDirection; 4] = [
        TransitionDirection::Forward,
        TransitionDirection::Back,
        TransitionDirection::Up,
        TransitionDirection::Down,
    ];

    /// Lowercase name (`"forward"`, `"back"`, `"up"`, `"down"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TransitionDirection::Forward => "forward",
            TransitionDirection::Back => "back",
            TransitionDirection::Up => "up",
            TransitionDirection::Down => "down",
        }
    }
}

impl fmt::Display for TransitionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown side or transition name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} name: {name:?}")]
pub struct ParseNameError {
    kind: &'static str,
    name: String,
}

impl FromStr for Side {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Side::ALL
            .into_iter()
            .find(|side| side.as_str() == s)
            .ok_or_else(|| ParseNameError {
                kind: "side",
                name: s.to_owned(),
            })
    }
}

impl FromStr for TransitionDirection {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransitionDirection::ALL
            .into_iter()
            .find(|dir| dir.as_str() == s)
            .ok_or_else(|| ParseNameError {
                kind: "transition direction",
                name: s.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposed_side_is_opposite_of_travel() {
        assert_eq!(Side::exposed_by(Axis::Horizontal, 12.0), Some(Side::Left));
        assert_eq!(Side::exposed_by(Axis::Horizontal, -0.5), Some(Side::Right));
        assert_eq!(Side::exposed_by(Axis::Vertical, 3.0), Some(Side::Up));
        assert_eq!(Side::exposed_by(Axis::Vertical, -3.0), Some(Side::Down));
        assert_eq!(Side::exposed_by(Axis::Vertical, 0.0), None);
        assert_eq!(Side::exposed_by(Axis::Horizontal, f64::NAN), None);
    }

    #[test]
    fn side_transitions() {
        assert_eq!(Side::Right.transition(), TransitionDirection::Forward);
        assert_eq!(Side::Left.transition(), TransitionDirection::Back);
        assert_eq!(Side::Up.transition(), TransitionDirection::Up);
        assert_eq!(Side::Down.transition(), TransitionDirection::Down);
    }

    #[test]
    fn side_axis() {
        assert_eq!(Side::Left.axis(), Axis::Horizontal);
        assert_eq!(Side::Down.axis(), Axis::Vertical);
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for side in Side::ALL {
            assert_eq!(side.as_str().parse::<Side>(), Ok(side));
        }
        for dir in TransitionDirection::ALL {
            assert_eq!(dir.to_string().parse::<TransitionDirection>(), Ok(dir));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "sideways".parse::<Side>().unwrap_err();
        assert_eq!(err.to_string(), "unknown side name: \"sideways\"");
        assert!("Forward".parse::<TransitionDirection>().is_err());
    }

    #[test]
    fn default_transition_is_forward() {
        assert_eq!(TransitionDirection::default(), TransitionDirection::Forward);
    }
}
