#![forbid(unsafe_code)]

//! Tunable thresholds for drag recognition and commit decisions.
//!
//! [`DragConfig::default`] reproduces the stock behaviour. With the
//! `config-file` feature the same values can be loaded from TOML or JSON;
//! every field is optional and falls back to its default.
//!
//! ```toml
//! # dragview.toml
//! change_velocity = 0.8
//! minimum_drag_distance = 60.0
//! leave_animation_ms = 300
//! ```
//!
//! ```rust,ignore
//! let config = DragConfig::from_toml_file("dragview.toml")?.validated()?;
//! ```

#[cfg(feature = "config-file")]
use std::path::Path;

#[cfg(feature = "config-file")]
use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_time::Duration;

/// Thresholds and timings for a [`GestureController`](crate::GestureController).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config-file", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config-file", serde(default))]
pub struct DragConfig {
    /// Release velocity (px/ms) that commits regardless of distance (default: 0.8).
    pub change_velocity: f64,
    /// Fraction of the surface extent that commits on release (default: 0.3).
    pub change_drag_distance: f64,
    /// Displacement (px) that must be exceeded before any commit (default: 60).
    pub minimum_drag_distance: f64,
    /// Step multiplier when pushing further towards a side with no target (default: 0.3).
    pub tension: f64,
    /// Duration of the animation moving a committed surface off screen (default: 400ms).
    #[cfg_attr(
        feature = "config-file",
        serde(rename = "leave_animation_ms", with = "duration_ms")
    )]
    pub leave_animation: Duration,
    /// Duration of the snap-back animation after a cancelled drag (default: 400ms).
    #[cfg_attr(
        feature = "config-file",
        serde(rename = "return_animation_ms", with = "duration_ms")
    )]
    pub return_animation: Duration,
    /// How long a push must be held before the hold notification fires (default: 500ms).
    #[cfg_attr(
        feature = "config-file",
        serde(rename = "hold_delay_ms", with = "duration_ms")
    )]
    pub hold_delay: Duration,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            change_velocity: 0.8,
            change_drag_distance: 0.3,
            minimum_drag_distance: 60.0,
            tension: 0.3,
            leave_animation: Duration::from_millis(400),
            return_animation: Duration::from_millis(400),
            hold_delay: Duration::from_millis(500),
        }
    }
}

impl DragConfig {
    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns every violation found; an empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !(self.tension > 0.0 && self.tension <= 1.0) {
            errors.push(format!("tension must be in (0, 1], got {}", self.tension));
        }

        if !(self.change_drag_distance > 0.0 && self.change_drag_distance <= 1.0) {
            errors.push(format!(
                "change_drag_distance must be in (0, 1], got {}",
                self.change_drag_distance
            ));
        }

        if !(self.change_velocity.is_finite() && self.change_velocity >= 0.0) {
            errors.push(format!(
                "change_velocity must be finite and >= 0, got {}",
                self.change_velocity
            ));
        }

        if !(self.minimum_drag_distance.is_finite() && self.minimum_drag_distance >= 0.0) {
            errors.push(format!(
                "minimum_drag_distance must be finite and >= 0, got {}",
                self.minimum_drag_distance
            ));
        }

        if self.hold_delay.is_zero() {
            errors.push("hold_delay must be > 0".into());
        }

        errors
    }

    /// Consume the config, returning it only if [`validate`](Self::validate) is clean.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from a TOML string.
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config-file")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config-file")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config-file")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }
}

/// Errors that can occur when loading a drag configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[cfg(feature = "config-file")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "config-file")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[cfg(feature = "config-file")]
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

// ---------------------------------------------------------------------------
// Serde helpers for Duration (integer milliseconds)
// ---------------------------------------------------------------------------

#[cfg(feature = "config-file")]
mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use web_time::Duration;

    pub(super) fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let ms = u64::try_from(value.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(ms)
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
