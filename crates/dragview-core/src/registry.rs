#![forbid(unsafe_code)]

//! Per-side navigation targets.
//!
//! The owning view declares, for each [`Side`], whether a neighbouring view
//! exists and how to reach it. The gesture machine only asks whether a side is
//! available (through [`Destinations`]); the actual navigation is delegated to
//! a host-supplied [`Navigator`] and the controller never sees target names.

use std::collections::BTreeMap;

use crate::direction::Side;

/// A navigation destination: route name plus parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavTarget {
    pub name: String,
    pub params: BTreeMap<String, String>,
}

impl NavTarget {
    /// Target with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: BTreeMap::new(),
        }
    }

    /// Add a parameter (builder pattern).
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

/// External routing collaborator that performs a navigation.
pub trait Navigator {
    fn navigate(&mut self, target: &NavTarget);
}

impl Navigator for () {
    fn navigate(&mut self, _target: &NavTarget) {}
}

impl<F: FnMut(&NavTarget)> Navigator for F {
    fn navigate(&mut self, target: &NavTarget) {
        self(target)
    }
}

/// Answers whether a side has somewhere to go.
pub trait Destinations {
    fn has_target(&self, side: Side) -> bool;
}

/// Table of navigation targets keyed by side.
pub struct DirectionRegistry<N> {
    targets: [Option<NavTarget>; 4],
    navigator: N,
}

impl<N> std::fmt::Debug for DirectionRegistry<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectionRegistry")
            .field("targets", &self.targets)
            .finish_non_exhaustive()
    }
}

impl Default for DirectionRegistry<()> {
    fn default() -> Self {
        Self::new(())
    }
}

impl<N> DirectionRegistry<N> {
    /// Empty registry delegating navigation to `navigator`.
    pub fn new(navigator: N) -> Self {
        Self {
            targets: Default::default(),
            navigator,
        }
    }

    /// Set or clear the target for `side`, overwriting any previous entry.
    pub fn set(&mut self, side: Side, target: Option<NavTarget>) -> &mut Self {
        self.targets[side.index()] = target;
        self
    }

    /// Target configured for `side`.
    #[must_use]
    pub fn get(&self, side: Side) -> Option<&NavTarget> {
        self.targets[side.index()].as_ref()
    }

    /// Whether `side` has a target.
    #[must_use]
    pub fn exists(&self, side: Side) -> bool {
        self.targets[side.index()].is_some()
    }

    /// Remove every target.
    pub fn clear(&mut self) {
        self.targets = Default::default();
    }
}

impl<N: Navigator> DirectionRegistry<N> {
    /// Hand the target for `side` to the navigator.
    ///
    /// Returns `false` (and does nothing) when no target is configured.
    pub fn navigate(&mut self, side: Side) -> bool {
        match &self.targets[side.index()] {
            Some(target) => {
                tracing::debug!(side = %side, target = %target.name, "navigating");
                self.navigator.navigate(target);
                true
            }
            None => {
                tracing::trace!(side = %side, "navigate ignored: no target");
                false
            }
        }
    }
}

impl<N> Destinations for DirectionRegistry<N> {
    fn has_target(&self, side: Side) -> bool {
        self.exists(side)
    }
}

impl Destinations for [Side] {
    fn has_target(&self, side: Side) -> bool {
        self.contains(&side)
    }
}

impl<const LEN: usize> Destinations for [Side; LEN] {
    fn has_target(&self, side: Side) -> bool {
        self.contains(&side)
    }
}
