// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Control ranges for interactive editing.
//!
//! Nothing in the engine enforces these; a [`crate::TransformSession`] only
//! applies them when its [`crate::ClampMode`] asks for it.

use kurbo::{Point, Size, Vec2};

use crate::state::TransformState;

/// A closed interval `[min, max]`.
///
/// Deserialized bounds go through [`Bounds::new`], so inverted ends are
/// swapped on load.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawBounds"))]
pub struct Bounds {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Bounds {
    /// Creates bounds, swapping the ends if `min > max`.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Clamps `value` into the interval.
    ///
    /// Never panics; if the fields were set inverted by hand, `max` wins.
    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// Returns `true` if `value` lies within the interval.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBounds {
    min: f64,
    max: f64,
}

#[cfg(feature = "serde")]
impl From<RawBounds> for Bounds {
    fn from(raw: RawBounds) -> Self {
        Self::new(raw.min, raw.max)
    }
}

/// Allowed range for each user-controlled parameter.
///
/// The defaults match the usual slider ranges of an editing panel.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParameterLimits {
    /// Width and height.
    pub size: Bounds,
    /// Both translation components.
    pub translate: Bounds,
    /// Rotation in degrees.
    pub rotate_deg: Bounds,
    /// Both scale factors.
    pub scale: Bounds,
    /// Both anchor coordinates.
    pub anchor: Bounds,
}

impl Default for ParameterLimits {
    fn default() -> Self {
        Self {
            size: Bounds::new(50.0, 300.0),
            translate: Bounds::new(-200.0, 200.0),
            rotate_deg: Bounds::new(-180.0, 180.0),
            scale: Bounds::new(-3.0, 3.0),
            anchor: Bounds::new(0.0, 300.0),
        }
    }
}

impl ParameterLimits {
    /// Clamps a size.
    #[must_use]
    pub fn clamp_size(&self, size: Size) -> Size {
        Size::new(self.size.clamp(size.width), self.size.clamp(size.height))
    }

    /// Clamps a translation.
    #[must_use]
    pub fn clamp_translate(&self, translate: Vec2) -> Vec2 {
        Vec2::new(self.translate.clamp(translate.x), self.translate.clamp(translate.y))
    }

    /// Clamps a rotation.
    #[must_use]
    pub fn clamp_rotate_deg(&self, degrees: f64) -> f64 {
        self.rotate_deg.clamp(degrees)
    }

    /// Clamps a scale.
    #[must_use]
    pub fn clamp_scale(&self, scale: Vec2) -> Vec2 {
        Vec2::new(self.scale.clamp(scale.x), self.scale.clamp(scale.y))
    }

    /// Clamps an anchor.
    #[must_use]
    pub fn clamp_anchor(&self, anchor: Point) -> Point {
        Point::new(self.anchor.clamp(anchor.x), self.anchor.clamp(anchor.y))
    }

    /// Returns a copy of `state` with every numeric parameter clamped.
    ///
    /// Origin, mode and the resize lock are carried over unchanged.
    #[must_use]
    pub fn clamp(&self, state: &TransformState) -> TransformState {
        TransformState {
            size: self.clamp_size(state.size),
            translate: self.clamp_translate(state.translate),
            rotate_deg: self.clamp_rotate_deg(state.rotate_deg),
            scale: self.clamp_scale(state.scale),
            anchor: self.clamp_anchor(state.anchor),
            ..*state
        }
    }

    /// Returns `true` if every numeric parameter of `state` is in range.
    #[must_use]
    pub fn contains(&self, state: &TransformState) -> bool {
        self.size.contains(state.size.width)
            && self.size.contains(state.size.height)
            && self.translate.contains(state.translate.x)
            && self.translate.contains(state.translate.y)
            && self.rotate_deg.contains(state.rotate_deg)
            && self.scale.contains(state.scale.x)
            && self.scale.contains(state.scale.y)
            && self.anchor.contains(state.anchor.x)
            && self.anchor.contains(state.anchor.y)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{Bounds, ParameterLimits};
    use crate::TransformState;

    #[test]
    fn bounds_normalize_order() {
        let b = Bounds::new(3.0, -3.0);
        assert_eq!((b.min, b.max), (-3.0, 3.0));
        assert!(b.contains(0.0));
        assert!(!b.contains(3.5));
        assert_eq!(b.clamp(-9.0), -3.0);
    }

    #[test]
    fn clamp_with_inverted_fields_does_not_panic() {
        let b = Bounds {
            min: 300.0,
            max: 50.0,
        };
        assert_eq!(b.clamp(120.0), 50.0);
        assert_eq!(b.clamp(-10.0), 50.0);
    }

    #[test]
    fn default_state_is_within_default_limits() {
        assert!(ParameterLimits::default().contains(&TransformState::default()));
    }

    #[test]
    fn clamp_pulls_every_parameter_into_range() {
        let limits = ParameterLimits::default();
        let wild = TransformState {
            size: Size::new(10.0, 900.0),
            translate: Vec2::new(-500.0, 12.0),
            rotate_deg: 270.0,
            scale: Vec2::new(-8.0, 0.0),
            anchor: Point::new(-1.0, 301.0),
            lock_anchor_on_resize: true,
            ..TransformState::default()
        };
        assert!(!limits.contains(&wild));
        let tame = limits.clamp(&wild);
        assert!(limits.contains(&tame));
        assert_eq!(tame.size, Size::new(50.0, 300.0));
        assert_eq!(tame.translate, Vec2::new(-200.0, 12.0));
        assert_eq!(tame.rotate_deg, 180.0);
        assert_eq!(tame.scale, Vec2::new(-3.0, 0.0));
        assert_eq!(tame.anchor, Point::new(0.0, 300.0));
        assert!(tame.lock_anchor_on_resize);
    }
}
