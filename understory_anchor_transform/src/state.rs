// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::mode::MatrixMode;
use crate::origin::TransformOrigin;

/// Every user-controlled input to a recomputation pass.
///
/// Lengths are in device-independent pixels, rotation is in degrees and scale
/// is unitless. Callers must supply finite values; nothing here is sanitized.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransformState {
    /// Element extent. Expected to be positive.
    pub size: Size,
    /// Translation applied after the anchored rotation/scale.
    pub translate: Vec2,
    /// Rotation in degrees, nominally within `[-180, 180]`. Not normalized.
    pub rotate_deg: f64,
    /// Signed scale factors; negative mirrors, `0` collapses the axis.
    pub scale: Vec2,
    /// Point in local (pre-transform) pixels that stays put under
    /// rotation and scale.
    pub anchor: Point,
    /// Presentational origin, passed through to the renderer untouched.
    pub origin: TransformOrigin,
    /// 2D or 3D output.
    pub mode: MatrixMode,
    /// Whether resizing shifts the translation to keep the anchor stationary.
    pub lock_anchor_on_resize: bool,
}

impl TransformState {
    /// The identity configuration for an element of `size`.
    ///
    /// The anchor is placed at the origin; it does not influence the matrix
    /// while rotation is 0 and scale is 1.
    #[must_use]
    pub fn identity(size: Size) -> Self {
        Self {
            size,
            translate: Vec2::ZERO,
            rotate_deg: 0.0,
            scale: Vec2::new(1.0, 1.0),
            anchor: Point::ZERO,
            origin: TransformOrigin::TOP_LEFT,
            mode: MatrixMode::TwoD,
            lock_anchor_on_resize: false,
        }
    }

    /// Returns `true` when the parameters describe the identity transform.
    ///
    /// Anchor and origin are irrelevant here.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.rotate_deg == 0.0 && self.scale == Vec2::new(1.0, 1.0) && self.translate == Vec2::ZERO
    }
}

impl Default for TransformState {
    /// A 100×100 box anchored at its bottom-right corner, untransformed.
    fn default() -> Self {
        Self {
            anchor: Point::new(100.0, 100.0),
            ..Self::identity(Size::new(100.0, 100.0))
        }
    }
}

/// Dimensions used by the previous recomputation pass.
///
/// Threaded explicitly through [`crate::recompute`]: each pass consumes the
/// previous value and returns the next one.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PreviousDimensions {
    /// Width seen by the previous pass.
    pub width: f64,
    /// Height seen by the previous pass.
    pub height: f64,
}

impl PreviousDimensions {
    /// Creates previous dimensions from explicit values.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns `true` when either dimension is zero, which disables the
    /// resize correction for the next pass.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

impl From<Size> for PreviousDimensions {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

impl From<PreviousDimensions> for Size {
    fn from(prev: PreviousDimensions) -> Self {
        Self::new(prev.width, prev.height)
    }
}
