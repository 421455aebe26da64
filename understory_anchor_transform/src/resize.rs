// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor-preserving resize correction.
//!
//! When the element grows or shrinks, a point at a fixed *pixel* anchor sits
//! at a different *fraction* of the box than before. Shifting the translation
//! by the change in extent, weighted by where the anchor sat in the previous
//! box, keeps the anchor visually stationary.

use kurbo::{Point, Size, Vec2};

use crate::state::PreviousDimensions;

/// Result of comparing the current extent with the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ResizeCorrection {
    /// `(width - prev_width, height - prev_height)`.
    pub delta: Vec2,
    /// Amount subtracted from the translation.
    ///
    /// Zero when either previous dimension is zero.
    pub offset: Vec2,
}

impl ResizeCorrection {
    /// Applies the correction to a translation.
    #[must_use]
    pub fn apply(self, translate: Vec2) -> Vec2 {
        translate - self.offset
    }
}

/// Computes the resize delta and the translation offset for `anchor`.
///
/// `offset = delta * (anchor / previous)` per axis. A zero previous dimension
/// yields a zero offset instead of `NaN` or infinity.
#[must_use]
pub fn resize_correction(size: Size, previous: PreviousDimensions, anchor: Point) -> ResizeCorrection {
    let delta = Vec2::new(size.width - previous.width, size.height - previous.height);
    if previous.is_degenerate() {
        log::debug!(
            "resize correction skipped: previous dimensions {}x{} are degenerate",
            previous.width,
            previous.height
        );
        return ResizeCorrection {
            delta,
            offset: Vec2::ZERO,
        };
    }
    let offset = Vec2::new(
        delta.x * (anchor.x / previous.width),
        delta.y * (anchor.y / previous.height),
    );
    ResizeCorrection { delta, offset }
}
