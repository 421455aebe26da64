// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement of the origin and anchor markers drawn inside the element.
//!
//! Both markers live in the element's local space, so they move with the
//! transform. The counter-transform undoes the rotation and scale so the
//! glyphs stay upright and at their natural size.

use kurbo::{Affine, Point};

use crate::state::TransformState;

/// Local position of the transform-origin marker.
#[must_use]
pub fn origin_marker(state: &TransformState) -> Point {
    state.origin.resolve(state.size)
}

/// Local position of the anchor marker.
///
/// The anchor is drawn relative to the presentational origin.
#[must_use]
pub fn anchor_marker(state: &TransformState) -> Point {
    origin_marker(state) + state.anchor.to_vec2()
}

/// `scale(1/sx, 1/sy) rotate(-θ)`, the inverse of the linear map.
///
/// Returns `None` when either scale factor is zero.
#[must_use]
pub fn marker_counter_transform(state: &TransformState) -> Option<Affine> {
    let scale = state.scale;
    if scale.x == 0.0 || scale.y == 0.0 {
        return None;
    }
    Some(
        Affine::scale_non_uniform(1.0 / scale.x, 1.0 / scale.y)
            * Affine::rotate(-state.rotate_deg.to_radians()),
    )
}
