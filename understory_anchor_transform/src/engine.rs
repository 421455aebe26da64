// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The affine compute engine.
//!
//! [`recompute`] is a pure function: it reads a [`TransformState`] and the
//! dimensions of the previous pass, and returns the derived matrix, a step
//! trace, the (possibly corrected) translation and the dimensions to feed
//! into the next pass.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Vec2};

use crate::format::Precision;
use crate::matrix::DerivedMatrix;
use crate::resize::{ResizeCorrection, resize_correction};
use crate::state::{PreviousDimensions, TransformState};
use crate::trace::{Step, StepTrace};

/// Output of one recomputation pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Recomputed {
    /// The derived matrix, in the state's [`crate::MatrixMode`].
    pub matrix: DerivedMatrix,
    /// What was computed, in order.
    pub trace: StepTrace,
    /// Translation actually used for the matrix.
    ///
    /// Equal to the state's translation unless the resize correction ran, in
    /// which case callers should store it back into their state.
    pub translate: Vec2,
    /// The resize correction, if `lock_anchor_on_resize` was set.
    pub correction: Option<ResizeCorrection>,
    /// Dimensions to pass into the next call.
    pub previous: PreviousDimensions,
}

/// Runs one pass with the default [`Precision`].
///
/// ```rust
/// use kurbo::Point;
/// use understory_anchor_transform::{TransformState, recompute};
///
/// let mut state = TransformState::default();
/// state.rotate_deg = 90.0;
/// state.anchor = Point::new(50.0, 50.0);
///
/// let out = recompute(&state, state.size.into());
/// assert_eq!(
///     out.matrix.to_string(),
///     "matrix(0.00000, 1.00000, -1.00000, 0.00000, 100.00, 0.00)"
/// );
/// ```
#[must_use]
pub fn recompute(state: &TransformState, previous: PreviousDimensions) -> Recomputed {
    recompute_with(state, previous, Precision::default())
}

/// Runs one pass, rendering the trace with `precision`.
#[must_use]
pub fn recompute_with(
    state: &TransformState,
    previous: PreviousDimensions,
    precision: Precision,
) -> Recomputed {
    let radians = state.rotate_deg.to_radians();
    let (cos, sin) = (radians.cos(), radians.sin());

    let mut translate = state.translate;
    let correction = state.lock_anchor_on_resize.then(|| {
        let correction = resize_correction(state.size, previous, state.anchor);
        translate = correction.apply(translate);
        correction
    });

    // Recorded whether or not the correction ran, so re-enabling it later
    // starts from the current extent.
    let next_previous = PreviousDimensions::from(state.size);

    let linear = linear_map_from(cos, sin, state.scale);
    let offset = anchor_compensation(linear, state.anchor, translate);
    let affine = linear.with_translation(offset);

    let mut trace = StepTrace::new(precision);
    trace.push(Step::Rotation {
        degrees: state.rotate_deg,
        cos,
        sin,
    });
    trace.push(Step::Anchor(state.anchor));
    if let Some(c) = correction {
        trace.push(Step::ResizeDelta(c.delta));
        trace.push(Step::Correction(c.offset));
    }
    trace.push(Step::ComponentsHeader);
    trace.push(Step::Components(affine));

    log::trace!(
        "recompute: rotate={}deg scale=({}, {}) anchor=({}, {}) -> {:?}",
        state.rotate_deg,
        state.scale.x,
        state.scale.y,
        state.anchor.x,
        state.anchor.y,
        affine.as_coeffs()
    );

    Recomputed {
        matrix: DerivedMatrix::new(affine, state.mode),
        trace,
        translate,
        correction,
        previous: next_previous,
    }
}

/// The rotation/scale part of the transform, with zero translation.
///
/// `a = sx·cos`, `b = sx·sin`, `c = -sy·sin`, `d = sy·cos`.
#[must_use]
pub fn linear_map(rotate_deg: f64, scale: Vec2) -> Affine {
    let radians = rotate_deg.to_radians();
    linear_map_from(radians.cos(), radians.sin(), scale)
}

fn linear_map_from(cos: f64, sin: f64, scale: Vec2) -> Affine {
    Affine::new([
        scale.x * cos,
        scale.x * sin,
        -scale.y * sin,
        scale.y * cos,
        0.0,
        0.0,
    ])
}

/// Translation that keeps `anchor` fixed under `linear`, plus `translate`.
///
/// Equivalent to `translate(t) · translate(anchor) · linear · translate(-anchor)`;
/// only the linear terms of `linear` are read.
#[must_use]
pub fn anchor_compensation(linear: Affine, anchor: Point, translate: Vec2) -> Vec2 {
    let [a, b, c, d, _, _] = linear.as_coeffs();
    Vec2::new(
        -anchor.x * a - anchor.y * c + anchor.x + translate.x,
        -anchor.x * b - anchor.y * d + anchor.y + translate.y,
    )
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use kurbo::{Affine, Point, Size, Vec2};

    use super::{anchor_compensation, linear_map, recompute, recompute_with};
    use crate::{DerivedMatrix, MatrixMode, Precision, PreviousDimensions, Step, TransformState};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn quarter_turn_about_center() {
        let state = TransformState {
            rotate_deg: 90.0,
            anchor: Point::new(50.0, 50.0),
            ..TransformState::default()
        };
        let out = recompute(&state, state.size.into());
        let [a, b, c, d, tx, ty] = out.matrix.coefficients_2d();
        assert!(close(a, 0.0) && close(b, 1.0) && close(c, -1.0) && close(d, 0.0));
        assert!(close(tx, 100.0));
        assert!(close(ty, 0.0));
        assert_eq!(
            out.matrix.to_css(Precision::default()),
            "matrix(0.00000, 1.00000, -1.00000, 0.00000, 100.00, 0.00)"
        );
    }

    #[test]
    fn matches_kurbo_composition() {
        let anchor = Point::new(30.0, 70.0);
        let translate = Vec2::new(-12.0, 4.5);
        let linear = linear_map(33.0, Vec2::new(-1.5, 0.75));
        let composed = Affine::translate(translate)
            * Affine::translate(anchor.to_vec2())
            * linear
            * Affine::translate(-anchor.to_vec2());
        let ours = linear.with_translation(anchor_compensation(linear, anchor, translate));
        for (x, y) in ours.as_coeffs().into_iter().zip(composed.as_coeffs()) {
            assert!(close(x, y), "{ours:?} != {composed:?}");
        }
    }

    #[test]
    fn linear_map_sign_convention() {
        let [a, b, c, d, e, f] = linear_map(30.0, Vec2::new(2.0, 3.0)).as_coeffs();
        let (sin, cos) = (0.5, 3.0_f64.sqrt() / 2.0);
        assert!(close(a, 2.0 * cos));
        assert!(close(b, 2.0 * sin));
        assert!(close(c, -3.0 * sin));
        assert!(close(d, 3.0 * cos));
        assert_eq!((e, f), (0.0, 0.0));
    }

    #[test]
    fn zero_scale_is_accepted() {
        let state = TransformState {
            scale: Vec2::new(0.0, 1.0),
            anchor: Point::new(20.0, 20.0),
            ..TransformState::default()
        };
        let out = recompute(&state, state.size.into());
        let affine = out.matrix.affine();
        assert_eq!(affine.determinant(), 0.0);
        // The anchor still maps onto itself.
        let p = affine * state.anchor;
        assert!(close(p.x, 20.0) && close(p.y, 20.0));
    }

    #[test]
    fn previous_dimensions_advance_without_lock() {
        let state = TransformState {
            size: Size::new(240.0, 60.0),
            ..TransformState::default()
        };
        let out = recompute(&state, PreviousDimensions::new(100.0, 100.0));
        assert_eq!(out.previous, PreviousDimensions::new(240.0, 60.0));
        assert_eq!(out.correction, None);
        assert_eq!(out.translate, state.translate);
        assert!(!out.trace.has_resize_correction());
    }

    #[test]
    fn locked_resize_corrects_translation_used_for_matrix() {
        let state = TransformState {
            size: Size::new(150.0, 100.0),
            anchor: Point::new(50.0, 25.0),
            translate: Vec2::new(10.0, 10.0),
            lock_anchor_on_resize: true,
            ..TransformState::default()
        };
        let out = recompute(&state, PreviousDimensions::new(100.0, 100.0));
        let correction = out.correction.unwrap();
        assert_eq!(correction.delta, Vec2::new(50.0, 0.0));
        assert_eq!(correction.offset, Vec2::new(25.0, 0.0));
        assert_eq!(out.translate, Vec2::new(-15.0, 10.0));
        // Identity linear part: translation terms are the corrected translation.
        let [_, _, _, _, tx, ty] = out.matrix.coefficients_2d();
        assert!(close(tx, -15.0) && close(ty, 10.0));
    }

    #[test]
    fn trace_order() {
        let state = TransformState {
            lock_anchor_on_resize: true,
            ..TransformState::default()
        };
        let out = recompute(&state, PreviousDimensions::new(90.0, 100.0));
        let steps = out.trace.steps();
        assert_eq!(steps.len(), 6);
        assert!(matches!(steps[0], Step::Rotation { .. }));
        assert_eq!(steps[1], Step::Anchor(Point::new(100.0, 100.0)));
        assert_eq!(steps[2], Step::ResizeDelta(Vec2::new(10.0, 0.0)));
        assert!(matches!(steps[3], Step::Correction(_)));
        assert_eq!(steps[4], Step::ComponentsHeader);
        assert!(matches!(steps[5], Step::Components(_)));

        let lines = out.trace.lines();
        assert_eq!(lines[0], "Rotate 0° -> cos=1.000, sin=0.000");
        assert_eq!(lines[2], "Resize delta: (10, 0)");
        assert_eq!(lines[3], "Adjusting translate by: (11.11, 0.00)");
    }

    #[test]
    fn three_d_mode_lifts_matrix() {
        let state = TransformState {
            mode: MatrixMode::ThreeD,
            translate: Vec2::new(5.0, -5.0),
            ..TransformState::default()
        };
        let out = recompute(&state, state.size.into());
        let DerivedMatrix::Matrix3D(m) = out.matrix else {
            panic!("expected a 3D matrix");
        };
        assert!(m.is_flat());
        assert_eq!(
            out.matrix.to_string(),
            "matrix3d(1.00000, 0.00000, 0, 0, 0.00000, 1.00000, 0, 0, 0, 0, 1, 0, 5.00, -5.00, 0, 1)"
        );
    }

    #[test]
    fn custom_precision_reaches_trace() {
        let state = TransformState::default();
        let out = recompute_with(&state, state.size.into(), Precision::new(1, 0, 1));
        assert_eq!(out.trace.lines()[0], "Rotate 0° -> cos=1.0, sin=0.0");
        assert_eq!(
            out.trace.lines()[3],
            "a=1.0, b=0.0, c=0.0, d=1.0, e=0, f=0"
        );
    }
}
