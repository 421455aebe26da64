// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::{Point, Size, Vec2};

use crate::engine::{Recomputed, recompute_with};
use crate::format::Precision;
use crate::limits::ParameterLimits;
use crate::matrix::DerivedMatrix;
use crate::mode::{ClampMode, MatrixMode};
use crate::origin::TransformOrigin;
use crate::state::{PreviousDimensions, TransformState};
use crate::trace::StepTrace;

/// Interactive editing session over a [`TransformState`].
///
/// `TransformSession` is the stateful caller of [`crate::recompute`]. It owns
/// the parameters and the previous dimensions, and runs exactly one pass per
/// effective parameter change, in the order the changes arrive:
/// - Setters that do not change the value are no-ops.
/// - After each pass, a corrected translation is written back into the state.
/// - The origin is presentational and never triggers a pass.
#[derive(Clone, Debug)]
pub struct TransformSession {
    state: TransformState,
    previous: PreviousDimensions,
    precision: Precision,
    limits: ParameterLimits,
    clamp_mode: ClampMode,
    output: Recomputed,
    passes: u64,
}

impl TransformSession {
    /// Creates a session and runs the initial pass.
    ///
    /// The previous dimensions start out equal to `state.size`, so the
    /// initial pass never applies a resize correction.
    #[must_use]
    pub fn new(state: TransformState) -> Self {
        let previous = PreviousDimensions::from(state.size);
        let precision = Precision::default();
        let output = recompute_with(&state, previous, precision);
        let mut session = Self {
            state,
            previous,
            precision,
            limits: ParameterLimits::default(),
            clamp_mode: ClampMode::default(),
            output,
            passes: 0,
        };
        session.commit();
        session
    }

    /// Current parameters.
    #[must_use]
    pub fn state(&self) -> &TransformState {
        &self.state
    }

    /// Dimensions recorded by the latest pass.
    #[must_use]
    pub fn previous(&self) -> PreviousDimensions {
        self.previous
    }

    /// Full output of the latest pass.
    #[must_use]
    pub fn output(&self) -> &Recomputed {
        &self.output
    }

    /// Matrix from the latest pass.
    #[must_use]
    pub fn matrix(&self) -> DerivedMatrix {
        self.output.matrix
    }

    /// Matrix from the latest pass, rendered with the session precision.
    #[must_use]
    pub fn css(&self) -> String {
        self.output.matrix.to_css(self.precision)
    }

    /// Step trace from the latest pass.
    #[must_use]
    pub fn trace(&self) -> &StepTrace {
        &self.output.trace
    }

    /// Number of passes run so far, including the initial one.
    #[must_use]
    pub fn pass_count(&self) -> u64 {
        self.passes
    }

    /// Sets the element extent.
    ///
    /// With the resize lock enabled, the translation is corrected so the
    /// anchor stays put.
    pub fn set_size(&mut self, size: Size) {
        let size = match self.clamp_mode {
            ClampMode::None => size,
            ClampMode::ClampToLimits => self.limits.clamp_size(size),
        };
        if self.state.size != size {
            self.state.size = size;
            self.rebuild();
        }
    }

    /// Sets the user translation.
    pub fn set_translate(&mut self, translate: Vec2) {
        let translate = match self.clamp_mode {
            ClampMode::None => translate,
            ClampMode::ClampToLimits => self.limits.clamp_translate(translate),
        };
        if self.state.translate != translate {
            self.state.translate = translate;
            self.rebuild();
        }
    }

    /// Sets the rotation in degrees.
    pub fn set_rotate_deg(&mut self, degrees: f64) {
        let degrees = match self.clamp_mode {
            ClampMode::None => degrees,
            ClampMode::ClampToLimits => self.limits.clamp_rotate_deg(degrees),
        };
        if self.state.rotate_deg != degrees {
            self.state.rotate_deg = degrees;
            self.rebuild();
        }
    }

    /// Sets the scale factors.
    pub fn set_scale(&mut self, scale: Vec2) {
        let scale = match self.clamp_mode {
            ClampMode::None => scale,
            ClampMode::ClampToLimits => self.limits.clamp_scale(scale),
        };
        if self.state.scale != scale {
            self.state.scale = scale;
            self.rebuild();
        }
    }

    /// Sets the anchor in local coordinates.
    pub fn set_anchor(&mut self, anchor: Point) {
        let anchor = match self.clamp_mode {
            ClampMode::None => anchor,
            ClampMode::ClampToLimits => self.limits.clamp_anchor(anchor),
        };
        if self.state.anchor != anchor {
            self.state.anchor = anchor;
            self.rebuild();
        }
    }

    /// Sets the presentational origin. Does not run a pass.
    pub fn set_origin(&mut self, origin: TransformOrigin) {
        self.state.origin = origin;
    }

    /// Switches between 2D and 3D output.
    pub fn set_mode(&mut self, mode: MatrixMode) {
        if self.state.mode != mode {
            self.state.mode = mode;
            self.rebuild();
        }
    }

    /// Enables or disables the resize correction.
    ///
    /// The previous dimensions are tracked while disabled, so enabling it
    /// never replays an old resize.
    pub fn set_lock_anchor_on_resize(&mut self, lock: bool) {
        if self.state.lock_anchor_on_resize != lock {
            self.state.lock_anchor_on_resize = lock;
            self.rebuild();
        }
    }

    /// Replaces every parameter at once and runs a single pass.
    pub fn set_state(&mut self, state: TransformState) {
        let state = match self.clamp_mode {
            ClampMode::None => state,
            ClampMode::ClampToLimits => self.limits.clamp(&state),
        };
        if self.state != state {
            self.state = state;
            self.rebuild();
        }
    }

    /// Sets the precision used for the trace and [`TransformSession::css`].
    pub fn set_precision(&mut self, precision: Precision) {
        if self.precision != precision {
            self.precision = precision;
            self.rebuild();
        }
    }

    /// Returns the current precision.
    #[must_use]
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Sets the parameter limits; re-clamps the state if clamping is active.
    pub fn set_limits(&mut self, limits: ParameterLimits) {
        self.limits = limits;
        self.reclamp();
    }

    /// Returns the current parameter limits.
    #[must_use]
    pub fn limits(&self) -> &ParameterLimits {
        &self.limits
    }

    /// Sets the clamp mode; switching to clamping re-clamps the state.
    pub fn set_clamp_mode(&mut self, mode: ClampMode) {
        if self.clamp_mode != mode {
            self.clamp_mode = mode;
            self.reclamp();
        }
    }

    /// Returns the current clamp mode.
    #[must_use]
    pub fn clamp_mode(&self) -> ClampMode {
        self.clamp_mode
    }

    /// Debug snapshot of the current session state.
    #[must_use]
    pub fn debug_info(&self) -> TransformSessionDebugInfo {
        TransformSessionDebugInfo {
            state: self.state,
            previous: self.previous,
            matrix: self.output.matrix,
            translate: self.output.translate,
            corrected: self.output.correction.is_some(),
            passes: self.passes,
            precision: self.precision,
            clamp_mode: self.clamp_mode,
        }
    }

    fn reclamp(&mut self) {
        if self.clamp_mode == ClampMode::ClampToLimits {
            let clamped = self.limits.clamp(&self.state);
            if clamped != self.state {
                self.state = clamped;
                self.rebuild();
            }
        }
    }

    fn rebuild(&mut self) {
        self.output = recompute_with(&self.state, self.previous, self.precision);
        self.commit();
    }

    fn commit(&mut self) {
        self.state.translate = self.output.translate;
        self.previous = self.output.previous;
        self.passes += 1;
    }
}

impl Default for TransformSession {
    fn default() -> Self {
        Self::new(TransformState::default())
    }
}

/// Debug snapshot of a [`TransformSession`].
#[derive(Clone, Copy, Debug)]
pub struct TransformSessionDebugInfo {
    /// Current parameters.
    pub state: TransformState,
    /// Dimensions recorded by the latest pass.
    pub previous: PreviousDimensions,
    /// Matrix from the latest pass.
    pub matrix: DerivedMatrix,
    /// Translation used by the latest pass.
    pub translate: Vec2,
    /// Whether the latest pass ran the resize correction.
    pub corrected: bool,
    /// Passes run so far.
    pub passes: u64,
    /// Output precision.
    pub precision: Precision,
    /// Clamp mode for incoming parameters.
    pub clamp_mode: ClampMode,
}
