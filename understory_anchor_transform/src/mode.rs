// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Which matrix shape a recomputation pass emits.
///
/// This replaces a bare `use_3d` flag; see [`MatrixMode::from_use_3d`] and
/// [`MatrixMode::is_3d`] for the boolean view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatrixMode {
    /// Six coefficients, rendered as `matrix(a, b, c, d, tx, ty)`.
    #[default]
    TwoD,
    /// Sixteen coefficients, rendered as `matrix3d(...)`.
    ///
    /// The z row and column are always identity: no z scale, no rotation
    /// about x or y, no z translation.
    ThreeD,
}

impl MatrixMode {
    /// Maps a `use_3d` toggle onto a mode.
    #[must_use]
    pub const fn from_use_3d(use_3d: bool) -> Self {
        if use_3d { Self::ThreeD } else { Self::TwoD }
    }

    /// Returns `true` for [`MatrixMode::ThreeD`].
    #[must_use]
    pub const fn is_3d(self) -> bool {
        matches!(self, Self::ThreeD)
    }
}

/// Whether a [`crate::TransformSession`] clamps incoming parameters.
///
/// The engine itself never clamps; this only affects values routed through
/// the session setters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClampMode {
    /// Accept values as given.
    #[default]
    None,
    /// Clamp each parameter into the session's [`crate::ParameterLimits`].
    ClampToLimits,
}
