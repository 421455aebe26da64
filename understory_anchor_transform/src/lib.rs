// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_anchor_transform --heading-base-level=0

//! Understory Anchor Transform: anchor-preserving affine composition.
//!
//! This crate is a small, headless model of how rotation, anisotropic scale,
//! an arbitrary pivot ("anchor") and a translation compose into one affine
//! matrix, and how that matrix is corrected when the element is resized while
//! the anchor should stay visually stationary. It focuses on:
//! - Deriving the six 2D coefficients (or a flat 4×4 for 3D output).
//! - Keeping the anchor fixed under rotation and scale.
//! - Correcting the translation on resize, proportionally to where the
//!   anchor sits inside the box.
//! - Fixed-precision CSS-style text and a step-by-step trace of each pass.
//!
//! It does **not** render anything. Callers are expected to:
//! - Feed parameter changes into [`recompute`] (or a [`TransformSession`]),
//!   one pass per change, in order.
//! - Apply the emitted matrix to their own element and show the trace.
//! - Use the presentational [`TransformOrigin`] for placement only; it never
//!   enters the matrix arithmetic.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_anchor_transform::{PreviousDimensions, TransformState, recompute};
//!
//! let state = TransformState {
//!     rotate_deg: 90.0,
//!     anchor: Point::new(50.0, 50.0),
//!     ..TransformState::default()
//! };
//!
//! // The previous dimensions are threaded explicitly from pass to pass.
//! let previous = PreviousDimensions::from(state.size);
//! let out = recompute(&state, previous);
//!
//! assert_eq!(
//!     out.matrix.to_string(),
//!     "matrix(0.00000, 1.00000, -1.00000, 0.00000, 100.00, 0.00)"
//! );
//! let previous = out.previous; // feed into the next pass
//! # let _ = previous;
//! ```
//!
//! ## Resizing with a locked anchor
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use understory_anchor_transform::{TransformSession, TransformState};
//!
//! let mut session = TransformSession::new(TransformState {
//!     anchor: Point::new(50.0, 50.0),
//!     lock_anchor_on_resize: true,
//!     ..TransformState::default()
//! });
//!
//! // Doubling the width moves the translation left by half the growth.
//! session.set_size(Size::new(200.0, 100.0));
//! assert_eq!(session.state().translate, Vec2::new(-50.0, 0.0));
//!
//! for line in session.trace().lines() {
//!     // show(line);
//! #   let _ = line;
//! }
//! ```
//!
//! ## Design notes
//!
//! - The composition is `translate(t) · translate(anchor) · linear ·
//!   translate(-anchor)`, with `linear = rotate(θ) · scale(sx, sy)`.
//! - Angles are degrees at the boundary and are not normalized.
//! - A zero scale is accepted and yields a singular matrix.
//! - A zero previous dimension disables the resize offset for that pass
//!   instead of producing `NaN`.
//! - Numbers that round to zero are printed without a sign.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod engine;
mod format;
mod limits;
mod markers;
mod matrix;
mod mode;
mod origin;
mod resize;
mod session;
mod state;
mod trace;

pub use engine::{Recomputed, anchor_compensation, linear_map, recompute, recompute_with};
pub use format::{Fixed, Precision, fixed, format_matrix_2d, format_matrix_3d};
pub use limits::{Bounds, ParameterLimits};
pub use markers::{anchor_marker, marker_counter_transform, origin_marker};
pub use matrix::{DerivedMatrix, Matrix3D};
pub use mode::{ClampMode, MatrixMode};
pub use origin::{OriginParseError, Percent, TransformOrigin};
pub use resize::{ResizeCorrection, resize_correction};
pub use session::{TransformSession, TransformSessionDebugInfo};
pub use state::{PreviousDimensions, TransformState};
pub use trace::{Step, StepTrace};
