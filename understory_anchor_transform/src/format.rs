// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-precision text encodings of derived matrices.

use alloc::string::String;
use core::fmt::{self, Write as _};

use kurbo::Affine;

use crate::matrix::Matrix3D;

/// Decimal places used when rendering numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Precision {
    /// Linear terms `a`, `b`, `c`, `d`.
    pub linear: usize,
    /// Translation terms `tx`, `ty` and resize offsets.
    pub translation: usize,
    /// Cosine and sine in the step trace.
    pub trace: usize,
}

impl Precision {
    /// Creates a precision from its three components.
    #[must_use]
    pub const fn new(linear: usize, translation: usize, trace: usize) -> Self {
        Self {
            linear,
            translation,
            trace,
        }
    }
}

impl Default for Precision {
    /// Five decimals for linear terms, two for translation, three in traces.
    fn default() -> Self {
        Self::new(5, 2, 3)
    }
}

/// A number rendered with a fixed count of decimals.
///
/// Values that round to zero are written without a sign, so `-0.0` and
/// `-1e-17` both render as `0.00`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fixed {
    value: f64,
    decimals: usize,
}

/// Wraps `value` for fixed-point display.
#[must_use]
pub fn fixed(value: f64, decimals: usize) -> Fixed {
    Fixed { value, decimals }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::new();
        write!(buf, "{:.*}", self.decimals, self.value)?;
        if let Some(unsigned) = buf.strip_prefix('-') {
            if unsigned.bytes().all(|b| b == b'0' || b == b'.') {
                return f.write_str(unsigned);
            }
        }
        f.write_str(&buf)
    }
}

/// Renders `matrix(a, b, c, d, tx, ty)`.
#[must_use]
pub fn format_matrix_2d(affine: &Affine, precision: Precision) -> String {
    let [a, b, c, d, tx, ty] = affine.as_coeffs();
    let (l, t) = (precision.linear, precision.translation);
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "matrix({}, {}, {}, {}, {}, {})",
        fixed(a, l),
        fixed(b, l),
        fixed(c, l),
        fixed(d, l),
        fixed(tx, t),
        fixed(ty, t),
    );
    out
}

/// Renders `matrix3d(...)` with all sixteen terms in column-major order.
///
/// Linear and translation terms use `precision`; the z terms are written as
/// plain numbers (`0`, `1`).
#[must_use]
pub fn format_matrix_3d(matrix: &Matrix3D, precision: Precision) -> String {
    let m = matrix.as_coeffs();
    let (l, t) = (precision.linear, precision.translation);
    let mut out = String::from("matrix3d(");
    for (i, value) in m.iter().copied().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        // Writing into a String cannot fail.
        let _ = match i {
            0 | 1 | 4 | 5 => write!(out, "{}", fixed(value, l)),
            12 | 13 => write!(out, "{}", fixed(value, t)),
            _ => write!(out, "{value}"),
        };
    }
    out.push(')');
    out
}
