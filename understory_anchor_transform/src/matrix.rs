// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Affine;

use crate::format::{Precision, format_matrix_2d, format_matrix_3d};
use crate::mode::MatrixMode;

/// A 4×4 matrix with identity z terms, lifted from a 2D affine.
///
/// Coefficients are stored in CSS `matrix3d` order (column-major):
///
/// ```text
/// | m[0] m[4] m[8]  m[12] |   | a  c  0  tx |
/// | m[1] m[5] m[9]  m[13] | = | b  d  0  ty |
/// | m[2] m[6] m[10] m[14] |   | 0  0  1  0  |
/// | m[3] m[7] m[11] m[15] |   | 0  0  0  1  |
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix3D([f64; 16]);

impl Matrix3D {
    /// The 4×4 identity.
    pub const IDENTITY: Self = Self([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    /// Lifts a 2D affine into 3D, leaving the z axis untouched.
    #[must_use]
    pub fn from_affine(affine: Affine) -> Self {
        let [a, b, c, d, tx, ty] = affine.as_coeffs();
        Self([
            a, b, 0.0, 0.0, //
            c, d, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            tx, ty, 0.0, 1.0,
        ])
    }

    /// The sixteen coefficients in column-major order.
    #[must_use]
    pub const fn as_coeffs(&self) -> [f64; 16] {
        self.0
    }

    /// The coefficient at `row`, `col` (both `0..4`).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < 4 && col < 4, "matrix index ({row}, {col}) out of range");
        self.0[col * 4 + row]
    }

    /// Returns `true` when every z term is identity.
    #[must_use]
    pub fn is_flat(&self) -> bool {
        let m = &self.0;
        m[2] == 0.0
            && m[3] == 0.0
            && m[6] == 0.0
            && m[7] == 0.0
            && m[8] == 0.0
            && m[9] == 0.0
            && m[10] == 1.0
            && m[11] == 0.0
            && m[14] == 0.0
            && m[15] == 1.0
    }

    /// The surviving 2D terms.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        let m = &self.0;
        Affine::new([m[0], m[1], m[4], m[5], m[12], m[13]])
    }
}

impl From<Affine> for Matrix3D {
    fn from(affine: Affine) -> Self {
        Self::from_affine(affine)
    }
}

/// The matrix emitted by a recomputation pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DerivedMatrix {
    /// `(a, b, c, d, tx, ty)`.
    Matrix2D(Affine),
    /// The same terms lifted into a flat 4×4.
    Matrix3D(Matrix3D),
}

impl DerivedMatrix {
    /// Wraps `affine` in the shape requested by `mode`.
    #[must_use]
    pub fn new(affine: Affine, mode: MatrixMode) -> Self {
        match mode {
            MatrixMode::TwoD => Self::Matrix2D(affine),
            MatrixMode::ThreeD => Self::Matrix3D(Matrix3D::from_affine(affine)),
        }
    }

    /// The mode this matrix was emitted in.
    #[must_use]
    pub fn mode(&self) -> MatrixMode {
        match self {
            Self::Matrix2D(_) => MatrixMode::TwoD,
            Self::Matrix3D(_) => MatrixMode::ThreeD,
        }
    }

    /// The 2D terms regardless of shape.
    #[must_use]
    pub fn affine(&self) -> Affine {
        match self {
            Self::Matrix2D(affine) => *affine,
            Self::Matrix3D(m) => m.to_affine(),
        }
    }

    /// `(a, b, c, d, tx, ty)`.
    #[must_use]
    pub fn coefficients_2d(&self) -> [f64; 6] {
        self.affine().as_coeffs()
    }

    /// All coefficients in output order: 6 for 2D, 16 for 3D.
    #[must_use]
    pub fn coefficients(&self) -> Vec<f64> {
        match self {
            Self::Matrix2D(affine) => affine.as_coeffs().to_vec(),
            Self::Matrix3D(m) => m.as_coeffs().to_vec(),
        }
    }

    /// Renders as CSS `matrix(...)` or `matrix3d(...)`.
    #[must_use]
    pub fn to_css(&self, precision: Precision) -> String {
        match self {
            Self::Matrix2D(affine) => format_matrix_2d(affine, precision),
            Self::Matrix3D(m) => format_matrix_3d(m, precision),
        }
    }
}

impl fmt::Display for DerivedMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css(Precision::default()))
    }
}
