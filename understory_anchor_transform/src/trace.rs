// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable record of one recomputation pass.
//!
//! The trace is informational only: nothing downstream reads it back, and
//! every pass builds a fresh one.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write as _};

use kurbo::{Affine, Point, Vec2};

use crate::format::{Precision, fixed};

/// One computed quantity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// The rotation angle and its cosine and sine.
    Rotation {
        /// Angle in degrees, as supplied.
        degrees: f64,
        /// `cos` of the angle.
        cos: f64,
        /// `sin` of the angle.
        sin: f64,
    },
    /// The pivot in local coordinates.
    Anchor(Point),
    /// Change in extent since the previous pass.
    ResizeDelta(Vec2),
    /// Amount subtracted from the translation.
    Correction(Vec2),
    /// Heading that precedes [`Step::Components`].
    ComponentsHeader,
    /// The final coefficients.
    Components(Affine),
}

impl Step {
    /// Renders the step as a single line.
    #[must_use]
    pub fn render(&self, precision: Precision) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_to(&mut out, precision);
        out
    }

    fn write_to(&self, out: &mut impl fmt::Write, precision: Precision) -> fmt::Result {
        match *self {
            Self::Rotation { degrees, cos, sin } => write!(
                out,
                "Rotate {degrees}° -> cos={}, sin={}",
                fixed(cos, precision.trace),
                fixed(sin, precision.trace)
            ),
            Self::Anchor(p) => write!(out, "Anchor at ({}, {})", p.x, p.y),
            Self::ResizeDelta(d) => write!(out, "Resize delta: ({}, {})", d.x, d.y),
            Self::Correction(o) => write!(
                out,
                "Adjusting translate by: ({}, {})",
                fixed(o.x, precision.translation),
                fixed(o.y, precision.translation)
            ),
            Self::ComponentsHeader => out.write_str("Transformed matrix components:"),
            Self::Components(affine) => {
                let [a, b, c, d, e, f] = affine.as_coeffs();
                let (l, t) = (precision.linear, precision.translation);
                write!(
                    out,
                    "a={}, b={}, c={}, d={}, e={}, f={}",
                    fixed(a, l),
                    fixed(b, l),
                    fixed(c, l),
                    fixed(d, l),
                    fixed(e, t),
                    fixed(f, t)
                )
            }
        }
    }
}

/// Ordered steps of a pass, with the precision used to render them.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct StepTrace {
    steps: Vec<Step>,
    precision: Precision,
}

impl StepTrace {
    /// Creates an empty trace.
    #[must_use]
    pub fn new(precision: Precision) -> Self {
        Self {
            steps: Vec::new(),
            precision,
        }
    }

    pub(crate) fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// The recorded steps, in order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if no step was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns `true` if the pass ran the resize correction.
    #[must_use]
    pub fn has_resize_correction(&self) -> bool {
        self.steps
            .iter()
            .any(|s| matches!(s, Step::ResizeDelta(_) | Step::Correction(_)))
    }

    /// Renders every step, one string per step.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.steps.iter().map(|s| s.render(self.precision)).collect()
    }
}

impl fmt::Display for StepTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            step.write_to(f, self.precision)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use kurbo::{Affine, Point, Vec2};

    use super::{Step, StepTrace};
    use crate::Precision;

    #[test]
    fn steps_render_as_display_text() {
        let p = Precision::default();
        assert_eq!(
            Step::Rotation {
                degrees: 90.0,
                cos: 6.123233995736766e-17,
                sin: 1.0
            }
            .render(p),
            "Rotate 90° -> cos=0.000, sin=1.000"
        );
        assert_eq!(
            Step::Anchor(Point::new(50.0, 12.5)).render(p),
            "Anchor at (50, 12.5)"
        );
        assert_eq!(
            Step::ResizeDelta(Vec2::new(10.0, -5.0)).render(p),
            "Resize delta: (10, -5)"
        );
        assert_eq!(
            Step::Correction(Vec2::new(5.0, -2.5)).render(p),
            "Adjusting translate by: (5.00, -2.50)"
        );
        assert_eq!(
            Step::ComponentsHeader.render(p),
            "Transformed matrix components:"
        );
        assert_eq!(
            Step::Components(Affine::IDENTITY).render(p),
            "a=1.00000, b=0.00000, c=0.00000, d=1.00000, e=0.00, f=0.00"
        );
    }

    #[test]
    fn display_joins_lines() {
        let mut trace = StepTrace::new(Precision::default());
        assert!(trace.is_empty());
        trace.push(Step::Anchor(Point::new(1.0, 2.0)));
        trace.push(Step::ComponentsHeader);
        assert_eq!(trace.len(), 2);
        assert!(!trace.has_resize_correction());
        assert_eq!(
            trace.to_string(),
            "Anchor at (1, 2)\nTransformed matrix components:"
        );
        assert_eq!(trace.lines(), ["Anchor at (1, 2)", "Transformed matrix components:"]);
    }
}
