// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentational transform origin.
//!
//! The origin only tells a renderer where to place the transformed box. It is
//! carried through [`crate::TransformState`] untouched and never enters the
//! matrix arithmetic; that role belongs to the anchor.

use alloc::string::{String, ToString};
use core::fmt;

use kurbo::{Point, Size};

/// A percentage of the element extent along one axis (`50.0` means `50%`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Percent(pub f64);

impl Percent {
    /// `0%`.
    pub const ZERO: Self = Self(0.0);
    /// `50%`.
    pub const HALF: Self = Self(50.0);
    /// `100%`.
    pub const FULL: Self = Self(100.0);

    /// Parses CSS percentage text such as `"50%"` or `" -12.5% "`.
    pub fn parse(input: &str) -> Result<Self, OriginParseError> {
        let trimmed = input.trim();
        let Some(number) = trimmed.strip_suffix('%') else {
            return Err(OriginParseError::MissingPercentSign {
                input: trimmed.to_string(),
            });
        };
        let value: f64 = number.parse().map_err(|_| OriginParseError::InvalidNumber {
                input: trimmed.to_string(),
            })?;
        if !value.is_finite() {
            return Err(OriginParseError::NonFinite {
                input: trimmed.to_string(),
            });
        }
        Ok(Self(value))
    }

    /// The percentage as a fraction of one (`50%` is `0.5`).
    #[must_use]
    pub fn fraction(self) -> f64 {
        self.0 / 100.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Transform origin as a pair of percentages, `x` then `y`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformOrigin {
    /// Horizontal component.
    pub x: Percent,
    /// Vertical component.
    pub y: Percent,
}

impl TransformOrigin {
    /// `0% 0%`, the top-left corner.
    pub const TOP_LEFT: Self = Self::new(Percent::ZERO, Percent::ZERO);
    /// `50% 50%`.
    pub const CENTER: Self = Self::new(Percent::HALF, Percent::HALF);

    /// Creates an origin from its two components.
    #[must_use]
    pub const fn new(x: Percent, y: Percent) -> Self {
        Self { x, y }
    }

    /// Parses `"<x>% <y>%"`.
    ///
    /// A single component sets `x` and leaves `y` at `50%`, matching CSS.
    pub fn parse(input: &str) -> Result<Self, OriginParseError> {
        let mut parts = input.split_whitespace();
        let (Some(x), y, None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(OriginParseError::ComponentCount {
                found: input.split_whitespace().count(),
            });
        };
        let x = Percent::parse(x)?;
        let y = match y {
            Some(y) => Percent::parse(y)?,
            None => Percent::HALF,
        };
        Ok(Self { x, y })
    }

    /// Pixel position of the origin inside a box of `size`.
    #[must_use]
    pub fn resolve(self, size: Size) -> Point {
        Point::new(size.width * self.x.fraction(), size.height * self.y.fraction())
    }
}

impl fmt::Display for TransformOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Error returned when origin text cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OriginParseError {
    /// The component does not end in `%`.
    #[error("origin component {input:?} is not a percentage")]
    MissingPercentSign {
        /// Offending component text.
        input: String,
    },
    /// The text before `%` is not a number.
    #[error("origin component {input:?} has an invalid number")]
    InvalidNumber {
        /// Offending component text.
        input: String,
    },
    /// The number is infinite or NaN.
    #[error("origin component {input:?} is not finite")]
    NonFinite {
        /// Offending component text.
        input: String,
    },
    /// Origin text must contain one or two components.
    #[error("expected one or two origin components, found {found}")]
    ComponentCount {
        /// Number of whitespace-separated components seen.
        found: usize,
    },
}
