//! Numeric cell values.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

/// A numeric value parsed from a CSV cell.
///
/// Cells keep the kind they were written in: `"10"` stays an integer and is
/// written back as `10`, `"10.0"` stays a float and is written back as `10.0`.
/// Cells that are neither are represented as `None` by [`Value::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
}

impl Value {
    /// Parses a cell as an integer, else as a float.
    ///
    /// Returns `None` if the cell is neither. Leading and trailing whitespace
    /// is ignored, and integers too large for `i64` fall back to `f64`.
    #[must_use]
    pub fn parse(cell: &str) -> Option<Self> {
        let cell = cell.trim();
        if let Ok(i) = cell.parse::<i64>() {
            return Some(Self::Int(i));
        }
        cell.parse::<f64>().ok().map(Self::Float)
    }

    /// Returns the value as `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// Returns the larger of two values, keeping `self` on ties and on NaN.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        if other > self { other } else { self }
    }

    /// Returns the smaller of two values, keeping `self` on ties and on NaN.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        if other < self { other } else { self }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl Add for Value {
    type Output = Self;

    /// Integer addition while both sides are integers and the result fits,
    /// float addition otherwise.
    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => a
                .checked_add(b)
                .map_or_else(|| Self::Float(self.as_f64() + rhs.as_f64()), Self::Int),
            _ => Self::Float(self.as_f64() + rhs.as_f64()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => f.write_str(&format_float(*x)),
        }
    }
}

/// Formats a float in shortest round-trip form.
///
/// Integral values keep a trailing `.0`, magnitudes of at least `1e16` or
/// below `1e-4` use scientific notation with a signed, two-digit exponent
/// (`1e+16`, `2.5e-05`), and non-finite values print as `nan`, `inf` and
/// `-inf`.
#[must_use]
pub fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // Debug already picks the same decimal/scientific cut-over points.
    let text = format!("{x:?}");
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}
