//! Utility module with hsxcc's errors.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::Float;

/// An out-of-bounds error.
///
/// Conversions never fail. They silently clamp out-of-range coordinates to
/// the nearest bound. This error only results from the checked constructors,
/// e.g., [`Hsv::try_new`](crate::Hsv::try_new), which serve callers that
/// want to reject such coordinates instead. The ranges include:
///
///   * `0..=1` for normalized RGB coordinates as well as normalized
///     saturation, value, and lightness;
///   * `0..=360` for hues in both forms;
///   * `0..=255` for integer RGB coordinates;
///   * `0..=100` for integer saturation, value, and lightness.
///
/// Not-a-number fits into no range.
#[derive(Clone, Debug, PartialEq)]
pub struct OutOfBoundsError {
    pub coordinate: &'static str,
    pub value: Float,
    pub expected: std::ops::RangeInclusive<Float>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new<V: Into<Float>>(
        coordinate: &'static str,
        value: V,
        expected: std::ops::RangeInclusive<Float>,
    ) -> Self {
        Self {
            coordinate,
            value: value.into(),
            expected,
        }
    }

    /// Check that the value fits into the range.
    pub(crate) fn check<V: Into<Float>>(
        coordinate: &'static str,
        value: V,
        (lo, hi): (Float, Float),
    ) -> Result<(), Self> {
        let value = value.into();
        if (lo..=hi).contains(&value) {
            Ok(())
        } else {
            Err(Self::new(coordinate, value, lo..=hi))
        }
    }
}

impl std::fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{} {} does not fit into range {}..={}",
            self.coordinate,
            self.value,
            self.expected.start(),
            self.expected.end()
        ))
    }
}

impl std::error::Error for OutOfBoundsError {}

#[cfg(feature = "pyffi")]
impl From<OutOfBoundsError> for PyErr {
    fn from(value: OutOfBoundsError) -> Self {
        pyo3::exceptions::PyValueError::new_err(value.to_string())
    }
}
