#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use super::{clamp, ColorSpace, FloatExt};
use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that two color coordinate slices describe the same
/// color.
///
/// Given a color space and two coordinate arrays, this macro computes the
/// largest [`difference`] between corresponding coordinates, which clamps
/// the coordinates into the color space's domain, measures hues along the
/// circle, and ignores powerless hues and saturations. It accepts differences
/// up to 1e-9.
///
/// # Panics
///
/// This macro panics if the difference is larger. Its message places the
/// coordinates below each other at the beginning of subsequent lines for easy
/// comparability.
#[cfg(test)]
macro_rules! assert_same_coordinates {
    ($space:expr , $cs1:expr , $cs2:expr $(,)?) => {
        match ($space, $cs1, $cs2) {
            (space, cs1, cs2) => {
                let delta = $crate::core::difference(space, cs1, cs2);
                assert!(
                    delta <= 1e-9,
                    "{} coordinates differ by {:e}:\n{:?}\n{:?}",
                    space,
                    delta,
                    cs1,
                    cs2
                );
            }
        }
    };
}

#[cfg(test)]
pub(crate) use assert_same_coordinates;

// --------------------------------------------------------------------------------------------------------------------

/// Normalize the color coordinates.
///
/// This function saturates each coordinate into the color space's domain.
/// Every conversion starts by normalizing its input, which makes out-of-range
/// coordinates indistinguishable from the nearest boundary.
#[inline]
pub(crate) fn normalize(space: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
    let [(lo1, hi1), (lo2, hi2), (lo3, hi3)] = space.bounds();
    let [c1, c2, c3] = *coordinates;
    [clamp(c1, lo1, hi1), clamp(c2, lo2, hi2), clamp(c3, lo3, hi3)]
}

/// Determine whether the polar coordinates have a powerless hue and
/// saturation.
///
/// The hue is powerless for grays, i.e., when saturation is zero, and also
/// when the third coordinate pins the color to black (HSV, HSL) or white
/// (HSL). In the latter cases, the saturation is powerless, too. Coordinates
/// within the tolerance of zero or one count as zero or one.
fn powerless(space: ColorSpace, saturation: Float, third: Float, tolerance: Float) -> (bool, bool) {
    let saturation_powerless = match space {
        ColorSpace::Rgb => return (false, false),
        ColorSpace::Hsv => third <= tolerance,
        ColorSpace::Hsl => third <= tolerance || 1.0 - tolerance <= third,
    };

    (
        saturation_powerless || saturation <= tolerance,
        saturation_powerless,
    )
}

/// Compute the largest difference between corresponding coordinates.
///
/// Both coordinate arrays are clamped into the color space's domain first.
/// Differences between hues are measured along the hue circle, hence 0º and
/// 360º are the same. Powerless components of either color do not count.
#[cfg(test)]
pub(crate) fn difference(space: ColorSpace, cs1: &[Float; 3], cs2: &[Float; 3]) -> Float {
    const TOLERANCE: Float = 1e-9;

    let [a1, a2, a3] = normalize(space, cs1);
    let [b1, b2, b3] = normalize(space, cs2);
    let mut d1 = (a1 - b1).abs();
    let mut d2 = (a2 - b2).abs();
    let d3 = (a3 - b3).abs();

    if space.is_polar() {
        d1 = d1.min(ColorSpace::MAX_HUE - d1);

        let (hue1, saturation1) = powerless(space, a2, a3, TOLERANCE);
        let (hue2, saturation2) = powerless(space, b2, b3, TOLERANCE);
        if hue1 || hue2 {
            d1 = 0.0;
        }
        if saturation1 || saturation2 {
            d2 = 0.0;
        }
    }

    d1.max(d2).max(d3)
}

/// Normalize coordinates for equality testing and hashing.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn to_eq_coordinates(space: ColorSpace, coordinates: &[Float; 3]) -> [Bits; 3] {
    // Zero out not-a-numbers and clamp.
    let [mut c1, mut c2, mut c3] = (*coordinates).map(|c| if c.is_nan() { 0.0 } else { c });
    [c1, c2, c3] = normalize(space, &[c1, c2, c3]);

    // Reduce precision.
    let factor = <Float as FloatExt>::ROUNDING_FACTOR;
    if space.is_polar() {
        c1 = c1.rem_euclid(ColorSpace::MAX_HUE);
    }
    c1 = (c1 * factor).round();
    c2 = (c2 * factor).round();
    c3 = (c3 * factor).round();

    // Treat 360º as 0º and drop powerless components.
    if space.is_polar() {
        if c1 == ColorSpace::MAX_HUE * factor {
            c1 = 0.0;
        }

        let (hue_powerless, saturation_powerless) = powerless(space, c2, c3 / factor, 0.0);
        if hue_powerless {
            c1 = 0.0;
        }
        if saturation_powerless {
            c2 = 0.0;
        }
    }

    // Prevent too much negativity.
    if c1 == -0.0 {
        c1 = 0.0;
    }
    if c2 == -0.0 {
        c2 = 0.0;
    }
    if c3 == -0.0 {
        c3 = 0.0;
    }

    [c1.to_bits(), c2.to_bits(), c3.to_bits()]
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine whether the two floats are close enough to be considered equal.
/// <i class=python-only>Python only!</i>
///
/// This function relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings. It
/// **must not** be used for testing color coordinates; they require additional
/// normalization steps.
#[cfg(feature = "pyffi")]
#[pyfunction]
pub fn close_enough(f1: Float, f2: Float) -> bool {
    to_eq_bits(f1) == to_eq_bits(f2)
}

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string. It is only public because the [`assert_close_enough`] test macro
/// uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0;
    }

    f.to_bits()
}
