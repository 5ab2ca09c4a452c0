use crate::Float;

/// Extension trait for floating point numbers.
pub(crate) trait FloatExt {
    /// The factor for reducing resolution before equality testing and
    /// hashing. Its reciprocal is the smallest difference that still counts.
    const ROUNDING_FACTOR: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e9;
}

/// Saturate the value into the inclusive range `lo..=hi`.
///
/// Values below the lower bound become the lower bound and values above the
/// upper bound become the upper bound. Not-a-number is passed through as is.
#[inline]
pub(crate) fn clamp(value: Float, lo: Float, hi: Float) -> Float {
    if value < lo {
        lo
    } else if hi < value {
        hi
    } else {
        value
    }
}

/// Scale the value and round it to the nearest non-negative integer.
///
/// Halfway cases round away from zero, which is what [`f64::round`] does and
/// what decimal rounding is expected to do. Negative results saturate at
/// zero and results beyond `u16::MAX` at `u16::MAX`.
#[inline]
pub(crate) fn round_to_int(value: Float, scale: Float) -> u16 {
    (value * scale).round() as u16
}

#[cfg(test)]
mod test {
    use super::{clamp, round_to_int};

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
        assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
        assert_eq!(clamp(720.0, 0.0, 360.0), 360.0);
        assert_eq!(clamp(f64::NEG_INFINITY, 0.0, 360.0), 0.0);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_to_int(0.5, 1.0), 1);
        assert_eq!(round_to_int(1.5, 1.0), 2);
        assert_eq!(round_to_int(2.5, 1.0), 3);
        assert_eq!(round_to_int(0.125, 100.0), 13);
        assert_eq!(round_to_int(0.5, 255.0), 128);
        assert_eq!(round_to_int(359.6, 1.0), 360);
        assert_eq!(round_to_int(-0.25, 1.0), 0);
    }
}
