//! The eight conversion functions.
//!
//! Each function takes three scalar coordinates and returns a fresh record.
//! The high-resolution functions take and return normalized coordinates. The
//! integer functions rescale their inputs, invoke the matching high-resolution
//! function, and round the result. All functions clamp out-of-range inputs.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::color::{Hsl, Hsv, Rgb};
use crate::int::{HslInt, HsvInt, RgbInt};
use crate::Float;

/// Convert the normalized RGB coordinates to HSV.
///
/// ```
/// # use hsxcc::{rgb_to_hsv, Hsv};
/// assert_eq!(rgb_to_hsv(0.0, 0.0, 1.0), Hsv::new(240.0, 1.0, 1.0));
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn rgb_to_hsv(r: Float, g: Float, b: Float) -> Hsv {
    Rgb::new(r, g, b).to_hsv()
}

/// Convert the normalized HSV coordinates to RGB.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn hsv_to_rgb(h: Float, s: Float, v: Float) -> Rgb {
    Hsv::new(h, s, v).to_rgb()
}

/// Convert the normalized RGB coordinates to HSL.
///
/// ```
/// # use hsxcc::rgb_to_hsl;
/// // White has no saturation, even though the formula would divide by zero.
/// assert_eq!(rgb_to_hsl(1.0, 1.0, 1.0).coordinates(), [0.0, 0.0, 1.0]);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn rgb_to_hsl(r: Float, g: Float, b: Float) -> Hsl {
    Rgb::new(r, g, b).to_hsl()
}

/// Convert the normalized HSL coordinates to RGB.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn hsl_to_rgb(h: Float, s: Float, l: Float) -> Rgb {
    Hsl::new(h, s, l).to_rgb()
}

/// Convert the 24-bit RGB coordinates to integer HSV.
///
/// ```
/// # use hsxcc::rgb_to_hsv_int;
/// assert_eq!(rgb_to_hsv_int(255, 0, 0).coordinates(), [0, 100, 100]);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn rgb_to_hsv_int(r: i32, g: i32, b: i32) -> HsvInt {
    RgbInt::new(r, g, b).to_hsv()
}

/// Convert the integer HSV coordinates to 24-bit RGB.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn hsv_to_rgb_int(h: i32, s: i32, v: i32) -> RgbInt {
    HsvInt::new(h, s, v).to_rgb()
}

/// Convert the 24-bit RGB coordinates to integer HSL.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn rgb_to_hsl_int(r: i32, g: i32, b: i32) -> HslInt {
    RgbInt::new(r, g, b).to_hsl()
}

/// Convert the integer HSL coordinates to 24-bit RGB.
///
/// ```
/// # use hsxcc::hsl_to_rgb_int;
/// assert_eq!(hsl_to_rgb_int(60, 100, 50).coordinates(), [255, 255, 0]);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn hsl_to_rgb_int(h: i32, s: i32, l: i32) -> RgbInt {
    HslInt::new(h, s, l).to_rgb()
}

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::core::{assert_same_coordinates, ColorSpace};

    #[test]
    fn test_scenarios() {
        assert_same_coordinates!(
            ColorSpace::Hsv,
            rgb_to_hsv(1.0, 0.0, 0.0).as_ref(),
            &[0.0, 1.0, 1.0]
        );
        assert_same_coordinates!(
            ColorSpace::Hsv,
            rgb_to_hsv(0.0, 1.0, 0.0).as_ref(),
            &[120.0, 1.0, 1.0]
        );
        assert_same_coordinates!(
            ColorSpace::Hsv,
            rgb_to_hsv(0.0, 0.0, 1.0).as_ref(),
            &[240.0, 1.0, 1.0]
        );
        assert_eq!(rgb_to_hsl(0.5, 0.5, 0.5).coordinates(), [0.0, 0.0, 0.5]);
        assert_eq!(rgb_to_hsl(1.0, 1.0, 1.0).coordinates(), [0.0, 0.0, 1.0]);
        assert_eq!(rgb_to_hsv_int(255, 0, 0).coordinates(), [0, 100, 100]);
        assert_same_coordinates!(
            ColorSpace::Rgb,
            hsl_to_rgb(120.0, 1.0, 0.5).as_ref(),
            &[0.0, 1.0, 0.0]
        );
        assert_eq!(hsl_to_rgb_int(60, 100, 50).coordinates(), [255, 255, 0]);
    }

    #[test]
    fn test_integer_scenarios() {
        assert_eq!(hsv_to_rgb_int(0, 100, 100).coordinates(), [255, 0, 0]);
        assert_eq!(hsv_to_rgb_int(240, 50, 100).coordinates(), [128, 128, 255]);
        assert_eq!(rgb_to_hsl_int(0, 0, 128).coordinates(), [240, 100, 25]);
        assert_eq!(rgb_to_hsl_int(255, 255, 255).coordinates(), [0, 0, 100]);
        assert_eq!(rgb_to_hsv_int(0, 0, 0).coordinates(), [0, 0, 0]);
    }

    #[test]
    fn test_lightness_is_clamped() {
        assert_eq!(hsl_to_rgb(200.0, 1.0, 1.5).coordinates(), [1.0, 1.0, 1.0]);
        assert_eq!(hsl_to_rgb(200.0, 1.0, -0.5).coordinates(), [0.0, 0.0, 0.0]);
        assert_eq!(hsl_to_rgb_int(200, 100, 150).coordinates(), [255, 255, 255]);
        assert_eq!(hsl_to_rgb_int(200, 100, -50).coordinates(), [0, 0, 0]);
    }

    #[test]
    fn test_clamping_is_saturation() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1_000 {
            let (a, b, c): (f64, f64, f64) = (
                rng.random_range(-2.0..=3.0),
                rng.random_range(-2.0..=3.0),
                rng.random_range(-2.0..=3.0),
            );
            let hue = rng.random_range(-720.0..=720.0);

            assert_eq!(
                rgb_to_hsv(a, b, c),
                rgb_to_hsv(a.clamp(0.0, 1.0), b.clamp(0.0, 1.0), c.clamp(0.0, 1.0))
            );
            assert_eq!(
                rgb_to_hsl(a, b, c),
                rgb_to_hsl(a.clamp(0.0, 1.0), b.clamp(0.0, 1.0), c.clamp(0.0, 1.0))
            );
            assert_eq!(
                hsv_to_rgb(hue, b, c),
                hsv_to_rgb(hue.clamp(0.0, 360.0), b.clamp(0.0, 1.0), c.clamp(0.0, 1.0))
            );
            assert_eq!(
                hsl_to_rgb(hue, b, c),
                hsl_to_rgb(hue.clamp(0.0, 360.0), b.clamp(0.0, 1.0), c.clamp(0.0, 1.0))
            );

            let (x, y, z): (i32, i32, i32) = (
                rng.random_range(-100..=400),
                rng.random_range(-100..=400),
                rng.random_range(-100..=400),
            );
            assert_eq!(
                rgb_to_hsv_int(x, y, z),
                rgb_to_hsv_int(x.clamp(0, 255), y.clamp(0, 255), z.clamp(0, 255))
            );
            assert_eq!(
                hsv_to_rgb_int(x, y, z),
                hsv_to_rgb_int(x.clamp(0, 360), y.clamp(0, 100), z.clamp(0, 100))
            );
            assert_eq!(
                rgb_to_hsl_int(x, y, z),
                rgb_to_hsl_int(x.clamp(0, 255), y.clamp(0, 255), z.clamp(0, 255))
            );
            assert_eq!(
                hsl_to_rgb_int(x, y, z),
                hsl_to_rgb_int(x.clamp(0, 360), y.clamp(0, 100), z.clamp(0, 100))
            );
        }
    }

    /// Draw a saturation, value, or lightness. Exactly 0 and 1 make grays,
    /// black, and white. Other draws keep their distance from both, since the
    /// hue of near-grays cannot survive a round trip with full precision.
    fn random_fraction(rng: &mut StdRng) -> Float {
        match rng.random_range(0..8) {
            0 => 0.0,
            1 => 1.0,
            _ => rng.random_range(0.01..=0.99),
        }
    }

    #[test]
    fn test_round_trips() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..10_000 {
            let h = rng.random_range(0.0..=360.0);
            let s = random_fraction(&mut rng);
            let x = random_fraction(&mut rng);

            let hsv = hsv_to_rgb(h, s, x).to_hsv();
            assert_same_coordinates!(ColorSpace::Hsv, hsv.as_ref(), &[h, s, x]);

            let hsl = hsl_to_rgb(h, s, x).to_hsl();
            assert_same_coordinates!(ColorSpace::Hsl, hsl.as_ref(), &[h, s, x]);
        }
    }
}
