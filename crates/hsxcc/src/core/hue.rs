//! The hue circle shared by HSV and HSL.
//!
//! Both models use the same hue, which is why the code for deriving a hue from
//! RGB coordinates and for mapping a hue back onto the RGB cube lives here.

use crate::Float;

/// The width of a sextant in degrees.
const SEXTANT: Float = 60.0;

/// Compute the hue of the RGB coordinates.
///
/// The hue is determined by whichever coordinate is largest, with red taking
/// precedence over green and green over blue when there is a tie. If largest
/// and smallest coordinate are the same, the color is achromatic and the hue
/// is 0. The result always falls into `0..360`.
#[inline]
pub(crate) fn hue(r: Float, g: Float, b: Float, max: Float, min: Float) -> Float {
    let delta = max - min;

    let h = if max == min {
        0.0
    } else if max == r {
        SEXTANT * ((g - b) / delta)
    } else if max == g {
        SEXTANT * (2.0 + (b - r) / delta)
    } else {
        SEXTANT * (4.0 + (r - g) / delta)
    };

    if h < 0.0 {
        // A tiny negative angle plus a full turn may round to 360º.
        let h = h + 360.0;
        if h < 360.0 {
            h
        } else {
            0.0
        }
    } else {
        h
    }
}

/// Project the hue and chroma onto the RGB cube.
///
/// This function returns red, green, and blue before the offset that lifts the
/// smallest coordinate off zero. The hue must be in `0..=360`. The sextant is
/// selected by the integer part of `h / 60`, with 360º going to the last
/// sextant instead of a non-existent seventh one. At sextant boundaries, the
/// neighboring sextants agree, so the choice does not matter there.
#[inline]
pub(crate) fn sextant(h: Float, c: Float) -> [Float; 3] {
    let h_prime = h / SEXTANT;
    let x = c * (1.0 - (h_prime.rem_euclid(2.0) - 1.0).abs());

    match h_prime as u8 {
        0 => [c, x, 0.0],
        1 => [x, c, 0.0],
        2 => [0.0, c, x],
        3 => [0.0, x, c],
        4 => [x, 0.0, c],
        _ => [c, 0.0, x],
    }
}

#[cfg(test)]
mod test {
    use super::{hue, sextant};
    use crate::assert_close_enough;

    fn hue_of(r: f64, g: f64, b: f64) -> f64 {
        hue(r, g, b, r.max(g).max(b), r.min(g).min(b))
    }

    #[test]
    fn test_hue() {
        assert_eq!(hue_of(0.3, 0.3, 0.3), 0.0);
        assert_eq!(hue_of(1.0, 0.0, 0.0), 0.0);
        assert_eq!(hue_of(1.0, 1.0, 0.0), 60.0);
        assert_eq!(hue_of(0.0, 1.0, 0.0), 120.0);
        assert_eq!(hue_of(0.0, 1.0, 1.0), 180.0);
        assert_eq!(hue_of(0.0, 0.0, 1.0), 240.0);
        assert_eq!(hue_of(1.0, 0.0, 1.0), 300.0);
        assert_close_enough!(hue_of(1.0, 0.0, 0.5), 330.0);
        assert_close_enough!(hue_of(1.0, 0.0, 0.000_001), 359.99994);
        assert_eq!(hue_of(1.0, 0.0, 1e-300), 0.0);
    }

    #[test]
    fn test_sextant() {
        let expected = [
            (0.0, [1.0, 0.0, 0.0]),
            (30.0, [1.0, 0.5, 0.0]),
            (60.0, [1.0, 1.0, 0.0]),
            (90.0, [0.5, 1.0, 0.0]),
            (120.0, [0.0, 1.0, 0.0]),
            (150.0, [0.0, 1.0, 0.5]),
            (180.0, [0.0, 1.0, 1.0]),
            (210.0, [0.0, 0.5, 1.0]),
            (240.0, [0.0, 0.0, 1.0]),
            (270.0, [0.5, 0.0, 1.0]),
            (300.0, [1.0, 0.0, 1.0]),
            (330.0, [1.0, 0.0, 0.5]),
            (360.0, [1.0, 0.0, 0.0]),
        ];

        for (h, rgb) in expected {
            let actual = sextant(h, 1.0);
            for index in 0..3 {
                assert_close_enough!(actual[index], rgb[index]);
            }
        }
    }
}
