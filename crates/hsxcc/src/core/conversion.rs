use super::hue::{hue, sextant};
use super::{normalize, round_to_int, ColorSpace};
use crate::Float;

/// Convert the given integer coordinates to normalized floating point
/// coordinates.
///
/// This function first saturates the coordinates into the color space's
/// integer domain and then divides by the scale factors, i.e., 255 for RGB
/// and 100 for saturation, value, and lightness. Hue is not scaled.
#[inline]
pub(crate) fn from_int(space: ColorSpace, coordinates: [i32; 3]) -> [Float; 3] {
    let bounds = space.integer_bounds();
    let scale = space.integer_scale();
    let mut result = [0.0; 3];

    for index in 0..3 {
        let (lo, hi) = bounds[index];
        result[index] = Float::from(coordinates[index].clamp(lo, hi)) / scale[index];
    }

    result
}

/// Convert the normalized coordinates to integer coordinates.
///
/// This function saturates the coordinates into the color space's domain,
/// multiplies them by the scale factors, and rounds halfway cases away from
/// zero. RGB coordinates hence range `0..=255`, hues `0..=360`, and all other
/// coordinates `0..=100`.
pub(crate) fn to_int(space: ColorSpace, coordinates: &[Float; 3]) -> [u16; 3] {
    let [c1, c2, c3] = normalize(space, coordinates);
    let [s1, s2, s3] = space.integer_scale();
    [
        round_to_int(c1, s1),
        round_to_int(c2, s2),
        round_to_int(c3, s3),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates for RGB to HSV. This is a one-hop, direct conversion.
pub(crate) fn rgb_to_hsv(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = normalize(ColorSpace::Rgb, value);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    let h = hue(r, g, b, max, min);
    let s = if max == 0.0 { 0.0 } else { (max - min) / max };

    [h, s, max]
}

/// Convert coordinates for HSV to RGB. This is a one-hop, direct conversion.
pub(crate) fn hsv_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, v] = normalize(ColorSpace::Hsv, value);
    let c = v * s;
    let m = v - c;

    let [r, g, b] = sextant(h, c);
    normalize(ColorSpace::Rgb, &[r + m, g + m, b + m])
}

/// Convert coordinates for RGB to HSL. This is a one-hop, direct conversion.
pub(crate) fn rgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = normalize(ColorSpace::Rgb, value);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    let h = hue(r, g, b, max, min);
    let sum = max + min;

    // Black and white have a zero denominator.
    let s = if max == 0.0 || min == 1.0 {
        0.0
    } else {
        ((max - min) / (1.0 - (sum - 1.0).abs())).min(1.0)
    };

    [h, s, sum / 2.0]
}

/// Convert coordinates for HSL to RGB. This is a one-hop, direct conversion.
pub(crate) fn hsl_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, l] = normalize(ColorSpace::Hsl, value);
    let c = (1.0 - Float::mul_add(2.0, l, -1.0).abs()) * s;
    let m = c.mul_add(-0.5, l);

    let [r, g, b] = sextant(h, c);
    normalize(ColorSpace::Rgb, &[r + m, g + m, b + m])
}

/// Convert coordinates for HSV to HSL. This is a two-hop conversion.
#[inline]
fn hsv_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let rgb = hsv_to_rgb(value);
    rgb_to_hsl(&rgb)
}

/// Convert coordinates for HSL to HSV. This is a two-hop conversion.
#[inline]
fn hsl_to_hsv(value: &[Float; 3]) -> [Float; 3] {
    let rgb = hsl_to_rgb(value);
    rgb_to_hsv(&rgb)
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert the coordinates from one color space to another.
///
/// This function clamps the coordinates into the domain of the original color
/// space and then converts them to the targeted color space, which may be the
/// same as the original color space.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn convert(
    from_space: ColorSpace,
    to_space: ColorSpace,
    coordinates: &[Float; 3],
) -> [Float; 3] {
    use ColorSpace::*;

    match (from_space, to_space) {
        (Rgb, Hsv) => rgb_to_hsv(coordinates),
        (Rgb, Hsl) => rgb_to_hsl(coordinates),
        (Hsv, Rgb) => hsv_to_rgb(coordinates),
        (Hsl, Rgb) => hsl_to_rgb(coordinates),
        (Hsv, Hsl) => hsv_to_hsl(coordinates),
        (Hsl, Hsv) => hsl_to_hsv(coordinates),
        (Rgb, Rgb) | (Hsv, Hsv) | (Hsl, Hsl) => normalize(from_space, coordinates),
    }
}
