//! Colors with integer coordinates.
//!
//! These are the customary ranges of color pickers and other tooling: RGB
//! coordinates `0..=255`, hues in whole degrees `0..=360`, and saturation,
//! value, and lightness as whole percentages `0..=100`. Conversions between
//! them rescale to normalized coordinates, convert with full precision, and
//! round the result, with halfway cases rounding away from zero.
//!
//! Constructors accept `i32` and clamp into range, so that integer inputs are
//! integers by type and negative inputs saturate at zero.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::color::{Hsl, Hsv, Rgb};
use crate::core::{convert, from_int, to_int, ColorSpace};
use crate::error::OutOfBoundsError;

/// Check integer coordinates against the color space's integer bounds.
fn check(space: ColorSpace, coordinates: [i32; 3]) -> Result<(), OutOfBoundsError> {
    let names = space.coordinate_names();
    let bounds = space.integer_bounds();

    for index in 0..3 {
        let (lo, hi) = bounds[index];
        OutOfBoundsError::check(names[index], coordinates[index], (lo.into(), hi.into()))?;
    }

    Ok(())
}

/// Convert integer coordinates from one color space to another.
fn convert_int(from_space: ColorSpace, to_space: ColorSpace, coordinates: [i32; 3]) -> [u16; 3] {
    let normalized = from_int(from_space, coordinates);
    to_int(to_space, &convert(from_space, to_space, &normalized))
}

// ====================================================================================================================
// RgbInt
// ====================================================================================================================

/// An RGB color with 8-bit coordinates, i.e., a 24-bit color.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "hsxcc")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RgbInt([u8; 3]);

#[cfg_attr(feature = "pyffi", pymethods)]
impl RgbInt {
    /// Create a new 24-bit RGB color, clamping the coordinates into `0..=255`.
    #[cfg(feature = "pyffi")]
    #[new]
    pub fn new(r: i32, g: i32, b: i32) -> Self {
        Self::from_clamped([r, g, b])
    }

    /// Create a new 24-bit RGB color, clamping the coordinates into `0..=255`.
    ///
    /// ```
    /// # use hsxcc::RgbInt;
    /// assert_eq!(RgbInt::new(300, 128, -1).coordinates(), [255, 128, 0]);
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn new(r: i32, g: i32, b: i32) -> Self {
        Self::from_clamped([r, g, b])
    }

    /// Get the red coordinate.
    pub const fn red(&self) -> u8 {
        self.0[0]
    }

    /// Get the green coordinate.
    pub const fn green(&self) -> u8 {
        self.0[1]
    }

    /// Get the blue coordinate.
    pub const fn blue(&self) -> u8 {
        self.0[2]
    }

    /// Access the coordinates.
    pub const fn coordinates(&self) -> [u8; 3] {
        self.0
    }

    /// Convert this color to integer HSV.
    pub fn to_hsv(&self) -> HsvInt {
        HsvInt(convert_int(ColorSpace::Rgb, ColorSpace::Hsv, self.widen()))
    }

    /// Convert this color to integer HSL.
    pub fn to_hsl(&self) -> HslInt {
        HslInt(convert_int(ColorSpace::Rgb, ColorSpace::Hsl, self.widen()))
    }

    /// Convert this color to a high-resolution color without rounding.
    pub fn to_float(&self) -> Rgb {
        Rgb::from(from_int(ColorSpace::Rgb, self.widen()))
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("RgbInt({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }

    /// Convert this color to hashed hexadecimal notation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl RgbInt {
    /// Create a new 24-bit RGB color after checking that the coordinates are
    /// in range.
    pub fn try_new(r: i32, g: i32, b: i32) -> Result<Self, OutOfBoundsError> {
        check(ColorSpace::Rgb, [r, g, b])?;
        Ok(Self::from_clamped([r, g, b]))
    }

    fn from_clamped(coordinates: [i32; 3]) -> Self {
        Self(coordinates.map(|c| c.clamp(0, 255) as u8))
    }

    fn widen(&self) -> [i32; 3] {
        self.0.map(i32::from)
    }
}

impl AsRef<[u8; 3]> for RgbInt {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl std::ops::Index<usize> for RgbInt {
    type Output = u8;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[u8; 3]> for RgbInt {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl From<RgbInt> for [u8; 3] {
    fn from(value: RgbInt) -> Self {
        value.0
    }
}

impl From<HsvInt> for RgbInt {
    fn from(value: HsvInt) -> Self {
        value.to_rgb()
    }
}

impl From<HslInt> for RgbInt {
    fn from(value: HslInt) -> Self {
        value.to_rgb()
    }
}

impl From<Rgb> for RgbInt {
    fn from(value: Rgb) -> Self {
        value.to_int()
    }
}

impl std::fmt::Display for RgbInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

// ====================================================================================================================
// HsvInt and HslInt
// ====================================================================================================================

/// An HSV color with integer coordinates.
///
/// The hue is in whole degrees `0..=360`, the saturation and value are whole
/// percentages `0..=100`.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "hsxcc")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HsvInt([u16; 3]);

#[cfg_attr(feature = "pyffi", pymethods)]
impl HsvInt {
    /// Create a new integer HSV color, clamping the hue into `0..=360` and the
    /// other coordinates into `0..=100`.
    #[cfg(feature = "pyffi")]
    #[new]
    pub fn new(h: i32, s: i32, v: i32) -> Self {
        Self(clamp_polar(ColorSpace::Hsv, [h, s, v]))
    }

    /// Create a new integer HSV color, clamping the hue into `0..=360` and the
    /// other coordinates into `0..=100`.
    ///
    /// ```
    /// # use hsxcc::HsvInt;
    /// assert_eq!(HsvInt::new(400, 50, -5).coordinates(), [360, 50, 0]);
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn new(h: i32, s: i32, v: i32) -> Self {
        Self(clamp_polar(ColorSpace::Hsv, [h, s, v]))
    }

    /// Get the hue in degrees.
    pub const fn hue(&self) -> u16 {
        self.0[0]
    }

    /// Get the saturation as a percentage.
    pub const fn saturation(&self) -> u16 {
        self.0[1]
    }

    /// Get the value as a percentage.
    pub const fn value(&self) -> u16 {
        self.0[2]
    }

    /// Access the coordinates.
    pub const fn coordinates(&self) -> [u16; 3] {
        self.0
    }

    /// Convert this color to 24-bit RGB.
    pub fn to_rgb(&self) -> RgbInt {
        let [r, g, b] = convert_int(ColorSpace::Hsv, ColorSpace::Rgb, self.widen());
        RgbInt([r as u8, g as u8, b as u8])
    }

    /// Convert this color to a high-resolution color without rounding.
    pub fn to_float(&self) -> Hsv {
        Hsv::from(from_int(ColorSpace::Hsv, self.widen()))
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("HsvInt({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }

    /// Convert this color to its string representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

/// An HSL color with integer coordinates.
///
/// The hue is in whole degrees `0..=360`, the saturation and lightness are
/// whole percentages `0..=100`.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "hsxcc")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HslInt([u16; 3]);

#[cfg_attr(feature = "pyffi", pymethods)]
impl HslInt {
    /// Create a new integer HSL color, clamping the hue into `0..=360` and the
    /// other coordinates into `0..=100`.
    #[cfg(feature = "pyffi")]
    #[new]
    pub fn new(h: i32, s: i32, l: i32) -> Self {
        Self(clamp_polar(ColorSpace::Hsl, [h, s, l]))
    }

    /// Create a new integer HSL color, clamping the hue into `0..=360` and the
    /// other coordinates into `0..=100`.
    #[cfg(not(feature = "pyffi"))]
    pub fn new(h: i32, s: i32, l: i32) -> Self {
        Self(clamp_polar(ColorSpace::Hsl, [h, s, l]))
    }

    /// Get the hue in degrees.
    pub const fn hue(&self) -> u16 {
        self.0[0]
    }

    /// Get the saturation as a percentage.
    pub const fn saturation(&self) -> u16 {
        self.0[1]
    }

    /// Get the lightness as a percentage.
    pub const fn lightness(&self) -> u16 {
        self.0[2]
    }

    /// Access the coordinates.
    pub const fn coordinates(&self) -> [u16; 3] {
        self.0
    }

    /// Convert this color to 24-bit RGB.
    pub fn to_rgb(&self) -> RgbInt {
        let [r, g, b] = convert_int(ColorSpace::Hsl, ColorSpace::Rgb, self.widen());
        RgbInt([r as u8, g as u8, b as u8])
    }

    /// Convert this color to a high-resolution color without rounding.
    pub fn to_float(&self) -> Hsl {
        Hsl::from(from_int(ColorSpace::Hsl, self.widen()))
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("HslInt({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }

    /// Convert this color to its string representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

/// Clamp hue, saturation, and value or lightness into their integer bounds.
fn clamp_polar(space: ColorSpace, coordinates: [i32; 3]) -> [u16; 3] {
    let [(lo1, hi1), (lo2, hi2), (lo3, hi3)] = space.integer_bounds();
    let [c1, c2, c3] = coordinates;
    [
        c1.clamp(lo1, hi1) as u16,
        c2.clamp(lo2, hi2) as u16,
        c3.clamp(lo3, hi3) as u16,
    ]
}

macro_rules! impl_polar_int {
    ($name:ident, $space:expr, $prefix:literal) => {
        impl $name {
            /// Create a new color after checking that the coordinates are in
            /// range.
            pub fn try_new(c1: i32, c2: i32, c3: i32) -> Result<Self, OutOfBoundsError> {
                check($space, [c1, c2, c3])?;
                Ok(Self(clamp_polar($space, [c1, c2, c3])))
            }

            fn widen(&self) -> [i32; 3] {
                self.0.map(i32::from)
            }
        }

        impl AsRef<[u16; 3]> for $name {
            fn as_ref(&self) -> &[u16; 3] {
                &self.0
            }
        }

        impl std::ops::Index<usize> for $name {
            type Output = u16;

            /// Access the coordinate with the given index.
            ///
            /// # Panics
            ///
            /// This method panics if `2 < index`.
            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }

        impl From<[u16; 3]> for $name {
            /// Convert the coordinates, clamping them into range.
            fn from(value: [u16; 3]) -> Self {
                Self(clamp_polar($space, value.map(i32::from)))
            }
        }

        impl From<$name> for [u16; 3] {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl From<RgbInt> for $name {
            fn from(value: RgbInt) -> Self {
                Self(convert_int(ColorSpace::Rgb, $space, value.widen()))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let [h, s, x] = self.0;
                write!(f, "{}({} {}% {}%)", $prefix, h, s, x)
            }
        }
    };
}

impl_polar_int!(HsvInt, ColorSpace::Hsv, "hsv");
impl_polar_int!(HslInt, ColorSpace::Hsl, "hsl");
