//! High-resolution colors with normalized floating point coordinates.
//!
//! [`Rgb`], [`Hsv`], and [`Hsl`] wrap three [`Float`] coordinates each. Every
//! constructor but the checked `try_new` clamps its arguments into the color
//! space's domain, so that coordinates of an existing record always are in
//! range. Distinct types for each color space keep HSL coordinates from
//! ending up where HSV coordinates are expected.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{convert, normalize, to_eq_coordinates, to_int, ColorSpace};
use crate::error::OutOfBoundsError;
use crate::int::{HslInt, HsvInt, RgbInt};
use crate::Float;

/// Implement the traits shared by all high-resolution color records.
macro_rules! impl_coordinates {
    ($name:ident, $space:expr) => {
        impl $name {
            /// Create a new color record after checking that the coordinates
            /// are in range.
            ///
            /// Unlike `new()`, which clamps coordinates, this associated
            /// function rejects coordinates that are out of range or
            /// not-a-number.
            pub fn try_new(c1: Float, c2: Float, c3: Float) -> Result<Self, OutOfBoundsError> {
                let space = $space;
                let names = space.coordinate_names();
                let bounds = space.bounds();
                let coordinates = [c1, c2, c3];

                for index in 0..3 {
                    OutOfBoundsError::check(names[index], coordinates[index], bounds[index])?;
                }

                Ok(Self(coordinates))
            }
        }

        impl AsRef<[Float; 3]> for $name {
            fn as_ref(&self) -> &[Float; 3] {
                &self.0
            }
        }

        impl std::ops::Index<usize> for $name {
            type Output = Float;

            /// Access the coordinate with the given index.
            ///
            /// # Panics
            ///
            /// This method panics if `2 < index`.
            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }

        impl From<[Float; 3]> for $name {
            /// Convert the coordinates to a record, clamping them into range.
            fn from(value: [Float; 3]) -> Self {
                Self(normalize($space, &value))
            }
        }

        impl From<$name> for [Float; 3] {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq for $name {
            /// Determine whether the two records describe the same color.
            ///
            /// The comparison reduces resolution, treats 0º and 360º as the
            /// same hue, and ignores the hue of grays as well as the
            /// saturation of black (and white for HSL).
            fn eq(&self, other: &Self) -> bool {
                to_eq_coordinates($space, &self.0) == to_eq_coordinates($space, &other.0)
            }
        }

        impl Eq for $name {}

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                to_eq_coordinates($space, &self.0).hash(state);
            }
        }
    };
}

// ====================================================================================================================
// Rgb
// ====================================================================================================================

/// A high-resolution RGB color.
///
/// All three coordinates range `0..=1`.
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "hsxcc"))]
#[derive(Clone, Copy, Debug)]
pub struct Rgb([Float; 3]);

#[cfg_attr(feature = "pyffi", pymethods)]
impl Rgb {
    /// Create a new RGB color, clamping the coordinates into `0..=1`.
    ///
    /// ```
    /// # use hsxcc::Rgb;
    /// let orange = Rgb::new(1.0, 0.5, -0.5);
    /// assert_eq!(orange.as_ref(), &[1.0, 0.5, 0.0]);
    /// ```
    #[cfg(feature = "pyffi")]
    #[new]
    pub fn new(r: Float, g: Float, b: Float) -> Self {
        Self(normalize(ColorSpace::Rgb, &[r, g, b]))
    }

    /// Create a new RGB color, clamping the coordinates into `0..=1`.
    ///
    /// ```
    /// # use hsxcc::Rgb;
    /// let orange = Rgb::new(1.0, 0.5, -0.5);
    /// assert_eq!(orange.as_ref(), &[1.0, 0.5, 0.0]);
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn new(r: Float, g: Float, b: Float) -> Self {
        Self(normalize(ColorSpace::Rgb, &[r, g, b]))
    }

    /// Get the color space, which is RGB.
    pub const fn space(&self) -> ColorSpace {
        ColorSpace::Rgb
    }

    /// Get the red coordinate.
    pub const fn red(&self) -> Float {
        self.0[0]
    }

    /// Get the green coordinate.
    pub const fn green(&self) -> Float {
        self.0[1]
    }

    /// Get the blue coordinate.
    pub const fn blue(&self) -> Float {
        self.0[2]
    }

    /// Access the coordinates.
    pub const fn coordinates(&self) -> [Float; 3] {
        self.0
    }

    /// Convert this color to HSV.
    ///
    /// ```
    /// # use hsxcc::{Hsv, Rgb};
    /// assert_eq!(Rgb::new(0.0, 1.0, 0.0).to_hsv(), Hsv::new(120.0, 1.0, 1.0));
    /// ```
    pub fn to_hsv(&self) -> Hsv {
        Hsv(convert(ColorSpace::Rgb, ColorSpace::Hsv, &self.0))
    }

    /// Convert this color to HSL.
    pub fn to_hsl(&self) -> Hsl {
        Hsl(convert(ColorSpace::Rgb, ColorSpace::Hsl, &self.0))
    }

    /// Convert this color to its integer form with coordinates `0..=255`.
    pub fn to_int(&self) -> RgbInt {
        let [r, g, b] = to_int(ColorSpace::Rgb, &self.0);
        // Coordinates are clamped to 0..=1 and hence fit after scaling.
        RgbInt::from([r as u8, g as u8, b as u8])
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this color to its CSS-like string representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl_coordinates!(Rgb, ColorSpace::Rgb);

impl From<Hsv> for Rgb {
    fn from(value: Hsv) -> Self {
        value.to_rgb()
    }
}

impl From<Hsl> for Rgb {
    fn from(value: Hsl) -> Self {
        value.to_rgb()
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "rgb({} {} {})", r, g, b)
    }
}

// ====================================================================================================================
// Hsv
// ====================================================================================================================

/// A high-resolution HSV color.
///
/// The hue ranges `0..=360`, the saturation and value `0..=1`.
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "hsxcc"))]
#[derive(Clone, Copy, Debug)]
pub struct Hsv([Float; 3]);

#[cfg_attr(feature = "pyffi", pymethods)]
impl Hsv {
    /// Create a new HSV color, clamping the hue into `0..=360` and the other
    /// coordinates into `0..=1`.
    ///
    /// The hue is clamped, not wrapped. Callers wanting to wrap around the hue
    /// circle must do so before calling this function, e.g., with
    /// `h.rem_euclid(360.0)`.
    #[cfg(feature = "pyffi")]
    #[new]
    pub fn new(h: Float, s: Float, v: Float) -> Self {
        Self(normalize(ColorSpace::Hsv, &[h, s, v]))
    }

    /// Create a new HSV color, clamping the hue into `0..=360` and the other
    /// coordinates into `0..=1`.
    ///
    /// The hue is clamped, not wrapped. Callers wanting to wrap around the hue
    /// circle must do so before calling this function, e.g., with
    /// `h.rem_euclid(360.0)`.
    #[cfg(not(feature = "pyffi"))]
    pub fn new(h: Float, s: Float, v: Float) -> Self {
        Self(normalize(ColorSpace::Hsv, &[h, s, v]))
    }

    /// Get the color space, which is HSV.
    pub const fn space(&self) -> ColorSpace {
        ColorSpace::Hsv
    }

    /// Get the hue in degrees.
    pub const fn hue(&self) -> Float {
        self.0[0]
    }

    /// Get the saturation.
    pub const fn saturation(&self) -> Float {
        self.0[1]
    }

    /// Get the value.
    pub const fn value(&self) -> Float {
        self.0[2]
    }

    /// Access the coordinates.
    pub const fn coordinates(&self) -> [Float; 3] {
        self.0
    }

    /// Convert this color to RGB.
    ///
    /// ```
    /// # use hsxcc::{Hsv, Rgb};
    /// let yellow = Hsv::new(60.0, 1.0, 1.0).to_rgb();
    /// assert_eq!(yellow, Rgb::new(1.0, 1.0, 0.0));
    /// ```
    pub fn to_rgb(&self) -> Rgb {
        Rgb(convert(ColorSpace::Hsv, ColorSpace::Rgb, &self.0))
    }

    /// Convert this color to HSL. This conversion goes through RGB.
    pub fn to_hsl(&self) -> Hsl {
        Hsl(convert(ColorSpace::Hsv, ColorSpace::Hsl, &self.0))
    }

    /// Convert this color to its integer form with the hue in degrees and
    /// saturation and value as percentages.
    pub fn to_int(&self) -> HsvInt {
        HsvInt::from(to_int(ColorSpace::Hsv, &self.0))
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this color to its CSS-like string representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl_coordinates!(Hsv, ColorSpace::Hsv);

impl From<Rgb> for Hsv {
    fn from(value: Rgb) -> Self {
        value.to_hsv()
    }
}

impl From<Hsl> for Hsv {
    fn from(value: Hsl) -> Self {
        value.to_hsv()
    }
}

impl std::fmt::Display for Hsv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [h, s, v] = self.0;
        write!(f, "hsv({} {}% {}%)", h, s * 100.0, v * 100.0)
    }
}

// ====================================================================================================================
// Hsl
// ====================================================================================================================

/// A high-resolution HSL color.
///
/// The hue ranges `0..=360`, the saturation and lightness `0..=1`.
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "hsxcc"))]
#[derive(Clone, Copy, Debug)]
pub struct Hsl([Float; 3]);

#[cfg_attr(feature = "pyffi", pymethods)]
impl Hsl {
    /// Create a new HSL color, clamping the hue into `0..=360` and the other
    /// coordinates into `0..=1`.
    ///
    /// The hue is clamped, not wrapped.
    #[cfg(feature = "pyffi")]
    #[new]
    pub fn new(h: Float, s: Float, l: Float) -> Self {
        Self(normalize(ColorSpace::Hsl, &[h, s, l]))
    }

    /// Create a new HSL color, clamping the hue into `0..=360` and the other
    /// coordinates into `0..=1`.
    ///
    /// The hue is clamped, not wrapped.
    #[cfg(not(feature = "pyffi"))]
    pub fn new(h: Float, s: Float, l: Float) -> Self {
        Self(normalize(ColorSpace::Hsl, &[h, s, l]))
    }

    /// Get the color space, which is HSL.
    pub const fn space(&self) -> ColorSpace {
        ColorSpace::Hsl
    }

    /// Get the hue in degrees.
    pub const fn hue(&self) -> Float {
        self.0[0]
    }

    /// Get the saturation.
    pub const fn saturation(&self) -> Float {
        self.0[1]
    }

    /// Get the lightness.
    pub const fn lightness(&self) -> Float {
        self.0[2]
    }

    /// Access the coordinates.
    pub const fn coordinates(&self) -> [Float; 3] {
        self.0
    }

    /// Convert this color to RGB.
    pub fn to_rgb(&self) -> Rgb {
        Rgb(convert(ColorSpace::Hsl, ColorSpace::Rgb, &self.0))
    }

    /// Convert this color to HSV. This conversion goes through RGB.
    pub fn to_hsv(&self) -> Hsv {
        Hsv(convert(ColorSpace::Hsl, ColorSpace::Hsv, &self.0))
    }

    /// Convert this color to its integer form with the hue in degrees and
    /// saturation and lightness as percentages.
    pub fn to_int(&self) -> HslInt {
        HslInt::from(to_int(ColorSpace::Hsl, &self.0))
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this color to its CSS-like string representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl_coordinates!(Hsl, ColorSpace::Hsl);

impl From<Rgb> for Hsl {
    fn from(value: Rgb) -> Self {
        value.to_hsl()
    }
}

impl From<Hsv> for Hsl {
    fn from(value: Hsv) -> Self {
        value.to_hsl()
    }
}

impl std::fmt::Display for Hsl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [h, s, l] = self.0;
        write!(f, "hsl({} {}% {}%)", h, s * 100.0, l * 100.0)
    }
}
