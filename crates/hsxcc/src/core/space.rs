#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::Float;

/// The enumeration of supported color models.
///
/// # RGB
///
/// The additive model with red, green, and blue coordinates. In normalized
/// form, all three coordinates range `0..=1`. In integer form, they range
/// `0..=255`.
///
/// # HSV and HSL
///
/// Both models are cylindrical transformations of the RGB cube. They share
/// the same hue, an angle in degrees ranging `0..=360`, with 0º and 360º
/// denoting the same red hue, 120º denoting green, and 240º denoting blue.
/// They differ in how they measure distance from black and white:
///
/// | Model | Coordinate 2 | Coordinate 3 |
/// | ----- | :----------: | :----------: |
/// | HSV   | saturation   | value        |
/// | HSL   | saturation   | lightness    |
///
/// Value is the largest RGB coordinate, whereas lightness is the mean of the
/// largest and smallest RGB coordinates. In normalized form, both saturation
/// and value/lightness range `0..=1`. In integer form, they are percentages
/// ranging `0..=100`. The hue range is the same in both forms.
///
/// Achromatic colors, i.e., grays, have an undefined hue. This crate reports
/// it as 0.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "hsxcc")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Rgb,
    Hsv,
    Hsl,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorSpace {
    /// Determine whether this color space is polar, i.e., whether its first
    /// coordinate is a hue.
    pub const fn is_polar(&self) -> bool {
        matches!(*self, Self::Hsv | Self::Hsl)
    }

    /// Determine whether this color space is RGB.
    pub const fn is_rgb(&self) -> bool {
        matches!(*self, Self::Rgb)
    }

    /// Create a human-readable representation for this color space. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl ColorSpace {
    /// The largest hue in degrees.
    pub const MAX_HUE: Float = 360.0;

    /// Get the inclusive bounds of the normalized coordinates.
    pub const fn bounds(&self) -> [(Float, Float); 3] {
        match *self {
            Self::Rgb => [(0.0, 1.0), (0.0, 1.0), (0.0, 1.0)],
            Self::Hsv | Self::Hsl => [(0.0, Self::MAX_HUE), (0.0, 1.0), (0.0, 1.0)],
        }
    }

    /// Get the inclusive bounds of the integer coordinates.
    pub const fn integer_bounds(&self) -> [(i32, i32); 3] {
        match *self {
            Self::Rgb => [(0, 255), (0, 255), (0, 255)],
            Self::Hsv | Self::Hsl => [(0, 360), (0, 100), (0, 100)],
        }
    }

    /// Get the factors scaling normalized to integer coordinates.
    ///
    /// Hue is measured in degrees in both forms and hence is not scaled.
    pub const fn integer_scale(&self) -> [Float; 3] {
        match *self {
            Self::Rgb => [255.0, 255.0, 255.0],
            Self::Hsv | Self::Hsl => [1.0, 100.0, 100.0],
        }
    }

    /// Get the names of the coordinates.
    pub const fn coordinate_names(&self) -> [&'static str; 3] {
        match *self {
            Self::Rgb => ["red", "green", "blue"],
            Self::Hsv => ["hue", "saturation", "value"],
            Self::Hsl => ["hue", "saturation", "lightness"],
        }
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match *self {
            Self::Rgb => "RGB",
            Self::Hsv => "HSV",
            Self::Hsl => "HSL",
        };

        f.write_str(s)
    }
}
