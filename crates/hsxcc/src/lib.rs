//! # hsxcc
//!
//! hsxcc converts colors between RGB, HSV, and HSL. Each conversion comes in
//! two forms: a high-resolution form with normalized floating point
//! coordinates and an integer form with the 8-bit and percentage ranges used
//! by color pickers and similar tooling.
//!
//!
//! ## 1. Overview
//!
//! hsxcc's main abstractions are:
//!
//!   * The eight **conversion functions** [`rgb_to_hsv`], [`hsv_to_rgb`],
//!     [`rgb_to_hsl`], [`hsl_to_rgb`], and their integer counterparts
//!     [`rgb_to_hsv_int`], [`hsv_to_rgb_int`], [`rgb_to_hsl_int`], and
//!     [`hsl_to_rgb_int`].
//!   * The **high-resolution records** [`Rgb`], [`Hsv`], and [`Hsl`], which
//!     wrap three [`Float`] coordinates each and offer the same conversions as
//!     methods and `From` implementations.
//!   * The **integer records** [`RgbInt`], [`HsvInt`], and [`HslInt`].
//!   * [`ColorSpace`] names the three models and their coordinate domains.
//!
//! | Record   | Coordinates | Domain                     |
//! | -------- | ----------- | -------------------------- |
//! | `Rgb`    | r, g, b     | `0..=1` each               |
//! | `Hsv`    | h, s, v     | `0..=360`, `0..=1`, `0..=1` |
//! | `Hsl`    | h, s, l     | `0..=360`, `0..=1`, `0..=1` |
//! | `RgbInt` | r, g, b     | `0..=255` each             |
//! | `HsvInt` | h, s, v     | `0..=360`, `0..=100`, `0..=100` |
//! | `HslInt` | h, s, l     | `0..=360`, `0..=100`, `0..=100` |
//!
//!
//! ## 2. Clamping, Not Failing
//!
//! Conversions never fail. Coordinates below their domain become the lower
//! bound and coordinates above their domain become the upper bound. That
//! includes the hue, which is clamped, not wrapped around the hue circle.
//!
//! ```
//! # use hsxcc::{hsv_to_rgb, hsl_to_rgb_int};
//! assert_eq!(hsv_to_rgb(400.0, 1.0, 1.0), hsv_to_rgb(360.0, 1.0, 1.0));
//! assert_eq!(hsl_to_rgb_int(200, 100, 150).coordinates(), [255, 255, 255]);
//! ```
//!
//! Callers who would rather reject out-of-range coordinates use the checked
//! `try_new` constructors, which return an
//! [`OutOfBoundsError`](error::OutOfBoundsError).
//!
//! ```
//! # use hsxcc::Hsl;
//! assert!(Hsl::try_new(120.0, 0.5, 1.5).is_err());
//! ```
//!
//!
//! ## 3. Grays and the Hue Circle
//!
//! A gray's hue is undefined and reported as 0. Hues resulting from
//! conversion always are in `0..360`, but 360 is a valid input denoting the
//! same red as 0. Equality testing on the high-resolution records accounts
//! for both.
//!
//! ```
//! # use hsxcc::{rgb_to_hsv, Hsv};
//! assert_eq!(rgb_to_hsv(0.5, 0.5, 0.5).coordinates(), [0.0, 0.0, 0.5]);
//! assert_eq!(Hsv::new(360.0, 1.0, 1.0), Hsv::new(0.0, 1.0, 1.0));
//! ```
//!
//!
//! ## 4. Integer Conversions
//!
//! The integer functions divide their inputs by 255 (RGB) or 100 (saturation,
//! value, lightness), perform the high-resolution conversion, and multiply
//! the result back, rounding halfway cases away from zero. The round trip
//! from 24-bit RGB through integer HSV or HSL back to 24-bit RGB is exact
//! for primary and secondary colors and off by at most one for grays. Since
//! hues are rounded to whole degrees and everything else to whole
//! percentages, it may be off by up to three (HSV) or five (HSL) for other
//! colors.
//!
//!
//! ## 5. Optional Features
//!
//! hsxcc supports one feature flag:
//!
//!   - **`pyffi`** controls hsxcc's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Throughout the API documentation, items that are only available in Python
//! are decorated with <i class=python-only>Python only!</i>.

/// The floating point type in use.
pub type Float = f64;

/// [`Float`]'s bits.
pub type Bits = u64;

mod api;
mod color;
mod core;
pub mod error;
mod int;

#[cfg(feature = "pyffi")]
pub use core::close_enough;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use api::{
    hsl_to_rgb, hsl_to_rgb_int, hsv_to_rgb, hsv_to_rgb_int, rgb_to_hsl, rgb_to_hsl_int,
    rgb_to_hsv, rgb_to_hsv_int,
};
pub use color::{Hsl, Hsv, Rgb};
pub use core::ColorSpace;
pub use int::{HslInt, HsvInt, RgbInt};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn hsxcc(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(close_enough, m)?)?;

    // ---------------------------------------------------------------- conversions
    m.add_function(wrap_pyfunction!(api::rgb_to_hsv, m)?)?;
    m.add_function(wrap_pyfunction!(api::hsv_to_rgb, m)?)?;
    m.add_function(wrap_pyfunction!(api::rgb_to_hsl, m)?)?;
    m.add_function(wrap_pyfunction!(api::hsl_to_rgb, m)?)?;
    m.add_function(wrap_pyfunction!(api::rgb_to_hsv_int, m)?)?;
    m.add_function(wrap_pyfunction!(api::hsv_to_rgb_int, m)?)?;
    m.add_function(wrap_pyfunction!(api::rgb_to_hsl_int, m)?)?;
    m.add_function(wrap_pyfunction!(api::hsl_to_rgb_int, m)?)?;

    // -------------------------------------------------------------------- classes
    m.add_class::<ColorSpace>()?;
    m.add_class::<Rgb>()?;
    m.add_class::<Hsv>()?;
    m.add_class::<Hsl>()?;
    m.add_class::<RgbInt>()?;
    m.add_class::<HsvInt>()?;
    m.add_class::<HslInt>()?;

    Ok(())
}
