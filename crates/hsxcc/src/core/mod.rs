mod conversion;
mod equality;
mod hue;
mod math;
mod space;

// conversion
pub(crate) use conversion::{convert, from_int, to_int};

// equality
#[cfg(feature = "pyffi")]
pub use equality::close_enough;
pub use equality::to_eq_bits;
#[cfg(test)]
pub(crate) use equality::{assert_same_coordinates, difference};
pub(crate) use equality::{normalize, to_eq_coordinates};

// math
pub(crate) use math::{clamp, round_to_int, FloatExt};

// space
pub use space::ColorSpace;
