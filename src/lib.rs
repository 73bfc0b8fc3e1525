// `from_*` setters mutate in place, and `add` is a saturating in-place
// method rather than `std::ops::Add`.
#![allow(clippy::wrong_self_convention, clippy::should_implement_trait)]

//! Graytone - bounded grayscale and RGB color values
//!
//! Two small value types with conversions between them:
//!
//! - [`Grayscale`]: one intensity in `0..=255`, with saturating add/subtract
//! - [`Rgb`]: three channels in `0..=255`, collapsing to grayscale by
//!   averaging
//!
//! Both can be built from integers (`0..=255`) or fractions (`0.0..=1.0`).
//! Out-of-range input is rejected with [`InvalidArgument`] and the value
//! being set is left untouched.
//!
//! ```
//! use graytone::{Grayscale, Rgb};
//!
//! let mut gray = Grayscale::default();
//! gray.from_fraction(1.0)?;
//! assert_eq!(gray.to_int(), 255);
//!
//! let mut rgb = Rgb::new(10, 20, 30)?;
//! assert!(rgb.from_int(0, 0, 256).is_err());
//! assert_eq!(rgb.to_string(), "RGB (10, 20, 30)");
//! # Ok::<(), graytone::InvalidArgument>(())
//! ```
//!
//! # Rounding
//!
//! Fraction conversion rounds ties to even by default. The `_with`
//! variants take a [`Rounding`] policy instead; enable the `serde` feature
//! to read one from a host application's config.

pub mod color;
pub mod error;
pub mod rounding;

pub use color::{clamp, Channel, Grayscale, Rgb};
pub use error::{InvalidArgument, ParseRoundingError};
pub use rounding::Rounding;
