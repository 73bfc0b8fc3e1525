//! Color value types and conversion utilities
//!
//! - [`Grayscale`]: a single intensity value in `0..=255`
//! - [`Rgb`]: three independent channels, each in `0..=255`
//!
//! Both are plain `Copy` values. They only know about each other through
//! explicit conversions: grayscale broadcasts to all three channels, and RGB
//! collapses to grayscale by averaging.
//!
//! # Example
//!
//! ```
//! use graytone::{Grayscale, Rgb};
//!
//! let rgb = Rgb::new(10, 20, 30).unwrap();
//! let gray = rgb.to_grayscale();
//! assert_eq!(gray.to_int(), 20);
//!
//! let back = gray.to_rgb();
//! assert_eq!(back.to_ints(), [20, 20, 20]);
//! ```

mod channel;
mod clamp;
mod grayscale;
mod rgb;

pub use channel::Channel;
pub use clamp::clamp;
pub use grayscale::Grayscale;
pub use rgb::Rgb;
