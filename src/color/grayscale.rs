//! Single-channel intensity type

use std::fmt;
use std::ops::{AddAssign, SubAssign};

use super::channel::{validate_fraction, validate_int, Channel, MAX};
use super::clamp::clamp;
use super::rgb::Rgb;
use crate::error::{InvalidArgument, Result};
use crate::rounding::Rounding;

/// A single intensity value in `0..=255`.
///
/// Setters validate their input before touching the stored value, so a
/// failed call leaves the instance exactly as it was. Addition and
/// subtraction saturate at the ends of the range.
///
/// # Example
/// ```
/// use graytone::Grayscale;
///
/// let mut gray = Grayscale::new(250).unwrap();
/// gray.add(Grayscale::new(10).unwrap());
/// assert_eq!(gray.to_int(), 255);
/// assert_eq!(gray.to_string(), "Grayscale (255)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Grayscale {
    value: u8,
}

impl Grayscale {
    pub const BLACK: Grayscale = Grayscale { value: 0 };
    pub const WHITE: Grayscale = Grayscale { value: MAX };

    /// Create a grayscale value from an integer in `0..=255`.
    ///
    /// # Errors
    /// Returns [`InvalidArgument::ChannelOutOfRange`] if `value` is outside
    /// the range.
    pub fn new(value: i32) -> Result<Self> {
        let mut gray = Self::default();
        gray.from_int(value)?;
        Ok(gray)
    }

    /// Infallible constructor for values already known to be in range.
    #[inline]
    pub const fn from_u8(value: u8) -> Self {
        Self { value }
    }

    /// Set the stored value from an integer in `0..=255`.
    ///
    /// # Errors
    /// Returns [`InvalidArgument::ChannelOutOfRange`] and keeps the previous
    /// value if `new_value` is outside the range.
    pub fn from_int(&mut self, new_value: i32) -> Result<()> {
        self.value = validate_int(Channel::Gray, new_value)?;
        Ok(())
    }

    /// Set the stored value to the rounded average of `other`'s channels.
    pub fn from_rgb(&mut self, other: &Rgb) {
        self.value = other.average();
    }

    /// Set the stored value from a fraction in `0.0..=1.0`, scaled by 255
    /// and rounded to nearest with ties to even.
    ///
    /// # Errors
    /// Returns [`InvalidArgument::FractionOutOfRange`] and keeps the
    /// previous value if `fraction` is outside the range or NaN.
    pub fn from_fraction(&mut self, fraction: f64) -> Result<()> {
        self.from_fraction_with(fraction, Rounding::default())
    }

    /// Like [`from_fraction`](Self::from_fraction) with an explicit rounding
    /// policy.
    ///
    /// # Errors
    /// Same as [`from_fraction`](Self::from_fraction).
    pub fn from_fraction_with(&mut self, fraction: f64, rounding: Rounding) -> Result<()> {
        self.value = validate_fraction(Channel::Gray, fraction, rounding)?;
        Ok(())
    }

    #[inline]
    pub fn to_int(&self) -> u8 {
        self.value
    }

    /// The stored value divided by 255, in `0.0..=1.0`.
    #[inline]
    pub fn to_fraction(&self) -> f64 {
        f64::from(self.value) / f64::from(MAX)
    }

    /// A new [`Rgb`] with every channel set to this value.
    pub fn to_rgb(&self) -> Rgb {
        let mut rgb = Rgb::default();
        rgb.from_grayscale(self);
        rgb
    }

    /// Add `other` to this value, saturating at 255.
    pub fn add(&mut self, other: Grayscale) {
        self.value = saturate("add", i32::from(self.value) + i32::from(other.value));
    }

    /// Subtract `other` from this value, saturating at 0.
    pub fn subtract(&mut self, other: Grayscale) {
        self.value = saturate("subtract", i32::from(self.value) - i32::from(other.value));
    }
}

fn saturate(op: &'static str, unclamped: i32) -> u8 {
    let clamped = clamp(unclamped, 0, i32::from(MAX));
    if clamped != unclamped {
        tracing::trace!(op, unclamped, clamped, "Grayscale arithmetic saturated");
    }
    // Clamped to 0..=255 above.
    clamped as u8
}

impl fmt::Display for Grayscale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grayscale ({})", self.value)
    }
}

impl AddAssign for Grayscale {
    fn add_assign(&mut self, rhs: Grayscale) {
        self.add(rhs);
    }
}

impl SubAssign for Grayscale {
    fn sub_assign(&mut self, rhs: Grayscale) {
        self.subtract(rhs);
    }
}

impl From<u8> for Grayscale {
    fn from(value: u8) -> Self {
        Self::from_u8(value)
    }
}

impl From<Grayscale> for u8 {
    fn from(gray: Grayscale) -> Self {
        gray.value
    }
}

impl TryFrom<i32> for Grayscale {
    type Error = InvalidArgument;

    fn try_from(value: i32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Rgb> for Grayscale {
    fn from(rgb: Rgb) -> Self {
        rgb.to_grayscale()
    }
}
