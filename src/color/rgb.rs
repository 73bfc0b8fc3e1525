//! Three-channel color type

use std::fmt;

use super::channel::{validate_fraction, validate_int, Channel, MAX};
use super::grayscale::Grayscale;
use crate::error::{InvalidArgument, Result};
use crate::rounding::Rounding;

/// A color with independent red, green and blue channels, each in `0..=255`.
///
/// Multi-channel setters are all-or-nothing: every channel is validated
/// before any of them is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb {
        r: MAX,
        g: MAX,
        b: MAX,
    };

    /// Create a color from integer channels in `0..=255`.
    ///
    /// # Errors
    /// Returns [`InvalidArgument::ChannelOutOfRange`] for the first channel
    /// (red, then green, then blue) that is out of range.
    ///
    /// # Example
    /// ```
    /// use graytone::{Channel, Rgb};
    ///
    /// let teal = Rgb::new(0, 128, 128).unwrap();
    /// assert_eq!(teal.to_string(), "RGB (0, 128, 128)");
    ///
    /// let err = Rgb::new(0, 0, 256).unwrap_err();
    /// assert_eq!(err.channel(), Channel::Blue);
    /// ```
    pub fn new(r: i32, g: i32, b: i32) -> Result<Self> {
        let mut rgb = Self::default();
        rgb.from_int(r, g, b)?;
        Ok(rgb)
    }

    /// Infallible constructor for channels already known to be in range.
    #[inline]
    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Set all three channels from integers in `0..=255`.
    ///
    /// # Errors
    /// Returns [`InvalidArgument::ChannelOutOfRange`] if any channel is out of
    /// range. No channel is changed in that case.
    pub fn from_int(&mut self, r: i32, g: i32, b: i32) -> Result<()> {
        let r = validate_int(Channel::Red, r)?;
        let g = validate_int(Channel::Green, g)?;
        let b = validate_int(Channel::Blue, b)?;
        *self = Self { r, g, b };
        Ok(())
    }

    /// Set all three channels from fractions in `0.0..=1.0`, each scaled by
    /// 255 and rounded to nearest with ties to even.
    ///
    /// # Errors
    /// Returns [`InvalidArgument::FractionOutOfRange`] if any fraction is out
    /// of range or NaN. No channel is changed in that case.
    pub fn from_fractions(&mut self, r: f64, g: f64, b: f64) -> Result<()> {
        self.from_fractions_with(r, g, b, Rounding::default())
    }

    /// Like [`from_fractions`](Self::from_fractions) with an explicit
    /// rounding policy.
    ///
    /// # Errors
    /// Same as [`from_fractions`](Self::from_fractions).
    pub fn from_fractions_with(
        &mut self,
        r: f64,
        g: f64,
        b: f64,
        rounding: Rounding,
    ) -> Result<()> {
        let r = validate_fraction(Channel::Red, r, rounding)?;
        let g = validate_fraction(Channel::Green, g, rounding)?;
        let b = validate_fraction(Channel::Blue, b, rounding)?;
        *self = Self { r, g, b };
        Ok(())
    }

    /// Set every channel to the grayscale value.
    pub fn from_grayscale(&mut self, gray: &Grayscale) {
        let v = gray.to_int();
        *self = Self { r: v, g: v, b: v };
    }

    /// A new [`Grayscale`] holding [`average`](Self::average).
    pub fn to_grayscale(&self) -> Grayscale {
        let mut gray = Grayscale::default();
        gray.from_rgb(self);
        gray
    }

    /// Mean of the three channels, rounded to the nearest integer.
    ///
    /// Always in range, since each channel is.
    pub fn average(&self) -> u8 {
        self.average_with(Rounding::default())
    }

    /// Like [`average`](Self::average) with an explicit rounding policy.
    ///
    /// Kept for API symmetry: a sum of three integers divided by three never
    /// lands on a `.5` tie, so both policies give the same result.
    pub fn average_with(&self, rounding: Rounding) -> u8 {
        let sum = f64::from(self.r) + f64::from(self.g) + f64::from(self.b);
        // Mean of three values in 0..=255 stays in 0..=255.
        rounding.round(sum / 3.0) as u8
    }

    #[inline]
    pub fn r(&self) -> u8 {
        self.r
    }

    #[inline]
    pub fn g(&self) -> u8 {
        self.g
    }

    #[inline]
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Channels as `[r, g, b]`.
    #[inline]
    pub fn to_ints(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels as `[r, g, b]`, each divided by 255.
    pub fn to_fractions(&self) -> [f64; 3] {
        self.to_ints().map(|c| f64::from(c) / f64::from(MAX))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB ({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::from_u8(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_ints()
    }
}

impl TryFrom<(i32, i32, i32)> for Rgb {
    type Error = InvalidArgument;

    fn try_from((r, g, b): (i32, i32, i32)) -> Result<Self> {
        Self::new(r, g, b)
    }
}

impl From<Grayscale> for Rgb {
    fn from(gray: Grayscale) -> Self {
        gray.to_rgb()
    }
}
