//! Rounding policy for real-to-integer conversions
//!
//! Fraction conversion (`fraction * 255`) can land exactly on a `.5` tie,
//! and those ties are resolved by a [`Rounding`] policy. Channel averages
//! never tie: the sum of three integers divided by three has a fractional
//! part of 0, 1/3 or 2/3.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseRoundingError;

/// How `.5` ties are resolved when rounding to the nearest integer.
///
/// The default, [`Rounding::HalfToEven`], is what every setter and getter
/// without a `_with` suffix uses.
///
/// # Example
///
/// ```
/// use graytone::Rounding;
///
/// assert_eq!(Rounding::HalfAwayFromZero.round(127.5), 128.0);
/// assert_eq!(Rounding::HalfToEven.round(127.5), 128.0);
/// assert_eq!(Rounding::HalfToEven.round(126.5), 126.0);
/// assert_eq!(Rounding::default(), Rounding::HalfToEven);
///
/// let policy: Rounding = "half-to-even".parse().unwrap();
/// assert_eq!(policy, Rounding::HalfToEven);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Rounding {
    /// `2.5 -> 2`, `3.5 -> 4` (as [`f64::round_ties_even`])
    #[default]
    HalfToEven,
    /// `2.5 -> 3`, `3.5 -> 4` (as [`f64::round`])
    HalfAwayFromZero,
}

impl Rounding {
    /// Round `x` to the nearest integer under this policy.
    #[inline]
    pub fn round(self, x: f64) -> f64 {
        match self {
            Rounding::HalfAwayFromZero => x.round(),
            Rounding::HalfToEven => x.round_ties_even(),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Rounding::HalfAwayFromZero => "half-away-from-zero",
            Rounding::HalfToEven => "half-to-even",
        }
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rounding {
    type Err = ParseRoundingError;

    /// Parse a policy name. Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "half-away-from-zero" => Ok(Rounding::HalfAwayFromZero),
            "half-to-even" => Ok(Rounding::HalfToEven),
            _ => Err(ParseRoundingError(s.to_string())),
        }
    }
}
