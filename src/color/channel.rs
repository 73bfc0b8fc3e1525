//! Shared validation for integer and fractional channel inputs

use std::fmt;

use crate::error::{InvalidArgument, Result};
use crate::rounding::Rounding;

/// Largest value a channel can hold.
pub(crate) const MAX: u8 = u8::MAX;

/// Names the value an input was meant for, so errors can say which one
/// was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// The single intensity of a [`Grayscale`](crate::Grayscale)
    Gray,
    /// Red channel of an [`Rgb`](crate::Rgb)
    Red,
    /// Green channel of an [`Rgb`](crate::Rgb)
    Green,
    /// Blue channel of an [`Rgb`](crate::Rgb)
    Blue,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Channel::Gray => "gray",
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        })
    }
}

/// Check that `value` fits in `0..=255`.
pub(crate) fn validate_int(channel: Channel, value: i32) -> Result<u8> {
    u8::try_from(value).map_err(|_| {
        tracing::debug!(%channel, value, "Rejected integer channel value");
        InvalidArgument::ChannelOutOfRange { channel, value }
    })
}

/// Check that `fraction` is in `0.0..=1.0` and scale it to `0..=255`.
///
/// NaN is rejected along with every other value outside the range.
pub(crate) fn validate_fraction(
    channel: Channel,
    fraction: f64,
    rounding: Rounding,
) -> Result<u8> {
    if !(0.0..=1.0).contains(&fraction) {
        tracing::debug!(%channel, fraction, "Rejected fractional channel value");
        return Err(InvalidArgument::FractionOutOfRange {
            channel,
            value: fraction,
        });
    }

    // In range after the check above, so the cast cannot truncate.
    Ok(rounding.round(fraction * f64::from(MAX)) as u8)
}
