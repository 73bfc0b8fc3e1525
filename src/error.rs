use thiserror::Error;

use crate::color::Channel;

/// Result alias for fallible color operations.
pub type Result<T> = std::result::Result<T, InvalidArgument>;

/// An input value outside the domain of the setter it was passed to.
///
/// Every fallible operation in this crate returns this error. The instance
/// being mutated is left unchanged when it is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidArgument {
    #[error("invalid argument: {channel} value {value} is outside 0..=255")]
    ChannelOutOfRange { channel: Channel, value: i32 },

    #[error("invalid argument: {channel} fraction {value} is outside 0.0..=1.0")]
    FractionOutOfRange { channel: Channel, value: f64 },
}

impl InvalidArgument {
    /// The channel whose input was rejected.
    pub fn channel(&self) -> Channel {
        match self {
            InvalidArgument::ChannelOutOfRange { channel, .. }
            | InvalidArgument::FractionOutOfRange { channel, .. } => *channel,
        }
    }
}

/// Error returned when parsing a [`Rounding`](crate::Rounding) name fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rounding policy: {0:?} (expected \"half-away-from-zero\" or \"half-to-even\")")]
pub struct ParseRoundingError(pub String);
