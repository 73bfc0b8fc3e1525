//! Common test infrastructure for graytone integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]

use graytone::{Grayscale, Rgb};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a test-writer subscriber once per test binary.
///
/// Set `RUST_LOG=graytone=trace` to see rejected inputs and saturation.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "graytone=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

pub fn gray(value: u8) -> Grayscale {
    Grayscale::from_u8(value)
}

pub fn rgb(r: u8, g: u8, b: u8) -> Rgb {
    Rgb::from_u8(r, g, b)
}
