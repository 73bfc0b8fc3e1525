//! Tests for the Rgb public API.

mod common;

use common::{gray, init_tracing, rgb};
use graytone::{Channel, InvalidArgument, Rgb, Rounding};
use pretty_assertions::assert_eq;

#[test]
fn test_construct_and_display() {
    init_tracing();
    assert_eq!(Rgb::default().to_string(), "RGB (0, 0, 0)");
    assert_eq!(Rgb::new(12, 34, 56).unwrap().to_string(), "RGB (12, 34, 56)");
}

#[test]
fn test_construct_rejects_each_channel() {
    init_tracing();
    let cases = [
        ((256, 0, 0), Channel::Red, 256),
        ((0, -1, 0), Channel::Green, -1),
        ((0, 0, 256), Channel::Blue, 256),
    ];
    for ((r, g, b), channel, value) in cases {
        assert_eq!(
            Rgb::new(r, g, b),
            Err(InvalidArgument::ChannelOutOfRange { channel, value })
        );
    }
}

#[test]
fn test_failed_from_int_leaves_no_partial_change() {
    init_tracing();
    let mut color = rgb(1, 2, 3);
    assert!(color.from_int(100, 100, 256).is_err());
    assert_eq!(color, rgb(1, 2, 3));
}

#[test]
fn test_failed_from_fractions_leaves_no_partial_change() {
    init_tracing();
    let mut color = rgb(1, 2, 3);
    let err = color.from_fractions(0.5, 0.5, -0.5).unwrap_err();
    assert_eq!(err.channel(), Channel::Blue);
    assert_eq!(color, rgb(1, 2, 3));
}

#[test]
fn test_from_fractions_rounds() {
    let mut color = Rgb::default();
    color.from_fractions(0.2, 0.5, 1.0).unwrap();
    assert_eq!(color.to_ints(), [51, 128, 255]);

    color
        .from_fractions_with(0.0, 0.5, 1.0, Rounding::HalfToEven)
        .unwrap();
    assert_eq!(color.to_ints(), [0, 128, 255]);
}

#[test]
fn test_from_fractions_ties_follow_policy() {
    // Each fraction scales to exactly 0.5, 2.5 and 4.5
    let (r, g, b) = (0.00196078431372549, 0.00980392156862745, 0.01764705882352941);
    let mut color = Rgb::default();

    color.from_fractions(r, g, b).unwrap();
    assert_eq!(color.to_ints(), [0, 2, 4]);

    color
        .from_fractions_with(r, g, b, Rounding::HalfToEven)
        .unwrap();
    assert_eq!(color.to_ints(), [0, 2, 4]);

    color
        .from_fractions_with(r, g, b, Rounding::HalfAwayFromZero)
        .unwrap();
    assert_eq!(color.to_ints(), [1, 3, 5]);
}

#[test]
fn test_average() {
    assert_eq!(rgb(0, 0, 0).average(), 0);
    assert_eq!(rgb(255, 255, 255).average(), 255);
    assert_eq!(rgb(1, 2, 3).average(), 2);
    assert_eq!(rgb(1, 2, 2).average(), 2);
    assert_eq!(rgb(0, 0, 1).average(), 0);
    assert_eq!(rgb(0, 1, 1).average(), 1);
}

#[test]
fn test_to_grayscale_uses_average() {
    assert_eq!(rgb(30, 60, 90).to_grayscale(), gray(60));
    assert_eq!(rgb(255, 0, 0).to_grayscale(), gray(85));
}

#[test]
fn test_from_grayscale() {
    let mut color = rgb(9, 8, 7);
    color.from_grayscale(&gray(42));
    assert_eq!(color.to_ints(), [42, 42, 42]);
}

#[test]
fn test_uniform_channels_round_trip() {
    for v in 0..=255 {
        let color = Rgb::new(v, v, v).unwrap();
        assert_eq!(i32::from(color.to_grayscale().to_int()), v);
    }
}
