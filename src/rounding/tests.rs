use rust_decimal_macros::dec;

use crate::rounding::RoundMode;

#[test]
fn test_half_up() {
    assert_eq!(RoundMode::HalfUp.round(dec!(2.5), 0), dec!(3));
    assert_eq!(RoundMode::HalfUp.round(dec!(3.5), 0), dec!(4));
    assert_eq!(RoundMode::HalfUp.round(dec!(-2.5), 0), dec!(-3));
    assert_eq!(RoundMode::HalfUp.round(dec!(2.345), 2), dec!(2.35));
}

#[test]
fn test_half_down() {
    assert_eq!(RoundMode::HalfDown.round(dec!(2.5), 0), dec!(2));
    assert_eq!(RoundMode::HalfDown.round(dec!(3.5), 0), dec!(3));
    assert_eq!(RoundMode::HalfDown.round(dec!(-2.5), 0), dec!(-2));
    assert_eq!(RoundMode::HalfDown.round(dec!(2.345), 2), dec!(2.34));
}

#[test]
fn test_half_even() {
    assert_eq!(RoundMode::HalfEven.round(dec!(2.5), 0), dec!(2));
    assert_eq!(RoundMode::HalfEven.round(dec!(3.5), 0), dec!(4));
    assert_eq!(RoundMode::HalfEven.round(dec!(-2.5), 0), dec!(-2));
    assert_eq!(RoundMode::HalfEven.round(dec!(2.345), 2), dec!(2.34));
}

#[test]
fn test_half_odd() {
    assert_eq!(RoundMode::HalfOdd.round(dec!(2.5), 0), dec!(3));
    assert_eq!(RoundMode::HalfOdd.round(dec!(3.5), 0), dec!(3));
    assert_eq!(RoundMode::HalfOdd.round(dec!(4.5), 0), dec!(5));
    assert_eq!(RoundMode::HalfOdd.round(dec!(-2.5), 0), dec!(-3));
    assert_eq!(RoundMode::HalfOdd.round(dec!(-3.5), 0), dec!(-3));
    assert_eq!(RoundMode::HalfOdd.round(dec!(2.345), 2), dec!(2.35));
}

#[test]
fn test_non_midpoints_round_to_nearest_in_every_mode() {
    let modes = [
        RoundMode::HalfUp,
        RoundMode::HalfDown,
        RoundMode::HalfEven,
        RoundMode::HalfOdd,
    ];

    for mode in modes {
        assert_eq!(mode.round(dec!(2.4), 0), dec!(2));
        assert_eq!(mode.round(dec!(2.6), 0), dec!(3));
        assert_eq!(mode.round(dec!(1.234), 2), dec!(1.23));
        assert_eq!(mode.round(dec!(-1.236), 2), dec!(-1.24));
    }
}

#[test]
fn test_rounding_is_a_noop_within_precision() {
    assert_eq!(RoundMode::HalfUp.round(dec!(5.01), 2), dec!(5.01));
    assert_eq!(RoundMode::HalfOdd.round(dec!(7), 2), dec!(7));
}

#[test]
fn test_default_mode_is_half_up() {
    assert_eq!(RoundMode::default(), RoundMode::HalfUp);
}
