//! Property-based tests for the rounding engine and precision clamp.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::rounding::{RoundingMode, round, round_to_denomination};
use super::{clamp_precision, divide};

/// Strategy to generate signed values with up to 6 fractional digits.
fn signed_value() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..1_000_000_000_000i64).prop_map(|raw| Decimal::new(raw, 6))
}

/// Strategy to generate values with up to 20 fractional digits.
fn fine_value() -> impl Strategy<Value = Decimal> {
    (any::<i64>(), 0u32..=20).prop_map(|(raw, scale)| Decimal::new(raw, scale))
}

/// Strategy to generate target scales (0 to 4).
fn target_scale() -> impl Strategy<Value = i32> {
    0i32..=4
}

/// Strategy to generate a rounding mode.
fn rounding_mode() -> impl Strategy<Value = RoundingMode> {
    prop_oneof![
        Just(RoundingMode::Plain),
        Just(RoundingMode::Up),
        Just(RoundingMode::Down),
        Just(RoundingMode::Positive),
        Just(RoundingMode::Negative),
    ]
}

/// Strategy to generate cash denominations.
fn denomination() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        Just(Decimal::new(1, 3)),
        Just(Decimal::new(1, 2)),
        Just(Decimal::new(5, 2)),
        Just(Decimal::new(5, 1)),
        Just(Decimal::ONE),
        Just(Decimal::new(25, 0)),
    ]
}

fn unit(scale: i32) -> Decimal {
    Decimal::new(1, scale.unsigned_abs())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Up never rounds below the value, down never above, and both stay
    /// within one unit of the target scale.
    #[test]
    fn prop_up_and_down_bracket_value(value in signed_value(), scale in target_scale()) {
        let up = round(value, scale, RoundingMode::Up);
        let down = round(value, scale, RoundingMode::Down);

        prop_assert!(up >= value);
        prop_assert!(value >= down);
        prop_assert!(up - value < unit(scale));
        prop_assert!(value - down < unit(scale));
    }

    /// Every mode produces a value representable at the target scale.
    #[test]
    fn prop_result_has_target_scale(
        value in signed_value(),
        scale in target_scale(),
        mode in rounding_mode(),
    ) {
        let rounded = round(value, scale, mode);
        prop_assert_eq!(round(rounded, scale, RoundingMode::Down), rounded);
        prop_assert!(rounded.normalize().scale() <= scale.unsigned_abs());
    }

    /// Off-tie inputs round identically under the three nearest modes.
    #[test]
    fn prop_nearest_modes_agree_off_tie(value in signed_value(), scale in target_scale()) {
        let doubled = value * Decimal::TWO;
        let is_tie = round(doubled, scale, RoundingMode::Down) == doubled
            && round(value, scale, RoundingMode::Down) != value;
        prop_assume!(!is_tie);

        let plain = round(value, scale, RoundingMode::Plain);
        prop_assert_eq!(round(value, scale, RoundingMode::Positive), plain);
        prop_assert_eq!(round(value, scale, RoundingMode::Negative), plain);
    }

    /// Exact ties: plain moves away from zero, positive toward +inf,
    /// negative toward -inf.
    #[test]
    fn prop_tie_break_directions(units in -1_000_000i64..1_000_000, scale in target_scale()) {
        let half = unit(scale) / Decimal::TWO;
        let value = Decimal::new(units, scale.unsigned_abs()) + half;

        let above = Decimal::new(units, scale.unsigned_abs()) + unit(scale);
        let below = Decimal::new(units, scale.unsigned_abs());

        prop_assert_eq!(round(value, scale, RoundingMode::Positive), above);
        prop_assert_eq!(round(value, scale, RoundingMode::Negative), below);

        let away = if value.is_sign_negative() { below } else { above };
        prop_assert_eq!(round(value, scale, RoundingMode::Plain), away);
    }

    /// Denomination rounding equals rounding the quotient to an integer and
    /// scaling back.
    #[test]
    fn prop_denomination_rounding_matches_definition(
        value in signed_value(),
        denomination in denomination(),
        mode in rounding_mode(),
    ) {
        let expected = round(divide(value, denomination), 0, mode) * denomination;
        prop_assert_eq!(round_to_denomination(value, denomination, mode), expected);
    }

    /// Clamping twice is the same as clamping once.
    #[test]
    fn prop_clamp_is_idempotent(value in fine_value()) {
        let once = clamp_precision(value);
        let twice = clamp_precision(once);
        prop_assert_eq!(once, twice);
        prop_assert_eq!(once.serialize(), twice.serialize());
        prop_assert!(once.scale() <= super::CLAMP_SCALE);
    }
}
