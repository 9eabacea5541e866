//! Property-based tests for money value types and conversion.
//!
//! - Percentage decomposition sums back to the total exactly
//! - Conversion round trips within clamp precision
//! - The margin never favors the caller

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::{
    ConversionCalculator, Currency, CurrencyAmount, CurrencyCode, DecimalBacked,
    ForeignCurrencyAmount, MonetaryAmount, Percentage, RateTable,
};

/// Strategy to generate signed amounts with up to 7 fractional digits.
fn signed_amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000_000_000i64..10_000_000_000_000i64).prop_map(|raw| Decimal::new(raw, 7))
}

/// Strategy to generate positive amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate percentages from -99.99% to 500.00%.
fn percentage() -> impl Strategy<Value = Decimal> {
    (-9_999i64..=50_000i64).prop_map(|basis_points| Decimal::new(basis_points, 4))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate margins from 1.0000 to 1.5000.
fn margin() -> impl Strategy<Value = Decimal> {
    (10_000i64..=15_000i64).prop_map(|v| Decimal::new(v, 4))
}

fn dkk() -> Currency {
    Currency::new(CurrencyCode::DKK, vec![Decimal::new(5, 1)], 2)
}

fn eur() -> Currency {
    Currency::new(CurrencyCode::EUR, vec![Decimal::new(1, 2)], 2)
}

fn calculator(dkk_rate: Decimal, eur_rate: Decimal, margin: Decimal) -> ConversionCalculator {
    let rates: RateTable = [(CurrencyCode::DKK, dkk_rate), (CurrencyCode::EUR, eur_rate)]
        .into_iter()
        .collect();
    ConversionCalculator::new(rates, vec![dkk(), eur()], margin).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* total and percentage, `base + part` SHALL equal the total
    /// exactly.
    #[test]
    fn prop_percentage_parts_sum_to_total(total in signed_amount(), p in percentage()) {
        let total = CurrencyAmount::new(total);
        let (base, part) = total.percentage_parts(Percentage::new(p));
        prop_assert_eq!(base + part, total);
    }

    /// *For any* nonzero base, `part / base` SHALL equal the percentage up to
    /// the rounding introduced by clamping the base.
    #[test]
    fn prop_percentage_parts_ratio(total in positive_amount(), p in percentage()) {
        let percentage = Percentage::new(p);
        let (base, part) = CurrencyAmount::new(total).percentage_parts(percentage);
        prop_assume!(!base.is_zero());

        let clamp_error = Decimal::new(6, 8) * (Decimal::ONE + p.abs());
        let drift = (part.value() - base.value() * p).abs();
        prop_assert!(drift <= clamp_error, "drift {} exceeds {}", drift, clamp_error);
    }

    /// *For any* base, adding a percentage and decomposing again SHALL give
    /// back the base.
    #[test]
    fn prop_adding_then_decomposing(base in positive_amount(), p in percentage()) {
        let percentage = Percentage::new(p);
        let base = CurrencyAmount::new(base);
        let (recovered, _) = base.adding(percentage).percentage_parts(percentage);
        prop_assert!((recovered - base).value().abs() <= Decimal::new(1, 7));
    }

    /// *For any* rates with margin 1, converting out of the base currency and
    /// back SHALL reproduce the amount within clamp precision.
    #[test]
    fn prop_conversion_round_trip(
        amount in positive_amount(),
        dkk_rate in positive_rate(),
        eur_rate in positive_rate(),
    ) {
        let calculator = calculator(dkk_rate, eur_rate, Decimal::ONE);
        let amount = CurrencyAmount::new(amount);

        let foreign = calculator.convert_from_base(amount, &dkk(), &eur());
        let back = calculator.convert_to_base(&foreign, &dkk());

        let tolerance = Decimal::new(1, 7) * (Decimal::ONE + dkk_rate / eur_rate);
        prop_assert!(
            (back - amount).value().abs() <= tolerance,
            "{} came back as {}", amount, back
        );
    }

    /// *For any* margin, buying foreign currency SHALL cost at least as much
    /// and selling it SHALL yield at most as much as at margin 1.
    #[test]
    fn prop_margin_is_a_spread(
        amount in positive_amount(),
        dkk_rate in positive_rate(),
        eur_rate in positive_rate(),
        margin in margin(),
    ) {
        let neutral = calculator(dkk_rate, eur_rate, Decimal::ONE);
        let spread = calculator(dkk_rate, eur_rate, margin);

        let base = CurrencyAmount::new(amount);
        prop_assert!(
            spread.convert_from_base(base, &dkk(), &eur()).value()
                >= neutral.convert_from_base(base, &dkk(), &eur()).value()
        );

        let foreign = ForeignCurrencyAmount::new(amount, eur());
        prop_assert!(
            spread.convert_to_base(&foreign, &dkk()) <= neutral.convert_to_base(&foreign, &dkk())
        );
    }

    /// *For any* amounts, subtraction SHALL undo addition exactly.
    #[test]
    fn prop_add_sub_inverse(a in signed_amount(), b in signed_amount()) {
        let a = CurrencyAmount::new(a);
        let b = CurrencyAmount::new(b);
        prop_assert_eq!(a + b - b, a);
    }
}
