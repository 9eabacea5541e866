//! Percentage value type: `0.25` is 25%.

use std::fmt;
use std::iter::Sum;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::amount::CurrencyAmount;
use super::traits::{DecimalBacked, impl_amount_ops};
use crate::decimal::{RoundingMode, clamp_precision, divide, multiply, round};
use crate::format::{Locale, default_locale, format_decimal};

/// Widest scale tried by [`Percentage::formatted_autoscaled`].
const AUTOSCALE_MAX: u32 = 10;

/// A fraction such as a tax or discount rate, stored as a clamped decimal.
///
/// Serialized as a single decimal numeral.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Percentage {
    value: Decimal,
}

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self {
        value: Decimal::ZERO,
    };

    /// Creates a percentage from a fraction (`0.25` for 25%).
    #[must_use]
    pub fn new(value: Decimal) -> Self {
        Self {
            value: clamp_precision(value),
        }
    }

    /// Renders `value * 100` with `scale` fractional digits and a `%` sign,
    /// in the default locale.
    #[must_use]
    pub fn description(&self, scale: u32) -> String {
        self.formatted_in(scale, &default_locale())
    }

    /// Same as [`Percentage::description`].
    #[must_use]
    pub fn formatted(&self, scale: u32) -> String {
        self.description(scale)
    }

    /// Renders `value * 100` with `scale` fractional digits in `locale`.
    #[must_use]
    pub fn formatted_in(&self, scale: u32, locale: &Locale) -> String {
        format_decimal(self.value * Decimal::ONE_HUNDRED, scale, locale, None, "%")
    }

    /// Renders with the smallest scale in `min_scale..=max_scale` that shows
    /// the value exactly, or `max_scale` if none does.
    ///
    /// # Panics
    ///
    /// Panics if `min_scale > max_scale`.
    #[must_use]
    pub fn formatted_within(&self, min_scale: u32, max_scale: u32) -> String {
        self.formatted_within_in(min_scale, max_scale, &default_locale())
    }

    /// [`Percentage::formatted_within`] in an explicit locale.
    ///
    /// # Panics
    ///
    /// Panics if `min_scale > max_scale`.
    #[must_use]
    pub fn formatted_within_in(&self, min_scale: u32, max_scale: u32, locale: &Locale) -> String {
        assert!(
            min_scale <= max_scale,
            "max_scale ({max_scale}) must be greater than or equal to min_scale ({min_scale})"
        );
        let scale = (min_scale..=max_scale)
            .find(|&candidate| self.is_exact_at(candidate))
            .unwrap_or(max_scale);
        self.formatted_in(scale, locale)
    }

    /// Renders with the smallest scale up to 10 that shows the value exactly.
    #[must_use]
    pub fn formatted_autoscaled(&self) -> String {
        self.formatted_within(0, AUTOSCALE_MAX)
    }

    /// A percent scale of `s` shows `s + 2` digits of the fraction.
    fn is_exact_at(&self, percent_scale: u32) -> bool {
        let fraction_scale = i32::try_from(percent_scale + 2).unwrap_or(i32::MAX);
        round(self.value, fraction_scale, RoundingMode::Plain) == self.value
    }
}

impl DecimalBacked for Percentage {
    fn value(&self) -> Decimal {
        self.value
    }

    fn with_value(&self, value: Decimal) -> Self {
        Self::new(value)
    }
}

impl_amount_ops!(Percentage);

impl std::ops::Mul<CurrencyAmount> for Percentage {
    type Output = CurrencyAmount;

    fn mul(self, rhs: CurrencyAmount) -> CurrencyAmount {
        CurrencyAmount::new(multiply(self.value, rhs.value()))
    }
}

impl std::ops::Mul<Percentage> for CurrencyAmount {
    type Output = Self;

    fn mul(self, rhs: Percentage) -> Self {
        Self::new(multiply(self.value(), rhs.value))
    }
}

impl std::ops::Div<Percentage> for CurrencyAmount {
    type Output = Self;

    fn div(self, rhs: Percentage) -> Self {
        Self::new(divide(self.value(), rhs.value))
    }
}

impl Sum for Percentage {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::new(iter.map(|p| p.value).sum())
    }
}

impl From<Decimal> for Percentage {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl From<i64> for Percentage {
    fn from(value: i64) -> Self {
        Self::new(Decimal::from(value))
    }
}

impl From<Percentage> for Decimal {
    fn from(percentage: Percentage) -> Self {
        percentage.value
    }
}

impl FromStr for Percentage {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Self::new)
    }
}

impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::arbitrary_precision::serialize(&self.value, serializer)
    }
}

impl<'de> Deserialize<'de> for Percentage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        rust_decimal::serde::arbitrary_precision::deserialize(deserializer).map(Self::new)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description(0))
    }
}
