//! Amount in the implicit home currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! The currency is supplied per operation (rounding, formatting), never
//! stored.

use std::fmt;
use std::iter::Sum;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::descriptor::Currency;
use super::traits::{DecimalBacked, MonetaryAmount, impl_amount_ops};
use crate::decimal::clamp_precision;
use crate::format::FormatOptions;

/// An amount of money in the home currency.
///
/// The value is clamped to 7 fractional digits on construction and decode,
/// so equality and hashing are exact. Serialized as a single decimal numeral.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyAmount {
    value: Decimal,
}

impl CurrencyAmount {
    /// Zero.
    pub const ZERO: Self = Self {
        value: Decimal::ZERO,
    };

    /// Creates an amount, clamping `value` to 7 fractional digits.
    #[must_use]
    pub fn new(value: Decimal) -> Self {
        Self {
            value: clamp_precision(value),
        }
    }
}

impl DecimalBacked for CurrencyAmount {
    fn value(&self) -> Decimal {
        self.value
    }

    fn with_value(&self, value: Decimal) -> Self {
        Self::new(value)
    }
}

impl MonetaryAmount for CurrencyAmount {}

impl_amount_ops!(CurrencyAmount);

impl Sum for CurrencyAmount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::new(iter.map(|amount| amount.value).sum())
    }
}

impl<'a> Sum<&'a Self> for CurrencyAmount {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<Decimal> for CurrencyAmount {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl From<i64> for CurrencyAmount {
    fn from(value: i64) -> Self {
        Self::new(Decimal::from(value))
    }
}

impl From<CurrencyAmount> for Decimal {
    fn from(amount: CurrencyAmount) -> Self {
        amount.value
    }
}

impl FromStr for CurrencyAmount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Self::new)
    }
}

/// Formats with no currency (scale 0) in the default locale.
// Bare JSON number, written from the decimal digits. Decode also accepts a
// numeric string.
impl Serialize for CurrencyAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::arbitrary_precision::serialize(&self.value, serializer)
    }
}

impl<'de> Deserialize<'de> for CurrencyAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        rust_decimal::serde::arbitrary_precision::deserialize(deserializer).map(Self::new)
    }
}

impl fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted(&Currency::none(), &FormatOptions::default()))
    }
}

/// Builds a [`CurrencyAmount`] from a decimal.
pub trait IntoCurrencyAmount {
    /// Wraps `self` as a clamped [`CurrencyAmount`].
    fn currency_amount(self) -> CurrencyAmount;
}

impl IntoCurrencyAmount for Decimal {
    fn currency_amount(self) -> CurrencyAmount {
        CurrencyAmount::new(self)
    }
}
