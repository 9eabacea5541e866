//! Amount bound to an explicit currency.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use rust_decimal::Decimal;

use super::descriptor::Currency;
use super::traits::{DecimalBacked, MonetaryAmount, impl_amount_ops};
use crate::decimal::{RoundingMode, clamp_precision};
use crate::format::FormatOptions;

/// An amount denominated in a specific, shared [`Currency`].
///
/// Equality and hashing consider the clamped value and the currency code;
/// denominations and scale do not participate. Arithmetic between two
/// foreign amounts keeps the left operand's currency and does not check that
/// the currencies match.
#[derive(Debug, Clone)]
pub struct ForeignCurrencyAmount {
    value: Decimal,
    currency: Arc<Currency>,
}

impl ForeignCurrencyAmount {
    /// Creates an amount in `currency`, clamping `value` to 7 fractional digits.
    #[must_use]
    pub fn new(value: Decimal, currency: impl Into<Arc<Currency>>) -> Self {
        Self {
            value: clamp_precision(value),
            currency: currency.into(),
        }
    }

    /// Returns the currency this amount is denominated in.
    #[must_use]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns the shared handle to the currency.
    #[must_use]
    pub fn shared_currency(&self) -> Arc<Currency> {
        Arc::clone(&self.currency)
    }

    /// Rounds to the scale of the amount's own currency.
    #[must_use]
    pub fn rounding_in_own_currency(&self, mode: RoundingMode) -> Self {
        self.rounding(mode, &self.currency)
    }

    /// Rounds in place to the scale of the amount's own currency.
    pub fn round_in_own_currency(&mut self, mode: RoundingMode) {
        *self = self.rounding_in_own_currency(mode);
    }

    /// Cash-rounds to the smallest denomination of the amount's own currency.
    #[must_use]
    pub fn rounding_to_own_smallest_denomination(&self, mode: RoundingMode) -> Self {
        self.rounding_to_smallest_denomination(mode, &self.currency)
    }

    /// Cash-rounds in place to the smallest denomination of the amount's own
    /// currency.
    pub fn round_to_own_smallest_denomination(&mut self, mode: RoundingMode) {
        *self = self.rounding_to_own_smallest_denomination(mode);
    }

    /// Formats in the amount's own currency.
    #[must_use]
    pub fn formatted_in_own_currency(&self, options: &FormatOptions) -> String {
        self.formatted(&self.currency, options)
    }
}

impl DecimalBacked for ForeignCurrencyAmount {
    fn value(&self) -> Decimal {
        self.value
    }

    fn with_value(&self, value: Decimal) -> Self {
        Self::new(value, Arc::clone(&self.currency))
    }
}

impl MonetaryAmount for ForeignCurrencyAmount {}

impl_amount_ops!(ForeignCurrencyAmount);

impl PartialEq for ForeignCurrencyAmount {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.currency.code() == other.currency.code()
    }
}

impl Eq for ForeignCurrencyAmount {}

impl Hash for ForeignCurrencyAmount {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.currency.code().hash(state);
    }
}

/// Formats in the amount's own currency, without the code, in the default
/// locale.
impl fmt::Display for ForeignCurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted_in_own_currency(&FormatOptions::default()))
    }
}
