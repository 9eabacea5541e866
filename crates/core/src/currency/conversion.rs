//! Currency conversion between a base currency and foreign currencies.
//!
//! CRITICAL: All validation happens once, in [`ConversionCalculator::new`].
//! Rates, currencies and margin never change afterwards, so one calculator
//! can be shared across threads and conversions cannot fail at the point of
//! use. Asking for a currency the calculator does not cover is a logic error
//! and panics rather than returning a wrong amount.
//!
//! The margin is a spread applied in both directions: converting into the
//! base currency divides by it, converting out of it multiplies by it.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::amount::CurrencyAmount;
use super::code::CurrencyCode;
use super::descriptor::Currency;
use super::error::ConversionError;
use super::exchange::RateTable;
use super::foreign::ForeignCurrencyAmount;
use super::traits::DecimalBacked;
use crate::decimal::{divide, multiply};

/// Validated, immutable currency conversion context.
#[derive(Debug, Clone)]
pub struct ConversionCalculator {
    rates: RateTable,
    currencies: Vec<Currency>,
    margin: Decimal,
}

impl ConversionCalculator {
    /// Creates a calculator.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - [`ConversionError::BadExchangeRateMargin`] if `margin < 1`
    /// - [`ConversionError::NoExchangeRate`] for the first currency in
    ///   `currencies` without a rate
    /// - [`ConversionError::ExchangeRatesMustBePositive`] if any rate is zero
    ///   or negative
    pub fn new(
        rates: impl Into<RateTable>,
        currencies: Vec<Currency>,
        margin: Decimal,
    ) -> Result<Self, ConversionError> {
        let rates = rates.into();

        if let Err(err) = Self::validate(&rates, &currencies, margin) {
            tracing::warn!(
                error = %err,
                margin = %margin,
                rate_count = rates.len(),
                "Rejected exchange rate table"
            );
            return Err(err);
        }

        tracing::debug!(
            currency_count = currencies.len(),
            rate_count = rates.len(),
            margin = %margin,
            "Conversion calculator ready"
        );

        Ok(Self {
            rates,
            currencies,
            margin,
        })
    }

    /// Same as [`ConversionCalculator::new`] with a plain map of rates.
    ///
    /// # Errors
    ///
    /// See [`ConversionCalculator::new`].
    pub fn from_rates(
        rates: HashMap<CurrencyCode, Decimal>,
        currencies: Vec<Currency>,
        margin: Decimal,
    ) -> Result<Self, ConversionError> {
        Self::new(RateTable::new(rates), currencies, margin)
    }

    fn validate(
        rates: &RateTable,
        currencies: &[Currency],
        margin: Decimal,
    ) -> Result<(), ConversionError> {
        if margin < Decimal::ONE {
            return Err(ConversionError::BadExchangeRateMargin);
        }
        rates.ensure_covers(currencies)?;
        rates.ensure_positive()
    }

    /// Returns the rate table.
    #[must_use]
    pub const fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Returns the exchange rate margin.
    #[must_use]
    pub const fn margin(&self) -> Decimal {
        self.margin
    }

    /// Returns the currencies this calculator was built with.
    #[must_use]
    pub fn currencies(&self) -> &[Currency] {
        &self.currencies
    }

    /// Returns the rate for `code`.
    #[must_use]
    pub fn rate(&self, code: &CurrencyCode) -> Option<Decimal> {
        self.rates.rate(code)
    }

    /// Looks up a configured currency by code.
    #[must_use]
    pub fn currency(&self, code: &CurrencyCode) -> Option<&Currency> {
        self.currencies.iter().find(|currency| currency.code() == code)
    }

    /// Converts a foreign amount into `base`:
    /// `base_rate * value / (foreign_rate * margin)`.
    ///
    /// # Panics
    ///
    /// Panics if either currency has no rate or a rate product is not
    /// exactly representable.
    #[must_use]
    pub fn convert_to_base(&self, amount: &ForeignCurrencyAmount, base: &Currency) -> CurrencyAmount {
        let source_rate = self.covered_rate(amount.currency());
        let target_rate = self.covered_rate(base);

        let value = divide(
            multiply(target_rate, amount.value()),
            multiply(source_rate, self.margin),
        );
        CurrencyAmount::new(value)
    }

    /// Converts an amount in `base` into `target`:
    /// `margin * value * target_rate / base_rate`.
    ///
    /// # Panics
    ///
    /// Panics if `base` and `target` are the same currency, or if either has
    /// no rate.
    #[must_use]
    pub fn convert_from_base(
        &self,
        amount: CurrencyAmount,
        base: &Currency,
        target: &Currency,
    ) -> ForeignCurrencyAmount {
        if base == target {
            tracing::error!(currency = %base.code(), "Conversion of base currency to itself");
            panic!("Cannot convert base currency {} to itself", base.code());
        }
        let target_rate = self.covered_rate(target);
        let base_rate = self.covered_rate(base);

        let value = divide(
            multiply(multiply(self.margin, amount.value()), target_rate),
            base_rate,
        );
        ForeignCurrencyAmount::new(value, target.clone())
    }

    fn covered_rate(&self, currency: &Currency) -> Decimal {
        self.rates.rate(currency.code()).unwrap_or_else(|| {
            tracing::error!(
                currency = %currency.code(),
                "Conversion requested for a currency without exchange rate"
            );
            panic!(
                "No exchange rate for {}: currency is not covered by this calculator",
                currency.code()
            )
        })
    }
}

/// The empty calculator: no rates, no currencies, margin 1.
impl Default for ConversionCalculator {
    fn default() -> Self {
        Self {
            rates: RateTable::default(),
            currencies: Vec::new(),
            margin: Decimal::ONE,
        }
    }
}
