//! Exchange rate table.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::code::CurrencyCode;
use super::descriptor::Currency;
use super::error::ConversionError;

/// Exchange rates keyed by currency code.
///
/// A rate states how many units of the currency equal one unit of the common
/// reference, so `{DKK: 7.5, EUR: 1}` means 7.5 DKK per EUR.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateTable {
    rates: HashMap<CurrencyCode, Decimal>,
}

impl RateTable {
    /// Creates a table. Rates are not validated until the table is handed to a
    /// [`ConversionCalculator`](super::ConversionCalculator).
    #[must_use]
    pub const fn new(rates: HashMap<CurrencyCode, Decimal>) -> Self {
        Self { rates }
    }

    /// Returns the rate for `code`.
    #[must_use]
    pub fn rate(&self, code: &CurrencyCode) -> Option<Decimal> {
        self.rates.get(code).copied()
    }

    /// Returns true if the table has a rate for `code`.
    #[must_use]
    pub fn contains(&self, code: &CurrencyCode) -> bool {
        self.rates.contains_key(code)
    }

    /// Number of rates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the table has no rates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterates over `(code, rate)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&CurrencyCode, Decimal)> {
        self.rates.iter().map(|(code, rate)| (code, *rate))
    }

    /// Fails with the first currency (in list order) that has no rate.
    pub(crate) fn ensure_covers(&self, currencies: &[Currency]) -> Result<(), ConversionError> {
        match currencies.iter().find(|currency| !self.contains(currency.code())) {
            Some(missing) => Err(ConversionError::NoExchangeRate(missing.code().clone())),
            None => Ok(()),
        }
    }

    pub(crate) fn ensure_positive(&self) -> Result<(), ConversionError> {
        if self.rates.values().all(|rate| *rate > Decimal::ZERO) {
            Ok(())
        } else {
            Err(ConversionError::ExchangeRatesMustBePositive)
        }
    }
}

impl From<HashMap<CurrencyCode, Decimal>> for RateTable {
    fn from(rates: HashMap<CurrencyCode, Decimal>) -> Self {
        Self::new(rates)
    }
}

impl FromIterator<(CurrencyCode, Decimal)> for RateTable {
    fn from_iter<I: IntoIterator<Item = (CurrencyCode, Decimal)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
