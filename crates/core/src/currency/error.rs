//! Conversion calculator error types.

use thiserror::Error;

use super::code::CurrencyCode;

/// Rejections raised while building a conversion calculator.
///
/// Conversions themselves never fail once a calculator exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The margin is below 1.
    #[error("Exchange rate margin must be at least 1")]
    BadExchangeRateMargin,

    /// A listed currency has no entry in the rate table.
    #[error("No exchange rate for currency {0}")]
    NoExchangeRate(CurrencyCode),

    /// A rate is zero or negative.
    #[error("Exchange rates must be positive")]
    ExchangeRatesMustBePositive,
}
