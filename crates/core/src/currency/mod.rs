//! Currencies, money value types and conversion.
//!
//! - [`CurrencyAmount`]: amount in the implicit home currency
//! - [`ForeignCurrencyAmount`]: amount bound to an explicit [`Currency`]
//! - [`Percentage`]: a fraction applied to amounts
//! - [`ConversionCalculator`]: validated rate table and margin
//!
//! Every value type clamps to 7 fractional digits on construction.

pub mod amount;
pub mod code;
pub mod conversion;
pub mod descriptor;
pub mod error;
pub mod exchange;
pub mod foreign;
pub mod iso;
pub mod percentage;
pub mod traits;

#[cfg(test)]
mod props;

pub use amount::{CurrencyAmount, IntoCurrencyAmount};
pub use code::{CurrencyCode, CustomCode};
pub use conversion::ConversionCalculator;
pub use descriptor::Currency;
pub use error::ConversionError;
pub use exchange::RateTable;
pub use foreign::ForeignCurrencyAmount;
pub use iso::PredefinedCurrencyCode;
pub use percentage::Percentage;
pub use traits::{DecimalBacked, MonetaryAmount};
