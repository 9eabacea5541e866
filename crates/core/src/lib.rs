//! Core money arithmetic for Ducat.
//!
//! This crate contains pure computation with ZERO I/O: every operation works
//! on in-memory values and never blocks.
//!
//! # Modules
//!
//! - `decimal` - Clamped decimal arithmetic and the rounding engine
//! - `currency` - Currency codes, money value types and conversion
//! - `format` - Locale-aware display of amounts

pub mod currency;
pub mod decimal;
pub mod format;

pub use currency::{
    ConversionCalculator, ConversionError, Currency, CurrencyAmount, CurrencyCode, DecimalBacked,
    ForeignCurrencyAmount, IntoCurrencyAmount, MonetaryAmount, Percentage, PredefinedCurrencyCode,
    RateTable,
};
pub use decimal::{DecimalError, RoundingMode};
pub use format::{FormatOptions, Locale};
