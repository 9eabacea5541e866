//! Locale-aware number formatting for money values.
//!
//! Callers supply a decimal, a fractional digit count, a locale and an
//! optional suffix; grouping and separators come from the locale.

pub mod locale;
pub mod number;

pub use locale::{Locale, default_locale, reset_default_locale, set_default_locale};
pub use number::{FormatOptions, format_decimal};
