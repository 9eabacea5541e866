//! Currency descriptor: code, cash denominations and display scale.

use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::code::CurrencyCode;
use super::iso::PredefinedCurrencyCode;

/// Describes a currency by its code, the denominations available for cash
/// payment and the scale (number of decimals) amounts are displayed with.
///
/// The scale cannot always be derived from the smallest denomination. The
/// smallest Norwegian cash unit is 1 NOK, yet øre still exist, so NOK has a
/// scale of 2. A negative scale rounds left of the decimal point.
///
/// Equality and hashing consider only the code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "CurrencyRecord")]
pub struct Currency {
    code: CurrencyCode,
    denominations: Vec<Decimal>,
    scale: i32,
}

#[derive(Deserialize)]
struct CurrencyRecord {
    code: CurrencyCode,
    #[serde(default)]
    denominations: Vec<Decimal>,
    scale: i32,
}

impl From<CurrencyRecord> for Currency {
    fn from(record: CurrencyRecord) -> Self {
        Self::new(record.code, record.denominations, record.scale)
    }
}

impl Currency {
    /// Creates a currency. Denominations are sorted ascending.
    #[must_use]
    pub fn new(code: impl Into<CurrencyCode>, mut denominations: Vec<Decimal>, scale: i32) -> Self {
        denominations.sort_unstable();
        Self {
            code: code.into(),
            denominations,
            scale,
        }
    }

    /// Creates a currency from a free-form abbreviation.
    #[must_use]
    pub fn custom(abbreviation: &str, denominations: Vec<Decimal>, scale: i32) -> Self {
        Self::new(CurrencyCode::new(abbreviation), denominations, scale)
    }

    /// The "no currency" descriptor: code `XXX`, no denominations, scale 0.
    #[must_use]
    pub fn none() -> Self {
        Self::new(PredefinedCurrencyCode::XXX, Vec::new(), 0)
    }

    /// Returns the currency code.
    #[must_use]
    pub const fn code(&self) -> &CurrencyCode {
        &self.code
    }

    /// Returns the denominations in ascending order.
    #[must_use]
    pub fn denominations(&self) -> &[Decimal] {
        &self.denominations
    }

    /// Returns the smallest denomination, used for cash rounding.
    #[must_use]
    pub fn smallest_denomination(&self) -> Option<Decimal> {
        self.denominations.first().copied()
    }

    /// Returns the display scale.
    #[must_use]
    pub const fn scale(&self) -> i32 {
        self.scale
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}
