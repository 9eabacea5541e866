//! Currency codes: ISO 4217 or custom.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::iso::PredefinedCurrencyCode;

/// Identifies a currency.
///
/// Parsing never fails: strings matching an ISO 4217 code yield
/// [`CurrencyCode::Predefined`], anything else a [`CurrencyCode::Custom`].
/// Serialized as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CurrencyCode {
    /// A code from the ISO 4217 table.
    Predefined(PredefinedCurrencyCode),
    /// A code outside the ISO table.
    Custom(CustomCode),
}

/// Abbreviation of a currency outside the ISO 4217 table.
///
/// Only built by [`CurrencyCode::new`] and its conversions, so it never holds
/// an ISO abbreviation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomCode(String);

impl CustomCode {
    /// Returns the abbreviation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl CurrencyCode {
    /// Danish Krone.
    pub const DKK: Self = Self::Predefined(PredefinedCurrencyCode::DKK);
    /// Euro.
    pub const EUR: Self = Self::Predefined(PredefinedCurrencyCode::EUR);
    /// US Dollar.
    pub const USD: Self = Self::Predefined(PredefinedCurrencyCode::USD);
    /// No currency involved.
    pub const XXX: Self = Self::Predefined(PredefinedCurrencyCode::XXX);

    /// Creates a code from an abbreviation, preferring the ISO table.
    #[must_use]
    pub fn new(abbreviation: &str) -> Self {
        PredefinedCurrencyCode::from_abbreviation(abbreviation)
            .map_or_else(|| Self::Custom(CustomCode(abbreviation.to_string())), Self::Predefined)
    }

    /// Returns the abbreviation, e.g. `"DKK"`.
    #[must_use]
    pub fn abbreviation(&self) -> &str {
        match self {
            Self::Predefined(code) => code.as_str(),
            Self::Custom(custom) => custom.as_str(),
        }
    }

    /// Returns the currency name. Custom codes are named by their abbreviation.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Predefined(code) => code.name(),
            Self::Custom(custom) => custom.as_str(),
        }
    }

    /// Returns true if the code is in the ISO table.
    #[must_use]
    pub const fn is_predefined(&self) -> bool {
        matches!(self, Self::Predefined(_))
    }
}

impl From<PredefinedCurrencyCode> for CurrencyCode {
    fn from(code: PredefinedCurrencyCode) -> Self {
        Self::Predefined(code)
    }
}

impl From<&str> for CurrencyCode {
    fn from(abbreviation: &str) -> Self {
        Self::new(abbreviation)
    }
}

impl From<String> for CurrencyCode {
    fn from(abbreviation: String) -> Self {
        match PredefinedCurrencyCode::from_abbreviation(&abbreviation) {
            Some(code) => Self::Predefined(code),
            None => Self::Custom(CustomCode(abbreviation)),
        }
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        match code {
            CurrencyCode::Predefined(code) => code.as_str().to_string(),
            CurrencyCode::Custom(CustomCode(abbreviation)) => abbreviation,
        }
    }
}

impl FromStr for CurrencyCode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}
