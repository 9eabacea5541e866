//! Application configuration management.
//!
//! Sources, later ones overriding earlier ones:
//! 1. `config/default.{toml,...}` (optional)
//! 2. `config/{RUN_MODE}.{toml,...}` (optional, `RUN_MODE` defaults to `development`)
//! 3. Environment variables prefixed `DUCAT`, nested with `__`,
//!    e.g. `DUCAT__CONVERSION__MARGIN=1.02`
//!
//! Currency codes are normalized to uppercase.

use std::collections::HashMap;

use ducat_core::{ConversionCalculator, Currency, CurrencyCode, Locale};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Display configuration.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Conversion configuration.
    #[serde(default)]
    pub conversion: ConversionConfig,
    /// Currencies available for conversion.
    #[serde(default)]
    pub currencies: Vec<CurrencyConfig>,
}

/// Display configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayConfig {
    /// Locale identifier such as `da` or `en_US`. Unset uses the process
    /// locale.
    pub locale: Option<String>,
}

/// Conversion configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversionConfig {
    /// Code of the home currency.
    #[serde(default = "default_base_currency")]
    pub base_currency: String,
    /// Exchange rate margin, at least 1.
    #[serde(default = "default_margin")]
    pub margin: Decimal,
    /// Exchange rates keyed by currency code.
    #[serde(default)]
    pub rates: HashMap<String, Decimal>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            base_currency: default_base_currency(),
            margin: default_margin(),
            rates: HashMap::new(),
        }
    }
}

fn default_base_currency() -> String {
    "DKK".to_string()
}

fn default_margin() -> Decimal {
    Decimal::ONE
}

/// A configured currency.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyConfig {
    /// Currency code.
    pub code: String,
    /// Cash denominations; any order.
    #[serde(default)]
    pub denominations: Vec<Decimal>,
    /// Display scale.
    #[serde(default = "default_scale")]
    pub scale: i32,
}

fn default_scale() -> i32 {
    2
}

impl CurrencyConfig {
    /// Builds the core currency descriptor.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a denomination is zero or negative.
    pub fn to_currency(&self) -> AppResult<Currency> {
        if let Some(bad) = self.denominations.iter().find(|d| **d <= Decimal::ZERO) {
            return Err(AppError::Validation(format!(
                "Denomination {bad} of {} must be positive",
                self.code
            )));
        }
        Ok(Currency::new(
            normalize_code(&self.code),
            self.denominations.clone(),
            self.scale,
        ))
    }
}

fn normalize_code(code: &str) -> CurrencyCode {
    CurrencyCode::new(&code.trim().to_uppercase())
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("DUCAT").separator("__"))
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        tracing::debug!(
            run_mode = %run_mode,
            currencies = loaded.currencies.len(),
            rates = loaded.conversion.rates.len(),
            "Configuration loaded"
        );
        Ok(loaded)
    }

    /// Parses configuration from a TOML document, without other sources.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed.
    pub fn from_toml(document: &str) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(document, config::FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Returns the configured display locale, or the process locale.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.display
            .locale
            .as_deref()
            .map_or_else(Locale::current, Locale::from_identifier)
    }

    /// Builds the configured currency descriptors.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a denomination is not positive.
    pub fn currency_descriptors(&self) -> AppResult<Vec<Currency>> {
        self.currencies.iter().map(CurrencyConfig::to_currency).collect()
    }

    /// Returns the code of the home currency.
    #[must_use]
    pub fn base_currency_code(&self) -> CurrencyCode {
        normalize_code(&self.conversion.base_currency)
    }

    /// Builds a validated conversion calculator from the rates, currencies and
    /// margin.
    ///
    /// # Errors
    ///
    /// Returns a validation error for bad denominations and a conversion
    /// error if the rate table is rejected.
    pub fn calculator(&self) -> AppResult<ConversionCalculator> {
        let rates: HashMap<CurrencyCode, Decimal> = self
            .conversion
            .rates
            .iter()
            .map(|(code, rate)| (normalize_code(code), *rate))
            .collect();

        Ok(ConversionCalculator::from_rates(
            rates,
            self.currency_descriptors()?,
            self.conversion.margin,
        )?)
    }
}
