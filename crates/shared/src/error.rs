//! Application-wide error types.

use ducat_core::ConversionError;
use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input or configuration values are invalid.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The exchange rate table was rejected.
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conversion(_) => "CONVERSION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns the process exit code (BSD `sysexits` conventions).
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 65,
            Self::Internal(_) => 70,
            Self::Config(_) | Self::Conversion(_) => 78,
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
