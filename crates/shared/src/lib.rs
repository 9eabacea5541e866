//! Shared errors and configuration for Ducat.
//!
//! This crate provides the ambient pieces binaries need around the core:
//! - Application-wide error types
//! - Configuration management (files + environment)

pub mod config;
pub mod error;

pub use config::{AppConfig, ConversionConfig, CurrencyConfig, DisplayConfig};
pub use error::{AppError, AppResult};
