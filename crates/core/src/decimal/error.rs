//! Decimal arithmetic error types.

use thiserror::Error;

/// Errors raised by checked decimal arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecimalError {
    /// The divisor was zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// The result does not fit the decimal representation.
    #[error("Decimal overflow")]
    Overflow,

    /// The exact result needs more digits than the representation holds.
    #[error("Inexact decimal result")]
    Inexact,
}
