//! Exact decimal arithmetic with a controlled precision ceiling.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All values are `rust_decimal::Decimal`. Addition, subtraction and
//! multiplication either produce the exact result or fail: a result needing
//! more digits than the 96-bit mantissa holds is [`DecimalError::Inexact`],
//! never silently rounded. Division rounds to 28 significant digits.
//!
//! Money value types pass every stored value through [`clamp_precision`] so
//! repeated division cannot grow the fractional part without bound, and two
//! values equal to 7 decimals are bit-for-bit identical.

pub mod error;
pub mod rounding;

#[cfg(test)]
mod rounding_props;

use std::cmp::Ordering;

use rust_decimal::Decimal;

pub use error::DecimalError;
pub use rounding::{RoundingMode, round, round_to_denomination};

/// Fractional digits kept by money value types.
pub const CLAMP_SCALE: u32 = 7;

/// Rounds `value` to [`CLAMP_SCALE`] fractional digits using plain rounding.
///
/// The result is normalized: trailing zeros are stripped and negative zero
/// becomes zero.
#[must_use]
pub fn clamp_precision(value: Decimal) -> Decimal {
    clamp_precision_to(value, CLAMP_SCALE)
}

/// Rounds `value` to at most `max_fraction_digits` fractional digits using
/// plain rounding, then normalizes it.
#[must_use]
pub fn clamp_precision_to(value: Decimal, max_fraction_digits: u32) -> Decimal {
    value
        .round_dp_with_strategy(max_fraction_digits, RoundingMode::Plain.strategy_for(value))
        .normalize()
}

/// Adds two decimals exactly.
///
/// # Errors
///
/// Returns [`DecimalError::Overflow`] if the sum is out of range and
/// [`DecimalError::Inexact`] if it cannot be represented without rounding.
pub fn try_add(lhs: Decimal, rhs: Decimal) -> Result<Decimal, DecimalError> {
    let sum = lhs.checked_add(rhs).ok_or(DecimalError::Overflow)?;
    ensure_exact(sum, exact_sum(lhs, rhs))
}

/// Subtracts `rhs` from `lhs` exactly.
///
/// # Errors
///
/// As [`try_add`].
pub fn try_subtract(lhs: Decimal, rhs: Decimal) -> Result<Decimal, DecimalError> {
    let difference = lhs.checked_sub(rhs).ok_or(DecimalError::Overflow)?;
    ensure_exact(difference, exact_sum(lhs, -rhs))
}

/// Multiplies two decimals exactly.
///
/// # Errors
///
/// Returns [`DecimalError::Overflow`] if the product is out of range and
/// [`DecimalError::Inexact`] if it cannot be represented without rounding.
pub fn try_multiply(lhs: Decimal, rhs: Decimal) -> Result<Decimal, DecimalError> {
    let product = lhs.checked_mul(rhs).ok_or(DecimalError::Overflow)?;
    if lhs.is_zero() || rhs.is_zero() {
        return Ok(product);
    }
    ensure_exact(product, exact_product(lhs, rhs))
}

/// Adds two decimals.
///
/// # Panics
///
/// Panics if the sum overflows or is not exactly representable.
#[must_use]
pub fn add(lhs: Decimal, rhs: Decimal) -> Decimal {
    try_add(lhs, rhs).unwrap_or_else(|err| panic!("{err}: {lhs} + {rhs}"))
}

/// Subtracts `rhs` from `lhs`.
///
/// # Panics
///
/// Panics if the difference overflows or is not exactly representable.
#[must_use]
pub fn subtract(lhs: Decimal, rhs: Decimal) -> Decimal {
    try_subtract(lhs, rhs).unwrap_or_else(|err| panic!("{err}: {lhs} - {rhs}"))
}

/// Multiplies two decimals.
///
/// # Panics
///
/// Panics if the product overflows or is not exactly representable.
#[must_use]
pub fn multiply(lhs: Decimal, rhs: Decimal) -> Decimal {
    try_multiply(lhs, rhs).unwrap_or_else(|err| panic!("{err}: {lhs} * {rhs}"))
}

fn ensure_exact(result: Decimal, exact: Option<Decimal>) -> Result<Decimal, DecimalError> {
    match exact {
        Some(exact) if exact == result => Ok(result),
        _ => Err(DecimalError::Inexact),
    }
}

/// The exact sum, or `None` if it does not fit a `Decimal`.
///
/// Operands are normalized first, so when their scales differ the aligned
/// sum ends in a nonzero digit and an `i128` overflow means it cannot fit.
fn exact_sum(lhs: Decimal, rhs: Decimal) -> Option<Decimal> {
    let (lhs, rhs) = (lhs.normalize(), rhs.normalize());
    let scale = lhs.scale().max(rhs.scale());
    let align = |value: Decimal| {
        10_i128
            .checked_pow(scale - value.scale())
            .and_then(|factor| value.mantissa().checked_mul(factor))
    };
    let mantissa = align(lhs)?.checked_add(align(rhs)?)?;
    from_parts(mantissa, scale)
}

/// The exact product of two nonzero decimals, or `None` if it does not fit.
///
/// Factors of ten shared across the operands are cancelled against the
/// scale before multiplying, leaving a mantissa with no trailing zero.
fn exact_product(lhs: Decimal, rhs: Decimal) -> Option<Decimal> {
    let mut parts = [lhs.mantissa().unsigned_abs(), rhs.mantissa().unsigned_abs()];
    let mut scale = lhs.scale() + rhs.scale();
    while scale > 0 {
        let Some(two) = parts.iter().position(|part| part % 2 == 0) else {
            break;
        };
        let Some(five) = parts.iter().position(|part| part % 5 == 0) else {
            break;
        };
        parts[two] /= 2;
        parts[five] /= 5;
        scale -= 1;
    }
    let magnitude = i128::try_from(parts[0].checked_mul(parts[1])?).ok()?;
    let negative = lhs.is_sign_negative() != rhs.is_sign_negative();
    from_parts(if negative { -magnitude } else { magnitude }, scale)
}

fn from_parts(mut mantissa: i128, mut scale: u32) -> Option<Decimal> {
    if mantissa == 0 {
        return Some(Decimal::ZERO);
    }
    while scale > 0 && mantissa % 10 == 0 {
        mantissa /= 10;
        scale -= 1;
    }
    Decimal::try_from_i128_with_scale(mantissa, scale).ok()
}

/// Divides `lhs` by `rhs`.
///
/// The quotient is rounded to the full 28-digit internal precision, which is
/// always finer than [`CLAMP_SCALE`].
pub fn try_divide(lhs: Decimal, rhs: Decimal) -> Result<Decimal, DecimalError> {
    if rhs.is_zero() {
        return Err(DecimalError::DivisionByZero);
    }
    lhs.checked_div(rhs).ok_or(DecimalError::Overflow)
}

/// Divides `lhs` by `rhs`.
///
/// # Panics
///
/// Panics if `rhs` is zero or the quotient overflows. Both indicate a logic
/// error upstream and must never be coerced into a default value.
#[must_use]
pub fn divide(lhs: Decimal, rhs: Decimal) -> Decimal {
    try_divide(lhs, rhs).unwrap_or_else(|err| panic!("{err}: {lhs} / {rhs}"))
}

/// Compares two decimals numerically.
#[must_use]
pub fn compare(lhs: Decimal, rhs: Decimal) -> Ordering {
    lhs.cmp(&rhs)
}
