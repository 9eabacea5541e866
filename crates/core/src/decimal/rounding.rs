//! Directional rounding to a target scale.
//!
//! Five modes are supported. `Up` and `Down` are unconditional ceiling and
//! floor. `Plain`, `Positive` and `Negative` all round to the nearest value
//! and differ only on an exact tie:
//!
//! | input | down | up | plain | positive | negative |
//! |-------|------|----|-------|----------|----------|
//! |  1.45 |  1.4 |  1.5 |  1.5 |  1.5 |  1.4 |
//! | -1.45 | -1.5 | -1.4 | -1.5 | -1.4 | -1.5 |
//!
//! Cash rounding ([`round_to_denomination`]) applies the same modes in units
//! of a currency's smallest coin or bill.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::{divide, multiply};

/// Rounding policy applied when reducing a value to a scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    /// Nearest; ties round away from zero.
    Plain,
    /// Toward positive infinity.
    Up,
    /// Toward negative infinity.
    Down,
    /// Nearest; ties round toward positive infinity.
    Positive,
    /// Nearest; ties round toward negative infinity.
    Negative,
}

impl RoundingMode {
    /// All modes, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Plain,
        Self::Up,
        Self::Down,
        Self::Positive,
        Self::Negative,
    ];

    /// Returns the `rust_decimal` strategy implementing this mode for `value`.
    ///
    /// The tie-break of `Positive` and `Negative` depends on the sign of the
    /// value being rounded.
    #[must_use]
    pub fn strategy_for(self, value: Decimal) -> RoundingStrategy {
        let negative = value.is_sign_negative();
        match self {
            Self::Plain => RoundingStrategy::MidpointAwayFromZero,
            Self::Up => RoundingStrategy::ToPositiveInfinity,
            Self::Down => RoundingStrategy::ToNegativeInfinity,
            Self::Positive if negative => RoundingStrategy::MidpointTowardZero,
            Self::Positive => RoundingStrategy::MidpointAwayFromZero,
            Self::Negative if negative => RoundingStrategy::MidpointAwayFromZero,
            Self::Negative => RoundingStrategy::MidpointTowardZero,
        }
    }

    /// Returns the lowercase name of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Up => "up",
            Self::Down => "down",
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoundingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            _ => Err(format!("Unknown rounding mode: {s}")),
        }
    }
}

/// Rounds `value` to `scale` fractional digits using `mode`.
///
/// A negative scale rounds to a power of ten left of the decimal point, so
/// `round(1234, -2, Plain)` is `1200`.
///
/// # Panics
///
/// Panics if the power of ten for a negative scale, or the rounded result,
/// does not fit in a `Decimal`.
#[must_use]
pub fn round(value: Decimal, scale: i32, mode: RoundingMode) -> Decimal {
    let strategy = mode.strategy_for(value);
    if let Ok(dp) = u32::try_from(scale) {
        return value.round_dp_with_strategy(dp, strategy);
    }

    let factor = power_of_ten(scale.unsigned_abs());
    let units = divide(value, factor).round_dp_with_strategy(0, strategy);
    units
        .checked_mul(factor)
        .unwrap_or_else(|| panic!("Rounding {value} to scale {scale} overflowed"))
}

/// Rounds `value` to a whole multiple of `denomination` using `mode`.
///
/// This is cash rounding: the value is expressed in units of the
/// denomination, rounded to an integer, and scaled back.
///
/// # Panics
///
/// Panics if `denomination` is zero.
#[must_use]
pub fn round_to_denomination(value: Decimal, denomination: Decimal, mode: RoundingMode) -> Decimal {
    let units = round(divide(value, denomination), 0, mode);
    multiply(units, denomination)
}

fn power_of_ten(exponent: u32) -> Decimal {
    (0..exponent)
        .try_fold(Decimal::ONE, |acc, _| acc.checked_mul(Decimal::TEN))
        .unwrap_or_else(|| panic!("10^{exponent} does not fit in a Decimal"))
}
