//! Behavior shared by the decimal-backed money types.
//!
//! [`DecimalBacked`] covers anything wrapping one clamped decimal;
//! [`MonetaryAmount`] adds the currency-aware operations that only make sense
//! for amounts (not for percentages). Operator impls are generated by
//! [`impl_amount_ops!`].

use rust_decimal::Decimal;

use super::descriptor::Currency;
use super::percentage::Percentage;
use crate::decimal::{
    self, RoundingMode, clamp_precision, divide, round, round_to_denomination,
};
use crate::format::{FormatOptions, default_locale, format_decimal};

/// A value type wrapping a single precision-clamped decimal.
///
/// Implementors must clamp in [`DecimalBacked::with_value`]; every derived
/// operation builds its result through it.
pub trait DecimalBacked: Sized {
    /// Returns the wrapped decimal.
    fn value(&self) -> Decimal;

    /// Builds a value of the same kind (and currency, if any) around `value`.
    #[must_use]
    fn with_value(&self, value: Decimal) -> Self;

    /// Rounds to `scale` fractional digits.
    #[must_use]
    fn rounding_to_scale(&self, scale: i32, mode: RoundingMode) -> Self {
        self.with_value(round(self.value(), scale, mode))
    }

    /// Rounds in place to `scale` fractional digits.
    fn round_to_scale(&mut self, scale: i32, mode: RoundingMode) {
        *self = self.rounding_to_scale(scale, mode);
    }

    /// Returns the absolute value.
    #[must_use]
    fn abs(&self) -> Self {
        self.with_value(self.value().abs())
    }

    /// Returns the value with its sign flipped.
    #[must_use]
    fn negated(&self) -> Self {
        self.with_value(-self.value())
    }

    /// Flips the sign in place.
    fn negate(&mut self) {
        *self = self.negated();
    }

    /// Adds `other` in place.
    ///
    /// # Panics
    ///
    /// Panics if the exact sum is not representable.
    fn add(&mut self, other: &Self) {
        *self = self.with_value(decimal::add(self.value(), other.value()));
    }

    /// Subtracts `other` in place.
    ///
    /// # Panics
    ///
    /// Panics if the exact difference is not representable.
    fn subtract(&mut self, other: &Self) {
        *self = self.with_value(decimal::subtract(self.value(), other.value()));
    }

    /// Multiplies by a dimensionless factor in place.
    ///
    /// # Panics
    ///
    /// Panics if the exact product is not representable.
    fn multiply_by(&mut self, factor: Decimal) {
        *self = self.with_value(decimal::multiply(self.value(), factor));
    }

    /// Divides by a dimensionless divisor in place.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    fn divide_by(&mut self, divisor: Decimal) {
        *self = self.with_value(divide(self.value(), divisor));
    }

    /// Returns true if the value is zero.
    fn is_zero(&self) -> bool {
        self.value().is_zero()
    }

    /// Returns true if the value is below zero.
    fn is_negative(&self) -> bool {
        self.value() < Decimal::ZERO
    }

    /// Compares values only, ignoring any currency.
    fn is_equal(&self, other: &Self) -> bool {
        self.value() == other.value()
    }

    /// Returns true if this value is below `other`.
    fn is_less_than(&self, other: &Self) -> bool {
        self.value() < other.value()
    }

    /// Returns true if this value is at most `other`.
    fn is_less_than_or_equal_to(&self, other: &Self) -> bool {
        self.value() <= other.value()
    }
}

/// An amount of money: rounds to a currency, applies percentages and formats.
pub trait MonetaryAmount: DecimalBacked {
    /// Rounds to the scale of `currency`.
    #[must_use]
    fn rounding(&self, mode: RoundingMode, currency: &Currency) -> Self {
        self.rounding_to_scale(currency.scale(), mode)
    }

    /// Rounds in place to the scale of `currency`.
    fn round(&mut self, mode: RoundingMode, currency: &Currency) {
        *self = self.rounding(mode, currency);
    }

    /// Rounds to a whole multiple of the smallest denomination of `currency`
    /// (cash rounding). A currency without denominations rounds to units of 1.
    #[must_use]
    fn rounding_to_smallest_denomination(&self, mode: RoundingMode, currency: &Currency) -> Self {
        let denomination = currency.smallest_denomination().unwrap_or(Decimal::ONE);
        self.with_value(round_to_denomination(self.value(), denomination, mode))
    }

    /// Cash-rounds in place; see [`MonetaryAmount::rounding_to_smallest_denomination`].
    fn round_to_smallest_denomination(&mut self, mode: RoundingMode, currency: &Currency) {
        *self = self.rounding_to_smallest_denomination(mode, currency);
    }

    /// Returns `value * (1 + percentage)`.
    #[must_use]
    fn adding(&self, percentage: Percentage) -> Self {
        let factor = decimal::add(Decimal::ONE, percentage.value());
        self.with_value(decimal::multiply(self.value(), factor))
    }

    /// Adds `percentage` of the value in place.
    fn add_percentage(&mut self, percentage: Percentage) {
        *self = self.adding(percentage);
    }

    /// Splits a total into the base it was computed from and the percentage
    /// part added on top, e.g. a gross price into net price and VAT.
    ///
    /// The base is clamped first and the percentage part is the exact
    /// remainder, so `base + part` always equals the total.
    ///
    /// # Panics
    ///
    /// Panics if `percentage` is exactly -100%.
    fn percentage_parts(&self, percentage: Percentage) -> (Self, Self) {
        let total = self.value();
        let base = clamp_precision(divide(total, decimal::add(Decimal::ONE, percentage.value())));
        (self.with_value(base), self.with_value(decimal::subtract(total, base)))
    }

    /// Formats the value for display in `currency`.
    ///
    /// The currency's scale and the default locale apply unless overridden
    /// in `options`. A negative scale displays no fractional digits.
    fn formatted(&self, currency: &Currency, options: &FormatOptions) -> String {
        let scale = options.fixed_scale.unwrap_or_else(|| currency.scale());
        let digits = u32::try_from(scale).unwrap_or(0);
        let suffix = if options.show_currency_code {
            format!(" {}", currency.code())
        } else {
            String::new()
        };

        let fallback;
        let locale = match &options.fixed_locale {
            Some(locale) => locale,
            None => {
                fallback = default_locale();
                &fallback
            }
        };
        format_decimal(self.value(), digits, locale, options.format_width, &suffix)
    }
}

/// Implements the arithmetic operator families for a [`DecimalBacked`] type.
///
/// Same-type `+ -`, scaling by `Decimal` and `i64` from either side, unary
/// `-`, and `T / T` yielding the dimensionless ratio. Sums, differences and
/// products panic instead of rounding when the exact result does not fit.
/// Requires [`DecimalBacked`] in scope at the invocation site.
macro_rules! impl_amount_ops {
    ($t:ty) => {
        impl ::std::ops::Add for $t {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                self.with_value($crate::decimal::add(self.value(), rhs.value()))
            }
        }

        impl ::std::ops::AddAssign for $t {
            fn add_assign(&mut self, rhs: Self) {
                *self = self.with_value($crate::decimal::add(self.value(), rhs.value()));
            }
        }

        impl ::std::ops::Sub for $t {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                self.with_value($crate::decimal::subtract(self.value(), rhs.value()))
            }
        }

        impl ::std::ops::SubAssign for $t {
            fn sub_assign(&mut self, rhs: Self) {
                *self = self.with_value($crate::decimal::subtract(self.value(), rhs.value()));
            }
        }

        impl ::std::ops::Neg for $t {
            type Output = Self;

            fn neg(self) -> Self {
                self.negated()
            }
        }

        impl ::std::ops::Mul<::rust_decimal::Decimal> for $t {
            type Output = Self;

            fn mul(self, rhs: ::rust_decimal::Decimal) -> Self {
                self.with_value($crate::decimal::multiply(self.value(), rhs))
            }
        }

        impl ::std::ops::MulAssign<::rust_decimal::Decimal> for $t {
            fn mul_assign(&mut self, rhs: ::rust_decimal::Decimal) {
                *self = self.with_value($crate::decimal::multiply(self.value(), rhs));
            }
        }

        impl ::std::ops::Mul<$t> for ::rust_decimal::Decimal {
            type Output = $t;

            fn mul(self, rhs: $t) -> $t {
                rhs.with_value($crate::decimal::multiply(self, rhs.value()))
            }
        }

        impl ::std::ops::Div<::rust_decimal::Decimal> for $t {
            type Output = Self;

            fn div(self, rhs: ::rust_decimal::Decimal) -> Self {
                self.with_value($crate::decimal::divide(self.value(), rhs))
            }
        }

        impl ::std::ops::DivAssign<::rust_decimal::Decimal> for $t {
            fn div_assign(&mut self, rhs: ::rust_decimal::Decimal) {
                *self = self.with_value($crate::decimal::divide(self.value(), rhs));
            }
        }

        impl ::std::ops::Mul<i64> for $t {
            type Output = Self;

            fn mul(self, rhs: i64) -> Self {
                self * ::rust_decimal::Decimal::from(rhs)
            }
        }

        impl ::std::ops::MulAssign<i64> for $t {
            fn mul_assign(&mut self, rhs: i64) {
                *self *= ::rust_decimal::Decimal::from(rhs);
            }
        }

        impl ::std::ops::Mul<$t> for i64 {
            type Output = $t;

            fn mul(self, rhs: $t) -> $t {
                rhs * ::rust_decimal::Decimal::from(self)
            }
        }

        impl ::std::ops::Div<i64> for $t {
            type Output = Self;

            fn div(self, rhs: i64) -> Self {
                self / ::rust_decimal::Decimal::from(rhs)
            }
        }

        impl ::std::ops::DivAssign<i64> for $t {
            fn div_assign(&mut self, rhs: i64) {
                *self /= ::rust_decimal::Decimal::from(rhs);
            }
        }

        impl ::std::ops::Div for $t {
            type Output = ::rust_decimal::Decimal;

            fn div(self, rhs: Self) -> ::rust_decimal::Decimal {
                $crate::decimal::divide(self.value(), rhs.value())
            }
        }
    };
}

pub(crate) use impl_amount_ops;
