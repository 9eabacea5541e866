//! Localized numeral rendering.

use rust_decimal::{Decimal, RoundingStrategy};

use super::locale::Locale;

/// Display options for money values.
///
/// Unset fields fall back to the currency's scale and the process-wide
/// default locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Append the currency code after the numeral, e.g. `1.000,25 DKK`.
    pub show_currency_code: bool,
    /// Minimum width of the output; shorter output is left-padded with spaces.
    pub format_width: Option<usize>,
    /// Overrides the currency's scale.
    pub fixed_scale: Option<i32>,
    /// Overrides the default locale.
    pub fixed_locale: Option<Locale>,
}

impl FormatOptions {
    /// Creates options with every override unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the currency code.
    #[must_use]
    pub const fn with_currency_code(mut self) -> Self {
        self.show_currency_code = true;
        self
    }

    /// Pads the output to at least `width` characters.
    #[must_use]
    pub const fn with_width(mut self, width: usize) -> Self {
        self.format_width = Some(width);
        self
    }

    /// Formats with `scale` fractional digits instead of the currency's scale.
    #[must_use]
    pub const fn with_scale(mut self, scale: i32) -> Self {
        self.fixed_scale = Some(scale);
        self
    }

    /// Formats with `locale` instead of the default locale.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.fixed_locale = Some(locale);
        self
    }
}

/// Renders `value` with `digits` fractional digits in `locale`.
///
/// The value is rounded half-to-even for display. The integer part is grouped
/// in threes. When `width` is given the result, suffix included, is
/// left-padded with spaces to that many characters; longer output is never
/// truncated.
#[must_use]
pub fn format_decimal(
    value: Decimal,
    digits: u32,
    locale: &Locale,
    width: Option<usize>,
    suffix: &str,
) -> String {
    let rounded = value.round_dp_with_strategy(digits, RoundingStrategy::MidpointNearestEven);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let plain = format!("{:.prec$}", rounded.abs(), prec = digits as usize);
    let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

    let mut out = String::with_capacity(plain.len() + plain.len() / 3 + suffix.len() + 1);
    if negative {
        out.push('-');
    }
    push_grouped(&mut out, integer, locale.grouping_separator());
    if !fraction.is_empty() {
        out.push(locale.decimal_separator());
        out.push_str(fraction);
    }
    out.push_str(suffix);

    match width {
        Some(width) => format!("{out:>width$}"),
        None => out,
    }
}

fn push_grouped(out: &mut String, digits: &str, separator: char) {
    let len = digits.len();
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(digit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(1234.5678), 3, "1.234,568")]
    #[case(dec!(1234.5), 0, "1.234")]
    #[case(dec!(1235.5), 0, "1.236")]
    #[case(dec!(1000.25), 2, "1.000,25")]
    #[case(dec!(1), 2, "1,00")]
    #[case(dec!(0.5), 0, "0")]
    #[case(dec!(-1234567.891), 2, "-1.234.567,89")]
    #[case(dec!(-0.001), 2, "0,00")]
    fn test_format_danish(#[case] value: Decimal, #[case] digits: u32, #[case] expected: &str) {
        assert_eq!(format_decimal(value, digits, &Locale::danish(), None, ""), expected);
    }

    #[test]
    fn test_format_english() {
        let en = Locale::english();
        assert_eq!(format_decimal(dec!(1000.25), 2, &en, None, " DKK"), "1,000.25 DKK");
        assert_eq!(format_decimal(dec!(10), 2, &en, None, ""), "10.00");
        assert_eq!(format_decimal(dec!(999), 0, &en, None, ""), "999");
    }

    #[test]
    fn test_format_width_pads_left() {
        let da = Locale::danish();
        assert_eq!(format_decimal(dec!(1), 2, &da, Some(10), ""), "      1,00");
        assert_eq!(format_decimal(dec!(1000), 2, &da, Some(10), ""), "  1.000,00");
        assert_eq!(format_decimal(dec!(1), 2, &da, Some(10), " DKK"), "  1,00 DKK");
    }

    #[test]
    fn test_format_width_never_truncates() {
        let da = Locale::danish();
        assert_eq!(format_decimal(dec!(1000000), 2, &da, Some(10), ""), "1.000.000,00");
    }

    #[test]
    fn test_format_options_builder() {
        let options = FormatOptions::new()
            .with_currency_code()
            .with_width(12)
            .with_scale(3)
            .with_locale(Locale::danish());
        assert!(options.show_currency_code);
        assert_eq!(options.format_width, Some(12));
        assert_eq!(options.fixed_scale, Some(3));
        assert_eq!(options.fixed_locale, Some(Locale::danish()));
        assert_eq!(FormatOptions::new(), FormatOptions::default());
    }
}
