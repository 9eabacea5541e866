//! Command implementations. Each returns the lines to print.

use clap::Args;
use ducat_core::{
    Currency, CurrencyAmount, CurrencyCode, ForeignCurrencyAmount, FormatOptions, MonetaryAmount,
    RoundingMode,
};
use ducat_shared::{AppConfig, AppError, AppResult};
use rust_decimal::Decimal;
use tracing::info;

/// Arguments for `ducat convert`.
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Amount to convert
    #[arg(allow_hyphen_values = true)]
    pub amount: Decimal,

    /// Currency the amount is in
    #[arg(long)]
    pub from: String,

    /// Currency to convert into
    #[arg(long)]
    pub to: String,

    /// Round the result to the target currency's scale
    #[arg(long, value_name = "MODE")]
    pub round: Option<RoundingMode>,

    /// Round to the smallest cash denomination instead of the scale
    #[arg(long, requires = "round")]
    pub cash: bool,
}

/// Arguments for `ducat round`.
#[derive(Debug, Args)]
pub struct RoundArgs {
    /// Amount to round
    #[arg(allow_hyphen_values = true)]
    pub amount: Decimal,

    /// Currency whose scale or denominations apply
    #[arg(long)]
    pub currency: String,

    /// Rounding mode: plain, up, down, positive or negative
    #[arg(long, default_value_t = RoundingMode::Plain)]
    pub mode: RoundingMode,

    /// Round to the smallest cash denomination instead of the scale
    #[arg(long)]
    pub cash: bool,
}

/// Converts between the base currency and a foreign currency.
pub fn convert(config: &AppConfig, args: &ConvertArgs) -> AppResult<Vec<String>> {
    let calculator = config.calculator()?;
    let base = config.base_currency_code();
    let lookup = |abbreviation: &str| {
        let code = CurrencyCode::new(&abbreviation.trim().to_uppercase());
        calculator
            .currency(&code)
            .cloned()
            .ok_or_else(|| AppError::Validation(format!("Currency {code} is not configured")))
    };
    let from = lookup(&args.from)?;
    let to = lookup(&args.to)?;

    if from == to {
        return Err(AppError::Validation(format!(
            "Cannot convert {} to itself",
            from.code()
        )));
    }

    let options = display_options(config);
    let line = if from.code() == &base {
        let mut converted =
            calculator.convert_from_base(CurrencyAmount::new(args.amount), &from, &to);
        if let Some(mode) = args.round {
            if args.cash {
                converted.round_to_own_smallest_denomination(mode);
            } else {
                converted.round_in_own_currency(mode);
            }
        }
        converted.formatted_in_own_currency(&options)
    } else if to.code() == &base {
        let foreign = ForeignCurrencyAmount::new(args.amount, from.clone());
        let converted = calculator.convert_to_base(&foreign, &to);
        apply_rounding(converted, &to, args.round, args.cash).formatted(&to, &options)
    } else {
        return Err(AppError::Validation(format!(
            "One side of the conversion must be the base currency {base}"
        )));
    };

    info!(from = %from.code(), to = %to.code(), amount = %args.amount, "Converted amount");
    Ok(vec![line])
}

/// Rounds an amount in a configured currency.
pub fn round(config: &AppConfig, args: &RoundArgs) -> AppResult<Vec<String>> {
    let code = CurrencyCode::new(&args.currency.trim().to_uppercase());
    let currency = config
        .currency_descriptors()?
        .into_iter()
        .find(|currency| currency.code() == &code)
        .ok_or_else(|| AppError::Validation(format!("Currency {code} is not configured")))?;

    let amount = CurrencyAmount::new(args.amount);
    let rounded = apply_rounding(amount, &currency, Some(args.mode), args.cash);
    Ok(vec![rounded.formatted(&currency, &display_options(config))])
}

/// Lists configured currencies with their names, scale, denominations and
/// rate. The base currency is marked.
pub fn currencies(config: &AppConfig) -> AppResult<Vec<String>> {
    let base = config.base_currency_code();
    let calculator = config.calculator()?;

    Ok(calculator
        .currencies()
        .iter()
        .map(|currency| {
            let code = currency.code();
            let denominations = currency
                .denominations()
                .iter()
                .map(Decimal::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            let rate = calculator
                .rate(code)
                .map_or_else(|| "-".to_string(), |rate| rate.to_string());
            let marker = if code == &base { " (base)" } else { "" };
            format!(
                "{:<6}{:<24}scale {}  denominations [{}]  rate {}{}",
                code.abbreviation(),
                code.name(),
                currency.scale(),
                denominations,
                rate,
                marker
            )
        })
        .collect())
}

fn apply_rounding<T: MonetaryAmount>(
    amount: T,
    currency: &Currency,
    mode: Option<RoundingMode>,
    cash: bool,
) -> T {
    match mode {
        Some(mode) if cash => amount.rounding_to_smallest_denomination(mode, currency),
        Some(mode) => amount.rounding(mode, currency),
        None => amount,
    }
}

fn display_options(config: &AppConfig) -> FormatOptions {
    FormatOptions::new()
        .with_currency_code()
        .with_locale(config.locale())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    const SAMPLE: &str = r#"
        [display]
        locale = "en"

        [conversion]
        base_currency = "DKK"
        margin = "1.02"

        [conversion.rates]
        DKK = "7.5"
        EUR = "1"
        SEK = "11"

        [[currencies]]
        code = "DKK"
        denominations = ["1", "0.5", "20"]
        scale = 2

        [[currencies]]
        code = "EUR"
        denominations = ["0.01"]
        scale = 2

        [[currencies]]
        code = "SEK"
        denominations = ["1"]
        scale = 2
    "#;

    fn config() -> AppConfig {
        AppConfig::from_toml(SAMPLE).unwrap()
    }

    fn convert_args(
        amount: Decimal,
        from: &str,
        to: &str,
        round: Option<RoundingMode>,
        cash: bool,
    ) -> ConvertArgs {
        ConvertArgs {
            amount,
            from: from.to_string(),
            to: to.to_string(),
            round,
            cash,
        }
    }

    #[rstest]
    #[case(None, false, "735.29 DKK")]
    #[case(Some(RoundingMode::Up), false, "735.30 DKK")]
    #[case(Some(RoundingMode::Plain), true, "735.50 DKK")]
    #[case(Some(RoundingMode::Down), true, "735.00 DKK")]
    fn test_convert_to_base(
        #[case] round: Option<RoundingMode>,
        #[case] cash: bool,
        #[case] expected: &str,
    ) {
        let lines = convert(&config(), &convert_args(dec!(100), "EUR", "DKK", round, cash)).unwrap();
        assert_eq!(lines, vec![expected.to_string()]);
    }

    #[test]
    fn test_convert_from_base() {
        let lines = convert(&config(), &convert_args(dec!(15), "dkk", "eur", None, false)).unwrap();
        assert_eq!(lines, vec!["2.04 EUR".to_string()]);
    }

    #[test]
    fn test_convert_requires_base_side() {
        let err = convert(&config(), &convert_args(dec!(1), "EUR", "SEK", None, false)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_convert_rejects_same_currency() {
        let err = convert(&config(), &convert_args(dec!(1), "DKK", "DKK", None, false)).unwrap_err();
        assert!(err.to_string().contains("to itself"));
    }

    #[test]
    fn test_convert_rejects_unknown_currency() {
        let err = convert(&config(), &convert_args(dec!(1), "DKK", "USD", None, false)).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Currency USD is not configured");
    }

    #[rstest]
    #[case(RoundingMode::Plain, false, "1.23 DKK")]
    #[case(RoundingMode::Up, false, "1.24 DKK")]
    #[case(RoundingMode::Plain, true, "1.00 DKK")]
    #[case(RoundingMode::Up, true, "1.50 DKK")]
    fn test_round(#[case] mode: RoundingMode, #[case] cash: bool, #[case] expected: &str) {
        let args = RoundArgs {
            amount: dec!(1.2345),
            currency: "DKK".to_string(),
            mode,
            cash,
        };
        assert_eq!(round(&config(), &args).unwrap(), vec![expected.to_string()]);
    }

    #[test]
    fn test_currencies_listing() {
        let lines = currencies(&config()).unwrap();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("DKK   Danish Krone"));
        assert!(lines[0].contains("denominations [0.5, 1, 20]"));
        assert!(lines[0].ends_with("rate 7.5 (base)"));
        assert!(lines[1].starts_with("EUR   Euro"));
        assert!(lines[1].ends_with("rate 1"));
    }
}
