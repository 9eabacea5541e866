//! Ducat command-line converter
//!
//! Usage:
//!   ducat convert <AMOUNT> --from <CODE> --to <CODE> [--round <MODE>] [--cash]
//!   ducat round <AMOUNT> --currency <CODE> [--mode <MODE>] [--cash]
//!   ducat currencies

mod commands;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ducat_core::format::set_default_locale;
use ducat_shared::{AppConfig, AppResult};

#[derive(Parser)]
#[command(name = "ducat")]
#[command(about = "Currency-safe conversion and rounding")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount between the base currency and a foreign currency
    Convert(commands::ConvertArgs),
    /// Round an amount to a currency's scale or cash denomination
    Round(commands::RoundArgs),
    /// List configured currencies
    Currencies,
}

fn run(command: &Commands, config: &AppConfig) -> AppResult<Vec<String>> {
    match command {
        Commands::Convert(args) => commands::convert(config, args),
        Commands::Round(args) => commands::round(config, args),
        Commands::Currencies => commands::currencies(config),
    }
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries results only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ducat=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Failed to load configuration")?;
    set_default_locale(config.locale());

    match run(&cli.command, &config) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            Ok(())
        }
        Err(err) => {
            error!(code = err.error_code(), "{err}");
            std::process::exit(i32::from(err.exit_code()));
        }
    }
}
