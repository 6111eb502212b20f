//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and resolves configuration
//! - fetches the Valet group (once)
//! - prints lookups, canonical dates or the series catalogue

use clap::Parser;
use tracing::warn;

use crate::cli::{Cli, Command};
use crate::data::{ValetClient, ValetConfig, timeout_from_secs};
use crate::date::CanonicalDate;
use crate::error::AppError;
use crate::store::{BondYields, LookupError};

/// Entry point for the `boc` binary.
pub fn run() -> Result<(), AppError> {
    crate::logging::init_logging();
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    match cli.command {
        Command::Lookup { date } => handle_lookup(&config, &date),
        Command::Normalize { dates } => handle_normalize(&dates),
        Command::Series => handle_series(&config),
    }
}

/// Environment first, then CLI flags on top.
pub fn resolve_config(cli: &Cli) -> Result<ValetConfig, AppError> {
    apply_overrides(ValetConfig::from_env()?, cli)
}

/// Layer `--url` / `--timeout-secs` over an existing config.
pub fn apply_overrides(mut config: ValetConfig, cli: &Cli) -> Result<ValetConfig, AppError> {
    if let Some(url) = &cli.url {
        config.url = url.clone();
    }
    if let Some(secs) = cli.timeout_secs {
        config.timeout = timeout_from_secs(secs, "--timeout-secs")?;
    }
    Ok(config)
}

fn handle_lookup(config: &ValetConfig, raw: &str) -> Result<(), AppError> {
    // Reject bad input before paying for the download.
    let date = CanonicalDate::parse(raw)?;

    let client = ValetClient::new(config.clone())?;
    let yields = BondYields::fetch(&client)?;

    match yields.observation(&date) {
        Ok(obs) => {
            println!("{}", crate::report::format_observation(obs, yields.series_detail()));
            Ok(())
        }
        Err(err @ LookupError::RecordNotFound(_)) => {
            if let Some((first, last)) = yields.date_range() {
                warn!(%date, first, last, "no observation; Valet publishes business days only");
            }
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}

fn handle_normalize(dates: &[String]) -> Result<(), AppError> {
    let mut failed = 0usize;
    for raw in dates {
        match CanonicalDate::parse(raw) {
            Ok(date) => println!("{raw}\t{date}"),
            Err(err) => {
                failed += 1;
                eprintln!("{raw}\t{err}");
            }
        }
    }
    if failed > 0 {
        return Err(AppError::new(2, format!("{failed} of {} date(s) could not be normalized.", dates.len())));
    }
    Ok(())
}

fn handle_series(config: &ValetConfig) -> Result<(), AppError> {
    let client = ValetClient::new(config.clone())?;
    let yields = BondYields::fetch(&client)?;
    println!("{}", crate::report::format_series(&yields));
    Ok(())
}
