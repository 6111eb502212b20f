//! Command-line parsing for the `boc` binary.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the fetch/lookup code.

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "boc", version, about = "Bank of Canada bond yields by date (Valet API)")]
pub struct Cli {
    /// Override the Valet group endpoint (default: $BOC_VALET_URL or the public API).
    #[arg(long, global = true, value_name = "URL")]
    pub url: Option<String>,

    /// HTTP timeout in seconds (default: $BOC_HTTP_TIMEOUT_SECS or 30).
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the bond yields group and print the observation for a date.
    ///
    /// The date may use `-`, `/` or `\` separators and day/month/year in
    /// any order, e.g. `2022-05-24`, `24/05/2022`, `5-24-2022`.
    Lookup {
        /// Date to look up.
        date: String,
    },
    /// Print the canonical `YYYY-MM-DD` form of one or more dates (no network).
    Normalize {
        #[arg(required = true)]
        dates: Vec<String>,
    },
    /// Fetch the group and print its series catalogue and date coverage.
    Series,
}
