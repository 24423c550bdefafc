//! Command-line arguments.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Digit sums and lucky ticket checks
#[derive(Debug, Parser)]
#[command(name = "lucky", version, about, long_about = None)]
pub struct Cli {
    /// Output format [default: LUCKY_OUTPUT_FORMAT or text]
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Prints the digit sum of a three-digit number (100..=999)
    Sum {
        /// Number to sum, e.g. 123
        #[arg(allow_negative_numbers = true, allow_hyphen_values = true)]
        number: String,
    },

    /// Prints `yes` if a six-digit ticket number (100000..=999999) is lucky, `no` otherwise
    Ticket {
        /// Ticket number, e.g. 385916
        #[arg(allow_negative_numbers = true, allow_hyphen_values = true)]
        number: String,
    },
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bare result: a number, or `yes` / `no`
    Text,
    /// One JSON object per invocation
    Json,
}
