//! # lucky-cli
//!
//! Command-line front end for lucky-core.
//!
//! ## Exit Codes
//! ```text
//! ┌──────┬──────────────────────────────────────────────────────────────┐
//! │ Code │ Meaning                                                      │
//! ├──────┼──────────────────────────────────────────────────────────────┤
//! │  0   │ Result printed to stdout                                     │
//! │  1   │ Configuration or output failure                              │
//! │  2   │ Invalid input (not an integer / out of range), message on    │
//! │      │ stderr; clap also uses 2 for malformed command lines         │
//! └──────┴──────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod config;

use anyhow::Context;
use lucky_core::validation::parse_integer;
use lucky_core::{check_ticket, sum_of_digits, InvalidInputError, TicketVerdict};
use serde::Serialize;
use tracing::{debug, warn};

use crate::cli::{Cli, Command, OutputFormat};
use crate::config::CliConfig;

/// Exit code for rejected input.
pub const EXIT_INVALID_INPUT: u8 = 2;

/// Result of a successful check, as rendered to stdout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum Report {
    Sum { number: i64, sum: u32 },
    Ticket(TicketVerdict),
}

impl Report {
    /// Renders the report in the requested format.
    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        match format {
            OutputFormat::Text => Ok(match self {
                Report::Sum { sum, .. } => sum.to_string(),
                Report::Ticket(verdict) => verdict.to_string(),
            }),
            OutputFormat::Json => {
                serde_json::to_string(self).context("failed to serialize report")
            }
        }
    }
}

/// What the binary should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the line to stdout and exit 0.
    Printed(String),
    /// Print the error to stderr and exit [`EXIT_INVALID_INPUT`].
    Rejected(InvalidInputError),
}

/// Runs a single check against lucky-core.
pub fn execute(command: &Command) -> Result<Report, InvalidInputError> {
    match command {
        Command::Sum { number } => {
            let number = parse_integer(number)?;
            let sum = sum_of_digits(number)?;
            debug!(number, sum, "digit sum computed");
            Ok(Report::Sum { number, sum })
        }
        Command::Ticket { number } => {
            let verdict = check_ticket(parse_integer(number)?)?;
            debug!(
                number = verdict.number,
                front_sum = verdict.front_sum,
                back_sum = verdict.back_sum,
                lucky = verdict.lucky,
                "ticket checked"
            );
            Ok(Report::Ticket(verdict))
        }
    }
}

/// Runs the parsed command line with the loaded configuration.
///
/// Invalid input is not an `Err`: it is reported through
/// [`Outcome::Rejected`] so the binary can pick the exit code.
pub fn run(cli: &Cli, config: &CliConfig) -> anyhow::Result<Outcome> {
    let format = cli.format.unwrap_or(config.output_format);

    match execute(&cli.command) {
        Ok(report) => Ok(Outcome::Printed(report.render(format)?)),
        Err(err) => {
            warn!(command = ?cli.command, %err, "input rejected");
            Ok(Outcome::Rejected(err))
        }
    }
}
