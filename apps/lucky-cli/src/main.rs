//! # lucky
//!
//! ```bash
//! lucky sum 123            # 6
//! lucky ticket 385916      # yes
//! lucky ticket 123456      # no
//! lucky --format json ticket 385916
//! ```

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use lucky_cli::cli::Cli;
use lucky_cli::config::CliConfig;
use lucky_cli::{run, Outcome, EXIT_INVALID_INPUT};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match try_main(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = CliConfig::load().context("failed to load configuration")?;
    init_tracing(config.log_level);

    match run(cli, &config)? {
        Outcome::Printed(line) => {
            println!("{line}");
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Rejected(err) => {
            eprintln!("error: {err}");
            Ok(ExitCode::from(EXIT_INVALID_INPUT))
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages (overrides everything)
/// - `LUCKY_LOG_LEVEL=info` - Default level when `RUST_LOG` is unset
/// - Default: WARN, so stdout carries only the result
fn init_tracing(level: LevelFilter) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
