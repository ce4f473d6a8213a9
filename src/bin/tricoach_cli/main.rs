// ABOUTME: TriCoach CLI - command-line front end for plan generation and history analytics
// ABOUTME: Builds periodization plans and reports weekly load and coaching status from a history file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach
//!
//! Usage:
//! ```bash
//! # Generate a 12-week periodization plan
//! tricoach-cli plan --weeks 12
//!
//! # Weekly training load for an athlete over a date range
//! tricoach-cli load --history history.json --athlete ana --from 2024-01-01 --to 2024-03-31
//!
//! # Current coaching status with race readiness
//! tricoach-cli status --history history.json --athlete ana --race-date 2024-06-02
//!
//! # Compact JSON for scripting
//! tricoach-cli --format json status --history history.json --athlete ana
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::info;
use tricoach::config::CoachConfig;
use tricoach::constants::service_names;
use tricoach::errors::{AppError, AppResult};
use tricoach::formatters::OutputFormat;
use tricoach::intelligence::calendar::parse_date;
use tricoach::logging::LoggingConfig;

#[derive(Parser)]
#[command(
    name = "tricoach-cli",
    about = "TriCoach training analytics CLI",
    long_about = "Generate periodization plans and analyze training load, recovery, and race readiness from athlete history."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format: json or pretty (overrides TRICOACH_OUTPUT_FORMAT)
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate a periodization plan
    Plan {
        /// Plan length in weeks (4 to 52)
        #[arg(long)]
        weeks: u32,
    },

    /// Summarize training load per calendar week
    Load {
        /// History file (overrides TRICOACH_HISTORY_PATH)
        #[arg(long)]
        history: Option<PathBuf>,

        /// Athlete identifier (overrides TRICOACH_ATHLETE_ID)
        #[arg(long)]
        athlete: Option<String>,

        /// First date included (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        from: Option<NaiveDate>,

        /// Last date included (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        to: Option<NaiveDate>,
    },

    /// Report trend, load, recovery, and race readiness
    Status {
        /// History file (overrides TRICOACH_HISTORY_PATH)
        #[arg(long)]
        history: Option<PathBuf>,

        /// Athlete identifier (overrides TRICOACH_ATHLETE_ID)
        #[arg(long)]
        athlete: Option<String>,

        /// Target race date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        race_date: Option<NaiveDate>,

        /// Evaluate as of this date instead of the local calendar date
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,

        /// Trailing points for the form trend (overrides TRICOACH_TREND_WINDOW)
        #[arg(long)]
        trend_window: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(u8::try_from(e.code.exit_code()).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let logging = if cli.verbose {
        LoggingConfig::from_env().verbose()
    } else {
        LoggingConfig::from_env()
    };
    logging
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    info!("{} {}", service_names::TRICOACH_CLI, env!("CARGO_PKG_VERSION"));

    let mut config = CoachConfig::from_env()?;
    if let Some(format) = cli.format {
        config.output_format = format;
    }

    let output = match cli.command {
        Command::Plan { weeks } => commands::plan::run(weeks, &config)?,
        Command::Load {
            history,
            athlete,
            from,
            to,
        } => {
            helpers::history::apply_overrides(&mut config, history, athlete);
            commands::load::run(&config, from, to).await?
        }
        Command::Status {
            history,
            athlete,
            race_date,
            today,
            trend_window,
        } => {
            helpers::history::apply_overrides(&mut config, history, athlete);
            if let Some(window) = trend_window {
                config.trend_window = window;
                config.validate()?;
            }
            commands::status::run(&config, race_date, today).await?
        }
    };

    println!("{output}");
    Ok(())
}
