//! `cinema` CLI — load a programme of screens, films and showings and print what's on.
//!
//! ## Usage
//!
//! ```sh
//! # Apply a JSON programme (stdin → stdout)
//! cat programme.json | cinema run
//!
//! # Apply a programme from a file and print the listing as JSON
//! cinema run -i programme.json --format json
//!
//! # Run the built-in demo programme
//! cinema demo
//!
//! # When does a 2:30 film starting at 12:40 free the screen?
//! cinema end-time 12:40 2:30
//!
//! # Show every accepted and rejected booking
//! cinema -v run -i programme.json
//! ```

mod programme;

use std::io::{self, IsTerminal, Read};

use anyhow::{Context, Result};
use cinema_core::{parse_time, showing_interval, Cinema, Listing};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::programme::{Outcome, Programme};

#[derive(Parser)]
#[command(name = "cinema", version, about = "Cinema showtime scheduler")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log every accepted and rejected operation to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a JSON programme of screens, films and showings
    Run {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Apply the built-in demo programme
    Demo {
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print when a showing would free its screen, cleaning included
    EndTime {
        /// Start time, H:MM or HH:MM
        start: String,
        /// Film running time, H:MM or HH:MM
        duration: String,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// JSON shape of `run` and `demo` output.
#[derive(Serialize)]
struct Report<'a> {
    results: &'a [Outcome],
    showings: &'a Listing,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run { input, format } => {
            let raw = read_input(input.as_deref())?;
            let programme: Programme =
                serde_json::from_str(&raw).context("Failed to parse programme JSON")?;
            run_programme(&programme, format)?;
        }
        Commands::Demo { format } => {
            run_programme(&Programme::demo(), format)?;
        }
        Commands::EndTime { start, duration } => {
            let start = parse_time(&start).context("Invalid start time")?;
            let duration = parse_time(&duration).context("Invalid duration")?;
            let interval = showing_interval(start, duration)?;
            println!("{}", interval.end);
        }
    }

    Ok(())
}

/// Logs go to stderr so they never mix with the listing on stdout.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run_programme(programme: &Programme, format: Format) -> Result<()> {
    let mut cinema = Cinema::new();
    let outcomes = programme.apply(&mut cinema);
    let listing = cinema.list_showings();

    let rejected = outcomes.iter().filter(|o| !o.is_ok()).count();
    info!(
        operations = outcomes.len(),
        rejected, "programme applied"
    );

    match format {
        Format::Text => print!("{}", render_text(&outcomes, &listing)),
        Format::Json => {
            let report = Report {
                results: &outcomes,
                showings: &listing,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

fn render_text(outcomes: &[Outcome], listing: &Listing) -> String {
    let mut out = String::new();

    for outcome in outcomes {
        match (&outcome.error, &outcome.booked) {
            (Some(err), _) => out.push_str(&format!("error: {}: {}\n", outcome.operation, err)),
            (None, Some(booked)) => {
                out.push_str(&format!("ok: {} ({})\n", outcome.operation, booked))
            }
            (None, None) => out.push_str(&format!("ok: {}\n", outcome.operation)),
        }
    }

    out.push('\n');
    if listing.is_empty() {
        out.push_str("No showings scheduled.\n");
    }
    for (film, lines) in listing.iter() {
        out.push_str(&format!("{}:\n", film));
        for line in lines {
            out.push_str(&format!("  {}\n", line));
        }
    }

    out
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
