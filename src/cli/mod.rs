//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod info;
mod mint;
mod show;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::config::{load_config, merge_cli_overrides, CliOverrides, OutputFormat, LOG_LEVELS};
use crate::seed::Seed;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Penrose - mint and preview deterministic seed tiles
#[derive(Parser)]
#[command(name = "penrose")]
#[command(about = "Penrose - mint and preview deterministic seed tiles as SVG")]
#[command(version)]
pub struct Cli {
    /// Path to a penrose.toml (default: discovered from the working directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level, overriding `[log] level` from penrose.toml
    #[arg(long, global = true, value_parser = clap::builder::PossibleValuesParser::new(LOG_LEVELS.iter().copied()))]
    pub log_level: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Mint seeds in order into a fresh registry and emit each token
    Mint {
        /// Decimal seeds; token ids are assigned 1, 2, 3, ... in this order
        #[arg(required = true, allow_negative_numbers = true)]
        seeds: Vec<String>,

        /// Output directory; each token is written to DIR/<id>.<ext>.
        /// If omitted, tokens are printed to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print the raw 64x64 glyph grid for a seed
    Show {
        /// Decimal seed
        #[arg(allow_negative_numbers = true)]
        seed: String,
    },

    /// Print the parameters a seed derives (schemes, colors, modulus)
    Info {
        /// Decimal seed
        #[arg(allow_negative_numbers = true)]
        seed: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parse a seed argument, printing an error on failure.
pub(crate) fn parse_seed_arg(text: &str) -> Result<Seed, ExitCode> {
    text.parse::<Seed>().map_err(|e| {
        eprintln!("Error: {}", e);
        ExitCode::from(EXIT_INVALID_ARGS)
    })
}

/// Install the stderr tracing subscriber.
///
/// `RUST_LOG` wins over the configured level; `-v` flags win over both.
fn init_logging(level: &str, verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // A subscriber may already be installed when run from tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let mut overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        ..CliOverrides::default()
    };
    if let Commands::Mint { output, format, .. } = &cli.command {
        overrides.dir = output.clone();
        overrides.format = *format;
    }
    merge_cli_overrides(&mut config, &overrides);

    init_logging(&config.log.level, cli.verbose);
    tracing::debug!(?config, "loaded configuration");

    match cli.command {
        Commands::Mint { seeds, .. } => mint::run_mint(&seeds, &config.output),
        Commands::Show { seed } => show::run_show(&seed),
        Commands::Info { seed, json } => info::run_info(&seed, json),
    }
}
