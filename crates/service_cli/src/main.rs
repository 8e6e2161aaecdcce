//! Constant-term CLI
//!
//! Recovers the constant term of the polynomial through the leading points
//! of a JSON point file.
//!
//! # Commands
//!
//! - `constant-term solve [INPUT]` - Print the loaded points and the constant term
//! - `constant-term check [INPUT]` - Validate a point file without interpolating
//!
//! Errors are logged, printed with their full cause chain, and end the
//! process with exit status 1.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use service_cli::commands;
use service_cli::commands::solve::SolveOptions;
use service_cli::config::CliConfig;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Constant-term recovery by exact Lagrange interpolation
#[derive(Parser)]
#[command(name = "constant-term")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "constant_term.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load points and print the constant term
    Solve {
        /// Path to the JSON point file
        input: Option<PathBuf>,

        /// Number of leading points to interpolate
        #[arg(short = 'n', long)]
        points: Option<usize>,

        /// Fractional digits shown for a non-integral constant
        #[arg(short, long)]
        precision: Option<u32>,
    },

    /// Validate a point file without interpolating
    Check {
        /// Path to the JSON point file
        input: Option<PathBuf>,

        /// Number of leading points that must be present
        #[arg(short = 'n', long)]
        points: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = CliConfig::load_or_default(&cli.config)
        .and_then(CliConfig::with_env_override)
        .with_context(|| {
            format!("failed to load configuration from {}", cli.config.display())
        })?;

    match &cli.command {
        Commands::Solve {
            input,
            points,
            precision,
        } => {
            apply_overrides(&mut config, input, *points);
            if let Some(precision) = precision {
                config.precision = *precision;
            }
        }
        Commands::Check { input, points } => apply_overrides(&mut config, input, *points),
    }
    if cli.verbose {
        config.log_level = "debug".to_string();
    }
    config.validate().context("invalid configuration")?;

    init_tracing(&config.log_level);
    info!("Configuration: {:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::Solve { .. } => {
            let options = SolveOptions {
                input: &config.input,
                points: config.points,
                precision: config.precision,
            };
            commands::solve::run(&options, &mut out).map(|_| ())
        }
        Commands::Check { .. } => {
            commands::check::run(&config.input, config.points, &mut out).map(|_| ())
        }
    };
    out.flush()?;

    let result = result.with_context(|| format!("failed to process {}", config.input.display()));
    if let Err(err) = &result {
        error!("{:#}", err);
    }
    result
}

fn apply_overrides(config: &mut CliConfig, input: &Option<PathBuf>, points: Option<usize>) {
    if let Some(input) = input {
        config.input = input.clone();
    }
    if let Some(points) = points {
        config.points = points;
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}
