//! datadiff CLI - Tabular diffs of JSON record files
//!
//! Compares two JSON arrays of objects row by row and field by field, and
//! exits non-zero when they differ.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod input;
mod output;

use commands::*;
use config::DatadiffConfig;
use datadiff_core::CompareOptions;
use output::{OutputConfig, OutputFormat};

/// Record label used when neither `--name` nor the config provides one.
const DEFAULT_NAME: &str = "Record";

/// Exit status when the inputs differ.
const EXIT_DIFFERENT: u8 = 1;
/// Exit status when the inputs could not be loaded or compared.
const EXIT_ERROR: u8 = 2;

/// Row- and field-level diffs for JSON record files.
#[derive(Parser)]
#[command(name = "datadiff")]
#[command(author, version)]
#[command(about = "Row- and field-level diffs for JSON record files")]
#[command(propagate_version = true)]
#[command(after_help = "Examples:
  datadiff compare expected.json actual.json
  datadiff compare a.json b.json --ignore-order --ignore-lengths
  datadiff show people.json --name Person --width 100

Exit status: 0 when equal, 1 when different, 2 on errors.")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format (overrides config default)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two JSON arrays of records
    #[command(visible_alias = "c")]
    Compare {
        /// File holding the expected records
        expected: PathBuf,

        /// File holding the actual records
        actual: PathBuf,

        /// Match rows by closest counterpart instead of by position
        #[arg(short = 'o', long)]
        ignore_order: bool,

        /// Report extra rows without failing on them
        #[arg(short = 'l', long)]
        ignore_lengths: bool,

        /// Record type label shown in the report
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Show a JSON array of records as a table
    Show {
        /// File holding the records
        path: PathBuf,

        /// Record type label
        #[arg(short, long)]
        name: Option<String>,

        /// Fit the table to this many columns (default: terminal width on a TTY)
        #[arg(short, long)]
        width: Option<usize>,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration from .datadiffrc.toml
    let config = DatadiffConfig::load(std::path::Path::new("."));

    // Resolve output format: CLI flag > config default > Table
    let format = cli.format.unwrap_or_else(|| {
        config
            .default_format()
            .and_then(|f| f.parse().ok())
            .unwrap_or(OutputFormat::Table)
    });

    // Resolve color: --no-color > config > TTY detection
    let color_override = if cli.no_color {
        Some(false)
    } else {
        config.use_color()
    };
    if let Some(use_color) = color_override {
        colored::control::set_override(use_color);
    }

    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        println!();
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Compare {
            expected,
            actual,
            ignore_order,
            ignore_lengths,
            name,
        } => {
            let options = CompareOptions::new(
                ignore_order || config.compare.ignore_order,
                ignore_lengths || config.compare.ignore_lengths,
            );
            let name = name
                .as_deref()
                .or(config.default_name())
                .unwrap_or(DEFAULT_NAME);

            let output_config = OutputConfig::detect(format, color_override, None);
            let equal = compare::run(&expected, &actual, name, options, &output_config)?;
            Ok(if equal {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(EXIT_DIFFERENT)
            })
        }
        Commands::Show { path, name, width } => {
            let name = name
                .as_deref()
                .or(config.default_name())
                .unwrap_or(DEFAULT_NAME);
            let output_config = OutputConfig::detect(format, color_override, width);
            show::run(&path, name, &output_config)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
