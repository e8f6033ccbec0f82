use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ritrends::config::{Config, LoggingConfig};

mod commands;

use commands::{analyze, snapshot, tokenize, FilterArgs};

#[derive(Parser)]
#[command(
    name = "ritrends",
    version,
    about = "Keyword trend analytics over research report titles",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json); overrides the config file
    #[arg(long, global = true)]
    log_format: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute every trend view and print it as JSON
    Analyze {
        #[command(flatten)]
        filter: FilterArgs,

        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON
        #[arg(long, default_value = "false")]
        pretty: bool,
    },

    /// Export a trend snapshot file
    Snapshot {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output file or directory (default: generated name in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the keywords extracted from titles
    Tokenize {
        /// Titles to tokenize
        #[arg(required = true)]
        titles: Vec<String>,

        /// Also show matched themes
        #[arg(long, default_value = "false")]
        themes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // Initialize tracing/logging
    setup_tracing(&config.logging, cli.log_format.as_deref(), cli.verbose)?;

    tracing::debug!(config = ?cli.config, "ritrends starting");

    match cli.command {
        Commands::Analyze {
            filter,
            output,
            pretty,
        } => {
            tracing::info!(
                input = %filter.input.display(),
                output = ?output,
                "Starting analyze command"
            );
            analyze(&config, &filter, output.as_deref(), pretty)?;
        }

        Commands::Snapshot { filter, output } => {
            tracing::info!(
                input = %filter.input.display(),
                output = ?output,
                "Starting snapshot command"
            );
            snapshot(&config, &filter, output.as_deref())?;
        }

        Commands::Tokenize { titles, themes } => {
            tokenize(&config, &titles, themes);
        }
    }

    Ok(())
}

fn setup_tracing(logging: &LoggingConfig, format: Option<&str>, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("ritrends=debug,info")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .or_else(|_| tracing_subscriber::EnvFilter::try_new(&logging.level))
            .context("Invalid log level")?
    };

    // stdout carries JSON results
    match format.unwrap_or(&logging.format) {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}
