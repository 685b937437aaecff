//! Dalil - browse administrative procedures and legal texts from the terminal

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use dalil_core::{Catalog, DalilConfig};

mod catalog_cli;

use catalog_cli::CatalogCommand;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "dalil",
    about = "Search, filter and consult administrative procedures and legal texts",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: CatalogCommand,

    /// Catalog file (YAML or JSON); overrides the configured catalog
    #[clap(long, global = true)]
    catalog: Option<PathBuf>,

    /// Configuration file (defaults to .dalil/config.yaml, then the global config)
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Emit logs as JSON
    #[clap(long, global = true)]
    log_json: bool,
}

/// Initialize tracing from CLI flags
///
/// Logs always go to stderr so stdout stays clean for `--json` output.
fn initialize_tracing(log_level: &LogLevel, json: bool) {
    let filter = EnvFilter::new(log_level.to_filter_directive());

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn load_catalog(explicit: Option<PathBuf>, config: &DalilConfig) -> Result<Catalog> {
    match explicit.or_else(|| config.catalog.clone()) {
        Some(path) => Catalog::load(&path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => {
            debug!("No catalog configured, using built-in procedures");
            Ok(Catalog::sample_procedures())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level, cli.log_json);

    let config = DalilConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let catalog = load_catalog(cli.catalog, &config)?;

    cli.command.execute(catalog, &config)
}
