//! Command line and environment configuration

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

use crate::cli::Command;

/// Electronics warehouse inventory
#[derive(Debug, Parser)]
#[command(name = "warehouse", about = "Electronics warehouse inventory", long_about = None)]
pub(crate) struct Config {
    /// Catalog file settings.
    #[command(flatten)]
    pub storage: StorageConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

/// Catalog file settings.
#[derive(Debug, Args)]
pub(crate) struct StorageConfig {
    /// Catalog file to read and write
    #[arg(
        short,
        long,
        env = "WAREHOUSE_FILE",
        default_value = "warehouse.json",
        global = true
    )]
    pub file: PathBuf,
}

/// Log output format.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(
        long,
        env = "LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact,
        global = true
    )]
    pub log_format: LogFormat,
}
