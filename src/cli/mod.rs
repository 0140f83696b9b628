//! CLI argument parsing for dupcheck
//!
//! Global flags: --store, --config, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod args;
pub mod format;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{CheckArgs, ConfigOverrides, ImportArgs};
pub use dupcheck_core::format::OutputFormat;

/// Store used when neither --store nor DUPCHECK_STORE is given
pub const DEFAULT_STORE: &str = "dupcheck.db";

/// Dupcheck - duplicate project detection for the project portal
#[derive(Parser, Debug)]
#[command(name = "dupcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Project store: a SQLite database, or a JSON dump when the path ends in .json
    #[arg(long, global = true, env = "DUPCHECK_STORE", default_value = DEFAULT_STORE)]
    pub store: PathBuf,

    /// Configuration file (defaults to <config dir>/dupcheck/config.toml)
    #[arg(long, global = true, env = "DUPCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, dupcheck_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a proposed project against every registered project
    Check(CheckArgs),

    /// Show the similarity score of every registered project
    Scores(CheckArgs),

    /// Create an empty project store
    Init,

    /// Load projects and users from a JSON dump into the SQLite store
    Import(ImportArgs),

    /// Print the effective configuration
    Config {
        #[command(flatten)]
        overrides: ConfigOverrides,
    },
}
