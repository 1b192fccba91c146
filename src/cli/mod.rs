//! CLI argument parsing for galaxy
//!
//! Uses clap derive. Global flags: --root, --store, --format, --quiet,
//! --verbose, --log-level, --log-json.

pub mod commands;
pub mod constellation;
pub mod format;
pub mod idea;
pub mod parse;
pub mod paths;

use clap::Parser;
use std::path::PathBuf;

pub use commands::Commands;
pub use galaxy_core::format::OutputFormat;
use parse::parse_format;

/// Galaxy - an idea journal with keyword-based discovery
#[derive(Parser, Debug)]
#[command(name = "galaxy")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving the store
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit store root path
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Output format (human, json, records)
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (e.g. debug, or galaxy_core=trace)
    #[arg(long, global = true, env = "GALAXY_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
