//! CLI argument parsing for pathgraph
//!
//! Global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use pathgraph_core::format::OutputFormat;

pub use args::{ShowArgs, SolveArgs};
use parse::parse_format;

/// Pathgraph - Dijkstra and Bellman-Ford over weighted graph files
#[derive(Parser, Debug)]
#[command(name = "pathgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: ./pathgraph.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Report format: text or json (overrides config)
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "trace", "pathgraph_core=debug")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run Dijkstra and Bellman-Ford and write the report (default)
    Solve(SolveArgs),

    /// Describe nodes of the input graph and their edges
    Show(ShowArgs),

    /// Print the effective configuration as TOML
    Config,
}
