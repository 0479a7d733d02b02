//! Command dispatch logic for pathgraph

use std::time::Instant;

use crate::cli::Cli;
use pathgraph_core::error::Result;
use tracing::debug;

mod command;

pub use command::{Command, CommandContext, DefaultCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start)?;

    debug!(elapsed = ?start.elapsed(), "resolve_config");

    match &cli.command {
        None => DefaultCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
