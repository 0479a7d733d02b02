//! Command trait and context for dispatching commands

use std::env;
use std::time::Instant;

use crate::cli::{Cli, Commands, SolveArgs};
use crate::commands::{config, show, solve};
use pathgraph_core::config::Config;
use pathgraph_core::error::Result;

/// Load the config named by `--config`, else `pathgraph.toml` in the
/// working directory, else defaults. `--format` overrides the file.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::discover(&env::current_dir()?)?,
    };

    if let Some(format) = cli.format {
        config.format = format;
    }

    Ok(config)
}

/// Shared context for command execution
pub struct CommandContext {
    pub config: Config,
    pub start: Instant,
}

impl CommandContext {
    pub fn new(cli: &Cli, start: Instant) -> Result<Self> {
        Ok(Self {
            config: resolve_config(cli)?,
            start,
        })
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Bare invocation: solve with configured paths
pub struct DefaultCommand;

impl Command for DefaultCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        solve::execute(ctx, &SolveArgs::default())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Solve(args) => solve::execute(ctx, args),
            Commands::Show(args) => show::execute(ctx, args),
            Commands::Config => config::execute(ctx),
        }
    }
}
