//! `pathgraph config` - print the effective configuration

use crate::commands::dispatch::CommandContext;
use pathgraph_core::error::Result;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    print!("{}", ctx.config.to_toml()?);
    Ok(())
}
