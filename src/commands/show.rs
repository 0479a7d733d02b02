//! `pathgraph show` - describe nodes of the input graph

use crate::cli::ShowArgs;
use crate::commands::dispatch::CommandContext;
use pathgraph_core::error::Result;
use pathgraph_core::io::read_graph_file;

pub fn execute(ctx: &CommandContext, args: &ShowArgs) -> Result<()> {
    let input_path = args.input.as_ref().unwrap_or(&ctx.config.input);
    let input = read_graph_file(input_path)?;

    for id in &args.ids {
        match input.graph.describe_node(id) {
            Some(text) => print!("{}", text),
            None => println!("No node named {}.", id),
        }
    }

    Ok(())
}
