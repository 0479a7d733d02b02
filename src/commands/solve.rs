//! `pathgraph solve` - run both algorithms and write the report

use tracing::{debug, warn};

use crate::cli::SolveArgs;
use crate::commands::dispatch::CommandContext;
use pathgraph_core::error::Result;
use pathgraph_core::graph::{bellman_ford, dijkstra_with, has_negative_cycle};
use pathgraph_core::io::{read_graph_file, write_report, Report};

pub fn execute(ctx: &CommandContext, args: &SolveArgs) -> Result<()> {
    let input_path = args.input.as_ref().unwrap_or(&ctx.config.input);
    let output_path = args.output.as_ref().unwrap_or(&ctx.config.output);
    let strategy = args.strategy.unwrap_or(ctx.config.dijkstra_strategy);

    let input = read_graph_file(input_path)?;
    debug!(
        elapsed = ?ctx.start.elapsed(),
        path = %input_path.display(),
        nodes = input.graph.len(),
        edges = input.applied_edges,
        "read_graph"
    );

    let report = Report {
        dijkstra: dijkstra_with(&input.graph, &input.start, strategy),
        bellman_ford: bellman_ford(&input.graph, &input.start),
    };
    debug!(elapsed = ?ctx.start.elapsed(), "solve");

    if (args.check_negative_cycles || ctx.config.check_negative_cycles)
        && has_negative_cycle(&input.graph, &report.bellman_ford)
    {
        warn!(
            start = %input.start,
            "negative cycle reachable from start; Bellman-Ford distances are not final"
        );
    }

    write_report(output_path, &report, ctx.config.format)?;
    debug!(elapsed = ?ctx.start.elapsed(), path = %output_path.display(), "write_report");

    Ok(())
}
