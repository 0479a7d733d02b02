use clap::Args;
use std::path::PathBuf;

use pathgraph_core::graph::DijkstraStrategy;

use super::parse::parse_strategy;

#[derive(Args, Debug, Default)]
pub struct SolveArgs {
    /// Graph description file
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Report file to write
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Dijkstra selection strategy: linear-scan or binary-heap
    #[arg(long, value_parser = parse_strategy)]
    pub strategy: Option<DijkstraStrategy>,

    /// Warn if Bellman-Ford's result still relaxes (negative cycle)
    #[arg(long)]
    pub check_negative_cycles: bool,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Node identifiers to describe
    #[arg(required = true)]
    pub ids: Vec<String>,

    /// Graph description file
    #[arg(long, short)]
    pub input: Option<PathBuf>,
}
