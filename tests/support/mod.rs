use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for pathgraph
pub fn pathgraph() -> Command {
    cargo_bin_cmd!("pathgraph")
}

/// Write a graph description file and return its path
pub fn write_graph(dir: &Path, name: &str, nodes: usize, start: &str, edges: &[(u32, u32, i32)]) -> PathBuf {
    let mut content = format!("{}\n{}\n{}\n", nodes, start, edges.len());
    for (from, to, weight) in edges {
        content.push_str(&format!("{} {} {}\n", from, to, weight));
    }
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Rows of the first (Dijkstra) and second (Bellman-Ford) report blocks
#[allow(dead_code)]
pub fn report_blocks(report: &str) -> (Vec<String>, Vec<String>) {
    let (dijkstra, bellman_ford) = report
        .split_once("Bellman-Ford\n")
        .expect("report has a Bellman-Ford section");
    let rows = |block: &str| -> Vec<String> {
        block
            .lines()
            .filter(|l| l.split_whitespace().count() == 3)
            .map(str::to_string)
            .collect()
    };
    (rows(dijkstra), rows(bellman_ford))
}
