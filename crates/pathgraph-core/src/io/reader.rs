use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use tracing::{debug, warn};

use crate::bail_malformed;
use crate::error::{PathgraphError, Result};
use crate::graph::{Graph, Weight};
use crate::trace_time;

/// A parsed graph file
#[derive(Debug, Clone)]
pub struct GraphInput {
    /// Nodes carry an optional text payload; the loader leaves it unset
    pub graph: Graph<String>,
    pub start: String,
    /// Edge count declared on line 3; may be negative
    pub declared_edges: i32,
    /// Edge lines actually applied
    pub applied_edges: usize,
}

/// Read and parse a graph file
pub fn read_graph_file(path: &Path) -> Result<GraphInput> {
    let start = Instant::now();
    let file = File::open(path)
        .map_err(|e| PathgraphError::io_operation("open", path.display(), e))?;
    let input = parse_graph(BufReader::new(file))?;
    trace_time!(start, "read_graph_file", nodes = input.graph.len());
    Ok(input)
}

/// Next line, or a malformed-input error naming what was expected
fn header_line(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
    line_no: usize,
    what: &str,
) -> Result<String> {
    match lines.next() {
        Some(line) => Ok(line?.trim().to_string()),
        None => bail_malformed!(line_no, format!("missing {}", what)),
    }
}

/// Counts are signed like the rest of the format; a negative node count
/// creates no nodes
fn parse_count(text: &str, line_no: usize, what: &str) -> Result<i32> {
    text.parse::<i32>()
        .map_err(|_| PathgraphError::malformed(line_no, format!("{} is not a number: {:?}", what, text)))
}

/// Parse the graph description format.
///
/// The three header lines are required. Every following line with exactly
/// three tokens is an edge; other lines are skipped. The declared edge count
/// is informational only.
pub fn parse_graph<R: BufRead>(reader: R) -> Result<GraphInput> {
    let mut lines = reader.lines();

    let node_count = parse_count(&header_line(&mut lines, 1, "node count")?, 1, "node count")?;
    let start = header_line(&mut lines, 2, "start node")?;
    let declared_edges = parse_count(&header_line(&mut lines, 3, "edge count")?, 3, "edge count")?;

    let mut graph: Graph<String> = Graph::new();
    for i in 1..=node_count.max(0) {
        graph.add_node(i.to_string(), None);
    }

    let mut applied_edges = 0;
    for (offset, line) in lines.enumerate() {
        let line_no = offset + 4;
        let line = line?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        let &[from, to, weight] = parts.as_slice() else {
            if !parts.is_empty() {
                debug!(line = line_no, tokens = parts.len(), "skipping malformed edge line");
            }
            continue;
        };

        let weight: Weight = match weight.parse::<i32>() {
            Ok(w) => w.into(),
            Err(_) => bail_malformed!(line_no, format!("edge weight is not an integer: {:?}", weight)),
        };

        if !graph.has_node(from) || !graph.has_node(to) {
            warn!(line = line_no, from, to, "edge references unknown node; ignored");
            continue;
        }
        graph.connect(from, to, weight);
        graph.connect(to, from, weight);
        applied_edges += 1;
    }

    if i64::from(declared_edges) != applied_edges as i64 {
        warn!(declared = declared_edges, applied = applied_edges, "edge count mismatch");
    }

    debug!(nodes = graph.len(), edges = applied_edges, start = %start, "parsed graph");

    Ok(GraphInput {
        graph,
        start,
        declared_edges,
        applied_edges,
    })
}
