use std::collections::HashMap;
use std::time::Instant;

use crate::graph::algos::shared::SearchState;
use crate::graph::types::{Algorithm, Distance, PathTable};
use crate::graph::Graph;
use crate::trace_time;

/// Run Bellman-Ford from `start`.
///
/// Relaxes every directed edge for up to `|V| - 1` passes, stopping early
/// once a pass changes nothing. Negative weights are allowed. A negative
/// cycle is not detected here; the table reflects whatever the passes
/// produced. See [`has_negative_cycle`].
#[tracing::instrument(skip(graph), fields(start = %start, nodes = graph.len()))]
pub fn bellman_ford<P>(graph: &Graph<P>, start: &str) -> PathTable {
    let begin = Instant::now();
    let mut state = SearchState::new(graph, start);
    let edges = state.indexed_edges(graph);

    let mut passes = 0;
    for _ in 1..state.ids.len() {
        passes += 1;
        let mut updated = false;
        for &(u, v, w) in &edges {
            updated |= state.relax(u, v, w);
        }
        if !updated {
            break;
        }
    }

    trace_time!(begin, "bellman_ford", passes = passes, edges = edges.len());
    state.into_table(Algorithm::BellmanFord, start)
}

/// Run one extra relaxation pass over a finished table.
///
/// Returns true if any edge still improves a distance, which means a
/// negative cycle is reachable from the start. On an undirected graph any
/// reachable negative edge qualifies.
pub fn has_negative_cycle<P>(graph: &Graph<P>, table: &PathTable) -> bool {
    let distance: HashMap<&str, Distance> = table
        .entries
        .iter()
        .map(|e| (e.id.as_str(), e.distance))
        .collect();

    graph.edges().into_iter().any(|(u, v, w)| {
        match (distance.get(u), distance.get(v)) {
            (Some(du), Some(dv)) => du.is_finite() && du.plus(w) < *dv,
            _ => false,
        }
    })
}
