use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

use crate::graph::algos::shared::SearchState;
use crate::graph::types::{Algorithm, DijkstraStrategy, Distance, PathTable};
use crate::graph::Graph;
use crate::trace_time;

/// Wrapper for BinaryHeap to use as min-heap (ordered by distance, then by
/// identifier order)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapEntry {
    pub index: usize,
    pub distance: i64,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.index.cmp(&other.index))
    }
}

/// Dijkstra's algorithm with the default linear-scan selection
pub fn dijkstra<P>(graph: &Graph<P>, start: &str) -> PathTable {
    dijkstra_with(graph, start, DijkstraStrategy::default())
}

/// Run Dijkstra's algorithm from `start`.
///
/// Weights are assumed non-negative. The closest unvisited node is expanded
/// next; ties go to the lowest numeric identifier under either strategy, so
/// both produce the same table. Every outgoing edge of the expanded node is
/// relaxed, including edges back into visited nodes. Nodes never reached
/// stay at infinity with no parent.
#[tracing::instrument(skip(graph), fields(start = %start, nodes = graph.len(), strategy = %strategy))]
pub fn dijkstra_with<P>(graph: &Graph<P>, start: &str, strategy: DijkstraStrategy) -> PathTable {
    let begin = Instant::now();
    let mut state = SearchState::new(graph, start);

    let visited = match strategy {
        DijkstraStrategy::LinearScan => run_linear_scan(graph, &mut state),
        DijkstraStrategy::BinaryHeap => run_binary_heap(graph, start, &mut state),
    };

    trace_time!(begin, "dijkstra", visited = visited);
    state.into_table(Algorithm::Dijkstra, start)
}

/// Relax every outgoing edge of node `current`
fn expand<P>(graph: &Graph<P>, state: &mut SearchState<'_>, current: usize) -> Vec<usize> {
    let mut improved = Vec::new();
    for (neighbor, weight) in graph.neighbors(state.ids[current]) {
        if let Some(&v) = state.index.get(neighbor) {
            if state.relax(current, v, weight) {
                improved.push(v);
            }
        }
    }
    improved
}

/// Returns the number of visited nodes
fn run_linear_scan<P>(graph: &Graph<P>, state: &mut SearchState<'_>) -> usize {
    let n = state.ids.len();
    let mut visited = vec![false; n];
    let mut visited_count = 0;

    while visited_count < n {
        let mut current: Option<usize> = None;
        for i in 0..n {
            if visited[i] || !state.distance[i].is_finite() {
                continue;
            }
            if current.is_none_or(|c| state.distance[i] < state.distance[c]) {
                current = Some(i);
            }
        }

        let Some(current) = current else {
            break;
        };

        visited[current] = true;
        visited_count += 1;
        expand(graph, state, current);
    }

    visited_count
}

/// Returns the number of visited nodes
fn run_binary_heap<P>(graph: &Graph<P>, start: &str, state: &mut SearchState<'_>) -> usize {
    let mut visited = vec![false; state.ids.len()];
    let mut visited_count = 0;
    let mut heap = BinaryHeap::new();

    if let Some(s) = state.start_index(start) {
        heap.push(Reverse(HeapEntry {
            index: s,
            distance: 0,
        }));
    }

    while let Some(Reverse(HeapEntry { index, distance })) = heap.pop() {
        // Stale entry: node already expanded or improved since push
        if visited[index] || state.distance[index] != Distance::Finite(distance) {
            continue;
        }

        visited[index] = true;
        visited_count += 1;

        for v in expand(graph, state, index) {
            if let Distance::Finite(d) = state.distance[v] {
                heap.push(Reverse(HeapEntry { index: v, distance: d }));
            }
        }
    }

    visited_count
}
