use std::collections::HashMap;

use crate::graph::types::{Algorithm, Distance, Parent, PathEntry, PathTable, Weight};
use crate::graph::Graph;

/// Distance and parent bookkeeping for a single-source search.
///
/// Nodes are addressed by their position in numeric identifier order, so
/// tables come out sorted and index comparisons double as the tie-break.
pub struct SearchState<'g> {
    pub ids: Vec<&'g str>,
    pub index: HashMap<&'g str, usize>,
    pub distance: Vec<Distance>,
    pub parent: Vec<Parent>,
}

impl<'g> SearchState<'g> {
    /// Every node starts at infinity with no parent; `start` (if present)
    /// starts at zero
    pub fn new<P>(graph: &'g Graph<P>, start: &str) -> Self {
        let ids = graph.node_ids();
        let index: HashMap<&str, usize> = ids.iter().enumerate().map(|(i, id)| (*id, i)).collect();
        let mut distance = vec![Distance::Infinite; ids.len()];
        let mut parent = vec![Parent::None; ids.len()];

        if let Some(&s) = index.get(start) {
            distance[s] = Distance::Finite(0);
            parent[s] = Parent::Start;
        } else {
            tracing::warn!(start = %start, "start node not in graph; every node is unreachable");
        }

        Self {
            ids,
            index,
            distance,
            parent,
        }
    }

    pub fn start_index(&self, start: &str) -> Option<usize> {
        self.index.get(start).copied()
    }

    /// Edges of the graph translated to index triples
    pub fn indexed_edges<P>(&self, graph: &Graph<P>) -> Vec<(usize, usize, Weight)> {
        graph
            .edges()
            .into_iter()
            .filter_map(|(from, to, w)| Some((*self.index.get(from)?, *self.index.get(to)?, w)))
            .collect()
    }

    /// Relax `u -> v`; returns true if `v` improved
    pub fn relax(&mut self, u: usize, v: usize, weight: Weight) -> bool {
        if !self.distance[u].is_finite() {
            return false;
        }
        let candidate = self.distance[u].plus(weight);
        if candidate < self.distance[v] {
            self.distance[v] = candidate;
            self.parent[v] = Parent::Node(self.ids[u].to_string());
            true
        } else {
            false
        }
    }

    pub fn into_table(self, algorithm: Algorithm, start: &str) -> PathTable {
        let entries = self
            .ids
            .into_iter()
            .zip(self.distance)
            .zip(self.parent)
            .map(|((id, distance), parent)| PathEntry {
                id: id.to_string(),
                distance,
                parent,
            })
            .collect();

        PathTable {
            algorithm,
            start: start.to_string(),
            entries,
        }
    }
}
