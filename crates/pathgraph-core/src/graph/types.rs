use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PathgraphError;

/// Edge weight. Input weights are signed 32-bit values; sums are carried
/// in 64 bits so relaxation never overflows.
pub type Weight = i64;

/// Printed distance for a node no path reaches
pub const INFINITY_SENTINEL: i64 = i32::MAX as i64;

/// Printed parent for a node with no predecessor
pub const MISSING_PARENT_SENTINEL: &str = "null";

/// Parent printed for the Dijkstra start row (its distance prints as -1 too)
pub const DIJKSTRA_START_SENTINEL: &str = "-1";

/// Parent printed for the Bellman-Ford start row
pub const BELLMAN_FORD_START_SENTINEL: &str = "0";

/// Compare node identifiers by numeric value.
///
/// Numeric identifiers come first in numeric order; anything that does not
/// parse as an integer follows in lexicographic order.
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Shortest known distance to a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Distance {
    Finite(i64),
    /// No path found (yet)
    Infinite,
}

impl Distance {
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Distance after following an edge of `weight`; infinity stays infinite
    pub fn plus(self, weight: Weight) -> Distance {
        match self {
            Distance::Finite(d) => Distance::Finite(d.saturating_add(weight)),
            Distance::Infinite => Distance::Infinite,
        }
    }

    /// Value written to reports; infinity maps to [`INFINITY_SENTINEL`]
    pub fn as_reported(&self) -> i64 {
        match self {
            Distance::Finite(d) => *d,
            Distance::Infinite => INFINITY_SENTINEL,
        }
    }
}

/// Predecessor of a node on the shortest-path tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parent {
    /// The node is the search start
    Start,
    Node(String),
    /// Not reached
    None,
}

/// Which algorithm produced a table; decides how the start row is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Dijkstra,
    BellmanFord,
}

impl Algorithm {
    /// Section header used in text reports
    pub fn title(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::BellmanFord => "Bellman-Ford",
        }
    }
}

/// Selection strategy for Dijkstra's "closest unvisited node" step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DijkstraStrategy {
    /// Scan every unvisited node, O(V^2)
    #[default]
    LinearScan,
    /// Min-heap with lazy deletion, O((V + E) log V)
    BinaryHeap,
}

impl FromStr for DijkstraStrategy {
    type Err = PathgraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear-scan" | "linear" => Ok(DijkstraStrategy::LinearScan),
            "binary-heap" | "heap" => Ok(DijkstraStrategy::BinaryHeap),
            other => crate::bail_invalid!("dijkstra strategy", other),
        }
    }
}

impl fmt::Display for DijkstraStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DijkstraStrategy::LinearScan => write!(f, "linear-scan"),
            DijkstraStrategy::BinaryHeap => write!(f, "binary-heap"),
        }
    }
}

/// Computed distance and predecessor for one node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    pub id: String,
    pub distance: Distance,
    pub parent: Parent,
}

/// One reported line: `id distance parent`, sentinels applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub id: String,
    pub distance: i64,
    pub parent: String,
}

/// Result of one single-source shortest-path run
#[derive(Debug, Clone)]
pub struct PathTable {
    pub algorithm: Algorithm,
    pub start: String,
    /// Sorted by numeric identifier
    pub entries: Vec<PathEntry>,
}

impl PathTable {
    pub fn get(&self, id: &str) -> Option<&PathEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows as they are reported.
    ///
    /// Dijkstra's start row always reads `-1 -1`. Bellman-Ford keeps the
    /// computed distance and reports its start parent as `0`.
    pub fn rows(&self) -> Vec<ReportRow> {
        self.entries
            .iter()
            .map(|entry| {
                if self.algorithm == Algorithm::Dijkstra && entry.id == self.start {
                    return ReportRow {
                        id: entry.id.clone(),
                        distance: -1,
                        parent: DIJKSTRA_START_SENTINEL.to_string(),
                    };
                }
                let parent = match &entry.parent {
                    Parent::Start => match self.algorithm {
                        Algorithm::Dijkstra => DIJKSTRA_START_SENTINEL.to_string(),
                        Algorithm::BellmanFord => BELLMAN_FORD_START_SENTINEL.to_string(),
                    },
                    Parent::Node(id) => id.clone(),
                    Parent::None => MISSING_PARENT_SENTINEL.to_string(),
                };
                ReportRow {
                    id: entry.id.clone(),
                    distance: entry.distance.as_reported(),
                    parent,
                }
            })
            .collect()
    }
}
