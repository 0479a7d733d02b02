//! Pathgraph Core Library
//!
//! Weighted graph container and single-source shortest-path algorithms
//! (Dijkstra and Bellman-Ford), plus the flat-file reader and report writer.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod io;
pub mod logging;
