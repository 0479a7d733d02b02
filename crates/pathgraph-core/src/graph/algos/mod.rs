//! Shortest-path algorithm implementations
//!
//! - `dijkstra`: non-negative weights, linear scan or binary heap selection
//! - `bellman_ford`: tolerates negative weights, plus a separate
//!   negative-cycle diagnostic
//! - `shared`: distance/parent bookkeeping used by both

pub mod bellman_ford;
pub mod dijkstra;
pub mod shared;

pub use bellman_ford::{bellman_ford, has_negative_cycle};
pub use dijkstra::{dijkstra, dijkstra_with};
