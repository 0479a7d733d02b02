//! Command implementations for pathgraph

pub mod config;
pub mod dispatch;
pub mod show;
pub mod solve;
