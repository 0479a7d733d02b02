//! Flat-file input and report output
//!
//! Input format:
//! ```text
//! <node count N>
//! <start identifier>
//! <edge count M>
//! <from> <to> <weight>     (repeated)
//! ```
//! Nodes "1".."N" are created up front and each edge line is installed in
//! both directions.

pub mod reader;
pub mod writer;

pub use reader::{parse_graph, read_graph_file, GraphInput};
pub use writer::{render, render_json, render_text, write_report, Report};
