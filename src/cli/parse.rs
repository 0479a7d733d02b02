use pathgraph_core::format::OutputFormat;
use pathgraph_core::graph::DijkstraStrategy;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse Dijkstra strategy from string
pub fn parse_strategy(s: &str) -> std::result::Result<DijkstraStrategy, String> {
    s.parse::<DijkstraStrategy>().map_err(|e| e.to_string())
}
