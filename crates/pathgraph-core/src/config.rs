//! Run configuration for pathgraph
//!
//! Read from an optional `pathgraph.toml`; command-line flags override it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PathgraphError, Result};
use crate::format::OutputFormat;
use crate::graph::DijkstraStrategy;

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "pathgraph.toml";

pub const DEFAULT_INPUT_FILE: &str = "graph-input.txt";

pub const DEFAULT_OUTPUT_FILE: &str = "graph-output.txt";

/// Run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Graph description to read
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Report file to write
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Report format
    #[serde(default)]
    pub format: OutputFormat,

    /// Selection strategy for Dijkstra
    #[serde(default)]
    pub dijkstra_strategy: DijkstraStrategy,

    /// Warn when Bellman-Ford's table still relaxes after its passes
    #[serde(default)]
    pub check_negative_cycles: bool,
}

fn default_input() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_FILE)
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            format: OutputFormat::default(),
            dijkstra_strategy: DijkstraStrategy::default(),
            check_negative_cycles: false,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| PathgraphError::io_operation("read config", path.display(), e))?;
        toml::from_str(&content).map_err(|e| PathgraphError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load `pathgraph.toml` from `dir` if present, else the defaults
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(DEFAULT_CONFIG_FILE);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading config");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| PathgraphError::Other(format!("failed to serialize config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.input, PathBuf::from("graph-input.txt"));
        assert_eq!(config.output, PathBuf::from("graph-output.txt"));
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.dijkstra_strategy, DijkstraStrategy::LinearScan);
        assert!(!config.check_negative_cycles);
    }

    #[test]
    fn test_load_partial_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pathgraph.toml");
        fs::write(
            &path,
            "input = \"in.txt\"\ndijkstra_strategy = \"binary-heap\"\ncheck_negative_cycles = true\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.input, PathBuf::from("in.txt"));
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT_FILE));
        assert_eq!(config.dijkstra_strategy, DijkstraStrategy::BinaryHeap);
        assert!(config.check_negative_cycles);
    }

    #[test]
    fn test_load_invalid_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pathgraph.toml");
        fs::write(&path, "format = \"xml\"\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, PathgraphError::InvalidConfig { .. }));
    }

    #[test]
    fn test_discover_without_file() {
        let dir = tempdir().unwrap();
        assert_eq!(Config::discover(dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = Config {
            format: OutputFormat::Json,
            ..Default::default()
        };
        let text = config.to_toml().unwrap();
        assert!(text.contains("format = \"json\""));
        assert_eq!(toml::from_str::<Config>(&text).unwrap(), config);
    }
}
