//! Error types and exit codes for pathgraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O)
//! - 2: Usage error (bad flags, bad config values)
//! - 3: Data error (malformed graph file)
//!
//! Graph queries never produce these errors; a missing node is reported
//! through `false` / `None` return values instead.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes per pathgraph conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed input file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading, solving or writing a graph
#[derive(Error, Debug)]
pub enum PathgraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: text or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("invalid config in {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl PathgraphError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        PathgraphError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a malformed line of the graph file (1-based)
    pub fn malformed(line: usize, reason: impl std::fmt::Display) -> Self {
        PathgraphError::MalformedInput {
            line,
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        PathgraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PathgraphError::UnknownFormat(_)
            | PathgraphError::UsageError(_)
            | PathgraphError::InvalidValue { .. } => ExitCode::Usage,

            PathgraphError::MalformedInput { .. } | PathgraphError::InvalidConfig { .. } => {
                ExitCode::Data
            }

            PathgraphError::Io(_)
            | PathgraphError::Json(_)
            | PathgraphError::FailedOperationWithTarget { .. }
            | PathgraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            PathgraphError::UnknownFormat(_) => "unknown_format",
            PathgraphError::UsageError(_) => "usage_error",
            PathgraphError::InvalidValue { .. } => "invalid_value",
            PathgraphError::MalformedInput { .. } => "malformed_input",
            PathgraphError::InvalidConfig { .. } => "invalid_config",
            PathgraphError::Io(_) => "io_error",
            PathgraphError::Json(_) => "json_error",
            PathgraphError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            PathgraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for pathgraph operations
pub type Result<T> = std::result::Result<T, PathgraphError>;
