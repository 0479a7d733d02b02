//! Error macros for pathgraph

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::PathgraphError::invalid_value($context, $value))
    };
}

/// Macro for rejecting a malformed line of the graph file
#[macro_export]
macro_rules! bail_malformed {
    ($line:expr, $reason:expr) => {
        return Err($crate::error::PathgraphError::malformed($line, $reason))
    };
}
