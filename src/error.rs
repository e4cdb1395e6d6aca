use thiserror::Error;

/// Errors that can occur during test-case generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Expected exactly one start node in the process, but found {found}")]
    StartNodeCount { found: usize },

    #[error("The process has no end nodes")]
    NoEndNodes,

    #[error("Node '{node_id}' is referenced by a connection but does not exist in the process")]
    NodeNotFound { node_id: String },

    #[error("Could not find a path from the start node to node '{node}'")]
    NoPathFromStart { node: String },

    #[error("Could not find a path from node '{node}' to any end node")]
    NoPathToEnd { node: String },
}

/// Errors that can occur when converting a custom user format into a `ProcessDefinition`.
#[derive(Error, Debug, Clone)]
pub enum ProcessConversionError {
    #[error("Invalid process data: {0}")]
    ValidationError(String),
}
