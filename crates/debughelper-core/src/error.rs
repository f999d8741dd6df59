use thiserror::Error;

use crate::item::NodeRef;

/// Errors raised while a node executes.
///
/// `Api`, `Operation` and `Generic` mirror the three error shapes the host
/// understands. The remaining variants cover failures of the node's own
/// machinery.
#[derive(Debug, Error)]
pub enum NodeError {
    /// Host "NodeApiError": an upstream service rejected a request.
    #[error("{message}")]
    Api {
        node: NodeRef,
        message: String,
        description: Option<String>,
    },
    /// Host "NodeOperationError": the node could not complete its operation.
    #[error("{message}")]
    Operation {
        node: NodeRef,
        message: String,
        description: Option<String>,
    },
    /// Plain error without host metadata.
    #[error("{0}")]
    Generic(String),
    /// A parameter is missing or has the wrong shape.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },
    /// A parameter schema could not be compiled.
    #[error("schema error: {0}")]
    Schema(String),
    /// Memory could not be reserved.
    #[error("memory error: {0}")]
    Memory(String),
}

impl NodeError {
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Name of the error shape as the host reports it.
    pub fn kind(&self) -> &'static str {
        match self {
            NodeError::Api { .. } => "NodeApiError",
            NodeError::Operation { .. } => "NodeOperationError",
            NodeError::Generic(_) => "Error",
            NodeError::InvalidParameter { .. } => "InvalidParameter",
            NodeError::Schema(_) => "SchemaError",
            NodeError::Memory(_) => "MemoryError",
        }
    }

    /// Node instance attached to host-shaped errors.
    pub fn node(&self) -> Option<&NodeRef> {
        match self {
            NodeError::Api { node, .. } | NodeError::Operation { node, .. } => Some(node),
            _ => None,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            NodeError::Api { description, .. } | NodeError::Operation { description, .. } => {
                description.as_deref()
            }
            _ => None,
        }
    }
}

/// Convenience alias for results returned by DebugHelper crates.
pub type Result<T> = std::result::Result<T, NodeError>;
