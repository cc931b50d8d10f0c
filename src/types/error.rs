//! Error types for the dualgraph library.

use std::fmt;

use super::NodeId;

/// All errors that can occur in the dualgraph library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// Node referenced by an operation does not exist.
    NodeNotFound(NodeId),

    /// Node is already present in the store.
    NodeAlreadyExists(NodeId),

    /// No edge exists between the two nodes in the given direction.
    EdgeNotFound { source: NodeId, target: NodeId },

    /// Edge already present and the graph does not allow parallel edges.
    EdgeAlreadyExists { source: NodeId, target: NodeId },

    /// The weighted entry point was called on an unweighted graph, or vice versa.
    WrongEntryPoint { weighted: bool },

    /// The backing stores disagree about a node's membership.
    InconsistentState(NodeId),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::NodeNotFound(id) => write!(f, "node {id} not found"),
            GraphError::NodeAlreadyExists(id) => write!(f, "node {id} already exists"),
            GraphError::EdgeNotFound { source, target } => {
                write!(f, "no edge from {source} to {target}")
            }
            GraphError::EdgeAlreadyExists { source, target } => {
                write!(f, "edge {source} -> {target} already exists on a non-multi graph")
            }
            GraphError::WrongEntryPoint { weighted } => {
                write!(f, "wrong add_edge entry point for this graph (weighted call: {weighted})")
            }
            GraphError::InconsistentState(id) => {
                write!(f, "backing stores are inconsistent for node {id}")
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// Convenience result type for dualgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
