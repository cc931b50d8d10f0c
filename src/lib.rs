//! dualgraph — an in-memory graph container with two synchronized backings.
//!
//! A [`Graph`] keeps an adjacency list (ordered, weighted edge sequences) and
//! an adjacency matrix (dense multiplicity counts) consistent behind one
//! facade, and supports four composable flavors chosen at construction:
//! directed/undirected, weighted/unweighted, simple/multi.

pub mod graph;
pub mod store;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{naming, Graph, NamingFn, OpLog};
pub use store::{AdjacencyList, AdjacencyMatrix, ListEdge};
pub use types::{
    GraphError, GraphKind, GraphResult, Node, NodeId, Point, DEFAULT_WEIGHT, DIRECTED, MULTI,
    WEIGHTED,
};
