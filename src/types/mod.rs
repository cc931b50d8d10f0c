//! All data types for the dualgraph library.

pub mod error;
pub mod kind;
pub mod node;

pub use error::{GraphError, GraphResult};
pub use kind::{GraphKind, DIRECTED, MULTI, WEIGHTED};
pub use node::{Node, NodeId, Point};

/// Weight recorded for edges added through the unweighted entry point.
pub const DEFAULT_WEIGHT: f64 = 1.0;
