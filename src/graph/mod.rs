//! The graph facade and its collaborators.

pub mod facade;
pub mod naming;
pub mod oplog;

pub use facade::Graph;
pub use naming::NamingFn;
pub use oplog::OpLog;
