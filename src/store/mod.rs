//! The two backing representations kept in sync by the graph facade.

pub mod list;
pub mod matrix;

pub use list::{AdjacencyList, ListEdge};
pub use matrix::AdjacencyMatrix;
