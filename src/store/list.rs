//! Adjacency-list backing store.

use std::collections::HashMap;
use std::fmt::Write as _;

use crate::types::{GraphError, GraphResult, NodeId};

/// One outgoing entry in a node's edge sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListEdge {
    /// Node this edge points at.
    pub target: NodeId,
    /// Edge weight; `DEFAULT_WEIGHT` for edges added through the unweighted path.
    pub weight: f64,
}

/// Mapping from node to an ordered sequence of outgoing `(target, weight)` edges.
///
/// Sequences preserve insertion order and may hold parallel entries for the
/// same target; the multiplicity policy is enforced by the facade, not here.
/// Node lookup is O(1) average, edge operations are O(degree).
#[derive(Debug, Default)]
pub struct AdjacencyList {
    edges: HashMap<NodeId, Vec<ListEdge>>,
}

impl AdjacencyList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node with an empty edge sequence.
    pub fn add_node(&mut self, id: NodeId) -> GraphResult<()> {
        if self.edges.contains_key(&id) {
            return Err(GraphError::NodeAlreadyExists(id));
        }
        self.edges.insert(id, Vec::new());
        Ok(())
    }

    /// Append an edge to the source's sequence, unconditionally.
    ///
    /// Duplicate and parallel entries are allowed at this layer.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, weight: f64) -> GraphResult<()> {
        if !self.edges.contains_key(&target) {
            return Err(GraphError::NodeNotFound(target));
        }
        let seq = self
            .edges
            .get_mut(&source)
            .ok_or(GraphError::NodeNotFound(source))?;
        seq.push(ListEdge { target, weight });
        Ok(())
    }

    /// Remove a node, its own sequence, and every entry targeting it.
    ///
    /// Scans all remaining sequences, so this is O(total edges). The graph
    /// may be directed, so there is no cheaper way without a reverse index.
    pub fn remove_node(&mut self, id: NodeId) -> GraphResult<NodeId> {
        if self.edges.remove(&id).is_none() {
            return Err(GraphError::NodeNotFound(id));
        }
        for seq in self.edges.values_mut() {
            seq.retain(|e| e.target != id);
        }
        Ok(id)
    }

    /// Remove the first entry in the source's sequence targeting `target`.
    pub fn remove_edge(&mut self, source: NodeId, target: NodeId) -> GraphResult<()> {
        if !self.edges.contains_key(&target) {
            return Err(GraphError::NodeNotFound(target));
        }
        let seq = self
            .edges
            .get_mut(&source)
            .ok_or(GraphError::NodeNotFound(source))?;
        match seq.iter().position(|e| e.target == target) {
            Some(pos) => {
                seq.remove(pos);
                Ok(())
            }
            None => Err(GraphError::EdgeNotFound { source, target }),
        }
    }

    /// Remove the first entry matching an exact `(target, weight)` pair.
    ///
    /// The explicit-edge-reference counterpart of [`remove_edge`]: on a
    /// multigraph with parallel edges of different weights, this picks the
    /// one the caller actually holds.
    ///
    /// [`remove_edge`]: AdjacencyList::remove_edge
    pub fn remove_edge_exact(
        &mut self,
        source: NodeId,
        target: NodeId,
        weight: f64,
    ) -> GraphResult<()> {
        if !self.edges.contains_key(&target) {
            return Err(GraphError::NodeNotFound(target));
        }
        let seq = self
            .edges
            .get_mut(&source)
            .ok_or(GraphError::NodeNotFound(source))?;
        match seq.iter().position(|e| e.target == target && e.weight == weight) {
            Some(pos) => {
                seq.remove(pos);
                Ok(())
            }
            None => Err(GraphError::EdgeNotFound { source, target }),
        }
    }

    /// Whether at least one entry targeting `target` exists in the source's
    /// sequence. Absent endpoints yield `false`, never an error.
    pub fn edge_exists(&self, source: NodeId, target: NodeId) -> bool {
        match self.edges.get(&source) {
            Some(seq) => self.edges.contains_key(&target) && seq.iter().any(|e| e.target == target),
            None => false,
        }
    }

    /// The node's outgoing edge sequence, in insertion order.
    ///
    /// Returned as an immutable borrow; callers cannot mutate the sequence
    /// behind the store's back.
    pub fn neighbors(&self, id: NodeId) -> GraphResult<&[ListEdge]> {
        self.edges
            .get(&id)
            .map(Vec::as_slice)
            .ok_or(GraphError::NodeNotFound(id))
    }

    /// Whether the node is registered.
    pub fn contains(&self, id: NodeId) -> bool {
        self.edges.contains_key(&id)
    }

    /// Snapshot of all registered node ids (unordered).
    pub fn nodes(&self) -> Vec<NodeId> {
        self.edges.keys().copied().collect()
    }

    /// Number of registered nodes.
    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    /// Total number of edge entries across all sequences.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Whether the store holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Text dump for debugging, one `id: target(weight) ...` line per node.
    pub fn render(&self) -> String {
        let mut ids: Vec<NodeId> = self.edges.keys().copied().collect();
        ids.sort_unstable();
        let mut out = String::new();
        for id in ids {
            let _ = write!(out, "{}:", id);
            for e in &self.edges[&id] {
                let _ = write!(out, " {}({})", e.target, e.weight);
            }
            out.push('\n');
        }
        out
    }
}
