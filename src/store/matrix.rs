//! Adjacency-matrix backing store.

use std::collections::HashMap;
use std::fmt::Write as _;

use crate::types::{GraphError, GraphResult, NodeId};

/// Starting capacity of the doubling growth policy.
const INITIAL_CAPACITY: usize = 1;

/// Dense square grid of edge multiplicities plus a node ↔ index bijection.
///
/// Cells count edges rather than holding edge objects, so parallel edges on a
/// multigraph are a single incremented integer. New nodes always receive the
/// highest index, and `capacity` doubles whenever the node count reaches it,
/// keeping insertion amortized O(1) rows.
#[derive(Debug)]
pub struct AdjacencyMatrix {
    /// Row-major multiplicity grid, always exactly `node_of.len()` square.
    matrix: Vec<Vec<u32>>,
    /// Node to matrix index.
    index_of: HashMap<NodeId, usize>,
    /// Matrix index to node; exact inverse of `index_of`.
    node_of: Vec<NodeId>,
    /// Doubling trigger; only ever grows.
    capacity: usize,
}

impl Default for AdjacencyMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl AdjacencyMatrix {
    /// Create an empty matrix.
    pub fn new() -> Self {
        Self {
            matrix: Vec::with_capacity(INITIAL_CAPACITY),
            index_of: HashMap::new(),
            node_of: Vec::new(),
            capacity: INITIAL_CAPACITY,
        }
    }

    /// Register a node, assigning it the next free index.
    ///
    /// Grows the grid by one row and one column, zero-filled. Existing cells
    /// keep their indices across growth; only removal ever renumbers.
    pub fn add_node(&mut self, id: NodeId) -> GraphResult<()> {
        if self.index_of.contains_key(&id) {
            return Err(GraphError::NodeAlreadyExists(id));
        }

        self.index_of.insert(id, self.node_of.len());
        self.node_of.push(id);

        if self.node_of.len() == self.capacity {
            self.grow();
        }

        let n = self.node_of.len();
        let mut row = Vec::with_capacity(self.capacity);
        row.resize(n, 0);
        self.matrix.push(row);
        for row in &mut self.matrix[..n - 1] {
            row.push(0);
        }

        Ok(())
    }

    /// Remove a node, its row and column, and renumber higher indices down.
    ///
    /// Renumbering keeps indices dense and contiguous at O(node count) per
    /// removal; removals are assumed far rarer than the other updates.
    pub fn remove_node(&mut self, id: NodeId) -> GraphResult<NodeId> {
        let index = self
            .index_of
            .remove(&id)
            .ok_or(GraphError::NodeNotFound(id))?;
        let removed = self.node_of.remove(index);

        for v in self.index_of.values_mut() {
            if *v > index {
                *v -= 1;
            }
        }

        self.matrix.remove(index);
        for row in &mut self.matrix {
            row.remove(index);
        }

        Ok(removed)
    }

    /// Increment the `(source, target)` multiplicity cell.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> GraphResult<()> {
        let (i, j) = self.cell_indices(source, target)?;
        self.matrix[i][j] += 1;
        Ok(())
    }

    /// Decrement the `(source, target)` multiplicity cell.
    pub fn remove_edge(&mut self, source: NodeId, target: NodeId) -> GraphResult<()> {
        let (i, j) = self.cell_indices(source, target)?;
        if self.matrix[i][j] == 0 {
            return Err(GraphError::EdgeNotFound { source, target });
        }
        self.matrix[i][j] -= 1;
        Ok(())
    }

    /// Current multiplicity of the `(source, target)` cell.
    ///
    /// A single channel doing double duty: `None` is the reserved signal for
    /// an unknown endpoint, `Some(0)` means both nodes exist but no edge does.
    pub fn edge_count(&self, source: NodeId, target: NodeId) -> Option<u32> {
        let i = *self.index_of.get(&source)?;
        let j = *self.index_of.get(&target)?;
        Some(self.matrix[i][j])
    }

    /// Whether the node is registered.
    pub fn contains(&self, id: NodeId) -> bool {
        self.index_of.contains_key(&id)
    }

    /// The node's current matrix index, if registered.
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.index_of.get(&id).copied()
    }

    /// All registered nodes in insertion order. Owned by the matrix; treat as
    /// read-only.
    pub fn nodes(&self) -> &[NodeId] {
        &self.node_of
    }

    /// Number of registered nodes.
    pub fn node_count(&self) -> usize {
        self.node_of.len()
    }

    /// Current doubling-trigger capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Tabular text view with row/column labels, sized to the widest cell.
    ///
    /// Presentation only; `label` maps each node to its printed name.
    pub fn render(&self, label: impl Fn(NodeId) -> String) -> String {
        if self.node_of.is_empty() {
            return "empty".to_string();
        }

        let labels: Vec<String> = self.node_of.iter().map(|&id| label(id)).collect();
        let mut width = labels.iter().map(String::len).max().unwrap_or(0);
        for row in &self.matrix {
            for cell in row {
                width = width.max(cell.to_string().len());
            }
        }
        width += 2;

        let mut out = String::new();
        out.push_str(&" ".repeat(width));
        out.push('|');
        for name in &labels {
            out.push_str(&centered(name, width));
            out.push('|');
        }
        out.push('\n');
        for _ in 0..=self.node_of.len() {
            out.push_str(&"-".repeat(width));
            out.push('+');
        }
        for (i, name) in labels.iter().enumerate() {
            out.push('\n');
            out.push_str(&centered(name, width));
            out.push('|');
            for cell in &self.matrix[i] {
                let _ = write!(out, "{}|", centered(&cell.to_string(), width));
            }
        }

        out
    }

    fn cell_indices(&self, source: NodeId, target: NodeId) -> GraphResult<(usize, usize)> {
        let i = *self
            .index_of
            .get(&source)
            .ok_or(GraphError::NodeNotFound(source))?;
        let j = *self
            .index_of
            .get(&target)
            .ok_or(GraphError::NodeNotFound(target))?;
        Ok((i, j))
    }

    /// Double the capacity and pre-reserve existing rows.
    fn grow(&mut self) {
        self.capacity *= 2;
        log::trace!("matrix capacity doubled to {}", self.capacity);
        self.matrix.reserve(self.capacity - self.matrix.len());
        for row in &mut self.matrix {
            row.reserve(self.capacity - row.len());
        }
    }
}

fn centered(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.len());
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(pad - left))
}
