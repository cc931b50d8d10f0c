//! The graph facade — one node table, two synchronized backing stores.

use std::collections::HashMap;
use std::fmt;

use crate::graph::naming::NamingFn;
use crate::graph::oplog::OpLog;
use crate::store::{AdjacencyList, AdjacencyMatrix, ListEdge};
use crate::types::{GraphError, GraphKind, GraphResult, Node, NodeId, Point, DEFAULT_WEIGHT};

/// A graph maintaining an adjacency list and an adjacency matrix in lockstep.
///
/// Every mutation validates its preconditions against the node table and both
/// stores before touching either, so a failed call leaves the graph exactly as
/// it was. The flavor ([`GraphKind`]) is fixed at construction and decides how
/// edge calls dispatch: directed vs. mirrored, weighted vs. unweighted entry
/// point, parallel edges allowed or rejected.
pub struct Graph<T> {
    kind: GraphKind,
    /// Canonical node payloads; the stores only ever see [`NodeId`]s.
    nodes: HashMap<NodeId, Node<T>>,
    list: AdjacencyList,
    matrix: AdjacencyMatrix,
    /// Next handle to allocate. Never decremented, so handles are never reused.
    next_id: u64,
    naming_state: T,
    naming_fn: NamingFn<T>,
    log: OpLog,
}

impl<T: fmt::Display> Graph<T> {
    /// Create an empty graph of the given flavor.
    ///
    /// `seed` is the initial naming state; `naming_fn` produces each
    /// subsequent auto-generated value from the previous one.
    pub fn new(kind: GraphKind, seed: T, naming_fn: NamingFn<T>) -> Self {
        let mut log = OpLog::new();
        log.append(format!(
            "created graph with base value {} and kind {:?}",
            seed, kind
        ));
        Self {
            kind,
            nodes: HashMap::new(),
            list: AdjacencyList::new(),
            matrix: AdjacencyMatrix::new(),
            next_id: 0,
            naming_state: seed,
            naming_fn,
            log,
        }
    }

    /// This graph's flavor.
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Add a node at `position`, naming it by advancing the naming state.
    pub fn add_node(&mut self, position: Point) -> GraphResult<NodeId>
    where
        T: Clone,
    {
        let value = (self.naming_fn)(&self.naming_state);
        self.naming_state = value.clone();
        self.add_node_with(position, value)
    }

    /// Add a node at `position` with an explicit value.
    pub fn add_node_with(&mut self, position: Point, value: T) -> GraphResult<NodeId> {
        let id = NodeId::new(self.next_id);
        let res = self.insert_node(id, position, value);
        match &res {
            Ok(id) => self.log.append(format!(
                "added node {} ({}) to both stores",
                id, self.nodes[id]
            )),
            Err(e) => self.log.append(format!("failed to add node {}: {}", id, e)),
        }
        res
    }

    fn insert_node(&mut self, id: NodeId, position: Point, value: T) -> GraphResult<NodeId> {
        // A fresh handle must be unknown everywhere; a hit here means the
        // stores diverged from the node table.
        if self.nodes.contains_key(&id) || self.list.contains(id) || self.matrix.contains(id) {
            return Err(GraphError::InconsistentState(id));
        }
        self.matrix.add_node(id)?;
        self.list.add_node(id)?;
        self.nodes.insert(id, Node::new(value, position));
        self.next_id += 1;
        log::debug!("added node {}", id);
        Ok(id)
    }

    /// Remove a node from both stores, returning its payload.
    pub fn remove_node(&mut self, id: NodeId) -> GraphResult<Node<T>> {
        let res = self.extract_node(id);
        match &res {
            Ok(node) => self
                .log
                .append(format!("removed node {} ({}) from both stores", id, node)),
            Err(e) => self
                .log
                .append(format!("failed to remove node {}: {}", id, e)),
        }
        res
    }

    fn extract_node(&mut self, id: NodeId) -> GraphResult<Node<T>> {
        self.probe_stores(id)?;
        let from_matrix = self.matrix.remove_node(id)?;
        let from_list = self.list.remove_node(id)?;
        if from_matrix != from_list {
            return Err(GraphError::InconsistentState(id));
        }
        log::debug!("removed node {}", id);
        self.nodes
            .remove(&id)
            .ok_or(GraphError::InconsistentState(id))
    }

    /// Add an edge on an unweighted graph.
    ///
    /// Fails with [`GraphError::WrongEntryPoint`] if this graph is weighted.
    /// On undirected graphs the reverse direction is committed as well.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> GraphResult<()> {
        let res = if self.kind.weighted {
            Err(GraphError::WrongEntryPoint { weighted: false })
        } else {
            self.insert_edge(a, b, DEFAULT_WEIGHT)
        };
        match &res {
            Ok(()) => self.log.append(format!("added edge {} -> {}", a, b)),
            Err(e) => self
                .log
                .append(format!("failed to add edge {} -> {}: {}", a, b, e)),
        }
        res
    }

    /// Add an edge with a weight on a weighted graph.
    ///
    /// The weight reaches only the adjacency list; the matrix records
    /// presence counts, never weights.
    pub fn add_edge_weighted(&mut self, a: NodeId, b: NodeId, weight: f64) -> GraphResult<()> {
        let res = if !self.kind.weighted {
            Err(GraphError::WrongEntryPoint { weighted: true })
        } else {
            self.insert_edge(a, b, weight)
        };
        match &res {
            Ok(()) => self.log.append(format!(
                "added edge {} -> {} with weight {}",
                a, b, weight
            )),
            Err(e) => self
                .log
                .append(format!("failed to add edge {} -> {}: {}", a, b, e)),
        }
        res
    }

    /// Confirm a node the table knows is also known to both stores.
    fn probe_stores(&self, id: NodeId) -> GraphResult<()> {
        if !self.nodes.contains_key(&id) {
            return Err(GraphError::NodeNotFound(id));
        }
        if !self.list.contains(id) || !self.matrix.contains(id) {
            return Err(GraphError::InconsistentState(id));
        }
        Ok(())
    }

    fn insert_edge(&mut self, a: NodeId, b: NodeId, weight: f64) -> GraphResult<()> {
        self.probe_stores(a)?;
        self.probe_stores(b)?;
        if !self.kind.multi {
            // One direction suffices: on an undirected graph b -> a exists
            // exactly when a -> b does.
            match self.matrix.edge_count(a, b) {
                Some(0) => {}
                Some(_) => return Err(GraphError::EdgeAlreadyExists { source: a, target: b }),
                None => return Err(GraphError::InconsistentState(a)),
            }
        }
        self.matrix.add_edge(a, b)?;
        self.list.add_edge(a, b, weight)?;
        if !self.kind.directed {
            self.matrix.add_edge(b, a)?;
            self.list.add_edge(b, a, weight)?;
        }
        log::debug!("added edge {} -> {} (weight {})", a, b, weight);
        Ok(())
    }

    /// Remove an edge, mirroring `add_edge`'s dispatch: undirected graphs
    /// lose both directions, multigraphs lose one multiplicity per call.
    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) -> GraphResult<()> {
        let res = self.delete_edge(a, b);
        match &res {
            Ok(()) => self.log.append(format!("removed edge {} -> {}", a, b)),
            Err(e) => self
                .log
                .append(format!("failed to remove edge {} -> {}: {}", a, b, e)),
        }
        res
    }

    fn delete_edge(&mut self, a: NodeId, b: NodeId) -> GraphResult<()> {
        self.probe_stores(a)?;
        self.probe_stores(b)?;
        match self.matrix.edge_count(a, b) {
            Some(0) | None => return Err(GraphError::EdgeNotFound { source: a, target: b }),
            Some(_) => {}
        }
        self.matrix.remove_edge(a, b)?;
        self.list.remove_edge(a, b)?;
        if !self.kind.directed {
            self.matrix.remove_edge(b, a)?;
            self.list.remove_edge(b, a)?;
        }
        log::debug!("removed edge {} -> {}", a, b);
        Ok(())
    }

    /// The node closest to `point` by squared Euclidean distance.
    ///
    /// A plain O(n) scan over insertion order; ties go to the node added
    /// first. Expected node counts make a spatial index not worth carrying.
    pub fn closest_node(&self, point: Point) -> Option<NodeId> {
        let mut best: Option<(NodeId, i64)> = None;
        for &id in self.matrix.nodes() {
            let d = self.nodes[&id].position().distance_sq(point);
            if best.map_or(true, |(_, min)| d < min) {
                best = Some((id, d));
            }
        }
        best.map(|(id, _)| id)
    }

    /// The node's outgoing edges, in insertion order.
    pub fn neighbors(&self, id: NodeId) -> GraphResult<&[ListEdge]> {
        self.list.neighbors(id)
    }

    /// Multiplicity of the `a -> b` edge; `None` if either node is unknown.
    pub fn edge_count(&self, a: NodeId, b: NodeId) -> Option<u32> {
        self.matrix.edge_count(a, b)
    }

    /// Immutable access to a node's payload.
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(&id)
    }

    /// Mutable access to a node's payload (value, position, selection).
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.nodes.get_mut(&id)
    }

    /// All node handles in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.matrix.nodes().iter().copied()
    }

    /// Whether the node is present.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The operation log, oldest entry first.
    pub fn log(&self) -> &[String] {
        self.log.entries()
    }

    /// Debug dump of the adjacency matrix with node values as labels.
    pub fn render_matrix(&self) -> String {
        self.matrix.render(|id| match self.nodes.get(&id) {
            Some(node) => node.value().to_string(),
            None => id.to_string(),
        })
    }

    /// Debug dump of the adjacency list.
    pub fn render_list(&self) -> String {
        self.list.render()
    }
}

impl<T: fmt::Display> fmt::Debug for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("kind", &self.kind)
            .field("nodes", &self.nodes.len())
            .field("edges", &self.list.edge_count())
            .finish()
    }
}
