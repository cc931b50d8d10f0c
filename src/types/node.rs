//! Node handles, positions, and the node payload.

use std::fmt;

/// Opaque handle identifying a node within one graph.
///
/// Handles are allocated monotonically by the graph facade and never reused,
/// so a handle stays distinct from the node's mutable payload: removing other
/// nodes cannot silently re-point an existing handle at a different node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Wrap a raw handle value. The facade allocates its own handles; this
    /// is for driving the backing stores directly.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw numeric value of this handle.
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Integer 2D position of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a point at `(x, y)`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    ///
    /// Widened to `i64` so opposite-corner coordinates cannot overflow.
    pub fn distance_sq(self, other: Point) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A node's mutable payload: its value, position, and selection state.
///
/// Identity lives in [`NodeId`], not here; two nodes with equal values are
/// still distinct entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    position: Point,
    selected: bool,
}

impl<T> Node<T> {
    /// Create a node payload at the given position.
    pub fn new(value: T, position: Point) -> Self {
        Self {
            value,
            position,
            selected: false,
        }
    }

    /// The node's value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Replace the node's value.
    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    /// The node's position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Move the node.
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.position = Point::new(x, y);
    }

    /// Whether the node is currently selected.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Set the selection state.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.value, self.position)
    }
}
