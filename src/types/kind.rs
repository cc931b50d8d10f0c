//! Graph flavor selection.

/// Bit flag for directed graphs in the legacy mask encoding.
pub const DIRECTED: u8 = 1;
/// Bit flag for weighted graphs in the legacy mask encoding.
pub const WEIGHTED: u8 = 2;
/// Bit flag for multigraphs in the legacy mask encoding.
pub const MULTI: u8 = 4;

/// The three orthogonal graph flavors, fixed at construction.
///
/// Defaults to an undirected, unweighted, simple graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphKind {
    /// Edges are one-way; adding `a -> b` does not imply `b -> a`.
    pub directed: bool,
    /// Edges carry a weight; selects which `add_edge` entry point is valid.
    pub weighted: bool,
    /// Parallel edges between the same ordered pair are allowed.
    pub multi: bool,
}

impl GraphKind {
    /// Decode a legacy `DIRECTED | WEIGHTED | MULTI` bitmask.
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            directed: bits & DIRECTED != 0,
            weighted: bits & WEIGHTED != 0,
            multi: bits & MULTI != 0,
        }
    }

    /// Encode back into the legacy bitmask.
    pub const fn bits(self) -> u8 {
        (self.directed as u8) * DIRECTED
            | (self.weighted as u8) * WEIGHTED
            | (self.multi as u8) * MULTI
    }
}
