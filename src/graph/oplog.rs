//! Append-only operation log.

/// Ordered log of human-readable entries, one per attempted mutation.
///
/// Each entry is prefixed with a 1-based, monotonically increasing sequence
/// number. Purely observational; the core logic never reads it back.
#[derive(Debug, Default)]
pub struct OpLog {
    entries: Vec<String>,
}

impl OpLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, stamping it with the next sequence number.
    pub fn append(&mut self, msg: impl AsRef<str>) {
        let seq = self.entries.len() + 1;
        self.entries.push(format!("{}: {}", seq, msg.as_ref()));
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
