//! Edit script model: ordered runs of equal, inserted, and deleted text.
//!
//! An [`EditScript`] covers both input strings completely. Filtering its
//! operations reconstructs either side: Equal + Delete text concatenated in
//! order is the source string, Equal + Insert text is the destination.

use serde::{Deserialize, Serialize};

/// The kind of one contiguous run in an edit script.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditKind {
    /// Text present in both strings.
    Equal,
    /// Text present only in the destination string.
    Insert,
    /// Text present only in the source string.
    Delete,
}

/// One contiguous run of an edit script.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditOp {
    /// How this run relates the two strings.
    pub kind: EditKind,
    /// The run's text.
    pub text: String,
}

impl EditOp {
    /// Create an operation of the given kind.
    pub fn new(kind: EditKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Shorthand for an `Equal` run.
    pub fn equal(text: impl Into<String>) -> Self {
        Self::new(EditKind::Equal, text)
    }

    /// Shorthand for an `Insert` run.
    pub fn insert(text: impl Into<String>) -> Self {
        Self::new(EditKind::Insert, text)
    }

    /// Shorthand for a `Delete` run.
    pub fn delete(text: impl Into<String>) -> Self {
        Self::new(EditKind::Delete, text)
    }

    /// Length of this run in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// An ordered sequence of edit operations covering both input strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditScript {
    /// The operations, in order.
    pub ops: Vec<EditOp>,
}

impl EditScript {
    /// Create an empty script (the diff of two empty strings).
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns `true` if the script has no operations.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Returns `true` if the script contains no Insert or Delete runs.
    pub fn is_identity(&self) -> bool {
        self.ops.iter().all(|op| op.kind == EditKind::Equal)
    }

    /// Reconstruct the source string (Equal + Delete text, in order).
    pub fn source(&self) -> String {
        self.ops
            .iter()
            .filter(|op| matches!(op.kind, EditKind::Equal | EditKind::Delete))
            .map(|op| op.text.as_str())
            .collect()
    }

    /// Reconstruct the destination string (Equal + Insert text, in order).
    pub fn target(&self) -> String {
        self.ops
            .iter()
            .filter(|op| matches!(op.kind, EditKind::Equal | EditKind::Insert))
            .map(|op| op.text.as_str())
            .collect()
    }

    /// Total inserted characters across all Insert runs.
    pub fn insertions(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| op.kind == EditKind::Insert)
            .map(EditOp::char_len)
            .sum()
    }

    /// Total deleted characters across all Delete runs.
    pub fn deletions(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| op.kind == EditKind::Delete)
            .map(EditOp::char_len)
            .sum()
    }
}

impl From<Vec<EditOp>> for EditScript {
    fn from(ops: Vec<EditOp>) -> Self {
        Self { ops }
    }
}
