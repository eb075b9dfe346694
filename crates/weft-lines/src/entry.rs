//! Aligned output model: one classified slot per line of the merged view.

use serde::{Deserialize, Serialize};

/// Classification of one slot in the aligned output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// The line is present in both documents (trimmed content equal).
    Equal,
    /// The line is present only in the modified document.
    Insert,
    /// The line is present only in the original document.
    Delete,
    /// Two lines are paired as an edit of one another.
    Modify,
}

/// One slot in the aligned output.
///
/// Field presence follows the kind: `Equal` and `Modify` carry both sides,
/// `Insert` carries only the modified side, `Delete` only the original side.
/// Indices are 0-based positions into the respective documents. Line content
/// is stored untrimmed even when trimmed equality paired the slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDiffEntry {
    /// Classification of this slot.
    pub kind: LineKind,
    /// Line content from the original document, if this slot consumes one.
    pub original_line: Option<String>,
    /// Line content from the modified document, if this slot consumes one.
    pub modified_line: Option<String>,
    /// 0-based index into the original document, if this slot consumes one.
    pub original_index: Option<usize>,
    /// 0-based index into the modified document, if this slot consumes one.
    pub modified_index: Option<usize>,
}

impl LineDiffEntry {
    /// An unchanged slot. Both raw lines are kept: they may differ in
    /// leading or trailing whitespace even though they compare equal.
    pub fn equal(
        original_line: impl Into<String>,
        modified_line: impl Into<String>,
        original_index: usize,
        modified_index: usize,
    ) -> Self {
        Self {
            kind: LineKind::Equal,
            original_line: Some(original_line.into()),
            modified_line: Some(modified_line.into()),
            original_index: Some(original_index),
            modified_index: Some(modified_index),
        }
    }

    /// A slot for a line present only in the modified document.
    pub fn insert(modified_line: impl Into<String>, modified_index: usize) -> Self {
        Self {
            kind: LineKind::Insert,
            original_line: None,
            modified_line: Some(modified_line.into()),
            original_index: None,
            modified_index: Some(modified_index),
        }
    }

    /// A slot for a line present only in the original document.
    pub fn delete(original_line: impl Into<String>, original_index: usize) -> Self {
        Self {
            kind: LineKind::Delete,
            original_line: Some(original_line.into()),
            modified_line: None,
            original_index: Some(original_index),
            modified_index: None,
        }
    }

    /// A slot pairing two lines classified as an edit.
    pub fn modify(
        original_line: impl Into<String>,
        modified_line: impl Into<String>,
        original_index: usize,
        modified_index: usize,
    ) -> Self {
        Self {
            kind: LineKind::Modify,
            original_line: Some(original_line.into()),
            modified_line: Some(modified_line.into()),
            original_index: Some(original_index),
            modified_index: Some(modified_index),
        }
    }

    /// Returns `true` for any slot other than `Equal`.
    pub fn is_change(&self) -> bool {
        self.kind != LineKind::Equal
    }
}
