//! Whole-document comparison: alignment plus consumer-facing derived values.

use serde::{Deserialize, Serialize};
use tracing::debug;
use weft_chars::EditScript;
use weft_lines::{align, AlignOptions, Document, LineDiffEntry, LineKind};

/// Change counts across a comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareStats {
    /// Slots classified as `Insert`.
    pub insertions: usize,
    /// Slots classified as `Delete`.
    pub deletions: usize,
    /// Slots classified as `Modify`.
    pub modifications: usize,
}

/// The result of comparing two whole-document texts.
///
/// A value, recomputed in full per request; it holds no references to the
/// input texts and no incremental state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    entries: Vec<LineDiffEntry>,
}

impl Comparison {
    /// Compare two texts.
    ///
    /// Each text is split into a [`Document`] on `\n` (callers normalize
    /// `\r\n` beforehand) and the two line sequences are aligned.
    pub fn new(original: &str, modified: &str, options: &AlignOptions) -> Self {
        let original = Document::from_text(original);
        let modified = Document::from_text(modified);
        let entries = align(original.lines(), modified.lines(), options);

        debug!(
            original_lines = original.len(),
            modified_lines = modified.len(),
            slots = entries.len(),
            "built comparison"
        );

        Self { entries }
    }

    /// The aligned slots, in reading order.
    pub fn entries(&self) -> &[LineDiffEntry] {
        &self.entries
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the comparison has no slots (both texts empty).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if no slot carries a change.
    pub fn is_identical(&self) -> bool {
        self.entries.iter().all(|e| !e.is_change())
    }

    /// Ascending slot positions where something changed, for navigation
    /// markers. Positions are indices into [`Comparison::entries`].
    pub fn changed_positions(&self) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_change())
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Character-level edit script for the `Modify` slot at `position`.
    ///
    /// Computed fresh on demand; returns `None` for any other slot kind or
    /// an out-of-range position.
    pub fn inline_diff(&self, position: usize) -> Option<EditScript> {
        let entry = self.entries.get(position)?;
        if entry.kind != LineKind::Modify {
            return None;
        }
        // Modify slots always carry both sides.
        let original = entry.original_line.as_deref()?;
        let modified = entry.modified_line.as_deref()?;
        Some(weft_chars::diff(original, modified))
    }

    /// Change counts by kind.
    pub fn stats(&self) -> CompareStats {
        let mut stats = CompareStats::default();
        for entry in &self.entries {
            match entry.kind {
                LineKind::Insert => stats.insertions += 1,
                LineKind::Delete => stats.deletions += 1,
                LineKind::Modify => stats.modifications += 1,
                LineKind::Equal => {}
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_chars::EditKind;

    fn compare(original: &str, modified: &str) -> Comparison {
        Comparison::new(original, modified, &AlignOptions::default())
    }

    #[test]
    fn identical_texts_have_no_changes() {
        let comparison = compare("a\nb\nc", "a\nb\nc");
        assert!(comparison.is_identical());
        assert!(comparison.changed_positions().is_empty());
        assert_eq!(comparison.stats(), CompareStats::default());
    }

    #[test]
    fn empty_texts_compare_empty() {
        let comparison = compare("", "");
        assert!(comparison.is_empty());
        assert!(comparison.is_identical());
    }

    #[test]
    fn changed_positions_are_ascending_and_unique() {
        let comparison = compare("a\nb\nc\nd", "a\nx\nc\ny\nz");
        let positions = comparison.changed_positions();
        assert!(!positions.is_empty());
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn stats_count_each_kind() {
        // "cat();" pairs as a modify, "b"/"x" are dissimilar so they split
        // into a delete and an insert, and "extra" is a pure insert.
        let comparison = compare("keep\ncat();\nb", "keep\ncat(9);\nx\nextra");
        let stats = comparison.stats();
        assert_eq!(stats.deletions, 1);
        assert_eq!(stats.insertions, 2);
        assert_eq!(stats.modifications, 1);
    }

    #[test]
    fn inline_diff_only_for_modify_slots() {
        let comparison = compare("keep\nfoo();", "keep\nfoo(x);");
        let positions = comparison.changed_positions();
        assert_eq!(positions, [1]);

        assert!(comparison.inline_diff(0).is_none());
        assert!(comparison.inline_diff(99).is_none());

        let script = comparison.inline_diff(1).expect("modify slot");
        assert_eq!(script.source(), "foo();");
        assert_eq!(script.target(), "foo(x);");
        assert!(script
            .ops
            .iter()
            .any(|op| op.kind == EditKind::Insert && op.text == "x"));
    }

    #[test]
    fn comparison_serializes() {
        let comparison = compare("a", "b");
        let json = serde_json::to_string(&comparison).unwrap();
        let back: Comparison = serde_json::from_str(&json).unwrap();
        assert_eq!(comparison, back);
    }
}
