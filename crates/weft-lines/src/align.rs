//! LCS-based line alignment with similarity-classified modified lines.
//!
//! The LCS table is indexed by suffix (`lcs[i][j]` is the LCS length of
//! `original[i..]` and `modified[j..]`), so the walk runs front-to-back and
//! emits slots directly in reading order. Two lines count as common when
//! their trimmed content is exactly equal; untrimmed content is preserved in
//! the output.
//!
//! When two differing lines score above the similarity threshold they are
//! paired as `Modify` even where the LCS table would prefer a Delete/Insert
//! split. This is a deliberate heuristic override: it trades strict edit
//! optimality for intuitive "this line was edited" pairing. On equal LCS
//! values the walk consumes the original line first, so a replaced line
//! surfaces as Delete followed by Insert.

use tracing::debug;

use crate::entry::LineDiffEntry;
use crate::options::AlignOptions;

/// Align two line sequences into a classified slot sequence.
///
/// Never fails: any two line sequences, including empty ones, are valid
/// input. The result reconstructs the original document through slots
/// carrying `original_line` (in `original_index` order) and the modified
/// document through slots carrying `modified_line`.
///
/// Cost is `O(m * n)` in both time and space over the two line counts, and
/// the table is rebuilt in full on every call.
pub fn align<S: AsRef<str>>(
    original: &[S],
    modified: &[S],
    options: &AlignOptions,
) -> Vec<LineDiffEntry> {
    let m = original.len();
    let n = modified.len();

    // lcs[i][j] = LCS length of original[i..] and modified[j..] under
    // trimmed equality.
    let mut lcs = vec![vec![0u32; n + 1]; m + 1];
    for i in (0..m).rev() {
        for j in (0..n).rev() {
            lcs[i][j] = if trimmed_eq(original[i].as_ref(), modified[j].as_ref()) {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let threshold = options.similarity_threshold();
    let mut entries = Vec::with_capacity(m.max(n));
    let (mut i, mut j) = (0usize, 0usize);

    while i < m || j < n {
        if i < m && j < n {
            let old_line = original[i].as_ref();
            let new_line = modified[j].as_ref();

            if trimmed_eq(old_line, new_line) {
                entries.push(LineDiffEntry::equal(old_line, new_line, i, j));
                i += 1;
                j += 1;
            } else if weft_chars::similarity(old_line, new_line) > threshold {
                // Heuristic override of the LCS walk: pair edited lines.
                entries.push(LineDiffEntry::modify(old_line, new_line, i, j));
                i += 1;
                j += 1;
            } else if lcs[i + 1][j] >= lcs[i][j + 1] {
                entries.push(LineDiffEntry::delete(old_line, i));
                i += 1;
            } else {
                entries.push(LineDiffEntry::insert(new_line, j));
                j += 1;
            }
        } else if i < m {
            entries.push(LineDiffEntry::delete(original[i].as_ref(), i));
            i += 1;
        } else {
            entries.push(LineDiffEntry::insert(modified[j].as_ref(), j));
            j += 1;
        }
    }

    debug!(
        original_lines = m,
        modified_lines = n,
        slots = entries.len(),
        changes = entries.iter().filter(|e| e.is_change()).count(),
        "aligned documents"
    );

    entries
}

fn trimmed_eq(a: &str, b: &str) -> bool {
    a.trim() == b.trim()
}
