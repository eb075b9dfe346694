//! Diff computation and similarity scoring.
//!
//! The base edit script comes from the `similar` crate's Myers character
//! diff, folded into contiguous runs. A semantic cleanup pass then absorbs
//! very short equal runs that sit between edits, so that highlighting shows
//! whole replaced chunks instead of scattered one-character fragments.
//! Cleanup never breaks the reconstruction invariant: absorbed equal text
//! reappears in both the Delete and the Insert span of the merged block.

use similar::{ChangeTag, TextDiff};

use crate::script::{EditKind, EditOp, EditScript};

/// Equal runs strictly shorter than this, flanked by edits on both sides,
/// are absorbed into the surrounding edit block during cleanup.
const EQUAL_ABSORB_LIMIT: usize = 3;

/// Compute a cleaned character-level edit script between two strings.
///
/// The script covers both inputs completely: concatenating Equal + Delete
/// text reproduces `a`, concatenating Equal + Insert text reproduces `b`.
/// Two empty inputs produce an empty script.
pub fn diff(a: &str, b: &str) -> EditScript {
    EditScript::from(semantic_cleanup(raw_ops(a, b)))
}

/// Fraction of character content shared between two strings, in `[0, 1]`.
///
/// Defined as Equal text length over total script text length (Equal counted
/// once), measured in characters on the raw pre-cleanup script so that the
/// cleanup presentation pass cannot shift the score. Two empty strings score
/// `1.0` by convention.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }

    let mut equal = 0usize;
    let mut total = 0usize;
    for op in raw_ops(a, b) {
        let len = op.char_len();
        total += len;
        if op.kind == EditKind::Equal {
            equal += len;
        }
    }

    if total == 0 {
        1.0
    } else {
        equal as f64 / total as f64
    }
}

/// Run the Myers character diff and fold per-character changes into runs.
fn raw_ops(a: &str, b: &str) -> Vec<EditOp> {
    let diff = TextDiff::from_chars(a, b);
    let mut ops: Vec<EditOp> = Vec::new();

    for change in diff.iter_all_changes() {
        let kind = match change.tag() {
            ChangeTag::Equal => EditKind::Equal,
            ChangeTag::Insert => EditKind::Insert,
            ChangeTag::Delete => EditKind::Delete,
        };
        match ops.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(change.value()),
            _ => ops.push(EditOp::new(kind, change.value())),
        }
    }

    ops
}

/// Merge short equal runs sandwiched between edits into the surrounding
/// edit block, then normalize each block to Delete-then-Insert.
fn semantic_cleanup(ops: Vec<EditOp>) -> Vec<EditOp> {
    let mut out: Vec<EditOp> = Vec::new();
    // Accumulators for the current run of edits.
    let mut deleted = String::new();
    let mut inserted = String::new();

    for (idx, op) in ops.iter().enumerate() {
        match op.kind {
            EditKind::Delete => deleted.push_str(&op.text),
            EditKind::Insert => inserted.push_str(&op.text),
            EditKind::Equal => {
                let in_block = !deleted.is_empty() || !inserted.is_empty();
                // Runs alternate kinds, so a following op is always an edit.
                let followed_by_edit = idx + 1 < ops.len();
                if in_block && followed_by_edit && op.char_len() < EQUAL_ABSORB_LIMIT {
                    // Absorb: the equal text joins both sides of the block.
                    deleted.push_str(&op.text);
                    inserted.push_str(&op.text);
                } else {
                    flush_block(&mut out, &mut deleted, &mut inserted);
                    out.push(op.clone());
                }
            }
        }
    }
    flush_block(&mut out, &mut deleted, &mut inserted);

    out
}

fn flush_block(out: &mut Vec<EditOp>, deleted: &mut String, inserted: &mut String) {
    if !deleted.is_empty() {
        out.push(EditOp::delete(std::mem::take(deleted)));
    }
    if !inserted.is_empty() {
        out.push(EditOp::insert(std::mem::take(inserted)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn kinds(script: &EditScript) -> Vec<EditKind> {
        script.ops.iter().map(|op| op.kind).collect()
    }

    #[test]
    fn empty_inputs_empty_script() {
        let script = diff("", "");
        assert!(script.is_empty());
        assert_eq!(script.source(), "");
        assert_eq!(script.target(), "");
    }

    #[test]
    fn identical_inputs_single_equal_run() {
        let script = diff("hello world", "hello world");
        assert!(script.is_identity());
        assert_eq!(script.ops, vec![EditOp::equal("hello world")]);
    }

    #[test]
    fn pure_insertion() {
        let script = diff("", "abc");
        assert_eq!(script.ops, vec![EditOp::insert("abc")]);
    }

    #[test]
    fn pure_deletion() {
        let script = diff("abc", "");
        assert_eq!(script.ops, vec![EditOp::delete("abc")]);
    }

    #[test]
    fn insertion_between_shared_prefix_and_suffix() {
        let script = diff("foo();", "foo(x);");
        assert_eq!(
            script.ops,
            vec![
                EditOp::equal("foo("),
                EditOp::insert("x"),
                EditOp::equal(");"),
            ]
        );
    }

    #[test]
    fn cleanup_absorbs_short_equal_run() {
        // Raw script keeps "a" equal; cleanup folds it into one block.
        let script = diff("cat", "bag");
        assert_eq!(
            script.ops,
            vec![EditOp::delete("cat"), EditOp::insert("bag")]
        );
        assert_eq!(script.source(), "cat");
        assert_eq!(script.target(), "bag");
    }

    #[test]
    fn cleanup_keeps_long_equal_run() {
        let script = diff("the cat", "xhe bat");
        assert!(script.ops.contains(&EditOp::equal("he ")));
    }

    #[test]
    fn cleanup_keeps_unflanked_short_runs() {
        // Trailing ");" is short but nothing follows it, so it stays equal.
        let script = diff("f();", "g();");
        assert_eq!(kinds(&script).last(), Some(&EditKind::Equal));
    }

    #[test]
    fn similarity_of_identical_strings_is_one() {
        assert_eq!(similarity("abc", "abc"), 1.0);
    }

    #[test]
    fn similarity_of_empty_strings_is_one() {
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn similarity_of_disjoint_strings_is_near_zero() {
        let score = similarity("aaaa", "bbbb");
        assert!(score < 0.1, "expected near-zero, got {score}");
    }

    #[test]
    fn similarity_of_close_strings_is_high() {
        let score = similarity("foo();", "foo(x);");
        assert!(score > 0.8, "expected high similarity, got {score}");
    }

    #[test]
    fn similarity_against_empty_string_is_zero() {
        assert_eq!(similarity("abc", ""), 0.0);
        assert_eq!(similarity("", "abc"), 0.0);
    }

    #[test]
    fn multibyte_input_reconstructs() {
        let script = diff("grüße", "größe");
        assert_eq!(script.source(), "grüße");
        assert_eq!(script.target(), "größe");
    }

    proptest! {
        #[test]
        fn reconstruction_holds(a in ".{0,40}", b in ".{0,40}") {
            let script = diff(&a, &b);
            prop_assert_eq!(script.source(), a);
            prop_assert_eq!(script.target(), b);
        }

        #[test]
        fn similarity_is_bounded(a in ".{0,40}", b in ".{0,40}") {
            let score = similarity(&a, &b);
            prop_assert!((0.0..=1.0).contains(&score));
        }

        #[test]
        fn self_similarity_is_one(a in ".{1,40}") {
            prop_assert_eq!(similarity(&a, &a), 1.0);
        }
    }
}
