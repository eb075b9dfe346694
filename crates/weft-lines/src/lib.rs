//! Line alignment engine for Weft.
//!
//! Aligns two documents (ordered line sequences) into a single classified
//! sequence of slots: unchanged, inserted, deleted, or modified. Alignment
//! uses a longest-common-subsequence table over trimmed-line equality, with
//! a similarity-threshold heuristic (scored by `weft-chars`) that pairs
//! edited lines as `Modify` instead of a Delete/Insert pair.
//!
//! # Key Types
//!
//! - [`Document`] -- Ordered line sequence split from raw text
//! - [`LineDiffEntry`] / [`LineKind`] -- One classified slot of the alignment
//! - [`AlignOptions`] -- Tunable similarity threshold, validated
//! - [`align`] -- Compute the alignment of two line sequences
//!
//! Alignment is `O(m * n)` in time and space over the two line counts and is
//! recomputed in full on every call; callers comparing large documents on an
//! interactive path should debounce and run it off that path.

pub mod align;
pub mod document;
pub mod entry;
pub mod error;
pub mod options;

pub use align::align;
pub use document::Document;
pub use entry::{LineDiffEntry, LineKind};
pub use error::{AlignError, Result};
pub use options::{AlignOptions, DEFAULT_SIMILARITY_THRESHOLD};
