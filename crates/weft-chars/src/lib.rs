//! Character-level diff engine for Weft.
//!
//! Computes edit scripts between two strings, applies a semantic cleanup
//! pass that merges trivial fragments into readable chunks, and derives a
//! similarity score used by the line alignment engine to classify edited
//! lines.
//!
//! # Key Types
//!
//! - [`EditScript`] / [`EditOp`] / [`EditKind`] -- Character-level edit script
//! - [`diff`] -- Compute a cleaned edit script between two strings
//! - [`similarity`] -- Fraction of shared character content, in `[0, 1]`
//!
//! All operations are pure functions over their arguments: no I/O, no shared
//! state, safe to call from any number of threads on independent inputs.

pub mod engine;
pub mod script;

pub use engine::{diff, similarity};
pub use script::{EditKind, EditOp, EditScript};
