//! Caller-boundary helpers for the Weft diff engine.
//!
//! The engine crates are pure functions; interactive callers need a thin
//! layer on top of them: a comparison report with navigation positions and
//! on-demand inline character diffs, change statistics, a debounce settle
//! contract for keystroke coalescing, and last-request-wins supersession
//! for comparisons run off the interactive path.
//!
//! # Key Types
//!
//! - [`Comparison`] / [`CompareStats`] -- Full comparison of two texts
//! - [`Debouncer`] -- Quiescent-window settling for rapid input changes
//! - [`CompareSequencer`] / [`CompareTicket`] -- Last-request-wins tickets

pub mod compare;
pub mod debounce;

pub use compare::{CompareStats, Comparison};
pub use debounce::{CompareSequencer, CompareTicket, Debouncer};
