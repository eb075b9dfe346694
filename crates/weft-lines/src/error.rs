//! Error types for the alignment crate.
//!
//! Alignment itself never fails on well-formed input; the only fallible
//! surface is options validation.

/// Errors that can occur when configuring the alignment engine.
#[derive(Debug, thiserror::Error)]
pub enum AlignError {
    /// The similarity threshold was outside `[0, 1]` or not a number.
    #[error("similarity threshold out of range: {value} (expected 0.0..=1.0)")]
    InvalidThreshold { value: f64 },
}

/// Convenience alias for alignment results.
pub type Result<T> = std::result::Result<T, AlignError>;
