//! Alignment options.

use serde::{Deserialize, Serialize};

use crate::error::{AlignError, Result};

/// Default similarity threshold above which two differing lines are paired
/// as `Modify` instead of a Delete/Insert pair.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.3;

/// Tunable parameters for the alignment engine.
///
/// The threshold comparison is strict (`similarity > threshold`), so a
/// threshold of `1.0` disables `Modify` classification entirely and `0.0`
/// pairs any two lines sharing at least one character.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlignOptions {
    similarity_threshold: f64,
}

impl AlignOptions {
    /// Create options with an explicit similarity threshold.
    ///
    /// The threshold must be a number in `[0, 1]`.
    pub fn new(similarity_threshold: f64) -> Result<Self> {
        // NaN fails the range check as well.
        if !(0.0..=1.0).contains(&similarity_threshold) {
            return Err(AlignError::InvalidThreshold {
                value: similarity_threshold,
            });
        }
        Ok(Self {
            similarity_threshold,
        })
    }

    /// The similarity threshold in effect.
    pub fn similarity_threshold(&self) -> f64 {
        self.similarity_threshold
    }
}

impl Default for AlignOptions {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_threshold() {
        let options = AlignOptions::default();
        assert_eq!(options.similarity_threshold(), DEFAULT_SIMILARITY_THRESHOLD);
    }

    #[test]
    fn accepts_boundary_values() {
        assert!(AlignOptions::new(0.0).is_ok());
        assert!(AlignOptions::new(1.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(AlignOptions::new(-0.1).is_err());
        assert!(AlignOptions::new(1.5).is_err());
        assert!(AlignOptions::new(f64::NAN).is_err());
    }

    #[test]
    fn error_reports_value() {
        let err = AlignOptions::new(2.0).unwrap_err();
        assert!(err.to_string().contains("2"));
    }
}
