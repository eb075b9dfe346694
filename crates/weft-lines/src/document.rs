//! Document model: an ordered sequence of lines under comparison.

use serde::{Deserialize, Serialize};

/// An ordered sequence of lines split from raw text.
///
/// Lines are stored exactly as found; comparison logic trims only for
/// equality tests, never for storage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Split raw text into a document.
    ///
    /// Splits on `\n` only; callers must normalize `\r\n` line endings
    /// beforehand. Empty text yields an empty document. Text ending in a
    /// newline yields a trailing empty line, consistent with plain
    /// split-on-`\n` semantics.
    pub fn from_text(text: &str) -> Self {
        if text.is_empty() {
            return Self::new();
        }
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    /// The lines, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Line at `index`, if present.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if the document has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<Vec<String>> for Document {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}
