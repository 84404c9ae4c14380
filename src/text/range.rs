//! Offset ranges over a text buffer
//!
//! Offsets are in whatever units the owning view uses (UTF-8 bytes for
//! Rust-side buffers, UTF-16 code units for a JavaScript host).

use serde::{Deserialize, Serialize};

/// A range of text from `from` (inclusive) to `to` (exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    pub from: usize,
    pub to: usize,
}

impl TextRange {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Create a range covering a whole buffer of `len` units
    pub fn whole(len: usize) -> Self {
        Self { from: 0, to: len }
    }

    /// Check if this range is empty (or inverted)
    pub fn is_empty(&self) -> bool {
        self.from >= self.to
    }

    /// Length in units; zero for inverted ranges
    pub fn len(&self) -> usize {
        self.to.saturating_sub(self.from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_covers_buffer() {
        let range = TextRange::whole(5);
        assert_eq!(range, TextRange::new(0, 5));
        assert_eq!(range.len(), 5);
        assert!(!range.is_empty());
        assert!(TextRange::whole(0).is_empty());
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let range = TextRange::new(6, 3);
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
    }
}
