//! Source range types for node and comment positions.
//!
//! The printer never reads source text. Ranges exist only so that the
//! children of a node and its unattached comments can be merged back into
//! source order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in source text, measured as a byte offset from the start.
pub type TextPos = u32;

/// A text range with start and end positions.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    /// The byte offset where this range starts (inclusive).
    pub pos: TextPos,
    /// The byte offset where this range ends (exclusive).
    pub end: TextPos,
}

impl TextRange {
    /// Create a new text range.
    #[inline]
    pub fn new(pos: TextPos, end: TextPos) -> Self {
        debug_assert!(end >= pos);
        Self { pos, end }
    }
}

impl fmt::Debug for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.pos, self.end)
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.pos, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_serde() {
        let range = TextRange::new(2, 7);
        assert_eq!(range.to_string(), "[2, 7)");
        assert_eq!(format!("{:?}", range), "2..7");

        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"pos":2,"end":7}"#);
        let back: TextRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, range);
    }
}
