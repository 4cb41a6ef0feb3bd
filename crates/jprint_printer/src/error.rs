//! Errors that abort a print pass.

use jprint_core::TextRange;
use thiserror::Error;

/// A contract violation detected while printing.
///
/// Both tree-integrity and indentation-balance violations are fatal for the
/// pass that hit them; the printer discards its partial output.
#[derive(Debug, Error)]
pub enum PrintError {
    /// A node was not found among the children of the parent recorded for it.
    #[error("{kind} at {range} is not among the children of its parent {parent_kind} at {parent_range}")]
    OrphanedChild {
        kind: &'static str,
        range: TextRange,
        parent_kind: &'static str,
        parent_range: TextRange,
    },

    /// A node was reached through two different parents.
    #[error("{kind} at {range} is a child of both {first_parent} and {second_parent}")]
    DuplicateParent {
        kind: &'static str,
        range: TextRange,
        first_parent: &'static str,
        second_parent: &'static str,
    },

    /// A non-comment sits in the comment run that precedes a child.
    #[error(
        "expected a comment at position {found_at} before {kind} at {range} (child position {child_at}), found {found}"
    )]
    CommentRun {
        kind: &'static str,
        range: TextRange,
        found: &'static str,
        found_at: usize,
        child_at: usize,
    },

    /// `unindent` was called at depth zero.
    #[error("unindent called at indentation depth 0")]
    IndentUnderflow,

    /// A pass finished with a non-zero indentation depth.
    #[error("indentation depth is {depth} at the end of the pass, expected 0")]
    UnbalancedIndent { depth: usize },
}

impl PrintError {
    /// Whether this error reports a malformed tree rather than a printer bug.
    pub fn is_tree_integrity(&self) -> bool {
        matches!(
            self,
            PrintError::OrphanedChild { .. } | PrintError::DuplicateParent { .. } | PrintError::CommentRun { .. }
        )
    }
}
