//! Comment printing and orphan comment recovery.
//!
//! The parser attaches most comments to the node that follows them. The
//! rest are recorded as orphans of the innermost enclosing node. To put an
//! orphan back in place, the parent's children and orphans are merged into
//! one list sorted by start position:
//!
//! - before certain children are printed, the comments between that child
//!   and the previous non-comment entry are emitted;
//! - after a parent's children are printed, the trailing run of comments is
//!   emitted.

use crate::error::PrintError;
use crate::Printer;
use jprint_ast::{Comment, CommentKind, NodeData, NodeKey, NodeRef};
use rustc_hash::FxHashMap;
use tracing::trace;

// ============================================================================
// Parent index
// ============================================================================

/// Child-to-parent map for one tree, built once per pass.
#[derive(Debug, Default)]
pub struct ParentIndex<'t> {
    parents: FxHashMap<NodeKey, NodeRef<'t>>,
}

impl<'t> ParentIndex<'t> {
    /// Index every node below `root`. Fails if a node is reached twice.
    pub fn build(root: NodeRef<'t>) -> Result<Self, PrintError> {
        let mut parents = FxHashMap::default();
        let mut duplicate = None;
        jprint_ast::walk(root, &mut |node, parent| {
            let Some(parent) = parent else { return };
            if let Some(first) = parents.insert(node.key(), parent) {
                duplicate.get_or_insert(PrintError::DuplicateParent {
                    kind: node.kind_name(),
                    range: node.range(),
                    first_parent: first.kind_name(),
                    second_parent: parent.kind_name(),
                });
            }
        });
        match duplicate {
            Some(err) => Err(err),
            None => Ok(Self { parents }),
        }
    }

    pub fn parent_of(&self, node: NodeRef<'_>) -> Option<NodeRef<'t>> {
        self.parents.get(&node.key()).copied()
    }

    /// Number of indexed (non-root) nodes.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

/// The children of `node` merged with its orphan comments, sorted by start
/// position. Entries with equal positions keep children before orphans.
pub fn merged_children(node: NodeRef<'_>) -> Vec<NodeRef<'_>> {
    let mut everything = node.children();
    everything.extend(node.orphan_comments().iter().map(NodeRef::Comment));
    everything.sort_by_key(|entry| entry.range().pos);
    everything
}

/// Indices of the comments emitted before the child at `child_at`: every
/// entry after the nearest preceding non-comment.
pub fn leading_comment_run(everything: &[NodeRef<'_>], child_at: usize) -> std::ops::Range<usize> {
    let start = everything[..child_at]
        .iter()
        .rposition(|entry| !entry.is_comment())
        .map_or(0, |previous| previous + 1);
    start..child_at
}

/// Indices of the contiguous comments at the end of the list.
pub fn trailing_comment_run(everything: &[NodeRef<'_>]) -> std::ops::Range<usize> {
    let count = everything.iter().rev().take_while(|entry| entry.is_comment()).count();
    everything.len() - count..everything.len()
}

// ============================================================================
// Printing
// ============================================================================

impl<'t> Printer<'t> {
    /// Print a comment, if comments are enabled.
    pub fn print_comment(&mut self, comment: &Comment) {
        if !self.options.print_comments {
            return;
        }
        match comment.kind {
            CommentKind::Line => {
                self.write("//");
                let text = comment.content.replace(['\r', '\n'], " ");
                self.write_line(&text);
            }
            CommentKind::Block => {
                self.write("/*");
                self.write(&comment.content);
                self.write_line("*/");
            }
            CommentKind::Doc => {
                self.write("/**");
                self.write(&comment.content);
                self.write_line("*/");
            }
        }
    }

    /// Print the comment attached to a node.
    pub(crate) fn print_attached_comment(&mut self, data: &NodeData) {
        if let Some(comment) = &data.comment {
            self.print_comment(comment);
        }
    }

    /// Emit the orphan comments of `node`'s parent that sit between `node`
    /// and its previous sibling.
    pub(crate) fn print_orphans_before(&mut self, node: NodeRef<'_>) -> Result<(), PrintError> {
        let Some(parent) = self.parents.parent_of(node) else {
            return Ok(());
        };
        let everything = merged_children(parent);
        let child_at = everything
            .iter()
            .position(|entry| entry.same(&node))
            .ok_or_else(|| PrintError::OrphanedChild {
                kind: node.kind_name(),
                range: node.range(),
                parent_kind: parent.kind_name(),
                parent_range: parent.range(),
            })?;

        for index in leading_comment_run(&everything, child_at) {
            match everything[index] {
                NodeRef::Comment(comment) => {
                    trace!(
                        before = node.kind_name(),
                        at = %comment.range,
                        "emitting leading orphan comment"
                    );
                    self.stats.orphan_comments += 1;
                    self.print_comment(comment);
                }
                other => {
                    return Err(PrintError::CommentRun {
                        kind: node.kind_name(),
                        range: node.range(),
                        found: other.kind_name(),
                        found_at: index,
                        child_at,
                    });
                }
            }
        }
        Ok(())
    }

    /// Emit the comments that follow the last child of `node`.
    pub(crate) fn print_orphans_ending(&mut self, node: NodeRef<'_>) {
        let everything = merged_children(node);
        for entry in &everything[trailing_comment_run(&everything)] {
            if let NodeRef::Comment(comment) = entry {
                trace!(after = node.kind_name(), at = %comment.range, "emitting trailing orphan comment");
                self.stats.orphan_comments += 1;
                self.print_comment(comment);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jprint_ast::factory::*;
    use jprint_ast::{BlockStmt, Statement};

    fn sample_block() -> BlockStmt {
        block(vec![
            expr_stmt(name_expr("a")).at(10, 12),
            expr_stmt(name_expr("b")).at(30, 32),
        ])
        .at(0, 60)
        .with_orphans(vec![
            line_comment(" tail").at(40, 47),
            line_comment(" one").at(14, 20),
            block_comment(" two ").at(21, 29),
        ])
    }

    #[test]
    fn test_merged_children_sorted_by_position() {
        let b = sample_block();
        let kinds: Vec<_> = merged_children(NodeRef::Block(&b)).iter().map(|e| e.kind_name()).collect();
        assert_eq!(
            kinds,
            vec!["ExpressionStmt", "LineComment", "BlockComment", "ExpressionStmt", "LineComment"]
        );
    }

    #[test]
    fn test_comment_runs() {
        let b = sample_block();
        let everything = merged_children(NodeRef::Block(&b));
        assert_eq!(leading_comment_run(&everything, 3), 1..3);
        assert_eq!(leading_comment_run(&everything, 0), 0..0);
        assert_eq!(trailing_comment_run(&everything), 4..5);
    }

    #[test]
    fn test_parent_index() {
        let b = sample_block();
        let index = ParentIndex::build(NodeRef::Block(&b)).unwrap();
        // two statements, two name exprs, two simple names
        assert_eq!(index.len(), 6);
        let second = &b.statements[1];
        let parent = index.parent_of(NodeRef::from_stmt(second)).unwrap();
        assert!(parent.same(&NodeRef::Block(&b)));
        assert!(index.parent_of(NodeRef::Block(&b)).is_none());
        assert!(matches!(second, Statement::Expression(_)));
    }

    #[test]
    fn test_child_missing_from_parent_aborts() {
        let b = sample_block();
        let stray = expr_stmt(name_expr("c")).at(50, 52);
        let mut parents = FxHashMap::default();
        parents.insert(NodeRef::from_stmt(&stray).key(), NodeRef::Block(&b));

        let mut printer = Printer::new(crate::PrinterOptions::default());
        printer.parents = ParentIndex { parents };
        let err = printer.print_statement(&stray).unwrap_err();
        assert!(matches!(
            err,
            PrintError::OrphanedChild {
                kind: "ExpressionStmt",
                parent_kind: "BlockStmt",
                ..
            }
        ));
        assert!(err.is_tree_integrity());
        assert_eq!(printer.contents(), "");
        assert_eq!(printer.stats().orphan_comments, 0);
    }
}
