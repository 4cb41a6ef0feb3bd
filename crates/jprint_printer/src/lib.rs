//! jprint_printer: AST to formatted, optionally decorated source text.
//!
//! A [`Printer`] walks a tree depth-first and emits every node through a
//! fixed per-kind rendering rule into a [`TextSink`]. Names, type references,
//! annotations and parameters are routed through a [`Decorator`] so callers
//! can wrap them in markup without changing the text itself. Comments the
//! parser left unattached are recovered by the resolver in [`comments`].
//!
//! ```
//! use jprint_ast::factory::*;
//! use jprint_ast::{Modifiers, TypeDeclaration};
//! use jprint_printer::{print_unit, PrinterOptions};
//!
//! let unit = compilation_unit(None, vec![], vec![TypeDeclaration::Class(class(Modifiers::PUBLIC, "A", vec![]))]);
//! assert_eq!(print_unit(&unit, PrinterOptions::default()).unwrap(), "public class A {\n}\n");
//! ```

pub mod comments;
pub mod decorator;
pub mod error;
pub mod options;
pub mod sink;

mod decl;
mod expr;
mod stmt;
mod ty;

pub use decorator::{Decorator, NoDecoration, Role};
pub use error::PrintError;
pub use options::PrinterOptions;
pub use sink::TextSink;

use comments::ParentIndex;
use jprint_ast::{CompilationUnit, NodeRef};
use tracing::debug;

static NO_DECORATION: NoDecoration = NoDecoration;

/// Counters for the most recent pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassStats {
    /// Nodes in the printed tree, excluding comments.
    pub nodes: usize,
    /// Orphan comments emitted by the resolver.
    pub orphan_comments: usize,
}

/// The printer converts AST nodes to text.
pub struct Printer<'t> {
    sink: TextSink,
    options: PrinterOptions,
    decorator: &'t dyn Decorator,
    parents: ParentIndex<'t>,
    stats: PassStats,
}

impl<'t> Printer<'t> {
    pub fn new(options: PrinterOptions) -> Self {
        Self::with_decorator(options, &NO_DECORATION)
    }

    pub fn with_decorator(options: PrinterOptions, decorator: &'t dyn Decorator) -> Self {
        Self {
            sink: TextSink::new(options.indent.as_str(), options.new_line.as_str()),
            options,
            decorator,
            parents: ParentIndex::default(),
            stats: PassStats::default(),
        }
    }

    pub fn options(&self) -> &PrinterOptions {
        &self.options
    }

    /// Counters of the last pass.
    pub fn stats(&self) -> PassStats {
        self.stats
    }

    /// Print `root` and everything below it as one pass.
    ///
    /// On error the partial output is discarded.
    pub fn print(&mut self, root: NodeRef<'t>) -> Result<String, PrintError> {
        let result = self.run_pass(root);
        self.parents = ParentIndex::default();
        let output = self.sink.take();
        result.map(|()| output)
    }

    fn run_pass(&mut self, root: NodeRef<'t>) -> Result<(), PrintError> {
        self.sink = TextSink::new(self.options.indent.as_str(), self.options.new_line.as_str());
        self.parents = ParentIndex::build(root)?;
        self.stats = PassStats {
            nodes: self.parents.len() + 1,
            orphan_comments: 0,
        };
        debug!(kind = root.kind_name(), nodes = self.stats.nodes, "print pass started");

        self.print_node(root)?;

        let depth = self.sink.depth();
        if depth != 0 {
            return Err(PrintError::UnbalancedIndent { depth });
        }
        debug!(
            orphan_comments = self.stats.orphan_comments,
            bytes = self.sink.contents().len(),
            "print pass finished"
        );
        Ok(())
    }

    // ========================================================================
    // Output primitives
    // ========================================================================

    /// Append text to the output. Decorators write their markup through this.
    pub fn write(&mut self, text: &str) {
        self.sink.write(text);
    }

    pub fn write_line(&mut self, text: &str) {
        self.sink.write_line(text);
    }

    pub fn newline(&mut self) {
        self.sink.newline();
    }

    /// Current indentation depth.
    pub fn depth(&self) -> usize {
        self.sink.depth()
    }

    /// Text printed so far in the current pass.
    pub fn contents(&self) -> &str {
        self.sink.contents()
    }

    /// Run `f` one indentation level deeper. The level is restored even when
    /// `f` fails.
    pub fn indented<F>(&mut self, f: F) -> Result<(), PrintError>
    where
        F: FnOnce(&mut Self) -> Result<(), PrintError>,
    {
        self.sink.indent();
        let result = f(self);
        let restored = self.sink.unindent();
        result.and(restored)
    }

    /// Print `items` with `separator` between consecutive ones.
    pub(crate) fn print_separated<T, F>(&mut self, items: &[T], separator: &str, mut f: F) -> Result<(), PrintError>
    where
        F: FnMut(&mut Self, &T) -> Result<(), PrintError>,
    {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.write(separator);
            }
            f(self, item)?;
        }
        Ok(())
    }

    /// Route `node` through the decorator in `role`.
    pub(crate) fn decorate(&mut self, role: Role, node: NodeRef<'_>) -> Result<(), PrintError> {
        let decorator = self.decorator;
        decorator.decorate(role, node, self)
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Render `node` with its own rule, without decorating the node itself.
    /// Sub-trees below it are decorated as usual.
    pub fn print_node(&mut self, node: NodeRef<'_>) -> Result<(), PrintError> {
        match node {
            NodeRef::CompilationUnit(n) => self.print_compilation_unit(n),
            NodeRef::Package(n) => self.print_package(n),
            NodeRef::Import(n) => self.print_import(n),
            NodeRef::ClassDecl(n) => self.print_class_declaration(n),
            NodeRef::EnumDecl(n) => self.print_enum_declaration(n),
            NodeRef::AnnotationDecl(n) => self.print_annotation_declaration(n),
            NodeRef::Member(n) => self.print_member(n),
            NodeRef::EnumConstant(n) => self.print_enum_constant(n),
            NodeRef::Parameter(n) => self.print_parameter(n),
            NodeRef::TypeParameter(n) => self.print_type_parameter(n),
            NodeRef::VariableDeclarator(n) => self.print_variable_declarator(n),
            NodeRef::Annotation(n) => self.print_annotation(n),
            NodeRef::MemberValuePair(n) => self.print_member_value_pair(n),
            NodeRef::ClassType(n) => self.print_class_type(n),
            NodeRef::Type(n) => self.print_type_plain(n),
            NodeRef::Block(n) => self.print_block(n),
            NodeRef::Stmt(n) => self.print_statement(n),
            NodeRef::SwitchEntry(n) => self.print_switch_entry(n),
            NodeRef::CatchClause(n) => self.print_catch_clause(n),
            NodeRef::ArrayCreationLevel(n) => self.print_array_creation_level(n),
            NodeRef::ArrayInitializer(n) => self.print_array_initializer(n),
            NodeRef::VariableDeclarations(n) => self.print_variable_declarations(n),
            NodeRef::Expr(n) => self.print_expression(n),
            NodeRef::Name(n) => self.print_name(n),
            NodeRef::SimpleName(n) => {
                self.write(&n.identifier);
                Ok(())
            }
            NodeRef::Comment(c) => {
                self.print_comment(c);
                Ok(())
            }
        }
    }
}

/// Print a compilation unit without decoration.
pub fn print_unit(unit: &CompilationUnit, options: PrinterOptions) -> Result<String, PrintError> {
    Printer::new(options).print(NodeRef::CompilationUnit(unit))
}
