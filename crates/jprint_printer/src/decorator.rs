//! The decoration capability invoked around selected sub-trees.

use crate::error::PrintError;
use crate::Printer;
use jprint_ast::NodeRef;
use std::fmt;

/// The syntactic role a decorated sub-tree plays at its call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The name in a class or interface declaration.
    ClassDeclaration,
    /// The name in a method declaration.
    MethodDeclaration,
    /// The name of the method in a call expression.
    MethodCallTarget,
    /// The name in a constructor declaration.
    Constructor,
    /// A class or interface type in a type position.
    TypeReference,
    /// The instantiated type of an object creation.
    NewObjectType,
    /// Any annotation use.
    AnnotationUse,
    /// A parameter of a method, constructor, lambda or catch clause.
    Parameter,
}

impl Role {
    pub const ALL: [Role; 8] = [
        Role::ClassDeclaration,
        Role::MethodDeclaration,
        Role::MethodCallTarget,
        Role::Constructor,
        Role::TypeReference,
        Role::NewObjectType,
        Role::AnnotationUse,
        Role::Parameter,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::ClassDeclaration => "class-declaration",
            Role::MethodDeclaration => "method-declaration",
            Role::MethodCallTarget => "method-call-target",
            Role::Constructor => "constructor",
            Role::TypeReference => "type-reference",
            Role::NewObjectType => "new-object-type",
            Role::AnnotationUse => "annotation-use",
            Role::Parameter => "parameter",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wraps the text of a sub-tree in caller-chosen markup.
///
/// An implementation writes its opening markup through
/// [`Printer::write`], renders the node with [`Printer::print_node`] exactly
/// once, then writes its closing markup. It must not skip the node or print
/// it twice, and must leave the indentation depth as it found it.
///
/// Implementations are shared between concurrent passes and hold no mutable
/// state.
pub trait Decorator: Sync {
    fn decorate(&self, role: Role, node: NodeRef<'_>, printer: &mut Printer<'_>) -> Result<(), PrintError> {
        let _ = role;
        printer.print_node(node)
    }
}

/// Renders every decorated node without markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDecoration;

impl Decorator for NoDecoration {}
