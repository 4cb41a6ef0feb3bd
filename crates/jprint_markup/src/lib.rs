//! jprint_markup: HTML tag decoration for printed source.
//!
//! [`MarkupDecorator`] wraps each decorated sub-tree in
//! `<span type='…' >…</span>`, where the type names the role the sub-tree
//! plays. Stripping the tags gives back the undecorated text exactly.
//!
//! ```
//! use jprint_ast::factory::*;
//! use jprint_ast::{Modifiers, NodeRef, TypeDeclaration};
//! use jprint_markup::MarkupDecorator;
//! use jprint_printer::{Printer, PrinterOptions};
//!
//! let unit = compilation_unit(None, vec![], vec![TypeDeclaration::Class(class(Modifiers::PUBLIC, "A", vec![]))]);
//! let decorator = MarkupDecorator::default();
//! let html = Printer::with_decorator(PrinterOptions::default(), &decorator)
//!     .print(NodeRef::CompilationUnit(&unit))
//!     .unwrap();
//! assert_eq!(html, "public class <span type='class_declare' >A</span> {\n}\n");
//! ```

pub mod style;
pub mod tag;

pub use style::MarkupStyle;
pub use tag::Tag;

use jprint_ast::NodeRef;
use jprint_printer::{Decorator, PrintError, Printer, Role};

/// The `type` attribute written for each role.
pub fn markup_type(role: Role) -> &'static str {
    match role {
        Role::ClassDeclaration => "class_declare",
        Role::MethodDeclaration => "method_declare",
        Role::MethodCallTarget => "method_call",
        Role::Constructor => "constructor",
        Role::TypeReference => "class",
        Role::NewObjectType => "new",
        Role::AnnotationUse => "use_annotation",
        Role::Parameter => "parameter",
    }
}

/// Decorator emitting one tag per decorated sub-tree.
#[derive(Debug, Clone, Default)]
pub struct MarkupDecorator {
    style: MarkupStyle,
}

impl MarkupDecorator {
    pub fn new(style: MarkupStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &MarkupStyle {
        &self.style
    }

    fn tag_for(&self, role: Role) -> Tag<'_> {
        let kind = markup_type(role);
        Tag::new(&self.style.tag)
            .kind(kind)
            .classes(self.style.classes_for(kind).iter().map(String::as_str))
    }

    fn is_bare(&self, role: Role, node: NodeRef<'_>) -> bool {
        match (role, node) {
            (Role::TypeReference, NodeRef::ClassType(ty)) => self.style.is_blacklisted(&ty.name.identifier),
            _ => false,
        }
    }
}

impl Decorator for MarkupDecorator {
    fn decorate(&self, role: Role, node: NodeRef<'_>, printer: &mut Printer<'_>) -> Result<(), PrintError> {
        if self.is_bare(role, node) {
            return printer.print_node(node);
        }
        let tag = self.tag_for(role);
        printer.write(&tag.open());
        printer.print_node(node)?;
        printer.write(&tag.close());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_types_are_distinct() {
        let mut kinds: Vec<_> = Role::ALL.iter().map(|role| markup_type(*role)).collect();
        kinds.sort_unstable();
        kinds.dedup();
        assert_eq!(kinds.len(), Role::ALL.len());
    }

    #[test]
    fn test_tag_uses_style() {
        let mut style = MarkupStyle {
            tag: "code".to_string(),
            ..MarkupStyle::default()
        };
        style.classes.insert("method_call".to_string(), vec!["call".to_string()]);
        let decorator = MarkupDecorator::new(style);
        assert_eq!(
            decorator.tag_for(Role::MethodCallTarget).open(),
            "<code type='method_call' class='call' >"
        );
        assert_eq!(decorator.tag_for(Role::Parameter).open(), "<code type='parameter' >");
    }
}
