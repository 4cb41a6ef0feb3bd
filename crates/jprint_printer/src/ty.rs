//! Rendering rules for types, type parameters and annotations.

use crate::decorator::Role;
use crate::error::PrintError;
use crate::Printer;
use jprint_ast::*;

impl<'t> Printer<'t> {
    /// Print a type in a type position; class types are decorated as type
    /// references.
    pub(crate) fn print_type(&mut self, ty: &Type) -> Result<(), PrintError> {
        match ty {
            Type::ClassOrInterface(c) => self.print_type_reference(c),
            _ => self.print_type_plain(ty),
        }
    }

    pub(crate) fn print_type_reference(&mut self, ty: &ClassOrInterfaceType) -> Result<(), PrintError> {
        self.decorate(Role::TypeReference, NodeRef::ClassType(ty))
    }

    pub(crate) fn print_type_references(&mut self, types: &[ClassOrInterfaceType], separator: &str) -> Result<(), PrintError> {
        self.print_separated(types, separator, |p, t| p.print_type_reference(t))
    }

    pub(crate) fn print_type_plain(&mut self, ty: &Type) -> Result<(), PrintError> {
        match ty {
            Type::ClassOrInterface(n) => self.print_class_type(n),
            Type::Primitive(n) => {
                self.print_attached_comment(&n.data);
                self.print_annotations(&n.annotations, true)?;
                self.write(n.primitive.as_str());
                Ok(())
            }
            Type::Array(n) => {
                self.print_attached_comment(&n.data);
                self.print_type(ty.element_type())?;
                self.print_array_brackets(ty)
            }
            Type::Void(n) => {
                self.print_attached_comment(&n.data);
                self.print_annotations(&n.annotations, false)?;
                self.write("void");
                Ok(())
            }
            Type::Wildcard(n) => {
                self.print_attached_comment(&n.data);
                self.print_annotations(&n.annotations, false)?;
                self.write("?");
                if let Some(extended) = &n.extended_type {
                    self.write(" extends ");
                    self.print_type(extended)?;
                }
                if let Some(super_type) = &n.super_type {
                    self.write(" super ");
                    self.print_type(super_type)?;
                }
                Ok(())
            }
            Type::Union(n) => {
                self.print_attached_comment(&n.data);
                self.print_annotations(&n.annotations, true)?;
                self.print_separated(&n.elements, " | ", |p, t| p.print_type(t))
            }
            Type::Intersection(n) => {
                self.print_attached_comment(&n.data);
                self.print_annotations(&n.annotations, false)?;
                self.print_separated(&n.elements, " & ", |p, t| p.print_type(t))
            }
            Type::Unknown(_) => Ok(()),
        }
    }

    /// `scope.@A Name<Args>`, undecorated at this level.
    pub(crate) fn print_class_type(&mut self, n: &ClassOrInterfaceType) -> Result<(), PrintError> {
        self.print_attached_comment(&n.data);
        if let Some(scope) = &n.scope {
            self.print_class_type(scope)?;
            self.write(".");
        }
        self.print_annotations(&n.annotations, false)?;
        self.write(&n.name.identifier);
        if n.is_diamond() {
            self.write("<>");
            Ok(())
        } else {
            self.print_type_arguments(n.type_arguments.as_deref())
        }
    }

    /// One `[]` per array layer of `ty`, outermost layer first, each preceded
    /// by that layer's annotations.
    pub(crate) fn print_array_brackets(&mut self, ty: &Type) -> Result<(), PrintError> {
        for layer in ty.array_layers() {
            self.print_annotations(&layer.annotations, true)?;
            self.write("[]");
        }
        Ok(())
    }

    /// `<A, B>`; nothing for absent or empty arguments.
    pub(crate) fn print_type_arguments(&mut self, args: Option<&[Type]>) -> Result<(), PrintError> {
        match args {
            Some(args) if !args.is_empty() => {
                self.write("<");
                self.print_separated(args, ", ", |p, t| p.print_type(t))?;
                self.write(">");
                Ok(())
            }
            _ => Ok(()),
        }
    }

    pub(crate) fn print_type_parameters(&mut self, params: &[TypeParameter]) -> Result<(), PrintError> {
        if params.is_empty() {
            return Ok(());
        }
        self.write("<");
        self.print_separated(params, ", ", |p, tp| p.print_type_parameter(tp))?;
        self.write(">");
        Ok(())
    }

    pub(crate) fn print_type_parameter(&mut self, n: &TypeParameter) -> Result<(), PrintError> {
        self.print_attached_comment(&n.data);
        self.print_annotations(&n.annotations, false)?;
        self.write(&n.name.identifier);
        if !n.type_bound.is_empty() {
            self.write(" extends ");
            self.print_type_references(&n.type_bound, " & ")?;
        }
        Ok(())
    }

    // ========================================================================
    // Annotations
    // ========================================================================

    /// Annotations on their own lines, before a declaration.
    pub(crate) fn print_member_annotations(&mut self, annotations: &[Annotation]) -> Result<(), PrintError> {
        for annotation in annotations {
            self.decorate(Role::AnnotationUse, NodeRef::Annotation(annotation))?;
            self.newline();
        }
        Ok(())
    }

    /// Annotations inline, each followed by a space.
    pub(crate) fn print_annotations(&mut self, annotations: &[Annotation], prefix_with_space: bool) -> Result<(), PrintError> {
        if annotations.is_empty() {
            return Ok(());
        }
        if prefix_with_space {
            self.write(" ");
        }
        for annotation in annotations {
            self.decorate(Role::AnnotationUse, NodeRef::Annotation(annotation))?;
            self.write(" ");
        }
        Ok(())
    }

    pub(crate) fn print_annotation(&mut self, n: &Annotation) -> Result<(), PrintError> {
        self.print_attached_comment(&n.data);
        self.write("@");
        self.print_name(&n.name)?;
        match &n.arguments {
            AnnotationArguments::Marker => {}
            AnnotationArguments::Single(value) => {
                self.write("(");
                self.print_expression(value)?;
                self.write(")");
            }
            AnnotationArguments::Pairs(pairs) => {
                self.write("(");
                self.print_separated(pairs, ", ", |p, pair| p.print_member_value_pair(pair))?;
                self.write(")");
            }
        }
        Ok(())
    }

    pub(crate) fn print_member_value_pair(&mut self, n: &MemberValuePair) -> Result<(), PrintError> {
        self.print_attached_comment(&n.data);
        self.write(&n.name.identifier);
        self.write(" = ");
        self.print_expression(&n.value)
    }

    // ========================================================================
    // Names
    // ========================================================================

    pub(crate) fn print_name(&mut self, n: &Name) -> Result<(), PrintError> {
        self.print_attached_comment(&n.data);
        if let Some(qualifier) = &n.qualifier {
            self.print_name(qualifier)?;
            self.write(".");
        }
        self.write(&n.identifier);
        self.print_orphans_ending(NodeRef::Name(n));
        Ok(())
    }

    pub(crate) fn print_modifiers(&mut self, modifiers: Modifiers) {
        if modifiers.is_empty() {
            return;
        }
        let keywords: Vec<&str> = modifiers.keywords().collect();
        self.write(&keywords.join(" "));
        self.write(" ");
    }
}
