//! Rendering rules for the compilation unit and declarations.

use crate::decorator::Role;
use crate::error::PrintError;
use crate::Printer;
use jprint_ast::*;

impl<'t> Printer<'t> {
    // ========================================================================
    // Compilation unit
    // ========================================================================

    pub(crate) fn print_compilation_unit(&mut self, n: &CompilationUnit) -> Result<(), PrintError> {
        self.print_attached_comment(&n.data);
        if let Some(package) = &n.package {
            self.print_package(package)?;
        }
        for import in &n.imports {
            self.print_orphans_before(NodeRef::Import(import))?;
            self.print_import(import)?;
        }
        if !n.imports.is_empty() {
            self.newline();
        }
        for (i, ty) in n.types.iter().enumerate() {
            self.print_orphans_before(NodeRef::from_type_decl(ty))?;
            self.print_type_declaration(ty)?;
            self.newline();
            if i + 1 < n.types.len() {
                self.newline();
            }
        }
        self.print_orphans_ending(NodeRef::CompilationUnit(n));
        Ok(())
    }

    pub(crate) fn print_package(&mut self, n: &PackageDeclaration) -> Result<(), PrintError> {
        self.print_attached_comment(&n.data);
        self.print_annotations(&n.annotations, false)?;
        self.write("package ");
        self.print_name(&n.name)?;
        self.write_line(";");
        self.newline();
        self.print_orphans_ending(NodeRef::Package(n));
        Ok(())
    }

    pub(crate) fn print_import(&mut self, n: &ImportDeclaration) -> Result<(), PrintError> {
        self.print_attached_comment(&n.data);
        self.write("import ");
        if n.is_static {
            self.write("static ");
        }
        self.print_name(&n.name)?;
        if n.is_asterisk {
            self.write(".*");
        }
        self.write_line(";");
        self.print_orphans_ending(NodeRef::Import(n));
        Ok(())
    }

    // ========================================================================
    // Type declarations
    // ========================================================================

    pub(crate) fn print_type_declaration(&mut self, n: &TypeDeclaration) -> Result<(), PrintError> {
        match n {
            TypeDeclaration::Class(c) => self.print_class_declaration(c),
            TypeDeclaration::Enum(e) => self.print_enum_declaration(e),
            TypeDeclaration::Annotation(a) => self.print_annotation_declaration(a),
        }
    }

    pub(crate) fn print_class_declaration(&mut self, n: &ClassOrInterfaceDeclaration) -> Result<(), PrintError> {
        self.print_attached_comment(&n.data);
        self.print_member_annotations(&n.annotations)?;
        self.print_modifiers(n.modifiers);
        self.write(if n.is_interface { "interface " } else { "class " });
        self.decorate(Role::ClassDeclaration, NodeRef::SimpleName(&n.name))?;
        self.print_type_parameters(&n.type_parameters)?;
        if !n.extends.is_empty() {
            self.write(" extends ");
            self.print_type_references(&n.extends, ", ")?;
        }
        if !n.implements.is_empty() {
            self.write(" implements ");
            self.print_type_references(&n.implements, ", ")?;
        }
        self.write_line(" {");
        self.indented(|p| {
            p.print_members(&n.members)?;
            p.print_orphans_ending(NodeRef::ClassDecl(n));
            Ok(())
        })?;
        self.write("}");
        Ok(())
    }

    pub(crate) fn print_enum_declaration(&mut self, n: &EnumDeclaration) -> Result<(), PrintError> {
        self.print_attached_comment(&n.data);
        self.print_member_annotations(&n.annotations)?;
        self.print_modifiers(n.modifiers);
        self.write("enum ");
        self.write(&n.name.identifier);
        if !n.implements.is_empty() {
            self.write(" implements ");
            self.print_type_references(&n.implements, ", ")?;
        }
        self.write_line(" {");
        self.indented(|p| {
            p.newline();
            p.print_separated(&n.entries, ", ", |p, e| {
                p.print_orphans_before(NodeRef::EnumConstant(e))?;
                p.print_enum_constant(e)
            })?;
            if !n.members.is_empty() {
                p.write_line(";");
                p.print_members(&n.members)?;
            } else if !n.entries.is_empty() {
                p.newline();
            }
            Ok(())
        })?;
        self.write("}");
        Ok(())
    }

    pub(crate) fn print_enum_constant(&mut self, n: &EnumConstantDeclaration) -> Result<(), PrintError> {
        self.print_attached_comment(&n.data);
        self.print_member_annotations(&n.annotations)?;
        self.write(&n.name.identifier);
        if !n.arguments.is_empty() {
            self.print_arguments(&n.arguments)?;
        }
        if !n.class_body.is_empty() {
            self.write_line(" {");
            self.indented(|p| p.print_members(&n.class_body))?;
            self.write_line("}");
        }
        Ok(())
    }

    pub(crate) fn print_annotation_declaration(&mut self, n: &AnnotationDeclaration) -> Result<(), PrintError> {
        self.print_attached_comment(&n.data);
        self.print_member_annotations(&n.annotations)?;
        self.print_modifiers(n.modifiers);
        self.write("@interface ");
        self.write(&n.name.identifier);
        self.write_line(" {");
        self.indented(|p| p.print_members(&n.members))?;
        self.write("}");
        Ok(())
    }

    // ========================================================================
    // Members
    // ========================================================================

    /// Each member between two line breaks.
    pub(crate) fn print_members(&mut self, members: &[BodyDeclaration]) -> Result<(), PrintError> {
        for member in members {
            self.newline();
            self.print_member(member)?;
            self.newline();
        }
        Ok(())
    }

    pub(crate) fn print_member(&mut self, member: &BodyDeclaration) -> Result<(), PrintError> {
        self.print_orphans_before(NodeRef::from_member(member))?;
        match member {
            BodyDeclaration::Field(n) => self.print_field(n),
            BodyDeclaration::Method(n) => self.print_method(n),
            BodyDeclaration::Constructor(n) => self.print_constructor(n),
            BodyDeclaration::Initializer(n) => {
                self.print_attached_comment(&n.data);
                if n.is_static {
                    self.write("static ");
                }
                self.print_block(&n.body)
            }
            BodyDeclaration::AnnotationMember(n) => self.print_annotation_member(n),
            BodyDeclaration::Empty(n) => {
                self.print_attached_comment(&n.data);
                self.write(";");
                Ok(())
            }
            BodyDeclaration::Class(n) => self.print_class_declaration(n),
            BodyDeclaration::Enum(n) => self.print_enum_declaration(n),
            BodyDeclaration::Annotation(n) => self.print_annotation_declaration(n),
        }
    }

    fn print_field(&mut self, n: &FieldDeclaration) -> Result<(), PrintError> {
        self.print_attached_comment(&n.data);
        self.print_member_annotations(&n.annotations)?;
        self.print_modifiers(n.modifiers);
        if let Some(first) = n.variables.first() {
            self.print_type(first.ty.element_type())?;
        }
        self.write(" ");
        self.print_separated(&n.variables, ", ", |p, v| p.print_variable_declarator(v))?;
        self.write(";");
        Ok(())
    }

    /// `name[]… = init`; the element type is printed by the enclosing
    /// declaration.
    pub(crate) fn print_variable_declarator(&mut self, n: &VariableDeclarator) -> Result<(), PrintError> {
        self.print_attached_comment(&n.data);
        self.write(&n.name.identifier);
        self.print_array_brackets(&n.ty)?;
        if let Some(init) = &n.initializer {
            self.write(" = ");
            self.print_expression(init)?;
        }
        Ok(())
    }

    fn print_method(&mut self, n: &MethodDeclaration) -> Result<(), PrintError> {
        self.print_attached_comment(&n.data);
        self.print_member_annotations(&n.annotations)?;
        self.print_modifiers(n.modifiers);
        if n.is_default {
            self.write("default ");
        }
        if !n.type_parameters.is_empty() {
            self.print_type_parameters(&n.type_parameters)?;
            self.write(" ");
        }
        self.print_type(&n.ty)?;
        self.write(" ");
        self.decorate(Role::MethodDeclaration, NodeRef::SimpleName(&n.name))?;
        self.print_parameters(&n.parameters)?;
        self.print_thrown(&n.thrown)?;
        match &n.body {
            Some(body) => {
                self.write(" ");
                self.print_block(body)
            }
            None => {
                self.write(";");
                Ok(())
            }
        }
    }

    fn print_constructor(&mut self, n: &ConstructorDeclaration) -> Result<(), PrintError> {
        self.print_attached_comment(&n.data);
        self.print_member_annotations(&n.annotations)?;
        self.print_modifiers(n.modifiers);
        if !n.type_parameters.is_empty() {
            self.print_type_parameters(&n.type_parameters)?;
            self.write(" ");
        }
        self.decorate(Role::Constructor, NodeRef::SimpleName(&n.name))?;
        self.print_parameters(&n.parameters)?;
        self.print_thrown(&n.thrown)?;
        self.write(" ");
        self.print_block(&n.body)
    }

    fn print_annotation_member(&mut self, n: &AnnotationMemberDeclaration) -> Result<(), PrintError> {
        self.print_attached_comment(&n.data);
        self.print_member_annotations(&n.annotations)?;
        self.print_modifiers(n.modifiers);
        self.print_type(&n.ty)?;
        self.write(" ");
        self.write(&n.name.identifier);
        self.write("()");
        if let Some(default) = &n.default_value {
            self.write(" default ");
            self.print_expression(default)?;
        }
        self.write(";");
        Ok(())
    }

    /// `(p, q)` with every parameter decorated.
    pub(crate) fn print_parameters(&mut self, params: &[Parameter]) -> Result<(), PrintError> {
        self.write("(");
        self.print_separated(params, ", ", |p, param| p.decorate(Role::Parameter, NodeRef::Parameter(param)))?;
        self.write(")");
        Ok(())
    }

    fn print_thrown(&mut self, thrown: &[Type]) -> Result<(), PrintError> {
        if thrown.is_empty() {
            return Ok(());
        }
        self.write(" throws ");
        self.print_separated(thrown, ", ", |p, t| p.print_type(t))
    }

    pub(crate) fn print_parameter(&mut self, n: &Parameter) -> Result<(), PrintError> {
        self.print_attached_comment(&n.data);
        self.print_annotations(&n.annotations, false)?;
        self.print_modifiers(n.modifiers);
        self.print_type(&n.ty)?;
        if n.is_var_args {
            self.write("...");
        }
        if !matches!(n.ty, Type::Unknown(_)) {
            self.write(" ");
        }
        self.write(&n.name.identifier);
        Ok(())
    }
}
