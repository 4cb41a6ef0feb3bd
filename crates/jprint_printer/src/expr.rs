//! Rendering rules for expressions.

use crate::decorator::Role;
use crate::error::PrintError;
use crate::Printer;
use jprint_ast::*;

impl<'t> Printer<'t> {
    pub(crate) fn print_expression(&mut self, expr: &Expression) -> Result<(), PrintError> {
        match expr {
            Expression::ArrayAccess(n) => {
                self.print_attached_comment(&n.data);
                self.print_expression(&n.name)?;
                self.write("[");
                self.print_expression(&n.index)?;
                self.write("]");
                Ok(())
            }
            Expression::ArrayCreation(n) => {
                self.print_attached_comment(&n.data);
                self.write("new ");
                self.print_type(&n.element_type)?;
                for level in &n.levels {
                    self.print_array_creation_level(level)?;
                }
                if let Some(init) = &n.initializer {
                    self.write(" ");
                    self.print_array_initializer(init)?;
                }
                Ok(())
            }
            Expression::ArrayInitializer(n) => self.print_array_initializer(n),
            Expression::Assign(n) => {
                self.print_attached_comment(&n.data);
                self.print_expression(&n.target)?;
                self.write(" ");
                self.write(n.operator.as_str());
                self.write(" ");
                self.print_expression(&n.value)
            }
            Expression::Binary(n) => {
                self.print_attached_comment(&n.data);
                self.print_expression(&n.left)?;
                self.write(" ");
                self.write(n.operator.as_str());
                self.write(" ");
                self.print_expression(&n.right)
            }
            Expression::Cast(n) => {
                self.print_attached_comment(&n.data);
                self.write("(");
                self.print_type(&n.ty)?;
                self.write(") ");
                self.print_expression(&n.expression)
            }
            Expression::ClassLiteral(n) => {
                self.print_attached_comment(&n.data);
                self.print_type(&n.ty)?;
                self.write(".class");
                Ok(())
            }
            Expression::Conditional(n) => {
                self.print_attached_comment(&n.data);
                self.print_expression(&n.condition)?;
                self.write(" ? ");
                self.print_expression(&n.then_expr)?;
                self.write(" : ");
                self.print_expression(&n.else_expr)
            }
            Expression::Enclosed(n) => {
                self.print_attached_comment(&n.data);
                self.write("(");
                if let Some(inner) = &n.inner {
                    self.print_expression(inner)?;
                }
                self.write(")");
                Ok(())
            }
            Expression::FieldAccess(n) => {
                self.print_attached_comment(&n.data);
                if let Some(scope) = &n.scope {
                    self.print_expression(scope)?;
                }
                self.write(".");
                self.write(&n.field.identifier);
                Ok(())
            }
            Expression::InstanceOf(n) => {
                self.print_attached_comment(&n.data);
                self.print_expression(&n.expression)?;
                self.write(" instanceof ");
                self.print_type(&n.ty)
            }
            Expression::CharLiteral(n) => self.print_quoted(n, "'"),
            Expression::StringLiteral(n) => self.print_quoted(n, "\""),
            Expression::DoubleLiteral(n) | Expression::IntegerLiteral(n) | Expression::LongLiteral(n) => {
                self.print_attached_comment(&n.data);
                self.write(&n.value);
                Ok(())
            }
            Expression::BooleanLiteral(n) => {
                self.print_attached_comment(&n.data);
                self.write(if n.value { "true" } else { "false" });
                Ok(())
            }
            Expression::NullLiteral(n) => {
                self.print_attached_comment(&n.data);
                self.write("null");
                Ok(())
            }
            Expression::MethodCall(n) => {
                self.print_attached_comment(&n.data);
                if let Some(scope) = &n.scope {
                    self.print_expression(scope)?;
                    self.write(".");
                }
                self.print_type_arguments(n.type_arguments.as_deref())?;
                self.decorate(Role::MethodCallTarget, NodeRef::SimpleName(&n.name))?;
                self.print_arguments(&n.arguments)
            }
            Expression::Name(n) => {
                self.print_attached_comment(&n.data);
                self.write(&n.name.identifier);
                self.print_orphans_ending(NodeRef::Expr(expr));
                Ok(())
            }
            Expression::ObjectCreation(n) => self.print_object_creation(n),
            Expression::This(n) => {
                self.print_attached_comment(&n.data);
                if let Some(class_expr) = &n.class_expr {
                    self.print_expression(class_expr)?;
                    self.write(".");
                }
                self.write("this");
                Ok(())
            }
            Expression::Super(n) => {
                self.print_attached_comment(&n.data);
                if let Some(class_expr) = &n.class_expr {
                    self.print_expression(class_expr)?;
                    self.write(".");
                }
                self.write("super");
                Ok(())
            }
            Expression::Unary(n) => {
                self.print_attached_comment(&n.data);
                if n.operator.is_prefix() {
                    self.write(n.operator.as_str());
                }
                self.print_expression(&n.expression)?;
                if n.operator.is_postfix() {
                    self.write(n.operator.as_str());
                }
                Ok(())
            }
            Expression::Lambda(n) => self.print_lambda(n),
            Expression::MethodReference(n) => {
                self.print_attached_comment(&n.data);
                self.print_expression(&n.scope)?;
                self.write("::");
                self.print_type_arguments(n.type_arguments.as_deref())?;
                self.write(&n.identifier);
                Ok(())
            }
            Expression::TypeExpr(n) => {
                self.print_attached_comment(&n.data);
                self.print_type(&n.ty)
            }
            Expression::VariableDeclaration(n) => self.print_variable_declarations(n),
            Expression::Annotation(n) => self.decorate(Role::AnnotationUse, NodeRef::Annotation(n)),
        }
    }

    fn print_quoted(&mut self, n: &LiteralExpr, quote: &str) -> Result<(), PrintError> {
        self.print_attached_comment(&n.data);
        self.write(quote);
        self.write(&n.value);
        self.write(quote);
        Ok(())
    }

    /// `(a, b)`
    pub(crate) fn print_arguments(&mut self, args: &[Expression]) -> Result<(), PrintError> {
        self.write("(");
        self.print_separated(args, ", ", |p, e| p.print_expression(e))?;
        self.write(")");
        Ok(())
    }

    pub(crate) fn print_array_creation_level(&mut self, n: &ArrayCreationLevel) -> Result<(), PrintError> {
        self.print_annotations(&n.annotations, true)?;
        self.write("[");
        if let Some(dimension) = &n.dimension {
            self.print_expression(dimension)?;
        }
        self.write("]");
        Ok(())
    }

    /// `{}` or `{ a, b }`
    pub(crate) fn print_array_initializer(&mut self, n: &ArrayInitializerExpr) -> Result<(), PrintError> {
        self.print_attached_comment(&n.data);
        self.write("{");
        if !n.values.is_empty() {
            self.write(" ");
            self.print_separated(&n.values, ", ", |p, e| p.print_expression(e))?;
            self.write(" ");
        }
        self.write("}");
        Ok(())
    }

    /// `mods Type a = x, b[]`; array layers are printed per declarator.
    pub(crate) fn print_variable_declarations(&mut self, n: &VariableDeclarationExpr) -> Result<(), PrintError> {
        self.print_attached_comment(&n.data);
        self.print_annotations(&n.annotations, false)?;
        self.print_modifiers(n.modifiers);
        if let Some(first) = n.variables.first() {
            self.print_type(first.ty.element_type())?;
        }
        self.write(" ");
        self.print_separated(&n.variables, ", ", |p, v| p.print_variable_declarator(v))
    }

    fn print_object_creation(&mut self, n: &ObjectCreationExpr) -> Result<(), PrintError> {
        self.print_attached_comment(&n.data);
        if let Some(scope) = &n.scope {
            self.print_expression(scope)?;
            self.write(".");
        }
        self.write("new ");
        if let Some(args) = n.type_arguments.as_deref().filter(|args| !args.is_empty()) {
            self.print_type_arguments(Some(args))?;
            self.write(" ");
        }
        self.decorate(Role::NewObjectType, NodeRef::ClassType(&n.ty))?;
        self.print_arguments(&n.arguments)?;
        if let Some(body) = &n.anonymous_class_body {
            self.write_line(" {");
            self.indented(|p| p.print_members(body))?;
            self.write("}");
        }
        Ok(())
    }

    /// `(a, b) -> body`; an expression-statement body prints as its bare
    /// expression.
    fn print_lambda(&mut self, n: &LambdaExpr) -> Result<(), PrintError> {
        self.print_attached_comment(&n.data);
        if n.enclosing_parameters {
            self.write("(");
        }
        self.print_separated(&n.parameters, ", ", |p, param| {
            p.decorate(Role::Parameter, NodeRef::Parameter(param))
        })?;
        if n.enclosing_parameters {
            self.write(")");
        }
        self.write(" -> ");
        match &*n.body {
            Statement::Expression(body) => self.print_expression(&body.expression),
            body => self.print_statement(body),
        }
    }
}
