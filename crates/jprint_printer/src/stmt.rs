//! Rendering rules for statements.

use crate::decorator::Role;
use crate::error::PrintError;
use crate::Printer;
use jprint_ast::*;

impl<'t> Printer<'t> {
    pub(crate) fn print_statement(&mut self, stmt: &Statement) -> Result<(), PrintError> {
        // blocks resolve their own leading orphans
        if !matches!(stmt, Statement::Block(_)) {
            self.print_orphans_before(NodeRef::Stmt(stmt))?;
        }
        match stmt {
            Statement::Assert(n) => {
                self.print_attached_comment(&n.data);
                self.write("assert ");
                self.print_expression(&n.check)?;
                if let Some(message) = &n.message {
                    self.write(" : ");
                    self.print_expression(message)?;
                }
                self.write(";");
                Ok(())
            }
            Statement::Block(n) => self.print_block(n),
            Statement::Break(n) => {
                self.print_attached_comment(&n.data);
                self.write("break");
                self.print_label(n.label.as_deref());
                Ok(())
            }
            Statement::Continue(n) => {
                self.print_attached_comment(&n.data);
                self.write("continue");
                self.print_label(n.label.as_deref());
                Ok(())
            }
            Statement::Do(n) => {
                self.print_attached_comment(&n.data);
                self.write("do ");
                self.print_statement(&n.body)?;
                self.write(" while (");
                self.print_expression(&n.condition)?;
                self.write(");");
                Ok(())
            }
            Statement::Empty(n) => {
                self.print_attached_comment(&n.data);
                self.write(";");
                Ok(())
            }
            Statement::ExplicitConstructorInvocation(n) => self.print_constructor_invocation(n),
            Statement::Expression(n) => {
                self.print_attached_comment(&n.data);
                self.print_expression(&n.expression)?;
                self.write(";");
                Ok(())
            }
            Statement::Foreach(n) => {
                self.print_attached_comment(&n.data);
                self.write("for (");
                self.print_variable_declarations(&n.variable)?;
                self.write(" : ");
                self.print_expression(&n.iterable)?;
                self.write(") ");
                self.print_statement(&n.body)
            }
            Statement::For(n) => {
                self.print_attached_comment(&n.data);
                self.write("for (");
                self.print_separated(&n.initialization, ", ", |p, e| p.print_expression(e))?;
                self.write("; ");
                if let Some(compare) = &n.compare {
                    self.print_expression(compare)?;
                }
                self.write("; ");
                self.print_separated(&n.update, ", ", |p, e| p.print_expression(e))?;
                self.write(") ");
                self.print_statement(&n.body)
            }
            Statement::If(n) => self.print_if(n),
            Statement::Labeled(n) => {
                self.print_attached_comment(&n.data);
                self.write(&n.label);
                self.write(": ");
                self.print_statement(&n.statement)
            }
            Statement::LocalClass(n) => {
                self.print_attached_comment(&n.data);
                self.print_class_declaration(&n.declaration)
            }
            Statement::Return(n) => {
                self.print_attached_comment(&n.data);
                self.write("return");
                if let Some(expr) = &n.expression {
                    self.write(" ");
                    self.print_expression(expr)?;
                }
                self.write(";");
                Ok(())
            }
            Statement::Switch(n) => {
                self.print_attached_comment(&n.data);
                self.write("switch(");
                self.print_expression(&n.selector)?;
                self.write_line(") {");
                self.indented(|p| {
                    for entry in &n.entries {
                        p.print_switch_entry(entry)?;
                    }
                    p.print_orphans_ending(NodeRef::Stmt(stmt));
                    Ok(())
                })?;
                self.write("}");
                Ok(())
            }
            Statement::Synchronized(n) => {
                self.print_attached_comment(&n.data);
                self.write("synchronized (");
                self.print_expression(&n.expression)?;
                self.write(") ");
                self.print_block(&n.body)
            }
            Statement::Throw(n) => {
                self.print_attached_comment(&n.data);
                self.write("throw ");
                self.print_expression(&n.expression)?;
                self.write(";");
                Ok(())
            }
            Statement::Try(n) => self.print_try(n),
            Statement::While(n) => {
                self.print_attached_comment(&n.data);
                self.write("while (");
                self.print_expression(&n.condition)?;
                self.write(") ");
                self.print_statement(&n.body)
            }
        }
    }

    fn print_label(&mut self, label: Option<&str>) {
        if let Some(label) = label {
            self.write(" ");
            self.write(label);
        }
        self.write(";");
    }

    /// `{`, each statement on its own line one level deeper, `}`.
    pub(crate) fn print_block(&mut self, n: &BlockStmt) -> Result<(), PrintError> {
        self.print_orphans_before(NodeRef::Block(n))?;
        self.print_attached_comment(&n.data);
        self.write_line("{");
        self.indented(|p| {
            for stmt in &n.statements {
                p.print_statement(stmt)?;
                p.newline();
            }
            Ok(())
        })?;
        self.print_orphans_ending(NodeRef::Block(n));
        self.write("}");
        Ok(())
    }

    /// A non-block branch goes on its own line one level deeper. `else` stays
    /// inline only when the else branch is a block or another `if`.
    fn print_if(&mut self, n: &IfStmt) -> Result<(), PrintError> {
        self.print_attached_comment(&n.data);
        self.write("if (");
        self.print_expression(&n.condition)?;
        let then_block = matches!(*n.then_stmt, Statement::Block(_));
        if then_block {
            self.write(") ");
            self.print_statement(&n.then_stmt)?;
        } else {
            self.write_line(")");
            self.indented(|p| p.print_statement(&n.then_stmt))?;
        }

        let Some(else_stmt) = &n.else_stmt else {
            return Ok(());
        };
        if then_block {
            self.write(" ");
        } else {
            self.newline();
        }
        if matches!(**else_stmt, Statement::If(_) | Statement::Block(_)) {
            self.write("else ");
            self.print_statement(else_stmt)
        } else {
            self.write_line("else");
            self.indented(|p| p.print_statement(else_stmt))
        }
    }

    pub(crate) fn print_switch_entry(&mut self, n: &SwitchEntry) -> Result<(), PrintError> {
        self.print_orphans_before(NodeRef::SwitchEntry(n))?;
        self.print_attached_comment(&n.data);
        match &n.label {
            Some(label) => {
                self.write("case ");
                self.print_expression(label)?;
                self.write(":");
            }
            None => self.write("default:"),
        }
        self.newline();
        self.indented(|p| {
            for stmt in &n.statements {
                p.print_statement(stmt)?;
                p.newline();
            }
            p.print_orphans_ending(NodeRef::SwitchEntry(n));
            Ok(())
        })
    }

    /// `try (a;\n    b) { } catch (E e) { } finally { }`
    fn print_try(&mut self, n: &TryStmt) -> Result<(), PrintError> {
        self.print_attached_comment(&n.data);
        self.write("try ");
        if let Some((first, rest)) = n.resources.split_first() {
            self.write("(");
            self.print_variable_declarations(first)?;
            if !rest.is_empty() {
                self.write(";");
                self.newline();
                self.indented(|p| {
                    for (i, resource) in rest.iter().enumerate() {
                        p.print_variable_declarations(resource)?;
                        if i + 1 < rest.len() {
                            p.write(";");
                            p.newline();
                        }
                    }
                    Ok(())
                })?;
            }
            self.write(") ");
        }
        self.print_block(&n.try_block)?;
        for catch in &n.catch_clauses {
            self.print_catch_clause(catch)?;
        }
        if let Some(finally) = &n.finally_block {
            self.write(" finally ");
            self.print_block(finally)?;
        }
        Ok(())
    }

    pub(crate) fn print_catch_clause(&mut self, n: &CatchClause) -> Result<(), PrintError> {
        self.print_attached_comment(&n.data);
        self.write(" catch (");
        self.decorate(Role::Parameter, NodeRef::Parameter(&n.parameter))?;
        self.write(") ");
        self.print_block(&n.body)
    }

    fn print_constructor_invocation(&mut self, n: &ExplicitConstructorInvocationStmt) -> Result<(), PrintError> {
        self.print_attached_comment(&n.data);
        if n.is_this {
            self.print_type_arguments(n.type_arguments.as_deref())?;
            self.write("this");
        } else {
            if let Some(expr) = &n.expression {
                self.print_expression(expr)?;
                self.write(".");
            }
            self.print_type_arguments(n.type_arguments.as_deref())?;
            self.write("super");
        }
        self.print_arguments(&n.arguments)?;
        self.write(";");
        Ok(())
    }
}
