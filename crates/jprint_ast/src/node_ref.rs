//! Borrowed, uniformly typed references to AST nodes.
//!
//! A [`NodeRef`] lets code that walks the tree generically (the parent index,
//! the orphan comment resolver, decorators) talk about any node without
//! knowing its concrete type. Each node has exactly one canonical `NodeRef`:
//! a block reached as `Statement::Block` and a method's body are both
//! `NodeRef::Block`, so identity comparisons through [`NodeRef::key`] agree
//! no matter which slot the node was reached from.

use crate::generated::HasNodeData;
use crate::node::*;
use jprint_core::TextRange;

/// A reference to any node in the tree, or to a comment.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    CompilationUnit(&'a CompilationUnit),
    Package(&'a PackageDeclaration),
    Import(&'a ImportDeclaration),
    ClassDecl(&'a ClassOrInterfaceDeclaration),
    EnumDecl(&'a EnumDeclaration),
    AnnotationDecl(&'a AnnotationDeclaration),
    /// Any member other than a nested type declaration.
    Member(&'a BodyDeclaration),
    EnumConstant(&'a EnumConstantDeclaration),
    Parameter(&'a Parameter),
    TypeParameter(&'a TypeParameter),
    VariableDeclarator(&'a VariableDeclarator),
    Annotation(&'a Annotation),
    MemberValuePair(&'a MemberValuePair),
    ClassType(&'a ClassOrInterfaceType),
    /// Any type other than a class or interface type.
    Type(&'a Type),
    Block(&'a BlockStmt),
    /// Any statement other than a block.
    Stmt(&'a Statement),
    SwitchEntry(&'a SwitchEntry),
    CatchClause(&'a CatchClause),
    ArrayCreationLevel(&'a ArrayCreationLevel),
    ArrayInitializer(&'a ArrayInitializerExpr),
    VariableDeclarations(&'a VariableDeclarationExpr),
    /// Any expression without a dedicated variant above.
    Expr(&'a Expression),
    Name(&'a Name),
    SimpleName(&'a SimpleName),
    Comment(&'a Comment),
}

/// Identity of a node within one tree: the variant plus the node's address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeKey {
    tag: u8,
    addr: usize,
}

impl<'a> NodeRef<'a> {
    // ========================================================================
    // Canonical constructors
    // ========================================================================

    pub fn from_type_decl(decl: &'a TypeDeclaration) -> Self {
        match decl {
            TypeDeclaration::Class(c) => NodeRef::ClassDecl(c),
            TypeDeclaration::Enum(e) => NodeRef::EnumDecl(e),
            TypeDeclaration::Annotation(a) => NodeRef::AnnotationDecl(a),
        }
    }

    pub fn from_member(member: &'a BodyDeclaration) -> Self {
        match member {
            BodyDeclaration::Class(c) => NodeRef::ClassDecl(c),
            BodyDeclaration::Enum(e) => NodeRef::EnumDecl(e),
            BodyDeclaration::Annotation(a) => NodeRef::AnnotationDecl(a),
            _ => NodeRef::Member(member),
        }
    }

    pub fn from_type(ty: &'a Type) -> Self {
        match ty {
            Type::ClassOrInterface(c) => NodeRef::ClassType(c),
            _ => NodeRef::Type(ty),
        }
    }

    pub fn from_stmt(stmt: &'a Statement) -> Self {
        match stmt {
            Statement::Block(b) => NodeRef::Block(b),
            _ => NodeRef::Stmt(stmt),
        }
    }

    pub fn from_expr(expr: &'a Expression) -> Self {
        match expr {
            Expression::Annotation(a) => NodeRef::Annotation(a),
            Expression::ArrayInitializer(i) => NodeRef::ArrayInitializer(i),
            Expression::VariableDeclaration(v) => NodeRef::VariableDeclarations(v),
            _ => NodeRef::Expr(expr),
        }
    }

    // ========================================================================
    // Identity and common data
    // ========================================================================

    /// Identity key. Two refs have equal keys iff they refer to the same node.
    pub fn key(&self) -> NodeKey {
        fn addr<T>(r: &T) -> usize {
            r as *const T as usize
        }
        let (tag, addr) = match *self {
            NodeRef::CompilationUnit(n) => (0, addr(n)),
            NodeRef::Package(n) => (1, addr(n)),
            NodeRef::Import(n) => (2, addr(n)),
            NodeRef::ClassDecl(n) => (3, addr(n)),
            NodeRef::EnumDecl(n) => (4, addr(n)),
            NodeRef::AnnotationDecl(n) => (5, addr(n)),
            NodeRef::Member(n) => (6, addr(n)),
            NodeRef::EnumConstant(n) => (7, addr(n)),
            NodeRef::Parameter(n) => (8, addr(n)),
            NodeRef::TypeParameter(n) => (9, addr(n)),
            NodeRef::VariableDeclarator(n) => (10, addr(n)),
            NodeRef::Annotation(n) => (11, addr(n)),
            NodeRef::MemberValuePair(n) => (12, addr(n)),
            NodeRef::ClassType(n) => (13, addr(n)),
            NodeRef::Type(n) => (14, addr(n)),
            NodeRef::Block(n) => (15, addr(n)),
            NodeRef::Stmt(n) => (16, addr(n)),
            NodeRef::SwitchEntry(n) => (17, addr(n)),
            NodeRef::CatchClause(n) => (18, addr(n)),
            NodeRef::ArrayCreationLevel(n) => (19, addr(n)),
            NodeRef::ArrayInitializer(n) => (20, addr(n)),
            NodeRef::VariableDeclarations(n) => (21, addr(n)),
            NodeRef::Expr(n) => (22, addr(n)),
            NodeRef::Name(n) => (23, addr(n)),
            NodeRef::SimpleName(n) => (24, addr(n)),
            NodeRef::Comment(n) => (25, addr(n)),
        };
        NodeKey { tag, addr }
    }

    /// Whether both refs denote the same node.
    pub fn same(&self, other: &NodeRef<'_>) -> bool {
        self.key() == other.key()
    }

    /// The common data of the node; `None` for comments.
    pub fn data(&self) -> Option<&'a NodeData> {
        Some(match *self {
            NodeRef::CompilationUnit(n) => n.data(),
            NodeRef::Package(n) => n.data(),
            NodeRef::Import(n) => n.data(),
            NodeRef::ClassDecl(n) => n.data(),
            NodeRef::EnumDecl(n) => n.data(),
            NodeRef::AnnotationDecl(n) => n.data(),
            NodeRef::Member(n) => n.data(),
            NodeRef::EnumConstant(n) => n.data(),
            NodeRef::Parameter(n) => n.data(),
            NodeRef::TypeParameter(n) => n.data(),
            NodeRef::VariableDeclarator(n) => n.data(),
            NodeRef::Annotation(n) => n.data(),
            NodeRef::MemberValuePair(n) => n.data(),
            NodeRef::ClassType(n) => n.data(),
            NodeRef::Type(n) => n.data(),
            NodeRef::Block(n) => n.data(),
            NodeRef::Stmt(n) => n.data(),
            NodeRef::SwitchEntry(n) => n.data(),
            NodeRef::CatchClause(n) => n.data(),
            NodeRef::ArrayCreationLevel(n) => n.data(),
            NodeRef::ArrayInitializer(n) => n.data(),
            NodeRef::VariableDeclarations(n) => n.data(),
            NodeRef::Expr(n) => n.data(),
            NodeRef::Name(n) => n.data(),
            NodeRef::SimpleName(n) => n.data(),
            NodeRef::Comment(_) => return None,
        })
    }

    pub fn range(&self) -> TextRange {
        match *self {
            NodeRef::Comment(c) => c.range,
            _ => self.data().map(|d| d.range).unwrap_or_default(),
        }
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, NodeRef::Comment(_))
    }

    /// The comment attached to this node, if any.
    pub fn comment(&self) -> Option<&'a Comment> {
        self.data().and_then(|d| d.comment.as_ref())
    }

    /// Comments inside this node that belong to none of its children.
    pub fn orphan_comments(&self) -> &'a [Comment] {
        self.data().map(|d| d.orphan_comments.as_slice()).unwrap_or(&[])
    }

    /// The node kind name used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match *self {
            NodeRef::CompilationUnit(_) => "CompilationUnit",
            NodeRef::Package(_) => "PackageDeclaration",
            NodeRef::Import(_) => "ImportDeclaration",
            NodeRef::ClassDecl(_) => "ClassOrInterfaceDeclaration",
            NodeRef::EnumDecl(_) => "EnumDeclaration",
            NodeRef::AnnotationDecl(_) => "AnnotationDeclaration",
            NodeRef::Member(n) => n.kind_name(),
            NodeRef::EnumConstant(_) => "EnumConstantDeclaration",
            NodeRef::Parameter(_) => "Parameter",
            NodeRef::TypeParameter(_) => "TypeParameter",
            NodeRef::VariableDeclarator(_) => "VariableDeclarator",
            NodeRef::Annotation(_) => "Annotation",
            NodeRef::MemberValuePair(_) => "MemberValuePair",
            NodeRef::ClassType(_) => "ClassOrInterfaceType",
            NodeRef::Type(n) => n.kind_name(),
            NodeRef::Block(_) => "BlockStmt",
            NodeRef::Stmt(n) => n.kind_name(),
            NodeRef::SwitchEntry(_) => "SwitchEntryStmt",
            NodeRef::CatchClause(_) => "CatchClause",
            NodeRef::ArrayCreationLevel(_) => "ArrayCreationLevel",
            NodeRef::ArrayInitializer(_) => "ArrayInitializerExpr",
            NodeRef::VariableDeclarations(_) => "VariableDeclarationExpr",
            NodeRef::Expr(n) => n.kind_name(),
            NodeRef::Name(_) => "Name",
            NodeRef::SimpleName(_) => "SimpleName",
            NodeRef::Comment(c) => match c.kind {
                crate::types::CommentKind::Line => "LineComment",
                crate::types::CommentKind::Block => "BlockComment",
                crate::types::CommentKind::Doc => "JavadocComment",
            },
        }
    }

    // ========================================================================
    // Children
    // ========================================================================

    /// The structural children of this node in declaration order. Attached
    /// and orphan comments are not included.
    pub fn children(&self) -> Vec<NodeRef<'a>> {
        let mut out = ChildList(Vec::new());
        match *self {
            NodeRef::CompilationUnit(n) => {
                if let Some(p) = &n.package {
                    out.push(NodeRef::Package(p));
                }
                for i in &n.imports {
                    out.push(NodeRef::Import(i));
                }
                for t in &n.types {
                    out.push(NodeRef::from_type_decl(t));
                }
            }
            NodeRef::Package(n) => {
                out.annotations(&n.annotations);
                out.push(NodeRef::Name(&n.name));
            }
            NodeRef::Import(n) => out.push(NodeRef::Name(&n.name)),
            NodeRef::ClassDecl(n) => {
                out.annotations(&n.annotations);
                out.push(NodeRef::SimpleName(&n.name));
                for tp in &n.type_parameters {
                    out.push(NodeRef::TypeParameter(tp));
                }
                out.class_types(&n.extends);
                out.class_types(&n.implements);
                out.members(&n.members);
            }
            NodeRef::EnumDecl(n) => {
                out.annotations(&n.annotations);
                out.push(NodeRef::SimpleName(&n.name));
                out.class_types(&n.implements);
                for e in &n.entries {
                    out.push(NodeRef::EnumConstant(e));
                }
                out.members(&n.members);
            }
            NodeRef::AnnotationDecl(n) => {
                out.annotations(&n.annotations);
                out.push(NodeRef::SimpleName(&n.name));
                out.members(&n.members);
            }
            NodeRef::Member(n) => out.member(n),
            NodeRef::EnumConstant(n) => {
                out.annotations(&n.annotations);
                out.push(NodeRef::SimpleName(&n.name));
                out.exprs(&n.arguments);
                out.members(&n.class_body);
            }
            NodeRef::Parameter(n) => {
                out.annotations(&n.annotations);
                out.ty(&n.ty);
                out.push(NodeRef::SimpleName(&n.name));
            }
            NodeRef::TypeParameter(n) => {
                out.annotations(&n.annotations);
                out.push(NodeRef::SimpleName(&n.name));
                out.class_types(&n.type_bound);
            }
            NodeRef::VariableDeclarator(n) => {
                out.ty(&n.ty);
                out.push(NodeRef::SimpleName(&n.name));
                out.expr_opt(n.initializer.as_ref());
            }
            NodeRef::Annotation(n) => {
                out.push(NodeRef::Name(&n.name));
                match &n.arguments {
                    AnnotationArguments::Marker => {}
                    AnnotationArguments::Single(v) => out.expr(v),
                    AnnotationArguments::Pairs(pairs) => {
                        for p in pairs {
                            out.push(NodeRef::MemberValuePair(p));
                        }
                    }
                }
            }
            NodeRef::MemberValuePair(n) => {
                out.push(NodeRef::SimpleName(&n.name));
                out.expr(&n.value);
            }
            NodeRef::ClassType(n) => {
                if let Some(scope) = n.scope.as_deref() {
                    out.push(NodeRef::ClassType(scope));
                }
                out.annotations(&n.annotations);
                out.push(NodeRef::SimpleName(&n.name));
                out.type_args(n.type_arguments.as_deref());
            }
            NodeRef::Type(n) => out.type_children(n),
            NodeRef::Block(n) => out.stmts(&n.statements),
            NodeRef::Stmt(n) => out.stmt_children(n),
            NodeRef::SwitchEntry(n) => {
                out.expr_opt(n.label.as_ref());
                out.stmts(&n.statements);
            }
            NodeRef::CatchClause(n) => {
                out.push(NodeRef::Parameter(&n.parameter));
                out.push(NodeRef::Block(&n.body));
            }
            NodeRef::ArrayCreationLevel(n) => {
                out.annotations(&n.annotations);
                out.expr_opt(n.dimension.as_ref());
            }
            NodeRef::ArrayInitializer(n) => out.exprs(&n.values),
            NodeRef::VariableDeclarations(n) => {
                out.annotations(&n.annotations);
                for v in &n.variables {
                    out.push(NodeRef::VariableDeclarator(v));
                }
            }
            NodeRef::Expr(n) => out.expr_children(n),
            NodeRef::Name(n) => {
                if let Some(q) = n.qualifier.as_deref() {
                    out.push(NodeRef::Name(q));
                }
            }
            NodeRef::SimpleName(_) | NodeRef::Comment(_) => {}
        }
        out.0
    }
}

struct ChildList<'a>(Vec<NodeRef<'a>>);

impl<'a> ChildList<'a> {
    fn push(&mut self, node: NodeRef<'a>) {
        self.0.push(node);
    }

    fn annotations(&mut self, annotations: &'a [Annotation]) {
        self.0.extend(annotations.iter().map(NodeRef::Annotation));
    }

    fn class_types(&mut self, types: &'a [ClassOrInterfaceType]) {
        self.0.extend(types.iter().map(NodeRef::ClassType));
    }

    fn members(&mut self, members: &'a [BodyDeclaration]) {
        self.0.extend(members.iter().map(NodeRef::from_member));
    }

    fn ty(&mut self, ty: &'a Type) {
        self.push(NodeRef::from_type(ty));
    }

    fn types(&mut self, types: &'a [Type]) {
        self.0.extend(types.iter().map(NodeRef::from_type));
    }

    fn type_args(&mut self, args: Option<&'a [Type]>) {
        if let Some(args) = args {
            self.types(args);
        }
    }

    fn expr(&mut self, expr: &'a Expression) {
        self.push(NodeRef::from_expr(expr));
    }

    fn expr_opt(&mut self, expr: Option<&'a Expression>) {
        if let Some(e) = expr {
            self.expr(e);
        }
    }

    fn exprs(&mut self, exprs: &'a [Expression]) {
        self.0.extend(exprs.iter().map(NodeRef::from_expr));
    }

    fn stmt(&mut self, stmt: &'a Statement) {
        self.push(NodeRef::from_stmt(stmt));
    }

    fn stmts(&mut self, stmts: &'a [Statement]) {
        self.0.extend(stmts.iter().map(NodeRef::from_stmt));
    }

    fn parameters(&mut self, params: &'a [Parameter]) {
        self.0.extend(params.iter().map(NodeRef::Parameter));
    }

    fn type_parameters(&mut self, params: &'a [TypeParameter]) {
        self.0.extend(params.iter().map(NodeRef::TypeParameter));
    }

    fn member(&mut self, member: &'a BodyDeclaration) {
        match member {
            BodyDeclaration::Field(n) => {
                self.annotations(&n.annotations);
                self.0.extend(n.variables.iter().map(NodeRef::VariableDeclarator));
            }
            BodyDeclaration::Method(n) => {
                self.annotations(&n.annotations);
                self.type_parameters(&n.type_parameters);
                self.ty(&n.ty);
                self.push(NodeRef::SimpleName(&n.name));
                self.parameters(&n.parameters);
                self.types(&n.thrown);
                if let Some(body) = &n.body {
                    self.push(NodeRef::Block(body));
                }
            }
            BodyDeclaration::Constructor(n) => {
                self.annotations(&n.annotations);
                self.type_parameters(&n.type_parameters);
                self.push(NodeRef::SimpleName(&n.name));
                self.parameters(&n.parameters);
                self.types(&n.thrown);
                self.push(NodeRef::Block(&n.body));
            }
            BodyDeclaration::Initializer(n) => self.push(NodeRef::Block(&n.body)),
            BodyDeclaration::AnnotationMember(n) => {
                self.annotations(&n.annotations);
                self.ty(&n.ty);
                self.push(NodeRef::SimpleName(&n.name));
                self.expr_opt(n.default_value.as_ref());
            }
            BodyDeclaration::Empty(_) => {}
            // Nested types are never wrapped in `NodeRef::Member`.
            BodyDeclaration::Class(_) | BodyDeclaration::Enum(_) | BodyDeclaration::Annotation(_) => {}
        }
    }

    fn type_children(&mut self, ty: &'a Type) {
        match ty {
            Type::ClassOrInterface(_) => {}
            Type::Primitive(n) => self.annotations(&n.annotations),
            Type::Array(n) => {
                self.ty(&n.component);
                self.annotations(&n.annotations);
            }
            Type::Void(n) => self.annotations(&n.annotations),
            Type::Wildcard(n) => {
                self.annotations(&n.annotations);
                if let Some(t) = n.extended_type.as_deref() {
                    self.ty(t);
                }
                if let Some(t) = n.super_type.as_deref() {
                    self.ty(t);
                }
            }
            Type::Union(n) => {
                self.annotations(&n.annotations);
                self.types(&n.elements);
            }
            Type::Intersection(n) => {
                self.annotations(&n.annotations);
                self.types(&n.elements);
            }
            Type::Unknown(_) => {}
        }
    }

    fn stmt_children(&mut self, stmt: &'a Statement) {
        match stmt {
            Statement::Assert(n) => {
                self.expr(&n.check);
                self.expr_opt(n.message.as_ref());
            }
            Statement::Block(n) => self.stmts(&n.statements),
            Statement::Break(_) | Statement::Continue(_) | Statement::Empty(_) => {}
            Statement::Do(n) => {
                self.stmt(&n.body);
                self.expr(&n.condition);
            }
            Statement::ExplicitConstructorInvocation(n) => {
                self.expr_opt(n.expression.as_deref());
                self.type_args(n.type_arguments.as_deref());
                self.exprs(&n.arguments);
            }
            Statement::Expression(n) => self.expr(&n.expression),
            Statement::Foreach(n) => {
                self.push(NodeRef::VariableDeclarations(&n.variable));
                self.expr(&n.iterable);
                self.stmt(&n.body);
            }
            Statement::For(n) => {
                self.exprs(&n.initialization);
                self.expr_opt(n.compare.as_ref());
                self.exprs(&n.update);
                self.stmt(&n.body);
            }
            Statement::If(n) => {
                self.expr(&n.condition);
                self.stmt(&n.then_stmt);
                if let Some(e) = n.else_stmt.as_deref() {
                    self.stmt(e);
                }
            }
            Statement::Labeled(n) => self.stmt(&n.statement),
            Statement::LocalClass(n) => self.push(NodeRef::ClassDecl(&n.declaration)),
            Statement::Return(n) => self.expr_opt(n.expression.as_ref()),
            Statement::Switch(n) => {
                self.expr(&n.selector);
                self.0.extend(n.entries.iter().map(NodeRef::SwitchEntry));
            }
            Statement::Synchronized(n) => {
                self.expr(&n.expression);
                self.push(NodeRef::Block(&n.body));
            }
            Statement::Throw(n) => self.expr(&n.expression),
            Statement::Try(n) => {
                self.0.extend(n.resources.iter().map(NodeRef::VariableDeclarations));
                self.push(NodeRef::Block(&n.try_block));
                self.0.extend(n.catch_clauses.iter().map(NodeRef::CatchClause));
                if let Some(f) = &n.finally_block {
                    self.push(NodeRef::Block(f));
                }
            }
            Statement::While(n) => {
                self.expr(&n.condition);
                self.stmt(&n.body);
            }
        }
    }

    fn expr_children(&mut self, expr: &'a Expression) {
        match expr {
            Expression::ArrayAccess(n) => {
                self.expr(&n.name);
                self.expr(&n.index);
            }
            Expression::ArrayCreation(n) => {
                self.ty(&n.element_type);
                self.0.extend(n.levels.iter().map(NodeRef::ArrayCreationLevel));
                if let Some(init) = &n.initializer {
                    self.push(NodeRef::ArrayInitializer(init));
                }
            }
            Expression::ArrayInitializer(n) => self.exprs(&n.values),
            Expression::Assign(n) => {
                self.expr(&n.target);
                self.expr(&n.value);
            }
            Expression::Binary(n) => {
                self.expr(&n.left);
                self.expr(&n.right);
            }
            Expression::Cast(n) => {
                self.ty(&n.ty);
                self.expr(&n.expression);
            }
            Expression::ClassLiteral(n) => self.ty(&n.ty),
            Expression::Conditional(n) => {
                self.expr(&n.condition);
                self.expr(&n.then_expr);
                self.expr(&n.else_expr);
            }
            Expression::Enclosed(n) => self.expr_opt(n.inner.as_deref()),
            Expression::FieldAccess(n) => {
                self.expr_opt(n.scope.as_deref());
                self.push(NodeRef::SimpleName(&n.field));
            }
            Expression::InstanceOf(n) => {
                self.expr(&n.expression);
                self.ty(&n.ty);
            }
            Expression::CharLiteral(_)
            | Expression::DoubleLiteral(_)
            | Expression::IntegerLiteral(_)
            | Expression::LongLiteral(_)
            | Expression::StringLiteral(_)
            | Expression::BooleanLiteral(_)
            | Expression::NullLiteral(_) => {}
            Expression::MethodCall(n) => {
                self.expr_opt(n.scope.as_deref());
                self.type_args(n.type_arguments.as_deref());
                self.push(NodeRef::SimpleName(&n.name));
                self.exprs(&n.arguments);
            }
            Expression::Name(n) => self.push(NodeRef::SimpleName(&n.name)),
            Expression::ObjectCreation(n) => {
                self.expr_opt(n.scope.as_deref());
                self.type_args(n.type_arguments.as_deref());
                self.push(NodeRef::ClassType(&n.ty));
                self.exprs(&n.arguments);
                if let Some(body) = &n.anonymous_class_body {
                    self.members(body);
                }
            }
            Expression::This(n) => self.expr_opt(n.class_expr.as_deref()),
            Expression::Super(n) => self.expr_opt(n.class_expr.as_deref()),
            Expression::Unary(n) => self.expr(&n.expression),
            Expression::Lambda(n) => {
                self.parameters(&n.parameters);
                self.stmt(&n.body);
            }
            Expression::MethodReference(n) => {
                self.expr(&n.scope);
                self.type_args(n.type_arguments.as_deref());
            }
            Expression::TypeExpr(n) => self.ty(&n.ty),
            Expression::VariableDeclaration(n) => {
                self.annotations(&n.annotations);
                self.0.extend(n.variables.iter().map(NodeRef::VariableDeclarator));
            }
            Expression::Annotation(_) => {}
        }
    }
}

/// Visit `root` and every node below it in pre-order, yielding each node
/// together with its parent.
pub fn walk<'a>(root: NodeRef<'a>, f: &mut impl FnMut(NodeRef<'a>, Option<NodeRef<'a>>)) {
    fn go<'a>(
        node: NodeRef<'a>,
        parent: Option<NodeRef<'a>>,
        f: &mut impl FnMut(NodeRef<'a>, Option<NodeRef<'a>>),
    ) {
        f(node, parent);
        for child in node.children() {
            go(child, Some(node), f);
        }
    }
    go(root, None, f);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::*;
    use crate::types::Modifiers;

    #[test]
    fn test_canonical_block_identity() {
        let body = block(vec![expr_stmt(name_expr("x"))]);
        let stmt = Statement::Block(body);
        let Statement::Block(inner) = &stmt else {
            unreachable!()
        };
        assert!(NodeRef::from_stmt(&stmt).same(&NodeRef::Block(inner)));
        assert_eq!(NodeRef::from_stmt(&stmt).kind_name(), "BlockStmt");
    }

    #[test]
    fn test_distinct_nodes_have_distinct_keys() {
        let a = simple_name("a");
        let b = simple_name("a");
        assert!(!NodeRef::SimpleName(&a).same(&NodeRef::SimpleName(&b)));
        assert!(NodeRef::SimpleName(&a).same(&NodeRef::SimpleName(&a)));
    }

    #[test]
    fn test_method_children() {
        let m = method(
            Modifiers::PUBLIC,
            void_type(),
            "run",
            vec![parameter(primitive(crate::types::Primitive::Int), "n")],
            Some(block(vec![])),
        );
        let kinds: Vec<_> = NodeRef::from_member(&m)
            .children()
            .iter()
            .map(|c| c.kind_name())
            .collect();
        assert_eq!(kinds, vec!["VoidType", "SimpleName", "Parameter", "BlockStmt"]);
    }

    #[test]
    fn test_walk_reaches_every_node_once() {
        let cu = compilation_unit(
            Some("demo"),
            vec![],
            vec![TypeDeclaration::Class(class(
                Modifiers::PUBLIC,
                "A",
                vec![field(Modifiers::PRIVATE, primitive(crate::types::Primitive::Int), &["x"])],
            ))],
        );
        let mut count = 0;
        let mut roots = 0;
        walk(NodeRef::CompilationUnit(&cu), &mut |_, parent| {
            count += 1;
            if parent.is_none() {
                roots += 1;
            }
        });
        // unit, package, name, class, simple name, field, declarator, type, simple name
        assert_eq!(count, 9);
        assert_eq!(roots, 1);
    }
}
