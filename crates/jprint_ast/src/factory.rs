//! Convenience constructors for building trees in code.
//!
//! Every builder produces a node with a default (empty) range and no
//! comments. Use [`NodeBuilder`] to position a node or attach comments:
//!
//! ```
//! use jprint_ast::factory::*;
//!
//! let stmt = expr_stmt(call(None, "run", vec![]))
//!     .at(10, 16)
//!     .with_comment(line_comment(" start").at(0, 9));
//! ```

use crate::generated::HasNodeData;
use crate::node::*;
use crate::types::*;
use jprint_core::TextRange;

// ============================================================================
// Positioning and comments
// ============================================================================

/// Chainable setters for the common node data.
pub trait NodeBuilder: HasNodeData + Sized {
    fn at(mut self, pos: u32, end: u32) -> Self {
        self.data_mut().range = TextRange::new(pos, end);
        self
    }

    fn with_comment(mut self, comment: Comment) -> Self {
        self.data_mut().comment = Some(comment);
        self
    }

    fn with_orphans(mut self, comments: Vec<Comment>) -> Self {
        self.data_mut().orphan_comments.extend(comments);
        self
    }
}

impl<T: HasNodeData> NodeBuilder for T {}

impl Comment {
    pub fn new(kind: CommentKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            range: TextRange::default(),
        }
    }

    pub fn at(mut self, pos: u32, end: u32) -> Self {
        self.range = TextRange::new(pos, end);
        self
    }
}

pub fn line_comment(content: &str) -> Comment {
    Comment::new(CommentKind::Line, content)
}

pub fn block_comment(content: &str) -> Comment {
    Comment::new(CommentKind::Block, content)
}

pub fn doc_comment(content: &str) -> Comment {
    Comment::new(CommentKind::Doc, content)
}

// ============================================================================
// Names
// ============================================================================

pub fn simple_name(identifier: &str) -> SimpleName {
    SimpleName {
        data: NodeData::default(),
        identifier: identifier.to_string(),
    }
}

/// Builds a qualified name from its dotted form.
pub fn name(dotted: &str) -> Name {
    let mut result: Option<Name> = None;
    for part in dotted.split('.') {
        result = Some(Name {
            data: NodeData::default(),
            qualifier: result.map(Box::new),
            identifier: part.to_string(),
        });
    }
    result.unwrap_or_else(|| Name {
        data: NodeData::default(),
        qualifier: None,
        identifier: String::new(),
    })
}

// ============================================================================
// Compilation unit
// ============================================================================

pub fn compilation_unit(
    package: Option<&str>,
    imports: Vec<ImportDeclaration>,
    types: Vec<TypeDeclaration>,
) -> CompilationUnit {
    CompilationUnit {
        data: NodeData::default(),
        package: package.map(package_declaration),
        imports,
        types,
    }
}

pub fn package_declaration(dotted: &str) -> PackageDeclaration {
    PackageDeclaration {
        data: NodeData::default(),
        annotations: Vec::new(),
        name: name(dotted),
    }
}

pub fn import(dotted: &str, is_static: bool, is_asterisk: bool) -> ImportDeclaration {
    ImportDeclaration {
        data: NodeData::default(),
        name: name(dotted),
        is_static,
        is_asterisk,
    }
}

// ============================================================================
// Declarations
// ============================================================================

pub fn class(modifiers: Modifiers, name: &str, members: Vec<BodyDeclaration>) -> ClassOrInterfaceDeclaration {
    ClassOrInterfaceDeclaration {
        data: NodeData::default(),
        modifiers,
        annotations: Vec::new(),
        is_interface: false,
        name: simple_name(name),
        type_parameters: Vec::new(),
        extends: Vec::new(),
        implements: Vec::new(),
        members,
    }
}

pub fn interface(modifiers: Modifiers, name: &str, members: Vec<BodyDeclaration>) -> ClassOrInterfaceDeclaration {
    ClassOrInterfaceDeclaration {
        is_interface: true,
        ..class(modifiers, name, members)
    }
}

pub fn enum_declaration(
    modifiers: Modifiers,
    name: &str,
    entries: Vec<EnumConstantDeclaration>,
    members: Vec<BodyDeclaration>,
) -> EnumDeclaration {
    EnumDeclaration {
        data: NodeData::default(),
        modifiers,
        annotations: Vec::new(),
        name: simple_name(name),
        implements: Vec::new(),
        entries,
        members,
    }
}

pub fn enum_constant(name: &str, arguments: Vec<Expression>) -> EnumConstantDeclaration {
    EnumConstantDeclaration {
        data: NodeData::default(),
        annotations: Vec::new(),
        name: simple_name(name),
        arguments,
        class_body: Vec::new(),
    }
}

pub fn annotation_declaration(modifiers: Modifiers, name: &str, members: Vec<BodyDeclaration>) -> AnnotationDeclaration {
    AnnotationDeclaration {
        data: NodeData::default(),
        modifiers,
        annotations: Vec::new(),
        name: simple_name(name),
        members,
    }
}

pub fn annotation_member(ty: Type, name: &str, default_value: Option<Expression>) -> BodyDeclaration {
    BodyDeclaration::AnnotationMember(AnnotationMemberDeclaration {
        data: NodeData::default(),
        modifiers: Modifiers::empty(),
        annotations: Vec::new(),
        ty,
        name: simple_name(name),
        default_value,
    })
}

pub fn variable(ty: Type, name: &str, initializer: Option<Expression>) -> VariableDeclarator {
    VariableDeclarator {
        data: NodeData::default(),
        ty,
        name: simple_name(name),
        initializer,
    }
}

/// A field declaring each of `names` with the same type and no initializer.
pub fn field(modifiers: Modifiers, ty: Type, names: &[&str]) -> BodyDeclaration {
    field_with(
        modifiers,
        names.iter().map(|n| variable(ty.clone(), n, None)).collect(),
    )
}

pub fn field_with(modifiers: Modifiers, variables: Vec<VariableDeclarator>) -> BodyDeclaration {
    BodyDeclaration::Field(FieldDeclaration {
        data: NodeData::default(),
        modifiers,
        annotations: Vec::new(),
        variables,
    })
}

pub fn method(
    modifiers: Modifiers,
    ty: Type,
    name: &str,
    parameters: Vec<Parameter>,
    body: Option<BlockStmt>,
) -> BodyDeclaration {
    BodyDeclaration::Method(MethodDeclaration {
        data: NodeData::default(),
        modifiers,
        annotations: Vec::new(),
        is_default: false,
        type_parameters: Vec::new(),
        ty,
        name: simple_name(name),
        parameters,
        thrown: Vec::new(),
        body,
    })
}

pub fn constructor(modifiers: Modifiers, name: &str, parameters: Vec<Parameter>, body: BlockStmt) -> BodyDeclaration {
    BodyDeclaration::Constructor(ConstructorDeclaration {
        data: NodeData::default(),
        modifiers,
        annotations: Vec::new(),
        type_parameters: Vec::new(),
        name: simple_name(name),
        parameters,
        thrown: Vec::new(),
        body,
    })
}

pub fn initializer(is_static: bool, body: BlockStmt) -> BodyDeclaration {
    BodyDeclaration::Initializer(InitializerDeclaration {
        data: NodeData::default(),
        is_static,
        body,
    })
}

pub fn parameter(ty: Type, name: &str) -> Parameter {
    Parameter {
        data: NodeData::default(),
        modifiers: Modifiers::empty(),
        annotations: Vec::new(),
        ty,
        is_var_args: false,
        name: simple_name(name),
    }
}

pub fn type_parameter(name: &str, type_bound: Vec<ClassOrInterfaceType>) -> TypeParameter {
    TypeParameter {
        data: NodeData::default(),
        annotations: Vec::new(),
        name: simple_name(name),
        type_bound,
    }
}

// ============================================================================
// Annotations
// ============================================================================

pub fn marker_annotation(dotted: &str) -> Annotation {
    Annotation {
        data: NodeData::default(),
        name: name(dotted),
        arguments: AnnotationArguments::Marker,
    }
}

pub fn single_member_annotation(dotted: &str, value: Expression) -> Annotation {
    Annotation {
        data: NodeData::default(),
        name: name(dotted),
        arguments: AnnotationArguments::Single(Box::new(value)),
    }
}

pub fn normal_annotation(dotted: &str, pairs: Vec<(&str, Expression)>) -> Annotation {
    let pairs = pairs
        .into_iter()
        .map(|(n, value)| MemberValuePair {
            data: NodeData::default(),
            name: simple_name(n),
            value,
        })
        .collect();
    Annotation {
        data: NodeData::default(),
        name: name(dotted),
        arguments: AnnotationArguments::Pairs(pairs),
    }
}

// ============================================================================
// Types
// ============================================================================

pub fn class_type(name: &str) -> ClassOrInterfaceType {
    ClassOrInterfaceType {
        data: NodeData::default(),
        scope: None,
        annotations: Vec::new(),
        name: simple_name(name),
        type_arguments: None,
    }
}

pub fn generic_class_type(name: &str, type_arguments: Vec<Type>) -> ClassOrInterfaceType {
    ClassOrInterfaceType {
        type_arguments: Some(type_arguments),
        ..class_type(name)
    }
}

pub fn diamond_class_type(name: &str) -> ClassOrInterfaceType {
    generic_class_type(name, Vec::new())
}

/// `Name` as a `Type`.
pub fn type_ref(name: &str) -> Type {
    Type::ClassOrInterface(class_type(name))
}

/// `Name<Args>` as a `Type`.
pub fn generic_type(name: &str, type_arguments: Vec<Type>) -> Type {
    Type::ClassOrInterface(generic_class_type(name, type_arguments))
}

pub fn primitive(primitive: Primitive) -> Type {
    Type::Primitive(PrimitiveType {
        data: NodeData::default(),
        annotations: Vec::new(),
        primitive,
    })
}

/// Wraps `component` in one array layer.
pub fn array_of(component: Type) -> Type {
    Type::Array(ArrayType {
        data: NodeData::default(),
        component: Box::new(component),
        annotations: Vec::new(),
    })
}

/// Wraps `element` in `levels` array layers.
pub fn array_type(element: Type, levels: usize) -> Type {
    (0..levels).fold(element, |ty, _| array_of(ty))
}

pub fn void_type() -> Type {
    Type::Void(VoidType {
        data: NodeData::default(),
        annotations: Vec::new(),
    })
}

pub fn wildcard(extended_type: Option<Type>, super_type: Option<Type>) -> Type {
    Type::Wildcard(WildcardType {
        data: NodeData::default(),
        annotations: Vec::new(),
        extended_type: extended_type.map(Box::new),
        super_type: super_type.map(Box::new),
    })
}

pub fn union_type(elements: Vec<Type>) -> Type {
    Type::Union(UnionType {
        data: NodeData::default(),
        annotations: Vec::new(),
        elements,
    })
}

pub fn intersection_type(elements: Vec<Type>) -> Type {
    Type::Intersection(IntersectionType {
        data: NodeData::default(),
        annotations: Vec::new(),
        elements,
    })
}

pub fn unknown_type() -> Type {
    Type::Unknown(UnknownType {
        data: NodeData::default(),
    })
}

// ============================================================================
// Expressions
// ============================================================================

pub fn name_expr(identifier: &str) -> Expression {
    Expression::Name(NameExpr {
        data: NodeData::default(),
        name: simple_name(identifier),
    })
}

fn literal(value: &str) -> LiteralExpr {
    LiteralExpr {
        data: NodeData::default(),
        value: value.to_string(),
    }
}

pub fn int_literal(value: &str) -> Expression {
    Expression::IntegerLiteral(literal(value))
}

pub fn long_literal(value: &str) -> Expression {
    Expression::LongLiteral(literal(value))
}

pub fn double_literal(value: &str) -> Expression {
    Expression::DoubleLiteral(literal(value))
}

/// A char literal; `value` excludes the quotes.
pub fn char_literal(value: &str) -> Expression {
    Expression::CharLiteral(literal(value))
}

/// A string literal; `value` excludes the quotes.
pub fn string_literal(value: &str) -> Expression {
    Expression::StringLiteral(literal(value))
}

pub fn bool_literal(value: bool) -> Expression {
    Expression::BooleanLiteral(BooleanLiteralExpr {
        data: NodeData::default(),
        value,
    })
}

pub fn null_literal() -> Expression {
    Expression::NullLiteral(NullLiteralExpr {
        data: NodeData::default(),
    })
}

pub fn this_expr() -> Expression {
    Expression::This(ThisExpr {
        data: NodeData::default(),
        class_expr: None,
    })
}

pub fn super_expr() -> Expression {
    Expression::Super(SuperExpr {
        data: NodeData::default(),
        class_expr: None,
    })
}

pub fn field_access(scope: Expression, field: &str) -> Expression {
    Expression::FieldAccess(FieldAccessExpr {
        data: NodeData::default(),
        scope: Some(Box::new(scope)),
        field: simple_name(field),
    })
}

pub fn call(scope: Option<Expression>, name: &str, arguments: Vec<Expression>) -> Expression {
    Expression::MethodCall(MethodCallExpr {
        data: NodeData::default(),
        scope: scope.map(Box::new),
        type_arguments: None,
        name: simple_name(name),
        arguments,
    })
}

pub fn binary(left: Expression, operator: BinaryOp, right: Expression) -> Expression {
    Expression::Binary(BinaryExpr {
        data: NodeData::default(),
        left: Box::new(left),
        operator,
        right: Box::new(right),
    })
}

pub fn assign(target: Expression, operator: AssignOp, value: Expression) -> Expression {
    Expression::Assign(AssignExpr {
        data: NodeData::default(),
        target: Box::new(target),
        operator,
        value: Box::new(value),
    })
}

pub fn unary(operator: UnaryOp, expression: Expression) -> Expression {
    Expression::Unary(UnaryExpr {
        data: NodeData::default(),
        operator,
        expression: Box::new(expression),
    })
}

pub fn cast(ty: Type, expression: Expression) -> Expression {
    Expression::Cast(CastExpr {
        data: NodeData::default(),
        ty,
        expression: Box::new(expression),
    })
}

pub fn enclosed(inner: Expression) -> Expression {
    Expression::Enclosed(EnclosedExpr {
        data: NodeData::default(),
        inner: Some(Box::new(inner)),
    })
}

pub fn conditional(condition: Expression, then_expr: Expression, else_expr: Expression) -> Expression {
    Expression::Conditional(ConditionalExpr {
        data: NodeData::default(),
        condition: Box::new(condition),
        then_expr: Box::new(then_expr),
        else_expr: Box::new(else_expr),
    })
}

pub fn instance_of(expression: Expression, ty: Type) -> Expression {
    Expression::InstanceOf(InstanceOfExpr {
        data: NodeData::default(),
        expression: Box::new(expression),
        ty,
    })
}

pub fn array_access(name: Expression, index: Expression) -> Expression {
    Expression::ArrayAccess(ArrayAccessExpr {
        data: NodeData::default(),
        name: Box::new(name),
        index: Box::new(index),
    })
}

pub fn array_initializer(values: Vec<Expression>) -> ArrayInitializerExpr {
    ArrayInitializerExpr {
        data: NodeData::default(),
        values,
    }
}

/// `new element[d0][d1]...` with one level per entry of `dimensions`.
pub fn new_array(
    element_type: Type,
    dimensions: Vec<Option<Expression>>,
    initializer: Option<ArrayInitializerExpr>,
) -> Expression {
    let levels = dimensions
        .into_iter()
        .map(|dimension| ArrayCreationLevel {
            data: NodeData::default(),
            annotations: Vec::new(),
            dimension,
        })
        .collect();
    Expression::ArrayCreation(ArrayCreationExpr {
        data: NodeData::default(),
        element_type,
        levels,
        initializer,
    })
}

pub fn new_object(ty: ClassOrInterfaceType, arguments: Vec<Expression>) -> Expression {
    Expression::ObjectCreation(ObjectCreationExpr {
        data: NodeData::default(),
        scope: None,
        type_arguments: None,
        ty,
        arguments,
        anonymous_class_body: None,
    })
}

pub fn lambda(parameters: Vec<Parameter>, enclosing_parameters: bool, body: Statement) -> Expression {
    Expression::Lambda(LambdaExpr {
        data: NodeData::default(),
        parameters,
        enclosing_parameters,
        body: Box::new(body),
    })
}

pub fn method_reference(scope: Expression, identifier: &str) -> Expression {
    Expression::MethodReference(MethodReferenceExpr {
        data: NodeData::default(),
        scope: Box::new(scope),
        type_arguments: None,
        identifier: identifier.to_string(),
    })
}

pub fn type_expr(ty: Type) -> Expression {
    Expression::TypeExpr(TypeExpr {
        data: NodeData::default(),
        ty,
    })
}

pub fn class_literal(ty: Type) -> Expression {
    Expression::ClassLiteral(ClassExpr {
        data: NodeData::default(),
        ty,
    })
}

pub fn variable_declarations(modifiers: Modifiers, variables: Vec<VariableDeclarator>) -> VariableDeclarationExpr {
    VariableDeclarationExpr {
        data: NodeData::default(),
        modifiers,
        annotations: Vec::new(),
        variables,
    }
}

/// `ty name [= initializer]` as an expression.
pub fn local_variable(ty: Type, name: &str, initializer: Option<Expression>) -> Expression {
    Expression::VariableDeclaration(variable_declarations(
        Modifiers::empty(),
        vec![variable(ty, name, initializer)],
    ))
}

// ============================================================================
// Statements
// ============================================================================

pub fn block(statements: Vec<Statement>) -> BlockStmt {
    BlockStmt {
        data: NodeData::default(),
        statements,
    }
}

pub fn block_stmt(statements: Vec<Statement>) -> Statement {
    Statement::Block(block(statements))
}

pub fn expr_stmt(expression: Expression) -> Statement {
    Statement::Expression(ExpressionStmt {
        data: NodeData::default(),
        expression,
    })
}

pub fn return_stmt(expression: Option<Expression>) -> Statement {
    Statement::Return(ReturnStmt {
        data: NodeData::default(),
        expression,
    })
}

pub fn throw_stmt(expression: Expression) -> Statement {
    Statement::Throw(ThrowStmt {
        data: NodeData::default(),
        expression,
    })
}

pub fn break_stmt(label: Option<&str>) -> Statement {
    Statement::Break(BreakStmt {
        data: NodeData::default(),
        label: label.map(str::to_string),
    })
}

pub fn continue_stmt(label: Option<&str>) -> Statement {
    Statement::Continue(ContinueStmt {
        data: NodeData::default(),
        label: label.map(str::to_string),
    })
}

pub fn empty_stmt() -> Statement {
    Statement::Empty(EmptyStmt {
        data: NodeData::default(),
    })
}

pub fn if_stmt(condition: Expression, then_stmt: Statement, else_stmt: Option<Statement>) -> Statement {
    Statement::If(IfStmt {
        data: NodeData::default(),
        condition,
        then_stmt: Box::new(then_stmt),
        else_stmt: else_stmt.map(Box::new),
    })
}

pub fn while_stmt(condition: Expression, body: Statement) -> Statement {
    Statement::While(WhileStmt {
        data: NodeData::default(),
        condition,
        body: Box::new(body),
    })
}

pub fn do_stmt(body: Statement, condition: Expression) -> Statement {
    Statement::Do(DoStmt {
        data: NodeData::default(),
        body: Box::new(body),
        condition,
    })
}

pub fn for_stmt(
    initialization: Vec<Expression>,
    compare: Option<Expression>,
    update: Vec<Expression>,
    body: Statement,
) -> Statement {
    Statement::For(ForStmt {
        data: NodeData::default(),
        initialization,
        compare,
        update,
        body: Box::new(body),
    })
}

pub fn foreach_stmt(variable: VariableDeclarationExpr, iterable: Expression, body: Statement) -> Statement {
    Statement::Foreach(ForeachStmt {
        data: NodeData::default(),
        variable,
        iterable,
        body: Box::new(body),
    })
}

pub fn labeled_stmt(label: &str, statement: Statement) -> Statement {
    Statement::Labeled(LabeledStmt {
        data: NodeData::default(),
        label: label.to_string(),
        statement: Box::new(statement),
    })
}

pub fn switch_stmt(selector: Expression, entries: Vec<SwitchEntry>) -> Statement {
    Statement::Switch(SwitchStmt {
        data: NodeData::default(),
        selector,
        entries,
    })
}

/// `case label:`, or `default:` when `label` is `None`.
pub fn switch_entry(label: Option<Expression>, statements: Vec<Statement>) -> SwitchEntry {
    SwitchEntry {
        data: NodeData::default(),
        label,
        statements,
    }
}

pub fn synchronized_stmt(expression: Expression, body: BlockStmt) -> Statement {
    Statement::Synchronized(SynchronizedStmt {
        data: NodeData::default(),
        expression,
        body,
    })
}

pub fn assert_stmt(check: Expression, message: Option<Expression>) -> Statement {
    Statement::Assert(AssertStmt {
        data: NodeData::default(),
        check,
        message,
    })
}

pub fn try_stmt(
    resources: Vec<VariableDeclarationExpr>,
    try_block: BlockStmt,
    catch_clauses: Vec<CatchClause>,
    finally_block: Option<BlockStmt>,
) -> Statement {
    Statement::Try(TryStmt {
        data: NodeData::default(),
        resources,
        try_block,
        catch_clauses,
        finally_block,
    })
}

pub fn catch_clause(parameter: Parameter, body: BlockStmt) -> CatchClause {
    CatchClause {
        data: NodeData::default(),
        parameter,
        body,
    }
}

pub fn local_class(declaration: ClassOrInterfaceDeclaration) -> Statement {
    Statement::LocalClass(LocalClassDeclarationStmt {
        data: NodeData::default(),
        declaration,
    })
}

/// `this(args);` or `super(args);`
pub fn constructor_call(is_this: bool, arguments: Vec<Expression>) -> Statement {
    Statement::ExplicitConstructorInvocation(ExplicitConstructorInvocationStmt {
        data: NodeData::default(),
        is_this,
        expression: None,
        type_arguments: None,
        arguments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_name() {
        let n = name("java.util.List");
        assert_eq!(n.identifier, "List");
        assert_eq!(n.to_qualified_string(), "java.util.List");
        assert_eq!(n.qualifier.as_ref().map(|q| q.identifier.as_str()), Some("util"));
    }

    #[test]
    fn test_array_type_levels() {
        let ty = array_type(primitive(Primitive::Int), 3);
        assert_eq!(ty.array_level(), 3);
        assert!(matches!(ty.element_type(), Type::Primitive(_)));
    }

    #[test]
    fn test_builder_sets_range_and_comments() {
        let stmt = return_stmt(None)
            .at(4, 11)
            .with_comment(line_comment(" done").at(0, 3))
            .with_orphans(vec![block_comment(" x ").at(5, 10)]);
        assert_eq!(stmt.range(), TextRange::new(4, 11));
        assert_eq!(stmt.comment().map(|c| c.kind), Some(CommentKind::Line));
        assert_eq!(stmt.orphan_comments().len(), 1);
    }
}
