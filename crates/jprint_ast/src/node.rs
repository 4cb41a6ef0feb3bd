//! AST node definitions for Java-like compilation units.
//!
//! The tree is owned: children live in `Box` and `Vec` slots of their parent,
//! so a node has exactly one parent by construction. Every node carries a
//! [`NodeData`] with its source range, an optional attached comment and any
//! orphan comments that sit inside it without being attached to a child.
//!
//! All node types deserialize from JSON. Category enums use an internal
//! `kind` tag, e.g. `{"kind": "Return", "expression": null}`.

use crate::types::*;
use jprint_core::TextRange;
use serde::{Deserialize, Serialize};

// ============================================================================
// Core Node Wrapper
// ============================================================================

/// Common data shared by all AST nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    /// Source position range.
    #[serde(default)]
    pub range: TextRange,
    /// The comment attached to this node, printed before it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
    /// Comments inside this node that are attached to none of its children.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub orphan_comments: Vec<Comment>,
}

impl NodeData {
    pub fn new(pos: u32, end: u32) -> Self {
        Self {
            range: TextRange::new(pos, end),
            ..Self::default()
        }
    }
}

/// A source comment. Comments are leaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub kind: CommentKind,
    /// Text between the delimiters.
    pub content: String,
    #[serde(default)]
    pub range: TextRange,
}

// ============================================================================
// Names
// ============================================================================

/// An unqualified identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleName {
    #[serde(default)]
    pub data: NodeData,
    pub identifier: String,
}

/// A possibly qualified name such as `java.util.List`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Name {
    #[serde(default)]
    pub data: NodeData,
    pub qualifier: Option<Box<Name>>,
    pub identifier: String,
}

// ============================================================================
// Compilation Unit
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompilationUnit {
    #[serde(default)]
    pub data: NodeData,
    pub package: Option<PackageDeclaration>,
    #[serde(default)]
    pub imports: Vec<ImportDeclaration>,
    #[serde(default)]
    pub types: Vec<TypeDeclaration>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageDeclaration {
    #[serde(default)]
    pub data: NodeData,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    pub name: Name,
}

/// `import [static] name[.*];`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportDeclaration {
    #[serde(default)]
    pub data: NodeData,
    pub name: Name,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_asterisk: bool,
}

// ============================================================================
// Type Declarations
// ============================================================================

/// A top-level type declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum TypeDeclaration {
    Class(ClassOrInterfaceDeclaration),
    Enum(EnumDeclaration),
    Annotation(AnnotationDeclaration),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassOrInterfaceDeclaration {
    #[serde(default)]
    pub data: NodeData,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub is_interface: bool,
    pub name: SimpleName,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    #[serde(default)]
    pub extends: Vec<ClassOrInterfaceType>,
    #[serde(default)]
    pub implements: Vec<ClassOrInterfaceType>,
    #[serde(default)]
    pub members: Vec<BodyDeclaration>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumDeclaration {
    #[serde(default)]
    pub data: NodeData,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    pub name: SimpleName,
    #[serde(default)]
    pub implements: Vec<ClassOrInterfaceType>,
    #[serde(default)]
    pub entries: Vec<EnumConstantDeclaration>,
    #[serde(default)]
    pub members: Vec<BodyDeclaration>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumConstantDeclaration {
    #[serde(default)]
    pub data: NodeData,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    pub name: SimpleName,
    #[serde(default)]
    pub arguments: Vec<Expression>,
    #[serde(default)]
    pub class_body: Vec<BodyDeclaration>,
}

/// `@interface Name { ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationDeclaration {
    #[serde(default)]
    pub data: NodeData,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    pub name: SimpleName,
    #[serde(default)]
    pub members: Vec<BodyDeclaration>,
}

// ============================================================================
// Members
// ============================================================================

/// A member of a class, interface, enum or annotation body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum BodyDeclaration {
    Field(FieldDeclaration),
    Method(MethodDeclaration),
    Constructor(ConstructorDeclaration),
    Initializer(InitializerDeclaration),
    AnnotationMember(AnnotationMemberDeclaration),
    Empty(EmptyMemberDeclaration),
    Class(ClassOrInterfaceDeclaration),
    Enum(EnumDeclaration),
    Annotation(AnnotationDeclaration),
}

/// `int a, b[] = x;`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDeclaration {
    #[serde(default)]
    pub data: NodeData,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    pub variables: Vec<VariableDeclarator>,
}

/// One declared name with its full type and optional initializer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableDeclarator {
    #[serde(default)]
    pub data: NodeData,
    pub ty: Type,
    pub name: SimpleName,
    pub initializer: Option<Expression>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDeclaration {
    #[serde(default)]
    pub data: NodeData,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    /// Interface `default` method.
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    pub ty: Type,
    pub name: SimpleName,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub thrown: Vec<Type>,
    /// `None` for abstract and interface methods.
    pub body: Option<BlockStmt>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorDeclaration {
    #[serde(default)]
    pub data: NodeData,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    pub name: SimpleName,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub thrown: Vec<Type>,
    pub body: BlockStmt,
}

/// `static { ... }` or `{ ... }` in a class body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializerDeclaration {
    #[serde(default)]
    pub data: NodeData,
    #[serde(default)]
    pub is_static: bool,
    pub body: BlockStmt,
}

/// `Type name() [default value];` inside `@interface`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationMemberDeclaration {
    #[serde(default)]
    pub data: NodeData,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    pub ty: Type,
    pub name: SimpleName,
    pub default_value: Option<Expression>,
}

/// A stray `;` in a class body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmptyMemberDeclaration {
    #[serde(default)]
    pub data: NodeData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    #[serde(default)]
    pub data: NodeData,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    pub ty: Type,
    #[serde(default)]
    pub is_var_args: bool,
    pub name: SimpleName,
}

/// `<T extends A & B>`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeParameter {
    #[serde(default)]
    pub data: NodeData,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    pub name: SimpleName,
    #[serde(default)]
    pub type_bound: Vec<ClassOrInterfaceType>,
}

// ============================================================================
// Annotations
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(default)]
    pub data: NodeData,
    pub name: Name,
    #[serde(default)]
    pub arguments: AnnotationArguments,
}

/// The three annotation forms.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub enum AnnotationArguments {
    /// `@Name`
    #[default]
    Marker,
    /// `@Name(value)`
    Single(Box<Expression>),
    /// `@Name(a = x, b = y)`
    Pairs(Vec<MemberValuePair>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberValuePair {
    #[serde(default)]
    pub data: NodeData,
    pub name: SimpleName,
    pub value: Expression,
}

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Type {
    ClassOrInterface(ClassOrInterfaceType),
    Primitive(PrimitiveType),
    Array(ArrayType),
    Void(VoidType),
    Wildcard(WildcardType),
    Union(UnionType),
    Intersection(IntersectionType),
    /// The absent type of an implicitly typed lambda parameter.
    Unknown(UnknownType),
}

/// `outer.Name<Args>`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassOrInterfaceType {
    #[serde(default)]
    pub data: NodeData,
    pub scope: Option<Box<ClassOrInterfaceType>>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    pub name: SimpleName,
    /// `Some(vec![])` is the diamond `<>`.
    pub type_arguments: Option<Vec<Type>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimitiveType {
    #[serde(default)]
    pub data: NodeData,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    pub primitive: Primitive,
}

/// One array layer. `int[][]` is an array of `int[]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrayType {
    #[serde(default)]
    pub data: NodeData,
    pub component: Box<Type>,
    /// Annotations on this layer's brackets.
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoidType {
    #[serde(default)]
    pub data: NodeData,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

/// `?`, `? extends T` or `? super T`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WildcardType {
    #[serde(default)]
    pub data: NodeData,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    pub extended_type: Option<Box<Type>>,
    pub super_type: Option<Box<Type>>,
}

/// `A | B` in a multi-catch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnionType {
    #[serde(default)]
    pub data: NodeData,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    pub elements: Vec<Type>,
}

/// `A & B` in a cast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntersectionType {
    #[serde(default)]
    pub data: NodeData,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    pub elements: Vec<Type>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnknownType {
    #[serde(default)]
    pub data: NodeData,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Statement {
    Assert(AssertStmt),
    Block(BlockStmt),
    Break(BreakStmt),
    Continue(ContinueStmt),
    Do(DoStmt),
    Empty(EmptyStmt),
    ExplicitConstructorInvocation(ExplicitConstructorInvocationStmt),
    Expression(ExpressionStmt),
    Foreach(ForeachStmt),
    For(ForStmt),
    If(IfStmt),
    Labeled(LabeledStmt),
    LocalClass(LocalClassDeclarationStmt),
    Return(ReturnStmt),
    Switch(SwitchStmt),
    Synchronized(SynchronizedStmt),
    Throw(ThrowStmt),
    Try(TryStmt),
    While(WhileStmt),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssertStmt {
    #[serde(default)]
    pub data: NodeData,
    pub check: Expression,
    pub message: Option<Expression>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlockStmt {
    #[serde(default)]
    pub data: NodeData,
    #[serde(default)]
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakStmt {
    #[serde(default)]
    pub data: NodeData,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContinueStmt {
    #[serde(default)]
    pub data: NodeData,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoStmt {
    #[serde(default)]
    pub data: NodeData,
    pub body: Box<Statement>,
    pub condition: Expression,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmptyStmt {
    #[serde(default)]
    pub data: NodeData,
}

/// `this(...)` or `super(...)` as the first statement of a constructor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplicitConstructorInvocationStmt {
    #[serde(default)]
    pub data: NodeData,
    #[serde(default)]
    pub is_this: bool,
    pub expression: Option<Box<Expression>>,
    pub type_arguments: Option<Vec<Type>>,
    #[serde(default)]
    pub arguments: Vec<Expression>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpressionStmt {
    #[serde(default)]
    pub data: NodeData,
    pub expression: Expression,
}

/// `for (T x : xs) body`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForeachStmt {
    #[serde(default)]
    pub data: NodeData,
    pub variable: VariableDeclarationExpr,
    pub iterable: Expression,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForStmt {
    #[serde(default)]
    pub data: NodeData,
    #[serde(default)]
    pub initialization: Vec<Expression>,
    pub compare: Option<Expression>,
    #[serde(default)]
    pub update: Vec<Expression>,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IfStmt {
    #[serde(default)]
    pub data: NodeData,
    pub condition: Expression,
    pub then_stmt: Box<Statement>,
    pub else_stmt: Option<Box<Statement>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledStmt {
    #[serde(default)]
    pub data: NodeData,
    pub label: String,
    pub statement: Box<Statement>,
}

/// A class declared inside a block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalClassDeclarationStmt {
    #[serde(default)]
    pub data: NodeData,
    pub declaration: ClassOrInterfaceDeclaration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnStmt {
    #[serde(default)]
    pub data: NodeData,
    pub expression: Option<Expression>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchStmt {
    #[serde(default)]
    pub data: NodeData,
    pub selector: Expression,
    #[serde(default)]
    pub entries: Vec<SwitchEntry>,
}

/// `case label:` or `default:` with the statements that follow it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchEntry {
    #[serde(default)]
    pub data: NodeData,
    /// `None` for `default`.
    pub label: Option<Expression>,
    #[serde(default)]
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynchronizedStmt {
    #[serde(default)]
    pub data: NodeData,
    pub expression: Expression,
    pub body: BlockStmt,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThrowStmt {
    #[serde(default)]
    pub data: NodeData,
    pub expression: Expression,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TryStmt {
    #[serde(default)]
    pub data: NodeData,
    /// try-with-resources declarations, in order.
    #[serde(default)]
    pub resources: Vec<VariableDeclarationExpr>,
    pub try_block: BlockStmt,
    #[serde(default)]
    pub catch_clauses: Vec<CatchClause>,
    pub finally_block: Option<BlockStmt>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatchClause {
    #[serde(default)]
    pub data: NodeData,
    pub parameter: Parameter,
    pub body: BlockStmt,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhileStmt {
    #[serde(default)]
    pub data: NodeData,
    pub condition: Expression,
    pub body: Box<Statement>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Expression {
    ArrayAccess(ArrayAccessExpr),
    ArrayCreation(ArrayCreationExpr),
    ArrayInitializer(ArrayInitializerExpr),
    Assign(AssignExpr),
    Binary(BinaryExpr),
    Cast(CastExpr),
    ClassLiteral(ClassExpr),
    Conditional(ConditionalExpr),
    Enclosed(EnclosedExpr),
    FieldAccess(FieldAccessExpr),
    InstanceOf(InstanceOfExpr),
    CharLiteral(LiteralExpr),
    DoubleLiteral(LiteralExpr),
    IntegerLiteral(LiteralExpr),
    LongLiteral(LiteralExpr),
    StringLiteral(LiteralExpr),
    BooleanLiteral(BooleanLiteralExpr),
    NullLiteral(NullLiteralExpr),
    MethodCall(MethodCallExpr),
    Name(NameExpr),
    ObjectCreation(ObjectCreationExpr),
    This(ThisExpr),
    Super(SuperExpr),
    Unary(UnaryExpr),
    Lambda(LambdaExpr),
    MethodReference(MethodReferenceExpr),
    TypeExpr(TypeExpr),
    VariableDeclaration(VariableDeclarationExpr),
    Annotation(Annotation),
}

/// `name[index]`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrayAccessExpr {
    #[serde(default)]
    pub data: NodeData,
    pub name: Box<Expression>,
    pub index: Box<Expression>,
}

/// `new T[n][]` or `new T[] {..}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayCreationExpr {
    #[serde(default)]
    pub data: NodeData,
    pub element_type: Type,
    pub levels: Vec<ArrayCreationLevel>,
    pub initializer: Option<ArrayInitializerExpr>,
}

/// One `[dimension]` of an array creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrayCreationLevel {
    #[serde(default)]
    pub data: NodeData,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    pub dimension: Option<Expression>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrayInitializerExpr {
    #[serde(default)]
    pub data: NodeData,
    #[serde(default)]
    pub values: Vec<Expression>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignExpr {
    #[serde(default)]
    pub data: NodeData,
    pub target: Box<Expression>,
    pub operator: AssignOp,
    pub value: Box<Expression>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinaryExpr {
    #[serde(default)]
    pub data: NodeData,
    pub left: Box<Expression>,
    pub operator: BinaryOp,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastExpr {
    #[serde(default)]
    pub data: NodeData,
    pub ty: Type,
    pub expression: Box<Expression>,
}

/// `T.class`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassExpr {
    #[serde(default)]
    pub data: NodeData,
    pub ty: Type,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalExpr {
    #[serde(default)]
    pub data: NodeData,
    pub condition: Box<Expression>,
    pub then_expr: Box<Expression>,
    pub else_expr: Box<Expression>,
}

/// A parenthesized expression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnclosedExpr {
    #[serde(default)]
    pub data: NodeData,
    pub inner: Option<Box<Expression>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldAccessExpr {
    #[serde(default)]
    pub data: NodeData,
    pub scope: Option<Box<Expression>>,
    pub field: SimpleName,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceOfExpr {
    #[serde(default)]
    pub data: NodeData,
    pub expression: Box<Expression>,
    pub ty: Type,
}

/// A literal printed verbatim: char, double, integer, long or string.
///
/// `value` is the source text between any delimiters, so a string literal
/// holds its content without the surrounding quotes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiteralExpr {
    #[serde(default)]
    pub data: NodeData,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BooleanLiteralExpr {
    #[serde(default)]
    pub data: NodeData,
    pub value: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NullLiteralExpr {
    #[serde(default)]
    pub data: NodeData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodCallExpr {
    #[serde(default)]
    pub data: NodeData,
    pub scope: Option<Box<Expression>>,
    pub type_arguments: Option<Vec<Type>>,
    pub name: SimpleName,
    #[serde(default)]
    pub arguments: Vec<Expression>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameExpr {
    #[serde(default)]
    pub data: NodeData,
    pub name: SimpleName,
}

/// `[scope.]new <T>Type(args) [{ body }]`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectCreationExpr {
    #[serde(default)]
    pub data: NodeData,
    pub scope: Option<Box<Expression>>,
    pub type_arguments: Option<Vec<Type>>,
    pub ty: ClassOrInterfaceType,
    #[serde(default)]
    pub arguments: Vec<Expression>,
    pub anonymous_class_body: Option<Vec<BodyDeclaration>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThisExpr {
    #[serde(default)]
    pub data: NodeData,
    pub class_expr: Option<Box<Expression>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuperExpr {
    #[serde(default)]
    pub data: NodeData,
    pub class_expr: Option<Box<Expression>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnaryExpr {
    #[serde(default)]
    pub data: NodeData,
    pub operator: UnaryOp,
    pub expression: Box<Expression>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LambdaExpr {
    #[serde(default)]
    pub data: NodeData,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Whether the parameter list is written in parentheses.
    #[serde(default)]
    pub enclosing_parameters: bool,
    pub body: Box<Statement>,
}

/// `scope::<T>identifier`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodReferenceExpr {
    #[serde(default)]
    pub data: NodeData,
    pub scope: Box<Expression>,
    pub type_arguments: Option<Vec<Type>>,
    pub identifier: String,
}

/// A type in expression position, the scope of `Type::method`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeExpr {
    #[serde(default)]
    pub data: NodeData,
    pub ty: Type,
}

/// A local variable declaration in expression position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableDeclarationExpr {
    #[serde(default)]
    pub data: NodeData,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    pub variables: Vec<VariableDeclarator>,
}
