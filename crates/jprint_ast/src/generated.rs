//! Accessors shared by every AST node.
//!
//! Struct nodes get [`HasNodeData`] through a macro; category enums forward
//! to their variants.

use crate::node::*;
use jprint_core::TextRange;

/// Access to the common [`NodeData`] of a node.
pub trait HasNodeData {
    fn data(&self) -> &NodeData;
    fn data_mut(&mut self) -> &mut NodeData;

    fn range(&self) -> TextRange {
        self.data().range
    }

    fn comment(&self) -> Option<&Comment> {
        self.data().comment.as_ref()
    }

    fn orphan_comments(&self) -> &[Comment] {
        &self.data().orphan_comments
    }
}

macro_rules! impl_has_node_data {
    ($($ty:ty),* $(,)?) => {
        $(
            impl HasNodeData for $ty {
                #[inline]
                fn data(&self) -> &NodeData {
                    &self.data
                }

                #[inline]
                fn data_mut(&mut self) -> &mut NodeData {
                    &mut self.data
                }
            }
        )*
    };
}

impl_has_node_data!(
    SimpleName,
    Name,
    CompilationUnit,
    PackageDeclaration,
    ImportDeclaration,
    ClassOrInterfaceDeclaration,
    EnumDeclaration,
    EnumConstantDeclaration,
    AnnotationDeclaration,
    FieldDeclaration,
    VariableDeclarator,
    MethodDeclaration,
    ConstructorDeclaration,
    InitializerDeclaration,
    AnnotationMemberDeclaration,
    EmptyMemberDeclaration,
    Parameter,
    TypeParameter,
    Annotation,
    MemberValuePair,
    ClassOrInterfaceType,
    PrimitiveType,
    ArrayType,
    VoidType,
    WildcardType,
    UnionType,
    IntersectionType,
    UnknownType,
    AssertStmt,
    BlockStmt,
    BreakStmt,
    ContinueStmt,
    DoStmt,
    EmptyStmt,
    ExplicitConstructorInvocationStmt,
    ExpressionStmt,
    ForeachStmt,
    ForStmt,
    IfStmt,
    LabeledStmt,
    LocalClassDeclarationStmt,
    ReturnStmt,
    SwitchStmt,
    SwitchEntry,
    SynchronizedStmt,
    ThrowStmt,
    TryStmt,
    CatchClause,
    WhileStmt,
    ArrayAccessExpr,
    ArrayCreationExpr,
    ArrayCreationLevel,
    ArrayInitializerExpr,
    AssignExpr,
    BinaryExpr,
    CastExpr,
    ClassExpr,
    ConditionalExpr,
    EnclosedExpr,
    FieldAccessExpr,
    InstanceOfExpr,
    LiteralExpr,
    BooleanLiteralExpr,
    NullLiteralExpr,
    MethodCallExpr,
    NameExpr,
    ObjectCreationExpr,
    ThisExpr,
    SuperExpr,
    UnaryExpr,
    LambdaExpr,
    MethodReferenceExpr,
    TypeExpr,
    VariableDeclarationExpr,
);

/// Forwards `data`/`data_mut` to the payload of every variant and names the
/// variant for diagnostics.
macro_rules! impl_category {
    ($enum:ident { $($variant:ident => $kind:literal),* $(,)? }) => {
        impl HasNodeData for $enum {
            fn data(&self) -> &NodeData {
                match self {
                    $($enum::$variant(n) => &n.data,)*
                }
            }

            fn data_mut(&mut self) -> &mut NodeData {
                match self {
                    $($enum::$variant(n) => &mut n.data,)*
                }
            }
        }

        impl $enum {
            /// The node kind name used in diagnostics.
            pub fn kind_name(&self) -> &'static str {
                match self {
                    $($enum::$variant(_) => $kind,)*
                }
            }
        }
    };
}

impl_category!(TypeDeclaration {
    Class => "ClassOrInterfaceDeclaration",
    Enum => "EnumDeclaration",
    Annotation => "AnnotationDeclaration",
});

impl_category!(BodyDeclaration {
    Field => "FieldDeclaration",
    Method => "MethodDeclaration",
    Constructor => "ConstructorDeclaration",
    Initializer => "InitializerDeclaration",
    AnnotationMember => "AnnotationMemberDeclaration",
    Empty => "EmptyMemberDeclaration",
    Class => "ClassOrInterfaceDeclaration",
    Enum => "EnumDeclaration",
    Annotation => "AnnotationDeclaration",
});

impl_category!(Type {
    ClassOrInterface => "ClassOrInterfaceType",
    Primitive => "PrimitiveType",
    Array => "ArrayType",
    Void => "VoidType",
    Wildcard => "WildcardType",
    Union => "UnionType",
    Intersection => "IntersectionType",
    Unknown => "UnknownType",
});

impl_category!(Statement {
    Assert => "AssertStmt",
    Block => "BlockStmt",
    Break => "BreakStmt",
    Continue => "ContinueStmt",
    Do => "DoStmt",
    Empty => "EmptyStmt",
    ExplicitConstructorInvocation => "ExplicitConstructorInvocationStmt",
    Expression => "ExpressionStmt",
    Foreach => "ForeachStmt",
    For => "ForStmt",
    If => "IfStmt",
    Labeled => "LabeledStmt",
    LocalClass => "LocalClassDeclarationStmt",
    Return => "ReturnStmt",
    Switch => "SwitchStmt",
    Synchronized => "SynchronizedStmt",
    Throw => "ThrowStmt",
    Try => "TryStmt",
    While => "WhileStmt",
});

impl_category!(Expression {
    ArrayAccess => "ArrayAccessExpr",
    ArrayCreation => "ArrayCreationExpr",
    ArrayInitializer => "ArrayInitializerExpr",
    Assign => "AssignExpr",
    Binary => "BinaryExpr",
    Cast => "CastExpr",
    ClassLiteral => "ClassExpr",
    Conditional => "ConditionalExpr",
    Enclosed => "EnclosedExpr",
    FieldAccess => "FieldAccessExpr",
    InstanceOf => "InstanceOfExpr",
    CharLiteral => "CharLiteralExpr",
    DoubleLiteral => "DoubleLiteralExpr",
    IntegerLiteral => "IntegerLiteralExpr",
    LongLiteral => "LongLiteralExpr",
    StringLiteral => "StringLiteralExpr",
    BooleanLiteral => "BooleanLiteralExpr",
    NullLiteral => "NullLiteralExpr",
    MethodCall => "MethodCallExpr",
    Name => "NameExpr",
    ObjectCreation => "ObjectCreationExpr",
    This => "ThisExpr",
    Super => "SuperExpr",
    Unary => "UnaryExpr",
    Lambda => "LambdaExpr",
    MethodReference => "MethodReferenceExpr",
    TypeExpr => "TypeExpr",
    VariableDeclaration => "VariableDeclarationExpr",
    Annotation => "AnnotationExpr",
});

impl Name {
    /// The dotted form, `java.util.List`.
    pub fn to_qualified_string(&self) -> String {
        match &self.qualifier {
            Some(q) => format!("{}.{}", q.to_qualified_string(), self.identifier),
            None => self.identifier.clone(),
        }
    }
}

impl ClassOrInterfaceType {
    /// Whether the type arguments are the diamond `<>`.
    pub fn is_diamond(&self) -> bool {
        matches!(&self.type_arguments, Some(args) if args.is_empty())
    }
}

impl Type {
    /// Number of array layers wrapping the innermost component.
    pub fn array_level(&self) -> usize {
        self.array_layers().len()
    }

    /// The array layers of this type, outermost first.
    pub fn array_layers(&self) -> Vec<&ArrayType> {
        let mut layers = Vec::new();
        let mut current = self;
        while let Type::Array(a) = current {
            layers.push(a);
            current = &a.component;
        }
        layers
    }

    /// The innermost non-array component.
    pub fn element_type(&self) -> &Type {
        match self {
            Type::Array(a) => a.component.element_type(),
            _ => self,
        }
    }
}
