//! Flag types and scalar enums carried by AST nodes.

use serde::{Deserialize, Serialize};
use std::fmt;

bitflags::bitflags! {
    /// Declaration modifiers. Declaration order is the canonical print order.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Modifiers: u16 {
        const PUBLIC        = 1 << 0;
        const PROTECTED     = 1 << 1;
        const PRIVATE       = 1 << 2;
        const ABSTRACT      = 1 << 3;
        const STATIC        = 1 << 4;
        const FINAL         = 1 << 5;
        const TRANSIENT     = 1 << 6;
        const VOLATILE      = 1 << 7;
        const SYNCHRONIZED  = 1 << 8;
        const NATIVE        = 1 << 9;
        const STRICTFP      = 1 << 10;
    }
}

const MODIFIER_KEYWORDS: [(Modifiers, &str); 11] = [
    (Modifiers::PUBLIC, "public"),
    (Modifiers::PROTECTED, "protected"),
    (Modifiers::PRIVATE, "private"),
    (Modifiers::ABSTRACT, "abstract"),
    (Modifiers::STATIC, "static"),
    (Modifiers::FINAL, "final"),
    (Modifiers::TRANSIENT, "transient"),
    (Modifiers::VOLATILE, "volatile"),
    (Modifiers::SYNCHRONIZED, "synchronized"),
    (Modifiers::NATIVE, "native"),
    (Modifiers::STRICTFP, "strictfp"),
];

impl Modifiers {
    /// Keywords of the set flags in canonical order, independent of the
    /// order they were written in.
    pub fn keywords(self) -> impl Iterator<Item = &'static str> {
        MODIFIER_KEYWORDS
            .iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, keyword)| *keyword)
    }
}

/// Primitive type keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    Boolean,
    Char,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl Primitive {
    pub fn as_str(self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Char => "char",
            Primitive::Byte => "byte",
            Primitive::Short => "short",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
        }
    }
}

/// Assignment operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssignOp {
    Assign,
    Plus,
    Minus,
    Multiply,
    Divide,
    And,
    Or,
    Xor,
    Remainder,
    LeftShift,
    SignedRightShift,
    UnsignedRightShift,
}

impl AssignOp {
    pub fn as_str(self) -> &'static str {
        match self {
            AssignOp::Assign => "=",
            AssignOp::Plus => "+=",
            AssignOp::Minus => "-=",
            AssignOp::Multiply => "*=",
            AssignOp::Divide => "/=",
            AssignOp::And => "&=",
            AssignOp::Or => "|=",
            AssignOp::Xor => "^=",
            AssignOp::Remainder => "%=",
            AssignOp::LeftShift => "<<=",
            AssignOp::SignedRightShift => ">>=",
            AssignOp::UnsignedRightShift => ">>>=",
        }
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BinaryOp {
    Or,
    And,
    BinaryOr,
    BinaryAnd,
    Xor,
    Equals,
    NotEquals,
    Less,
    Greater,
    LessEquals,
    GreaterEquals,
    LeftShift,
    SignedRightShift,
    UnsignedRightShift,
    Plus,
    Minus,
    Multiply,
    Divide,
    Remainder,
}

impl BinaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Or => "||",
            BinaryOp::And => "&&",
            BinaryOp::BinaryOr => "|",
            BinaryOp::BinaryAnd => "&",
            BinaryOp::Xor => "^",
            BinaryOp::Equals => "==",
            BinaryOp::NotEquals => "!=",
            BinaryOp::Less => "<",
            BinaryOp::Greater => ">",
            BinaryOp::LessEquals => "<=",
            BinaryOp::GreaterEquals => ">=",
            BinaryOp::LeftShift => "<<",
            BinaryOp::SignedRightShift => ">>",
            BinaryOp::UnsignedRightShift => ">>>",
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Remainder => "%",
        }
    }
}

/// Unary operators, prefix and postfix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnaryOp {
    Plus,
    Minus,
    PreIncrement,
    PreDecrement,
    LogicalComplement,
    BitwiseComplement,
    PostIncrement,
    PostDecrement,
}

impl UnaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
            UnaryOp::PreIncrement | UnaryOp::PostIncrement => "++",
            UnaryOp::PreDecrement | UnaryOp::PostDecrement => "--",
            UnaryOp::LogicalComplement => "!",
            UnaryOp::BitwiseComplement => "~",
        }
    }

    pub fn is_postfix(self) -> bool {
        matches!(self, UnaryOp::PostIncrement | UnaryOp::PostDecrement)
    }

    pub fn is_prefix(self) -> bool {
        !self.is_postfix()
    }
}

/// The three comment forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentKind {
    /// `// text`
    Line,
    /// `/* text */`
    Block,
    /// `/** text */`
    Doc,
}

impl fmt::Display for CommentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommentKind::Line => write!(f, "LineComment"),
            CommentKind::Block => write!(f, "BlockComment"),
            CommentKind::Doc => write!(f, "JavadocComment"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_keywords_canonical_order() {
        let mods = Modifiers::FINAL | Modifiers::STATIC | Modifiers::PRIVATE;
        let words: Vec<_> = mods.keywords().collect();
        assert_eq!(words, vec!["private", "static", "final"]);
        assert_eq!(Modifiers::empty().keywords().count(), 0);
    }

    #[test]
    fn test_modifiers_serde() {
        let mods = Modifiers::PUBLIC | Modifiers::ABSTRACT;
        let json = serde_json::to_string(&mods).unwrap();
        let back: Modifiers = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mods);
    }

    #[test]
    fn test_operator_text() {
        assert_eq!(BinaryOp::UnsignedRightShift.as_str(), ">>>");
        assert_eq!(AssignOp::Remainder.as_str(), "%=");
        assert_eq!(UnaryOp::PostDecrement.as_str(), "--");
        assert!(UnaryOp::PostDecrement.is_postfix());
        assert!(UnaryOp::LogicalComplement.is_prefix());
        assert_eq!(Primitive::Double.as_str(), "double");
    }
}
