use std::fmt::Display;

use crate::Position;

/// Semantic type named after a `::` type specifier.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TypeTag {
    Int8,
    UInt8,
    Int32,
    UInt32,
    DoubleLiteral,
    Void,
    Struct,
}

impl TypeTag {
    pub fn name(&self) -> &'static str {
        match self {
            TypeTag::Int8 => "INT8",
            TypeTag::UInt8 => "U_INT8",
            TypeTag::Int32 => "INT32",
            TypeTag::UInt32 => "U_INT32",
            TypeTag::DoubleLiteral => "DOUBLE_LITERAL",
            TypeTag::Void => "VOID",
            TypeTag::Struct => "STRUCT",
        }
    }
}

impl Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Classification of an emitted token.
///
/// Only kinds that can appear in the lexer's output exist here. Whitespace,
/// comments and the ambiguous in-between states are tracked by
/// [`LexState`](super::state::LexState) and never reach a [`Token`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    Operator,
    TypeSpecifier, // ::
    Type(TypeTag),
    UnknownType,
    Integer,
    Decimal,
    String,
    Char,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::TypeSpecifier => "TYPE_SPECIFIER",
            TokenKind::Type(tag) => tag.name(),
            TokenKind::UnknownType => "UNKNOWN_TYPE",
            TokenKind::Integer => "INTEGER",
            TokenKind::Decimal => "DECIMAL",
            TokenKind::String => "STRING",
            TokenKind::Char => "CHAR",
        }
    }

    pub fn is_type(&self) -> bool {
        matches!(self, TokenKind::Type(_) | TokenKind::UnknownType)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

/// `[KIND, "text", 'line, column']`
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, \"{}\", '{}, {}']",
            self.kind, self.value, self.position.line, self.position.column
        )
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.iter().any(|kind| *kind == self.kind)
    }

    pub fn info(&self) {
        println!("{}", self);
    }
}
