use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: LexError,
    position: Position,
}

impl Error {
    pub fn new(error_impl: LexError, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &LexError {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            LexError::UnknownEscapeSequence { .. } => "UnknownEscapeSequence",
            LexError::UnterminatedLiteral { .. } => "UnterminatedLiteral",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            LexError::UnknownEscapeSequence { character } => ErrorTip::Suggestion(format!(
                "`\\{}` is not an escape, expected one of `\\n`, `\\r`, `\\t` or `\\\\`",
                character.escape_default()
            )),
            LexError::UnterminatedLiteral { kind } => ErrorTip::Suggestion(format!(
                "{} literal is never closed",
                kind
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.internal_error {
            LexError::UnknownEscapeSequence { character } => write!(
                f,
                "Unknown escape sequence: '\\{}', on line: '{}, {}'.",
                character, self.position.line, self.position.column
            ),
            LexError::UnterminatedLiteral { kind } => write!(
                f,
                "Unterminated {} literal, starting on line: '{}, {}'.",
                kind, self.position.line, self.position.column
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unknown escape sequence: {character:?}")]
    UnknownEscapeSequence { character: char },
    #[error("unterminated {kind} literal")]
    UnterminatedLiteral { kind: TokenKind },
}
