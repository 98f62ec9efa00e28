//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorTip, LexError};
use crate::lexer::tokens::TokenKind;
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        LexError::UnknownEscapeSequence { character: 'q' },
        Position::new(1, 4),
    );

    assert_eq!(error.get_error_name(), "UnknownEscapeSequence");
    assert_eq!(error.kind(), &LexError::UnknownEscapeSequence { character: 'q' });
}

#[test]
fn test_error_position() {
    let error = Error::new(
        LexError::UnknownEscapeSequence { character: 'x' },
        Position::new(7, 42),
    );

    assert_eq!(error.get_position().line, 7);
    assert_eq!(error.get_position().column, 42);
}

#[test]
fn test_unknown_escape_display() {
    let error = Error::new(
        LexError::UnknownEscapeSequence { character: 'q' },
        Position::new(1, 4),
    );

    assert_eq!(
        error.to_string(),
        "Unknown escape sequence: '\\q', on line: '1, 4'."
    );
}

#[test]
fn test_unterminated_literal_error() {
    let error = Error::new(
        LexError::UnterminatedLiteral { kind: TokenKind::Char },
        Position::new(2, 1),
    );

    assert_eq!(error.get_error_name(), "UnterminatedLiteral");
    assert_eq!(
        error.to_string(),
        "Unterminated CHAR literal, starting on line: '2, 1'."
    );
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        LexError::UnknownEscapeSequence { character: 'q' },
        Position::new(1, 1),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.starts_with("`\\q` is not an escape")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_escapes_control_characters() {
    let error = Error::new(
        LexError::UnknownEscapeSequence { character: '\n' },
        Position::new(1, 1),
    );

    assert!(error.get_tip().to_string().starts_with("`\\\\n`"));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_source_is_kind() {
    let error = Error::new(
        LexError::UnterminatedLiteral { kind: TokenKind::String },
        Position::new(1, 1),
    );

    let source = std::error::Error::source(&error).unwrap();
    assert_eq!(source.to_string(), "unterminated STRING literal");
}
