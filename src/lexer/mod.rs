//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a sequence of tokens for a parser. It handles:
//!
//! - A character-by-character state machine (see [`state`])
//! - Identifiers, integer and decimal literals, string and char literals
//! - `::` type specifiers resolved against the keyword table
//! - Line comments and whitespace, which never produce tokens
//! - Token position tracking for error reporting

pub mod keywords;
pub mod lexer;
pub mod state;
pub mod tokens;
