use crate::{
    errors::errors::{Error, LexError},
    Position,
};

use super::{
    keywords::{KeywordTable, KEYWORDS},
    state::{flush, transition, LexState, Machine},
    tokens::{Token, TokenKind},
};

/// End-of-input behavior of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// Emit the token still open when the input runs out. When false the
    /// trailing token is dropped, as older builds of the lexer did.
    pub close_trailing_token: bool,
    /// Fail with [`LexError::UnterminatedLiteral`] instead of silently
    /// discarding a string or char literal that is never closed.
    pub reject_unterminated: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            close_trailing_token: true,
            reject_unterminated: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Lexer<'k> {
    keywords: &'k KeywordTable,
    config: LexerConfig,
}

impl Lexer<'static> {
    pub fn new() -> Self {
        Lexer::with_keywords(&KEYWORDS)
    }
}

impl Default for Lexer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'k> Lexer<'k> {
    pub fn with_keywords(keywords: &'k KeywordTable) -> Self {
        Lexer {
            keywords,
            config: LexerConfig::default(),
        }
    }

    pub fn config(mut self, config: LexerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn keywords(&self) -> &'k KeywordTable {
        self.keywords
    }

    /// Scans the whole of `source` in one pass.
    ///
    /// Tokens come back in the order they were closed. The first bad escape
    /// sequence aborts the scan and nothing scanned so far is returned.
    pub fn scan(&self, source: &str) -> Result<Vec<Token>, Error> {
        let mut tokens = vec![];
        let mut machine = Machine::new();
        let mut line = 1;
        let mut column = 1;

        for c in source.chars() {
            let step = transition(machine, c, Position::new(line, column), self.keywords)?;
            machine = step.machine;
            tokens.extend(step.emitted);

            if c == '\n' || c == '\r' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }

        let open = machine.state();
        if open.is_unterminated_literal() {
            if self.config.reject_unterminated {
                let kind = if open == LexState::Char {
                    TokenKind::Char
                } else {
                    TokenKind::String
                };
                return Err(Error::new(
                    LexError::UnterminatedLiteral { kind },
                    machine.current.start,
                ));
            }
            return Ok(tokens);
        }

        if self.config.close_trailing_token {
            tokens.extend(flush(machine, self.keywords));
        }

        Ok(tokens)
    }
}

/// Scans `source` with the default keyword table and configuration.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    Lexer::new().scan(source)
}
