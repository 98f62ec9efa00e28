//! The character-level state machine behind the lexer.
//!
//! A [`Machine`] is the whole scan state: the token under construction and
//! whether a `::` type specifier is waiting for its type name. [`transition`]
//! consumes one character and returns the next machine together with any
//! tokens completed by that character. It owns no buffers beyond its input,
//! so every rule can be exercised on its own.

use crate::{
    errors::errors::{Error, LexError},
    Position, MK_TOKEN,
};

use super::{
    keywords::KeywordTable,
    tokens::{Token, TokenKind},
};

/// What the accumulator is currently building.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum LexState {
    /// Nothing accumulated.
    #[default]
    Empty,
    Identifier,
    /// A pending `:` that may still become `::`.
    Operator,
    Integer,
    /// A leading `.` with no digits yet.
    DecimalPending,
    Decimal,
    String,
    Char,
    /// A backslash was read inside a string.
    StringEscape,
    /// A lone `/`, either division or the start of `//`.
    SlashPending,
    Comment,
}

impl LexState {
    /// States whose content swallows whitespace and punctuation.
    fn is_literal_body(&self) -> bool {
        matches!(self, LexState::String | LexState::Comment)
    }

    pub fn is_unterminated_literal(&self) -> bool {
        matches!(
            self,
            LexState::String | LexState::StringEscape | LexState::Char
        )
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Accumulator {
    pub state: LexState,
    pub value: String,
    pub start: Position,
}

impl Accumulator {
    fn open(state: LexState, value: String, start: Position) -> Self {
        Accumulator { state, value, start }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Machine {
    pub current: Accumulator,
    /// Set once `::` is emitted, cleared by the next emitted token.
    pub expect_type: bool,
}

impl Machine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LexState {
        self.current.state
    }
}

/// Result of feeding one character to a [`Machine`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Step {
    pub machine: Machine,
    pub emitted: Vec<Token>,
}

struct Transition<'k> {
    machine: Machine,
    emitted: Vec<Token>,
    keywords: &'k KeywordTable,
    at: Position,
}

impl Transition<'_> {
    fn state(&self) -> LexState {
        self.machine.current.state
    }

    fn set_state(&mut self, state: LexState) {
        self.machine.current.state = state;
    }

    fn append(&mut self, c: char) {
        self.machine.current.value.push(c);
    }

    fn open(&mut self, state: LexState, c: Option<char>) {
        let value = c.map(String::from).unwrap_or_default();
        self.machine.current = Accumulator::open(state, value, self.at);
    }

    fn close(&mut self) {
        let current = std::mem::take(&mut self.machine.current);
        if let Some(token) = finish_token(&mut self.machine, current, self.keywords) {
            self.emitted.push(token);
        }
    }

    /// Closes whatever is open, then emits `c` on its own as an operator.
    fn standalone_operator(&mut self, c: char) {
        self.close();
        self.open(LexState::Operator, Some(c));
        self.close();
    }

    fn into_step(self) -> Step {
        Step {
            machine: self.machine,
            emitted: self.emitted,
        }
    }
}

/// Turns a closed accumulator into its token, if it produces one.
///
/// Consumes a pending type-specifier flag when a token comes out: its text is
/// looked up in `keywords`, whatever kind it was built as.
fn finish_token(
    machine: &mut Machine,
    current: Accumulator,
    keywords: &KeywordTable,
) -> Option<Token> {
    let kind = match current.state {
        LexState::Empty | LexState::Comment => return None,
        LexState::Identifier => TokenKind::Identifier,
        LexState::Operator | LexState::SlashPending => TokenKind::Operator,
        LexState::Integer => TokenKind::Integer,
        LexState::DecimalPending if current.value == "." => TokenKind::Operator,
        LexState::DecimalPending | LexState::Decimal => TokenKind::Decimal,
        LexState::String | LexState::StringEscape => TokenKind::String,
        LexState::Char => TokenKind::Char,
    };

    let kind = if std::mem::take(&mut machine.expect_type) {
        match keywords.lookup(&current.value) {
            Some(tag) => TokenKind::Type(tag),
            None => TokenKind::UnknownType,
        }
    } else {
        kind
    };

    Some(MK_TOKEN!(kind, current.value, current.start))
}

fn resolve_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        '\\' => Some('\\'),
        _ => None,
    }
}

pub fn is_standalone_punctuation(c: char) -> bool {
    matches!(
        c,
        '{' | '}' | '(' | ')' | '+' | '-' | '*' | '%' | '<' | '>' | ';' | ',' | '!'
    )
}

/// Feeds `c`, found at `at`, to `machine`.
///
/// Fails only on an escape sequence other than `\n`, `\r`, `\t` or `\\`.
pub fn transition(
    machine: Machine,
    c: char,
    at: Position,
    keywords: &KeywordTable,
) -> Result<Step, Error> {
    let mut t = Transition {
        machine,
        emitted: vec![],
        keywords,
        at,
    };

    if t.state() == LexState::StringEscape {
        let Some(resolved) = resolve_escape(c) else {
            return Err(Error::new(
                LexError::UnknownEscapeSequence { character: c },
                at,
            ));
        };
        t.append(resolved);
        t.set_state(LexState::String);
        return Ok(t.into_step());
    }

    // `/` followed by anything but another `/` was a division all along
    if t.state() == LexState::SlashPending && c != '/' {
        t.close();
    }

    if c.is_ascii_digit() {
        match t.state() {
            LexState::Empty => t.open(LexState::Integer, Some(c)),
            LexState::DecimalPending => {
                t.set_state(LexState::Decimal);
                t.append(c);
            }
            _ => t.append(c),
        }
        return Ok(t.into_step());
    }

    match c {
        ' ' | '\t' => {
            if t.state().is_literal_body() {
                t.append(c);
            } else {
                t.close();
            }
        }
        '\n' | '\r' => {
            if t.state() == LexState::String {
                t.append(c);
            } else {
                t.close();
            }
        }
        '.' => match t.state() {
            LexState::Empty => t.open(LexState::DecimalPending, Some(c)),
            LexState::String | LexState::Comment => t.append(c),
            LexState::Integer => {
                t.set_state(LexState::Decimal);
                t.append(c);
            }
            _ => t.standalone_operator(c),
        },
        '/' => match t.state() {
            LexState::String | LexState::Comment => t.append(c),
            LexState::SlashPending => {
                t.set_state(LexState::Comment);
                t.machine.current.value.clear();
            }
            _ => {
                t.close();
                t.open(LexState::SlashPending, Some(c));
            }
        },
        ':' => match t.state() {
            LexState::String | LexState::Comment => t.append(c),
            LexState::Operator if t.machine.current.value == ":" => {
                let start = std::mem::take(&mut t.machine.current).start;
                t.emitted
                    .push(MK_TOKEN!(TokenKind::TypeSpecifier, String::from("::"), start));
                t.machine.expect_type = true;
            }
            _ => {
                t.close();
                t.open(LexState::Operator, Some(c));
            }
        },
        '"' => {
            let opening = t.state() != LexState::String;
            t.close();
            if opening {
                t.open(LexState::String, None);
            }
        }
        '\'' => match t.state() {
            LexState::String | LexState::Comment => t.append(c),
            LexState::Char => t.close(),
            _ => {
                t.close();
                t.open(LexState::Char, None);
            }
        },
        '\\' => match t.state() {
            LexState::String => t.set_state(LexState::StringEscape),
            LexState::Comment => t.append(c),
            _ => t.standalone_operator(c),
        },
        c if is_standalone_punctuation(c) => {
            if t.state().is_literal_body() {
                t.append(c);
            } else {
                t.standalone_operator(c);
            }
        }
        _ => match t.state() {
            LexState::Empty | LexState::Integer | LexState::Decimal => {
                t.close();
                t.open(LexState::Identifier, Some(c));
            }
            _ => t.append(c),
        },
    }

    Ok(t.into_step())
}

/// Closes whatever `machine` still holds at end of input.
pub fn flush(mut machine: Machine, keywords: &KeywordTable) -> Option<Token> {
    let current = std::mem::take(&mut machine.current);
    finish_token(&mut machine, current, keywords)
}
