//! Lexical tokens.

use crate::{
    ustring::UnicodeString,
    value::{Literal, Number},
};

/// One of the six JSON5 punctuators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Punctuator {
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Colon,
    Comma,
}

impl Punctuator {
    pub(crate) fn as_char(self) -> char {
        match self {
            Punctuator::LeftBrace => '{',
            Punctuator::RightBrace => '}',
            Punctuator::LeftBracket => '[',
            Punctuator::RightBracket => ']',
            Punctuator::Colon => ':',
            Punctuator::Comma => ',',
        }
    }
}

/// Token payload.
///
/// Identifier-kind tokens split in two: reserved words surface as `Literal`,
/// everything else as `Identifier` with its escape-decoded text. `Infinity`
/// and `NaN` are rewritten to `Number` by the scanner and never appear here
/// as identifiers.
#[derive(Debug, PartialEq)]
pub(crate) enum TokenKind {
    Punctuator(Punctuator),
    Literal(Literal),
    Identifier(UnicodeString),
    String(UnicodeString),
    Number(Number),
}

/// A token with its `[start, end)` extent in the decoded input, kept for
/// error messages.
#[derive(Debug, PartialEq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) start: usize,
    pub(crate) end: usize,
}
