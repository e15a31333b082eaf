//! Recursive-descent parser over the token stream.
//!
//! Consumes the tokens by value, moving string and number payloads straight
//! into the tree. Exactly one root value is accepted; arrays and objects are
//! driven by small pending-state machines that admit trailing commas. On any
//! grammar error the partially built tree and the unconsumed tokens are
//! dropped on unwind, so no payload outlives a failed parse.

use alloc::{vec, vec::Vec};
use core::iter::Peekable;

use crate::{
    error::ParseError,
    token::{Punctuator, Token, TokenKind},
    value::{Literal, Member, MemberName, Value},
};

/// Parses a token stream into a single root value.
pub(crate) fn parse(tokens: Vec<Token>) -> Result<Value, ParseError> {
    let mut parser = Parser {
        tokens: tokens.into_iter().peekable(),
    };

    if parser.peek().is_none() {
        return Err(ParseError::EmptyTokenStream);
    }
    let value = parser.parse_value()?;
    if let Some(tok) = parser.peek() {
        return Err(ParseError::ExtraTokens { at: tok.start });
    }
    Ok(value)
}

/// Whether a token can begin a JSON5 value.
fn begins_value(tok: &Token) -> bool {
    match &tok.kind {
        TokenKind::Literal(_) | TokenKind::String(_) | TokenKind::Number(_) => true,
        TokenKind::Punctuator(p) => {
            matches!(p, Punctuator::LeftBrace | Punctuator::LeftBracket)
        }
        TokenKind::Identifier(_) => false,
    }
}

struct Parser {
    tokens: Peekable<vec::IntoIter<Token>>,
}

enum ArrayPending {
    Value,
    CommaOrClose,
}

enum ObjectPending {
    Name,
    Colon,
    Value,
    CommaOrClose,
}

impl Parser {
    fn peek(&mut self) -> Option<&Token> {
        self.tokens.peek()
    }

    fn is_punctuator(tok: &Token, p: Punctuator) -> bool {
        matches!(&tok.kind, TokenKind::Punctuator(q) if *q == p)
    }

    /// Consumes one value. The caller has verified a token is present.
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let tok = self.tokens.next().expect("caller checked a token remains");
        match tok.kind {
            TokenKind::Literal(l) => Ok(match l {
                Literal::Null => Value::Null,
                Literal::True => Value::Boolean(true),
                Literal::False => Value::Boolean(false),
            }),
            TokenKind::Identifier(_) => Err(ParseError::UnexpectedIdentifier { at: tok.start }),
            TokenKind::String(s) => Ok(Value::String(s.to_string_lossy())),
            TokenKind::Number(n) => Ok(Value::Number(n)),
            TokenKind::Punctuator(Punctuator::LeftBrace) => self.parse_object(tok.start),
            TokenKind::Punctuator(Punctuator::LeftBracket) => self.parse_array(tok.start),
            TokenKind::Punctuator(p) => Err(ParseError::UnexpectedPunctuation {
                at: tok.start,
                punct: p.as_char(),
            }),
        }
    }

    /// Parses the elements after a consumed `[` at `start`.
    fn parse_array(&mut self, start: usize) -> Result<Value, ParseError> {
        let mut elements = Vec::new();
        let mut pending = ArrayPending::Value;

        loop {
            let Some(tok) = self.peek() else {
                return Err(ParseError::ArrayUnterminated { start });
            };
            // `]` closes from either state; that is what permits a trailing
            // comma.
            if Self::is_punctuator(tok, Punctuator::RightBracket) {
                self.tokens.next();
                return Ok(Value::Array(elements));
            }

            match pending {
                ArrayPending::Value => {
                    if !begins_value(tok) {
                        return Err(ParseError::ArrayInvalidValue {
                            start,
                            at: tok.start,
                        });
                    }
                    elements.push(self.parse_value()?);
                    pending = ArrayPending::CommaOrClose;
                }
                ArrayPending::CommaOrClose => {
                    if !Self::is_punctuator(tok, Punctuator::Comma) {
                        return Err(ParseError::ArrayExpectedCommaOrClose {
                            start,
                            at: tok.start,
                        });
                    }
                    self.tokens.next();
                    pending = ArrayPending::Value;
                }
            }
        }
    }

    /// Parses the members after a consumed `{` at `start`.
    fn parse_object(&mut self, start: usize) -> Result<Value, ParseError> {
        let mut members: Vec<Member> = Vec::new();
        let mut pending = ObjectPending::Name;

        loop {
            let Some(tok) = self.peek() else {
                return Err(ParseError::ObjectUnterminated { start });
            };
            if Self::is_punctuator(tok, Punctuator::RightBrace) {
                // `{ name }` and `{ name: }` closed too soon.
                match pending {
                    ObjectPending::Name | ObjectPending::CommaOrClose => {}
                    ObjectPending::Colon | ObjectPending::Value => {
                        return Err(ParseError::ObjectIncompleteMember {
                            start,
                            at: tok.start,
                        });
                    }
                }
                self.tokens.next();
                return Ok(Value::Object(members));
            }

            match pending {
                ObjectPending::Name => {
                    if !matches!(
                        tok.kind,
                        TokenKind::Literal(_) | TokenKind::Identifier(_) | TokenKind::String(_)
                    ) {
                        return Err(ParseError::ObjectExpectedMemberName {
                            start,
                            at: tok.start,
                        });
                    }
                    let name = match self.tokens.next().expect("peeked").kind {
                        TokenKind::Literal(l) => MemberName::Literal(l),
                        TokenKind::Identifier(id) => MemberName::Identifier(id.to_string_lossy()),
                        TokenKind::String(s) => MemberName::String(s.to_string_lossy()),
                        TokenKind::Punctuator(_) | TokenKind::Number(_) => unreachable!(),
                    };
                    members.push(Member {
                        name,
                        value: Value::Null,
                    });
                    pending = ObjectPending::Colon;
                }
                ObjectPending::Colon => {
                    if !Self::is_punctuator(tok, Punctuator::Colon) {
                        return Err(ParseError::ObjectExpectedColon {
                            start,
                            at: tok.start,
                        });
                    }
                    self.tokens.next();
                    pending = ObjectPending::Value;
                }
                ObjectPending::Value => {
                    if !begins_value(tok) {
                        return Err(ParseError::ObjectInvalidValue {
                            start,
                            at: tok.start,
                        });
                    }
                    let value = self.parse_value()?;
                    members.last_mut().expect("member name was pushed").value = value;
                    pending = ObjectPending::CommaOrClose;
                }
                ObjectPending::CommaOrClose => {
                    if !Self::is_punctuator(tok, Punctuator::Comma) {
                        return Err(ParseError::ObjectExpectedCommaOrClose {
                            start,
                            at: tok.start,
                        });
                    }
                    self.tokens.next();
                    pending = ObjectPending::Name;
                }
            }
        }
    }
}
