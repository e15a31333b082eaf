//! An owning JSON5 parser and generator.
//!
//! Parses UTF-8 [JSON5](https://spec.json5.org) text into a [`Value`] tree
//! and renders trees back out as JSON5 or strict JSON. JSON5 extends JSON
//! with ECMAScript 5 identifier keys, single-quoted strings, comments,
//! trailing commas, hexadecimal and signed numbers, and the non-finite
//! literals `Infinity` and `NaN`.
//!
//! The pipeline is deliberately simple: a DFA-based UTF-8 decoder fills a
//! width-adaptive code-point buffer, a tokeniser turns that into a token
//! stream, and a recursive-descent parser builds the tree. Every error
//! carries the offset of the offending code point or token.
//!
//! ```
//! use json5tree::{EmitMode, Number, Value, generate, parse_str};
//!
//! let v = parse_str("{ pi: 3.0, tags: ['a', 'b',], max: Infinity }")?;
//! let tags = v.as_object().unwrap()[1].value.as_array().unwrap();
//! assert_eq!(tags[0], Value::from("a"));
//! assert_eq!(
//!     v.as_object().unwrap()[2].value.as_number(),
//!     Some(Number::Infinity)
//! );
//!
//! let text = generate(&v, EmitMode::Json5)?;
//! assert_eq!(parse_str(&text)?, v);
//! # Ok::<(), json5tree::Error>(())
//! ```
//!
//! The core is `no_std` + `alloc`; the default `std` feature adds the
//! [`slurp`] reader/file/descriptor helpers.

#![no_std]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod ecma;
mod error;
mod generator;
mod lexer;
mod parser;
mod token;
mod ustring;
mod utf8;
mod value;

#[cfg(feature = "std")]
pub mod slurp;

#[cfg(test)]
mod tests;

pub use error::{Error, LexError, ParseError, ValueError};
pub use generator::{EmitMode, GenerateOptions, generate, generate_with};
pub use ustring::{INVALID_CODE_POINT, UnicodeString, Width};
pub use value::{Literal, Member, MemberName, Number, Value};

/// Parses an entire JSON5 document from UTF-8 bytes.
///
/// Malformed UTF-8 is not an error; each offending sequence decodes to
/// `U+FFFD` before tokenising.
///
/// # Errors
///
/// Returns a [`LexError`] or [`ParseError`] (wrapped in [`Error`]) with the
/// offset of the offending code point or token.
pub fn parse_bytes(input: &[u8]) -> Result<Value, Error> {
    let decoded = UnicodeString::from_utf8(input);
    let tokens = lexer::tokenize(decoded)?;
    Ok(parser::parse(tokens)?)
}

/// Parses an entire JSON5 document from a string slice.
///
/// # Errors
///
/// Same as [`parse_bytes`].
pub fn parse_str(input: &str) -> Result<Value, Error> {
    parse_bytes(input.as_bytes())
}
