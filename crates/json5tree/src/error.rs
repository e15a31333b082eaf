//! Error types for parsing and generation.
//!
//! Each pipeline stage has its own kind: [`LexError`] from the tokeniser,
//! [`ParseError`] from the grammar pass, and [`ValueError`] from the
//! generator, all wrapped by the top-level [`Error`]. Offsets are indices
//! into the decoded code-point sequence, which coincide with byte offsets
//! for ASCII input.

use alloc::string::String;

use thiserror::Error;

/// Any failure surfaced by this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The tokeniser rejected the input.
    #[error("tokenize: {0}")]
    Lex(#[from] LexError),
    /// The token stream did not satisfy the JSON5 grammar.
    #[error("parse: {0}")]
    Parse(#[from] ParseError),
    /// A value tree could not be rendered in the requested dialect.
    #[error("generate: {0}")]
    Value(#[from] ValueError),
    /// An I/O error while slurping input.
    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Tokeniser failures, each pointing at the offending code point.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LexError {
    /// The input contained only whitespace.
    #[error("no tokens")]
    NoTokens,

    /// A `/` that opened neither `//` nor `/*`.
    #[error("unexpected '/' at {at}")]
    UnexpectedSlash {
        /// Offset of the slash.
        at: usize,
    },

    /// A `/*` comment ran to end of input.
    #[error("block comment at {start}: unterminated")]
    UnterminatedBlockComment {
        /// Offset of the opening `/`.
        start: usize,
    },

    /// A string ran to end of input without its closing quote.
    #[error("string at {start}: unterminated")]
    UnterminatedString {
        /// Offset of the first code point after the opening quote.
        start: usize,
    },

    /// A raw line terminator appeared inside a string.
    #[error("string at {start}: unescaped LineTerminator U+{cp:04X} at {at}")]
    UnescapedLineTerminator {
        /// Offset of the first code point after the opening quote.
        start: usize,
        /// Offset of the terminator.
        at: usize,
        /// The terminator code point.
        cp: u32,
    },

    /// `\x` not followed by two hex digits.
    #[error("invalid HexEscapeSequence at {at}")]
    BadHexEscape {
        /// Offset just past the `\x`.
        at: usize,
    },

    /// `\u` not followed by four hex digits, or truncated at end of input.
    #[error("invalid UnicodeEscapeSequence at {at}")]
    BadUnicodeEscape {
        /// Offset just past the `\u`.
        at: usize,
    },

    /// A high surrogate escape with no following `\u` escape.
    #[error("expected a low surrogate at {at}")]
    ExpectedLowSurrogate {
        /// Offset where the low surrogate escape should begin.
        at: usize,
    },

    /// A high surrogate escape followed by a `\u` escape outside
    /// `DC00..=DFFF`.
    #[error("low surrogate out of range at {at}")]
    LowSurrogateRange {
        /// Offset of the second escape.
        at: usize,
    },

    /// An escape inside an identifier that is not a `UnicodeEscapeSequence`.
    #[error("identifier at {start}: invalid UnicodeEscapeSequence at {at}")]
    BadIdentifierEscape {
        /// Offset of the identifier.
        start: usize,
        /// Offset of the escape, relative to the identifier.
        at: usize,
    },

    /// A code point that cannot begin any token.
    #[error("expected IdentifierStart at {at}: U+{cp:04X}")]
    ExpectedIdentifierStart {
        /// Offset of the code point.
        at: usize,
        /// The code point.
        cp: u32,
    },

    /// A second `+`/`-` in the mantissa.
    #[error("number at {start}: double signed")]
    DoubleSign {
        /// Offset of the number.
        start: usize,
    },

    /// A second `+`/`-` in the exponent.
    #[error("number at {start}: double signed exponent at {at}")]
    DoubleExponentSign {
        /// Offset of the number.
        start: usize,
        /// Offset of the second sign.
        at: usize,
    },

    /// A `0` followed by another mantissa digit.
    #[error("number at {start}: leading zero")]
    LeadingZero {
        /// Offset of the number.
        start: usize,
    },

    /// A `.` inside an exponent.
    #[error("number at {start}: floating point exponent at {at}")]
    FloatingPointExponent {
        /// Offset of the number.
        start: usize,
        /// Offset of the dot.
        at: usize,
    },

    /// A hex digit other than `e`/`E` inside an exponent.
    #[error("number at {start}: hex digit in exponent")]
    HexDigitInExponent {
        /// Offset of the number.
        start: usize,
    },

    /// A hex digit in a decimal mantissa.
    #[error("number at {start}: hex in decimal: '{found}' at {at}")]
    HexInDecimal {
        /// Offset of the number.
        start: usize,
        /// Offset of the digit.
        at: usize,
        /// The digit.
        found: char,
    },

    /// An exponent with no mantissa digits before it.
    #[error("number at {start}: no mantissa digits")]
    NoMantissaDigits {
        /// Offset of the number.
        start: usize,
    },

    /// A number with no digits at all.
    #[error("number at {start}: no digits")]
    NoDigits {
        /// Offset of the number.
        start: usize,
    },

    /// An exponent marker with no digits after it.
    #[error("number at {start}: no exponent digits")]
    NoExponentDigits {
        /// Offset of the number.
        start: usize,
    },

    /// A numeric literal immediately followed by an `IdentifierStart` or a
    /// digit (ECMA-262 §7.8.3).
    #[error("number at {start}: followed by U+{cp:04X} at {at}")]
    NumberFollowedBy {
        /// Offset of the number.
        start: usize,
        /// Offset of the offending code point.
        at: usize,
        /// The offending code point.
        cp: u32,
    },

    /// A code point inside a scanned number that is not a digit of its base
    /// (a stray sign or dot, e.g. `1+2` or `0x.1`).
    #[error("number at {start}: U+{cp:04X} is not a digit at {at}")]
    BadDigit {
        /// Offset of the number.
        start: usize,
        /// Offset of the code point.
        at: usize,
        /// The code point.
        cp: u32,
    },
}

/// Grammar failures from the recursive-descent pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// The tokeniser produced no tokens (empty input).
    #[error("empty token stream")]
    EmptyTokenStream,

    /// Tokens remained after the single root value.
    #[error("extra tokens at {at}")]
    ExtraTokens {
        /// Offset of the first surplus token.
        at: usize,
    },

    /// A closing bracket, colon, or comma where a value was expected.
    #[error("unexpected punctuation at {at}: '{punct}'")]
    UnexpectedPunctuation {
        /// Offset of the punctuator.
        at: usize,
        /// The punctuator.
        punct: char,
    },

    /// A bare identifier where a value was expected.
    #[error("unexpected identifier at {at}")]
    UnexpectedIdentifier {
        /// Offset of the identifier.
        at: usize,
    },

    /// A token that cannot start a value inside an array.
    #[error("array at {start}: invalid value at {at}")]
    ArrayInvalidValue {
        /// Offset of the enclosing `[`.
        start: usize,
        /// Offset of the offending token.
        at: usize,
    },

    /// Neither `,` nor `]` after an array element.
    #[error("array at {start}: expected ',' or ']' at {at}")]
    ArrayExpectedCommaOrClose {
        /// Offset of the enclosing `[`.
        start: usize,
        /// Offset of the offending token.
        at: usize,
    },

    /// The token stream ended inside an array.
    #[error("array at {start}: expected ']' (no more tokens)")]
    ArrayUnterminated {
        /// Offset of the enclosing `[`.
        start: usize,
    },

    /// A token that cannot be a member name.
    #[error("object at {start}: MemberName: expected identifier or string at {at}")]
    ObjectExpectedMemberName {
        /// Offset of the enclosing `{`.
        start: usize,
        /// Offset of the offending token.
        at: usize,
    },

    /// A member name without a following `:`.
    #[error("object at {start}: expected ':' at {at}")]
    ObjectExpectedColon {
        /// Offset of the enclosing `{`.
        start: usize,
        /// Offset of the offending token.
        at: usize,
    },

    /// A token that cannot start a value inside an object.
    #[error("object at {start}: invalid value at {at}")]
    ObjectInvalidValue {
        /// Offset of the enclosing `{`.
        start: usize,
        /// Offset of the offending token.
        at: usize,
    },

    /// Neither `,` nor `}` after a member value.
    #[error("object at {start}: expected ',' or '}}' at {at}")]
    ObjectExpectedCommaOrClose {
        /// Offset of the enclosing `{`.
        start: usize,
        /// Offset of the offending token.
        at: usize,
    },

    /// A `}` after a member name or its colon, before the member value.
    #[error("object at {start}: expected more tokens at {at}")]
    ObjectIncompleteMember {
        /// Offset of the enclosing `{`.
        start: usize,
        /// Offset of the `}`.
        at: usize,
    },

    /// The token stream ended inside an object.
    #[error("object at {start}: expected '}}' (no more tokens)")]
    ObjectUnterminated {
        /// Offset of the enclosing `{`.
        start: usize,
    },
}

/// Generation failures: the value tree holds something the requested dialect
/// cannot express.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValueError {
    /// An identifier member name that is not `IdentifierStart
    /// IdentifierPart*`.
    #[error("member name '{name}' is not an ECMAScript identifier")]
    InvalidIdentifierName {
        /// The offending name.
        name: String,
    },

    /// An identifier member name in strict-JSON output.
    #[error("identifier member name '{name}' is not representable in JSON")]
    IdentifierNameInJson {
        /// The offending name.
        name: String,
    },

    /// A literal member name (`null`, `true`, `false`) in strict-JSON output.
    #[error("literal member name '{literal}' is not representable in JSON")]
    LiteralNameInJson {
        /// The literal, as source text.
        literal: &'static str,
    },

    /// `Infinity`, `NaN`, or a signed variant in strict-JSON output.
    #[error("'{literal}' is not representable in JSON")]
    NonFiniteInJson {
        /// The literal, as source text.
        literal: &'static str,
    },
}
