//! Tree-to-text emitter.
//!
//! Walks a [`Value`] with an indentation depth counter and renders either
//! JSON5 or strict JSON. The two dialects share everything except what they
//! refuse: strict JSON rejects identifier and literal member names and the
//! non-finite numbers, spells `\v` as a Unicode escape, and escapes the
//! remaining C0 controls. JSON5 strings use exactly the eight named
//! escapes; every other code point is emitted as UTF-8.
//!
//! Identifier member names are re-validated before being emitted bare: the
//! tree is open to construction by callers, so a name that never went
//! through the tokeniser may well not be an identifier at all.

use alloc::string::{String, ToString};
use core::fmt::Write as _;

use crate::{
    ecma,
    error::{Error, ValueError},
    ustring::UnicodeString,
    value::{Member, MemberName, Number, Value},
};

/// Output dialect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EmitMode {
    /// JSON5: bare identifier keys, literal keys, `Infinity` and `NaN`.
    #[default]
    Json5,
    /// Strict JSON per RFC 8259.
    Json,
}

/// Generation options.
///
/// # Default
///
/// JSON5 output with two-space indentation.
#[derive(Clone, Copy, Debug)]
pub struct GenerateOptions {
    /// Output dialect.
    pub mode: EmitMode,
    /// Spaces per depth level.
    pub indent: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            mode: EmitMode::Json5,
            indent: 2,
        }
    }
}

/// Renders a value tree in the given dialect with default options.
///
/// # Errors
///
/// Returns a [`ValueError`](crate::ValueError) wrapped in [`Error`] when the
/// tree holds something the dialect cannot express.
pub fn generate(value: &Value, mode: EmitMode) -> Result<String, Error> {
    generate_with(
        value,
        &GenerateOptions {
            mode,
            ..GenerateOptions::default()
        },
    )
}

/// Renders a value tree with explicit options.
///
/// # Errors
///
/// Returns a [`ValueError`](crate::ValueError) wrapped in [`Error`] when the
/// tree holds something the dialect cannot express.
pub fn generate_with(value: &Value, options: &GenerateOptions) -> Result<String, Error> {
    let mut emitter = Emitter {
        out: String::new(),
        mode: options.mode,
        indent: options.indent,
    };
    emitter.value(value, 0)?;
    Ok(emitter.out)
}

struct Emitter {
    out: String,
    mode: EmitMode,
    indent: usize,
}

impl Emitter {
    fn value(&mut self, v: &Value, depth: usize) -> Result<(), ValueError> {
        match v {
            Value::Null => self.out.push_str("null"),
            Value::Boolean(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => self.number(*n)?,
            Value::String(s) => self.string(s),
            Value::Array(items) => self.array(items, depth)?,
            Value::Object(members) => self.object(members, depth)?,
        }
        Ok(())
    }

    fn number(&mut self, n: Number) -> Result<(), ValueError> {
        let literal = match n {
            Number::Integer(i) => {
                write!(self.out, "{i}").expect("write to String");
                return Ok(());
            }
            Number::Float(f) if f.is_finite() => {
                write!(self.out, "{f:e}").expect("write to String");
                return Ok(());
            }
            // A non-finite float is only reachable through arithmetic or an
            // overflowing exponent; it prints as its literal name.
            Number::Float(f) if f.is_nan() => {
                if f.is_sign_negative() {
                    "-NaN"
                } else {
                    "NaN"
                }
            }
            Number::Float(f) => {
                if f.is_sign_negative() {
                    "-Infinity"
                } else {
                    "Infinity"
                }
            }
            Number::Infinity => "Infinity",
            Number::NegInfinity => "-Infinity",
            Number::NaN => "NaN",
            Number::NegNaN => "-NaN",
        };
        if self.mode == EmitMode::Json {
            return Err(ValueError::NonFiniteInJson { literal });
        }
        self.out.push_str(literal);
        Ok(())
    }

    fn string(&mut self, s: &str) {
        self.out.push('"');
        for c in s.chars() {
            match c {
                '"' => self.out.push_str("\\\""),
                '\\' => self.out.push_str("\\\\"),
                '\u{08}' => self.out.push_str("\\b"),
                '\u{0C}' => self.out.push_str("\\f"),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                '\u{0B}' => self.out.push_str(if self.mode == EmitMode::Json5 {
                    "\\v"
                } else {
                    "\\u000B"
                }),
                // RFC 8259 requires the remaining C0 controls be escaped.
                c if self.mode == EmitMode::Json && (c as u32) < 0x20 => {
                    write!(self.out, "\\u{:04X}", c as u32).expect("write to String");
                }
                c => self.out.push(c),
            }
        }
        self.out.push('"');
    }

    fn array(&mut self, items: &[Value], depth: usize) -> Result<(), ValueError> {
        self.out.push('[');
        if !items.is_empty() {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    self.out.push(',');
                }
                self.out.push('\n');
                self.pad(depth + 1);
                self.value(item, depth + 1)?;
            }
            self.out.push('\n');
            self.pad(depth);
        }
        self.out.push(']');
        Ok(())
    }

    fn object(&mut self, members: &[Member], depth: usize) -> Result<(), ValueError> {
        self.out.push('{');
        if !members.is_empty() {
            for (i, member) in members.iter().enumerate() {
                if i > 0 {
                    self.out.push(',');
                }
                self.out.push('\n');
                self.pad(depth + 1);
                self.member_name(&member.name)?;
                self.out.push_str(": ");
                self.value(&member.value, depth + 1)?;
            }
            self.out.push('\n');
            self.pad(depth);
        }
        self.out.push('}');
        Ok(())
    }

    fn member_name(&mut self, name: &MemberName) -> Result<(), ValueError> {
        match name {
            MemberName::String(s) => self.string(s),
            MemberName::Identifier(id) => {
                if self.mode == EmitMode::Json {
                    return Err(ValueError::IdentifierNameInJson { name: id.clone() });
                }
                validate_identifier(id)?;
                self.out.push_str(id);
            }
            MemberName::Literal(l) => {
                if self.mode == EmitMode::Json {
                    return Err(ValueError::LiteralNameInJson {
                        literal: l.as_str(),
                    });
                }
                self.out.push_str(l.as_str());
            }
        }
        Ok(())
    }

    fn pad(&mut self, depth: usize) {
        for _ in 0..depth * self.indent {
            self.out.push(' ');
        }
    }
}

/// Checks that `name` matches `IdentifierStart IdentifierPart*`, running the
/// same classifiers as the tokeniser (a `\uHHHH` escape in name position is
/// validated in full).
fn validate_identifier(name: &str) -> Result<(), ValueError> {
    let invalid = || ValueError::InvalidIdentifierName {
        name: name.to_string(),
    };

    let mut s = UnicodeString::from_utf8(name.as_bytes());
    let cp = s.next();
    if !ecma::is_identifier_start(cp, &mut s).unwrap_or(false) {
        return Err(invalid());
    }
    while s.available(1) {
        let cp = s.next();
        if !ecma::is_identifier_part(cp, &mut s).unwrap_or(false) {
            return Err(invalid());
        }
    }
    Ok(())
}
