//! The JSON5 tokeniser.
//!
//! Consumes a decoded [`UnicodeString`] and produces the token stream the
//! parser walks. The loop shape follows the grammar directly: skip
//! whitespace, then branch on the first code point: `/` opens a comment,
//! the six punctuators are single-code-point tokens, quotes open strings,
//! digits and `+ - .` open numbers, and anything satisfying
//! `IdentifierStart` opens an identifier. Reserved words (`null`, `true`,
//! `false`) come back as literal tokens; `Infinity` and `NaN` are rewritten
//! into number tokens by the identifier scanner itself.
//!
//! String and identifier payloads are decoded into fresh [`UnicodeString`]
//! buffers sized by the token's source extent (an upper bound, since escape
//! collapse only shrinks), allocated at the source width and widened on
//! demand when an escape produces a wider code point.

use alloc::vec::Vec;

use crate::{
    ecma,
    error::LexError,
    token::{Punctuator, Token, TokenKind},
    ustring::{INVALID_CODE_POINT, UnicodeString},
    value::{Literal, Number},
};

const BACKSLASH: u32 = b'\\' as u32;

/// Tokenises an entire decoded document.
pub(crate) fn tokenize(s: UnicodeString) -> Result<Vec<Token>, LexError> {
    Tokenizer {
        s,
        tokens: Vec::new(),
    }
    .run()
}

struct Tokenizer {
    s: UnicodeString,
    tokens: Vec<Token>,
}

impl Tokenizer {
    fn run(mut self) -> Result<Vec<Token>, LexError> {
        while self.s.available(1) {
            self.skip_white_space();
            if !self.s.available(1) {
                return Err(LexError::NoTokens);
            }

            let start = self.s.cursor();
            let cp = self.s.next();
            match cp {
                0x2F => {
                    // '/': "//" or "/*", anything else is an error
                    match self.s.peek(self.s.cursor()) {
                        0x2F => self.skip_line_comment(),
                        0x2A => self.skip_block_comment(start)?,
                        _ => return Err(LexError::UnexpectedSlash { at: start }),
                    }
                }

                0x7B | 0x7D | 0x5B | 0x5D | 0x3A | 0x2C => {
                    let punct = match cp {
                        0x7B => Punctuator::LeftBrace,
                        0x7D => Punctuator::RightBrace,
                        0x5B => Punctuator::LeftBracket,
                        0x5D => Punctuator::RightBracket,
                        0x3A => Punctuator::Colon,
                        _ => Punctuator::Comma,
                    };
                    self.tokens.push(Token {
                        kind: TokenKind::Punctuator(punct),
                        start,
                        end: self.s.cursor(),
                    });
                }

                0x22 | 0x27 => self.scan_string(cp)?,

                0x30..=0x39 | 0x2B | 0x2D | 0x2E => {
                    self.s.set_cursor(start);
                    self.scan_number()?;
                }

                _ => {
                    if ecma::is_identifier_start(cp, &mut self.s)? {
                        self.s.set_cursor(start);
                        self.scan_identifier()?;
                    } else {
                        return Err(LexError::ExpectedIdentifierStart { at: start, cp });
                    }
                }
            }

            self.skip_white_space();
            if !self.s.available(1) {
                break;
            }
        }

        Ok(self.tokens)
    }

    fn skip_white_space(&mut self) {
        while self.s.available(1) && ecma::is_white_space(self.s.peek(self.s.cursor())) {
            self.s.next();
        }
    }

    /// Consumes `// ...` up to and including the line terminator.
    ///
    /// Entered with the cursor on the second `/`.
    fn skip_line_comment(&mut self) {
        self.s.next();
        while self.s.available(1) {
            if ecma::line_terminator(&mut self.s).is_some() {
                break;
            }
            self.s.next();
        }
    }

    /// Consumes `/* ... */`.
    ///
    /// Entered with the cursor on the `*`; `start` is the offset of the `/`.
    fn skip_block_comment(&mut self, start: usize) -> Result<(), LexError> {
        self.s.next();
        let mut asterisk = false;
        while self.s.available(1) {
            let cp = self.s.next();
            if cp == 0x2A {
                asterisk = true;
            } else if asterisk && cp == 0x2F {
                return Ok(());
            } else {
                asterisk = false;
            }
        }
        Err(LexError::UnterminatedBlockComment { start })
    }

    /// Scans a string token. Entered with the cursor just past the opening
    /// quote; `delim` is the quote code point.
    fn scan_string(&mut self, delim: u32) -> Result<(), LexError> {
        let start = self.s.cursor();

        // Find the closing delimiter first, treating `\\` and `\<delim>` as
        // two-code-point escapes; everything else resolves during decode.
        let mut close = start;
        let mut done = false;
        while close < self.s.len() {
            let cp = self.s.peek(close);
            if cp == BACKSLASH {
                let cp1 = self.s.peek(close + 1);
                if cp1 == INVALID_CODE_POINT {
                    break;
                }
                if cp1 == delim || cp1 == BACKSLASH {
                    close += 2;
                    continue;
                }
            }
            if cp == delim {
                done = true;
                break;
            }
            close += 1;
        }
        if !done {
            return Err(LexError::UnterminatedString { start });
        }

        // `close - start` source code points is an upper bound on the
        // decoded length; escape collapse only shrinks it.
        let mut out = UnicodeString::filled(self.s.width(), close - start);
        let mut n = 0;
        loop {
            let mark = self.s.cursor();
            let mut cp = self.s.peek(mark);
            if cp == delim {
                self.s.next();
                break;
            }

            if let Some(lt) = ecma::line_terminator(&mut self.s) {
                return Err(LexError::UnescapedLineTerminator {
                    start,
                    at: mark,
                    cp: lt,
                });
            }

            if cp == BACKSLASH {
                self.s.set_cursor(mark + 1);
                if let Some(ecp) = ecma::escape_sequence(&mut self.s)? {
                    cp = ecp;
                } else {
                    self.s.set_cursor(mark + 1);
                    if ecma::line_terminator_sequence(&mut self.s).is_some() {
                        // line continuation, elided from the value
                        continue;
                    }
                    // Not an escape at all; the backslash stands for itself.
                }
            } else {
                self.s.next();
            }

            out.set(n, cp);
            n += 1;
        }
        out.truncate(n);

        self.tokens.push(Token {
            kind: TokenKind::String(out),
            start,
            end: self.s.cursor(),
        });
        Ok(())
    }

    /// Scans a numeric literal, including the signed named values
    /// `Infinity` and `NaN`. Entered with the cursor on the first code
    /// point of the number.
    #[allow(clippy::too_many_lines)]
    fn scan_number(&mut self) -> Result<(), LexError> {
        let n_start = self.s.cursor();

        let mut sign = 0i32;
        let mut named: Option<Number> = None;
        let mut dec = true; // decimal or hex
        let mut integer = true; // integer or floating point
        let mut leading_zero = true;
        let mut trailing_dot = false;
        let mut in_exp = false;
        let mut exp_sign = 0i32;
        let mut digits = 0u32;
        let mut exp_digits = 0u32;

        let mut done = false;
        while self.s.available(1) {
            let cp = self.s.next();
            match cp {
                0x2B | 0x2D => {
                    // '+' / '-'
                    if in_exp {
                        if exp_sign != 0 {
                            return Err(LexError::DoubleExponentSign {
                                start: n_start,
                                at: self.s.cursor() - 2,
                            });
                        }
                        exp_sign = if cp == 0x2D { -1 } else { 1 };
                    } else {
                        if sign != 0 {
                            return Err(LexError::DoubleSign { start: n_start });
                        }
                        sign = if cp == 0x2D { -1 } else { 1 };
                    }
                }

                0x30 => {
                    // '0'
                    if leading_zero {
                        leading_zero = false;
                        let cp1 = self.s.peek(self.s.cursor());
                        match cp1 {
                            INVALID_CODE_POINT => digits += 1,
                            0x2E => {
                                // 0.
                                integer = false;
                                digits += 1;
                            }
                            0x65 | 0x45 => {
                                // 0e / 0E
                                integer = false;
                                digits += 1;
                                self.s.next();
                                in_exp = true;
                            }
                            0x78 | 0x58 => {
                                // 0x / 0X; no digits yet
                                dec = false;
                                self.s.next();
                            }
                            0x5D | 0x7D | 0x2C => digits += 1, // ] } ,
                            _ => return Err(LexError::LeadingZero { start: n_start }),
                        }
                    } else {
                        if in_exp {
                            exp_digits += 1;
                        } else {
                            digits += 1;
                        }
                        trailing_dot = false;
                    }
                }

                0x2E => {
                    // '.'
                    leading_zero = false;
                    integer = false;
                    if in_exp {
                        return Err(LexError::FloatingPointExponent {
                            start: n_start,
                            at: self.s.cursor() - 1,
                        });
                    }
                    trailing_dot = true;
                }

                0x31..=0x39 => {
                    leading_zero = false;
                    trailing_dot = false;
                    if in_exp {
                        exp_digits += 1;
                    } else {
                        digits += 1;
                    }
                }

                0x61..=0x66 | 0x41..=0x46 => {
                    // a-f / A-F: hex digits, or the exponent marker e/E
                    leading_zero = false;
                    if in_exp {
                        // The exponent can only be a SignedInteger, or we
                        // would have an IdentifierStart immediately after a
                        // NumericLiteral.
                        return Err(LexError::HexDigitInExponent { start: n_start });
                    }
                    if dec {
                        if !(cp == 0x65 || cp == 0x45) {
                            return Err(LexError::HexInDecimal {
                                start: n_start,
                                at: self.s.cursor() - 1,
                                found: char::from_u32(cp).unwrap_or('\u{FFFD}'),
                            });
                        }
                        if digits == 0 {
                            return Err(LexError::NoMantissaDigits { start: n_start });
                        }
                        in_exp = true;
                        integer = false;
                    }
                    digits += 1;
                }

                _ => {
                    if cp == u32::from(b'I') && self.s.n_equal("nfinity") {
                        named = Some(if sign == -1 {
                            Number::NegInfinity
                        } else {
                            Number::Infinity
                        });
                        digits += 1;
                        self.s.set_cursor(self.s.cursor() + 7);
                    } else if cp == u32::from(b'N') && self.s.n_equal("aN") {
                        named = Some(if sign == -1 {
                            Number::NegNaN
                        } else {
                            Number::NaN
                        });
                        digits += 1;
                        self.s.set_cursor(self.s.cursor() + 2);
                    }
                    done = true;
                }
            }
            if done {
                break;
            }
        }

        // A terminating code point was consumed; put it back.
        if done && named.is_none() {
            self.s.set_cursor(self.s.cursor() - 1);
        }
        let end = self.s.cursor();

        if digits == 0 {
            return Err(LexError::NoDigits { start: n_start });
        }
        if dec && in_exp && exp_digits == 0 && !trailing_dot {
            return Err(LexError::NoExponentDigits { start: n_start });
        }

        // ECMA-262 §7.8.3: the code point after a NumericLiteral must not
        // be an IdentifierStart or a decimal digit.
        let cp = self.s.peek(end);
        if cp != INVALID_CODE_POINT
            && (ecma::is_identifier_start(cp, &mut self.s)? || (0x30..=0x39).contains(&cp))
        {
            return Err(LexError::NumberFollowedBy {
                start: n_start,
                at: end,
                cp,
            });
        }

        let number = match named {
            Some(n) => n,
            None => self.convert_number(n_start, end, sign, dec, integer, exp_sign)?,
        };
        self.tokens.push(Token {
            kind: TokenKind::Number(number),
            start: n_start,
            end,
        });
        Ok(())
    }

    /// Converts the scanned extent `[start, end)` into a numeric payload.
    ///
    /// The scan admits a few shapes the grammar does not (a sign or dot in
    /// digit position, e.g. `1+2` or `0x.1`); they surface here as
    /// [`LexError::BadDigit`].
    fn convert_number(
        &self,
        start: usize,
        end: usize,
        sign: i32,
        dec: bool,
        integer: bool,
        exp_sign: i32,
    ) -> Result<Number, LexError> {
        let digit = |i: usize| {
            let cp = self.s.peek(i);
            ecma::hex_value(cp).ok_or(LexError::BadDigit { start, at: i, cp })
        };

        let mut text = start;
        if matches!(self.s.peek(text), 0x2B | 0x2D) {
            text += 1;
        }

        if (dec && integer) || !dec {
            let base: i64 = if dec { 10 } else { 16 };
            if !dec {
                text += 2; // skip the leading 0x
            }
            let mut acc = 0i64;
            for i in text..end {
                acc = acc.wrapping_mul(base).wrapping_add(i64::from(digit(i)?));
            }
            if sign == -1 {
                acc = acc.wrapping_neg();
            }
            return Ok(Number::Integer(acc));
        }

        let mut f = 0f64;
        let mut dp = 0u32; // decimal places seen, counting the dot
        let mut in_exp = false;
        let mut exp = 0i64;
        for i in text..end {
            let cp = self.s.peek(i);
            if cp == 0x2E {
                dp = 1;
            } else if cp == 0x65 || cp == 0x45 {
                in_exp = true;
            } else if in_exp {
                if !matches!(cp, 0x2B | 0x2D) {
                    exp = exp.saturating_mul(10).saturating_add(i64::from(digit(i)?));
                }
            } else {
                f = f * 10.0 + f64::from(digit(i)?);
                if dp > 0 {
                    dp += 1;
                }
            }
        }

        if dp > 1 {
            dp -= 1; // the dot itself
            for _ in 0..dp {
                f /= 10.0;
            }
        }

        if exp != 0 {
            if exp > 324 {
                log::warn!(
                    "exponent {}{exp} for {f:e}: out of range of double",
                    if exp_sign == -1 { '-' } else { '+' }
                );
            }
            if exp_sign == -1 {
                for _ in 0..exp {
                    f *= 0.1;
                    if f == 0.0 {
                        break;
                    }
                }
            } else {
                for _ in 0..exp {
                    f *= 10.0;
                    // A zero mantissa stays zero; without this check a
                    // saturated exponent would spin the loop i64::MAX times.
                    if !f.is_finite() || f == 0.0 {
                        break;
                    }
                }
            }
        }

        if sign == -1 {
            f = -f;
        }
        Ok(Number::Float(f))
    }

    /// Scans an identifier, rewriting reserved words. Entered with the
    /// cursor on the `IdentifierStart`.
    fn scan_identifier(&mut self) -> Result<(), LexError> {
        let start = self.s.cursor();
        while self.s.available(1) {
            let mark = self.s.cursor();
            let cp = self.s.next();
            if !ecma::is_identifier_part(cp, &mut self.s)? {
                self.s.set_cursor(mark);
                break;
            }
        }
        let end = self.s.cursor();

        self.s.set_cursor(start);
        let len = end - start;
        let kind = if len == 4 && self.s.n_equal("null") {
            TokenKind::Literal(Literal::Null)
        } else if len == 4 && self.s.n_equal("true") {
            TokenKind::Literal(Literal::True)
        } else if len == 5 && self.s.n_equal("false") {
            TokenKind::Literal(Literal::False)
        } else if len == 8 && self.s.n_equal("Infinity") {
            TokenKind::Number(Number::Infinity)
        } else if len == 3 && self.s.n_equal("NaN") {
            TokenKind::Number(Number::NaN)
        } else {
            TokenKind::Identifier(self.decode_identifier(start, end)?)
        };
        self.s.set_cursor(end);

        self.tokens.push(Token { kind, start, end });
        Ok(())
    }

    /// Decodes an identifier extent, resolving `\uHHHH` escapes, the only
    /// escape form an identifier admits.
    fn decode_identifier(&mut self, start: usize, end: usize) -> Result<UnicodeString, LexError> {
        let mut out = UnicodeString::filled(self.s.width(), end - start);
        let mut n = 0;
        self.s.set_cursor(start);
        while self.s.cursor() < end {
            let mark = self.s.cursor();
            let mut cp = self.s.next();
            if cp == BACKSLASH {
                match ecma::unicode_escape_sequence(&mut self.s)? {
                    Some(ecp) => cp = ecp,
                    None => {
                        return Err(LexError::BadIdentifierEscape {
                            start,
                            at: mark - start,
                        });
                    }
                }
            }
            out.set(n, cp);
            n += 1;
        }
        out.truncate(n);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn lex(text: &str) -> Result<Vec<Token>, LexError> {
        tokenize(UnicodeString::from_utf8(text.as_bytes()))
    }

    fn kinds(text: &str) -> Vec<TokenKind> {
        lex(text).unwrap().into_iter().map(|t| t.kind).collect()
    }

    fn single_number(text: &str) -> Number {
        match kinds(text).as_slice() {
            [TokenKind::Number(n)] => *n,
            other => panic!("expected one number for {text:?}, got {other:?}"),
        }
    }

    fn single_string(text: &str) -> alloc::string::String {
        match lex(text).unwrap().as_slice() {
            [
                Token {
                    kind: TokenKind::String(s),
                    ..
                },
            ] => s.to_string_lossy(),
            other => panic!("expected one string for {text:?}, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert_eq!(lex("").unwrap(), Vec::new());
    }

    #[test]
    fn blank_input_is_an_error() {
        assert_eq!(lex("  \t\n").unwrap_err(), LexError::NoTokens);
    }

    #[test]
    fn comment_only_input_yields_no_tokens() {
        assert_eq!(lex("// nothing here\n").unwrap(), Vec::new());
        assert_eq!(lex("/* nothing */").unwrap(), Vec::new());
    }

    #[test]
    fn punctuators() {
        let toks = lex("{}[]:,").unwrap();
        let expect = [
            Punctuator::LeftBrace,
            Punctuator::RightBrace,
            Punctuator::LeftBracket,
            Punctuator::RightBracket,
            Punctuator::Colon,
            Punctuator::Comma,
        ];
        assert_eq!(toks.len(), 6);
        for (i, (tok, want)) in toks.iter().zip(expect).enumerate() {
            assert_eq!(tok.kind, TokenKind::Punctuator(want));
            assert_eq!((tok.start, tok.end), (i, i + 1));
        }
    }

    #[test]
    fn token_extents_stay_in_bounds() {
        let text = "{ a: [1, 'x', /*c*/ 0x2A], b: -Infinity }";
        let len = text.len(); // ASCII, so code points == bytes
        for tok in lex(text).unwrap() {
            assert!(tok.start <= tok.end && tok.end <= len, "{tok:?}");
        }
    }

    #[test]
    fn whitespace_includes_bom_and_unicode_spaces() {
        let toks = lex("\u{FEFF}\u{2000}true\u{00A0}").unwrap();
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].kind, TokenKind::Literal(Literal::True));
    }

    #[test]
    fn line_comment_runs_to_terminator() {
        assert_eq!(
            kinds("true // trailing\n"),
            [TokenKind::Literal(Literal::True)]
        );
        assert_eq!(
            kinds("// leading\nfalse"),
            [TokenKind::Literal(Literal::False)]
        );
    }

    #[test]
    fn block_comment_is_skipped() {
        assert_eq!(
            kinds("/* a *** b */ null"),
            [TokenKind::Literal(Literal::Null)]
        );
    }

    #[test]
    fn unterminated_block_comment() {
        assert_eq!(
            lex("/* open").unwrap_err(),
            LexError::UnterminatedBlockComment { start: 0 }
        );
    }

    #[test]
    fn lone_slash() {
        assert_eq!(
            lex("/ / comment").unwrap_err(),
            LexError::UnexpectedSlash { at: 0 }
        );
    }

    #[test]
    fn reserved_words() {
        assert_eq!(kinds("null"), [TokenKind::Literal(Literal::Null)]);
        assert_eq!(kinds("true"), [TokenKind::Literal(Literal::True)]);
        assert_eq!(kinds("false"), [TokenKind::Literal(Literal::False)]);
        assert_eq!(kinds("Infinity"), [TokenKind::Number(Number::Infinity)]);
        assert_eq!(kinds("NaN"), [TokenKind::Number(Number::NaN)]);
    }

    #[test]
    fn reserved_word_lookup_is_exact() {
        // A reserved word with identifier characters appended is a plain
        // identifier, not the reserved word plus junk.
        match kinds("nullx").as_slice() {
            [TokenKind::Identifier(id)] => assert_eq!(id.to_string_lossy(), "nullx"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn identifier_with_unicode_escape() {
        match kinds("\\u0041bc").as_slice() {
            [TokenKind::Identifier(id)] => assert_eq!(id.to_string_lossy(), "Abc"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn identifier_with_zwnj_and_dollar() {
        match kinds("$a\u{200C}b_1").as_slice() {
            [TokenKind::Identifier(id)] => {
                assert_eq!(id.to_string_lossy(), "$a\u{200C}b_1");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn bare_punctuation_is_rejected() {
        assert_eq!(
            lex("*").unwrap_err(),
            LexError::ExpectedIdentifierStart {
                at: 0,
                cp: u32::from(b'*')
            }
        );
    }

    #[test]
    fn hex_escape_in_identifier_is_rejected() {
        assert!(matches!(
            lex("a\\x41 b"),
            Err(LexError::ExpectedIdentifierStart { at: 1, .. })
        ));
    }

    // ---------------------------------------------------------------- strings

    #[test]
    fn plain_strings_both_quotes() {
        assert_eq!(single_string("'hello'"), "hello");
        assert_eq!(single_string("\"hello\""), "hello");
        assert_eq!(single_string("''"), "");
    }

    #[test]
    fn string_extent_excludes_quotes_on_start() {
        let toks = lex("'ab'").unwrap();
        assert_eq!((toks[0].start, toks[0].end), (1, 4));
    }

    #[test]
    fn single_character_escapes() {
        assert_eq!(single_string(r"'a\nb'"), "a\nb");
        assert_eq!(single_string(r"'a\tb'"), "a\tb");
        assert_eq!(single_string(r"'\b\f\r\v'"), "\u{8}\u{c}\r\u{b}");
        assert_eq!(single_string(r#"'\''"#), "'");
        assert_eq!(single_string(r#""\"""#), "\"");
        assert_eq!(single_string(r"'\\'"), "\\");
        assert_eq!(single_string(r"'\0'"), "\0");
    }

    #[test]
    fn non_escape_character_keeps_itself() {
        assert_eq!(single_string(r"'\q'"), "q");
    }

    #[test]
    fn hex_and_unicode_escapes() {
        assert_eq!(single_string(r"'\x41'"), "A");
        assert_eq!(single_string(r"'\u00E9'"), "é");
        assert_eq!(single_string(r"'\uD834\uDD1E'"), "𝄞");
    }

    #[test]
    fn escape_widens_narrow_source() {
        // ASCII source decodes at width 1; the escape forces width 4.
        match lex(r"'\uD834\uDD1E'").unwrap().as_slice() {
            [
                Token {
                    kind: TokenKind::String(s),
                    ..
                },
            ] => {
                assert_eq!(s.width(), crate::ustring::Width::Four);
                assert_eq!(s.len(), 1);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn line_continuation_is_elided() {
        assert_eq!(single_string("'a\\\nb'"), "ab");
        assert_eq!(single_string("'a\\\r\nb'"), "ab");
        assert_eq!(single_string("'a\\\u{2028}b'"), "ab");
    }

    #[test]
    fn unescaped_line_terminator_is_rejected() {
        assert_eq!(
            lex("'\n'").unwrap_err(),
            LexError::UnescapedLineTerminator {
                start: 1,
                at: 1,
                cp: 0x0A
            }
        );
    }

    #[test]
    fn unterminated_string() {
        assert_eq!(
            lex("'hello").unwrap_err(),
            LexError::UnterminatedString { start: 1 }
        );
        assert_eq!(
            lex(r"'a\'").unwrap_err(),
            LexError::UnterminatedString { start: 1 }
        );
    }

    #[test]
    fn bad_string_escapes() {
        assert!(matches!(lex(r"'\xqq'"), Err(LexError::BadHexEscape { .. })));
        assert!(matches!(
            lex(r"'\uqwer'"),
            Err(LexError::BadUnicodeEscape { .. })
        ));
        assert!(matches!(
            lex(r"'\uD800'"),
            Err(LexError::ExpectedLowSurrogate { .. })
        ));
        assert!(matches!(
            lex(r"'\uD800\u0061'"),
            Err(LexError::LowSurrogateRange { .. })
        ));
    }

    // ---------------------------------------------------------------- numbers

    #[test]
    fn integers() {
        assert_eq!(single_number("0"), Number::Integer(0));
        assert_eq!(single_number("42"), Number::Integer(42));
        assert_eq!(single_number("-17"), Number::Integer(-17));
        assert_eq!(single_number("+9"), Number::Integer(9));
    }

    #[test]
    fn hex_integers() {
        assert_eq!(single_number("0x2A"), Number::Integer(42));
        assert_eq!(single_number("0XdeadBEEF"), Number::Integer(0xDEAD_BEEF));
        assert_eq!(single_number("-0x10"), Number::Integer(-16));
    }

    #[test]
    fn floats() {
        assert_eq!(single_number("1.5"), Number::Float(1.5));
        assert_eq!(single_number("+.5e1"), Number::Float(5.0));
        assert_eq!(single_number(".25"), Number::Float(0.25));
        assert_eq!(single_number("1."), Number::Float(1.0));
        assert_eq!(single_number("1e3"), Number::Float(1000.0));
        assert_eq!(single_number("12e-2"), Number::Float(0.12));
        assert_eq!(single_number("1E+2"), Number::Float(100.0));
        assert_eq!(single_number("0e0"), Number::Float(0.0));
    }

    #[test]
    fn named_numbers() {
        assert_eq!(single_number("Infinity"), Number::Infinity);
        assert_eq!(single_number("-Infinity"), Number::NegInfinity);
        assert_eq!(single_number("+Infinity"), Number::Infinity);
        assert_eq!(single_number("NaN"), Number::NaN);
        assert_eq!(single_number("-NaN"), Number::NegNaN);
    }

    #[test]
    fn number_extents() {
        let toks = lex("[-Infinity, 0x2A]").unwrap();
        assert_eq!((toks[1].start, toks[1].end), (1, 10));
        assert_eq!((toks[3].start, toks[3].end), (12, 16));
    }

    #[test]
    fn zero_before_bracket_brace_comma() {
        assert!(matches!(
            kinds("[0]").as_slice(),
            [_, TokenKind::Number(Number::Integer(0)), _]
        ));
        assert!(matches!(
            kinds("[0,0]").as_slice(),
            [
                _,
                TokenKind::Number(Number::Integer(0)),
                _,
                TokenKind::Number(Number::Integer(0)),
                _
            ]
        ));
    }

    #[test]
    fn leading_zero_is_rejected() {
        assert_eq!(
            lex("0123").unwrap_err(),
            LexError::LeadingZero { start: 0 }
        );
    }

    #[test]
    fn number_error_matrix() {
        assert_eq!(
            lex("+-10e+0").unwrap_err(),
            LexError::DoubleSign { start: 0 }
        );
        assert_eq!(
            lex("10e+-0").unwrap_err(),
            LexError::DoubleExponentSign { start: 0, at: 3 }
        );
        assert_eq!(
            lex("1e2.3").unwrap_err(),
            LexError::FloatingPointExponent { start: 0, at: 3 }
        );
        assert_eq!(
            lex("0ee").unwrap_err(),
            LexError::HexDigitInExponent { start: 0 }
        );
        assert_eq!(
            lex("1f").unwrap_err(),
            LexError::HexInDecimal {
                start: 0,
                at: 1,
                found: 'f'
            }
        );
        assert_eq!(
            lex(".e").unwrap_err(),
            LexError::NoMantissaDigits { start: 0 }
        );
        assert_eq!(lex(".").unwrap_err(), LexError::NoDigits { start: 0 });
        assert_eq!(
            lex(".0e").unwrap_err(),
            LexError::NoExponentDigits { start: 0 }
        );
        assert_eq!(
            lex("1X").unwrap_err(),
            LexError::NumberFollowedBy {
                start: 0,
                at: 1,
                cp: u32::from(b'X')
            }
        );
        assert_eq!(
            lex("42 7up").unwrap_err(),
            LexError::NumberFollowedBy {
                start: 3,
                at: 4,
                cp: u32::from(b'u')
            }
        );
    }

    #[test]
    fn stray_signs_and_dots_inside_numbers() {
        assert_eq!(
            lex("1+2").unwrap_err(),
            LexError::BadDigit {
                start: 0,
                at: 1,
                cp: u32::from(b'+')
            }
        );
        assert_eq!(
            lex("0x.1").unwrap_err(),
            LexError::BadDigit {
                start: 0,
                at: 2,
                cp: u32::from(b'.')
            }
        );
    }

    #[test]
    fn i64_min_survives_accumulate_then_negate() {
        assert_eq!(
            single_number("-9223372036854775808"),
            Number::Integer(i64::MIN)
        );
    }

    #[test]
    fn huge_exponent_saturates_to_infinity() {
        assert_eq!(single_number("1e400"), Number::Float(f64::INFINITY));
        assert_eq!(single_number("1e-400"), Number::Float(0.0));
    }

    #[test]
    fn zero_mantissa_with_huge_exponent_terminates() {
        // The exponent accumulator saturates at i64::MAX for this input;
        // the multiply loop must still return promptly.
        assert_eq!(
            single_number("0e99999999999999999999"),
            Number::Float(0.0)
        );
        assert_eq!(
            single_number("0.0e99999999999999999999"),
            Number::Float(0.0)
        );
        assert_eq!(
            single_number("-0e99999999999999999999"),
            Number::Float(0.0)
        );
    }
}
