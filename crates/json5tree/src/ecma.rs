//! ECMAScript lexical predicates and escape-sequence matchers.
//!
//! The matchers mirror the ECMA-262 §7 productions the JSON5 grammar leans
//! on (`LineTerminator`, `EscapeSequence`, `IdentifierStart`, ...). Each one
//! operates on the tokeniser's [`UnicodeString`] cursor: on a match the
//! matched code points are consumed, on a rejection the cursor is restored
//! to where the matcher started. Matchers that can detect an outright
//! malformed escape (`\xQQ`, `\uQQQQ`, broken surrogate pairs) are fallible
//! and abort the tokenise with a [`LexError`].
//!
//! Unicode general categories come from the `unicode-general-category`
//! tables; this module only derives predicates from them.

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::{error::LexError, ustring::UnicodeString};

/// General category of a code point; values that are not Unicode scalars
/// (lone surrogates) report as unassigned.
fn category(cp: u32) -> GeneralCategory {
    char::from_u32(cp).map_or(GeneralCategory::Unassigned, get_general_category)
}

/// Value of an ASCII hex digit.
pub(crate) fn hex_value(cp: u32) -> Option<u32> {
    match cp {
        0x30..=0x39 => Some(cp - 0x30),
        0x41..=0x46 => Some(cp - 0x41 + 10),
        0x61..=0x66 => Some(cp - 0x61 + 10),
        _ => None,
    }
}

/// `LineTerminator`: LF, CR, LS, PS.
pub(crate) fn is_line_terminator(cp: u32) -> bool {
    matches!(cp, 0x0A | 0x0D | 0x2028 | 0x2029)
}

/// JSON5 `WhiteSpace`: the listed set plus anything in category `Zs`.
pub(crate) fn is_white_space(cp: u32) -> bool {
    matches!(
        cp,
        0x09 | 0x0A | 0x0B | 0x0C | 0x0D | 0x20 | 0xA0 | 0x2028 | 0x2029 | 0xFEFF
    ) || category(cp) == GeneralCategory::SpaceSeparator
}

/// Consumes one `LineTerminator`.
pub(crate) fn line_terminator(s: &mut UnicodeString) -> Option<u32> {
    let start = s.cursor();
    if s.available(1) {
        let cp = s.next();
        if is_line_terminator(cp) {
            return Some(cp);
        }
    }
    s.set_cursor(start);
    None
}

/// Consumes one `LineTerminatorSequence`; CR followed by LF counts as one
/// sequence and both are consumed.
pub(crate) fn line_terminator_sequence(s: &mut UnicodeString) -> Option<u32> {
    let start = s.cursor();
    if s.available(1) {
        let cp = s.next();
        match cp {
            0x0A | 0x2028 | 0x2029 => return Some(cp),
            0x0D => {
                if s.peek(s.cursor()) == 0x0A {
                    s.next();
                }
                return Some(cp);
            }
            _ => {}
        }
    }
    s.set_cursor(start);
    None
}

/// `SingleEscapeCharacter`, resolved to the code point it denotes.
fn single_escape_character(s: &mut UnicodeString) -> Option<u32> {
    let start = s.cursor();
    if s.available(1) {
        let resolved = match s.next() {
            0x27 => Some(0x27), // '
            0x22 => Some(0x22), // "
            0x5C => Some(0x5C), // \
            0x62 => Some(0x08), // b
            0x66 => Some(0x0C), // f
            0x6E => Some(0x0A), // n
            0x72 => Some(0x0D), // r
            0x74 => Some(0x09), // t
            0x76 => Some(0x0B), // v
            _ => None,
        };
        if resolved.is_some() {
            return resolved;
        }
    }
    s.set_cursor(start);
    None
}

/// `NonEscapeCharacter`: anything except a `SingleEscapeCharacter`, a
/// decimal digit, `x`, `u`, or a `LineTerminator`.
fn non_escape_character(s: &mut UnicodeString) -> Option<u32> {
    let start = s.cursor();
    if single_escape_character(s).is_some() {
        s.set_cursor(start);
        return None;
    }
    s.set_cursor(start);

    if s.available(1) {
        let cp = s.next();
        let excluded =
            (0x30..=0x39).contains(&cp) || cp == 0x78 || cp == 0x75 || is_line_terminator(cp);
        if !excluded {
            return Some(cp);
        }
    }
    s.set_cursor(start);
    None
}

/// `CharacterEscapeSequence`: a single-escape character or a non-escape
/// character.
fn character_escape_sequence(s: &mut UnicodeString) -> Option<u32> {
    single_escape_character(s).or_else(|| non_escape_character(s))
}

/// `HexEscapeSequence`: `xHH`. Two non-hex digits after the `x` are a hard
/// error; too little input to tell is a rejection.
fn hex_escape_sequence(s: &mut UnicodeString) -> Result<Option<u32>, LexError> {
    let start = s.cursor();
    if s.available(1) && s.next() == 0x78 {
        if s.available(2) {
            let at = s.cursor();
            let h1 = hex_value(s.next());
            let h2 = hex_value(s.next());
            return match (h1, h2) {
                (Some(h1), Some(h2)) => Ok(Some((h1 << 4) | h2)),
                _ => Err(LexError::BadHexEscape { at }),
            };
        }
    }
    s.set_cursor(start);
    Ok(None)
}

/// `UnicodeEscapeSequence`: `uHHHH`, combining UTF-16 surrogate pairs.
///
/// A high surrogate demands an immediately following `\uHHHH` low
/// surrogate; the pair resolves to one supplementary code point. Anything
/// else after a high surrogate, and any malformed `uHHHH`, is a hard error.
pub(crate) fn unicode_escape_sequence(s: &mut UnicodeString) -> Result<Option<u32>, LexError> {
    let start = s.cursor();
    if !(s.available(1) && s.next() == 0x75) {
        s.set_cursor(start);
        return Ok(None);
    }

    if !s.available(4) {
        return Err(LexError::BadUnicodeEscape { at: start });
    }
    let hs = read_hex4(s, LexError::BadUnicodeEscape { at: start })?;

    if (0xD800..=0xDBFF).contains(&hs) {
        // There must be a low surrogate following.
        let low_at = s.cursor();
        if !s.available(6) {
            return Err(LexError::ExpectedLowSurrogate { at: low_at });
        }
        if s.next() != 0x5C || s.next() != 0x75 {
            return Err(LexError::ExpectedLowSurrogate { at: low_at });
        }
        let ls = read_hex4(s, LexError::ExpectedLowSurrogate { at: low_at })?;
        if !(0xDC00..=0xDFFF).contains(&ls) {
            return Err(LexError::LowSurrogateRange { at: low_at });
        }
        return Ok(Some(0x10000 + (hs - 0xD800) * 0x400 + (ls - 0xDC00)));
    }

    Ok(Some(hs))
}

fn read_hex4(s: &mut UnicodeString, err: LexError) -> Result<u32, LexError> {
    let mut v = 0u32;
    for _ in 0..4 {
        match hex_value(s.next()) {
            Some(d) => v = (v << 4) | d,
            None => return Err(err),
        }
    }
    Ok(v)
}

/// `EscapeSequence`, resolved in order: `CharacterEscapeSequence`, `\0`,
/// `HexEscapeSequence`, `UnicodeEscapeSequence`.
pub(crate) fn escape_sequence(s: &mut UnicodeString) -> Result<Option<u32>, LexError> {
    if let Some(cp) = character_escape_sequence(s) {
        return Ok(Some(cp));
    }

    let start = s.cursor();
    if s.available(1) {
        if s.next() == 0x30 {
            return Ok(Some(0));
        }
        s.set_cursor(start);
    } else {
        return Ok(None);
    }

    if let Some(cp) = hex_escape_sequence(s)? {
        return Ok(Some(cp));
    }
    unicode_escape_sequence(s)
}

/// `IdentifierStart`: letters (`Lu Ll Lt Lm Lo Nl`), `$`, `_`, or a `\`
/// beginning a valid `UnicodeEscapeSequence` at the cursor.
///
/// `cp` is the already-consumed code point under test; in the escape case
/// the escape's code points are consumed as well.
pub(crate) fn is_identifier_start(cp: u32, s: &mut UnicodeString) -> Result<bool, LexError> {
    if cp == u32::from(b'$') || cp == u32::from(b'_') {
        return Ok(true);
    }
    if matches!(
        category(cp),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::LetterNumber
    ) {
        return Ok(true);
    }
    if cp == u32::from(b'\\') {
        return Ok(unicode_escape_sequence(s)?.is_some());
    }
    Ok(false)
}

/// `IdentifierPart`: `IdentifierStart`, combining marks (`Mn Mc`), digits
/// (`Nd`), connector punctuation (`Pc`), ZWJ, or ZWNJ.
pub(crate) fn is_identifier_part(cp: u32, s: &mut UnicodeString) -> Result<bool, LexError> {
    if is_identifier_start(cp, s)? {
        return Ok(true);
    }
    Ok(matches!(
        category(cp),
        GeneralCategory::NonspacingMark
            | GeneralCategory::SpacingMark
            | GeneralCategory::DecimalNumber
            | GeneralCategory::ConnectorPunctuation
    ) || cp == 0x200D
        || cp == 0x200C)
}
