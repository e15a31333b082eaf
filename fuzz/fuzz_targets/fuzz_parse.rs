#![no_main]

use json5tree::{EmitMode, generate, parse_bytes};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Parsing must never panic, whatever the bytes. Anything that parses
    // and generates must reparse, unless a string value holds a raw
    // U+2028/U+2029 (emitted verbatim, then rejected as an unescaped
    // LineTerminator on the way back in).
    if let Ok(value) = parse_bytes(data) {
        if let Ok(text) = generate(&value, EmitMode::Json5) {
            if !text.contains(['\u{2028}', '\u{2029}']) {
                parse_bytes(text.as_bytes()).expect("generated JSON5 must reparse");
            }
        }
    }
});
