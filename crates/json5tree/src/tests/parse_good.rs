//! End-to-end parses of well-formed documents.

use alloc::{string::ToString, vec, vec::Vec};

use crate::{EmitMode, Literal, Member, MemberName, Number, Value, generate, parse_bytes, parse_str};

fn obj(members: Vec<(MemberName, Value)>) -> Value {
    Value::Object(
        members
            .into_iter()
            .map(|(name, value)| Member { name, value })
            .collect(),
    )
}

fn ident(name: &str) -> MemberName {
    MemberName::Identifier(name.to_string())
}

#[test]
fn scalar_documents() {
    assert_eq!(parse_str("true").unwrap(), Value::Boolean(true));
    assert_eq!(parse_str("false").unwrap(), Value::Boolean(false));
    assert_eq!(parse_str("null").unwrap(), Value::Null);
}

#[test]
fn array_with_trailing_comma_and_whitespace() {
    assert_eq!(
        parse_str("  [1, 2, 3,]\t\n").unwrap(),
        Value::Array([1i64, 2, 3].into_iter().map(Value::from).collect())
    );
}

#[test]
fn object_with_mixed_name_kinds() {
    assert_eq!(
        parse_str("{ a: 1, 'b': 2, \"c\": Infinity }").unwrap(),
        obj(vec![
            (ident("a"), Value::from(1i64)),
            (MemberName::String("b".into()), Value::from(2i64)),
            (
                MemberName::String("c".into()),
                Value::Number(Number::Infinity)
            ),
        ])
    );
}

#[test]
fn number_forms() {
    assert_eq!(parse_str("0x2A").unwrap(), Value::from(42i64));
    assert_eq!(parse_str("+.5e1").unwrap(), Value::from(5.0f64));
    assert_eq!(
        parse_str("-Infinity").unwrap(),
        Value::Number(Number::NegInfinity)
    );
    assert_eq!(parse_str("-NaN").unwrap(), Value::Number(Number::NegNaN));
    assert_eq!(parse_str("1e3").unwrap(), Value::from(1000.0f64));
}

#[test]
fn string_with_escape() {
    assert_eq!(
        parse_str("'hello\\nworld'").unwrap(),
        Value::from("hello\nworld")
    );
}

#[test]
fn empty_containers() {
    assert_eq!(parse_str("{}").unwrap(), Value::Object(Vec::new()));
    assert_eq!(parse_str("[]").unwrap(), Value::Array(Vec::new()));
}

#[test]
fn comments_everywhere() {
    let text = "// header\n{ // open\n  a /* inline */ : [1, /* two */ 2], // pair\n} // done";
    assert_eq!(
        parse_str(text).unwrap(),
        obj(vec![(
            ident("a"),
            Value::Array(vec![Value::from(1i64), Value::from(2i64)])
        )])
    );
}

#[test]
fn byte_order_mark_is_whitespace() {
    assert_eq!(parse_bytes(b"\xEF\xBB\xBF[1]").unwrap().as_array().unwrap().len(), 1);
}

#[test]
fn unicode_identifier_keys_and_astral_strings() {
    let v = parse_str("{ caf\u{E9}: '\u{1D11E}' }").unwrap();
    let members = v.as_object().unwrap();
    assert_eq!(members[0].name, ident("caf\u{E9}"));
    assert_eq!(members[0].value, Value::from("\u{1D11E}"));
}

#[test]
fn escaped_identifier_key() {
    let v = parse_str("{ \\u0061bc: 1 }").unwrap();
    assert_eq!(v.as_object().unwrap()[0].name, ident("abc"));
}

#[test]
fn surrogate_pair_escape_in_string() {
    assert_eq!(
        parse_str("'\\uD834\\uDD1E'").unwrap(),
        Value::from("\u{1D11E}")
    );
}

#[test]
fn literal_member_names_round_trip() {
    let text = "{ null: 1, true: 2, false: 3 }";
    let v = parse_str(text).unwrap();
    let names: Vec<_> = v
        .as_object()
        .unwrap()
        .iter()
        .map(|m| m.name.clone())
        .collect();
    assert_eq!(
        names,
        [
            MemberName::Literal(Literal::Null),
            MemberName::Literal(Literal::True),
            MemberName::Literal(Literal::False),
        ]
    );

    let emitted = generate(&v, EmitMode::Json5).unwrap();
    assert_eq!(parse_str(&emitted).unwrap(), v);
}

#[test]
fn deeply_nested_structures() {
    let v = parse_str("[[[[[{ a: [{ b: [0x0] }] }]]]]]").unwrap();
    let mut cur = &v;
    for _ in 0..5 {
        cur = &cur.as_array().unwrap()[0];
    }
    assert!(cur.is_object());
}

#[test]
fn malformed_utf8_inside_string_is_replaced() {
    // 0x80 is a bare continuation byte.
    let v = parse_bytes(b"'a\x80b'").unwrap();
    assert_eq!(v, Value::from("a\u{FFFD}b"));
}

#[test]
fn generated_json5_reparses_to_the_same_tree() {
    let text = "{ a: [1, 2.5, -0x10], 'b c': 'x\\ty', nested: { deep: -Infinity }, e: [] }";
    let v = parse_str(text).unwrap();
    let emitted = generate(&v, EmitMode::Json5).unwrap();
    assert_eq!(parse_str(&emitted).unwrap(), v);
}

#[test]
fn strict_json_output_for_plain_trees() {
    let v = parse_str("{ 'a': [1, true, null, 'x'] }").unwrap();
    let emitted = generate(&v, EmitMode::Json).unwrap();
    assert_eq!(
        emitted,
        "{\n  \"a\": [\n    1,\n    true,\n    null,\n    \"x\"\n  ]\n}"
    );
    assert_eq!(parse_str(&emitted).unwrap(), v);
}
