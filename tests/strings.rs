use json_tree::{read_json, read_json_with, to_bytes, ReadMode, Value, WriteConfig};
use rstest::rstest;

#[rstest]
#[case(r#""plain""#, b"plain")]
#[case(r#""tab\there""#, b"tab\there")]
#[case(r#""line\nbreak""#, b"line\nbreak")]
#[case(r#""quote\" slash\/ back\\""#, b"quote\" slash/ back\\")]
#[case(r#""\b\f\r""#, b"\x08\x0c\r")]
#[case(r#""Aé""#, "A\u{e9}".as_bytes())]
fn strict_escapes(#[case] text: &str, #[case] expected: &[u8]) {
    assert_eq!(read_json(text).as_str(), Some(expected));
}

#[rstest]
fn surrogate_pair_decodes_to_one_code_point() {
    let value = read_json(r#""\uD834\uDD1E""#);
    assert_eq!(value.as_utf8(), Some("\u{1D11E}"));
}

#[rstest]
#[case(r#""\uD800""#)]
#[case(r#""\uDD1E""#)]
#[case(r#""\uD800\uD800""#)]
fn unpaired_surrogates_become_replacement(#[case] text: &str) {
    let value = read_json(text);
    let decoded = value.as_utf8().unwrap();
    assert!(decoded.chars().all(|ch| ch == '\u{FFFD}'));
    assert!(!decoded.is_empty());
}

#[rstest]
fn invalid_utf8_survives_a_round_trip() {
    let mut text = b"\"ab".to_vec();
    text.extend_from_slice(&[0xC0, 0xAF, 0xFF]);
    text.push(b'"');

    let value = read_json(&text);
    assert_eq!(value.as_str(), Some(b"ab\xC0\xAF\xFF" as &[u8]));
    assert_eq!(value.as_utf8(), None);

    // the writer copies string bytes verbatim
    assert_eq!(to_bytes(&value, &WriteConfig::CONCISE), text);
}

#[rstest]
fn raw_control_bytes_fail_strict_but_not_ecma() {
    let text = "\"a\u{1}b\"";
    assert!(read_json(text).is_absent());
    assert_eq!(
        read_json_with(text, "", ReadMode::Ecma).as_str(),
        Some(b"a\x01b" as &[u8])
    );
}

#[rstest]
fn ecma_string_extensions() {
    let mode = ReadMode::Ecma;
    assert_eq!(
        read_json_with(r#"'it''s'"#, "", mode),
        Value::from("it") // trailing garbage ignored after the first string
    );
    assert_eq!(
        read_json_with(r#"'\x41\v'"#, "", mode).as_str(),
        Some(b"A\x0b" as &[u8])
    );
    assert_eq!(
        read_json_with("'split\\\nline'", "", mode).as_str(),
        Some(b"splitline" as &[u8])
    );
}

#[rstest]
fn ecma_unterminated_string_keeps_prefix() {
    let value = read_json_with("\"partial conten", "", ReadMode::Ecma);
    assert_eq!(value.as_str(), Some(b"partial conten" as &[u8]));
}

#[rstest]
fn control_bytes_are_escaped_on_output() {
    let value = Value::from(&b"a\x01\x1f\tb"[..]);
    assert_eq!(
        to_bytes(&value, &WriteConfig::CONCISE),
        b"\"a\\u0001\\u001f\\tb\""
    );
}
