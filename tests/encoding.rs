use std::borrow::Cow;

use json_tree::{
    read_json, to_bytes, write_json, write_json_into, Indent, IoOutput, Output, Separators, Value,
    WriteConfig,
};
use rstest::rstest;

fn sample() -> Value {
    read_json(r#"{"name": "value", "list": [1, 2, 3], "nested": {"flag": true}}"#)
}

#[rstest]
fn concise_layout() {
    assert_eq!(
        to_bytes(&sample(), &WriteConfig::CONCISE),
        br#"{"name":"value","list":[1,2,3],"nested":{"flag":true}}"#
    );
}

#[rstest]
fn small_documents_collapse_to_one_line() {
    assert_eq!(
        to_bytes(&sample(), &WriteConfig::TWO_SPACES),
        br#"{"name": "value", "list": [1, 2, 3], "nested": {"flag": true}}"#
    );
}

#[rstest]
fn tab_layout_with_tight_budget() {
    let config = WriteConfig::TAB.with_horiz_space(10);
    assert_eq!(
        to_bytes(&sample(), &config),
        b"{\n\t\"name\": \"value\",\n\t\"list\": [1, 2, 3],\n\t\"nested\": {\"flag\": true}\n}"
    );
}

#[rstest]
fn two_space_nested_multiline() {
    let config = WriteConfig::TWO_SPACES
        .with_horiz_space(0)
        .with_inline_single_item(false);
    let value = read_json(r#"{"a": [1, 2]}"#);
    assert_eq!(
        to_bytes(&value, &config),
        b"{\n  \"a\": [\n    1,\n    2\n  ]\n}"
    );
}

#[rstest]
fn zero_width_indent_still_breaks_lines() {
    let config = WriteConfig::TWO_SPACES
        .with_indent(Indent::Spaces(0))
        .with_horiz_space(0)
        .with_inline_single_item(false);
    let value = read_json(r#"{"a": 1, "b": 2}"#);
    assert_eq!(to_bytes(&value, &config), b"{\n\"a\": 1,\n\"b\": 2\n}");
}

#[rstest]
fn empty_containers() {
    let fits = WriteConfig::TWO_SPACES;
    assert_eq!(to_bytes(&read_json("{}"), &fits), b"{}");
    assert_eq!(to_bytes(&read_json("[]"), &fits), b"[]");

    // over budget and not allowed to inline, the braces land on two lines
    let cramped = WriteConfig::TWO_SPACES
        .with_horiz_space(0)
        .with_inline_single_item(false);
    assert_eq!(to_bytes(&read_json("{}"), &cramped), b"{\n}");

    let cramped_inline = WriteConfig::TWO_SPACES.with_horiz_space(0);
    assert_eq!(to_bytes(&read_json("{}"), &cramped_inline), b"{}");
}

#[rstest]
fn budget_decides_between_one_line_and_multiline() {
    let value = read_json(r#"{"a": 1}"#);
    let roomy = WriteConfig::TWO_SPACES.with_inline_single_item(false);
    assert_eq!(to_bytes(&value, &roomy), br#"{"a": 1}"#);

    let cramped = roomy.with_horiz_space(0);
    assert_eq!(to_bytes(&value, &cramped), b"{\n  \"a\": 1\n}");
}

#[rstest]
fn single_item_containers_stay_inline() {
    let config = WriteConfig::TWO_SPACES.with_horiz_space(0);
    assert_eq!(to_bytes(&read_json("[42]"), &config), b"[42]");
    assert_eq!(
        to_bytes(&read_json(r#"{"a": 1}"#), &config),
        br#"{"a": 1}"#
    );
}

#[rstest]
fn scalar_only_array_stays_on_one_line() {
    let config = WriteConfig::TWO_SPACES.with_horiz_space(0);
    let value = read_json("[1, 2.5, null, true]");
    assert_eq!(to_bytes(&value, &config), b"[1, 2.5, null, true]");

    // one string in the mix forces the multi-line layout
    let value = read_json(r#"[1, "x"]"#);
    assert_eq!(to_bytes(&value, &config), b"[\n  1,\n  \"x\"\n]");
}

#[rstest]
fn absent_renders_as_undefined_token() {
    assert_eq!(to_bytes(&Value::Absent, &WriteConfig::CONCISE), b"undefined");

    let items = Value::Array(vec![Value::Absent]);
    assert_eq!(
        to_bytes(&items, &WriteConfig::TWO_SPACES),
        b"[undefined]"
    );
}

#[rstest]
#[case(Value::Int(5), b"5" as &[u8])]
#[case(Value::Int(-12), b"-12")]
#[case(Value::Float(2.5), b"2.5")]
#[case(Value::Float(1.0), b"1.0")]
#[case(Value::Float(f64::NAN), b"NaN")]
#[case(Value::Bool(false), b"false")]
#[case(Value::Null, b"null")]
fn scalar_tokens(#[case] value: Value, #[case] expected: &[u8]) {
    assert_eq!(to_bytes(&value, &WriteConfig::CONCISE), expected);
}

#[rstest]
fn empty_separators_get_defaults() {
    let config = WriteConfig {
        indent: Indent::None,
        separators: Separators {
            item: Cow::Borrowed(""),
            key: Cow::Borrowed(""),
            alt_item: Cow::Borrowed(","),
        },
        inline_single_item: false,
        horiz_space: 0,
    };
    let value = read_json(r#"{"a": 1, "b": 2}"#);
    assert_eq!(to_bytes(&value, &config), br#"{"a": 1, "b": 2}"#);
}

#[rstest]
fn io_sink_collects_output() {
    let mut sink = IoOutput::new(Vec::new());
    write_json(&mut sink, &read_json("[1, 2]"), &WriteConfig::CONCISE);
    assert_eq!(sink.into_inner(), b"[1,2]");
}

#[rstest]
fn custom_sink_through_trait_object() {
    struct Counter {
        bytes: usize,
    }

    impl Output for Counter {
        fn write(&mut self, bytes: &[u8]) {
            self.bytes += bytes.len();
        }
    }

    let value = sample();
    let mut counter = Counter { bytes: 0 };
    let sink: &mut dyn Output = &mut counter;
    write_json(sink, &value, &WriteConfig::TWO_SPACES);
    assert_eq!(
        counter.bytes,
        to_bytes(&value, &WriteConfig::TWO_SPACES).len()
    );
}

#[rstest]
fn write_into_clears_the_buffer() {
    let mut buffer = b"stale bytes".to_vec();
    write_json_into(&mut buffer, &Value::Null, &WriteConfig::CONCISE);
    assert_eq!(buffer, b"null");
}
