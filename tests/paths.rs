use json_tree::{cast_from_json, from_json, from_json_mut, read_json, Map, Value};
use rstest::rstest;

fn sample() -> Value {
    read_json(
        r#"{
            "server": {"host": "localhost", "port": 8080, "tls": {"enabled": true}},
            "debug": false
        }"#,
    )
}

#[rstest]
#[case("debug", Value::Bool(false))]
#[case("server.host", Value::from("localhost"))]
#[case("server.port", Value::Int(8080))]
#[case("server.tls.enabled", Value::Bool(true))]
fn dotted_lookup(#[case] path: &str, #[case] expected: Value) {
    assert_eq!(from_json(&sample(), path), Some(&expected));
}

#[rstest]
#[case("missing")]
#[case("server.missing")]
#[case("server.host.deeper")] // descends into a string
#[case("debug.anything")]
fn lookup_misses(#[case] path: &str) {
    assert_eq!(from_json(&sample(), path), None);
}

#[rstest]
fn float_leaf_through_three_levels() {
    let root = read_json(r#"{"key": {"sub1": {"sub2": 3.14}}}"#);
    assert_eq!(from_json(&root, "key.sub1.sub2"), Some(&Value::Float(3.14)));
    assert_eq!(from_json(&root, "key.subX.sub2"), None);
    assert_eq!(from_json(&root, "key.sub1.sub2.deeper"), None);
}

#[rstest]
fn non_object_root_finds_nothing() {
    assert_eq!(from_json(&Value::Int(3), "a"), None);
    assert_eq!(from_json(&Value::Absent, "a"), None);
    assert_eq!(from_json(&read_json("[1]"), "0"), None);
}

#[rstest]
fn empty_segments_are_literal_keys() {
    let root = read_json(r#"{"": {"inner": 1, "": 2}}"#);
    assert_eq!(from_json(&root, ".inner"), Some(&Value::Int(1)));
    assert_eq!(from_json(&root, "."), Some(&Value::Int(2)));
    assert_eq!(from_json(&root, ""), root.get(""));
    assert_eq!(from_json(&sample(), "server..port"), None);
}

#[rstest]
fn typed_lookup_filters_by_variant() {
    let root = sample();
    assert_eq!(cast_from_json::<i64>(&root, "server.port"), Some(&8080));
    assert_eq!(cast_from_json::<bool>(&root, "server.port"), None);
    assert_eq!(
        cast_from_json::<Vec<u8>>(&root, "server.host").map(Vec::as_slice),
        Some(b"localhost" as &[u8])
    );
    assert!(cast_from_json::<Map>(&root, "server.tls").is_some());
}

#[rstest]
fn mutation_through_a_path() {
    let mut root = sample();
    if let Some(port) = from_json_mut(&mut root, "server.port") {
        *port = Value::Int(9090);
    }
    assert_eq!(from_json(&root, "server.port"), Some(&Value::Int(9090)));
}

#[rstest]
fn map_lookup_mirrors_free_function() {
    let root = sample();
    let object = root.as_object().unwrap();
    assert_eq!(object.lookup("server.host"), from_json(&root, "server.host"));
    assert_eq!(object.cast::<bool>("debug"), Some(&false));
}
