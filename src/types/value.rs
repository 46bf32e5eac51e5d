use std::fmt;

use crate::options::WriteConfig;
use crate::types::{Kind, Map};

/// A single JSON document node.
///
/// `Absent` is the "no value here" sentinel: it is what a failed parse or a
/// missed lookup produces, it is distinct from `Null`, and the writer
/// renders it as a literal `undefined` token. String payloads are raw byte
/// sequences; the model never validates UTF-8, so deliberately malformed
/// input survives a parse/write round trip unchanged.
///
/// Variant order is significant: derived comparisons order by tag first,
/// then payload.
#[derive(Debug, Clone, Default, PartialEq, PartialOrd)]
pub enum Value {
    #[default]
    Absent,
    Null,
    Str(Vec<u8>),
    Int(i64),
    Float(f64),
    Bool(bool),
    Object(Map),
    Array(Vec<Value>),
}

impl Value {
    pub const fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub const fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    pub const fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// String payload as raw bytes.
    pub fn as_str(&self) -> Option<&[u8]> {
        match self {
            Value::Str(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// String payload as `&str`, when it happens to be valid UTF-8.
    pub fn as_utf8(&self) -> Option<&str> {
        match self {
            Value::Str(bytes) => std::str::from_utf8(bytes).ok(),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Member of an object value; `None` for anything else.
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&Value> {
        self.as_object()?.get(key)
    }

    /// Generic variant-exact accessor; see [`Kind`].
    pub fn cast<K: Kind>(&self) -> Option<&K> {
        K::cast(self)
    }

    pub fn cast_mut<K: Kind>(&mut self) -> Option<&mut K> {
        K::cast_mut(self)
    }

    /// Casts the member `key` of an object value.
    pub fn cast_at<K: Kind>(&self, key: impl AsRef<[u8]>) -> Option<&K> {
        self.get(key).and_then(K::cast)
    }

    /// Replaces `self` with `Absent` and hands back the old value.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Absent => "absent",
            Value::Null => "null",
            Value::Str(_) => "string",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Bool(_) => "boolean",
            Value::Object(_) => "object",
            Value::Array(_) => "array",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = crate::encode::to_bytes(self, &WriteConfig::CONCISE);
        f.write_str(&String::from_utf8_lossy(&bytes))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Int(value.into())
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Int(value.into())
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Int(value.into())
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Int(value.into())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value.into())
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.as_bytes().to_vec())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value.into_bytes())
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Str(value.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Str(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Object(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(flag) => Value::Bool(flag),
            serde_json::Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    Value::Int(int)
                } else if let Some(float) = number.as_f64() {
                    Value::Float(float)
                } else {
                    Value::Null
                }
            }
            serde_json::Value::String(text) => Value::Str(text.into_bytes()),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => {
                let mut map = Map::with_capacity(entries.len());
                for (key, item) in entries {
                    map.set(key.as_bytes(), Value::from(item));
                }
                Value::Object(map)
            }
        }
    }
}

/// Lossy: `Absent` and non-finite floats become `null`, non-UTF-8 string
/// bytes are replaced.
impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Absent | Value::Null => serde_json::Value::Null,
            Value::Bool(flag) => serde_json::Value::Bool(flag),
            Value::Int(int) => serde_json::Value::Number(int.into()),
            Value::Float(float) => serde_json::Number::from_f64(float)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Str(bytes) => {
                serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
            }
            Value::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Value::Object(map) => {
                let mut entries = serde_json::Map::with_capacity(map.len());
                for (key, item) in map {
                    entries.insert(String::from_utf8_lossy(&key).into_owned(), item.into());
                }
                serde_json::Value::Object(entries)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Value;
    use crate::types::Map;

    #[rstest::rstest]
    fn test_variant_accessors() {
        let value = Value::from("text");
        assert_eq!(value.as_str(), Some(b"text" as &[u8]));
        assert_eq!(value.as_utf8(), Some("text"));
        assert_eq!(value.as_int(), None);

        let value = Value::from(42i64);
        assert_eq!(value.as_int(), Some(42));
        assert_eq!(value.as_float(), None);

        let value = Value::from(2.5f64);
        assert_eq!(value.as_float(), Some(2.5));

        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::Absent.type_name(), "absent");
        assert!(Value::default().is_absent());
    }

    #[rstest::rstest]
    fn test_as_utf8_rejects_invalid_bytes() {
        let value = Value::Str(vec![0xFF, 0xFE]);
        assert_eq!(value.as_utf8(), None);
        assert_eq!(value.as_str(), Some(&[0xFF, 0xFE][..]));
    }

    #[rstest::rstest]
    fn test_structural_ordering_tag_first() {
        assert!(Value::Absent < Value::Null);
        assert!(Value::Null < Value::Str(Vec::new()));
        assert!(Value::Str(b"a".to_vec()) < Value::Str(b"b".to_vec()));
        assert!(Value::Int(2) < Value::Float(1.0));
        assert!(Value::Int(1) < Value::Int(2));
    }

    #[rstest::rstest]
    fn test_get_and_cast_at() {
        let map: Map = [("answer", 42i64)].into_iter().collect();
        let value = Value::Object(map);
        assert_eq!(value.get("answer"), Some(&Value::Int(42)));
        assert_eq!(value.cast_at::<i64>("answer"), Some(&42));
        assert_eq!(value.cast_at::<bool>("answer"), None);
        assert_eq!(Value::Null.get("answer"), None);
    }

    #[rstest::rstest]
    fn test_take_leaves_absent() {
        let mut value = Value::from("gone");
        let taken = value.take();
        assert!(value.is_absent());
        assert_eq!(taken.as_str(), Some(b"gone" as &[u8]));
    }

    #[rstest::rstest]
    fn test_serde_json_round_trip() {
        let json = json!({"a": [1, 2.5, null], "b": {"c": true}});
        let value = Value::from(json.clone());
        let back: serde_json::Value = value.into();
        assert_eq!(back, json);
    }

    #[rstest::rstest]
    fn test_serde_json_lossy_cases() {
        let absent: serde_json::Value = Value::Absent.into();
        assert_eq!(absent, json!(null));

        let nan: serde_json::Value = Value::Float(f64::NAN).into();
        assert_eq!(nan, json!(null));

        let raw: serde_json::Value = Value::Str(vec![0xFF]).into();
        assert_eq!(raw, json!("\u{FFFD}"));
    }

    #[rstest::rstest]
    fn test_display_uses_concise_layout() {
        let value = crate::read_json(r#"{"a": [1, 2], "b": "x"}"#);
        assert_eq!(value.to_string(), r#"{"a":[1,2],"b":"x"}"#);
    }
}
