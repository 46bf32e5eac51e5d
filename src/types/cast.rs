use crate::types::{Map, Value};

mod sealed {
    use crate::types::{Map, Value};

    pub trait Sealed {}

    impl Sealed for Vec<u8> {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
    impl Sealed for bool {}
    impl Sealed for Map {}
    impl Sealed for Vec<Value> {}
}

/// Payload type of exactly one [`Value`] variant.
///
/// `cast` is variant-exact: an `i64` request against a `Float` is a miss,
/// not a conversion. Absence is the only failure signal.
///
/// ```
/// use json_tree::{cast, read_json, Map};
///
/// let value = read_json(r#"{"a": 1}"#);
/// assert!(cast::<Map>(&value).is_some());
/// assert!(cast::<i64>(&value).is_none());
/// ```
pub trait Kind: sealed::Sealed {
    fn cast(value: &Value) -> Option<&Self>;
    fn cast_mut(value: &mut Value) -> Option<&mut Self>;
}

impl Kind for Vec<u8> {
    fn cast(value: &Value) -> Option<&Self> {
        match value {
            Value::Str(bytes) => Some(bytes),
            _ => None,
        }
    }

    fn cast_mut(value: &mut Value) -> Option<&mut Self> {
        match value {
            Value::Str(bytes) => Some(bytes),
            _ => None,
        }
    }
}

impl Kind for i64 {
    fn cast(value: &Value) -> Option<&Self> {
        match value {
            Value::Int(int) => Some(int),
            _ => None,
        }
    }

    fn cast_mut(value: &mut Value) -> Option<&mut Self> {
        match value {
            Value::Int(int) => Some(int),
            _ => None,
        }
    }
}

impl Kind for f64 {
    fn cast(value: &Value) -> Option<&Self> {
        match value {
            Value::Float(float) => Some(float),
            _ => None,
        }
    }

    fn cast_mut(value: &mut Value) -> Option<&mut Self> {
        match value {
            Value::Float(float) => Some(float),
            _ => None,
        }
    }
}

impl Kind for bool {
    fn cast(value: &Value) -> Option<&Self> {
        match value {
            Value::Bool(flag) => Some(flag),
            _ => None,
        }
    }

    fn cast_mut(value: &mut Value) -> Option<&mut Self> {
        match value {
            Value::Bool(flag) => Some(flag),
            _ => None,
        }
    }
}

impl Kind for Map {
    fn cast(value: &Value) -> Option<&Self> {
        match value {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    fn cast_mut(value: &mut Value) -> Option<&mut Self> {
        match value {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }
}

impl Kind for Vec<Value> {
    fn cast(value: &Value) -> Option<&Self> {
        match value {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    fn cast_mut(value: &mut Value) -> Option<&mut Self> {
        match value {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }
}

pub fn cast<K: Kind>(value: &Value) -> Option<&K> {
    K::cast(value)
}

pub fn cast_mut<K: Kind>(value: &mut Value) -> Option<&mut K> {
    K::cast_mut(value)
}

/// Object-plus-key form of [`cast`].
pub fn cast_at<'a, K: Kind>(object: &'a Map, key: impl AsRef<[u8]>) -> Option<&'a K> {
    object.get(key).and_then(K::cast)
}
