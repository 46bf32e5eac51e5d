use crate::types::{Kind, Map, Value};

/// Resolves a dotted path (`"key.sub1.sub2"`) against an object value.
///
/// The first segment is looked up in the root object; each further segment
/// requires the value reached so far to be an object. Anything else — a
/// non-object root, a missing key, descending into a scalar — is `None`.
/// An empty path (or empty segment from doubled/leading/trailing dots)
/// looks up the empty string as a literal key.
///
/// ```
/// use json_tree::{from_json, read_json, Value};
///
/// let root = read_json(r#"{"key": {"sub": 3}}"#);
/// assert_eq!(from_json(&root, "key.sub"), Some(&Value::Int(3)));
/// assert_eq!(from_json(&root, "key.nope"), None);
/// ```
pub fn from_json<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    lookup(root.as_object()?, path)
}

pub fn from_json_mut<'a>(root: &'a mut Value, path: &str) -> Option<&'a mut Value> {
    lookup_mut(root.as_object_mut()?, path)
}

/// [`from_json`] with the located value additionally cast to `K`.
pub fn cast_from_json<'a, K: Kind>(root: &'a Value, path: &str) -> Option<&'a K> {
    from_json(root, path).and_then(K::cast)
}

pub(crate) fn lookup<'a>(object: &'a Map, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let first = segments.next()?;
    let mut current = object.get(first.as_bytes())?;
    for segment in segments {
        current = current.as_object()?.get(segment.as_bytes())?;
    }
    Some(current)
}

pub(crate) fn lookup_mut<'a>(object: &'a mut Map, path: &str) -> Option<&'a mut Value> {
    let mut segments = path.split('.');
    let first = segments.next()?;
    let mut current = object.get_mut(first.as_bytes())?;
    for segment in segments {
        current = current.as_object_mut()?.get_mut(segment.as_bytes())?;
    }
    Some(current)
}
