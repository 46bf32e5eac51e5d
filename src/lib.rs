pub mod decode;
pub mod encode;
pub mod options;
pub mod path;
pub mod types;

pub use crate::encode::{to_bytes, write_json, write_json_into, IoOutput, Output};
pub use crate::options::{Indent, ReadMode, Separators, WriteConfig};
pub use crate::path::{cast_from_json, from_json, from_json_mut};
pub use crate::types::{cast, cast_at, cast_mut, Kind, Map, Value};

/// Parses a strict-JSON document. Any failure yields [`Value::Absent`].
///
/// ```
/// use json_tree::{read_json, Value};
///
/// assert_eq!(read_json("[1, 2]").as_array(), Some(&[Value::Int(1), Value::Int(2)][..]));
/// assert!(read_json("not json").is_absent());
/// ```
pub fn read_json(text: impl AsRef<[u8]>) -> Value {
    decode::read_with(text.as_ref(), b"", ReadMode::Strict, None)
}

/// [`read_json`] with a dialect selector and an optional guard prefix,
/// stripped from the start of `text` when present.
pub fn read_json_with(text: impl AsRef<[u8]>, skip: impl AsRef<[u8]>, mode: ReadMode) -> Value {
    decode::read_with(text.as_ref(), skip.as_ref(), mode, None)
}

/// Reads the first document out of a buffer that may hold several,
/// reporting how many bytes it occupied (trailing whitespace included).
/// A failed parse reports zero.
pub fn read_json_serialized(text: impl AsRef<[u8]>, skip: impl AsRef<[u8]>) -> (Value, usize) {
    let mut consumed = 0;
    let value = decode::read_with(
        text.as_ref(),
        skip.as_ref(),
        ReadMode::Serialized,
        Some(&mut consumed),
    );
    (value, consumed)
}
