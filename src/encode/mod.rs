//! Value-to-text serializer.

mod measure;
mod output;
mod writer;

pub use output::{IoOutput, Output};

use crate::options::{Indent, WriteConfig};
use crate::types::Value;

use writer::Writer;

/// Renders `value` into `out` under the given layout.
///
/// Empty separators fall back to defaults before writing: a missing key
/// separator becomes `": "`, a missing item separator becomes `", "`
/// without indentation and `","` with it (the line break supplies the
/// visual gap there).
pub fn write_json<O: Output + ?Sized>(out: &mut O, value: &Value, config: &WriteConfig) {
    let spaces;
    let indent: Option<&[u8]> = match &config.indent {
        Indent::None => None,
        Indent::Spaces(count) => {
            spaces = vec![b' '; *count];
            Some(&spaces)
        }
        Indent::Text(text) => Some(text.as_bytes()),
    };

    let key: &[u8] = if config.separators.key.is_empty() {
        b": "
    } else {
        config.separators.key.as_bytes()
    };
    let item: &[u8] = if config.separators.item.is_empty() {
        if indent.is_none() {
            b", "
        } else {
            b","
        }
    } else {
        config.separators.item.as_bytes()
    };

    let mut writer = Writer {
        out,
        item,
        key,
        alt_item: config.separators.alt_item.as_bytes(),
        indent,
        inline_single_item: config.inline_single_item,
        horiz_space: config.horiz_space,
    };
    writer.write_value(value, 0, false);
}

/// [`write_json`] into a fresh buffer.
pub fn to_bytes(value: &Value, config: &WriteConfig) -> Vec<u8> {
    let mut out = Vec::new();
    write_json(&mut out, value, config);
    out
}

/// [`write_json`] into an existing buffer, clearing it first.
pub fn write_json_into(buffer: &mut Vec<u8>, value: &Value, config: &WriteConfig) {
    buffer.clear();
    write_json(buffer, value, config);
}
