use crate::types::{Map, Value};

use super::measure::Budget;
use super::output::Output;

/// Layout-applying serializer, working from separators and indent units
/// already normalized by [`write_json`](super::write_json).
pub(super) struct Writer<'a, O: Output + ?Sized> {
    pub out: &'a mut O,
    pub item: &'a [u8],
    pub key: &'a [u8],
    pub alt_item: &'a [u8],
    /// `None` suppresses line breaks entirely; an empty unit still breaks
    /// lines, it just cannot indent them.
    pub indent: Option<&'a [u8]>,
    pub inline_single_item: bool,
    pub horiz_space: usize,
}

impl<O: Output + ?Sized> Writer<'_, O> {
    pub fn write_value(&mut self, value: &Value, depth: usize, force_one_line: bool) {
        match value {
            Value::Absent => self.out.write(b"undefined"),
            Value::Null => self.out.write(b"null"),
            Value::Bool(true) => self.out.write(b"true"),
            Value::Bool(false) => self.out.write(b"false"),
            Value::Int(int) => self.out.write(itoa::Buffer::new().format(*int).as_bytes()),
            Value::Float(float) => self.out.write(ryu::Buffer::new().format(*float).as_bytes()),
            Value::Str(bytes) => self.write_string(bytes),
            Value::Object(map) => self.write_map(map, depth, force_one_line),
            Value::Array(items) => self.write_array(items, depth, force_one_line),
        }
    }

    fn write_map(&mut self, map: &Map, depth: usize, force_one_line: bool) {
        if force_one_line || Budget::new(self.horiz_space).fits_map(map) {
            self.out.put(b'{');
            for (index, (key, value)) in map.iter().enumerate() {
                if index > 0 {
                    self.out.write(self.alt_item);
                }
                self.write_string(key);
                self.out.write(self.key);
                self.write_value(value, depth, true);
            }
            self.out.put(b'}');
            return;
        }

        if map.is_empty() && self.inline_single_item {
            self.out.write(b"{}");
            return;
        }

        self.out.put(b'{');
        if map.len() == 1 && self.inline_single_item {
            if let Some((key, value)) = map.first() {
                self.write_string(key);
                self.out.write(self.key);
                self.write_value(value, depth, false);
            }
            self.out.put(b'}');
            return;
        }

        for (index, (key, value)) in map.iter().enumerate() {
            if index > 0 {
                self.out.write(self.item);
            }
            self.break_line(depth + 1);
            self.write_string(key);
            self.out.write(self.key);
            self.write_value(value, depth + 1, false);
        }
        self.break_line(depth);
        self.out.put(b'}');
    }

    fn write_array(&mut self, items: &[Value], depth: usize, force_one_line: bool) {
        if force_one_line || Budget::new(self.horiz_space).fits_array(items) {
            self.out.put(b'[');
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    self.out.write(self.alt_item);
                }
                self.write_value(item, depth, true);
            }
            self.out.put(b']');
            return;
        }

        if items.is_empty() && self.inline_single_item {
            self.out.write(b"[]");
            return;
        }

        self.out.put(b'[');
        if items.len() == 1 && self.inline_single_item {
            self.write_value(&items[0], depth, false);
            self.out.put(b']');
            return;
        }

        // an over-budget array of nothing but plain scalars still stays on
        // one line rather than wrapping one number per row
        if self.inline_single_item && items.iter().all(is_plain_scalar) {
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    self.out.write(self.alt_item);
                }
                self.write_value(item, depth, false);
            }
            self.out.put(b']');
            return;
        }

        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                self.out.write(self.item);
            }
            self.break_line(depth + 1);
            self.write_value(item, depth + 1, false);
        }
        self.break_line(depth);
        self.out.put(b']');
    }

    /// Newline plus `depth` indent units.
    fn break_line(&mut self, depth: usize) {
        let Some(unit) = self.indent else {
            return;
        };
        self.out.put(b'\n');
        if unit.is_empty() {
            return;
        }
        for _ in 0..depth {
            self.out.write(unit);
        }
    }

    fn write_string(&mut self, bytes: &[u8]) {
        self.out.put(b'"');
        let mut start = 0;
        for (index, &byte) in bytes.iter().enumerate() {
            let escape: &[u8] = match byte {
                b'"' => b"\\\"",
                b'\\' => b"\\\\",
                0x08 => b"\\b",
                0x0C => b"\\f",
                b'\n' => b"\\n",
                b'\r' => b"\\r",
                b'\t' => b"\\t",
                0x00..=0x1F => b"",
                _ => continue,
            };
            self.out.write(&bytes[start..index]);
            start = index + 1;
            if escape.is_empty() {
                self.write_control(byte);
            } else {
                self.out.write(escape);
            }
        }
        self.out.write(&bytes[start..]);
        self.out.put(b'"');
    }

    fn write_control(&mut self, byte: u8) {
        const HEX: &[u8; 16] = b"0123456789abcdef";
        self.out.write(&[
            b'\\',
            b'u',
            b'0',
            b'0',
            HEX[usize::from(byte >> 4)],
            HEX[usize::from(byte & 0xF)],
        ]);
    }
}

fn is_plain_scalar(value: &Value) -> bool {
    !matches!(value, Value::Str(_) | Value::Object(_) | Value::Array(_))
}
