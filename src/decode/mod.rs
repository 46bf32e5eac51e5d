//! Text-to-value reader for the three dialects.

mod cursor;
mod number;
mod string;

use smallvec::SmallVec;

use crate::options::ReadMode;
use crate::types::{Map, Value};

use cursor::{is_space, Cursor};
use number::read_number;
use string::read_string;

/// One level of the parse. Recursion into containers is reified as a
/// stack of frames, so nesting depth is bounded by the heap rather than
/// the native call stack.
enum Frame {
    Value,
    Array(ArrayFrame),
    Object(ObjectFrame),
}

enum Step {
    Fail,
    /// Descend into a child value.
    Push(Frame),
    /// The current frame turned out to be a container; swap it out.
    Replace(Frame),
    /// The current frame produced its value.
    Done(Value),
}

#[derive(Default)]
struct ArrayFrame {
    items: Vec<Value>,
}

impl ArrayFrame {
    /// Called once after the opening bracket with `child == None`, then
    /// once per completed element. A comma directly before the closing
    /// bracket is tolerated in every dialect.
    fn step(&mut self, cursor: &mut Cursor, mode: ReadMode, child: Option<Value>) -> Step {
        if let Some(value) = child {
            self.items.push(value);
            cursor.skip_ws(mode);
            match cursor.peek() {
                Some(b',') => {
                    cursor.bump();
                    cursor.skip_ws(mode);
                }
                Some(b']') => {
                    cursor.bump();
                    return Step::Done(Value::Array(std::mem::take(&mut self.items)));
                }
                _ => return Step::Fail,
            }
        } else {
            cursor.skip_ws(mode);
        }

        if cursor.peek() == Some(b']') {
            cursor.bump();
            return Step::Done(Value::Array(std::mem::take(&mut self.items)));
        }
        Step::Push(Frame::Value)
    }
}

#[derive(Default)]
struct ObjectFrame {
    entries: Map,
    key: Vec<u8>,
}

impl ObjectFrame {
    fn step(&mut self, cursor: &mut Cursor, mode: ReadMode, child: Option<Value>) -> Step {
        if let Some(value) = child {
            // a repeated key keeps its original position, last value wins
            self.entries.set(std::mem::take(&mut self.key), value);
            cursor.skip_ws(mode);
            match cursor.peek() {
                Some(b',') => {
                    cursor.bump();
                    cursor.skip_ws(mode);
                }
                Some(b'}') => {
                    cursor.bump();
                    return Step::Done(Value::Object(std::mem::take(&mut self.entries)));
                }
                _ => return Step::Fail,
            }
        } else {
            cursor.skip_ws(mode);
        }

        if cursor.peek() == Some(b'}') {
            cursor.bump();
            return Step::Done(Value::Object(std::mem::take(&mut self.entries)));
        }

        let Some(key) = read_object_key(cursor, mode) else {
            return Step::Fail;
        };
        self.key = key;
        cursor.skip_ws(mode);
        if cursor.peek() != Some(b':') {
            return Step::Fail;
        }
        cursor.bump();
        Step::Push(Frame::Value)
    }
}

fn step_value(cursor: &mut Cursor, mode: ReadMode) -> Step {
    cursor.skip_ws(mode);
    let Some(byte) = cursor.peek() else {
        return Step::Fail;
    };
    match byte {
        b'{' => {
            cursor.bump();
            Step::Replace(Frame::Object(ObjectFrame::default()))
        }
        b'[' => {
            cursor.bump();
            Step::Replace(Frame::Array(ArrayFrame::default()))
        }
        b'"' | b'\'' => match read_string(cursor, mode) {
            Some(bytes) => Step::Done(Value::Str(bytes)),
            None => Step::Fail,
        },
        b'-' | b'+' | b'.' | b'0'..=b'9' => match read_number(cursor, mode) {
            Some(value) => Step::Done(value),
            None => Step::Fail,
        },
        _ => match read_keyword(cursor, mode) {
            Some(value) => Step::Done(value),
            None => Step::Fail,
        },
    }
}

/// In ECMA mode object keys may also be unquoted: a numeric literal is
/// read and re-rendered in its canonical decimal spelling, anything else
/// runs to the next colon or whitespace (possibly an empty key).
fn read_object_key(cursor: &mut Cursor, mode: ReadMode) -> Option<Vec<u8>> {
    let byte = cursor.peek()?;
    if byte == b'"' || byte == b'\'' {
        return read_string(cursor, mode);
    }
    if mode.strict_lexing() {
        return None;
    }

    if byte.is_ascii_digit() || byte == b'-' || byte == b'+' {
        return match read_number(cursor, mode)? {
            Value::Int(int) => Some(itoa::Buffer::new().format(int).as_bytes().to_vec()),
            Value::Float(float) => Some(ryu::Buffer::new().format(float).as_bytes().to_vec()),
            _ => None,
        };
    }

    let start = cursor.pos();
    while matches!(cursor.peek(), Some(byte) if byte != b':' && !is_space(byte, mode)) {
        cursor.bump();
    }
    Some(cursor.slice(start).to_vec())
}

fn read_keyword(cursor: &mut Cursor, mode: ReadMode) -> Option<Value> {
    let start = cursor.pos();
    while matches!(cursor.peek(), Some(byte) if byte.is_ascii_alphabetic()) {
        cursor.bump();
    }
    match cursor.slice(start) {
        b"null" => Some(Value::Null),
        b"true" => Some(Value::Bool(true)),
        b"false" => Some(Value::Bool(false)),
        b"undefined" if !mode.strict_lexing() => Some(Value::Null),
        _ => None,
    }
}

fn read_value(cursor: &mut Cursor, mode: ReadMode) -> Option<Value> {
    let mut stack: SmallVec<[Frame; 16]> = SmallVec::new();
    stack.push(Frame::Value);
    let mut finished: Option<Value> = None;

    while let Some(frame) = stack.last_mut() {
        let step = match frame {
            Frame::Value => step_value(cursor, mode),
            Frame::Array(array) => array.step(cursor, mode, finished.take()),
            Frame::Object(object) => object.step(cursor, mode, finished.take()),
        };
        match step {
            Step::Fail => return None,
            Step::Push(child) => stack.push(child),
            Step::Replace(next) => {
                stack.pop();
                stack.push(next);
            }
            Step::Done(value) => {
                stack.pop();
                finished = Some(value);
            }
        }
    }
    finished
}

/// Shared body of the public read entry points. `consumed` is filled with
/// the byte offset past the document (and its trailing whitespace),
/// relative to the text after the skip prefix; it is zero when the parse
/// fails.
pub(crate) fn read_with(
    text: &[u8],
    skip: &[u8],
    mode: ReadMode,
    consumed: Option<&mut usize>,
) -> Value {
    let text = if skip.is_empty() {
        text
    } else {
        text.strip_prefix(skip).unwrap_or(text)
    };

    let mut cursor = Cursor::new(text);
    let mut parsed = read_value(&mut cursor, mode);

    match mode {
        ReadMode::Strict => {
            cursor.skip_ws(mode);
            if !cursor.at_end() {
                parsed = None;
            }
        }
        ReadMode::Serialized => cursor.skip_ws(mode),
        ReadMode::Ecma => {}
    }

    if let Some(consumed) = consumed {
        *consumed = if parsed.is_some() { cursor.pos() } else { 0 };
    }
    parsed.unwrap_or(Value::Absent)
}
