use crate::types::{Map, Value};

/// Estimates whether a container fits on one line.
///
/// The estimate is deliberately rough: every separator is billed at two
/// bytes no matter how the layout spells it, and strings are billed
/// unescaped. `Absent` never fits, which keeps any container holding one
/// off the single-line path.
pub(super) struct Budget {
    space: usize,
}

impl Budget {
    pub fn new(space: usize) -> Self {
        Budget { space }
    }

    fn consume(&mut self, length: usize) -> bool {
        if length > self.space {
            self.space = 0;
            return false;
        }
        self.space -= length;
        true
    }

    fn fits(&mut self, value: &Value) -> bool {
        match value {
            Value::Absent => false,
            Value::Null => self.consume(4),
            Value::Bool(flag) => self.consume(if *flag { 4 } else { 5 }),
            Value::Int(int) => {
                let length = itoa::Buffer::new().format(*int).len();
                self.consume(length)
            }
            Value::Float(float) => {
                let length = ryu::Buffer::new().format(*float).len();
                self.consume(length)
            }
            Value::Str(bytes) => self.consume(bytes.len() + 2),
            Value::Object(map) => self.fits_map(map),
            Value::Array(items) => self.fits_array(items),
        }
    }

    pub fn fits_map(&mut self, map: &Map) -> bool {
        if !self.consume(2) {
            return false;
        }
        for (index, (key, value)) in map.iter().enumerate() {
            if index > 0 && !self.consume(2) {
                return false;
            }
            if !self.consume(key.len() + 2) {
                return false;
            }
            if !self.consume(2) {
                return false;
            }
            if !self.fits(value) {
                return false;
            }
        }
        true
    }

    pub fn fits_array(&mut self, items: &[Value]) -> bool {
        if !self.consume(2) {
            return false;
        }
        for (index, item) in items.iter().enumerate() {
            if index > 0 && !self.consume(2) {
                return false;
            }
            if !self.fits(item) {
                return false;
            }
        }
        true
    }
}
