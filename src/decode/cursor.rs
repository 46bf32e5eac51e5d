use crate::options::ReadMode;

/// Byte cursor over the input text.
pub(super) struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Cursor { input, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    pub fn bump(&mut self) {
        if self.pos < self.input.len() {
            self.pos += 1;
        }
    }

    /// Steps back one byte; used by the number reader to re-read a `0`
    /// once it sees `.`/`e` behind it.
    pub fn back(&mut self) {
        if self.pos > 0 {
            self.pos -= 1;
        }
    }

    pub fn advance(&mut self, count: usize) {
        self.pos = (self.pos + count).min(self.input.len());
    }

    pub fn rest(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    pub fn slice(&self, from: usize) -> &'a [u8] {
        &self.input[from..self.pos]
    }

    pub fn skip_ws(&mut self, mode: ReadMode) {
        while let Some(byte) = self.peek() {
            if !is_space(byte, mode) {
                return;
            }
            self.bump();
        }
    }
}

pub(super) fn is_space(byte: u8, mode: ReadMode) -> bool {
    match mode {
        // exactly the four JSON whitespace characters
        ReadMode::Strict | ReadMode::Serialized => {
            matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
        }
        // full C-locale isspace class, adding \v and \f
        ReadMode::Ecma => byte == b' ' || (0x09..=0x0D).contains(&byte),
    }
}
