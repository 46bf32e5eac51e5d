use std::io;

/// Byte sink for the serializer.
///
/// Serialization is total: a sink has no way to report failure, so an
/// I/O-backed sink swallows write errors.
pub trait Output {
    fn write(&mut self, bytes: &[u8]);

    fn put(&mut self, byte: u8) {
        self.write(&[byte]);
    }
}

impl Output for Vec<u8> {
    fn write(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }

    fn put(&mut self, byte: u8) {
        self.push(byte);
    }
}

/// Adapter from any [`io::Write`] to [`Output`].
pub struct IoOutput<W: io::Write> {
    inner: W,
}

impl<W: io::Write> IoOutput<W> {
    pub fn new(inner: W) -> Self {
        IoOutput { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> Output for IoOutput<W> {
    fn write(&mut self, bytes: &[u8]) {
        let _ = self.inner.write_all(bytes);
    }
}
