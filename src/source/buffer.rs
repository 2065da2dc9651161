use super::ByteSource;

/// A [`ByteSource`] that reads from a fixed, in-memory byte slice.
///
/// Grounded on `buffer_get`/`buffer_peek` plus `json_open_buffer`/
/// `json_open_string` in `libpdjson5.c`. A string source is simply this one
/// constructed from `str::as_bytes()` -- the C side's separate
/// `json_open_string` only existed to spare the caller a `strlen` call,
/// which Rust's `&str` already tracks.
pub struct BufferSource<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> BufferSource<'a> {
    /// Create a source that reads `buf` from the beginning.
    pub fn new(buf: &'a [u8]) -> Self {
        BufferSource { buf, pos: 0 }
    }

    /// Create a source that reads the UTF-8 bytes of `s`.
    pub fn from_str(s: &'a str) -> Self {
        BufferSource::new(s.as_bytes())
    }
}

impl<'a> ByteSource for BufferSource<'a> {
    fn get(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    fn peek(&mut self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    fn position(&self) -> usize {
        self.pos
    }
}
