//! The reusable byte vector that holds the most recent `String`/`Number`/
//! `Name` payload. Grounded on `json->data.string`/`string_fill` in
//! `libpdjson5.c`, minus the C side's manual `realloc` dance (`Vec<u8>`
//! already amortizes growth) and minus the trailing NUL: payload length is
//! always `len()`/`str::len()` here, since `&str` already makes a
//! terminator redundant in Rust.

use crate::error::InvalidStringValueError;

#[derive(Debug, Default)]
pub struct Scratch {
    buf: Vec<u8>,
}

impl Scratch {
    pub fn new() -> Self {
        Scratch { buf: Vec::with_capacity(1024) }
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn push(&mut self, b: u8) {
        self.buf.push(b);
    }

    pub fn extend(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn as_str(&self) -> Result<&str, InvalidStringValueError> {
        Ok(std::str::from_utf8(&self.buf)?)
    }
}
