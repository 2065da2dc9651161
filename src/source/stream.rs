use std::io::Read;

use super::ByteSource;

/// A [`ByteSource`] that reads from any [`Read`] implementation (a file, a
/// socket, a pipe...).
///
/// Grounded on `stream_get`/`stream_peek` in `libpdjson5.c`, which read one
/// byte via `fgetc` and implement `peek` with `ungetc`. `std::io::Read` has
/// no `ungetc` equivalent, so this keeps the looked-ahead byte in a one-slot
/// cache instead; the externally observable behavior (one-byte lookahead,
/// byte-granular position) is the same.
pub struct StreamSource<R> {
    reader: R,
    lookahead: Option<u8>,
    pos: usize,
}

impl<R: Read> StreamSource<R> {
    pub fn new(reader: R) -> Self {
        StreamSource { reader, lookahead: None, pos: 0 }
    }

    fn fill(&mut self) -> Option<u8> {
        if self.lookahead.is_none() {
            let mut byte = [0u8; 1];
            self.lookahead = match self.reader.read(&mut byte) {
                Ok(0) | Err(_) => None,
                Ok(_) => Some(byte[0]),
            };
        }
        self.lookahead
    }
}

impl<R: Read> ByteSource for StreamSource<R> {
    fn get(&mut self) -> Option<u8> {
        let b = self.fill()?;
        self.lookahead = None;
        self.pos += 1;
        Some(b)
    }

    fn peek(&mut self) -> Option<u8> {
        self.fill()
    }

    fn position(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_through_cursor() {
        let mut s = StreamSource::new(Cursor::new(b"hi".to_vec()));
        assert_eq!(s.peek(), Some(b'h'));
        assert_eq!(s.get(), Some(b'h'));
        assert_eq!(s.get(), Some(b'i'));
        assert_eq!(s.get(), None);
        assert_eq!(s.position(), 2);
    }

    #[test]
    fn empty_reader_is_immediately_exhausted() {
        let mut s = StreamSource::new(Cursor::new(Vec::new()));
        assert_eq!(s.peek(), None);
        assert_eq!(s.get(), None);
    }
}
