use super::ByteSource;

/// A [`ByteSource`] driven by caller-supplied callbacks.
///
/// Grounded on `json_open_user` and the `user_get`/`user_peek` trampolines in
/// `libpdjson5.c`, which call a `json_user_io` function pointer against an
/// opaque `void *user`. Rust has no need for the `void *` half of that: the
/// caller's state lives in the closures' captures instead of a separate
/// pointer threaded through every call.
///
/// Each callback returns `Some(byte)` to produce one more byte, or `None` at
/// end of input. `get` is expected to consume/advance whatever state the
/// callback closes over; `peek` is expected to not.
pub struct UserSource<G, P>
where
    G: FnMut() -> Option<u8>,
    P: FnMut() -> Option<u8>,
{
    get: G,
    peek: P,
    pos: usize,
}

impl<G, P> UserSource<G, P>
where
    G: FnMut() -> Option<u8>,
    P: FnMut() -> Option<u8>,
{
    pub fn new(get: G, peek: P) -> Self {
        UserSource { get, peek, pos: 0 }
    }
}

impl<G, P> ByteSource for UserSource<G, P>
where
    G: FnMut() -> Option<u8>,
    P: FnMut() -> Option<u8>,
{
    fn get(&mut self) -> Option<u8> {
        let b = (self.get)()?;
        self.pos += 1;
        Some(b)
    }

    fn peek(&mut self) -> Option<u8> {
        (self.peek)()
    }

    fn position(&self) -> usize {
        self.pos
    }
}
