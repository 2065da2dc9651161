//! The fixed keywords: `true`, `false`, `null`. Grounded on the keyword
//! branches of `read_value`/`json_next` in `libpdjson5.c`, which dispatch on
//! the first byte then call `is_match` to confirm the rest.

use super::consume_literal;
use crate::source::ByteSource;

pub fn read_true<S: ByteSource>(source: &mut S) -> Result<(), String> {
    consume_literal(source, b"true")
}

pub fn read_false<S: ByteSource>(source: &mut S) -> Result<(), String> {
    consume_literal(source, b"false")
}

pub fn read_null<S: ByteSource>(source: &mut S) -> Result<(), String> {
    consume_literal(source, b"null")
}

/// Whether a previously buffered identifier (e.g. from an implied-object
/// lookahead) is exactly `literal`. Grounded on `is_match_string` in
/// `libpdjson5.c`, which re-checks an identifier that has already been
/// copied into the scratch buffer, as opposed to matching directly off the
/// byte stream.
pub fn matches_buffered(buffered: &[u8], literal: &str) -> bool {
    buffered == literal.as_bytes()
}
