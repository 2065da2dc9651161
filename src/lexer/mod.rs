//! Lexical recognizers: the byte-level routines that turn a run of input
//! bytes into one token's worth of scratch-buffer payload. Grounded on the
//! `read_*` family of functions in `libpdjson5.c` (`read_string`,
//! `read_number`, `read_identifier`, the keyword matchers), split one
//! concern per file.

pub mod identifier;
pub mod keyword;
pub mod number;
pub mod string;

use crate::source::ByteSource;

/// Consume exactly `literal` from `source` byte by byte, or fail partway
/// through. Grounded on `is_match` in `libpdjson5.c`, which matches a
/// keyword directly against the byte stream (as opposed to `is_match_string`,
/// which re-checks an already-buffered identifier -- see `parser.rs`'s
/// implied-object sniffing for that case).
pub(crate) fn consume_literal<S: ByteSource>(source: &mut S, literal: &[u8]) -> Result<(), String> {
    for &expected in literal {
        match source.get() {
            Some(b) if b == expected => {}
            Some(b) => {
                return Err(format!(
                    "invalid literal: expected '{}', found byte {:#04x}",
                    String::from_utf8_lossy(literal),
                    b
                ))
            }
            None => {
                return Err(format!(
                    "unexpected end of input while reading '{}'",
                    String::from_utf8_lossy(literal)
                ))
            }
        }
    }
    Ok(())
}
