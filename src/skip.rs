//! Whitespace and comment skipping. Grounded on `json_isspace`, `newline`,
//! `skip_comment`, and `next` in `libpdjson5.c`.
//!
//! `next` is the function that sits in front of every token recognizer in
//! `libpdjson5.c` and swallows runs of whitespace and comments; `skip.rs`
//! plays that role here, plus tracking whether a newline was crossed, which
//! JSON5E's newline-as-comma rule needs (see DESIGN.md for why this tracking
//! is applied more broadly here than in the C source's narrower use of it).

use crate::diagnostic;
use crate::location::Location;
use crate::options::Language;
use crate::source::ByteSource;

/// Render what's actually at the front of `source` for an error message:
/// the next byte, or end-of-text if there isn't one.
fn describe_next<S: ByteSource>(source: &mut S) -> String {
    match source.peek() {
        Some(b) => diagnostic::describe_byte(b),
        None => diagnostic::describe_eof().to_string(),
    }
}

/// What happened while skipping whitespace and comments ahead of a token.
#[derive(Debug, Default, Clone, Copy)]
pub struct SkipOutcome {
    /// Whether at least one newline was crossed.
    pub newline_seen: bool,
}

/// Skip whitespace and comments, stopping at the first byte that is neither.
///
/// Returns an error message (for the parser's flat error channel) if a
/// comment is unterminated or a `#` comment is used outside JSON5E.
pub fn skip_whitespace_and_comments<S: ByteSource>(
    source: &mut S,
    loc: &mut Location,
    language: Language,
) -> Result<SkipOutcome, String> {
    let mut outcome = SkipOutcome::default();
    loop {
        match source.peek() {
            None => return Ok(outcome),
            Some(b' ') | Some(b'\t') => {
                source.get();
            }
            Some(b'\n') => {
                source.get();
                let pos = source.position();
                loc.note_newline(pos);
                outcome.newline_seen = true;
            }
            Some(b'\r') => {
                source.get();
                if source.peek() == Some(b'\n') {
                    source.get();
                }
                // A sole \r is deliberately NOT counted as a newline here,
                // matching the original's documented behavior: counting it
                // would require folding \r\n into a single newline in two
                // places instead of one, for no practical benefit.
                let pos = source.position();
                loc.note_newline(pos);
                outcome.newline_seen = true;
            }
            Some(0x0C) | Some(0x0B) if language.allows_json5_syntax() => {
                // form feed, vertical tab
                source.get();
            }
            Some(b'/') => {
                source.get();
                match source.peek() {
                    Some(b'/') => {
                        source.get();
                        skip_line_comment(source);
                    }
                    Some(b'*') => {
                        source.get();
                        skip_block_comment(source)?;
                    }
                    _ => return Err("expected comment after '/'".to_string()),
                }
            }
            Some(b'#') if language.allows_json5e_syntax() => {
                source.get();
                skip_line_comment(source);
            }
            Some(0xC2) if language.allows_json5_syntax() => {
                // Possibly U+00A0 NO-BREAK SPACE (0xC2 0xA0).
                source.get();
                loc.note_continuation_byte();
                match source.peek() {
                    Some(0xA0) => {
                        source.get();
                        loc.note_continuation_byte();
                    }
                    _ => {
                        return Err(format!(
                            "expected a continuation byte, found {}",
                            describe_next(source)
                        ))
                    }
                }
            }
            Some(0xE2) if language.allows_json5_syntax() => {
                // Possibly U+2028 LINE SEPARATOR or U+2029 PARAGRAPH
                // SEPARATOR (0xE2 0x80 0xA8 / 0xE2 0x80 0xA9).
                source.get();
                loc.note_continuation_byte();
                if source.peek() != Some(0x80) {
                    return Err(format!(
                        "expected a continuation byte, found {}",
                        describe_next(source)
                    ));
                }
                source.get();
                loc.note_continuation_byte();
                match source.peek() {
                    Some(0xA8) | Some(0xA9) => {
                        source.get();
                        loc.note_continuation_byte();
                    }
                    _ => {
                        return Err(format!(
                            "expected a continuation byte, found {}",
                            describe_next(source)
                        ))
                    }
                }
            }
            Some(0xEF) if language.allows_json5_syntax() => {
                // Possibly U+FEFF BYTE ORDER MARK (0xEF 0xBB 0xBF).
                source.get();
                loc.note_continuation_byte();
                if source.peek() != Some(0xBB) {
                    return Err(format!(
                        "expected a continuation byte, found {}",
                        describe_next(source)
                    ));
                }
                source.get();
                loc.note_continuation_byte();
                match source.peek() {
                    Some(0xBF) => {
                        source.get();
                        loc.note_continuation_byte();
                    }
                    _ => {
                        return Err(format!(
                            "expected a continuation byte, found {}",
                            describe_next(source)
                        ))
                    }
                }
            }
            Some(_) => return Ok(outcome),
        }
    }
}

fn skip_line_comment<S: ByteSource>(source: &mut S) {
    loop {
        match source.peek() {
            None | Some(b'\n') | Some(b'\r') => return,
            Some(_) => {
                source.get();
            }
        }
    }
}

fn skip_block_comment<S: ByteSource>(source: &mut S) -> Result<(), String> {
    loop {
        match source.get() {
            None => return Err("unterminated block comment".to_string()),
            Some(b'*') if source.peek() == Some(b'/') => {
                source.get();
                return Ok(());
            }
            Some(_) => {}
        }
    }
}

/// `json_isspace` -- whether `b` is whitespace in the given language,
/// restricted to the single-byte (ASCII) whitespace characters. Exposed for
/// callers that need to classify an already-read byte (e.g. after an
/// implied-object keyword-match lookahead) without re-entering the skip
/// loop.
pub fn is_ascii_space(b: u8, language: Language) -> bool {
    match b {
        b' ' | b'\t' | b'\n' | b'\r' => true,
        0x0C | 0x0B => language.allows_json5_syntax(),
        _ => false,
    }
}
