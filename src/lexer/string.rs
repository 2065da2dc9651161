//! Quoted strings. Grounded on `read_string`, `read_escaped`,
//! `read_unicode`/`read_unicode_cp`, `read_latin`/`read_latin_cp`, and
//! `read_utf8` in `libpdjson5.c`.
//!
//! The payload is kept as raw UTF-8 bytes in the scratch buffer (no
//! conversion to `char`s), matching `json_get_string`'s contract in
//! `libpdjson5.c`.

use crate::diagnostic;
use crate::location::Location;
use crate::options::Language;
use crate::scratch::Scratch;
use crate::source::ByteSource;
use crate::utf8;

/// Read a quoted string into `scratch`. Assumes the opening `quote` byte
/// has already been consumed by the caller (the dispatcher needs to see it
/// first to decide this is a string at all).
pub fn read_string<S: ByteSource>(
    source: &mut S,
    scratch: &mut Scratch,
    loc: &mut Location,
    quote: u8,
    language: Language,
) -> Result<(), String> {
    scratch.clear();
    loop {
        let b = source
            .get()
            .ok_or_else(|| "unterminated string".to_string())?;
        if b == quote {
            return Ok(());
        }
        match b {
            b'\\' => read_escaped(source, scratch, language)?,
            0x00..=0x1F => {
                // JSON5 tolerates raw control characters other than the
                // line terminators, which would otherwise make the string's
                // extent ambiguous; strict JSON requires every control
                // character to be escaped.
                if language.allows_json5_syntax() && b != b'\n' && b != b'\r' {
                    scratch.push(b);
                } else {
                    return Err(format!("illegal unescaped control character {:#04x}", b));
                }
            }
            0x20..=0x7F => scratch.push(b),
            _ => read_utf8_continuation(source, scratch, loc, b)?,
        }
    }
}

fn read_utf8_continuation<S: ByteSource>(
    source: &mut S,
    scratch: &mut Scratch,
    loc: &mut Location,
    lead: u8,
) -> Result<(), String> {
    let len = utf8::seq_len(lead);
    if len == 0 {
        return Err(format!(
            "illegal character {} in string",
            diagnostic::describe_byte(lead)
        ));
    }
    let mut bytes = [0u8; 4];
    bytes[0] = lead;
    for slot in bytes.iter_mut().take(len).skip(1) {
        let b = source.get().ok_or_else(|| {
            format!(
                "unexpected {} in the middle of a multi-byte character",
                diagnostic::describe_eof()
            )
        })?;
        *slot = b;
        loc.note_continuation_byte();
    }
    if !utf8::is_legal(&bytes, len) {
        return Err(format!(
            "illegal character {} in string",
            diagnostic::describe_codepoint(utf8::raw_codepoint(&bytes, len))
        ));
    }
    scratch.extend(&bytes[..len]);
    Ok(())
}

fn hex_value(b: u8) -> Option<u32> {
    match b {
        b'0'..=b'9' => Some((b - b'0') as u32),
        b'a'..=b'f' => Some((b - b'a' + 10) as u32),
        b'A'..=b'F' => Some((b - b'A' + 10) as u32),
        _ => None,
    }
}

fn read_hex_digits<S: ByteSource>(source: &mut S, count: usize) -> Result<u32, String> {
    let mut value = 0u32;
    for _ in 0..count {
        let b = source
            .get()
            .ok_or_else(|| "unexpected end of input in escape sequence".to_string())?;
        let digit = hex_value(b).ok_or_else(|| format!("invalid hex digit {:#04x}", b))?;
        value = value * 16 + digit;
    }
    Ok(value)
}

fn read_unicode_escape<S: ByteSource>(source: &mut S, scratch: &mut Scratch) -> Result<(), String> {
    let cp = read_hex_digits(source, 4)?;
    let codepoint = if (0xD800..=0xDBFF).contains(&cp) {
        // High surrogate: must be followed by \uXXXX with a low surrogate.
        let mut peek2 = [0u8; 2];
        for slot in peek2.iter_mut() {
            *slot = source
                .get()
                .ok_or_else(|| "dangling high surrogate".to_string())?;
        }
        if peek2 != *b"\\u" {
            return Err("dangling high surrogate".to_string());
        }
        let low = read_hex_digits(source, 4)?;
        if !(0xDC00..=0xDFFF).contains(&low) {
            return Err("invalid low surrogate".to_string());
        }
        0x10000 + (cp - 0xD800) * 0x400 + (low - 0xDC00)
    } else if (0xDC00..=0xDFFF).contains(&cp) {
        return Err("unexpected low surrogate without preceding high surrogate".to_string());
    } else {
        cp
    };
    let mut buf = Vec::with_capacity(4);
    if !utf8::encode(codepoint, &mut buf) {
        return Err(format!("invalid Unicode scalar value U+{:X}", codepoint));
    }
    scratch.extend(&buf);
    Ok(())
}

fn read_latin_escape<S: ByteSource>(source: &mut S, scratch: &mut Scratch) -> Result<(), String> {
    let cp = read_hex_digits(source, 2)?;
    let mut buf = Vec::with_capacity(2);
    utf8::encode(cp, &mut buf);
    scratch.extend(&buf);
    Ok(())
}

/// Read one escape sequence, assuming the leading `\` has already been
/// consumed.
fn read_escaped<S: ByteSource>(
    source: &mut S,
    scratch: &mut Scratch,
    language: Language,
) -> Result<(), String> {
    let b = source
        .get()
        .ok_or_else(|| "unexpected end of input after '\\'".to_string())?;
    match b {
        b'"' => scratch.push(b'"'),
        b'\\' => scratch.push(b'\\'),
        b'/' => scratch.push(b'/'),
        b'b' => scratch.push(0x08),
        b'f' => scratch.push(0x0C),
        b'n' => scratch.push(b'\n'),
        b'r' => scratch.push(b'\r'),
        b't' => scratch.push(b'\t'),
        b'u' => read_unicode_escape(source, scratch)?,
        b'\'' if language.allows_json5_syntax() => scratch.push(b'\''),
        b'v' if language.allows_json5_syntax() => scratch.push(0x0B),
        b'x' if language.allows_json5_syntax() => read_latin_escape(source, scratch)?,
        b'0' if language.allows_json5_syntax() => {
            if matches!(source.peek(), Some(b'0'..=b'9')) {
                return Err("\\0 cannot be followed by a digit".to_string());
            }
            scratch.push(0);
        }
        b'1'..=b'9' if language.allows_json5_syntax() => {
            return Err(format!("octal-like escape '\\{}' is illegal", b as char));
        }
        b'\n' if language.allows_json5_syntax() => {}
        b'\r' if language.allows_json5_syntax() => {
            if matches!(source.peek(), Some(b'\n')) {
                source.get();
            }
        }
        _ if language.allows_json5_syntax() => {
            read_line_separator_continuation(source, b, scratch)?;
        }
        _ => return Err(format!("illegal escape character '{}'", b as char)),
    }
    Ok(())
}

/// JSON5 also allows `\` followed by U+2028/U+2029 (encoded as 3 UTF-8
/// bytes) as a line continuation, and otherwise passes any other character
/// through literally after a backslash.
fn read_line_separator_continuation<S: ByteSource>(
    source: &mut S,
    lead: u8,
    scratch: &mut Scratch,
) -> Result<(), String> {
    if lead == 0xE2 {
        let mut rest = [0u8; 2];
        for slot in rest.iter_mut() {
            *slot = source
                .get()
                .ok_or_else(|| "unexpected end of input in escape sequence".to_string())?;
        }
        if rest == [0x80, 0xA8] || rest == [0x80, 0xA9] {
            return Ok(()); // line continuation, produces nothing
        }
        // Not actually a line separator: pass the whole sequence through
        // literally, the same as any other "\<char>".
        scratch.push(lead);
        scratch.extend(&rest);
        return Ok(());
    }
    scratch.push(lead);
    Ok(())
}
