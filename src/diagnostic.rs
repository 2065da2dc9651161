//! Renders a consumed byte or a decoded codepoint into a short
//! human-readable form for embedding in error messages: printable bytes as
//! single-quoted UTF-8 glyphs, control bytes by name, and invalid sequences
//! as [`utf8::INVALID_UTF8_MSG`](crate::utf8::INVALID_UTF8_MSG).

use crate::utf8;

/// Name a non-whitespace ASCII control byte (`0x00`-`0x1F`, `0x7F`), or
/// `None` if `b` isn't one.
fn control_name(b: u8) -> Option<&'static str> {
    Some(match b {
        0x00 => "NUL",
        0x01 => "SOH",
        0x02 => "STX",
        0x03 => "ETX",
        0x04 => "EOT",
        0x05 => "ENQ",
        0x06 => "ACK",
        0x07 => "BEL",
        0x08 => "BS",
        0x09 => "TAB",
        0x0A => "LF",
        0x0B => "VT",
        0x0C => "FF",
        0x0D => "CR",
        0x0E => "SO",
        0x0F => "SI",
        0x10..=0x1A => return control_name_di(b),
        0x1B => "ESC",
        0x1C => "FS",
        0x1D => "GS",
        0x1E => "RS",
        0x1F => "US",
        0x7F => "DEL",
        _ => return None,
    })
}

fn control_name_di(b: u8) -> Option<&'static str> {
    Some(match b {
        0x10 => "DLE",
        0x11 => "DC1",
        0x12 => "DC2",
        0x13 => "DC3",
        0x14 => "DC4",
        0x15 => "NAK",
        0x16 => "SYN",
        0x17 => "ETB",
        0x18 => "CAN",
        0x19 => "EM",
        0x1A => "SUB",
        _ => return None,
    })
}

/// Describe a single consumed byte for an error message: a named control
/// character, a quoted ASCII glyph, or a marker for a non-ASCII byte (which
/// a caller should instead describe via [`describe_codepoint()`] once the
/// full sequence, if any, has been read).
pub fn describe_byte(b: u8) -> String {
    if let Some(name) = control_name(b) {
        format!("control character {name}")
    } else if b.is_ascii_graphic() || b == b' ' {
        format!("'{}'", b as char)
    } else if b < 0x80 {
        format!("byte 0x{b:02X}")
    } else {
        utf8::INVALID_UTF8_MSG.to_string()
    }
}

/// Describe a decoded Unicode scalar value for an error message.
pub fn describe_codepoint(cp: u32) -> String {
    match char::from_u32(cp) {
        Some(ch) if !ch.is_control() => format!("'{ch}'"),
        Some(_) => format!("codepoint U+{cp:04X}"),
        None => utf8::INVALID_UTF8_MSG.to_string(),
    }
}

/// Describe "end of text" for error messages that need to name what was
/// seen instead of the expected byte.
pub fn describe_eof() -> &'static str {
    "end of text"
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn describes_printable_ascii() {
        assert_eq!(describe_byte(b'a'), "'a'");
        assert_eq!(describe_byte(b'{'), "'{'");
    }

    #[test]
    fn describes_named_control_bytes() {
        assert_eq!(describe_byte(0x00), "control character NUL");
        assert_eq!(describe_byte(b'\n'), "control character LF");
        assert_eq!(describe_byte(0x7F), "control character DEL");
    }

    #[test]
    fn describes_high_byte_as_invalid() {
        assert_eq!(describe_byte(0xFF), utf8::INVALID_UTF8_MSG);
    }

    #[test]
    fn describes_codepoint() {
        assert_eq!(describe_codepoint('a' as u32), "'a'");
        assert_eq!(describe_codepoint(0x1D11E), "'\u{1D11E}'");
    }

    #[test]
    fn describes_surrogate_codepoint_as_invalid() {
        assert_eq!(describe_codepoint(0xD800), utf8::INVALID_UTF8_MSG);
    }

    #[test]
    fn describes_eof() {
        assert_eq!(super::describe_eof(), "end of text");
    }
}
