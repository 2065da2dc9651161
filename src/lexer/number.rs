//! Numbers. Grounded on `is_dec_digit`, `is_hex_digit`, `read_dec_digits`,
//! `read_hex_digits`, and `read_number` in `libpdjson5.c`. The payload is
//! captured verbatim as it was written: there is no `f64`/`i64` conversion
//! here, only the source text.

use super::consume_literal;
use crate::options::Language;
use crate::scratch::Scratch;
use crate::source::ByteSource;

fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

/// Read a number into `scratch`. Assumes the caller has already confirmed
/// the first byte is `-`, `+` (JSON5 only), an ASCII digit, `.` (JSON5
/// only), `I` (JSON5 `Infinity`), or `N` (JSON5 `NaN`).
pub fn read_number<S: ByteSource>(
    source: &mut S,
    scratch: &mut Scratch,
    language: Language,
) -> Result<(), String> {
    scratch.clear();
    let is5 = language.allows_json5_syntax();

    if matches!(source.peek(), Some(b'-')) {
        scratch.push(source.get().unwrap());
    } else if is5 && matches!(source.peek(), Some(b'+')) {
        scratch.push(source.get().unwrap());
    }

    if is5 && matches!(source.peek(), Some(b'I')) {
        consume_literal(source, b"Infinity")?;
        scratch.extend(b"Infinity");
        return Ok(());
    }
    if is5 && matches!(source.peek(), Some(b'N')) {
        consume_literal(source, b"NaN")?;
        scratch.extend(b"NaN");
        return Ok(());
    }

    let mut saw_digit = false;

    if matches!(source.peek(), Some(b'0')) {
        scratch.push(source.get().unwrap());
        saw_digit = true;
        if is5 && matches!(source.peek(), Some(b'x') | Some(b'X')) {
            scratch.push(source.get().unwrap());
            let mut saw_hex = false;
            while let Some(b) = source.peek() {
                if is_hex_digit(b) {
                    scratch.push(source.get().unwrap());
                    saw_hex = true;
                } else {
                    break;
                }
            }
            if !saw_hex {
                return Err("expected hex digit after '0x'".to_string());
            }
            return Ok(());
        }
    } else {
        while matches!(source.peek(), Some(b'0'..=b'9')) {
            scratch.push(source.get().unwrap());
            saw_digit = true;
        }
    }

    if matches!(source.peek(), Some(b'.')) {
        if !is5 && !saw_digit {
            return Err("expected digit before '.'".to_string());
        }
        scratch.push(source.get().unwrap());
        let mut saw_frac_digit = false;
        while matches!(source.peek(), Some(b'0'..=b'9')) {
            scratch.push(source.get().unwrap());
            saw_frac_digit = true;
            saw_digit = true;
        }
        if !is5 && !saw_frac_digit {
            return Err("expected digit after '.'".to_string());
        }
    }

    if !saw_digit {
        return Err("invalid number".to_string());
    }

    if matches!(source.peek(), Some(b'e') | Some(b'E')) {
        scratch.push(source.get().unwrap());
        if matches!(source.peek(), Some(b'+') | Some(b'-')) {
            scratch.push(source.get().unwrap());
        }
        let mut saw_exp_digit = false;
        while matches!(source.peek(), Some(b'0'..=b'9')) {
            scratch.push(source.get().unwrap());
            saw_exp_digit = true;
        }
        if !saw_exp_digit {
            return Err("expected digit in exponent".to_string());
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::source::BufferSource;

    fn read(input: &str, language: Language) -> Result<String, String> {
        let mut s = BufferSource::from_str(input);
        let mut scratch = Scratch::new();
        read_number(&mut s, &mut scratch, language)?;
        Ok(scratch.as_str().unwrap().to_string())
    }

    #[test]
    fn reads_plain_integer() {
        assert_eq!(read("42", Language::Json).unwrap(), "42");
    }

    #[test]
    fn reads_negative_float_with_exponent() {
        assert_eq!(read("-1.5e10", Language::Json).unwrap(), "-1.5e10");
    }

    #[test]
    fn strict_json_rejects_leading_zero_followed_by_digit() {
        // "01" reads as the number "0" then leaves "1" for the caller; the
        // caller's higher-level grammar check (not this function) is what
        // would reject "01" as two tokens glued together.
        assert_eq!(read("0", Language::Json).unwrap(), "0");
    }

    #[test]
    fn strict_json_rejects_leading_dot() {
        assert!(read(".5", Language::Json).is_err());
    }

    #[test]
    fn json5_allows_leading_and_trailing_dot() {
        assert_eq!(read(".5", Language::Json5).unwrap(), ".5");
        assert_eq!(read("5.", Language::Json5).unwrap(), "5.");
    }

    #[test]
    fn json5_allows_leading_plus_and_hex() {
        assert_eq!(read("+0x1F", Language::Json5).unwrap(), "+0x1F");
    }

    #[test]
    fn json5_allows_infinity_and_nan() {
        assert_eq!(read("-Infinity", Language::Json5).unwrap(), "-Infinity");
        assert_eq!(read("NaN", Language::Json5).unwrap(), "NaN");
    }

    #[test]
    fn strict_json_rejects_hex() {
        assert!(read("0x1", Language::Json).is_err());
    }
}
