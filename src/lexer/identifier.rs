//! Unquoted JSON5/JSON5E member names. Grounded on `is_first_id_char`,
//! `is_subseq_id_char`, and `read_identifier` in `libpdjson5.c`. The
//! original restricts identifiers to ASCII letters, digits, `$`, and `_`
//! (plus `-`/`.` as non-leading characters under JSON5E); full Unicode
//! `ID_Start`/`ID_Continue` is out of scope here, same as in the original.

use crate::options::Language;
use crate::scratch::Scratch;
use crate::source::ByteSource;

pub fn is_first_id_char(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

pub fn is_subseq_id_char(b: u8, language: Language) -> bool {
    is_first_id_char(b)
        || b.is_ascii_digit()
        || (language.allows_json5e_syntax() && (b == b'-' || b == b'.'))
}

/// Read an unquoted member name into `scratch`, assuming the caller has
/// already confirmed the first byte is [`is_first_id_char`].
pub fn read_identifier<S: ByteSource>(
    source: &mut S,
    scratch: &mut Scratch,
    language: Language,
) -> Result<(), String> {
    scratch.clear();
    let first = source
        .get()
        .ok_or_else(|| "unexpected end of input reading identifier".to_string())?;
    if !is_first_id_char(first) {
        return Err(format!("illegal identifier start byte {:#04x}", first));
    }
    scratch.push(first);
    while let Some(b) = source.peek() {
        if is_subseq_id_char(b, language) {
            scratch.push(source.get().unwrap());
        } else {
            break;
        }
    }
    Ok(())
}
