use std::str::Utf8Error;

use thiserror::Error;

/// An error that can happen when reading the scratch buffer (the payload of
/// a `String`, `Number`, or `Name` event) as a `&str`.
///
/// The scratch buffer is always well-formed UTF-8 for strings/names and
/// ASCII for numbers, so this should never actually trigger in practice; it
/// exists because the accessor borrows the buffer and has to account for
/// the type even when that invariant holds.
#[derive(Error, Debug)]
#[error("invalid string: {0}")]
pub struct InvalidStringValueError(#[from] Utf8Error);
