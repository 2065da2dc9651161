//! Strict JSON (RFC 8259) conformance: the grammar every dialect must
//! still accept, and the syntax extensions that must still be rejected.

use jstream::source::BufferSource;
use jstream::{JsonEvent, JsonParser};

fn events(input: &str) -> Vec<JsonEvent> {
    let mut parser = JsonParser::new(BufferSource::from_str(input));
    let mut out = Vec::new();
    loop {
        let e = parser.next_event();
        out.push(e);
        if e == JsonEvent::Done || e == JsonEvent::Error {
            break;
        }
    }
    out
}

#[test]
fn empty_object_and_array() {
    assert_eq!(
        events("{}"),
        vec![JsonEvent::ObjectStart, JsonEvent::ObjectEnd, JsonEvent::Done]
    );
    assert_eq!(
        events("[]"),
        vec![JsonEvent::ArrayStart, JsonEvent::ArrayEnd, JsonEvent::Done]
    );
}

#[test]
fn nested_structure_with_every_scalar_kind() {
    let input = r#"{"s": "hi", "n": -1.5e2, "t": true, "f": false, "nil": null, "a": [1, 2]}"#;
    let got = events(input);
    assert_eq!(
        got,
        vec![
            JsonEvent::ObjectStart,
            JsonEvent::Name,
            JsonEvent::String,
            JsonEvent::Name,
            JsonEvent::Number,
            JsonEvent::Name,
            JsonEvent::True,
            JsonEvent::Name,
            JsonEvent::False,
            JsonEvent::Name,
            JsonEvent::Null,
            JsonEvent::Name,
            JsonEvent::ArrayStart,
            JsonEvent::Number,
            JsonEvent::Number,
            JsonEvent::ArrayEnd,
            JsonEvent::ObjectEnd,
            JsonEvent::Done,
        ]
    );
}

#[test]
fn unquoted_member_names_are_rejected() {
    let got = events("{a: 1}");
    assert_eq!(got.last(), Some(&JsonEvent::Error));
}

#[test]
fn single_quoted_strings_are_rejected() {
    let got = events("['a']");
    assert_eq!(got.last(), Some(&JsonEvent::Error));
}

#[test]
fn trailing_commas_are_rejected() {
    assert_eq!(events("[1,]").last(), Some(&JsonEvent::Error));
    assert_eq!(events(r#"{"a":1,}"#).last(), Some(&JsonEvent::Error));
}

#[test]
fn comments_are_rejected() {
    assert_eq!(events("[1 /* nope */, 2]").last(), Some(&JsonEvent::Error));
    assert_eq!(events("[1 // nope\n, 2]").last(), Some(&JsonEvent::Error));
}

#[test]
fn leading_plus_and_bare_dot_are_rejected() {
    assert_eq!(events("+1").last(), Some(&JsonEvent::Error));
    assert_eq!(events(".5").last(), Some(&JsonEvent::Error));
}

#[test]
fn unescaped_control_character_in_string_is_rejected() {
    let mut parser = JsonParser::new(BufferSource::new(b"\"a\x01b\""));
    assert_eq!(parser.next_event(), JsonEvent::Error);
}

#[test]
fn deeply_nested_arrays_parse() {
    let depth = 64;
    let mut input = String::new();
    for _ in 0..depth {
        input.push('[');
    }
    input.push('0');
    for _ in 0..depth {
        input.push(']');
    }
    let got = events(&input);
    assert_eq!(got.iter().filter(|e| **e == JsonEvent::ArrayStart).count(), depth);
    assert_eq!(got.last(), Some(&JsonEvent::Done));
}

#[test]
fn surrogate_pair_escape_decodes_to_one_codepoint() {
    let mut parser = JsonParser::new(BufferSource::from_str(r#""😀""#));
    assert_eq!(parser.next_event(), JsonEvent::String);
    assert_eq!(parser.current_str().unwrap(), "\u{1F600}");
}

#[test]
fn reports_accurate_line_and_column_on_error() {
    let mut parser = JsonParser::new(BufferSource::from_str("{\n  \"a\": ,\n}"));
    parser.next_event(); // ObjectStart
    parser.next_event(); // Name "a"
    let e = parser.next_event();
    assert_eq!(e, JsonEvent::Error);
    assert_eq!(parser.lineno(), 2);
}
