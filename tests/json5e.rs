//! JSON5E: JSON5 plus `#` comments, newline-as-comma, and an implied
//! top-level object.

use jstream::options::{JsonParserOptionsBuilder, Language};
use jstream::source::BufferSource;
use jstream::{JsonEvent, JsonParser};

fn parse(input: &str) -> JsonParser<BufferSource<'_>> {
    JsonParser::new_with_options(
        BufferSource::from_str(input),
        JsonParserOptionsBuilder::default()
            .with_language(Language::Json5E)
            .build(),
    )
}

fn events(input: &str) -> Vec<JsonEvent> {
    let mut parser = parse(input);
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
fn hash_comments_are_skipped() {
    assert_eq!(
        events("[1, # one\n2]"),
        vec![
            JsonEvent::ArrayStart,
            JsonEvent::Number,
            JsonEvent::Number,
            JsonEvent::ArrayEnd,
            JsonEvent::Done,
        ]
    );
}

#[test]
fn newline_substitutes_for_comma_between_array_elements() {
    assert_eq!(
        events("[1\n2\n3]"),
        vec![
            JsonEvent::ArrayStart,
            JsonEvent::Number,
            JsonEvent::Number,
            JsonEvent::Number,
            JsonEvent::ArrayEnd,
            JsonEvent::Done,
        ]
    );
}

#[test]
fn newline_substitutes_for_comma_between_object_members() {
    let mut parser = parse("{a: 1\nb: 2}");
    assert_eq!(parser.next_event(), JsonEvent::ObjectStart);
    assert_eq!(parser.next_event(), JsonEvent::Name);
    assert_eq!(parser.next_event(), JsonEvent::Number);
    assert_eq!(parser.next_event(), JsonEvent::Name);
    assert_eq!(parser.current_str().unwrap(), "b");
    assert_eq!(parser.next_event(), JsonEvent::Number);
    assert_eq!(parser.next_event(), JsonEvent::ObjectEnd);
}

#[test]
fn comma_still_works_alongside_newline() {
    assert_eq!(
        events("[1,\n2, 3]"),
        vec![
            JsonEvent::ArrayStart,
            JsonEvent::Number,
            JsonEvent::Number,
            JsonEvent::Number,
            JsonEvent::ArrayEnd,
            JsonEvent::Done,
        ]
    );
}

#[test]
fn implied_top_level_object_from_bare_identifiers() {
    let mut parser = parse("name: 'Elvis'\nage: 42");
    assert_eq!(parser.next_event(), JsonEvent::ObjectStart);
    assert_eq!(parser.next_event(), JsonEvent::Name);
    assert_eq!(parser.current_str().unwrap(), "name");
    assert_eq!(parser.next_event(), JsonEvent::String);
    assert_eq!(parser.next_event(), JsonEvent::Name);
    assert_eq!(parser.current_str().unwrap(), "age");
    assert_eq!(parser.next_event(), JsonEvent::Number);
    assert_eq!(parser.next_event(), JsonEvent::ObjectEnd);
    assert_eq!(parser.next_event(), JsonEvent::Done);
}

#[test]
fn implied_top_level_object_from_quoted_name() {
    let mut parser = parse(r#""a b": 1"#);
    assert_eq!(parser.next_event(), JsonEvent::ObjectStart);
    assert_eq!(parser.next_event(), JsonEvent::Name);
    assert_eq!(parser.current_str().unwrap(), "a b");
    assert_eq!(parser.next_event(), JsonEvent::Number);
    assert_eq!(parser.next_event(), JsonEvent::ObjectEnd);
}

#[test]
fn explicit_braces_suppress_the_implied_object() {
    let got = events("{a: 1}");
    assert_eq!(
        got,
        vec![
            JsonEvent::ObjectStart,
            JsonEvent::Name,
            JsonEvent::Number,
            JsonEvent::ObjectEnd,
            JsonEvent::Done,
        ]
    );
}

#[test]
fn bare_scalar_with_no_colon_is_a_plain_top_level_value() {
    assert_eq!(events("42"), vec![JsonEvent::Number, JsonEvent::Done]);
    assert_eq!(events("true"), vec![JsonEvent::True, JsonEvent::Done]);
    assert_eq!(events(r#""just a string""#), vec![JsonEvent::String, JsonEvent::Done]);
}

#[test]
fn bare_array_with_no_colon_is_a_plain_top_level_value() {
    assert_eq!(
        events("[1, 2]"),
        vec![
            JsonEvent::ArrayStart,
            JsonEvent::Number,
            JsonEvent::Number,
            JsonEvent::ArrayEnd,
            JsonEvent::Done,
        ]
    );
}

#[test]
fn empty_input_is_an_empty_implied_object() {
    let mut parser = parse("");
    assert_eq!(parser.next_event(), JsonEvent::ObjectStart);
    assert_eq!(parser.next_event(), JsonEvent::ObjectEnd);
    assert_eq!(parser.next_event(), JsonEvent::Done);
}

#[test]
fn implied_object_member_value_can_itself_be_a_container() {
    let mut parser = parse("items: [1, 2, 3]\nflag: true");
    assert_eq!(parser.next_event(), JsonEvent::ObjectStart);
    assert_eq!(parser.next_event(), JsonEvent::Name);
    assert_eq!(parser.next_event(), JsonEvent::ArrayStart);
    assert_eq!(parser.skip(), JsonEvent::ArrayEnd);
    assert_eq!(parser.next_event(), JsonEvent::Name);
    assert_eq!(parser.current_str().unwrap(), "flag");
    assert_eq!(parser.next_event(), JsonEvent::True);
    assert_eq!(parser.next_event(), JsonEvent::ObjectEnd);
    assert_eq!(parser.next_event(), JsonEvent::Done);
}
