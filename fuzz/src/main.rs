use jstream::options::{JsonParserOptionsBuilder, Language};
use jstream::source::BufferSource;
use jstream::{JsonEvent, JsonParser};

#[macro_use]
extern crate afl;

fn main() {
    fuzz!(|data: &[u8]| {
        // Drive the pull loop directly against an in-memory source: no
        // feeder indirection needed, since this parser reads straight
        // through to whatever ByteSource it's given.
        for language in [Language::Json, Language::Json5, Language::Json5E] {
            let mut parser = JsonParser::new_with_options(
                BufferSource::new(data),
                JsonParserOptionsBuilder::default()
                    .with_language(language)
                    .with_streaming(true)
                    .build(),
            );
            loop {
                let e = parser.next_event();
                if e == JsonEvent::Done || e == JsonEvent::Error {
                    break;
                }
            }
        }
    });
}
