//! # jstream
//!
//! An incremental, pull-based parser for JSON ([RFC 8259]), [JSON5], and
//! JSON5E (JSON5 plus `#` line comments, newline-as-comma, and an implied
//! top-level object).
//!
//! `jstream` only tokenizes: it produces a flat stream of [`JsonEvent`]s and
//! never builds a tree, never converts numbers to a native numeric type, and
//! never materializes an object or array in memory. Callers drive the parser
//! themselves by calling [`JsonParser::next_event()`] in a loop; there is no
//! callback or visitor to implement.
//!
//! [RFC 8259]: https://www.rfc-editor.org/rfc/rfc8259
//! [JSON5]: https://json5.org
//!
//! ## Examples
//!
//! ### Parsing a byte slice
//!
//! [`BufferSource`](crate::source::BufferSource) feeds the parser from an
//! in-memory byte slice or `&str`.
//!
//! ```
//! use jstream::{JsonEvent, JsonParser};
//! use jstream::source::BufferSource;
//!
//! let mut parser = JsonParser::new(BufferSource::from_str(r#"{"name": "Elvis"}"#));
//! loop {
//!     let event = parser.next_event();
//!
//!     // do something useful with `event`
//!     // match event {
//!     //     ...
//!     // }
//!
//!     assert_ne!(event, JsonEvent::Error);
//!
//!     if event == JsonEvent::Done {
//!         break;
//!     }
//! }
//! ```
//!
//! ### Parsing from a `Read`er
//!
//! [`StreamSource`](crate::source::StreamSource) pulls bytes from anything
//! implementing [`std::io::Read`], such as a [`BufReader`](std::io::BufReader)
//! over a file or socket.
//!
//! ```no_run
//! use jstream::{JsonEvent, JsonParser};
//! use jstream::source::StreamSource;
//!
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! let file = File::open("data.json").unwrap();
//! let reader = BufReader::new(file);
//!
//! let mut parser = JsonParser::new(StreamSource::new(reader));
//! loop {
//!     let event = parser.next_event();
//!
//!     assert_ne!(event, JsonEvent::Error);
//!
//!     if event == JsonEvent::Done {
//!         break;
//!     }
//! }
//! ```
//!
//! ### Parsing JSON5 or JSON5E
//!
//! Select a dialect with [`JsonParserOptionsBuilder::with_language()`].
//!
//! ```
//! use jstream::{JsonEvent, JsonParser};
//! use jstream::options::{JsonParserOptionsBuilder, Language};
//! use jstream::source::BufferSource;
//!
//! // JSON5E allows unquoted names, trailing commas, comments, and an
//! // implied top-level object.
//! let mut parser = JsonParser::new_with_options(
//!     BufferSource::from_str("name: 'Elvis' // the man himself\nage: 42,"),
//!     JsonParserOptionsBuilder::default()
//!         .with_language(Language::Json5E)
//!         .build(),
//! );
//! assert_eq!(parser.next_event(), JsonEvent::ObjectStart);
//! assert_eq!(parser.next_event(), JsonEvent::Name);
//! assert_eq!(parser.current_str().unwrap(), "name");
//! assert_eq!(parser.next_event(), JsonEvent::String);
//! assert_eq!(parser.next_event(), JsonEvent::Name);
//! assert_eq!(parser.next_event(), JsonEvent::Number);
//! assert_eq!(parser.next_event(), JsonEvent::ObjectEnd);
//! assert_eq!(parser.next_event(), JsonEvent::Done);
//! ```

mod diagnostic;
mod error;
mod event;
mod lexer;
mod location;
pub mod options;
mod parser;
pub mod reset;
mod scratch;
mod skip;
pub mod source;
mod stack;

pub use error::InvalidStringValueError;
pub use event::{JsonContext, JsonEvent};
pub use options::{JsonParserOptions, JsonParserOptionsBuilder, Language};
pub use parser::JsonParser;
pub use reset::Reset;
