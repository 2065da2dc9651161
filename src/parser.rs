//! The event state machine. Grounded on `json_next`/`json_peek`/`json_reset`
//! and the `read_value` dispatcher in `libpdjson5.c`: a direct-call
//! recursive-descent recognizer driven by the caller, one byte source and
//! one nesting stack per parser. This parser calls straight through to its
//! [`ByteSource`], blocking the caller's thread if the source blocks, rather
//! than returning a "need more input" event and waiting to be fed again.

use crate::diagnostic;
use crate::error::InvalidStringValueError;
use crate::event::{JsonContext, JsonEvent};
use crate::lexer::{identifier, keyword, number, string};
use crate::location::Location;
use crate::options::{JsonParserOptions, JsonParserOptionsBuilder, Language};
use crate::scratch::Scratch;
use crate::skip::skip_whitespace_and_comments;
use crate::source::ByteSource;
use crate::stack::{ContainerKind, NestingStack};

enum Separator {
    Close,
    Continue,
}

/// An incremental, pull-based parser for JSON, JSON5, and JSON5E.
///
/// The caller drives everything: construct a parser over a [`ByteSource`],
/// then repeatedly call [`next_event`](Self::next_event) until it returns
/// [`JsonEvent::Done`] or [`JsonEvent::Error`]. The parser never spawns
/// threads, never buffers more than one token's worth of payload, and never
/// reads ahead beyond what the current token requires.
pub struct JsonParser<S> {
    source: S,
    options: JsonParserOptions,
    stack: NestingStack,
    scratch: Scratch,
    loc: Location,
    ntokens: u64,
    error: Option<String>,
    /// Caches the result of [`peek_event`](Self::peek_event) so a following
    /// [`next_event`](Self::next_event) returns it without advancing twice.
    pending: Option<JsonEvent>,
    /// An event already decided upon but not yet returned -- distinct from
    /// `pending`, which only caches a `peek_event()` result. Used for the
    /// synthetic `Name` that follows an implied top-level object's
    /// synthetic `ObjectStart` (see `open_implied_object_with_name`), so
    /// `advance()` hands it out on the very next call without re-entering
    /// the grammar.
    queued: Option<JsonEvent>,
    last_event: JsonEvent,
    /// Whether a newline (or `#`/`//`/`/* */` comment run containing one)
    /// was crossed since the last real token, for JSON5E's optional-comma
    /// rule -- cleared every time a real token is read.
    newline_since_last_token: bool,
    done: bool,
}

impl<S: ByteSource> JsonParser<S> {
    /// Create a parser with default options (strict JSON, non-streaming).
    pub fn new(source: S) -> Self {
        Self::new_with_options(source, JsonParserOptions::default())
    }

    /// Create a parser with custom options. See
    /// [`JsonParserOptionsBuilder`].
    pub fn new_with_options(source: S, options: JsonParserOptions) -> Self {
        JsonParser {
            source,
            options,
            stack: NestingStack::new(),
            scratch: Scratch::new(),
            loc: Location::new(),
            ntokens: 0,
            error: None,
            pending: None,
            queued: None,
            last_event: JsonEvent::Done,
            newline_since_last_token: false,
            done: false,
        }
    }

    /// The options this parser was constructed with.
    pub fn options(&self) -> JsonParserOptions {
        self.options
    }

    /// Advance and return the next event.
    pub fn next_event(&mut self) -> JsonEvent {
        let event = match self.pending.take() {
            Some(e) => e,
            None => self.advance(),
        };
        self.last_event = event;
        event
    }

    /// Advance and return the next event without consuming it: a following
    /// call to [`next_event`](Self::next_event) returns the same value.
    /// Only one event of lookahead is supported.
    pub fn peek_event(&mut self) -> JsonEvent {
        if let Some(event) = self.pending {
            return event;
        }
        let event = self.advance();
        self.pending = Some(event);
        self.last_event = event;
        event
    }

    /// If the last event returned was [`JsonEvent::ObjectStart`] or
    /// [`JsonEvent::ArrayStart`], consume and discard every event up to and
    /// including its matching close, returning that close event. Otherwise
    /// a no-op that returns the last event again.
    pub fn skip(&mut self) -> JsonEvent {
        if !self.last_event.opens_container() {
            return self.last_event;
        }
        let target_depth = self.stack.depth().saturating_sub(1);
        loop {
            let event = self.next_event();
            match event {
                JsonEvent::Error | JsonEvent::Done => return event,
                e if e.closes_container() && self.stack.depth() == target_depth => return e,
                _ => {}
            }
        }
    }

    /// Consume and discard events until one matching `target` is produced
    /// (inclusive), or until [`JsonEvent::Done`]/[`JsonEvent::Error`].
    pub fn skip_until(&mut self, target: JsonEvent) -> JsonEvent {
        loop {
            let event = self.next_event();
            if event == target || event == JsonEvent::Error || event == JsonEvent::Done {
                return event;
            }
        }
    }

    /// Reset the parsing state machine (nesting stack, latched error,
    /// scratch buffer) so the same source can be re-parsed or a new
    /// top-level value can be read from wherever the source currently
    /// stands. Mirrors `json_reset` in the original: it does not rewind the
    /// source's position or the line/column counters.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.scratch.clear();
        self.error = None;
        self.pending = None;
        self.queued = None;
        self.last_event = JsonEvent::Done;
        self.newline_since_last_token = false;
        self.done = false;
        self.ntokens = 0;
    }

    /// The payload of the current `String`, `Number`, or `Name` event.
    pub fn current_str(&self) -> Result<&str, InvalidStringValueError> {
        self.scratch.as_str()
    }

    /// The byte length of the current event's payload.
    pub fn current_len(&self) -> usize {
        self.scratch.len()
    }

    /// A human-readable message describing why [`JsonEvent::Error`] was
    /// produced, or `None` if no error has occurred yet.
    pub fn current_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// 1-based line number of the start of the current token, or of the
    /// offending byte if the current event is an [`JsonEvent::Error`] that
    /// latched partway through a token.
    pub fn lineno(&self) -> u64 {
        if self.loc.has_start_snapshot() {
            self.loc.start_lineno
        } else {
            self.loc.lineno()
        }
    }

    /// 1-based column number of the start of the current token, or of the
    /// offending byte if the current event is an [`JsonEvent::Error`] that
    /// latched partway through a token.
    pub fn column(&self) -> u64 {
        if self.loc.has_start_snapshot() {
            self.loc.start_colno
        } else {
            self.loc.column(self.source.position())
        }
    }

    /// Number of bytes consumed from the source so far.
    pub fn position(&self) -> usize {
        self.source.position()
    }

    /// Current nesting depth (0 at the top level).
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// The kind of container currently open, and how many name/value events
    /// have already been produced at that level.
    pub fn context(&self) -> (JsonContext, u64) {
        self.stack.context()
    }

    fn fail(&mut self, message: String) -> JsonEvent {
        self.latch_error(message);
        JsonEvent::Error
    }

    /// Latch an error without necessarily returning `Error` immediately
    /// (used by callers that report failure through a `Result` instead, e.g.
    /// the separator checks). Invalidates the token-start snapshot so
    /// `lineno()`/`column()` report the offending byte's live position
    /// rather than the stale start of the previous token.
    fn latch_error(&mut self, message: String) {
        self.error = Some(message);
        self.loc.invalidate_start();
    }

    fn skip_ws(&mut self) -> Result<(), ()> {
        match skip_whitespace_and_comments(&mut self.source, &mut self.loc, self.options.language()) {
            Ok(outcome) => {
                if outcome.newline_seen {
                    self.newline_since_last_token = true;
                }
                Ok(())
            }
            Err(message) => {
                self.latch_error(message);
                Err(())
            }
        }
    }

    fn bump_count(&mut self) {
        if let Some(frame) = self.stack.top_mut() {
            frame.count += 1;
        }
    }

    fn advance(&mut self) -> JsonEvent {
        if self.error.is_some() {
            return JsonEvent::Error;
        }
        if let Some(event) = self.queued.take() {
            return event;
        }
        match self.stack.top().map(|f| f.kind) {
            None => self.advance_top_level(),
            Some(ContainerKind::Object) => self.advance_in_object(),
            Some(ContainerKind::Array) => self.advance_in_array(),
        }
    }

    fn advance_top_level(&mut self) -> JsonEvent {
        if self.ntokens == 0 {
            return self.parse_first_token();
        }
        if self.done {
            return JsonEvent::Done;
        }
        if self.skip_ws().is_err() {
            return JsonEvent::Error;
        }
        match self.source.peek() {
            None => {
                if !self.options.streaming() {
                    self.done = true;
                }
                JsonEvent::Done
            }
            Some(_) => {
                if self.options.streaming() {
                    self.parse_value()
                } else {
                    self.fail("unexpected trailing input after top-level value".to_string())
                }
            }
        }
    }

    /// The very first token of the whole input. Under JSON5E only, this
    /// also sniffs for an implied top-level object: a bare identifier or
    /// string followed by `:` is a member name rather than a standalone
    /// value.
    fn parse_first_token(&mut self) -> JsonEvent {
        if self.skip_ws().is_err() {
            return JsonEvent::Error;
        }
        if !self.options.language().allows_json5e_syntax() {
            return self.parse_value();
        }
        match self.source.peek() {
            Some(b'{') | Some(b'[') => self.parse_value(),
            Some(b'"') | Some(b'\'') => self.sniff_implied_object_from_string(),
            Some(b) if identifier::is_first_id_char(b) => self.sniff_implied_object_from_identifier(),
            None => {
                // Empty input reads as an empty implied object; the next
                // call sees an empty, immediately-exhausted object frame and
                // closes it through the ordinary implied-EOF path below.
                self.open_implied_object()
            }
            _ => self.parse_value(),
        }
    }

    fn open_implied_object(&mut self) -> JsonEvent {
        if !self.stack.push_implied(self.options.max_depth()) {
            return self.fail("maximum nesting depth exceeded".to_string());
        }
        self.ntokens += 1;
        JsonEvent::ObjectStart
    }

    fn sniff_implied_object_from_string(&mut self) -> JsonEvent {
        let quote = self.source.get().expect("peek confirmed a byte");
        self.loc.snapshot_start(self.source.position() - 1);
        if let Err(e) = string::read_string(
            &mut self.source,
            &mut self.scratch,
            &mut self.loc,
            quote,
            self.options.language(),
        ) {
            return self.fail(e);
        }
        match self.peek_colon_ahead() {
            Ok(true) => self.open_implied_object_with_name(JsonEvent::Name),
            Ok(false) => {
                self.ntokens += 1;
                self.newline_since_last_token = false;
                JsonEvent::String
            }
            Err(e) => self.fail(e),
        }
    }

    fn sniff_implied_object_from_identifier(&mut self) -> JsonEvent {
        self.loc.snapshot_start(self.source.position());
        if let Err(e) =
            identifier::read_identifier(&mut self.source, &mut self.scratch, self.options.language())
        {
            return self.fail(e);
        }
        match self.peek_colon_ahead() {
            Ok(true) => self.open_implied_object_with_name(JsonEvent::Name),
            Ok(false) => self.value_from_buffered_keyword(),
            Err(e) => self.fail(e),
        }
    }

    fn open_implied_object_with_name(&mut self, name_event: JsonEvent) -> JsonEvent {
        if !self.stack.push_implied(self.options.max_depth()) {
            return self.fail("maximum nesting depth exceeded".to_string());
        }
        // The name has already been read, so the frame moves straight to
        // "expecting ':'" -- but callers still need an ObjectStart first,
        // same as every other object, so the already-read name is queued
        // and handed out on the very next advance().
        self.stack.top_mut().unwrap().count = 1;
        self.ntokens += 1;
        self.newline_since_last_token = false;
        self.queued = Some(name_event);
        JsonEvent::ObjectStart
    }

    fn value_from_buffered_keyword(&mut self) -> JsonEvent {
        let language = self.options.language();
        let buffered = self.scratch.as_bytes().to_vec();
        let event = if keyword::matches_buffered(&buffered, "true") {
            Some(JsonEvent::True)
        } else if keyword::matches_buffered(&buffered, "false") {
            Some(JsonEvent::False)
        } else if keyword::matches_buffered(&buffered, "null") {
            Some(JsonEvent::Null)
        } else if language.allows_json5_syntax() && keyword::matches_buffered(&buffered, "NaN") {
            Some(JsonEvent::Number)
        } else if language.allows_json5_syntax() && keyword::matches_buffered(&buffered, "Infinity") {
            Some(JsonEvent::Number)
        } else {
            None
        };
        match event {
            Some(e) => {
                self.ntokens += 1;
                self.newline_since_last_token = false;
                e
            }
            None => self.fail(format!(
                "'{}' is not a valid value",
                String::from_utf8_lossy(&buffered)
            )),
        }
    }

    /// Skip whitespace/comments and report whether `:` follows, without
    /// consuming it.
    fn peek_colon_ahead(&mut self) -> Result<bool, String> {
        let outcome =
            skip_whitespace_and_comments(&mut self.source, &mut self.loc, self.options.language())?;
        if outcome.newline_seen {
            self.newline_since_last_token = true;
        }
        Ok(self.source.peek() == Some(b':'))
    }

    fn parse_value(&mut self) -> JsonEvent {
        if self.skip_ws().is_err() {
            return JsonEvent::Error;
        }
        self.loc.snapshot_start(self.source.position());
        let language = self.options.language();
        match self.source.peek() {
            None => self.fail("unexpected end of input, expected value".to_string()),
            Some(b'{') => {
                self.source.get();
                self.open_object()
            }
            Some(b'[') => {
                self.source.get();
                self.open_array()
            }
            Some(b'"') => {
                self.source.get();
                self.finish_string(b'"', false)
            }
            Some(b'\'') if language.allows_json5_syntax() => {
                self.source.get();
                self.finish_string(b'\'', false)
            }
            Some(b't') => self.read_keyword_value(JsonEvent::True),
            Some(b'f') => self.read_keyword_value(JsonEvent::False),
            Some(b'n') => self.read_keyword_value(JsonEvent::Null),
            Some(b'-') | Some(b'0'..=b'9') => self.read_number_value(),
            Some(b'+') | Some(b'.') if language.allows_json5_syntax() => self.read_number_value(),
            Some(b'I') | Some(b'N') if language.allows_json5_syntax() => self.read_number_value(),
            Some(b) => self.fail(format!(
                "unexpected character {}, expected a value",
                diagnostic::describe_byte(b)
            )),
        }
    }

    fn open_object(&mut self) -> JsonEvent {
        if !self.stack.push(ContainerKind::Object, self.options.max_depth()) {
            return self.fail("maximum nesting depth exceeded".to_string());
        }
        self.ntokens += 1;
        self.newline_since_last_token = false;
        JsonEvent::ObjectStart
    }

    fn open_array(&mut self) -> JsonEvent {
        if !self.stack.push(ContainerKind::Array, self.options.max_depth()) {
            return self.fail("maximum nesting depth exceeded".to_string());
        }
        self.ntokens += 1;
        self.newline_since_last_token = false;
        JsonEvent::ArrayStart
    }

    fn finish_string(&mut self, quote: u8, is_name: bool) -> JsonEvent {
        match string::read_string(
            &mut self.source,
            &mut self.scratch,
            &mut self.loc,
            quote,
            self.options.language(),
        ) {
            Ok(()) => {
                self.ntokens += 1;
                self.newline_since_last_token = false;
                if is_name {
                    JsonEvent::Name
                } else {
                    JsonEvent::String
                }
            }
            Err(e) => self.fail(e),
        }
    }

    fn read_number_value(&mut self) -> JsonEvent {
        match number::read_number(&mut self.source, &mut self.scratch, self.options.language()) {
            Ok(()) => {
                self.ntokens += 1;
                self.newline_since_last_token = false;
                JsonEvent::Number
            }
            Err(e) => self.fail(e),
        }
    }

    fn read_keyword_value(&mut self, kind: JsonEvent) -> JsonEvent {
        let result = match kind {
            JsonEvent::True => keyword::read_true(&mut self.source),
            JsonEvent::False => keyword::read_false(&mut self.source),
            JsonEvent::Null => keyword::read_null(&mut self.source),
            _ => unreachable!("read_keyword_value only called with a keyword event"),
        };
        match result {
            Ok(()) => {
                self.ntokens += 1;
                self.newline_since_last_token = false;
                kind
            }
            Err(e) => self.fail(e),
        }
    }

    fn read_name(&mut self) -> JsonEvent {
        if self.skip_ws().is_err() {
            return JsonEvent::Error;
        }
        self.loc.snapshot_start(self.source.position());
        let language = self.options.language();
        match self.source.peek() {
            Some(b'"') => {
                self.source.get();
                self.finish_string(b'"', true)
            }
            Some(b'\'') if language.allows_json5_syntax() => {
                self.source.get();
                self.finish_string(b'\'', true)
            }
            Some(b) if language.allows_json5_syntax() && identifier::is_first_id_char(b) => {
                match identifier::read_identifier(&mut self.source, &mut self.scratch, language) {
                    Ok(()) => {
                        self.ntokens += 1;
                        self.newline_since_last_token = false;
                        JsonEvent::Name
                    }
                    Err(e) => self.fail(e),
                }
            }
            None => self.fail("unexpected end of input, expected member name".to_string()),
            Some(b) => self.fail(format!(
                "expected member name, found {}",
                diagnostic::describe_byte(b)
            )),
        }
    }

    fn advance_in_object(&mut self) -> JsonEvent {
        let count = self.stack.top().unwrap().count;
        if self.skip_ws().is_err() {
            return JsonEvent::Error;
        }
        if count % 2 == 1 {
            self.loc.snapshot_start(self.source.position());
            match self.source.peek() {
                Some(b':') => {
                    self.source.get();
                }
                None => return self.fail("unexpected end of input, expected ':'".to_string()),
                Some(b) => {
                    return self.fail(format!(
                        "expected ':', found {}",
                        diagnostic::describe_byte(b)
                    ))
                }
            }
            self.newline_since_last_token = false;
            let value = self.parse_value();
            if value != JsonEvent::Error {
                self.bump_count();
            }
            return value;
        }

        if count > 0 {
            match self.consume_separator_before_next_member() {
                Ok(Separator::Close) => return self.close_object(),
                Ok(Separator::Continue) => {}
                Err(()) => return JsonEvent::Error,
            }
        } else {
            match self.source.peek() {
                Some(b'}') => {
                    self.source.get();
                    return self.close_object();
                }
                None => return self.eof_in_object(),
                _ => {}
            }
        }
        self.read_name()
    }

    fn consume_separator_before_next_member(&mut self) -> Result<Separator, ()> {
        let language = self.options.language();
        match self.source.peek() {
            Some(b'}') => {
                self.source.get();
                Ok(Separator::Close)
            }
            Some(b',') => {
                self.source.get();
                self.newline_since_last_token = false;
                if self.skip_ws().is_err() {
                    return Err(());
                }
                if language.allows_json5_syntax() && self.source.peek() == Some(b'}') {
                    self.source.get();
                    Ok(Separator::Close)
                } else {
                    Ok(Separator::Continue)
                }
            }
            None => {
                if self.stack.top().map(|f| f.implied).unwrap_or(false) {
                    Ok(Separator::Close)
                } else {
                    self.latch_error("unexpected end of input, expected ',' or '}'".to_string());
                    Err(())
                }
            }
            Some(_) if language.allows_json5e_syntax() && self.newline_since_last_token => {
                if self.source.peek() == Some(b'}') {
                    self.source.get();
                    Ok(Separator::Close)
                } else {
                    Ok(Separator::Continue)
                }
            }
            Some(b) => {
                self.latch_error(format!(
                    "expected ',' or '}}', found {}",
                    diagnostic::describe_byte(b)
                ));
                Err(())
            }
        }
    }

    fn close_object(&mut self) -> JsonEvent {
        self.stack.pop();
        self.ntokens += 1;
        self.newline_since_last_token = false;
        JsonEvent::ObjectEnd
    }

    fn eof_in_object(&mut self) -> JsonEvent {
        let implied = self.stack.top().map(|f| f.implied).unwrap_or(false);
        if implied {
            self.close_object()
        } else {
            self.fail("unexpected end of input inside object".to_string())
        }
    }

    fn advance_in_array(&mut self) -> JsonEvent {
        let count = self.stack.top().unwrap().count;
        if self.skip_ws().is_err() {
            return JsonEvent::Error;
        }
        if count > 0 {
            match self.consume_separator_before_next_element() {
                Ok(Separator::Close) => return self.close_array(),
                Ok(Separator::Continue) => {}
                Err(()) => return JsonEvent::Error,
            }
        } else {
            match self.source.peek() {
                Some(b']') => {
                    self.source.get();
                    return self.close_array();
                }
                None => return self.fail("unexpected end of input inside array".to_string()),
                _ => {}
            }
        }
        let value = self.parse_value();
        if value != JsonEvent::Error {
            self.bump_count();
        }
        value
    }

    fn consume_separator_before_next_element(&mut self) -> Result<Separator, ()> {
        let language = self.options.language();
        match self.source.peek() {
            Some(b']') => {
                self.source.get();
                Ok(Separator::Close)
            }
            Some(b',') => {
                self.source.get();
                self.newline_since_last_token = false;
                if self.skip_ws().is_err() {
                    return Err(());
                }
                if language.allows_json5_syntax() && self.source.peek() == Some(b']') {
                    self.source.get();
                    Ok(Separator::Close)
                } else {
                    Ok(Separator::Continue)
                }
            }
            None => {
                self.latch_error("unexpected end of input, expected ',' or ']'".to_string());
                Err(())
            }
            Some(_) if language.allows_json5e_syntax() && self.newline_since_last_token => {
                if self.source.peek() == Some(b']') {
                    self.source.get();
                    Ok(Separator::Close)
                } else {
                    Ok(Separator::Continue)
                }
            }
            Some(b) => {
                self.latch_error(format!(
                    "expected ',' or ']', found {}",
                    diagnostic::describe_byte(b)
                ));
                Err(())
            }
        }
    }

    fn close_array(&mut self) -> JsonEvent {
        self.stack.pop();
        self.ntokens += 1;
        self.newline_since_last_token = false;
        JsonEvent::ArrayEnd
    }
}

impl<S: ByteSource> crate::reset::Reset for JsonParser<S> {
    fn reset(&mut self) {
        JsonParser::reset(self)
    }
}
