/// All possible events returned by [`JsonParser::next_event()`](crate::JsonParser::next_event())
/// and [`JsonParser::peek_event()`](crate::JsonParser::peek_event()).
///
/// Events are produced in strict source order. `String`, `Number`, and
/// `Name` carry their payload in the parser's scratch buffer; call
/// [`JsonParser::current_str()`](crate::JsonParser::current_str()) to read
/// it while the event is current.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum JsonEvent {
    /// The parsed text contains a syntax, lexical, encoding, or resource
    /// error. Call
    /// [`JsonParser::current_error()`](crate::JsonParser::current_error())
    /// for a human-readable message. Once an `Error` has been produced, the
    /// parser is latched: every subsequent call returns `Error` again until
    /// [`JsonParser::reset()`](crate::JsonParser::reset()).
    Error,

    /// There is nothing more to parse: either the single top-level value
    /// (non-streaming mode) has been fully consumed and only trailing
    /// whitespace remains, or (streaming mode) the underlying source has
    /// reached end of input between top-level values.
    Done,

    /// The start of a JSON object (`{`), including one implied by JSON5E
    /// when the top-level text omits the outer braces.
    ObjectStart,

    /// The end of a JSON object (`}`).
    ObjectEnd,

    /// The start of a JSON array (`[`).
    ArrayStart,

    /// The end of a JSON array (`]`).
    ArrayEnd,

    /// A string value.
    String,

    /// A number, reported as its original decimal/hex digits; the core
    /// never converts it to a native numeric type.
    Number,

    /// An object member name.
    Name,

    /// The literal `true`.
    True,

    /// The literal `false`.
    False,

    /// The literal `null`.
    Null,
}

impl JsonEvent {
    /// `true` if this event carries a payload in the scratch buffer
    /// (`String`, `Number`, or `Name`).
    pub fn has_payload(self) -> bool {
        matches!(self, JsonEvent::String | JsonEvent::Number | JsonEvent::Name)
    }

    /// `true` if this event opens a container (`ObjectStart`/`ArrayStart`).
    pub fn opens_container(self) -> bool {
        matches!(self, JsonEvent::ObjectStart | JsonEvent::ArrayStart)
    }

    /// `true` if this event closes a container (`ObjectEnd`/`ArrayEnd`).
    pub fn closes_container(self) -> bool {
        matches!(self, JsonEvent::ObjectEnd | JsonEvent::ArrayEnd)
    }
}

/// The kind of container a [`JsonParser`](crate::JsonParser) is currently
/// positioned inside, as reported by
/// [`JsonParser::context()`](crate::JsonParser::context()).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum JsonContext {
    /// Not inside any container (top level, before the first event or after
    /// the last one).
    Done,

    /// Inside an object. The accompanying count is the number of name/value
    /// events already emitted at this level; it is odd exactly after a name.
    Object,

    /// Inside an array. The accompanying count is the number of value events
    /// already emitted at this level.
    Array,
}
