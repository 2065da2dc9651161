//! Parser configuration: `JsonParserOptions` plus a `JsonParserOptionsBuilder`,
//! generalized with a [`Language`] selector so the same parser can recognize
//! JSON, JSON5, or JSON5E -- the equivalent of `json_set_language` /
//! `enum json_language` in `libpdjson5.c`.

/// Which grammar a [`JsonParser`](super::JsonParser) accepts.
///
/// `Json5E` is a strict superset of `Json5`, which is a strict superset of
/// `Json`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Language {
    /// Strict JSON (RFC 8259).
    #[default]
    Json,
    /// JSON5 (<https://json5.org>): unquoted/single-quoted strings and
    /// member names, trailing commas, `//`/`/* */` comments, leading `+`,
    /// leading/trailing `.`, hexadecimal integers, `Infinity`/`NaN`, and
    /// more permissive whitespace.
    Json5,
    /// JSON5 plus `#` line comments, optional commas (a crossed newline may
    /// stand in for `,` between array elements or object members), and an
    /// implied top-level object (`a: 1, b: 2` parses as if wrapped in `{}`).
    Json5E,
}

impl Language {
    pub fn allows_json5_syntax(&self) -> bool {
        !matches!(self, Language::Json)
    }

    pub fn allows_json5e_syntax(&self) -> bool {
        matches!(self, Language::Json5E)
    }
}

/// Options for [`JsonParser`](super::JsonParser). Use
/// [`JsonParserOptionsBuilder`] to create instances of this struct.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JsonParserOptions {
    /// The maximum nesting depth
    pub(super) max_depth: usize,

    /// `true` if streaming mode should be enabled, which means that the
    /// parser will be able to handle a stream of multiple JSON values
    pub(super) streaming: bool,

    /// Which grammar to accept
    pub(super) language: Language,
}

/// A builder for [`JsonParserOptions`]
///
/// ```rust
/// use jstream::options::{JsonParserOptionsBuilder, Language};
/// use jstream::source::BufferSource;
/// use jstream::JsonParser;
///
/// let mut parser = JsonParser::new_with_options(
///     BufferSource::from_str("{}"),
///     JsonParserOptionsBuilder::default()
///         .with_max_depth(16)
///         .with_language(Language::Json5)
///         .build(),
/// );
/// ```
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct JsonParserOptionsBuilder {
    options: JsonParserOptions,
}

impl Default for JsonParserOptions {
    /// Returns default JSON parser options
    fn default() -> Self {
        Self {
            max_depth: 2048,
            streaming: false,
            language: Language::Json,
        }
    }
}

impl JsonParserOptions {
    /// Returns the maximum nesting depth
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns `true` if streaming mode should be enabled, which means that
    /// the parser will be able to handle a stream of multiple JSON values
    pub fn streaming(&self) -> bool {
        self.streaming
    }

    /// Returns the grammar this parser accepts
    pub fn language(&self) -> Language {
        self.language
    }
}

impl JsonParserOptionsBuilder {
    /// Set the maximum nesting depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.options.max_depth = max_depth;
        self
    }

    /// Enable streaming mode, which means that the parser will be able to
    /// handle a stream of multiple JSON values. Values must be clearly
    /// separable. They must either be self-delineating values (i.e. arrays,
    /// objects, strings) or keywords (i.e. `true`, `false`, `null`), or they
    /// must be separated either by white space, at least one self-delineating
    /// value, or at least one keyword.
    ///
    /// ## Example streams
    ///
    /// `1 2 3 4 5`
    ///
    /// `[1,2,3][4,5,6]{"key": "value"} 7 8 9`
    ///
    /// `"a""b"[1, 2, 3] {"key": "value"}`
    pub fn with_streaming(mut self, streaming: bool) -> Self {
        self.options.streaming = streaming;
        self
    }

    /// Set which grammar the parser accepts. Defaults to [`Language::Json`].
    pub fn with_language(mut self, language: Language) -> Self {
        self.options.language = language;
        self
    }

    /// Create a new [`JsonParserOptions`] object
    pub fn build(self) -> JsonParserOptions {
        self.options
    }
}
