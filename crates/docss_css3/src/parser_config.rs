use docss_shared::byte_stream::Encoding;

/// ParserConfig holds the configuration for the parser
#[derive(Clone, Debug)]
pub struct ParserConfig {
    /// Optional source filename or url, only used for logging
    pub source: Option<String>,
    /// Attach a copy of the complete input to returned errors, so they can show the offending line
    pub attach_input: bool,
    /// Encoding of a stream without byte order mark. When not set, the encoding of the stream is
    /// kept as is (one byte per character for readers, UTF-8 for strings). A UTF-8 byte order
    /// mark always switches the stream to UTF-8.
    pub encoding: Option<Encoding>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            source: None,
            attach_input: true,
            encoding: None,
        }
    }
}
