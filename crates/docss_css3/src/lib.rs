//! CSS3 parser. The scanner and recursive descent parser turn a byte stream into a [`Document`],
//! which renders back to canonical css through `Display`.
use crate::node::Document;
use crate::parser_config::ParserConfig;
use crate::tokenizer::{Token, TokenType, Tokenizer};
use docss_shared::byte_stream::Character::Ch;
use docss_shared::byte_stream::{ByteStream, Encoding, Location};
use docss_shared::errors::{CssError, CssResult};

pub mod colors;
pub mod errors;
pub mod node;
pub mod parser;
pub mod parser_config;
pub mod serializer;
pub mod tokenizer;
pub mod units;
pub mod walker;

pub struct Css3<'src> {
    /// The tokenizer is responsible for reading the input stream and producing tokens
    pub tokenizer: Tokenizer<'src>,
    /// Last consumed token
    t: Token,
    /// Lookahead token, the next one to be consumed
    la: Token,
    /// The parser configuration as given
    config: ParserConfig,
}

impl<'src> Css3<'src> {
    /// Creates a new parser on the given byte stream so only `parse()` needs to be called.
    fn new(stream: ByteStream<'src>, config: ParserConfig) -> Self {
        let start = Token::new(TokenType::Eof, Location::default(), 0);

        Self {
            tokenizer: Tokenizer::new(stream),
            t: start.clone(),
            la: start,
            config,
        }
    }

    /// Parses a direct string to a `Document`. The string is read as UTF-8.
    pub fn parse_str(data: &str, config: ParserConfig) -> CssResult<Document> {
        Css3::parse_stream(ByteStream::from_str(data), config)
    }

    /// Parses a stream to a `Document`. A UTF-8 byte order mark is skipped and switches the stream
    /// to UTF-8. The first error stops the parser.
    pub fn parse_stream(mut stream: ByteStream<'src>, config: ParserConfig) -> CssResult<Document> {
        if let Some(encoding) = config.encoding {
            stream.set_encoding(encoding);
        }
        skip_byte_order_mark(&mut stream)?;

        let attach_input = config.attach_input;
        let mut parser = Css3::new(stream, config);
        let result = parser.parse();

        // A read error ends the stream early, which is the real problem behind anything the
        // parser found.
        let stream = parser.tokenizer.stream();
        let result = match stream.take_error() {
            Some(e) => Err(CssError::fatal(&format!("cannot read stream: {e}"))),
            None => result,
        };

        let result = result.map_err(|e| {
            if attach_input {
                e.with_input(stream.contents())
            } else {
                e
            }
        });

        stream.close();
        result
    }

    fn parse(&mut self) -> CssResult<Document> {
        log::trace!(
            "parsing {}",
            self.config.source.as_deref().unwrap_or("<string>")
        );

        // Read the first token into the lookahead
        self.get()?;
        self.parse_stylesheet()
    }
}

/// Skips a UTF-8 byte order mark at the current position, and switches the stream to UTF-8 when
/// one is found. An incomplete mark is fatal.
fn skip_byte_order_mark(stream: &mut ByteStream) -> CssResult<()> {
    let encoding = stream.encoding();
    let start = stream.pos();

    stream.set_encoding(Encoding::ASCII);
    if stream.read() != Ch('\u{EF}') {
        stream.set_pos(start)?;
        stream.set_encoding(encoding);
        return Ok(());
    }

    if stream.read() != Ch('\u{BB}') || stream.read() != Ch('\u{BF}') {
        return Err(CssError::fatal("illegal byte order mark"));
    }

    log::debug!("UTF-8 byte order mark found");
    stream.set_encoding(Encoding::UTF8);

    Ok(())
}
