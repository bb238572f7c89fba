//! Docss parses CSS3 style sheets into a [`Document`] and renders them back to canonical css.
//!
//! ```
//! let doc = docss::parse("a.b, .c { color: red; font-size: 12pt }").unwrap();
//! assert_eq!(doc.rule_sets[0].declarations[1].expression.to_twips(), 240);
//! assert_eq!(doc.to_string(), "a.b, .c {\n\tcolor: red;\n\tfont-size: 12pt\n}\n");
//! ```
//!
//! String input is read as UTF-8. Streams are read one byte per character unless they start
//! with a UTF-8 byte order mark, or an encoding is set in the [`ParserConfig`].
use std::io::{Read, Seek};

pub use docss_css3::node::Document;
pub use docss_css3::parser_config::ParserConfig;
pub use docss_css3::{colors, node, serializer, tokenizer, units, walker, Css3};
pub use docss_shared::byte_stream::{self, ByteStream, Encoding, Location};
pub use docss_shared::errors::{self, CssError, CssResult, ErrorKind};

/// Parses a complete style sheet from a string
pub fn parse(css: &str) -> CssResult<Document> {
    Css3::parse_str(css, ParserConfig::default())
}

/// Parses a style sheet from a reader that can only be read front to back. Pass `&mut reader`
/// to keep using the reader afterwards.
pub fn parse_reader<R: Read>(reader: R) -> CssResult<Document> {
    parse_reader_with_config(reader, ParserConfig::default())
}

pub fn parse_reader_with_config<R: Read>(reader: R, config: ParserConfig) -> CssResult<Document> {
    log::debug!("parsing {} from reader", config.source.as_deref().unwrap_or("<stream>"));

    Css3::parse_stream(ByteStream::from_reader(reader), config)
}

/// Parses a style sheet from a seekable source like a file. Only a window of the source is kept
/// in memory.
pub fn parse_seekable<R: Read + Seek>(reader: R) -> CssResult<Document> {
    parse_seekable_with_config(reader, ParserConfig::default())
}

pub fn parse_seekable_with_config<R: Read + Seek>(reader: R, config: ParserConfig) -> CssResult<Document> {
    log::debug!("parsing {} from seekable source", config.source.as_deref().unwrap_or("<stream>"));

    Css3::parse_stream(ByteStream::from_seekable(reader)?, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn entry_points_agree() {
        let css = "@media print { h1 { page-break-after: avoid } }\nh1 { font: 12pt/1.2 serif }";

        let from_str = parse(css).unwrap();
        let from_reader = parse_reader(Cursor::new(css.as_bytes())).unwrap();
        let from_seekable = parse_seekable(Cursor::new(css.as_bytes())).unwrap();

        assert_eq!(from_str, from_reader);
        assert_eq!(from_str, from_seekable);
    }

    #[test]
    fn reader_stays_with_caller() {
        let mut cursor = Cursor::new(b"p { margin: 0 }".to_vec());

        let doc = parse_reader(&mut cursor).unwrap();
        assert_eq!(doc.rule_sets.len(), 1);
        assert_eq!(cursor.position(), 15);
    }
}
