use crate::node::Value;
use crate::parser::sets::Symbol;
use crate::tokenizer::TokenType;
use crate::Css3;
use docss_shared::errors::CssResult;

impl Css3<'_> {
    /// Parses `url(...)`. The address is either a quoted string or everything up to the closing
    /// parenthesis, taken as written from the stream.
    pub(crate) fn parse_url(&mut self) -> CssResult<Value> {
        log::trace!("parse_url");

        self.expect(Symbol::Url)?;
        self.expect(Symbol::LParen)?;

        let url = match self.la.token_type.clone() {
            TokenType::QuotedString(s) => {
                self.get()?;
                s
            }
            _ => {
                let begin = self.t.end;
                while !matches!(self.sym(), Symbol::RParen | Symbol::Eof) {
                    self.get()?;
                }
                let end = self.la.location.offset;
                self.tokenizer.slice(begin, end).trim().to_string()
            }
        };

        self.expect(Symbol::RParen)?;

        Ok(Value::Url(url))
    }
}

#[cfg(test)]
mod test {
    use crate::node::Value;
    use crate::parser_config::ParserConfig;
    use crate::Css3;
    use docss_shared::byte_stream::ByteStream;
    use test_case::test_case;

    macro_rules! test {
        ($func:ident, $input:expr) => {{
            let mut parser = Css3::new(ByteStream::from_str($input), ParserConfig::default());
            parser.get().unwrap();
            parser.$func()
        }};
    }

    #[test_case("url(a.css)", "a.css" ; "bare")]
    #[test_case("url( images/bg.png )", "images/bg.png" ; "spaces")]
    #[test_case("url('a b.png')", "a b.png" ; "single quoted")]
    #[test_case("url(\"x.gif\")", "x.gif" ; "double quoted")]
    #[test_case("url(http://example.com/a?b=1&c=2)", "http://example.com/a?b=1&c=2" ; "full address")]
    #[test_case("url()", "" ; "empty")]
    fn urls(input: &str, expected: &str) {
        assert_eq!(test!(parse_url, input).unwrap(), Value::Url(expected.into()));
    }

    #[test]
    fn unterminated() {
        let err = test!(parse_url, "url(a.css").unwrap_err();
        assert_eq!(err.message, "\")\" expected");

        let err = test!(parse_url, "url('a.css' b)").unwrap_err();
        assert_eq!(err.message, "\")\" expected");
    }
}
