use crate::errors::ErrorCode;
use crate::parser::sets::Symbol;
use crate::tokenizer::TokenType;
use crate::Css3;
use docss_shared::errors::CssResult;

/// `n-3` is scanned as a single identifier
fn is_n_minus_b(name: &str) -> bool {
    name.strip_prefix("n-")
        .is_some_and(|b| !b.is_empty() && b.chars().all(|c| c.is_ascii_digit()))
}

impl Css3<'_> {
    /// Returns true when the lookahead is the `n` part of an `An+B` notation
    pub(crate) fn at_anplusb(&self) -> bool {
        match &self.la.token_type {
            TokenType::N => true,
            TokenType::Ident(name) => is_n_minus_b(name),
            _ => false,
        }
    }

    /// Parses the `n+B` part of an `An+B` notation and appends it to the value. The `+B` is
    /// optional.
    pub(crate) fn parse_anplusb(&mut self, value: &mut String) -> CssResult<()> {
        log::trace!("parse_anplusb");

        if let TokenType::Ident(name) = &self.la.token_type {
            if is_n_minus_b(name) {
                value.push_str(name);
                return self.get();
            }
        }

        self.expect(Symbol::N)?;
        value.push('n');

        let sign = match self.sym() {
            Symbol::Delim('+') => '+',
            Symbol::Delim('-') => '-',
            _ => return Ok(()),
        };
        self.get()?;

        match self.la.token_type.clone() {
            TokenType::Number(b) => {
                self.get()?;
                value.push(sign);
                value.push_str(&b);
                Ok(())
            }
            _ => Err(self.syn_err(ErrorCode::NumberExpected)),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::parser_config::ParserConfig;
    use crate::Css3;
    use docss_shared::byte_stream::ByteStream;
    use test_case::test_case;

    macro_rules! test {
        ($func:ident, $input:expr, $value:expr) => {{
            let mut parser = Css3::new(ByteStream::from_str($input), ParserConfig::default());
            parser.get().unwrap();
            parser.$func($value)
        }};
    }

    #[test_case("n", "n")]
    #[test_case("n+1", "n+1")]
    #[test_case("n + 1", "n+1")]
    #[test_case("n-3", "n-3")]
    #[test_case("n - 3", "n-3")]
    #[test_case("n)", "n")]
    fn anplusb(input: &str, expected: &str) {
        let mut value = String::new();
        test!(parse_anplusb, input, &mut value).unwrap();
        assert_eq!(value, expected);
    }

    #[test]
    fn missing_offset() {
        let mut value = String::new();
        let err = test!(parse_anplusb, "n+x", &mut value).unwrap_err();
        assert_eq!(err.message, "number expected");

        let err = test!(parse_anplusb, "odd", &mut value).unwrap_err();
        assert_eq!(err.message, "\"n\" expected");
    }
}
