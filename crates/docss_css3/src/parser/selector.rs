use crate::errors::ErrorCode;
use crate::node::{Attribute, AttributeOperator, Combinator, Selector, SimpleSelector};
use crate::parser::sets::{Production, Symbol};
use crate::tokenizer::TokenType;
use crate::Css3;
use docss_shared::errors::CssResult;

impl Css3<'_> {
    /// Parses a chain of simple selectors. Without an explicit combinator, whitespace between
    /// two simple selectors means descendant.
    pub(crate) fn parse_selector(&mut self) -> CssResult<Selector> {
        log::trace!("parse_selector");

        let mut selector = Selector::default();
        selector.simple_selectors.push(self.parse_simple_selector()?);

        loop {
            let combinator = match self.sym() {
                Symbol::Delim('+') => Some(Combinator::PrecededImmediatelyBy),
                Symbol::Delim('>') => Some(Combinator::ChildOf),
                Symbol::Delim('~') => Some(Combinator::PrecededBy),
                s if Production::SimpleSelector.contains(s) => None,
                _ => break,
            };
            if combinator.is_some() {
                self.get()?;
            }

            let mut simple_selector = self.parse_simple_selector()?;
            simple_selector.combinator = combinator;
            selector.simple_selectors.push(simple_selector);
        }

        Ok(selector)
    }

    /// Parses an element name or a single condition, followed by any number of conditions that
    /// are written directly against it (`a.b#c:hover`).
    pub(crate) fn parse_simple_selector(&mut self) -> CssResult<SimpleSelector> {
        log::trace!("parse_simple_selector");

        let mut simple_selector = SimpleSelector::default();
        if self.sym() == Symbol::Delim('*') {
            self.get()?;
            simple_selector.element_name = Some("*".into());
        } else if Production::Identity.starts(&self.la.token_type) {
            simple_selector.element_name = Some(self.parse_identity()?);
        } else {
            self.parse_condition(&mut simple_selector)?;
        }

        while self.la_adjacent()
            && matches!(
                self.sym(),
                Symbol::Delim('#') | Symbol::Delim('.') | Symbol::LBracket | Symbol::Colon
            )
        {
            let mut condition = SimpleSelector::default();
            self.parse_condition(&mut condition)?;
            simple_selector.push_child(condition);
        }

        Ok(simple_selector)
    }

    /// Parses an id, class, attribute or pseudo condition into the given simple selector
    fn parse_condition(&mut self, simple_selector: &mut SimpleSelector) -> CssResult<()> {
        match self.sym() {
            Symbol::Delim('#') => {
                self.get()?;
                simple_selector.id = Some(self.parse_name_part()?);
            }
            Symbol::Delim('.') => {
                self.get()?;
                let dash = self.adjacent_dash()?;
                simple_selector.class = Some(format!("{dash}{}", self.parse_adjacent_identity()?));
            }
            Symbol::LBracket => simple_selector.attribute = Some(self.parse_attribute()?),
            Symbol::Colon => self.parse_pseudo(simple_selector)?,
            _ => {
                return Err(self.syn_err_in(ErrorCode::InvalidSimpleSelector, Production::SimpleSelector));
            }
        }

        Ok(())
    }

    /// Name of an id, which may also start with digits (`#1st`)
    fn parse_name_part(&mut self) -> CssResult<String> {
        if !self.la_adjacent() {
            return Err(self.syn_err(ErrorCode::IdentExpected));
        }

        let mut name = String::new();
        if let TokenType::Number(n) = self.la.token_type.clone() {
            self.get()?;
            name.push_str(&n);
            if !self.la_adjacent() || !Production::Identity.starts(&self.la.token_type) {
                return Ok(name);
            }
        }

        name.push_str(&self.parse_identity()?);
        Ok(name)
    }

    /// Parses `[name]` or `[name op value]`
    pub(crate) fn parse_attribute(&mut self) -> CssResult<Attribute> {
        log::trace!("parse_attribute");

        self.expect(Symbol::LBracket)?;

        let mut attribute = Attribute {
            operand: self.parse_identity()?,
            ..Default::default()
        };

        let operator = match self.sym() {
            Symbol::Delim('=') => Some(AttributeOperator::Equals),
            Symbol::Includes => Some(AttributeOperator::InList),
            Symbol::DashMatch => Some(AttributeOperator::Hyphenated),
            Symbol::PrefixMatch => Some(AttributeOperator::BeginsWith),
            Symbol::SuffixMatch => Some(AttributeOperator::EndsWith),
            Symbol::SubstringMatch => Some(AttributeOperator::Contains),
            _ => None,
        };

        if operator.is_some() {
            self.get()?;
            attribute.operator = operator;
            attribute.value = Some(match self.la.token_type.clone() {
                TokenType::QuotedString(s) => {
                    self.get()?;
                    s
                }
                tt if tt.identity().is_some() => self.parse_identity()?,
                _ => return Err(self.syn_err_in(ErrorCode::InvalidAttribute, Production::Attribute)),
            });
        }

        self.expect(Symbol::RBracket)?;

        Ok(attribute)
    }

    /// Parses `:name`, `::name` or `:name(arguments)`
    pub(crate) fn parse_pseudo(&mut self, simple_selector: &mut SimpleSelector) -> CssResult<()> {
        log::trace!("parse_pseudo");

        self.expect(Symbol::Colon)?;
        if self.sym() == Symbol::Colon && self.la_adjacent() {
            self.get()?;
        }

        let dash = self.adjacent_dash()?;
        let name = format!("{dash}{}", self.parse_adjacent_identity()?);

        if self.sym() == Symbol::LParen && self.la_adjacent() {
            self.get()?;
            simple_selector.function = Some(self.parse_function_arguments(name)?);
        } else {
            simple_selector.pseudo = Some(name);
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::node::Value;
    use crate::parser_config::ParserConfig;
    use crate::units::Unit;
    use docss_shared::byte_stream::ByteStream;
    use test_case::test_case;

    macro_rules! test {
        ($func:ident, $input:expr) => {{
            let mut parser = Css3::new(ByteStream::from_str($input), ParserConfig::default());
            parser.get().unwrap();
            parser.$func()
        }};
    }

    #[test]
    fn compound() {
        let ss = test!(parse_simple_selector, "a.external#main:hover").unwrap();

        assert_eq!(ss.element_name.as_deref(), Some("a"));
        assert!(ss.class.is_none());

        let class = ss.child.as_deref().unwrap();
        assert_eq!(class.class.as_deref(), Some("external"));
        assert!(class.element_name.is_none());

        let id = class.child.as_deref().unwrap();
        assert_eq!(id.id.as_deref(), Some("main"));

        let pseudo = id.child.as_deref().unwrap();
        assert_eq!(pseudo.pseudo.as_deref(), Some("hover"));
        assert!(pseudo.child.is_none());
    }

    #[test]
    fn condition_first() {
        let ss = test!(parse_simple_selector, ".a.b").unwrap();
        assert!(ss.element_name.is_none());
        assert_eq!(ss.class.as_deref(), Some("a"));
        assert_eq!(ss.child.unwrap().class.as_deref(), Some("b"));

        let ss = test!(parse_simple_selector, "*.note").unwrap();
        assert_eq!(ss.element_name.as_deref(), Some("*"));
        assert_eq!(ss.child.unwrap().class.as_deref(), Some("note"));
    }

    #[test_case("#main", "main" ; "identifier")]
    #[test_case("#1st", "1st" ; "leading digit")]
    #[test_case("#42", "42" ; "digits only")]
    fn ids(input: &str, expected: &str) {
        let ss = test!(parse_simple_selector, input).unwrap();
        assert_eq!(ss.id.as_deref(), Some(expected));
    }

    #[test]
    fn descendant_conditions() {
        let selector = test!(parse_selector, "div .a :first-child").unwrap();

        assert_eq!(selector.simple_selectors.len(), 3);
        assert!(selector.simple_selectors.iter().all(|s| s.combinator.is_none()));
        assert_eq!(selector.simple_selectors[1].class.as_deref(), Some("a"));
        assert_eq!(selector.simple_selectors[2].pseudo.as_deref(), Some("first-child"));
    }

    #[test]
    fn dashed_names() {
        let ss = test!(parse_simple_selector, ".-moz-x::-webkit-scrollbar").unwrap();
        assert_eq!(ss.class.as_deref(), Some("-moz-x"));
        assert_eq!(ss.child.unwrap().pseudo.as_deref(), Some("-webkit-scrollbar"));
    }

    #[test_case("[href]", "href", None, None ; "presence")]
    #[test_case("[type=text]", "type", Some(AttributeOperator::Equals), Some("text") ; "equals")]
    #[test_case("[rel~='tag']", "rel", Some(AttributeOperator::InList), Some("tag") ; "in list")]
    #[test_case("[lang|=en]", "lang", Some(AttributeOperator::Hyphenated), Some("en") ; "hyphenated")]
    #[test_case("[href^=\"http\"]", "href", Some(AttributeOperator::BeginsWith), Some("http") ; "begins with")]
    #[test_case("[src$='.png']", "src", Some(AttributeOperator::EndsWith), Some(".png") ; "ends with")]
    #[test_case("[title*=x]", "title", Some(AttributeOperator::Contains), Some("x") ; "contains")]
    fn attributes(input: &str, operand: &str, operator: Option<AttributeOperator>, value: Option<&str>) {
        let attribute = test!(parse_attribute, input).unwrap();

        assert_eq!(attribute.operand, operand);
        assert_eq!(attribute.operator, operator);
        assert_eq!(attribute.value.as_deref(), value);
    }

    #[test]
    fn invalid_attributes() {
        let err = test!(parse_attribute, "[type=]").unwrap_err();
        assert!(err.message.starts_with("invalid attribute"));

        let err = test!(parse_attribute, "[type").unwrap_err();
        assert_eq!(err.message, "\"]\" expected");
    }

    #[test]
    fn pseudo_function() {
        let ss = test!(parse_simple_selector, "li:nth-child(2n+1)").unwrap();

        let function = ss.child.unwrap().function.unwrap();
        assert_eq!(function.name, "nth-child");
        assert_eq!(
            function.expression.terms[0].value,
            Value::Number {
                sign: None,
                value: "2n+1".into(),
                unit: Unit::None
            }
        );
    }

    #[test]
    fn detached_conditions() {
        let err = test!(parse_simple_selector, ": hover").unwrap_err();
        assert_eq!(err.message, "identifier expected");

        let err = test!(parse_simple_selector, "> a").unwrap_err();
        assert!(err.message.starts_with("invalid simple selector"));
    }
}
