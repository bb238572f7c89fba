use crate::errors::ErrorCode;
use crate::node::{Expression, Function, Separator, Sign, Term, Value};
use crate::parser::sets::{Production, Symbol};
use crate::tokenizer::TokenType;
use crate::units::Unit;
use crate::Css3;
use docss_shared::errors::{CssError, CssResult};

/// Longest hex color, including the `#`
const MAX_HEX_LENGTH: usize = 7;

impl Css3<'_> {
    /// Parses one or more terms. Terms can be separated by `,` or `/`, the separator is stored on
    /// the term that follows it.
    pub(crate) fn parse_expression(&mut self) -> CssResult<Expression> {
        log::trace!("parse_expression");

        let mut expression = Expression::default();
        expression.terms.push(self.parse_term()?);

        loop {
            let separator = match self.sym() {
                Symbol::Comma => Some(Separator::Comma),
                Symbol::Delim('/') => Some(Separator::Slash),
                s if Production::Term.contains(s) => None,
                _ => break,
            };
            if separator.is_some() {
                self.get()?;
            }

            let mut term = self.parse_term()?;
            term.separator = separator;
            expression.terms.push(term);
        }

        Ok(expression)
    }

    pub(crate) fn parse_term(&mut self) -> CssResult<Term> {
        log::trace!("parse_term");

        let value = match self.la.token_type.clone() {
            TokenType::QuotedString(s) => {
                self.get()?;
                Value::String(s)
            }
            TokenType::BadString(_) => return Err(self.syn_err(ErrorCode::UnterminatedString)),
            TokenType::Url if self.peek_adjacent(Symbol::LParen)? => self.parse_url()?,
            TokenType::Unicode(range) => {
                self.get()?;
                Value::Unicode(range.to_uppercase())
            }
            TokenType::Delim('#') => self.parse_hex_value()?,
            _ => {
                let sign = match self.sym() {
                    Symbol::Delim('+') => Some(Sign::Plus),
                    Symbol::Delim('-') => Some(Sign::Minus),
                    _ => None,
                };
                if sign.is_some() {
                    self.get()?;
                    if !self.la_adjacent() {
                        return Err(self.syn_err_in(ErrorCode::InvalidTerm, Production::Term));
                    }
                }

                match self.sym() {
                    Symbol::Number => self.parse_number(sign)?,
                    Symbol::Ident if self.at_anplusb() => {
                        let mut value = String::new();
                        self.parse_anplusb(&mut value)?;
                        Value::Number {
                            sign,
                            value,
                            unit: Unit::None,
                        }
                    }
                    Symbol::N
                        if self.peek_adjacent(Symbol::Delim('+'))? || self.peek_adjacent(Symbol::Delim('-'))? =>
                    {
                        let mut value = String::new();
                        self.parse_anplusb(&mut value)?;
                        Value::Number {
                            sign,
                            value,
                            unit: Unit::None,
                        }
                    }
                    Symbol::Delim('.') if self.peek_adjacent(Symbol::Number)? => self.parse_number(sign)?,
                    s if Production::Identity.contains(s) => self.parse_identifier_term(sign)?,
                    _ => return Err(self.syn_err_in(ErrorCode::InvalidTerm, Production::Term)),
                }
            }
        };

        Ok(Term::new(value))
    }

    /// Parses a number with its unit. A directly following `%` or unit name is the unit, and a
    /// directly following `n` starts an `An+B` notation.
    fn parse_number(&mut self, sign: Option<Sign>) -> CssResult<Value> {
        log::trace!("parse_number");

        let mut value = String::new();
        if self.sym() == Symbol::Delim('.') {
            self.get()?;
            value.push('.');
        }

        match self.la.token_type.clone() {
            TokenType::Number(n) => {
                self.get()?;
                value.push_str(&n);
            }
            _ => return Err(self.syn_err(ErrorCode::NumberExpected)),
        }

        let mut unit = Unit::None;
        if self.la_adjacent() {
            match self.la.token_type.clone() {
                TokenType::Delim('%') => {
                    self.get()?;
                    unit = Unit::Percent;
                }
                _ if self.at_anplusb() => self.parse_anplusb(&mut value)?,
                tt => {
                    if let Some(name) = tt.identity() {
                        unit = Unit::from_name(&name).ok_or_else(|| {
                            CssError::semantic_at(&format!("unknown unit '{name}'"), self.la.location.clone())
                        })?;
                        self.get()?;
                    }
                }
            }
        }

        Ok(Value::Number { sign, value, unit })
    }

    /// Parses an identifier, or a function when the identifier is directly followed by `(`.
    /// A sign is part of the name.
    fn parse_identifier_term(&mut self, sign: Option<Sign>) -> CssResult<Value> {
        log::trace!("parse_identifier_term");

        let name = self.parse_identity()?;
        let name = match sign {
            Some(Sign::Minus) => format!("-{name}"),
            Some(Sign::Plus) => format!("+{name}"),
            None => name,
        };

        if self.sym() == Symbol::LParen && self.la_adjacent() {
            self.get()?;
            return Ok(Value::Function(self.parse_function_arguments(name)?));
        }

        Ok(Value::Ident(name))
    }

    /// Parses the arguments of a function, up to and including the closing `)`. The opening `(`
    /// has already been consumed.
    pub(crate) fn parse_function_arguments(&mut self, name: String) -> CssResult<Function> {
        log::trace!("parse_function_arguments");

        let expression = if self.sym() == Symbol::RParen {
            Expression::default()
        } else {
            self.parse_expression()?
        };

        if self.sym() != Symbol::RParen {
            return Err(self.syn_err_after(ErrorCode::RParenExpected, Production::Expression));
        }
        self.get()?;

        Ok(Function { name, expression })
    }

    /// Parses a hex color, stored in upper case. The digits after the `#` can be scanned as a
    /// number, an identifier, or a number followed by an identifier (`#0f0`). A following
    /// identifier only belongs to the color when it is all hex digits and the color stays short
    /// enough.
    pub(crate) fn parse_hex_value(&mut self) -> CssResult<Value> {
        log::trace!("parse_hex_value");

        self.expect(Symbol::Delim('#'))?;

        let mut value = String::new();
        if self.la_adjacent() {
            if let TokenType::Number(n) = self.la.token_type.clone() {
                if !n.chars().all(|c| c.is_ascii_digit()) {
                    return Err(self.syn_err(ErrorCode::InvalidHexValue));
                }
                self.get()?;
                value = n;
            }
        }

        if self.la_adjacent() {
            if let Some(name) = self.la.token_type.identity() {
                if is_hex_part(&value, &name) {
                    self.get()?;
                    value.push_str(&name);
                }
            }
        }

        if value.is_empty() || value.len() + 1 > MAX_HEX_LENGTH {
            return Err(self.syn_err(ErrorCode::InvalidHexValue));
        }

        Ok(Value::Hex(value.to_uppercase()))
    }
}

fn is_hex_part(value: &str, part: &str) -> bool {
    part.chars().all(|c| c.is_ascii_hexdigit()) && 1 + value.len() + part.len() <= MAX_HEX_LENGTH
}
