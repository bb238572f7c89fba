use crate::errors::ErrorCode;
use crate::node::{Directive, DirectiveKind, Expression, Medium, Separator, Term, Value};
use crate::parser::sets::{Production, Symbol};
use crate::tokenizer::TokenType;
use crate::Css3;
use docss_shared::errors::CssResult;

impl Css3<'_> {
    /// Parses an at-rule. The prelude holds mediums and terms; the directive either ends with `;`
    /// or has a block whose content depends on the kind of directive.
    pub(crate) fn parse_directive(&mut self) -> CssResult<Directive> {
        log::trace!("parse_directive");

        self.expect(Symbol::Delim('@'))?;
        let dash = self.adjacent_dash()?;
        let name = format!("@{dash}{}", self.parse_adjacent_identity()?);

        let mut directive = Directive {
            kind: DirectiveKind::from_name(&name),
            name,
            ..Default::default()
        };

        let mut expression = Expression::default();
        loop {
            match self.sym() {
                Symbol::Medium => directive.mediums.extend(self.parse_medium_list()?),
                Symbol::Colon => {
                    self.get()?;
                    let name = self.parse_adjacent_identity()?;
                    expression.terms.push(Term::new(Value::Ident(format!(":{name}"))));
                }
                Symbol::Comma | Symbol::Delim('/')
                    if !expression.terms.is_empty() && directive.mediums.is_empty() =>
                {
                    let separator = if self.sym() == Symbol::Comma {
                        Separator::Comma
                    } else {
                        Separator::Slash
                    };
                    self.get()?;

                    let mut term = self.parse_term()?;
                    term.separator = Some(separator);
                    expression.terms.push(term);
                }
                s if Production::Term.contains(s) => expression.terms.push(self.parse_term()?),
                _ => break,
            }
        }
        if !expression.terms.is_empty() {
            directive.expression = Some(expression);
        }

        match self.sym() {
            Symbol::Semicolon => self.get()?,
            Symbol::LCurly => {
                self.get()?;
                self.parse_directive_body(&mut directive)?;
            }
            _ => return Err(self.syn_err(ErrorCode::InvalidDirective)),
        }

        Ok(directive)
    }

    /// Parses `medium (, medium)*`
    fn parse_medium_list(&mut self) -> CssResult<Vec<Medium>> {
        log::trace!("parse_medium_list");

        let mut mediums = vec![self.parse_medium()?];
        while self.sym() == Symbol::Comma {
            self.get()?;
            mediums.push(self.parse_medium()?);
        }

        Ok(mediums)
    }

    fn parse_medium(&mut self) -> CssResult<Medium> {
        match self.la.token_type {
            TokenType::Medium(medium) => {
                self.get()?;
                Ok(medium)
            }
            _ => Err(self.syn_err_in(ErrorCode::InvalidMedium, Production::Medium)),
        }
    }

    /// Parses the content of a directive block up to and including the closing `}`. `@media`
    /// holds rule sets, `@page` and `@font-face` hold declarations. Other directives can hold
    /// either, which is decided by looking ahead for a `{`.
    fn parse_directive_body(&mut self, directive: &mut Directive) -> CssResult<()> {
        log::trace!("parse_directive_body");

        loop {
            match self.sym() {
                Symbol::RCurly => {
                    self.get()?;
                    return Ok(());
                }
                Symbol::Eof => return Err(self.syn_err(ErrorCode::RCurlyExpected)),
                Symbol::Delim('@') => directive.directives.push(self.parse_directive()?),
                Symbol::Semicolon if directive.kind != DirectiveKind::Media => self.get()?,
                _ => match directive.kind {
                    DirectiveKind::Media => self.parse_body_rule_set(directive)?,
                    DirectiveKind::Page | DirectiveKind::FontFace => self.parse_body_declaration(directive)?,
                    _ if self.is_nested_rule_set()? => self.parse_body_rule_set(directive)?,
                    _ => self.parse_body_declaration(directive)?,
                },
            }
        }
    }

    fn parse_body_rule_set(&mut self, directive: &mut Directive) -> CssResult<()> {
        if !Production::RuleSet.starts(&self.la.token_type) {
            return Err(self.syn_err_in(ErrorCode::InvalidDirectiveBody, Production::RuleSet));
        }

        directive.rule_sets.push(self.parse_rule_set()?);
        Ok(())
    }

    fn parse_body_declaration(&mut self, directive: &mut Directive) -> CssResult<()> {
        if !Production::Declaration.starts(&self.la.token_type) {
            return Err(self.syn_err_in(ErrorCode::InvalidDirectiveBody, Production::Declaration));
        }

        directive.declarations.push(self.parse_declaration()?);
        if self.sym() != Symbol::Eof && !Production::Declaration.is_followed_by(&self.la.token_type) {
            return Err(self.syn_err_after(ErrorCode::SemicolonExpected, Production::Declaration));
        }

        Ok(())
    }

    /// Returns true when a `{` comes before the next `;` or `}`, starting at the lookahead.
    /// Nothing is consumed.
    fn is_nested_rule_set(&mut self) -> CssResult<bool> {
        if self.sym() == Symbol::LCurly {
            return Ok(true);
        }

        self.tokenizer.reset_peek();
        let result = loop {
            match Symbol::of(&self.tokenizer.peek()?.token_type) {
                Symbol::LCurly => break true,
                Symbol::Semicolon | Symbol::RCurly | Symbol::Eof => break false,
                _ => {}
            }
        };
        self.tokenizer.reset_peek();

        Ok(result)
    }
}
