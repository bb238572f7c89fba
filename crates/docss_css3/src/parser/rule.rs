use crate::errors::ErrorCode;
use crate::node::{Declaration, RuleSet};
use crate::parser::sets::{Production, Symbol};
use crate::Css3;
use docss_shared::errors::CssResult;

impl Css3<'_> {
    pub(crate) fn parse_rule_set(&mut self) -> CssResult<RuleSet> {
        log::trace!("parse_rule_set");

        let mut rule_set = RuleSet::default();

        rule_set.selectors.push(self.parse_selector()?);
        while self.sym() == Symbol::Comma {
            self.get()?;
            rule_set.selectors.push(self.parse_selector()?);
        }

        if self.sym() != Symbol::LCurly {
            return Err(self.syn_err_after(ErrorCode::LCurlyExpected, Production::Selector));
        }
        self.get()?;

        rule_set.declarations = self.parse_declaration_block()?;

        Ok(rule_set)
    }

    /// Parses declarations up to and including the closing `}`. Empty declarations (`;;`) are
    /// allowed.
    pub(crate) fn parse_declaration_block(&mut self) -> CssResult<Vec<Declaration>> {
        log::trace!("parse_declaration_block");

        let mut declarations = Vec::new();
        loop {
            match self.sym() {
                Symbol::RCurly => {
                    self.get()?;
                    return Ok(declarations);
                }
                Symbol::Semicolon => self.get()?,
                Symbol::Eof => return Err(self.syn_err(ErrorCode::RCurlyExpected)),
                s if Production::Declaration.contains(s) => {
                    declarations.push(self.parse_declaration()?);
                    if self.sym() != Symbol::Eof && !Production::Declaration.is_followed_by(&self.la.token_type) {
                        return Err(self.syn_err_after(ErrorCode::SemicolonExpected, Production::Declaration));
                    }
                }
                _ => {
                    return Err(self.syn_err_in(ErrorCode::InvalidDeclaration, Production::Declaration));
                }
            }
        }
    }
}
