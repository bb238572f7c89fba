use crate::errors::ErrorCode;
use crate::node::Declaration;
use crate::parser::sets::{Production, Symbol};
use crate::Css3;
use docss_shared::errors::CssResult;

impl Css3<'_> {
    /// Parses the name of a property or anything else that is identifier-like
    pub(crate) fn parse_identity(&mut self) -> CssResult<String> {
        log::trace!("parse_identity");

        match self.la.token_type.identity() {
            Some(name) => {
                self.get()?;
                Ok(name)
            }
            None => Err(self.syn_err_in(ErrorCode::InvalidIdentity, Production::Identity)),
        }
    }

    /// Parses an identity that must directly follow the last consumed token
    pub(crate) fn parse_adjacent_identity(&mut self) -> CssResult<String> {
        if !self.la_adjacent() {
            return Err(self.syn_err(ErrorCode::IdentExpected));
        }

        self.parse_identity()
    }

    pub(crate) fn parse_declaration(&mut self) -> CssResult<Declaration> {
        log::trace!("parse_declaration");

        let name = if self.sym() == Symbol::Delim('-') {
            self.get()?;
            format!("-{}", self.parse_adjacent_identity()?)
        } else {
            self.parse_identity()?
        };

        self.expect(Symbol::Colon)?;
        let expression = self.parse_expression()?;

        let mut important = false;
        if self.sym() == Symbol::Delim('!') {
            self.get()?;
            self.expect(Symbol::Important)?;
            important = true;
        }

        Ok(Declaration {
            name,
            expression,
            important,
        })
    }
}
