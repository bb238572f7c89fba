use crate::errors::ErrorCode;
use crate::parser::sets::{Production, Symbol};
use crate::Css3;
use docss_shared::errors::{CssError, CssResult};

mod anplusb;
mod at_rule;
mod declaration;
mod rule;
mod selector;
pub mod sets;
mod stylesheet;
mod url;
mod value;

impl Css3<'_> {
    /// Consumes the lookahead token and scans the next one
    pub(crate) fn get(&mut self) -> CssResult<()> {
        let next = self.tokenizer.scan()?;
        self.t = std::mem::replace(&mut self.la, next);

        Ok(())
    }

    /// Kind of the lookahead token
    pub(crate) fn sym(&self) -> Symbol {
        Symbol::of(&self.la.token_type)
    }

    /// Consumes the lookahead token when it is of the given kind
    pub(crate) fn expect(&mut self, symbol: Symbol) -> CssResult<()> {
        if self.sym() != symbol {
            return Err(self.syn_err(symbol.expected()));
        }

        self.get()
    }

    /// Returns true when the lookahead token directly follows the last consumed token
    pub(crate) fn la_adjacent(&self) -> bool {
        self.la.follows(&self.t)
    }

    /// Returns true when the token after the lookahead is of the given kind and directly follows
    /// the lookahead. Nothing is consumed.
    pub(crate) fn peek_adjacent(&mut self, symbol: Symbol) -> CssResult<bool> {
        self.tokenizer.reset_peek();
        let next = self.tokenizer.peek()?;
        self.tokenizer.reset_peek();

        Ok(Symbol::of(&next.token_type) == symbol && next.follows(&self.la))
    }

    /// Consumes a `-` when it directly follows the last consumed token
    pub(crate) fn adjacent_dash(&mut self) -> CssResult<&'static str> {
        if self.sym() == Symbol::Delim('-') && self.la_adjacent() {
            self.get()?;
            return Ok("-");
        }

        Ok("")
    }

    /// Syntax error on the lookahead token
    pub(crate) fn syn_err(&self, code: ErrorCode) -> CssError {
        self.syn_err_with(code, &code.message())
    }

    /// Syntax error for a production that could not start at the lookahead token
    pub(crate) fn syn_err_in(&self, code: ErrorCode, production: Production) -> CssError {
        let message = format!(
            "{}, expected {}",
            code.message(),
            Production::describe(production.first())
        );
        self.syn_err_with(code, &message)
    }

    /// Syntax error for a lookahead token that may not follow the production that was just parsed
    pub(crate) fn syn_err_after(&self, code: ErrorCode, production: Production) -> CssError {
        let message = format!(
            "{}, a {} is followed by {}",
            code.message(),
            production,
            Production::describe(production.follow())
        );
        self.syn_err_with(code, &message)
    }

    fn syn_err_with(&self, code: ErrorCode, message: &str) -> CssError {
        log::trace!("syntax error at {:?}: {}", self.la.location, message);

        CssError::syntax(
            code.code(),
            message,
            self.la.location.clone(),
            &self.la.to_string(),
        )
    }
}
