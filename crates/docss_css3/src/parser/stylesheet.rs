use crate::errors::ErrorCode;
use crate::node::Document;
use crate::parser::sets::{Production, Symbol};
use crate::Css3;
use docss_shared::errors::CssResult;

impl Css3<'_> {
    /// Parses directives and rule sets up to the end of the stream. `<!--`, `-->` and stray
    /// slashes between them are skipped.
    pub(crate) fn parse_stylesheet(&mut self) -> CssResult<Document> {
        log::trace!("parse_stylesheet");

        let mut document = Document::default();
        loop {
            match self.sym() {
                Symbol::Eof => break,
                Symbol::Cdo | Symbol::Cdc | Symbol::Delim('/') => self.get()?,
                Symbol::Delim('@') => document.directives.push(self.parse_directive()?),
                s if Production::RuleSet.contains(s) => document.rule_sets.push(self.parse_rule_set()?),
                _ => {
                    return Err(self.syn_err_in(ErrorCode::InvalidStylesheet, Production::Stylesheet));
                }
            }
        }

        Ok(document)
    }
}
