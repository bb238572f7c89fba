//! Canonical css output for the document nodes. Rule sets and directive blocks are indented
//! with one tab per nesting level; parsing the output again gives the same document.
use crate::node::{
    Attribute, Combinator, Declaration, Directive, Document, Expression, Function, RuleSet, Selector, Separator,
    Sign, SimpleSelector, Term, Value,
};
use itertools::Itertools;
use std::fmt::{self, Display, Formatter};

impl Display for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for directive in &self.directives {
            directive.fmt_at(f, 0)?;
            writeln!(f)?;
        }
        if !self.directives.is_empty() && !self.rule_sets.is_empty() {
            writeln!(f)?;
        }
        for rule_set in &self.rule_sets {
            rule_set.fmt_at(f, 0)?;
            writeln!(f)?;
        }

        Ok(())
    }
}

impl RuleSet {
    fn fmt_at(&self, f: &mut Formatter<'_>, level: usize) -> fmt::Result {
        let indent = "\t".repeat(level);

        write!(f, "{indent}{} {{", self.selectors.iter().join(", "))?;
        if !self.declarations.is_empty() {
            write!(f, "\n{}", fmt_declarations(&self.declarations, level + 1))?;
        }
        write!(f, "\n{indent}}}")
    }
}

impl Display for RuleSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_at(f, 0)
    }
}

impl Directive {
    fn fmt_at(&self, f: &mut Formatter<'_>, level: usize) -> fmt::Result {
        let indent = "\t".repeat(level);

        write!(f, "{indent}{}", self.name)?;
        if let Some(expression) = &self.expression {
            write!(f, " {expression}")?;
        }
        if !self.mediums.is_empty() {
            write!(f, " {}", self.mediums.iter().map(|m| m.as_str()).join(", "))?;
        }

        if !self.has_block() {
            return write!(f, ";");
        }

        write!(f, " {{")?;
        for directive in &self.directives {
            writeln!(f)?;
            directive.fmt_at(f, level + 1)?;
        }
        if !self.declarations.is_empty() {
            write!(f, "\n{}", fmt_declarations(&self.declarations, level + 1))?;
        }
        for rule_set in &self.rule_sets {
            writeln!(f)?;
            rule_set.fmt_at(f, level + 1)?;
        }
        write!(f, "\n{indent}}}")
    }
}

impl Display for Directive {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_at(f, 0)
    }
}

fn fmt_declarations(declarations: &[Declaration], level: usize) -> String {
    let indent = "\t".repeat(level);

    declarations.iter().map(|d| format!("{indent}{d}")).join(";\n")
}

impl Display for Selector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, simple_selector) in self.simple_selectors.iter().enumerate() {
            if i > 0 && simple_selector.combinator.is_none() {
                write!(f, " ")?;
            }
            write!(f, "{simple_selector}")?;
        }

        Ok(())
    }
}

impl Display for SimpleSelector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.combinator {
            Some(Combinator::ChildOf) => write!(f, " > ")?,
            Some(Combinator::PrecededImmediatelyBy) => write!(f, " + ")?,
            Some(Combinator::PrecededBy) => write!(f, " ~ ")?,
            None => {}
        }

        if let Some(name) = &self.element_name {
            write!(f, "{name}")?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        if let Some(class) = &self.class {
            write!(f, ".{class}")?;
        }
        if let Some(pseudo) = &self.pseudo {
            write!(f, ":{pseudo}")?;
        }
        if let Some(attribute) = &self.attribute {
            write!(f, "{attribute}")?;
        }
        if let Some(function) = &self.function {
            write!(f, ":{function}")?;
        }

        if let Some(child) = &self.child {
            if child.element_name.is_some() {
                write!(f, " ")?;
            }
            write!(f, "{child}")?;
        }

        Ok(())
    }
}

impl Display for Attribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}", self.operand)?;
        if let Some(operator) = self.operator {
            write!(f, "{}", operator.as_str())?;
        }
        if let Some(value) = &self.value {
            write!(f, "{}", quote(value, '"', '\''))?;
        }
        write!(f, "]")
    }
}

impl Display for Declaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.expression)?;
        if self.important {
            write!(f, " !important")?;
        }

        Ok(())
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            match term.separator {
                Some(Separator::Comma) => write!(f, ", ")?,
                Some(Separator::Slash) => write!(f, "/")?,
                None if i > 0 => write!(f, " ")?,
                None => {}
            }
            write!(f, "{term}")?;
        }

        Ok(())
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number { sign, value, unit } => {
                match sign {
                    Some(Sign::Plus) => write!(f, "+")?,
                    Some(Sign::Minus) => write!(f, "-")?,
                    None => {}
                }
                write!(f, "{value}{unit}")
            }
            Value::Ident(name) => write!(f, "{name}"),
            Value::String(s) => write!(f, "{}", quote(s, '\'', '"')),
            Value::Function(function) => write!(f, "{function}"),
            Value::Url(url) => write!(f, "url({})", quote(url, '\'', '"')),
            Value::Unicode(range) => write!(f, "U\\{}", range.to_uppercase()),
            Value::Hex(hex) => write!(f, "#{}", hex.to_uppercase()),
        }
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.expression)
    }
}

/// Quotes the text with the preferred quote, or with the other one when the text holds an
/// unescaped preferred quote
fn quote(text: &str, preferred: char, other: char) -> String {
    let quote = if has_unescaped(text, preferred) { other } else { preferred };

    format!("{quote}{text}{quote}")
}

fn has_unescaped(text: &str, quote: char) -> bool {
    let mut escaped = false;
    for c in text.chars() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            c if c == quote => return true,
            _ => {}
        }
    }

    false
}
