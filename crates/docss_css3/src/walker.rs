use crate::node::{Directive, Document, Expression, RuleSet, Value};
use std::io::Write;

/// The walker prints the parsed document as an indented tree, mostly for debugging
pub struct Walker<'a> {
    root: &'a Document,
}

impl<'a> Walker<'a> {
    pub fn new(root: &'a Document) -> Self {
        Self { root }
    }

    pub fn walk_stdout(&self) {
        let _ = walk_document(self.root, &mut std::io::stdout());
    }

    pub fn walk_to_string(&self) -> String {
        let mut output: Vec<u8> = Vec::new();

        let _ = walk_document(self.root, &mut output);

        String::from_utf8_lossy(&output).into_owned()
    }
}

fn walk_document(document: &Document, f: &mut dyn Write) -> Result<(), std::io::Error> {
    writeln!(f, "[Document]")?;
    for directive in &document.directives {
        walk_directive(directive, 1, f)?;
    }
    for rule_set in &document.rule_sets {
        walk_rule_set(rule_set, 1, f)?;
    }

    Ok(())
}

fn walk_directive(directive: &Directive, depth: usize, f: &mut dyn Write) -> Result<(), std::io::Error> {
    let prefix = " ".repeat(depth * 2);

    writeln!(f, "{}[Directive] {} kind: {:?}", prefix, directive.name, directive.kind)?;
    if let Some(expression) = &directive.expression {
        walk_expression(expression, depth + 1, f)?;
    }
    for medium in &directive.mediums {
        writeln!(f, "{}  [Medium] {}", prefix, medium.as_str())?;
    }
    for child in &directive.directives {
        walk_directive(child, depth + 1, f)?;
    }
    for declaration in &directive.declarations {
        writeln!(
            f,
            "{}  [Declaration] {} important: {}",
            prefix, declaration.name, declaration.important
        )?;
        walk_expression(&declaration.expression, depth + 2, f)?;
    }
    for rule_set in &directive.rule_sets {
        walk_rule_set(rule_set, depth + 1, f)?;
    }

    Ok(())
}

fn walk_rule_set(rule_set: &RuleSet, depth: usize, f: &mut dyn Write) -> Result<(), std::io::Error> {
    let prefix = " ".repeat(depth * 2);

    writeln!(f, "{}[RuleSet]", prefix)?;
    for selector in &rule_set.selectors {
        writeln!(f, "{}  [Selector]", prefix)?;
        for simple_selector in &selector.simple_selectors {
            writeln!(f, "{}    [SimpleSelector] {}", prefix, simple_selector.to_string().trim_start())?;
        }
    }
    for declaration in &rule_set.declarations {
        writeln!(
            f,
            "{}  [Declaration] {} important: {}",
            prefix, declaration.name, declaration.important
        )?;
        walk_expression(&declaration.expression, depth + 2, f)?;
    }

    Ok(())
}

fn walk_expression(expression: &Expression, depth: usize, f: &mut dyn Write) -> Result<(), std::io::Error> {
    let prefix = " ".repeat(depth * 2);

    writeln!(f, "{}[Expression]", prefix)?;
    for term in &expression.terms {
        match &term.value {
            Value::Number { .. } => writeln!(f, "{}  [Number] {}", prefix, term.value)?,
            Value::Ident(name) => writeln!(f, "{}  [Ident] {}", prefix, name)?,
            Value::String(s) => writeln!(f, "{}  [String] {}", prefix, s)?,
            Value::Url(url) => writeln!(f, "{}  [Url] {}", prefix, url)?,
            Value::Unicode(range) => writeln!(f, "{}  [Unicode] {}", prefix, range)?,
            Value::Hex(hex) => writeln!(f, "{}  [Hex] {}", prefix, hex)?,
            Value::Function(function) => {
                writeln!(f, "{}  [Function] {}", prefix, function.name)?;
                walk_expression(&function.expression, depth + 2, f)?;
            }
        }
    }

    Ok(())
}
