//! Nodes of the parsed style sheet. All nodes are plain data: they are built once by the parser
//! and can be rendered back to css with `Display` (see the serializer module).
use crate::units::Unit;
use serde::Serialize;

/// A complete style sheet. Directives and rule sets are kept in two separate lists, each in
/// source order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Document {
    pub directives: Vec<Directive>,
    pub rule_sets: Vec<RuleSet>,
}

impl Document {
    /// Returns the document as a JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Kind of at-rule, derived from its name
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum DirectiveKind {
    Media,
    Import,
    Charset,
    Page,
    FontFace,
    Namespace,
    #[default]
    Other,
}

impl DirectiveKind {
    /// Returns the kind of directive for the given name (including the `@`)
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "@media" => DirectiveKind::Media,
            "@import" => DirectiveKind::Import,
            "@charset" => DirectiveKind::Charset,
            "@page" => DirectiveKind::Page,
            "@font-face" => DirectiveKind::FontFace,
            "@namespace" => DirectiveKind::Namespace,
            _ => DirectiveKind::Other,
        }
    }
}

/// An at-rule like `@media print { ... }` or `@import url(a.css);`
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Directive {
    pub kind: DirectiveKind,
    /// Name of the directive, always starting with `@`
    pub name: String,
    pub expression: Option<Expression>,
    pub mediums: Vec<Medium>,
    pub directives: Vec<Directive>,
    pub rule_sets: Vec<RuleSet>,
    pub declarations: Vec<Declaration>,
}

impl Directive {
    /// Returns true when the directive is rendered with a `{ ... }` block
    pub fn has_block(&self) -> bool {
        matches!(
            self.kind,
            DirectiveKind::Media | DirectiveKind::Page | DirectiveKind::FontFace
        ) || !self.directives.is_empty()
            || !self.rule_sets.is_empty()
            || !self.declarations.is_empty()
    }
}

/// Media types that can be listed in `@media` and `@import`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Medium {
    All,
    Aural,
    Braille,
    Embossed,
    Handheld,
    Print,
    Projection,
    Screen,
    Tty,
    Tv,
}

impl Medium {
    pub const ALL: [Medium; 10] = [
        Medium::All,
        Medium::Aural,
        Medium::Braille,
        Medium::Embossed,
        Medium::Handheld,
        Medium::Print,
        Medium::Projection,
        Medium::Screen,
        Medium::Tty,
        Medium::Tv,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Medium::All => "all",
            Medium::Aural => "aural",
            Medium::Braille => "braille",
            Medium::Embossed => "embossed",
            Medium::Handheld => "handheld",
            Medium::Print => "print",
            Medium::Projection => "projection",
            Medium::Screen => "screen",
            Medium::Tty => "tty",
            Medium::Tv => "tv",
        }
    }
}

/// A list of selectors with the declarations that apply to them
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RuleSet {
    pub selectors: Vec<Selector>,
    pub declarations: Vec<Declaration>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Selector {
    pub simple_selectors: Vec<SimpleSelector>,
}

/// Relation between a simple selector and the one before it. No combinator means descendant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Combinator {
    /// `>`
    ChildOf,
    /// `+`
    PrecededImmediatelyBy,
    /// `~`
    PrecededBy,
}

/// One step of a selector. Extra conditions on the same element (`a.b:hover`) are chained
/// through `child`; the chain is a conjunction and not a descendant relation.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SimpleSelector {
    pub combinator: Option<Combinator>,
    /// Element name or `*`
    pub element_name: Option<String>,
    pub id: Option<String>,
    pub class: Option<String>,
    /// Pseudo class or element, without the leading colon(s)
    pub pseudo: Option<String>,
    pub attribute: Option<Attribute>,
    /// Functional pseudo class like `nth-child(2n+1)`
    pub function: Option<Function>,
    pub child: Option<Box<SimpleSelector>>,
}

impl SimpleSelector {
    /// Appends a condition at the end of the chain
    pub fn push_child(&mut self, child: SimpleSelector) {
        if let Some(next) = self.child.as_deref_mut() {
            next.push_child(child);
            return;
        }
        self.child = Some(Box::new(child));
    }
}

/// Attribute matcher like `[type="text"]`
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Attribute {
    pub operand: String,
    pub operator: Option<AttributeOperator>,
    pub value: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AttributeOperator {
    /// `=`
    Equals,
    /// `~=`
    InList,
    /// `|=`
    Hyphenated,
    /// `^=`
    BeginsWith,
    /// `$=`
    EndsWith,
    /// `*=`
    Contains,
}

impl AttributeOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeOperator::Equals => "=",
            AttributeOperator::InList => "~=",
            AttributeOperator::Hyphenated => "|=",
            AttributeOperator::BeginsWith => "^=",
            AttributeOperator::EndsWith => "$=",
            AttributeOperator::Contains => "*=",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Declaration {
    pub name: String,
    pub expression: Expression,
    pub important: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Expression {
    pub terms: Vec<Term>,
}

/// Character that joined a term to the term before it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Separator {
    Comma,
    Slash,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Sign {
    Plus,
    Minus,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Term {
    pub separator: Option<Separator>,
    pub value: Value,
}

impl Term {
    pub fn new(value: Value) -> Self {
        Self {
            separator: None,
            value,
        }
    }
}

/// Value of a single term
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Value {
    /// Number with optional sign and unit. The value text is kept as written, which includes
    /// the `An+B` notation (`2n+1`).
    Number {
        sign: Option<Sign>,
        value: String,
        unit: Unit,
    },
    /// Bare identifier like `red` or `-moz-box`
    Ident(String),
    /// Quoted string without the quotes. Escapes are kept as written.
    String(String),
    Function(Function),
    Url(String),
    /// Unicode range in upper case, without the `U\` prefix
    Unicode(String),
    /// Hex color value in upper case, without the `#`
    Hex(String),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Function {
    pub name: String,
    pub expression: Expression,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_kinds() {
        assert_eq!(DirectiveKind::from_name("@media"), DirectiveKind::Media);
        assert_eq!(DirectiveKind::from_name("@MEDIA"), DirectiveKind::Media);
        assert_eq!(DirectiveKind::from_name("@font-face"), DirectiveKind::FontFace);
        assert_eq!(DirectiveKind::from_name("@-moz-document"), DirectiveKind::Other);
    }

    #[test]
    fn chain_children() {
        let mut ss = SimpleSelector {
            element_name: Some("a".into()),
            ..Default::default()
        };
        ss.push_child(SimpleSelector {
            class: Some("b".into()),
            ..Default::default()
        });
        ss.push_child(SimpleSelector {
            pseudo: Some("hover".into()),
            ..Default::default()
        });

        let child = ss.child.as_ref().unwrap();
        assert_eq!(child.class.as_deref(), Some("b"));
        assert_eq!(child.child.as_ref().unwrap().pseudo.as_deref(), Some("hover"));
    }

    #[test]
    fn json() -> anyhow::Result<()> {
        let doc = Document {
            rule_sets: vec![RuleSet {
                selectors: vec![Selector {
                    simple_selectors: vec![SimpleSelector {
                        element_name: Some("p".into()),
                        ..Default::default()
                    }],
                }],
                declarations: vec![Declaration {
                    name: "color".into(),
                    expression: Expression {
                        terms: vec![Term::new(Value::Ident("red".into()))],
                    },
                    important: false,
                }],
            }],
            ..Default::default()
        };

        let json = doc.to_json()?;
        let v: serde_json::Value = serde_json::from_str(&json)?;
        assert_eq!(v["rule_sets"][0]["declarations"][0]["name"], "color");
        assert_eq!(
            v["rule_sets"][0]["declarations"][0]["expression"]["terms"][0]["value"]["Ident"],
            "red"
        );

        Ok(())
    }
}
