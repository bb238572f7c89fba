//! Start and follow sets of the grammar productions. Start sets drive the parser decisions,
//! follow sets only end up in error messages since the parser stops at the first error.
use crate::errors::ErrorCode;
use crate::tokenizer::TokenType;
use itertools::Itertools;
use std::fmt;

/// Kind of token, without its value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    Eof,
    Ident,
    Number,
    String,
    Unicode,
    Url,
    Medium,
    N,
    Important,
    Delim(char),
    LCurly,
    RCurly,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Colon,
    Semicolon,
    Includes,
    DashMatch,
    PrefixMatch,
    SuffixMatch,
    SubstringMatch,
    Cdo,
    Cdc,
}

impl Symbol {
    pub fn of(token_type: &TokenType) -> Symbol {
        match token_type {
            TokenType::Ident(_) => Symbol::Ident,
            TokenType::Number(_) => Symbol::Number,
            TokenType::QuotedString(_) | TokenType::BadString(_) => Symbol::String,
            TokenType::Unicode(_) => Symbol::Unicode,
            TokenType::Url => Symbol::Url,
            TokenType::Medium(_) => Symbol::Medium,
            TokenType::N => Symbol::N,
            TokenType::Important => Symbol::Important,
            TokenType::Delim(c) => Symbol::Delim(*c),
            TokenType::LCurly => Symbol::LCurly,
            TokenType::RCurly => Symbol::RCurly,
            TokenType::LParen => Symbol::LParen,
            TokenType::RParen => Symbol::RParen,
            TokenType::LBracket => Symbol::LBracket,
            TokenType::RBracket => Symbol::RBracket,
            TokenType::Comma => Symbol::Comma,
            TokenType::Colon => Symbol::Colon,
            TokenType::Semicolon => Symbol::Semicolon,
            TokenType::Includes => Symbol::Includes,
            TokenType::DashMatch => Symbol::DashMatch,
            TokenType::PrefixMatch => Symbol::PrefixMatch,
            TokenType::SuffixMatch => Symbol::SuffixMatch,
            TokenType::SubstringMatch => Symbol::SubstringMatch,
            TokenType::Cdo => Symbol::Cdo,
            TokenType::Cdc => Symbol::Cdc,
            TokenType::Eof => Symbol::Eof,
        }
    }

    /// Error code for when this symbol was expected but not found
    pub fn expected(self) -> ErrorCode {
        match self {
            Symbol::Eof => ErrorCode::EofExpected,
            Symbol::Ident => ErrorCode::IdentExpected,
            Symbol::Number => ErrorCode::NumberExpected,
            Symbol::String => ErrorCode::StringExpected,
            Symbol::Unicode => ErrorCode::UnicodeExpected,
            Symbol::Url => ErrorCode::UrlExpected,
            Symbol::Medium => ErrorCode::InvalidMedium,
            Symbol::N => ErrorCode::NExpected,
            Symbol::Important => ErrorCode::ImportantExpected,
            Symbol::Delim('@') => ErrorCode::AtExpected,
            Symbol::Delim('-') => ErrorCode::MinusExpected,
            Symbol::Delim('+') => ErrorCode::PlusExpected,
            Symbol::Delim('>') => ErrorCode::GreaterExpected,
            Symbol::Delim('~') => ErrorCode::TildeExpected,
            Symbol::Delim('#') => ErrorCode::HashExpected,
            Symbol::Delim('.') => ErrorCode::DotExpected,
            Symbol::Delim('*') => ErrorCode::AsteriskExpected,
            Symbol::Delim('=') => ErrorCode::EqualsExpected,
            Symbol::Delim('!') => ErrorCode::ExclamationExpected,
            Symbol::Delim('/') => ErrorCode::SlashExpected,
            Symbol::Delim('%') => ErrorCode::PercentExpected,
            Symbol::Delim(_) => ErrorCode::UnknownExpected,
            Symbol::LCurly => ErrorCode::LCurlyExpected,
            Symbol::RCurly => ErrorCode::RCurlyExpected,
            Symbol::LParen => ErrorCode::LParenExpected,
            Symbol::RParen => ErrorCode::RParenExpected,
            Symbol::LBracket => ErrorCode::LBracketExpected,
            Symbol::RBracket => ErrorCode::RBracketExpected,
            Symbol::Comma => ErrorCode::CommaExpected,
            Symbol::Colon => ErrorCode::ColonExpected,
            Symbol::Semicolon => ErrorCode::SemicolonExpected,
            Symbol::Includes => ErrorCode::IncludesExpected,
            Symbol::DashMatch => ErrorCode::DashMatchExpected,
            Symbol::PrefixMatch => ErrorCode::PrefixMatchExpected,
            Symbol::SuffixMatch => ErrorCode::SuffixMatchExpected,
            Symbol::SubstringMatch => ErrorCode::SubstringMatchExpected,
            Symbol::Cdo => ErrorCode::CdoExpected,
            Symbol::Cdc => ErrorCode::CdcExpected,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Eof => write!(f, "EOF"),
            Symbol::Ident => write!(f, "identifier"),
            Symbol::Number => write!(f, "number"),
            Symbol::String => write!(f, "string"),
            Symbol::Unicode => write!(f, "unicode range"),
            Symbol::Url => write!(f, "\"url\""),
            Symbol::Medium => write!(f, "medium"),
            Symbol::N => write!(f, "\"n\""),
            Symbol::Important => write!(f, "\"important\""),
            Symbol::Delim(c) => write!(f, "\"{c}\""),
            Symbol::LCurly => write!(f, "\"{{\""),
            Symbol::RCurly => write!(f, "\"}}\""),
            Symbol::LParen => write!(f, "\"(\""),
            Symbol::RParen => write!(f, "\")\""),
            Symbol::LBracket => write!(f, "\"[\""),
            Symbol::RBracket => write!(f, "\"]\""),
            Symbol::Comma => write!(f, "\",\""),
            Symbol::Colon => write!(f, "\":\""),
            Symbol::Semicolon => write!(f, "\";\""),
            Symbol::Includes => write!(f, "\"~=\""),
            Symbol::DashMatch => write!(f, "\"|=\""),
            Symbol::PrefixMatch => write!(f, "\"^=\""),
            Symbol::SuffixMatch => write!(f, "\"$=\""),
            Symbol::SubstringMatch => write!(f, "\"*=\""),
            Symbol::Cdo => write!(f, "\"<!--\""),
            Symbol::Cdc => write!(f, "\"-->\""),
        }
    }
}

/// Grammar productions, one parsing routine each
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Production {
    Stylesheet,
    Directive,
    Medium,
    RuleSet,
    Selector,
    SimpleSelector,
    Attribute,
    Pseudo,
    Declaration,
    Expression,
    Term,
    HexValue,
    Identity,
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Production::Stylesheet => "stylesheet",
            Production::Directive => "directive",
            Production::Medium => "medium",
            Production::RuleSet => "rule set",
            Production::Selector => "selector",
            Production::SimpleSelector => "simple selector",
            Production::Attribute => "attribute",
            Production::Pseudo => "pseudo",
            Production::Declaration => "declaration",
            Production::Expression => "expression",
            Production::Term => "term",
            Production::HexValue => "hex value",
            Production::Identity => "identity",
        };

        write!(f, "{name}")
    }
}

const IDENTITY: &[Symbol] = &[
    Symbol::Ident,
    Symbol::Url,
    Symbol::Medium,
    Symbol::N,
    Symbol::Important,
];

const TERM: &[Symbol] = &[
    Symbol::Ident,
    Symbol::Url,
    Symbol::Medium,
    Symbol::N,
    Symbol::Important,
    Symbol::String,
    Symbol::Unicode,
    Symbol::Number,
    Symbol::Delim('#'),
    Symbol::Delim('+'),
    Symbol::Delim('-'),
    Symbol::Delim('.'),
];

const DECLARATION: &[Symbol] = &[
    Symbol::Ident,
    Symbol::Url,
    Symbol::Medium,
    Symbol::N,
    Symbol::Important,
    Symbol::Delim('-'),
];

const SIMPLE_SELECTOR: &[Symbol] = &[
    Symbol::Ident,
    Symbol::Url,
    Symbol::Medium,
    Symbol::N,
    Symbol::Important,
    Symbol::Delim('*'),
    Symbol::Delim('#'),
    Symbol::Delim('.'),
    Symbol::LBracket,
    Symbol::Colon,
];

const STYLESHEET: &[Symbol] = &[
    Symbol::Ident,
    Symbol::Url,
    Symbol::Medium,
    Symbol::N,
    Symbol::Important,
    Symbol::Delim('*'),
    Symbol::Delim('#'),
    Symbol::Delim('.'),
    Symbol::LBracket,
    Symbol::Colon,
    Symbol::Delim('@'),
    Symbol::Cdo,
    Symbol::Cdc,
    Symbol::Delim('/'),
];

/// Everything that may follow a statement: the next statement, the end of the enclosing block,
/// or the end of the input
const STATEMENT_FOLLOW: &[Symbol] = &[
    Symbol::Ident,
    Symbol::Url,
    Symbol::Medium,
    Symbol::N,
    Symbol::Important,
    Symbol::Delim('*'),
    Symbol::Delim('#'),
    Symbol::Delim('.'),
    Symbol::LBracket,
    Symbol::Colon,
    Symbol::Delim('@'),
    Symbol::Cdo,
    Symbol::Cdc,
    Symbol::Delim('/'),
    Symbol::RCurly,
    Symbol::Eof,
];

const SIMPLE_SELECTOR_FOLLOW: &[Symbol] = &[
    Symbol::Comma,
    Symbol::LCurly,
    Symbol::Delim('+'),
    Symbol::Delim('>'),
    Symbol::Delim('~'),
    Symbol::Ident,
    Symbol::Url,
    Symbol::Medium,
    Symbol::N,
    Symbol::Important,
    Symbol::Delim('*'),
    Symbol::Delim('#'),
    Symbol::Delim('.'),
    Symbol::LBracket,
    Symbol::Colon,
];

const TERM_FOLLOW: &[Symbol] = &[
    Symbol::Comma,
    Symbol::Delim('/'),
    Symbol::Semicolon,
    Symbol::RCurly,
    Symbol::RParen,
    Symbol::Delim('!'),
    Symbol::Ident,
    Symbol::Url,
    Symbol::Medium,
    Symbol::N,
    Symbol::Important,
    Symbol::String,
    Symbol::Unicode,
    Symbol::Number,
    Symbol::Delim('#'),
    Symbol::Delim('+'),
    Symbol::Delim('-'),
    Symbol::Delim('.'),
];

impl Production {
    /// Tokens a production can start with
    pub fn first(self) -> &'static [Symbol] {
        match self {
            Production::Stylesheet => STYLESHEET,
            Production::Directive => &[Symbol::Delim('@')],
            Production::Medium => &[Symbol::Medium],
            Production::RuleSet | Production::Selector | Production::SimpleSelector => SIMPLE_SELECTOR,
            Production::Attribute => &[Symbol::LBracket],
            Production::Pseudo => &[Symbol::Colon],
            Production::Declaration => DECLARATION,
            Production::Expression | Production::Term => TERM,
            Production::HexValue => &[Symbol::Delim('#')],
            Production::Identity => IDENTITY,
        }
    }

    /// Tokens that may directly follow a production
    pub fn follow(self) -> &'static [Symbol] {
        match self {
            Production::Stylesheet => &[Symbol::Eof],
            Production::Directive | Production::RuleSet => STATEMENT_FOLLOW,
            Production::Medium => &[Symbol::Comma, Symbol::LCurly, Symbol::Semicolon],
            Production::Selector => &[Symbol::Comma, Symbol::LCurly],
            Production::SimpleSelector | Production::Attribute | Production::Pseudo => {
                SIMPLE_SELECTOR_FOLLOW
            }
            Production::Declaration => &[Symbol::Semicolon, Symbol::RCurly],
            Production::Expression => &[
                Symbol::Semicolon,
                Symbol::RCurly,
                Symbol::RParen,
                Symbol::Delim('!'),
            ],
            Production::Term | Production::HexValue | Production::Identity => TERM_FOLLOW,
        }
    }

    /// Returns true when the token can start this production
    pub fn starts(self, token_type: &TokenType) -> bool {
        self.contains(Symbol::of(token_type))
    }

    /// Returns true when the symbol is in the start set
    pub fn contains(self, symbol: Symbol) -> bool {
        self.first().contains(&symbol)
    }

    /// Returns true when the token can follow this production
    pub fn is_followed_by(self, token_type: &TokenType) -> bool {
        self.follow().contains(&Symbol::of(token_type))
    }

    /// Human readable list of symbols
    pub fn describe(symbols: &[Symbol]) -> String {
        symbols.iter().unique().join(", ")
    }
}
