//! Error codes of the css3 parser. Every code has a fixed message; syntax errors carry the code
//! so callers can tell them apart without matching on the text.
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[repr(u16)]
pub enum ErrorCode {
    #[error("EOF expected")]
    EofExpected = 0,
    #[error("identifier expected")]
    IdentExpected = 1,
    #[error("number expected")]
    NumberExpected = 2,
    #[error("string expected")]
    StringExpected = 3,
    #[error("unicode range expected")]
    UnicodeExpected = 4,
    #[error("\"url\" expected")]
    UrlExpected = 5,
    #[error("\"all\" expected")]
    AllExpected = 6,
    #[error("\"aural\" expected")]
    AuralExpected = 7,
    #[error("\"braille\" expected")]
    BrailleExpected = 8,
    #[error("\"embossed\" expected")]
    EmbossedExpected = 9,
    #[error("\"handheld\" expected")]
    HandheldExpected = 10,
    #[error("\"print\" expected")]
    PrintExpected = 11,
    #[error("\"projection\" expected")]
    ProjectionExpected = 12,
    #[error("\"screen\" expected")]
    ScreenExpected = 13,
    #[error("\"tty\" expected")]
    TtyExpected = 14,
    #[error("\"tv\" expected")]
    TvExpected = 15,
    #[error("\"n\" expected")]
    NExpected = 16,
    #[error("\"important\" expected")]
    ImportantExpected = 17,
    #[error("\"<!--\" expected")]
    CdoExpected = 18,
    #[error("\"-->\" expected")]
    CdcExpected = 19,
    #[error("\"@\" expected")]
    AtExpected = 20,
    #[error("\"-\" expected")]
    MinusExpected = 21,
    #[error("\"{{\" expected")]
    LCurlyExpected = 22,
    #[error("\";\" expected")]
    SemicolonExpected = 23,
    #[error("\"}}\" expected")]
    RCurlyExpected = 24,
    #[error("\",\" expected")]
    CommaExpected = 25,
    #[error("\":\" expected")]
    ColonExpected = 26,
    #[error("\"+\" expected")]
    PlusExpected = 27,
    #[error("\">\" expected")]
    GreaterExpected = 28,
    #[error("\"~\" expected")]
    TildeExpected = 29,
    #[error("\"#\" expected")]
    HashExpected = 30,
    #[error("\".\" expected")]
    DotExpected = 31,
    #[error("\"*\" expected")]
    AsteriskExpected = 32,
    #[error("\"[\" expected")]
    LBracketExpected = 33,
    #[error("\"]\" expected")]
    RBracketExpected = 34,
    #[error("\"=\" expected")]
    EqualsExpected = 35,
    #[error("\"~=\" expected")]
    IncludesExpected = 36,
    #[error("\"|=\" expected")]
    DashMatchExpected = 37,
    #[error("\"^=\" expected")]
    PrefixMatchExpected = 38,
    #[error("\"$=\" expected")]
    SuffixMatchExpected = 39,
    #[error("\"*=\" expected")]
    SubstringMatchExpected = 40,
    #[error("\"(\" expected")]
    LParenExpected = 41,
    #[error("\")\" expected")]
    RParenExpected = 42,
    #[error("\"!\" expected")]
    ExclamationExpected = 43,
    #[error("\"/\" expected")]
    SlashExpected = 44,
    #[error("\"%\" expected")]
    PercentExpected = 45,
    #[error("??? expected")]
    UnknownExpected = 46,
    #[error("invalid stylesheet")]
    InvalidStylesheet = 47,
    #[error("invalid directive")]
    InvalidDirective = 48,
    #[error("invalid medium")]
    InvalidMedium = 49,
    #[error("invalid rule set")]
    InvalidRuleSet = 50,
    #[error("invalid selector")]
    InvalidSelector = 51,
    #[error("invalid simple selector")]
    InvalidSimpleSelector = 52,
    #[error("invalid attribute")]
    InvalidAttribute = 53,
    #[error("invalid pseudo")]
    InvalidPseudo = 54,
    #[error("invalid declaration")]
    InvalidDeclaration = 55,
    #[error("invalid expression")]
    InvalidExpression = 56,
    #[error("invalid term")]
    InvalidTerm = 57,
    #[error("invalid hex value")]
    InvalidHexValue = 58,
    #[error("invalid identity")]
    InvalidIdentity = 59,
    #[error("invalid directive body")]
    InvalidDirectiveBody = 60,
    #[error("unterminated string")]
    UnterminatedString = 61,
}

impl ErrorCode {
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Human readable message of the code
    pub fn message(self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(ErrorCode::LCurlyExpected.message(), "\"{\" expected");
        assert_eq!(ErrorCode::RCurlyExpected.message(), "\"}\" expected");
        assert_eq!(ErrorCode::InvalidTerm.message(), "invalid term");
        assert_eq!(ErrorCode::InvalidTerm.code(), 57);
        assert_eq!(ErrorCode::UnterminatedString.code(), 61);
    }
}
