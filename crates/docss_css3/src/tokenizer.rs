use crate::node::Medium;
use docss_shared::byte_stream::Character::{Ch, StreamEnd};
use docss_shared::byte_stream::{ByteStream, Character, Location, CHAR_LF};
use docss_shared::errors::CssResult;
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, PartialEq, Clone)]
pub enum TokenType {
    Ident(String),
    /// Digits with an optional fraction (`12`, `1.5`). Signs and units are separate tokens.
    Number(String),
    /// The value does not include the quotes. Escapes are kept as written.
    QuotedString(String),
    /// A string that runs up to the end of the stream
    BadString(String),
    /// A unicode range (`U\0041`). The value does not include the `U\` marker.
    Unicode(String),
    /// The keyword `url`
    Url,
    /// One of the media type keywords
    Medium(Medium),
    /// The keyword `n` of `An+B` notations
    N,
    /// The keyword `important`
    Important,
    /// A `<delim-token>`
    Delim(char),
    /// A `<{-token>`
    LCurly,
    /// A `<}-token>`
    RCurly,
    /// A `<(-token>`
    LParen,
    /// A `<)-token>`
    RParen,
    /// A `<[-token>`
    LBracket,
    /// A `<]-token>`
    RBracket,
    /// A `<comma-token>`
    Comma,
    /// A `:` `<colon-token>`
    Colon,
    /// A `;` `<semicolon-token>`
    Semicolon,
    /// `~=`
    Includes,
    /// `|=`
    DashMatch,
    /// `^=`
    PrefixMatch,
    /// `$=`
    SuffixMatch,
    /// `*=`
    SubstringMatch,
    // A `<!--` `<CDO-token>`
    Cdo,
    // A `-->` `<CDC-token>`
    Cdc,
    Eof,
}

impl TokenType {
    /// Returns the text of identifier-like tokens. Keywords are identifiers too, in places where
    /// a name is expected.
    pub fn identity(&self) -> Option<String> {
        match self {
            TokenType::Ident(s) => Some(s.clone()),
            TokenType::Url => Some("url".to_string()),
            TokenType::Medium(m) => Some(m.as_str().to_string()),
            TokenType::N => Some("n".to_string()),
            TokenType::Important => Some("important".to_string()),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Token {
    /// Type of the token
    pub token_type: TokenType,
    /// Location of the first character of the token
    pub location: Location,
    /// Byte offset right after the token
    pub end: usize,
}

impl Token {
    /// Returns a new token for the given type on the given location
    pub(crate) fn new(token_type: TokenType, location: Location, end: usize) -> Token {
        Token {
            token_type,
            location,
            end,
        }
    }

    /// Returns true when this token directly follows the other token, without any whitespace
    /// or comments in between.
    pub fn follows(&self, other: &Token) -> bool {
        self.location.offset == other.end
    }

    pub fn is_delim(&self, delim: char) -> bool {
        self.token_type == TokenType::Delim(delim)
    }

    pub fn is_eof(&self) -> bool {
        self.token_type == TokenType::Eof
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = match self {
            TokenType::Ident(val) | TokenType::Number(val) => val.clone(),
            TokenType::QuotedString(val) | TokenType::BadString(val) => format!("\"{val}\""),
            TokenType::Unicode(val) => format!("U\\{val}"),
            TokenType::Url => "url".into(),
            TokenType::Medium(m) => m.as_str().into(),
            TokenType::N => "n".into(),
            TokenType::Important => "important".into(),
            TokenType::Delim(val) => val.to_string(),
            TokenType::Cdc => "-->".into(),
            TokenType::Cdo => "<!--".into(),
            TokenType::Colon => ":".into(),
            TokenType::Semicolon => ";".into(),
            TokenType::Comma => ",".into(),
            TokenType::LBracket => "[".into(),
            TokenType::RBracket => "]".into(),
            TokenType::LCurly => "{".into(),
            TokenType::RCurly => "}".into(),
            TokenType::LParen => "(".into(),
            TokenType::RParen => ")".into(),
            TokenType::Includes => "~=".into(),
            TokenType::DashMatch => "|=".into(),
            TokenType::PrefixMatch => "^=".into(),
            TokenType::SuffixMatch => "$=".into(),
            TokenType::SubstringMatch => "*=".into(),
            TokenType::Eof => "eof".into(),
        };

        write!(f, "{string}")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token_type)
    }
}

lazy_static! {
    /// Identifiers that are scanned as their own token type
    static ref KEYWORDS: HashMap<&'static str, TokenType> = {
        let mut keywords = HashMap::new();
        keywords.insert("url", TokenType::Url);
        keywords.insert("n", TokenType::N);
        keywords.insert("important", TokenType::Important);
        for medium in Medium::ALL {
            keywords.insert(medium.as_str(), TokenType::Medium(medium));
        }
        keywords
    };
}

/// Scanner state that can be restored after looking ahead a few characters
#[derive(Clone)]
struct Mark {
    ch: Character,
    stream_pos: usize,
    pos: usize,
    char_pos: usize,
    line: usize,
    column: usize,
}

/// CSS Tokenizer. Whitespace and comments are skipped, and every produced token is kept so the
/// parser can peek ahead without consuming.
pub struct Tokenizer<'src> {
    stream: ByteStream<'src>,
    /// Full list of all tokens produced by the tokenizer
    tokens: Vec<Token>,
    /// Index of the token returned by the next `scan()`
    position: usize,
    /// Index of the token returned by the next `peek()`
    peek_position: usize,
    /// Current character
    ch: Character,
    /// Byte offset of the current character
    pos: usize,
    /// Character offset of the current character
    char_pos: usize,
    /// Line of the current character, starting with 1
    line: usize,
    /// Column of the current character, starting with 0
    column: usize,
}

impl<'src> Tokenizer<'src> {
    /// Creates a new tokenizer that starts at the current position of the stream
    pub fn new(stream: ByteStream<'src>) -> Self {
        let mut tokenizer = Self {
            stream,
            tokens: Vec::new(),
            position: 0,
            peek_position: 0,
            ch: StreamEnd,
            pos: 0,
            char_pos: 0,
            line: 1,
            column: 0,
        };
        tokenizer.read_ch();

        tokenizer
    }

    /// Returns the next token and commits to it. Resets the peek position.
    pub fn scan(&mut self) -> CssResult<Token> {
        if self.position == self.tokens.len() {
            let token = self.next_token()?;
            self.tokens.push(token);
        }

        let token = self.tokens[self.position].clone();
        self.position += 1;
        self.peek_position = self.position;

        log::trace!("{:?}", token);

        Ok(token)
    }

    /// Returns the next token after the last peeked one, without committing to it
    pub fn peek(&mut self) -> CssResult<Token> {
        if self.peek_position == self.tokens.len() {
            let token = self.next_token()?;
            self.tokens.push(token);
        }

        let token = self.tokens[self.peek_position].clone();
        self.peek_position += 1;

        Ok(token)
    }

    /// Makes the next `peek()` return the token right after the last scanned one
    pub fn reset_peek(&mut self) {
        self.peek_position = self.position;
    }

    /// Returns the text between the given byte offsets
    pub fn slice(&mut self, begin: usize, end: usize) -> String {
        self.stream.slice(begin, end)
    }

    /// Returns the underlying stream, for instance to read the complete input or to check for
    /// read errors.
    pub fn stream(&mut self) -> &mut ByteStream<'src> {
        &mut self.stream
    }

    fn location(&self) -> Location {
        Location::new(self.line, self.column, self.pos, self.char_pos)
    }

    /// Reads the next character into `ch`. A `\r\n` pair and a bare `\r` are read as a
    /// single `\n`.
    fn read_ch(&mut self) {
        self.pos = self.stream.pos();
        self.ch = match self.stream.read() {
            Ch('\r') => {
                if self.stream.peek() == Ch(CHAR_LF) {
                    self.stream.read();
                }
                Ch(CHAR_LF)
            }
            c => c,
        };
    }

    /// Moves to the next character and keeps track of lines and columns
    fn next_ch(&mut self) {
        match self.ch {
            StreamEnd => return,
            Ch(CHAR_LF) => {
                self.line += 1;
                self.column = 0;
            }
            Ch(_) => self.column += 1,
        }
        self.char_pos += 1;

        self.read_ch();
    }

    /// Returns the character after the current one, without moving
    fn peek_ch(&mut self) -> Character {
        match self.stream.peek() {
            Ch('\r') => Ch(CHAR_LF),
            c => c,
        }
    }

    fn mark(&self) -> Mark {
        Mark {
            ch: self.ch,
            stream_pos: self.stream.pos(),
            pos: self.pos,
            char_pos: self.char_pos,
            line: self.line,
            column: self.column,
        }
    }

    fn rewind(&mut self, mark: Mark) -> CssResult<()> {
        self.stream.set_pos(mark.stream_pos)?;
        self.ch = mark.ch;
        self.pos = mark.pos;
        self.char_pos = mark.char_pos;
        self.line = mark.line;
        self.column = mark.column;

        Ok(())
    }

    /// Checks if the upcoming characters (starting with the current one) are the given text. The
    /// position is not changed.
    fn is_next(&mut self, text: &str) -> CssResult<bool> {
        let mark = self.mark();
        let mut found = true;
        for c in text.chars() {
            if self.ch != Ch(c) {
                found = false;
                break;
            }
            self.next_ch();
        }
        self.rewind(mark)?;

        Ok(found)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Ch(' ' | '\t' | '\n' | '\x0C')) {
            self.next_ch();
        }
    }

    /// Skips a `/* ... */` comment. Returns false when the comment is not terminated, in
    /// which case nothing is skipped.
    fn skip_comment(&mut self) -> CssResult<bool> {
        let mark = self.mark();

        // skip the `/*`
        self.next_ch();
        self.next_ch();

        loop {
            let ch = self.ch;
            match ch {
                Ch('*') if self.peek_ch() == Ch('/') => {
                    self.next_ch();
                    self.next_ch();
                    return Ok(true);
                }
                Ch(_) => self.next_ch(),
                StreamEnd => {
                    log::trace!("unterminated comment at {:?}", mark.line);
                    self.rewind(mark)?;
                    return Ok(false);
                }
            }
        }
    }

    /// Produces the next token from the stream
    fn next_token(&mut self) -> CssResult<Token> {
        loop {
            self.skip_whitespace();
            if self.ch == Ch('/') && self.peek_ch() == Ch('*') {
                if self.skip_comment()? {
                    continue;
                }

                // An unterminated comment is just a slash
                let loc = self.location();
                self.next_ch();
                return Ok(Token::new(TokenType::Delim('/'), loc, self.pos));
            }
            break;
        }

        let loc = self.location();
        let ch = self.ch;
        let token_type = match ch {
            StreamEnd => TokenType::Eof,
            Ch(c) if (c == 'U' || c == 'u') && self.peek_ch() == Ch('\\') => {
                self.next_ch();
                self.next_ch();
                TokenType::Unicode(self.consume_while(|c| c.is_ascii_alphanumeric() || c == '-' || c == '?'))
            }
            Ch(c) if is_ident_start(c) => {
                let ident = self.consume_while(is_ident_char);
                KEYWORDS
                    .get(ident.as_str())
                    .cloned()
                    .unwrap_or(TokenType::Ident(ident))
            }
            Ch(c) if c.is_ascii_digit() => self.consume_number(),
            Ch(c @ ('"' | '\'')) => self.consume_string(c),
            Ch('<') if self.is_next("<!--")? => {
                self.consume_chars(4);
                TokenType::Cdo
            }
            Ch('-') if self.is_next("-->")? => {
                self.consume_chars(3);
                TokenType::Cdc
            }
            Ch(c @ ('~' | '|' | '^' | '$' | '*')) if self.peek_ch() == Ch('=') => {
                self.consume_chars(2);
                match c {
                    '~' => TokenType::Includes,
                    '|' => TokenType::DashMatch,
                    '^' => TokenType::PrefixMatch,
                    '$' => TokenType::SuffixMatch,
                    _ => TokenType::SubstringMatch,
                }
            }
            Ch(c) => {
                self.next_ch();
                match c {
                    '{' => TokenType::LCurly,
                    '}' => TokenType::RCurly,
                    '(' => TokenType::LParen,
                    ')' => TokenType::RParen,
                    '[' => TokenType::LBracket,
                    ']' => TokenType::RBracket,
                    ',' => TokenType::Comma,
                    ':' => TokenType::Colon,
                    ';' => TokenType::Semicolon,
                    _ => TokenType::Delim(c),
                }
            }
        };

        Ok(Token::new(token_type, loc, self.pos))
    }

    fn consume_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut s = String::new();
        while let Ch(c) = self.ch {
            if !pred(c) {
                break;
            }
            s.push(c);
            self.next_ch();
        }

        s
    }

    fn consume_chars(&mut self, len: usize) {
        for _ in 0..len {
            self.next_ch();
        }
    }

    /// Digits, optionally followed by a `.` and more digits
    fn consume_number(&mut self) -> TokenType {
        let mut value = self.consume_while(|c| c.is_ascii_digit());
        if self.ch == Ch('.') && self.peek_ch().is_numeric() {
            self.next_ch();
            value.push('.');
            value.push_str(&self.consume_while(|c| c.is_ascii_digit()));
        }

        TokenType::Number(value)
    }

    /// Consumes a quoted string. An escaped quote does not end the string.
    fn consume_string(&mut self, quote: char) -> TokenType {
        // skip the opening quote
        self.next_ch();

        let mut value = String::new();
        loop {
            match self.ch {
                StreamEnd => return TokenType::BadString(value),
                Ch(c) if c == quote => {
                    self.next_ch();
                    return TokenType::QuotedString(value);
                }
                Ch('\\') => {
                    value.push('\\');
                    self.next_ch();
                    if let Ch(c) = self.ch {
                        value.push(c);
                        self.next_ch();
                    }
                }
                Ch(c) => {
                    value.push(c);
                    self.next_ch();
                }
            }
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || (!c.is_ascii() && c.is_alphabetic())
}

fn is_ident_char(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit() || c == '-'
}

#[cfg(test)]
mod test {
    use super::*;
    use docss_shared::byte_stream::Encoding;
    use test_case::test_case;

    macro_rules! assert_token_eq {
        ($t1:expr, $t2:expr) => {
            assert_eq!($t1.token_type, $t2)
        };
    }

    fn tokenizer(input: &str) -> Tokenizer<'static> {
        Tokenizer::new(ByteStream::from_str(input))
    }

    fn all_tokens(input: &str) -> Vec<TokenType> {
        let mut tokenizer = tokenizer(input);
        let mut tokens = Vec::new();
        loop {
            let t = tokenizer.scan().unwrap();
            if t.is_eof() {
                break;
            }
            tokens.push(t.token_type);
        }

        tokens
    }

    #[test]
    fn skip_comments() {
        let mut tokenizer = tokenizer("/* css comment */ a /**/b/* x */");

        assert_token_eq!(tokenizer.scan().unwrap(), TokenType::Ident("a".into()));
        assert_token_eq!(tokenizer.scan().unwrap(), TokenType::Ident("b".into()));
        assert_token_eq!(tokenizer.scan().unwrap(), TokenType::Eof);
        assert_token_eq!(tokenizer.scan().unwrap(), TokenType::Eof);
    }

    #[test]
    fn unterminated_comment_is_a_slash() {
        let mut tokenizer = tokenizer("a /* b");

        assert_token_eq!(tokenizer.scan().unwrap(), TokenType::Ident("a".into()));
        let slash = tokenizer.scan().unwrap();
        assert_token_eq!(slash, TokenType::Delim('/'));
        assert_eq!(slash.location.column, 2);

        let star = tokenizer.scan().unwrap();
        assert_token_eq!(star, TokenType::Delim('*'));
        assert!(star.follows(&slash));
        assert_token_eq!(tokenizer.scan().unwrap(), TokenType::Ident("b".into()));
        assert_token_eq!(tokenizer.scan().unwrap(), TokenType::Eof);
    }

    #[test]
    fn unterminated_comment_ending_in_star() {
        let mut tokenizer = tokenizer("/* q { } *");

        assert_token_eq!(tokenizer.scan().unwrap(), TokenType::Delim('/'));
        assert_token_eq!(tokenizer.scan().unwrap(), TokenType::Delim('*'));
        assert_token_eq!(tokenizer.scan().unwrap(), TokenType::Ident("q".into()));
        assert_token_eq!(tokenizer.scan().unwrap(), TokenType::LCurly);
        assert_token_eq!(tokenizer.scan().unwrap(), TokenType::RCurly);
        assert_token_eq!(tokenizer.scan().unwrap(), TokenType::Delim('*'));
        assert_token_eq!(tokenizer.scan().unwrap(), TokenType::Eof);
        assert_eq!(tokenizer.slice(0, 4), "/* q");
    }

    #[test_case("12", TokenType::Number("12".into()) ; "integer")]
    #[test_case("1.5", TokenType::Number("1.5".into()) ; "fraction")]
    #[test_case("0.0001", TokenType::Number("0.0001".into()) ; "small fraction")]
    #[test_case("color", TokenType::Ident("color".into()) ; "identifier")]
    #[test_case("font-size", TokenType::Ident("font-size".into()) ; "dashed identifier")]
    #[test_case("_hack", TokenType::Ident("_hack".into()) ; "underscore")]
    #[test_case("h1", TokenType::Ident("h1".into()) ; "identifier with digit")]
    #[test_case("über", TokenType::Ident("über".into()) ; "non ascii identifier")]
    #[test_case("url", TokenType::Url ; "url keyword")]
    #[test_case("URL", TokenType::Ident("URL".into()) ; "keywords are case sensitive")]
    #[test_case("print", TokenType::Medium(Medium::Print) ; "medium")]
    #[test_case("tv", TokenType::Medium(Medium::Tv) ; "short medium")]
    #[test_case("n", TokenType::N ; "n keyword")]
    #[test_case("important", TokenType::Important ; "important keyword")]
    #[test_case("U\\0041", TokenType::Unicode("0041".into()) ; "unicode")]
    #[test_case("u\\fe", TokenType::Unicode("fe".into()) ; "lowercase unicode")]
    #[test_case("U\\0025-00FF", TokenType::Unicode("0025-00FF".into()) ; "unicode range")]
    #[test_case("U\\4??", TokenType::Unicode("4??".into()) ; "unicode wildcard")]
    #[test_case("\"foo\"", TokenType::QuotedString("foo".into()) ; "double quoted")]
    #[test_case("'foo'", TokenType::QuotedString("foo".into()) ; "single quoted")]
    #[test_case("'it\\'s'", TokenType::QuotedString("it\\'s".into()) ; "escaped quote")]
    #[test_case("\"it's\"", TokenType::QuotedString("it's".into()) ; "other quote")]
    #[test_case("'open", TokenType::BadString("open".into()) ; "unterminated string")]
    #[test_case("<!--", TokenType::Cdo ; "cdo")]
    #[test_case("-->", TokenType::Cdc ; "cdc")]
    #[test_case("~=", TokenType::Includes ; "includes")]
    #[test_case("|=", TokenType::DashMatch ; "dash match")]
    #[test_case("^=", TokenType::PrefixMatch ; "prefix match")]
    #[test_case("$=", TokenType::SuffixMatch ; "suffix match")]
    #[test_case("*=", TokenType::SubstringMatch ; "substring match")]
    #[test_case("~", TokenType::Delim('~') ; "tilde")]
    #[test_case("{", TokenType::LCurly ; "left curly")]
    #[test_case("@", TokenType::Delim('@') ; "at")]
    #[test_case("#", TokenType::Delim('#') ; "hash")]
    fn single_tokens(input: &str, expected: TokenType) {
        let mut tokenizer = tokenizer(input);
        assert_token_eq!(tokenizer.scan().unwrap(), expected);
        assert_token_eq!(tokenizer.scan().unwrap(), TokenType::Eof);
    }

    #[test]
    fn produce_valid_stream_of_css_tokens() {
        let tokens = all_tokens("a.b > c[x|='y'] { margin: -1.5em 10% !important }");

        assert_eq!(
            tokens,
            vec![
                TokenType::Ident("a".into()),
                TokenType::Delim('.'),
                TokenType::Ident("b".into()),
                TokenType::Delim('>'),
                TokenType::Ident("c".into()),
                TokenType::LBracket,
                TokenType::Ident("x".into()),
                TokenType::DashMatch,
                TokenType::QuotedString("y".into()),
                TokenType::RBracket,
                TokenType::LCurly,
                TokenType::Ident("margin".into()),
                TokenType::Colon,
                TokenType::Delim('-'),
                TokenType::Number("1.5".into()),
                TokenType::Ident("em".into()),
                TokenType::Number("10".into()),
                TokenType::Delim('%'),
                TokenType::Delim('!'),
                TokenType::Important,
                TokenType::RCurly,
            ]
        );
    }

    #[test]
    fn numbers_and_dots() {
        assert_eq!(
            all_tokens("5. .5 2n+1"),
            vec![
                TokenType::Number("5".into()),
                TokenType::Delim('.'),
                TokenType::Delim('.'),
                TokenType::Number("5".into()),
                TokenType::Number("2".into()),
                TokenType::N,
                TokenType::Delim('+'),
                TokenType::Number("1".into()),
            ]
        );
    }

    #[test]
    fn dashes() {
        assert_eq!(
            all_tokens("-moz-box --> - -"),
            vec![
                TokenType::Delim('-'),
                TokenType::Ident("moz-box".into()),
                TokenType::Cdc,
                TokenType::Delim('-'),
                TokenType::Delim('-'),
            ]
        );
    }

    #[test]
    fn locations() {
        let mut tokenizer = tokenizer("a {\r\n  b: c;\rd\n}");

        let expected = [(1, 0, 0), (1, 2, 2), (2, 2, 7), (2, 3, 8), (2, 5, 10), (2, 6, 11), (3, 0, 13), (4, 0, 15)];
        for (line, column, offset) in expected {
            let t = tokenizer.scan().unwrap();
            assert_eq!(
                (t.location.line, t.location.column, t.location.offset),
                (line, column, offset),
                "token {t}"
            );
        }
        assert!(tokenizer.scan().unwrap().is_eof());
    }

    #[test]
    fn adjacency() {
        let mut tokenizer = tokenizer("12px 3 em");
        let number = tokenizer.scan().unwrap();
        let unit = tokenizer.scan().unwrap();
        assert!(unit.follows(&number));

        let number = tokenizer.scan().unwrap();
        let ident = tokenizer.scan().unwrap();
        assert!(!ident.follows(&number));
    }

    #[test]
    fn peek_and_reset() {
        let mut tokenizer = tokenizer("a b c d");

        assert_token_eq!(tokenizer.scan().unwrap(), TokenType::Ident("a".into()));
        assert_token_eq!(tokenizer.peek().unwrap(), TokenType::Ident("b".into()));
        assert_token_eq!(tokenizer.peek().unwrap(), TokenType::Ident("c".into()));
        tokenizer.reset_peek();
        assert_token_eq!(tokenizer.peek().unwrap(), TokenType::Ident("b".into()));

        // scanning is not disturbed by peeking, and resets the peek position
        assert_token_eq!(tokenizer.scan().unwrap(), TokenType::Ident("b".into()));
        assert_token_eq!(tokenizer.peek().unwrap(), TokenType::Ident("c".into()));
        assert_token_eq!(tokenizer.peek().unwrap(), TokenType::Ident("d".into()));
        assert_token_eq!(tokenizer.peek().unwrap(), TokenType::Eof);
        assert_token_eq!(tokenizer.scan().unwrap(), TokenType::Ident("c".into()));
        assert_token_eq!(tokenizer.scan().unwrap(), TokenType::Ident("d".into()));
        assert_token_eq!(tokenizer.scan().unwrap(), TokenType::Eof);
    }

    #[test]
    fn multibyte_offsets() {
        let mut tokenizer = tokenizer("é {}");
        let ident = tokenizer.scan().unwrap();
        assert_eq!(ident.end, 2);

        let curly = tokenizer.scan().unwrap();
        assert_eq!(curly.location.offset, 3);
        assert_eq!(curly.location.char_offset, 2);
        assert_eq!(curly.location.column, 2);
    }

    #[test]
    fn ascii_stream() {
        let mut stream = ByteStream::from_bytes(b"caf\xe9");
        stream.set_encoding(Encoding::ASCII);

        let mut tokenizer = Tokenizer::new(stream);
        assert_token_eq!(tokenizer.scan().unwrap(), TokenType::Ident("café".into()));
    }

    #[test]
    fn slices() {
        let mut tokenizer = tokenizer("url( http://a/b.png )");
        tokenizer.scan().unwrap();
        let lparen = tokenizer.scan().unwrap();
        assert_eq!(tokenizer.slice(lparen.end, 19), " http://a/b.png");
    }
}
