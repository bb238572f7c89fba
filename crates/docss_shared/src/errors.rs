//! Error results that can be returned from the byte stream and the css3 parser
use crate::byte_stream::Location;
use std::fmt::{Display, Formatter};

/// Kind of problem that stopped the parser
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input does not match the grammar. The code points into the parser message table.
    Syntax { code: u16 },
    /// The input is syntactically valid, but its meaning is not (unknown unit etc.)
    Semantic,
    /// The input could not be read at all (bad seek, illegal byte order mark, I/O failure)
    Fatal,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Syntax { code } => write!(f, "syntax error {code}"),
            ErrorKind::Semantic => write!(f, "semantic error"),
            ErrorKind::Fatal => write!(f, "fatal error"),
        }
    }
}

/// Parser error that defines an error (message) on the given position
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub struct CssError {
    pub kind: ErrorKind,
    /// Error message
    pub message: String,
    /// Location of the error, if available (during parsing mostly)
    pub location: Option<Location>,
    /// The text that was parsed right before the error occurred
    pub snippet: Option<String>,
    /// Complete input that was being parsed, when the parser was asked to attach it
    pub input: Option<String>,
}

impl CssError {
    #[must_use]
    pub fn syntax(code: u16, message: &str, location: Location, snippet: &str) -> Self {
        CssError {
            kind: ErrorKind::Syntax { code },
            message: message.to_string(),
            location: Some(location),
            snippet: Some(snippet.to_string()),
            input: None,
        }
    }

    #[must_use]
    pub fn semantic(message: &str) -> Self {
        CssError {
            kind: ErrorKind::Semantic,
            message: message.to_string(),
            location: None,
            snippet: None,
            input: None,
        }
    }

    #[must_use]
    pub fn semantic_at(message: &str, location: Location) -> Self {
        CssError {
            location: Some(location),
            ..Self::semantic(message)
        }
    }

    #[must_use]
    pub fn fatal(message: &str) -> Self {
        CssError {
            kind: ErrorKind::Fatal,
            message: message.to_string(),
            location: None,
            snippet: None,
            input: None,
        }
    }

    /// Attaches the complete parser input to the error
    #[must_use]
    pub fn with_input(mut self, input: String) -> Self {
        self.input = Some(input);
        self
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self.kind, ErrorKind::Syntax { .. })
    }

    pub fn is_semantic(&self) -> bool {
        self.kind == ErrorKind::Semantic
    }

    pub fn is_fatal(&self) -> bool {
        self.kind == ErrorKind::Fatal
    }

    /// Returns the syntax error code, if this is a syntax error
    pub fn code(&self) -> Option<u16> {
        match self.kind {
            ErrorKind::Syntax { code } => Some(code),
            _ => None,
        }
    }

    /// Returns a human readable report of the error. When the input is attached, the offending
    /// line is shown with a caret under the error column.
    pub fn report(&self) -> String {
        let mut out = format!("{self}\n");

        let (Some(input), Some(loc)) = (&self.input, &self.location) else {
            return out;
        };
        let Some(line) = input.lines().nth(loc.line.saturating_sub(1)) else {
            return out;
        };

        let prefix = format!("{:>4} | ", loc.line);
        out.push_str(&format!("{prefix}{line}\n"));
        out.push_str(&format!("{}^\n", " ".repeat(prefix.len() + loc.column)));

        out
    }
}

impl Display for CssError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.location {
            Some(loc) => write!(
                f,
                "{}: {} at line {}, column {}",
                self.kind, self.message, loc.line, loc.column
            ),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

pub type CssResult<T> = Result<T, CssError>;
