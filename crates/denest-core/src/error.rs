//! Error types for JSON lexing and parsing.

use thiserror::Error;

/// Convenience alias used throughout denest-core.
pub type Result<T> = std::result::Result<T, ParseError>;

/// A lexing or parsing failure.
///
/// Every variant carries the byte offset into the input where the problem
/// was detected (`0 <= offset <= input.len()`), so a caller can point at
/// the exact spot in a diagnostic. The discriminant is the primary carrier
/// of meaning; the `Display` text is presentation layered on top of it.
///
/// Parsing is all-or-nothing: no partial tree accompanies an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A character that cannot start any token.
    #[error("unexpected character '{found}' at offset {offset}")]
    UnexpectedCharacter { offset: usize, found: char },

    /// Input ended inside a string literal. The offset is the opening quote.
    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString { offset: usize },

    /// An unrecognized character after a backslash in a string literal.
    #[error("invalid escape character at offset {offset}")]
    InvalidEscape { offset: usize },

    /// A `\u` escape with fewer than four hex digits remaining, or with a
    /// non-hex digit among them.
    #[error("invalid unicode escape at offset {offset}")]
    InvalidUnicodeEscape { offset: usize },

    /// A numeric-looking run that is not a valid number (e.g. `1.2.3`).
    #[error("invalid number at offset {offset}")]
    InvalidNumber { offset: usize },

    /// A `t`/`f`/`n` that does not spell out `true`/`false`/`null`.
    #[error("invalid literal at offset {offset}, expected '{expected}'")]
    InvalidLiteral {
        offset: usize,
        expected: &'static str,
    },

    /// A token that cannot begin a value.
    #[error("unexpected {found} at offset {offset}")]
    UnexpectedToken {
        offset: usize,
        found: &'static str,
    },

    /// An object member did not start with a string key.
    #[error("expected string key at offset {offset}")]
    ExpectedKey { offset: usize },

    /// An object key was not followed by `:`.
    #[error("expected ':' after object key at offset {offset}")]
    ExpectedColon { offset: usize },

    /// Object members were separated by something other than `,`, and the
    /// object was not closed by `}`.
    #[error("expected ',' or '}}' in object at offset {offset}")]
    ExpectedCommaOrBrace { offset: usize },

    /// Array elements were separated by something other than `,`, and the
    /// array was not closed by `]`.
    #[error("expected ',' or ']' in array at offset {offset}")]
    ExpectedCommaOrBracket { offset: usize },

    /// Extra tokens after the single top-level value.
    #[error("unexpected {found} after top-level value at offset {offset}")]
    TrailingTokens {
        offset: usize,
        found: &'static str,
    },
}

impl ParseError {
    /// Byte offset into the input where the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnexpectedCharacter { offset, .. }
            | ParseError::UnterminatedString { offset }
            | ParseError::InvalidEscape { offset }
            | ParseError::InvalidUnicodeEscape { offset }
            | ParseError::InvalidNumber { offset }
            | ParseError::InvalidLiteral { offset, .. }
            | ParseError::UnexpectedToken { offset, .. }
            | ParseError::ExpectedKey { offset }
            | ParseError::ExpectedColon { offset }
            | ParseError::ExpectedCommaOrBrace { offset }
            | ParseError::ExpectedCommaOrBracket { offset }
            | ParseError::TrailingTokens { offset, .. } => *offset,
        }
    }
}
