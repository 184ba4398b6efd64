//! Error type definitions for the reader

use crate::reader::{matching_open, Position};
use std::error::Error as StdError;
use std::fmt;

/// Categorized fatal reader failures. The first one encountered aborts
/// the pass; warnings never become errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// End of input inside a string literal.
    UnterminatedString,
    /// A closing bracket with no list open.
    StrayClose { found: char },
    /// A closing bracket while a reader macro still awaits its datum.
    CloseInsideQuote { found: char },
    /// A closing bracket of the wrong species.
    DelimiterMismatch { expected: char, found: char },
    /// End of input with at least one list still open.
    UnterminatedList { expected: char },
    /// Contract violations that carry no source location.
    Generic { message: String },
}

/// A fatal reader error and the position it was raised at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadError {
    pub kind: ErrorKind,
    pub location: Option<Position>,
}

/// Result type alias
pub type ReadResult<T> = Result<T, ReadError>;

impl ReadError {
    pub fn unterminated_string(at: Position) -> Self {
        ReadError {
            kind: ErrorKind::UnterminatedString,
            location: Some(at),
        }
    }

    pub fn stray_close(found: char, at: Position) -> Self {
        ReadError {
            kind: ErrorKind::StrayClose { found },
            location: Some(at),
        }
    }

    pub fn close_inside_quote(found: char, at: Position) -> Self {
        ReadError {
            kind: ErrorKind::CloseInsideQuote { found },
            location: Some(at),
        }
    }

    pub fn delimiter_mismatch(expected: char, found: char, at: Position) -> Self {
        ReadError {
            kind: ErrorKind::DelimiterMismatch { expected, found },
            location: Some(at),
        }
    }

    pub fn unterminated_list(expected: char, at: Position) -> Self {
        ReadError {
            kind: ErrorKind::UnterminatedList { expected },
            location: Some(at),
        }
    }

    pub fn generic(message: impl Into<String>) -> Self {
        ReadError {
            kind: ErrorKind::Generic {
                message: message.into(),
            },
            location: None,
        }
    }

    /// The message without the location suffix.
    pub fn description(&self) -> String {
        match &self.kind {
            ErrorKind::UnterminatedString => "Unterminated string".to_string(),
            ErrorKind::StrayClose { found } => {
                format!("'{}' without matching '{}'", found, matching_open(*found))
            }
            ErrorKind::CloseInsideQuote { found } => {
                format!(
                    "'{}' without matching '{}' inside quote",
                    found,
                    matching_open(*found)
                )
            }
            ErrorKind::DelimiterMismatch { expected, found } => {
                format!("Expected '{}', got '{}'", expected, found)
            }
            ErrorKind::UnterminatedList { expected } => {
                format!("Expected '{}', got eof", expected)
            }
            ErrorKind::Generic { message } => message.clone(),
        }
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())?;
        if let Some(location) = &self.location {
            write!(f, " at {}", location)?;
        }
        Ok(())
    }
}

impl StdError for ReadError {}

impl From<ReadError> for String {
    fn from(err: ReadError) -> String {
        err.to_string()
    }
}
