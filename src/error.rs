//! Error types for ASCII plist parsing.
//!
//! Every parse-time error carries the byte offset at which the offending
//! scan began, so callers can point at the exact spot in the input. Line
//! and column numbers are not tracked while lexing; they are derived from
//! the offset on demand via [`position`].
//!
//! ## Error Categories
//!
//! - **Lexical**: invalid character, unterminated quoted string / long
//!   comment / data literal
//! - **Syntactic**: unexpected token for the current parse state, missing
//!   separators, mismatched closers, premature end of input
//! - **Semantic**: data used as a dictionary key, integer literal out of
//!   signed 64-bit range
//! - **I/O**: file open or read failure (file entry point only)
//!
//! ## Examples
//!
//! ```rust
//! use ascii_plist::from_str;
//!
//! let result = from_str("{ a = 1 }");
//! match result {
//!     Err(err) => assert!(err.offset().is_some()),
//!     Ok(_) => panic!("missing ';' must not parse"),
//! }
//! ```

use thiserror::Error;

/// Represents all possible errors produced while parsing an ASCII plist.
///
/// Parse-time variants record the byte offset where the scan of the
/// offending construct began.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A byte that cannot begin any token.
    #[error("invalid token at offset {offset}")]
    InvalidToken { offset: usize },

    /// A `"` string reached end of input before its closing quote.
    #[error("unterminated quoted string starting at offset {offset}")]
    UnterminatedQuotedString { offset: usize },

    /// A `/* ... */` comment reached end of input before `*/`.
    #[error("unterminated long comment starting at offset {offset}")]
    UnterminatedLongComment { offset: usize },

    /// A `<...>` data literal reached end of input before `>`.
    #[error("unterminated data starting at offset {offset}")]
    UnterminatedData { offset: usize },

    /// A GNUStep `<*...>` typed literal reached end of input before `>`.
    #[error("unterminated unquoted string starting at offset {offset}")]
    UnterminatedUnquotedString { offset: usize },

    /// A token that is legal on its own appeared where the grammar does
    /// not allow it.
    #[error("syntax error at offset {offset}: {message}")]
    Syntax { offset: usize, message: String },

    /// A data literal appeared in dictionary-key position.
    #[error("data cannot be a dictionary key (offset {offset})")]
    DataAsKey { offset: usize },

    /// An integer literal outside the signed 64-bit range.
    #[error("integer literal out of range at offset {offset}: {literal}")]
    IntegerOutOfRange { offset: usize, literal: String },

    /// End of input with an unfinished value or an open container.
    #[error("premature end of input at offset {offset}")]
    PrematureEof { offset: usize },

    /// A token after the top-level value was already complete.
    #[error("unexpected token after top-level value at offset {offset}")]
    TrailingContent { offset: usize },

    /// File open or read failure.
    #[error("IO error: {0}")]
    Io(String),

    /// Generic message, used outside the parse path (e.g. failed value
    /// extraction).
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a syntax error at the given byte offset.
    pub fn syntax(offset: usize, message: impl Into<String>) -> Self {
        Error::Syntax {
            offset,
            message: message.into(),
        }
    }

    /// Creates an I/O error from a display message.
    pub fn io(message: impl std::fmt::Display) -> Self {
        Error::Io(message.to_string())
    }

    /// Creates a generic error from a display message.
    pub fn message(message: impl std::fmt::Display) -> Self {
        Error::Message(message.to_string())
    }

    /// The byte offset the error points at, if it arose from parsing.
    ///
    /// The offset is always within `0..=input.len()`.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::InvalidToken { offset }
            | Error::UnterminatedQuotedString { offset }
            | Error::UnterminatedLongComment { offset }
            | Error::UnterminatedData { offset }
            | Error::UnterminatedUnquotedString { offset }
            | Error::Syntax { offset, .. }
            | Error::DataAsKey { offset }
            | Error::IntegerOutOfRange { offset, .. }
            | Error::PrematureEof { offset }
            | Error::TrailingContent { offset } => Some(*offset),
            Error::Io(_) | Error::Message(_) => None,
        }
    }

    /// Derives the 1-based (line, column) of this error within `input`.
    ///
    /// I/O errors have no position; they resolve to (1, 1).
    #[must_use]
    pub fn position(&self, input: &[u8]) -> (usize, usize) {
        position(input, self.offset().unwrap_or(0))
    }
}

/// Derives the 1-based (line, column) for a byte offset within `input`.
///
/// Offsets past the end of the input resolve to the position one past the
/// final byte.
#[must_use]
pub fn position(input: &[u8], offset: usize) -> (usize, usize) {
    let offset = offset.min(input.len());
    let mut line = 1;
    let mut column = 1;
    for &byte in &input[..offset] {
        if byte == b'\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}

pub type Result<T> = std::result::Result<T, Error>;
