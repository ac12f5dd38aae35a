//! # ascii-plist
//!
//! A parser for the ASCII property-list ("plist") format — the historical
//! human-readable configuration dialect using `{}`, `()`, `<…>`, `=`, and
//! `;` — including the GNUStep extension with typed `<*T…>` literals.
//!
//! ## What is an ASCII plist?
//!
//! A hierarchical configuration format historically used on Apple
//! platforms. Values are strings, integers, reals, booleans, raw binary
//! data, dates (GNUStep), dictionaries, and arrays:
//!
//! ```text
//! {
//!     name = "Alice";
//!     age = 30;
//!     tags = ( admin, "power user" );
//!     avatar = <89504e47 0d0a>;
//! }
//! ```
//!
//! ## Key Features
//!
//! - **Full grammar**: quoted and unquoted strings with C-style escapes,
//!   decimal and hex integers, reals, `YES`/`NO` booleans, hex data,
//!   inline and block comments
//! - **Precise errors**: every failure carries the byte offset where the
//!   offending scan began; line/column are derived on demand
//! - **Source-ordered dictionaries**: iteration yields keys in input order
//! - **Canonical writer**: [`to_string`] renders a tree back to text that
//!   parses to an equal tree
//! - **No unsafe code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ascii-plist = "0.1"
//! ```
//!
//! ### Parsing
//!
//! ```rust
//! use ascii_plist::from_str;
//!
//! let prefs = from_str(r#"{ theme = dark; fontSize = 13; }"#).unwrap();
//! let dict = prefs.as_dictionary().unwrap();
//! assert_eq!(dict.get("theme").and_then(|v| v.as_str()), Some("dark"));
//! assert_eq!(dict.get("fontSize").and_then(|v| v.as_integer()), Some(13));
//! ```
//!
//! ### Building values with the plist! macro
//!
//! ```rust
//! use ascii_plist::{plist, to_string};
//!
//! let tree = plist!({
//!     "name" = "Alice";
//!     "admin" = YES;
//! });
//! let text = to_string(&tree);
//! assert!(text.contains("name = Alice"));
//! ```
//!
//! ### The GNUStep dialect
//!
//! ```rust
//! use ascii_plist::{from_slice_with_options, ParseOptions, Style, Value};
//!
//! let options = ParseOptions::new().with_style(Style::GnuStep);
//! let value = from_slice_with_options(b"( <*I5>, <*BY> )", options).unwrap();
//! assert_eq!(
//!     value,
//!     Value::Array(vec![Value::Integer(5), Value::Boolean(true)])
//! );
//! ```
//!
//! ## Diagnostics
//!
//! Attach a reporter callback to observe duplicate-key warnings and the
//! failure position as `(line, column, message)`:
//!
//! ```rust
//! use ascii_plist::{ParseOptions, Parser};
//!
//! let mut warnings = Vec::new();
//! let parser = Parser::new(b"{ a = 1; a = 2; }", ParseOptions::new())
//!     .with_reporter(Box::new(|line, column, message| {
//!         warnings.push(format!("{line}:{column}: {message}"));
//!     }));
//! let value = parser.parse().unwrap();
//! assert_eq!(value.as_dictionary().unwrap().len(), 1);
//! assert_eq!(warnings.len(), 1);
//! ```
//!
//! ## Concurrency
//!
//! A parse call is single-threaded and owns its lexer and context
//! exclusively; parse as many buffers in parallel as you like, one parser
//! each. Trees are plain owned data (`Send + Sync`): concurrent readers
//! are safe on an unmodified tree, a writer needs exclusive access.

pub mod error;
pub mod lexer;
pub mod macros;
pub mod map;
pub mod parser;
pub mod spec;
pub mod value;
pub mod writer;

pub use error::{position, Error, Result};
pub use lexer::{Lexer, Style, Token};
pub use map::Dictionary;
pub use parser::{ParseOptions, Parser, Reporter};
pub use value::{Kind, Value};
pub use writer::{to_string, to_string_with_style};

use std::io;
use std::path::Path;

/// Parses an ASCII plist from a string.
///
/// # Examples
///
/// ```rust
/// use ascii_plist::{from_str, Value};
///
/// let value = from_str("( 1, 2 )").unwrap();
/// assert_eq!(value, Value::Array(vec![Value::Integer(1), Value::Integer(2)]));
/// ```
///
/// # Errors
///
/// Returns an error if the input is not a well-formed ASCII plist; the
/// error records the byte offset of the failure.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Value> {
    from_slice(s.as_bytes())
}

/// Parses an ASCII plist from a byte buffer.
///
/// # Errors
///
/// Returns an error if the input is not a well-formed ASCII plist.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(bytes: &[u8]) -> Result<Value> {
    from_slice_with_options(bytes, ParseOptions::new())
}

/// Parses a plist from a byte buffer with explicit options.
///
/// Use this to opt into the GNUStep dialect:
///
/// ```rust
/// use ascii_plist::{from_slice_with_options, ParseOptions, Style, Value};
///
/// let options = ParseOptions::new().with_style(Style::GnuStep);
/// assert_eq!(
///     from_slice_with_options(b"<*R2.5>", options).unwrap(),
///     Value::Real(2.5)
/// );
/// ```
///
/// # Errors
///
/// Returns an error if the input is not well-formed in the selected
/// dialect.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice_with_options(bytes: &[u8], options: ParseOptions) -> Result<Value> {
    Parser::new(bytes, options).parse()
}

/// Parses a plist from an I/O stream.
///
/// The stream is read to its end before parsing begins.
///
/// # Examples
///
/// ```rust
/// use ascii_plist::{from_reader, Value};
/// use std::io::Cursor;
///
/// let value = from_reader(Cursor::new(b"{ a = 1; }")).unwrap();
/// assert!(value.is_dictionary());
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the content is not a well-formed
/// ASCII plist.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Value> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(Error::io)?;
    from_slice(&bytes)
}

/// Parses a plist file.
///
/// The file is read entirely into memory before parsing; there is no
/// streaming.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, or a parse error if
/// its content is not a well-formed ASCII plist.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Value> {
    let bytes = std::fs::read(path).map_err(Error::io)?;
    from_slice(&bytes)
}
