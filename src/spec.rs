//! ASCII Property-List Format Notes
//!
//! This module documents the dialect of the ASCII plist format accepted
//! by this library. It contains no code.
//!
//! # Overview
//!
//! ASCII plists are the historical human-readable property-list dialect
//! used on NeXTSTEP, OpenStep, and early Apple platforms, and still found
//! today in `.pbxproj` project files and `.strings` resources. A document
//! holds exactly one value.
//!
//! # Grammar
//!
//! ```text
//! plist     := value
//! value     := scalar | array | dict
//! scalar    := string | number | hex | bool | data
//! array     := "(" [ value ("," value)* [","] ] ")"
//! dict      := "{" ( string "=" value ";" )* "}"
//! data      := "<" (hexpair | ws)* ">"
//! string    := quoted | unquoted
//! ```
//!
//! Note the asymmetry in separators: every dictionary entry ends with a
//! `;`, including the last, while arrays separate entries with `,` and
//! merely tolerate a trailing one.
//!
//! # Scalars
//!
//! | Type | Syntax | Example |
//! |------|--------|---------|
//! | String | unquoted word or `"quoted"` | `name`, `"two words"` |
//! | Integer | decimal or `0x` hex, optional `-` | `42`, `-0x1F` |
//! | Real | decimal containing `.` or an exponent | `2.5`, `1e5` |
//! | Boolean | `YES`/`true`, `NO`/`false` (exact case) | `YES` |
//! | Data | hex pairs in angle brackets | `<48656c6c 6f>` |
//!
//! ## Unquoted strings
//!
//! An unquoted word is a maximal run of `[A-Za-z0-9_$./-]`. The run is
//! classified after scanning: boolean words and number shapes become
//! their typed tokens, everything else is a string. Words that merely
//! resemble numbers (`1.2.3`, `42abc`, `0x`) stay strings, as do `inf`
//! and `nan`.
//!
//! In dictionary-key position classification is moot: any string,
//! number, or boolean literal reads back as its raw text, so `{ YES = 1; }`
//! has the string key `"YES"`.
//!
//! ## Quoted strings
//!
//! Quoted strings may span lines and support C-style escapes:
//!
//! ```text
//! \n \r \t \a \b \f \v   named control characters
//! \"  \\                 quote and backslash
//! \NNN                   octal, up to three digits
//! \xHH                   hex, up to two digits
//! \uHHHH                 unicode code point, four digits
//! ```
//!
//! Any other escaped character stands for itself.
//!
//! Octal and hex escapes denote raw bytes. When a quoted literal's
//! decoded bytes do not form valid UTF-8, the value is data rather than
//! a string, so every escaped byte is preserved exactly; in
//! dictionary-key position such a literal is an error.
//!
//! # Comments
//!
//! `// to end of line` and `/* block */` comments may appear between any
//! two tokens and are discarded.
//!
//! # The GNUStep dialect
//!
//! [`Style::GnuStep`](crate::Style) additionally accepts typed scalars in
//! angle brackets:
//!
//! | Literal | Value |
//! |---------|-------|
//! | `<*I5>` | Integer(5) |
//! | `<*R0.5>` | Real(0.5) |
//! | `<*BY>` / `<*BN>` | Boolean true / false |
//! | `<*D2007-01-09 14:13:20 +0000>` | Date (normalized to UTC) |
//!
//! # Divergences from historical parsers
//!
//! - Integer literals outside the signed 64-bit range are an error, never
//!   a silent truncation.
//! - A data literal with an odd number of hex digits is an error.
//! - A duplicate dictionary key keeps the last value and emits one
//!   diagnostic through the reporter callback instead of overwriting
//!   silently.
