//! The streaming parse driver.
//!
//! [`Parser`] owns a [`Lexer`] and a stack of in-progress containers, and
//! assembles the value tree one token at a time through a three-state
//! machine:
//!
//! - `PList`: expecting a value, a key, or a container boundary
//! - `KeyValSeparator`: expecting `=` after a dictionary key
//! - `EntrySeparator`: expecting `;` (dictionary), `,` (array), or `)`
//!
//! Dictionaries require a `;` after every entry; arrays accept a trailing
//! `,` but do not require a final separator. Comments are discarded in
//! every state. The first completed top-level value becomes the root; any
//! further token is an error.
//!
//! In key position every string, number, and boolean literal reads back as
//! its raw text and becomes a String key, so `{ 30 = x; YES = y; }` has
//! the keys `"30"` and `"YES"`. A data or typed literal in key position is
//! a hard error.
//!
//! The first error terminates the parse; the partially built tree drops
//! with the consumed parser. An optional reporter callback observes the
//! failure (and duplicate-key warnings) as `(line, column, message)`, both
//! coordinates derived from the stored byte offset.

use crate::error::{position, Error, Result};
use crate::lexer::{
    decode_data, decode_quoted, decode_quoted_bytes, decode_unquoted, Lexer, Style, Token,
};
use crate::{Dictionary, Value};
use chrono::{DateTime, Utc};

/// Configuration for a parse run.
///
/// # Examples
///
/// ```rust
/// use ascii_plist::{from_slice_with_options, ParseOptions, Style, Value};
///
/// let options = ParseOptions::new().with_style(Style::GnuStep);
/// let value = from_slice_with_options(b"<*I5>", options).unwrap();
/// assert_eq!(value, Value::Integer(5));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ParseOptions {
    pub style: Style,
}

impl ParseOptions {
    /// Creates default options (plain ASCII dialect).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the input dialect.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

/// Diagnostic callback: `(line, column, message)`, both 1-based.
///
/// Invoked once per duplicate dictionary key and once if the parse fails.
pub type Reporter<'a> = Box<dyn FnMut(usize, usize, &str) + 'a>;

struct PendingKey {
    name: String,
    offset: usize,
}

enum Frame {
    Array(Vec<Value>),
    Dictionary {
        entries: Dictionary,
        pending_key: Option<PendingKey>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    PList,
    KeyValSeparator,
    EntrySeparator,
}

/// Parser for a single input buffer.
///
/// One parser serves one `parse()` call; the call consumes the parser, so
/// a failed parse cannot be resumed and never leaks a partial tree.
///
/// # Examples
///
/// ```rust
/// use ascii_plist::{ParseOptions, Parser, Value};
///
/// let parser = Parser::new(b"( 1, 2 )", ParseOptions::new());
/// let value = parser.parse().unwrap();
/// assert_eq!(value, Value::Array(vec![Value::Integer(1), Value::Integer(2)]));
/// ```
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    stack: Vec<Frame>,
    root: Option<Value>,
    reporter: Option<Reporter<'a>>,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `input`.
    #[must_use]
    pub fn new(input: &'a [u8], options: ParseOptions) -> Self {
        Parser {
            lexer: Lexer::new(input, options.style),
            stack: Vec::new(),
            root: None,
            reporter: None,
        }
    }

    /// Attaches a diagnostic callback.
    #[must_use]
    pub fn with_reporter(mut self, reporter: Reporter<'a>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Runs the parse to completion.
    ///
    /// # Errors
    ///
    /// Returns the first lexical, syntactic, or semantic error; the
    /// reporter (if any) observes it with line/column coordinates.
    pub fn parse(mut self) -> Result<Value> {
        match self.run() {
            Ok(value) => Ok(value),
            Err(error) => {
                self.report(error.offset().unwrap_or(0), &error.to_string());
                Err(error)
            }
        }
    }

    fn run(&mut self) -> Result<Value> {
        let mut state = State::PList;

        loop {
            let token = self.lexer.next_token()?;
            let offset = self.lexer.token_offset();

            if token.is_comment() {
                continue;
            }

            match state {
                State::PList => match token {
                    Token::Eof => {
                        return match self.root.take() {
                            Some(root) if self.stack.is_empty() => Ok(root),
                            _ => Err(Error::PrematureEof { offset }),
                        };
                    }
                    Token::DictionaryStart => {
                        self.check_not_done(offset)?;
                        self.stack.push(Frame::Dictionary {
                            entries: Dictionary::new(),
                            pending_key: None,
                        });
                    }
                    Token::ArrayStart => {
                        self.check_not_done(offset)?;
                        self.stack.push(Frame::Array(Vec::new()));
                    }
                    Token::DictionaryEnd => {
                        self.check_not_done(offset)?;
                        state = self.close_dictionary(offset)?;
                    }
                    Token::ArrayEnd => {
                        self.check_not_done(offset)?;
                        state = self.close_array(offset)?;
                    }
                    Token::UnquotedString(_)
                    | Token::QuotedString(_)
                    | Token::Number(_)
                    | Token::HexNumber(_)
                    | Token::BoolTrue(_)
                    | Token::BoolFalse(_)
                    | Token::Data(_)
                    | Token::TypedScalar(_) => {
                        self.check_not_done(offset)?;
                        state = self.store_literal(token, offset)?;
                    }
                    Token::KeyValSeparator | Token::EntrySeparator(_) => {
                        return Err(Error::syntax(offset, "unexpected token"));
                    }
                    Token::InlineComment(_) | Token::LongComment(_) => {}
                },

                State::KeyValSeparator => match token {
                    Token::KeyValSeparator => state = State::PList,
                    Token::Eof => return Err(Error::PrematureEof { offset }),
                    _ => {
                        return Err(Error::syntax(offset, "expected '=' after dictionary key"));
                    }
                },

                State::EntrySeparator => match token {
                    Token::EntrySeparator(b';') => {
                        if !matches!(self.stack.last(), Some(Frame::Dictionary { .. })) {
                            return Err(Error::syntax(offset, "expected ',' or ')' in array"));
                        }
                        state = State::PList;
                    }
                    Token::EntrySeparator(_) => {
                        if !matches!(self.stack.last(), Some(Frame::Array(_))) {
                            return Err(Error::syntax(
                                offset,
                                "expected ';' after dictionary entry",
                            ));
                        }
                        state = State::PList;
                    }
                    // Arrays do not require a final separator; dictionaries do.
                    Token::ArrayEnd => {
                        if !matches!(self.stack.last(), Some(Frame::Array(_))) {
                            return Err(Error::syntax(
                                offset,
                                "expected ';' after dictionary entry",
                            ));
                        }
                        state = self.close_array(offset)?;
                    }
                    Token::Eof => return Err(Error::PrematureEof { offset }),
                    _ => return Err(Error::syntax(offset, "expected entry separator")),
                },
            }
        }
    }

    fn check_not_done(&self, offset: usize) -> Result<()> {
        if self.root.is_some() {
            Err(Error::TrailingContent { offset })
        } else {
            Ok(())
        }
    }

    /// Decodes a literal token and stores it as a key or a value,
    /// returning the follow-on state.
    fn store_literal(&mut self, token: Token<'_>, offset: usize) -> Result<State> {
        let top_level = self.stack.is_empty();
        let key_position = matches!(
            self.stack.last(),
            Some(Frame::Dictionary {
                pending_key: None,
                ..
            })
        );

        if key_position {
            let name = match token {
                Token::QuotedString(raw) => decode_quoted(raw, offset)?,
                Token::UnquotedString(raw)
                | Token::Number(raw)
                | Token::HexNumber(raw)
                | Token::BoolTrue(raw)
                | Token::BoolFalse(raw) => decode_unquoted(raw),
                Token::Data(_) | Token::TypedScalar(_) => {
                    return Err(Error::DataAsKey { offset });
                }
                _ => return Err(Error::syntax(offset, "unexpected token")),
            };
            self.store_key(name, offset)?;
            return Ok(State::KeyValSeparator);
        }

        let value = self.decode_value(token, offset)?;
        self.store_value(value, offset)?;
        Ok(if top_level {
            State::PList
        } else {
            State::EntrySeparator
        })
    }

    fn decode_value(&self, token: Token<'_>, offset: usize) -> Result<Value> {
        match token {
            Token::QuotedString(raw) => Ok(decoded_string_value(decode_quoted_bytes(raw, offset)?)),
            Token::UnquotedString(raw) => Ok(Value::String(decode_unquoted(raw))),
            Token::BoolTrue(_) => Ok(Value::Boolean(true)),
            Token::BoolFalse(_) => Ok(Value::Boolean(false)),
            Token::Number(raw) => decode_number(raw, offset),
            Token::HexNumber(raw) => decode_hex(raw, offset),
            Token::Data(raw) => Ok(Value::Data(decode_data(raw, offset)?)),
            Token::TypedScalar(raw) => decode_typed(raw, offset),
            _ => Err(Error::syntax(offset, "unexpected token")),
        }
    }

    fn store_key(&mut self, name: String, offset: usize) -> Result<()> {
        match self.stack.last_mut() {
            Some(Frame::Dictionary { pending_key, .. }) if pending_key.is_none() => {
                *pending_key = Some(PendingKey { name, offset });
                Ok(())
            }
            _ => Err(Error::syntax(offset, "key outside dictionary")),
        }
    }

    fn store_value(&mut self, value: Value, offset: usize) -> Result<()> {
        let mut duplicate = None;
        match self.stack.last_mut() {
            None => self.root = Some(value),
            Some(Frame::Array(items)) => items.push(value),
            Some(Frame::Dictionary {
                entries,
                pending_key,
            }) => match pending_key.take() {
                Some(key) => {
                    if entries.insert(key.name.clone(), value).is_some() {
                        duplicate = Some(key);
                    }
                }
                None => {
                    return Err(Error::syntax(offset, "dictionary value without a key"));
                }
            },
        }
        if let Some(key) = duplicate {
            let message = format!(
                "duplicate dictionary key '{}' overwrites earlier value",
                key.name
            );
            self.report(key.offset, &message);
        }
        Ok(())
    }

    fn close_dictionary(&mut self, offset: usize) -> Result<State> {
        match self.stack.pop() {
            Some(Frame::Dictionary {
                entries,
                pending_key: None,
            }) => self.finish_container(Value::Dictionary(entries), offset),
            Some(Frame::Dictionary { .. }) => {
                Err(Error::syntax(offset, "dictionary key without a value"))
            }
            Some(Frame::Array(_)) | None => {
                Err(Error::syntax(offset, "'}' does not close a dictionary"))
            }
        }
    }

    fn close_array(&mut self, offset: usize) -> Result<State> {
        match self.stack.pop() {
            Some(Frame::Array(items)) => self.finish_container(Value::Array(items), offset),
            Some(Frame::Dictionary { .. }) | None => {
                Err(Error::syntax(offset, "')' does not close an array"))
            }
        }
    }

    fn finish_container(&mut self, value: Value, offset: usize) -> Result<State> {
        if self.stack.is_empty() {
            self.root = Some(value);
            Ok(State::PList)
        } else {
            self.store_value(value, offset)?;
            Ok(State::EntrySeparator)
        }
    }

    fn report(&mut self, offset: usize, message: &str) {
        if let Some(reporter) = self.reporter.as_mut() {
            let (line, column) = position(self.lexer.input(), offset);
            reporter(line, column, message);
        }
    }
}

/// Escaped bytes that do not form UTF-8 text become a Data value, so hex
/// and octal escapes keep their exact bytes.
fn decoded_string_value(bytes: Vec<u8>) -> Value {
    match String::from_utf8(bytes) {
        Ok(text) => Value::String(text),
        Err(raw) => Value::Data(raw.into_bytes()),
    }
}

fn decode_number(raw: &[u8], offset: usize) -> Result<Value> {
    let text = decode_unquoted(raw);
    if raw
        .iter()
        .any(|&byte| matches!(byte, b'.' | b'e' | b'E'))
    {
        text.parse::<f64>()
            .map(Value::Real)
            .map_err(|_| Error::syntax(offset, format!("malformed real literal '{text}'")))
    } else {
        text.parse::<i64>().map(Value::Integer).map_err(|_| {
            // The lexer only classifies well-formed digit runs as numbers,
            // so a failed parse is an out-of-range literal.
            Error::IntegerOutOfRange {
                offset,
                literal: text,
            }
        })
    }
}

fn decode_hex(raw: &[u8], offset: usize) -> Result<Value> {
    let text = decode_unquoted(raw);
    let (sign, magnitude) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    // Skip the 0x / 0X marker.
    let digits = &magnitude[2..];
    i64::from_str_radix(&format!("{sign}{digits}"), 16)
        .map(Value::Integer)
        .map_err(|_| Error::IntegerOutOfRange {
            offset,
            literal: text,
        })
}

/// GNUStep date literals use a fixed timestamp format.
pub(crate) const GNUSTEP_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

fn decode_typed(raw: &[u8], offset: usize) -> Result<Value> {
    let Some((tag, payload)) = raw.split_first() else {
        return Err(Error::syntax(offset, "empty typed literal"));
    };
    let payload = std::str::from_utf8(payload)
        .map_err(|_| Error::syntax(offset, "typed literal is not valid UTF-8"))?;

    match tag {
        b'I' => payload.parse::<i64>().map(Value::Integer).map_err(|_| {
            let digits = payload.strip_prefix('-').unwrap_or(payload);
            if !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit()) {
                Error::IntegerOutOfRange {
                    offset,
                    literal: payload.to_string(),
                }
            } else {
                Error::syntax(offset, format!("malformed integer literal '{payload}'"))
            }
        }),
        b'R' => payload
            .parse::<f64>()
            .map(Value::Real)
            .map_err(|_| Error::syntax(offset, format!("malformed real literal '{payload}'"))),
        b'B' => match payload {
            "Y" => Ok(Value::Boolean(true)),
            "N" => Ok(Value::Boolean(false)),
            _ => Err(Error::syntax(
                offset,
                format!("malformed boolean literal '{payload}'"),
            )),
        },
        b'D' => DateTime::parse_from_str(payload, GNUSTEP_DATE_FORMAT)
            .map(|date| Value::Date(date.with_timezone(&Utc)))
            .map_err(|_| Error::syntax(offset, format!("malformed date literal '{payload}'"))),
        _ => Err(Error::syntax(offset, "unknown typed literal")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn parse(input: &str) -> Result<Value> {
        Parser::new(input.as_bytes(), ParseOptions::new()).parse()
    }

    fn parse_gnustep(input: &str) -> Result<Value> {
        Parser::new(
            input.as_bytes(),
            ParseOptions::new().with_style(Style::GnuStep),
        )
        .parse()
    }

    #[test]
    fn test_scalar_roots() {
        assert_eq!(parse("42"), Ok(Value::Integer(42)));
        assert_eq!(parse("2.5"), Ok(Value::Real(2.5)));
        assert_eq!(parse("YES"), Ok(Value::Boolean(true)));
        assert_eq!(parse("NO"), Ok(Value::Boolean(false)));
        assert_eq!(parse("hello"), Ok(Value::String("hello".to_string())));
        assert_eq!(
            parse(r#""two words""#),
            Ok(Value::String("two words".to_string()))
        );
        assert_eq!(parse("<41 42>"), Ok(Value::Data(b"AB".to_vec())));
    }

    #[test]
    fn test_simple_dictionary() {
        let value = parse(r#"{ name = "Alice"; age = 30; }"#).unwrap();
        let dict = value.as_dictionary().unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get("name"), Some(&Value::String("Alice".to_string())));
        assert_eq!(dict.get("age"), Some(&Value::Integer(30)));
    }

    #[test]
    fn test_mixed_array() {
        assert_eq!(
            parse(r#"( 1, 2.5, YES, "x" )"#),
            Ok(Value::Array(vec![
                Value::Integer(1),
                Value::Real(2.5),
                Value::Boolean(true),
                Value::String("x".to_string()),
            ]))
        );
    }

    #[test]
    fn test_data_in_dictionary() {
        let value = parse("{ data = <48656c6c 6f>; }").unwrap();
        let dict = value.as_dictionary().unwrap();
        assert_eq!(dict.get("data"), Some(&Value::Data(b"Hello".to_vec())));
    }

    #[test]
    fn test_semicolon_inside_array_fails_at_semicolon() {
        let input = "/* top */ { a = ( 1; )";
        let err = parse(input).unwrap_err();
        assert_eq!(err.offset(), Some(input.find(';').unwrap()));
    }

    #[test]
    fn test_missing_trailing_semicolon() {
        let input = "{ a = 1 }";
        let err = parse(input).unwrap_err();
        assert_eq!(err.offset(), Some(input.find('}').unwrap()));
    }

    #[test]
    fn test_duplicate_key_overwrites_with_one_diagnostic() {
        let mut warnings = Vec::new();
        let parser = Parser::new(b"{ a = 1; a = 2; }", ParseOptions::new()).with_reporter(
            Box::new(|line, column, message| {
                warnings.push((line, column, message.to_string()));
            }),
        );
        let value = parser.parse().unwrap();

        let dict = value.as_dictionary().unwrap();
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get("a"), Some(&Value::Integer(2)));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].2.contains("duplicate"));
        assert!(warnings[0].2.contains('a'));
    }

    #[test]
    fn test_nested_containers() {
        let value = parse("{ outer = { inner = ( 1, ( 2 ) ); }; }").unwrap();
        let outer = value.as_dictionary().unwrap().get("outer").unwrap();
        let inner = outer.as_dictionary().unwrap().get("inner").unwrap();
        assert_eq!(
            inner,
            &Value::Array(vec![
                Value::Integer(1),
                Value::Array(vec![Value::Integer(2)]),
            ])
        );
    }

    #[test]
    fn test_number_and_bool_keys_become_strings() {
        let value = parse("{ 30 = x; YES = y; 0x10 = z; }").unwrap();
        let dict = value.as_dictionary().unwrap();
        let keys: Vec<_> = dict.keys().cloned().collect();
        assert_eq!(keys, vec!["30", "YES", "0x10"]);
    }

    #[test]
    fn test_data_as_key_is_an_error() {
        assert!(matches!(
            parse("{ <41> = 1; }"),
            Err(Error::DataAsKey { offset: 2 })
        ));
    }

    #[test]
    fn test_trailing_array_comma_allowed() {
        assert_eq!(
            parse("( 1, 2, )"),
            Ok(Value::Array(vec![Value::Integer(1), Value::Integer(2)]))
        );
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(parse("{}"), Ok(Value::Dictionary(Dictionary::new())));
        assert_eq!(parse("()"), Ok(Value::Array(Vec::new())));
    }

    #[test]
    fn test_comma_after_dictionary_entry_fails() {
        assert!(parse("{ a = 1, }").is_err());
    }

    #[test]
    fn test_mismatched_closers() {
        assert!(parse("( 1 }").is_err());
        assert!(parse("{ a = 1; )").is_err());
        assert!(parse(")").is_err());
        assert!(parse("}").is_err());
    }

    #[test]
    fn test_premature_eof() {
        assert!(matches!(parse(""), Err(Error::PrematureEof { offset: 0 })));
        assert!(matches!(parse("{ a = "), Err(Error::PrematureEof { .. })));
        assert!(matches!(parse("( 1, "), Err(Error::PrematureEof { .. })));
        assert!(matches!(parse("// only\n"), Err(Error::PrematureEof { .. })));
    }

    #[test]
    fn test_trailing_content() {
        assert!(matches!(
            parse("1 2"),
            Err(Error::TrailingContent { offset: 2 })
        ));
        assert!(matches!(parse("{} ()"), Err(Error::TrailingContent { .. })));
    }

    #[test]
    fn test_missing_keyval_separator() {
        assert!(parse("{ a 1; }").is_err());
        assert!(parse("{ a }").is_err());
    }

    #[test]
    fn test_integer_semantics() {
        assert_eq!(parse("0x1F"), Ok(Value::Integer(31)));
        assert_eq!(parse("-0x10"), Ok(Value::Integer(-16)));
        assert_eq!(
            parse("9223372036854775807"),
            Ok(Value::Integer(i64::MAX))
        );
        assert!(matches!(
            parse("9223372036854775808"),
            Err(Error::IntegerOutOfRange { .. })
        ));
        assert!(matches!(
            parse("0x8000000000000000"),
            Err(Error::IntegerOutOfRange { .. })
        ));
    }

    #[test]
    fn test_real_semantics() {
        assert_eq!(parse("1e5"), Ok(Value::Real(100000.0)));
        assert_eq!(parse("-1.5e-3"), Ok(Value::Real(-0.0015)));
        // Bare words never become reals.
        assert_eq!(parse("inf"), Ok(Value::String("inf".to_string())));
        assert_eq!(parse("nan"), Ok(Value::String("nan".to_string())));
    }

    #[test]
    fn test_non_utf8_escapes_preserve_bytes() {
        assert_eq!(parse(r#""\xe9""#), Ok(Value::Data(vec![0xE9])));
        assert_eq!(parse(r#""caf\xe9""#), Ok(Value::Data(b"caf\xe9".to_vec())));
        // Escaped bytes forming valid UTF-8 stay text.
        assert_eq!(parse(r#""\xc3\xa9""#), Ok(Value::String("é".to_string())));
        // Keys must decode to text.
        assert!(parse(r#"{ "\xff" = 1; }"#).is_err());
    }

    #[test]
    fn test_comments_everywhere() {
        let value = parse(
            "// leading\n{ /* a */ key /* b */ = /* c */ 1 /* d */ ; /* e */ } // done",
        )
        .unwrap();
        assert_eq!(
            value.as_dictionary().unwrap().get("key"),
            Some(&Value::Integer(1))
        );
    }

    #[test]
    fn test_reporter_sees_failures() {
        let mut reports = Vec::new();
        let parser = Parser::new(b"{ a = 1 }", ParseOptions::new()).with_reporter(Box::new(
            |line, column, message| {
                reports.push((line, column, message.to_string()));
            },
        ));
        assert!(parser.parse().is_err());
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].0, 1);
        assert_eq!(reports[0].1, 9); // column of the '}'
    }

    #[test]
    fn test_gnustep_typed_literals() {
        assert_eq!(parse_gnustep("<*I5>"), Ok(Value::Integer(5)));
        assert_eq!(parse_gnustep("<*I-12>"), Ok(Value::Integer(-12)));
        assert_eq!(parse_gnustep("<*R1.5>"), Ok(Value::Real(1.5)));
        assert_eq!(parse_gnustep("<*BY>"), Ok(Value::Boolean(true)));
        assert_eq!(parse_gnustep("<*BN>"), Ok(Value::Boolean(false)));

        let expected = Utc.with_ymd_and_hms(2007, 1, 9, 14, 13, 20).unwrap();
        assert_eq!(
            parse_gnustep("<*D2007-01-09 14:13:20 +0000>"),
            Ok(Value::Date(expected))
        );
    }

    #[test]
    fn test_gnustep_malformed_typed_literals() {
        assert!(parse_gnustep("<*Babc>").is_err());
        assert!(parse_gnustep("<*Ix>").is_err());
        assert!(parse_gnustep("<*D2007>").is_err());
        assert!(parse_gnustep("<*Q1>").is_err());
        assert!(matches!(
            parse_gnustep("<*I99999999999999999999>"),
            Err(Error::IntegerOutOfRange { .. })
        ));
    }

    #[test]
    fn test_typed_literal_as_key_is_rejected() {
        assert!(matches!(
            parse_gnustep("{ <*I5> = 1; }"),
            Err(Error::DataAsKey { .. })
        ));
    }

    #[test]
    fn test_plain_data_still_works_in_gnustep_style() {
        assert_eq!(parse_gnustep("<4142>"), Ok(Value::Data(b"AB".to_vec())));
    }
}
