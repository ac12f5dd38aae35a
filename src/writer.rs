//! Canonical ASCII emission.
//!
//! The writer renders a [`Value`] tree back into ASCII plist text such
//! that parsing the output reproduces the tree. Strings are left bare
//! whenever they would lex back as the same unquoted string; everything
//! else is quoted with escapes. Integral reals keep a trailing `.0` so
//! they stay distinguishable from integers.
//!
//! Style only matters for values without an ASCII literal form: dates
//! always emit the GNUStep `<*D…>` literal (they have no other spelling),
//! and non-finite reals emit `<*R…>` under [`Style::GnuStep`]. Under
//! [`Style::Ascii`] infinities fall back to an overflowing exponent
//! literal (`1e999`), and NaN — which compares unequal to everything,
//! including itself — is written as the bare word `nan`.
//!
//! ```rust
//! use ascii_plist::{from_str, to_string};
//!
//! let tree = from_str(r#"{ name = "Alice"; age = 30; }"#).unwrap();
//! let text = to_string(&tree);
//! assert_eq!(from_str(&text).unwrap(), tree);
//! ```

use crate::lexer::{classify, is_unquoted_byte, Style, Token};
use crate::parser::GNUSTEP_DATE_FORMAT;
use crate::{Dictionary, Value};
use std::fmt::Write as _;

/// Renders `value` as canonical ASCII plist text.
#[must_use]
pub fn to_string(value: &Value) -> String {
    to_string_with_style(value, Style::Ascii)
}

/// Renders `value` as canonical plist text in the given dialect.
#[must_use]
pub fn to_string_with_style(value: &Value, style: Style) -> String {
    let mut writer = Writer {
        out: String::new(),
        style,
        depth: 0,
    };
    writer.write_value(value);
    writer.out
}

struct Writer {
    out: String,
    style: Style,
    depth: usize,
}

/// A string needs quoting unless it lexes back as the same unquoted string.
///
/// A leading `//` would start an inline comment even though both bytes are
/// in the unquoted charset, so it forces quoting too.
fn needs_quotes(text: &str) -> bool {
    text.is_empty()
        || text.starts_with("//")
        || !text.bytes().all(is_unquoted_byte)
        || !matches!(classify(text.as_bytes()), Token::UnquotedString(_))
}

impl Writer {
    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
    }

    fn write_value(&mut self, value: &Value) {
        match value {
            Value::String(text) => self.write_string(text),
            Value::Integer(i) => {
                let _ = write!(self.out, "{i}");
            }
            Value::Real(r) => self.write_real(*r),
            Value::Boolean(true) => self.out.push_str("YES"),
            Value::Boolean(false) => self.out.push_str("NO"),
            Value::Data(bytes) => {
                self.out.push('<');
                for byte in bytes {
                    let _ = write!(self.out, "{byte:02x}");
                }
                self.out.push('>');
            }
            Value::Date(date) => {
                let _ = write!(self.out, "<*D{}>", date.format(GNUSTEP_DATE_FORMAT));
            }
            Value::Array(items) => self.write_array(items),
            Value::Dictionary(dict) => self.write_dictionary(dict),
        }
    }

    fn write_string(&mut self, text: &str) {
        if !needs_quotes(text) {
            self.out.push_str(text);
            return;
        }
        self.out.push('"');
        for ch in text.chars() {
            match ch {
                '"' => self.out.push_str("\\\""),
                '\\' => self.out.push_str("\\\\"),
                '\n' => self.out.push_str("\\n"),
                '\t' => self.out.push_str("\\t"),
                '\r' => self.out.push_str("\\r"),
                _ if (ch as u32) < 0x20 || ch == '\u{7f}' => {
                    let _ = write!(self.out, "\\x{:02x}", ch as u32);
                }
                _ => self.out.push(ch),
            }
        }
        self.out.push('"');
    }

    fn write_real(&mut self, value: f64) {
        if value.is_finite() {
            if value.fract() == 0.0 {
                let _ = write!(self.out, "{value:.1}");
            } else {
                // Display keeps a '.' for every non-integral finite value,
                // so the literal reads back as a Real.
                let _ = write!(self.out, "{value}");
            }
        } else if self.style == Style::GnuStep {
            let payload = if value.is_nan() {
                "nan"
            } else if value > 0.0 {
                "inf"
            } else {
                "-inf"
            };
            let _ = write!(self.out, "<*R{payload}>");
        } else if value.is_nan() {
            self.out.push_str("nan");
        } else if value > 0.0 {
            self.out.push_str("1e999");
        } else {
            self.out.push_str("-1e999");
        }
    }

    fn write_array(&mut self, items: &[Value]) {
        if items.is_empty() {
            self.out.push_str("()");
            return;
        }
        self.out.push_str("(\n");
        self.depth += 1;
        for (index, item) in items.iter().enumerate() {
            self.indent();
            self.write_value(item);
            if index + 1 < items.len() {
                self.out.push(',');
            }
            self.out.push('\n');
        }
        self.depth -= 1;
        self.indent();
        self.out.push(')');
    }

    fn write_dictionary(&mut self, dict: &Dictionary) {
        if dict.is_empty() {
            self.out.push_str("{}");
            return;
        }
        self.out.push_str("{\n");
        self.depth += 1;
        for (key, value) in dict.iter() {
            self.indent();
            self.write_string(key);
            self.out.push_str(" = ");
            self.write_value(value);
            self.out.push_str(";\n");
        }
        self.depth -= 1;
        self.indent();
        self.out.push('}');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{from_str, plist};

    #[test]
    fn test_scalar_rendering() {
        assert_eq!(to_string(&Value::Integer(42)), "42");
        assert_eq!(to_string(&Value::Real(2.5)), "2.5");
        assert_eq!(to_string(&Value::Real(3.0)), "3.0");
        assert_eq!(to_string(&Value::Boolean(true)), "YES");
        assert_eq!(to_string(&Value::Boolean(false)), "NO");
        assert_eq!(to_string(&Value::Data(b"AB".to_vec())), "<4142>");
    }

    #[test]
    fn test_string_quoting_decisions() {
        assert_eq!(to_string(&Value::from("hello")), "hello");
        assert_eq!(to_string(&Value::from("/usr/bin")), "/usr/bin");
        assert_eq!(to_string(&Value::from("two words")), "\"two words\"");
        assert_eq!(to_string(&Value::from("")), "\"\"");
        // Words and digit runs that would lex as something else get quoted.
        assert_eq!(to_string(&Value::from("YES")), "\"YES\"");
        assert_eq!(to_string(&Value::from("42")), "\"42\"");
        assert_eq!(to_string(&Value::from("0x10")), "\"0x10\"");
        assert_eq!(to_string(&Value::from("a\nb")), "\"a\\nb\"");
        assert_eq!(to_string(&Value::from("say \"hi\"")), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn test_comment_lookalike_strings_are_quoted() {
        assert_eq!(to_string(&Value::from("//")), "\"//\"");
        assert_eq!(to_string(&Value::from("//x")), "\"//x\"");
        // An interior slash pair lexes as part of the same word.
        assert_eq!(to_string(&Value::from("a//b")), "a//b");

        assert_eq!(from_str(&to_string(&Value::from("//"))).unwrap(), Value::from("//"));
        let tree = plist!({ "//key" = "//value"; });
        assert_eq!(from_str(&to_string(&tree)).unwrap(), tree);
    }

    #[test]
    fn test_containers_render_and_reparse() {
        let tree = plist!({
            "name" = "Alice";
            "tags" = ("a b", 2);
            "empty" = ();
        });
        let text = to_string(&tree);
        assert_eq!(from_str(&text).unwrap(), tree);
    }

    #[test]
    fn test_dictionary_key_order_is_preserved() {
        let tree = plist!({
            "zebra" = 1;
            "apple" = 2;
        });
        let text = to_string(&tree);
        assert!(text.find("zebra").unwrap() < text.find("apple").unwrap());
    }

    #[test]
    fn test_integral_real_stays_real() {
        let text = to_string(&Value::Real(3.0));
        assert_eq!(from_str(&text).unwrap(), Value::Real(3.0));
    }

    #[test]
    fn test_infinity_round_trips() {
        let text = to_string(&Value::Real(f64::INFINITY));
        assert_eq!(from_str(&text).unwrap(), Value::Real(f64::INFINITY));
        let text = to_string(&Value::Real(f64::NEG_INFINITY));
        assert_eq!(from_str(&text).unwrap(), Value::Real(f64::NEG_INFINITY));
    }

    #[test]
    fn test_gnustep_nonfinite_literals() {
        assert_eq!(
            to_string_with_style(&Value::Real(f64::INFINITY), Style::GnuStep),
            "<*Rinf>"
        );
        assert_eq!(
            to_string_with_style(&Value::Real(f64::NAN), Style::GnuStep),
            "<*Rnan>"
        );
    }
}
