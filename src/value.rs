//! The plist object model.
//!
//! This module provides the [`Value`] enum representing any value an ASCII
//! property list can hold, plus the operations over it: variant tests and
//! accessors, deep copy, structural equality, best-effort coercion between
//! variants, and base64 helpers for the Data variant.
//!
//! ## Core Types
//!
//! - [`Value`]: a plist value (string, integer, real, boolean, data, date,
//!   array, dictionary)
//! - [`Kind`]: the variant tag, used for inspection and [`Value::coerce`]
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use ascii_plist::Value;
//!
//! let text = Value::from("hello");
//! let number = Value::from(42);
//! let flag = Value::from(true);
//!
//! // Using the plist! macro
//! use ascii_plist::plist;
//! let dict = plist!({
//!     "name" = "Alice";
//!     "age" = 30;
//! });
//! ```
//!
//! ### Type Checking and Extraction
//!
//! ```rust
//! use ascii_plist::Value;
//!
//! let value = Value::from(42);
//! assert!(value.is_integer());
//! assert_eq!(value.as_integer(), Some(42));
//! assert_eq!(value.as_str(), None);
//! ```
//!
//! ### Ownership
//!
//! Every container exclusively owns its children; dropping a root drops the
//! whole tree. The grammar admits no sharing and no cycles, so no reference
//! counting is involved anywhere in the model.

use crate::Dictionary;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed representation of any ASCII plist value.
///
/// Every value carries exactly one variant; there is no null. Equality is
/// structural: arrays compare element-wise in order, dictionaries compare
/// by key set regardless of insertion order.
///
/// # Examples
///
/// ```rust
/// use ascii_plist::{Kind, Value};
///
/// let num = Value::Integer(42);
/// let text = Value::String("hello".to_string());
///
/// assert_eq!(num.kind(), Kind::Integer);
/// assert_eq!(text.kind(), Kind::String);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Real(f64),
    Boolean(bool),
    Data(Vec<u8>),
    Date(DateTime<Utc>),
    Array(Vec<Value>),
    Dictionary(Dictionary),
}

/// The variant tag of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    String,
    Integer,
    Real,
    Boolean,
    Data,
    Date,
    Array,
    Dictionary,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::String => "string",
            Kind::Integer => "integer",
            Kind::Real => "real",
            Kind::Boolean => "boolean",
            Kind::Data => "data",
            Kind::Date => "date",
            Kind::Array => "array",
            Kind::Dictionary => "dictionary",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Returns the variant tag of this value.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Value::String(_) => Kind::String,
            Value::Integer(_) => Kind::Integer,
            Value::Real(_) => Kind::Real,
            Value::Boolean(_) => Kind::Boolean,
            Value::Data(_) => Kind::Data,
            Value::Date(_) => Kind::Date,
            Value::Array(_) => Kind::Array,
            Value::Dictionary(_) => Kind::Dictionary,
        }
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is an integer.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    /// Returns `true` if the value is a real.
    #[inline]
    #[must_use]
    pub const fn is_real(&self) -> bool {
        matches!(self, Value::Real(_))
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    /// Returns `true` if the value is a data blob.
    #[inline]
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(self, Value::Data(_))
    }

    /// Returns `true` if the value is a date.
    #[inline]
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, Value::Date(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is a dictionary.
    #[inline]
    #[must_use]
    pub const fn is_dictionary(&self) -> bool {
        matches!(self, Value::Dictionary(_))
    }

    /// If the value is a string, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ascii_plist::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// If the value is a real, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Real(r) => Some(*r),
            _ => None,
        }
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a data blob, returns its bytes. Otherwise `None`.
    #[inline]
    #[must_use]
    pub fn as_data(&self) -> Option<&[u8]> {
        match self {
            Value::Data(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// If the value is a date, returns a reference to it. Otherwise `None`.
    #[inline]
    #[must_use]
    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::Date(dt) => Some(dt),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// If the value is an array, returns a mutable reference to it.
    #[inline]
    #[must_use]
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// If the value is a dictionary, returns a reference to it. Otherwise `None`.
    #[inline]
    #[must_use]
    pub fn as_dictionary(&self) -> Option<&Dictionary> {
        match self {
            Value::Dictionary(dict) => Some(dict),
            _ => None,
        }
    }

    /// If the value is a dictionary, returns a mutable reference to it.
    #[inline]
    #[must_use]
    pub fn as_dictionary_mut(&mut self) -> Option<&mut Dictionary> {
        match self {
            Value::Dictionary(dict) => Some(dict),
            _ => None,
        }
    }

    /// Builds a Data value from a base64 string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ascii_plist::Value;
    ///
    /// let data = Value::data_from_base64("SGVsbG8=").unwrap();
    /// assert_eq!(data.as_data(), Some(&b"Hello"[..]));
    /// assert!(Value::data_from_base64("not base64!").is_none());
    /// ```
    #[must_use]
    pub fn data_from_base64(encoded: &str) -> Option<Value> {
        BASE64.decode(encoded).ok().map(Value::Data)
    }

    /// If the value is a data blob, returns its base64 encoding.
    #[must_use]
    pub fn as_base64(&self) -> Option<String> {
        self.as_data().map(|bytes| BASE64.encode(bytes))
    }

    /// Attempts to view this value as `kind`, converting where the variants
    /// are trivially compatible.
    ///
    /// Returns a clone when the value already has that kind, a converted
    /// copy where a lossless or conventional conversion exists, and `None`
    /// otherwise. Conversions:
    ///
    /// - Integer → Real; Real with no fractional part → Integer
    /// - Integer/Real/Boolean → String (textual form; booleans as `YES`/`NO`)
    /// - String → Integer / Real (if it parses), Boolean (`YES`/`true` /
    ///   `NO`/`false`), or Data (if it is valid base64)
    /// - Data → String (base64 encoding)
    /// - Integer 0/1 → Boolean
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ascii_plist::{Kind, Value};
    ///
    /// assert_eq!(Value::Integer(3).coerce(Kind::Real), Some(Value::Real(3.0)));
    /// assert_eq!(
    ///     Value::String("SGVsbG8=".to_string()).coerce(Kind::Data),
    ///     Some(Value::Data(b"Hello".to_vec()))
    /// );
    /// assert_eq!(Value::Boolean(true).coerce(Kind::Array), None);
    /// ```
    #[must_use]
    pub fn coerce(&self, kind: Kind) -> Option<Value> {
        if self.kind() == kind {
            return Some(self.clone());
        }
        match (self, kind) {
            (Value::Integer(i), Kind::Real) => Some(Value::Real(*i as f64)),
            (Value::Real(r), Kind::Integer) => {
                if r.fract() == 0.0 && *r >= i64::MIN as f64 && *r <= i64::MAX as f64 {
                    Some(Value::Integer(*r as i64))
                } else {
                    None
                }
            }
            (Value::Integer(i), Kind::String) => Some(Value::String(i.to_string())),
            (Value::Real(r), Kind::String) => Some(Value::String(r.to_string())),
            (Value::Boolean(b), Kind::String) => {
                Some(Value::String(if *b { "YES" } else { "NO" }.to_string()))
            }
            (Value::String(s), Kind::Integer) => s.parse::<i64>().ok().map(Value::Integer),
            (Value::String(s), Kind::Real) => s.parse::<f64>().ok().map(Value::Real),
            (Value::String(s), Kind::Boolean) => match s.as_str() {
                "YES" | "true" => Some(Value::Boolean(true)),
                "NO" | "false" => Some(Value::Boolean(false)),
                _ => None,
            },
            (Value::String(s), Kind::Data) => Value::data_from_base64(s),
            (Value::Data(_), Kind::String) => self.as_base64().map(Value::String),
            (Value::Integer(0), Kind::Boolean) => Some(Value::Boolean(false)),
            (Value::Integer(1), Kind::Boolean) => Some(Value::Boolean(true)),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    /// Formats the value as canonical ASCII plist text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::writer::to_string(self))
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Real(r) => serializer.serialize_f64(*r),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Data(bytes) => serializer.serialize_bytes(bytes),
            Value::Date(dt) => serializer.serialize_str(&dt.to_rfc3339()),
            Value::Array(items) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Dictionary(dict) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(dict.len()))?;
                for (key, value) in dict.iter() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any plist value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Boolean(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Integer(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(Value::Integer)
                    .map_err(|_| E::custom("integer out of range for plist"))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Real(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_bytes<E>(self, value: &[u8]) -> Result<Self::Value, E> {
                Ok(Value::Data(value.to_vec()))
            }

            fn visit_byte_buf<E>(self, value: Vec<u8>) -> Result<Self::Value, E> {
                Ok(Value::Data(value))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(Value::Array(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut dict = Dictionary::new();
                while let Some((key, value)) = map.next_entry()? {
                    dict.insert(key, value);
                }
                Ok(Value::Dictionary(dict))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

// TryFrom implementations for extracting payloads out of a Value
impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Integer(i) => Ok(i),
            other => Err(crate::Error::message(format!(
                "expected integer, found {}",
                other.kind()
            ))),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Real(r) => Ok(r),
            Value::Integer(i) => Ok(i as f64),
            other => Err(crate::Error::message(format!(
                "expected real, found {}",
                other.kind()
            ))),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Boolean(b) => Ok(b),
            other => Err(crate::Error::message(format!(
                "expected boolean, found {}",
                other.kind()
            ))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(crate::Error::message(format!(
                "expected string, found {}",
                other.kind()
            ))),
        }
    }
}

// From implementations for building a Value from primitives
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Real(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Real(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Data(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Date(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Dictionary> for Value {
    fn from(value: Dictionary) -> Self {
        Value::Dictionary(value)
    }
}
