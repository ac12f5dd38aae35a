//! Ordered map type for plist dictionaries.
//!
//! This module provides [`Dictionary`], a wrapper around [`IndexMap`] that
//! maintains insertion order for dictionary entries. ASCII plists are
//! written and diffed by humans, so a parse/write cycle must keep keys in
//! source order.
//!
//! ## Why IndexMap?
//!
//! `Dictionary` uses `IndexMap` instead of `HashMap` to ensure:
//!
//! - **Source order**: keys iterate in the order they appeared in the input
//! - **Deterministic output**: the writer emits entries in a stable order
//! - **O(1) lookup**: `get` stays average constant time
//!
//! Replacing the value for an existing key keeps the key at its original
//! position, so duplicate keys in the input overwrite in place. Equality
//! between dictionaries ignores insertion order: both sides must hold the
//! same keys with equal values.
//!
//! ## Examples
//!
//! ```rust
//! use ascii_plist::{Dictionary, Value};
//!
//! let mut dict = Dictionary::new();
//! dict.insert("name".to_string(), Value::from("Alice"));
//! dict.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(dict.len(), 2);
//! assert_eq!(dict.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map from string keys to plist values.
///
/// # Examples
///
/// ```rust
/// use ascii_plist::{Dictionary, Value};
///
/// let mut dict = Dictionary::new();
/// dict.insert("first".to_string(), Value::from(1));
/// dict.insert("second".to_string(), Value::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = dict.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dictionary(IndexMap<String, crate::Value>);

impl Dictionary {
    /// Creates an empty `Dictionary`.
    #[must_use]
    pub fn new() -> Self {
        Dictionary(IndexMap::new())
    }

    /// Creates an empty `Dictionary` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Dictionary(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the dictionary.
    ///
    /// If the key is already present its value is replaced and the old
    /// value returned; the key keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ascii_plist::{Dictionary, Value};
    ///
    /// let mut dict = Dictionary::new();
    /// assert!(dict.insert("key".to_string(), Value::from(1)).is_none());
    /// assert!(dict.insert("key".to_string(), Value::from(2)).is_some());
    /// assert_eq!(dict.get("key").and_then(|v| v.as_integer()), Some(2));
    /// ```
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut crate::Value> {
        self.0.get_mut(key)
    }

    /// Returns `true` if the dictionary contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<crate::Value> {
        self.0.shift_remove(key)
    }

    /// Returns the number of entries in the dictionary.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the dictionary contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }
}

impl From<HashMap<String, crate::Value>> for Dictionary {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        Dictionary(map.into_iter().collect())
    }
}

impl From<Dictionary> for HashMap<String, crate::Value> {
    fn from(dict: Dictionary) -> Self {
        dict.0.into_iter().collect()
    }
}

impl IntoIterator for Dictionary {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = (&'a String, &'a crate::Value);
    type IntoIter = indexmap::map::Iter<'a, String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::Value)> for Dictionary {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        Dictionary(IndexMap::from_iter(iter))
    }
}
