//! Ordered map type for objects.
//!
//! This module provides [`JsonMap`], a wrapper around [`IndexMap`] that keeps
//! object entries in insertion order. Order is observable: iteration and
//! rendering walk entries in the order they were inserted, and a parse of a
//! rendered object reproduces that order.
//!
//! A key holding [`JsonValue::Null`](crate::JsonValue::Null) is distinct from
//! an absent key; [`JsonMap::get`] returns `Some(&JsonValue::Null)` for the
//! former and `None` for the latter.
//!
//! ## Set algebra
//!
//! [`union`](JsonMap::union) and [`difference`](JsonMap::difference) are pure
//! and allocate a new map; the in-place counterparts are the explicitly named
//! [`extend_from`](JsonMap::extend_from) and
//! [`subtract_keys_of`](JsonMap::subtract_keys_of). On a key collision the
//! later entry wins while the key keeps its original position.
//!
//! ## Examples
//!
//! ```rust
//! use jsonette::{JsonMap, JsonValue};
//!
//! let mut map = JsonMap::new();
//! map.insert("name".to_string(), JsonValue::from("Alice"));
//! map.insert("age".to_string(), JsonValue::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::JsonValue;
use indexmap::IndexMap;

/// An insertion-ordered map of string keys to [`JsonValue`]s.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsonMap(IndexMap<String, JsonValue>);

impl JsonMap {
    /// Creates an empty `JsonMap`.
    #[must_use]
    pub fn new() -> Self {
        JsonMap(IndexMap::new())
    }

    /// Creates an empty `JsonMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        JsonMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the key already exists its value is replaced in place and the key
    /// keeps its position; the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonette::{JsonMap, JsonValue};
    ///
    /// let mut map = JsonMap::new();
    /// assert!(map.insert("key".to_string(), JsonValue::from(1)).is_none());
    /// assert!(map.insert("key".to_string(), JsonValue::from(2)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: JsonValue) -> Option<JsonValue> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut JsonValue> {
        self.0.get_mut(key)
    }

    /// Keyed lookup falling back to a caller-supplied default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonette::{JsonMap, JsonValue};
    ///
    /// let map = JsonMap::new();
    /// let fallback = JsonValue::from(0);
    /// assert_eq!(map.get_or("missing", &fallback), &fallback);
    /// ```
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a JsonValue) -> &'a JsonValue {
        self.0.get(key).unwrap_or(default)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key from the map, preserving the order of the remaining
    /// entries, and returns its value if it was present.
    pub fn shift_remove(&mut self, key: &str) -> Option<JsonValue> {
        self.0.shift_remove(key)
    }

    /// Removes every key in the collection from the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonette::{JsonMap, JsonValue};
    ///
    /// let mut map = JsonMap::new();
    /// map.insert("a".to_string(), JsonValue::from(1));
    /// map.insert("b".to_string(), JsonValue::from(2));
    /// map.remove_keys(["a", "missing"]);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn remove_keys<'a, I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for key in keys {
            self.0.shift_remove(key);
        }
    }

    /// Removes every key present in `other` from this map.
    pub fn subtract_keys_of(&mut self, other: &JsonMap) {
        for key in other.keys() {
            self.0.shift_remove(key.as_str());
        }
    }

    /// Copies every entry of `other` into this map. Colliding keys take the
    /// value from `other` and keep their original position.
    pub fn extend_from(&mut self, other: &JsonMap) {
        for (key, value) in other.iter() {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Returns a new map with the entries of both maps combined.
    ///
    /// Neither operand is modified. On a key collision the entry from `other`
    /// wins, at the position the key already held in `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonette::{JsonMap, JsonValue};
    ///
    /// let mut a = JsonMap::new();
    /// a.insert("x".to_string(), JsonValue::from(1));
    /// let mut b = JsonMap::new();
    /// b.insert("x".to_string(), JsonValue::from(2));
    /// b.insert("y".to_string(), JsonValue::from(3));
    ///
    /// let merged = a.union(&b);
    /// assert_eq!(merged.get("x"), Some(&JsonValue::from(2)));
    /// assert_eq!(merged.len(), 2);
    /// assert_eq!(a.len(), 1);
    /// ```
    #[must_use]
    pub fn union(&self, other: &JsonMap) -> JsonMap {
        let mut merged = self.clone();
        merged.extend_from(other);
        merged
    }

    /// Returns a new map holding the entries of `self` whose keys do not
    /// appear in `other`. Neither operand is modified.
    #[must_use]
    pub fn difference(&self, other: &JsonMap) -> JsonMap {
        let mut remaining = self.clone();
        remaining.subtract_keys_of(other);
        remaining
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, JsonValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, JsonValue> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, JsonValue> {
        self.0.iter()
    }
}

impl IntoIterator for JsonMap {
    type Item = (String, JsonValue);
    type IntoIter = indexmap::map::IntoIter<String, JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a JsonMap {
    type Item = (&'a String, &'a JsonValue);
    type IntoIter = indexmap::map::Iter<'a, String, JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, JsonValue)> for JsonMap {
    fn from_iter<T: IntoIterator<Item = (String, JsonValue)>>(iter: T) -> Self {
        JsonMap(IndexMap::from_iter(iter))
    }
}

impl From<Vec<(String, JsonValue)>> for JsonMap {
    fn from(entries: Vec<(String, JsonValue)>) -> Self {
        entries.into_iter().collect()
    }
}
