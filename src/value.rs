//! The document tree node type.
//!
//! This module provides the [`JsonValue`] enum, a node in the parsed or
//! directly constructed document tree. The variant set is closed: null,
//! boolean, four numeric widths, a single-character literal, string, array,
//! and object.
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use jsonette::JsonValue;
//!
//! // From primitives
//! let null = JsonValue::Null;
//! let boolean = JsonValue::from(true);
//! let number = JsonValue::from(42);
//! let text = JsonValue::from("hello");
//!
//! // Using the json! macro
//! use jsonette::json;
//! let obj = json!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! ```
//!
//! ### Type Narrowing
//!
//! Every accessor is absent-safe: a type mismatch yields `None`, never a
//! panic or an error. The caller decides whether to unwrap.
//!
//! ```rust
//! use jsonette::JsonValue;
//!
//! let value = JsonValue::from(42);
//! assert_eq!(value.as_int(), Some(42));
//! assert_eq!(value.as_str(), None);
//! ```

use crate::{JsonArray, JsonMap, RenderOptions, Renderer};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A node in the document tree.
///
/// `Null` is a unit variant and therefore the one process-wide null value;
/// it represents "key present with null value", which [`JsonMap`] keeps
/// distinct from key absence.
///
/// # Examples
///
/// ```rust
/// use jsonette::JsonValue;
///
/// let null = JsonValue::Null;
/// let num = JsonValue::Int(42);
/// let text = JsonValue::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_int());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum JsonValue {
    #[default]
    Null,
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Char(char),
    String(String),
    Array(JsonArray),
    Object(JsonMap),
}

impl JsonValue {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    /// Returns `true` if the value is a 32-bit integer.
    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, JsonValue::Int(_))
    }

    /// Returns `true` if the value is a 64-bit integer.
    #[inline]
    #[must_use]
    pub const fn is_long(&self) -> bool {
        matches!(self, JsonValue::Long(_))
    }

    /// Returns `true` if the value is a 32-bit float.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, JsonValue::Float(_))
    }

    /// Returns `true` if the value is a 64-bit float.
    #[inline]
    #[must_use]
    pub const fn is_double(&self) -> bool {
        matches!(self, JsonValue::Double(_))
    }

    /// Returns `true` if the value is a character literal.
    #[inline]
    #[must_use]
    pub const fn is_char(&self) -> bool {
        matches!(self, JsonValue::Char(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a 32-bit integer, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonette::JsonValue;
    ///
    /// assert_eq!(JsonValue::Int(42).as_int(), Some(42));
    /// assert_eq!(JsonValue::Long(42).as_int(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_int(&self) -> Option<i32> {
        match self {
            JsonValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// If the value is a 64-bit integer, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_long(&self) -> Option<i64> {
        match self {
            JsonValue::Long(n) => Some(*n),
            _ => None,
        }
    }

    /// If the value is a 32-bit float, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_float(&self) -> Option<f32> {
        match self {
            JsonValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// If the value is a 64-bit float, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_double(&self) -> Option<f64> {
        match self {
            JsonValue::Double(f) => Some(*f),
            _ => None,
        }
    }

    /// If the value is a character literal, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        match self {
            JsonValue::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&JsonArray> {
        match self {
            JsonValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an array, returns a mutable reference to it.
    #[inline]
    pub fn as_array_mut(&mut self) -> Option<&mut JsonArray> {
        match self {
            JsonValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&JsonMap> {
        match self {
            JsonValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// If the value is an object, returns a mutable reference to it.
    #[inline]
    pub fn as_object_mut(&mut self) -> Option<&mut JsonMap> {
        match self {
            JsonValue::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

/// Renders the compact text form.
impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Renderer::new(RenderOptions::default()).render(self))
    }
}

// From implementations for creating JsonValue from primitives
impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<i32> for JsonValue {
    fn from(value: i32) -> Self {
        JsonValue::Int(value)
    }
}

impl From<i64> for JsonValue {
    fn from(value: i64) -> Self {
        JsonValue::Long(value)
    }
}

impl From<f32> for JsonValue {
    fn from(value: f32) -> Self {
        JsonValue::Float(value)
    }
}

impl From<f64> for JsonValue {
    fn from(value: f64) -> Self {
        JsonValue::Double(value)
    }
}

impl From<char> for JsonValue {
    fn from(value: char) -> Self {
        JsonValue::Char(value)
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_string())
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(value: Vec<JsonValue>) -> Self {
        JsonValue::Array(value.into())
    }
}

impl From<JsonArray> for JsonValue {
    fn from(value: JsonArray) -> Self {
        JsonValue::Array(value)
    }
}

impl From<JsonMap> for JsonValue {
    fn from(value: JsonMap) -> Self {
        JsonValue::Object(value)
    }
}

// TryFrom implementations for extracting primitives from JsonValue
impl TryFrom<JsonValue> for i64 {
    type Error = crate::Error;

    fn try_from(value: JsonValue) -> crate::Result<Self> {
        match value {
            JsonValue::Int(n) => Ok(i64::from(n)),
            JsonValue::Long(n) => Ok(n),
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<JsonValue> for f64 {
    type Error = crate::Error;

    fn try_from(value: JsonValue) -> crate::Result<Self> {
        match value {
            JsonValue::Int(n) => Ok(f64::from(n)),
            JsonValue::Long(n) => Ok(n as f64),
            JsonValue::Float(f) => Ok(f64::from(f)),
            JsonValue::Double(f) => Ok(f),
            _ => Err(crate::Error::custom(format!(
                "expected number, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<JsonValue> for bool {
    type Error = crate::Error;

    fn try_from(value: JsonValue) -> crate::Result<Self> {
        match value {
            JsonValue::Bool(b) => Ok(b),
            _ => Err(crate::Error::custom(format!("expected bool, found {:?}", value))),
        }
    }
}

impl TryFrom<JsonValue> for char {
    type Error = crate::Error;

    fn try_from(value: JsonValue) -> crate::Result<Self> {
        match value {
            JsonValue::Char(c) => Ok(c),
            _ => Err(crate::Error::custom(format!("expected char, found {:?}", value))),
        }
    }
}

impl TryFrom<JsonValue> for String {
    type Error = crate::Error;

    fn try_from(value: JsonValue) -> crate::Result<Self> {
        match value {
            JsonValue::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {:?}",
                value
            ))),
        }
    }
}

impl Serialize for JsonValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            JsonValue::Null => serializer.serialize_unit(),
            JsonValue::Bool(b) => serializer.serialize_bool(*b),
            JsonValue::Int(n) => serializer.serialize_i32(*n),
            JsonValue::Long(n) => serializer.serialize_i64(*n),
            JsonValue::Float(f) => serializer.serialize_f32(*f),
            JsonValue::Double(f) => serializer.serialize_f64(*f),
            JsonValue::Char(c) => serializer.serialize_char(*c),
            JsonValue::String(s) => serializer.serialize_str(s),
            JsonValue::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr.iter() {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            JsonValue::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for JsonValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct JsonValueVisitor;

        impl<'de> Visitor<'de> for JsonValueVisitor {
            type Value = JsonValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any document value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(JsonValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(match i32::try_from(value) {
                    Ok(n) => JsonValue::Int(n),
                    Err(_) => JsonValue::Long(value),
                })
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    match i32::try_from(value as i64) {
                        Ok(n) => Ok(JsonValue::Int(n)),
                        Err(_) => Ok(JsonValue::Long(value as i64)),
                    }
                } else {
                    Ok(JsonValue::Double(value as f64))
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(JsonValue::Double(value))
            }

            fn visit_char<E>(self, value: char) -> Result<Self::Value, E> {
                Ok(JsonValue::Char(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(JsonValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(JsonValue::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(JsonValue::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(JsonValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut array = JsonArray::new();
                while let Some(elem) = seq.next_element()? {
                    array.push(elem);
                }
                Ok(JsonValue::Array(array))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = JsonMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(JsonValue::Object(values))
            }
        }

        deserializer.deserialize_any(JsonValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primitives() {
        assert_eq!(JsonValue::from(true), JsonValue::Bool(true));
        assert_eq!(JsonValue::from(42i32), JsonValue::Int(42));
        assert_eq!(JsonValue::from(42i64), JsonValue::Long(42));
        assert_eq!(JsonValue::from(1.5f32), JsonValue::Float(1.5));
        assert_eq!(JsonValue::from(1.5f64), JsonValue::Double(1.5));
        assert_eq!(JsonValue::from('x'), JsonValue::Char('x'));
        assert_eq!(JsonValue::from("test"), JsonValue::String("test".into()));
    }

    #[test]
    fn test_from_collections() {
        let vec = vec![JsonValue::from(1), JsonValue::from(2)];
        let value = JsonValue::from(vec.clone());
        assert_eq!(value.as_array().map(JsonArray::len), Some(2));

        let mut map = JsonMap::new();
        map.insert("key".to_string(), JsonValue::from(42));
        let value = JsonValue::from(map.clone());
        assert_eq!(value, JsonValue::Object(map));
    }

    #[test]
    fn test_narrowing_never_errors_on_mismatch() {
        let value = JsonValue::from("text");
        assert_eq!(value.as_int(), None);
        assert_eq!(value.as_bool(), None);
        assert_eq!(value.as_array(), None);
        assert_eq!(value.as_str(), Some("text"));
    }

    #[test]
    fn test_numeric_variants_are_distinct() {
        assert!(JsonValue::Int(1).is_int());
        assert!(!JsonValue::Int(1).is_long());
        assert_eq!(JsonValue::Long(1).as_int(), None);
        assert_eq!(JsonValue::Float(1.0).as_double(), None);
    }

    #[test]
    fn test_tryfrom_i64() {
        assert_eq!(i64::try_from(JsonValue::Int(7)).unwrap(), 7);
        assert_eq!(i64::try_from(JsonValue::Long(7)).unwrap(), 7);
        assert!(i64::try_from(JsonValue::from("7")).is_err());
    }

    #[test]
    fn test_tryfrom_f64() {
        assert_eq!(f64::try_from(JsonValue::Double(1.5)).unwrap(), 1.5);
        assert_eq!(f64::try_from(JsonValue::Int(2)).unwrap(), 2.0);
        assert!(f64::try_from(JsonValue::Null).is_err());
    }

    #[test]
    fn test_display_is_compact() {
        let value = JsonValue::from(vec![JsonValue::from(1), JsonValue::Null]);
        assert_eq!(value.to_string(), "[1,null]");
    }

    #[test]
    fn test_const_is_methods() {
        const fn check_null(v: &JsonValue) -> bool {
            v.is_null()
        }

        assert!(check_null(&JsonValue::Null));
    }
}
