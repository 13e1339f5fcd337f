//! Ordered sequence type for arrays.
//!
//! [`JsonArray`] wraps a `Vec<JsonValue>` and mirrors the container surface
//! of [`JsonMap`](crate::JsonMap): index-ordered iteration, lookup with a
//! caller default, and set algebra split into pure operations
//! ([`concat`](JsonArray::concat), [`difference`](JsonArray::difference)) and
//! explicitly named in-place mutation ([`extend_from`](JsonArray::extend_from),
//! [`subtract_items_of`](JsonArray::subtract_items_of)).
//!
//! The representation is dense: `len` always equals the element count and
//! order is preserved across parse/render round trips.

use crate::JsonValue;
use std::ops::Index;

/// An ordered, index-addressable sequence of [`JsonValue`]s.
///
/// # Examples
///
/// ```rust
/// use jsonette::{JsonArray, JsonValue};
///
/// let mut array = JsonArray::new();
/// array.push(JsonValue::from(1));
/// array.push(JsonValue::from("two"));
///
/// assert_eq!(array.len(), 2);
/// assert_eq!(array.get(1).and_then(|v| v.as_str()), Some("two"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsonArray(Vec<JsonValue>);

impl JsonArray {
    /// Creates an empty `JsonArray`.
    #[must_use]
    pub fn new() -> Self {
        JsonArray(Vec::new())
    }

    /// Creates an empty `JsonArray` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        JsonArray(Vec::with_capacity(capacity))
    }

    /// Appends a value to the end of the array.
    pub fn push(&mut self, value: JsonValue) {
        self.0.push(value);
    }

    /// Appends a clone of every element of `other`.
    pub fn extend_from(&mut self, other: &JsonArray) {
        self.0.extend_from_slice(&other.0);
    }

    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&JsonValue> {
        self.0.get(index)
    }

    /// Returns a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut JsonValue> {
        self.0.get_mut(index)
    }

    /// Indexed lookup falling back to a caller-supplied default.
    #[must_use]
    pub fn get_or<'a>(&'a self, index: usize, default: &'a JsonValue) -> &'a JsonValue {
        self.0.get(index).unwrap_or(default)
    }

    /// Returns the first element, or `None` if the array is empty.
    #[must_use]
    pub fn first(&self) -> Option<&JsonValue> {
        self.0.first()
    }

    /// Returns the last element, or `None` if the array is empty.
    #[must_use]
    pub fn last(&self) -> Option<&JsonValue> {
        self.0.last()
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// left. Returns `None` if out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<JsonValue> {
        if index < self.0.len() {
            Some(self.0.remove(index))
        } else {
            None
        }
    }

    /// Removes the first element equal to `value`, returning it if found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonette::{JsonArray, JsonValue};
    ///
    /// let mut array: JsonArray = vec![JsonValue::from(1), JsonValue::from(2)].into();
    /// assert_eq!(array.remove_item(&JsonValue::from(2)), Some(JsonValue::from(2)));
    /// assert_eq!(array.remove_item(&JsonValue::from(9)), None);
    /// ```
    pub fn remove_item(&mut self, value: &JsonValue) -> Option<JsonValue> {
        let index = self.0.iter().position(|v| v == value)?;
        Some(self.0.remove(index))
    }

    /// Removes every element equal to any element of `other`.
    pub fn subtract_items_of(&mut self, other: &JsonArray) {
        self.0.retain(|v| !other.contains(v));
    }

    /// Returns `true` if the array contains an element equal to `value`.
    #[must_use]
    pub fn contains(&self, value: &JsonValue) -> bool {
        self.0.contains(value)
    }

    /// Returns a new array with the elements of `self` followed by the
    /// elements of `other`. Neither operand is modified.
    #[must_use]
    pub fn concat(&self, other: &JsonArray) -> JsonArray {
        let mut joined = self.clone();
        joined.extend_from(other);
        joined
    }

    /// Returns a new array holding the elements of `self` not present in
    /// `other`. Neither operand is modified.
    #[must_use]
    pub fn difference(&self, other: &JsonArray) -> JsonArray {
        let mut remaining = self.clone();
        remaining.subtract_items_of(other);
        remaining
    }

    /// Returns the number of elements in the array.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the array contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the elements, in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, JsonValue> {
        self.0.iter()
    }

    /// Returns a mutable iterator over the elements, in index order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, JsonValue> {
        self.0.iter_mut()
    }
}

impl Index<usize> for JsonArray {
    type Output = JsonValue;

    fn index(&self, index: usize) -> &JsonValue {
        &self.0[index]
    }
}

impl IntoIterator for JsonArray {
    type Item = JsonValue;
    type IntoIter = std::vec::IntoIter<JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a JsonArray {
    type Item = &'a JsonValue;
    type IntoIter = std::slice::Iter<'a, JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<JsonValue> for JsonArray {
    fn from_iter<T: IntoIterator<Item = JsonValue>>(iter: T) -> Self {
        JsonArray(Vec::from_iter(iter))
    }
}

impl From<Vec<JsonValue>> for JsonArray {
    fn from(elements: Vec<JsonValue>) -> Self {
        JsonArray(elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> JsonArray {
        vec![
            JsonValue::from(1),
            JsonValue::from(2),
            JsonValue::from(2),
            JsonValue::from(3),
        ]
        .into()
    }

    #[test]
    fn push_and_index() {
        let mut array = JsonArray::new();
        array.push(JsonValue::from("a"));
        array.push(JsonValue::from("b"));
        assert_eq!(array[1], JsonValue::from("b"));
        assert_eq!(array.get(5), None);
    }

    #[test]
    fn remove_item_takes_first_occurrence_only() {
        let mut array = sample();
        array.remove_item(&JsonValue::from(2));
        assert_eq!(array.len(), 3);
        assert_eq!(array[1], JsonValue::from(2));
    }

    #[test]
    fn subtract_items_removes_every_occurrence() {
        let mut array = sample();
        array.subtract_items_of(&vec![JsonValue::from(2)].into());
        assert_eq!(array.len(), 2);
        assert!(!array.contains(&JsonValue::from(2)));
    }

    #[test]
    fn concat_and_difference_are_pure() {
        let a = sample();
        let b: JsonArray = vec![JsonValue::from(3), JsonValue::from(4)].into();

        let joined = a.concat(&b);
        assert_eq!(joined.len(), 6);
        assert_eq!(a.len(), 4);

        let remaining = a.difference(&b);
        assert_eq!(remaining.len(), 3);
        assert!(!remaining.contains(&JsonValue::from(3)));
        assert_eq!(a.len(), 4);
    }
}
