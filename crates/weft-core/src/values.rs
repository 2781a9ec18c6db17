//! Compound attribute values.
//!
//! - [`DelimitedBuilder`]: an ordered set of tokens joined by one delimiter
//!   (`class="a b c"`, `points="0,0 10,10"`)
//! - [`KeyValueBuilder`]: ordered `key<pair>value` entries joined by an entry
//!   delimiter (`style="color:red;size:1px"`)
//!
//! Both render without a trailing delimiter.

use crate::ordered_map::OrderedMap;
use std::borrow::{Borrow, Cow};
use std::fmt::{self, Display, Write};
use std::hash::Hash;

/// An insertion-ordered set of values rendered joined by a delimiter.
///
/// Adding a value that is already present keeps its original position.
///
/// ## Example
///
/// ```
/// use weft_core::DelimitedBuilder;
///
/// let mut classes = DelimitedBuilder::space_separated();
/// classes.add(["btn", "btn-primary", "btn"]);
/// assert_eq!(classes.to_string(), "btn btn-primary");
///
/// classes.remove(["btn"]);
/// assert_eq!(classes.to_string(), "btn-primary");
/// ```
#[derive(Debug, Clone)]
pub struct DelimitedBuilder<T> {
	delimiter: Cow<'static, str>,
	values: OrderedMap<T, ()>,
}

impl<T: Hash + Eq> DelimitedBuilder<T> {
	/// Creates an empty set joined by `delimiter`.
	pub fn new(delimiter: impl Into<Cow<'static, str>>) -> Self {
		Self {
			delimiter: delimiter.into(),
			values: OrderedMap::new(),
		}
	}

	/// Creates an empty set joined by a single space.
	pub fn space_separated() -> Self {
		Self::new(" ")
	}

	/// Creates an empty set joined by a comma.
	pub fn comma_separated() -> Self {
		Self::new(",")
	}

	/// Adds values in order. Values already present are left in place.
	pub fn add(&mut self, values: impl IntoIterator<Item = T>) -> &mut Self {
		for value in values {
			self.values.set(value, ());
		}
		self
	}

	/// Removes every value equal to one of `values`.
	pub fn remove<Q>(&mut self, values: impl IntoIterator<Item = Q>) -> &mut Self
	where
		T: Borrow<Q>,
		Q: Hash + Eq,
	{
		for value in values {
			self.values.delete(&value);
		}
		self
	}

	/// Returns `true` if `value` is present.
	pub fn contains<Q>(&self, value: &Q) -> bool
	where
		T: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.values.contains_key(value)
	}

	/// Number of values.
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Returns `true` if the set is empty.
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// The delimiter placed between values.
	pub fn delimiter(&self) -> &str {
		&self.delimiter
	}

	/// Iterates over values in order.
	pub fn iter(&self) -> impl Iterator<Item = &T> {
		self.values.keys()
	}
}

impl<T: Hash + Eq + Display> DelimitedBuilder<T> {
	/// Writes the values joined by the delimiter.
	pub fn render(&self, out: &mut dyn Write) -> fmt::Result {
		for (i, value) in self.values.keys().enumerate() {
			if i > 0 {
				out.write_str(&self.delimiter)?;
			}
			write!(out, "{value}")?;
		}
		Ok(())
	}
}

impl<T: Hash + Eq + Display> Display for DelimitedBuilder<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.render(f)
	}
}

/// Ordered key/value pairs rendered as `key<pair>value<entry>key<pair>value`.
///
/// ## Example
///
/// ```
/// use weft_core::KeyValueBuilder;
///
/// let mut style = KeyValueBuilder::style();
/// style.add("color", "red").add("size", "1px");
/// assert_eq!(style.to_string(), "color:red;size:1px");
///
/// style.remove("color");
/// assert_eq!(style.to_string(), "size:1px");
/// ```
#[derive(Debug, Clone)]
pub struct KeyValueBuilder {
	pair_delimiter: Cow<'static, str>,
	entry_delimiter: Cow<'static, str>,
	entries: OrderedMap<String, String>,
}

impl KeyValueBuilder {
	/// Creates an empty builder.
	pub fn new(
		pair_delimiter: impl Into<Cow<'static, str>>,
		entry_delimiter: impl Into<Cow<'static, str>>,
	) -> Self {
		Self {
			pair_delimiter: pair_delimiter.into(),
			entry_delimiter: entry_delimiter.into(),
			entries: OrderedMap::new(),
		}
	}

	/// Creates a builder for inline CSS declarations (`:` and `;`).
	pub fn style() -> Self {
		Self::new(":", ";")
	}

	/// Adds or overwrites `key`. An existing key keeps its position.
	pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
		self.entries.set(key.into(), value.into());
		self
	}

	/// Removes `key` if present.
	pub fn remove(&mut self, key: &str) -> &mut Self {
		self.entries.delete(key);
		self
	}

	/// Returns the value stored for `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.entries.get(key).map(String::as_str)
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if there are no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over entries in order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Writes the entries joined by the configured delimiters.
	pub fn render(&self, out: &mut dyn Write) -> fmt::Result {
		for (i, (key, value)) in self.entries.iter().enumerate() {
			if i > 0 {
				out.write_str(&self.entry_delimiter)?;
			}
			out.write_str(key)?;
			out.write_str(&self.pair_delimiter)?;
			out.write_str(value)?;
		}
		Ok(())
	}
}

impl Display for KeyValueBuilder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.render(f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(" ", "a b c")]
	#[case(",", "a,b,c")]
	#[case(", ", "a, b, c")]
	fn test_delimited_joins_without_trailing_delimiter(
		#[case] delimiter: &'static str,
		#[case] expected: &str,
	) {
		let mut list = DelimitedBuilder::new(delimiter);
		list.add(["a", "b", "c"]);
		assert_eq!(list.to_string(), expected);
	}

	#[rstest]
	fn test_delimited_remove_middle_value() {
		let mut list = DelimitedBuilder::space_separated();
		list.add(["a", "b", "c"]);
		list.remove(["b"]);
		assert_eq!(list.to_string(), "a c");
	}

	#[rstest]
	fn test_delimited_duplicates_collapse_to_first_position() {
		let mut list = DelimitedBuilder::space_separated();
		list.add(["x", "y"]).add(["x", "z"]);
		assert_eq!(list.to_string(), "x y z");
		assert_eq!(list.len(), 3);
	}

	#[rstest]
	fn test_delimited_numbers() {
		let mut list = DelimitedBuilder::comma_separated();
		list.add([1, 2, 3, 2]);
		list.remove([1]);
		assert_eq!(list.to_string(), "2,3");
	}

	#[rstest]
	fn test_delimited_empty_renders_nothing() {
		let list: DelimitedBuilder<&str> = DelimitedBuilder::space_separated();
		assert!(list.is_empty());
		assert_eq!(list.to_string(), "");
	}

	#[rstest]
	fn test_delimited_remove_owned_by_borrowed_str() {
		let mut list: DelimitedBuilder<String> = DelimitedBuilder::space_separated();
		list.add(["a".to_string(), "b".to_string()]);
		assert!(list.contains("a"));
		list.remove(["a".to_string()]);
		assert!(!list.contains("a"));
	}

	#[rstest]
	fn test_key_value_round_trip() {
		let mut style = KeyValueBuilder::style();
		style.add("color", "red").add("size", "1px");
		assert_eq!(style.to_string(), "color:red;size:1px");

		style.remove("color");
		assert_eq!(style.to_string(), "size:1px");
	}

	#[rstest]
	fn test_key_value_overwrite_keeps_position() {
		let mut style = KeyValueBuilder::style();
		style.add("color", "red").add("margin", "0").add("color", "blue");
		assert_eq!(style.to_string(), "color:blue;margin:0");
		assert_eq!(style.get("color"), Some("blue"));
	}

	#[rstest]
	fn test_key_value_custom_delimiters() {
		let mut params = KeyValueBuilder::new("=", "&");
		params.add("a", "1").add("b", "2");
		assert_eq!(params.to_string(), "a=1&b=2");
	}

	#[rstest]
	fn test_key_value_remove_absent_key() {
		let mut style = KeyValueBuilder::style();
		style.add("color", "red");
		style.remove("missing");
		assert_eq!(style.len(), 1);
	}
}
