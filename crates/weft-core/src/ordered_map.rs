//! Insertion-ordered map used for every attribute collection.
//!
//! Iteration order is the order in which keys were first inserted.
//! Overwriting a key updates its value in place; it never moves the key.
//! Attribute emission order depends on this, so the renderer relies on it
//! directly.

use indexmap::IndexMap;
use indexmap::map::{Iter, Keys};
use std::borrow::Borrow;
use std::hash::Hash;

/// An insertion-ordered map with unique keys.
///
/// ## Example
///
/// ```
/// use weft_core::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.set("b", 1);
/// map.set("a", 2);
/// map.set("b", 3);
///
/// let keys: Vec<_> = map.keys().copied().collect();
/// assert_eq!(keys, ["b", "a"]);
/// assert_eq!(map.get("b"), Some(&3));
/// ```
#[derive(Debug, Clone)]
pub struct OrderedMap<K, V> {
	entries: IndexMap<K, V>,
}

impl<K, V> Default for OrderedMap<K, V> {
	fn default() -> Self {
		Self {
			entries: IndexMap::default(),
		}
	}
}

impl<K: Hash + Eq, V> OrderedMap<K, V> {
	/// Creates an empty map. Does not allocate.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts or overwrites `key`.
	///
	/// A new key is appended to the iteration order. An existing key keeps
	/// its position and only its value changes.
	pub fn set(&mut self, key: K, value: V) {
		self.entries.insert(key, value);
	}

	/// Removes `key` if present, keeping the order of the remaining keys.
	pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
	where
		K: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.entries.shift_remove(key)
	}

	/// Returns the value stored for `key`.
	pub fn get<Q>(&self, key: &Q) -> Option<&V>
	where
		K: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.entries.get(key)
	}

	/// Returns a mutable reference to the value stored for `key`.
	pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
	where
		K: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.entries.get_mut(key)
	}

	/// Returns the value for `key`, inserting `default()` at the end first if
	/// the key is absent.
	pub fn get_or_insert_with(&mut self, key: K, default: impl FnOnce() -> V) -> &mut V {
		self.entries.entry(key).or_insert_with(default)
	}

	/// Returns `true` if `key` is present.
	pub fn contains_key<Q>(&self, key: &Q) -> bool
	where
		K: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.entries.contains_key(key)
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if the map has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Removes every entry.
	pub fn clear(&mut self) {
		self.entries.clear();
	}

	/// Visits entries in iteration order until `f` returns `false`.
	///
	/// Returning `false` is how callers stop early, for example to carry a
	/// write error out of the loop.
	pub fn for_each(&self, mut f: impl FnMut(&K, &V) -> bool) {
		for (key, value) in &self.entries {
			if !f(key, value) {
				break;
			}
		}
	}

	/// Iterates over entries in order.
	pub fn iter(&self) -> Iter<'_, K, V> {
		self.entries.iter()
	}

	/// Iterates over keys in order.
	pub fn keys(&self) -> Keys<'_, K, V> {
		self.entries.keys()
	}
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
	type Item = (&'a K, &'a V);
	type IntoIter = Iter<'a, K, V>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for OrderedMap<K, V> {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut map = Self::new();
		for (key, value) in iter {
			map.set(key, value);
		}
		map
	}
}

impl<K: Hash + Eq, V> Extend<(K, V)> for OrderedMap<K, V> {
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		for (key, value) in iter {
			self.set(key, value);
		}
	}
}
