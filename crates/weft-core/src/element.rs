//! The generic markup element and its renderer.
//!
//! An [`Element`] keeps its attributes in seven typed collections. At render
//! time they are folded into one insertion-ordered map in a fixed order:
//!
//! 1. integer
//! 2. float
//! 3. string
//! 4. delimited (`class`, `points`, ...)
//! 5. key/value (`style`, ...)
//! 6. custom data (`data-*`, `aria-*`, or any other pre-formed name)
//! 7. boolean (only `true` entries, rendered as a bare name)
//!
//! Within each collection, attributes keep the order they were first set in.

use crate::error::{RenderError, Result};
use crate::options::{CollisionPolicy, RenderOptions};
use crate::ordered_map::OrderedMap;
use crate::render::{Node, Render, node};
use crate::values::{DelimitedBuilder, KeyValueBuilder};
use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};

/// Attribute and tag names.
pub type Name = Cow<'static, str>;

/// A markup element with typed attribute collections and ordered children.
///
/// ## Example
///
/// ```
/// use weft_core::{Element, Render};
///
/// let el = Element::new("div")
///     .attr("id", "x")
///     .bool_attr("hidden", true)
///     .child("hi");
/// assert_eq!(el.render_to_string().unwrap(), r#"<div id="x" hidden>hi</div>"#);
/// ```
pub struct Element {
	tag: Name,
	self_closing: bool,
	/// Integer attributes
	pub ints: OrderedMap<Name, i64>,
	/// Float attributes
	pub floats: OrderedMap<Name, f64>,
	/// String attributes
	pub strings: OrderedMap<Name, String>,
	/// Delimited-list attributes
	pub delimited: OrderedMap<Name, DelimitedBuilder<String>>,
	/// Key/value attributes
	pub key_values: OrderedMap<Name, KeyValueBuilder>,
	/// Custom data attributes keyed by their full rendered name
	pub custom_data: OrderedMap<Name, String>,
	/// Boolean attributes
	pub bools: OrderedMap<Name, bool>,
	children: Vec<Option<Node>>,
}

impl Element {
	/// Creates an element that renders a closing tag.
	pub fn new(tag: impl Into<Name>) -> Self {
		Self::with_closing(tag.into(), false)
	}

	/// Creates an element that renders as `<tag ... >` with no children and
	/// no closing tag.
	pub fn new_self_closing(tag: impl Into<Name>) -> Self {
		Self::with_closing(tag.into(), true)
	}

	fn with_closing(tag: Name, self_closing: bool) -> Self {
		Self {
			tag,
			self_closing,
			ints: OrderedMap::new(),
			floats: OrderedMap::new(),
			strings: OrderedMap::new(),
			delimited: OrderedMap::new(),
			key_values: OrderedMap::new(),
			custom_data: OrderedMap::new(),
			bools: OrderedMap::new(),
			children: Vec::new(),
		}
	}

	/// Tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns `true` if the element renders without children or closing tag.
	pub fn is_self_closing(&self) -> bool {
		self.self_closing
	}

	/// Child slots in order. `None` slots render nothing.
	pub fn child_nodes(&self) -> &[Option<Node>] {
		&self.children
	}

	/// Sets a string attribute.
	pub fn attr(mut self, name: impl Into<Name>, value: impl Into<String>) -> Self {
		self.strings.set(name.into(), value.into());
		self
	}

	/// Sets an integer attribute.
	pub fn int_attr(mut self, name: impl Into<Name>, value: i64) -> Self {
		self.ints.set(name.into(), value);
		self
	}

	/// Sets a float attribute.
	pub fn float_attr(mut self, name: impl Into<Name>, value: f64) -> Self {
		self.floats.set(name.into(), value);
		self
	}

	/// Sets a boolean attribute. `false` entries are kept but not rendered.
	pub fn bool_attr(mut self, name: impl Into<Name>, value: bool) -> Self {
		self.bools.set(name.into(), value);
		self
	}

	/// Sets a custom data attribute under its full name (`data-id`, `aria-label`).
	pub fn custom_data(mut self, name: impl Into<Name>, value: impl Into<String>) -> Self {
		self.custom_data.set(name.into(), value.into());
		self
	}

	/// Sets custom data attributes from alternating name/value arguments.
	///
	/// # Panics
	///
	/// Panics if `pairs` has an odd number of items.
	pub fn custom_data_pairs(mut self, pairs: &[&str]) -> Self {
		assert!(
			pairs.len() % 2 == 0,
			"custom data pairs need an even number of arguments, got {}",
			pairs.len()
		);
		for pair in pairs.chunks_exact(2) {
			self.custom_data
				.set(Cow::Owned(pair[0].to_string()), pair[1].to_string());
		}
		self
	}

	/// Adds values to a delimited attribute, creating it with `delimiter` if
	/// absent. The delimiter of an existing attribute is not changed.
	pub fn delimited<T: ToString>(
		mut self,
		name: impl Into<Name>,
		delimiter: &'static str,
		values: impl IntoIterator<Item = T>,
	) -> Self {
		self.delimited
			.get_or_insert_with(name.into(), || DelimitedBuilder::new(delimiter))
			.add(values.into_iter().map(|value| value.to_string()));
		self
	}

	/// Removes values from a delimited attribute. The attribute stays set even
	/// if it becomes empty.
	pub fn remove_delimited<T: ToString>(
		mut self,
		name: &str,
		values: impl IntoIterator<Item = T>,
	) -> Self {
		if let Some(list) = self.delimited.get_mut(name) {
			list.remove(values.into_iter().map(|value| value.to_string()));
		}
		self
	}

	/// Adds an entry to a key/value attribute, creating it with the given
	/// delimiters if absent.
	pub fn key_value(
		mut self,
		name: impl Into<Name>,
		pair_delimiter: &'static str,
		entry_delimiter: &'static str,
		key: impl Into<String>,
		value: impl Into<String>,
	) -> Self {
		self.key_values
			.get_or_insert_with(name.into(), || {
				KeyValueBuilder::new(pair_delimiter, entry_delimiter)
			})
			.add(key, value);
		self
	}

	/// Removes an entry from a key/value attribute.
	pub fn remove_key_value(mut self, name: &str, key: &str) -> Self {
		if let Some(entries) = self.key_values.get_mut(name) {
			entries.remove(key);
		}
		self
	}

	/// Removes `name` from every attribute collection.
	pub fn remove_attr(mut self, name: &str) -> Self {
		self.remove_attr_in_place(name);
		self
	}

	/// In-place form of [`remove_attr`](Self::remove_attr).
	pub fn remove_attr_in_place(&mut self, name: &str) {
		self.ints.delete(name);
		self.floats.delete(name);
		self.strings.delete(name);
		self.delimited.delete(name);
		self.key_values.delete(name);
		self.custom_data.delete(name);
		self.bools.delete(name);
	}

	/// Appends a child.
	pub fn child(mut self, child: impl Render + 'static) -> Self {
		self.children.push(Some(node(child)));
		self
	}

	/// Appends a child slot that renders nothing when `None`.
	pub fn maybe_child(mut self, child: Option<Node>) -> Self {
		self.children.push(child);
		self
	}

	/// Appends children in order.
	pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
		self.extend_children(children);
		self
	}

	/// Appends a child slot in place.
	pub fn push_child(&mut self, child: Option<Node>) {
		self.children.push(child);
	}

	/// Appends children in place.
	pub fn extend_children(&mut self, children: impl IntoIterator<Item = Node>) {
		self.children.extend(children.into_iter().map(Some));
	}

	/// Folds the typed collections into the rendered attribute list.
	///
	/// Values are the exact rendered text. An empty value renders as a bare
	/// attribute name. A name present in more than one collection produces
	/// one entry at the position of its first occurrence carrying the value
	/// of its last, unless `options` rejects collisions.
	pub fn merged_attributes<'a>(
		&'a self,
		options: &RenderOptions,
	) -> Result<OrderedMap<&'a str, Cow<'a, str>>> {
		let mut merged = OrderedMap::new();

		for (name, value) in &self.ints {
			self.merge_entry(&mut merged, name, Cow::Owned(value.to_string()), options)?;
		}
		for (name, value) in &self.floats {
			self.merge_entry(&mut merged, name, Cow::Owned(value.to_string()), options)?;
		}
		for (name, value) in &self.strings {
			self.merge_entry(&mut merged, name, Cow::Borrowed(value.as_str()), options)?;
		}
		for (name, list) in &self.delimited {
			let mut joined = String::new();
			list.render(&mut joined)?;
			self.merge_entry(&mut merged, name, Cow::Owned(joined), options)?;
		}
		for (name, entries) in &self.key_values {
			let mut joined = String::new();
			entries.render(&mut joined)?;
			self.merge_entry(&mut merged, name, Cow::Owned(joined), options)?;
		}
		for (name, value) in &self.custom_data {
			self.merge_entry(&mut merged, name, Cow::Borrowed(value.as_str()), options)?;
		}
		for (name, value) in &self.bools {
			if *value {
				self.merge_entry(&mut merged, name, Cow::Borrowed(""), options)?;
			}
		}

		Ok(merged)
	}

	fn merge_entry<'a>(
		&self,
		merged: &mut OrderedMap<&'a str, Cow<'a, str>>,
		name: &'a Name,
		value: Cow<'a, str>,
		options: &RenderOptions,
	) -> Result<()> {
		let name: &'a str = name.as_ref();
		if merged.contains_key(name) {
			match options.collision_policy {
				CollisionPolicy::Merge => {
					tracing::debug!(
						tag = %self.tag,
						attribute = name,
						"attribute set by more than one kind, keeping the later value"
					);
				}
				CollisionPolicy::Reject => {
					tracing::warn!(
						tag = %self.tag,
						attribute = name,
						"rejecting attribute set by more than one kind"
					);
					return Err(RenderError::AttributeCollision {
						tag: self.tag.to_string(),
						name: name.to_string(),
					});
				}
			}
		}
		merged.set(name, value);
		Ok(())
	}
}

fn write_attribute(out: &mut dyn Write, name: &str, value: &str) -> io::Result<()> {
	out.write_all(b" ")?;
	out.write_all(name.as_bytes())?;
	if !value.is_empty() {
		out.write_all(b"=\"")?;
		out.write_all(value.as_bytes())?;
		out.write_all(b"\"")?;
	}
	Ok(())
}

impl Render for Element {
	fn render_with(&self, out: &mut dyn Write, options: &RenderOptions) -> Result<()> {
		let attributes = self.merged_attributes(options)?;
		tracing::trace!(
			tag = %self.tag,
			attributes = attributes.len(),
			children = self.children.len(),
			"rendering element"
		);

		out.write_all(b"<")?;
		out.write_all(self.tag.as_bytes())?;

		let mut written: io::Result<()> = Ok(());
		attributes.for_each(|name, value| match write_attribute(&mut *out, name, value) {
			Ok(()) => true,
			Err(e) => {
				written = Err(e);
				false
			}
		});
		written?;

		if self.self_closing {
			out.write_all(b" >")?;
			return Ok(());
		}
		out.write_all(b">")?;

		for child in self.children.iter().flatten() {
			child.render_with(out, options)?;
		}

		out.write_all(b"</")?;
		out.write_all(self.tag.as_bytes())?;
		out.write_all(b">")?;
		Ok(())
	}
}

impl fmt::Debug for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Element")
			.field("tag", &self.tag)
			.field("self_closing", &self.self_closing)
			.field("ints", &self.ints)
			.field("floats", &self.floats)
			.field("strings", &self.strings)
			.field("delimited", &self.delimited)
			.field("key_values", &self.key_values)
			.field("custom_data", &self.custom_data)
			.field("bools", &self.bools)
			.field("children", &self.children.len())
			.finish()
	}
}
