//! Attributes shared by every element.

use std::borrow::Cow;
use weft_core::{DelimitedBuilder, Element, KeyValueBuilder};

/// Fluent setters for global attributes.
///
/// Implemented by every generated element wrapper and by [`Element`] itself.
/// Implementors only provide [`element_mut`](GlobalAttributes::element_mut).
///
/// ## Example
///
/// ```
/// use weft_core::Render;
/// use weft_elements::GlobalAttributes;
/// use weft_elements::html::div;
///
/// let el = div([])
///     .id("main")
///     .class(["card", "wide"])
///     .style("color", "red")
///     .data("user-id", "7")
///     .hidden(true);
/// assert_eq!(
///     el.render_to_string().unwrap(),
///     r#"<div id="main" class="card wide" style="color:red" data-user-id="7" hidden></div>"#
/// );
/// ```
pub trait GlobalAttributes: Sized {
	/// The wrapped element.
	fn element_mut(&mut self) -> &mut Element;

	/// Sets the `id` attribute.
	fn id(mut self, id: impl Into<String>) -> Self {
		self.element_mut().strings.set(Cow::Borrowed("id"), id.into());
		self
	}

	/// Adds classes to the `class` attribute.
	fn class<T: ToString>(mut self, classes: impl IntoIterator<Item = T>) -> Self {
		self.element_mut()
			.delimited
			.get_or_insert_with(Cow::Borrowed("class"), DelimitedBuilder::space_separated)
			.add(classes.into_iter().map(|class| class.to_string()));
		self
	}

	/// Removes classes from the `class` attribute.
	fn remove_class<T: ToString>(mut self, classes: impl IntoIterator<Item = T>) -> Self {
		if let Some(list) = self.element_mut().delimited.get_mut("class") {
			list.remove(classes.into_iter().map(|class| class.to_string()));
		}
		self
	}

	/// Adds a declaration to the `style` attribute.
	fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
		self.element_mut()
			.key_values
			.get_or_insert_with(Cow::Borrowed("style"), KeyValueBuilder::style)
			.add(property, value);
		self
	}

	/// Removes a declaration from the `style` attribute.
	fn remove_style(mut self, property: &str) -> Self {
		if let Some(style) = self.element_mut().key_values.get_mut("style") {
			style.remove(property);
		}
		self
	}

	/// Sets the `title` attribute.
	fn title(self, title: impl Into<String>) -> Self {
		self.attr("title", title)
	}

	/// Sets the `lang` attribute.
	fn lang(self, lang: impl Into<String>) -> Self {
		self.attr("lang", lang)
	}

	/// Sets the `dir` attribute.
	fn dir(self, dir: impl Into<String>) -> Self {
		self.attr("dir", dir)
	}

	/// Sets the `role` attribute.
	fn role(self, role: impl Into<String>) -> Self {
		self.attr("role", role)
	}

	/// Sets the `tabindex` attribute.
	fn tabindex(mut self, index: i64) -> Self {
		self.element_mut().ints.set(Cow::Borrowed("tabindex"), index);
		self
	}

	/// Sets or clears the `hidden` attribute.
	fn hidden(self, hidden: bool) -> Self {
		self.toggle("hidden", hidden)
	}

	/// Sets `draggable` to `"true"` or `"false"`.
	fn draggable(self, draggable: bool) -> Self {
		self.attr("draggable", if draggable { "true" } else { "false" })
	}

	/// Sets a `data-{key}` attribute.
	fn data(self, key: &str, value: impl Into<String>) -> Self {
		self.prefixed("data-", key, value)
	}

	/// Sets an `aria-{key}` attribute.
	fn aria(self, key: &str, value: impl Into<String>) -> Self {
		self.prefixed("aria-", key, value)
	}

	/// Sets a custom data attribute named `{prefix}{key}`.
	fn prefixed(mut self, prefix: &str, key: &str, value: impl Into<String>) -> Self {
		let mut name = String::with_capacity(prefix.len() + key.len());
		name.push_str(prefix);
		name.push_str(key);
		self.element_mut()
			.custom_data
			.set(Cow::Owned(name), value.into());
		self
	}

	/// Sets any string attribute.
	fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
		self.element_mut().strings.set(name.into(), value.into());
		self
	}

	/// Sets string attributes from alternating name/value arguments.
	///
	/// # Panics
	///
	/// Panics if `pairs` has an odd number of items.
	fn attrs(mut self, pairs: &[&str]) -> Self {
		assert!(
			pairs.len() % 2 == 0,
			"attribute pairs need an even number of arguments, got {}",
			pairs.len()
		);
		let strings = &mut self.element_mut().strings;
		for pair in pairs.chunks_exact(2) {
			strings.set(Cow::Owned(pair[0].to_string()), pair[1].to_string());
		}
		self
	}

	/// Sets or clears a boolean attribute.
	fn toggle(mut self, name: impl Into<Cow<'static, str>>, on: bool) -> Self {
		self.element_mut().bools.set(name.into(), on);
		self
	}
}

impl GlobalAttributes for Element {
	fn element_mut(&mut self) -> &mut Element {
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use weft_core::Render;

	fn render(el: Element) -> String {
		el.render_to_string().unwrap()
	}

	#[rstest]
	fn test_class_add_and_remove() {
		let el = Element::new("p").class(["a", "b", "c"]).remove_class(["b"]);
		assert_eq!(render(el), r#"<p class="a c"></p>"#);
	}

	#[rstest]
	fn test_class_calls_accumulate_without_duplicates() {
		let el = Element::new("p").class(["a"]).class(["b", "a"]);
		assert_eq!(render(el), r#"<p class="a b"></p>"#);
	}

	#[rstest]
	fn test_style_add_and_remove() {
		let el = Element::new("p")
			.style("color", "red")
			.style("size", "1px")
			.remove_style("color");
		assert_eq!(render(el), r#"<p style="size:1px"></p>"#);
	}

	#[rstest]
	#[case(true, r#"<p draggable="true"></p>"#)]
	#[case(false, r#"<p draggable="false"></p>"#)]
	fn test_draggable(#[case] value: bool, #[case] expected: &str) {
		assert_eq!(render(Element::new("p").draggable(value)), expected);
	}

	#[rstest]
	fn test_data_and_aria_names() {
		let el = Element::new("button")
			.aria("label", "Close")
			.data("action", "close");
		assert_eq!(
			render(el),
			r#"<button aria-label="Close" data-action="close"></button>"#
		);
	}

	#[rstest]
	fn test_tabindex_is_integer_kind() {
		let el = Element::new("div").id("x").tabindex(0);
		assert_eq!(render(el), r#"<div tabindex="0" id="x"></div>"#);
	}

	#[rstest]
	fn test_attrs_pairs() {
		let el = Element::new("meta").attrs(&["name", "viewport", "content", "width=device-width"]);
		assert_eq!(
			render(el),
			r#"<meta name="viewport" content="width=device-width"></meta>"#
		);
	}

	#[rstest]
	#[should_panic(expected = "even number of arguments")]
	fn test_attrs_odd_count_panics() {
		let _ = Element::new("meta").attrs(&["name"]);
	}

	#[rstest]
	fn test_toggle_off_renders_nothing() {
		let el = Element::new("details").toggle("open", true).toggle("open", false);
		assert_eq!(render(el), "<details></details>");
	}
}
