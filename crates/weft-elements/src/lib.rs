//! # weft-elements
//!
//! Typed wrappers for HTML, SVG and MathML elements.
//!
//! Each wrapper holds a [`weft_core::Element`] and adds one setter per known
//! attribute, typed by attribute kind. All of them implement
//! [`GlobalAttributes`], [`Render`](weft_core::Render), `Deref<Target = Element>`
//! and `Into<Element>`.
//!
//! ## Example
//!
//! ```
//! use weft_core::{Render, nodes};
//! use weft_elements::GlobalAttributes;
//! use weft_elements::{html, svg};
//!
//! let page = html::div(nodes![
//!     html::progress([]).value(0.3).max(1.0),
//!     svg::svg(nodes![svg::circle([]).cx(5.0).cy(5.0).r(4.0)]),
//! ])
//! .class(["status"]);
//!
//! assert_eq!(
//!     page.render_to_string().unwrap(),
//!     concat!(
//!         r#"<div class="status">"#,
//!         r#"<progress value="0.3" max="1"></progress>"#,
//!         r#"<svg><circle cx="5" cy="5" r="4"></circle></svg>"#,
//!         "</div>"
//!     )
//! );
//! ```

#[macro_use]
mod macros;

mod global;
pub mod html;
pub mod mathml;
pub mod svg;

pub use global::GlobalAttributes;

use std::borrow::Cow;
use weft_core::{Element, Node};

/// Creates an element with an arbitrary tag and `children`.
///
/// ```
/// use weft_core::Render;
/// use weft_elements::custom;
///
/// let el = custom("my-widget", []).attr("mode", "dark");
/// assert_eq!(el.render_to_string().unwrap(), r#"<my-widget mode="dark"></my-widget>"#);
/// ```
pub fn custom(
	tag: impl Into<Cow<'static, str>>,
	children: impl IntoIterator<Item = Node>,
) -> Element {
	Element::new(tag).children(children)
}

/// Creates a self-closing element with an arbitrary tag.
pub fn custom_void(tag: impl Into<Cow<'static, str>>) -> Element {
	Element::new_self_closing(tag)
}
