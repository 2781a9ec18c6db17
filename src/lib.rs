//! # weft
//!
//! Typed HTML, SVG and MathML element builders that render markup to any
//! `std::io::Write` sink.
//!
//! ## Crates
//!
//! - [`weft_core`]: [`Element`], the [`Render`] trait, attribute value
//!   builders and composition helpers
//! - `weft_elements` (feature `elements`, on by default): typed per-tag
//!   wrappers in [`html`], [`svg`] and [`mathml`]
//!
//! ## Feature Flags
//!
//! - `elements` (default) - typed element wrappers and [`GlobalAttributes`]
//!
//! ## Quick Example
//!
//! ```
//! use weft::prelude::*;
//! use weft::html::{div, li, ul};
//!
//! let items = ["alpha", "beta"];
//! let view = div(nodes![
//!     ul(nodes![map(items, |item| li(nodes![item]))]),
//!     when(items.is_empty(), nodes![text("nothing here")]),
//! ])
//! .id("list");
//!
//! let mut out = Vec::new();
//! view.render(&mut out)?;
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     r#"<div id="list"><ul><li>alpha</li><li>beta</li></ul></div>"#
//! );
//! # Ok::<(), weft::RenderError>(())
//! ```

pub use weft_core;
pub use weft_core::*;

#[cfg(feature = "elements")]
pub use weft_elements::{GlobalAttributes, custom, custom_void, html, mathml, svg};

/// Commonly used items.
///
/// Element constructors are left in their modules (`weft::html::div`) since
/// tag names such as `text` and `map` collide across namespaces.
pub mod prelude {
	pub use weft_core::{
		CollisionPolicy, Element, Escaped, Group, Node, Render, RenderError, RenderOptions, Text,
		either, escaped, group, lazy_either, lazy_group, lazy_when, map, map_indexed, node, nodes,
		producer, producers, text, when,
	};

	#[cfg(feature = "elements")]
	pub use weft_elements::GlobalAttributes;
}
