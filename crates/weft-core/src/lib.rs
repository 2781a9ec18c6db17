//! # weft-core
//!
//! Element tree, attribute model and markup renderer.
//!
//! Every node implements [`Render`], which writes markup to a
//! `&mut dyn std::io::Write`. [`Element`] is the one generic element type;
//! typed per-tag wrappers build on top of it.
//!
//! ## Rendering rules
//!
//! - An element renders as `<tag`, its attributes, then `>`, its children and
//!   `</tag>`.
//! - A self-closing element renders as `<tag ... >` and never renders
//!   children.
//! - Attributes render as ` name="value"`. An empty value renders the bare
//!   name.
//! - Attribute values are written verbatim. Text children given as `&str` or
//!   `String` are escaped. [`Text`] is written raw.
//! - The first error stops the render and is returned.
//!
//! ## Example
//!
//! ```
//! use weft_core::{Element, Render, group, map, nodes, text};
//!
//! let list = Element::new("ul")
//!     .delimited("class", " ", ["menu", "compact"])
//!     .child(map(["Home", "About"], |label| Element::new("li").child(label)));
//!
//! let page = group(nodes![text("<!doctype html>"), list]);
//! assert_eq!(
//!     page.render_to_string().unwrap(),
//!     r#"<!doctype html><ul class="menu compact"><li>Home</li><li>About</li></ul>"#
//! );
//! ```

mod element;
mod error;
mod escape;
mod nodes;
mod options;
mod ordered_map;
mod render;
mod values;

pub use element::{Element, Name};
pub use error::{RenderError, Result};
pub use escape::{html_escape, write_escaped};
pub use nodes::{
	Escaped, Group, LazyEither, LazyGroup, Producer, Text, either, error_node, escaped, group,
	lazy_either, lazy_group, lazy_when, map, map_indexed, producer, text, when,
};
pub use options::{CollisionPolicy, RenderOptions};
pub use ordered_map::OrderedMap;
pub use render::{Node, Render, node};
pub use values::{DelimitedBuilder, KeyValueBuilder};
