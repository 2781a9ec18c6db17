//! The [`Render`] trait and the boxed [`Node`] type.

use crate::error::Result;
use crate::escape::write_escaped;
use crate::options::RenderOptions;
use std::io::Write;

/// Anything that can write itself as markup to a byte sink.
///
/// Implementors provide [`render_with`](Render::render_with); the other
/// methods are derived from it.
pub trait Render {
	/// Writes markup to `out` using `options`.
	///
	/// Stops at the first error. Anything already written stays in `out`.
	fn render_with(&self, out: &mut dyn Write, options: &RenderOptions) -> Result<()>;

	/// Writes markup to `out` with default options.
	fn render(&self, out: &mut dyn Write) -> Result<()> {
		self.render_with(out, &RenderOptions::default())
	}

	/// Renders into a new `String` with default options.
	fn render_to_string(&self) -> Result<String> {
		self.render_to_string_with(&RenderOptions::default())
	}

	/// Renders into a new `String` using `options`.
	fn render_to_string_with(&self, options: &RenderOptions) -> Result<String> {
		let mut buf = Vec::new();
		self.render_with(&mut buf, options)?;
		Ok(String::from_utf8(buf)?)
	}
}

/// A type-erased renderable child.
pub type Node = Box<dyn Render>;

/// Boxes any renderable value into a [`Node`].
pub fn node(value: impl Render + 'static) -> Node {
	Box::new(value)
}

/// Builds a `Vec<Node>` from heterogeneous renderable values.
///
/// ```
/// use weft_core::{nodes, text, Node, Render};
///
/// let children: Vec<Node> = nodes![text("a"), "b & c", text("d")];
/// let mut out = Vec::new();
/// for child in &children {
///     child.render(&mut out).unwrap();
/// }
/// assert_eq!(String::from_utf8(out).unwrap(), "ab &amp; cd");
/// ```
#[macro_export]
macro_rules! nodes {
	($($node:expr),* $(,)?) => {{
		let nodes: ::std::vec::Vec<$crate::Node> = ::std::vec![$($crate::node($node)),*];
		nodes
	}};
}

impl<R: Render + ?Sized> Render for Box<R> {
	fn render_with(&self, out: &mut dyn Write, options: &RenderOptions) -> Result<()> {
		(**self).render_with(out, options)
	}
}

impl<R: Render + ?Sized> Render for &R {
	fn render_with(&self, out: &mut dyn Write, options: &RenderOptions) -> Result<()> {
		(**self).render_with(out, options)
	}
}

/// `None` renders nothing.
impl<R: Render> Render for Option<R> {
	fn render_with(&self, out: &mut dyn Write, options: &RenderOptions) -> Result<()> {
		match self {
			Some(inner) => inner.render_with(out, options),
			None => Ok(()),
		}
	}
}

/// Renders each item in order.
impl<R: Render> Render for [R] {
	fn render_with(&self, out: &mut dyn Write, options: &RenderOptions) -> Result<()> {
		for item in self {
			item.render_with(out, options)?;
		}
		Ok(())
	}
}

impl<R: Render> Render for Vec<R> {
	fn render_with(&self, out: &mut dyn Write, options: &RenderOptions) -> Result<()> {
		self.as_slice().render_with(out, options)
	}
}

/// Plain strings render as escaped text.
impl Render for str {
	fn render_with(&self, out: &mut dyn Write, _options: &RenderOptions) -> Result<()> {
		write_escaped(out, self)?;
		Ok(())
	}
}

impl Render for String {
	fn render_with(&self, out: &mut dyn Write, options: &RenderOptions) -> Result<()> {
		self.as_str().render_with(out, options)
	}
}
