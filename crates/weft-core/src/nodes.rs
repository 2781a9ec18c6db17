//! Text nodes and composition helpers.
//!
//! The eager helpers ([`group`], [`when`], [`either`], [`map`]) take nodes
//! that are already built. The lazy ones ([`lazy_group`], [`lazy_when`],
//! [`lazy_either`]) take [`Producer`] closures and call them during render,
//! so a branch that is not taken is never built.

use crate::error::Result;
use crate::escape::write_escaped;
use crate::options::RenderOptions;
use crate::render::{Node, Render, node};
use std::borrow::Cow;
use std::fmt::{self, Display};
use std::io::Write;

/// Text written to the sink as-is.
///
/// The content is not escaped. Use [`Escaped`] for untrusted input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text(Cow<'static, str>);

impl Text {
	/// Creates a raw text node.
	pub fn new(content: impl Into<Cow<'static, str>>) -> Self {
		Self(content.into())
	}

	/// The text content.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Render for Text {
	fn render_with(&self, out: &mut dyn Write, _options: &RenderOptions) -> Result<()> {
		out.write_all(self.0.as_bytes())?;
		Ok(())
	}
}

/// Creates a raw text node.
pub fn text(content: impl Into<Cow<'static, str>>) -> Text {
	Text::new(content)
}

/// Text with markup special characters escaped on render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Escaped(Cow<'static, str>);

impl Escaped {
	/// Creates an escaped text node.
	pub fn new(content: impl Into<Cow<'static, str>>) -> Self {
		Self(content.into())
	}

	/// The unescaped content.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Render for Escaped {
	fn render_with(&self, out: &mut dyn Write, _options: &RenderOptions) -> Result<()> {
		write_escaped(out, &self.0)?;
		Ok(())
	}
}

/// Creates an escaped text node.
pub fn escaped(content: impl Into<Cow<'static, str>>) -> Escaped {
	Escaped::new(content)
}

/// Renders an error message as raw text.
pub fn error_node(err: &dyn Display) -> Text {
	let message = err.to_string();
	tracing::debug!(error = %message, "rendering error as text node");
	Text::new(message)
}

/// A sequence of nodes rendered in order with no wrapper markup.
#[derive(Default)]
pub struct Group(Vec<Node>);

impl Group {
	/// Creates a group from nodes.
	pub fn new(children: impl IntoIterator<Item = Node>) -> Self {
		Self(children.into_iter().collect())
	}

	/// Appends a node.
	pub fn push(&mut self, child: impl Render + 'static) {
		self.0.push(node(child));
	}

	/// Number of nodes.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` if the group has no nodes.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl Render for Group {
	fn render_with(&self, out: &mut dyn Write, options: &RenderOptions) -> Result<()> {
		for child in &self.0 {
			child.render_with(out, options)?;
		}
		Ok(())
	}
}

impl FromIterator<Node> for Group {
	fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
		Self::new(iter)
	}
}

impl fmt::Debug for Group {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Group").field("children", &self.0.len()).finish()
	}
}

/// Creates a group from nodes.
pub fn group(children: impl IntoIterator<Item = Node>) -> Group {
	Group::new(children)
}

/// Returns the group when `condition` holds and `None` otherwise.
///
/// The children are built either way; see [`lazy_when`] to defer them.
pub fn when(condition: bool, children: impl IntoIterator<Item = Node>) -> Option<Group> {
	condition.then(|| Group::new(children))
}

/// Picks one of two already-built nodes.
pub fn either(
	condition: bool,
	then: impl Render + 'static,
	otherwise: impl Render + 'static,
) -> Node {
	if condition { node(then) } else { node(otherwise) }
}

/// Maps each item to a node and groups the results in order.
pub fn map<I, F, R>(items: I, mut f: F) -> Group
where
	I: IntoIterator,
	F: FnMut(I::Item) -> R,
	R: Render + 'static,
{
	items.into_iter().map(|item| node(f(item))).collect()
}

/// Like [`map`], passing the zero-based index along with each item.
pub fn map_indexed<I, F, R>(items: I, mut f: F) -> Group
where
	I: IntoIterator,
	F: FnMut(usize, I::Item) -> R,
	R: Render + 'static,
{
	items
		.into_iter()
		.enumerate()
		.map(|(i, item)| node(f(i, item)))
		.collect()
}

/// A deferred node, built each time it is rendered.
pub type Producer = Box<dyn Fn() -> Node>;

/// Boxes a closure into a [`Producer`].
pub fn producer<F, R>(f: F) -> Producer
where
	F: Fn() -> R + 'static,
	R: Render + 'static,
{
	Box::new(move || node(f()))
}

/// Builds a `Vec<Producer>` from closures returning renderable values.
///
/// ```
/// use weft_core::{lazy_group, producers, text, Render};
///
/// let lazy = lazy_group(producers![|| text("a"), || "b"]);
/// assert_eq!(lazy.render_to_string().unwrap(), "ab");
/// ```
#[macro_export]
macro_rules! producers {
	($($producer:expr),* $(,)?) => {{
		let producers: ::std::vec::Vec<$crate::Producer> =
			::std::vec![$($crate::producer($producer)),*];
		producers
	}};
}

/// A sequence of producers called and rendered in order during render.
///
/// A producer is not called until every earlier one has rendered
/// successfully.
#[derive(Default)]
pub struct LazyGroup(Vec<Producer>);

impl LazyGroup {
	/// Creates a lazy group.
	pub fn new(producers: impl IntoIterator<Item = Producer>) -> Self {
		Self(producers.into_iter().collect())
	}

	/// Number of producers.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` if the group has no producers.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl Render for LazyGroup {
	fn render_with(&self, out: &mut dyn Write, options: &RenderOptions) -> Result<()> {
		for produce in &self.0 {
			produce().render_with(out, options)?;
		}
		Ok(())
	}
}

impl fmt::Debug for LazyGroup {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LazyGroup")
			.field("producers", &self.0.len())
			.finish()
	}
}

/// Creates a lazy group.
pub fn lazy_group(producers: impl IntoIterator<Item = Producer>) -> LazyGroup {
	LazyGroup::new(producers)
}

/// Returns a lazy group when `condition` holds and `None` otherwise.
///
/// The producers are never called when `condition` is `false`.
pub fn lazy_when(
	condition: bool,
	producers: impl IntoIterator<Item = Producer>,
) -> Option<LazyGroup> {
	condition.then(|| LazyGroup::new(producers))
}

/// Picks one of two producers; only the chosen one is called, at render time.
pub struct LazyEither {
	condition: bool,
	then: Producer,
	otherwise: Producer,
}

impl Render for LazyEither {
	fn render_with(&self, out: &mut dyn Write, options: &RenderOptions) -> Result<()> {
		let chosen = if self.condition {
			(self.then)()
		} else {
			(self.otherwise)()
		};
		chosen.render_with(out, options)
	}
}

impl fmt::Debug for LazyEither {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LazyEither")
			.field("condition", &self.condition)
			.finish_non_exhaustive()
	}
}

/// Creates a [`LazyEither`].
pub fn lazy_either<T, U>(
	condition: bool,
	then: impl Fn() -> T + 'static,
	otherwise: impl Fn() -> U + 'static,
) -> LazyEither
where
	T: Render + 'static,
	U: Render + 'static,
{
	LazyEither {
		condition,
		then: producer(then),
		otherwise: producer(otherwise),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::element::Element;
	use crate::error::RenderError;
	use crate::nodes;
	use rstest::rstest;
	use std::cell::Cell;
	use std::rc::Rc;

	struct Failing;

	impl Render for Failing {
		fn render_with(&self, _out: &mut dyn Write, _options: &RenderOptions) -> Result<()> {
			Err(RenderError::custom("boom"))
		}
	}

	/// Counts how often it is rendered.
	struct Probe(Rc<Cell<usize>>);

	impl Render for Probe {
		fn render_with(&self, _out: &mut dyn Write, _options: &RenderOptions) -> Result<()> {
			self.0.set(self.0.get() + 1);
			Ok(())
		}
	}

	#[rstest]
	fn test_text_is_raw() {
		assert_eq!(text("<b>").render_to_string().unwrap(), "<b>");
	}

	#[rstest]
	fn test_escaped_is_escaped() {
		assert_eq!(
			escaped("<b>\"x\"</b>").render_to_string().unwrap(),
			"&lt;b&gt;&quot;x&quot;&lt;/b&gt;"
		);
	}

	#[rstest]
	fn test_group_renders_in_order() {
		let g = group(nodes![text("a"), Element::new("br"), text("c")]);
		assert_eq!(g.render_to_string().unwrap(), "a<br></br>c");
	}

	#[rstest]
	fn test_group_stops_at_first_error() {
		let rendered = Rc::new(Cell::new(0));
		let g = group(nodes![
			Probe(rendered.clone()),
			Failing,
			Probe(rendered.clone())
		]);
		let err = g.render_to_string().unwrap_err();
		assert_eq!(err.to_string(), "boom");
		assert_eq!(rendered.get(), 1);
	}

	#[rstest]
	#[case(true, "xy")]
	#[case(false, "")]
	fn test_when(#[case] condition: bool, #[case] expected: &str) {
		let out = when(condition, nodes![text("x"), text("y")]);
		assert_eq!(out.is_some(), condition);
		assert_eq!(out.render_to_string().unwrap(), expected);
	}

	#[rstest]
	#[case(true, "yes")]
	#[case(false, "no")]
	fn test_either(#[case] condition: bool, #[case] expected: &str) {
		let out = either(condition, text("yes"), text("no"));
		assert_eq!(out.render_to_string().unwrap(), expected);
	}

	#[rstest]
	fn test_map_preserves_order() {
		let list = map(["a", "b", "c"], |item| Element::new("li").child(item));
		assert_eq!(
			list.render_to_string().unwrap(),
			"<li>a</li><li>b</li><li>c</li>"
		);
	}

	#[rstest]
	fn test_map_indexed_passes_index() {
		let list = map_indexed(["a", "b"], |i, item| text(format!("{i}:{item} ")));
		assert_eq!(list.render_to_string().unwrap(), "0:a 1:b ");
	}

	#[rstest]
	fn test_map_empty_renders_nothing() {
		let list = map(Vec::<&'static str>::new(), |item| text(item));
		assert!(list.is_empty());
		assert_eq!(list.render_to_string().unwrap(), "");
	}

	#[rstest]
	fn test_lazy_when_false_never_calls_producers() {
		let calls = Rc::new(Cell::new(0));
		let counter = calls.clone();
		let out = lazy_when(
			false,
			vec![producer(move || {
				counter.set(counter.get() + 1);
				text("x")
			})],
		);
		assert_eq!(out.render_to_string().unwrap(), "");
		assert_eq!(calls.get(), 0);
	}

	#[rstest]
	fn test_lazy_group_defers_until_render() {
		let calls = Rc::new(Cell::new(0));
		let counter = calls.clone();
		let lazy = lazy_group(vec![producer(move || {
			counter.set(counter.get() + 1);
			text("x")
		})]);
		assert_eq!(calls.get(), 0);
		assert_eq!(lazy.render_to_string().unwrap(), "x");
		assert_eq!(calls.get(), 1);
	}

	#[rstest]
	fn test_lazy_group_stops_before_later_producers() {
		let calls = Rc::new(Cell::new(0));
		let counter = calls.clone();
		let lazy = lazy_group(vec![
			producer(|| Failing),
			producer(move || {
				counter.set(counter.get() + 1);
				text("late")
			}),
		]);
		assert!(lazy.render_to_string().is_err());
		assert_eq!(calls.get(), 0);
	}

	#[rstest]
	#[case(true, "then")]
	#[case(false, "otherwise")]
	fn test_lazy_either_calls_only_chosen_branch(
		#[case] condition: bool,
		#[case] expected: &str,
	) {
		let then_calls = Rc::new(Cell::new(0));
		let other_calls = Rc::new(Cell::new(0));
		let (t, o) = (then_calls.clone(), other_calls.clone());
		let out = lazy_either(
			condition,
			move || {
				t.set(t.get() + 1);
				text("then")
			},
			move || {
				o.set(o.get() + 1);
				text("otherwise")
			},
		);
		assert_eq!(out.render_to_string().unwrap(), expected);
		assert_eq!(then_calls.get(), usize::from(condition));
		assert_eq!(other_calls.get(), usize::from(!condition));
	}

	#[rstest]
	fn test_error_node_is_unescaped_message() {
		let err = RenderError::custom("<oops>");
		assert_eq!(error_node(&err).render_to_string().unwrap(), "<oops>");
	}
}
