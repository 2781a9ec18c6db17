//! Error types for rendering element trees.

use thiserror::Error;

/// Errors produced while rendering a node tree.
///
/// Rendering stops at the first error. Bytes written to the sink before the
/// failure stay written, so the sink contents are undefined when an error is
/// returned.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RenderError {
	/// Writing to the sink failed
	#[error("failed to write markup: {0}")]
	Io(#[from] std::io::Error),

	/// Formatting an attribute value failed
	#[error("failed to format attribute value")]
	Fmt(#[from] std::fmt::Error),

	/// The same attribute name was set in two different attribute kinds
	/// while rendering with [`CollisionPolicy::Reject`](crate::CollisionPolicy::Reject)
	#[error("attribute `{name}` is set by more than one attribute kind on <{tag}>")]
	AttributeCollision {
		/// Tag of the element carrying the attribute
		tag: String,
		/// Attribute name
		name: String,
	},

	/// A node wrote bytes that are not valid UTF-8 while rendering to a string
	#[error("rendered markup is not valid UTF-8: {0}")]
	InvalidUtf8(#[from] std::string::FromUtf8Error),

	/// Error raised by a user-defined node
	#[error("{0}")]
	Custom(String),
}

impl RenderError {
	/// Creates a [`RenderError::Custom`] from any message.
	pub fn custom(message: impl Into<String>) -> Self {
		Self::Custom(message.into())
	}
}

/// Result type for render operations
pub type Result<T> = std::result::Result<T, RenderError>;
