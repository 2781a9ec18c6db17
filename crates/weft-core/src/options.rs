//! Render configuration.

/// How the renderer treats one attribute name set in more than one
/// attribute kind on the same element (for example `id` as a string
/// attribute and again as custom data).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
	/// Fold the entries into one: the value comes from the kind merged last,
	/// the position from the kind merged first.
	#[default]
	Merge,
	/// Fail the render with [`RenderError::AttributeCollision`](crate::RenderError::AttributeCollision).
	Reject,
}

/// Options threaded through a render call.
///
/// The defaults reproduce the plain [`Render::render`](crate::Render::render)
/// output.
///
/// # Example
///
/// ```
/// use weft_core::{CollisionPolicy, RenderOptions};
///
/// let options = RenderOptions::new().reject_collisions();
/// assert_eq!(options.collision_policy, CollisionPolicy::Reject);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
	/// Handling of attribute names shared between attribute kinds.
	pub collision_policy: CollisionPolicy,
}

impl RenderOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the collision policy.
	pub fn collision_policy(mut self, policy: CollisionPolicy) -> Self {
		self.collision_policy = policy;
		self
	}

	/// Fails the render when an attribute name appears in two attribute kinds.
	///
	/// Shortcut for `collision_policy(CollisionPolicy::Reject)`.
	pub fn reject_collisions(mut self) -> Self {
		self.collision_policy = CollisionPolicy::Reject;
		self
	}
}
