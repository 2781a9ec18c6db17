//! Schema macro for element wrappers.
//!
//! ```text
//! define_elements! {
//!     /// Docs for the wrapper struct
//!     container Progress => progress("progress") {
//!         value: float = "value",
//!         max: float = "max",
//!     }
//!     void Img => img("img") {
//!         src: str = "src",
//!         sizes: list(",") = "sizes",
//!     }
//! }
//! ```
//!
//! `container` elements get a constructor taking children and render a
//! closing tag. `void` elements get a constructor with no arguments and render
//! self-closing. Attribute kinds are `str`, `int`, `float`, `bool` and
//! `list(delimiter)`.

macro_rules! define_elements {
	(@element
		[$($meta:tt)*] $kind:ident $name:ident $ctor:ident $tag:literal
		{ $( $setter:ident : $ty:ident $(($delim:literal))? = $attr:literal ),* }
	) => {
		$($meta)*
		#[derive(Debug)]
		pub struct $name {
			element: ::weft_core::Element,
		}

		impl $name {
			$(
				define_elements!(@setter $setter $ty $(($delim))? $attr);
			)*

			/// Appends a child.
			pub fn child(mut self, child: impl ::weft_core::Render + 'static) -> Self {
				self.element.push_child(::std::option::Option::Some(::weft_core::node(child)));
				self
			}

			/// Appends a child slot that renders nothing when `None`.
			pub fn maybe_child(
				mut self,
				child: ::std::option::Option<::weft_core::Node>,
			) -> Self {
				self.element.push_child(child);
				self
			}

			/// Appends children in order.
			pub fn children(
				mut self,
				children: impl ::std::iter::IntoIterator<Item = ::weft_core::Node>,
			) -> Self {
				self.element.extend_children(children);
				self
			}

			/// Unwraps the generic element.
			pub fn into_element(self) -> ::weft_core::Element {
				self.element
			}
		}

		define_elements!(@ctor $kind $name $ctor $tag);

		impl $crate::GlobalAttributes for $name {
			fn element_mut(&mut self) -> &mut ::weft_core::Element {
				&mut self.element
			}
		}

		impl ::weft_core::Render for $name {
			fn render_with(
				&self,
				out: &mut dyn ::std::io::Write,
				options: &::weft_core::RenderOptions,
			) -> ::weft_core::Result<()> {
				self.element.render_with(out, options)
			}
		}

		impl ::std::ops::Deref for $name {
			type Target = ::weft_core::Element;

			fn deref(&self) -> &Self::Target {
				&self.element
			}
		}

		impl ::std::ops::DerefMut for $name {
			fn deref_mut(&mut self) -> &mut Self::Target {
				&mut self.element
			}
		}

		impl ::std::convert::From<$name> for ::weft_core::Element {
			fn from(wrapper: $name) -> Self {
				wrapper.element
			}
		}
	};

	(@ctor container $name:ident $ctor:ident $tag:literal) => {
		impl $name {
			#[doc = concat!("Creates an empty `<", $tag, ">` element.")]
			pub fn new() -> Self {
				Self {
					element: ::weft_core::Element::new($tag),
				}
			}
		}

		impl ::std::default::Default for $name {
			fn default() -> Self {
				Self::new()
			}
		}

		#[doc = concat!("Creates a `<", $tag, ">` element with `children`.")]
		pub fn $ctor(
			children: impl ::std::iter::IntoIterator<Item = ::weft_core::Node>,
		) -> $name {
			$name::new().children(children)
		}
	};

	(@ctor void $name:ident $ctor:ident $tag:literal) => {
		impl $name {
			#[doc = concat!("Creates a self-closing `<", $tag, ">` element.")]
			pub fn new() -> Self {
				Self {
					element: ::weft_core::Element::new_self_closing($tag),
				}
			}
		}

		impl ::std::default::Default for $name {
			fn default() -> Self {
				Self::new()
			}
		}

		#[doc = concat!("Creates a self-closing `<", $tag, ">` element.")]
		pub fn $ctor() -> $name {
			$name::new()
		}
	};

	(@setter $setter:ident str $attr:literal) => {
		#[doc = concat!("Sets the `", $attr, "` attribute.")]
		pub fn $setter(mut self, value: impl ::std::convert::Into<::std::string::String>) -> Self {
			self.element
				.strings
				.set(::std::borrow::Cow::Borrowed($attr), value.into());
			self
		}
	};

	(@setter $setter:ident int $attr:literal) => {
		#[doc = concat!("Sets the `", $attr, "` attribute.")]
		pub fn $setter(mut self, value: i64) -> Self {
			self.element
				.ints
				.set(::std::borrow::Cow::Borrowed($attr), value);
			self
		}
	};

	(@setter $setter:ident float $attr:literal) => {
		#[doc = concat!("Sets the `", $attr, "` attribute.")]
		pub fn $setter(mut self, value: f64) -> Self {
			self.element
				.floats
				.set(::std::borrow::Cow::Borrowed($attr), value);
			self
		}
	};

	(@setter $setter:ident bool $attr:literal) => {
		#[doc = concat!("Sets or clears the `", $attr, "` attribute.")]
		pub fn $setter(mut self, value: bool) -> Self {
			self.element
				.bools
				.set(::std::borrow::Cow::Borrowed($attr), value);
			self
		}
	};

	(@setter $setter:ident list ($delim:literal) $attr:literal) => {
		#[doc = concat!("Adds values to the `", $attr, "` attribute.")]
		pub fn $setter<T: ::std::string::ToString>(
			mut self,
			values: impl ::std::iter::IntoIterator<Item = T>,
		) -> Self {
			self.element = self.element.delimited($attr, $delim, values);
			self
		}

		::paste::paste! {
			/// Removes values from the attribute.
			pub fn [<remove_ $setter>]<T: ::std::string::ToString>(
				mut self,
				values: impl ::std::iter::IntoIterator<Item = T>,
			) -> Self {
				self.element = self.element.remove_delimited($attr, values);
				self
			}
		}
	};

	(
		$(
			$(#[$meta:meta])*
			$kind:ident $name:ident => $ctor:ident($tag:literal) {
				$( $setter:ident : $ty:ident $(($delim:literal))? = $attr:literal ),* $(,)?
			}
		)*
	) => {
		$(
			define_elements!(@element
				[$(#[$meta])*] $kind $name $ctor $tag
				{ $( $setter : $ty $(($delim))? = $attr ),* }
			);
		)*
	};
}
