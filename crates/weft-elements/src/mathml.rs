//! MathML elements.

define_elements! {
	/// MathML root.
	container Math => math("math") {
		xmlns: str = "xmlns",
		display: str = "display",
	}
	/// Horizontal group of sub-expressions.
	container Mrow => mrow("mrow") {}
	/// Identifier.
	container Mi => mi("mi") {
		mathvariant: str = "mathvariant",
	}
	/// Number.
	container Mn => mn("mn") {}
	/// Operator.
	container Mo => mo("mo") {
		form: str = "form",
		fence: bool = "fence",
		separator: bool = "separator",
		stretchy: bool = "stretchy",
		symmetric: bool = "symmetric",
		largeop: bool = "largeop",
		movablelimits: bool = "movablelimits",
		lspace: str = "lspace",
		rspace: str = "rspace",
		minsize: str = "minsize",
		maxsize: str = "maxsize",
	}
	/// String literal.
	container Ms => ms("ms") {}
	/// Text.
	container Mtext => mtext("mtext") {}
	/// Blank space.
	container Mspace => mspace("mspace") {
		width: str = "width",
		height: str = "height",
		depth: str = "depth",
	}
	/// Fraction.
	container Mfrac => mfrac("mfrac") {
		linethickness: str = "linethickness",
	}
	/// Square root.
	container Msqrt => msqrt("msqrt") {}
	/// Root with explicit index.
	container Mroot => mroot("mroot") {}
	/// Superscript.
	container Msup => msup("msup") {}
	/// Subscript.
	container Msub => msub("msub") {}
	/// Subscript and superscript.
	container Msubsup => msubsup("msubsup") {}
	/// Underscript.
	container Munder => munder("munder") {
		accentunder: bool = "accentunder",
	}
	/// Overscript.
	container Mover => mover("mover") {
		accent: bool = "accent",
	}
	/// Underscript and overscript.
	container Munderover => munderover("munderover") {
		accent: bool = "accent",
		accentunder: bool = "accentunder",
	}
	/// Prescripts and tensor indices.
	container Mmultiscripts => mmultiscripts("mmultiscripts") {}
	/// Prescript separator.
	container Mprescripts => mprescripts("mprescripts") {}
	/// Table.
	container Mtable => mtable("mtable") {}
	/// Table row.
	container Mtr => mtr("mtr") {}
	/// Table cell.
	container Mtd => mtd("mtd") {
		columnspan: int = "columnspan",
		rowspan: int = "rowspan",
	}
	/// Padded sub-expression.
	container Mpadded => mpadded("mpadded") {
		width: str = "width",
		height: str = "height",
		depth: str = "depth",
		lspace: str = "lspace",
		voffset: str = "voffset",
	}
	/// Invisible sub-expression.
	container Mphantom => mphantom("mphantom") {}
	/// Style change.
	container Mstyle => mstyle("mstyle") {
		displaystyle: bool = "displaystyle",
		scriptlevel: int = "scriptlevel",
	}
	/// Error message.
	container Merror => merror("merror") {}
	/// Semantic annotation container.
	container Semantics => semantics("semantics") {}
	/// Textual annotation.
	container Annotation => annotation("annotation") {
		encoding: str = "encoding",
	}
}
