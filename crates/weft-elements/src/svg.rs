//! SVG elements.
//!
//! Geometry attributes are floats. Presentation attributes that accept
//! units or keywords (`stroke-width`, `fill`) are strings, as are `points`,
//! `viewBox` and `stroke-dasharray`, whose entries may repeat. Animation
//! `values` is a delimited set.

define_elements! {
	/// SVG document fragment.
	container Svg => svg("svg") {
		xmlns: str = "xmlns",
		view_box: str = "viewBox",
		width: str = "width",
		height: str = "height",
		x: float = "x",
		y: float = "y",
		preserve_aspect_ratio: str = "preserveAspectRatio",
		fill: str = "fill",
		stroke: str = "stroke",
	}
	/// Group of shapes.
	container G => g("g") {
		transform: str = "transform",
		fill: str = "fill",
		stroke: str = "stroke",
		stroke_width: str = "stroke-width",
		opacity: float = "opacity",
		clip_path: str = "clip-path",
		mask: str = "mask",
	}
	/// Reusable definitions.
	container Defs => defs("defs") {}
	/// Reusable graphic template.
	container Symbol => symbol("symbol") {
		view_box: str = "viewBox",
		preserve_aspect_ratio: str = "preserveAspectRatio",
	}
	/// Reference to another element.
	container Use => r#use("use") {
		href: str = "href",
		x: float = "x",
		y: float = "y",
		width: float = "width",
		height: float = "height",
	}
	/// Accessible title.
	container Title => title("title") {}
	/// Accessible description.
	container Desc => desc("desc") {}

	/// Circle.
	container Circle => circle("circle") {
		cx: float = "cx",
		cy: float = "cy",
		r: float = "r",
		fill: str = "fill",
		stroke: str = "stroke",
		stroke_width: str = "stroke-width",
		opacity: float = "opacity",
		transform: str = "transform",
	}
	/// Ellipse.
	container Ellipse => ellipse("ellipse") {
		cx: float = "cx",
		cy: float = "cy",
		rx: float = "rx",
		ry: float = "ry",
		fill: str = "fill",
		stroke: str = "stroke",
		stroke_width: str = "stroke-width",
		transform: str = "transform",
	}
	/// Rectangle.
	container Rect => rect("rect") {
		x: float = "x",
		y: float = "y",
		width: float = "width",
		height: float = "height",
		rx: float = "rx",
		ry: float = "ry",
		fill: str = "fill",
		stroke: str = "stroke",
		stroke_width: str = "stroke-width",
		opacity: float = "opacity",
		transform: str = "transform",
	}
	/// Straight line.
	container Line => line("line") {
		x1: float = "x1",
		y1: float = "y1",
		x2: float = "x2",
		y2: float = "y2",
		stroke: str = "stroke",
		stroke_width: str = "stroke-width",
		stroke_linecap: str = "stroke-linecap",
		stroke_dasharray: str = "stroke-dasharray",
		transform: str = "transform",
	}
	/// Open shape of straight segments.
	container Polyline => polyline("polyline") {
		points: str = "points",
		fill: str = "fill",
		stroke: str = "stroke",
		stroke_width: str = "stroke-width",
		stroke_linejoin: str = "stroke-linejoin",
		transform: str = "transform",
	}
	/// Closed shape of straight segments.
	container Polygon => polygon("polygon") {
		points: str = "points",
		fill: str = "fill",
		fill_rule: str = "fill-rule",
		stroke: str = "stroke",
		stroke_width: str = "stroke-width",
		transform: str = "transform",
	}
	/// Generic shape.
	container Path => path("path") {
		d: str = "d",
		path_length: float = "pathLength",
		fill: str = "fill",
		fill_rule: str = "fill-rule",
		stroke: str = "stroke",
		stroke_width: str = "stroke-width",
		stroke_linecap: str = "stroke-linecap",
		stroke_linejoin: str = "stroke-linejoin",
		stroke_dasharray: str = "stroke-dasharray",
		transform: str = "transform",
	}

	/// Text run.
	container Text => text("text") {
		x: float = "x",
		y: float = "y",
		dx: float = "dx",
		dy: float = "dy",
		text_anchor: str = "text-anchor",
		dominant_baseline: str = "dominant-baseline",
		font_family: str = "font-family",
		font_size: str = "font-size",
		fill: str = "fill",
		transform: str = "transform",
	}
	/// Text sub-run.
	container Tspan => tspan("tspan") {
		x: float = "x",
		y: float = "y",
		dx: float = "dx",
		dy: float = "dy",
		fill: str = "fill",
	}
	/// Text laid along a path.
	container TextPath => text_path("textPath") {
		href: str = "href",
		start_offset: str = "startOffset",
	}

	/// Linear gradient.
	container LinearGradient => linear_gradient("linearGradient") {
		x1: str = "x1",
		y1: str = "y1",
		x2: str = "x2",
		y2: str = "y2",
		gradient_units: str = "gradientUnits",
		gradient_transform: str = "gradientTransform",
	}
	/// Radial gradient.
	container RadialGradient => radial_gradient("radialGradient") {
		cx: str = "cx",
		cy: str = "cy",
		r: str = "r",
		fx: str = "fx",
		fy: str = "fy",
		gradient_units: str = "gradientUnits",
	}
	/// Gradient stop.
	container Stop => stop("stop") {
		offset: str = "offset",
		stop_color: str = "stop-color",
		stop_opacity: float = "stop-opacity",
	}
	/// Clipping path.
	container ClipPath => clip_path("clipPath") {
		clip_path_units: str = "clipPathUnits",
	}
	/// Alpha mask.
	container Mask => mask("mask") {
		x: float = "x",
		y: float = "y",
		width: float = "width",
		height: float = "height",
	}
	/// Tiled fill pattern.
	container Pattern => pattern("pattern") {
		x: float = "x",
		y: float = "y",
		width: float = "width",
		height: float = "height",
		pattern_units: str = "patternUnits",
		view_box: str = "viewBox",
	}
	/// Line marker.
	container Marker => marker("marker") {
		marker_width: float = "markerWidth",
		marker_height: float = "markerHeight",
		ref_x: float = "refX",
		ref_y: float = "refY",
		orient: str = "orient",
		view_box: str = "viewBox",
	}
	/// Raster image.
	container Image => image("image") {
		href: str = "href",
		x: float = "x",
		y: float = "y",
		width: float = "width",
		height: float = "height",
		preserve_aspect_ratio: str = "preserveAspectRatio",
	}
	/// Hyperlink.
	container A => a("a") {
		href: str = "href",
		target: str = "target",
	}
	/// Foreign namespace content.
	container ForeignObject => foreign_object("foreignObject") {
		x: float = "x",
		y: float = "y",
		width: float = "width",
		height: float = "height",
	}
	/// Filter effect container.
	container Filter => filter("filter") {
		x: str = "x",
		y: str = "y",
		width: str = "width",
		height: str = "height",
		filter_units: str = "filterUnits",
	}
	/// Attribute animation.
	container Animate => animate("animate") {
		attribute_name: str = "attributeName",
		from: str = "from",
		to: str = "to",
		values: list(";") = "values",
		dur: str = "dur",
		repeat_count: str = "repeatCount",
		begin: str = "begin",
		fill: str = "fill",
	}
}
