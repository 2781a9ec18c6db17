//! HTML elements.
//!
//! Void elements (`br`, `img`, `input`, ...) are self-closing and their
//! constructors take no children. `<map>` is exposed as [`image_map`] and
//! `<option>` as [`SelectOption`] to stay clear of the composition helpers
//! and the prelude.

define_elements! {
	// ------------------------------------------------------------------
	// Document and metadata
	// ------------------------------------------------------------------

	/// The document root.
	container Html => html("html") {
		xmlns: str = "xmlns",
	}
	/// Document metadata container.
	container Head => head("head") {}
	/// The document title.
	container Title => title("title") {}
	/// Base URL for relative links.
	void Base => base("base") {
		href: str = "href",
		target: str = "target",
	}
	/// A link to an external resource.
	void Link => link("link") {
		href: str = "href",
		rel: list(" ") = "rel",
		r#type: str = "type",
		media: str = "media",
		sizes: list(" ") = "sizes",
		r#as: str = "as",
		crossorigin: str = "crossorigin",
		integrity: str = "integrity",
		hreflang: str = "hreflang",
		referrerpolicy: str = "referrerpolicy",
	}
	/// Document-level metadata.
	void Meta => meta("meta") {
		name: str = "name",
		content: str = "content",
		charset: str = "charset",
		http_equiv: str = "http-equiv",
		property: str = "property",
	}
	/// Embedded style sheet.
	container Style => style("style") {
		media: str = "media",
		nonce: str = "nonce",
	}
	/// Script content or reference.
	container Script => script("script") {
		src: str = "src",
		r#type: str = "type",
		r#async: bool = "async",
		defer: bool = "defer",
		nomodule: bool = "nomodule",
		crossorigin: str = "crossorigin",
		integrity: str = "integrity",
		nonce: str = "nonce",
		referrerpolicy: str = "referrerpolicy",
	}
	/// Fallback content when scripting is off.
	container Noscript => noscript("noscript") {}
	/// Inert template content.
	container Template => template("template") {}
	/// The document body.
	container Body => body("body") {}

	// ------------------------------------------------------------------
	// Sectioning
	// ------------------------------------------------------------------

	/// Generic block container.
	container Div => div("div") {}
	/// Generic inline container.
	container Span => span("span") {}
	/// Page or section header.
	container Header => header("header") {}
	/// Page or section footer.
	container Footer => footer("footer") {}
	/// Dominant content of the body.
	container Main => main("main") {}
	/// Navigation links.
	container Nav => nav("nav") {}
	/// Generic document section.
	container Section => section("section") {}
	/// Self-contained composition.
	container Article => article("article") {}
	/// Tangential content.
	container Aside => aside("aside") {}
	/// Contact information.
	container Address => address("address") {}
	/// Heading level 1.
	container H1 => h1("h1") {}
	/// Heading level 2.
	container H2 => h2("h2") {}
	/// Heading level 3.
	container H3 => h3("h3") {}
	/// Heading level 4.
	container H4 => h4("h4") {}
	/// Heading level 5.
	container H5 => h5("h5") {}
	/// Heading level 6.
	container H6 => h6("h6") {}
	/// Heading group.
	container Hgroup => hgroup("hgroup") {}
	/// Search region.
	container Search => search("search") {}

	// ------------------------------------------------------------------
	// Grouping content
	// ------------------------------------------------------------------

	/// Paragraph.
	container P => p("p") {}
	/// Thematic break.
	void Hr => hr("hr") {}
	/// Preformatted text.
	container Pre => pre("pre") {}
	/// Block quotation.
	container Blockquote => blockquote("blockquote") {
		cite: str = "cite",
	}
	/// Ordered list.
	container Ol => ol("ol") {
		reversed: bool = "reversed",
		start: int = "start",
		r#type: str = "type",
	}
	/// Unordered list.
	container Ul => ul("ul") {}
	/// Menu list.
	container Menu => menu("menu") {}
	/// List item.
	container Li => li("li") {
		value: int = "value",
	}
	/// Description list.
	container Dl => dl("dl") {}
	/// Description term.
	container Dt => dt("dt") {}
	/// Description details.
	container Dd => dd("dd") {}
	/// Self-contained figure.
	container Figure => figure("figure") {}
	/// Figure caption.
	container Figcaption => figcaption("figcaption") {}

	// ------------------------------------------------------------------
	// Text-level semantics
	// ------------------------------------------------------------------

	/// Hyperlink.
	container A => a("a") {
		href: str = "href",
		target: str = "target",
		download: str = "download",
		rel: list(" ") = "rel",
		hreflang: str = "hreflang",
		r#type: str = "type",
		ping: list(" ") = "ping",
		referrerpolicy: str = "referrerpolicy",
	}
	/// Stress emphasis.
	container Em => em("em") {}
	/// Strong importance.
	container Strong => strong("strong") {}
	/// Side comment.
	container Small => small("small") {}
	/// Struck-through text.
	container S => s("s") {}
	/// Title of a work.
	container Cite => cite("cite") {}
	/// Inline quotation.
	container Q => q("q") {
		cite: str = "cite",
	}
	/// Defining instance of a term.
	container Dfn => dfn("dfn") {}
	/// Abbreviation.
	container Abbr => abbr("abbr") {}
	/// Ruby annotation.
	container Ruby => ruby("ruby") {}
	/// Ruby text.
	container Rt => rt("rt") {}
	/// Ruby fallback parenthesis.
	container Rp => rp("rp") {}
	/// Machine-readable value.
	container Data => data("data") {
		value: str = "value",
	}
	/// Date or time.
	container Time => time("time") {
		datetime: str = "datetime",
	}
	/// Code fragment.
	container Code => code("code") {}
	/// Variable.
	container Var => var("var") {}
	/// Sample output.
	container Samp => samp("samp") {}
	/// Keyboard input.
	container Kbd => kbd("kbd") {}
	/// Subscript.
	container Sub => sub("sub") {}
	/// Superscript.
	container Sup => sup("sup") {}
	/// Alternate voice.
	container I => i("i") {}
	/// Attention-drawing text.
	container B => b("b") {}
	/// Unarticulated annotation.
	container U => u("u") {}
	/// Highlighted text.
	container Mark => mark("mark") {}
	/// Bidirectional isolate.
	container Bdi => bdi("bdi") {}
	/// Bidirectional override.
	container Bdo => bdo("bdo") {}
	/// Line break.
	void Br => br("br") {}
	/// Line break opportunity.
	void Wbr => wbr("wbr") {}

	// ------------------------------------------------------------------
	// Edits
	// ------------------------------------------------------------------

	/// Inserted content.
	container Ins => ins("ins") {
		cite: str = "cite",
		datetime: str = "datetime",
	}
	/// Deleted content.
	container Del => del("del") {
		cite: str = "cite",
		datetime: str = "datetime",
	}

	// ------------------------------------------------------------------
	// Embedded content
	// ------------------------------------------------------------------

	/// Image container with alternative sources.
	container Picture => picture("picture") {}
	/// Media or image source.
	void Source => source("source") {
		src: str = "src",
		srcset: list(", ") = "srcset",
		sizes: list(", ") = "sizes",
		r#type: str = "type",
		media: str = "media",
		width: int = "width",
		height: int = "height",
	}
	/// Image.
	void Img => img("img") {
		src: str = "src",
		alt: str = "alt",
		srcset: list(", ") = "srcset",
		sizes: list(", ") = "sizes",
		width: int = "width",
		height: int = "height",
		loading: str = "loading",
		decoding: str = "decoding",
		crossorigin: str = "crossorigin",
		usemap: str = "usemap",
		ismap: bool = "ismap",
		referrerpolicy: str = "referrerpolicy",
	}
	/// Nested browsing context.
	container Iframe => iframe("iframe") {
		src: str = "src",
		srcdoc: str = "srcdoc",
		name: str = "name",
		sandbox: list(" ") = "sandbox",
		allow: str = "allow",
		allowfullscreen: bool = "allowfullscreen",
		width: int = "width",
		height: int = "height",
		loading: str = "loading",
		referrerpolicy: str = "referrerpolicy",
	}
	/// External content.
	void Embed => embed("embed") {
		src: str = "src",
		r#type: str = "type",
		width: int = "width",
		height: int = "height",
	}
	/// External resource.
	container Object => object("object") {
		data_url: str = "data",
		r#type: str = "type",
		name: str = "name",
		form: str = "form",
		width: int = "width",
		height: int = "height",
	}
	/// Video player.
	container Video => video("video") {
		src: str = "src",
		poster: str = "poster",
		preload: str = "preload",
		autoplay: bool = "autoplay",
		playsinline: bool = "playsinline",
		r#loop: bool = "loop",
		muted: bool = "muted",
		controls: bool = "controls",
		crossorigin: str = "crossorigin",
		width: int = "width",
		height: int = "height",
	}
	/// Audio player.
	container Audio => audio("audio") {
		src: str = "src",
		preload: str = "preload",
		autoplay: bool = "autoplay",
		r#loop: bool = "loop",
		muted: bool = "muted",
		controls: bool = "controls",
		crossorigin: str = "crossorigin",
	}
	/// Timed text track.
	void Track => track("track") {
		kind: str = "kind",
		src: str = "src",
		srclang: str = "srclang",
		label: str = "label",
		default_track: bool = "default",
	}
	/// Client-side image map.
	container ImageMap => image_map("map") {
		name: str = "name",
	}
	/// Image map region.
	void Area => area("area") {
		alt: str = "alt",
		coords: list(",") = "coords",
		shape: str = "shape",
		href: str = "href",
		target: str = "target",
		download: str = "download",
		rel: list(" ") = "rel",
		ping: list(" ") = "ping",
		referrerpolicy: str = "referrerpolicy",
	}
	/// Scriptable bitmap canvas.
	container Canvas => canvas("canvas") {
		width: int = "width",
		height: int = "height",
	}

	// ------------------------------------------------------------------
	// Tables
	// ------------------------------------------------------------------

	/// Table.
	container Table => table("table") {}
	/// Table caption.
	container Caption => caption("caption") {}
	/// Column group.
	container Colgroup => colgroup("colgroup") {
		span: int = "span",
	}
	/// Table column.
	void Col => col("col") {
		span: int = "span",
	}
	/// Table body.
	container Tbody => tbody("tbody") {}
	/// Table header rows.
	container Thead => thead("thead") {}
	/// Table footer rows.
	container Tfoot => tfoot("tfoot") {}
	/// Table row.
	container Tr => tr("tr") {}
	/// Table data cell.
	container Td => td("td") {
		colspan: int = "colspan",
		rowspan: int = "rowspan",
		headers: list(" ") = "headers",
	}
	/// Table header cell.
	container Th => th("th") {
		colspan: int = "colspan",
		rowspan: int = "rowspan",
		headers: list(" ") = "headers",
		scope: str = "scope",
		abbr: str = "abbr",
	}

	// ------------------------------------------------------------------
	// Forms
	// ------------------------------------------------------------------

	/// Form.
	container Form => form("form") {
		action: str = "action",
		method: str = "method",
		enctype: str = "enctype",
		accept_charset: list(" ") = "accept-charset",
		autocomplete: str = "autocomplete",
		name: str = "name",
		novalidate: bool = "novalidate",
		target: str = "target",
		rel: list(" ") = "rel",
	}
	/// Form control caption.
	container Label => label("label") {
		r#for: str = "for",
	}
	/// Form control.
	void Input => input("input") {
		r#type: str = "type",
		name: str = "name",
		value: str = "value",
		placeholder: str = "placeholder",
		accept: list(",") = "accept",
		alt: str = "alt",
		autocomplete: str = "autocomplete",
		autofocus: bool = "autofocus",
		checked: bool = "checked",
		dirname: str = "dirname",
		disabled: bool = "disabled",
		form: str = "form",
		list: str = "list",
		max: str = "max",
		maxlength: int = "maxlength",
		min: str = "min",
		minlength: int = "minlength",
		multiple: bool = "multiple",
		pattern: str = "pattern",
		readonly: bool = "readonly",
		required: bool = "required",
		size: int = "size",
		src: str = "src",
		step: str = "step",
		width: int = "width",
		height: int = "height",
	}
	/// Button.
	container Button => button("button") {
		r#type: str = "type",
		name: str = "name",
		value: str = "value",
		disabled: bool = "disabled",
		form: str = "form",
		formaction: str = "formaction",
		formmethod: str = "formmethod",
		formnovalidate: bool = "formnovalidate",
		formtarget: str = "formtarget",
		popovertarget: str = "popovertarget",
		popovertargetaction: str = "popovertargetaction",
		autofocus: bool = "autofocus",
	}
	/// Selection control.
	container Select => select("select") {
		name: str = "name",
		autocomplete: str = "autocomplete",
		disabled: bool = "disabled",
		form: str = "form",
		multiple: bool = "multiple",
		required: bool = "required",
		size: int = "size",
	}
	/// Predefined options for other controls.
	container Datalist => datalist("datalist") {}
	/// Option group.
	container Optgroup => optgroup("optgroup") {
		label: str = "label",
		disabled: bool = "disabled",
	}
	/// An `<option>` in a select or datalist.
	container SelectOption => option("option") {
		value: str = "value",
		label: str = "label",
		disabled: bool = "disabled",
		selected: bool = "selected",
	}
	/// Multi-line text control.
	container Textarea => textarea("textarea") {
		name: str = "name",
		placeholder: str = "placeholder",
		rows: int = "rows",
		cols: int = "cols",
		wrap: str = "wrap",
		maxlength: int = "maxlength",
		minlength: int = "minlength",
		autocomplete: str = "autocomplete",
		autofocus: bool = "autofocus",
		disabled: bool = "disabled",
		readonly: bool = "readonly",
		required: bool = "required",
		form: str = "form",
	}
	/// Calculation result.
	container Output => output("output") {
		r#for: list(" ") = "for",
		name: str = "name",
		form: str = "form",
	}
	/// Task completion progress.
	container Progress => progress("progress") {
		value: float = "value",
		max: float = "max",
	}
	/// Scalar measurement within a known range.
	container Meter => meter("meter") {
		value: float = "value",
		min: float = "min",
		max: float = "max",
		low: float = "low",
		high: float = "high",
		optimum: float = "optimum",
	}
	/// Group of form controls.
	container Fieldset => fieldset("fieldset") {
		name: str = "name",
		disabled: bool = "disabled",
		form: str = "form",
	}
	/// Fieldset caption.
	container Legend => legend("legend") {}

	// ------------------------------------------------------------------
	// Interactive
	// ------------------------------------------------------------------

	/// Disclosure widget.
	container Details => details("details") {
		open: bool = "open",
		name: str = "name",
	}
	/// Disclosure summary.
	container Summary => summary("summary") {}
	/// Dialog box.
	container Dialog => dialog("dialog") {
		open: bool = "open",
	}
	/// Custom element slot.
	container Slot => slot("slot") {
		name: str = "name",
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::GlobalAttributes;
	use rstest::rstest;
	use weft_core::{Element, Render, nodes, text};

	#[rstest]
	fn test_progress_float_attributes() {
		let el = progress([]).value(0.5).max(1.0);
		assert_eq!(
			el.render_to_string().unwrap(),
			r#"<progress value="0.5" max="1"></progress>"#
		);
	}

	#[rstest]
	fn test_void_elements_self_close() {
		assert_eq!(br().render_to_string().unwrap(), "<br >");
		assert_eq!(
			img().src("a.png").alt("A").render_to_string().unwrap(),
			r#"<img src="a.png" alt="A" >"#
		);
	}

	#[rstest]
	fn test_input_mixes_kinds_in_merge_order() {
		let el = input()
			.required(true)
			.r#type("text")
			.maxlength(20)
			.name("q");
		assert_eq!(
			el.render_to_string().unwrap(),
			r#"<input maxlength="20" type="text" name="q" required >"#
		);
	}

	#[rstest]
	fn test_list_attribute_add_and_remove() {
		let el = a([])
			.href("/x")
			.rel(["noopener", "noreferrer", "nofollow"])
			.remove_rel(["noreferrer"]);
		assert_eq!(
			el.render_to_string().unwrap(),
			r#"<a href="/x" rel="noopener nofollow"></a>"#
		);
	}

	#[rstest]
	fn test_constructor_takes_children() {
		let el = ul(nodes![li(nodes![text("one")]), li(nodes!["two"])]);
		assert_eq!(
			el.render_to_string().unwrap(),
			"<ul><li>one</li><li>two</li></ul>"
		);
	}

	#[rstest]
	fn test_select_with_options() {
		let el = select(nodes![
			option(nodes!["A"]).value("a"),
			option(nodes!["B"]).value("b").selected(true),
		])
		.name("choice");
		assert_eq!(
			el.render_to_string().unwrap(),
			r#"<select name="choice"><option value="a">A</option><option value="b" selected>B</option></select>"#
		);
	}

	#[rstest]
	fn test_hyphenated_attribute_names() {
		let el = meta().http_equiv("refresh").content("5");
		assert_eq!(
			el.render_to_string().unwrap(),
			r#"<meta http-equiv="refresh" content="5" >"#
		);
	}

	#[rstest]
	fn test_map_element_tag() {
		assert_eq!(
			image_map([]).name("m").render_to_string().unwrap(),
			r#"<map name="m"></map>"#
		);
	}

	#[rstest]
	fn test_object_data_url_does_not_clash_with_data_attributes() {
		let el = object([]).data_url("movie.swf").data("id", "1");
		assert_eq!(
			el.render_to_string().unwrap(),
			r#"<object data="movie.swf" data-id="1"></object>"#
		);
	}

	#[rstest]
	fn test_wrapper_converts_into_element() {
		let el: Element = div([]).id("x").into();
		assert_eq!(el.tag_name(), "div");
		assert_eq!(el.strings.get("id").map(String::as_str), Some("x"));
	}

	#[rstest]
	fn test_wrapper_derefs_to_element() {
		let mut el = span(nodes!["x"]);
		assert_eq!(el.tag_name(), "span");
		assert_eq!(el.child_nodes().len(), 1);
		el.ints.set("tabindex".into(), 2);
		assert_eq!(
			el.render_to_string().unwrap(),
			r#"<span tabindex="2">x</span>"#
		);
	}

	#[rstest]
	#[case(true, "<details open></details>")]
	#[case(false, "<details></details>")]
	fn test_bool_setter(#[case] open: bool, #[case] expected: &str) {
		assert_eq!(
			details([]).open(open).render_to_string().unwrap(),
			expected
		);
	}
}
