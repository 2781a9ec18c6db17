//! Integration tests for generated element wrappers
//!
//! Covers:
//! 1. Full documents mixing HTML, SVG and MathML
//! 2. Global attributes on generated wrappers
//! 3. Lazy and conditional children inside wrappers
//! 4. Property: generated setters follow the attribute merge order

use proptest::prelude::*;
use rstest::rstest;
use weft_core::{
	CollisionPolicy, Element, Render, RenderError, RenderOptions, lazy_either, map, nodes, text,
	when,
};
use weft_elements::{GlobalAttributes, custom, custom_void, html, mathml, svg};

// ============================================================================
// Documents
// ============================================================================

#[rstest]
fn test_full_document() {
	let rows = [("Ada", 36), ("Linus", 28)];
	let doc = html::html(nodes![
		html::head(nodes![
			html::meta().charset("utf-8"),
			html::title(nodes!["Report"]),
		]),
		html::body(nodes![
			html::h1(nodes!["People & ages"]).id("top"),
			html::table(nodes![html::tbody(nodes![map(rows, |(name, age)| {
				html::tr(nodes![
					html::td(nodes![name]),
					html::td(nodes![age.to_string()]).colspan(1),
				])
			})])]),
		]),
	])
	.lang("en");

	assert_eq!(
		doc.render_to_string().unwrap(),
		concat!(
			r#"<html lang="en">"#,
			r#"<head><meta charset="utf-8" ><title>Report</title></head>"#,
			r#"<body><h1 id="top">People &amp; ages</h1>"#,
			"<table><tbody>",
			r#"<tr><td>Ada</td><td colspan="1">36</td></tr>"#,
			r#"<tr><td>Linus</td><td colspan="1">28</td></tr>"#,
			"</tbody></table></body></html>"
		)
	);
}

#[rstest]
fn test_mixed_namespaces() {
	let figure = html::figure(nodes![
		svg::svg(nodes![
			svg::line([]).x1(0.0).y1(0.0).x2(10.0).y2(10.0).stroke("black"),
		])
		.width("10")
		.height("10"),
		html::figcaption(nodes![mathml::math(nodes![mathml::msup(nodes![
			mathml::mi(nodes!["e"]),
			mathml::mi(nodes!["x"]),
		])])]),
	]);

	assert_eq!(
		figure.render_to_string().unwrap(),
		concat!(
			"<figure>",
			r#"<svg width="10" height="10">"#,
			r#"<line x1="0" y1="0" x2="10" y2="10" stroke="black"></line>"#,
			"</svg>",
			"<figcaption><math><msup><mi>e</mi><mi>x</mi></msup></math></figcaption>",
			"</figure>"
		)
	);
}

#[rstest]
fn test_custom_elements() {
	let el = custom("x-card", nodes![custom_void("x-icon").attr("name", "star")])
		.class(["card"]);
	assert_eq!(
		el.render_to_string().unwrap(),
		r#"<x-card class="card"><x-icon name="star" ></x-card>"#
	);
}

// ============================================================================
// Global attributes
// ============================================================================

#[rstest]
fn test_global_attributes_on_wrappers() {
	let el = html::button(nodes!["Save"])
		.r#type("submit")
		.aria("pressed", "false")
		.tabindex(1)
		.class(["btn", "primary"])
		.style("margin", "0")
		.disabled(true);
	assert_eq!(
		el.render_to_string().unwrap(),
		concat!(
			r#"<button tabindex="1" type="submit" class="btn primary" style="margin:0""#,
			r#" aria-pressed="false" disabled>Save</button>"#
		)
	);
}

#[rstest]
fn test_attrs_pairs_on_wrapper() {
	let el = html::input().attrs(&["type", "email", "name", "mail"]);
	assert_eq!(
		el.render_to_string().unwrap(),
		r#"<input type="email" name="mail" >"#
	);
}

#[rstest]
fn test_collision_between_setter_and_custom_data() {
	let el = html::div([]).id("a").data("x", "1").attrs(&["id", "b"]);
	assert_eq!(el.render_to_string().unwrap(), r#"<div id="b" data-x="1"></div>"#);

	let colliding = html::div([]).id("a").prefixed("", "id", "c");
	let err = colliding
		.render_to_string_with(&RenderOptions::new().collision_policy(CollisionPolicy::Reject))
		.unwrap_err();
	assert!(matches!(err, RenderError::AttributeCollision { .. }));
}

// ============================================================================
// Children
// ============================================================================

#[rstest]
#[case(true, "<p><b>admin</b></p>")]
#[case(false, "<p><i>guest</i></p>")]
fn test_lazy_either_child(#[case] admin: bool, #[case] expected: &str) {
	let el = html::p([]).child(lazy_either(
		admin,
		|| html::b(nodes!["admin"]),
		|| html::i(nodes!["guest"]),
	));
	assert_eq!(el.render_to_string().unwrap(), expected);
}

#[rstest]
fn test_when_and_maybe_child() {
	let el = html::ul([])
		.child(when(false, nodes![html::li(nodes!["hidden"])]))
		.maybe_child(None)
		.child(html::li(nodes![text("shown")]));
	assert_eq!(el.render_to_string().unwrap(), "<ul><li>shown</li></ul>");
}

#[rstest]
fn test_void_wrapper_ignores_children() {
	let el = html::img().src("a.png").child("ignored");
	assert_eq!(el.render_to_string().unwrap(), r#"<img src="a.png" >"#);
}

#[rstest]
fn test_wrapper_into_element_keeps_attributes() {
	let el: Element = html::progress([]).value(2.0).into_element();
	assert_eq!(el.floats.get("value"), Some(&2.0));
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
	#![proptest_config(ProptestConfig::with_cases(50))]

	/// Property: kind order wins over call order for generated setters
	#[rstest]
	fn test_meter_attribute_order(
		value in -1.0e6f64..1.0e6,
		name in "[a-z]{1,8}",
		hide in any::<bool>(),
	) {
		let el = html::meter([]).hidden(hide).title(name.clone()).value(value);
		let bare = if hide { " hidden" } else { "" };
		prop_assert_eq!(
			el.render_to_string().unwrap(),
			format!(r#"<meter value="{value}" title="{name}"{bare}></meter>"#)
		);
	}

	/// Property: setting a setter twice keeps one attribute with the last value
	#[rstest]
	fn test_setter_overwrite(first in "[a-z]{1,8}", second in "[a-z]{1,8}") {
		let el = html::a([]).href(first).target("_blank").href(second.clone());
		prop_assert_eq!(
			el.render_to_string().unwrap(),
			format!(r#"<a href="{second}" target="_blank"></a>"#)
		);
	}
}
