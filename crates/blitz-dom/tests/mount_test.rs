//! Mounting view trees into a document.

use blitz_dom::{Document, Element, Node, Page, PageElement};
use proptest::prelude::*;
use rstest::*;

#[fixture]
fn document() -> Document {
	let document = Document::new();
	let wrapper = document.create_element("div");
	wrapper.set_class_name("wrapper");
	let table = document.create_element("table");
	table.set_attribute("id", "report");
	wrapper.append_child(&table).unwrap();
	document.body().append_child(&wrapper).unwrap();
	document
}

#[rstest]
fn test_mounted_sections_render_in_call_order(document: Document) {
	let table = document.query_selector(".wrapper > table").unwrap().unwrap();

	let head = Element::from(PageElement::new("thead").child(
		PageElement::new("tr").child(PageElement::new("th").child("Name")),
	));
	let body = Element::from(PageElement::new("tbody"));
	table.append_child(&head).unwrap();
	table.append_child(&body).unwrap();

	assert_eq!(
		table.outer_html(),
		"<table id=\"report\"><thead><tr><th>Name</th></tr></thead><tbody></tbody></table>"
	);

	body.replace_children(Node::from_page(Page::Element(
		PageElement::new("tr").child(PageElement::new("td").child(Page::raw_html("<i>1</i>"))),
	)))
	.unwrap();
	assert_eq!(body.inner_html(), "<tr><td><i>1</i></td></tr>");

	assert!(head.remove());
	assert_eq!(
		table.inner_html(),
		"<tbody><tr><td><i>1</i></td></tr></tbody>"
	);
}

#[rstest]
fn test_detached_element_is_not_found(document: Document) {
	let table = document.get_element_by_id("report").unwrap();
	table.remove();
	assert!(document.query_selector("#report").unwrap().is_none());
	// The handle stays usable while detached.
	table.set_inner_html("<tr></tr>");
	assert_eq!(table.inner_html(), "<tr></tr>");
}

proptest! {
	#[test]
	fn prop_text_never_leaks_markup(text in ".*") {
		let cell = Element::from(PageElement::new("td").child(text.clone()));
		let html = cell.inner_html();
		prop_assert!(!html.contains('<'));
		prop_assert!(!html.contains('>'));
		prop_assert_eq!(cell.text_content(), text);
	}

	#[test]
	fn prop_mount_matches_view_rendering(cells in prop::collection::vec("[a-z0-9 <>&]{0,8}", 0..6)) {
		let view = PageElement::new("tr")
			.children(cells.iter().map(|c| PageElement::new("td").child(c)));
		let expected = Page::Element(view.clone()).render_to_string();
		prop_assert_eq!(Element::from(view).outer_html(), expected);
	}
}
