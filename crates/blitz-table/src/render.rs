//! Markup for the header, body and footer fragments.

use blitz_dom::{Element, Node, Page, PageElement, Result};

use crate::cell::{Cell, Row, cell_text};

/// Builds fragment views, interpolating values as trusted markup or as
/// escaped text.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Renderer {
	escape: bool,
}

impl Renderer {
	pub(crate) fn new(escape: bool) -> Self {
		Self { escape }
	}

	fn value(&self, text: String) -> Page {
		if self.escape {
			Page::text(text)
		} else {
			Page::raw_html(text)
		}
	}

	fn cell(&self, tag: &'static str, text: String) -> PageElement {
		PageElement::new(tag).child(self.value(text))
	}

	fn row<'a>(&self, tag: &'static str, cells: impl IntoIterator<Item = &'a Cell>) -> PageElement {
		PageElement::new("tr").children(
			cells
				.into_iter()
				.map(|cell| self.cell(tag, cell_text(cell).into_owned())),
		)
	}

	/// One `<tr>` of `<th>` cells inside `<thead>`.
	pub(crate) fn header(&self, headers: &[String]) -> Element {
		let row = PageElement::new("tr").children(
			headers
				.iter()
				.map(|header| self.cell("th", header.clone())),
		);
		Element::from(PageElement::new("thead").child(row))
	}

	/// One `<tr>` per row inside `<tbody>`.
	pub(crate) fn body<'a>(&self, rows: impl IntoIterator<Item = &'a Row>) -> Result<Element> {
		let body = Element::from(PageElement::new("tbody"));
		self.fill_body(&body, rows)?;
		Ok(body)
	}

	/// Replaces the rows of an existing `<tbody>`.
	pub(crate) fn fill_body<'a>(
		&self,
		body: &Element,
		rows: impl IntoIterator<Item = &'a Row>,
	) -> Result<()> {
		let nodes = rows
			.into_iter()
			.map(|row| Node::Element(Element::from(self.row("td", row))));
		body.replace_children(nodes)
	}

	/// A single `<tr>` of `<td>` cells inside `<tfoot>`.
	pub(crate) fn footer(&self, cells: &[Cell]) -> Element {
		Element::from(PageElement::new("tfoot").child(self.row("td", cells)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_header_wraps_cells_in_a_row() {
		let head = Renderer::new(false).header(&["Name".to_string(), "<i>Age</i>".to_string()]);
		assert_eq!(
			head.outer_html(),
			"<thead><tr><th>Name</th><th><i>Age</i></th></tr></thead>"
		);
	}

	#[rstest]
	fn test_body_rows() {
		let rows = vec![vec![json!(1), json!("a")], vec![json!(2), json!("b")]];
		let body = Renderer::new(false).body(&rows).unwrap();
		assert_eq!(
			body.outer_html(),
			"<tbody><tr><td>1</td><td>a</td></tr><tr><td>2</td><td>b</td></tr></tbody>"
		);
	}

	#[rstest]
	fn test_empty_body() {
		let body = Renderer::new(false).body(&Vec::<Row>::new()).unwrap();
		assert_eq!(body.outer_html(), "<tbody></tbody>");
	}

	#[rstest]
	fn test_fill_body_replaces_rows() {
		let renderer = Renderer::new(false);
		let body = renderer.body(&[vec![json!(1)], vec![json!(3)]]).unwrap();
		let stale = body.child_elements();

		renderer.fill_body(&body, &[vec![json!(2)]]).unwrap();
		assert_eq!(body.inner_html(), "<tr><td>2</td></tr>");
		assert!(stale.iter().all(|row| row.parent().is_none()));
	}

	#[rstest]
	fn test_footer_escaped() {
		let foot = Renderer::new(true).footer(&[json!("a & b"), json!(3)]);
		assert_eq!(
			foot.outer_html(),
			"<tfoot><tr><td>a &amp; b</td><td>3</td></tr></tfoot>"
		);
	}
}
