use blitz::prelude::*;
use rstest::*;
use serde_json::json;

#[fixture]
fn document() -> Document {
	let document = Document::new();
	let container = Element::from(PageElement::new("table").attr("id", "orders"));
	document.body().append_child(&container).unwrap();
	document
}

#[rstest]
fn test_table_through_prelude(document: Document) {
	let mut table = Table::new(
		&document,
		"body > #orders",
		TableConfig::new().kind("dark").responsive(true),
	);
	table.set_headers(["Item", "Qty"]).unwrap();
	table
		.set_data(vec![vec![json!("pen"), json!(2)], vec![json!("ink"), json!(1)]])
		.unwrap();
	table.set_footer([json!("total"), json!(3)]).unwrap();
	table.sort_by_column(1, SortDirection::Descending.toggle()).unwrap();

	assert_eq!(
		document.render_to_string(),
		"<html><head></head><body>\
		 <table id=\"orders\" class=\"table table-dark    table-responsive \">\
		 <thead><tr><th>Item</th><th>Qty</th></tr></thead>\
		 <tbody><tr><td>ink</td><td>1</td></tr><tr><td>pen</td><td>2</td></tr></tbody>\
		 <tfoot><tr><td>total</td><td>3</td></tr></tfoot>\
		 </table></body></html>"
	);

	table.destroy();
	assert_eq!(
		document.get_element_by_id("orders").unwrap().inner_html(),
		""
	);
}

#[rstest]
fn test_missing_table_is_reported(document: Document) {
	let err = Table::try_new(&document, "#invoices", TableConfig::new()).unwrap_err();
	assert!(matches!(err, TableError::ContainerNotFound { ref selector } if selector == "#invoices"));
}
