//! The table component.

use std::cmp::Ordering;

use blitz_dom::{Document, Element};

use crate::cell::{Cell, Row, compare_cells};
use crate::config::TableConfig;
use crate::error::{Result, TableError};
use crate::options::Options;
use crate::render::Renderer;
use crate::sorting::SortDirection;

/// Renders headers, rows and a footer into a container element.
///
/// ```mermaid
/// sequenceDiagram
///     participant Caller
///     participant Table
///     participant Options
///     participant Container
///     Caller->>Table: new(document, selector, config)
///     Table->>Options: new(config, container)
///     Options->>Container: class = "table ..."
///     Caller->>Table: set_headers / set_data / set_footer
///     Table->>Container: append thead / tbody / tfoot
///     Caller->>Table: filter / sort / reset
///     Table->>Container: replace tbody rows
///     Caller->>Table: destroy
///     Table->>Container: detach fragments
/// ```
///
/// # Stored dataset
///
/// [`set_data`](Self::set_data) keeps the rows it renders. [`filter`](Self::filter)
/// renders a subsequence and leaves them untouched, while [`sort`](Self::sort)
/// reorders them in place, so a later [`reset`](Self::reset) shows the sorted
/// order rather than the order the data arrived in.
///
/// # Repeated setters
///
/// `set_headers`, `set_data` and `set_footer` append a new fragment on every
/// call. Earlier fragments stay in the container; the table only tracks the
/// latest one of each kind, which is what body operations and
/// [`destroy`](Self::destroy) act on.
///
/// # Trusted content
///
/// Unless [`TableConfig::escape_cells`] is set, header, cell and footer values
/// are inserted as markup without any escaping. Only pass trusted content.
///
/// # Threading
///
/// A table shares its container through single-threaded handles and is not
/// `Send`. Callers drive one table from one place at a time.
#[cfg_attr(doc, aquamarine::aquamarine)]
#[derive(Debug)]
pub struct Table {
	selector: Option<String>,
	container: Option<Element>,
	headers: Vec<String>,
	data: Vec<Row>,
	footer: Vec<Cell>,
	thead: Option<Element>,
	tbody: Option<Element>,
	tfoot: Option<Element>,
	options: Options,
	renderer: Renderer,
}

impl Table {
	/// Locates the container and applies the configured classes to it.
	///
	/// A missing container (or a malformed selector) is logged and leaves the
	/// table without a container: later mounting operations return
	/// [`TableError::NoContainer`]. Use [`Table::try_new`] to get the failure
	/// as an error instead.
	pub fn new(document: &Document, selector: &str, config: TableConfig) -> Self {
		let container = match document.query_selector(selector) {
			Ok(Some(container)) => Some(container),
			Ok(None) => {
				tracing::error!(selector, "Table {selector} not found");
				None
			}
			Err(err) => {
				tracing::error!(selector, error = %err, "Table {selector} not found");
				None
			}
		};
		Self::build(Some(selector.to_string()), container, config)
	}

	/// Like [`Table::new`], but fails when the container cannot be located.
	pub fn try_new(document: &Document, selector: &str, config: TableConfig) -> Result<Self> {
		let container = document
			.query_selector(selector)?
			.ok_or_else(|| TableError::ContainerNotFound {
				selector: selector.to_string(),
			})?;
		Ok(Self::build(Some(selector.to_string()), Some(container), config))
	}

	/// Mounts into a container the caller already holds.
	pub fn mount(container: Element, config: TableConfig) -> Self {
		Self::build(None, Some(container), config)
	}

	fn build(selector: Option<String>, container: Option<Element>, config: TableConfig) -> Self {
		let renderer = Renderer::new(config.escape_cells);
		let options = Options::new(config, container.clone());
		Self {
			selector,
			container,
			headers: Vec::new(),
			data: Vec::new(),
			footer: Vec::new(),
			thead: None,
			tbody: None,
			tfoot: None,
			options,
			renderer,
		}
	}

	fn require_container(&self) -> Result<&Element> {
		self.container.as_ref().ok_or(TableError::NoContainer)
	}

	fn require_body(&self) -> Result<&Element> {
		self.tbody.as_ref().ok_or(TableError::BodyNotRendered)
	}

	/// Appends a header fragment with one cell per label.
	pub fn set_headers<I, S>(&mut self, headers: I) -> Result<()>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let container = self.require_container()?.clone();
		self.headers = headers.into_iter().map(Into::into).collect();
		let thead = self.renderer.header(&self.headers);
		container.append_child(&thead)?;
		tracing::debug!(columns = self.headers.len(), "mounted table header");
		self.thead = Some(thead);
		Ok(())
	}

	/// Stores `rows` as the dataset and appends a body fragment rendering them.
	pub fn set_data(&mut self, rows: Vec<Row>) -> Result<()> {
		let container = self.require_container()?.clone();
		self.data = rows;
		let tbody = self.renderer.body(&self.data)?;
		container.append_child(&tbody)?;
		tracing::debug!(rows = self.data.len(), "mounted table body");
		self.tbody = Some(tbody);
		Ok(())
	}

	/// Appends a footer fragment holding a single row.
	pub fn set_footer<I, C>(&mut self, cells: I) -> Result<()>
	where
		I: IntoIterator<Item = C>,
		C: Into<Cell>,
	{
		let container = self.require_container()?.clone();
		self.footer = cells.into_iter().map(Into::into).collect();
		let tfoot = self.renderer.footer(&self.footer);
		container.append_child(&tfoot)?;
		tracing::debug!(cells = self.footer.len(), "mounted table footer");
		self.tfoot = Some(tfoot);
		Ok(())
	}

	/// Renders only the stored rows for which `predicate` holds, in order.
	///
	/// The stored dataset is not modified.
	pub fn filter<F>(&mut self, mut predicate: F) -> Result<()>
	where
		F: FnMut(&Row) -> bool,
	{
		let tbody = self.require_body()?;
		let visible: Vec<&Row> = self.data.iter().filter(|&row| predicate(row)).collect();
		tracing::debug!(
			visible = visible.len(),
			total = self.data.len(),
			"filtered table body"
		);
		self.renderer.fill_body(tbody, visible)?;
		Ok(())
	}

	/// Sorts the stored dataset in place with `compare` and re-renders it.
	///
	/// The sort is stable. The new order persists: [`reset`](Self::reset)
	/// renders it from then on.
	pub fn sort<F>(&mut self, compare: F) -> Result<()>
	where
		F: FnMut(&Row, &Row) -> Ordering,
	{
		self.require_body()?;
		self.data.sort_by(compare);
		self.reset()
	}

	/// Sorts the stored dataset by one column using [`compare_cells`].
	///
	/// Rows without that column order before every row that has it.
	pub fn sort_by_column(&mut self, column: usize, direction: SortDirection) -> Result<()> {
		self.sort(|a, b| {
			let ordering = match (a.get(column), b.get(column)) {
				(Some(x), Some(y)) => compare_cells(x, y),
				(x, y) => x.is_some().cmp(&y.is_some()),
			};
			direction.apply(ordering)
		})
	}

	/// Renders the whole stored dataset into the body.
	pub fn reset(&mut self) -> Result<()> {
		let tbody = self.require_body()?;
		self.renderer.fill_body(tbody, &self.data)?;
		tracing::debug!(rows = self.data.len(), "reset table body");
		Ok(())
	}

	/// Detaches the header, body and footer fragments that exist.
	///
	/// The container and the table stay usable afterwards.
	pub fn destroy(&mut self) {
		let detached = [&self.thead, &self.tbody, &self.tfoot]
			.into_iter()
			.flatten()
			.filter(|fragment| fragment.remove())
			.count();
		tracing::debug!(detached, "destroyed table fragments");
	}

	/// Recomputes the class string from the current [`Options`] fields.
	pub fn update_options(&mut self) {
		self.options.update_options();
	}

	/// Returns the styling options.
	pub fn options(&self) -> &Options {
		&self.options
	}

	/// Returns the styling options for field-by-field changes.
	pub fn options_mut(&mut self) -> &mut Options {
		&mut self.options
	}

	/// Returns the selector the container was looked up with.
	pub fn selector(&self) -> Option<&str> {
		self.selector.as_deref()
	}

	/// Returns the container, or `None` when it was not found.
	pub fn container(&self) -> Option<&Element> {
		self.container.as_ref()
	}

	/// Returns the latest headers.
	pub fn headers(&self) -> &[String] {
		&self.headers
	}

	/// Returns the stored dataset.
	pub fn data(&self) -> &[Row] {
		&self.data
	}

	/// Returns the latest footer cells.
	pub fn footer(&self) -> &[Cell] {
		&self.footer
	}

	/// Returns the latest header fragment.
	pub fn thead(&self) -> Option<&Element> {
		self.thead.as_ref()
	}

	/// Returns the latest body fragment.
	pub fn tbody(&self) -> Option<&Element> {
		self.tbody.as_ref()
	}

	/// Returns the latest footer fragment.
	pub fn tfoot(&self) -> Option<&Element> {
		self.tfoot.as_ref()
	}

	/// Serializes the container and everything mounted in it.
	pub fn to_html(&self) -> Option<String> {
		self.container.as_ref().map(Element::outer_html)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};
	use serde_json::json;

	#[fixture]
	fn table() -> Table {
		Table::mount(Element::new("table"), TableConfig::new())
	}

	fn body_text(table: &Table) -> Vec<String> {
		table
			.tbody()
			.unwrap()
			.child_elements()
			.iter()
			.map(Element::text_content)
			.collect()
	}

	#[rstest]
	fn test_mount_applies_classes(table: Table) {
		let container = table.container().unwrap();
		assert!(container.has_class("table"));
		assert!(container.has_class("table-primary"));
		assert_eq!(table.selector(), None);
	}

	#[rstest]
	fn test_body_operations_need_data(mut table: Table) {
		assert!(matches!(table.reset(), Err(TableError::BodyNotRendered)));
		assert!(matches!(table.filter(|_| true), Err(TableError::BodyNotRendered)));
		assert!(matches!(
			table.sort(|a, b| compare_cells(&a[0], &b[0])),
			Err(TableError::BodyNotRendered)
		));
	}

	#[rstest]
	fn test_sort_by_column_descending(mut table: Table) {
		table
			.set_data(vec![
				vec![json!("b"), json!(2)],
				vec![json!("a"), json!(3)],
				vec![json!("c")],
			])
			.unwrap();
		table.sort_by_column(1, SortDirection::Descending).unwrap();
		assert_eq!(body_text(&table), vec!["a3", "b2", "c"]);

		table.sort_by_column(1, SortDirection::Ascending).unwrap();
		assert_eq!(body_text(&table), vec!["c", "b2", "a3"]);
	}

	#[rstest]
	fn test_destroy_without_fragments_is_noop(mut table: Table) {
		table.destroy();
		assert_eq!(table.container().unwrap().child_count(), 0);
	}

	#[rstest]
	fn test_body_ops_after_destroy_act_on_detached_body(mut table: Table) {
		table.set_data(vec![vec![json!(1)]]).unwrap();
		table.destroy();
		table.reset().unwrap();
		assert_eq!(table.container().unwrap().child_count(), 0);
		assert_eq!(body_text(&table), vec!["1"]);
	}
}
