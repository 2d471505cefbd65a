//! # Blitz Tables
//!
//! Render tabular data into an element of a live markup tree, then filter,
//! sort and reset the rendered rows without touching the rest of the tree.
//!
//! ## Crates
//!
//! - [`dom`] - in-memory element tree, view builder and selector engine
//! - [`tables`] - the [`Table`](tables::Table) component and its styling
//!   options
//!
//! ## Feature Flags
//!
//! - `tables` (default) - the table component
//!
//! ## Quick Example
//!
//! ```rust
//! use blitz::prelude::*;
//! use serde_json::json;
//!
//! let document = Document::new();
//! let container = document.create_element("table");
//! container.set_attribute("id", "users");
//! document.body().append_child(&container).unwrap();
//!
//! let mut table = Table::new(&document, "#users", TableConfig::new().bordered(true));
//! table.set_headers(["Id", "Name"]).unwrap();
//! table
//!     .set_data(vec![
//!         vec![json!(2), json!("Bob")],
//!         vec![json!(1), json!("Alice")],
//!     ])
//!     .unwrap();
//! table.sort_by_column(0, SortDirection::Ascending).unwrap();
//!
//! assert_eq!(
//!     table.tbody().unwrap().inner_html(),
//!     "<tr><td>1</td><td>Alice</td></tr><tr><td>2</td><td>Bob</td></tr>"
//! );
//! ```

pub mod dom;
#[cfg(feature = "tables")]
pub mod tables;

/// Commonly used types.
pub mod prelude {
	pub use crate::dom::{Document, Element, IntoPage, Page, PageElement};

	#[cfg(feature = "tables")]
	pub use crate::tables::{Options, SortDirection, Table, TableConfig, TableError};
}
