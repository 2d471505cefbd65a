//! Table rendering for Blitz Tables
//!
//! This crate renders tabular data into an existing container element and
//! re-renders the body on filter and sort operations.
//!
//! # Features
//!
//! - **Fragments**: header, body and footer sections appended in call order
//! - **Filtering**: predicate-based views over the stored dataset
//! - **Sorting**: comparator or column based, applied to the stored dataset
//! - **Reset / Destroy**: re-render from stored data, detach every fragment
//! - **Styling**: class names derived from a [`TableConfig`] and written to
//!   the container by [`Options`]
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[Table] --> B[Container Element]
//!     A --> C[Options]
//!     C --> B
//!     A --> D[thead]
//!     A --> E[tbody]
//!     A --> F[tfoot]
//!     D --> B
//!     E --> B
//!     F --> B
//! ```
//!
//! # Example
//!
//! ```rust
//! use blitz_dom::Document;
//! use blitz_table::{Table, TableConfig};
//! use serde_json::json;
//!
//! let document = Document::new();
//! let container = document.create_element("table");
//! container.set_attribute("id", "scores");
//! document.body().append_child(&container).unwrap();
//!
//! let mut table = Table::new(&document, "#scores", TableConfig::new().striped(true));
//! table.set_headers(["Player", "Score"]).unwrap();
//! table
//!     .set_data(vec![vec![json!("ada"), json!(3)], vec![json!("bob"), json!(5)]])
//!     .unwrap();
//!
//! table.filter(|row| row[1].as_i64().is_some_and(|score| score > 4)).unwrap();
//! assert_eq!(table.tbody().unwrap().child_count(), 1);
//!
//! table.reset().unwrap();
//! assert_eq!(table.tbody().unwrap().child_count(), 2);
//! assert!(container.has_class("table-striped"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod cell;
pub mod config;
pub mod error;
pub mod options;
mod render;
pub mod sorting;
pub mod table;

// Re-exports for convenience
pub use cell::{Cell, Row, cell_text, compare_cells};
pub use config::TableConfig;
pub use error::{Result, TableError};
pub use options::Options;
pub use sorting::SortDirection;
pub use table::Table;
