//! Markup tree primitives for Blitz Tables
//!
//! This crate provides the substrate that tables are mounted into:
//!
//! - **View tree** ([`page`]): declarative [`Page`] / [`PageElement`] values
//!   that can be rendered to a string or mounted as live nodes
//! - **Live tree** ([`document`]): a [`Document`] of shared [`Element`]
//!   handles with identity semantics, attach/detach and inner markup
//! - **Selectors** ([`selector`]): CSS selectors, parsed and matched with
//!   `scraper`, used to locate containers
//!
//! # Example
//!
//! ```rust
//! use blitz_dom::{Document, Element, PageElement};
//!
//! let document = Document::new();
//! let container = document.create_element("table");
//! container.set_attribute("id", "users");
//! document.body().append_child(&container).unwrap();
//!
//! let row = PageElement::new("tr").child(PageElement::new("td").child("Alice"));
//! container.append_child(&Element::from(row)).unwrap();
//!
//! let found = document.query_selector("#users").unwrap().unwrap();
//! assert_eq!(found.inner_html(), "<tr><td>Alice</td></tr>");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod document;
pub mod error;
pub mod page;
pub mod selector;

// Re-exports for convenience
pub use document::{Document, Element, Node};
pub use error::{DomError, Result};
pub use page::{IntoPage, Page, PageElement};
pub use selector::{Selector, SelectorError};
