//! Live markup tree
//!
//! This module provides access to blitz-dom: a single-threaded element tree
//! with shared element handles, a view builder for constructing markup and a
//! CSS selector subset for locating elements.
//!
//! ## Example
//!
//! ```rust
//! use blitz::dom::{Document, Element, PageElement};
//!
//! let document = Document::new();
//! let list = Element::from(PageElement::new("ul").attr("class", "items").child(
//!     PageElement::new("li").child("first"),
//! ));
//! document.body().append_child(&list).unwrap();
//!
//! let item = document.query_selector(".items > li").unwrap().unwrap();
//! assert_eq!(item.text_content(), "first");
//! ```

// Re-export all blitz-dom functionality
pub use blitz_dom::*;
