//! Error types for markup tree operations.

use thiserror::Error;

use crate::selector::SelectorError;

/// Errors raised by [`Element`](crate::Element) and
/// [`Document`](crate::Document) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
	/// A selector string could not be parsed.
	#[error("invalid selector `{selector}`: {source}")]
	InvalidSelector {
		/// The selector as given by the caller.
		selector: String,
		/// The parse failure.
		#[source]
		source: SelectorError,
	},

	/// Inserting the node would make an element its own ancestor.
	#[error("cannot insert <{child}> into <{parent}>: the child is an ancestor of the parent")]
	HierarchyRequest {
		/// Tag of the element receiving the child.
		parent: String,
		/// Tag of the element being inserted.
		child: String,
	},
}

/// Result type alias for markup tree operations.
pub type Result<T> = std::result::Result<T, DomError>;
