//! CSS selectors over the live tree.
//!
//! Parsing and matching are done by [`scraper`]. An element tree is mirrored
//! into a scraper document (tags and attributes only) and the selector is run
//! against the mirror, so the whole selector grammar scraper understands is
//! available: combinators, attribute operators, `:not()`, `:first-child` and
//! so on. Text and markup nodes are not mirrored.
//!
//! ```rust
//! use blitz_dom::{Element, Selector};
//!
//! let selector: Selector = "table.striped#users".parse().unwrap();
//! let table = Element::new("table");
//! table.set_attribute("id", "users");
//! table.set_class_name("table striped");
//! assert!(selector.matches(&table));
//! ```

use std::fmt;
use std::str::FromStr;

use html5ever::tendril::StrTendril;
use html5ever::{Attribute, LocalName, Namespace, QualName};
use scraper::{ElementRef, Html, node};
use thiserror::Error;

use crate::document::Element;

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Errors produced while parsing a selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
	/// The selector contains nothing but whitespace.
	#[error("empty selector")]
	Empty,

	/// The selector is not valid CSS.
	#[error("{message}")]
	Syntax {
		/// Parser diagnostic.
		message: String,
	},
}

/// Which elements of a tree a selector is tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scope {
	/// Only the scope element itself.
	Itself,
	/// Strict descendants of the scope element.
	Descendants,
	/// The scope element and its descendants.
	Subtree,
}

/// A parsed selector list.
#[derive(Clone)]
pub struct Selector {
	source: String,
	inner: scraper::Selector,
}

impl Selector {
	/// Parses a selector list.
	pub fn parse(input: &str) -> Result<Self, SelectorError> {
		if input.trim().is_empty() {
			return Err(SelectorError::Empty);
		}
		let inner = scraper::Selector::parse(input).map_err(|err| SelectorError::Syntax {
			message: err.to_string(),
		})?;
		Ok(Self {
			source: input.to_string(),
			inner,
		})
	}

	/// Returns the selector text as given.
	pub fn as_str(&self) -> &str {
		&self.source
	}

	/// Returns whether `el` matches any selector of the list.
	///
	/// Ancestors are taken into account for as long as they are alive.
	pub fn matches(&self, el: &Element) -> bool {
		!self.select(el, Scope::Itself).is_empty()
	}

	/// Returns the elements in `scope` that match, in document order.
	pub(crate) fn select(&self, scope: &Element, which: Scope) -> Vec<Element> {
		let mut root = scope.clone();
		while let Some(parent) = root.parent() {
			root = parent;
		}

		let mut mirror = Html::new_fragment();
		let mut candidates = Vec::new();
		let mut stack = vec![(root, mirror.tree.root().id(), false)];
		while let Some((el, parent_id, parent_in_scope)) = stack.pop() {
			let Some(mut parent) = mirror.tree.get_mut(parent_id) else {
				continue;
			};
			let id = parent.append(mirror_node(&el)).id();

			let is_scope = el == *scope;
			let selected = match which {
				Scope::Itself => is_scope,
				Scope::Descendants => parent_in_scope,
				Scope::Subtree => is_scope || parent_in_scope,
			};
			if selected {
				candidates.push((id, el.clone()));
			}
			let in_scope = is_scope || parent_in_scope;
			stack.extend(
				el.child_elements()
					.into_iter()
					.rev()
					.map(|child| (child, id, in_scope)),
			);
		}

		candidates
			.into_iter()
			.filter(|(id, _)| {
				mirror
					.tree
					.get(*id)
					.and_then(ElementRef::wrap)
					.is_some_and(|mirrored| self.inner.matches(&mirrored))
			})
			.map(|(_, el)| el)
			.collect()
	}
}

fn mirror_node(el: &Element) -> node::Node {
	let data = el.data();
	let name = QualName::new(
		None,
		Namespace::from(HTML_NAMESPACE),
		LocalName::from(data.tag.as_str()),
	);
	let attrs = data
		.attrs
		.iter()
		.map(|(name, value)| Attribute {
			name: QualName::new(
				None,
				Namespace::from(""),
				LocalName::from(name.to_ascii_lowercase().as_str()),
			),
			value: StrTendril::from_slice(value),
		})
		.collect();
	node::Node::Element(node::Element::new(name, attrs))
}

impl fmt::Debug for Selector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Selector").field(&self.source).finish()
	}
}

impl FromStr for Selector {
	type Err = SelectorError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn tree() -> (Element, Element, Element) {
		let section = Element::new("section");
		section.set_class_name("content wide");
		let table = Element::new("table");
		table.set_attribute("id", "users");
		table.set_attribute("data-kind", "people list");
		let body = Element::new("tbody");
		section.append_child(&table).unwrap();
		table.append_child(&body).unwrap();
		(section, table, body)
	}

	#[rstest]
	#[case("table")]
	#[case("TABLE")]
	#[case("*")]
	#[case("#users")]
	#[case("table#users")]
	#[case("[data-kind]")]
	#[case("[data-kind=\"people list\"]")]
	#[case("[data-kind^=people]")]
	#[case(".content table")]
	#[case("section > table")]
	#[case("div, #users")]
	#[case("table:not(.striped)")]
	fn test_matches_table(#[case] selector: &str) {
		let (_section, table, _body) = tree();
		let parsed = Selector::parse(selector).unwrap();
		assert!(parsed.matches(&table), "{selector} should match");
	}

	#[rstest]
	#[case("div")]
	#[case("#other")]
	#[case(".content")]
	#[case("[data-kind=people]")]
	#[case("tbody table")]
	#[case("section > tbody")]
	fn test_rejects(#[case] selector: &str) {
		let (_section, table, body) = tree();
		let parsed = Selector::parse(selector).unwrap();
		if selector.ends_with("tbody") {
			assert!(!parsed.matches(&body));
		} else {
			assert!(!parsed.matches(&table));
		}
	}

	#[rstest]
	fn test_dropped_ancestors_are_not_matched() {
		let (section, table, _body) = tree();
		let parsed = Selector::parse("section > table").unwrap();
		assert!(parsed.matches(&table));

		drop(section);
		assert!(table.parent().is_none());
		assert!(!parsed.matches(&table));
	}

	#[rstest]
	fn test_descendant_skips_levels() {
		let (section, _table, body) = tree();
		assert!(Selector::parse(".wide tbody").unwrap().matches(&body));
		assert!(!Selector::parse(".wide tbody").unwrap().matches(&section));
	}

	#[rstest]
	fn test_select_scopes() {
		let (section, table, body) = tree();
		let any = Selector::parse("*").unwrap();
		assert_eq!(any.select(&table, Scope::Itself), vec![table.clone()]);
		assert_eq!(any.select(&table, Scope::Descendants), vec![body.clone()]);
		assert_eq!(
			any.select(&section, Scope::Subtree),
			vec![section.clone(), table, body]
		);
	}

	#[rstest]
	#[case("")]
	#[case("   ")]
	fn test_empty_selector(#[case] selector: &str) {
		assert_eq!(Selector::parse(selector).unwrap_err(), SelectorError::Empty);
	}

	#[rstest]
	#[case("#")]
	#[case("table >")]
	#[case("table)")]
	#[case("..a")]
	fn test_syntax_errors(#[case] selector: &str) {
		let err = Selector::parse(selector).unwrap_err();
		assert!(matches!(err, SelectorError::Syntax { .. }), "{selector}: {err:?}");
	}

	#[rstest]
	fn test_from_str_keeps_source() {
		let selector: Selector = " #users ".parse().unwrap();
		assert_eq!(selector.as_str(), " #users ");
	}
}
