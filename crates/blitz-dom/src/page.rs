//! View tree for markup construction.
//!
//! A [`Page`] describes markup without creating any live nodes. It can be
//! serialized directly with [`Page::render_to_string`] or mounted into a
//! [`Document`](crate::Document) through [`Element::from`](crate::Element)
//! and [`Node::from_page`](crate::Node::from_page).
//!
//! ## Example
//!
//! ```rust
//! use blitz_dom::{IntoPage, Page, PageElement};
//!
//! let row = PageElement::new("tr")
//!     .child(PageElement::new("td").child("Alice"))
//!     .child(PageElement::new("td").child(Page::raw_html("<b>admin</b>")))
//!     .into_page();
//!
//! assert_eq!(
//!     row.render_to_string(),
//!     "<tr><td>Alice</td><td><b>admin</b></td></tr>"
//! );
//! ```

mod util;

pub use util::{html_escape, is_void_element};
pub(crate) use util::push_attrs;

use std::borrow::Cow;

/// A unified representation of renderable content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
	/// An element with attributes and children.
	Element(PageElement),
	/// A text node. Escaped on output.
	Text(Cow<'static, str>),
	/// Trusted markup emitted verbatim.
	RawHtml(Cow<'static, str>),
	/// Several views without a wrapper element.
	Fragment(Vec<Page>),
	/// Renders nothing.
	Empty,
}

/// An element in the view tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageElement {
	tag: Cow<'static, str>,
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	children: Vec<Page>,
	is_void: bool,
}

impl PageElement {
	/// Creates a new element view. The tag is lower-cased.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let mut tag = tag.into();
		if tag.bytes().any(|b| b.is_ascii_uppercase()) {
			tag = Cow::Owned(tag.to_ascii_lowercase());
		}
		let is_void = is_void_element(&tag);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
		}
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Adds a child view.
	///
	/// Children of void elements are kept but never rendered.
	pub fn child(mut self, child: impl IntoPage) -> Self {
		self.children.push(child.into_page());
		self
	}

	/// Adds multiple child views.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		self.children
			.extend(children.into_iter().map(IntoPage::into_page));
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes in insertion order.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Returns the child views.
	pub fn child_views(&self) -> &[Page] {
		&self.children
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Consumes the element and returns `(tag, attrs, children)`.
	#[allow(clippy::type_complexity)]
	pub fn into_parts(
		self,
	) -> (
		Cow<'static, str>,
		Vec<(Cow<'static, str>, Cow<'static, str>)>,
		Vec<Page>,
	) {
		(self.tag, self.attrs, self.children)
	}
}

impl Page {
	/// Creates an element view.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> PageElement {
		PageElement::new(tag)
	}

	/// Creates an escaped text view.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a view of trusted markup that is emitted without escaping.
	///
	/// The caller is responsible for the content: nothing is sanitized.
	pub fn raw_html(markup: impl Into<Cow<'static, str>>) -> Self {
		Self::RawHtml(markup.into())
	}

	/// Creates a fragment view.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		Self::Fragment(children.into_iter().map(IntoPage::into_page).collect())
	}

	/// Creates an empty view.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Renders the view to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_into(&mut output);
		output
	}

	fn render_into(&self, output: &mut String) {
		match self {
			Page::Element(el) => {
				output.push('<');
				output.push_str(&el.tag);
				push_attrs(
					output,
					el.attrs.iter().map(|(n, v)| (n.as_ref(), v.as_ref())),
				);
				if el.is_void {
					output.push_str(" />");
					return;
				}
				output.push('>');
				for child in &el.children {
					child.render_into(output);
				}
				output.push_str("</");
				output.push_str(&el.tag);
				output.push('>');
			}
			Page::Text(text) => output.push_str(&html_escape(text)),
			Page::RawHtml(markup) => output.push_str(markup),
			Page::Fragment(children) => {
				for child in children {
					child.render_into(output);
				}
			}
			Page::Empty => {}
		}
	}
}

/// Trait for types that can be converted into a [`Page`].
pub trait IntoPage {
	/// Converts self into a Page.
	fn into_page(self) -> Page;
}

impl IntoPage for Page {
	fn into_page(self) -> Page {
		self
	}
}

impl IntoPage for PageElement {
	fn into_page(self) -> Page {
		Page::Element(self)
	}
}

impl IntoPage for String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self))
	}
}

impl IntoPage for &String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self.clone()))
	}
}

impl IntoPage for &'static str {
	fn into_page(self) -> Page {
		Page::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoPage> IntoPage for Option<T> {
	fn into_page(self) -> Page {
		self.map_or(Page::Empty, IntoPage::into_page)
	}
}

impl<T: IntoPage> IntoPage for Vec<T> {
	fn into_page(self) -> Page {
		Page::fragment(self)
	}
}

impl IntoPage for () {
	fn into_page(self) -> Page {
		Page::Empty
	}
}
