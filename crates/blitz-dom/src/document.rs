//! Live element tree.
//!
//! [`Element`] is a cheap-clone handle to a node in a shared tree. Two handles
//! compare equal only when they point at the same node, which lets several
//! owners (a table and its styling options, for instance) hold the same
//! container. The tree is single-threaded: handles are `!Send`.
//!
//! Children are owned by their parent and parents are referenced weakly. An
//! element whose ancestors have all been dropped therefore reports itself as
//! detached: [`Element::parent`] returns `None` and selectors no longer see
//! those ancestors. Keep the root of a subtree built outside a [`Document`]
//! alive for as long as its descendants are queried.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::error::{DomError, Result};
use crate::page::{Page, PageElement, html_escape, is_void_element, push_attrs};
use crate::selector::{Scope, Selector};

#[derive(Debug)]
pub(crate) struct ElementData {
	pub(crate) tag: String,
	pub(crate) attrs: Vec<(String, String)>,
	pub(crate) children: Vec<Node>,
	parent: Weak<RefCell<ElementData>>,
}

/// A handle to an element in the live tree.
///
/// The handle keeps its own element and that element's descendants alive, but
/// not its ancestors. See the [module docs](self) for what that means for
/// detached subtrees.
#[derive(Clone)]
pub struct Element(Rc<RefCell<ElementData>>);

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	/// A nested element.
	Element(Element),
	/// Text, escaped on output.
	Text(String),
	/// Trusted markup, emitted verbatim and never parsed.
	Html(String),
}

impl Node {
	/// Mounts a view tree, producing the live nodes it describes.
	///
	/// Fragments are flattened and empty views produce nothing.
	pub fn from_page(page: Page) -> Vec<Node> {
		let mut nodes = Vec::new();
		collect_nodes(page, &mut nodes);
		nodes
	}
}

fn collect_nodes(page: Page, out: &mut Vec<Node>) {
	match page {
		Page::Element(el) => out.push(Node::Element(Element::from(el))),
		Page::Text(text) => out.push(Node::Text(text.into_owned())),
		Page::RawHtml(markup) => out.push(Node::Html(markup.into_owned())),
		Page::Fragment(children) => {
			for child in children {
				collect_nodes(child, out);
			}
		}
		Page::Empty => {}
	}
}

impl From<PageElement> for Element {
	fn from(view: PageElement) -> Self {
		let (tag, attrs, children) = view.into_parts();
		let element = Element::new(tag);
		{
			let mut data = element.0.borrow_mut();
			data.attrs = attrs
				.into_iter()
				.map(|(n, v)| (n.into_owned(), v.into_owned()))
				.collect();
		}
		for child in children.into_iter().flat_map(Node::from_page) {
			element.adopt(child);
		}
		element
	}
}

impl PartialEq for Element {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}
}

impl Eq for Element {}

impl fmt::Debug for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let data = self.0.borrow();
		f.debug_struct("Element")
			.field("tag", &data.tag)
			.field("attrs", &data.attrs)
			.field("children", &data.children.len())
			.finish_non_exhaustive()
	}
}

impl Element {
	/// Creates a detached element. The tag is lower-cased.
	pub fn new(tag: impl AsRef<str>) -> Self {
		Self(Rc::new(RefCell::new(ElementData {
			tag: tag.as_ref().to_ascii_lowercase(),
			attrs: Vec::new(),
			children: Vec::new(),
			parent: Weak::new(),
		})))
	}

	pub(crate) fn data(&self) -> Ref<'_, ElementData> {
		self.0.borrow()
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> String {
		self.0.borrow().tag.clone()
	}

	/// Returns the `id` attribute, if any.
	pub fn id(&self) -> Option<String> {
		self.get_attribute("id")
	}

	/// Returns the value of an attribute.
	pub fn get_attribute(&self, name: &str) -> Option<String> {
		self.0
			.borrow()
			.attrs
			.iter()
			.find(|(n, _)| n.eq_ignore_ascii_case(name))
			.map(|(_, v)| v.clone())
	}

	/// Sets an attribute, replacing any previous value.
	pub fn set_attribute(&self, name: &str, value: &str) {
		let mut data = self.0.borrow_mut();
		match data
			.attrs
			.iter_mut()
			.find(|(n, _)| n.eq_ignore_ascii_case(name))
		{
			Some((_, v)) => *v = value.to_string(),
			None => data.attrs.push((name.to_ascii_lowercase(), value.to_string())),
		}
	}

	/// Removes an attribute. Returns whether it was present.
	pub fn remove_attribute(&self, name: &str) -> bool {
		let mut data = self.0.borrow_mut();
		let before = data.attrs.len();
		data.attrs.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
		data.attrs.len() != before
	}

	/// Returns the `class` attribute, or an empty string.
	pub fn class_name(&self) -> String {
		self.get_attribute("class").unwrap_or_default()
	}

	/// Overwrites the `class` attribute verbatim.
	pub fn set_class_name(&self, class_name: &str) {
		self.set_attribute("class", class_name);
	}

	/// Returns the whitespace-separated class tokens.
	pub fn class_list(&self) -> Vec<String> {
		self.class_name()
			.split_whitespace()
			.map(str::to_string)
			.collect()
	}

	/// Returns whether the element carries the class token.
	pub fn has_class(&self, class: &str) -> bool {
		self.0
			.borrow()
			.attrs
			.iter()
			.find(|(n, _)| n.eq_ignore_ascii_case("class"))
			.is_some_and(|(_, v)| v.split_whitespace().any(|c| c == class))
	}

	/// Returns the parent element, if attached.
	pub fn parent(&self) -> Option<Element> {
		self.0.borrow().parent.upgrade().map(Element)
	}

	/// Returns a snapshot of the child nodes.
	pub fn children(&self) -> Vec<Node> {
		self.0.borrow().children.clone()
	}

	/// Returns the child elements, skipping text and markup nodes.
	pub fn child_elements(&self) -> Vec<Element> {
		self.0
			.borrow()
			.children
			.iter()
			.filter_map(|node| match node {
				Node::Element(el) => Some(el.clone()),
				_ => None,
			})
			.collect()
	}

	/// Returns the number of child nodes.
	pub fn child_count(&self) -> usize {
		self.0.borrow().children.len()
	}

	/// Returns whether `other` is this element or one of its descendants.
	pub fn contains(&self, other: &Element) -> bool {
		let mut current = Some(other.clone());
		while let Some(el) = current {
			if el == *self {
				return true;
			}
			current = el.parent();
		}
		false
	}

	/// Appends a child element, detaching it from its previous parent first.
	///
	/// # Errors
	///
	/// Returns [`DomError::HierarchyRequest`] when `child` is this element or
	/// one of its ancestors.
	pub fn append_child(&self, child: &Element) -> Result<()> {
		if child.contains(self) {
			return Err(DomError::HierarchyRequest {
				parent: self.tag_name(),
				child: child.tag_name(),
			});
		}
		child.remove();
		child.0.borrow_mut().parent = Rc::downgrade(&self.0);
		self.0
			.borrow_mut()
			.children
			.push(Node::Element(child.clone()));
		Ok(())
	}

	/// Appends a node to an element that cannot be one of its ancestors.
	fn adopt(&self, node: Node) {
		if let Node::Element(el) = &node {
			el.0.borrow_mut().parent = Rc::downgrade(&self.0);
		}
		self.0.borrow_mut().children.push(node);
	}

	/// Appends any kind of node.
	pub fn append_node(&self, node: Node) -> Result<()> {
		match node {
			Node::Element(el) => self.append_child(&el),
			other => {
				self.0.borrow_mut().children.push(other);
				Ok(())
			}
		}
	}

	/// Detaches the element from its parent.
	///
	/// Returns `false` when the element was already detached.
	pub fn remove(&self) -> bool {
		let parent = std::mem::take(&mut self.0.borrow_mut().parent);
		let Some(parent) = parent.upgrade() else {
			return false;
		};
		parent
			.borrow_mut()
			.children
			.retain(|node| !matches!(node, Node::Element(el) if Rc::ptr_eq(&el.0, &self.0)));
		true
	}

	/// Replaces every child with `nodes`.
	///
	/// Nothing changes when one of the new nodes is an ancestor of this
	/// element.
	pub fn replace_children(&self, nodes: impl IntoIterator<Item = Node>) -> Result<()> {
		let nodes: Vec<Node> = nodes.into_iter().collect();
		if let Some(ancestor) = nodes.iter().find_map(|node| match node {
			Node::Element(el) if el.contains(self) => Some(el),
			_ => None,
		}) {
			return Err(DomError::HierarchyRequest {
				parent: self.tag_name(),
				child: ancestor.tag_name(),
			});
		}
		self.clear_children();
		for node in nodes {
			self.append_node(node)?;
		}
		Ok(())
	}

	/// Replaces every child with a single node of trusted markup.
	///
	/// The markup is stored as-is; it is not parsed into elements.
	pub fn set_inner_html(&self, markup: impl Into<String>) {
		self.clear_children();
		self.0.borrow_mut().children.push(Node::Html(markup.into()));
	}

	/// Replaces every child with a single text node.
	pub fn set_text_content(&self, text: impl Into<String>) {
		self.clear_children();
		self.0.borrow_mut().children.push(Node::Text(text.into()));
	}

	fn clear_children(&self) {
		let old = std::mem::take(&mut self.0.borrow_mut().children);
		for node in old {
			if let Node::Element(el) = node {
				el.0.borrow_mut().parent = Weak::new();
			}
		}
	}

	/// Concatenates the text and markup nodes below this element.
	pub fn text_content(&self) -> String {
		let mut output = String::new();
		self.collect_text(&mut output);
		output
	}

	fn collect_text(&self, output: &mut String) {
		for node in self.0.borrow().children.iter() {
			match node {
				Node::Element(el) => el.collect_text(output),
				Node::Text(text) | Node::Html(text) => output.push_str(text),
			}
		}
	}

	/// Serializes the children of this element.
	pub fn inner_html(&self) -> String {
		let mut output = String::new();
		self.write_children(&mut output);
		output
	}

	/// Serializes this element including its own tag.
	pub fn outer_html(&self) -> String {
		let mut output = String::new();
		self.write_html(&mut output);
		output
	}

	fn write_html(&self, output: &mut String) {
		let data = self.0.borrow();
		output.push('<');
		output.push_str(&data.tag);
		push_attrs(
			output,
			data.attrs.iter().map(|(n, v)| (n.as_str(), v.as_str())),
		);
		if is_void_element(&data.tag) {
			output.push_str(" />");
			return;
		}
		output.push('>');
		drop(data);
		self.write_children(output);
		output.push_str("</");
		output.push_str(&self.0.borrow().tag);
		output.push('>');
	}

	fn write_children(&self, output: &mut String) {
		for node in self.0.borrow().children.iter() {
			match node {
				Node::Element(el) => el.write_html(output),
				Node::Text(text) => output.push_str(&html_escape(text)),
				Node::Html(markup) => output.push_str(markup),
			}
		}
	}

	/// Returns every descendant element in document order.
	pub fn descendants(&self) -> Vec<Element> {
		let mut out = Vec::new();
		self.collect_descendants(&mut out);
		out
	}

	fn collect_descendants(&self, out: &mut Vec<Element>) {
		for child in self.child_elements() {
			out.push(child.clone());
			child.collect_descendants(out);
		}
	}

	/// Returns the first descendant matching `selector`.
	///
	/// # Errors
	///
	/// Returns [`DomError::InvalidSelector`] when the selector cannot be parsed.
	pub fn query_selector(&self, selector: &str) -> Result<Option<Element>> {
		Ok(self.query_selector_all(selector)?.into_iter().next())
	}

	/// Returns every descendant matching `selector` in document order.
	pub fn query_selector_all(&self, selector: &str) -> Result<Vec<Element>> {
		Ok(parse_selector(selector)?.select(self, Scope::Descendants))
	}
}

fn parse_selector(selector: &str) -> Result<Selector> {
	Selector::parse(selector).map_err(|source| {
		tracing::debug!(selector, error = %source, "rejected selector");
		DomError::InvalidSelector {
			selector: selector.to_string(),
			source,
		}
	})
}

/// A document: the root of a live element tree.
///
/// A fresh document holds `<html><head></head><body></body></html>`.
#[derive(Debug, Clone)]
pub struct Document {
	root: Element,
	head: Element,
	body: Element,
}

impl Default for Document {
	fn default() -> Self {
		Self::new()
	}
}

impl Document {
	/// Creates an empty document.
	pub fn new() -> Self {
		let root = Element::new("html");
		let head = Element::new("head");
		let body = Element::new("body");
		for section in [&head, &body] {
			root.adopt(Node::Element(section.clone()));
		}
		Self { root, head, body }
	}

	/// Returns the `<html>` element.
	pub fn document_element(&self) -> &Element {
		&self.root
	}

	/// Returns the `<head>` element.
	pub fn head(&self) -> &Element {
		&self.head
	}

	/// Returns the `<body>` element.
	pub fn body(&self) -> &Element {
		&self.body
	}

	/// Creates a detached element owned by the caller.
	pub fn create_element(&self, tag: &str) -> Element {
		Element::new(tag)
	}

	/// Returns the first element in document order matching `selector`,
	/// including the `<html>` element itself.
	pub fn query_selector(&self, selector: &str) -> Result<Option<Element>> {
		Ok(self.query_selector_all(selector)?.into_iter().next())
	}

	/// Returns every element in document order matching `selector`.
	pub fn query_selector_all(&self, selector: &str) -> Result<Vec<Element>> {
		Ok(parse_selector(selector)?.select(&self.root, Scope::Subtree))
	}

	/// Returns the first element whose `id` equals `id`.
	pub fn get_element_by_id(&self, id: &str) -> Option<Element> {
		std::iter::once(self.root.clone())
			.chain(self.root.descendants())
			.find(|el| el.id().as_deref() == Some(id))
	}

	/// Serializes the whole document.
	pub fn render_to_string(&self) -> String {
		self.root.outer_html()
	}
}
