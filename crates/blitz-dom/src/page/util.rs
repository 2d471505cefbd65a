//! Escaping and element classification shared by the view and live trees.

use std::borrow::Cow;

/// Elements that never have children and render without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
	"wbr",
];

/// Escapes HTML special characters in a string.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with their entity forms. Returns a
/// borrowed reference when nothing needs escaping.
pub fn html_escape(s: &str) -> Cow<'_, str> {
	if !s.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(s);
	}
	let mut escaped = String::with_capacity(s.len() + 8);
	for c in s.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}

/// Returns whether `tag` is a void element.
pub fn is_void_element(tag: &str) -> bool {
	VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

/// Appends ` name="value"` pairs to `output`, escaping every value.
pub(crate) fn push_attrs<'a>(
	output: &mut String,
	attrs: impl IntoIterator<Item = (&'a str, &'a str)>,
) {
	for (name, value) in attrs {
		output.push(' ');
		output.push_str(name);
		output.push_str("=\"");
		output.push_str(&html_escape(value));
		output.push('"');
	}
}
