//! Render-tree node types and HTML serialization.
//!
//! [`Page`] is the markup currency of the crate: cell formatters produce
//! `Page` values and a rendered table serializes through
//! [`Page::render_to_string`]. The tree is plain data — no DOM handles, no
//! event machinery — so it can be inspected, compared, and serialized by an
//! external templating layer or by the built-in serializer.

use std::borrow::Cow;

/// Escapes HTML special characters in a string.
///
/// Replaces `&`, `<`, `>`, `"`, and `'` with their entity forms. Returns a
/// borrowed reference if no escaping is needed, or an owned string if any
/// characters were escaped.
pub(crate) fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
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
	} else {
		Cow::Borrowed(s)
	}
}

/// A node in the render tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
	/// An element with attributes and children.
	Element(PageElement),
	/// A text node, HTML-escaped on serialization.
	Text(Cow<'static, str>),
	/// Pre-rendered markup, emitted verbatim.
	Raw(Cow<'static, str>),
	/// A sequence of nodes with no wrapper element.
	Fragment(Vec<Page>),
	/// Renders nothing.
	Empty,
}

/// An element node: tag, attributes, children.
#[derive(Debug, Clone, PartialEq)]
pub struct PageElement {
	tag: Cow<'static, str>,
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	children: Vec<Page>,
	is_void: bool,
}

impl PageElement {
	/// Creates a new element node.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
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

	/// Adds a child node.
	pub fn child(mut self, child: impl IntoPage) -> Self {
		self.children.push(child.into_page());
		self
	}

	/// Adds multiple child nodes.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		self.children
			.extend(children.into_iter().map(|c| c.into_page()));
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Returns the child nodes.
	pub fn child_views(&self) -> &[Page] {
		&self.children
	}

	/// Returns whether this is a void element (no closing tag).
	pub fn is_void(&self) -> bool {
		self.is_void
	}
}

impl Page {
	/// Creates an element node builder.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> PageElement {
		PageElement::new(tag)
	}

	/// Creates a text node.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a raw markup node, emitted without escaping.
	pub fn raw(markup: impl Into<Cow<'static, str>>) -> Self {
		Self::Raw(markup.into())
	}

	/// Creates a fragment node.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_page()).collect())
	}

	/// Creates an empty node.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Serializes the tree to an HTML string.
	///
	/// Text nodes are escaped, raw nodes pass through verbatim, attribute
	/// values are escaped, and void elements render self-closed.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			Page::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());
				for (name, value) in el.attrs() {
					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape(value));
					output.push('"');
				}
				if el.is_void() {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in el.child_views() {
						child.render_to_string_inner(output);
					}
					output.push_str("</");
					output.push_str(el.tag_name());
					output.push('>');
				}
			}
			Page::Text(text) => output.push_str(&html_escape(text)),
			Page::Raw(markup) => output.push_str(markup),
			Page::Fragment(children) => {
				for child in children {
					child.render_to_string_inner(output);
				}
			}
			Page::Empty => {}
		}
	}
}

/// Conversion into a [`Page`] node.
pub trait IntoPage {
	/// Converts `self` into a `Page`.
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

impl IntoPage for &'static str {
	fn into_page(self) -> Page {
		Page::Text(Cow::Borrowed(self))
	}
}

impl IntoPage for String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self))
	}
}

/// Shorthand constructors for the element tags the renderer works with.
pub mod html {
	use super::PageElement;

	/// Creates an `<a>` element.
	pub fn a() -> PageElement {
		PageElement::new("a")
	}

	/// Creates an `<i>` element.
	pub fn i() -> PageElement {
		PageElement::new("i")
	}

	/// Creates an `<input>` element.
	pub fn input() -> PageElement {
		PageElement::new("input")
	}

	/// Creates a `<table>` element.
	pub fn table() -> PageElement {
		PageElement::new("table")
	}

	/// Creates a `<thead>` element.
	pub fn thead() -> PageElement {
		PageElement::new("thead")
	}

	/// Creates a `<tr>` element.
	pub fn tr() -> PageElement {
		PageElement::new("tr")
	}

	/// Creates a `<th>` element.
	pub fn th() -> PageElement {
		PageElement::new("th")
	}

	/// Creates a `<td>` element.
	pub fn td() -> PageElement {
		PageElement::new("td")
	}
}
