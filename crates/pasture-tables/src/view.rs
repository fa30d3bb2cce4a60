//! Element tree for rendered tables
//!
//! A table renders into a [`View`] tree: elements with attribute lists and text
//! nodes. The tree can be serialized to HTML and queried by
//! `data-testid`, which is how hosts and tests locate cells and controls.

use std::borrow::Cow;

/// Attribute carrying the deterministic test identifier
pub const TEST_ID_ATTR: &str = "data-testid";

/// A unified representation of renderable content.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
	/// An element.
	Element(ElementView),
	/// A text node.
	Text(Cow<'static, str>),
	/// Renders nothing.
	Empty,
}

/// An element in the view tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementView {
	tag: Cow<'static, str>,
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	children: Vec<View>,
}

impl ElementView {
	/// Creates a new element view.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		Self {
			tag: tag.into(),
			attrs: Vec::new(),
			children: Vec::new(),
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

	/// Adds an attribute only when `condition` holds.
	pub fn attr_if(
		self,
		condition: bool,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		if condition {
			self.attr(name, value)
		} else {
			self
		}
	}

	/// Sets the `data-testid` attribute.
	pub fn test_id(self, id: impl Into<Cow<'static, str>>) -> Self {
		self.attr(TEST_ID_ATTR, id)
	}

	/// Adds a child view.
	pub fn child(mut self, child: impl Into<View>) -> Self {
		self.children.push(child.into());
		self
	}

	/// Adds multiple child views.
	pub fn children(mut self, children: impl IntoIterator<Item = impl Into<View>>) -> Self {
		self.children.extend(children.into_iter().map(Into::into));
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

	/// Returns the value of the first attribute named `name`.
	pub fn get_attr(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_ref())
	}

	/// Returns whether the attribute is present.
	pub fn has_attr(&self, name: &str) -> bool {
		self.get_attr(name).is_some()
	}

	/// Returns the `data-testid` of this element, if any.
	pub fn get_test_id(&self) -> Option<&str> {
		self.get_attr(TEST_ID_ATTR)
	}

	/// Returns the child views.
	pub fn child_views(&self) -> &[View] {
		&self.children
	}

	/// Concatenated text of all descendant text nodes.
	pub fn text_content(&self) -> String {
		let mut out = String::new();
		for child in &self.children {
			child.collect_text(&mut out);
		}
		out
	}
}

impl View {
	/// Creates an element view.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> ElementView {
		ElementView::new(tag)
	}

	/// Creates an empty view.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Renders the view to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			View::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				for (name, value) in el.attrs() {
					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape(value));
					output.push('"');
				}

				output.push('>');
				for child in el.child_views() {
					child.render_to_string_inner(output);
				}
				output.push_str("</");
				output.push_str(el.tag_name());
				output.push('>');
			}
			View::Text(text) => {
				output.push_str(&html_escape(text));
			}
			View::Empty => {}
		}
	}

	/// Finds the first element whose `data-testid` equals `id` (depth-first).
	pub fn find_by_test_id(&self, id: &str) -> Option<&ElementView> {
		match self {
			View::Element(el) => {
				if el.get_test_id() == Some(id) {
					return Some(el);
				}
				el.children.iter().find_map(|c| c.find_by_test_id(id))
			}
			View::Text(_) | View::Empty => None,
		}
	}

	/// Returns every `data-testid` in document order.
	pub fn test_ids(&self) -> Vec<&str> {
		let mut ids = Vec::new();
		self.collect_test_ids(&mut ids);
		ids
	}

	fn collect_test_ids<'a>(&'a self, ids: &mut Vec<&'a str>) {
		match self {
			View::Element(el) => {
				if let Some(id) = el.get_test_id() {
					ids.push(id);
				}
				for child in &el.children {
					child.collect_test_ids(ids);
				}
			}
			View::Text(_) | View::Empty => {}
		}
	}

	/// Returns true when any text node equals `text` after trimming.
	pub fn contains_text(&self, text: &str) -> bool {
		match self {
			View::Element(el) => el.children.iter().any(|c| c.contains_text(text)),
			View::Text(t) => t.trim() == text,
			View::Empty => false,
		}
	}

	fn collect_text(&self, out: &mut String) {
		match self {
			View::Element(el) => {
				for child in &el.children {
					child.collect_text(out);
				}
			}
			View::Text(t) => out.push_str(t),
			View::Empty => {}
		}
	}
}

impl From<ElementView> for View {
	fn from(el: ElementView) -> Self {
		View::Element(el)
	}
}

impl From<String> for View {
	fn from(s: String) -> Self {
		View::Text(Cow::Owned(s))
	}
}

impl From<&'static str> for View {
	fn from(s: &'static str) -> Self {
		View::Text(Cow::Borrowed(s))
	}
}

impl<T: Into<View>> From<Option<T>> for View {
	fn from(v: Option<T>) -> Self {
		v.map_or(View::Empty, Into::into)
	}
}

/// Escapes HTML special characters.
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
