//! Column declarations.
//!
//! A [`Column`] is the declarative unit of a table: where its value comes
//! from, how the header and cells look, whether it sorts, and which header
//! group it belongs to. Columns are built fluently and treated as immutable
//! once handed to a table.

use std::fmt;
use std::sync::Arc;

use crate::attrs::Attrs;
use crate::error::TableResult;
use crate::page::Page;
use crate::value::Value;

/// A cell render closure receiving the resolved value and the whole row.
pub type CellFn = Arc<dyn Fn(&Value, &Value) -> TableResult<Page> + Send + Sync>;

/// How a column turns a resolved value into cell markup.
#[derive(Clone, Default)]
pub enum CellSpec {
	/// Escaped text of the resolved value, with numeric right-justification.
	#[default]
	Default,
	/// A template expanded with `{value}` and `{path}` placeholders; the
	/// result is a raw markup leaf.
	Template(String),
	/// A closure producing the cell markup.
	Render(CellFn),
}

impl fmt::Debug for CellSpec {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			CellSpec::Default => f.write_str("Default"),
			CellSpec::Template(template) => f.debug_tuple("Template").field(template).finish(),
			CellSpec::Render(_) => f.write_str("Render(<closure>)"),
		}
	}
}

/// A per-row URL closure.
pub type UrlFn = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// A header link target: fixed, or computed per row.
#[derive(Clone)]
pub enum UrlSpec {
	/// A fixed link target.
	Literal(String),
	/// A link target computed from the current row.
	PerRow(UrlFn),
}

impl fmt::Debug for UrlSpec {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			UrlSpec::Literal(url) => f.debug_tuple("Literal").field(url).finish(),
			UrlSpec::PerRow(_) => f.write_str("PerRow(<closure>)"),
		}
	}
}

/// A declarative description of one table column.
#[derive(Clone)]
pub struct Column {
	pub(crate) name: String,
	pub(crate) attr: Option<String>,
	pub(crate) display_name: Option<String>,
	pub(crate) header_markup: Option<Page>,
	pub(crate) sortable: Option<bool>,
	pub(crate) show: bool,
	pub(crate) css_class: Vec<String>,
	pub(crate) url: Option<UrlSpec>,
	pub(crate) title: Option<String>,
	pub(crate) group: Option<String>,
	pub(crate) cell: CellSpec,
	pub(crate) header_attrs: Attrs,
	pub(crate) cell_attrs: Attrs,
}

impl Column {
	/// Creates a column reading the row attribute of the same name.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			attr: None,
			display_name: None,
			header_markup: None,
			sortable: None,
			show: true,
			css_class: Vec::new(),
			url: None,
			title: None,
			group: None,
			cell: CellSpec::Default,
			header_attrs: Attrs::new(),
			cell_attrs: Attrs::new(),
		}
	}

	/// Sets the attribute path resolved against each row.
	///
	/// Defaults to the column name; an empty path suppresses value
	/// resolution entirely (for columns whose cells are fully computed).
	pub fn attr(mut self, path: impl Into<String>) -> Self {
		self.attr = Some(path.into());
		self
	}

	/// Sets the human label shown in the header.
	pub fn display_name(mut self, name: impl Into<String>) -> Self {
		self.display_name = Some(name.into());
		self
	}

	/// Sets markup header content overriding the display name.
	pub fn header_markup(mut self, markup: Page) -> Self {
		self.header_markup = Some(markup);
		self
	}

	/// Sets whether this column is sortable.
	pub fn sortable(mut self, sortable: bool) -> Self {
		self.sortable = Some(sortable);
		self
	}

	/// Sets whether this column is shown.
	///
	/// A hidden column stays in the table definition — sorting by its name
	/// is an inert no-op — but appears in no header or body row.
	pub fn show(mut self, show: bool) -> Self {
		self.show = show;
		self
	}

	/// Adds a CSS class token to the header cell.
	pub fn css_class(mut self, token: impl Into<String>) -> Self {
		let token = token.into();
		if !token.is_empty() && !self.css_class.contains(&token) {
			self.css_class.push(token);
		}
		self
	}

	/// Sets a fixed link target for the header label.
	pub fn url(mut self, url: impl Into<String>) -> Self {
		self.url = Some(UrlSpec::Literal(url.into()));
		self
	}

	/// Sets a per-row link target for the header label.
	pub fn url_with<F>(mut self, f: F) -> Self
	where
		F: Fn(&Value) -> String + Send + Sync + 'static,
	{
		self.url = Some(UrlSpec::PerRow(Arc::new(f)));
		self
	}

	/// Sets the header tooltip.
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// Sets the header group label.
	///
	/// Consecutive columns sharing a group coalesce under one super-header
	/// cell.
	pub fn group(mut self, group: impl Into<String>) -> Self {
		self.group = Some(group.into());
		self
	}

	/// Sets a template-string cell spec.
	pub fn cell_template(mut self, template: impl Into<String>) -> Self {
		self.cell = CellSpec::Template(template.into());
		self
	}

	/// Sets a closure cell spec receiving the resolved value and the row.
	pub fn cell_with<F>(mut self, f: F) -> Self
	where
		F: Fn(&Value, &Value) -> TableResult<Page> + Send + Sync + 'static,
	{
		self.cell = CellSpec::Render(Arc::new(f));
		self
	}

	/// Sets extra header cell attributes.
	pub fn header_attrs(mut self, attrs: Attrs) -> Self {
		self.header_attrs = attrs;
		self
	}

	/// Sets extra body cell attributes.
	pub fn cell_attrs(mut self, attrs: Attrs) -> Self {
		self.cell_attrs = attrs;
		self
	}

	/// Returns the column name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the attribute path resolved against rows.
	pub fn attr_path(&self) -> &str {
		self.attr.as_deref().unwrap_or(&self.name)
	}

	/// Returns the header label: the declared display name, or the
	/// humanized last segment of the column name.
	pub fn label(&self) -> String {
		self.display_name
			.clone()
			.unwrap_or_else(|| humanize(&self.name))
	}

	/// Returns whether the column sorts, given the table-wide default.
	pub fn is_sortable(&self, table_default: bool) -> bool {
		table_default && self.sortable.unwrap_or(true)
	}

	/// Returns whether the column is shown.
	pub fn is_shown(&self) -> bool {
		self.show
	}

	/// Returns the header group label, if any.
	pub fn group_label(&self) -> Option<&str> {
		self.group.as_deref()
	}

	/// Returns the header content node.
	pub(crate) fn header_content(&self) -> Page {
		if let Some(markup) = &self.header_markup {
			return markup.clone();
		}
		let label = self.label();
		if label.is_empty() {
			Page::Empty
		} else {
			Page::text(label)
		}
	}
}

impl fmt::Debug for Column {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Column")
			.field("name", &self.name)
			.field("attr", &self.attr)
			.field("display_name", &self.display_name)
			.field("sortable", &self.sortable)
			.field("show", &self.show)
			.field("group", &self.group)
			.field("cell", &self.cell)
			.finish()
	}
}

/// Humanizes a column name into a display label: the last dot segment with
/// underscores as spaces and each word title-cased.
fn humanize(name: &str) -> String {
	let segment = name.rsplit('.').next().unwrap_or(name);
	segment
		.split('_')
		.filter(|word| !word.is_empty())
		.map(|word| {
			let mut chars = word.chars();
			match chars.next() {
				Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
				None => String::new(),
			}
		})
		.collect::<Vec<_>>()
		.join(" ")
}
