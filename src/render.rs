//! The render tree and cell formatting.
//!
//! [`RenderTree`] is the engine's output: a pure data structure describing
//! the table's header rows, body rows, and their materialized attributes.
//! It is built fresh per render and can be consumed directly by an external
//! templating layer, or serialized through [`RenderTree::into_page`].

use crate::column::{CellSpec, Column};
use crate::error::{TableError, TableResult};
use crate::page::{IntoPage, Page, html, html_escape};
use crate::resolve::resolve_path;
use crate::value::Value;

/// Materialized attribute pairs, in output order.
pub type RenderedAttrs = Vec<(String, String)>;

/// One super-header cell of the rendered table.
#[derive(Debug, Clone, PartialEq)]
pub struct SuperHeader {
	/// The group label, empty for ungrouped columns.
	pub label: String,
	/// How many sub-header columns the cell spans.
	pub colspan: usize,
	/// Materialized cell attributes.
	pub attrs: RenderedAttrs,
}

/// One sub-header cell of the rendered table.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
	/// The header content node.
	pub content: Page,
	/// The sort link, or the column's explicit header URL; `None` renders
	/// plain content.
	pub link: Option<String>,
	/// Materialized cell attributes.
	pub attrs: RenderedAttrs,
}

/// One body cell of the rendered table.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyCell {
	/// The cell markup.
	pub content: Page,
	/// Materialized cell attributes.
	pub attrs: RenderedAttrs,
}

/// One body row of the rendered table.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyRow {
	/// Materialized row attributes.
	pub attrs: RenderedAttrs,
	/// The row's cells, one per visible column.
	pub cells: Vec<BodyCell>,
}

/// The full rendered table, ready for serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderTree {
	/// Materialized table-root attributes.
	pub attrs: RenderedAttrs,
	/// The super-header row; present only when a visible column declares a
	/// group.
	pub superheader: Option<Vec<SuperHeader>>,
	/// The sub-header row, one cell per visible column.
	pub subheader: Vec<Header>,
	/// The body rows, in render order.
	pub rows: Vec<BodyRow>,
}

impl RenderTree {
	/// Serializes the tree into a page node.
	///
	/// Header rows nest inside `thead`; body rows follow as direct `tr`
	/// children. Sub-header cells with a link wrap their content in an
	/// anchor; super-header cells carry `colspan` attributes.
	pub fn into_page(self) -> Page {
		let mut thead = html::thead();
		if let Some(cells) = self.superheader {
			let mut row = html::tr();
			for cell in cells {
				let mut th = html::th();
				for (key, value) in cell.attrs {
					th = th.attr(key, value);
				}
				th = th.attr("colspan", cell.colspan.to_string());
				row = row.child(th.child(Page::text(cell.label)));
			}
			thead = thead.child(row);
		}
		let mut row = html::tr();
		for cell in self.subheader {
			let mut th = html::th();
			for (key, value) in cell.attrs {
				th = th.attr(key, value);
			}
			let content = match cell.link {
				Some(url) => html::a().attr("href", url).child(cell.content).into_page(),
				None => cell.content,
			};
			row = row.child(th.child(content));
		}
		thead = thead.child(row);

		let mut table = html::table();
		for (key, value) in self.attrs {
			table = table.attr(key, value);
		}
		table = table.child(thead);
		for body_row in self.rows {
			let mut tr = html::tr();
			for (key, value) in body_row.attrs {
				tr = tr.attr(key, value);
			}
			for cell in body_row.cells {
				let mut td = html::td();
				for (key, value) in cell.attrs {
					td = td.attr(key, value);
				}
				tr = tr.child(td.child(cell.content));
			}
			table = table.child(tr);
		}
		table.into_page()
	}
}

/// Formats a resolved value into cell markup per the column's cell spec.
///
/// The default formatting escapes the value's display text (numeric
/// right-justification is the renderer's attribute concern) and passes
/// pre-built markup through untouched. Declared specs fully override the
/// default and receive both the value and the row.
pub(crate) fn format_cell(column: &Column, value: &Value, row: &Value) -> TableResult<Page> {
	match &column.cell {
		CellSpec::Render(f) => f(value, row),
		CellSpec::Template(template) => {
			Ok(Page::raw(expand_template(template, value, row)?))
		}
		CellSpec::Default => Ok(match value {
			Value::Markup(page) => page.clone(),
			Value::Null => Page::Empty,
			other => Page::text(other.display()),
		}),
	}
}

/// Expands a cell template.
///
/// `{value}` inserts the resolved value's display text; any other
/// placeholder is resolved as an attribute path against the row. Inserted
/// text is HTML-escaped; the template text itself is emitted raw.
fn expand_template(template: &str, value: &Value, row: &Value) -> TableResult<String> {
	let mut out = String::with_capacity(template.len());
	let mut chars = template.chars();
	while let Some(c) = chars.next() {
		if c != '{' {
			out.push(c);
			continue;
		}
		let mut placeholder = String::new();
		loop {
			match chars.next() {
				Some('}') => break,
				Some(inner) => placeholder.push(inner),
				None => {
					return Err(TableError::ColumnConfiguration(format!(
						"unclosed placeholder in cell template `{template}`"
					)));
				}
			}
		}
		let inserted = if placeholder == "value" {
			value.display()
		} else {
			resolve_path(row, &placeholder)?.display()
		};
		out.push_str(&html_escape(&inserted));
	}
	Ok(out)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_formatting_escapes_text() {
		let column = Column::new("foo");
		let page = format_cell(&column, &Value::text("a<b"), &Value::Null).unwrap();
		assert_eq!(page.render_to_string(), "a&lt;b");
	}

	#[test]
	fn test_default_formatting_passes_markup_through() {
		let leaf = html::i().attr("class", "fa").into_page();
		let column = Column::new("foo");
		let page = format_cell(&column, &Value::Markup(leaf.clone()), &Value::Null).unwrap();
		assert_eq!(page, leaf);
	}

	#[test]
	fn test_template_inserts_escaped_value_and_row_fields() {
		let column = Column::new("foo").cell_template("<b>{value}</b> ({bar})");
		let row = Value::map([("bar", Value::text("x&y"))]);
		let page = format_cell(&column, &Value::text("<hi>"), &row).unwrap();
		assert_eq!(
			page.render_to_string(),
			"<b>&lt;hi&gt;</b> (x&amp;y)"
		);
	}

	#[test]
	fn test_template_with_unclosed_placeholder_is_an_error() {
		let column = Column::new("foo").cell_template("{value");
		let err = format_cell(&column, &Value::Null, &Value::Null).unwrap_err();
		assert!(matches!(err, TableError::ColumnConfiguration(_)));
	}
}
