//! Table assembly and rendering orchestration.
//!
//! A [`Table`] binds a resolved column list to a concrete row sequence and
//! per-render options, then [`Table::render`] walks the pipeline: visible
//! columns, requested sort, header groups, and per-row cell resolution,
//! formatting, and attribute merging. A table is constructed per render
//! request; rendering never mutates the table or its rows.

use tracing::{debug, warn};

use crate::attrs::Attrs;
use crate::collect::{collect_columns, visible_columns};
use crate::column::{CellSpec, Column, UrlSpec};
use crate::error::{TableError, TableResult};
use crate::grouping::group_columns;
use crate::render::{BodyCell, BodyRow, Header, RenderTree, SuperHeader, format_cell};
use crate::resolve::{resolve_cell, resolve_path};
use crate::sorting::{SortDirection, sort_rows};
use crate::value::{PK_FIELD, Value};

/// Default class carried by every table root.
const TABLE_CLASS: &str = "listview";

/// A table definition bound to a row source and render options.
pub struct Table {
	columns: Vec<Column>,
	rows: Vec<Value>,
	attrs: Attrs,
	row_attrs: Attrs,
	cell_attrs: Attrs,
	sortable: bool,
	order: Option<String>,
	strict_header_attrs: bool,
}

impl Table {
	/// Creates a table from one column declaration list.
	pub fn new(
		rows: impl IntoIterator<Item = Value>,
		columns: Vec<Column>,
	) -> TableResult<Self> {
		Self::from_layers(rows, vec![columns])
	}

	/// Creates a table by layering several reusable column declaration
	/// sets, with override-by-name-keep-position semantics.
	pub fn from_layers(
		rows: impl IntoIterator<Item = Value>,
		layers: Vec<Vec<Column>>,
	) -> TableResult<Self> {
		Ok(Self {
			columns: collect_columns(layers)?,
			rows: rows.into_iter().collect(),
			attrs: Attrs::new(),
			row_attrs: Attrs::new(),
			cell_attrs: Attrs::new(),
			sortable: true,
			order: None,
			strict_header_attrs: false,
		})
	}

	/// Sets attributes of the table root element.
	pub fn attrs(mut self, attrs: Attrs) -> Self {
		self.attrs = attrs;
		self
	}

	/// Sets attributes applied to every body row.
	pub fn row_attrs(mut self, attrs: Attrs) -> Self {
		self.row_attrs = attrs;
		self
	}

	/// Sets attributes applied to every body cell.
	pub fn cell_attrs(mut self, attrs: Attrs) -> Self {
		self.cell_attrs = attrs;
		self
	}

	/// Sets the table-wide sortable default.
	pub fn sortable(mut self, sortable: bool) -> Self {
		self.sortable = sortable;
		self
	}

	/// Sets the requested sort column, `-`-prefixed for descending.
	pub fn order(mut self, order: impl Into<String>) -> Self {
		self.order = Some(order.into());
		self
	}

	/// Makes header-level materialization of row-dependent attribute
	/// values an error instead of a skipped key.
	pub fn strict_header_attrs(mut self, strict: bool) -> Self {
		self.strict_header_attrs = strict;
		self
	}

	/// Returns the resolved column list, hidden columns included.
	pub fn columns(&self) -> &[Column] {
		&self.columns
	}

	/// Renders the table into a fresh [`RenderTree`].
	pub fn render(&self) -> TableResult<RenderTree> {
		let strict = self.strict_header_attrs;
		let visible = visible_columns(&self.columns);
		debug!(
			columns = visible.len(),
			rows = self.rows.len(),
			"rendering table"
		);

		let mut rows = self.rows.clone();
		if let Some(order) = &self.order {
			sort_rows(&mut rows, &self.columns, order, self.sortable)?;
		}

		// The default class is a fallback, not a merge: caller-declared
		// classes replace it outright.
		let root_attrs = if self.attrs.has_class() {
			self.attrs.clone()
		} else {
			Attrs::new().class(TABLE_CLASS).merge(&self.attrs)
		};
		let attrs = root_attrs.materialize(None, strict)?;

		let refs: Vec<&Column> = visible.iter().map(|(_, column)| *column).collect();
		let (groups, run_starts) = group_columns(&refs);
		let superheader = if refs.iter().any(|column| column.group_label().is_some()) {
			let mut cells = Vec::with_capacity(groups.len());
			for (index, group) in groups.into_iter().enumerate() {
				let mut attrs = Attrs::new().class("superheader");
				if index == 0 {
					attrs = attrs.class("first_column");
				}
				cells.push(SuperHeader {
					label: group.label,
					colspan: group.colspan,
					attrs: attrs.materialize(None, strict)?,
				});
			}
			Some(cells)
		} else {
			None
		};

		let mut subheader = Vec::with_capacity(refs.len());
		for (index, column) in refs.iter().enumerate() {
			subheader.push(self.header_cell(column, run_starts[index])?);
		}

		let mut body = Vec::with_capacity(rows.len());
		for (index, row) in rows.iter().enumerate() {
			body.push(self.body_row(row, index, &visible)?);
		}

		Ok(RenderTree {
			attrs,
			superheader,
			subheader,
			rows: body,
		})
	}

	/// Renders the table and serializes it to markup.
	pub fn render_to_string(&self) -> TableResult<String> {
		Ok(self.render()?.into_page().render_to_string())
	}

	fn header_cell(&self, column: &Column, starts_run: bool) -> TableResult<Header> {
		let mut attrs = Attrs::new();
		for token in &column.css_class {
			attrs = attrs.class(token.clone());
		}
		attrs = attrs.class("subheader");
		if starts_run {
			attrs = attrs.class("first_column");
		}
		if let Some(title) = &column.title {
			attrs = attrs.set("title", title.clone());
		}
		let attrs = attrs
			.merge(&column.header_attrs)
			.materialize(None, self.strict_header_attrs)?;

		// An explicit header URL wins over the sort link.
		let link = match &column.url {
			Some(UrlSpec::Literal(url)) => Some(url.clone()),
			Some(UrlSpec::PerRow(_)) => {
				if self.strict_header_attrs {
					return Err(TableError::AttrsMerge {
						key: "url".to_string(),
					});
				}
				warn!(
					column = column.name(),
					"skipping row-dependent header url without a row"
				);
				None
			}
			None if column.is_sortable(self.sortable) => Some(self.sort_link(column)),
			None => None,
		};

		Ok(Header {
			content: column.header_content(),
			link,
			attrs,
		})
	}

	/// Builds the header sort link, toggling to descending when the table
	/// is already sorted ascending by this column.
	fn sort_link(&self, column: &Column) -> String {
		let current = self
			.order
			.as_deref()
			.map(SortDirection::parse_from_query);
		let target = match current {
			Some((SortDirection::Ascending, name)) if name == column.name() => {
				format!("-{}", column.name())
			}
			_ => column.name().to_string(),
		};
		format!("?order={target}")
	}

	fn body_row(
		&self,
		row: &Value,
		index: usize,
		visible: &[(usize, &Column)],
	) -> TableResult<BodyRow> {
		let parity = if index % 2 == 0 { "row1" } else { "row2" };
		let mut attrs = Attrs::new().class(parity);
		// Rows without an identity render without data-pk.
		if let Ok(pk) = resolve_path(row, PK_FIELD) {
			attrs = attrs.set("data-pk", pk.display());
		}
		let attrs = attrs
			.merge(&self.row_attrs)
			.materialize(Some(row), self.strict_header_attrs)?;

		let mut cells = Vec::with_capacity(visible.len());
		for (position, column) in visible {
			cells.push(self.body_cell(row, *position, column)?);
		}
		Ok(BodyRow { attrs, cells })
	}

	fn body_cell(&self, row: &Value, position: usize, column: &Column) -> TableResult<BodyCell> {
		let path = column.attr_path();
		let value = if path.is_empty() {
			Value::Null
		} else {
			resolve_cell(row, path, Some(position))?
		};
		let content = format_cell(column, &value, row)?;

		let mut attrs = Attrs::new();
		if matches!(column.cell, CellSpec::Default) && value.is_numeric() {
			attrs = attrs.class("rj");
		}
		let attrs = attrs
			.merge(&self.cell_attrs)
			.merge(&column.cell_attrs)
			.materialize(Some(row), self.strict_header_attrs)?;
		Ok(BodyCell { content, attrs })
	}
}

impl std::fmt::Debug for Table {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Table")
			.field("columns", &self.columns)
			.field("rows", &self.rows.len())
			.field("sortable", &self.sortable)
			.field("order", &self.order)
			.finish()
	}
}
