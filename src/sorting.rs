//! Sorting by column value.

use tracing::debug;

use crate::column::Column;
use crate::error::TableResult;
use crate::resolve::resolve_cell;
use crate::value::Value;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
	/// Ascending order
	Ascending,
	/// Descending order
	Descending,
}

impl SortDirection {
	/// Returns the opposite direction
	pub fn toggle(&self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	/// Parses a sort direction from a query parameter
	///
	/// Returns `Ascending` for positive values and `Descending` for negative values
	/// (e.g., "name" -> Ascending, "-name" -> Descending)
	pub fn parse_from_query(s: &str) -> (Self, &str) {
		if let Some(field) = s.strip_prefix('-') {
			(Self::Descending, field)
		} else {
			(Self::Ascending, s)
		}
	}
}

/// Stably sorts rows by the requested column's resolved value.
///
/// Unknown column names, hidden or unsortable columns, and tables with
/// sorting disabled leave the row order unchanged. Resolution failures
/// propagate — rows that cannot be keyed are a configuration bug, not
/// something to drop silently.
pub fn sort_rows(
	rows: &mut Vec<Value>,
	columns: &[Column],
	order: &str,
	table_sortable: bool,
) -> TableResult<()> {
	let (direction, name) = SortDirection::parse_from_query(order);
	let Some(position) = columns.iter().position(|column| column.name() == name) else {
		debug!(order = name, "ignoring sort request for unknown column");
		return Ok(());
	};
	let column = &columns[position];
	if !column.is_shown() || !column.is_sortable(table_sortable) {
		debug!(order = name, "ignoring sort request for unsortable column");
		return Ok(());
	}
	let path = column.attr_path();
	let keys = rows
		.iter()
		.map(|row| resolve_cell(row, path, Some(position)))
		.collect::<TableResult<Vec<Value>>>()?;
	let mut indices: Vec<usize> = (0..rows.len()).collect();
	indices.sort_by(|&a, &b| {
		let ordering = keys[a].sort_cmp(&keys[b]);
		match direction {
			SortDirection::Ascending => ordering,
			SortDirection::Descending => ordering.reverse(),
		}
	});
	debug!(order = name, ?direction, "sorted rows");
	*rows = indices.into_iter().map(|index| rows[index].clone()).collect();
	Ok(())
}
