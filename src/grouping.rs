//! Two-level header computation.
//!
//! Consecutive visible columns sharing a group label coalesce into one
//! super-header cell spanning the run; ungrouped columns get their own
//! blank cell. The walk also records which columns start a run — those
//! sub-header cells carry the `first_column` class marker.

use crate::column::Column;

/// One super-header cell: a group label spanning a run of columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderGroup {
	/// The group label, empty for ungrouped columns.
	pub label: String,
	/// How many sub-header columns the cell spans.
	pub colspan: usize,
}

/// Partitions the visible column list into super-header cells.
///
/// Returns the cells and, per visible column, whether it starts a run.
pub fn group_columns(visible: &[&Column]) -> (Vec<HeaderGroup>, Vec<bool>) {
	let mut cells: Vec<HeaderGroup> = Vec::new();
	let mut run_starts = Vec::with_capacity(visible.len());
	let mut open_group: Option<&str> = None;
	for column in visible {
		let group = column.group_label();
		let same_run = matches!((group, open_group), (Some(g), Some(p)) if g == p);
		if same_run {
			if let Some(cell) = cells.last_mut() {
				cell.colspan += 1;
			}
			run_starts.push(false);
		} else {
			cells.push(HeaderGroup {
				label: group.unwrap_or_default().to_string(),
				colspan: 1,
			});
			run_starts.push(true);
			open_group = group;
		}
	}
	(cells, run_starts)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn groups(cells: &[HeaderGroup]) -> Vec<(&str, usize)> {
		cells
			.iter()
			.map(|cell| (cell.label.as_str(), cell.colspan))
			.collect()
	}

	#[test]
	fn test_consecutive_same_group_columns_coalesce() {
		let columns = vec![
			Column::new("foo"),
			Column::new("bar"),
			Column::new("icon").group("group"),
			Column::new("edit").group("group"),
			Column::new("delete"),
		];
		let refs: Vec<&Column> = columns.iter().collect();
		let (cells, run_starts) = group_columns(&refs);
		assert_eq!(
			groups(&cells),
			[("", 1), ("", 1), ("group", 2), ("", 1)]
		);
		assert_eq!(run_starts, [true, true, true, false, true]);
	}

	#[test]
	fn test_non_adjacent_same_group_columns_do_not_merge() {
		let columns = vec![
			Column::new("a").group("g"),
			Column::new("b"),
			Column::new("c").group("g"),
		];
		let refs: Vec<&Column> = columns.iter().collect();
		let (cells, _) = group_columns(&refs);
		assert_eq!(groups(&cells), [("g", 1), ("", 1), ("g", 1)]);
	}

	#[test]
	fn test_ungrouped_columns_each_get_their_own_cell() {
		let columns = vec![Column::new("a"), Column::new("b")];
		let refs: Vec<&Column> = columns.iter().collect();
		let (cells, run_starts) = group_columns(&refs);
		assert_eq!(groups(&cells), [("", 1), ("", 1)]);
		assert_eq!(run_starts, [true, true]);
	}
}
