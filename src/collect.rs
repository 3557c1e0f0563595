//! Column collection and layering.
//!
//! A table's columns may come from several reusable declaration sets.
//! Layers are folded in order with override-by-name semantics: the first
//! declaration of a name fixes its position, the last one supplies its
//! content. Composition is an explicit function call over plain lists — no
//! type-hierarchy resolution.

use std::collections::HashMap;

use crate::column::Column;
use crate::error::{TableError, TableResult};

/// Folds ordered declaration layers into the table's resolved column list.
///
/// Redeclaring a name replaces the column's content at its first-seen
/// position. Empty names are a configuration error.
pub fn collect_columns(layers: impl IntoIterator<Item = Vec<Column>>) -> TableResult<Vec<Column>> {
	let mut collected: Vec<Column> = Vec::new();
	let mut positions: HashMap<String, usize> = HashMap::new();
	for layer in layers {
		for column in layer {
			if column.name().is_empty() {
				return Err(TableError::ColumnConfiguration(
					"column name must not be empty".to_string(),
				));
			}
			match positions.get(column.name()) {
				Some(&position) => collected[position] = column,
				None => {
					positions.insert(column.name().to_string(), collected.len());
					collected.push(column);
				}
			}
		}
	}
	Ok(collected)
}

/// Pairs each shown column with its position in the collected list.
///
/// The position is what sequence-shaped rows index by, so hiding a column
/// must not re-index its neighbours.
pub fn visible_columns(columns: &[Column]) -> Vec<(usize, &Column)> {
	columns
		.iter()
		.enumerate()
		.filter(|(_, column)| column.is_shown())
		.collect()
}
