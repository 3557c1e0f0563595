//! Attribute path resolution against rows of unknown shape.
//!
//! A path is a dot-separated list of segments applied left to right. Each
//! segment is looked up by the strategy the current shape supports: key
//! lookup for mappings, index lookup for sequences (an explicit numeric
//! segment, or the column's declared position), named-field lookup for
//! records. After every hop a computed value is invoked before traversal
//! continues. A segment no strategy can satisfy is an error, never a silent
//! blank — an unresolved cell indicates a misconfigured column.

use crate::error::{TableError, TableResult};
use crate::value::Value;

/// Resolves a dotted attribute path against a row.
pub fn resolve_path(row: &Value, path: &str) -> TableResult<Value> {
	resolve_cell(row, path, None)
}

/// Resolves a dotted attribute path against a row, with the owning column's
/// position in the collected column list.
///
/// The position serves as the implied index when the first segment is
/// applied to a sequence-shaped row: columns map to positions `0..n-1` in
/// declaration order.
pub fn resolve_cell(row: &Value, path: &str, position: Option<usize>) -> TableResult<Value> {
	if path.is_empty() {
		return Ok(Value::Null);
	}
	let mut current = row.clone();
	for (hop, segment) in path.split('.').enumerate() {
		let implied = if hop == 0 { position } else { None };
		current = lookup_segment(&current, segment, implied).map_err(|reason| {
			TableError::AttributeResolution {
				path: path.to_string(),
				reason,
			}
		})?;
		current = current.invoke();
	}
	Ok(current)
}

fn lookup_segment(value: &Value, segment: &str, implied: Option<usize>) -> Result<Value, String> {
	match value {
		Value::Map(entries) => entries
			.get(segment)
			.cloned()
			.ok_or_else(|| format!("missing key `{segment}`")),
		Value::Seq(items) => {
			let index = segment
				.parse::<usize>()
				.ok()
				.or(implied)
				.ok_or_else(|| format!("no usable index for segment `{segment}`"))?;
			items
				.get(index)
				.cloned()
				.ok_or_else(|| format!("index {index} out of bounds for segment `{segment}`"))
		}
		Value::Record(record) => record
			.field(segment)
			.ok_or_else(|| format!("missing field `{segment}`")),
		_ => Err(format!("`{segment}` cannot be read from a leaf value")),
	}
}
