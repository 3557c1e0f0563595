//! Error types for table definition and rendering.

/// Errors produced while resolving, configuring, or rendering a table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
	/// A column's attribute path could not be resolved against a row.
	///
	/// This aborts the whole render: a silently blank cell would mask a
	/// misconfigured column.
	#[error("cannot resolve `{path}`: {reason}")]
	AttributeResolution {
		/// The attribute path that failed to resolve.
		path: String,
		/// What went wrong at the failing segment.
		reason: String,
	},
	/// A column declaration is structurally invalid.
	#[error("column configuration error: {0}")]
	ColumnConfiguration(String),
	/// A row-dependent attribute value was materialized without a row while
	/// the table runs with `strict_header_attrs`.
	#[error("attribute `{key}` needs a row to evaluate, but none is available")]
	AttrsMerge {
		/// The attribute key whose value required a row.
		key: String,
	},
}

/// Convenience alias for results carrying a [`TableError`].
pub type TableResult<T> = Result<T, TableError>;
