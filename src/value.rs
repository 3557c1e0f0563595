//! Row and cell value model.
//!
//! A row is a [`Value`]: a keyed mapping, a fixed-position sequence, or a
//! record-like object whose fields are read by name. [`Value::Computed`]
//! wraps a zero-argument accessor that resolution invokes transparently, and
//! [`Value::Markup`] carries a pre-built render-tree leaf that bypasses
//! escaping. The engine never mutates a row.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::page::Page;

/// Field name of the self-URL accessor used by link-producing presets.
///
/// Rows rendered through `edit`/`delete`/`download`/`run`/`link` columns
/// expose this field (typically as [`Value::Computed`]) returning the row's
/// own URL as text.
pub const ABSOLUTE_URL_FIELD: &str = "absolute_url";

/// Field name of the row identity used for `data-pk` row attributes and the
/// `select` preset's checkbox naming.
pub const PK_FIELD: &str = "pk";

/// Named-field access for arbitrary row objects.
///
/// Implement this for domain types whose fields should be readable by
/// column attribute paths without converting the whole row into a mapping.
pub trait Record: Send + Sync {
	/// Returns the value of the named field, or `None` when absent.
	fn field(&self, name: &str) -> Option<Value>;
}

/// A zero-argument accessor producing a [`Value`] on demand.
pub type ComputedFn = Arc<dyn Fn() -> Value + Send + Sync>;

/// A row or cell datum.
#[derive(Clone)]
pub enum Value {
	/// No value.
	Null,
	/// A boolean.
	Bool(bool),
	/// A signed integer.
	Int(i64),
	/// A floating-point number.
	Float(f64),
	/// A text string.
	Text(String),
	/// A pre-built markup leaf, passed through rendering unescaped.
	Markup(Page),
	/// A fixed-position sequence; columns map to positions in declaration
	/// order.
	Seq(Vec<Value>),
	/// A keyed mapping.
	Map(BTreeMap<String, Value>),
	/// An arbitrary object with named fields.
	Record(Arc<dyn Record>),
	/// A zero-argument accessor, invoked whenever resolution lands on it.
	Computed(ComputedFn),
}

impl Value {
	/// Creates a text value.
	pub fn text(s: impl Into<String>) -> Self {
		Self::Text(s.into())
	}

	/// Creates a markup value from a render-tree node.
	pub fn markup(page: Page) -> Self {
		Self::Markup(page)
	}

	/// Creates a sequence value.
	pub fn seq(items: impl IntoIterator<Item = Value>) -> Self {
		Self::Seq(items.into_iter().collect())
	}

	/// Creates a mapping value.
	pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
		Self::Map(
			entries
				.into_iter()
				.map(|(key, value)| (key.into(), value))
				.collect(),
		)
	}

	/// Creates a record value from a named-field object.
	pub fn record(record: impl Record + 'static) -> Self {
		Self::Record(Arc::new(record))
	}

	/// Creates a computed value from a zero-argument accessor.
	pub fn computed<F>(f: F) -> Self
	where
		F: Fn() -> Value + Send + Sync + 'static,
	{
		Self::Computed(Arc::new(f))
	}

	/// Converts any serializable datum into a `Value` row.
	pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
		serde_json::to_value(value).map(Self::from)
	}

	/// Collapses computed accessors until a concrete value remains.
	pub fn invoke(self) -> Value {
		let mut value = self;
		loop {
			match value {
				Value::Computed(f) => value = f(),
				concrete => return concrete,
			}
		}
	}

	/// Returns whether the value is numeric (integer or float).
	pub fn is_numeric(&self) -> bool {
		matches!(self, Value::Int(_) | Value::Float(_))
	}

	/// Returns the value's truthiness, in the mapping/sequence-emptiness
	/// sense for containers.
	pub fn is_truthy(&self) -> bool {
		match self {
			Value::Null => false,
			Value::Bool(b) => *b,
			Value::Int(i) => *i != 0,
			Value::Float(f) => *f != 0.0,
			Value::Text(s) => !s.is_empty(),
			Value::Markup(_) => true,
			Value::Seq(items) => !items.is_empty(),
			Value::Map(entries) => !entries.is_empty(),
			Value::Record(_) => true,
			Value::Computed(_) => true,
		}
	}

	/// Returns the value's display form.
	///
	/// Scalars stringify, markup serializes, and containers display as
	/// empty text (their rendering is a column formatter's concern).
	pub fn display(&self) -> String {
		match self {
			Value::Null => String::new(),
			Value::Bool(b) => b.to_string(),
			Value::Int(i) => i.to_string(),
			Value::Float(f) => f.to_string(),
			Value::Text(s) => s.clone(),
			Value::Markup(page) => page.render_to_string(),
			Value::Seq(_) | Value::Map(_) | Value::Record(_) | Value::Computed(_) => String::new(),
		}
	}

	/// Orders two values for column sorting.
	///
	/// Same-kind scalars compare naturally (integers and floats
	/// cross-compare numerically); everything else falls back to a fixed
	/// kind ranking so the sort stays total and stable.
	pub fn sort_cmp(&self, other: &Value) -> Ordering {
		match (self, other) {
			(Value::Bool(a), Value::Bool(b)) => a.cmp(b),
			(Value::Int(a), Value::Int(b)) => a.cmp(b),
			(Value::Float(a), Value::Float(b)) => a.total_cmp(b),
			(Value::Int(a), Value::Float(b)) => (*a as f64).total_cmp(b),
			(Value::Float(a), Value::Int(b)) => a.total_cmp(&(*b as f64)),
			(Value::Text(a), Value::Text(b)) => a.cmp(b),
			_ => self.sort_rank().cmp(&other.sort_rank()),
		}
	}

	fn sort_rank(&self) -> u8 {
		match self {
			Value::Null => 0,
			Value::Bool(_) => 1,
			Value::Int(_) | Value::Float(_) => 2,
			Value::Text(_) => 3,
			_ => 4,
		}
	}
}

impl fmt::Debug for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Null => f.write_str("Null"),
			Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
			Value::Int(i) => f.debug_tuple("Int").field(i).finish(),
			Value::Float(x) => f.debug_tuple("Float").field(x).finish(),
			Value::Text(s) => f.debug_tuple("Text").field(s).finish(),
			Value::Markup(page) => f.debug_tuple("Markup").field(page).finish(),
			Value::Seq(items) => f.debug_tuple("Seq").field(items).finish(),
			Value::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
			Value::Record(_) => f.write_str("Record(<record>)"),
			Value::Computed(_) => f.write_str("Computed(<accessor>)"),
		}
	}
}

impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Value::Null, Value::Null) => true,
			(Value::Bool(a), Value::Bool(b)) => a == b,
			(Value::Int(a), Value::Int(b)) => a == b,
			(Value::Float(a), Value::Float(b)) => a == b,
			(Value::Text(a), Value::Text(b)) => a == b,
			(Value::Markup(a), Value::Markup(b)) => a == b,
			(Value::Seq(a), Value::Seq(b)) => a == b,
			(Value::Map(a), Value::Map(b)) => a == b,
			(Value::Record(a), Value::Record(b)) => Arc::ptr_eq(a, b),
			(Value::Computed(a), Value::Computed(b)) => Arc::ptr_eq(a, b),
			_ => false,
		}
	}
}

impl From<bool> for Value {
	fn from(b: bool) -> Self {
		Value::Bool(b)
	}
}

impl From<i32> for Value {
	fn from(i: i32) -> Self {
		Value::Int(i64::from(i))
	}
}

impl From<i64> for Value {
	fn from(i: i64) -> Self {
		Value::Int(i)
	}
}

impl From<f64> for Value {
	fn from(f: f64) -> Self {
		Value::Float(f)
	}
}

impl From<&str> for Value {
	fn from(s: &str) -> Self {
		Value::Text(s.to_string())
	}
}

impl From<String> for Value {
	fn from(s: String) -> Self {
		Value::Text(s)
	}
}

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Value::Null,
			serde_json::Value::Bool(b) => Value::Bool(b),
			serde_json::Value::Number(n) => {
				if let Some(i) = n.as_i64() {
					Value::Int(i)
				} else {
					Value::Float(n.as_f64().unwrap_or(f64::NAN))
				}
			}
			serde_json::Value::String(s) => Value::Text(s),
			serde_json::Value::Array(items) => {
				Value::Seq(items.into_iter().map(Value::from).collect())
			}
			serde_json::Value::Object(entries) => Value::Map(
				entries
					.into_iter()
					.map(|(key, value)| (key, Value::from(value)))
					.collect(),
			),
		}
	}
}
