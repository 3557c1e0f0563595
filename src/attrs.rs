//! Mergeable, row-aware HTML attribute sets.
//!
//! An [`Attrs`] holds class tokens separately from ordinary key→value
//! items because `class` merges by union while every other key merges by
//! override. Item values are literals or per-row closures; materializing a
//! set against a concrete row evaluates the closures in one pass.

use std::fmt;
use std::sync::Arc;

use tracing::warn;

use crate::error::{TableError, TableResult};
use crate::value::Value;

/// A per-row attribute value closure.
pub type AttrFn = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// An attribute value: a literal, or a closure evaluated against the row.
#[derive(Clone)]
pub enum AttrValue {
	/// A fixed value.
	Literal(String),
	/// A value computed from the current row.
	PerRow(AttrFn),
}

impl fmt::Debug for AttrValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AttrValue::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
			AttrValue::PerRow(_) => f.write_str("PerRow(<closure>)"),
		}
	}
}

/// An ordered, mergeable set of attribute declarations.
#[derive(Clone, Debug, Default)]
pub struct Attrs {
	classes: Vec<String>,
	items: Vec<(String, AttrValue)>,
}

impl Attrs {
	/// Creates an empty attribute set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a class token (duplicates are ignored).
	pub fn class(mut self, token: impl Into<String>) -> Self {
		let token = token.into();
		if !token.is_empty() && !self.classes.contains(&token) {
			self.classes.push(token);
		}
		self
	}

	/// Sets a literal attribute value.
	///
	/// The `class` key is split on whitespace and unioned into the class
	/// token set instead of overriding it.
	pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		let key = key.into();
		let value = value.into();
		if key == "class" {
			for token in value.split_whitespace() {
				self = self.class(token);
			}
			return self;
		}
		self.put(key, AttrValue::Literal(value));
		self
	}

	/// Sets a per-row attribute value.
	pub fn set_with<F>(mut self, key: impl Into<String>, f: F) -> Self
	where
		F: Fn(&Value) -> String + Send + Sync + 'static,
	{
		self.put(key.into(), AttrValue::PerRow(Arc::new(f)));
		self
	}

	/// Returns whether the set declares nothing.
	pub fn is_empty(&self) -> bool {
		self.classes.is_empty() && self.items.is_empty()
	}

	/// Returns whether the set declares any class tokens.
	pub fn has_class(&self) -> bool {
		!self.classes.is_empty() || self.items.iter().any(|(key, _)| key == "class")
	}

	/// Merges another set over this one.
	///
	/// Later sources win key-by-key, except class tokens which union. The
	/// insertion order of first appearance is kept for deterministic
	/// output.
	pub fn merge(mut self, other: &Attrs) -> Self {
		for token in &other.classes {
			self = self.class(token.clone());
		}
		for (key, value) in &other.items {
			self.put(key.clone(), value.clone());
		}
		self
	}

	/// Evaluates the set into concrete `(key, value)` pairs.
	///
	/// Per-row values are evaluated against `row`. With no row available
	/// (header-level materialization) a per-row value contributes nothing,
	/// unless `strict` turns that situation into [`TableError::AttrsMerge`].
	/// The `class` pair, when present, is emitted first.
	pub fn materialize(
		&self,
		row: Option<&Value>,
		strict: bool,
	) -> TableResult<Vec<(String, String)>> {
		let mut class_value = self.classes.join(" ");
		let mut out = Vec::with_capacity(self.items.len() + 1);
		for (key, value) in &self.items {
			let evaluated = match value {
				AttrValue::Literal(v) => Some(v.clone()),
				AttrValue::PerRow(f) => match row {
					Some(row) => Some(f(row)),
					None if strict => {
						return Err(TableError::AttrsMerge { key: key.clone() });
					}
					None => {
						warn!(key = %key, "skipping row-dependent attribute without a row");
						None
					}
				},
			};
			let Some(evaluated) = evaluated else { continue };
			if key == "class" {
				if !class_value.is_empty() {
					class_value.push(' ');
				}
				class_value.push_str(&evaluated);
			} else {
				out.push((key.clone(), evaluated));
			}
		}
		if !class_value.is_empty() {
			out.insert(0, ("class".to_string(), class_value));
		}
		Ok(out)
	}

	fn put(&mut self, key: String, value: AttrValue) {
		if let Some(existing) = self.items.iter_mut().find(|(k, _)| *k == key) {
			existing.1 = value;
		} else {
			self.items.push((key, value));
		}
	}
}
