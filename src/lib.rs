//! # Listview
//!
//! Declarative HTML table definition and rendering.
//!
//! Listview turns a sequence of rows — keyed mappings, fixed-position
//! sequences, or record-like objects — and an ordered set of column
//! declarations into a pure [`RenderTree`]: a grouped super-header row,
//! a sub-header row with sort links, and body rows with merged static and
//! per-row attributes. The tree is plain data for an external templating
//! layer, and also serializes to markup through the crate's own page nodes.
//!
//! ## Core Principles
//!
//! - **Composition over Inheritance**: reusable column sets combine through
//!   explicit layering, not type hierarchies
//! - **Declarations stay immutable**: columns are built fluently and never
//!   change after a table takes them
//! - **No silent blanks**: a column path that does not resolve against a
//!   row is an error, not an empty cell
//!
//! ## Architecture
//!
//! - [`value`]: the row/value shape set and named-field `Record` trait
//! - [`resolve`]: dotted attribute-path resolution with computed-accessor
//!   invocation
//! - [`attrs`]: mergeable, row-aware attribute sets
//! - [`column`]: the declarative column unit and its builders (presets
//!   included: icon, edit, delete, download, run, select, check, link,
//!   number)
//! - [`collect`]: layered collection with override-by-name-keep-position
//!   semantics
//! - [`sorting`]: stable ordering by resolved column value
//! - [`grouping`]: two-level header computation
//! - [`render`]: the output tree, cell formatting, and markup serialization
//! - [`table`]: the per-render binding of columns, rows, and options
//!
//! ## Example
//!
//! ```
//! use listview::{Column, Table, Value};
//!
//! let rows = vec![
//!     Value::map([("foo", Value::text("Hello")), ("bar", Value::from(17))]),
//!     Value::map([("foo", Value::text("world!")), ("bar", Value::from(42))]),
//! ];
//! let table = Table::new(rows, vec![Column::new("foo"), Column::number("bar")]).unwrap();
//! let tree = table.render().unwrap();
//! assert_eq!(tree.rows.len(), 2);
//! ```

#![warn(missing_docs)]

pub mod attrs;
pub mod collect;
pub mod column;
pub mod error;
pub mod grouping;
pub mod page;
mod presets;
pub mod render;
pub mod resolve;
pub mod sorting;
pub mod table;
pub mod value;

pub use attrs::{AttrFn, AttrValue, Attrs};
pub use collect::{collect_columns, visible_columns};
pub use column::{CellFn, CellSpec, Column, UrlFn, UrlSpec};
pub use error::{TableError, TableResult};
pub use grouping::{HeaderGroup, group_columns};
pub use page::{IntoPage, Page, PageElement};
pub use render::{BodyCell, BodyRow, Header, RenderTree, RenderedAttrs, SuperHeader};
pub use resolve::{resolve_cell, resolve_path};
pub use sorting::{SortDirection, sort_rows};
pub use table::Table;
pub use value::{ABSOLUTE_URL_FIELD, PK_FIELD, ComputedFn, Record, Value};
