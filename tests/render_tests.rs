//! End-to-end rendering scenarios.

use listview::{Attrs, Column, Page, Table, TableError, Value};
use rstest::rstest;

fn get_data() -> Vec<Value> {
	vec![
		Value::map([("foo", Value::text("Hello")), ("bar", Value::from(17))]),
		Value::map([("foo", Value::text("world!")), ("bar", Value::from(42))]),
	]
}

fn foo_bar_columns() -> Vec<Column> {
	vec![Column::new("foo"), Column::number("bar")]
}

#[test]
fn test_render_basic_table() {
	let table = Table::new(get_data(), foo_bar_columns())
		.unwrap()
		.attrs(Attrs::new().set("id", "table_id"));
	assert_eq!(
		table.render_to_string().unwrap(),
		"<table class=\"listview\" id=\"table_id\">\
		 <thead><tr>\
		 <th class=\"subheader first_column\"><a href=\"?order=foo\">Foo</a></th>\
		 <th class=\"subheader first_column\"><a href=\"?order=bar\">Bar</a></th>\
		 </tr></thead>\
		 <tr class=\"row1\"><td>Hello</td><td class=\"rj\">17</td></tr>\
		 <tr class=\"row2\"><td>world!</td><td class=\"rj\">42</td></tr>\
		 </table>"
	);
}

#[test]
fn test_render_grouped_headers_and_action_presets() {
	let is_report = false;
	let data = vec![Value::map([
		("foo", Value::text("Hello räksmörgås ><&>")),
		("bar", Value::from(17)),
		(
			listview::ABSOLUTE_URL_FIELD,
			Value::computed(|| Value::text("/somewhere/")),
		),
	])];
	let table = Table::new(
		data,
		vec![
			Column::new("foo"),
			Column::number("bar"),
			Column::icon("icon", "history", is_report).group("group"),
			Column::edit(is_report).group("group"),
			Column::delete(is_report),
		],
	)
	.unwrap()
	.attrs(Attrs::new().set("id", "table_id"));

	assert_eq!(
		table.render_to_string().unwrap(),
		"<table class=\"listview\" id=\"table_id\">\
		 <thead>\
		 <tr>\
		 <th class=\"superheader first_column\" colspan=\"1\"></th>\
		 <th class=\"superheader\" colspan=\"1\"></th>\
		 <th class=\"superheader\" colspan=\"2\">group</th>\
		 <th class=\"superheader\" colspan=\"1\"></th>\
		 </tr>\
		 <tr>\
		 <th class=\"subheader first_column\"><a href=\"?order=foo\">Foo</a></th>\
		 <th class=\"subheader first_column\"><a href=\"?order=bar\">Bar</a></th>\
		 <th class=\"thin subheader first_column\"></th>\
		 <th class=\"thin subheader\" title=\"Edit\"></th>\
		 <th class=\"thin subheader first_column\" title=\"Delete\"></th>\
		 </tr>\
		 </thead>\
		 <tr class=\"row1\">\
		 <td>Hello räksmörgås &gt;&lt;&amp;&gt;</td>\
		 <td class=\"rj\">17</td>\
		 <td><i class=\"fa fa-lg fa-history\"></i></td>\
		 <td><a href=\"/somewhere/edit/\"><i class=\"fa fa-lg fa-pencil-square-o\" title=\"Edit\"></i></a></td>\
		 <td><a href=\"/somewhere/delete/\"><i class=\"fa fa-lg fa-trash-o\" title=\"Delete\"></i></a></td>\
		 </tr>\
		 </table>"
	);
}

struct Abc {
	a: &'static str,
	b: &'static str,
	c: &'static str,
}

impl listview::Record for Abc {
	fn field(&self, name: &str) -> Option<Value> {
		match name {
			"a" => Some(Value::text(self.a)),
			"b" => Some(Value::text(self.b)),
			"c" => Some(Value::text(self.c)),
			_ => None,
		}
	}
}

fn mapping_row() -> Value {
	Value::map([
		("a", Value::text("a")),
		("b", Value::text("b")),
		("c", Value::text("c")),
	])
}

fn sequence_row() -> Value {
	Value::seq([Value::text("a"), Value::text("b"), Value::text("c")])
}

fn record_row() -> Value {
	Value::record(Abc {
		a: "a",
		b: "b",
		c: "c",
	})
}

#[rstest]
#[case::mapping(mapping_row())]
#[case::sequence(sequence_row())]
#[case::record(record_row())]
fn test_row_shapes_render_identically(#[case] row: Value) {
	let table = Table::new(
		vec![row],
		vec![Column::new("a"), Column::new("b"), Column::new("c")],
	)
	.unwrap()
	.sortable(false);
	assert_eq!(
		table.render_to_string().unwrap(),
		"<table class=\"listview\">\
		 <thead><tr>\
		 <th class=\"subheader first_column\">A</th>\
		 <th class=\"subheader first_column\">B</th>\
		 <th class=\"subheader first_column\">C</th>\
		 </tr></thead>\
		 <tr class=\"row1\"><td>a</td><td>b</td><td>c</td></tr>\
		 </table>"
	);
}

#[test]
fn test_display_name_overrides_the_humanized_label() {
	let data = vec![Value::map([("foo", Value::text("foo"))])];
	let table = Table::new(data, vec![Column::new("foo").display_name("Bar")])
		.unwrap()
		.sortable(false);
	let tree = table.render().unwrap();
	assert_eq!(tree.subheader[0].content, Page::text("Bar"));
}

#[test]
fn test_name_traversal_reads_nested_attributes() {
	let data = vec![Value::map([("foo", Value::map([("bar", Value::text("bar"))]))])];
	let table = Table::new(data, vec![Column::new("foo.bar").sortable(false)])
		.unwrap()
		.sortable(false);
	assert_eq!(
		table.render_to_string().unwrap(),
		"<table class=\"listview\">\
		 <thead><tr><th class=\"subheader first_column\">Bar</th></tr></thead>\
		 <tr class=\"row1\"><td>bar</td></tr>\
		 </table>"
	);
}

#[test]
fn test_css_class_tokens_precede_the_subheader_class() {
	let data = vec![Value::map([("foo", Value::text("foo"))])];
	let table = Table::new(data, vec![Column::new("foo").css_class("some_class")])
		.unwrap()
		.sortable(false);
	let tree = table.render().unwrap();
	assert_eq!(
		tree.subheader[0].attrs,
		vec![(
			"class".to_string(),
			"some_class subheader first_column".to_string()
		)]
	);
}

#[test]
fn test_explicit_header_url_wins_over_the_sort_link() {
	let data = vec![Value::map([("foo", Value::text("foo"))])];
	let table =
		Table::new(data, vec![Column::new("foo").url("/some/url")]).unwrap();
	let tree = table.render().unwrap();
	assert_eq!(tree.subheader[0].link.as_deref(), Some("/some/url"));
}

#[test]
fn test_title_becomes_a_tooltip_attribute() {
	let data = vec![Value::map([("foo", Value::text("foo"))])];
	let table = Table::new(data, vec![Column::new("foo").title("Some title")])
		.unwrap()
		.sortable(false);
	let tree = table.render().unwrap();
	assert_eq!(
		tree.subheader[0].attrs,
		vec![
			("class".to_string(), "subheader first_column".to_string()),
			("title".to_string(), "Some title".to_string()),
		]
	);
}

#[test]
fn test_hidden_columns_leave_headers_and_rows() {
	let data = vec![Value::map([
		("foo", Value::text("foo")),
		("bar", Value::text("bar")),
	])];
	let table = Table::new(
		data,
		vec![Column::new("foo"), Column::new("bar").show(false)],
	)
	.unwrap()
	.sortable(false);
	let tree = table.render().unwrap();
	assert_eq!(tree.subheader.len(), 1);
	assert_eq!(tree.rows[0].cells.len(), 1);
	assert_eq!(tree.rows[0].cells[0].content, Page::text("foo"));
}

#[test]
fn test_renamed_attr_reads_another_row_field() {
	let data = vec![Value::map([("foo", Value::text("x"))])];
	let table = Table::new(
		data,
		vec![Column::new("foo"), Column::new("bar").attr("foo")],
	)
	.unwrap()
	.sortable(false);
	let tree = table.render().unwrap();
	assert_eq!(tree.subheader[1].content, Page::text("Bar"));
	assert_eq!(tree.rows[0].cells[1].content, Page::text("x"));
}

#[test]
fn test_table_and_row_attrs_with_per_row_values() {
	let data = vec![Value::seq([Value::from(1)]), Value::seq([Value::from(2)])];
	let table = Table::new(data, vec![Column::new("yada")])
		.unwrap()
		.sortable(false)
		.attrs(Attrs::new().set("class", "classy").set("foo", "bar"))
		.row_attrs(
			Attrs::new()
				.set("class", "classier")
				.set_with("foo", |_row: &Value| "barier".to_string()),
		);
	assert_eq!(
		table.render_to_string().unwrap(),
		"<table class=\"classy\" foo=\"bar\">\
		 <thead><tr><th class=\"subheader first_column\">Yada</th></tr></thead>\
		 <tr class=\"row1 classier\" foo=\"barier\"><td class=\"rj\">1</td></tr>\
		 <tr class=\"row2 classier\" foo=\"barier\"><td class=\"rj\">2</td></tr>\
		 </table>"
	);
}

#[test]
fn test_rows_with_identity_carry_data_pk() {
	let data = vec![Value::map([
		("pk", Value::from(123)),
		("foo", Value::text("x")),
	])];
	let table = Table::new(data, vec![Column::new("foo")])
		.unwrap()
		.sortable(false);
	let tree = table.render().unwrap();
	assert_eq!(
		tree.rows[0].attrs,
		vec![
			("class".to_string(), "row1".to_string()),
			("data-pk".to_string(), "123".to_string()),
		]
	);
}

#[test]
fn test_missing_self_url_aborts_the_render() {
	let data = vec![Value::map([("foo", Value::text("x"))])];
	let table = Table::new(data, vec![Column::new("foo"), Column::edit(false)]).unwrap();
	let err = table.render().unwrap_err();
	assert!(matches!(err, TableError::AttributeResolution { .. }));
}

#[test]
fn test_unresolvable_column_aborts_the_render() {
	let data = vec![Value::map([("foo", Value::text("x"))])];
	let table = Table::new(data, vec![Column::new("missing")]).unwrap();
	assert!(matches!(
		table.render().unwrap_err(),
		TableError::AttributeResolution { path, .. } if path == "missing"
	));
}

#[test]
fn test_template_cells_emit_raw_markup() {
	let data = vec![Value::map([
		("foo", Value::text("x")),
		("bar", Value::text("y")),
	])];
	let table = Table::new(
		data,
		vec![Column::new("foo").cell_template("<b>{value}</b>/{bar}")],
	)
	.unwrap()
	.sortable(false);
	let tree = table.render().unwrap();
	assert_eq!(
		tree.rows[0].cells[0].content.render_to_string(),
		"<b>x</b>/y"
	);
}

#[test]
fn test_rows_ingested_from_serializable_data() {
	#[derive(serde::Serialize)]
	struct Item {
		foo: &'static str,
		bar: i64,
	}
	let data: Vec<Value> = [
		Item {
			foo: "Hello",
			bar: 17,
		},
		Item {
			foo: "world!",
			bar: 42,
		},
	]
	.iter()
	.map(|item| Value::from_serialize(item).unwrap())
	.collect();
	let table = Table::new(data, foo_bar_columns()).unwrap();
	let tree = table.render().unwrap();
	assert_eq!(tree.rows[0].cells[0].content, Page::text("Hello"));
	assert_eq!(tree.rows[1].cells[1].content, Page::text("42"));
}
