//! Preset column factories.
//!
//! Each preset is a pure constructor returning a fully formed [`Column`];
//! presets compose with everything else through the ordinary collection and
//! override rules. The `is_report` flag hides action columns from report
//! output and is always an explicit parameter, never ambient state.

use crate::attrs::Attrs;
use crate::column::Column;
use crate::error::TableResult;
use crate::page::{IntoPage, Page, PageElement, html};
use crate::resolve::resolve_path;
use crate::value::{ABSOLUTE_URL_FIELD, PK_FIELD, Value};

impl Column {
	/// An icon column: blank header, a fixed glyph in every cell.
	pub fn icon(name: impl Into<String>, glyph: impl Into<String>, is_report: bool) -> Self {
		let glyph = glyph.into();
		Column::new(name)
			.attr("")
			.display_name("")
			.css_class("thin")
			.sortable(false)
			.show(!is_report)
			.cell_with(move |_, _| Ok(fa_icon(&glyph, None).into_page()))
	}

	/// An edit action column linking to `<absolute_url>edit/`.
	pub fn edit(is_report: bool) -> Self {
		action_column("edit", "pencil-square-o", "Edit", is_report)
	}

	/// A delete action column linking to `<absolute_url>delete/`.
	pub fn delete(is_report: bool) -> Self {
		action_column("delete", "trash-o", "Delete", is_report)
	}

	/// A download action column linking to `<absolute_url>download/`.
	pub fn download(is_report: bool) -> Self {
		action_column("download", "download", "Download", is_report)
	}

	/// A run action column linking to `<absolute_url>run/` with visible
	/// text.
	pub fn run(is_report: bool) -> Self {
		Column::new("run")
			.attr("")
			.display_name("Run")
			.title("Run")
			.css_class("thin")
			.sortable(false)
			.show(!is_report)
			.cell_with(|_, row| {
				let url = action_url(row, "run")?;
				Ok(html::a().attr("href", url).child("Run").into_page())
			})
	}

	/// A selection column: a select-all control in the header, one checkbox
	/// per row named after the row's identity (`pk_<pk>`).
	pub fn select(is_report: bool) -> Self {
		Column::new("select")
			.attr("")
			.display_name("")
			.header_markup(fa_icon("check-square-o", None).into_page())
			.title("Select all")
			.css_class("thin")
			.css_class("nopad")
			.sortable(false)
			.show(!is_report)
			.cell_with(|_, row| {
				let pk = resolve_path(row, PK_FIELD)?.display();
				Ok(html::input()
					.attr("type", "checkbox")
					.attr("class", "checkbox")
					.attr("name", format!("pk_{pk}"))
					.into_page())
			})
	}

	/// A boolean column rendering truthy values as a check glyph.
	pub fn check(name: impl Into<String>) -> Self {
		Column::new(name)
			.sortable(false)
			.cell_attrs(Attrs::new().class("cj"))
			.cell_with(|value, _| {
				if value.is_truthy() {
					Ok(fa_icon("check", Some("Yes")).into_page())
				} else {
					Ok(Page::Empty)
				}
			})
	}

	/// A link column: each cell links to the resolved value's own
	/// `absolute_url` with caller-supplied display text.
	pub fn link(name: impl Into<String>, text: impl Into<String>) -> Self {
		let text = text.into();
		Column::new(name).cell_with(move |value, _| {
			let url = resolve_path(value, ABSOLUTE_URL_FIELD)?.display();
			Ok(html::a().attr("href", url).child(text.clone()).into_page())
		})
	}

	/// A numeric column: right-justified cells, sortable.
	pub fn number(name: impl Into<String>) -> Self {
		Column::new(name)
			.sortable(true)
			.cell_attrs(Attrs::new().class("rj"))
	}
}

/// Builds a blank-header action column whose cells link an icon to
/// `<absolute_url><action>/`.
fn action_column(
	action: &'static str,
	glyph: &'static str,
	label: &'static str,
	is_report: bool,
) -> Column {
	Column::new(action)
		.attr("")
		.display_name("")
		.title(label)
		.css_class("thin")
		.sortable(false)
		.show(!is_report)
		.cell_with(move |_, row| {
			let url = action_url(row, action)?;
			Ok(html::a()
				.attr("href", url)
				.child(fa_icon(glyph, Some(label)))
				.into_page())
		})
}

/// Joins the row's self URL with an action path segment.
fn action_url(row: &Value, action: &str) -> TableResult<String> {
	let url = resolve_path(row, ABSOLUTE_URL_FIELD)?.display();
	if url.ends_with('/') {
		Ok(format!("{url}{action}/"))
	} else {
		Ok(format!("{url}/{action}/"))
	}
}

/// Builds a font-awesome glyph element.
fn fa_icon(glyph: &str, title: Option<&str>) -> PageElement {
	let icon = html::i().attr("class", format!("fa fa-lg fa-{glyph}"));
	match title {
		Some(title) => icon.attr("title", title.to_string()),
		None => icon,
	}
}
