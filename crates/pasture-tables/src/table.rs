//! Table instance
//!
//! [`Table`] ties the column specifications, the host's rows, the sort state
//! and the pagination state together. The host reads it through
//! [`Table::render`] and drives it through [`Table::handle`] or
//! [`Table::click`]; button callbacks are the only way the table talks back.

use std::collections::HashSet;
use std::fmt;

use crate::column::{CellContext, Column, ColumnKind};
use crate::error::{Result, TableError};
use crate::pagination::Pagination;
use crate::settings::TableSettings;
use crate::sorting::{SortDirection, SortState, sort_indices};
use crate::view::View;
use crate::window::{PageControl, WindowItem, page_window};

/// Bootstrap classes of the `<table>` element
pub const TABLE_CLASS: &str = "table table-striped table-bordered table-hover";

/// Input delivered to a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
	/// Header of the column with this key was clicked
	HeaderClicked(String),
	/// A pagination control was clicked
	Page(PageControl),
	/// Button in the given button column was clicked for a data row
	ButtonClicked {
		/// Index of the row in the data as supplied
		row: usize,
		/// Key of the button column
		column: String,
	},
}

/// What handling an event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
	/// Sort state changed
	Sorted {
		/// Active column key
		key: String,
		/// New direction
		direction: SortDirection,
	},
	/// Pagination moved, possibly to the same page when already at a boundary
	Navigated {
		/// Page before the event
		from: usize,
		/// Page after the event
		to: usize,
	},
	/// A button callback ran successfully
	Invoked,
	/// The target is not interactive
	Ignored,
}

/// Sortable, paginated table over host rows of type `R`
pub struct Table<R> {
	columns: Vec<Column<R>>,
	data: Vec<R>,
	settings: TableSettings,
	sort: SortState,
	pagination: Pagination,
}

fn validate_columns<R>(columns: &[Column<R>]) -> Result<()> {
	let mut seen = HashSet::new();
	for column in columns {
		if !seen.insert(column.key()) {
			return Err(TableError::DuplicateColumn(column.key().to_string()));
		}
	}
	Ok(())
}

impl<R> Table<R> {
	/// Creates a table with default settings
	///
	/// # Errors
	///
	/// Returns [`TableError::DuplicateColumn`] when two columns share a key.
	pub fn new(columns: Vec<Column<R>>, data: Vec<R>) -> Result<Self> {
		Self::with_settings(columns, data, TableSettings::default())
	}

	/// Creates a table with explicit settings
	pub fn with_settings(
		columns: Vec<Column<R>>,
		data: Vec<R>,
		settings: TableSettings,
	) -> Result<Self> {
		settings.validate()?;
		validate_columns(&columns)?;
		let pagination = Pagination::new(settings.page_size, data.len())?;
		tracing::debug!(
			table_id = %settings.table_id,
			columns = columns.len(),
			rows = data.len(),
			"Table created"
		);
		Ok(Self {
			columns,
			data,
			settings,
			sort: SortState::new(),
			pagination,
		})
	}

	/// Starts a [`TableBuilder`]
	pub fn builder() -> TableBuilder<R> {
		TableBuilder::new()
	}

	/// Id namespace of generated test ids
	pub fn id(&self) -> &str {
		&self.settings.table_id
	}

	/// Column specifications in display order
	pub fn columns(&self) -> &[Column<R>] {
		&self.columns
	}

	/// Rows in insertion order
	pub fn data(&self) -> &[R] {
		&self.data
	}

	/// Active settings
	pub fn settings(&self) -> &TableSettings {
		&self.settings
	}

	/// Current sort state
	pub fn sort_state(&self) -> &SortState {
		&self.sort
	}

	/// Current pagination state
	pub fn pagination(&self) -> Pagination {
		self.pagination
	}

	/// Current page number (1-indexed)
	pub fn current_page(&self) -> usize {
		self.pagination.current_page()
	}

	/// Looks up a column by key
	pub fn column(&self, key: &str) -> Option<&Column<R>> {
		self.columns.iter().find(|c| c.key() == key)
	}

	/// Replaces the rows
	///
	/// Pagination returns to page 1; the sort state is kept.
	pub fn set_data(&mut self, data: Vec<R>) {
		tracing::debug!(
			table_id = %self.settings.table_id,
			rows = data.len(),
			"Table data replaced"
		);
		self.pagination = self.pagination.reset(data.len());
		self.data = data;
	}

	/// Replaces the column specifications
	///
	/// Pagination returns to page 1. A sort on a column that no longer exists,
	/// or is no longer sortable, is cleared.
	pub fn set_columns(&mut self, columns: Vec<Column<R>>) -> Result<()> {
		validate_columns(&columns)?;
		tracing::debug!(
			table_id = %self.settings.table_id,
			columns = columns.len(),
			"Table columns replaced"
		);
		self.columns = columns;
		self.pagination = self.pagination.reset(self.data.len());
		let stale = self
			.sort
			.active()
			.is_some_and(|key| !self.column(key).is_some_and(|c| c.is_sortable()));
		if stale {
			tracing::debug!(table_id = %self.settings.table_id, "Clearing sort on removed column");
			self.sort = SortState::new();
		}
		Ok(())
	}

	/// Order of all rows as data indices
	pub fn sorted_indices(&self) -> Vec<usize> {
		let active = self
			.sort
			.active()
			.and_then(|key| self.column(key))
			.filter(|c| c.is_sortable());
		match active {
			Some(column) => sort_indices(
				&self.data,
				|row| column.value(row).unwrap_or_default(),
				self.sort.direction(),
			),
			None => (0..self.data.len()).collect(),
		}
	}

	/// Rows on the current page as `(data_index, row)` pairs in display order
	pub fn visible_rows(&self) -> Vec<(usize, &R)> {
		let order = self.sorted_indices();
		order
			.get(self.pagination.row_range())
			.unwrap_or_default()
			.iter()
			.filter_map(|&index| self.data.get(index).map(|row| (index, row)))
			.collect()
	}

	/// Page controls to show, empty when everything fits on one page
	pub fn page_controls(&self) -> Vec<WindowItem> {
		page_window(&self.pagination)
	}

	/// Display text of a cell, `None` for unknown rows, unknown keys and
	/// button columns
	pub fn cell_text(&self, row: usize, key: &str) -> Option<String> {
		let record = self.data.get(row)?;
		self.column(key)?
			.render_text(record, &self.settings.date_format)
	}

	/// Activates sorting by `key`
	///
	/// Returns [`Outcome::Ignored`] for unsortable columns. The current page
	/// index is kept, so the page may now show different rows.
	pub fn activate_sort(&mut self, key: &str) -> Result<Outcome> {
		let column = self
			.column(key)
			.ok_or_else(|| TableError::UnknownColumn(key.to_string()))?;
		if !column.is_sortable() {
			tracing::debug!(key, "Header click on unsortable column");
			return Ok(Outcome::Ignored);
		}
		self.sort = std::mem::take(&mut self.sort).activate(key);
		let direction = self.sort.direction();
		tracing::debug!(table_id = %self.settings.table_id, key, ?direction, "Sort activated");
		Ok(Outcome::Sorted {
			key: key.to_string(),
			direction,
		})
	}

	/// Applies a pagination control
	pub fn navigate(&mut self, control: PageControl) -> Outcome {
		if !control.is_interactive() {
			return Outcome::Ignored;
		}
		self.move_to(control.apply(self.pagination))
	}

	/// Jumps to `page`, clamped into range
	pub fn go_to_page(&mut self, page: usize) -> Outcome {
		self.move_to(self.pagination.go_to(page))
	}

	fn move_to(&mut self, next: Pagination) -> Outcome {
		let from = self.pagination.current_page();
		self.pagination = next;
		let to = next.current_page();
		tracing::debug!(table_id = %self.settings.table_id, from, to, "Page changed");
		Outcome::Navigated { from, to }
	}

	/// Runs the callback of button column `key` for data row `row`
	///
	/// Returns [`Outcome::Ignored`] when `key` is not a button column.
	///
	/// # Errors
	///
	/// Callback failures are returned as [`TableError::Callback`].
	pub fn invoke_button(&self, row: usize, key: &str) -> Result<Outcome> {
		let column = self
			.column(key)
			.ok_or_else(|| TableError::UnknownColumn(key.to_string()))?;
		let ColumnKind::Button { on_click, .. } = column.kind() else {
			return Ok(Outcome::Ignored);
		};
		let record = self
			.data
			.get(row)
			.ok_or_else(|| TableError::UnknownTarget(format!("row {} of column '{}'", row, key)))?;
		let values = self
			.columns
			.iter()
			.filter_map(|c| c.value(record).map(|value| (c.key(), value)))
			.collect();
		let context = CellContext::new(record, row, column.key(), values);
		tracing::debug!(table_id = %self.settings.table_id, row, column = key, "Button clicked");
		on_click(&context).map_err(TableError::Callback)?;
		Ok(Outcome::Invoked)
	}

	/// Routes an event to the matching operation
	pub fn handle(&mut self, event: TableEvent) -> Result<Outcome> {
		match event {
			TableEvent::HeaderClicked(key) => self.activate_sort(&key),
			TableEvent::Page(control) => Ok(self.navigate(control)),
			TableEvent::ButtonClicked { row, column } => self.invoke_button(row, &column),
		}
	}

	/// Clicks the rendered element with `test_id`
	///
	/// Elements that are rendered but not interactive, such as plain cells and
	/// ellipsis markers, yield [`Outcome::Ignored`].
	///
	/// # Errors
	///
	/// Returns [`TableError::UnknownTarget`] when no element with `test_id` is
	/// currently rendered.
	pub fn click(&mut self, test_id: &str) -> Result<Outcome> {
		if self.render().find_by_test_id(test_id).is_none() {
			return Err(TableError::UnknownTarget(test_id.to_string()));
		}
		match self.resolve(test_id) {
			Some(event) => self.handle(event),
			None => Ok(Outcome::Ignored),
		}
	}

	fn resolve(&self, test_id: &str) -> Option<TableEvent> {
		if let Some(column) = self
			.columns
			.iter()
			.find(|c| c.header_test_id(self.id()) == test_id)
		{
			return Some(TableEvent::HeaderClicked(column.key().to_string()));
		}

		let control = test_id
			.strip_prefix(self.id())
			.and_then(|rest| rest.strip_prefix('-'))
			.and_then(PageControl::from_test_id_suffix);
		if let Some(control) = control {
			return Some(TableEvent::Page(control));
		}

		self.visible_rows().into_iter().find_map(|(index, _)| {
			self.columns
				.iter()
				.find(|c| c.button_test_id(index).as_deref() == Some(test_id))
				.map(|c| TableEvent::ButtonClicked {
					row: index,
					column: c.key().to_string(),
				})
		})
	}

	/// Renders the table and its pagination controls
	pub fn render(&self) -> View {
		let rows = self.visible_rows();
		tracing::trace!(
			table_id = %self.settings.table_id,
			page = self.pagination.current_page(),
			rows = rows.len(),
			"Rendering table"
		);

		let head = View::element("thead").child(
			View::element("tr").children(self.columns.iter().map(|c| self.render_header(c))),
		);
		let body = View::element("tbody").children(rows.into_iter().map(|(index, row)| {
			View::element("tr").children(self.columns.iter().map(|c| self.render_cell(c, index, row)))
		}));

		View::element("div")
			.attr("class", "pasture-table")
			.child(
				View::element("table")
					.attr("class", TABLE_CLASS)
					.child(head)
					.child(body),
			)
			.child(self.render_pagination())
			.into()
	}

	/// Renders the table to an HTML string
	pub fn render_to_string(&self) -> String {
		self.render().render_to_string()
	}

	fn render_header(&self, column: &Column<R>) -> View {
		View::element("th")
			.test_id(column.header_test_id(self.id()))
			.attr_if(column.is_sortable(), "role", "button")
			.child(column.header().to_string())
			.child(View::element("span").child(self.sort.indicator_for(column.key())))
			.into()
	}

	fn render_cell(&self, column: &Column<R>, index: usize, row: &R) -> View {
		let content = match (column.kind(), column.button_test_id(index)) {
			(ColumnKind::Button { variant, .. }, Some(button_id)) => View::element("button")
				.attr("class", variant.class())
				.attr("type", "button")
				.test_id(button_id)
				.child(column.header().to_string())
				.into(),
			_ => View::from(
				column
					.render_text(row, &self.settings.date_format)
					.unwrap_or_default(),
			),
		};
		View::element("td")
			.test_id(column.cell_test_id(self.id(), index))
			.child(content)
			.into()
	}

	fn render_pagination(&self) -> View {
		let items = self.page_controls();
		if items.is_empty() {
			return View::empty();
		}
		View::element("ul")
			.attr("class", "pagination")
			.children(items.iter().map(|item| self.render_page_item(item)))
			.into()
	}

	fn render_page_item(&self, item: &WindowItem) -> View {
		let test_id = item.control.test_id(self.id());
		if !item.control.is_interactive() {
			return View::element("li")
				.attr("class", "page-item disabled")
				.child(
					View::element("span")
						.attr("class", "page-link")
						.test_id(test_id)
						.child(item.label.clone()),
				)
				.into();
		}

		let mut class = String::from("page-item");
		if item.is_current() {
			class.push_str(" active");
		}
		if item.disabled {
			class.push_str(" disabled");
		}
		View::element("li")
			.attr("class", class)
			.child(
				View::element("button")
					.attr("class", "page-link")
					.attr("type", "button")
					.test_id(test_id)
					.attr_if(item.disabled, "disabled", "disabled")
					.child(item.label.clone()),
			)
			.into()
	}
}

impl<R> fmt::Debug for Table<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Table")
			.field("id", &self.settings.table_id)
			.field("columns", &self.columns)
			.field("rows", &self.data.len())
			.field("sort", &self.sort)
			.field("pagination", &self.pagination)
			.finish()
	}
}

/// Builder for [`Table`]
///
/// # Example
///
/// ```rust
/// use pasture_tables::{Column, Table};
///
/// let table = Table::builder()
///     .column(Column::plain("Value", "value", |n: &u32| *n).unwrap())
///     .data((0..25).collect())
///     .table_id("NumbersTable")
///     .page_size(5)
///     .build()
///     .unwrap();
/// assert_eq!(table.pagination().total_pages(), 5);
/// ```
pub struct TableBuilder<R> {
	columns: Vec<Column<R>>,
	data: Vec<R>,
	settings: TableSettings,
}

impl<R> TableBuilder<R> {
	/// Creates a builder with default settings and no columns or rows
	pub fn new() -> Self {
		Self {
			columns: Vec::new(),
			data: Vec::new(),
			settings: TableSettings::default(),
		}
	}

	/// Appends a column
	pub fn column(mut self, column: Column<R>) -> Self {
		self.columns.push(column);
		self
	}

	/// Replaces all columns
	pub fn columns(mut self, columns: Vec<Column<R>>) -> Self {
		self.columns = columns;
		self
	}

	/// Sets the rows
	pub fn data(mut self, data: Vec<R>) -> Self {
		self.data = data;
		self
	}

	/// Replaces the settings wholesale
	pub fn settings(mut self, settings: TableSettings) -> Self {
		self.settings = settings;
		self
	}

	/// Sets the test id namespace
	pub fn table_id(mut self, table_id: impl Into<String>) -> Self {
		self.settings.table_id = table_id.into();
		self
	}

	/// Sets the rows per page
	pub fn page_size(mut self, page_size: usize) -> Self {
		self.settings.page_size = page_size;
		self
	}

	/// Sets the default date format
	pub fn date_format(mut self, format: impl Into<String>) -> Self {
		self.settings.date_format = format.into();
		self
	}

	/// Validates and builds the table
	pub fn build(self) -> Result<Table<R>> {
		Table::with_settings(self.columns, self.data, self.settings)
	}
}

impl<R> Default for TableBuilder<R> {
	fn default() -> Self {
		Self::new()
	}
}
