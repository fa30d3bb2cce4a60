//! Column specification and builders

use std::fmt::Debug;
use std::sync::Arc;

use super::button::{ButtonCallback, ButtonVariant, CellContext};
use super::datetime;
use crate::error::{Result, TableError};
use crate::value::CellValue;

/// Extracts a cell value from a row
pub type Accessor<R> = Arc<dyn Fn(&R) -> CellValue + Send + Sync>;

/// What a column renders
///
/// Plain and date columns read the row through their accessor. Button columns
/// read nothing and only call back into the host.
pub enum ColumnKind<R> {
	/// Value rendered verbatim
	Plain {
		/// Value extractor
		accessor: Accessor<R>,
	},
	/// Value interpreted as a timestamp and formatted
	Date {
		/// Value extractor
		accessor: Accessor<R>,
		/// Per-column format, falling back to the table's date format
		format: Option<String>,
	},
	/// Interactive button bound to a host callback
	Button {
		/// Visual style
		variant: ButtonVariant,
		/// Click handler
		on_click: ButtonCallback<R>,
		/// Id namespace used for this column's cell test ids
		table_id: String,
	},
}

impl<R> Clone for ColumnKind<R> {
	fn clone(&self) -> Self {
		match self {
			ColumnKind::Plain { accessor } => ColumnKind::Plain {
				accessor: Arc::clone(accessor),
			},
			ColumnKind::Date { accessor, format } => ColumnKind::Date {
				accessor: Arc::clone(accessor),
				format: format.clone(),
			},
			ColumnKind::Button {
				variant,
				on_click,
				table_id,
			} => ColumnKind::Button {
				variant: *variant,
				on_click: Arc::clone(on_click),
				table_id: table_id.clone(),
			},
		}
	}
}

/// Column definition for a [`Table`](crate::Table)
///
/// # Example
///
/// ```rust
/// use pasture_tables::column::{ButtonVariant, Column};
///
/// struct Course {
///     id: i64,
///     name: String,
/// }
///
/// let id = Column::plain("id", "id", |c: &Course| c.id).unwrap();
/// let name = Column::plaintext("Name", |c: &Course| c.name.clone()).unwrap();
/// let edit: Column<Course> = Column::button(
///     "Edit",
///     ButtonVariant::Primary,
///     |_cell| Ok(()),
///     "CoursesTable",
/// )
/// .unwrap();
/// assert_eq!(name.key(), "Name");
/// assert!(!edit.is_sortable());
/// # let _ = id;
/// ```
pub struct Column<R> {
	header: String,
	key: String,
	kind: ColumnKind<R>,
	sortable: bool,
}

impl<R> Clone for Column<R> {
	fn clone(&self) -> Self {
		Self {
			header: self.header.clone(),
			key: self.key.clone(),
			kind: self.kind.clone(),
			sortable: self.sortable,
		}
	}
}

impl<R> Debug for Column<R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let kind = match &self.kind {
			ColumnKind::Plain { .. } => "plain",
			ColumnKind::Date { .. } => "date",
			ColumnKind::Button { .. } => "button",
		};
		f.debug_struct("Column")
			.field("header", &self.header)
			.field("key", &self.key)
			.field("kind", &kind)
			.field("sortable", &self.sortable)
			.finish_non_exhaustive()
	}
}

fn require_non_empty(what: &str, value: &str) -> Result<()> {
	if value.trim().is_empty() {
		return Err(TableError::InvalidColumn(format!("{} must not be empty", what)));
	}
	Ok(())
}

fn boxed_accessor<R, V, F>(accessor: F) -> Accessor<R>
where
	R: 'static,
	V: Into<CellValue> + 'static,
	F: Fn(&R) -> V + Send + Sync + 'static,
{
	Arc::new(move |row: &R| accessor(row).into())
}

impl<R: 'static> Column<R> {
	/// Creates a plain column with an explicit accessor key
	///
	/// The key identifies the column for sorting and test ids; the header is
	/// only displayed.
	pub fn plain<V, F>(
		header: impl Into<String>,
		key: impl Into<String>,
		accessor: F,
	) -> Result<Self>
	where
		V: Into<CellValue> + 'static,
		F: Fn(&R) -> V + Send + Sync + 'static,
	{
		let header = header.into();
		let key = key.into();
		require_non_empty("column header", &header)?;
		require_non_empty("accessor key", &key)?;
		Ok(Self {
			header,
			key,
			kind: ColumnKind::Plain {
				accessor: boxed_accessor(accessor),
			},
			sortable: true,
		})
	}

	/// Creates a plain column keyed by its header
	pub fn plaintext<V, F>(header: impl Into<String>, accessor: F) -> Result<Self>
	where
		V: Into<CellValue> + 'static,
		F: Fn(&R) -> V + Send + Sync + 'static,
	{
		let header = header.into();
		let key = header.clone();
		Self::plain(header, key, accessor)
	}

	/// Creates a date column keyed by its header
	///
	/// Values that do not parse as timestamps render as empty cells.
	pub fn date<V, F>(header: impl Into<String>, accessor: F) -> Result<Self>
	where
		V: Into<CellValue> + 'static,
		F: Fn(&R) -> V + Send + Sync + 'static,
	{
		let header = header.into();
		require_non_empty("column header", &header)?;
		Ok(Self {
			key: header.clone(),
			header,
			kind: ColumnKind::Date {
				accessor: boxed_accessor(accessor),
				format: None,
			},
			sortable: true,
		})
	}

	/// Creates a button column
	///
	/// `table_id` namespaces the cell test ids:
	/// `{table_id}-cell-row-{i}-col-{label}-button`.
	pub fn button<F>(
		label: impl Into<String>,
		variant: ButtonVariant,
		on_click: F,
		table_id: impl Into<String>,
	) -> Result<Self>
	where
		F: Fn(&CellContext<'_, R>) -> anyhow::Result<()> + Send + Sync + 'static,
	{
		let label = label.into();
		let table_id = table_id.into();
		require_non_empty("button label", &label)?;
		require_non_empty("button table id", &table_id)?;
		Ok(Self {
			key: label.clone(),
			header: label,
			kind: ColumnKind::Button {
				variant,
				on_click: Arc::new(on_click),
				table_id,
			},
			sortable: false,
		})
	}
}

impl<R> Column<R> {
	/// Overrides the display format of a date column
	///
	/// Has no effect on other column kinds.
	pub fn with_date_format(mut self, fmt: impl Into<String>) -> Result<Self> {
		if let ColumnKind::Date { format, .. } = &mut self.kind {
			let fmt = fmt.into();
			datetime::validate_date_format(&fmt)?;
			*format = Some(fmt);
		}
		Ok(self)
	}

	/// Sets whether this column reacts to header clicks
	///
	/// Button columns stay unsortable.
	pub fn sortable(mut self, sortable: bool) -> Self {
		self.sortable = sortable;
		self
	}

	/// Header label
	pub fn header(&self) -> &str {
		&self.header
	}

	/// Accessor key
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Column kind
	pub fn kind(&self) -> &ColumnKind<R> {
		&self.kind
	}

	/// Returns whether header clicks sort by this column
	pub fn is_sortable(&self) -> bool {
		self.sortable && !self.is_button()
	}

	/// Returns whether this is a button column
	pub fn is_button(&self) -> bool {
		matches!(self.kind, ColumnKind::Button { .. })
	}

	/// Extracts the raw value, `None` for button columns
	pub fn value(&self, row: &R) -> Option<CellValue> {
		match &self.kind {
			ColumnKind::Plain { accessor } | ColumnKind::Date { accessor, .. } => Some(accessor(row)),
			ColumnKind::Button { .. } => None,
		}
	}

	/// Display text of the cell, `None` for button columns
	///
	/// Date columns use their own format if set, otherwise `default_date_format`.
	pub fn render_text(&self, row: &R, default_date_format: &str) -> Option<String> {
		match &self.kind {
			ColumnKind::Plain { accessor } => Some(accessor(row).to_string()),
			ColumnKind::Date { accessor, format } => {
				let value = accessor(row);
				let fmt = format.as_deref().unwrap_or(default_date_format);
				let text = datetime::format_timestamp(&value, fmt).unwrap_or_else(|| {
					if !value.is_empty() {
						tracing::warn!(column = %self.key, ?value, "Unparsable date value");
					}
					String::new()
				});
				Some(text)
			}
			ColumnKind::Button { .. } => None,
		}
	}

	/// Test id of this column's cell in row `row_index`
	pub fn cell_test_id(&self, table_id: &str, row_index: usize) -> String {
		format!("{}-cell-row-{}-col-{}", table_id, row_index, self.key)
	}

	/// Test id of the button inside a button cell, `None` for other kinds
	///
	/// Uses the column's own id namespace rather than the table's.
	pub fn button_test_id(&self, row_index: usize) -> Option<String> {
		match &self.kind {
			ColumnKind::Button { table_id, .. } => Some(format!(
				"{}-cell-row-{}-col-{}-button",
				table_id, row_index, self.key
			)),
			_ => None,
		}
	}

	/// Test id of the header cell
	pub fn header_test_id(&self, table_id: &str) -> String {
		format!("{}-header-{}", table_id, self.key)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::column::datetime::DEFAULT_DATE_FORMAT;
	use rstest::rstest;

	#[derive(Debug)]
	struct TestRow {
		value: String,
		created_at: String,
	}

	fn row() -> TestRow {
		TestRow {
			value: "Hello".to_string(),
			created_at: "2021-04-01T04:00:00.000".to_string(),
		}
	}

	#[test]
	fn test_plain_column_creation() {
		let column = Column::plain("Column 1", "col1", |r: &TestRow| r.value.clone()).unwrap();
		assert_eq!(column.header(), "Column 1");
		assert_eq!(column.key(), "col1");
		assert!(column.is_sortable());
		assert!(!column.is_button());
	}

	#[test]
	fn test_plain_column_render() {
		let column = Column::plaintext("Log", |r: &TestRow| r.value.clone()).unwrap();
		assert_eq!(column.key(), "Log");
		assert_eq!(
			column.render_text(&row(), DEFAULT_DATE_FORMAT).as_deref(),
			Some("Hello")
		);
	}

	#[test]
	fn test_date_column_render() {
		let column = Column::date("Date", |r: &TestRow| r.created_at.clone()).unwrap();
		assert_eq!(
			column.render_text(&row(), DEFAULT_DATE_FORMAT).as_deref(),
			Some("4/1/2021, 4:00:00 AM")
		);
	}

	#[test]
	fn test_date_column_invalid_value_is_empty() {
		let column = Column::date("Date", |r: &TestRow| r.value.clone()).unwrap();
		assert_eq!(
			column.render_text(&row(), DEFAULT_DATE_FORMAT).as_deref(),
			Some("")
		);
	}

	#[test]
	fn test_date_column_own_format() {
		let column = Column::date("Date", |r: &TestRow| r.created_at.clone())
			.unwrap()
			.with_date_format("%Y/%m/%d")
			.unwrap();
		assert_eq!(
			column.render_text(&row(), DEFAULT_DATE_FORMAT).as_deref(),
			Some("2021/04/01")
		);
	}

	#[rstest]
	#[case("%Q")]
	#[case("%Y %z")]
	#[case("%Z")]
	fn test_date_column_rejects_bad_format(#[case] format: &str) {
		let result = Column::date("Date", |r: &TestRow| r.created_at.clone())
			.unwrap()
			.with_date_format(format);
		assert!(matches!(result, Err(TableError::InvalidDateFormat(_))));
	}

	#[test]
	fn test_button_column_ids() {
		let column: Column<TestRow> =
			Column::button("Click", ButtonVariant::Primary, |_| Ok(()), "testId").unwrap();
		assert!(!column.is_sortable());
		assert!(column.value(&row()).is_none());
		assert_eq!(column.cell_test_id("testid", 0), "testid-cell-row-0-col-Click");
		assert_eq!(
			column.button_test_id(0).as_deref(),
			Some("testId-cell-row-0-col-Click-button")
		);
	}

	#[test]
	fn test_button_stays_unsortable() {
		let column: Column<TestRow> = Column::button("Delete", ButtonVariant::Danger, |_| Ok(()), "t")
			.unwrap()
			.sortable(true);
		assert!(!column.is_sortable());
	}

	#[test]
	fn test_empty_header_is_rejected() {
		let result = Column::plaintext("  ", |r: &TestRow| r.value.clone());
		assert!(matches!(result, Err(TableError::InvalidColumn(_))));
		let result = Column::plain("Name", "", |r: &TestRow| r.value.clone());
		assert!(matches!(result, Err(TableError::InvalidColumn(_))));
	}

	#[test]
	fn test_header_test_id() {
		let column = Column::plain("Column 1", "col1", |r: &TestRow| r.value.clone()).unwrap();
		assert_eq!(column.header_test_id("testid"), "testid-header-col1");
	}
}
